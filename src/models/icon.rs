//
//  nounproject
//  models/icon.rs
//
//  Created by Ngonidzashe Mangudya on 2026/08/21.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Icon resources.
//!
//! Single results arrive wrapped as `{"icon": {...}}`. List results name
//! their item array differently per endpoint: search results use
//! `"icons"`, the recent-uploads feed uses `"recent_uploads"`, and a
//! user's upload page uses `"uploads"`.

use super::{Kind, ListedKind, Model, ModelList, OutputKey};

/// Kind marker for icons.
#[derive(Debug, Clone, Copy)]
pub struct IconKind;

impl Kind for IconKind {
    const NAME: &'static str = "Icon";
    const UNWRAP_KEY: Option<&'static str> = Some("icon");
    const OUTPUT_KEYS: &'static [OutputKey] = &[
        OutputKey { path: &["term"], title: "Term" },
        OutputKey { path: &["term_slug"], title: "Slug" },
        OutputKey { path: &["id"], title: "Id" },
    ];
}

impl ListedKind for IconKind {
    const ITEM_KEYS: &'static [&'static str] = &["icons", "recent_uploads", "uploads"];
}

/// A single icon.
pub type Icon = Model<IconKind>;

/// A page of icons.
pub type IconList = ModelList<IconKind>;
