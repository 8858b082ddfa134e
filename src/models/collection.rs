//
//  nounproject
//  models/collection.rs
//
//  Created by Ngonidzashe Mangudya on 2026/08/21.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Collection resources.
//!
//! Single results arrive wrapped as `{"collection": {...}}`; list results
//! carry their items under `"collections"`.

use super::{Kind, ListedKind, Model, ModelList, OutputKey};

/// Kind marker for icon collections.
#[derive(Debug, Clone, Copy)]
pub struct CollectionKind;

impl Kind for CollectionKind {
    const NAME: &'static str = "Collection";
    const UNWRAP_KEY: Option<&'static str> = Some("collection");
    const OUTPUT_KEYS: &'static [OutputKey] = &[
        OutputKey { path: &["name"], title: "Name" },
        OutputKey { path: &["slug"], title: "Slug" },
        OutputKey { path: &["id"], title: "Id" },
    ];
}

impl ListedKind for CollectionKind {
    const ITEM_KEYS: &'static [&'static str] = &["collections"];
}

/// A curated collection of icons.
pub type Collection = Model<CollectionKind>;

/// A page of collections.
pub type CollectionList = ModelList<CollectionKind>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_collection_representation() {
        let collection = Collection::parse(json!({
            "collection": {
                "id": 220,
                "name": "Arrows-1",
                "slug": "arrows-1",
                "author_id": 24,
                "date_created": "2013-03-15 19:01:10"
            }
        }));
        assert_eq!(
            collection.to_string(),
            "<Collection: Name: Arrows-1, Slug: arrows-1, Id: 220>"
        );
    }

    #[test]
    fn test_collection_list_unwraps_each_item() {
        let list = CollectionList::parse(json!({
            "collections": [
                { "id": 220, "name": "Arrows-1", "slug": "arrows-1" }
            ]
        }))
        .unwrap();
        assert_eq!(list[0].get("slug").unwrap().as_str(), Some("arrows-1"));
    }
}
