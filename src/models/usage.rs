//
//  nounproject
//  models/usage.rs
//
//  Created by Ngonidzashe Mangudya on 2026/08/21.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! API usage and publish-notification resources.
//!
//! Usage reports arrive unwrapped, with counters nested one level down
//! (`{"usage": {"hourly": ..}, "limits": {..}}`); their shown fields are
//! the two-level paths into that nesting. Publish receipts are the flat
//! acknowledgements returned by the usage-reporting endpoint.

use super::{Kind, Model, OutputKey};

/// Kind marker for OAuth usage reports.
#[derive(Debug, Clone, Copy)]
pub struct UsageKind;

impl Kind for UsageKind {
    const NAME: &'static str = "Usage";
    const UNWRAP_KEY: Option<&'static str> = None;
    const OUTPUT_KEYS: &'static [OutputKey] = &[
        OutputKey { path: &["usage", "hourly"], title: "Hourly" },
        OutputKey { path: &["usage", "daily"], title: "Daily" },
        OutputKey { path: &["usage", "monthly"], title: "Monthly" },
    ];
}

/// An account's request counters and limits.
pub type Usage = Model<UsageKind>;

/// Kind marker for publish-notification receipts.
#[derive(Debug, Clone, Copy)]
pub struct PublishKind;

impl Kind for PublishKind {
    const NAME: &'static str = "PublishReceipt";
    const UNWRAP_KEY: Option<&'static str> = None;
    const OUTPUT_KEYS: &'static [OutputKey] = &[
        OutputKey { path: &["licenses_consumed"], title: "Licenses Consumed" },
        OutputKey { path: &["result"], title: "Result" },
    ];
}

/// Acknowledgement returned after reporting icon usage.
pub type PublishReceipt = Model<PublishKind>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_usage_renders_nested_counters() {
        let usage = Usage::parse(json!({
            "limits": { "hourly": 100, "daily": 500, "monthly": 10000 },
            "usage": { "hourly": 16, "daily": 30, "monthly": 32 }
        }));
        assert_eq!(usage.to_string(), "<Usage: Hourly: 16, Daily: 30, Monthly: 32>");
        assert_eq!(usage.path("limits.daily").unwrap().as_i64(), Some(500));
    }

    #[test]
    fn test_publish_receipt_representation() {
        let receipt = PublishReceipt::parse(json!({
            "licenses_consumed": 3,
            "result": "success"
        }));
        assert_eq!(
            receipt.to_string(),
            "<PublishReceipt: Licenses Consumed: 3, Result: success>"
        );
    }
}
