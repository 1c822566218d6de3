use serde::{Deserialize, Serialize};

/// Expected values for the live DOM verifier.
///
/// The reference behavior targets a fixed page; `Default` preserves
/// that target, while callers with other pages pass their own record,
/// consistent with the other two verifiers. Both substrings are matched
/// case-insensitively; the form given here is interpolated verbatim
/// into failure reasons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveConstraints {
    /// Substring the page title must contain
    pub title_contains: String,

    /// Substring the infobox location must contain
    pub location_contains: String,
}

impl Default for LiveConstraints {
    fn default() -> Self {
        LiveConstraints {
            title_contains: "Taj Mahal".to_string(),
            location_contains: "Agra".to_string(),
        }
    }
}

/// Expected values for the snapshot verifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotConstraints {
    /// Strict upper bound: only a price greater than this violates
    pub max_price: f64,

    /// Expected city, compared case-insensitively
    pub city: String,

    /// Expected bedroom count, compared exactly
    pub bedrooms: i64,
}

/// Expected values for the URL verifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlConstraints {
    /// Repository the `q` parameter must reference (`repo:<this>`)
    pub repo: String,

    /// Exact value required for the `type` query parameter
    #[serde(rename = "type")]
    pub search_type: String,

    /// Label the `q` parameter must reference (`label:<this>`)
    pub label: String,
}
