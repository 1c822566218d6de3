use log::debug;
use serde_json::json;
use url::Url;

use crate::models::{UrlConstraints, Verdict};

/// Verify a redirected URL's query string against the given
/// constraints.
///
/// The `type` parameter must match exactly and is checked first; the
/// `q` parameter must contain all four required tokens as substrings,
/// in any order. The query is lowercased before matching, so token
/// matching is case-insensitive.
pub fn verify(final_url: &str, constraints: &UrlConstraints) -> Verdict {
    let parsed = match Url::parse(final_url) {
        Ok(parsed) => parsed,
        Err(err) => {
            debug!("URL parse failed: {}", err);
            return Verdict::fail("Invalid URL", json!({ "error": err.to_string() }));
        }
    };

    let type_param = query_param(&parsed, "type");
    if type_param.as_deref() != Some(constraints.search_type.as_str()) {
        let found = type_param.as_deref().unwrap_or("none");
        return Verdict::fail(
            format!(
                "Expected type={}, found {}",
                constraints.search_type, found
            ),
            json!({ "type": type_param }),
        );
    }

    // query_pairs already percent-decodes; an absent q is an empty
    // query.
    let decoded_query = query_param(&parsed, "q").unwrap_or_default().to_lowercase();

    let required_tokens = vec![
        format!("repo:{}", constraints.repo),
        "is:issue".to_string(),
        "is:open".to_string(),
        format!("label:{}", constraints.label),
    ];

    let tokens_found: Vec<&String> = required_tokens
        .iter()
        .filter(|token| decoded_query.contains(token.as_str()))
        .collect();

    if tokens_found.len() != required_tokens.len() {
        debug!(
            "Query tokens found {}/{}",
            tokens_found.len(),
            required_tokens.len()
        );
        return Verdict::fail(
            "Missing required query tokens",
            json!({
                "tokensFound": tokens_found,
                "requiredTokens": required_tokens,
            }),
        );
    }

    Verdict::pass(
        "URL query contains all required constraints",
        json!({
            "repo": constraints.repo,
            "type": constraints.search_type,
            "tokensFound": tokens_found,
        }),
    )
}

/// First value of a named query parameter, percent-decoded
fn query_param(url: &Url, name: &str) -> Option<String> {
    url.query_pairs()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}
