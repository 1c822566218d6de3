use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// The mapping of extracted facts attached to a Verdict.
///
/// Keys keep the original wire names (`pageTitle`, `tokensFound`, ...)
/// so verdicts stay interoperable with callers built against the
/// reference contract.
pub type Evidence = Map<String, Value>;

/// Uniform result of a verification call.
///
/// This is the sole contract surface consumers depend on: the
/// `success`/`reason`/`evidence` field names and shape are fixed.
/// A verdict is immutable once constructed; `evidence` carries every
/// fact relevant to the decision, including the selectors or config
/// used, so it is auditable without re-running extraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub success: bool,

    /// Human-readable cause: names the violated condition(s) on
    /// failure, summarizes the satisfied conditions on success.
    pub reason: String,

    pub evidence: Evidence,
}

impl Verdict {
    /// Build a passing verdict
    pub fn pass(reason: impl Into<String>, evidence: Value) -> Self {
        Self::build(true, reason.into(), evidence)
    }

    /// Build a failing verdict. Failure evidence must name at least one
    /// cause; debugging relies entirely on the evidence field.
    pub fn fail(reason: impl Into<String>, evidence: Value) -> Self {
        let verdict = Self::build(false, reason.into(), evidence);
        debug_assert!(
            !verdict.evidence.is_empty(),
            "failure verdicts must carry evidence"
        );
        verdict
    }

    fn build(success: bool, reason: String, evidence: Value) -> Self {
        let evidence = match evidence {
            Value::Object(map) => map,
            other => {
                // Non-object evidence is wrapped under a single key
                // rather than dropped.
                let mut map = Map::new();
                map.insert("value".to_string(), other);
                map
            }
        };
        Verdict {
            success,
            reason,
            evidence,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.success {
            write!(f, "PASS: {}", self.reason)
        } else {
            write!(f, "FAIL: {}", self.reason)
        }
    }
}
