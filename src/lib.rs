pub mod config;
pub mod errors;
pub mod models;
pub mod traits;
pub mod verifiers;
#[cfg(test)]
pub mod tests;

// Re-export core components
pub use config::{ConfigError, SelectorConfig, SiteSelectors};
pub use errors::{VeritorError, VeritorResult};
pub use models::{
    constraints::{LiveConstraints, SnapshotConstraints, UrlConstraints},
    verdict::{Evidence, Verdict},
};
pub use traits::{
    BrowserDriver,
    BrowserPage,
    BrowserSession,
    DriverError,
    LabeledRow,
    LaunchOptions,
    NavigationOptions,
    WaitUntil,
};
pub use verifiers::live::{scan_rows, LiveDomVerifier};
