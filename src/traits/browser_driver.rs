use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors surfaced by a browser-automation backend.
///
/// `NavigationTimeout` is kept distinct from `Navigation` because the
/// live verifier reports the two as different failure causes.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("Failed to launch browser: {0}")]
    Launch(String),

    #[error("Navigation timed out after {timeout:?}")]
    NavigationTimeout { timeout: Duration },

    #[error("Navigation failed: {0}")]
    Navigation(String),

    #[error("In-page evaluation failed: {0}")]
    Evaluation(String),

    #[error("Failed to close browser session: {0}")]
    Close(String),
}

impl DriverError {
    /// True for errors with timeout semantics
    pub fn is_timeout(&self) -> bool {
        matches!(self, DriverError::NavigationTimeout { .. })
    }
}

/// Which page event a navigation waits for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitUntil {
    DomContentLoaded,
    Load,
    NetworkIdle,
}

/// Options applied to a single navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationOptions {
    pub wait_until: WaitUntil,
    pub timeout: Duration,
}

impl Default for NavigationOptions {
    fn default() -> Self {
        NavigationOptions {
            wait_until: WaitUntil::DomContentLoaded,
            timeout: Duration::from_secs(15),
        }
    }
}

/// Options applied when launching a browser session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchOptions {
    pub headless: bool,
}

impl Default for LaunchOptions {
    fn default() -> Self {
        LaunchOptions { headless: true }
    }
}

/// One label/value pair extracted from a row-like container in page
/// context. The host backend does the DOM walk; deciding which row is
/// the location row stays in the verifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledRow {
    pub label: String,
    pub value: String,
}

impl LabeledRow {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        LabeledRow {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Entry point to a browser-automation backend.
///
/// The concrete backend is an external collaborator; the crate ships no
/// implementation. Tests drive the live verifier through mock
/// implementations of these traits.
#[async_trait]
pub trait BrowserDriver {
    type Session: BrowserSession;

    /// Launch an isolated browser session
    async fn launch(&self, options: &LaunchOptions) -> Result<Self::Session, DriverError>;
}

/// One isolated browser session, owned by a single verification call
/// for its entire lifetime.
#[async_trait]
pub trait BrowserSession: Send + Sync {
    type Page: BrowserPage;

    /// Open a new page in this session
    async fn new_page(&self) -> Result<Self::Page, DriverError>;

    /// Release the session. Callers treat this as best-effort cleanup:
    /// a close failure never becomes part of a verdict.
    async fn close(&self) -> Result<(), DriverError>;
}

/// A page within a browser session
#[async_trait]
pub trait BrowserPage: Send + Sync {
    /// Navigate to an absolute URL, waiting per `options`
    async fn goto(&self, url: &str, options: &NavigationOptions) -> Result<(), DriverError>;

    /// Text content of the first element matching `selector`
    async fn text_content(&self, selector: &str) -> Result<String, DriverError>;

    /// Label/value pairs for every element matching `rows_selector`,
    /// extracted within the page context
    async fn labeled_rows(&self, rows_selector: &str) -> Result<Vec<LabeledRow>, DriverError>;
}
