use log::debug;
use serde_json::json;

use crate::config::SiteSelectors;
use crate::models::{LiveConstraints, Verdict};
use crate::traits::browser_driver::{
    BrowserDriver, BrowserPage, BrowserSession, DriverError, LabeledRow, LaunchOptions,
    NavigationOptions,
};

/// Verifies a live page by driving a browser session against it.
///
/// One call owns one isolated session for its entire lifetime; the
/// session is released on every exit path and release failures are
/// discarded. The call itself never fails: driver errors are folded
/// into failure verdicts.
pub struct LiveDomVerifier<D: BrowserDriver> {
    driver: D,
    selectors: SiteSelectors,
    constraints: LiveConstraints,
    launch: LaunchOptions,
    navigation: NavigationOptions,
}

impl<D: BrowserDriver> LiveDomVerifier<D> {
    pub fn new(driver: D, selectors: SiteSelectors, constraints: LiveConstraints) -> Self {
        LiveDomVerifier {
            driver,
            selectors,
            constraints,
            launch: LaunchOptions::default(),
            navigation: NavigationOptions::default(),
        }
    }

    /// Override the default navigation behavior (dom-content-loaded,
    /// 15 second timeout)
    pub fn with_navigation(mut self, navigation: NavigationOptions) -> Self {
        self.navigation = navigation;
        self
    }

    /// Verify the page at `url` against the configured constraints.
    ///
    /// Checks run in a fixed order: the title check short-circuits, so
    /// a bad title never triggers location extraction.
    pub async fn verify(&self, url: &str) -> Verdict {
        let session = match self.driver.launch(&self.launch).await {
            Ok(session) => session,
            Err(err) => return self.transport_failure(url, err),
        };

        let verdict = self.inspect(&session, url).await;

        // Best-effort release: a close failure must never mask or
        // alter the verdict.
        if let Err(err) = session.close().await {
            debug!("Ignoring browser session close failure: {}", err);
        }

        verdict
    }

    async fn inspect<S: BrowserSession>(&self, session: &S, url: &str) -> Verdict {
        let page = match session.new_page().await {
            Ok(page) => page,
            Err(err) => return self.transport_failure(url, err),
        };

        if let Err(err) = page.goto(url, &self.navigation).await {
            return self.transport_failure(url, err);
        }

        let page_title = match page.text_content(&self.selectors.title).await {
            Ok(text) => text.trim().to_string(),
            Err(err) => return self.transport_failure(url, err),
        };

        if !contains_ignore_case(&page_title, &self.constraints.title_contains) {
            debug!("Title check failed: {:?}", page_title);
            return Verdict::fail(
                format!(
                    "Page title does not contain '{}'",
                    self.constraints.title_contains
                ),
                json!({ "pageTitle": page_title }),
            );
        }

        let rows = match page.labeled_rows(&self.selectors.infobox_rows).await {
            Ok(rows) => rows,
            Err(err) => return self.transport_failure(url, err),
        };
        let location = scan_rows(&rows, &self.selectors.location_header_text);

        match location {
            Some(location)
                if contains_ignore_case(&location, &self.constraints.location_contains) =>
            {
                Verdict::pass(
                    format!(
                        "Page title contains '{}' and location contains '{}'",
                        self.constraints.title_contains, self.constraints.location_contains
                    ),
                    json!({
                        "pageTitle": page_title,
                        "extractedLocation": location,
                        "selectors": {
                            "title": self.selectors.title,
                            "infoboxRows": self.selectors.infobox_rows,
                            "locationHeaderText": self.selectors.location_header_text,
                        },
                    }),
                )
            }
            other => {
                debug!("Location check failed: {:?}", other);
                Verdict::fail(
                    format!(
                        "Infobox location does not contain '{}'",
                        self.constraints.location_contains
                    ),
                    json!({ "extractedLocation": other }),
                )
            }
        }
    }

    /// Fold a driver error into a failure verdict, keeping timeouts
    /// distinct from generic load failures.
    fn transport_failure(&self, url: &str, err: DriverError) -> Verdict {
        if err.is_timeout() {
            debug!("Navigation timed out for {}", url);
            Verdict::fail("Network timeout", json!({ "url": url }))
        } else {
            debug!("Page load failed for {}: {}", url, err);
            Verdict::fail("Failed to load page", json!({ "error": err.to_string() }))
        }
    }
}

/// Scan extracted rows for a label/value pair whose label contains
/// `header_text` (case-insensitive substring), returning the first
/// matching row's trimmed value.
///
/// Pure over its inputs: the DOM walk that produced the rows happens in
/// page context, but which row counts as the location row is decided
/// here.
pub fn scan_rows(rows: &[LabeledRow], header_text: &str) -> Option<String> {
    let needle = header_text.to_lowercase();
    rows.iter()
        .find(|row| row.label.to_lowercase().contains(&needle))
        .map(|row| row.value.trim().to_string())
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
