pub mod browser_driver;

// Re-export traits
pub use browser_driver::{
    BrowserDriver,
    BrowserPage,
    BrowserSession,
    DriverError,
    LabeledRow,
    LaunchOptions,
    NavigationOptions,
    WaitUntil,
};
