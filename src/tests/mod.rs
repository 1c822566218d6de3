
mod live_verifier_tests;

use log::info;

// Setup function to initialize logging for tests
pub fn setup() {
    match env_logger::try_init() {
        Ok(_) => {
            info!("Logger initialized");
        }
        Err(_) => {
            // Logger already initialized, which is fine
        }
    }
}
