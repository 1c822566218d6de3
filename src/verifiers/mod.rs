pub mod live;
pub mod snapshot;
pub mod url;

pub use live::LiveDomVerifier;
