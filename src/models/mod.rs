pub mod constraints;
pub mod verdict;

pub use constraints::{LiveConstraints, SnapshotConstraints, UrlConstraints};
pub use verdict::{Evidence, Verdict};
