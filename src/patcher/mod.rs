pub mod document;
pub mod merge;
pub mod outcome;
pub mod runner;

pub use document::{load_document, write_document};
pub use merge::shallow_merge;
pub use outcome::{FileOutcome, RunSummary};
pub use runner::{apply_extensions, run, run_in, DEFAULT_BASE_DIR};
