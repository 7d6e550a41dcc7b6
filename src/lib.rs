pub mod error;
pub mod extensions;
pub mod patcher;

pub use error::PatchError;
pub use extensions::{AgentInstructions, ExtensionTable, ResourceExtension, Topic, EXTENSION_KEY};
pub use patcher::{
    apply_extensions, load_document, run, run_in, shallow_merge, write_document, FileOutcome,
    RunSummary, DEFAULT_BASE_DIR,
};
