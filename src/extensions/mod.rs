pub mod model;
pub mod table;

pub use model::{AgentInstructions, ResourceExtension, Topic, EXTENSION_KEY};
pub use table::ExtensionTable;
