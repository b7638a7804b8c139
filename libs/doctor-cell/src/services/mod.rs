pub mod directory;

pub use directory::{DirectoryService, MockDirectoryService};
