//! CLI command implementations

pub mod diff;
pub mod generate;
pub mod list;

pub use diff::DiffCommand;
pub use generate::GenerateCommand;
