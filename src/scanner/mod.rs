mod directory;
mod filter;

pub use directory::DirectoryScanner;
pub use filter::{ExtensionFilter, FileFilter};
