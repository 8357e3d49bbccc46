// Types representing a dictionary of design tokens

mod error;
mod types;

// Re-export all public symbols
pub use error::*;
pub use types::*;
