//! Turning a dictionary of tokens into variable declarations

mod declare;
mod dialect;
mod error;
mod renderer;

// Re-export all public symbols
pub use declare::*;
pub use dialect::*;
pub use error::*;
pub use renderer::*;
