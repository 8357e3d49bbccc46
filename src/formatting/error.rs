use thiserror::Error;

use crate::ordering::CycleError;

/// Problems encountered while rendering a dictionary to declarations. Any of
/// these aborts the whole render.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error(transparent)]
    Cycle(#[from] CycleError),

    #[error("token {token} references {reference}, which is not in the dictionary")]
    UnknownReference { token: String, reference: String },

    #[error("unknown output format \"{0}\"")]
    UnknownDialect(String),
}
