use owo_colors::OwoColorize;
use std::path::Path;

use crate::dictionary::LoadingError;
use crate::formatting::RenderError;
use crate::output::OutputError;

/// Format a LoadingError with concise single-line output
pub fn concise_loading_error<'i>(error: &LoadingError<'i>) -> String {
    let mut result = format!(
        "{}: {}: {}",
        "error".bright_red(),
        error
            .filename
            .display(),
        error
            .problem
            .bold()
    );

    if !error
        .details
        .is_empty()
    {
        result.push_str(" (");
        result.push_str(&error.details);
        result.push(')');
    }

    result
}

/// Format a RenderError, naming the token file being rendered
pub fn concise_render_error(error: &RenderError, filename: &Path) -> String {
    let hint = match error {
        RenderError::Cycle(_) => " (remove the circular reference, or render without references)",
        _ => "",
    };

    format!(
        "{}: {}: {}{}",
        "error".bright_red(),
        filename.display(),
        error
            .to_string()
            .bold(),
        hint
    )
}

/// Format an OutputError with concise single-line output
pub fn concise_output_error(error: &OutputError) -> String {
    format!(
        "{}: {}",
        "error".bright_red(),
        error
            .to_string()
            .bold()
    )
}
