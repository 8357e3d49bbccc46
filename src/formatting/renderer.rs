//! Rendering a whole dictionary to a listing of declarations

use tracing::debug;

use crate::dictionary::{Dictionary, Token};
use crate::ordering::{self, CycleError};

use super::{Context, Declare, Dialect, RenderError, Variables};

/// We do the rendering in two passes. First we settle the order the tokens
/// will be declared in: the dictionary's own order, or, if references are to
/// be output as live expressions, an order in which every token follows the
/// tokens it refers to. Then second we apply the line formatter to each
/// token and join the resulting lines.
///
/// The dictionary is never modified; rendering the same dictionary again,
/// with or without references, is independent of any previous call.
pub fn render(
    declare: &impl Declare,
    dialect: Dialect,
    dictionary: &Dictionary,
    output_references: bool,
) -> Result<String, RenderError> {
    // Pass 1: Decide the declaration order
    let tokens = sequence(dictionary, output_references)?;

    // Pass 2: Format each token and combine
    let context = Context {
        dialect,
        dictionary,
        output_references,
    };

    render_to_string(declare, &context, tokens)
}

/// Render using the built-in variable declaration syntax of each dialect.
pub fn render_variables(
    dialect: Dialect,
    dictionary: &Dictionary,
    output_references: bool,
) -> Result<String, RenderError> {
    render(&Variables, dialect, dictionary, output_references)
}

/// Pass 1: the tokens in the order they are to be declared.
fn sequence(dictionary: &Dictionary, output_references: bool) -> Result<Vec<&Token>, CycleError> {
    if output_references {
        ordering::order(dictionary)
    } else {
        Ok(dictionary
            .tokens()
            .iter()
            .collect())
    }
}

/// Pass 2: apply the line formatter to each token, dropping tokens which
/// produce nothing, and join with newlines.
fn render_to_string(
    declare: &impl Declare,
    context: &Context<'_>,
    tokens: Vec<&Token>,
) -> Result<String, RenderError> {
    let mut lines: Vec<String> = Vec::with_capacity(tokens.len());

    for token in tokens {
        match declare.declare(token, context)? {
            Some(line) if !line.is_empty() => lines.push(line),
            _ => debug!(token = %token.name, "Nothing to declare"),
        }
    }

    debug!(
        "Rendered {} line{} as {}",
        lines.len(),
        if lines.len() == 1 { "" } else { "s" },
        context.dialect
    );

    Ok(lines.join("\n"))
}
