//! Formatting a single token as a variable declaration

use crate::dictionary::{occurrences, Dictionary, Token};

use super::{Comment, Dialect, RenderError};

/// Everything a line formatter may consult besides the token itself.
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    pub dialect: Dialect,
    pub dictionary: &'a Dictionary,
    pub output_references: bool,
}

/// Trait for things that turn one token into (at most) one line of output.
/// Returning `Ok(None)` means nothing is to be emitted for this token.
pub trait Declare {
    fn declare(&self, token: &Token, context: &Context<'_>) -> Result<Option<String>, RenderError>;
}

impl<F> Declare for F
where
    F: Fn(&Token, &Context<'_>) -> Result<Option<String>, RenderError>,
{
    fn declare(&self, token: &Token, context: &Context<'_>) -> Result<Option<String>, RenderError> {
        self(token, context)
    }
}

/// Declares each token as a variable in the syntax of the target dialect,
/// for example `$color-brand: #0a84ff;` for Sass. With references enabled
/// the value is written in terms of the variables it refers to, for example
/// `--color-link: var(--color-brand);` for CSS. A token whose value comes
/// out empty is not declared at all.
pub struct Variables;

impl Declare for Variables {
    fn declare(&self, token: &Token, context: &Context<'_>) -> Result<Option<String>, RenderError> {
        let value = if context.output_references && token.has_references() {
            live_value(token, context)?
        } else {
            token
                .value
                .clone()
        };

        // nothing to declare
        if value.is_empty() {
            return Ok(None);
        }

        let style = context
            .dialect
            .style();

        let mut line = String::with_capacity(
            style
                .indent
                .len()
                + style
                    .prefix
                    .len()
                + token
                    .name
                    .len()
                + value.len()
                + 4,
        );

        line.push_str(style.indent);
        line.push_str(style.prefix);
        line.push_str(&token.name);
        line.push_str(style.separator);
        line.push(' ');
        line.push_str(&value);
        line.push_str(style.suffix);

        if let Some(comment) = &token.comment {
            match style.comment {
                Comment::Block => {
                    line.push_str(" /* ");
                    line.push_str(comment);
                    line.push_str(" */");
                }
                Comment::Short => {
                    line.push_str(" // ");
                    line.push_str(comment);
                }
            }
        }

        Ok(Some(line))
    }
}

/// Express the token's value in terms of the variables it references. If
/// the original expression embeds references they are substituted in place;
/// otherwise the value is simply a use of the explicitly referenced token.
fn live_value(token: &Token, context: &Context<'_>) -> Result<String, RenderError> {
    if let Some(original) = &token.original {
        let mut result = String::with_capacity(original.len());
        let mut last = 0;
        let mut found = false;

        for (span, reference) in occurrences(original) {
            result.push_str(&original[last..span.start]);
            result.push_str(&usage(token, reference, context)?);
            last = span.end;
            found = true;
        }

        if found {
            result.push_str(&original[last..]);
            return Ok(result);
        }
    }

    match &token.reference {
        Some(reference) => usage(token, reference, context),
        None => Ok(token
            .value
            .clone()),
    }
}

fn usage(token: &Token, reference: &str, context: &Context<'_>) -> Result<String, RenderError> {
    match context
        .dictionary
        .lookup(reference)
    {
        Some(target) => Ok(context
            .dialect
            .usage(&target.name)),
        None => Err(RenderError::UnknownReference {
            token: token
                .name
                .clone(),
            reference: reference.to_string(),
        }),
    }
}
