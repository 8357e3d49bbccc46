//! Output generation: wrapping a listing of declarations into a file

use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tinytemplate::TinyTemplate;
use tracing::{debug, info};

use crate::formatting::{Comment, Dialect};

static TEMPLATE: &'static str = "{{ if with_header }}{header}\n\n{{ endif }}{body}\n";

#[derive(Serialize)]
struct Context {
    with_header: bool,
    header: String,
    body: String,
}

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("unable to assemble output: {0}")]
    Template(#[from] tinytemplate::error::Error),

    #[error("unable to write {}: {source}", filename.display())]
    Write {
        filename: PathBuf,
        source: std::io::Error,
    },
}

/// The warning placed at the top of generated files, in the comment style of
/// the given dialect.
pub fn header(dialect: Dialect) -> String {
    match dialect
        .style()
        .comment
    {
        Comment::Block => "/**\n * Do not edit directly\n * Generated by stylevars\n */".to_string(),
        Comment::Short => "// Do not edit directly\n// Generated by stylevars".to_string(),
    }
}

/// Assemble a complete file from a rendered listing. CSS custom properties
/// have to live inside a selector, so they are wrapped in `:root`. The
/// result always ends with exactly one newline.
pub fn document(dialect: Dialect, listing: &str, with_header: bool) -> Result<String, OutputError> {
    let body = match dialect {
        Dialect::Css if listing.is_empty() => ":root {\n}".to_string(),
        Dialect::Css => format!(":root {{\n{}\n}}", listing),
        _ => listing.to_string(),
    };

    let mut tt = TinyTemplate::new();
    tt.set_default_formatter(&tinytemplate::format_unescaped);
    tt.add_template("document", TEMPLATE)?;

    let context = Context {
        with_header,
        header: header(dialect),
        body,
    };

    let rendered = tt.render("document", &context)?;
    Ok(rendered)
}

/// Write the generated text to the named file, or to standard output if the
/// filename is `-`.
pub fn write(filename: &Path, text: &str) -> Result<(), OutputError> {
    let failed = |source| OutputError::Write {
        filename: filename.to_path_buf(),
        source,
    };

    if filename.to_str() == Some("-") {
        debug!("Writing {} bytes to standard output", text.len());
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(text.as_bytes())
            .map_err(failed)?;
        stdout
            .flush()
            .map_err(failed)?;
    } else {
        info!("Writing file: {}", filename.display());
        std::fs::write(filename, text).map_err(failed)?;
    }

    Ok(())
}
