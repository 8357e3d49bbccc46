//! Loading a pre-resolved token file into a Dictionary

use serde::Deserialize;
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;
use tracing::debug;

use crate::dictionary::{Dictionary, LoadingError, Token};

/// One token as it appears in the file. Values have already been resolved
/// upstream; `original` is the expression they were resolved from.
#[derive(Debug, Deserialize)]
struct Entry {
    path: Vec<String>,
    name: Option<String>,
    value: Literal,
    original: Option<Literal>,
    reference: Option<String>,
    comment: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Literal {
    Text(String),
    Number(serde_json::Number),
}

impl Literal {
    fn into_string(self) -> String {
        match self {
            Literal::Text(text) => text,
            Literal::Number(number) => number.to_string(),
        }
    }
}

/// Read a file (or standard input, if the filename is `-`) and return an
/// owned String.
pub fn load(filename: &Path) -> Result<String, LoadingError<'_>> {
    if filename.to_str() == Some("-") {
        let mut content = String::new();
        return match std::io::stdin().read_to_string(&mut content) {
            Ok(_) => Ok(content),
            Err(error) => {
                debug!(?error);
                Err(LoadingError {
                    problem: "Failed reading standard input".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                })
            }
        };
    }

    match std::fs::read_to_string(filename) {
        Ok(content) => Ok(content),
        Err(error) => {
            debug!(?error);
            match error.kind() {
                std::io::ErrorKind::NotFound => Err(LoadingError {
                    problem: "File not found".to_string(),
                    details: String::new(),
                    filename,
                }),
                _ => Err(LoadingError {
                    problem: "Failed reading".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                }),
            }
        }
    }
}

/// Parse the text of a token file, a JSON array of token objects, into a
/// Dictionary preserving the order the tokens appear in.
pub fn parse<'i>(filename: &'i Path, content: &str) -> Result<Dictionary, LoadingError<'i>> {
    let entries: Vec<Entry> = match serde_json::from_str(content) {
        Ok(entries) => entries,
        Err(error) => {
            debug!(?error);
            return Err(LoadingError {
                problem: "Invalid token file".to_string(),
                details: error.to_string(),
                filename,
            });
        }
    };

    let mut seen: HashSet<String> = HashSet::with_capacity(entries.len());
    let mut tokens: Vec<Token> = Vec::with_capacity(entries.len());

    for (i, entry) in entries
        .into_iter()
        .enumerate()
    {
        if entry
            .path
            .is_empty()
        {
            return Err(LoadingError {
                problem: "Token without a path".to_string(),
                details: format!("entry {}", i + 1),
                filename,
            });
        }

        let key = entry
            .path
            .join(".");
        if !seen.insert(key.clone()) {
            return Err(LoadingError {
                problem: "Duplicate token".to_string(),
                details: key,
                filename,
            });
        }

        let name = match entry.name {
            Some(name) => name,
            None => entry
                .path
                .join("-"),
        };

        tokens.push(Token {
            path: entry.path,
            name,
            value: entry
                .value
                .into_string(),
            original: entry
                .original
                .map(Literal::into_string),
            reference: entry.reference,
            comment: entry.comment,
        });
    }

    debug!(
        "Loaded {} token{}",
        tokens.len(),
        if tokens.len() == 1 { "" } else { "s" }
    );

    Ok(Dictionary::new(tokens))
}
