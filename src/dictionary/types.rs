//! Types representing a dictionary of design tokens

use std::collections::HashMap;
use std::ops::Range;

/// A single named design value. By the time a Token reaches us its `value`
/// has already been resolved to a literal; `original` keeps the expression
/// it was resolved from, which may embed references to other tokens written
/// as `{color.base}`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub path: Vec<String>,
    pub name: String,
    pub value: String,
    pub original: Option<String>,
    pub reference: Option<String>,
    pub comment: Option<String>,
}

impl Token {
    /// Create a Token whose emitted name is its path joined with dashes.
    pub fn new(path: &[&str], value: &str) -> Token {
        Token {
            path: path
                .iter()
                .map(|segment| segment.to_string())
                .collect(),
            name: path.join("-"),
            value: value.to_string(),
            original: None,
            reference: None,
            comment: None,
        }
    }

    pub fn with_name(mut self, name: &str) -> Token {
        self.name = name.to_string();
        self
    }

    pub fn with_original(mut self, original: &str) -> Token {
        self.original = Some(original.to_string());
        self
    }

    pub fn with_reference(mut self, reference: &str) -> Token {
        self.reference = Some(reference.to_string());
        self
    }

    pub fn with_comment(mut self, comment: &str) -> Token {
        self.comment = Some(comment.to_string());
        self
    }

    /// The dotted form of the path, which is how other tokens refer to this
    /// one.
    pub fn key(&self) -> String {
        self.path
            .join(".")
    }

    /// Every reference this Token makes, the explicit pointer first and then
    /// each `{...}` occurrence in the original expression, without
    /// duplicates. A trailing `.value` inside the braces is dropped.
    pub fn references(&self) -> Vec<&str> {
        let mut result: Vec<&str> = Vec::new();

        if let Some(reference) = &self.reference {
            result.push(reference);
        }

        if let Some(original) = &self.original {
            for inner in embedded(original) {
                if !result.contains(&inner) {
                    result.push(inner);
                }
            }
        }

        result
    }

    pub fn has_references(&self) -> bool {
        self.reference
            .is_some()
            || self
                .original
                .as_deref()
                .map(|original| {
                    embedded(original)
                        .next()
                        .is_some()
                })
                .unwrap_or(false)
    }
}

/// How a reference is written inside an original expression.
pub(crate) const REFERENCE: &str = r"\{([^{}\s]+)\}";

/// Iterate over the references written `{path}` or `{path.value}` within an
/// expression, yielding the span of the whole occurrence along with the
/// reference itself.
pub(crate) fn occurrences(expression: &str) -> impl Iterator<Item = (Range<usize>, &str)> {
    let re = crate::compile!(REFERENCE);
    re.captures_iter(expression)
        .filter_map(|cap| {
            let whole = cap.get(0)?;
            let inner = cap
                .get(1)?
                .as_str();
            let reference = inner
                .strip_suffix(".value")
                .unwrap_or(inner);
            Some((whole.range(), reference))
        })
}

fn embedded(expression: &str) -> impl Iterator<Item = &str> {
    occurrences(expression).map(|(_, reference)| reference)
}

/// The full set of tokens, in their original order, along with the means to
/// find a Token by what another Token calls it.
#[derive(Clone, Debug, Default)]
pub struct Dictionary {
    tokens: Vec<Token>,
    paths: HashMap<String, usize>,
    names: HashMap<String, usize>,
}

impl Dictionary {
    /// Build a Dictionary. Where two tokens share a path (or a name) the
    /// first one wins for lookup purposes; both are still emitted.
    pub fn new(tokens: Vec<Token>) -> Dictionary {
        let mut paths = HashMap::with_capacity(tokens.len());
        let mut names = HashMap::with_capacity(tokens.len());

        for (i, token) in tokens
            .iter()
            .enumerate()
        {
            paths
                .entry(token.key())
                .or_insert(i);
            names
                .entry(
                    token
                        .name
                        .clone(),
                )
                .or_insert(i);
        }

        Dictionary {
            tokens,
            paths,
            names,
        }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens
            .is_empty()
    }

    /// Find the Token a reference points at, trying the dotted path first
    /// and then the emitted name.
    pub fn lookup(&self, reference: &str) -> Option<&Token> {
        self.position(reference)
            .map(|i| &self.tokens[i])
    }

    /// Index into `tokens()` of the Token a reference points at.
    pub fn position(&self, reference: &str) -> Option<usize> {
        self.paths
            .get(reference)
            .or_else(|| {
                self.names
                    .get(reference)
            })
            .copied()
    }
}

impl FromIterator<Token> for Dictionary {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Dictionary::new(
            iter.into_iter()
                .collect(),
        )
    }
}
