//! Ordering tokens so that each is declared after everything it references.
//!
//! Some stylesheet languages are imperative: a variable has to be defined
//! before it is used. When references are emitted as live expressions the
//! tokens therefore have to be put into dependency order, and chains of
//! aliases (a -> b -> c) must come out tail first (c, b, a).
//!
//! This is a topological sort of the reference graph using Kahn's algorithm.
//! When more than one token is ready to be emitted the one earliest in the
//! dictionary goes first, so tokens not involved in a reference relationship
//! keep their original relative order wherever a dependency doesn't force
//! otherwise.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt;
use tracing::debug;

use crate::dictionary::{Dictionary, Token};

/// The reference graph is not acyclic. Carries the names of the tokens that
/// could not be ordered: those on a cycle and those depending on one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleError {
    pub tokens: Vec<String>,
}

impl fmt::Display for CycleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "circular reference between tokens: {}",
            self.tokens
                .join(", ")
        )
    }
}

impl std::error::Error for CycleError {}

/// Return the tokens of the dictionary such that every token comes after
/// all the tokens it references, directly or transitively. The dictionary
/// itself is left untouched. References to tokens not in the dictionary
/// impose no ordering.
pub fn order(dictionary: &Dictionary) -> Result<Vec<&Token>, CycleError> {
    let tokens = dictionary.tokens();
    let n = tokens.len();

    // dependents[j] lists the tokens which reference token j, and so must
    // wait for it; pending[i] counts the references of token i not yet
    // emitted.
    let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut pending: Vec<usize> = vec![0; n];

    for (i, token) in tokens
        .iter()
        .enumerate()
    {
        let mut targets: Vec<usize> = Vec::new();

        for reference in token.references() {
            match dictionary.position(reference) {
                Some(j) => {
                    if !targets.contains(&j) {
                        targets.push(j);
                    }
                }
                None => {
                    debug!(token = %token.name, reference, "Reference not in dictionary");
                }
            }
        }

        for j in targets {
            dependents[j].push(i);
            pending[i] += 1;
        }
    }

    let mut ready: BinaryHeap<Reverse<usize>> = pending
        .iter()
        .enumerate()
        .filter(|&(_, &count)| count == 0)
        .map(|(i, _)| Reverse(i))
        .collect();

    let mut result: Vec<&Token> = Vec::with_capacity(n);

    while let Some(Reverse(i)) = ready.pop() {
        result.push(&tokens[i]);

        for &k in &dependents[i] {
            pending[k] -= 1;
            if pending[k] == 0 {
                ready.push(Reverse(k));
            }
        }
    }

    if result.len() < n {
        let stuck: Vec<String> = pending
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .map(|(i, _)| {
                tokens[i]
                    .name
                    .clone()
            })
            .collect();

        debug!("Cycle detected among {} tokens", stuck.len());
        return Err(CycleError { tokens: stuck });
    }

    debug!(
        "Ordered {} token{}",
        n,
        if n == 1 { "" } else { "s" }
    );
    Ok(result)
}
