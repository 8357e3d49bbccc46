//! Generate stylesheet variable declarations from a dictionary of design
//! tokens, declaring referenced tokens before the tokens that use them.

pub mod dictionary;
pub mod formatting;
pub mod loading;
pub mod ordering;
pub mod output;
pub mod problem;
mod regex;
