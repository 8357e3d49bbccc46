//! Output dialects and their declaration syntax

use std::fmt;
use std::str::FromStr;

use super::RenderError;

/// The stylesheet languages we can emit variable declarations for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    Css,
    Sass,
    Less,
    Stylus,
}

/// How comments trailing a declaration are written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comment {
    Block, // /* ... */
    Short, // // ...
}

/// The pieces a declaration line is assembled from:
///
/// `{indent}{prefix}{name}{separator} {value}{suffix}`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub indent: &'static str,
    pub prefix: &'static str,
    pub separator: &'static str,
    pub suffix: &'static str,
    pub comment: Comment,
}

impl Dialect {
    pub const ALL: [Dialect; 4] = [Dialect::Css, Dialect::Sass, Dialect::Less, Dialect::Stylus];

    pub fn name(&self) -> &'static str {
        match self {
            Dialect::Css => "css",
            Dialect::Sass => "sass",
            Dialect::Less => "less",
            Dialect::Stylus => "stylus",
        }
    }

    pub fn style(&self) -> Style {
        match self {
            Dialect::Css => Style {
                indent: "  ",
                prefix: "--",
                separator: ":",
                suffix: ";",
                comment: Comment::Block,
            },
            Dialect::Sass => Style {
                indent: "",
                prefix: "$",
                separator: ":",
                suffix: ";",
                comment: Comment::Short,
            },
            Dialect::Less => Style {
                indent: "",
                prefix: "@",
                separator: ":",
                suffix: ";",
                comment: Comment::Short,
            },
            Dialect::Stylus => Style {
                indent: "",
                prefix: "$",
                separator: " =",
                suffix: "",
                comment: Comment::Short,
            },
        }
    }

    /// The expression which uses the variable declared for `name`, as it
    /// would be written on the right hand side of another declaration.
    pub fn usage(&self, name: &str) -> String {
        match self {
            Dialect::Css => format!("var(--{})", name),
            _ => format!(
                "{}{}",
                self.style()
                    .prefix,
                name
            ),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dialect {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s
            .to_ascii_lowercase()
            .as_str()
        {
            "css" => Ok(Dialect::Css),
            "sass" | "scss" => Ok(Dialect::Sass),
            "less" => Ok(Dialect::Less),
            "stylus" => Ok(Dialect::Stylus),
            _ => Err(RenderError::UnknownDialect(s.to_string())),
        }
    }
}
