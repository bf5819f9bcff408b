use std::fmt;
use std::str::FromStr;

use crate::CookifyError;

/// Placeholder name used for the located solution and the destination directory.
pub const SOLUTION_NAME_PLACEHOLDER: &str = "solution_name";
pub const SAMPLE_ENTITY_PLACEHOLDER: &str = "sample_entity_name";
pub const DEFAULT_SAMPLE_ENTITY: &str = "Customer";

/// Wraps a placeholder name in cookiecutter syntax: `solution_name` becomes
/// `{{cookiecutter.solution_name}}`.
pub fn placeholder_token(name: &str) -> String {
    format!("{{{{cookiecutter.{name}}}}}")
}

/// A literal value to genericize and the placeholder name that replaces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    literal: String,
    placeholder: String,
    token: String,
}

impl Replacement {
    pub fn new(literal: &str, placeholder: &str) -> Result<Self, CookifyError> {
        if literal.is_empty() {
            return Err(CookifyError::InvalidReplacement {
                message: format!("literal for placeholder '{placeholder}' is empty"),
            });
        }
        if placeholder.is_empty() {
            return Err(CookifyError::InvalidReplacement {
                message: format!("placeholder name for literal '{literal}' is empty"),
            });
        }

        Ok(Self {
            literal: literal.to_string(),
            placeholder: placeholder.to_string(),
            token: placeholder_token(placeholder),
        })
    }

    pub fn literal(&self) -> &str {
        &self.literal
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// The wrapped token written in place of the literal.
    pub fn token(&self) -> &str {
        &self.token
    }
}

/// Parses `NAME=VALUE`, the form accepted on the command line. Only the
/// first `=` separates, so values may contain `=` themselves.
impl FromStr for Replacement {
    type Err = CookifyError;

    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let (placeholder, literal) = spec.split_once('=').ok_or_else(|| {
            CookifyError::InvalidReplacement {
                message: format!("expected NAME=VALUE, got '{spec}'"),
            }
        })?;
        Self::new(literal, placeholder.trim())
    }
}

impl fmt::Display for Replacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' -> '{}'", self.literal, self.token)
    }
}
