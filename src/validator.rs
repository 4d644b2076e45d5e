use std::fmt;

use serde::Serialize;

use crate::decoder;
use crate::extractor::Declaration;
use crate::strategy::Strategy;

/// Why a declaration failed validation. Exactly one reason per declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    /// The declared name is not in uppercase.
    Naming { name: String },
    /// The strategy token is outside the supported set.
    UnsupportedStrategy { token: String },
    /// The value is not a well-formed quoted string literal.
    UnparsableLiteral,
    /// The decoded value fails the strategy's rule.
    PredicateFailed { strategy: Strategy },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Naming { name } => write!(f, "Locator name '{name}' is not in uppercase"),
            Self::UnsupportedStrategy { token } => {
                write!(f, "Unsupported AppiumBy strategy '{token}'")
            }
            Self::UnparsableLiteral => write!(f, "Could not parse locator value"),
            Self::PredicateFailed { strategy } => {
                write!(f, "Invalid selector value for strategy {strategy}")
            }
        }
    }
}

/// Outcome of validating one declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Valid,
    Invalid(Violation),
}

impl Verdict {
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    #[must_use]
    pub fn into_violation(self) -> Option<Violation> {
        match self {
            Self::Valid => None,
            Self::Invalid(violation) => Some(violation),
        }
    }
}

/// Validate one declaration. Pure function of its input.
///
/// Checks run in a fixed order and short-circuit on the first failure:
/// naming, then strategy support, then literal decode, then the strategy
/// rule. A lowercase name is reported as a naming violation even when the
/// rest of the declaration is broken too.
#[must_use]
pub fn validate(decl: &Declaration) -> Verdict {
    if !is_upper_snake(&decl.name) {
        return Verdict::Invalid(Violation::Naming {
            name: decl.name.clone(),
        });
    }

    let Some(strategy) = Strategy::parse(&decl.strategy_token) else {
        return Verdict::Invalid(Violation::UnsupportedStrategy {
            token: decl.strategy_token.clone(),
        });
    };

    let Ok(value) = decoder::decode(&decl.raw_value) else {
        return Verdict::Invalid(Violation::UnparsableLiteral);
    };

    if strategy.accepts(&value) {
        Verdict::Valid
    } else {
        Verdict::Invalid(Violation::PredicateFailed { strategy })
    }
}

// Mirrors Python's str.isupper(): at least one cased character, none of them
// lowercase. A name of only digits and underscores does not pass.
fn is_upper_snake(name: &str) -> bool {
    name.chars().any(|c| c.is_ascii_uppercase())
        && !name.chars().any(|c| c.is_ascii_lowercase())
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
