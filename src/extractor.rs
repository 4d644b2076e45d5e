use regex::Regex;

/// One candidate locator declaration, extracted verbatim from a single line.
///
/// `raw_value` keeps the quote delimiters and any escape sequences exactly as
/// written; decoding happens later so that a malformed literal can be reported
/// as its own verdict instead of being dropped at extraction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub name: String,
    pub strategy_token: String,
    pub raw_value: String,
}

/// Line-oriented pattern matcher for `NAME = (AppiumBy.STRATEGY, "value")`.
///
/// The pattern is anchored to the full trimmed line. Declarations spanning
/// multiple lines, using concatenation, or computed values are deliberately
/// not recognized: a missed complex declaration is acceptable, a false
/// positive is not. Non-matching lines are ordinary input, never an error.
pub struct DeclarationExtractor {
    pattern: Regex,
}

impl Default for DeclarationExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl DeclarationExtractor {
    #[must_use]
    pub fn new() -> Self {
        Self {
            // The literal alternation is escape-aware so quotes written as
            // \" or \' inside the value do not terminate the capture.
            pattern: Regex::new(
                r#"^([A-Za-z_][A-Za-z0-9_]*)\s*=\s*\(\s*AppiumBy\.([A-Z_]+)\s*,\s*("(?:[^"\\]|\\.)*"|'(?:[^'\\]|\\.)*')\s*\)$"#,
            )
            .expect("Invalid regex"),
        }
    }

    /// Try to extract a declaration from one line of text.
    ///
    /// Returns `None` for any line that does not have the declaration shape.
    #[must_use]
    pub fn extract(&self, line: &str) -> Option<Declaration> {
        let caps = self.pattern.captures(line.trim())?;
        Some(Declaration {
            name: caps[1].to_string(),
            strategy_token: caps[2].to_string(),
            raw_value: caps[3].to_string(),
        })
    }
}

#[cfg(test)]
#[path = "extractor_tests.rs"]
mod tests;
