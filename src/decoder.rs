use thiserror::Error;

/// Failure modes when decoding a quoted string literal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("literal does not start with a quote")]
    MissingOpeningQuote,

    #[error("literal is missing its closing quote")]
    UnbalancedQuotes,

    #[error("unexpected characters after the closing quote")]
    TrailingCharacters,

    #[error("invalid escape sequence \\{0}")]
    InvalidEscape(char),

    #[error("escape sequence is truncated")]
    TruncatedEscape,
}

/// Quote style of a string literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quote {
    Single,
    Double,
}

impl Quote {
    const fn delimiter(self) -> char {
        match self {
            Self::Single => '\'',
            Self::Double => '"',
        }
    }
}

/// Decode a single- or double-quoted string literal into its logical value.
///
/// Standard escapes (`\\`, `\'`, `\"`, `\n`, `\t`, `\r`, `\0`) plus `\xNN`
/// and `\uNNNN` are honored. Anything else after a backslash is an error;
/// so is a missing delimiter on either end or text after the closing quote.
///
/// # Errors
/// Returns a [`DecodeError`] describing why the token is not a well-formed
/// literal.
pub fn decode(raw: &str) -> Result<String, DecodeError> {
    let mut chars = raw.chars();
    let quote = match chars.next() {
        Some(q @ ('"' | '\'')) => q,
        _ => return Err(DecodeError::MissingOpeningQuote),
    };

    let mut value = String::with_capacity(raw.len());
    let mut closed = false;
    while let Some(c) = chars.next() {
        if closed {
            return Err(DecodeError::TrailingCharacters);
        }
        match c {
            '\\' => value.push(decode_escape(&mut chars)?),
            c if c == quote => closed = true,
            c => value.push(c),
        }
    }

    if closed {
        Ok(value)
    } else {
        Err(DecodeError::UnbalancedQuotes)
    }
}

fn decode_escape(chars: &mut std::str::Chars<'_>) -> Result<char, DecodeError> {
    let escape = chars.next().ok_or(DecodeError::TruncatedEscape)?;
    match escape {
        '\\' | '\'' | '"' => Ok(escape),
        'n' => Ok('\n'),
        't' => Ok('\t'),
        'r' => Ok('\r'),
        '0' => Ok('\0'),
        'x' => decode_codepoint(chars, 2),
        'u' => decode_codepoint(chars, 4),
        other => Err(DecodeError::InvalidEscape(other)),
    }
}

fn decode_codepoint(
    chars: &mut std::str::Chars<'_>,
    digits: usize,
) -> Result<char, DecodeError> {
    let mut code = 0u32;
    for _ in 0..digits {
        let d = chars.next().ok_or(DecodeError::TruncatedEscape)?;
        let d = d.to_digit(16).ok_or(DecodeError::InvalidEscape(d))?;
        code = code * 16 + d;
    }
    char::from_u32(code).ok_or(DecodeError::InvalidEscape('u'))
}

/// Re-encode a logical value as a quoted literal in the given quote style.
///
/// Inverse of [`decode`] for values that only need the standard escapes: the
/// delimiter, backslash, and control characters are escaped, everything else
/// is emitted verbatim.
#[must_use]
pub fn encode(value: &str, quote: Quote) -> String {
    let delim = quote.delimiter();
    let mut out = String::with_capacity(value.len() + 2);
    out.push(delim);
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '\0' => out.push_str("\\0"),
            c if c == delim => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(delim);
    out
}

#[cfg(test)]
#[path = "decoder_tests.rs"]
mod tests;
