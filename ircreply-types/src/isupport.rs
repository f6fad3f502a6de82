//! `RPL_ISUPPORT` tokens.
//!
//! A token is `KEY` (set), `-KEY` (unset) or `KEY=value`. Values may encode a
//! space, `=` or `\` as `\x20`, `\x3D` and `\x5C`.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// One token from an `RPL_ISUPPORT` reply.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ISupportParam {
    Set(ISupportKey),
    Unset(ISupportKey),
    Eq(ISupportKey, ISupportValue),
}

impl ISupportParam {
    pub fn key(&self) -> &ISupportKey {
        match self {
            ISupportParam::Set(key) | ISupportParam::Unset(key) | ISupportParam::Eq(key, _) => key,
        }
    }

    pub fn value(&self) -> Option<&ISupportValue> {
        match self {
            ISupportParam::Eq(_, value) => Some(value),
            _ => None,
        }
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, ISupportParam::Unset(_))
    }
}

impl fmt::Display for ISupportParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ISupportParam::Set(key) => write!(f, "{}", key),
            ISupportParam::Unset(key) => write!(f, "-{}", key),
            ISupportParam::Eq(key, value) => write!(f, "{}={}", key, value.escaped()),
        }
    }
}

impl std::str::FromStr for ISupportParam {
    type Err = ParseISupportParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some((key, value)) = s.split_once('=') {
            Ok(ISupportParam::Eq(key.parse()?, value.parse()?))
        } else if let Some(key) = s.strip_prefix('-') {
            Ok(ISupportParam::Unset(key.parse()?))
        } else {
            Ok(ISupportParam::Set(s.parse()?))
        }
    }
}

serialize_display!(ISupportParam);

/// Errors from parsing an [`ISupportParam`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ParseISupportParamError {
    #[error("invalid ISUPPORT key: {0}")]
    Key(#[from] ParseISupportKeyError),

    #[error("invalid ISUPPORT value: {0}")]
    Value(#[from] ParseISupportValueError),
}

validated_string!(
    /// An ISUPPORT key: non-empty ASCII letters and digits.
    ISupportKey,
    ParseISupportKeyError,
    validate_key,
    "an ISUPPORT key"
);

fn validate_key(s: &str) -> Result<(), ParseISupportKeyError> {
    if s.is_empty() {
        Err(ParseISupportKeyError::Empty)
    } else if s.contains(|c: char| !c.is_ascii_alphanumeric()) {
        Err(ParseISupportKeyError::BadCharacter)
    } else {
        Ok(())
    }
}

/// Errors from parsing an [`ISupportKey`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ParseISupportKeyError {
    #[error("ISUPPORT keys cannot be empty")]
    Empty,

    #[error("ISUPPORT keys must only contain ASCII letters and digits")]
    BadCharacter,
}

/// An ISUPPORT value with its escapes decoded.
///
/// `Display` writes the decoded text; use [`ISupportValue::escaped`] for the
/// wire form.
#[derive(Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ISupportValue(String);

impl ISupportValue {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    pub fn escaped(&self) -> Escaped<'_> {
        Escaped(&self.0)
    }
}

impl fmt::Debug for ISupportValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl fmt::Display for ISupportValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl PartialEq<str> for ISupportValue {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl<'a> PartialEq<&'a str> for ISupportValue {
    fn eq(&self, other: &&'a str) -> bool {
        self.0 == *other
    }
}

impl std::str::FromStr for ISupportValue {
    type Err = ParseISupportValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut value = String::with_capacity(s.len());
        let mut chars = s.chars();
        while let Some(ch) = chars.next() {
            if !ch.is_ascii_graphic() {
                return Err(ParseISupportValueError::BadCharacter);
            }
            if ch != '\\' {
                value.push(ch);
                continue;
            }
            if chars.next() != Some('x') {
                return Err(ParseISupportValueError::BadEscape);
            }
            match (chars.next(), chars.next()) {
                (Some('2'), Some('0')) => value.push(' '),
                (Some('3'), Some('D' | 'd')) => value.push('='),
                (Some('5'), Some('C' | 'c')) => value.push('\\'),
                _ => return Err(ParseISupportValueError::BadEscape),
            }
        }
        Ok(ISupportValue(value))
    }
}

/// Errors from parsing an [`ISupportValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ParseISupportValueError {
    #[error("ISUPPORT values must only contain printable non-space ASCII characters")]
    BadCharacter,

    #[error("invalid or unrecognized escape sequence")]
    BadEscape,
}

/// Wire form of an [`ISupportValue`], re-escaping space, `=` and `\`.
#[derive(Debug, Clone, Copy)]
pub struct Escaped<'a>(&'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in self.0.chars() {
            match ch {
                ' ' => f.write_str("\\x20")?,
                '=' => f.write_str("\\x3D")?,
                '\\' => f.write_str("\\x5C")?,
                c => write!(f, "{}", c)?,
            }
        }
        Ok(())
    }
}
