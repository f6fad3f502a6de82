//! Mode strings such as `+nt` or `+o-v`.

use thiserror::Error;

validated_string!(
    /// A validated mode string.
    ///
    /// Mode strings start with `+` or `-` and contain only signs and ASCII
    /// letters.
    ModeString,
    ParseModeStringError,
    validate_modestring,
    "an IRC mode string"
);

fn validate_modestring(s: &str) -> Result<(), ParseModeStringError> {
    if !s.starts_with(['+', '-']) {
        Err(ParseModeStringError::BadStart)
    } else if s.contains(|c: char| !(c.is_ascii_alphabetic() || c == '+' || c == '-')) {
        Err(ParseModeStringError::BadCharacter)
    } else {
        Ok(())
    }
}

/// Whether a mode is being added or removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModeSign {
    Add,
    Remove,
}

impl ModeString {
    /// Iterates the mode letters with the sign in effect for each.
    pub fn modes(&self) -> impl Iterator<Item = (ModeSign, char)> + '_ {
        let mut sign = ModeSign::Add;
        self.as_str().chars().filter_map(move |c| match c {
            '+' => {
                sign = ModeSign::Add;
                None
            }
            '-' => {
                sign = ModeSign::Remove;
                None
            }
            c => Some((sign, c)),
        })
    }
}

/// Errors from parsing a [`ModeString`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ParseModeStringError {
    #[error("mode strings must start with + or -")]
    BadStart,

    #[error("mode strings can only contain +, -, and ASCII letters")]
    BadCharacter,
}
