//! Nicknames and usernames.

use thiserror::Error;

validated_string!(
    /// A validated client nickname.
    ///
    /// Nicknames are non-empty, may not start with `$`, `:`, a channel type
    /// prefix, or a membership prefix, and may not contain space, comma,
    /// `*`, `?`, `!` or `@`.
    Nickname,
    ParseNicknameError,
    validate_nickname,
    "an IRC nickname"
);

fn validate_nickname(s: &str) -> Result<(), ParseNicknameError> {
    if s.is_empty() {
        Err(ParseNicknameError::Empty)
    } else if s.starts_with(['$', ':', '#', '&', '~', '@', '%', '+']) {
        Err(ParseNicknameError::BadStart)
    } else if s.contains(['\0', '\r', '\n', ' ', ',', '*', '?', '!', '@']) {
        Err(ParseNicknameError::BadCharacter)
    } else {
        Ok(())
    }
}

/// Errors from parsing a [`Nickname`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ParseNicknameError {
    #[error("nicknames cannot be empty")]
    Empty,

    #[error("nicknames cannot start with $, :, #, &, ~, @, %, or +")]
    BadStart,

    #[error("nicknames cannot contain NUL, CR, LF, space, comma, *, ?, !, or @")]
    BadCharacter,
}

validated_string!(
    /// A validated username (the `user` part of `nick!user@host`).
    ///
    /// A leading `~` is allowed; servers use it to mark usernames that were
    /// not confirmed by ident.
    Username,
    ParseUsernameError,
    validate_username,
    "an IRC username"
);

fn validate_username(s: &str) -> Result<(), ParseUsernameError> {
    if s.is_empty() {
        Err(ParseUsernameError::Empty)
    } else if s.starts_with(':') {
        Err(ParseUsernameError::StartsWithColon)
    } else if s.contains(['\0', '\r', '\n', ' ', '@']) {
        Err(ParseUsernameError::BadCharacter)
    } else {
        Ok(())
    }
}

/// Errors from parsing a [`Username`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ParseUsernameError {
    #[error("usernames cannot be empty")]
    Empty,

    #[error("usernames cannot start with a colon")]
    StartsWithColon,

    #[error("usernames cannot contain NUL, CR, LF, SPACE, or @")]
    BadCharacter,
}
