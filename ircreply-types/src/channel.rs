//! Channel names and the channel status marker of `RPL_NAMREPLY`.
//!
//! Channel names must start with a channel type prefix and may not contain
//! a space, a BELL (`0x07`) or a comma. Servers advertise their own set of
//! channel types; this crate only recognizes `#` and `&`.

use std::fmt;
use thiserror::Error;

/// Characters recognized as channel type prefixes.
pub const CHANNEL_PREFIXES: [char; 2] = ['#', '&'];

validated_string!(
    /// A validated channel name such as `#rust`.
    Channel,
    ParseChannelError,
    validate_channel,
    "an IRC channel name"
);

fn validate_channel(s: &str) -> Result<(), ParseChannelError> {
    if !channel_prefixed(s) {
        Err(ParseChannelError::BadStart)
    } else if s.contains(['\0', '\r', '\n', ' ', '\x07', ',']) {
        Err(ParseChannelError::BadCharacter)
    } else {
        Ok(())
    }
}

/// Returns true if `s` starts with a recognized channel type prefix.
pub fn channel_prefixed(s: &str) -> bool {
    s.starts_with(CHANNEL_PREFIXES)
}

/// Errors from parsing a [`Channel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ParseChannelError {
    #[error("channels must start with '#' or '&'")]
    BadStart,

    #[error("channels cannot contain NUL, CR, LF, SPACE, BELL, or comma")]
    BadCharacter,
}

/// Visibility of a channel as reported in `RPL_NAMREPLY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelStatus {
    /// `=`
    Public,
    /// `@`
    Secret,
    /// `*`
    Private,
}

impl ChannelStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChannelStatus::Public => "=",
            ChannelStatus::Secret => "@",
            ChannelStatus::Private => "*",
        }
    }
}

impl fmt::Display for ChannelStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for ChannelStatus {
    type Err = ParseChannelStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "=" => Ok(ChannelStatus::Public),
            "@" => Ok(ChannelStatus::Secret),
            "*" => Ok(ChannelStatus::Private),
            _ => Err(ParseChannelStatusError),
        }
    }
}

serialize_display!(ChannelStatus);

/// Error from parsing a [`ChannelStatus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("channel status must be one of '=', '@', or '*'")]
pub struct ParseChannelStatusError;
