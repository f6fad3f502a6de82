//! Reply, message, and mode targets.
//!
//! These are the sum types that appear where IRC allows either a channel or
//! a nickname, or the `*` placeholder a server sends before a client has
//! registered.

use crate::channel::{channel_prefixed, Channel, ParseChannelError};
use crate::nickname::{Nickname, ParseNicknameError};
use std::fmt;
use thiserror::Error;

/// The first parameter of every numeric reply: the client being addressed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ReplyTarget {
    /// `*`, used before the client has a nickname.
    Star,
    Nick(Nickname),
}

impl ReplyTarget {
    pub fn as_str(&self) -> &str {
        match self {
            ReplyTarget::Star => "*",
            ReplyTarget::Nick(nick) => nick.as_str(),
        }
    }

    pub fn is_star(&self) -> bool {
        matches!(self, ReplyTarget::Star)
    }

    pub fn nickname(&self) -> Option<&Nickname> {
        match self {
            ReplyTarget::Star => None,
            ReplyTarget::Nick(nick) => Some(nick),
        }
    }
}

impl fmt::Display for ReplyTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for ReplyTarget {
    type Err = ParseReplyTargetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "*" {
            Ok(ReplyTarget::Star)
        } else {
            Ok(ReplyTarget::Nick(s.parse()?))
        }
    }
}

impl From<Nickname> for ReplyTarget {
    fn from(nick: Nickname) -> Self {
        ReplyTarget::Nick(nick)
    }
}

serialize_display!(ReplyTarget);

/// Error from parsing a [`ReplyTarget`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("reply target is neither '*' nor a valid nickname: {0}")]
pub struct ParseReplyTargetError(#[from] pub ParseNicknameError);

/// The target of a `PRIVMSG` or `NOTICE`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MsgTarget {
    Star,
    Channel(Channel),
    Nick(Nickname),
}

impl MsgTarget {
    pub fn as_str(&self) -> &str {
        match self {
            MsgTarget::Star => "*",
            MsgTarget::Channel(chan) => chan.as_str(),
            MsgTarget::Nick(nick) => nick.as_str(),
        }
    }
}

impl fmt::Display for MsgTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for MsgTarget {
    type Err = ParseMsgTargetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "*" {
            Ok(MsgTarget::Star)
        } else if channel_prefixed(s) {
            s.parse()
                .map(MsgTarget::Channel)
                .map_err(ParseMsgTargetError::Channel)
        } else {
            s.parse()
                .map(MsgTarget::Nick)
                .map_err(ParseMsgTargetError::Nickname)
        }
    }
}

serialize_display!(MsgTarget);

/// Errors from parsing a [`MsgTarget`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ParseMsgTargetError {
    #[error("invalid channel target: {0}")]
    Channel(#[source] ParseChannelError),

    #[error("invalid nickname target: {0}")]
    Nickname(#[source] ParseNicknameError),
}

/// The target of a `MODE` command.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ModeTarget {
    Channel(Channel),
    User(Nickname),
}

impl ModeTarget {
    pub fn as_str(&self) -> &str {
        match self {
            ModeTarget::Channel(chan) => chan.as_str(),
            ModeTarget::User(nick) => nick.as_str(),
        }
    }

    pub fn is_channel(&self) -> bool {
        matches!(self, ModeTarget::Channel(_))
    }
}

impl fmt::Display for ModeTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for ModeTarget {
    type Err = ParseModeTargetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if channel_prefixed(s) {
            s.parse()
                .map(ModeTarget::Channel)
                .map_err(ParseModeTargetError::Channel)
        } else {
            s.parse()
                .map(ModeTarget::User)
                .map_err(ParseModeTargetError::Nickname)
        }
    }
}

serialize_display!(ModeTarget);

/// Errors from parsing a [`ModeTarget`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ParseModeTargetError {
    #[error("invalid channel target: {0}")]
    Channel(#[source] ParseChannelError),

    #[error("invalid nickname target: {0}")]
    Nickname(#[source] ParseNicknameError),
}
