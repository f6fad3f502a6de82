//! Compound tokens from `RPL_WHOREPLY` and `RPL_USERHOST`.

use crate::membership::{split_membership, ChannelMembership};
use crate::nickname::{Nickname, ParseNicknameError};
use std::fmt;
use thiserror::Error;

/// The flags column of `RPL_WHOREPLY`, e.g. `H*@i`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WhoFlags {
    pub is_away: bool,
    pub is_op: bool,
    pub membership: Option<ChannelMembership>,
    /// User modes and other server-specific flags, kept verbatim.
    pub flags: String,
}

impl fmt::Display for WhoFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.is_away { "G" } else { "H" })?;
        if self.is_op {
            f.write_str("*")?;
        }
        if let Some(m) = self.membership {
            write!(f, "{}", m.as_prefix())?;
        }
        f.write_str(&self.flags)
    }
}

impl std::str::FromStr for WhoFlags {
    type Err = ParseWhoFlagsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (is_away, rest) = if let Some(rest) = s.strip_prefix('G') {
            (true, rest)
        } else if let Some(rest) = s.strip_prefix('H') {
            (false, rest)
        } else {
            return Err(ParseWhoFlagsError::NoAwayFlag);
        };
        let (is_op, rest) = match rest.strip_prefix('*') {
            Some(rest) => (true, rest),
            None => (false, rest),
        };
        let (membership, flags) = split_membership(rest);
        Ok(WhoFlags {
            is_away,
            is_op,
            membership,
            flags: flags.to_string(),
        })
    }
}

serialize_display!(WhoFlags);

/// Error from parsing [`WhoFlags`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ParseWhoFlagsError {
    #[error("WHO flags must start with H (here) or G (gone)")]
    NoAwayFlag,
}

/// One entry of an `RPL_USERHOST` reply: `nick[*]=(+|-)hostname`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserHostReply {
    pub nickname: Nickname,
    pub is_op: bool,
    pub is_away: bool,
    /// Often `[~]user@host` in practice.
    pub hostname: String,
}

impl fmt::Display for UserHostReply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.nickname)?;
        if self.is_op {
            f.write_str("*")?;
        }
        write!(
            f,
            "={}{}",
            if self.is_away { '-' } else { '+' },
            self.hostname
        )
    }
}

impl std::str::FromStr for UserHostReply {
    type Err = ParseUserHostReplyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (left, right) = s.split_once('=').ok_or(ParseUserHostReplyError::NoEquals)?;
        let (nick, is_op) = match left.strip_suffix('*') {
            Some(nick) => (nick, true),
            None => (left, false),
        };
        let nickname = nick.parse()?;
        let (is_away, hostname) = if let Some(host) = right.strip_prefix('-') {
            (true, host)
        } else if let Some(host) = right.strip_prefix('+') {
            (false, host)
        } else {
            return Err(ParseUserHostReplyError::NoAwayFlag);
        };
        Ok(UserHostReply {
            nickname,
            is_op,
            is_away,
            hostname: hostname.to_string(),
        })
    }
}

serialize_display!(UserHostReply);

/// Errors from parsing a [`UserHostReply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ParseUserHostReplyError {
    #[error("USERHOST entry is missing its '='")]
    NoEquals,

    #[error("invalid nickname: {0}")]
    Nickname(#[from] ParseNicknameError),

    #[error("USERHOST entry is missing its away flag (+ or -)")]
    NoAwayFlag,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_who_flags_here() {
        let flags: WhoFlags = "H".parse().unwrap();
        assert_eq!(
            flags,
            WhoFlags {
                is_away: false,
                is_op: false,
                membership: None,
                flags: String::new(),
            }
        );
    }

    #[test]
    fn test_who_flags_full() {
        let flags: WhoFlags = "G*@ix".parse().unwrap();
        assert!(flags.is_away);
        assert!(flags.is_op);
        assert_eq!(flags.membership, Some(ChannelMembership::Operator));
        assert_eq!(flags.flags, "ix");
        assert_eq!(flags.to_string(), "G*@ix");

        assert_eq!("*H".parse::<WhoFlags>(), Err(ParseWhoFlagsError::NoAwayFlag));
        assert_eq!("".parse::<WhoFlags>(), Err(ParseWhoFlagsError::NoAwayFlag));
    }

    #[test]
    fn test_userhost_reply() {
        let reply: UserHostReply = "jwodder*=+~jwuser@127.0.0.1".parse().unwrap();
        assert_eq!(reply.nickname, "jwodder");
        assert!(reply.is_op);
        assert!(!reply.is_away);
        assert_eq!(reply.hostname, "~jwuser@127.0.0.1");
        assert_eq!(reply.to_string(), "jwodder*=+~jwuser@127.0.0.1");

        let reply: UserHostReply = "Alice=-host".parse().unwrap();
        assert!(!reply.is_op);
        assert!(reply.is_away);
    }

    #[test]
    fn test_userhost_reply_errors() {
        assert_eq!(
            "Alice".parse::<UserHostReply>(),
            Err(ParseUserHostReplyError::NoEquals)
        );
        assert_eq!(
            "Alice=host".parse::<UserHostReply>(),
            Err(ParseUserHostReplyError::NoAwayFlag)
        );
        assert_eq!(
            "=+host".parse::<UserHostReply>(),
            Err(ParseUserHostReplyError::Nickname(ParseNicknameError::Empty))
        );
    }
}
