//! Channel membership prefixes and the prefixed list elements built on them.
//!
//! `RPL_NAMREPLY` lists nicknames and `RPL_WHOISCHANNELS` lists channels,
//! each optionally preceded by a single membership prefix such as `@`.

use crate::channel::{channel_prefixed, Channel, ParseChannelError};
use crate::nickname::{Nickname, ParseNicknameError};
use serde::Serialize;
use std::fmt;

/// Channel membership levels and their prefix characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelMembership {
    Founder,
    Protected,
    Operator,
    HalfOperator,
    Voiced,
}

impl ChannelMembership {
    pub fn as_prefix(self) -> char {
        match self {
            ChannelMembership::Founder => '~',
            ChannelMembership::Protected => '&',
            ChannelMembership::Operator => '@',
            ChannelMembership::HalfOperator => '%',
            ChannelMembership::Voiced => '+',
        }
    }

    pub fn from_prefix(ch: char) -> Option<Self> {
        match ch {
            '~' => Some(ChannelMembership::Founder),
            '&' => Some(ChannelMembership::Protected),
            '@' => Some(ChannelMembership::Operator),
            '%' => Some(ChannelMembership::HalfOperator),
            '+' => Some(ChannelMembership::Voiced),
            _ => None,
        }
    }

    /// Returns the channel mode letter that grants this membership level.
    pub fn as_mode(self) -> char {
        match self {
            ChannelMembership::Founder => 'q',
            ChannelMembership::Protected => 'a',
            ChannelMembership::Operator => 'o',
            ChannelMembership::HalfOperator => 'h',
            ChannelMembership::Voiced => 'v',
        }
    }
}

/// Splits a leading membership prefix off `s`, if there is one.
pub fn split_membership(s: &str) -> (Option<ChannelMembership>, &str) {
    let mut chars = s.chars();
    match chars.next().and_then(ChannelMembership::from_prefix) {
        Some(m) => (Some(m), chars.as_str()),
        None => (None, s),
    }
}

/// A nickname with its optional membership prefix, e.g. `@Alice`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrefixedNickname {
    pub prefix: Option<char>,
    pub nickname: Nickname,
}

impl PrefixedNickname {
    pub fn membership(&self) -> Option<ChannelMembership> {
        self.prefix.and_then(ChannelMembership::from_prefix)
    }
}

impl fmt::Display for PrefixedNickname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(prefix) = self.prefix {
            write!(f, "{}", prefix)?;
        }
        write!(f, "{}", self.nickname)
    }
}

impl std::str::FromStr for PrefixedNickname {
    type Err = ParseNicknameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Nicknames may never start with a membership prefix, so popping one
        // is unambiguous.
        let (membership, rest) = split_membership(s);
        Ok(PrefixedNickname {
            prefix: membership.map(ChannelMembership::as_prefix),
            nickname: rest.parse()?,
        })
    }
}

/// A channel with its optional membership prefix, e.g. `@#rust`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrefixedChannel {
    pub prefix: Option<char>,
    pub channel: Channel,
}

impl PrefixedChannel {
    pub fn membership(&self) -> Option<ChannelMembership> {
        self.prefix.and_then(ChannelMembership::from_prefix)
    }
}

impl fmt::Display for PrefixedChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(prefix) = self.prefix {
            write!(f, "{}", prefix)?;
        }
        write!(f, "{}", self.channel)
    }
}

impl std::str::FromStr for PrefixedChannel {
    type Err = ParseChannelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // `&` is both a membership prefix and a channel type, so a prefix is
        // only taken when what follows it is still a channel name.
        match split_membership(s) {
            (Some(m), rest) if channel_prefixed(rest) => Ok(PrefixedChannel {
                prefix: Some(m.as_prefix()),
                channel: rest.parse()?,
            }),
            _ => Ok(PrefixedChannel {
                prefix: None,
                channel: s.parse()?,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_membership() {
        assert_eq!(
            split_membership("@Alice"),
            (Some(ChannelMembership::Operator), "Alice")
        );
        assert_eq!(split_membership("Dave"), (None, "Dave"));
        assert_eq!(split_membership(""), (None, ""));
    }

    #[test]
    fn test_prefixed_nickname() {
        let p: PrefixedNickname = "+Carl".parse().unwrap();
        assert_eq!(p.prefix, Some('+'));
        assert_eq!(p.nickname, "Carl");
        assert_eq!(p.membership(), Some(ChannelMembership::Voiced));
        assert_eq!(p.to_string(), "+Carl");

        let p: PrefixedNickname = "Dave".parse().unwrap();
        assert_eq!(p.prefix, None);
        assert_eq!(p.to_string(), "Dave");

        assert_eq!(
            "@".parse::<PrefixedNickname>(),
            Err(ParseNicknameError::Empty)
        );
        assert_eq!(
            "@@x".parse::<PrefixedNickname>(),
            Err(ParseNicknameError::BadStart)
        );
    }

    #[test]
    fn test_prefixed_channel() {
        let p: PrefixedChannel = "@#rust".parse().unwrap();
        assert_eq!(p.prefix, Some('@'));
        assert_eq!(p.channel, "#rust");

        // A bare `&` channel keeps its type prefix.
        let p: PrefixedChannel = "&local".parse().unwrap();
        assert_eq!(p.prefix, None);
        assert_eq!(p.channel, "&local");

        let p: PrefixedChannel = "+&local".parse().unwrap();
        assert_eq!(p.prefix, Some('+'));
        assert_eq!(p.channel, "&local");

        assert_eq!(
            "@rust".parse::<PrefixedChannel>(),
            Err(ParseChannelError::BadStart)
        );
    }

    #[test]
    fn test_membership_modes() {
        assert_eq!(ChannelMembership::Operator.as_mode(), 'o');
        assert_eq!(ChannelMembership::Founder.as_prefix(), '~');
        assert_eq!(ChannelMembership::from_prefix('x'), None);
    }
}
