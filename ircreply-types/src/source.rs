//! Client sources of the form `nick[!user][@host]`.

use crate::nickname::{Nickname, ParseNicknameError, ParseUsernameError, Username};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// The identity of a client as the server reports it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ClientSource {
    pub nickname: Nickname,
    pub user: Option<Username>,
    pub host: Option<String>,
}

impl fmt::Display for ClientSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.nickname)?;
        if let Some(user) = &self.user {
            write!(f, "!{}", user)?;
        }
        if let Some(host) = &self.host {
            write!(f, "@{}", host)?;
        }
        Ok(())
    }
}

impl std::str::FromStr for ClientSource {
    type Err = ParseClientSourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (rest, host) = match s.rsplit_once('@') {
            Some((rest, host)) => (rest, Some(host)),
            None => (s, None),
        };
        let (nick, user) = match rest.rsplit_once('!') {
            Some((nick, user)) => (nick, Some(user)),
            None => (rest, None),
        };

        if let Some(host) = host {
            if host.is_empty() || host.contains(['\0', '\r', '\n', ' ']) {
                return Err(ParseClientSourceError::Host);
            }
        }

        Ok(ClientSource {
            nickname: nick.parse()?,
            user: user.map(str::parse).transpose()?,
            host: host.map(String::from),
        })
    }
}

/// Errors from parsing a [`ClientSource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ParseClientSourceError {
    #[error("invalid nickname: {0}")]
    Nickname(#[from] ParseNicknameError),

    #[error("invalid username: {0}")]
    Username(#[from] ParseUsernameError),

    #[error("hosts cannot be empty or contain NUL, CR, LF, or SPACE")]
    Host,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_source() {
        let source: ClientSource = "coolguy!ag@127.0.0.1".parse().unwrap();
        assert_eq!(source.nickname, "coolguy");
        assert_eq!(source.user.as_ref().map(Username::as_str), Some("ag"));
        assert_eq!(source.host.as_deref(), Some("127.0.0.1"));
        assert_eq!(source.to_string(), "coolguy!ag@127.0.0.1");
    }

    #[test]
    fn test_partial_sources() {
        let source: ClientSource = "coolguy".parse().unwrap();
        assert_eq!(source.user, None);
        assert_eq!(source.host, None);

        let source: ClientSource = "coolguy@host.example".parse().unwrap();
        assert_eq!(source.user, None);
        assert_eq!(source.host.as_deref(), Some("host.example"));

        let source: ClientSource = "coolguy!~ag".parse().unwrap();
        assert_eq!(source.user.as_ref().map(Username::as_str), Some("~ag"));
        assert_eq!(source.host, None);
    }

    #[test]
    fn test_source_errors() {
        assert_eq!(
            "!ag@host".parse::<ClientSource>(),
            Err(ParseClientSourceError::Nickname(ParseNicknameError::Empty))
        );
        assert_eq!(
            "nick!@host".parse::<ClientSource>(),
            Err(ParseClientSourceError::Username(ParseUsernameError::Empty))
        );
        assert_eq!(
            "nick!user@".parse::<ClientSource>(),
            Err(ParseClientSourceError::Host)
        );
    }
}
