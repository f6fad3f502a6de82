//! Hostnames and `user@host` pairs as reported by `RPL_WHOISACTUALLY`.

use crate::nickname::{ParseUsernameError, Username};
use serde::Serialize;
use std::fmt;
use std::net::{IpAddr, Ipv6Addr};
use thiserror::Error;

/// Characters that may never appear in a host.
const FORBIDDEN: [char; 18] = [
    '\0', '\t', '\n', '\r', ' ', '#', '%', '/', ':', '<', '>', '?', '@', '[', '\\', ']', '^', '|',
];

/// A host: either a domain name or an IP address.
///
/// IPv6 addresses are accepted bare (`::1`) or bracketed (`[::1]`). A domain
/// whose final label is numeric must be a valid IPv4 address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Host {
    Domain(String),
    Ip(IpAddr),
}

impl Host {
    pub fn ip(&self) -> Option<IpAddr> {
        match self {
            Host::Domain(_) => None,
            Host::Ip(ip) => Some(*ip),
        }
    }

    pub fn domain(&self) -> Option<&str> {
        match self {
            Host::Domain(d) => Some(d),
            Host::Ip(_) => None,
        }
    }
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Host::Domain(d) => f.pad(d),
            Host::Ip(ip) => write!(f, "{}", ip),
        }
    }
}

impl std::str::FromStr for Host {
    type Err = ParseHostError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseHostError::Empty);
        }
        if let Some(inner) = s.strip_prefix('[') {
            return inner
                .strip_suffix(']')
                .and_then(|v6| v6.parse::<Ipv6Addr>().ok())
                .map(|ip| Host::Ip(IpAddr::V6(ip)))
                .ok_or(ParseHostError::BadIpv6);
        }
        if let Ok(ip) = s.parse::<IpAddr>() {
            return Ok(Host::Ip(ip));
        }
        if s.contains(FORBIDDEN) || s.chars().any(|c| c.is_ascii_control()) {
            return Err(ParseHostError::BadCharacter);
        }

        let last_label = s.strip_suffix('.').unwrap_or(s).rsplit('.').next();
        if last_label.is_some_and(|l| !l.is_empty() && l.bytes().all(|b| b.is_ascii_digit())) {
            return Err(ParseHostError::BadIpv4);
        }

        Ok(Host::Domain(s.to_string()))
    }
}

serialize_display!(Host);

/// Errors from parsing a [`Host`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ParseHostError {
    #[error("hosts cannot be empty")]
    Empty,

    #[error("host contains a forbidden character")]
    BadCharacter,

    #[error("host ends in a number but is not a valid IPv4 address")]
    BadIpv4,

    #[error("invalid bracketed IPv6 address")]
    BadIpv6,
}

/// A `user@host` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct UserAtHost {
    pub username: Username,
    pub host: Host,
}

impl fmt::Display for UserAtHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.username, self.host)
    }
}

impl std::str::FromStr for UserAtHost {
    type Err = ParseUserAtHostError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (user, host) = s.rsplit_once('@').ok_or(ParseUserAtHostError::NoAt)?;
        Ok(UserAtHost {
            username: user.parse()?,
            host: host.parse()?,
        })
    }
}

/// Errors from parsing a [`UserAtHost`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ParseUserAtHostError {
    #[error("expected user@host but found no '@'")]
    NoAt,

    #[error("invalid username: {0}")]
    Username(#[from] ParseUsernameError),

    #[error("invalid host: {0}")]
    Host(#[from] ParseHostError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    #[test]
    fn test_parse_host() {
        assert_eq!(
            "irc.example.net".parse(),
            Ok(Host::Domain("irc.example.net".into()))
        );
        assert_eq!(
            "192.0.2.7".parse(),
            Ok(Host::Ip(IpAddr::V4(Ipv4Addr::new(192, 0, 2, 7))))
        );
        assert_eq!("::1".parse::<Host>().unwrap().ip(), Some(IpAddr::V6(Ipv6Addr::LOCALHOST)));
        assert_eq!(
            "[2001:db8::1]".parse::<Host>().unwrap().to_string(),
            "2001:db8::1"
        );
        assert_eq!(
            "gateway/web/x".parse::<Host>(),
            Err(ParseHostError::BadCharacter)
        );
    }

    #[test]
    fn test_host_errors() {
        assert_eq!("".parse::<Host>(), Err(ParseHostError::Empty));
        assert_eq!("not a host!!".parse::<Host>(), Err(ParseHostError::BadCharacter));
        assert_eq!("999.1.1".parse::<Host>(), Err(ParseHostError::BadIpv4));
        assert_eq!("[::1".parse::<Host>(), Err(ParseHostError::BadIpv6));
        assert_eq!("[nope]".parse::<Host>(), Err(ParseHostError::BadIpv6));
    }

    #[test]
    fn test_parse_user_at_host() {
        let uh: UserAtHost = "~bob@host.example".parse().unwrap();
        assert_eq!(uh.username, "~bob");
        assert_eq!(uh.host.domain(), Some("host.example"));
        assert_eq!(uh.to_string(), "~bob@host.example");

        assert_eq!(
            "host.example".parse::<UserAtHost>(),
            Err(ParseUserAtHostError::NoAt)
        );
        assert_eq!(
            "bob@".parse::<UserAtHost>(),
            Err(ParseUserAtHostError::Host(ParseHostError::Empty))
        );
        assert!(matches!(
            ":bob@host".parse::<UserAtHost>(),
            Err(ParseUserAtHostError::Username(_))
        ));
    }

    #[test]
    fn test_host_serializes_as_text() {
        let host: Host = "10.0.0.1".parse().unwrap();
        assert_eq!(serde_json::to_string(&host).unwrap(), "\"10.0.0.1\"");
    }
}
