//! IRC command names.

use std::fmt;
use thiserror::Error;

/// A command name as it appears in replies such as `ERR_UNKNOWNCOMMAND`.
///
/// Commands this crate knows about get their own variant; any other
/// non-empty token is kept verbatim in `Unknown`, since replies like
/// `ERR_UNKNOWNCOMMAND` echo back whatever the client sent.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Verb {
    Admin,
    Authenticate,
    Away,
    Cap,
    Connect,
    Error,
    Help,
    Info,
    Invite,
    Join,
    Kick,
    Kill,
    Links,
    List,
    Lusers,
    Mode,
    Motd,
    Names,
    Nick,
    Notice,
    Oper,
    Part,
    Pass,
    Ping,
    Pong,
    PrivMsg,
    Quit,
    Rehash,
    Restart,
    Squit,
    Stats,
    Time,
    Topic,
    User,
    UserHost,
    Version,
    Wallops,
    Who,
    WhoIs,
    WhoWas,
    Unknown(String),
}

impl Verb {
    pub fn as_str(&self) -> &str {
        match self {
            Verb::Admin => "ADMIN",
            Verb::Authenticate => "AUTHENTICATE",
            Verb::Away => "AWAY",
            Verb::Cap => "CAP",
            Verb::Connect => "CONNECT",
            Verb::Error => "ERROR",
            Verb::Help => "HELP",
            Verb::Info => "INFO",
            Verb::Invite => "INVITE",
            Verb::Join => "JOIN",
            Verb::Kick => "KICK",
            Verb::Kill => "KILL",
            Verb::Links => "LINKS",
            Verb::List => "LIST",
            Verb::Lusers => "LUSERS",
            Verb::Mode => "MODE",
            Verb::Motd => "MOTD",
            Verb::Names => "NAMES",
            Verb::Nick => "NICK",
            Verb::Notice => "NOTICE",
            Verb::Oper => "OPER",
            Verb::Part => "PART",
            Verb::Pass => "PASS",
            Verb::Ping => "PING",
            Verb::Pong => "PONG",
            Verb::PrivMsg => "PRIVMSG",
            Verb::Quit => "QUIT",
            Verb::Rehash => "REHASH",
            Verb::Restart => "RESTART",
            Verb::Squit => "SQUIT",
            Verb::Stats => "STATS",
            Verb::Time => "TIME",
            Verb::Topic => "TOPIC",
            Verb::User => "USER",
            Verb::UserHost => "USERHOST",
            Verb::Version => "VERSION",
            Verb::Wallops => "WALLOPS",
            Verb::Who => "WHO",
            Verb::WhoIs => "WHOIS",
            Verb::WhoWas => "WHOWAS",
            Verb::Unknown(s) => s,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Verb::Unknown(_))
    }

    fn known(s: &str) -> Option<Verb> {
        let verb = match s {
            "ADMIN" => Verb::Admin,
            "AUTHENTICATE" => Verb::Authenticate,
            "AWAY" => Verb::Away,
            "CAP" => Verb::Cap,
            "CONNECT" => Verb::Connect,
            "ERROR" => Verb::Error,
            "HELP" => Verb::Help,
            "INFO" => Verb::Info,
            "INVITE" => Verb::Invite,
            "JOIN" => Verb::Join,
            "KICK" => Verb::Kick,
            "KILL" => Verb::Kill,
            "LINKS" => Verb::Links,
            "LIST" => Verb::List,
            "LUSERS" => Verb::Lusers,
            "MODE" => Verb::Mode,
            "MOTD" => Verb::Motd,
            "NAMES" => Verb::Names,
            "NICK" => Verb::Nick,
            "NOTICE" => Verb::Notice,
            "OPER" => Verb::Oper,
            "PART" => Verb::Part,
            "PASS" => Verb::Pass,
            "PING" => Verb::Ping,
            "PONG" => Verb::Pong,
            "PRIVMSG" => Verb::PrivMsg,
            "QUIT" => Verb::Quit,
            "REHASH" => Verb::Rehash,
            "RESTART" => Verb::Restart,
            "SQUIT" => Verb::Squit,
            "STATS" => Verb::Stats,
            "TIME" => Verb::Time,
            "TOPIC" => Verb::Topic,
            "USER" => Verb::User,
            "USERHOST" => Verb::UserHost,
            "VERSION" => Verb::Version,
            "WALLOPS" => Verb::Wallops,
            "WHO" => Verb::Who,
            "WHOIS" => Verb::WhoIs,
            "WHOWAS" => Verb::WhoWas,
            _ => return None,
        };
        Some(verb)
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for Verb {
    type Err = ParseVerbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseVerbError::Empty);
        }
        Ok(Verb::known(s).unwrap_or_else(|| Verb::Unknown(s.to_string())))
    }
}

impl PartialEq<str> for Verb {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl<'a> PartialEq<&'a str> for Verb {
    fn eq(&self, other: &&'a str) -> bool {
        self.as_str() == *other
    }
}

serialize_display!(Verb);

/// Errors from parsing a [`Verb`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ParseVerbError {
    #[error("commands cannot be empty")]
    Empty,
}
