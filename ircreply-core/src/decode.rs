//! Conversion of raw field text into typed values.

use crate::error::ReplyError;
use crate::extract::RawSlice;
use crate::params::ParameterList;
use crate::schema::{DomainType, ValueType};
use ircreply_types::{
    Channel, ChannelStatus, ClientSource, Host, ISupportParam, ModeString, ModeTarget, MsgTarget,
    Nickname, PrefixedChannel, PrefixedNickname, ReplyTarget, UserAtHost, UserHostReply, Username,
    Verb, WhoFlags,
};
use serde::Serialize;
use std::fmt;
use std::net::IpAddr;

/// A decoded field value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    U16(u16),
    U32(u32),
    U64(u64),
    Text(String),
    Params(ParameterList),
    Channel(Channel),
    ChannelStatus(ChannelStatus),
    ClientSource(ClientSource),
    ISupportParam(ISupportParam),
    ModeString(ModeString),
    ModeTarget(ModeTarget),
    MsgTarget(MsgTarget),
    Nickname(Nickname),
    ReplyTarget(ReplyTarget),
    Username(Username),
    Verb(Verb),
    WhoFlags(WhoFlags),
    UserHostReply(UserHostReply),
    PrefixedChannel(PrefixedChannel),
    PrefixedNickname(PrefixedNickname),
    Host(Host),
    UserAtHost(UserAtHost),
    IpAddr(IpAddr),
    List(Vec<Value>),
}

impl Value {
    /// Returns the text of a `Text` value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns any unsigned integer value widened to `u64`.
    pub fn as_uint(&self) -> Option<u64> {
        match *self {
            Value::U16(n) => Some(u64::from(n)),
            Value::U32(n) => Some(u64::from(n)),
            Value::U64(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_params(&self) -> Option<&ParameterList> {
        match self {
            Value::Params(params) => Some(params),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::U16(n) => write!(f, "{}", n),
            Value::U32(n) => write!(f, "{}", n),
            Value::U64(n) => write!(f, "{}", n),
            Value::Text(s) => f.write_str(s),
            Value::Params(p) => write!(f, "{}", p),
            Value::Channel(v) => write!(f, "{}", v),
            Value::ChannelStatus(v) => write!(f, "{}", v),
            Value::ClientSource(v) => write!(f, "{}", v),
            Value::ISupportParam(v) => write!(f, "{}", v),
            Value::ModeString(v) => write!(f, "{}", v),
            Value::ModeTarget(v) => write!(f, "{}", v),
            Value::MsgTarget(v) => write!(f, "{}", v),
            Value::Nickname(v) => write!(f, "{}", v),
            Value::ReplyTarget(v) => write!(f, "{}", v),
            Value::Username(v) => write!(f, "{}", v),
            Value::Verb(v) => write!(f, "{}", v),
            Value::WhoFlags(v) => write!(f, "{}", v),
            Value::UserHostReply(v) => write!(f, "{}", v),
            Value::PrefixedChannel(v) => write!(f, "{}", v),
            Value::PrefixedNickname(v) => write!(f, "{}", v),
            Value::Host(v) => write!(f, "{}", v),
            Value::UserAtHost(v) => write!(f, "{}", v),
            Value::IpAddr(v) => write!(f, "{}", v),
            Value::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{}", item)?;
                }
                Ok(())
            }
        }
    }
}

/// Decodes a single token as `ty`.
pub fn decode_field(raw: &str, ty: ValueType) -> Result<Value, ReplyError> {
    match ty {
        ValueType::U16 => parse_int(raw).map(Value::U16),
        ValueType::U32 => parse_int(raw).map(Value::U32),
        ValueType::U64 => parse_int(raw).map(Value::U64),
        ValueType::Text => Ok(Value::Text(raw.to_string())),
        ValueType::Params => Ok(Value::Params(ParameterList::from_iter([raw]))),
        ValueType::Domain(d) => parse_domain(raw, d),
        ValueType::Words(d) => raw
            .split(' ')
            .filter(|w| !w.is_empty())
            .map(|w| parse_domain(w, d))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::List),
    }
}

/// Decodes a run of tokens as `ty`.
///
/// `Params` keeps the tokens as a parameter list; any other type decodes
/// each token in order and fails on the first one that does not parse.
pub fn decode_list(tokens: &[String], ty: ValueType) -> Result<Value, ReplyError> {
    match ty {
        ValueType::Params => Ok(Value::Params(ParameterList::from(tokens))),
        _ => tokens
            .iter()
            .map(|t| decode_field(t, ty))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::List),
    }
}

/// Decodes whatever extraction produced for a field. Absent slots decode
/// to `None`.
pub fn decode_slice(slice: RawSlice<'_>, ty: ValueType) -> Result<Option<Value>, ReplyError> {
    match slice {
        RawSlice::Absent => Ok(None),
        RawSlice::One(raw) => decode_field(raw, ty).map(Some),
        RawSlice::Many(tokens) => decode_list(tokens, ty).map(Some),
    }
}

fn parse_int<T>(raw: &str) -> Result<T, ReplyError>
where
    T: std::str::FromStr<Err = std::num::ParseIntError>,
{
    raw.parse().map_err(|cause| ReplyError::IntParse {
        raw: raw.to_string(),
        cause,
    })
}

fn parse_domain(raw: &str, ty: DomainType) -> Result<Value, ReplyError> {
    macro_rules! parse_as {
        ($variant:ident) => {
            raw.parse().map(Value::$variant).map_err(|cause| ReplyError::$variant {
                raw: raw.to_string(),
                cause,
            })
        };
    }

    match ty {
        DomainType::Channel => parse_as!(Channel),
        DomainType::ChannelStatus => parse_as!(ChannelStatus),
        DomainType::ClientSource => parse_as!(ClientSource),
        DomainType::ISupportParam => parse_as!(ISupportParam),
        DomainType::ModeString => parse_as!(ModeString),
        DomainType::ModeTarget => parse_as!(ModeTarget),
        DomainType::MsgTarget => parse_as!(MsgTarget),
        DomainType::Nickname => parse_as!(Nickname),
        DomainType::ReplyTarget => parse_as!(ReplyTarget),
        DomainType::Username => parse_as!(Username),
        DomainType::Verb => parse_as!(Verb),
        DomainType::WhoFlags => parse_as!(WhoFlags),
        DomainType::UserHostReply => parse_as!(UserHostReply),
        DomainType::PrefixedChannel => parse_as!(PrefixedChannel),
        DomainType::PrefixedNickname => parse_as!(PrefixedNickname),
        DomainType::Host => parse_as!(Host),
        DomainType::UserAtHost => parse_as!(UserAtHost),
        DomainType::IpAddr => parse_as!(IpAddr),
    }
}
