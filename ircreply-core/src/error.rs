//! Decoding and registry error types.

use crate::schema::{DomainType, ReplyCode, Rule};
use ircreply_types::{
    ParseChannelError, ParseChannelStatusError, ParseClientSourceError, ParseHostError,
    ParseISupportParamError, ParseModeStringError, ParseModeTargetError, ParseMsgTargetError,
    ParseNicknameError, ParseReplyTargetError, ParseUserAtHostError, ParseUserHostReplyError,
    ParseUsernameError, ParseVerbError, ParseWhoFlagsError,
};
use std::net::AddrParseError;
use std::num::ParseIntError;
use thiserror::Error;

/// Errors from decoding a numeric reply.
///
/// Each variant carries the raw text that failed, so callers can report the
/// offending token without holding on to the parameter list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplyError {
    #[error("unknown/unrecognized reply code {0:03}")]
    UnknownCode(ReplyCode),

    #[error("reply requires at least {required} parameters but received {received}")]
    ParamQty { required: usize, received: usize },

    #[error("failed to parse integer field {raw:?}")]
    IntParse {
        raw: String,
        #[source]
        cause: ParseIntError,
    },

    #[error("failed to parse channel {raw:?}")]
    Channel {
        raw: String,
        #[source]
        cause: ParseChannelError,
    },

    #[error("failed to parse channel status {raw:?}")]
    ChannelStatus {
        raw: String,
        #[source]
        cause: ParseChannelStatusError,
    },

    #[error("failed to parse client source {raw:?}")]
    ClientSource {
        raw: String,
        #[source]
        cause: ParseClientSourceError,
    },

    #[error("failed to parse ISUPPORT token {raw:?}")]
    ISupportParam {
        raw: String,
        #[source]
        cause: ParseISupportParamError,
    },

    #[error("failed to parse mode string {raw:?}")]
    ModeString {
        raw: String,
        #[source]
        cause: ParseModeStringError,
    },

    #[error("failed to parse mode target {raw:?}")]
    ModeTarget {
        raw: String,
        #[source]
        cause: ParseModeTargetError,
    },

    #[error("failed to parse message target {raw:?}")]
    MsgTarget {
        raw: String,
        #[source]
        cause: ParseMsgTargetError,
    },

    #[error("failed to parse nickname {raw:?}")]
    Nickname {
        raw: String,
        #[source]
        cause: ParseNicknameError,
    },

    #[error("failed to parse reply target {raw:?}")]
    ReplyTarget {
        raw: String,
        #[source]
        cause: ParseReplyTargetError,
    },

    #[error("failed to parse username {raw:?}")]
    Username {
        raw: String,
        #[source]
        cause: ParseUsernameError,
    },

    #[error("failed to parse command {raw:?}")]
    Verb {
        raw: String,
        #[source]
        cause: ParseVerbError,
    },

    #[error("failed to parse WHO flags {raw:?}")]
    WhoFlags {
        raw: String,
        #[source]
        cause: ParseWhoFlagsError,
    },

    #[error("failed to parse USERHOST entry {raw:?}")]
    UserHostReply {
        raw: String,
        #[source]
        cause: ParseUserHostReplyError,
    },

    #[error("failed to parse prefixed channel {raw:?}")]
    PrefixedChannel {
        raw: String,
        #[source]
        cause: ParseChannelError,
    },

    #[error("failed to parse prefixed nickname {raw:?}")]
    PrefixedNickname {
        raw: String,
        #[source]
        cause: ParseNicknameError,
    },

    #[error("failed to parse host {raw:?}")]
    Host {
        raw: String,
        #[source]
        cause: ParseHostError,
    },

    #[error("failed to parse user@host {raw:?}")]
    UserAtHost {
        raw: String,
        #[source]
        cause: ParseUserAtHostError,
    },

    #[error("failed to parse IP address {raw:?}")]
    IpAddr {
        raw: String,
        #[source]
        cause: AddrParseError,
    },

    #[error(
        "schema for reply {code:03} is malformed: field '{field}' needs parameter {index} but only {len} were given"
    )]
    MalformedSchema {
        code: ReplyCode,
        field: &'static str,
        index: usize,
        len: usize,
    },
}

impl ReplyError {
    /// Returns a stable tag suitable for machine-readable output.
    pub fn kind(&self) -> &'static str {
        match self {
            ReplyError::UnknownCode(_) => "UNKNOWN_CODE",
            ReplyError::ParamQty { .. } => "PARAM_QTY",
            ReplyError::IntParse { .. } => "INT_PARSE",
            ReplyError::MalformedSchema { .. } => "MALFORMED_SCHEMA",
            _ => "TYPED_FIELD",
        }
    }

    /// Returns the value type that failed to parse, for typed-field errors.
    pub fn type_tag(&self) -> Option<DomainType> {
        let tag = match self {
            ReplyError::Channel { .. } => DomainType::Channel,
            ReplyError::ChannelStatus { .. } => DomainType::ChannelStatus,
            ReplyError::ClientSource { .. } => DomainType::ClientSource,
            ReplyError::ISupportParam { .. } => DomainType::ISupportParam,
            ReplyError::ModeString { .. } => DomainType::ModeString,
            ReplyError::ModeTarget { .. } => DomainType::ModeTarget,
            ReplyError::MsgTarget { .. } => DomainType::MsgTarget,
            ReplyError::Nickname { .. } => DomainType::Nickname,
            ReplyError::ReplyTarget { .. } => DomainType::ReplyTarget,
            ReplyError::Username { .. } => DomainType::Username,
            ReplyError::Verb { .. } => DomainType::Verb,
            ReplyError::WhoFlags { .. } => DomainType::WhoFlags,
            ReplyError::UserHostReply { .. } => DomainType::UserHostReply,
            ReplyError::PrefixedChannel { .. } => DomainType::PrefixedChannel,
            ReplyError::PrefixedNickname { .. } => DomainType::PrefixedNickname,
            ReplyError::Host { .. } => DomainType::Host,
            ReplyError::UserAtHost { .. } => DomainType::UserAtHost,
            ReplyError::IpAddr { .. } => DomainType::IpAddr,
            ReplyError::UnknownCode(_)
            | ReplyError::ParamQty { .. }
            | ReplyError::IntParse { .. }
            | ReplyError::MalformedSchema { .. } => return None,
        };
        Some(tag)
    }

    /// Returns the raw text that failed to parse, if the error is about a
    /// single token.
    pub fn raw(&self) -> Option<&str> {
        match self {
            ReplyError::UnknownCode(_)
            | ReplyError::ParamQty { .. }
            | ReplyError::MalformedSchema { .. } => None,
            ReplyError::IntParse { raw, .. }
            | ReplyError::Channel { raw, .. }
            | ReplyError::ChannelStatus { raw, .. }
            | ReplyError::ClientSource { raw, .. }
            | ReplyError::ISupportParam { raw, .. }
            | ReplyError::ModeString { raw, .. }
            | ReplyError::ModeTarget { raw, .. }
            | ReplyError::MsgTarget { raw, .. }
            | ReplyError::Nickname { raw, .. }
            | ReplyError::ReplyTarget { raw, .. }
            | ReplyError::Username { raw, .. }
            | ReplyError::Verb { raw, .. }
            | ReplyError::WhoFlags { raw, .. }
            | ReplyError::UserHostReply { raw, .. }
            | ReplyError::PrefixedChannel { raw, .. }
            | ReplyError::PrefixedNickname { raw, .. }
            | ReplyError::Host { raw, .. }
            | ReplyError::UserAtHost { raw, .. }
            | ReplyError::IpAddr { raw, .. } => Some(raw),
        }
    }
}

/// Errors from building a registry or checking a schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("duplicate schema for reply code {0:03}")]
    DuplicateCode(ReplyCode),

    #[error("reply {code:03} declares field '{field}' more than once")]
    DuplicateField { code: ReplyCode, field: &'static str },

    #[error("reply {code:03} field '{field}' has rule {rule} which does not fit a minimum of {min_length} parameters")]
    InvalidRule {
        code: ReplyCode,
        field: &'static str,
        rule: Rule,
        min_length: usize,
    },
}
