//! Validated IRC value types.
//!
//! Every type here parses with [`std::str::FromStr`] into a value whose
//! `Display` reproduces the text it was parsed from, and each has its own
//! error type describing why a token was rejected.

#[macro_use]
mod macros;

pub mod channel;
pub mod host;
pub mod isupport;
pub mod membership;
pub mod mode;
pub mod nickname;
pub mod source;
pub mod target;
pub mod verb;
pub mod who;

pub use channel::{Channel, ChannelStatus, ParseChannelError, ParseChannelStatusError};
pub use host::{Host, ParseHostError, ParseUserAtHostError, UserAtHost};
pub use isupport::{
    ISupportKey, ISupportParam, ISupportValue, ParseISupportKeyError, ParseISupportParamError,
    ParseISupportValueError,
};
pub use membership::{ChannelMembership, PrefixedChannel, PrefixedNickname};
pub use mode::{ModeSign, ModeString, ParseModeStringError};
pub use nickname::{Nickname, ParseNicknameError, ParseUsernameError, Username};
pub use source::{ClientSource, ParseClientSourceError};
pub use target::{
    ModeTarget, MsgTarget, ParseModeTargetError, ParseMsgTargetError, ParseReplyTargetError,
    ReplyTarget,
};
pub use verb::{ParseVerbError, Verb};
pub use who::{ParseUserHostReplyError, ParseWhoFlagsError, UserHostReply, WhoFlags};
