//! The built-in reply table.
//!
//! Layouts follow the modern IRC client protocol documentation. Every entry
//! here must pass [`ReplySchema::check`].

use crate::codes::*;
use crate::schema::{DomainType, FieldSpec, Part, ReplySchema, Rule, ValueType};

const TEXT: ValueType = ValueType::Text;
const U16: ValueType = ValueType::U16;
const U32: ValueType = ValueType::U32;
const U64: ValueType = ValueType::U64;
const PARAMS: ValueType = ValueType::Params;

const CHANNEL: ValueType = ValueType::Domain(DomainType::Channel);
const CHANNEL_STATUS: ValueType = ValueType::Domain(DomainType::ChannelStatus);
const CLIENT_SOURCE: ValueType = ValueType::Domain(DomainType::ClientSource);
const ISUPPORT_PARAM: ValueType = ValueType::Domain(DomainType::ISupportParam);
const MODE_STRING: ValueType = ValueType::Domain(DomainType::ModeString);
const MODE_TARGET: ValueType = ValueType::Domain(DomainType::ModeTarget);
const MSG_TARGET: ValueType = ValueType::Domain(DomainType::MsgTarget);
const NICKNAME: ValueType = ValueType::Domain(DomainType::Nickname);
const REPLY_TARGET: ValueType = ValueType::Domain(DomainType::ReplyTarget);
const USERNAME: ValueType = ValueType::Domain(DomainType::Username);
const VERB: ValueType = ValueType::Domain(DomainType::Verb);
const WHO_FLAGS: ValueType = ValueType::Domain(DomainType::WhoFlags);
const HOST: ValueType = ValueType::Domain(DomainType::Host);
const USER_AT_HOST: ValueType = ValueType::Domain(DomainType::UserAtHost);
const IP_ADDR: ValueType = ValueType::Domain(DomainType::IpAddr);

const PREFIXED_CHANNEL: DomainType = DomainType::PrefixedChannel;
const PREFIXED_NICKNAME: DomainType = DomainType::PrefixedNickname;
const USERHOST_REPLY: DomainType = DomainType::UserHostReply;

const fn words(ty: DomainType) -> ValueType {
    ValueType::Words(ty)
}

/// `<client>`, the first parameter of every reply.
const CLIENT: FieldSpec = FieldSpec::fixed("client", 0, REPLY_TARGET);

/// Trailing human-readable text.
const MESSAGE: FieldSpec = FieldSpec::last("message", TEXT);

/// Every built-in reply, in table order.
pub static BUILTIN_REPLIES: &[ReplySchema] = &[
    ReplySchema::reply(RPL_WELCOME, "Welcome", "RPL_WELCOME", 2, &[CLIENT, MESSAGE]),
    ReplySchema::reply(RPL_YOURHOST, "YourHost", "RPL_YOURHOST", 2, &[CLIENT, MESSAGE]),
    ReplySchema::reply(RPL_CREATED, "Created", "RPL_CREATED", 2, &[CLIENT, MESSAGE]),
    ReplySchema::reply(
        RPL_MYINFO,
        "MyInfo",
        "RPL_MYINFO",
        5,
        &[
            CLIENT,
            FieldSpec::fixed("servername", 1, TEXT),
            FieldSpec::fixed("version", 2, TEXT),
            FieldSpec::fixed("available_user_modes", 3, TEXT),
            FieldSpec::fixed("available_channel_modes", 4, TEXT),
            FieldSpec::maybe("channel_modes_with_param", 5, TEXT),
        ],
    ),
    ReplySchema::reply(
        RPL_ISUPPORT,
        "ISupport",
        "RPL_ISUPPORT",
        3,
        &[CLIENT, FieldSpec::list_from("tokens", 1, ISUPPORT_PARAM), MESSAGE],
    ),
    ReplySchema::reply(
        RPL_REMOTEISUPPORT,
        "RemoteISupport",
        "RPL_REMOTEISUPPORT",
        3,
        &[CLIENT, FieldSpec::list_from("tokens", 1, ISUPPORT_PARAM), MESSAGE],
    ),
    ReplySchema::reply(
        RPL_BOUNCE,
        "Bounce",
        "RPL_BOUNCE",
        4,
        &[CLIENT, FieldSpec::fixed("hostname", 1, TEXT), FieldSpec::fixed("port", 2, U16), MESSAGE],
    ),
    ReplySchema::reply(
        RPL_STATSCOMMANDS,
        "StatsCommands",
        "RPL_STATSCOMMANDS",
        3,
        &[
            CLIENT,
            FieldSpec::fixed("command", 1, TEXT),
            FieldSpec::fixed("count", 2, U64),
            FieldSpec::maybe("byte_count", 3, U64),
            FieldSpec::maybe("remote_count", 4, U64),
        ],
    ),
    ReplySchema::reply(
        RPL_ENDOFSTATS,
        "EndOfStats",
        "RPL_ENDOFSTATS",
        3,
        &[CLIENT, FieldSpec::fixed("stats_letter", 1, TEXT), MESSAGE],
    ),
    ReplySchema::reply(
        RPL_UMODEIS,
        "UModeIs",
        "RPL_UMODEIS",
        2,
        &[CLIENT, FieldSpec::fixed("user_modes", 1, TEXT)],
    ),
    ReplySchema::reply(RPL_STATSUPTIME, "StatsUptime", "RPL_STATSUPTIME", 2, &[CLIENT, MESSAGE]),
    ReplySchema::reply(RPL_LUSERCLIENT, "LuserClient", "RPL_LUSERCLIENT", 2, &[CLIENT, MESSAGE]),
    ReplySchema::reply(
        RPL_LUSEROP,
        "LuserOp",
        "RPL_LUSEROP",
        3,
        &[CLIENT, FieldSpec::fixed("ops", 1, U64), MESSAGE],
    ),
    ReplySchema::reply(
        RPL_LUSERUNKNOWN,
        "LuserUnknown",
        "RPL_LUSERUNKNOWN",
        3,
        &[CLIENT, FieldSpec::fixed("connections", 1, U64), MESSAGE],
    ),
    ReplySchema::reply(
        RPL_LUSERCHANNELS,
        "LuserChannels",
        "RPL_LUSERCHANNELS",
        3,
        &[CLIENT, FieldSpec::fixed("channels", 1, U64), MESSAGE],
    ),
    ReplySchema::reply(RPL_LUSERME, "LuserMe", "RPL_LUSERME", 2, &[CLIENT, MESSAGE]),
    ReplySchema::reply(
        RPL_ADMINME,
        "AdminMe",
        "RPL_ADMINME",
        2,
        &[CLIENT, FieldSpec::maybe("server", 1, TEXT), MESSAGE],
    ),
    ReplySchema::reply(RPL_ADMINLOC1, "AdminLoc1", "RPL_ADMINLOC1", 2, &[CLIENT, MESSAGE]),
    ReplySchema::reply(RPL_ADMINLOC2, "AdminLoc2", "RPL_ADMINLOC2", 2, &[CLIENT, MESSAGE]),
    ReplySchema::reply(RPL_ADMINEMAIL, "AdminEmail", "RPL_ADMINEMAIL", 2, &[CLIENT, MESSAGE]),
    ReplySchema::reply(
        RPL_TRYAGAIN,
        "TryAgain",
        "RPL_TRYAGAIN",
        2,
        &[
            CLIENT,
            FieldSpec::fixed("command", 1, VERB),
            FieldSpec::maybe("message", 2, TEXT),
        ],
    ),
    ReplySchema::reply(
        RPL_LOCALUSERS,
        "LocalUsers",
        "RPL_LOCALUSERS",
        2,
        &[
            CLIENT,
            FieldSpec::maybe("current_users", 1, U64),
            FieldSpec::maybe("max_users", 2, U64),
            MESSAGE,
        ],
    ),
    ReplySchema::reply(
        RPL_GLOBALUSERS,
        "GlobalUsers",
        "RPL_GLOBALUSERS",
        2,
        &[
            CLIENT,
            FieldSpec::maybe("current_users", 1, U64),
            FieldSpec::maybe("max_users", 2, U64),
            MESSAGE,
        ],
    ),
    ReplySchema::reply(
        RPL_WHOISCERTFP,
        "WhoIsCertFP",
        "RPL_WHOISCERTFP",
        3,
        &[CLIENT, FieldSpec::fixed("nickname", 1, NICKNAME), MESSAGE],
    ),
    ReplySchema::reply(RPL_NONE, "None", "RPL_NONE", 0, &[]),
    ReplySchema::reply(
        RPL_AWAY,
        "Away",
        "RPL_AWAY",
        3,
        &[CLIENT, FieldSpec::fixed("nickname", 1, NICKNAME), MESSAGE],
    ),
    ReplySchema::reply(
        RPL_USERHOST,
        "UserHostRpl",
        "RPL_USERHOST",
        2,
        &[CLIENT, FieldSpec::last("replies", words(USERHOST_REPLY))],
    ),
    ReplySchema::reply(RPL_UNAWAY, "UnAway", "RPL_UNAWAY", 2, &[CLIENT, MESSAGE]),
    ReplySchema::reply(RPL_NOWAWAY, "NowAway", "RPL_NOWAWAY", 2, &[CLIENT, MESSAGE]),
    ReplySchema::reply(
        RPL_WHOISREGNICK,
        "WhoIsRegNick",
        "RPL_WHOISREGNICK",
        3,
        &[CLIENT, FieldSpec::fixed("nickname", 1, NICKNAME), MESSAGE],
    ),
    ReplySchema::reply(
        RPL_WHOISUSER,
        "WhoIsUser",
        "RPL_WHOISUSER",
        6,
        &[
            CLIENT,
            FieldSpec::fixed("nickname", 1, NICKNAME),
            FieldSpec::fixed("username", 2, USERNAME),
            FieldSpec::fixed("host", 3, TEXT),
            FieldSpec::fixed("realname", 5, TEXT),
        ],
    ),
    ReplySchema::reply(
        RPL_WHOISSERVER,
        "WhoIsServer",
        "RPL_WHOISSERVER",
        4,
        &[
            CLIENT,
            FieldSpec::fixed("nickname", 1, NICKNAME),
            FieldSpec::fixed("server", 2, TEXT),
            FieldSpec::last("server_info", TEXT),
        ],
    ),
    ReplySchema::reply(
        RPL_WHOISOPERATOR,
        "WhoIsOperator",
        "RPL_WHOISOPERATOR",
        3,
        &[CLIENT, FieldSpec::fixed("nickname", 1, NICKNAME), MESSAGE],
    ),
    ReplySchema::reply(
        RPL_WHOWASUSER,
        "WhoWasUser",
        "RPL_WHOWASUSER",
        6,
        &[
            CLIENT,
            FieldSpec::fixed("nickname", 1, NICKNAME),
            FieldSpec::fixed("username", 2, USERNAME),
            FieldSpec::fixed("host", 3, TEXT),
            FieldSpec::fixed("realname", 5, TEXT),
        ],
    ),
    ReplySchema::reply(
        RPL_ENDOFWHO,
        "EndOfWho",
        "RPL_ENDOFWHO",
        3,
        &[CLIENT, FieldSpec::fixed("mask", 1, TEXT), MESSAGE],
    ),
    ReplySchema::reply(
        RPL_WHOISIDLE,
        "WhoIsIdle",
        "RPL_WHOISIDLE",
        5,
        &[
            CLIENT,
            FieldSpec::fixed("nickname", 1, NICKNAME),
            FieldSpec::fixed("secs", 2, U64),
            FieldSpec::fixed("signon", 3, U64),
            MESSAGE,
        ],
    ),
    ReplySchema::reply(
        RPL_ENDOFWHOIS,
        "EndOfWhoIs",
        "RPL_ENDOFWHOIS",
        3,
        &[CLIENT, FieldSpec::fixed("nickname", 1, NICKNAME), MESSAGE],
    ),
    ReplySchema::reply(
        RPL_WHOISCHANNELS,
        "WhoIsChannels",
        "RPL_WHOISCHANNELS",
        3,
        &[
            CLIENT,
            FieldSpec::fixed("nickname", 1, NICKNAME),
            FieldSpec::last("channels", words(PREFIXED_CHANNEL)),
        ],
    ),
    ReplySchema::reply(
        RPL_WHOISSPECIAL,
        "WhoIsSpecial",
        "RPL_WHOISSPECIAL",
        3,
        &[CLIENT, FieldSpec::fixed("nickname", 1, NICKNAME), MESSAGE],
    ),
    ReplySchema::reply(RPL_LISTSTART, "ListStart", "RPL_LISTSTART", 3, &[CLIENT]),
    ReplySchema::reply(
        RPL_LIST,
        "List",
        "RPL_LIST",
        4,
        &[
            CLIENT,
            FieldSpec::fixed("channel", 1, CHANNEL),
            FieldSpec::fixed("clients", 2, U64),
            FieldSpec::last("topic", TEXT),
        ],
    ),
    ReplySchema::reply(RPL_LISTEND, "ListEnd", "RPL_LISTEND", 2, &[CLIENT, MESSAGE]),
    ReplySchema::reply(
        RPL_CHANNELMODEIS,
        "ChannelModeIs",
        "RPL_CHANNELMODEIS",
        3,
        &[
            CLIENT,
            FieldSpec::fixed("channel", 1, CHANNEL),
            FieldSpec::fixed("modestring", 2, MODE_STRING),
            FieldSpec::remainder_from("arguments", 2, PARAMS),
        ],
    ),
    ReplySchema::reply(
        RPL_CREATIONTIME,
        "CreationTime",
        "RPL_CREATIONTIME",
        3,
        &[
            CLIENT,
            FieldSpec::fixed("channel", 1, CHANNEL),
            FieldSpec::fixed("creationtime", 2, U64),
        ],
    ),
    ReplySchema::reply(
        RPL_WHOISACCOUNT,
        "WhoIsAccount",
        "RPL_WHOISACCOUNT",
        4,
        &[
            CLIENT,
            FieldSpec::fixed("nickname", 1, NICKNAME),
            FieldSpec::fixed("account", 2, TEXT),
            MESSAGE,
        ],
    ),
    ReplySchema::reply(
        RPL_NOTOPIC,
        "NoTopic",
        "RPL_NOTOPIC",
        3,
        &[CLIENT, FieldSpec::fixed("channel", 1, CHANNEL), MESSAGE],
    ),
    ReplySchema::reply(
        RPL_TOPIC,
        "Topic",
        "RPL_TOPIC",
        3,
        &[CLIENT, FieldSpec::fixed("channel", 1, CHANNEL), FieldSpec::last("topic", TEXT)],
    ),
    ReplySchema::reply(
        RPL_TOPICWHOTIME,
        "TopicWhoTime",
        "RPL_TOPICWHOTIME",
        4,
        &[
            CLIENT,
            FieldSpec::fixed("channel", 1, CHANNEL),
            FieldSpec::fixed("nickname", 2, CLIENT_SOURCE),
            FieldSpec::fixed("setat", 3, U64),
        ],
    ),
    ReplySchema::reply(
        RPL_INVITELIST,
        "InviteList",
        "RPL_INVITELIST",
        2,
        &[CLIENT, FieldSpec::fixed("channel", 1, CHANNEL)],
    ),
    ReplySchema::reply(
        RPL_ENDOFINVITELIST,
        "EndOfInviteList",
        "RPL_ENDOFINVITELIST",
        2,
        &[CLIENT, MESSAGE],
    ),
    ReplySchema::reply(
        RPL_WHOISACTUALLY,
        "WhoIsActually",
        "RPL_WHOISACTUALLY",
        3,
        &[
            CLIENT,
            FieldSpec::fixed("nickname", 1, NICKNAME),
            // <host> alone, or <user@host> <ip>.
            FieldSpec::new("host", HOST, Rule::IndexIfFinal(2)),
            FieldSpec::new("user_host", USER_AT_HOST, Rule::IndexIfFollowed(2)),
            FieldSpec::maybe("ip", 3, IP_ADDR),
            MESSAGE,
        ],
    ),
    ReplySchema::reply(
        RPL_INVITING,
        "Inviting",
        "RPL_INVITING",
        3,
        &[
            CLIENT,
            FieldSpec::fixed("nickname", 1, NICKNAME),
            FieldSpec::fixed("channel", 2, CHANNEL),
        ],
    ),
    ReplySchema::reply(
        RPL_INVEXLIST,
        "InvExList",
        "RPL_INVEXLIST",
        3,
        &[CLIENT, FieldSpec::fixed("channel", 1, CHANNEL), FieldSpec::fixed("mask", 2, TEXT)],
    ),
    ReplySchema::reply(
        RPL_ENDOFINVEXLIST,
        "EndOfInvExList",
        "RPL_ENDOFINVEXLIST",
        3,
        &[CLIENT, FieldSpec::fixed("channel", 1, CHANNEL), MESSAGE],
    ),
    ReplySchema::reply(
        RPL_EXCEPTLIST,
        "ExceptList",
        "RPL_EXCEPTLIST",
        3,
        &[CLIENT, FieldSpec::fixed("channel", 1, CHANNEL), FieldSpec::fixed("mask", 2, TEXT)],
    ),
    ReplySchema::reply(
        RPL_ENDOFEXCEPTLIST,
        "EndOfExceptList",
        "RPL_ENDOFEXCEPTLIST",
        3,
        &[CLIENT, FieldSpec::fixed("channel", 1, CHANNEL), MESSAGE],
    ),
    ReplySchema::reply(
        RPL_VERSION,
        "Version",
        "RPL_VERSION",
        4,
        &[
            CLIENT,
            FieldSpec::fixed("version", 1, TEXT),
            FieldSpec::fixed("server", 2, TEXT),
            FieldSpec::last("comments", TEXT),
        ],
    ),
    ReplySchema::reply(
        RPL_WHOREPLY,
        "WhoReply",
        "RPL_WHOREPLY",
        8,
        &[
            CLIENT,
            FieldSpec::fixed("channel", 1, CHANNEL),
            FieldSpec::fixed("username", 2, USERNAME),
            FieldSpec::fixed("host", 3, TEXT),
            FieldSpec::fixed("server", 4, TEXT),
            FieldSpec::fixed("nickname", 5, NICKNAME),
            FieldSpec::fixed("flags", 6, WHO_FLAGS),
            FieldSpec::subword("hopcount", Part::First, U32),
            FieldSpec::subword("realname", Part::Rest, TEXT),
        ],
    ),
    ReplySchema::reply(
        RPL_NAMREPLY,
        "NamReply",
        "RPL_NAMREPLY",
        4,
        &[
            CLIENT,
            FieldSpec::fixed("channel_status", 1, CHANNEL_STATUS),
            FieldSpec::fixed("channel", 2, CHANNEL),
            FieldSpec::last("clients", words(PREFIXED_NICKNAME)),
        ],
    ),
    ReplySchema::reply(
        RPL_LINKS,
        "Links",
        "RPL_LINKS",
        4,
        &[
            CLIENT,
            FieldSpec::fixed("server1", 1, TEXT),
            FieldSpec::fixed("server2", 2, TEXT),
            FieldSpec::subword("hopcount", Part::First, U32),
            FieldSpec::subword("server_info", Part::Rest, TEXT),
        ],
    ),
    ReplySchema::reply(RPL_ENDOFLINKS, "EndOfLinks", "RPL_ENDOFLINKS", 3, &[CLIENT, MESSAGE]),
    ReplySchema::reply(
        RPL_ENDOFNAMES,
        "EndOfNames",
        "RPL_ENDOFNAMES",
        3,
        &[CLIENT, FieldSpec::fixed("channel", 1, CHANNEL), MESSAGE],
    ),
    ReplySchema::reply(
        RPL_BANLIST,
        "BanList",
        "RPL_BANLIST",
        3,
        &[
            CLIENT,
            FieldSpec::fixed("channel", 1, CHANNEL),
            FieldSpec::fixed("mask", 2, TEXT),
            FieldSpec::maybe("who", 3, TEXT),
            FieldSpec::maybe("set_ts", 4, U64),
        ],
    ),
    ReplySchema::reply(
        RPL_ENDOFBANLIST,
        "EndOfBanList",
        "RPL_ENDOFBANLIST",
        3,
        &[CLIENT, FieldSpec::fixed("channel", 1, CHANNEL), MESSAGE],
    ),
    ReplySchema::reply(
        RPL_ENDOFWHOWAS,
        "EndOfWhoWas",
        "RPL_ENDOFWHOWAS",
        3,
        &[CLIENT, FieldSpec::fixed("nickname", 1, NICKNAME), MESSAGE],
    ),
    ReplySchema::reply(RPL_INFO, "Info", "RPL_INFO", 2, &[CLIENT, MESSAGE]),
    ReplySchema::reply(RPL_MOTD, "Motd", "RPL_MOTD", 2, &[CLIENT, MESSAGE]),
    ReplySchema::reply(RPL_ENDOFINFO, "EndOfInfo", "RPL_ENDOFINFO", 2, &[CLIENT, MESSAGE]),
    ReplySchema::reply(RPL_MOTDSTART, "MotdStart", "RPL_MOTDSTART", 2, &[CLIENT, MESSAGE]),
    ReplySchema::reply(RPL_ENDOFMOTD, "EndOfMotd", "RPL_ENDOFMOTD", 2, &[CLIENT, MESSAGE]),
    ReplySchema::reply(
        RPL_WHOISHOST,
        "WhoIsHost",
        "RPL_WHOISHOST",
        3,
        &[CLIENT, FieldSpec::fixed("nickname", 1, NICKNAME), MESSAGE],
    ),
    ReplySchema::reply(
        RPL_WHOISMODES,
        "WhoIsModes",
        "RPL_WHOISMODES",
        3,
        &[CLIENT, FieldSpec::fixed("nickname", 1, NICKNAME), MESSAGE],
    ),
    ReplySchema::reply(RPL_YOUREOPER, "YoureOper", "RPL_YOUREOPER", 2, &[CLIENT, MESSAGE]),
    ReplySchema::reply(
        RPL_REHASHING,
        "Rehashing",
        "RPL_REHASHING",
        3,
        &[CLIENT, FieldSpec::fixed("config_file", 1, TEXT), MESSAGE],
    ),
    ReplySchema::reply(
        RPL_TIME,
        "Time",
        "RPL_TIME",
        3,
        &[
            CLIENT,
            FieldSpec::fixed("server", 1, TEXT),
            FieldSpec::maybe("timestamp", 2, U64),
            FieldSpec::maybe("ts_offset", 3, TEXT),
            FieldSpec::last("human_time", TEXT),
        ],
    ),
    ReplySchema::error(
        ERR_UNKNOWNERROR,
        "UnknownError",
        "ERR_UNKNOWNERROR",
        3,
        &[
            CLIENT,
            FieldSpec::fixed("command", 1, VERB),
            FieldSpec::list_from("subcommands", 2, TEXT),
            MESSAGE,
        ],
    ),
    ReplySchema::error(
        ERR_NOSUCHNICK,
        "NoSuchNick",
        "ERR_NOSUCHNICK",
        3,
        &[CLIENT, FieldSpec::fixed("target", 1, MSG_TARGET), MESSAGE],
    ),
    ReplySchema::error(
        ERR_NOSUCHSERVER,
        "NoSuchServer",
        "ERR_NOSUCHSERVER",
        3,
        &[CLIENT, FieldSpec::fixed("server", 1, TEXT), MESSAGE],
    ),
    ReplySchema::error(
        ERR_NOSUCHCHANNEL,
        "NoSuchChannel",
        "ERR_NOSUCHCHANNEL",
        3,
        &[CLIENT, FieldSpec::fixed("channel", 1, CHANNEL), MESSAGE],
    ),
    ReplySchema::error(
        ERR_CANNOTSENDTOCHAN,
        "CannotSendToChan",
        "ERR_CANNOTSENDTOCHAN",
        3,
        &[CLIENT, FieldSpec::fixed("channel", 1, CHANNEL), MESSAGE],
    ),
    ReplySchema::error(
        ERR_TOOMANYCHANNELS,
        "TooManyChannels",
        "ERR_TOOMANYCHANNELS",
        3,
        &[CLIENT, FieldSpec::fixed("channel", 1, CHANNEL), MESSAGE],
    ),
    ReplySchema::error(
        ERR_WASNOSUCHNICK,
        "WasNoSuchNick",
        "ERR_WASNOSUCHNICK",
        3,
        &[CLIENT, FieldSpec::fixed("nickname", 1, NICKNAME), MESSAGE],
    ),
    ReplySchema::error(ERR_NOORIGIN, "NoOrigin", "ERR_NOORIGIN", 2, &[CLIENT, MESSAGE]),
    ReplySchema::error(ERR_NORECIPIENT, "NoRecipient", "ERR_NORECIPIENT", 2, &[CLIENT, MESSAGE]),
    ReplySchema::error(ERR_NOTEXTTOSEND, "NoTextToSend", "ERR_NOTEXTTOSEND", 2, &[CLIENT, MESSAGE]),
    ReplySchema::error(ERR_INPUTTOOLONG, "InputTooLong", "ERR_INPUTTOOLONG", 2, &[CLIENT, MESSAGE]),
    ReplySchema::error(
        ERR_UNKNOWNCOMMAND,
        "UnknownCommand",
        "ERR_UNKNOWNCOMMAND",
        3,
        &[CLIENT, FieldSpec::fixed("command", 1, VERB), MESSAGE],
    ),
    ReplySchema::error(ERR_NOMOTD, "NoMotd", "ERR_NOMOTD", 2, &[CLIENT, MESSAGE]),
    ReplySchema::error(
        ERR_NONICKNAMEGIVEN,
        "NoNicknameGiven",
        "ERR_NONICKNAMEGIVEN",
        2,
        &[CLIENT, MESSAGE],
    ),
    ReplySchema::error(
        ERR_ERRONEUSNICKNAME,
        "ErroneousNickname",
        "ERR_ERRONEUSNICKNAME",
        3,
        &[CLIENT, FieldSpec::fixed("nickname", 1, TEXT), MESSAGE],
    ),
    ReplySchema::error(
        ERR_NICKNAMEINUSE,
        "NicknameInUse",
        "ERR_NICKNAMEINUSE",
        3,
        &[CLIENT, FieldSpec::fixed("nickname", 1, NICKNAME), MESSAGE],
    ),
    ReplySchema::error(
        ERR_NICKCOLLISION,
        "NickCollision",
        "ERR_NICKCOLLISION",
        3,
        &[CLIENT, FieldSpec::fixed("nickname", 1, NICKNAME), MESSAGE],
    ),
    ReplySchema::error(
        ERR_USERNOTINCHANNEL,
        "UserNotInChannel",
        "ERR_USERNOTINCHANNEL",
        4,
        &[
            CLIENT,
            FieldSpec::fixed("nickname", 1, NICKNAME),
            FieldSpec::fixed("channel", 2, CHANNEL),
            MESSAGE,
        ],
    ),
    ReplySchema::error(
        ERR_NOTONCHANNEL,
        "NotOnChannel",
        "ERR_NOTONCHANNEL",
        3,
        &[CLIENT, FieldSpec::fixed("channel", 1, CHANNEL), MESSAGE],
    ),
    ReplySchema::error(
        ERR_USERONCHANNEL,
        "UserOnChannel",
        "ERR_USERONCHANNEL",
        4,
        &[
            CLIENT,
            FieldSpec::fixed("nickname", 1, NICKNAME),
            FieldSpec::fixed("channel", 2, CHANNEL),
            MESSAGE,
        ],
    ),
    ReplySchema::error(
        ERR_NOTREGISTERED,
        "NotRegistered",
        "ERR_NOTREGISTERED",
        2,
        &[CLIENT, MESSAGE],
    ),
    ReplySchema::error(
        ERR_NEEDMOREPARAMS,
        "NeedMoreParams",
        "ERR_NEEDMOREPARAMS",
        3,
        &[CLIENT, FieldSpec::fixed("command", 1, VERB), MESSAGE],
    ),
    ReplySchema::error(
        ERR_ALREADYREGISTERED,
        "AlreadyRegistered",
        "ERR_ALREADYREGISTERED",
        2,
        &[CLIENT, MESSAGE],
    ),
    ReplySchema::error(
        ERR_PASSWDMISMATCH,
        "PasswdMismatch",
        "ERR_PASSWDMISMATCH",
        2,
        &[CLIENT, MESSAGE],
    ),
    ReplySchema::error(
        ERR_YOUREBANNEDCREEP,
        "YoureBannedCreep",
        "ERR_YOUREBANNEDCREEP",
        2,
        &[CLIENT, MESSAGE],
    ),
    ReplySchema::error(
        ERR_CHANNELISFULL,
        "ChannelIsFull",
        "ERR_CHANNELISFULL",
        3,
        &[CLIENT, FieldSpec::fixed("channel", 1, CHANNEL), MESSAGE],
    ),
    ReplySchema::error(
        ERR_UNKNOWNMODE,
        "UnknownMode",
        "ERR_UNKNOWNMODE",
        3,
        &[CLIENT, FieldSpec::fixed("modechar", 1, TEXT), MESSAGE],
    ),
    ReplySchema::error(
        ERR_INVITEONLYCHAN,
        "InviteOnlyChan",
        "ERR_INVITEONLYCHAN",
        3,
        &[CLIENT, FieldSpec::fixed("channel", 1, CHANNEL), MESSAGE],
    ),
    ReplySchema::error(
        ERR_BANNEDFROMCHAN,
        "BannedFromChan",
        "ERR_BANNEDFROMCHAN",
        3,
        &[CLIENT, FieldSpec::fixed("channel", 1, CHANNEL), MESSAGE],
    ),
    ReplySchema::error(
        ERR_BADCHANNELKEY,
        "BadChannelKey",
        "ERR_BADCHANNELKEY",
        3,
        &[CLIENT, FieldSpec::fixed("channel", 1, CHANNEL), MESSAGE],
    ),
    ReplySchema::error(
        ERR_BADCHANMASK,
        "BadChanMask",
        "ERR_BADCHANMASK",
        2,
        &[CLIENT, FieldSpec::maybe("channel", 1, TEXT), MESSAGE],
    ),
    ReplySchema::error(ERR_NOPRIVILEGES, "NoPrivileges", "ERR_NOPRIVILEGES", 2, &[CLIENT, MESSAGE]),
    ReplySchema::error(
        ERR_CHANOPRIVSNEEDED,
        "ChanOPrivsNeeded",
        "ERR_CHANOPRIVSNEEDED",
        3,
        &[CLIENT, FieldSpec::fixed("channel", 1, CHANNEL), MESSAGE],
    ),
    ReplySchema::error(
        ERR_CANTKILLSERVER,
        "CantKillServer",
        "ERR_CANTKILLSERVER",
        2,
        &[CLIENT, MESSAGE],
    ),
    ReplySchema::error(ERR_NOOPERHOST, "NoOperHost", "ERR_NOOPERHOST", 2, &[CLIENT, MESSAGE]),
    ReplySchema::error(
        ERR_UMODEUNKNOWNFLAG,
        "UmodeUnknownFlag",
        "ERR_UMODEUNKNOWNFLAG",
        2,
        &[CLIENT, MESSAGE],
    ),
    ReplySchema::error(
        ERR_USERSDONTMATCH,
        "UsersDontMatch",
        "ERR_USERSDONTMATCH",
        2,
        &[CLIENT, MESSAGE],
    ),
    ReplySchema::error(
        ERR_HELPNOTFOUND,
        "HelpNotFound",
        "ERR_HELPNOTFOUND",
        3,
        &[CLIENT, FieldSpec::fixed("subject", 1, TEXT), MESSAGE],
    ),
    ReplySchema::error(
        ERR_INVALIDKEY,
        "InvalidKey",
        "ERR_INVALIDKEY",
        3,
        &[CLIENT, FieldSpec::fixed("channel", 1, CHANNEL), MESSAGE],
    ),
    ReplySchema::reply(RPL_STARTTLS, "StartTLS", "RPL_STARTTLS", 2, &[CLIENT, MESSAGE]),
    ReplySchema::reply(
        RPL_WHOISSECURE,
        "WhoIsSecure",
        "RPL_WHOISSECURE",
        3,
        &[CLIENT, FieldSpec::fixed("nickname", 1, NICKNAME), MESSAGE],
    ),
    ReplySchema::error(
        ERR_STARTTLSERROR,
        "StartTLSError",
        "ERR_STARTTLSERROR",
        2,
        &[CLIENT, MESSAGE],
    ),
    ReplySchema::error(
        ERR_INVALIDMODEPARAM,
        "InvalidModeParam",
        "ERR_INVALIDMODEPARAM",
        5,
        &[
            CLIENT,
            FieldSpec::fixed("target", 1, MODE_TARGET),
            FieldSpec::fixed("modechar", 2, TEXT),
            FieldSpec::fixed("parameter", 3, TEXT),
            MESSAGE,
        ],
    ),
    ReplySchema::reply(
        RPL_HELPSTART,
        "HelpStart",
        "RPL_HELPSTART",
        3,
        &[CLIENT, FieldSpec::fixed("subject", 1, TEXT), MESSAGE],
    ),
    ReplySchema::reply(
        RPL_HELPTXT,
        "HelpTxt",
        "RPL_HELPTXT",
        3,
        &[CLIENT, FieldSpec::fixed("subject", 1, TEXT), MESSAGE],
    ),
    ReplySchema::reply(
        RPL_ENDOFHELP,
        "EndOfHelp",
        "RPL_ENDOFHELP",
        3,
        &[CLIENT, FieldSpec::fixed("subject", 1, TEXT), MESSAGE],
    ),
    ReplySchema::error(
        ERR_NOPRIVS,
        "NoPrivs",
        "ERR_NOPRIVS",
        3,
        &[CLIENT, FieldSpec::fixed("privilege", 1, TEXT), MESSAGE],
    ),
    ReplySchema::reply(
        RPL_LOGGEDIN,
        "LoggedIn",
        "RPL_LOGGEDIN",
        4,
        &[
            CLIENT,
            FieldSpec::fixed("your_source", 1, CLIENT_SOURCE),
            FieldSpec::fixed("account", 2, TEXT),
            MESSAGE,
        ],
    ),
    ReplySchema::reply(
        RPL_LOGGEDOUT,
        "LoggedOut",
        "RPL_LOGGEDOUT",
        3,
        &[CLIENT, FieldSpec::fixed("your_source", 1, CLIENT_SOURCE), MESSAGE],
    ),
    ReplySchema::error(ERR_NICKLOCKED, "NickLocked", "ERR_NICKLOCKED", 2, &[CLIENT, MESSAGE]),
    ReplySchema::reply(RPL_SASLSUCCESS, "SaslSuccess", "RPL_SASLSUCCESS", 2, &[CLIENT, MESSAGE]),
    ReplySchema::error(ERR_SASLFAIL, "SaslFail", "ERR_SASLFAIL", 2, &[CLIENT, MESSAGE]),
    ReplySchema::error(ERR_SASLTOOLONG, "SaslTooLong", "ERR_SASLTOOLONG", 2, &[CLIENT, MESSAGE]),
    ReplySchema::error(ERR_SASLABORTED, "SaslAborted", "ERR_SASLABORTED", 2, &[CLIENT, MESSAGE]),
    ReplySchema::error(ERR_SASLALREADY, "SaslAlready", "ERR_SASLALREADY", 2, &[CLIENT, MESSAGE]),
    ReplySchema::reply(
        RPL_SASLMECHS,
        "SaslMechs",
        "RPL_SASLMECHS",
        3,
        &[CLIENT, FieldSpec::fixed("mechanisms", 1, TEXT), MESSAGE],
    ),
];
