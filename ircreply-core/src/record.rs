//! Decoded replies.

use crate::decode::Value;
use crate::params::ParameterList;
use crate::schema::{ReplyCode, ReplySchema};
use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};

/// One named field of a decoded reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedField {
    name: &'static str,
    value: Option<Value>,
}

impl DecodedField {
    pub(crate) fn new(name: &'static str, value: Option<Value>) -> Self {
        Self { name, value }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// `None` when the field is optional and its slot was not present.
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }
}

/// A decoded numeric reply.
///
/// A record keeps the parameter list it was decoded from, so
/// [`Record::encode`] always reproduces the input exactly. Records are never
/// modified after decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    schema: &'static ReplySchema,
    raw: ParameterList,
    fields: Vec<DecodedField>,
}

impl Record {
    pub(crate) fn new(
        schema: &'static ReplySchema,
        raw: ParameterList,
        fields: Vec<DecodedField>,
    ) -> Self {
        Self {
            schema,
            raw,
            fields,
        }
    }

    pub fn code(&self) -> ReplyCode {
        self.schema.code()
    }

    pub fn schema(&self) -> &'static ReplySchema {
        self.schema
    }

    pub fn name(&self) -> &'static str {
        self.schema.name()
    }

    pub fn symbol(&self) -> &'static str {
        self.schema.symbol()
    }

    pub fn is_error(&self) -> bool {
        self.schema.is_error()
    }

    pub fn parameters(&self) -> &ParameterList {
        &self.raw
    }

    /// Fields in declared order.
    pub fn fields(&self) -> &[DecodedField] {
        &self.fields
    }

    /// Returns the value of the named field, or `None` if the reply has no
    /// such field or the field is absent.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .and_then(DecodedField::value)
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_text)
    }

    pub fn uint(&self, name: &str) -> Option<u64> {
        self.get(name).and_then(Value::as_uint)
    }

    pub fn list(&self, name: &str) -> Option<&[Value]> {
        self.get(name).and_then(Value::as_list)
    }

    /// Converts back to the code and parameters the record was decoded from.
    pub fn encode(&self) -> (ReplyCode, ParameterList) {
        (self.code(), self.raw.clone())
    }

    pub fn into_parts(self) -> (ReplyCode, ParameterList) {
        (self.code(), self.raw)
    }
}

impl From<Record> for (ReplyCode, ParameterList) {
    fn from(record: Record) -> Self {
        record.into_parts()
    }
}

impl Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Record", 5)?;
        state.serialize_field("code", &self.code())?;
        state.serialize_field("symbol", self.symbol())?;
        state.serialize_field("is_error", &self.is_error())?;
        state.serialize_field("params", &self.raw)?;
        state.serialize_field("fields", &FieldMap(&self.fields))?;
        state.end()
    }
}

struct FieldMap<'a>(&'a [DecodedField]);

impl Serialize for FieldMap<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for field in self.0 {
            map.serialize_entry(field.name, &field.value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::*;
    use crate::error::ReplyError;
    use crate::registry::{decode, Registry};
    use crate::schema::{DomainType, Part, Rule, ValueType};
    use crate::table::BUILTIN_REPLIES;
    use ircreply_types::{
        ChannelStatus, ParseHostError, ParseUserAtHostError, ReplyTarget, Verb,
    };
    use proptest::prelude::*;
    use std::net::{IpAddr, Ipv4Addr};

    #[test]
    fn test_welcome() {
        let params = ParameterList::from(["Alice", "Welcome to the network!"]);
        let record = decode(RPL_WELCOME, params.clone()).unwrap();

        assert_eq!(record.code(), 1);
        assert_eq!(record.symbol(), "RPL_WELCOME");
        assert_eq!(record.name(), "Welcome");
        assert!(!record.is_error());
        match record.get("client") {
            Some(Value::ReplyTarget(ReplyTarget::Nick(nick))) => assert_eq!(nick, "Alice"),
            other => panic!("unexpected client {:?}", other),
        }
        assert_eq!(record.text("message"), Some("Welcome to the network!"));
        assert_eq!(record.encode(), (1, params));
    }

    #[test]
    fn test_namreply() {
        let record = decode(RPL_NAMREPLY, ["Bob", "=", "#chat", "@Alice +Carl Dave"]).unwrap();

        assert_eq!(
            record.get("channel_status"),
            Some(&Value::ChannelStatus(ChannelStatus::Public))
        );
        let clients: Vec<_> = record
            .list("clients")
            .unwrap()
            .iter()
            .map(|v| match v {
                Value::PrefixedNickname(p) => (p.prefix, p.nickname.to_string()),
                other => panic!("unexpected client {:?}", other),
            })
            .collect();
        assert_eq!(
            clients,
            vec![
                (Some('@'), "Alice".to_string()),
                (Some('+'), "Carl".to_string()),
                (None, "Dave".to_string()),
            ]
        );
    }

    #[test]
    fn test_links_subwords() {
        let record = decode(RPL_LINKS, ["Alice", "*", "irc.example.com", "3 Some Server Info"])
            .unwrap();
        assert_eq!(record.get("hopcount"), Some(&Value::U32(3)));
        assert_eq!(record.text("server_info"), Some("Some Server Info"));
    }

    #[test]
    fn test_optional_yields_to_message() {
        let record = decode(RPL_ADMINME, ["Alice", "Administrative info"]).unwrap();
        assert_eq!(record.get("server"), None);
        assert_eq!(record.text("message"), Some("Administrative info"));
        assert_eq!(record.fields().len(), 3);
        assert_eq!(record.fields()[1].value(), None);

        let record =
            decode(RPL_ADMINME, ["Alice", "irc.example.com", "Administrative info"]).unwrap();
        assert_eq!(record.text("server"), Some("irc.example.com"));
    }

    #[test]
    fn test_isupport_tokens() {
        let record = decode(
            RPL_ISUPPORT,
            ["Alice", "CHANTYPES=#", "-EXCEPTS", "are supported by this server"],
        )
        .unwrap();
        let tokens = record.list("tokens").unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[1].to_string(), "-EXCEPTS");
    }

    #[test]
    fn test_channel_mode_arguments() {
        let record = decode(RPL_CHANNELMODEIS, ["Alice", "#chan", "+kl", "secret", "10"]).unwrap();
        let args = record.get("arguments").and_then(Value::as_params).unwrap();
        assert_eq!(args, &ParameterList::from(["secret", "10"]));
    }

    #[test]
    fn test_whoreply() {
        let record = decode(
            RPL_WHOREPLY,
            ["Alice", "#chan", "~bob", "host.example", "irc.example.com", "Bob", "H@", "0 Bob Smith"],
        )
        .unwrap();
        assert_eq!(record.uint("hopcount"), Some(0));
        assert_eq!(record.text("realname"), Some("Bob Smith"));
    }

    #[test]
    fn test_error_reply() {
        let record = decode(ERR_NOSUCHNICK, ["Alice", "Bob", "No such nick/channel"]).unwrap();
        assert!(record.is_error());
        assert!(matches!(record.get("target"), Some(Value::MsgTarget(_))));
    }

    #[test]
    fn test_unknown_command_is_echoed() {
        let record = decode(ERR_UNKNOWNCOMMAND, ["Alice", "FOO-BAR", "Unknown command"]).unwrap();
        assert_eq!(
            record.get("command"),
            Some(&Value::Verb(Verb::Unknown("FOO-BAR".into())))
        );

        let record =
            decode(ERR_NEEDMOREPARAMS, ["Alice", "CAP:", "Not enough parameters"]).unwrap();
        assert_eq!(record.get("command").map(Value::to_string).as_deref(), Some("CAP:"));
    }

    #[test]
    fn test_whois_actually_without_host() {
        let record = decode(RPL_WHOISACTUALLY, ["Alice", "Bob", "is actually using host"]).unwrap();
        assert_eq!(record.get("host"), None);
        assert_eq!(record.get("user_host"), None);
        assert_eq!(record.get("ip"), None);
        assert_eq!(record.text("message"), Some("is actually using host"));
    }

    #[test]
    fn test_whois_actually_host_only() {
        let record = decode(
            RPL_WHOISACTUALLY,
            ["Alice", "Bob", "bob.example.net", "is actually using host"],
        )
        .unwrap();
        match record.get("host") {
            Some(Value::Host(host)) => assert_eq!(host.domain(), Some("bob.example.net")),
            other => panic!("unexpected host {:?}", other),
        }
        assert_eq!(record.get("user_host"), None);
        assert_eq!(record.get("ip"), None);

        let record = decode(
            RPL_WHOISACTUALLY,
            ["Alice", "Bob", "198.51.100.4", "is actually using host"],
        )
        .unwrap();
        match record.get("host") {
            Some(Value::Host(host)) => {
                assert_eq!(host.ip(), Some(IpAddr::V4(Ipv4Addr::new(198, 51, 100, 4))))
            }
            other => panic!("unexpected host {:?}", other),
        }
    }

    #[test]
    fn test_whois_actually_user_host_and_ip() {
        let record = decode(
            RPL_WHOISACTUALLY,
            ["Alice", "Bob", "~bob@bob.example.net", "2001:db8::7", "is actually using host"],
        )
        .unwrap();
        match record.get("user_host") {
            Some(Value::UserAtHost(uh)) => {
                assert_eq!(uh.username, "~bob");
                assert_eq!(uh.host.domain(), Some("bob.example.net"));
            }
            other => panic!("unexpected user_host {:?}", other),
        }
        assert_eq!(record.get("host"), None);
        assert_eq!(
            record.get("ip"),
            Some(&Value::IpAddr("2001:db8::7".parse().unwrap()))
        );
        assert_eq!(record.text("message"), Some("is actually using host"));
    }

    #[test]
    fn test_whois_actually_rejects_bad_values() {
        let err = decode(
            RPL_WHOISACTUALLY,
            ["Alice", "Bob", "~bob@bob.example.net", "999.1.1", "is actually using host"],
        )
        .unwrap_err();
        assert_eq!(err.type_tag(), Some(DomainType::IpAddr));
        assert_eq!(err.raw(), Some("999.1.1"));

        let err = decode(
            RPL_WHOISACTUALLY,
            ["Alice", "Bob", "not a host!!", "999.1.1", "is actually using host"],
        )
        .unwrap_err();
        assert_eq!(
            err,
            ReplyError::UserAtHost {
                raw: "not a host!!".into(),
                cause: ParseUserAtHostError::NoAt,
            }
        );

        let err = decode(
            RPL_WHOISACTUALLY,
            ["Alice", "Bob", "not a host!!", "is actually using host"],
        )
        .unwrap_err();
        assert_eq!(
            err,
            ReplyError::Host {
                raw: "not a host!!".into(),
                cause: ParseHostError::BadCharacter,
            }
        );
    }

    #[test]
    fn test_topic_who_time_setter() {
        let record = decode(RPL_TOPICWHOTIME, ["Alice", "#chat", "Bob", "1700000000"]).unwrap();
        match record.get("nickname") {
            Some(Value::ClientSource(source)) => {
                assert_eq!(source.nickname, "Bob");
                assert_eq!(source.host, None);
            }
            other => panic!("unexpected setter {:?}", other),
        }
        assert_eq!(record.uint("setat"), Some(1_700_000_000));

        let record = decode(
            RPL_TOPICWHOTIME,
            ["Alice", "#chat", "Bob!~bob@host.example", "1700000000"],
        )
        .unwrap();
        assert_eq!(
            record.get("nickname").map(Value::to_string).as_deref(),
            Some("Bob!~bob@host.example")
        );
    }

    #[test]
    fn test_two_parameter_forms() {
        let record = decode(RPL_TRYAGAIN, ["Alice", "LIST"]).unwrap();
        assert_eq!(record.get("command"), Some(&Value::Verb(Verb::List)));
        assert_eq!(record.get("message"), None);
        let record = decode(RPL_TRYAGAIN, ["Alice", "LIST", "Please wait a while"]).unwrap();
        assert_eq!(record.text("message"), Some("Please wait a while"));

        let record = decode(ERR_BADCHANMASK, ["Alice", "Bad Channel Mask"]).unwrap();
        assert_eq!(record.get("channel"), None);
        assert_eq!(record.text("message"), Some("Bad Channel Mask"));
        let record = decode(ERR_BADCHANMASK, ["Alice", "#a,b", "Bad Channel Mask"]).unwrap();
        assert_eq!(record.text("channel"), Some("#a,b"));
    }

    #[test]
    fn test_int_parse_failure() {
        match decode(RPL_LUSEROP, ["Alice", "abc", "operator(s) online"]) {
            Err(ReplyError::IntParse { raw, .. }) => assert_eq!(raw, "abc"),
            other => panic!("expected IntParse, got {:?}", other),
        }
    }

    #[test]
    fn test_first_failure_wins() {
        // Both the channel and the count are bad; the channel comes first.
        let err = decode(RPL_LIST, ["Alice", "chan", "many", "topic"]).unwrap_err();
        assert_eq!(err.type_tag(), Some(DomainType::Channel));
    }

    #[test]
    fn test_serialize_record() {
        let record = decode(RPL_ADMINME, ["Alice", "Administrative info"]).unwrap();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "code": 256,
                "symbol": "RPL_ADMINME",
                "is_error": false,
                "params": ["Alice", "Administrative info"],
                "fields": {
                    "client": "Alice",
                    "server": null,
                    "message": "Administrative info"
                }
            })
        );
    }

    #[test]
    fn test_into_parts() {
        let record = decode(RPL_UMODEIS, ["Alice", "+iw"]).unwrap();
        let (code, params): (ReplyCode, ParameterList) = record.into();
        assert_eq!(code, RPL_UMODEIS);
        assert_eq!(params, ParameterList::from(["Alice", "+iw"]));
    }

    fn sample(ty: ValueType, text: &str) -> String {
        match ty {
            ValueType::U16 | ValueType::U32 | ValueType::U64 => "42".to_string(),
            ValueType::Text | ValueType::Params => text.to_string(),
            ValueType::Domain(d) => sample_domain(d).to_string(),
            ValueType::Words(d) => format!("{} {}", sample_domain(d), sample_domain(d)),
        }
    }

    fn sample_domain(ty: DomainType) -> &'static str {
        match ty {
            DomainType::Channel | DomainType::ModeTarget => "#chan",
            DomainType::ChannelStatus => "=",
            DomainType::ClientSource => "nick!user@host",
            DomainType::ISupportParam => "KEY=value",
            DomainType::ModeString => "+nt",
            DomainType::MsgTarget | DomainType::Nickname | DomainType::ReplyTarget => "nick",
            DomainType::Username => "~user",
            DomainType::Verb => "PRIVMSG",
            DomainType::WhoFlags => "H*@",
            DomainType::UserHostReply => "nick*=+user@host",
            DomainType::PrefixedChannel => "@#chan",
            DomainType::PrefixedNickname => "+nick",
            DomainType::Host => "host.example",
            DomainType::UserAtHost => "~user@host.example",
            DomainType::IpAddr => "192.0.2.1",
        }
    }

    /// Builds a parameter list of length `len` in which every field's slot
    /// holds text valid for its type.
    fn valid_params(schema: &ReplySchema, len: usize, text: &str) -> ParameterList {
        let end = if schema.uses_last() { len - 1 } else { len };
        let mut tokens = vec![text.to_string(); len];

        for field in schema.fields() {
            match field.rule {
                Rule::ListFrom(i) => (i..end).for_each(|j| tokens[j] = sample(field.ty, text)),
                Rule::RemainderFrom(i) => {
                    (i + 1..end).for_each(|j| tokens[j] = sample(field.ty, text))
                }
                Rule::MaybeIndex(i) if i < end => tokens[i] = sample(field.ty, text),
                Rule::IndexIfFinal(i) if i + 1 == end => tokens[i] = sample(field.ty, text),
                Rule::IndexIfFollowed(i) if i + 1 < end => tokens[i] = sample(field.ty, text),
                _ => {}
            }
        }
        for field in schema.fields() {
            if let Rule::FixedIndex(i) = field.rule {
                tokens[i] = sample(field.ty, text);
            }
        }

        let mut first = None;
        let mut rest = None;
        for field in schema.fields() {
            match field.rule {
                Rule::Last => tokens[len - 1] = sample(field.ty, text),
                Rule::SubwordOfLast(Part::First) => first = Some(sample(field.ty, text)),
                Rule::SubwordOfLast(Part::Rest) => rest = Some(sample(field.ty, text)),
                _ => {}
            }
        }
        if first.is_some() || rest.is_some() {
            tokens[len - 1] = format!(
                "{} {}",
                first.unwrap_or_else(|| text.to_string()),
                rest.unwrap_or_else(|| text.to_string())
            );
        }

        ParameterList::from(tokens)
    }

    proptest! {
        #[test]
        fn prop_valid_params_round_trip(
            idx in 0..BUILTIN_REPLIES.len(),
            extra in 0usize..4,
            text in "[A-Za-z0-9]{1,12}",
        ) {
            let schema = &BUILTIN_REPLIES[idx];
            let len = schema.min_length() + extra;
            prop_assume!(len > 0 || !schema.uses_last());

            let params = valid_params(schema, len, &text);
            let record = decode(schema.code(), params.clone());
            prop_assert!(record.is_ok(), "{} {:?}: {:?}", schema.symbol(), params, record);
            let record = record.unwrap();
            prop_assert_eq!(record.encode(), (schema.code(), params));
            prop_assert_eq!(record.fields().len(), schema.fields().len());
        }

        #[test]
        fn prop_one_short_is_param_qty(idx in 0..BUILTIN_REPLIES.len()) {
            let schema = &BUILTIN_REPLIES[idx];
            prop_assume!(schema.min_length() > 0);

            let params: ParameterList =
                std::iter::repeat("x").take(schema.min_length() - 1).collect();
            prop_assert_eq!(
                decode(schema.code(), params),
                Err(ReplyError::ParamQty {
                    required: schema.min_length(),
                    received: schema.min_length() - 1,
                })
            );
        }

        #[test]
        fn prop_unknown_code(code in any::<u16>(), params in proptest::collection::vec("[a-z]{1,5}", 0..6)) {
            prop_assume!(Registry::builtin().lookup(code).is_none());
            prop_assert_eq!(decode(code, params), Err(ReplyError::UnknownCode(code)));
        }

        #[test]
        fn prop_optional_collision(extra in 0usize..3) {
            // RPL_LOCALUSERS: optional counts at 1 and 2, message last.
            let mut tokens = vec!["Alice".to_string()];
            tokens.extend((0..extra).map(|i| i.to_string()));
            tokens.push("Current local users".to_string());
            let record = decode(RPL_LOCALUSERS, tokens).unwrap();

            prop_assert_eq!(record.uint("current_users").is_some(), extra >= 1);
            prop_assert_eq!(record.uint("max_users").is_some(), extra >= 2);
            prop_assert_eq!(record.text("message"), Some("Current local users"));
        }
    }
}
