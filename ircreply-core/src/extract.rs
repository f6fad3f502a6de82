//! Positional extraction of raw field text.
//!
//! Extraction only slices the parameter list; nothing is parsed here. The
//! trailing slot belongs to the `Last`/`SubwordOfLast` fields whenever the
//! schema has one, so optional and list fields stop short of it.

use crate::error::ReplyError;
use crate::params::ParameterList;
use crate::schema::{FieldSpec, Part, ReplySchema, Rule};

/// The raw text a field covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawSlice<'a> {
    /// An optional field whose slot is not present.
    Absent,
    One(&'a str),
    Many(&'a [String]),
}

/// A field paired with the raw text extracted for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawField<'a> {
    pub spec: &'static FieldSpec,
    pub slice: RawSlice<'a>,
}

/// Extracts every field of `schema` from `params`, in declared order.
pub fn extract<'a>(
    schema: &ReplySchema,
    params: &'a ParameterList,
) -> Result<Vec<RawField<'a>>, ReplyError> {
    let len = params.len();
    if len < schema.min_length() {
        return Err(ReplyError::ParamQty {
            required: schema.min_length(),
            received: len,
        });
    }

    // Everything before `end` is available to non-trailing rules.
    let end = if schema.uses_last() {
        len.saturating_sub(1)
    } else {
        len
    };
    let tokens = params.as_slice();

    schema
        .fields()
        .iter()
        .map(|spec| -> Result<RawField<'a>, ReplyError> {
            let malformed = |index| ReplyError::MalformedSchema {
                code: schema.code(),
                field: spec.name,
                index,
                len,
            };

            let slice = match spec.rule {
                Rule::FixedIndex(i) => RawSlice::One(params.get(i).ok_or_else(|| malformed(i))?),
                Rule::Last => RawSlice::One(params.last().ok_or_else(|| malformed(0))?),
                Rule::MaybeIndex(i) => optional(params, i, i < end),
                Rule::IndexIfFinal(i) => optional(params, i, i + 1 == end),
                Rule::IndexIfFollowed(i) => optional(params, i, i + 1 < end),
                Rule::ListFrom(i) => RawSlice::Many(tokens.get(i..end).unwrap_or_default()),
                Rule::RemainderFrom(i) => {
                    RawSlice::Many(tokens.get(i + 1..end).unwrap_or_default())
                }
                Rule::SubwordOfLast(part) => {
                    let last = params.last().ok_or_else(|| malformed(0))?;
                    let (first, rest) = split_word(last);
                    RawSlice::One(match part {
                        Part::First => first,
                        Part::Rest => rest,
                    })
                }
            };

            Ok(RawField { spec, slice })
        })
        .collect()
}

fn optional(params: &ParameterList, index: usize, present: bool) -> RawSlice<'_> {
    match params.get(index) {
        Some(p) if present => RawSlice::One(p),
        _ => RawSlice::Absent,
    }
}

/// Splits `s` at its first run of spaces.
///
/// Returns the text before the run and the text after it; the second half
/// is empty when `s` has no space.
pub fn split_word(s: &str) -> (&str, &str) {
    match s.split_once(' ') {
        Some((first, rest)) => (first, rest.trim_start_matches(' ')),
        None => (s, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ValueType;
    use proptest::prelude::*;

    const TEXT: ValueType = ValueType::Text;

    static OPTIONAL_BEFORE_LAST: ReplySchema = ReplySchema::reply(
        256,
        "AdminMe",
        "RPL_ADMINME",
        2,
        &[
            FieldSpec::fixed("client", 0, TEXT),
            FieldSpec::maybe("server", 1, TEXT),
            FieldSpec::last("message", TEXT),
        ],
    );

    static OPTIONAL_TAIL: ReplySchema = ReplySchema::reply(
        367,
        "BanList",
        "RPL_BANLIST",
        3,
        &[
            FieldSpec::fixed("client", 0, TEXT),
            FieldSpec::fixed("channel", 1, TEXT),
            FieldSpec::fixed("mask", 2, TEXT),
            FieldSpec::maybe("who", 3, TEXT),
            FieldSpec::maybe("set_ts", 4, TEXT),
        ],
    );

    static LIST_AND_LAST: ReplySchema = ReplySchema::reply(
        5,
        "ISupport",
        "RPL_ISUPPORT",
        3,
        &[
            FieldSpec::fixed("client", 0, TEXT),
            FieldSpec::list_from("tokens", 1, TEXT),
            FieldSpec::last("message", TEXT),
        ],
    );

    static REMAINDER: ReplySchema = ReplySchema::reply(
        324,
        "ChannelModeIs",
        "RPL_CHANNELMODEIS",
        3,
        &[
            FieldSpec::fixed("client", 0, TEXT),
            FieldSpec::fixed("channel", 1, TEXT),
            FieldSpec::fixed("modestring", 2, TEXT),
            FieldSpec::remainder_from("arguments", 2, ValueType::Params),
        ],
    );

    static SUBWORDS: ReplySchema = ReplySchema::reply(
        364,
        "Links",
        "RPL_LINKS",
        2,
        &[
            FieldSpec::fixed("client", 0, TEXT),
            FieldSpec::subword("hopcount", Part::First, TEXT),
            FieldSpec::subword("server_info", Part::Rest, TEXT),
        ],
    );

    // Fixed index 3 can never be satisfied by a two-parameter reply.
    static MALFORMED: ReplySchema = ReplySchema::reply(
        999,
        "Broken",
        "RPL_BROKEN",
        2,
        &[
            FieldSpec::fixed("client", 0, TEXT),
            FieldSpec::fixed("missing", 3, TEXT),
        ],
    );

    fn slices<'a>(fields: &[RawField<'a>]) -> Vec<RawSlice<'a>> {
        fields.iter().map(|f| f.slice).collect()
    }

    #[test]
    fn test_too_few_params() {
        let params = ParameterList::from(["Alice"]);
        assert_eq!(
            extract(&OPTIONAL_BEFORE_LAST, &params),
            Err(ReplyError::ParamQty {
                required: 2,
                received: 1
            })
        );
    }

    #[test]
    fn test_optional_yields_to_last() {
        let params = ParameterList::from(["Alice", "Administrative info"]);
        let fields = extract(&OPTIONAL_BEFORE_LAST, &params).unwrap();
        assert_eq!(
            slices(&fields),
            vec![
                RawSlice::One("Alice"),
                RawSlice::Absent,
                RawSlice::One("Administrative info"),
            ]
        );

        let params = ParameterList::from(["Alice", "irc.example.com", "Administrative info"]);
        let fields = extract(&OPTIONAL_BEFORE_LAST, &params).unwrap();
        assert_eq!(fields[1].slice, RawSlice::One("irc.example.com"));
        assert_eq!(fields[2].slice, RawSlice::One("Administrative info"));
    }

    #[test]
    fn test_optional_without_last() {
        let params = ParameterList::from(["Alice", "#chan", "*!*@bad"]);
        let fields = extract(&OPTIONAL_TAIL, &params).unwrap();
        assert_eq!(fields[3].slice, RawSlice::Absent);
        assert_eq!(fields[4].slice, RawSlice::Absent);

        let params = ParameterList::from(["Alice", "#chan", "*!*@bad", "Bob", "1700000000"]);
        let fields = extract(&OPTIONAL_TAIL, &params).unwrap();
        assert_eq!(fields[3].slice, RawSlice::One("Bob"));
        assert_eq!(fields[4].slice, RawSlice::One("1700000000"));
    }

    #[test]
    fn test_index_depends_on_what_follows() {
        static SHAPES: ReplySchema = ReplySchema::reply(
            338,
            "WhoIsActually",
            "RPL_WHOISACTUALLY",
            3,
            &[
                FieldSpec::fixed("client", 0, TEXT),
                FieldSpec::fixed("nickname", 1, TEXT),
                FieldSpec::new("host", TEXT, Rule::IndexIfFinal(2)),
                FieldSpec::new("user_host", TEXT, Rule::IndexIfFollowed(2)),
                FieldSpec::maybe("ip", 3, TEXT),
                FieldSpec::last("message", TEXT),
            ],
        );
        assert_eq!(SHAPES.check(), Ok(()));

        let params = ParameterList::from(["Alice", "Bob", "msg"]);
        let fields = extract(&SHAPES, &params).unwrap();
        assert_eq!(&slices(&fields)[2..5], &[RawSlice::Absent; 3]);

        let params = ParameterList::from(["Alice", "Bob", "h", "msg"]);
        let fields = extract(&SHAPES, &params).unwrap();
        assert_eq!(
            &slices(&fields)[2..],
            &[
                RawSlice::One("h"),
                RawSlice::Absent,
                RawSlice::Absent,
                RawSlice::One("msg"),
            ]
        );

        let params = ParameterList::from(["Alice", "Bob", "u@h", "10.0.0.1", "msg"]);
        let fields = extract(&SHAPES, &params).unwrap();
        assert_eq!(
            &slices(&fields)[2..],
            &[
                RawSlice::Absent,
                RawSlice::One("u@h"),
                RawSlice::One("10.0.0.1"),
                RawSlice::One("msg"),
            ]
        );
    }

    #[test]
    fn test_list_stops_before_last() {
        let params = ParameterList::from(["Alice", "CHANTYPES=#", "NICKLEN=30", "are supported"]);
        let fields = extract(&LIST_AND_LAST, &params).unwrap();
        match fields[1].slice {
            RawSlice::Many(tokens) => assert_eq!(tokens, ["CHANTYPES=#", "NICKLEN=30"]),
            other => panic!("expected a list, got {:?}", other),
        }
        assert_eq!(fields[2].slice, RawSlice::One("are supported"));
    }

    #[test]
    fn test_remainder_after_index() {
        let params = ParameterList::from(["Alice", "#chan", "+kl", "secret", "10"]);
        let fields = extract(&REMAINDER, &params).unwrap();
        match fields[3].slice {
            RawSlice::Many(tokens) => assert_eq!(tokens, ["secret", "10"]),
            other => panic!("expected a list, got {:?}", other),
        }

        let params = ParameterList::from(["Alice", "#chan", "+nt"]);
        let fields = extract(&REMAINDER, &params).unwrap();
        assert_eq!(fields[3].slice, RawSlice::Many(&[]));
    }

    #[test]
    fn test_subword_of_last() {
        let params = ParameterList::from(["Alice", "3 Some Server Info"]);
        let fields = extract(&SUBWORDS, &params).unwrap();
        assert_eq!(fields[1].slice, RawSlice::One("3"));
        assert_eq!(fields[2].slice, RawSlice::One("Some Server Info"));

        let params = ParameterList::from(["Alice", "0"]);
        let fields = extract(&SUBWORDS, &params).unwrap();
        assert_eq!(fields[1].slice, RawSlice::One("0"));
        assert_eq!(fields[2].slice, RawSlice::One(""));
    }

    #[test]
    fn test_split_word() {
        assert_eq!(split_word("3 Some Server Info"), ("3", "Some Server Info"));
        assert_eq!(split_word("3    padded"), ("3", "padded"));
        assert_eq!(split_word("alone"), ("alone", ""));
        assert_eq!(split_word(""), ("", ""));
    }

    #[test]
    fn test_malformed_schema_does_not_panic() {
        let params = ParameterList::from(["Alice", "something"]);
        assert_eq!(
            extract(&MALFORMED, &params),
            Err(ReplyError::MalformedSchema {
                code: 999,
                field: "missing",
                index: 3,
                len: 2,
            })
        );
    }

    proptest! {
        #[test]
        fn prop_optional_present_iff_beyond_last(extra in 0usize..4) {
            let mut tokens = vec!["Alice".to_string()];
            tokens.extend((0..extra).map(|i| format!("tok{}", i)));
            tokens.push("the message".to_string());
            let params = ParameterList::from(tokens);

            let fields = extract(&OPTIONAL_BEFORE_LAST, &params).unwrap();
            let n = params.len();
            // uses_last: present iff n > i + 1 with i = 1
            prop_assert_eq!(fields[1].slice != RawSlice::Absent, n > 2);
            prop_assert_eq!(fields[2].slice, RawSlice::One("the message"));
        }

        #[test]
        fn prop_list_never_includes_last(extra in 0usize..6) {
            let mut tokens = vec!["Alice".to_string()];
            tokens.extend((0..extra).map(|i| format!("K{}", i)));
            tokens.push("are supported".to_string());
            let params = ParameterList::from(tokens);

            match extract(&LIST_AND_LAST, &params) {
                Ok(fields) => match fields[1].slice {
                    RawSlice::Many(list) => {
                        prop_assert_eq!(list.len(), extra);
                        prop_assert!(list.iter().all(|t| t != "are supported"));
                    }
                    other => prop_assert!(false, "expected a list, got {:?}", other),
                },
                Err(e) => prop_assert_eq!(
                    e,
                    ReplyError::ParamQty { required: 3, received: extra + 2 }
                ),
            }
        }
    }
}
