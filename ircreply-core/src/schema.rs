//! Reply schemas: field layouts and positional rules.
//!
//! A schema is declared once, in a `static` table, through `const fn`
//! constructors. Whether the schema reserves the final parameter for a
//! trailing field is computed by those constructors, so every rule that has
//! to yield to the trailing slot consults the same precomputed flag.

use crate::error::RegistryError;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

/// Numeric reply code, e.g. `1` for `RPL_WELCOME`.
pub type ReplyCode = u16;

/// Which half of the final parameter a [`Rule::SubwordOfLast`] field takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Part {
    /// Text before the first run of spaces.
    First,
    /// Text after the first run of spaces, with the spaces removed.
    Rest,
}

/// Where a field's raw text comes from in the parameter list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "rule", content = "index", rename_all = "snake_case")]
pub enum Rule {
    /// The parameter at this position.
    FixedIndex(usize),
    /// The final parameter.
    Last,
    /// The parameter at this position, if there is one that is not the
    /// trailing slot.
    MaybeIndex(usize),
    /// The parameter at this position, only when it is the last one before
    /// the trailing slot.
    IndexIfFinal(usize),
    /// The parameter at this position, only when at least one more follows
    /// it before the trailing slot.
    IndexIfFollowed(usize),
    /// Every parameter from this position on, stopping before the trailing
    /// slot.
    ListFrom(usize),
    /// Every parameter after this position, stopping before the trailing
    /// slot.
    RemainderFrom(usize),
    /// One half of the final parameter.
    SubwordOfLast(Part),
}

impl Rule {
    /// Returns true if this rule reads the final parameter.
    pub const fn reads_last(&self) -> bool {
        matches!(self, Rule::Last | Rule::SubwordOfLast(_))
    }

    /// Returns true if the field can be missing from a valid reply.
    pub const fn is_optional(&self) -> bool {
        matches!(
            self,
            Rule::MaybeIndex(_) | Rule::IndexIfFinal(_) | Rule::IndexIfFollowed(_)
        )
    }

    /// Returns true if the field covers a run of parameters.
    pub const fn is_list(&self) -> bool {
        matches!(self, Rule::ListFrom(_) | Rule::RemainderFrom(_))
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::FixedIndex(i) => write!(f, "[{}]", i),
            Rule::Last => write!(f, "last"),
            Rule::MaybeIndex(i) => write!(f, "[{}]?", i),
            Rule::IndexIfFinal(i) => write!(f, "[{}]?$", i),
            Rule::IndexIfFollowed(i) => write!(f, "[{}]?+", i),
            Rule::ListFrom(i) => write!(f, "[{}..]", i),
            Rule::RemainderFrom(i) => write!(f, "({}..]", i),
            Rule::SubwordOfLast(Part::First) => write!(f, "last.first"),
            Rule::SubwordOfLast(Part::Rest) => write!(f, "last.rest"),
        }
    }
}

/// The validated value types a field can be decoded into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DomainType {
    Channel,
    ChannelStatus,
    ClientSource,
    ISupportParam,
    ModeString,
    ModeTarget,
    MsgTarget,
    Nickname,
    ReplyTarget,
    Username,
    Verb,
    WhoFlags,
    UserHostReply,
    PrefixedChannel,
    PrefixedNickname,
    Host,
    UserAtHost,
    IpAddr,
}

impl DomainType {
    pub fn as_str(self) -> &'static str {
        match self {
            DomainType::Channel => "Channel",
            DomainType::ChannelStatus => "ChannelStatus",
            DomainType::ClientSource => "ClientSource",
            DomainType::ISupportParam => "ISupportParam",
            DomainType::ModeString => "ModeString",
            DomainType::ModeTarget => "ModeTarget",
            DomainType::MsgTarget => "MsgTarget",
            DomainType::Nickname => "Nickname",
            DomainType::ReplyTarget => "ReplyTarget",
            DomainType::Username => "Username",
            DomainType::Verb => "Verb",
            DomainType::WhoFlags => "WhoFlags",
            DomainType::UserHostReply => "UserHostReply",
            DomainType::PrefixedChannel => "PrefixedChannel",
            DomainType::PrefixedNickname => "PrefixedNickname",
            DomainType::Host => "Host",
            DomainType::UserAtHost => "UserAtHost",
            DomainType::IpAddr => "IpAddr",
        }
    }
}

impl fmt::Display for DomainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// The type a field's raw text is decoded into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ValueType {
    U16,
    U32,
    U64,
    /// Verbatim text.
    Text,
    /// A raw run of parameters.
    Params,
    Domain(DomainType),
    /// One parameter holding a space-separated list of values.
    Words(DomainType),
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueType::U16 => write!(f, "u16"),
            ValueType::U32 => write!(f, "u32"),
            ValueType::U64 => write!(f, "u64"),
            ValueType::Text => write!(f, "text"),
            ValueType::Params => write!(f, "params"),
            ValueType::Domain(d) => write!(f, "{}", d),
            ValueType::Words(d) => write!(f, "words<{}>", d),
        }
    }
}

/// One named field of a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    #[serde(rename = "type", serialize_with = "serialize_display")]
    pub ty: ValueType,
    #[serde(flatten)]
    pub rule: Rule,
}

impl FieldSpec {
    pub const fn new(name: &'static str, ty: ValueType, rule: Rule) -> Self {
        Self { name, ty, rule }
    }

    pub const fn fixed(name: &'static str, index: usize, ty: ValueType) -> Self {
        Self::new(name, ty, Rule::FixedIndex(index))
    }

    pub const fn last(name: &'static str, ty: ValueType) -> Self {
        Self::new(name, ty, Rule::Last)
    }

    pub const fn maybe(name: &'static str, index: usize, ty: ValueType) -> Self {
        Self::new(name, ty, Rule::MaybeIndex(index))
    }

    pub const fn list_from(name: &'static str, index: usize, ty: ValueType) -> Self {
        Self::new(name, ty, Rule::ListFrom(index))
    }

    pub const fn remainder_from(name: &'static str, index: usize, ty: ValueType) -> Self {
        Self::new(name, ty, Rule::RemainderFrom(index))
    }

    pub const fn subword(name: &'static str, part: Part, ty: ValueType) -> Self {
        Self::new(name, ty, Rule::SubwordOfLast(part))
    }
}

/// The layout of one numeric reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplySchema {
    code: ReplyCode,
    name: &'static str,
    symbol: &'static str,
    min_length: usize,
    is_error: bool,
    uses_last: bool,
    fields: &'static [FieldSpec],
}

impl ReplySchema {
    pub const fn new(
        code: ReplyCode,
        name: &'static str,
        symbol: &'static str,
        min_length: usize,
        is_error: bool,
        fields: &'static [FieldSpec],
    ) -> Self {
        let mut uses_last = false;
        let mut i = 0;
        while i < fields.len() {
            if fields[i].rule.reads_last() {
                uses_last = true;
            }
            i += 1;
        }
        Self {
            code,
            name,
            symbol,
            min_length,
            is_error,
            uses_last,
            fields,
        }
    }

    /// Declares a non-error reply (`RPL_*`).
    pub const fn reply(
        code: ReplyCode,
        name: &'static str,
        symbol: &'static str,
        min_length: usize,
        fields: &'static [FieldSpec],
    ) -> Self {
        Self::new(code, name, symbol, min_length, false, fields)
    }

    /// Declares an error reply (`ERR_*`).
    pub const fn error(
        code: ReplyCode,
        name: &'static str,
        symbol: &'static str,
        min_length: usize,
        fields: &'static [FieldSpec],
    ) -> Self {
        Self::new(code, name, symbol, min_length, true, fields)
    }

    pub fn code(&self) -> ReplyCode {
        self.code
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn symbol(&self) -> &'static str {
        self.symbol
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn is_error(&self) -> bool {
        self.is_error
    }

    /// True if some field reads the final parameter. Optional and list
    /// fields never claim that parameter when this is set.
    pub fn uses_last(&self) -> bool {
        self.uses_last
    }

    pub fn fields(&self) -> &'static [FieldSpec] {
        self.fields
    }

    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Checks that the layout is consistent with the minimum length.
    ///
    /// Every fixed index must exist in a minimum-length reply without
    /// landing on the trailing slot, optional indices must lie past the
    /// mandatory positions, and list starts may not skip past the minimum.
    pub fn check(&self) -> Result<(), RegistryError> {
        let trailing = usize::from(self.uses_last);
        let mut seen = HashSet::new();

        for field in self.fields {
            if !seen.insert(field.name) {
                return Err(RegistryError::DuplicateField {
                    code: self.code,
                    field: field.name,
                });
            }

            let ok = match field.rule {
                Rule::FixedIndex(i) => i + trailing < self.min_length,
                Rule::Last | Rule::SubwordOfLast(_) => self.min_length > 0,
                Rule::MaybeIndex(i) | Rule::IndexIfFinal(i) | Rule::IndexIfFollowed(i) => {
                    i + trailing >= self.min_length
                }
                Rule::ListFrom(i) | Rule::RemainderFrom(i) => i <= self.min_length,
            };
            if !ok {
                return Err(RegistryError::InvalidRule {
                    code: self.code,
                    field: field.name,
                    rule: field.rule,
                    min_length: self.min_length,
                });
            }
        }

        Ok(())
    }
}

fn serialize_display<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: fmt::Display,
    S: serde::Serializer,
{
    serializer.collect_str(value)
}
