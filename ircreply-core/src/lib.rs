//! # ircreply-core
//!
//! Schema-driven decoding of IRC numeric replies.
//!
//! This crate provides:
//! - The reply schema registry and the built-in reply table
//! - Positional extraction of each field's raw text
//! - Typed decoding of fields into [`Value`]s
//! - Immutable [`Record`]s that encode back to their exact input

pub mod codes;
pub mod decode;
pub mod error;
pub mod extract;
pub mod params;
pub mod record;
pub mod registry;
pub mod schema;
mod table;

pub use decode::{decode_field, decode_list, Value};
pub use error::{RegistryError, ReplyError};
pub use extract::{extract, RawField, RawSlice};
pub use params::ParameterList;
pub use record::{DecodedField, Record};
pub use registry::{decode, Registry};
pub use schema::{DomainType, FieldSpec, Part, ReplyCode, ReplySchema, Rule, ValueType};
pub use table::BUILTIN_REPLIES;
