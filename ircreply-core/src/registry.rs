//! The code-to-schema registry and the decode entry points.

use crate::decode::decode_slice;
use crate::error::{RegistryError, ReplyError};
use crate::extract::extract;
use crate::params::ParameterList;
use crate::record::{DecodedField, Record};
use crate::schema::{ReplyCode, ReplySchema};
use crate::table::BUILTIN_REPLIES;
use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

static BUILTIN: OnceLock<Registry> = OnceLock::new();

/// An immutable index of reply schemas.
#[derive(Debug)]
pub struct Registry {
    by_code: HashMap<ReplyCode, &'static ReplySchema>,
    by_symbol: HashMap<&'static str, &'static ReplySchema>,
    /// Sorted by code.
    ordered: Vec<&'static ReplySchema>,
}

impl Registry {
    /// Returns the process-wide registry of built-in replies.
    pub fn builtin() -> &'static Registry {
        BUILTIN.get_or_init(|| {
            debug_assert_eq!(
                Registry::from_schemas(BUILTIN_REPLIES).err(),
                None,
                "built-in reply table is inconsistent"
            );
            let registry = Registry::index(BUILTIN_REPLIES);
            tracing::debug!("built reply registry with {} schemas", registry.len());
            registry
        })
    }

    /// Builds a registry over `schemas`, rejecting duplicate codes and
    /// schemas whose rules do not fit their minimum length.
    pub fn from_schemas(schemas: &'static [ReplySchema]) -> Result<Registry, RegistryError> {
        let mut seen = HashSet::with_capacity(schemas.len());
        for schema in schemas {
            if !seen.insert(schema.code()) {
                return Err(RegistryError::DuplicateCode(schema.code()));
            }
            schema.check()?;
        }
        Ok(Registry::index(schemas))
    }

    fn index(schemas: &'static [ReplySchema]) -> Registry {
        let by_code: HashMap<_, _> = schemas.iter().map(|s| (s.code(), s)).collect();
        let by_symbol = schemas.iter().map(|s| (s.symbol(), s)).collect();
        let mut ordered: Vec<_> = by_code.values().copied().collect();
        ordered.sort_by_key(|s| s.code());
        Registry {
            by_code,
            by_symbol,
            ordered,
        }
    }

    pub fn lookup(&self, code: ReplyCode) -> Option<&'static ReplySchema> {
        self.by_code.get(&code).copied()
    }

    /// Finds a schema by its protocol constant, e.g. `"RPL_NAMREPLY"`.
    pub fn lookup_symbol(&self, symbol: &str) -> Option<&'static ReplySchema> {
        self.by_symbol.get(symbol).copied()
    }

    /// Iterates schemas in ascending code order.
    pub fn schemas(&self) -> impl Iterator<Item = &'static ReplySchema> + '_ {
        self.ordered.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Decodes a reply against this registry.
    pub fn decode(
        &self,
        code: ReplyCode,
        params: impl Into<ParameterList>,
    ) -> Result<Record, ReplyError> {
        let params = params.into();
        let result = self.decode_params(code, params);
        match &result {
            Ok(record) => tracing::trace!("decoded {} ({:03})", record.symbol(), code),
            Err(e) => tracing::debug!("rejected reply {:03}: {}", code, e),
        }
        result
    }

    fn decode_params(&self, code: ReplyCode, params: ParameterList) -> Result<Record, ReplyError> {
        let schema = self.lookup(code).ok_or(ReplyError::UnknownCode(code))?;
        let fields = extract(schema, &params)?
            .into_iter()
            .map(|raw| {
                decode_slice(raw.slice, raw.spec.ty).map(|v| DecodedField::new(raw.spec.name, v))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Record::new(schema, params, fields))
    }
}

/// Decodes a reply against the built-in registry.
pub fn decode(code: ReplyCode, params: impl Into<ParameterList>) -> Result<Record, ReplyError> {
    Registry::builtin().decode(code, params)
}
