//! Ordered reply parameters.

use serde::{Deserialize, Serialize};
use std::ops::Index;

/// The parameters of a reply, in wire order.
///
/// The list is produced by whatever split the raw line; tokens are stored
/// exactly as received.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterList(Vec<String>);

impl ParameterList {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn last(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl Index<usize> for ParameterList {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.0[index]
    }
}

impl From<Vec<String>> for ParameterList {
    fn from(params: Vec<String>) -> Self {
        Self(params)
    }
}

impl From<&[String]> for ParameterList {
    fn from(params: &[String]) -> Self {
        Self(params.to_vec())
    }
}

impl From<Vec<&str>> for ParameterList {
    fn from(params: Vec<&str>) -> Self {
        params.into_iter().collect()
    }
}

impl<const N: usize> From<[&str; N]> for ParameterList {
    fn from(params: [&str; N]) -> Self {
        params.into_iter().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for ParameterList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl IntoIterator for ParameterList {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ParameterList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl std::fmt::Display for ParameterList {
    /// Writes the tokens separated by single spaces.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, param) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(param)?;
        }
        Ok(())
    }
}
