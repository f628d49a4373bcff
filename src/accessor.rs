use crate::error::{GenecodecError, Result};
use crate::types::GeneValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Read/write port onto whatever object holds the searched properties
///
/// Paths are opaque keys here; resolving them is the implementor's business.
pub trait PropertyAccessor {
    fn get(&self, path: &str) -> Result<GeneValue>;
    fn set(&mut self, path: &str, value: GeneValue) -> Result<()>;
}

/// Flat in-memory property store keyed by path
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyMap {
    values: BTreeMap<String, GeneValue>,
}

impl PropertyMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<String>, value: GeneValue) -> Option<GeneValue> {
        self.values.insert(path.into(), value)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &GeneValue)> {
        self.values.iter()
    }
}

impl FromIterator<(String, GeneValue)> for PropertyMap {
    fn from_iter<I: IntoIterator<Item = (String, GeneValue)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl PropertyAccessor for PropertyMap {
    fn get(&self, path: &str) -> Result<GeneValue> {
        self.values
            .get(path)
            .cloned()
            .ok_or_else(|| GenecodecError::UnknownProperty(path.to_string()))
    }

    /// Only existing properties can be written.
    fn set(&mut self, path: &str, value: GeneValue) -> Result<()> {
        match self.values.get_mut(path) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(GenecodecError::UnknownProperty(path.to_string())),
        }
    }
}
