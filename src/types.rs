use crate::error::{GenecodecError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fixed-length binary string, most significant bit first.
///
/// Only `'0'` and `'1'` are ever stored. Values built by the codec are valid
/// by construction; text coming from outside goes through `FromStr`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Bits(String);

impl Bits {
    pub(crate) fn from_valid(bits: String) -> Self {
        debug_assert!(bits.bytes().all(|b| b == b'0' || b == b'1'));
        Self(bits)
    }

    pub fn zeros(len: usize) -> Self {
        Self("0".repeat(len))
    }

    pub fn ones(len: usize) -> Self {
        Self("1".repeat(len))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Copy out `len` bits starting at `start`.
    pub fn slice(&self, start: usize, len: usize) -> Result<Bits> {
        let end = start + len;
        if end > self.len() {
            return Err(GenecodecError::length_mismatch(end, self.len()));
        }
        Ok(Self(self.0[start..end].to_string()))
    }

    pub fn concat(parts: &[Bits]) -> Bits {
        let mut joined = String::with_capacity(parts.iter().map(Bits::len).sum());
        for part in parts {
            joined.push_str(&part.0);
        }
        Self(joined)
    }

    /// The 0/1 weight vector a GA operates on.
    pub fn to_bools(&self) -> Vec<bool> {
        self.0.bytes().map(|b| b == b'1').collect()
    }

    pub fn from_bools(bools: &[bool]) -> Bits {
        Self(bools.iter().map(|&b| if b { '1' } else { '0' }).collect())
    }
}

impl fmt::Display for Bits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Bits {
    type Err = GenecodecError;

    fn from_str(s: &str) -> Result<Self> {
        if let Some((pos, c)) = s.char_indices().find(|&(_, c)| c != '0' && c != '1') {
            return Err(GenecodecError::InvalidBits(format!(
                "unexpected '{}' at position {}",
                c, pos
            )));
        }
        Ok(Self(s.to_string()))
    }
}

impl TryFrom<String> for Bits {
    type Error = GenecodecError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Bits> for String {
    fn from(bits: Bits) -> Self {
        bits.0
    }
}

/// How a scalar gene interprets its index space
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ValueDomain<T> {
    Range { min: T, max: T },
    List { values: Vec<T> },
}

/// A decoded (or to-be-encoded) property value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GeneValue {
    Float(f64),
    IntArray(Vec<i64>),
    String(String),
}

impl GeneValue {
    pub fn kind(&self) -> &'static str {
        match self {
            GeneValue::Float(_) => "float",
            GeneValue::IntArray(_) => "int_array",
            GeneValue::String(_) => "string",
        }
    }
}
