use crate::codec::{num_bits_for_range, MAX_GENE_BITS};
use crate::error::{GenecodecError, Result};
use crate::types::ValueDomain;
use serde::{Deserialize, Serialize};

/// One property's gene description, tagged by `type`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GeneConfig {
    Float(FloatGeneConfig),
    IntArray(IntArrayGeneConfig),
    String(StringGeneConfig),
}

impl GeneConfig {
    pub fn validate(&self) -> Result<()> {
        match self {
            GeneConfig::Float(c) => c.validate(),
            GeneConfig::IntArray(c) => c.validate(),
            GeneConfig::String(c) => c.validate(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloatGeneConfig {
    pub domain: ValueDomain<f64>,
    /// Quantization width for range mode. Derived from the integer span when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bits: Option<u32>,
}

impl FloatGeneConfig {
    pub fn range(min: f64, max: f64) -> Self {
        Self {
            domain: ValueDomain::Range { min, max },
            bits: None,
        }
    }

    pub fn list(values: Vec<f64>) -> Self {
        Self {
            domain: ValueDomain::List { values },
            bits: None,
        }
    }

    pub fn with_bits(mut self, bits: u32) -> Self {
        self.bits = Some(bits);
        self
    }

    pub fn validate(&self) -> Result<()> {
        match &self.domain {
            ValueDomain::Range { min, max } => {
                if !min.is_finite() || !max.is_finite() {
                    return Err(GenecodecError::Configuration(format!(
                        "Float range bounds must be finite: min={}, max={}",
                        min, max
                    )));
                }
                if min > max {
                    return Err(GenecodecError::Configuration(format!(
                        "Float range minimum must not exceed maximum: min={}, max={}",
                        min, max
                    )));
                }
                if !(max - min).is_finite() {
                    return Err(GenecodecError::Configuration(format!(
                        "Float range span overflows: min={}, max={}",
                        min, max
                    )));
                }
            }
            ValueDomain::List { values } => {
                if values.is_empty() {
                    return Err(GenecodecError::Configuration(
                        "Float list must contain at least one value".to_string(),
                    ));
                }
                if let Some(bad) = values.iter().find(|v| !v.is_finite()) {
                    return Err(GenecodecError::Configuration(format!(
                        "Float list values must be finite, got {}",
                        bad
                    )));
                }
                if self.bits.is_some() {
                    return Err(GenecodecError::Configuration(
                        "Float list mode derives its width from the list; bits must be unset"
                            .to_string(),
                    ));
                }
            }
        }

        if let Some(bits) = self.bits {
            if bits == 0 || bits > MAX_GENE_BITS {
                return Err(GenecodecError::Configuration(format!(
                    "Float gene bits must be between 1 and {}, got {}",
                    MAX_GENE_BITS, bits
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntArrayGeneConfig {
    pub min: i32,
    pub max: i32,
    pub size: usize,
}

impl IntArrayGeneConfig {
    pub fn validate(&self) -> Result<()> {
        if self.min > self.max {
            return Err(GenecodecError::Configuration(format!(
                "Integer array minimum must not exceed maximum: min={}, max={}",
                self.min, self.max
            )));
        }
        if self.size == 0 {
            return Err(GenecodecError::Configuration(
                "Integer array size must be at least 1".to_string(),
            ));
        }

        let element_bits = num_bits_for_range(i64::from(self.min), i64::from(self.max));
        let total = u32::try_from(self.size)
            .ok()
            .and_then(|size| element_bits.checked_mul(size));
        if total.is_none() {
            return Err(GenecodecError::Configuration(format!(
                "Integer array gene is too wide: {} elements of {} bits",
                self.size, element_bits
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StringGeneConfig {
    /// Order defines the index mapping.
    pub values: Vec<String>,
}

impl StringGeneConfig {
    pub fn new<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Self {
        Self {
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.values.is_empty() {
            return Err(GenecodecError::Configuration(
                "String list must contain at least one value".to_string(),
            ));
        }
        Ok(())
    }
}
