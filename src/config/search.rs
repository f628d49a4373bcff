use super::genes::GeneConfig;
use super::traits::ConfigSection;
use crate::accessor::PropertyMap;
use crate::error::{GenecodecError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One searched property: where it lives and how it is encoded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyGeneConfig {
    pub path: String,
    pub gene: GeneConfig,
}

/// The genes of a search run, in chromosome order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default)]
    pub genes: Vec<PropertyGeneConfig>,
    /// Starting property values, used to seed the first chromosome
    #[serde(default, skip_serializing_if = "PropertyMap::is_empty")]
    pub properties: PropertyMap,
}

impl ConfigSection for SearchConfig {
    fn section_name() -> &'static str {
        "search"
    }

    fn validate(&self) -> Result<()> {
        if self.genes.is_empty() {
            return Err(GenecodecError::Configuration(
                "At least one gene must be declared".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for binding in &self.genes {
            if binding.path.trim().is_empty() {
                return Err(GenecodecError::Configuration(
                    "Gene property path must not be empty".to_string(),
                ));
            }
            if !seen.insert(binding.path.as_str()) {
                return Err(GenecodecError::Configuration(format!(
                    "Property '{}' is declared more than once",
                    binding.path
                )));
            }
            binding.gene.validate().map_err(|e| match e {
                GenecodecError::Configuration(msg) => {
                    GenecodecError::Configuration(format!("{}: {}", binding.path, msg))
                }
                other => other,
            })?;
        }
        Ok(())
    }
}
