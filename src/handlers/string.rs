use super::traits::{check_width, list_index, DiscoveryHandler};
use crate::codec::{int_to_bits, num_bits_for_range};
use crate::config::StringGeneConfig;
use crate::error::Result;
use crate::types::Bits;

/// Choice from an ordered list of strings, stored as the list index
#[derive(Debug, Clone)]
pub struct StringHandler {
    values: Vec<String>,
    num_bits: u32,
}

impl StringHandler {
    pub fn new(config: &StringGeneConfig) -> Result<Self> {
        config.validate()?;

        let num_bits = num_bits_for_range(0, config.values.len() as i64);
        log::debug!("string handler: {:?}, {} bits", config.values, num_bits);

        Ok(Self {
            values: config.values.clone(),
            num_bits,
        })
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }
}

impl DiscoveryHandler for StringHandler {
    type Value = String;

    fn num_bits(&self) -> u32 {
        self.num_bits
    }

    /// A value missing from the list encodes as index 0.
    fn pack(&self, value: &String) -> Result<Bits> {
        let index = match self.values.iter().position(|v| v == value) {
            Some(index) => index,
            None => {
                log::warn!(
                    "'{}' is not one of {:?}, encoding first entry",
                    value,
                    self.values
                );
                0
            }
        };
        Ok(int_to_bits(
            index as i64,
            0,
            self.values.len() as i64,
            self.num_bits,
        ))
    }

    fn unpack(&self, bits: &Bits) -> Result<String> {
        check_width(bits, self.num_bits)?;
        Ok(self.values[list_index(bits, self.values.len())].clone())
    }
}
