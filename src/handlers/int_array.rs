use super::traits::{check_width, DiscoveryHandler};
use crate::codec::{bits_to_int_array, int_array_to_bits, num_bits_for_range};
use crate::config::IntArrayGeneConfig;
use crate::error::{GenecodecError, Result};
use crate::types::Bits;

/// Fixed-size array of bounded integers, one equal-width sub-gene per element
#[derive(Debug, Clone)]
pub struct IntArrayHandler {
    min: i64,
    max: i64,
    size: usize,
    element_bits: u32,
}

impl IntArrayHandler {
    pub fn new(config: &IntArrayGeneConfig) -> Result<Self> {
        config.validate()?;

        let min = i64::from(config.min);
        let max = i64::from(config.max);
        let element_bits = num_bits_for_range(min, max);
        log::debug!(
            "int array handler: [{}, {}] x {}, {} bits per element",
            min,
            max,
            config.size,
            element_bits
        );

        Ok(Self {
            min,
            max,
            size: config.size,
            element_bits,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn element_bits(&self) -> u32 {
        self.element_bits
    }
}

impl DiscoveryHandler for IntArrayHandler {
    type Value = Vec<i64>;

    fn num_bits(&self) -> u32 {
        self.element_bits * self.size as u32
    }

    fn pack(&self, values: &Vec<i64>) -> Result<Bits> {
        if values.len() != self.size {
            return Err(GenecodecError::type_mismatch(
                format!("{} elements", self.size),
                format!("{} elements", values.len()),
            ));
        }
        Ok(int_array_to_bits(values, self.min, self.max, self.element_bits))
    }

    /// Elements past `max` (possible whenever `2^bits - 1 > max - min`) are clamped.
    fn unpack(&self, bits: &Bits) -> Result<Vec<i64>> {
        check_width(bits, self.num_bits())?;

        let decoded = bits_to_int_array(bits, self.min, self.max, self.element_bits, self.size)?;
        Ok(decoded
            .into_iter()
            .map(|v| {
                let clamped = v.clamp(self.min, self.max);
                if clamped != v {
                    log::debug!("int array element {} clamped to {}", v, clamped);
                }
                clamped
            })
            .collect())
    }
}
