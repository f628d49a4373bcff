use crate::codec::bits_to_int;
use crate::error::{GenecodecError, Result};
use crate::types::Bits;

/// Encodes one property's value as a fixed-width gene and back
///
/// `pack` and `unpack` are pure. Every bit pattern of length `num_bits()`
/// decodes to a valid value; any other length is an integration error.
pub trait DiscoveryHandler {
    type Value;

    /// Total gene width, including every sub-gene
    fn num_bits(&self) -> u32;

    fn pack(&self, value: &Self::Value) -> Result<Bits>;

    fn unpack(&self, bits: &Bits) -> Result<Self::Value>;
}

pub(crate) fn check_width(bits: &Bits, num_bits: u32) -> Result<()> {
    if bits.len() != num_bits as usize {
        return Err(GenecodecError::length_mismatch(num_bits as usize, bits.len()));
    }
    Ok(())
}

/// Decode a list index, clamped to the last entry.
pub(crate) fn list_index(bits: &Bits, len: usize) -> usize {
    let index = bits_to_int(bits, 0).clamp(0, len as i64 - 1) as usize;
    log::trace!("list_index: {} -> {} of {}", bits, index, len);
    index
}
