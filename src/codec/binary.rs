//! Bounded integers <-> fixed-width binary strings
//!
//! Every gene in a chromosome is ultimately one or more unsigned indices laid
//! out big-endian. The handlers map their value domain onto an index range and
//! delegate the bit twiddling here.
//!
//! # Asymmetry
//!
//! Encoding clamps the index into what `num_bits` can hold. Decoding does not
//! clamp against `max`: a width of 4 bits for the range `0..=10` can produce
//! indices up to 15, and callers that need `[min, max]` must clamp themselves.

use crate::error::{GenecodecError, Result};
use crate::types::Bits;

/// Widest single gene (or array element) so that any index fits an `i64`.
pub const MAX_GENE_BITS: u32 = 63;

/// Bits needed to address `max - min` as an index: `floor(log2(max - min)) + 1`.
///
/// An empty or inverted span still occupies one bit, which always decodes to `min`.
pub fn num_bits_for_range(min: i64, max: i64) -> u32 {
    let span = max.saturating_sub(min);
    if span <= 0 {
        return 1;
    }
    u64::BITS - (span as u64).leading_zeros()
}

/// Largest index representable in `num_bits` bits.
pub fn max_index(num_bits: u32) -> i64 {
    if num_bits >= MAX_GENE_BITS {
        i64::MAX
    } else {
        (1i64 << num_bits) - 1
    }
}

/// Encode `value - min` as exactly `num_bits` characters, zero-padded.
pub fn int_to_bits(value: i64, min: i64, max: i64, num_bits: u32) -> Bits {
    let index = value.saturating_sub(min).clamp(0, max_index(num_bits));
    log::trace!(
        "int_to_bits: value={} range=[{}, {}] bits={} index={}",
        value,
        min,
        max,
        num_bits,
        index
    );
    Bits::from_valid(format!("{:0width$b}", index, width = num_bits as usize))
}

/// Decode an unsigned big-endian index and offset it by `min`. No clamping.
pub fn bits_to_int(bits: &Bits, min: i64) -> i64 {
    let index = bits
        .as_str()
        .bytes()
        .fold(0i64, |acc, b| (acc << 1) | i64::from(b == b'1'));
    min.saturating_add(index)
}

/// Concatenate the independently encoded elements, in array order.
pub fn int_array_to_bits(values: &[i64], min: i64, max: i64, bits_per_element: u32) -> Bits {
    let parts: Vec<Bits> = values
        .iter()
        .map(|&v| int_to_bits(v, min, max, bits_per_element))
        .collect();
    Bits::concat(&parts)
}

/// Split into `size` chunks of `bits_per_element` and decode each one.
pub fn bits_to_int_array(
    bits: &Bits,
    min: i64,
    max: i64,
    bits_per_element: u32,
    size: usize,
) -> Result<Vec<i64>> {
    let width = bits_per_element as usize;
    let expected = width * size;
    if bits.len() != expected {
        return Err(GenecodecError::length_mismatch(expected, bits.len()));
    }
    log::trace!(
        "bits_to_int_array: {} elements of {} bits in [{}, {}]",
        size,
        width,
        min,
        max
    );

    (0..size)
        .map(|i| Ok(bits_to_int(&bits.slice(i * width, width)?, min)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits(s: &str) -> Bits {
        s.parse().unwrap()
    }

    #[test]
    fn test_num_bits_for_range() {
        assert_eq!(num_bits_for_range(0, 1), 1);
        assert_eq!(num_bits_for_range(0, 2), 2);
        assert_eq!(num_bits_for_range(0, 3), 2);
        assert_eq!(num_bits_for_range(0, 7), 3);
        assert_eq!(num_bits_for_range(0, 8), 4);
        assert_eq!(num_bits_for_range(0, 10), 4);
        assert_eq!(num_bits_for_range(-5, 5), 4);
    }

    #[test]
    fn test_degenerate_range_uses_one_bit() {
        assert_eq!(num_bits_for_range(3, 3), 1);
        assert_eq!(num_bits_for_range(4, 3), 1);
    }

    #[test]
    fn test_huge_span_stays_within_limit() {
        assert_eq!(num_bits_for_range(0, i64::MAX), MAX_GENE_BITS);
        assert_eq!(num_bits_for_range(i64::MIN, i64::MAX), MAX_GENE_BITS);
    }

    #[test]
    fn test_int_to_bits_pads_and_clamps() {
        assert_eq!(int_to_bits(7, 0, 10, 4).as_str(), "0111");
        assert_eq!(int_to_bits(0, 0, 10, 4).as_str(), "0000");
        // clamp is driven by the width, not by max
        assert_eq!(int_to_bits(12, 0, 10, 4).as_str(), "1100");
        assert_eq!(int_to_bits(99, 0, 10, 4).as_str(), "1111");
        assert_eq!(int_to_bits(-3, 0, 10, 4).as_str(), "0000");
        assert_eq!(int_to_bits(-3, -5, 5, 4).as_str(), "0010");
    }

    #[test]
    fn test_bits_to_int_does_not_clamp() {
        assert_eq!(bits_to_int(&bits("0111"), 0), 7);
        assert_eq!(bits_to_int(&bits("1111"), 0), 15);
        assert_eq!(bits_to_int(&bits("0010"), -5), -3);
    }

    #[test]
    fn test_array_length_is_checked() {
        let err = bits_to_int_array(&bits("10100011"), 0, 7, 3, 3).unwrap_err();
        assert!(matches!(
            err,
            GenecodecError::LengthMismatch { expected: 9, actual: 8 }
        ));
    }
}
