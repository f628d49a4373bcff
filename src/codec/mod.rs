pub mod binary;

pub use binary::{
    bits_to_int, bits_to_int_array, int_array_to_bits, int_to_bits, max_index,
    num_bits_for_range, MAX_GENE_BITS,
};
