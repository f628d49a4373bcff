//! Bit-level genotype/phenotype codec for genetic property search.
//!
//! Each searched property gets a handler that packs its current value into a
//! fixed-width binary gene and unpacks any candidate gene back into a valid
//! value. A [`SearchSpace`] lines the genes up into one chromosome.

pub mod accessor;
pub mod chromosome;
pub mod codec;
pub mod config;
pub mod error;
pub mod handlers;
pub mod types;

pub use accessor::{PropertyAccessor, PropertyMap};
pub use chromosome::{ChromosomeLayout, GeneBinding, SearchSpace};
pub use error::{GenecodecError, Result};
pub use handlers::{DiscoveryHandler, FloatHandler, Handler, IntArrayHandler, StringHandler};
pub use types::{Bits, GeneValue, ValueDomain};
