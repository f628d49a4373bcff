pub mod traits;
pub mod genes;
pub mod search;
pub mod manager;

pub use manager::ConfigManager;
pub use traits::ConfigSection;
pub use genes::{FloatGeneConfig, GeneConfig, IntArrayGeneConfig, StringGeneConfig};
pub use search::{PropertyGeneConfig, SearchConfig};
