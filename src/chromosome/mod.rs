pub mod layout;
pub mod search_space;

pub use layout::ChromosomeLayout;
pub use search_space::{GeneBinding, SearchSpace};
