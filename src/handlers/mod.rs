pub mod traits;
pub mod float;
pub mod int_array;
pub mod string;
pub mod handler;

pub use traits::DiscoveryHandler;
pub use float::FloatHandler;
pub use int_array::IntArrayHandler;
pub use string::StringHandler;
pub use handler::Handler;
