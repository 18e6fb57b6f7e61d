pub mod normalize;
pub mod path;
pub mod table;
pub mod time;

pub use normalize::{normalize, normalize_opt};
