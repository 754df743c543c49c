//! Map rendering

mod static_map;

pub use static_map::{StaticMapError, StaticMapRenderer};
