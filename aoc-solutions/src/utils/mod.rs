pub mod dp_cache;
pub mod grid;
