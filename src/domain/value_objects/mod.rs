pub mod ids;
pub mod timestamps;
