pub mod headers;
pub mod trim;
