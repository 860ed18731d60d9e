pub mod input;
pub mod reader;
pub mod writer;
