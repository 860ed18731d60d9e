pub mod codes;
pub mod details;

pub use codes::RefusalCode;
pub use details::{InputFile, Refusal, RefusalKind};
