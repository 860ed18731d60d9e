pub mod attributes;

pub use attributes::{
    AttributeRow, AttributeTable, MissingMetadataColumn, UNKNOWN_MEANING, UnnamedUnknownRow,
};
