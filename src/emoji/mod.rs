//! Emoji dataset, records and the category catalog.

mod catalog;
mod category;
mod codepoint;
pub mod dataset;
mod record;

pub use catalog::{Catalog, build_catalog};
pub use category::Category;
pub use codepoint::{decode_unified, encode_unified};
pub use record::EmojiRecord;
