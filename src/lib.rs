pub mod cli;
pub mod config;
pub mod emoji;
pub mod error;
pub mod history;
pub mod picker;
pub mod selection;
pub mod storage;
pub mod view;

#[cfg(test)]
pub mod test_utils;
