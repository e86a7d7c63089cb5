//! Picker configuration: option types, loading and validation.

mod service;
mod types;
pub mod validation;

pub use service::{config_dir, config_path, init_options, load_options, load_options_from};
pub use types::{PickerOptions, RenderValueStyle, TextStyle};
pub use validation::{ValidationWarning, validate_options};
