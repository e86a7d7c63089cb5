//! Configuration validation utilities.
//!
//! Provides validation for picker options, returning warnings for
//! non-fatal issues that should be logged but don't prevent startup.

use super::types::PickerOptions;

/// Non-fatal validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    /// The field that has an issue.
    pub field: String,
    /// A description of the issue.
    pub message: String,
}

impl ValidationWarning {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Validate picker options, returning warnings for non-fatal issues.
pub fn validate_options(options: &PickerOptions) -> Vec<ValidationWarning> {
    let mut warnings = vec![];

    if options.columns == 0 {
        warnings.push(ValidationWarning::new(
            "columns",
            "Columns must be at least 1. Falling back to 1.",
        ));
    }

    if options.reduce_emoji_size_by < 0.0 {
        warnings.push(ValidationWarning::new(
            "reduce_emoji_size_by",
            format!(
                "Negative reduction {} will enlarge cells.",
                options.reduce_emoji_size_by
            ),
        ));
    }

    if options.number_of_emojis == Some(0) {
        warnings.push(ValidationWarning::new(
            "number_of_emojis",
            "A cap of 0 disables capping; omit the option instead.",
        ));
    }

    if let Some(multiplier) = options.max_font_size_multiplier
        && multiplier < 1.0
    {
        warnings.push(ValidationWarning::new(
            "max_font_size_multiplier",
            format!("Multiplier {} is below 1 and will shrink labels.", multiplier),
        ));
    }

    if !is_hex_color(&options.theme) {
        warnings.push(ValidationWarning::new(
            "theme",
            format!("'{}' is not a #RRGGBB colour.", options.theme),
        ));
    }

    for (field, style) in [
        (
            "render_value_style.rating_text",
            &options.render_value_style.rating_text,
        ),
        (
            "render_value_style.rating_text_selected",
            &options.render_value_style.rating_text_selected,
        ),
    ] {
        if !is_hex_color(&style.color) {
            warnings.push(ValidationWarning::new(
                field,
                format!("'{}' is not a #RRGGBB colour.", style.color),
            ));
        }
        if style.font_size <= 0.0 {
            warnings.push(ValidationWarning::new(
                field,
                format!("Font size {} must be positive.", style.font_size),
            ));
        }
    }

    if options.namespace.trim().is_empty() {
        warnings.push(ValidationWarning::new(
            "namespace",
            "Empty namespace; history from different hosts may collide.",
        ));
    }

    warnings
}

/// Check for a `#RRGGBB` or `#RRGGBBAA` colour.
fn is_hex_color(s: &str) -> bool {
    s.strip_prefix('#')
        .is_some_and(|hex| matches!(hex.len(), 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_valid() {
        assert!(validate_options(&PickerOptions::default()).is_empty());
    }

    #[test]
    fn test_zero_columns() {
        let options = PickerOptions {
            columns: 0,
            ..PickerOptions::default()
        };
        let warnings = validate_options(&options);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].field, "columns");
    }

    #[test]
    fn test_bad_colours() {
        let mut options = PickerOptions {
            theme: "blue".to_string(),
            ..PickerOptions::default()
        };
        options.render_value_style.rating_text.color = "#12".to_string();

        let fields: Vec<_> = validate_options(&options)
            .into_iter()
            .map(|w| w.field)
            .collect();
        assert!(fields.contains(&"theme".to_string()));
        assert!(fields.contains(&"render_value_style.rating_text".to_string()));
    }

    #[test]
    fn test_zero_cap_and_multiplier() {
        let options = PickerOptions {
            number_of_emojis: Some(0),
            max_font_size_multiplier: Some(0.5),
            ..PickerOptions::default()
        };
        assert_eq!(validate_options(&options).len(), 2);
    }

    #[test]
    fn test_is_hex_color() {
        assert!(is_hex_color("#007AFF"));
        assert!(is_hex_color("#007aff80"));
        assert!(!is_hex_color("007AFF"));
        assert!(!is_hex_color("#GGGGGG"));
    }
}
