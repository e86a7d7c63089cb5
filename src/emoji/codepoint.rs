//! Conversions between `unified` codepoint strings and glyphs.

use crate::error::DecodeError;

/// Decode a hyphen-separated hex codepoint string into its glyph.
///
/// `"1F600"` decodes to 😀 and `"1F1FA-1F1F8"` to the two-codepoint flag 🇺🇸.
pub fn decode_unified(unified: &str) -> Result<String, DecodeError> {
    let mut glyph = String::new();

    for segment in unified.split('-') {
        if segment.is_empty() {
            return Err(DecodeError::EmptySegment(unified.to_string()));
        }

        let codepoint =
            u32::from_str_radix(segment, 16).map_err(|_| DecodeError::InvalidHex {
                unified: unified.to_string(),
                segment: segment.to_string(),
            })?;

        let ch = char::from_u32(codepoint).ok_or_else(|| DecodeError::InvalidScalar {
            unified: unified.to_string(),
            codepoint,
        })?;
        glyph.push(ch);
    }

    Ok(glyph)
}

/// Encode a glyph as an uppercase, hyphen-separated codepoint string.
pub fn encode_unified(glyph: &str) -> String {
    glyph
        .chars()
        .map(|c| format!("{:04X}", c as u32))
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_single() {
        let glyph = decode_unified("1F600").unwrap();
        assert_eq!(glyph, "\u{1F600}");
        assert_eq!(glyph.chars().count(), 1);
    }

    #[test]
    fn test_decode_flag_sequence() {
        let glyph = decode_unified("1F1FA-1F1F8").unwrap();
        let chars: Vec<char> = glyph.chars().collect();
        assert_eq!(chars, vec!['\u{1F1FA}', '\u{1F1F8}']);
    }

    #[test]
    fn test_decode_lowercase_hex() {
        assert_eq!(decode_unified("2764-fe0f").unwrap(), "\u{2764}\u{FE0F}");
    }

    #[test]
    fn test_decode_malformed() {
        let err = decode_unified("ZZZZ").unwrap_err();
        assert!(matches!(err, DecodeError::InvalidHex { ref segment, .. } if segment == "ZZZZ"));
    }

    #[test]
    fn test_decode_empty_segment() {
        assert!(matches!(
            decode_unified("1F600-"),
            Err(DecodeError::EmptySegment(_))
        ));
        assert!(matches!(decode_unified(""), Err(DecodeError::EmptySegment(_))));
    }

    #[test]
    fn test_decode_surrogate_rejected() {
        assert!(matches!(
            decode_unified("D800"),
            Err(DecodeError::InvalidScalar { codepoint: 0xD800, .. })
        ));
    }

    #[test]
    fn test_encode_matches_dataset_format() {
        assert_eq!(encode_unified("\u{1F600}"), "1F600");
        assert_eq!(encode_unified("\u{00A9}"), "00A9");
        assert_eq!(encode_unified("\u{1F1FA}\u{1F1F8}"), "1F1FA-1F1F8");
    }
}
