//! Hex color helpers used by the catalog expander and strategic variants

use tracing::warn;

/// Returned for empty or unreadable input
pub const FALLBACK_COLOR: &str = "#000000";

/// Shift every RGB channel of a `#RRGGBB` (or `RRGGBB`) color by `amount`
///
/// Each channel is clamped to 0..=255 independently. Output is lower-case,
/// zero-padded to six digits and keeps the input's leading `#` convention.
/// Empty or malformed input yields [`FALLBACK_COLOR`].
pub fn adjust_color(hex: &str, amount: i32) -> String {
    let (prefix, digits) = match hex.strip_prefix('#') {
        Some(rest) => ("#", rest),
        None => ("", hex),
    };

    let Some(value) = parse_rgb(digits) else {
        if !hex.is_empty() {
            warn!("Cannot adjust malformed color '{}', using {}", hex, FALLBACK_COLOR);
        }
        return FALLBACK_COLOR.to_string();
    };

    let shift = |channel: u32| (channel as i32 + amount).clamp(0, 255) as u32;

    let r = shift(value >> 16);
    let g = shift((value >> 8) & 0xff);
    let b = shift(value & 0xff);

    format!("{}{:06x}", prefix, (r << 16) | (g << 8) | b)
}

/// Dark-background heuristic: first hex digit after `#` is `0` or `1`
///
/// This is a prefix check, not a luminance computation.
pub fn is_dark_background(hex: &str) -> bool {
    hex.starts_with("#0") || hex.starts_with("#1")
}

/// Check the strict `#RRGGBB` form
pub fn is_valid_hex_color(hex: &str) -> bool {
    hex.strip_prefix('#')
        .is_some_and(|digits| parse_rgb(digits).is_some())
}

fn parse_rgb(digits: &str) -> Option<u32> {
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(digits, 16).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjust_black_up() {
        assert_eq!(adjust_color("#000000", 10), "#0a0a0a");
    }

    #[test]
    fn test_adjust_clamps_high() {
        assert_eq!(adjust_color("#ffffff", 50), "#ffffff");
        assert_eq!(adjust_color("#38bdf8", 20), "#4cd1ff");
    }

    #[test]
    fn test_adjust_clamps_low() {
        assert_eq!(adjust_color("#000000", -50), "#000000");
        assert_eq!(adjust_color("#0f172a", -20), "#000316");
    }

    #[test]
    fn test_adjust_lowercases_output() {
        assert_eq!(adjust_color("#E62B1E", 20), "#fa3f32");
        assert_eq!(adjust_color("#FFFFFF", -10), "#f5f5f5");
    }

    #[test]
    fn test_adjust_keeps_prefix_convention() {
        assert_eq!(adjust_color("000000", 10), "0a0a0a");
        assert_eq!(adjust_color("#000000", 0), "#000000");
    }

    #[test]
    fn test_adjust_fallback() {
        assert_eq!(adjust_color("", 10), FALLBACK_COLOR);
        assert_eq!(adjust_color("#zzzzzz", 10), FALLBACK_COLOR);
        assert_eq!(adjust_color("#fff", 10), FALLBACK_COLOR);
    }

    #[test]
    fn test_is_dark_background() {
        assert!(is_dark_background("#000000"));
        assert!(is_dark_background("#1e1b4b"));
        assert!(is_dark_background("#0a0c10"));
        assert!(!is_dark_background("#f8fafc"));
        assert!(!is_dark_background("#ffffff"));
        // prefix heuristic only
        assert!(!is_dark_background("#2a2a2a"));
    }

    #[test]
    fn test_is_valid_hex_color() {
        assert!(is_valid_hex_color("#E62B1E"));
        assert!(is_valid_hex_color("#0a0c10"));
        assert!(!is_valid_hex_color("0a0c10"));
        assert!(!is_valid_hex_color("#0a0c1"));
        assert!(!is_valid_hex_color("#0a0c1g"));
        assert!(!is_valid_hex_color(""));
    }
}
