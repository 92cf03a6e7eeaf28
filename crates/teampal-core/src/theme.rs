//! Folder theme to color palette derivation.
//!
//! Agent avatars take their colors from the owning folder's theme tag. The
//! mapping is a fixed lookup with an explicit `general` fallback so an
//! unknown theme never produces an unstyled avatar.

/// A background/text color class pair for an agent avatar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Background color class (e.g. "bg-blue-100").
    pub bg: &'static str,
    /// Text color class (e.g. "text-blue-700").
    pub text: &'static str,
}

/// The fallback palette used for themes without a dedicated entry.
pub const GENERAL_PALETTE: Palette = Palette {
    bg: "bg-gray-100",
    text: "text-gray-700",
};

/// Resolves a folder theme tag to its color palette.
///
/// The lookup is case-insensitive. Themes without a dedicated entry resolve
/// to [`GENERAL_PALETTE`].
pub fn theme_to_palette(theme: &str) -> Palette {
    match theme.to_lowercase().as_str() {
        "sales" => Palette {
            bg: "bg-blue-100",
            text: "text-blue-700",
        },
        "marketing" => Palette {
            bg: "bg-green-100",
            text: "text-green-700",
        },
        "it" => Palette {
            bg: "bg-purple-100",
            text: "text-purple-700",
        },
        "design" => Palette {
            bg: "bg-pink-100",
            text: "text-pink-700",
        },
        "hr" => Palette {
            bg: "bg-yellow-100",
            text: "text-yellow-700",
        },
        _ => GENERAL_PALETTE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_theme() {
        let palette = theme_to_palette("sales");
        assert_eq!(palette.bg, "bg-blue-100");
        assert_eq!(palette.text, "text-blue-700");
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(theme_to_palette("Marketing"), theme_to_palette("marketing"));
        assert_eq!(theme_to_palette("IT"), theme_to_palette("it"));
    }

    #[test]
    fn test_unknown_theme_falls_back_to_general() {
        assert_eq!(theme_to_palette("finance"), GENERAL_PALETTE);
        assert_eq!(theme_to_palette(""), GENERAL_PALETTE);
    }
}
