//! Filename parsing for the `<base>-<size>.jpg` convention.
//!
//! Every logical image is stored as three pre-resized JPEG renditions that
//! share a base name and differ only in a width token:
//!
//! ```text
//! 20240612_153012-400w.jpg     small
//! 20240612_153012-800w.jpg     medium
//! 20240612_153012-1200w.jpg    large
//! ```
//!
//! The base name is usually a capture timestamp but is treated as an opaque
//! string. The extension is matched exactly (`.jpg`, lowercase); `.jpeg`,
//! `.JPG`, and other formats are not part of the convention.

use std::fmt;

/// The extension shared by every size variant, including the dot.
const VARIANT_EXTENSION: &str = ".jpg";

/// One of the three responsive renditions of a logical image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SizeVariant {
    Small,
    Medium,
    Large,
}

impl SizeVariant {
    /// All variants, smallest first.
    pub const ALL: [SizeVariant; 3] = [SizeVariant::Small, SizeVariant::Medium, SizeVariant::Large];

    /// The filename token for this variant (`400w`, `800w`, `1200w`).
    pub fn token(self) -> &'static str {
        match self {
            SizeVariant::Small => "400w",
            SizeVariant::Medium => "800w",
            SizeVariant::Large => "1200w",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.token() == token)
    }

    /// Filename of this variant for a base name: `<base>-<token>.jpg`.
    pub fn file_name(self, base: &str) -> String {
        format!("{}-{}{}", base, self.token(), VARIANT_EXTENSION)
    }
}

impl fmt::Display for SizeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Result of parsing a size-variant filename like `a-800w.jpg`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantName {
    /// Shared stem, e.g. `a` from `a-800w.jpg`. Never empty.
    pub base: String,
    pub size: SizeVariant,
}

/// Parse a filename following the `<base>-<size>.jpg` convention.
///
/// - `"a-400w.jpg"` → base="a", size=Small
/// - `"2024-06-12-1200w.jpg"` → base="2024-06-12", size=Large
/// - `"a-600w.jpg"` → None (unknown size token)
/// - `"-400w.jpg"` → None (empty base)
/// - `"a-400w.JPG"` → None (extension is case-sensitive)
pub fn parse_variant_name(name: &str) -> Option<VariantName> {
    let stem = name.strip_suffix(VARIANT_EXTENSION)?;
    let (base, token) = stem.rsplit_once('-')?;
    if base.is_empty() {
        return None;
    }
    let size = SizeVariant::from_token(token)?;
    Some(VariantName {
        base: base.to_string(),
        size,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_each_size_token() {
        for size in SizeVariant::ALL {
            let name = size.file_name("1700000000");
            let parsed = parse_variant_name(&name).unwrap();
            assert_eq!(parsed.base, "1700000000");
            assert_eq!(parsed.size, size);
        }
    }

    #[test]
    fn base_with_dashes_keeps_everything_before_last_dash() {
        let p = parse_variant_name("2024-06-12-800w.jpg").unwrap();
        assert_eq!(p.base, "2024-06-12");
        assert_eq!(p.size, SizeVariant::Medium);
    }

    #[test]
    fn base_may_itself_look_like_a_size() {
        let p = parse_variant_name("a-400w-1200w.jpg").unwrap();
        assert_eq!(p.base, "a-400w");
        assert_eq!(p.size, SizeVariant::Large);
    }

    #[test]
    fn base_with_spaces() {
        let p = parse_variant_name("my photo-400w.jpg").unwrap();
        assert_eq!(p.base, "my photo");
    }

    #[test]
    fn unknown_size_token_rejected() {
        assert_eq!(parse_variant_name("a-600w.jpg"), None);
        assert_eq!(parse_variant_name("a-400.jpg"), None);
        assert_eq!(parse_variant_name("a-400W.jpg"), None);
    }

    #[test]
    fn empty_base_rejected() {
        assert_eq!(parse_variant_name("-400w.jpg"), None);
    }

    #[test]
    fn missing_dash_rejected() {
        assert_eq!(parse_variant_name("a400w.jpg"), None);
        assert_eq!(parse_variant_name("400w.jpg"), None);
    }

    #[test]
    fn other_extensions_rejected() {
        assert_eq!(parse_variant_name("a-400w.JPG"), None);
        assert_eq!(parse_variant_name("a-400w.jpeg"), None);
        assert_eq!(parse_variant_name("a-400w.png"), None);
        assert_eq!(parse_variant_name("a-400w.jpg.bak"), None);
        assert_eq!(parse_variant_name("a-400w"), None);
    }

    #[test]
    fn token_round_trips() {
        assert_eq!(SizeVariant::from_token("800w"), Some(SizeVariant::Medium));
        assert_eq!(SizeVariant::from_token("1600w"), None);
        assert_eq!(SizeVariant::Large.to_string(), "1200w");
    }
}
