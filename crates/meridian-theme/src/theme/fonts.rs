//! Font asset naming.
//!
//! The theme ships four styles of one family. This module only names the
//! files; locating the asset root and loading the font data belong to the
//! host and the text renderer respectively.

use std::str::FromStr;

use crate::error::Error;

/// Font family shipped with the theme.
pub const FONT_FAMILY: &str = "NotoSans";

/// One of the four shipped font styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontStyle {
    #[default]
    Regular,
    Bold,
    Italic,
    BoldItalic,
}

impl FontStyle {
    /// All shipped styles.
    pub const ALL: [Self; 4] = [Self::Regular, Self::Bold, Self::Italic, Self::BoldItalic];

    /// The style's file name within the font asset directory.
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Regular => "NotoSans-Regular.ttf",
            Self::Bold => "NotoSans-Bold.ttf",
            Self::Italic => "NotoSans-Italic.ttf",
            Self::BoldItalic => "NotoSans-BoldItalic.ttf",
        }
    }

    /// The style's name as it appears in the file name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Regular => "Regular",
            Self::Bold => "Bold",
            Self::Italic => "Italic",
            Self::BoldItalic => "BoldItalic",
        }
    }
}

impl FromStr for FontStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Regular" => Ok(Self::Regular),
            "Bold" => Ok(Self::Bold),
            "Italic" => Ok(Self::Italic),
            "BoldItalic" => Ok(Self::BoldItalic),
            _ => Err(Error::unknown_font_style(s)),
        }
    }
}
