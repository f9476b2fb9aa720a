use peniko::Color;

/// Key of a glyph in the catalog.
///
/// Characters that render as a single cell name themselves (`"A"`, `"7"`,
/// `"?"`); diacritic marks carry the mark name (`"circumflex"`, `"acute"`,
/// ...).
pub type GlyphKey = String;

/// One of the four templates that partition a 3×3 cell into five polygons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Case {
    One,
    Two,
    Three,
    Four,
}

impl Case {
    /// Map a 1-based case number from the catalog document.
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            1 => Some(Case::One),
            2 => Some(Case::Two),
            3 => Some(Case::Three),
            4 => Some(Case::Four),
            _ => None,
        }
    }

    /// The 1-based case number, as written in the catalog document.
    pub fn index(self) -> u8 {
        match self {
            Case::One => 1,
            Case::Two => 2,
            Case::Three => 3,
            Case::Four => 4,
        }
    }
}

/// A single renderable unit: letter, digit, punctuation mark, or diacritic.
///
/// Immutable once the catalog is loaded.
#[derive(Debug, Clone)]
pub struct Glyph {
    pub key: GlyphKey,
    /// Text drawn over the cell when labels are enabled. Defaults to the key.
    pub label: String,
    pub case: Case,
    /// Fill colors, applied to the template polygons in order and cycled if
    /// fewer than five are given. Never empty.
    pub colors: Vec<Color>,
}

impl Glyph {
    /// Fill color for the template polygon at `index`, cycling through the
    /// color list.
    pub fn fill_color(&self, index: usize) -> Color {
        self.colors[index % self.colors.len()]
    }
}
