use thiserror::Error;

use crate::GlyphKey;

/// Errors raised while loading the glyph tables or resolving keys against
/// them.
#[derive(Debug, Error)]
pub enum GlyphError {
    /// The catalog document is not valid TOML (or does not match the schema).
    #[error("failed to parse glyph tables: {0}")]
    Parse(#[from] toml::de::Error),

    /// Two glyph entries share the same key.
    #[error("glyph `{key}` is defined twice")]
    DuplicateKey { key: GlyphKey },

    /// A glyph entry has an empty color list.
    #[error("glyph `{key}` has no fill colors")]
    NoColors { key: GlyphKey },

    /// A glyph entry names a polygon case outside 1..=4.
    #[error("glyph `{key}` has polygon case {case}, expected 1 through 4")]
    BadCase { key: GlyphKey, case: u8 },

    /// A color is neither a palette name nor a parseable CSS color.
    #[error("glyph `{key}` names unknown color `{spec}`")]
    BadColor { key: GlyphKey, spec: String },

    /// A decomposition table key is not a single character.
    #[error("decomposition key `{text}` is not a single character")]
    BadDecompositionKey { text: String },

    /// A decomposition has an out-of-range component count.
    #[error("decomposition of '{ch}' has {len} components, expected 1 through 3")]
    BadDecompositionLen { ch: char, len: usize },

    /// A decomposition references a key with no catalog entry.
    #[error("decomposition of '{ch}' references missing glyph `{key}`")]
    DanglingDecomposition { ch: char, key: GlyphKey },

    /// A key produced by expansion (or passed in directly) has no catalog
    /// entry. Fatal for the whole expansion: no partial output is produced.
    #[error("no glyph registered for key `{key}`")]
    UnknownGlyph { key: GlyphKey },
}

/// Result type alias for glyph table operations.
pub type GlyphResult<T> = Result<T, GlyphError>;
