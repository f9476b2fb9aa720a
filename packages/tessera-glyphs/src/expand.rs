//! Expansion of an input string into a flat sequence of glyph keys.

use unicode_normalization::UnicodeNormalization;

use crate::catalog::GlyphCatalog;
use crate::error::{GlyphError, GlyphResult};
use crate::types::GlyphKey;

impl GlyphCatalog {
    /// Expand `input` into the ordered glyph keys that render it.
    ///
    /// The input is normalized to NFC (so combining-mark sequences meet the
    /// composed-form table) and matched case-insensitively. Whitespace is
    /// dropped and consumes no cell. Composed characters expand through the
    /// decomposition table, base letter first; anything else becomes a
    /// single-component key and must exist in the catalog.
    ///
    /// Fails with [`GlyphError::UnknownGlyph`] on the first character with no
    /// catalog entry; nothing is returned for the rest of the string.
    pub fn expand(&self, input: &str) -> GlyphResult<Vec<GlyphKey>> {
        let mut keys = Vec::with_capacity(input.len());
        for ch in input.nfc() {
            if ch.is_whitespace() {
                continue;
            }
            // `to_uppercase` may yield more than one char (e.g. ß → SS);
            // each resulting char is looked up independently.
            for upper in ch.to_uppercase() {
                match self.decomposition(upper) {
                    Some(parts) => keys.extend(parts.iter().cloned()),
                    None => {
                        let key = upper.to_string();
                        if self.get(&key).is_none() {
                            return Err(GlyphError::UnknownGlyph { key });
                        }
                        keys.push(key);
                    }
                }
            }
        }
        Ok(keys)
    }
}
