//! Loading and validation of the glyph catalog and decomposition tables.

use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;

use color::Srgb;
use peniko::Color;
use serde::Deserialize;

use crate::error::{GlyphError, GlyphResult};
use crate::types::{Case, Glyph, GlyphKey};

/// The built-in catalog document: palette, glyph entries, and decompositions
/// in one declarative TOML file.
pub const BUILTIN_TABLES: &str = include_str!("../data/glyphs.toml");

static BUILTIN: LazyLock<GlyphCatalog> = LazyLock::new(|| {
    GlyphCatalog::from_toml_str(BUILTIN_TABLES).expect("embedded glyph tables are valid")
});

/// On-disk schema of the catalog document.
#[derive(Debug, Deserialize)]
struct CatalogDoc {
    /// Named colors usable in glyph color lists.
    #[serde(default)]
    palette: BTreeMap<String, String>,
    #[serde(rename = "glyph", default)]
    glyphs: Vec<GlyphEntry>,
    /// Composed character → ordered component keys, base letter first.
    #[serde(default)]
    decompositions: BTreeMap<String, Vec<GlyphKey>>,
}

#[derive(Debug, Deserialize)]
struct GlyphEntry {
    key: GlyphKey,
    label: Option<String>,
    case: u8,
    colors: Vec<String>,
}

/// The glyph catalog together with the decomposition table.
///
/// Both tables are load-time constants; every decomposition component is
/// guaranteed to resolve to a catalog entry.
#[derive(Debug, Clone)]
pub struct GlyphCatalog {
    glyphs: HashMap<GlyphKey, Glyph>,
    decompositions: HashMap<char, Vec<GlyphKey>>,
}

impl GlyphCatalog {
    /// The catalog built into this crate.
    pub fn builtin() -> &'static GlyphCatalog {
        &BUILTIN
    }

    /// Parse and validate a catalog document.
    pub fn from_toml_str(document: &str) -> GlyphResult<Self> {
        let doc: CatalogDoc = toml::from_str(document)?;

        let mut glyphs = HashMap::with_capacity(doc.glyphs.len());
        for entry in doc.glyphs {
            let glyph = resolve_entry(entry, &doc.palette)?;
            if let Some(previous) = glyphs.insert(glyph.key.clone(), glyph) {
                return Err(GlyphError::DuplicateKey { key: previous.key });
            }
        }

        let mut decompositions = HashMap::with_capacity(doc.decompositions.len());
        for (text, parts) in doc.decompositions {
            let mut chars = text.chars();
            let ch = match (chars.next(), chars.next()) {
                (Some(ch), None) => ch,
                _ => return Err(GlyphError::BadDecompositionKey { text }),
            };
            if parts.is_empty() || parts.len() > 3 {
                return Err(GlyphError::BadDecompositionLen {
                    ch,
                    len: parts.len(),
                });
            }
            if let Some(key) = parts.iter().find(|key| !glyphs.contains_key(*key)) {
                return Err(GlyphError::DanglingDecomposition {
                    ch,
                    key: key.clone(),
                });
            }
            decompositions.insert(ch, parts);
        }

        log::debug!(
            "loaded glyph tables: {} glyphs, {} decompositions",
            glyphs.len(),
            decompositions.len()
        );

        Ok(Self {
            glyphs,
            decompositions,
        })
    }

    pub fn get(&self, key: &str) -> Option<&Glyph> {
        self.glyphs.get(key)
    }

    /// Resolve `key`, failing with [`GlyphError::UnknownGlyph`] if absent.
    pub fn glyph(&self, key: &str) -> GlyphResult<&Glyph> {
        self.glyphs.get(key).ok_or_else(|| GlyphError::UnknownGlyph {
            key: key.to_string(),
        })
    }

    /// Component keys of a composed character, if it decomposes.
    pub fn decomposition(&self, ch: char) -> Option<&[GlyphKey]> {
        self.decompositions.get(&ch).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Glyph> {
        self.glyphs.values()
    }
}

fn resolve_entry(entry: GlyphEntry, palette: &BTreeMap<String, String>) -> GlyphResult<Glyph> {
    let GlyphEntry {
        key,
        label,
        case,
        colors,
    } = entry;

    let case = Case::from_index(case).ok_or(GlyphError::BadCase {
        key: key.clone(),
        case,
    })?;

    if colors.is_empty() {
        return Err(GlyphError::NoColors { key });
    }
    let colors = colors
        .iter()
        .map(|spec| resolve_color(spec, palette, &key))
        .collect::<GlyphResult<Vec<Color>>>()?;

    let label = label.unwrap_or_else(|| key.clone());
    Ok(Glyph {
        key,
        label,
        case,
        colors,
    })
}

/// A color spec is either a palette name or a CSS color literal.
fn resolve_color(
    spec: &str,
    palette: &BTreeMap<String, String>,
    key: &str,
) -> GlyphResult<Color> {
    let literal = palette.get(spec).map(String::as_str).unwrap_or(spec);
    color::parse_color(literal)
        .map(|dynamic| dynamic.to_alpha_color::<Srgb>())
        .map_err(|_| GlyphError::BadColor {
            key: key.to_string(),
            spec: spec.to_string(),
        })
}
