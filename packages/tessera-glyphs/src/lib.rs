//! Square-code glyph catalog and Vietnamese decomposition tables.
//!
//! Every renderable unit (letter, digit, punctuation mark, or diacritic)
//! is a [`Glyph`]: a polygon-partition [`Case`] plus an ordered list of fill
//! colors. Accented Vietnamese characters are not glyphs of their own;
//! the decomposition table expands each of them into a base letter followed
//! by one or two mark glyphs (`moon`, `circumflex`, `horn`, `hard_d`,
//! `acute`, `grave`, `hook`, `tilde`, `dot`).
//!
//! Both tables live in one declarative TOML document embedded in the crate
//! ([`BUILTIN_TABLES`]) and are validated when loaded: every decomposition
//! component must name an existing glyph, every color must resolve, and every
//! case number must be in range.
//!
//! ```
//! use tessera_glyphs::GlyphCatalog;
//!
//! let catalog = GlyphCatalog::builtin();
//! let keys = catalog.expand("Ấy")?;
//! assert_eq!(keys, ["A", "circumflex", "acute", "Y"]);
//! # Ok::<(), tessera_glyphs::GlyphError>(())
//! ```

mod catalog;
mod error;
mod expand;
mod types;

pub use catalog::{BUILTIN_TABLES, GlyphCatalog};
pub use error::{GlyphError, GlyphResult};
pub use types::{Case, Glyph, GlyphKey};
