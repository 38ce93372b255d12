//! Directory tree rendering.
//!
//! This module walks a directory depth-first and renders it as an indented text
//! diagram, with folders listed before files and names ordered case-insensitively.

mod error;
mod glyphs;
mod options;
mod tree;

pub use error::TreeError;
pub use glyphs::GlyphSet;
pub use options::TreeOptions;
pub use tree::Tree;
