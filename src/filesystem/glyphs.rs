const EMOJI_BASE: &str = "\u{1F4C2}";
const EMOJI_FOLDER: &str = "\u{1F4C1}";
const EMOJI_FILE: &str = "\u{1F4C4}";

const PLAIN_BASE: &str = "+";
const PLAIN_FOLDER: &str = "+";
const PLAIN_FILE: &str = "-";

/// Marker strings placed in front of each rendered name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphSet {
    pub base: String,
    pub folder: String,
    pub file: String,
}

impl GlyphSet {
    pub fn new(base: impl Into<String>, folder: impl Into<String>, file: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            folder: folder.into(),
            file: file.into(),
        }
    }

    /// Open folder, folder and page icons.
    pub fn emoji() -> Self {
        Self::new(EMOJI_BASE, EMOJI_FOLDER, EMOJI_FILE)
    }

    /// ASCII markers for terminals without emoji support.
    pub fn plain() -> Self {
        Self::new(PLAIN_BASE, PLAIN_FOLDER, PLAIN_FILE)
    }
}

impl Default for GlyphSet {
    fn default() -> Self {
        Self::emoji()
    }
}
