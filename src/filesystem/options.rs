use snafu::OptionExt;

use crate::filesystem::{GlyphSet, TreeError, error::InvalidDepthSnafu};

/// Rendering options for a [`Tree`](crate::filesystem::Tree).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeOptions {
    /// Render every segment of the resolved root instead of its final name only.
    pub absolute: bool,
    /// Number of levels listed beneath the root. `None` lists everything.
    pub max_depth: Option<usize>,
    pub glyphs: GlyphSet,
}

impl TreeOptions {
    pub fn with_absolute(mut self, absolute: bool) -> Self {
        self.absolute = absolute;
        self
    }

    /// Sets the depth limit from a signed value, rejecting negative depths.
    pub fn with_max_depth(mut self, depth: Option<i64>) -> Result<Self, TreeError> {
        self.max_depth = depth
            .map(|depth| {
                usize::try_from(depth)
                    .ok()
                    .context(InvalidDepthSnafu { depth })
            })
            .transpose()?;
        Ok(self)
    }

    pub fn with_glyphs(mut self, glyphs: GlyphSet) -> Self {
        self.glyphs = glyphs;
        self
    }
}
