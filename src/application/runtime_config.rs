use std::path::PathBuf;

use crate::cli::Cli;
use crate::filesystem::{GlyphSet, TreeError, TreeOptions};

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub path: PathBuf,
    pub absolute: bool,
    pub depth: Option<i64>,
    pub emoji: bool,
    pub clip: bool,
}

impl RuntimeConfig {
    pub fn glyphs(&self) -> GlyphSet {
        if self.emoji {
            GlyphSet::emoji()
        } else {
            GlyphSet::plain()
        }
    }

    pub fn tree_options(&self) -> Result<TreeOptions, TreeError> {
        TreeOptions::default()
            .with_absolute(self.absolute)
            .with_glyphs(self.glyphs())
            .with_max_depth(self.depth)
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("."),
            absolute: false,
            depth: None,
            emoji: true,
            clip: false,
        }
    }
}

impl From<Cli> for RuntimeConfig {
    fn from(cli: Cli) -> Self {
        Self {
            path: cli.path,
            absolute: cli.absolute,
            depth: cli.depth,
            emoji: !cli.no_emoji,
            clip: cli.clip,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_from_cli() {
        let cli = Cli::try_parse_from(["dstree", ".", "--no-emoji", "-d", "3", "--clip"])
            .expect("Failed to parse arguments");

        let config = RuntimeConfig::from(cli);

        assert_eq!(config.path, PathBuf::from("."));
        assert!(!config.emoji);
        assert!(config.clip);
        assert_eq!(config.depth, Some(3));
    }

    #[test]
    fn test_tree_options_follow_config() {
        let config = RuntimeConfig {
            absolute: true,
            depth: Some(2),
            emoji: false,
            ..RuntimeConfig::default()
        };

        let options = config.tree_options().expect("Depth should be valid");

        assert!(options.absolute);
        assert_eq!(options.max_depth, Some(2));
        assert_eq!(options.glyphs, GlyphSet::plain());
    }

    #[test]
    fn test_negative_depth_is_invalid() {
        let config = RuntimeConfig {
            depth: Some(-4),
            ..RuntimeConfig::default()
        };

        assert!(matches!(
            config.tree_options(),
            Err(TreeError::InvalidDepth { depth: -4 })
        ));
    }
}
