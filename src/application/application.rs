use std::io::{self, Write};

use snafu::Snafu;
use snafu::prelude::*;
use tracing::{debug, info};

use crate::application::{Clipboard, ClipboardError, RuntimeConfig, SystemClipboard};
use crate::filesystem::{Tree, TreeError};

pub struct Application;

impl Application {
    pub fn run(app_config: impl Into<RuntimeConfig>) -> Result<(), ApplicationError> {
        let mut clipboard = SystemClipboard::default();
        let mut stdout = io::stdout().lock();
        Self::run_with(app_config, &mut clipboard, &mut stdout)?;
        Ok(())
    }

    /// Renders the configured tree, copies it if requested, then writes it to `out`.
    pub fn run_with(
        app_config: impl Into<RuntimeConfig>,
        clipboard: &mut impl Clipboard,
        out: &mut impl Write,
    ) -> Result<Tree, ApplicationError> {
        let app_config: RuntimeConfig = app_config.into();
        debug!("Runtime config: {:?}", app_config);

        let options = app_config.tree_options().context(TreeOptionsSnafu)?;
        let tree = Tree::new(&app_config.path, options).context(TreeBuildSnafu)?;
        info!(
            "Rendered {} with {} entries",
            tree.root().display(),
            tree.content_lines().len()
        );

        if app_config.clip {
            clipboard
                .copy(tree.as_str())
                .context(ClipboardCopySnafu)?;
            info!("Copied tree to the clipboard");
        }

        writeln!(out, "{tree}").context(OutputSnafu)?;
        Ok(tree)
    }
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Invalid tree options"))]
    TreeOptionsError { source: TreeError },
    #[snafu(display("Failed to build the directory tree"))]
    TreeBuildError { source: TreeError },
    #[snafu(display("Failed to copy the output"))]
    ClipboardCopyError { source: ClipboardError },
    #[snafu(display("Failed to write the output"))]
    OutputError { source: io::Error },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;
    use std::fs;
    use tempfile::TempDir;

    #[derive(Default)]
    struct RecordingClipboard {
        copied: Vec<String>,
    }

    impl Clipboard for RecordingClipboard {
        fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
            self.copied.push(text.to_string());
            Ok(())
        }
    }

    #[fixture]
    fn project() -> TempDir {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        fs::create_dir(temp_dir.path().join("src")).expect("Failed to create directory");
        fs::write(temp_dir.path().join("src/main.rs"), "").expect("Failed to create file");
        fs::write(temp_dir.path().join("Cargo.toml"), "").expect("Failed to create file");
        temp_dir
    }

    fn config_for(dir: &TempDir) -> RuntimeConfig {
        RuntimeConfig {
            path: dir.path().to_path_buf(),
            emoji: false,
            ..RuntimeConfig::default()
        }
    }

    fn leaf_name(dir: &TempDir) -> String {
        dir.path()
            .canonicalize()
            .expect("Failed to canonicalize temp directory")
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .expect("Temp directory should have a name")
    }

    #[rstest]
    fn test_prints_tree_with_trailing_newline(project: TempDir) {
        let mut clipboard = RecordingClipboard::default();
        let mut out = Vec::new();

        Application::run_with(config_for(&project), &mut clipboard, &mut out)
            .expect("Application should succeed");

        let expected = format!(
            "+ {}\n|_+ src\n  |_- main.rs\n|_- Cargo.toml\n",
            leaf_name(&project)
        );
        assert_eq!(String::from_utf8(out).expect("Output should be UTF-8"), expected);
        assert!(clipboard.copied.is_empty());
    }

    #[rstest]
    fn test_clip_copies_rendered_tree(project: TempDir) {
        let mut clipboard = RecordingClipboard::default();
        let mut out = Vec::new();
        let config = RuntimeConfig {
            clip: true,
            depth: Some(1),
            ..config_for(&project)
        };

        let tree = Application::run_with(config, &mut clipboard, &mut out)
            .expect("Application should succeed");

        assert_eq!(clipboard.copied, vec![tree.to_string()]);
        assert!(!clipboard.copied[0].contains("main.rs"));
        assert_eq!(
            String::from_utf8(out).expect("Output should be UTF-8"),
            format!("{tree}\n")
        );
    }

    #[rstest]
    fn test_negative_depth_fails_before_traversal(project: TempDir) {
        let config = RuntimeConfig {
            depth: Some(-1),
            ..config_for(&project)
        };
        let mut out = Vec::new();

        let result = Application::run_with(config, &mut RecordingClipboard::default(), &mut out);

        assert!(matches!(
            result,
            Err(ApplicationError::TreeOptionsError {
                source: TreeError::InvalidDepth { depth: -1 }
            })
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn test_missing_path_produces_no_output() {
        let config = RuntimeConfig {
            path: "/this/path/does/not/exist".into(),
            ..RuntimeConfig::default()
        };
        let mut out = Vec::new();

        let result = Application::run_with(config, &mut RecordingClipboard::default(), &mut out);

        assert!(matches!(
            result,
            Err(ApplicationError::TreeBuildError {
                source: TreeError::InvalidPath { .. }
            })
        ));
        assert!(out.is_empty());
    }
}
