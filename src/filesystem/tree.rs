use std::fmt;
use std::fs;
use std::path::{Component, Path, PathBuf, Prefix, PrefixComponent};

use derive_more::Display;
use snafu::{ResultExt, ensure};
use tracing::{debug, trace};

use crate::ext::PathExt;
use crate::filesystem::TreeOptions;
use crate::filesystem::error::{InvalidPathSnafu, NotADirectorySnafu, TraversalSnafu, TreeError};

const INDENT: &str = "  ";
const CONNECTOR: &str = "|_";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Base,
    Folder,
    File,
}

/// A single rendered line of a tree diagram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeLine {
    pub indent: usize,
    pub connected: bool,
    pub kind: LineKind,
    pub glyph: String,
    pub name: String,
}

impl fmt::Display for TreeLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.indent {
            f.write_str(INDENT)?;
        }
        if self.connected {
            f.write_str(CONNECTOR)?;
        }
        write!(f, "{} {}", self.glyph, self.name)
    }
}

/// A fully rendered directory tree.
///
/// The first lines form the base label (the root itself, or its whole segment chain
/// in absolute mode), followed by one line per entry found beneath the root.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("{rendered}")]
pub struct Tree {
    root: PathBuf,
    base_len: usize,
    lines: Vec<TreeLine>,
    rendered: String,
}

impl Tree {
    pub fn new(path: impl AsRef<Path>, options: TreeOptions) -> Result<Self, TreeError> {
        TreeBuilder::new(options).build(path)
    }

    /// The canonical root the tree was built from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[cfg(test)]
    pub fn lines(&self) -> &[TreeLine] {
        &self.lines
    }

    #[cfg(test)]
    pub fn base_lines(&self) -> &[TreeLine] {
        &self.lines[..self.base_len]
    }

    pub fn content_lines(&self) -> &[TreeLine] {
        &self.lines[self.base_len..]
    }

    /// Indentation added to every content line, one level per segment rendered
    /// below the filesystem root in absolute mode.
    #[cfg(test)]
    pub fn offset(&self) -> usize {
        self.base_len - 1
    }

    pub fn as_str(&self) -> &str {
        &self.rendered
    }
}

struct Entry {
    path: PathBuf,
    name: String,
    folded: String,
    is_dir: bool,
}

impl Entry {
    fn new(path: PathBuf) -> Self {
        let name = path.entry_name();
        Self {
            folded: name.to_lowercase(),
            // Follows symlinks, a dangling link is listed as a file
            is_dir: path.is_dir(),
            name,
            path,
        }
    }
}

/// Builds [`Tree`]s by walking a directory depth-first.
#[derive(Debug, Clone, Default)]
pub struct TreeBuilder {
    options: TreeOptions,
}

impl TreeBuilder {
    pub fn new(options: TreeOptions) -> Self {
        Self { options }
    }

    pub fn build(&self, path: impl AsRef<Path>) -> Result<Tree, TreeError> {
        let root = Self::resolve(path.as_ref())?;
        debug!("Building tree for {}", root.display());

        let mut lines = self.build_base(&root);
        let base_len = lines.len();
        self.enumerate(&root, 0, base_len - 1, &mut lines)?;
        debug!("Rendered {} entries", lines.len() - base_len);

        let rendered = lines
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n");

        Ok(Tree {
            root,
            base_len,
            lines,
            rendered,
        })
    }

    fn resolve(path: &Path) -> Result<PathBuf, TreeError> {
        let resolved = path.canonicalize().context(InvalidPathSnafu {
            path: path.to_path_buf(),
        })?;
        ensure!(
            resolved.is_dir(),
            NotADirectorySnafu {
                path: resolved.clone()
            }
        );
        Ok(resolved)
    }

    fn build_base(&self, root: &Path) -> Vec<TreeLine> {
        if !self.options.absolute {
            return vec![self.base_line(0, false, root.entry_name())];
        }

        let mut components = root.components();
        let head = match components.next() {
            Some(Component::Prefix(prefix)) => prefix_label(&prefix),
            Some(component) => component.as_os_str().to_string_lossy().into_owned(),
            None => root.display().to_string(),
        };

        let mut lines = vec![self.base_line(0, false, head)];
        lines.extend(
            components
                .filter_map(|component| match component {
                    Component::Normal(segment) => Some(segment.to_string_lossy().into_owned()),
                    _ => None,
                })
                .enumerate()
                .map(|(indent, segment)| self.base_line(indent, true, segment)),
        );
        lines
    }

    fn base_line(&self, indent: usize, connected: bool, name: String) -> TreeLine {
        TreeLine {
            indent,
            connected,
            kind: LineKind::Base,
            glyph: self.options.glyphs.base.clone(),
            name,
        }
    }

    fn enumerate(
        &self,
        dir: &Path,
        depth: usize,
        offset: usize,
        lines: &mut Vec<TreeLine>,
    ) -> Result<(), TreeError> {
        if self.options.max_depth.is_some_and(|max| depth >= max) {
            trace!("Depth limit reached at {}", dir.display());
            return Ok(());
        }

        for entry in Self::read_entries(dir)? {
            let (kind, glyph) = if entry.is_dir {
                (LineKind::Folder, &self.options.glyphs.folder)
            } else {
                (LineKind::File, &self.options.glyphs.file)
            };
            lines.push(TreeLine {
                indent: offset + depth,
                connected: true,
                kind,
                glyph: glyph.clone(),
                name: entry.name,
            });

            if entry.is_dir {
                self.enumerate(&entry.path, depth + 1, offset, lines)?;
            }
        }

        Ok(())
    }

    /// Lists a directory with folders first, then by case-insensitive name.
    fn read_entries(dir: &Path) -> Result<Vec<Entry>, TreeError> {
        trace!("Reading directory {}", dir.display());
        let mut entries = fs::read_dir(dir)
            .context(TraversalSnafu {
                path: dir.to_path_buf(),
            })?
            .map(|entry| {
                entry.map(|entry| Entry::new(entry.path())).context(TraversalSnafu {
                    path: dir.to_path_buf(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        entries.sort_by(|a, b| {
            (!a.is_dir, &a.folded, &a.name).cmp(&(!b.is_dir, &b.folded, &b.name))
        });
        Ok(entries)
    }
}

fn prefix_label(prefix: &PrefixComponent<'_>) -> String {
    match prefix.kind() {
        Prefix::Disk(drive) | Prefix::VerbatimDisk(drive) => format!("{}:", drive as char),
        _ => prefix.as_os_str().to_string_lossy().into_owned(),
    }
}
