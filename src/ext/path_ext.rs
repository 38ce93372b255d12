use std::path::{Component, Path, PathBuf};

/// Renders a path for messages, preferring its canonical form and falling back to a
/// lexically normalized absolute path when the path cannot be resolved.
pub fn best_effort_path_display(path: &Path) -> String {
    if let Ok(canonical) = path.canonicalize() {
        return canonical.display().to_string();
    }

    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    };
    normalize_path(&absolute).display().to_string()
}

fn normalize_path(path: &Path) -> PathBuf {
    let mut components = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(components.last(), Some(Component::Normal(_))) {
                    components.pop();
                }
            }
            _ => components.push(component),
        }
    }
    components.iter().collect()
}

/// The name shown for a path in a rendered tree: its final component, or the whole
/// path when it has none (e.g. `/`).
pub fn entry_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

pub trait PathExt {
    fn best_effort_path_display(&self) -> String;
    fn entry_name(&self) -> String;
}

impl PathExt for Path {
    fn best_effort_path_display(&self) -> String {
        best_effort_path_display(self)
    }

    fn entry_name(&self) -> String {
        entry_name(self)
    }
}

impl PathExt for PathBuf {
    fn best_effort_path_display(&self) -> String {
        best_effort_path_display(self)
    }

    fn entry_name(&self) -> String {
        entry_name(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tempfile::TempDir;

    #[rstest]
    #[case("/a/b/./c", "/a/b/c")]
    #[case("/a/b/../c", "/a/c")]
    #[case("/../a", "/a")]
    #[case("/a/b/c/../../..", "/")]
    fn test_normalize_path(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize_path(Path::new(input)), PathBuf::from(expected));
    }

    #[test]
    fn test_best_effort_display_of_existing_dir_is_canonical() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let dotted = temp_dir.path().join(".");

        let expected = temp_dir
            .path()
            .canonicalize()
            .expect("Failed to canonicalize temp directory");
        assert_eq!(
            dotted.best_effort_path_display(),
            expected.display().to_string()
        );
    }

    #[test]
    fn test_best_effort_display_of_missing_path_is_normalized() {
        let display = Path::new("/this/does/../not/exist").best_effort_path_display();
        assert_eq!(display, "/this/not/exist");
    }

    #[rstest]
    #[case("/a/b/c", "c")]
    #[case("relative/name.txt", "name.txt")]
    #[case("/", "/")]
    fn test_entry_name(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(Path::new(input).entry_name(), expected);
    }
}
