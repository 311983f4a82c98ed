//! Deriving enum member names from the files in an asset folder.

use camino::{Utf8Path, Utf8PathBuf};
use globset::{Glob, GlobMatcher};
use thiserror::Error;
use tracing::warn;
use walkdir::WalkDir;

#[derive(Debug, Error)]
pub enum ListError {
    #[error("{0} is not a directory")]
    NotADirectory(Utf8PathBuf),
    #[error("invalid search pattern {pattern:?}")]
    Pattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },
    #[error("cannot list directory {path}")]
    Io {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot walk directory {path}")]
    Walk {
        path: Utf8PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

/// Lists the base names of the files directly inside `dir` whose names match `pattern`.
///
/// `pattern` is a shell-style glob like `*.prefab`, applied to file names only. Each match
/// contributes its file name with the final extension stripped, so `cat.prefab` becomes `cat`.
/// Entries that are not regular files are skipped even when their names match.
///
/// The result is sorted by name. Filesystems return directory entries in whatever order they
/// like, and a member list that reshuffles between exports would renumber the positional modes
/// on every run.
pub fn list_members(dir: &Utf8Path, pattern: &str) -> Result<Vec<String>, ListError> {
    if !dir.is_dir() {
        return Err(ListError::NotADirectory(dir.to_owned()));
    }
    let matcher = compile(pattern)?;

    let map_io = |source| ListError::Io {
        path: dir.to_owned(),
        source,
    };
    let mut names = vec![];
    for entry in std::fs::read_dir(dir).map_err(map_io)? {
        let entry = entry.map_err(map_io)?;
        match Utf8PathBuf::from_path_buf(entry.path()) {
            Ok(path) => {
                if path.is_file() {
                    push_base_name(&mut names, &matcher, &path);
                }
            }
            Err(path) => warn!("file name contains invalid UTF-8, skipping: {path:?}"),
        }
    }
    names.sort();
    Ok(names)
}

/// Like [`list_members`], but also walks subdirectories of `dir`.
///
/// The pattern still applies to file names only, so `*.prefab` finds prefabs at any depth. The
/// directory a file came from leaves no trace in the member name; files with equal base names in
/// different subdirectories produce duplicate members, which the collision report will flag.
pub fn list_members_recursive(dir: &Utf8Path, pattern: &str) -> Result<Vec<String>, ListError> {
    if !dir.is_dir() {
        return Err(ListError::NotADirectory(dir.to_owned()));
    }
    let matcher = compile(pattern)?;

    let mut names = vec![];
    for entry in WalkDir::new(dir) {
        let entry = entry.map_err(|source| ListError::Walk {
            path: dir.to_owned(),
            source,
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        match Utf8Path::from_path(entry.path()) {
            Some(path) => push_base_name(&mut names, &matcher, path),
            None => warn!("file name contains invalid UTF-8, skipping: {:?}", entry.path()),
        }
    }
    names.sort();
    Ok(names)
}

fn compile(pattern: &str) -> Result<GlobMatcher, ListError> {
    Ok(Glob::new(pattern)
        .map_err(|source| ListError::Pattern {
            pattern: pattern.to_owned(),
            source,
        })?
        .compile_matcher())
}

fn push_base_name(names: &mut Vec<String>, matcher: &GlobMatcher, path: &Utf8Path) {
    let Some(file_name) = path.file_name() else {
        return;
    };
    if matcher.is_match(file_name) {
        if let Some(stem) = path.file_stem() {
            names.push(stem.to_owned());
        }
    }
}

#[cfg(test)]
mod tests {
    use camino::Utf8Path;
    use tempfile::TempDir;

    use super::{list_members, list_members_recursive, ListError};

    fn touch(dir: &Utf8Path, name: &str) {
        std::fs::write(dir.join(name), b"").unwrap();
    }

    fn utf8(dir: &TempDir) -> &Utf8Path {
        Utf8Path::from_path(dir.path()).unwrap()
    }

    #[test]
    fn matches_lose_their_extension_and_everything_else_is_ignored() {
        let temp = TempDir::new().unwrap();
        let dir = utf8(&temp);
        touch(dir, "cat.prefab");
        touch(dir, "dog.prefab");
        touch(dir, "notes.txt");
        touch(dir, "cat.prefab.meta");

        let members = list_members(dir, "*.prefab").unwrap();
        assert_eq!(members, ["cat", "dog"]);
    }

    #[test]
    fn result_is_sorted_by_name() {
        let temp = TempDir::new().unwrap();
        let dir = utf8(&temp);
        touch(dir, "zebra.prefab");
        touch(dir, "ant.prefab");
        touch(dir, "mole.prefab");

        let members = list_members(dir, "*.prefab").unwrap();
        assert_eq!(members, ["ant", "mole", "zebra"]);
    }

    #[test]
    fn a_directory_with_a_matching_name_is_not_a_member() {
        let temp = TempDir::new().unwrap();
        let dir = utf8(&temp);
        touch(dir, "real.prefab");
        std::fs::create_dir(dir.join("impostor.prefab")).unwrap();

        let members = list_members(dir, "*.prefab").unwrap();
        assert_eq!(members, ["real"]);
    }

    #[test]
    fn only_the_recursive_variant_descends() {
        let temp = TempDir::new().unwrap();
        let dir = utf8(&temp);
        touch(dir, "knight.prefab");
        std::fs::create_dir(dir.join("enemies")).unwrap();
        touch(&dir.join("enemies"), "slime.prefab");

        assert_eq!(list_members(dir, "*.prefab").unwrap(), ["knight"]);
        assert_eq!(
            list_members_recursive(dir, "*.prefab").unwrap(),
            ["knight", "slime"]
        );
    }

    #[test]
    fn a_missing_directory_is_an_error() {
        let temp = TempDir::new().unwrap();
        let missing = utf8(&temp).join("nothing-here");
        assert!(matches!(
            list_members(&missing, "*.prefab"),
            Err(ListError::NotADirectory(_))
        ));
    }

    #[test]
    fn a_broken_pattern_is_an_error() {
        let temp = TempDir::new().unwrap();
        assert!(matches!(
            list_members(utf8(&temp), "*.[prefab"),
            Err(ListError::Pattern { .. })
        ));
    }
}
