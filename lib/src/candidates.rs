//! Candidate image discovery
//!
//! Directory scans and glob expansion, both non-recursive, filtered to the
//! recognized image extensions and sorted by path string.

use glob::Pattern;
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// Recognized image extensions, lowercase, without the dot
pub const IMAGE_EXTENSIONS: [&str; 7] = ["png", "jpg", "jpeg", "gif", "bmp", "tif", "tiff"];

/// Check whether a path carries a recognized image extension (case-insensitive)
///
/// The extension is whatever follows the last `.` of the file name, so a file
/// literally named `.png` counts.
pub fn is_image_path(path: &Path) -> bool {
    let Some(name) = path.file_name() else {
        return false;
    };
    let name = name.to_string_lossy();
    match name.rsplit_once('.') {
        Some((_, ext)) => IMAGE_EXTENSIONS
            .iter()
            .any(|known| ext.eq_ignore_ascii_case(known)),
        None => false,
    }
}

/// True if the path exists and is not a directory
pub fn is_file(path: &Path) -> bool {
    fs::metadata(path).is_ok_and(|meta| !meta.is_dir())
}

/// True if the path exists and is a directory
pub fn is_dir(path: &Path) -> bool {
    fs::metadata(path).is_ok_and(|meta| meta.is_dir())
}

/// True if the path is an existing non-directory file with an image extension
pub fn is_image_file(path: &Path) -> bool {
    is_image_path(path) && is_file(path)
}

fn sort_paths(paths: &mut [PathBuf]) {
    paths.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
}

/// Join a scanned entry name onto its directory, leaving `.` out of the result
fn join_entry(dir: &Path, name: &std::ffi::OsStr) -> PathBuf {
    if dir == Path::new(".") {
        PathBuf::from(name)
    } else {
        dir.join(name)
    }
}

/// List the images directly inside `dir`
///
/// # Returns
/// Sorted candidate paths. An unreadable directory yields an empty list.
pub fn images_in_dir(dir: &Path) -> Vec<PathBuf> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("cannot read directory {}: {}", dir.display(), e);
            return Vec::new();
        }
    };

    let mut out: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            // Follow symlinks so a link to a directory is still skipped
            !is_dir(&entry.path())
        })
        .map(|entry| join_entry(dir, &entry.file_name()))
        .filter(|path| is_image_path(path))
        .collect();

    sort_paths(&mut out);
    debug!("found {} image(s) in {}", out.len(), dir.display());
    out
}

/// Keep only the paths whose base name matches `pattern`
///
/// An invalid pattern matches nothing.
pub fn filter_by_glob(paths: Vec<PathBuf>, pattern: &str) -> Vec<PathBuf> {
    let pattern = match Pattern::new(pattern) {
        Ok(pattern) => pattern,
        Err(e) => {
            warn!("invalid glob {:?}: {}", pattern, e);
            return Vec::new();
        }
    };

    paths
        .into_iter()
        .filter(|path| {
            path.file_name()
                .is_some_and(|name| pattern.matches(&name.to_string_lossy()))
        })
        .collect()
}

/// Keep existing image files, sorted
pub fn filter_images(paths: impl IntoIterator<Item = PathBuf>) -> Vec<PathBuf> {
    let mut out: Vec<PathBuf> = paths
        .into_iter()
        .filter(|path| is_image_file(path))
        .collect();
    sort_paths(&mut out);
    out
}

/// Turn a trimmed input line into a path
///
/// On unix any bytes form a valid path. Elsewhere a line that is not UTF-8
/// names nothing.
pub fn path_from_line(line: &[u8]) -> Option<PathBuf> {
    if line.is_empty() {
        return None;
    }

    #[cfg(unix)]
    {
        use std::os::unix::ffi::OsStrExt;
        Some(PathBuf::from(std::ffi::OsStr::from_bytes(line)))
    }

    #[cfg(not(unix))]
    {
        std::str::from_utf8(line).ok().map(PathBuf::from)
    }
}

/// Collapse every run of `*` to a single `*`
///
/// `**` would otherwise descend into subdirectories; here it matches within
/// one path component like `*` does.
fn flatten_recursive(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    for c in pattern.chars() {
        if c == '*' && out.ends_with('*') {
            continue;
        }
        out.push(c);
    }
    out
}

/// Expand a glob pattern relative to `base` and keep the images it names
///
/// Relative patterns are anchored at `base`; matches under `.` are returned
/// without a `./` prefix. Each component matches a single directory level,
/// `**` included. An invalid pattern matches nothing.
pub fn expand_glob(base: &Path, pattern: &str) -> Vec<PathBuf> {
    let pattern = &flatten_recursive(pattern);
    let anchored = if base == Path::new(".") || Path::new(pattern).is_absolute() {
        pattern.to_string()
    } else {
        let escaped = Pattern::escape(&base.to_string_lossy());
        format!("{}/{}", escaped.trim_end_matches('/'), pattern)
    };

    let matches = match glob::glob(&anchored) {
        Ok(paths) => paths.filter_map(|entry| entry.ok()).collect::<Vec<_>>(),
        Err(e) => {
            warn!("invalid glob {:?}: {}", pattern, e);
            Vec::new()
        }
    };
    debug!("glob {:?} matched {} path(s)", anchored, matches.len());

    filter_images(matches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, b"x").unwrap();
        path
    }

    #[test]
    fn test_is_image_path_case_insensitive() {
        for name in ["a.png", "b.JPG", "c.Jpeg", "d.gif", "e.BMP", "f.tif", "g.TIFF"] {
            assert!(is_image_path(Path::new(name)), "{name}");
        }
    }

    #[test]
    fn test_is_image_path_rejects_others() {
        for name in ["a.txt", "b.webp", "png", "c.png.bak", "noext", "dir/"] {
            assert!(!is_image_path(Path::new(name)), "{name}");
        }
    }

    #[test]
    fn test_is_image_path_dotfile() {
        assert!(is_image_path(Path::new("photos/.png")));
    }

    #[test]
    fn test_images_in_dir_sorted_and_filtered() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "b.png");
        touch(tmp.path(), "a.JPG");
        touch(tmp.path(), "notes.txt");
        touch(tmp.path(), "c.tiff");
        fs::create_dir(tmp.path().join("d.png")).unwrap();

        let found = images_in_dir(tmp.path());
        let names: Vec<_> = found
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["a.JPG", "b.png", "c.tiff"]);
        assert!(found.iter().all(|p| p.starts_with(tmp.path())));
    }

    #[test]
    fn test_images_in_dir_is_not_recursive() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("nested")).unwrap();
        touch(&tmp.path().join("nested"), "deep.png");
        assert!(images_in_dir(tmp.path()).is_empty());
    }

    #[test]
    fn test_images_in_missing_dir_is_empty() {
        let tmp = TempDir::new().unwrap();
        assert!(images_in_dir(&tmp.path().join("missing")).is_empty());
    }

    #[test]
    fn test_filter_by_glob_uses_base_name() {
        let paths = vec![
            PathBuf::from("shots/cat.png"),
            PathBuf::from("shots/dog.png"),
            PathBuf::from("shots/cat.jpg"),
        ];
        let kept = filter_by_glob(paths.clone(), "cat.*");
        assert_eq!(kept, [PathBuf::from("shots/cat.png"), PathBuf::from("shots/cat.jpg")]);

        // The directory part is never matched
        assert!(filter_by_glob(paths, "shots/*").is_empty());
    }

    #[test]
    fn test_filter_by_invalid_glob_is_empty() {
        assert!(filter_by_glob(vec![PathBuf::from("a.png")], "[").is_empty());
    }

    #[test]
    fn test_flatten_recursive() {
        assert_eq!(flatten_recursive("**/*.png"), "*/*.png");
        assert_eq!(flatten_recursive("a***b"), "a*b");
        assert_eq!(flatten_recursive("[ab].png"), "[ab].png");
    }

    #[test]
    fn test_expand_glob_double_star_stays_one_level() {
        let tmp = TempDir::new().unwrap();
        for dir in ["a/b/c", "top"] {
            fs::create_dir_all(tmp.path().join(dir)).unwrap();
        }
        touch(&tmp.path().join("a/b/c"), "deep.png");

        assert!(expand_glob(tmp.path(), "**/*.png").is_empty());
        assert!(expand_glob(tmp.path(), "**.png").is_empty());

        touch(&tmp.path().join("top"), "near.png");
        assert_eq!(
            expand_glob(tmp.path(), "**/*.png"),
            [tmp.path().join("top/near.png")]
        );
    }

    #[test]
    fn test_path_from_line() {
        assert_eq!(path_from_line(b""), None);
        assert_eq!(path_from_line(b"cat.png"), Some(PathBuf::from("cat.png")));
    }

    #[cfg(unix)]
    #[test]
    fn test_path_from_line_keeps_raw_bytes() {
        use std::os::unix::ffi::OsStrExt;

        let path = path_from_line(b"bad\xffname.png").unwrap();
        assert_eq!(path.as_os_str().as_bytes(), b"bad\xffname.png");
    }

    #[test]
    fn test_expand_glob_in_base() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "z.png");
        touch(tmp.path(), "a.png");
        touch(tmp.path(), "a.txt");
        fs::create_dir(tmp.path().join("folder.png")).unwrap();

        let found = expand_glob(tmp.path(), "*");
        assert_eq!(found, [tmp.path().join("a.png"), tmp.path().join("z.png")]);

        assert!(expand_glob(tmp.path(), "*.gif").is_empty());
        assert!(expand_glob(tmp.path(), "[").is_empty());
    }
}
