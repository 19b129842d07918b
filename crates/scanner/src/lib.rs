//! Collects utility class names from the pages of a site.

mod extract;

use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use log::{debug, warn};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub use extract::{SourceKind, extract_classes, extract_classes_from};

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("no page patterns given")]
    NoPatterns,
    #[error("path not found: {}", .0.display())]
    Missing(PathBuf),
    #[error("invalid glob pattern `{pattern}`: {source}")]
    Glob {
        pattern: String,
        #[source]
        source: globset::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    /// Directory walked for glob scans; patterns match paths relative to it.
    pub base_path: PathBuf,
    pub respect_gitignore: bool,
    pub include_node_modules: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            base_path: PathBuf::from("."),
            respect_gitignore: true,
            include_node_modules: false,
        }
    }
}

/// Class names found in one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub path: PathBuf,
    pub classes: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResult {
    pub pages: Vec<Page>,
}

impl ScanResult {
    pub fn files_scanned(&self) -> usize {
        self.pages.len()
    }

    /// Distinct class names across every page, in first-seen order.
    pub fn classes(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.pages
            .iter()
            .flat_map(|page| page.classes.iter().map(String::as_str))
            .filter(|class_name| seen.insert(*class_name))
            .collect()
    }
}

/// A compiled list of glob patterns.
#[derive(Debug, Clone)]
pub struct PatternSet {
    set: GlobSet,
    len: usize,
}

impl PatternSet {
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self, ScanError> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let pattern = pattern.as_ref();
            let glob = Glob::new(pattern).map_err(|source| ScanError::Glob {
                pattern: pattern.to_string(),
                source,
            })?;
            builder.add(glob);
        }
        let set = builder.build().map_err(|source| ScanError::Glob {
            pattern: String::new(),
            source,
        })?;
        Ok(Self {
            set,
            len: patterns.len(),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Matches `path` as given and relative to `base`.
    pub fn matches(&self, path: &Path, base: &Path) -> bool {
        let relative = path.strip_prefix(base).unwrap_or(path);
        self.set.is_match(relative) || self.set.is_match(path)
    }
}

/// Scans files and directories. Directories are walked recursively.
pub fn scan(paths: &[PathBuf]) -> Result<ScanResult, ScanError> {
    let options = ScanOptions::default();
    let mut files = Vec::new();
    for path in paths {
        if !path.exists() {
            return Err(ScanError::Missing(path.clone()));
        }
        if path.is_dir() {
            files.extend(walk(path, &options, |_| true));
        } else {
            files.push(path.clone());
        }
    }
    Ok(scan_files(files))
}

pub fn scan_globs<S: AsRef<str>>(patterns: &[S], ignore: &[S]) -> Result<ScanResult, ScanError> {
    scan_globs_with_options(patterns, ignore, &ScanOptions::default())
}

pub fn scan_globs_with_options<S: AsRef<str>>(
    patterns: &[S],
    ignore: &[S],
    options: &ScanOptions,
) -> Result<ScanResult, ScanError> {
    Ok(scan_files(collect_paths(patterns, ignore, options)?))
}

/// Files under `options.base_path` matching `patterns` and none of
/// `ignore`, in walk order.
pub fn collect_paths<S: AsRef<str>>(
    patterns: &[S],
    ignore: &[S],
    options: &ScanOptions,
) -> Result<Vec<PathBuf>, ScanError> {
    if patterns.is_empty() {
        return Err(ScanError::NoPatterns);
    }
    let include = PatternSet::new(patterns)?;
    let exclude = PatternSet::new(ignore)?;
    let base = options.base_path.as_path();

    Ok(walk(base, options, |path| {
        include.matches(path, base) && !exclude.matches(path, base)
    }))
}

fn walk(root: &Path, options: &ScanOptions, keep: impl Fn(&Path) -> bool) -> Vec<PathBuf> {
    let mut builder = WalkBuilder::new(root);
    builder
        .hidden(false)
        .git_ignore(options.respect_gitignore)
        .git_global(options.respect_gitignore)
        .git_exclude(options.respect_gitignore);

    let mut seen = HashSet::new();
    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!("skipping unreadable entry: {}", err);
                continue;
            }
        };
        if !entry.file_type().is_some_and(|kind| kind.is_file()) {
            continue;
        }
        let path = entry.path();
        if is_skipped(path, options) || !keep(path) {
            continue;
        }
        if seen.insert(path.to_path_buf()) {
            files.push(path.to_path_buf());
        }
    }
    files
}

fn scan_files(files: Vec<PathBuf>) -> ScanResult {
    let mut pages = Vec::with_capacity(files.len());
    for path in files {
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) => {
                debug!("skipping {}: {}", path.display(), err);
                continue;
            }
        };
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        let classes = extract_classes_from(&text, SourceKind::from_extension(ext.as_deref()));
        debug!("{}: {} classes", path.display(), classes.len());
        pages.push(Page { path, classes });
    }
    ScanResult { pages }
}

fn is_skipped(path: &Path, options: &ScanOptions) -> bool {
    if !options.include_node_modules
        && path
            .components()
            .any(|component| component.as_os_str() == "node_modules")
    {
        return true;
    }

    let file_name = path.file_name().and_then(|name| name.to_str()).unwrap_or("");
    if is_lock_file(file_name) {
        return true;
    }

    path.extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .is_some_and(|ext| is_stylesheet(&ext) || is_binary(&ext))
}

fn is_stylesheet(ext: &str) -> bool {
    matches!(ext, "css" | "scss" | "sass" | "less")
}

fn is_binary(ext: &str) -> bool {
    matches!(
        ext,
        "png"
            | "jpg"
            | "jpeg"
            | "gif"
            | "webp"
            | "avif"
            | "ico"
            | "svgz"
            | "mp4"
            | "webm"
            | "mp3"
            | "zip"
            | "gz"
            | "pdf"
            | "woff"
            | "woff2"
            | "ttf"
            | "otf"
    )
}

fn is_lock_file(file_name: &str) -> bool {
    matches!(
        file_name,
        "package-lock.json" | "pnpm-lock.yaml" | "yarn.lock" | "bun.lockb" | "Cargo.lock"
    )
}

#[cfg(test)]
mod tests {
    use super::{PatternSet, ScanError, ScanOptions, collect_paths, scan, scan_globs_with_options};
    use std::fs;
    use std::path::{Path, PathBuf};

    fn options(base: &Path) -> ScanOptions {
        ScanOptions {
            base_path: base.to_path_buf(),
            ..ScanOptions::default()
        }
    }

    #[test]
    fn scans_matching_pages() {
        let dir = tempfile::tempdir().expect("temp dir");
        fs::create_dir_all(dir.path().join("site/blog")).expect("create dirs");
        fs::write(
            dir.path().join("site/index.html"),
            r#"<main class="container p-4"></main>"#,
        )
        .expect("write index");
        fs::write(
            dir.path().join("site/blog/post.html"),
            r#"<p class="p-4 text-center"></p>"#,
        )
        .expect("write post");
        fs::write(dir.path().join("site/notes.txt"), r#"class="m-2""#).expect("write notes");

        let result = scan_globs_with_options(
            &["site/**/*.html"],
            &[],
            &options(dir.path()),
        )
        .expect("scan succeeds");

        assert_eq!(result.files_scanned(), 2);
        let mut classes = result.classes();
        classes.sort_unstable();
        assert_eq!(classes, ["container", "p-4", "text-center"]);
    }

    #[test]
    fn ignores_patterns_stylesheets_and_node_modules() {
        let dir = tempfile::tempdir().expect("temp dir");
        fs::create_dir_all(dir.path().join("node_modules/pkg")).expect("create dirs");
        fs::create_dir_all(dir.path().join("drafts")).expect("create dirs");
        fs::write(dir.path().join("node_modules/pkg/a.html"), "").expect("write");
        fs::write(dir.path().join("drafts/b.html"), "").expect("write");
        fs::write(dir.path().join("c.html"), "").expect("write");
        fs::write(dir.path().join("d.css"), "").expect("write");

        let paths = collect_paths(&["**/*"], &["drafts/**"], &options(dir.path()))
            .expect("collect succeeds");
        let names: Vec<_> = paths
            .iter()
            .filter_map(|path| path.file_name()?.to_str())
            .collect();
        assert_eq!(names, ["c.html"]);
    }

    #[test]
    fn requires_patterns() {
        let empty: [&str; 0] = [];
        let err = collect_paths(&empty, &empty, &ScanOptions::default()).unwrap_err();
        assert!(matches!(err, ScanError::NoPatterns));
    }

    #[test]
    fn rejects_invalid_globs() {
        let err = PatternSet::new(&["site/[.html"]).unwrap_err();
        assert!(matches!(err, ScanError::Glob { ref pattern, .. } if pattern == "site/[.html"));
        assert!(err.to_string().starts_with("invalid glob pattern `site/[.html`"));
    }

    #[test]
    fn matches_relative_to_base() {
        let set = PatternSet::new(&["pages/*.html"]).expect("valid glob");
        let base = Path::new("/srv/site");
        assert!(set.matches(Path::new("/srv/site/pages/a.html"), base));
        assert!(!set.matches(Path::new("/srv/site/other/a.html"), base));
        assert!(PatternSet::new::<&str>(&[]).expect("empty set").is_empty());
    }

    #[test]
    fn scan_reports_missing_paths() {
        let err = scan(&[PathBuf::from("/definitely/not/here")]).unwrap_err();
        assert!(matches!(err, ScanError::Missing(_)));
    }

    #[test]
    fn scan_walks_directories() {
        let dir = tempfile::tempdir().expect("temp dir");
        fs::write(dir.path().join("a.html"), r#"<b class="block"></b>"#).expect("write");
        fs::write(dir.path().join("b.jsx"), r#"const c = "hidden";"#).expect("write");

        let result = scan(&[dir.path().to_path_buf()]).expect("scan succeeds");
        let mut classes = result.classes();
        classes.sort_unstable();
        assert_eq!(classes, ["block", "hidden"]);
    }
}
