use log::{error, info, warn};
use notify::{EventKind, RecursiveMode, Watcher};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{RecvTimeoutError, channel};
use std::time::Duration;

use crate::CliError;
use crate::build::{self, BuildSettings};

const DEBOUNCE: Duration = Duration::from_millis(200);

/// Builds once, then rebuilds whenever a watched file changes and the
/// tree has been quiet for the debounce interval.
pub fn run_watch(settings: &BuildSettings) -> Result<(), CliError> {
    build::run_build(settings)?;

    let (tx, rx) = channel();
    let mut watcher = notify::recommended_watcher(tx).map_err(|source| CliError::Watch {
        path: settings.base_path.clone(),
        source,
    })?;
    for root in watch_roots(&settings.pages, &settings.base_path) {
        watcher
            .watch(&root, RecursiveMode::Recursive)
            .map_err(|source| CliError::Watch {
                path: root.clone(),
                source,
            })?;
    }
    let out_dir = canonical(&settings.output_dir());
    info!("watching for changes (press Ctrl+C to stop)");

    let mut pending = false;
    loop {
        match rx.recv_timeout(DEBOUNCE) {
            Ok(Ok(event)) => {
                if is_source_change(&event, &out_dir) {
                    pending = true;
                }
            }
            Ok(Err(err)) => warn!("watch error: {}", err),
            Err(RecvTimeoutError::Timeout) => {
                if pending {
                    pending = false;
                    info!("change detected, rebuilding");
                    if let Err(err) = build::run_build(settings) {
                        error!("build failed: {}", err);
                    }
                }
            }
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    Ok(())
}

fn is_source_change(event: &notify::Event, out_dir: &Path) -> bool {
    if matches!(event.kind, EventKind::Access(_)) || event.paths.is_empty() {
        return false;
    }
    !event
        .paths
        .iter()
        .all(|path| canonical(path).starts_with(out_dir))
}

fn canonical(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

/// The directories to watch for `patterns`: the literal prefix of each
/// glob, joined to `base` and de-duplicated.
fn watch_roots(patterns: &[String], base: &Path) -> Vec<PathBuf> {
    let mut seen = HashSet::new();
    let mut roots = Vec::new();
    for pattern in patterns {
        let root = canonical(&base.join(glob_root(pattern)));
        if seen.insert(root.clone()) {
            roots.push(root);
        }
    }
    roots
}

fn glob_root(pattern: &str) -> PathBuf {
    let literal = match pattern.find(['*', '?', '[', '{']) {
        Some(index) => &pattern[..index],
        None => {
            let path = Path::new(pattern);
            return match path.parent() {
                Some(parent) if path.extension().is_some() => parent.to_path_buf(),
                _ => path.to_path_buf(),
            };
        }
    };
    match literal.rfind('/') {
        Some(index) => PathBuf::from(&literal[..index]),
        None => PathBuf::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::{glob_root, is_source_change, watch_roots};
    use notify::event::{AccessKind, CreateKind, EventKind, ModifyKind};
    use notify::Event;
    use std::path::{Path, PathBuf};

    #[test]
    fn finds_literal_prefix_of_globs() {
        assert_eq!(glob_root("site/**/*.html"), PathBuf::from("site"));
        assert_eq!(glob_root("site/blog/*.html"), PathBuf::from("site/blog"));
        assert_eq!(glob_root("**/*.html"), PathBuf::new());
        assert_eq!(glob_root("site/index.html"), PathBuf::from("site"));
        assert_eq!(glob_root("site"), PathBuf::from("site"));
    }

    #[test]
    fn deduplicates_roots() {
        let dir = tempfile::tempdir().expect("temp dir");
        let roots = watch_roots(
            &["*.html".to_string(), "**/*.md".to_string()],
            dir.path(),
        );
        assert_eq!(roots.len(), 1);
    }

    #[test]
    fn ignores_output_and_access_events() {
        let out = Path::new("/srv/site/dist");
        let written = Event::new(EventKind::Create(CreateKind::File))
            .add_path(PathBuf::from("/srv/site/dist/critical.css"));
        assert!(!is_source_change(&written, out));

        let edited = Event::new(EventKind::Modify(ModifyKind::Any))
            .add_path(PathBuf::from("/srv/site/index.html"));
        assert!(is_source_change(&edited, out));

        let read = Event::new(EventKind::Access(AccessKind::Any))
            .add_path(PathBuf::from("/srv/site/index.html"));
        assert!(!is_source_change(&read, out));
    }
}
