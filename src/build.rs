//! The build pipeline: scan pages, compile both partitions, write sheets.

use log::{debug, info};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use tailor_core::{Compiler, Partition};
use tailor_scanner::{PatternSet, ScanOptions, ScanResult};

use crate::config::BuildConfig;
use crate::{BuildArgs, CliError};

pub const CRITICAL_FILE: &str = "critical.css";
pub const EXTERNAL_FILE: &str = "external.css";

/// Build inputs after command-line flags are applied over the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSettings {
    /// Directory that page globs and a relative `out_dir` are resolved
    /// against.
    pub base_path: PathBuf,
    pub pages: Vec<String>,
    pub critical: Vec<String>,
    pub ignore: Vec<String>,
    pub out_dir: PathBuf,
    pub minify: bool,
}

impl BuildSettings {
    pub fn new(base_path: impl Into<PathBuf>, config: &BuildConfig, args: &BuildArgs) -> Self {
        Self {
            base_path: base_path.into(),
            pages: pick(&args.pages, &config.pages),
            critical: pick(&args.critical, &config.critical),
            ignore: pick(&args.ignore, &config.ignore),
            out_dir: args.out_dir.clone().unwrap_or_else(|| config.out_dir.clone()),
            minify: args.minify || config.minify,
        }
    }

    pub fn output_dir(&self) -> PathBuf {
        self.base_path.join(&self.out_dir)
    }

    fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            base_path: self.base_path.clone(),
            ..ScanOptions::default()
        }
    }

    /// Ignore patterns plus the output directory, so written sheets are
    /// never scanned.
    fn effective_ignore(&self) -> Vec<String> {
        let mut ignore = self.ignore.clone();
        if self.out_dir.is_relative() {
            ignore.push(format!("{}/**", self.out_dir.display()));
        }
        ignore
    }
}

fn pick(flag: &[String], configured: &[String]) -> Vec<String> {
    if flag.is_empty() {
        configured.to_vec()
    } else {
        flag.to_vec()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub files_scanned: usize,
    pub critical_classes: usize,
    pub external_classes: usize,
    pub critical_path: PathBuf,
    pub external_path: PathBuf,
}

pub fn run_build(settings: &BuildSettings) -> Result<BuildReport, CliError> {
    let scan = tailor_scanner::scan_globs_with_options(
        &settings.pages,
        &settings.effective_ignore(),
        &settings.scan_options(),
    )?;
    let critical = PatternSet::new(&settings.critical)?;
    let (compiler, critical_classes, external_classes) =
        compile(&scan, &critical, &settings.base_path, settings.minify);

    let out_dir = settings.output_dir();
    fs::create_dir_all(&out_dir).map_err(|source| CliError::Write {
        path: out_dir.clone(),
        source,
    })?;
    let critical_path = out_dir.join(CRITICAL_FILE);
    let external_path = out_dir.join(EXTERNAL_FILE);
    write(&critical_path, &compiler.get_stylesheet(Partition::Critical))?;
    write(&external_path, &compiler.get_stylesheet(Partition::External))?;

    let report = BuildReport {
        files_scanned: scan.files_scanned(),
        critical_classes,
        external_classes,
        critical_path,
        external_path,
    };
    info!(
        "scanned {} files: {} critical and {} external classes written to {}",
        report.files_scanned,
        report.critical_classes,
        report.external_classes,
        out_dir.display()
    );
    Ok(report)
}

/// Classes of critical pages go to the critical partition; every other
/// class goes to the external one. Returns the compiler and the number of
/// classes in each partition.
pub fn compile(
    scan: &ScanResult,
    critical: &PatternSet,
    base: &Path,
    minify: bool,
) -> (Compiler, usize, usize) {
    let mut critical_classes: Vec<&str> = Vec::new();
    let mut seen = HashSet::new();
    for page in &scan.pages {
        if critical.is_empty() || !critical.matches(&page.path, base) {
            continue;
        }
        debug!("critical page {}", page.path.display());
        for class_name in &page.classes {
            if seen.insert(class_name.as_str()) {
                critical_classes.push(class_name);
            }
        }
    }
    let external_classes: Vec<&str> = scan
        .classes()
        .into_iter()
        .filter(|class_name| !seen.contains(class_name))
        .collect();

    let mut compiler = Compiler::new(minify);
    compiler.add_classes(&critical_classes, Partition::Critical);
    compiler.add_classes(&external_classes, Partition::External);
    (compiler, critical_classes.len(), external_classes.len())
}

fn write(path: &Path, css: &str) -> Result<(), CliError> {
    fs::write(path, css).map_err(|source| CliError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("wrote {} ({} bytes)", path.display(), css.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{BuildSettings, compile};
    use crate::BuildArgs;
    use crate::config::BuildConfig;
    use std::path::{Path, PathBuf};
    use tailor_core::Partition;
    use tailor_scanner::{Page, PatternSet, ScanResult};

    fn page(path: &str, classes: &[&str]) -> Page {
        Page {
            path: PathBuf::from(path),
            classes: classes.iter().map(|class| class.to_string()).collect(),
        }
    }

    #[test]
    fn flags_override_config() {
        let config = BuildConfig {
            pages: vec!["site/**/*.html".to_string()],
            critical: vec!["site/index.html".to_string()],
            ..BuildConfig::default()
        };
        let args = BuildArgs {
            pages: vec!["docs/*.html".to_string()],
            out_dir: Some(PathBuf::from("out")),
            minify: true,
            ..BuildArgs::default()
        };
        let settings = BuildSettings::new(".", &config, &args);
        assert_eq!(settings.pages, ["docs/*.html"]);
        assert_eq!(settings.critical, ["site/index.html"]);
        assert_eq!(settings.out_dir, PathBuf::from("out"));
        assert!(settings.minify);
        assert_eq!(settings.effective_ignore(), ["out/**"]);
    }

    #[test]
    fn splits_classes_between_partitions() {
        let scan = ScanResult {
            pages: vec![
                page("site/index.html", &["p-4", "block"]),
                page("site/about.html", &["block", "m-2"]),
            ],
        };
        let critical = PatternSet::new(&["site/index.html"]).expect("valid glob");
        let (compiler, critical_count, external_count) =
            compile(&scan, &critical, Path::new("."), true);

        assert_eq!((critical_count, external_count), (2, 1));
        assert_eq!(
            compiler.get_stylesheet(Partition::Critical),
            ".p-4 {padding: 1rem;}.block {display: block;}"
        );
        assert_eq!(
            compiler.get_stylesheet(Partition::External),
            ".m-2 {margin: 0.5rem;}"
        );
    }

    #[test]
    fn everything_is_external_without_critical_pages() {
        let scan = ScanResult {
            pages: vec![page("index.html", &["hidden"])],
        };
        let empty: [&str; 0] = [];
        let critical = PatternSet::new(&empty).expect("empty set");
        let (compiler, critical_count, external_count) =
            compile(&scan, &critical, Path::new("."), true);
        assert_eq!((critical_count, external_count), (0, 1));
        assert_eq!(compiler.get_stylesheet(true), "");
        assert_eq!(
            compiler.get_stylesheet(false),
            ".hidden {display: none;}"
        );
    }
}
