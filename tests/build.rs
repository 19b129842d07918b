use std::fs;

use clap::Parser;
use tailor::{Cli, CliError, run};

#[test]
fn builds_critical_and_external_sheets_from_config() {
    let dir = tempfile::tempdir().expect("temp dir");
    let site = dir.path().join("site");
    fs::create_dir_all(site.join("blog")).expect("create dirs");
    fs::write(
        site.join("index.html"),
        r#"<main class="container p-4 sm:text-center"></main>"#,
    )
    .expect("write index");
    fs::write(
        site.join("blog/post.html"),
        r#"<article class="p-4 hover:underline not-a-utility"></article>"#,
    )
    .expect("write post");
    let config = dir.path().join("tailor.toml");
    fs::write(
        &config,
        r#"
[build]
pages = ["site/**/*.html"]
critical = ["site/index.html"]
out_dir = "dist"
minify = true
"#,
    )
    .expect("write config");

    let cli = Cli::try_parse_from([
        "tailor",
        "build",
        "--config",
        config.to_str().expect("utf-8 path"),
    ])
    .expect("valid arguments");
    run(cli).expect("build succeeds");

    let critical = fs::read_to_string(dir.path().join("dist/critical.css")).expect("critical");
    assert_eq!(
        critical,
        concat!(
            ".p-4 {padding: 1rem;}",
            ".container {width: 100%;}",
            "@media (min-width: 640px) {",
            ".sm\\:text-center {text-align: center;}",
            ".container {max-width: 640px;}",
            "}",
        )
    );
    let external = fs::read_to_string(dir.path().join("dist/external.css")).expect("external");
    assert_eq!(
        external,
        ".hover\\:underline:hover {text-decoration: underline;}"
    );
}

#[test]
fn rebuilds_do_not_scan_written_sheets() {
    let dir = tempfile::tempdir().expect("temp dir");
    fs::write(dir.path().join("index.html"), r#"<p class="block"></p>"#).expect("write");
    let config = dir.path().join("tailor.toml");
    fs::write(&config, "[build]\npages = [\"**/*\"]\n").expect("write config");

    for _ in 0..2 {
        let cli = Cli::try_parse_from([
            "tailor",
            "build",
            "--config",
            config.to_str().expect("utf-8 path"),
        ])
        .expect("valid arguments");
        run(cli).expect("build succeeds");
    }

    let external = fs::read_to_string(dir.path().join("dist/external.css")).expect("external");
    assert_eq!(external, ".block {\n  display: block;\n}\n");
    assert_eq!(
        fs::read_to_string(dir.path().join("dist/critical.css")).expect("critical"),
        ""
    );
}

#[test]
fn missing_config_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("nope.toml");
    let cli = Cli::try_parse_from([
        "tailor",
        "build",
        "--config",
        missing.to_str().expect("utf-8 path"),
    ])
    .expect("valid arguments");
    let err = run(cli).unwrap_err();
    assert!(matches!(err, CliError::Config(_)));
    assert!(err.to_string().contains("nope.toml"));
}
