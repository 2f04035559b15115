//! End-to-end CLI tests: run the binary against `fixtures/content` and
//! inspect what lands in the output directory.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Setup helpers
// ---------------------------------------------------------------------------

fn fixtures() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures/content")
}

fn run(source: &Path, work: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_studio-folio"))
        .args(args)
        .arg("--source")
        .arg(source)
        .arg("--output")
        .arg(work.join("dist"))
        .arg("--temp-dir")
        .arg(work.join("temp"))
        .output()
        .expect("failed to run studio-folio")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn read(path: PathBuf) -> String {
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("reading {}: {e}", path.display()))
}

// ---------------------------------------------------------------------------
// build
// ---------------------------------------------------------------------------

#[test]
fn build_renders_every_view() {
    let work = TempDir::new().unwrap();
    let output = run(&fixtures(), work.path(), &["build"]);
    assert!(output.status.success(), "build failed: {:?}", output);

    let dist = work.path().join("dist");
    for page in [
        "index.html",
        "photography/events/index.html",
        "photography/interiors/index.html",
        "videography/index.html",
        "videography/brand-films/index.html",
    ] {
        assert!(dist.join(page).is_file(), "missing {page}");
    }
    assert!(!dist.join("reels").exists());
    assert!(dist.join("assets/photography/interiors/kitchen.jpg").is_file());
    assert!(work.path().join("temp/manifest.json").is_file());

    let text = stdout(&output);
    assert!(text.contains("==> Stage 1: Scanning"));
    assert!(text.contains("001 Interiors (2 items)"));
    assert!(text.contains("==> Build complete"));
}

#[test]
fn index_links_categories_and_films_link_out() {
    let work = TempDir::new().unwrap();
    assert!(run(&fixtures(), work.path(), &["build"]).status.success());
    let dist = work.path().join("dist");

    let index = read(dist.join("index.html"));
    assert!(index.contains(r#"href="/photography/interiors/#portfolio""#));
    assert!(index.contains("SBS"));
    assert!(index.contains("<strong>architecture</strong>"));
    assert_eq!(index.matches(r#"<span class="client">Tesla</span>"#).count(), 2);

    let films = read(dist.join("videography/brand-films/index.html"));
    assert!(films.contains(r#"href="https://youtu.be/abc" target="_blank""#));
    assert!(films.contains("Watch Video"));
}

// ---------------------------------------------------------------------------
// scan / generate / check / gen-config
// ---------------------------------------------------------------------------

#[test]
fn scan_then_generate() {
    let work = TempDir::new().unwrap();
    let scan = run(&fixtures(), work.path(), &["scan"]);
    assert!(scan.status.success());

    let manifest = read(work.path().join("temp/manifest.json"));
    assert!(manifest.contains(r#""external_link": "https://youtu.be/abc""#));

    let generate = run(&fixtures(), work.path(), &["generate"]);
    assert!(generate.status.success());
    assert!(stdout(&generate).contains("Generated 5 pages"));
    assert!(work.path().join("dist/index.html").is_file());
}

#[test]
fn check_writes_nothing() {
    let work = TempDir::new().unwrap();
    let output = run(&fixtures(), work.path(), &["check"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("==> Content is valid"));
    assert!(!work.path().join("dist").exists());
    assert!(!work.path().join("temp").exists());
}

#[test]
fn empty_source_builds_sample_site() {
    let source = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    let output = run(source.path(), work.path(), &["build"]);
    assert!(output.status.success());

    let index = read(work.path().join("dist/index.html"));
    assert!(index.contains("images.unsplash.com"));
    assert!(work.path().join("dist/photography/interiors/index.html").is_file());
}

#[test]
fn empty_source_fails_when_configured() {
    let source = TempDir::new().unwrap();
    fs::write(
        source.path().join("config.toml"),
        "[catalog]\non_empty = \"error\"\n",
    )
    .unwrap();
    let work = TempDir::new().unwrap();
    let output = run(source.path(), work.path(), &["build"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("EmptyCatalog"));
}

#[test]
fn gen_config_prints_stock_file() {
    let work = TempDir::new().unwrap();
    let output = run(&fixtures(), work.path(), &["gen-config"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("base_path = \"/\""));
    assert!(text.contains("[portfolio]"));
}
