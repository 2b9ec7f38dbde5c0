// tests/build_behaviour.rs

use std::error::Error;
use std::fs;
use std::path::Path;

use stylepipe::config::ConfigFile;
use stylepipe::pipeline::{compile, CompileSettings, OutputMode, StylePipeline};

type TestResult = Result<(), Box<dyn Error>>;

fn write_source(root: &Path, name: &str, contents: &str) -> TestResult {
    let dir = root.join("scss");
    fs::create_dir_all(&dir)?;
    fs::write(dir.join(name), contents)?;
    Ok(())
}

fn default_pipeline(root: &Path) -> Result<StylePipeline, Box<dyn Error>> {
    let cfg = ConfigFile::default();
    Ok(StylePipeline::from_config(&cfg, root)?)
}

#[tokio::test]
async fn build_writes_one_compressed_output_per_source() -> TestResult {
    let tmp = tempfile::tempdir()?;
    write_source(tmp.path(), "b.scss", "main {\n  margin: 0 auto;\n}\n")?;
    write_source(tmp.path(), "a.scss", "body {\n  color: red;\n}\n")?;

    let pipeline = default_pipeline(tmp.path())?;
    let summary = pipeline.build().await?;

    assert!(summary.is_clean());
    // Source order is stable (sorted by name).
    assert_eq!(
        summary.written,
        vec![tmp.path().join("css/a.css"), tmp.path().join("css/b.css")]
    );

    let a = fs::read_to_string(tmp.path().join("css/a.css"))?;
    assert!(a.contains("body{color:red}"), "not compressed: {a:?}");

    Ok(())
}

#[tokio::test]
async fn invalid_source_is_skipped_without_aborting_the_run() -> TestResult {
    let tmp = tempfile::tempdir()?;
    write_source(tmp.path(), "a.scss", "body {\n  color: red;\n}\n")?;
    // Imports a partial that does not exist.
    write_source(tmp.path(), "b.scss", "@use \"missing\";\n")?;

    let pipeline = default_pipeline(tmp.path())?;
    let summary = pipeline.build().await?;

    assert_eq!(summary.written, vec![tmp.path().join("css/a.css")]);
    assert_eq!(summary.failed, vec![tmp.path().join("scss/b.scss")]);
    assert!(tmp.path().join("css/a.css").exists());
    assert!(!tmp.path().join("css/b.css").exists());

    Ok(())
}

#[tokio::test]
async fn build_is_byte_idempotent_over_unchanged_sources() -> TestResult {
    let tmp = tempfile::tempdir()?;
    write_source(
        tmp.path(),
        "site.scss",
        "$gap: 1rem;\n\nbody {\n  margin: $gap;\n  color: #336699;\n}\n",
    )?;

    let pipeline = default_pipeline(tmp.path())?;

    pipeline.build().await?;
    let first = fs::read(tmp.path().join("css/site.css"))?;

    pipeline.build().await?;
    let second = fs::read(tmp.path().join("css/site.css"))?;

    assert_eq!(first, second);
    Ok(())
}

#[tokio::test]
async fn partials_are_importable_but_never_emitted() -> TestResult {
    let tmp = tempfile::tempdir()?;
    write_source(tmp.path(), "_palette.scss", "$accent: #336699;\n")?;
    write_source(
        tmp.path(),
        "site.scss",
        "@use \"palette\";\n\nbody {\n  color: palette.$accent;\n}\n",
    )?;

    let pipeline = default_pipeline(tmp.path())?;
    let summary = pipeline.build().await?;

    assert!(summary.is_clean());
    assert_eq!(summary.written, vec![tmp.path().join("css/site.css")]);

    let css = fs::read_to_string(tmp.path().join("css/site.css"))?;
    assert!(css.contains("#369"), "color not resolved from partial: {css:?}");
    assert!(!tmp.path().join("css/_palette.css").exists());
    assert!(!tmp.path().join("css/palette.css").exists());

    Ok(())
}

#[tokio::test]
async fn bundled_normalize_is_importable_without_an_include_path() -> TestResult {
    let tmp = tempfile::tempdir()?;
    write_source(
        tmp.path(),
        "page.scss",
        "@use \"normalize\";\n\nmain {\n  margin: 0 auto;\n}\n",
    )?;

    let pipeline = default_pipeline(tmp.path())?;
    let summary = pipeline.build().await?;

    assert!(summary.is_clean());
    let css = fs::read_to_string(tmp.path().join("css/page.css"))?;
    assert!(
        css.contains("line-height:1.15"),
        "normalize rules missing from output: {css:?}"
    );

    Ok(())
}

#[tokio::test]
async fn vendor_prefixes_are_applied_for_the_browser_matrix() -> TestResult {
    let tmp = tempfile::tempdir()?;
    write_source(
        tmp.path(),
        "flex.scss",
        "body {\n  display: flex;\n  user-select: none;\n}\n",
    )?;

    let mut cfg = ConfigFile::default();
    // An old matrix that definitely still needs prefixed flexbox.
    cfg.prefix.browsers = vec!["safari 6".to_string()];

    let pipeline = StylePipeline::from_config(&cfg, tmp.path())?;
    let summary = pipeline.build().await?;

    assert!(summary.is_clean());
    let css = fs::read_to_string(tmp.path().join("css/flex.css"))?;
    assert!(css.contains("-webkit-"), "no vendor prefixes in: {css:?}");
    assert!(css.contains("flex"));

    Ok(())
}

#[tokio::test]
async fn expanded_style_keeps_output_readable() -> TestResult {
    let tmp = tempfile::tempdir()?;
    write_source(tmp.path(), "a.scss", "body {\n  color: red;\n}\n")?;

    let mut cfg = ConfigFile::default();
    cfg.compile.style = "expanded".to_string();

    let pipeline = StylePipeline::from_config(&cfg, tmp.path())?;
    pipeline.build().await?;

    let css = fs::read_to_string(tmp.path().join("css/a.css"))?;
    assert!(css.contains("{\n"), "expanded output was minified: {css:?}");

    Ok(())
}

#[tokio::test]
async fn missing_source_dir_builds_an_empty_set() -> TestResult {
    let tmp = tempfile::tempdir()?;

    let pipeline = default_pipeline(tmp.path())?;
    let summary = pipeline.build().await?;

    assert!(summary.written.is_empty());
    assert!(summary.failed.is_empty());
    // Nothing to write, so the output directory is not created either.
    assert!(!tmp.path().join("css").exists());

    Ok(())
}

#[tokio::test]
async fn excluded_sources_are_not_built() -> TestResult {
    let tmp = tempfile::tempdir()?;
    write_source(tmp.path(), "keep.scss", "body {\n  color: red;\n}\n")?;
    write_source(tmp.path(), "skip.scss", "body {\n  color: blue;\n}\n")?;

    let mut cfg = ConfigFile::default();
    cfg.source.exclude = vec!["skip.scss".to_string()];

    let pipeline = StylePipeline::from_config(&cfg, tmp.path())?;
    let summary = pipeline.build().await?;

    assert_eq!(summary.written, vec![tmp.path().join("css/keep.css")]);
    assert!(!tmp.path().join("css/skip.css").exists());

    Ok(())
}

#[test]
fn compile_errors_name_the_offending_file() -> TestResult {
    let tmp = tempfile::tempdir()?;
    write_source(tmp.path(), "broken.scss", "@use \"missing\";\n")?;

    let settings = CompileSettings {
        mode: OutputMode::Compressed,
        include_paths: Vec::new(),
        normalize: true,
    };

    let err = compile::compile_file(&tmp.path().join("scss/broken.scss"), &settings)
        .expect_err("compilation should fail");
    assert!(err.to_string().contains("broken.scss"), "error was: {err}");

    Ok(())
}
