// tests/config_behaviour.rs

use std::error::Error;
use std::fs;

use stylepipe::config::{load_and_validate, load_for_cli, validate_config, ConfigFile};

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn defaults_reproduce_the_classic_layout() -> TestResult {
    let cfg = ConfigFile::default();

    assert_eq!(cfg.source.dir, "scss");
    assert_eq!(cfg.source.patterns, vec!["*.scss".to_string()]);
    assert!(cfg.source.exclude.is_empty());
    assert_eq!(cfg.output.dir, "css");
    assert_eq!(cfg.compile.style, "compressed");
    assert!(cfg.compile.normalize);
    assert_eq!(cfg.prefix.browsers, vec!["last 2 versions".to_string()]);

    validate_config(&cfg)?;
    Ok(())
}

#[test]
fn toml_file_overrides_sections() -> TestResult {
    let tmp = tempfile::tempdir()?;
    let path = tmp.path().join("Stylepipe.toml");
    fs::write(
        &path,
        r#"
[source]
dir = "styles"
exclude = ["vendor*.scss"]

[output]
dir = "public/css"

[compile]
style = "expanded"
include_paths = ["styles/lib"]

[prefix]
browsers = ["last 1 version", "not dead"]
"#,
    )?;

    let cfg = load_and_validate(&path)?;

    assert_eq!(cfg.source.dir, "styles");
    // Unset fields keep their defaults.
    assert_eq!(cfg.source.patterns, vec!["*.scss".to_string()]);
    assert_eq!(cfg.source.exclude, vec!["vendor*.scss".to_string()]);
    assert_eq!(cfg.output.dir, "public/css");
    assert_eq!(cfg.compile.style, "expanded");
    assert_eq!(cfg.compile.include_paths, vec!["styles/lib".to_string()]);
    assert_eq!(
        cfg.prefix.browsers,
        vec!["last 1 version".to_string(), "not dead".to_string()]
    );

    Ok(())
}

#[test]
fn explicit_config_path_must_exist() {
    let tmp = tempfile::tempdir().unwrap();
    let missing = tmp.path().join("nope.toml");

    let err = load_for_cli(Some(missing.to_str().unwrap()))
        .expect_err("missing explicit config should be an error");
    assert!(err.to_string().contains("reading config file"));
}

#[test]
fn config_root_is_the_config_files_directory() -> TestResult {
    let tmp = tempfile::tempdir()?;
    let path = tmp.path().join("Stylepipe.toml");
    fs::write(&path, "")?;

    let (_cfg, root) = load_for_cli(Some(path.to_str().unwrap()))?;
    assert_eq!(root, tmp.path());

    Ok(())
}

#[test]
fn unknown_output_style_is_rejected() {
    let mut cfg = ConfigFile::default();
    cfg.compile.style = "pretty".to_string();

    let err = validate_config(&cfg).expect_err("style should be rejected");
    assert!(err.to_string().contains("[compile].style"));
}

#[test]
fn empty_pattern_list_is_rejected() {
    let mut cfg = ConfigFile::default();
    cfg.source.patterns.clear();

    assert!(validate_config(&cfg).is_err());
}

#[test]
fn invalid_glob_is_rejected() {
    let mut cfg = ConfigFile::default();
    cfg.source.patterns = vec!["[".to_string()];

    let err = validate_config(&cfg).expect_err("glob should be rejected");
    assert!(err.to_string().contains("[source]"));
}

#[test]
fn invalid_browser_query_is_rejected() {
    let mut cfg = ConfigFile::default();
    cfg.prefix.browsers = vec!["netscape 4ever".to_string()];

    let err = validate_config(&cfg).expect_err("query should be rejected");
    assert!(err.to_string().contains("[prefix].browsers"));
}

#[test]
fn empty_browser_list_disables_targeting() -> TestResult {
    let mut cfg = ConfigFile::default();
    cfg.prefix.browsers.clear();

    validate_config(&cfg)?;
    Ok(())
}
