// src/config/model.rs

use serde::Deserialize;

/// Top-level configuration as read from a TOML file.
///
/// A fully spelled-out config looks like:
///
/// ```toml
/// [source]
/// dir = "scss"
/// patterns = ["*.scss"]
/// exclude = []
///
/// [output]
/// dir = "css"
///
/// [compile]
/// style = "compressed"
/// include_paths = []
/// normalize = true
///
/// [prefix]
/// browsers = ["last 2 versions"]
/// ```
///
/// All sections are optional; the defaults above are what you get from an
/// empty (or absent) file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    /// Where sources come from, from `[source]`.
    #[serde(default)]
    pub source: SourceSection,

    /// Where compiled stylesheets go, from `[output]`.
    #[serde(default)]
    pub output: OutputSection,

    /// Compiler options from `[compile]`.
    #[serde(default)]
    pub compile: CompileSection,

    /// Vendor-prefixing options from `[prefix]`.
    #[serde(default)]
    pub prefix: PrefixSection,
}

/// `[source]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceSection {
    /// Directory holding the SCSS sources, relative to the config file.
    #[serde(default = "default_source_dir")]
    pub dir: String,

    /// Glob patterns matched against file names inside `dir` (non-recursive).
    #[serde(default = "default_source_patterns")]
    pub patterns: Vec<String>,

    /// Glob patterns for files to ignore even when `patterns` match.
    #[serde(default)]
    pub exclude: Vec<String>,
}

fn default_source_dir() -> String {
    "scss".to_string()
}

fn default_source_patterns() -> Vec<String> {
    vec!["*.scss".to_string()]
}

impl Default for SourceSection {
    fn default() -> Self {
        Self {
            dir: default_source_dir(),
            patterns: default_source_patterns(),
            exclude: Vec::new(),
        }
    }
}

/// `[output]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputSection {
    /// Directory compiled stylesheets are written into, relative to the
    /// config file. Created on demand; contents are overwritten per run.
    #[serde(default = "default_output_dir")]
    pub dir: String,
}

fn default_output_dir() -> String {
    "css".to_string()
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
        }
    }
}

/// `[compile]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct CompileSection {
    /// `"compressed"` or `"expanded"`.
    ///
    /// Compressed output is also minified by the prefixing pass.
    #[serde(default = "default_compile_style")]
    pub style: String,

    /// Additional directories searched when resolving `@use` / `@import`,
    /// relative to the config file.
    #[serde(default)]
    pub include_paths: Vec<String>,

    /// Whether the bundled normalization stylesheet is importable as
    /// `@use "normalize";` without any extra include path.
    #[serde(default = "default_normalize")]
    pub normalize: bool,
}

fn default_compile_style() -> String {
    "compressed".to_string()
}

fn default_normalize() -> bool {
    true
}

impl Default for CompileSection {
    fn default() -> Self {
        Self {
            style: default_compile_style(),
            include_paths: Vec::new(),
            normalize: default_normalize(),
        }
    }
}

/// `[prefix]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct PrefixSection {
    /// Browserslist queries describing the browser support matrix, e.g.
    /// `["last 2 versions"]`. An empty list disables browser targeting.
    #[serde(default = "default_browsers")]
    pub browsers: Vec<String>,
}

fn default_browsers() -> Vec<String> {
    vec!["last 2 versions".to_string()]
}

impl Default for PrefixSection {
    fn default() -> Self {
        Self {
            browsers: default_browsers(),
        }
    }
}
