// src/pipeline/compile.rs

use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::errors::StyleError;
use crate::pipeline::normalize::{self, NormalizeFs};

/// Formatting of the generated CSS.
///
/// `Compressed` (the default) also turns on minification in the prefixing
/// pass; `Expanded` keeps the output readable end to end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    #[default]
    Compressed,
    Expanded,
}

impl OutputMode {
    fn to_grass(self) -> grass::OutputStyle {
        match self {
            OutputMode::Compressed => grass::OutputStyle::Compressed,
            OutputMode::Expanded => grass::OutputStyle::Expanded,
        }
    }
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "compressed" => Ok(OutputMode::Compressed),
            "expanded" => Ok(OutputMode::Expanded),
            other => Err(format!(
                "invalid output style: {other} (expected \"compressed\" or \"expanded\")"
            )),
        }
    }
}

/// Resolved compiler options for a build.
#[derive(Debug, Clone)]
pub struct CompileSettings {
    pub mode: OutputMode,
    /// Extra directories searched when resolving imports.
    pub include_paths: Vec<PathBuf>,
    /// Whether the bundled normalization stylesheet is importable.
    pub normalize: bool,
}

/// Compile a single SCSS file to CSS.
///
/// Imports resolve against the file's own directory first, then the
/// configured include paths, then (if enabled) the virtual directory serving
/// the bundled normalization stylesheet.
pub fn compile_file(path: &Path, settings: &CompileSettings) -> Result<String, StyleError> {
    let overlay = NormalizeFs::new();

    let mut options = grass::Options::default()
        .style(settings.mode.to_grass())
        .fs(&overlay);

    for dir in &settings.include_paths {
        options = options.load_path(dir);
    }
    if settings.normalize {
        options = options.load_path(normalize::VIRTUAL_DIR);
    }

    grass::from_path(path, &options).map_err(|err| StyleError::Compile {
        file: path.to_path_buf(),
        message: err.to_string(),
    })
}
