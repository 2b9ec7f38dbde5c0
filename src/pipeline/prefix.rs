// src/pipeline/prefix.rs

use std::path::Path;

use anyhow::{anyhow, Result};
use lightningcss::printer::PrinterOptions;
use lightningcss::stylesheet::{MinifyOptions, ParserOptions, StyleSheet};
use lightningcss::targets::{Browsers, Targets};

use crate::errors::StyleError;

/// Resolved vendor-prefixing options for a build.
///
/// `browsers` is the concrete browser-version matrix resolved from the
/// configured browserslist queries; `None` means no browser targeting (the
/// transform still runs, for minification).
#[derive(Debug, Clone)]
pub struct PrefixSettings {
    pub browsers: Option<Browsers>,
}

/// Resolve browserslist query strings (e.g. `"last 2 versions"`) into a
/// browser matrix. An empty query list disables targeting.
pub fn parse_browsers(queries: &[String]) -> Result<Option<Browsers>> {
    if queries.is_empty() {
        return Ok(None);
    }

    Browsers::from_browserslist(queries.iter().map(|s| s.as_str()))
        .map_err(|err| anyhow!("resolving browser queries {queries:?}: {err}"))
}

/// Run compiled CSS through the prefixing transform: parse, apply vendor
/// prefixes for the browser matrix, and print (minified or not).
///
/// `file` is the originating source path, used only for error reporting.
pub fn prefix_css(
    file: &Path,
    css: &str,
    settings: &PrefixSettings,
    minify: bool,
) -> Result<String, StyleError> {
    let transform_err = |message: String| StyleError::Transform {
        file: file.to_path_buf(),
        message,
    };

    let targets = Targets {
        browsers: settings.browsers,
        ..Targets::default()
    };

    let mut sheet = StyleSheet::parse(
        css,
        ParserOptions {
            filename: file.display().to_string(),
            ..ParserOptions::default()
        },
    )
    .map_err(|err| transform_err(err.to_string()))?;

    sheet
        .minify(MinifyOptions {
            targets,
            ..MinifyOptions::default()
        })
        .map_err(|err| transform_err(err.to_string()))?;

    let output = sheet
        .to_css(PrinterOptions {
            minify,
            targets,
            ..PrinterOptions::default()
        })
        .map_err(|err| transform_err(err.to_string()))?;

    Ok(output.code)
}
