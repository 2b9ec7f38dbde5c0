// src/pipeline/normalize.rs

//! The bundled normalization stylesheet.
//!
//! normalize.css is embedded in the binary and exposed to the compiler
//! through a [`grass::Fs`] overlay: a virtual include directory that serves
//! the partial from memory and delegates every other path to the real
//! filesystem. Sources can then `@use "normalize";` with no on-disk copy of
//! the file and no extra include path in their config.

use std::path::Path;

/// Virtual include directory registered as a load path when
/// `[compile].normalize` is on. The `@` prefix keeps it from colliding with
/// any real relative path.
pub const VIRTUAL_DIR: &str = "@stylepipe/normalize";

const NORMALIZE_SCSS: &str = include_str!("../../assets/normalize/_normalize.scss");

/// Filesystem overlay serving the embedded normalize partial at
/// [`VIRTUAL_DIR`], everything else from the real filesystem.
#[derive(Debug)]
pub struct NormalizeFs {
    fallback: grass::StdFs,
}

impl NormalizeFs {
    pub fn new() -> Self {
        Self {
            fallback: grass::StdFs,
        }
    }
}

impl Default for NormalizeFs {
    fn default() -> Self {
        Self::new()
    }
}

impl grass::Fs for NormalizeFs {
    fn is_dir(&self, path: &Path) -> bool {
        if path == Path::new(VIRTUAL_DIR) {
            return true;
        }
        self.fallback.is_dir(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        if virtual_file(path) {
            return true;
        }
        self.fallback.is_file(path)
    }

    fn read(&self, path: &Path) -> std::io::Result<Vec<u8>> {
        if virtual_file(path) {
            return Ok(NORMALIZE_SCSS.as_bytes().to_vec());
        }
        self.fallback.read(path)
    }
}

/// True for the paths the compiler may try when resolving
/// `@use "normalize"` against [`VIRTUAL_DIR`].
fn virtual_file(path: &Path) -> bool {
    let Ok(rel) = path.strip_prefix(VIRTUAL_DIR) else {
        return false;
    };
    matches!(
        rel.to_str(),
        Some("_normalize.scss") | Some("normalize.scss")
    )
}
