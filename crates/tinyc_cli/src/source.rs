//! Where the source text comes from

use eyre::{eyre, WrapErr};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Parsed when no source file is given
pub const SAMPLE_PROGRAM: &str = "int main() {\n  return 123;\n}\n";

/// Source text along with a description of where it came from
#[derive(Debug)]
pub struct Source {
    pub origin: String,
    pub text: String,
}

impl Source {
    /// Reads the whole of `path`, or uses the sample program if there is no path.
    ///
    /// Fails if the file can't be read, or if the source text is empty.
    pub fn load(path: Option<&Path>) -> eyre::Result<Self> {
        let source = match path {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .wrap_err_with(|| format!("could not open file {}", path.display()))?;
                Self {
                    origin: path.display().to_string(),
                    text,
                }
            }
            None => Self {
                origin: "built-in sample program".to_string(),
                text: SAMPLE_PROGRAM.to_string(),
            },
        };
        debug!("loaded {} bytes from {}", source.text.len(), source.origin);
        if source.text.is_empty() {
            return Err(eyre!("no source code to parse in {}", source.origin));
        }
        Ok(source)
    }
}
