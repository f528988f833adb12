//! Reading text from files, stdin, and inline flags

use anyhow::{Context, Result};
use std::io::Read;
use std::path::{Path, PathBuf};

pub const STDIN_SOURCE: &str = "<stdin>";
pub const INLINE_SOURCE: &str = "<text>";

/// A piece of text and where it came from
#[derive(Debug, Clone)]
pub struct Input {
    pub source: String,
    pub text: String,
}

/// Read every file (`-` meaning stdin, at most once) followed by inline texts
pub fn gather(files: &[PathBuf], inline: impl IntoIterator<Item = String>) -> Result<Vec<Input>> {
    let mut inputs = Vec::new();
    let mut stdin_used = false;

    for path in files {
        if is_stdin(path) {
            if stdin_used {
                anyhow::bail!("stdin (`-`) can only be given once");
            }
            stdin_used = true;
        }
        inputs.push(read(path)?);
    }

    inputs.extend(inline.into_iter().map(|text| Input {
        source: INLINE_SOURCE.to_string(),
        text,
    }));

    Ok(inputs)
}

/// Read a single file, or stdin for `-`
pub fn read(path: &Path) -> Result<Input> {
    if is_stdin(path) {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        return Ok(Input {
            source: STDIN_SOURCE.to_string(),
            text,
        });
    }

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(Input {
        source: path.display().to_string(),
        text,
    })
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gather_files_then_inline() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.txt");
        std::fs::write(&a, "From a file.").unwrap();

        let inputs = gather(&[a.clone()], vec!["Inline.".to_string()]).unwrap();
        assert_eq!(inputs.len(), 2);
        assert_eq!(inputs[0].source, a.display().to_string());
        assert_eq!(inputs[0].text, "From a file.");
        assert_eq!(inputs[1].source, INLINE_SOURCE);
    }

    #[test]
    fn test_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let err = gather(&[dir.path().join("nope.txt")], Vec::new()).unwrap_err();
        assert!(err.to_string().contains("nope.txt"));
    }

    #[test]
    fn test_stdin_marker() {
        assert!(is_stdin(Path::new("-")));
        assert!(!is_stdin(Path::new("-file")));
    }
}
