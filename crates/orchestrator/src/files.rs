//! Persistence of pipeline results.
//!
//! A result is written as three sibling files sharing one base name:
//! `<base>.<ext>` (code), `<base>_test.<ext>` (tests) and `<base>_info.json`
//! (every other field). The writes are independent; a failure part way
//! leaves the earlier files in place.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use chrono::Local;
use codegen_core::{Language, PipelineResult};
use tokio::fs;
use tracing::{debug, info, warn};

use crate::error::{OrchestratorError, Result};

const TEST_SUFFIX: &str = "_test";
const INFO_SUFFIX: &str = "_info.json";
const DEFAULT_PREFIX: &str = "generated";

/// Paths of the three files written for one result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultPaths {
    pub code: PathBuf,
    pub tests: PathBuf,
    pub info: PathBuf,
}

impl ResultPaths {
    pub fn for_base(base: impl AsRef<Path>, language: Language) -> Self {
        let base = base.as_ref();
        let ext = language.file_extension();

        Self {
            code: with_suffix(base, &format!(".{}", ext)),
            tests: with_suffix(base, &format!("{}.{}", TEST_SUFFIX, ext)),
            info: with_suffix(base, INFO_SUFFIX),
        }
    }
}

fn with_suffix(base: &Path, suffix: &str) -> PathBuf {
    let mut name: OsString = base.as_os_str().to_owned();
    name.push(suffix);
    PathBuf::from(name)
}

/// Base name used when the caller does not choose one.
pub fn default_base_name() -> String {
    format!("{}_{}", DEFAULT_PREFIX, Local::now().format("%Y%m%d_%H%M%S"))
}

/// Writes pipeline results below an output directory
#[derive(Debug, Clone)]
pub struct FileManager {
    output_dir: PathBuf,
}

impl FileManager {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Write code, tests and metadata for `result`.
    ///
    /// `base_name` may contain directories; missing ones are created. Without
    /// a base name a timestamped one is generated.
    pub async fn save_result(
        &self,
        result: &PipelineResult,
        base_name: Option<&str>,
    ) -> Result<ResultPaths> {
        let base_name = base_name
            .map(str::to_string)
            .unwrap_or_else(default_base_name);
        let base = self.output_dir.join(&base_name);

        if result.language == Language::Java {
            warn!(
                base = %base.display(),
                "Java code is saved with the .js extension"
            );
        }

        let paths = ResultPaths::for_base(&base, result.language);

        if let Some(parent) = paths.code.parent() {
            if !parent.as_os_str().is_empty() {
                debug!("Ensuring directory exists: {:?}", parent);
                fs::create_dir_all(parent).await?;
            }
        }

        Self::write_file(&paths.code, &result.code).await?;
        Self::write_file(&paths.tests, &result.tests).await?;

        let metadata = serde_json::to_string_pretty(&result.metadata())?;
        Self::write_file(&paths.info, &metadata).await?;

        info!(
            code = %paths.code.display(),
            tests = %paths.tests.display(),
            info = %paths.info.display(),
            "Result saved"
        );

        Ok(paths)
    }

    async fn write_file(path: &Path, content: &str) -> Result<()> {
        fs::write(path, content)
            .await
            .map_err(|e| OrchestratorError::write_failed(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_for_python() {
        let paths = ResultPaths::for_base("out/adder", Language::Python);
        assert_eq!(paths.code, PathBuf::from("out/adder.py"));
        assert_eq!(paths.tests, PathBuf::from("out/adder_test.py"));
        assert_eq!(paths.info, PathBuf::from("out/adder_info.json"));
    }

    #[test]
    fn test_paths_for_non_python_use_js() {
        for language in [Language::Javascript, Language::Java] {
            let paths = ResultPaths::for_base("adder", language);
            assert_eq!(paths.code, PathBuf::from("adder.js"));
            assert_eq!(paths.tests, PathBuf::from("adder_test.js"));
        }
    }

    #[test]
    fn test_paths_keep_dots_in_base() {
        let paths = ResultPaths::for_base("adder.v2", Language::Python);
        assert_eq!(paths.code, PathBuf::from("adder.v2.py"));
    }

    #[test]
    fn test_default_base_name_format() {
        let name = default_base_name();
        assert!(name.starts_with("generated_"));
        // generated_YYYYmmdd_HHMMSS
        assert_eq!(name.len(), "generated_".len() + 15);
    }
}
