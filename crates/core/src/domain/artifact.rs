use serde::{Deserialize, Serialize};

/// Language of generated code, as guessed from its text.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Python,
    Javascript,
    Java,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Python => "python",
            Self::Javascript => "javascript",
            Self::Java => "java",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "python" => Some(Self::Python),
            "javascript" => Some(Self::Javascript),
            "java" => Some(Self::Java),
            _ => None,
        }
    }

    /// Extension used when persisting code of this language.
    ///
    /// Only python gets its own extension; javascript and java both map to
    /// `js`.
    pub fn file_extension(&self) -> &'static str {
        match self {
            Self::Python => "py",
            Self::Javascript | Self::Java => "js",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output of the code stage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CodeResult {
    pub code: String,
    pub language: Language,
    pub description: String,
}

/// Output of the test stage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TestResult {
    pub test_code: String,
    pub language: Language,
    pub description: String,
}
