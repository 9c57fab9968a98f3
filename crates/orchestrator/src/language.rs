//! Keyword heuristic for guessing the language of generated code.

use codegen_core::Language;

const JAVASCRIPT_MARKERS: &[&str] = &["function", "const", "let", "var"];
const JAVA_MARKERS: &[&str] = &["public class", "private", "import java"];

/// Guess the language of `code` by substring membership.
///
/// Checked in order on the lower-cased text: any javascript marker wins,
/// then any java marker, otherwise python. This is not a parser; prose or
/// mixed content (a python docstring mentioning "function") is misclassified.
pub fn detect_language(code: &str) -> Language {
    let lowered = code.to_lowercase();

    if JAVASCRIPT_MARKERS.iter().any(|m| lowered.contains(m)) {
        Language::Javascript
    } else if JAVA_MARKERS.iter().any(|m| lowered.contains(m)) {
        Language::Java
    } else {
        Language::Python
    }
}
