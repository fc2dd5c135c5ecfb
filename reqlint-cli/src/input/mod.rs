//! Input handling module

pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;

/// Marker for reading requirements from standard input
pub const STDIN_MARKER: &str = "-";

/// One requirement together with where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    /// `arg:N`, `stdin:N` or `path:N`
    pub origin: String,
    /// Requirement text
    pub text: String,
}

impl Requirement {
    /// Create a requirement record
    pub fn new(origin: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            text: text.into(),
        }
    }
}

/// Split `content` into requirements, one per non-blank line
pub fn split_requirements(source: &str, content: &str) -> Vec<Requirement> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| Requirement::new(format!("{source}:{}", i + 1), line))
        .collect()
}
