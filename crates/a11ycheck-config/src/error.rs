//! Error reporting for configuration loading and evaluation.
//!
//! Every failure is normalized into [`ConfigError`] before it leaves this
//! crate. Script errors become a [`ParseError`] carrying the failing line,
//! a marked source snippet, and a one-line message; a nonexistent
//! configuration file gets its own variant with a fixed message and no
//! snippet.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Documentation pointer appended to every script diagnostic.
const HELP_POINTER: &str =
    "For help learning the configuration language, see\nhttps://github.com/a11ycheck/a11ycheck#configuration";

/// File name commands look for when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "a11y.conf";

/// Errors produced while loading or evaluating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file does not exist.
    #[error(
        "Missing configuration file (a11y.conf).\n\n\
         Create a11y.conf in the project root, or pass page URLs directly to\n\
         check them with default settings.\n\n\
         For help learning the configuration language, see\n\
         https://github.com/a11ycheck/a11ycheck#configuration"
    )]
    MissingConfigurationFile {
        /// The path that was tried.
        path: PathBuf,
    },

    /// The configuration file exists but could not be read.
    #[error("could not read configuration file {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration script could not be evaluated.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// A failure while evaluating a configuration script.
///
/// `Display` renders the full human-readable diagnostic: a header naming the
/// file and line, a three-line snippet with the failing line marked `=>`, the
/// underlying message, and a documentation pointer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseError {
    line: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    file: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    snippet: Option<String>,
    #[serde(flatten)]
    kind: ParseErrorKind,
}

/// What went wrong, split the way callers need to react.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParseErrorKind {
    /// The script used an identifier outside the configuration language,
    /// or a known one outside the scope it belongs to.
    UnknownDeclaration { name: String },
    /// Any other evaluation failure: malformed syntax, a bad argument, an
    /// invalid pattern.
    Other { message: String },
}

impl ParseError {
    pub(crate) fn unknown_declaration(line: usize, name: impl Into<String>) -> Self {
        ParseError {
            line,
            file: None,
            snippet: None,
            kind: ParseErrorKind::UnknownDeclaration { name: name.into() },
        }
    }

    pub(crate) fn other(line: usize, message: impl Into<String>) -> Self {
        ParseError {
            line,
            file: None,
            snippet: None,
            kind: ParseErrorKind::Other {
                message: message.into(),
            },
        }
    }

    /// Attaches the script source (and file name, when read from disk) so the
    /// diagnostic can render a snippet.
    pub(crate) fn with_source(mut self, file: Option<&Path>, source: &str) -> Self {
        self.file = file.map(Path::to_path_buf);
        self.snippet = render_snippet(source, self.line);
        self
    }

    /// 1-based line the failure was reported on.
    pub fn line(&self) -> usize {
        self.line
    }

    /// The script file, if the script came from disk.
    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    /// The marked source snippet, if the failing line exists in the source.
    pub fn snippet(&self) -> Option<&str> {
        self.snippet.as_deref()
    }

    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    /// The one-line message without source context.
    pub fn message(&self) -> String {
        match &self.kind {
            ParseErrorKind::UnknownDeclaration { name } => {
                format!("`{name}` is not part of the configuration language")
            }
            ParseErrorKind::Other { message } => message.clone(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.file {
            Some(file) => writeln!(
                f,
                "There was an error reading your configuration file at line {} of '{}'",
                self.line,
                display_path(file)
            )?,
            None => writeln!(
                f,
                "There was an error reading your configuration at line {}",
                self.line
            )?,
        }
        if let Some(snippet) = &self.snippet {
            writeln!(f)?;
            writeln!(f, "{snippet}")?;
        }
        writeln!(f)?;
        writeln!(f, "{}", self.message())?;
        writeln!(f)?;
        write!(f, "{HELP_POINTER}")
    }
}

impl std::error::Error for ParseError {}

/// Renders the failing line with one line of context on each side, the
/// failing line marked `=> ` and context lines indented to match. The window
/// shrinks at the start and end of the source.
fn render_snippet(source: &str, line: usize) -> Option<String> {
    if line == 0 {
        return None;
    }
    let lines: Vec<&str> = source.lines().collect();
    if line > lines.len() {
        return None;
    }
    let first = line.saturating_sub(2);
    let last = (line + 1).min(lines.len());
    let mut snippet = String::new();
    for (offset, content) in lines[first..last].iter().enumerate() {
        let number = first + offset + 1;
        let marker = if number == line { "=> " } else { "   " };
        if !snippet.is_empty() {
            snippet.push('\n');
        }
        snippet.push_str(marker);
        snippet.push_str(content);
    }
    Some(snippet)
}

/// Paths under the current directory render relative to it.
fn display_path(path: &Path) -> String {
    match std::env::current_dir() {
        Ok(cwd) => path.strip_prefix(&cwd).unwrap_or(path).display().to_string(),
        Err(_) => path.display().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snippet_surrounds_the_failing_line() {
        let source = "page(\"/home\") {\n  skip_standard(\"a\")\n  oops()\n}\n";
        let snippet = render_snippet(source, 3).unwrap();
        assert_eq!(
            snippet,
            "     skip_standard(\"a\")\n=>   oops()\n   }"
        );
    }

    #[test]
    fn test_snippet_on_first_line_has_trailing_context_only() {
        let snippet = render_snippet("oops()\npage(\"/a\")\n", 1).unwrap();
        assert_eq!(snippet, "=> oops()\n   page(\"/a\")");
    }

    #[test]
    fn test_snippet_on_last_line_has_leading_context_only() {
        let snippet = render_snippet("page(\"/a\")\noops()\n", 2).unwrap();
        assert_eq!(snippet, "   page(\"/a\")\n=> oops()");
    }

    #[test]
    fn test_snippet_out_of_range_is_none() {
        assert!(render_snippet("one line", 5).is_none());
        assert!(render_snippet("one line", 0).is_none());
    }

    #[test]
    fn test_display_renders_header_snippet_message_and_pointer() {
        let source = "before_all {\n  ./start\n}\nnope()\n";
        let error = ParseError::unknown_declaration(4, "nope")
            .with_source(Some(Path::new("checks/a11y.conf")), source);

        let rendered = error.to_string();
        assert!(rendered
            .starts_with("There was an error reading your configuration file at line 4 of 'checks/a11y.conf'"));
        assert!(rendered.contains("=> nope()"));
        assert!(rendered.contains("   }"));
        assert!(rendered.contains("`nope` is not part of the configuration language"));
        assert!(rendered.ends_with(HELP_POINTER));
    }

    #[test]
    fn test_display_without_file_drops_the_of_clause() {
        let error = ParseError::other(1, "unmatched `}`").with_source(None, "}\n");
        let rendered = error.to_string();
        assert!(rendered.starts_with("There was an error reading your configuration at line 1"));
        assert!(rendered.contains("=> }"));
    }

    #[test]
    fn test_missing_file_message_is_fixed() {
        let error = ConfigError::MissingConfigurationFile {
            path: PathBuf::from("/somewhere/a11y.conf"),
        };
        let rendered = error.to_string();
        assert!(rendered.starts_with("Missing configuration file (a11y.conf)."));
        assert!(!rendered.contains("/somewhere"));
        assert!(!rendered.contains("=>"));
    }

    #[test]
    fn test_unknown_declaration_serializes_with_kind_tag() {
        let error = ParseError::unknown_declaration(2, "foo_bar").with_source(None, "x\nfoo_bar(1)\n");
        let json = serde_json::to_value(&error).unwrap();
        assert_eq!(json["kind"], "unknown_declaration");
        assert_eq!(json["name"], "foo_bar");
        assert_eq!(json["line"], 2);
    }
}
