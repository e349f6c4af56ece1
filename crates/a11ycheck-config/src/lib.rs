//! a11ycheck-config - configuration engine for a11ycheck
//!
//! Evaluates user-authored configuration scripts that declare which pages of
//! a site to check and which accessibility standards to skip on which pages.
//! The vocabulary is deliberately tiny and scope-sensitive: `before_all`,
//! `after_all`, `page` and `for_pages_matching` at the top level,
//! `skip_standard` inside page blocks, and nothing else.
//!
//! ```text
//! before_all {
//!   ./scripts/start-server
//! }
//!
//! page("http://localhost:4000/") {
//!   skip_standard(/heading/)
//! }
//!
//! for_pages_matching(/localhost/) {
//!   skip_standard("tab_index")
//! }
//! ```
//!
//! Evaluation happens in two phases: declarations are collected in textual
//! order first, then every `for_pages_matching` rule is folded into every
//! matching `page`, wherever in the file each was written. The result is an
//! immutable [`Settings`] value.
//!
//! The same vocabulary is available to Rust callers as a closure API:
//!
//! ```
//! use a11ycheck_config::configure;
//!
//! let settings = configure(|c| {
//!     c.page("http://example.com/", |page| {
//!         page.skip_standard("tab_index");
//!     });
//! });
//! assert_eq!(settings.pages().len(), 1);
//! ```

use std::path::Path;

pub mod ast;
pub mod error;
pub mod evaluator;
pub mod parser;
pub mod pattern;
pub mod settings;

pub use error::{ConfigError, ParseError, ParseErrorKind, Result, DEFAULT_CONFIG_FILE};
pub use evaluator::{ConfigBuilder, PageScope};
pub use pattern::Pattern;
pub use settings::{GeneralRule, Hook, NativeHook, PageSettings, ScriptHook, Settings};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Builds settings through the closure-form vocabulary.
///
/// This form cannot fail: the vocabulary is enforced by the type system and
/// patterns are compiled by the caller.
pub fn configure(build: impl FnOnce(&mut ConfigBuilder)) -> Settings {
    let mut builder = ConfigBuilder::new();
    build(&mut builder);
    builder.finish()
}

/// Evaluates an in-memory configuration script.
pub fn parse_str(source: &str) -> Result<Settings> {
    eval_source(source, None)
}

/// Evaluates the configuration script at `path`.
///
/// A nonexistent file yields [`ConfigError::MissingConfigurationFile`];
/// script errors come back as [`ConfigError::Parse`] with the file name in
/// the rendered diagnostic.
pub fn parse_file(path: impl AsRef<Path>) -> Result<Settings> {
    let path = path.as_ref();
    let source = match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
            return Err(ConfigError::MissingConfigurationFile {
                path: path.to_path_buf(),
            });
        }
        Err(error) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source: error,
            });
        }
    };
    eval_source(&source, Some(path))
}

/// Settings for checking `urls` without a configuration file: one literal
/// page per URL, no hooks, no skips.
pub fn for_urls<I, S>(urls: I) -> Settings
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let pages = urls.into_iter().map(PageSettings::new).collect();
    Settings::new().with_pages(pages)
}

fn eval_source(source: &str, file: Option<&Path>) -> Result<Settings> {
    let statements = parser::parse(source).map_err(|error| error.with_source(file, source))?;
    let mut builder = ConfigBuilder::new();
    builder.eval(statements);
    Ok(builder.finish())
}
