//! The immutable settings model produced by configuration evaluation.
//!
//! [`Settings`] is the finished product: lifecycle hooks plus one
//! [`PageSettings`] per declared page. All fields are private and every
//! "mutation" returns a new value, so settings handed to a check runner can
//! never drift from what the configuration declared.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::pattern::Pattern;

/// A lifecycle hook registered with `before_all` or `after_all`.
///
/// Hooks are carried for an external check runner; nothing in this crate
/// invokes them.
#[derive(Debug, Clone)]
pub enum Hook {
    /// A command block captured verbatim from a configuration script.
    Script(ScriptHook),
    /// A closure registered through [`configure`](crate::configure).
    Native(NativeHook),
}

/// Raw command lines captured from a script hook body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScriptHook {
    /// Command lines in written order, trailing whitespace removed.
    pub commands: Vec<String>,
    /// 1-based line of the opening declaration.
    pub line: usize,
}

/// A hook registered as a closure.
#[derive(Clone)]
pub struct NativeHook(Arc<dyn Fn() + Send + Sync + 'static>);

impl NativeHook {
    pub fn new(hook: impl Fn() + Send + Sync + 'static) -> Self {
        NativeHook(Arc::new(hook))
    }

    /// Invokes the hook.
    pub fn call(&self) {
        (self.0)()
    }
}

impl fmt::Debug for NativeHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("NativeHook(..)")
    }
}

/// Settings for a single page: its URL and which standards to skip there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageSettings {
    url: String,
    skipped_standards: Vec<Pattern>,
}

impl PageSettings {
    /// A page with no skip rules.
    pub fn new(url: impl Into<String>) -> Self {
        PageSettings {
            url: url.into(),
            skipped_standards: Vec::new(),
        }
    }

    /// A page with the given skip rules.
    pub fn with_skips(url: impl Into<String>, skipped_standards: Vec<Pattern>) -> Self {
        PageSettings {
            url: url.into(),
            skipped_standards,
        }
    }

    /// The literal URL this page was declared with.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Skip patterns in declaration order: the page's own first, then any
    /// merged in from general rules.
    pub fn skipped_standards(&self) -> &[Pattern] {
        &self.skipped_standards
    }

    /// Returns true if any skip pattern matches `standard_name`.
    pub fn skips(&self, standard_name: &str) -> bool {
        self.skipped_standards
            .iter()
            .any(|pattern| pattern.matches(standard_name))
    }

    /// Returns a new page with `rule`'s skip patterns appended after this
    /// page's own. Duplicates are preserved.
    pub fn merge(&self, rule: &GeneralRule) -> PageSettings {
        let mut skipped_standards = self.skipped_standards.clone();
        skipped_standards.extend(rule.skipped_standards().iter().cloned());
        PageSettings {
            url: self.url.clone(),
            skipped_standards,
        }
    }
}

/// A `for_pages_matching` rule.
///
/// General rules never become pages themselves: they are folded into every
/// matching literal page when evaluation finishes, then discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneralRule {
    pattern: Pattern,
    skipped_standards: Vec<Pattern>,
}

impl GeneralRule {
    pub fn new(pattern: Pattern, skipped_standards: Vec<Pattern>) -> Self {
        GeneralRule {
            pattern,
            skipped_standards,
        }
    }

    /// The URL pattern this rule applies to.
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Skip patterns contributed by this rule, in declaration order.
    pub fn skipped_standards(&self) -> &[Pattern] {
        &self.skipped_standards
    }

    /// Returns true if this rule applies to the given page URL.
    pub fn matches(&self, url: &str) -> bool {
        self.pattern.matches(url)
    }
}

/// The finished configuration: lifecycle hooks plus per-page settings.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    before_all_hooks: Vec<Hook>,
    after_all_hooks: Vec<Hook>,
    pages: Vec<PageSettings>,
}

impl Settings {
    /// Empty settings: no hooks, no pages.
    pub fn new() -> Self {
        Settings::default()
    }

    pub(crate) fn from_parts(
        before_all_hooks: Vec<Hook>,
        after_all_hooks: Vec<Hook>,
        pages: Vec<PageSettings>,
    ) -> Self {
        Settings {
            before_all_hooks,
            after_all_hooks,
            pages,
        }
    }

    /// Hooks to run once before the whole check run, in declaration order.
    pub fn before_all_hooks(&self) -> &[Hook] {
        &self.before_all_hooks
    }

    /// Hooks to run once after the whole check run, in declaration order.
    pub fn after_all_hooks(&self) -> &[Hook] {
        &self.after_all_hooks
    }

    /// Per-page settings in declaration order.
    pub fn pages(&self) -> &[PageSettings] {
        &self.pages
    }

    /// Returns new settings with the same hooks and the given pages.
    pub fn with_pages(&self, pages: Vec<PageSettings>) -> Settings {
        Settings {
            before_all_hooks: self.before_all_hooks.clone(),
            after_all_hooks: self.after_all_hooks.clone(),
            pages,
        }
    }
}
