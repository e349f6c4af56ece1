//! Two-phase evaluation of configuration declarations.
//!
//! Phase one walks declarations in order, collecting literal pages and
//! holding `for_pages_matching` rules aside. Phase two, after the whole
//! configuration has been seen, folds every matching rule into every literal
//! page. A rule therefore applies to pages declared before *and* after it.

use crate::ast::{HookStmt, MatchStmt, PageStmt, Statement};
use crate::pattern::Pattern;
use crate::settings::{GeneralRule, Hook, NativeHook, PageSettings, ScriptHook, Settings};

/// Collects `skip_standard` declarations while a page block is evaluated.
pub struct PageScope {
    skips: Vec<Pattern>,
}

impl PageScope {
    fn new() -> Self {
        PageScope { skips: Vec::new() }
    }

    /// Skips every standard whose name matches `pattern`.
    pub fn skip_standard(&mut self, pattern: impl Into<Pattern>) {
        self.skips.push(pattern.into());
    }

    fn into_page(self, url: String) -> PageSettings {
        PageSettings::with_skips(url, self.skips)
    }

    fn into_rule(self, pattern: Pattern) -> GeneralRule {
        GeneralRule::new(pattern, self.skips)
    }
}

/// Accumulates declarations and produces the final [`Settings`].
///
/// The same builder backs both script evaluation and the closure API
/// ([`configure`](crate::configure)), so both forms share one set of merge
/// semantics.
pub struct ConfigBuilder {
    before_all_hooks: Vec<Hook>,
    after_all_hooks: Vec<Hook>,
    pages: Vec<PageSettings>,
    general_rules: Vec<GeneralRule>,
}

impl ConfigBuilder {
    pub(crate) fn new() -> Self {
        ConfigBuilder {
            before_all_hooks: Vec::new(),
            after_all_hooks: Vec::new(),
            pages: Vec::new(),
            general_rules: Vec::new(),
        }
    }

    /// Registers a hook to run once before the whole check run.
    pub fn before_all(&mut self, hook: impl Fn() + Send + Sync + 'static) {
        self.before_all_hooks.push(Hook::Native(NativeHook::new(hook)));
    }

    /// Registers a hook to run once after the whole check run.
    pub fn after_all(&mut self, hook: impl Fn() + Send + Sync + 'static) {
        self.after_all_hooks.push(Hook::Native(NativeHook::new(hook)));
    }

    /// Declares settings for a single page.
    pub fn page(&mut self, url: impl Into<String>, configure: impl FnOnce(&mut PageScope)) {
        let mut scope = PageScope::new();
        configure(&mut scope);
        self.pages.push(scope.into_page(url.into()));
    }

    /// Declares settings applied to every page whose URL matches `pattern`.
    pub fn for_pages_matching(
        &mut self,
        pattern: impl Into<Pattern>,
        configure: impl FnOnce(&mut PageScope),
    ) {
        let mut scope = PageScope::new();
        configure(&mut scope);
        self.general_rules.push(scope.into_rule(pattern.into()));
    }

    /// Evaluates parsed statements in textual order.
    pub(crate) fn eval(&mut self, statements: Vec<Statement>) {
        for statement in statements {
            match statement {
                Statement::BeforeAll(hook) => self.before_all_hooks.push(script_hook(hook)),
                Statement::AfterAll(hook) => self.after_all_hooks.push(script_hook(hook)),
                Statement::Page(page) => self.pages.push(eval_page(page)),
                Statement::ForPagesMatching(rule) => self.general_rules.push(eval_rule(rule)),
            }
        }
    }

    /// Applies general rules to every matching page and seals the settings.
    pub(crate) fn finish(self) -> Settings {
        let pages = apply_general_rules(self.pages, &self.general_rules);
        Settings::from_parts(self.before_all_hooks, self.after_all_hooks, pages)
    }
}

fn script_hook(hook: HookStmt) -> Hook {
    Hook::Script(ScriptHook {
        commands: hook.commands,
        line: hook.line,
    })
}

fn eval_page(page: PageStmt) -> PageSettings {
    let mut scope = PageScope::new();
    for skip in page.skips {
        scope.skip_standard(skip.pattern);
    }
    scope.into_page(page.url)
}

fn eval_rule(rule: MatchStmt) -> GeneralRule {
    let mut scope = PageScope::new();
    for skip in rule.skips {
        scope.skip_standard(skip.pattern);
    }
    scope.into_rule(rule.pattern)
}

/// The merge pass. Each page keeps its own skips first, then gains the skips
/// of every matching rule in rule-declaration order. Duplicates are
/// preserved.
fn apply_general_rules(pages: Vec<PageSettings>, rules: &[GeneralRule]) -> Vec<PageSettings> {
    pages
        .into_iter()
        .map(|page| {
            rules.iter().fold(page, |page, rule| {
                if rule.matches(page.url()) {
                    page.merge(rule)
                } else {
                    page
                }
            })
        })
        .collect()
}
