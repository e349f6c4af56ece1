//! Typed statements for the configuration language.
//!
//! The parser lowers a script to a flat list of [`Statement`]s in textual
//! order; the evaluator walks that list. Each statement remembers the 1-based
//! line of its opening declaration for error reporting.

use crate::pattern::Pattern;

/// One top-level declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    BeforeAll(HookStmt),
    AfterAll(HookStmt),
    Page(PageStmt),
    ForPagesMatching(MatchStmt),
}

impl Statement {
    /// Line of the opening declaration.
    pub fn line(&self) -> usize {
        match self {
            Statement::BeforeAll(hook) | Statement::AfterAll(hook) => hook.line,
            Statement::Page(page) => page.line,
            Statement::ForPagesMatching(rule) => rule.line,
        }
    }
}

/// `before_all { ... }` or `after_all { ... }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookStmt {
    /// Body lines, captured verbatim.
    pub commands: Vec<String>,
    pub line: usize,
}

/// `page("...") { ... }`.
#[derive(Debug, Clone, PartialEq)]
pub struct PageStmt {
    pub url: String,
    pub skips: Vec<SkipStmt>,
    pub line: usize,
}

/// `for_pages_matching(...) { ... }`.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchStmt {
    pub pattern: Pattern,
    pub skips: Vec<SkipStmt>,
    pub line: usize,
}

/// `skip_standard(...)` inside a page or rule block.
#[derive(Debug, Clone, PartialEq)]
pub struct SkipStmt {
    pub pattern: Pattern,
    pub line: usize,
}
