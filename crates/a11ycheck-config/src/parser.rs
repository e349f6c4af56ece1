//! Line-oriented parser for configuration scripts.
//!
//! Scripts are processed one line at a time through a small state machine:
//! the current state decides which declarations a line may contain, so the
//! vocabulary stays scope-sensitive by construction. `page` and
//! `for_pages_matching` blocks admit only `skip_standard`; hook bodies are
//! captured verbatim without interpretation.
//!
//! Declarations have the shape `name`, `name(arg)`, or `name(arg) { ... }`.
//! Arguments are `"..."` strings or `/.../` patterns. A block either opens
//! multi-line (nothing after `{`) or must close with `}` on the same line.

use std::mem;

use crate::ast::{HookStmt, MatchStmt, PageStmt, SkipStmt, Statement};
use crate::error::ParseError;
use crate::pattern::Pattern;

/// Parses a configuration script into statements in textual order.
pub fn parse(source: &str) -> Result<Vec<Statement>, ParseError> {
    let mut parser = Parser::new();
    for (index, raw) in source.lines().enumerate() {
        parser.process_line(index + 1, raw)?;
    }
    parser.finish()
}

/// Which block the parser is currently inside, if any.
enum ParserState {
    /// Top level: hook and page declarations.
    Root,
    /// Inside a hook block, collecting raw command lines.
    Hook {
        kind: HookKind,
        commands: Vec<String>,
        line: usize,
    },
    /// Inside a page or rule block, collecting skip declarations.
    Page {
        target: PageTarget,
        skips: Vec<SkipStmt>,
        line: usize,
    },
}

#[derive(Clone, Copy)]
enum HookKind {
    Before,
    After,
}

enum PageTarget {
    /// Literal URL from `page(...)`.
    Url(String),
    /// Pattern from `for_pages_matching(...)`.
    Pattern(Pattern),
}

struct Parser {
    statements: Vec<Statement>,
    state: ParserState,
}

impl Parser {
    fn new() -> Self {
        Parser {
            statements: Vec::new(),
            state: ParserState::Root,
        }
    }

    fn finish(self) -> Result<Vec<Statement>, ParseError> {
        match self.state {
            ParserState::Root => Ok(self.statements),
            ParserState::Hook { line, .. } | ParserState::Page { line, .. } => Err(
                ParseError::other(line, "unclosed block: expected `}` before end of file"),
            ),
        }
    }

    fn process_line(&mut self, number: usize, raw: &str) -> Result<(), ParseError> {
        match self.state {
            ParserState::Hook { .. } => {
                self.hook_line(raw);
                Ok(())
            }
            ParserState::Page { .. } => self.page_line(number, raw),
            ParserState::Root => self.root_line(number, raw),
        }
    }

    /// Hook bodies are opaque: everything except the closing `}` is kept
    /// verbatim, with trailing whitespace trimmed and blank lines dropped.
    fn hook_line(&mut self, raw: &str) {
        if raw.trim() == "}" {
            self.close_block();
            return;
        }
        let text = raw.trim_end();
        if text.trim().is_empty() {
            return;
        }
        if let ParserState::Hook { commands, .. } = &mut self.state {
            commands.push(text.to_string());
        }
    }

    fn page_line(&mut self, number: usize, raw: &str) -> Result<(), ParseError> {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(());
        }
        let mut lexer = Lexer::new(number, line);
        if lexer.eat('}') {
            lexer.skip_ws();
            return match lexer.peek() {
                None | Some('#') => {
                    self.close_block();
                    Ok(())
                }
                Some(_) => Err(ParseError::other(number, "unexpected characters after `}`")),
            };
        }
        let skip = skip_call(&mut lexer)?;
        expect_end_of_line(&lexer)?;
        if let ParserState::Page { skips, .. } = &mut self.state {
            skips.push(skip);
        }
        Ok(())
    }

    fn root_line(&mut self, number: usize, raw: &str) -> Result<(), ParseError> {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(());
        }
        let mut lexer = Lexer::new(number, line);
        if lexer.eat('}') {
            return Err(ParseError::other(number, "unmatched `}`"));
        }
        let name = lexer
            .ident()
            .ok_or_else(|| ParseError::other(number, "expected a declaration"))?;
        match name {
            "before_all" => self.hook_decl(HookKind::Before, "before_all", &mut lexer),
            "after_all" => self.hook_decl(HookKind::After, "after_all", &mut lexer),
            "page" => self.page_decl(&mut lexer),
            "for_pages_matching" => self.match_decl(&mut lexer),
            _ => Err(ParseError::unknown_declaration(number, name)),
        }
    }

    fn hook_decl(
        &mut self,
        kind: HookKind,
        name: &str,
        lexer: &mut Lexer,
    ) -> Result<(), ParseError> {
        let number = lexer.number;
        lexer.skip_ws();
        if lexer.peek() == Some('(') {
            return Err(ParseError::other(
                number,
                format!("`{name}` does not take an argument"),
            ));
        }
        if !lexer.eat('{') {
            return Err(ParseError::other(
                number,
                format!("`{name}` requires a `{{ ... }}` block"),
            ));
        }
        let tail = lexer.rest.trim();
        if tail.is_empty() || tail.starts_with('#') {
            self.state = ParserState::Hook {
                kind,
                commands: Vec::new(),
                line: number,
            };
            return Ok(());
        }
        // One-line form: the body runs to the last `}` on the line.
        let Some(position) = tail.rfind('}') else {
            return Err(ParseError::other(
                number,
                format!("expected `}}` to close the one-line `{name}` block"),
            ));
        };
        let body = tail[..position].trim();
        let after = tail[position + 1..].trim();
        if !(after.is_empty() || after.starts_with('#')) {
            return Err(ParseError::other(number, "unexpected characters after `}`"));
        }
        let commands = if body.is_empty() {
            Vec::new()
        } else {
            vec![body.to_string()]
        };
        self.push_hook(kind, commands, number);
        Ok(())
    }

    fn page_decl(&mut self, lexer: &mut Lexer) -> Result<(), ParseError> {
        let number = lexer.number;
        let url = match lexer.call_argument("page")? {
            Arg::Str(url) => url,
            Arg::Regex(_) => {
                return Err(ParseError::other(
                    number,
                    "`page` expects a quoted URL; use `for_pages_matching` for patterns",
                ));
            }
        };
        self.open_page(PageTarget::Url(url), lexer)
    }

    fn match_decl(&mut self, lexer: &mut Lexer) -> Result<(), ParseError> {
        let number = lexer.number;
        let arg = lexer.call_argument("for_pages_matching")?;
        let pattern = pattern_from(arg, number)?;
        self.open_page(PageTarget::Pattern(pattern), lexer)
    }

    fn open_page(&mut self, target: PageTarget, lexer: &mut Lexer) -> Result<(), ParseError> {
        let number = lexer.number;
        lexer.skip_ws();
        match lexer.peek() {
            // Block-less form declares a page with no skips.
            None | Some('#') => {
                self.push_page(target, Vec::new(), number);
                Ok(())
            }
            Some('{') => {
                lexer.bump();
                let tail = lexer.rest.trim_start();
                if tail.is_empty() || tail.starts_with('#') {
                    self.state = ParserState::Page {
                        target,
                        skips: Vec::new(),
                        line: number,
                    };
                    return Ok(());
                }
                // One-line form: skip declarations until `}`.
                let mut skips = Vec::new();
                loop {
                    lexer.skip_ws();
                    match lexer.peek() {
                        Some('}') => {
                            lexer.bump();
                            lexer.skip_ws();
                            return match lexer.peek() {
                                None | Some('#') => {
                                    self.push_page(target, skips, number);
                                    Ok(())
                                }
                                Some(_) => Err(ParseError::other(
                                    number,
                                    "unexpected characters after `}`",
                                )),
                            };
                        }
                        None | Some('#') => {
                            return Err(ParseError::other(
                                number,
                                "expected `}` to close the one-line block",
                            ));
                        }
                        Some(_) => skips.push(skip_call(lexer)?),
                    }
                }
            }
            Some(_) => Err(ParseError::other(
                number,
                format!("unexpected characters after declaration: `{}`", lexer.rest.trim()),
            )),
        }
    }

    /// Closes the current multi-line block and returns to the top level.
    fn close_block(&mut self) {
        match mem::replace(&mut self.state, ParserState::Root) {
            ParserState::Hook { kind, commands, line } => self.push_hook(kind, commands, line),
            ParserState::Page { target, skips, line } => self.push_page(target, skips, line),
            ParserState::Root => {}
        }
    }

    fn push_hook(&mut self, kind: HookKind, commands: Vec<String>, line: usize) {
        let hook = HookStmt { commands, line };
        self.statements.push(match kind {
            HookKind::Before => Statement::BeforeAll(hook),
            HookKind::After => Statement::AfterAll(hook),
        });
    }

    fn push_page(&mut self, target: PageTarget, skips: Vec<SkipStmt>, line: usize) {
        self.statements.push(match target {
            PageTarget::Url(url) => Statement::Page(PageStmt { url, skips, line }),
            PageTarget::Pattern(pattern) => {
                Statement::ForPagesMatching(MatchStmt { pattern, skips, line })
            }
        });
    }
}

/// Parses a `skip_standard(...)` call. Any other identifier is outside the
/// page-scope vocabulary, including top-level verbs.
fn skip_call(lexer: &mut Lexer) -> Result<SkipStmt, ParseError> {
    let number = lexer.number;
    let name = lexer
        .ident()
        .ok_or_else(|| ParseError::other(number, "expected a declaration"))?;
    if name != "skip_standard" {
        return Err(ParseError::unknown_declaration(number, name));
    }
    let arg = lexer.call_argument("skip_standard")?;
    let pattern = pattern_from(arg, number)?;
    lexer.skip_ws();
    if lexer.peek() == Some('{') {
        return Err(ParseError::other(
            number,
            "`skip_standard` does not take a block",
        ));
    }
    Ok(SkipStmt {
        pattern,
        line: number,
    })
}

fn expect_end_of_line(lexer: &Lexer) -> Result<(), ParseError> {
    let rest = lexer.rest.trim();
    if rest.is_empty() || rest.starts_with('#') {
        Ok(())
    } else {
        Err(ParseError::other(
            lexer.number,
            format!("unexpected characters after declaration: `{rest}`"),
        ))
    }
}

fn pattern_from(arg: Arg, number: usize) -> Result<Pattern, ParseError> {
    match arg {
        Arg::Str(literal) => Ok(Pattern::Literal(literal)),
        Arg::Regex(source) => Pattern::regex(&source)
            .map_err(|error| ParseError::other(number, format!("invalid pattern /{source}/: {error}"))),
    }
}

/// A lexed call argument, before pattern compilation.
enum Arg {
    Str(String),
    Regex(String),
}

/// Character-level scanner over a single line.
struct Lexer<'a> {
    rest: &'a str,
    number: usize,
}

impl<'a> Lexer<'a> {
    fn new(number: usize, line: &'a str) -> Self {
        Lexer { rest: line, number }
    }

    fn peek(&self) -> Option<char> {
        self.rest.chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.rest = &self.rest[c.len_utf8()..];
        Some(c)
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn skip_ws(&mut self) {
        self.rest = self.rest.trim_start();
    }

    /// Scans an identifier: ASCII letters, digits and `_`, not starting with
    /// a digit.
    fn ident(&mut self) -> Option<&'a str> {
        let mut length = 0;
        for (index, c) in self.rest.char_indices() {
            let valid = if index == 0 {
                c.is_ascii_alphabetic() || c == '_'
            } else {
                c.is_ascii_alphanumeric() || c == '_'
            };
            if !valid {
                break;
            }
            length = index + c.len_utf8();
        }
        if length == 0 {
            return None;
        }
        let (name, rest) = self.rest.split_at(length);
        self.rest = rest;
        Some(name)
    }

    /// Parses the required `(...)` argument of `name`.
    fn call_argument(&mut self, name: &str) -> Result<Arg, ParseError> {
        self.skip_ws();
        if !self.eat('(') {
            return Err(ParseError::other(
                self.number,
                format!("`{name}` expects an argument in parentheses"),
            ));
        }
        self.skip_ws();
        let arg = match self.peek() {
            Some('"') => self.string_literal()?,
            Some('/') => self.pattern_literal()?,
            _ => {
                return Err(ParseError::other(
                    self.number,
                    format!("`{name}` expects a quoted string or /pattern/ argument"),
                ));
            }
        };
        self.skip_ws();
        if !self.eat(')') {
            return Err(ParseError::other(
                self.number,
                format!("missing closing `)` after `{name}` argument"),
            ));
        }
        Ok(arg)
    }

    /// `"..."` with `\"` and `\\` escapes. Other backslash sequences are kept
    /// verbatim.
    fn string_literal(&mut self) -> Result<Arg, ParseError> {
        self.bump();
        let mut text = String::new();
        loop {
            match self.bump() {
                None => {
                    return Err(ParseError::other(self.number, "unterminated string literal"));
                }
                Some('"') => return Ok(Arg::Str(text)),
                Some('\\') => match self.bump() {
                    Some('"') => text.push('"'),
                    Some('\\') => text.push('\\'),
                    Some(c) => {
                        text.push('\\');
                        text.push(c);
                    }
                    None => {
                        return Err(ParseError::other(
                            self.number,
                            "unterminated string literal",
                        ));
                    }
                },
                Some(c) => text.push(c),
            }
        }
    }

    /// `/.../` with `\/` escaping the delimiter. Other backslash sequences
    /// pass through to the regex engine.
    fn pattern_literal(&mut self) -> Result<Arg, ParseError> {
        self.bump();
        let mut source = String::new();
        loop {
            match self.bump() {
                None => {
                    return Err(ParseError::other(
                        self.number,
                        "unterminated /pattern/ literal",
                    ));
                }
                Some('/') => return Ok(Arg::Regex(source)),
                Some('\\') => match self.bump() {
                    Some('/') => source.push('/'),
                    Some(c) => {
                        source.push('\\');
                        source.push(c);
                    }
                    None => {
                        return Err(ParseError::other(
                            self.number,
                            "unterminated /pattern/ literal",
                        ));
                    }
                },
                Some(c) => source.push(c),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseErrorKind;

    fn unknown_name(error: &ParseError) -> &str {
        match error.kind() {
            ParseErrorKind::UnknownDeclaration { name } => name,
            other => panic!("expected unknown declaration, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_source_has_no_statements() {
        assert!(parse("").unwrap().is_empty());
        assert!(parse("\n\n  \n").unwrap().is_empty());
    }

    #[test]
    fn test_comment_only_source_has_no_statements() {
        let source = "# configuration for example.com\n  # nothing yet\n";
        assert!(parse(source).unwrap().is_empty());
    }

    #[test]
    fn test_page_without_block() {
        let statements = parse("page(\"http://example.com/\")\n").unwrap();
        assert_eq!(statements.len(), 1);
        match &statements[0] {
            Statement::Page(page) => {
                assert_eq!(page.url, "http://example.com/");
                assert!(page.skips.is_empty());
                assert_eq!(page.line, 1);
            }
            other => panic!("expected page, got {other:?}"),
        }
    }

    #[test]
    fn test_page_block_collects_skips_in_order() {
        let source = "page(\"/home\") {\n  skip_standard(\"tab_index\")\n  skip_standard(/heading/)\n}\n";
        let statements = parse(source).unwrap();
        match &statements[0] {
            Statement::Page(page) => {
                assert_eq!(page.skips.len(), 2);
                assert_eq!(page.skips[0].pattern, Pattern::from("tab_index"));
                assert_eq!(page.skips[0].line, 2);
                assert_eq!(page.skips[1].pattern, Pattern::regex("heading").unwrap());
            }
            other => panic!("expected page, got {other:?}"),
        }
    }

    #[test]
    fn test_one_line_page_block() {
        let statements = parse("page(\"/a\") { skip_standard(\"x\") }\n").unwrap();
        match &statements[0] {
            Statement::Page(page) => {
                assert_eq!(page.skips.len(), 1);
                assert_eq!(page.skips[0].pattern, Pattern::from("x"));
            }
            other => panic!("expected page, got {other:?}"),
        }
    }

    #[test]
    fn test_one_line_page_block_with_several_skips() {
        let statements =
            parse("page(\"/a\") { skip_standard(\"x\") skip_standard(/y/) }\n").unwrap();
        match &statements[0] {
            Statement::Page(page) => {
                assert_eq!(page.skips.len(), 2);
                assert_eq!(page.skips[0].pattern, Pattern::from("x"));
                assert_eq!(page.skips[1].pattern, Pattern::regex("y").unwrap());
            }
            other => panic!("expected page, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_one_line_block() {
        let statements = parse("page(\"/a\") {}\n").unwrap();
        match &statements[0] {
            Statement::Page(page) => assert!(page.skips.is_empty()),
            other => panic!("expected page, got {other:?}"),
        }
    }

    #[test]
    fn test_unclosed_one_line_block_is_an_error() {
        let error = parse("page(\"/a\") { skip_standard(\"x\")\n").unwrap_err();
        assert_eq!(error.line(), 1);
        assert!(error.message().contains("expected `}`"));
    }

    #[test]
    fn test_for_pages_matching_with_regex() {
        let statements = parse("for_pages_matching(/news/) {\n  skip_standard(\"a\")\n}\n").unwrap();
        match &statements[0] {
            Statement::ForPagesMatching(rule) => {
                assert_eq!(rule.pattern, Pattern::regex("news").unwrap());
                assert_eq!(rule.skips.len(), 1);
            }
            other => panic!("expected rule, got {other:?}"),
        }
    }

    #[test]
    fn test_for_pages_matching_with_string() {
        let statements = parse("for_pages_matching(\"/widgets/\")\n").unwrap();
        match &statements[0] {
            Statement::ForPagesMatching(rule) => {
                assert_eq!(rule.pattern, Pattern::from("/widgets/"));
            }
            other => panic!("expected rule, got {other:?}"),
        }
    }

    #[test]
    fn test_hook_body_is_captured_verbatim() {
        let source = "before_all {\n  ./scripts/start-server --port 4000\n\n  sleep 2\n}\n";
        let statements = parse(source).unwrap();
        match &statements[0] {
            Statement::BeforeAll(hook) => {
                assert_eq!(
                    hook.commands,
                    ["  ./scripts/start-server --port 4000", "  sleep 2"]
                );
                assert_eq!(hook.line, 1);
            }
            other => panic!("expected hook, got {other:?}"),
        }
    }

    #[test]
    fn test_hook_body_keeps_braces_and_comments() {
        let source = "after_all {\n  echo \"{done}\"\n  # not a comment here\n}\n";
        let statements = parse(source).unwrap();
        match &statements[0] {
            Statement::AfterAll(hook) => {
                assert_eq!(hook.commands, ["  echo \"{done}\"", "  # not a comment here"]);
            }
            other => panic!("expected hook, got {other:?}"),
        }
    }

    #[test]
    fn test_one_line_hook() {
        let statements = parse("before_all { ./start }\n").unwrap();
        match &statements[0] {
            Statement::BeforeAll(hook) => assert_eq!(hook.commands, ["./start"]),
            other => panic!("expected hook, got {other:?}"),
        }
    }

    #[test]
    fn test_statements_keep_textual_order() {
        let source = "\
page(\"/one\")
for_pages_matching(/two/)
before_all {
  x
}
page(\"/three\")
";
        let statements = parse(source).unwrap();
        let kinds: Vec<&str> = statements
            .iter()
            .map(|s| match s {
                Statement::Page(_) => "page",
                Statement::ForPagesMatching(_) => "rule",
                Statement::BeforeAll(_) => "before",
                Statement::AfterAll(_) => "after",
            })
            .collect();
        assert_eq!(kinds, ["page", "rule", "before", "page"]);
        assert_eq!(statements[2].line(), 3);
    }

    #[test]
    fn test_unknown_top_level_declaration() {
        let error = parse("foo_bar(1)\n").unwrap_err();
        assert_eq!(error.line(), 1);
        assert_eq!(unknown_name(&error), "foo_bar");
        assert_eq!(
            error.message(),
            "`foo_bar` is not part of the configuration language"
        );
    }

    #[test]
    fn test_skip_standard_at_top_level_is_unknown() {
        let error = parse("skip_standard(\"x\")\n").unwrap_err();
        assert_eq!(unknown_name(&error), "skip_standard");
    }

    #[test]
    fn test_page_inside_page_is_unknown() {
        let error = parse("page(\"/a\") {\n  page(\"/b\")\n}\n").unwrap_err();
        assert_eq!(error.line(), 2);
        assert_eq!(unknown_name(&error), "page");
    }

    #[test]
    fn test_unknown_declaration_inside_page() {
        let error = parse("page(\"/a\") {\n  skip_standards(\"x\")\n}\n").unwrap_err();
        assert_eq!(error.line(), 2);
        assert_eq!(unknown_name(&error), "skip_standards");
    }

    #[test]
    fn test_uppercase_identifier_is_unknown_not_garbage() {
        let error = parse("Page(\"/a\")\n").unwrap_err();
        assert_eq!(unknown_name(&error), "Page");
    }

    #[test]
    fn test_page_rejects_regex_argument() {
        let error = parse("page(/news/)\n").unwrap_err();
        assert_eq!(error.line(), 1);
        assert!(error.message().contains("`page` expects a quoted URL"));
    }

    #[test]
    fn test_page_requires_an_argument() {
        let error = parse("page\n").unwrap_err();
        assert!(error.message().contains("expects an argument"));
    }

    #[test]
    fn test_hooks_reject_arguments() {
        let error = parse("before_all(\"x\") {\n}\n").unwrap_err();
        assert_eq!(error.message(), "`before_all` does not take an argument");
    }

    #[test]
    fn test_hooks_require_a_block() {
        let error = parse("after_all\n").unwrap_err();
        assert!(error.message().contains("requires a `{ ... }` block"));
    }

    #[test]
    fn test_skip_standard_rejects_a_block() {
        let error = parse("page(\"/a\") {\n  skip_standard(\"x\") {\n}\n").unwrap_err();
        assert_eq!(error.line(), 2);
        assert_eq!(error.message(), "`skip_standard` does not take a block");
    }

    #[test]
    fn test_unterminated_string() {
        let error = parse("page(\"/a\n").unwrap_err();
        assert_eq!(error.message(), "unterminated string literal");
    }

    #[test]
    fn test_unterminated_pattern() {
        let error = parse("for_pages_matching(/news\n").unwrap_err();
        assert_eq!(error.message(), "unterminated /pattern/ literal");
    }

    #[test]
    fn test_missing_closing_paren() {
        let error = parse("page(\"/a\"\n").unwrap_err();
        assert!(error.message().contains("missing closing `)`"));
    }

    #[test]
    fn test_invalid_regex_reports_source() {
        let error = parse("for_pages_matching(/[bad/)\n").unwrap_err();
        assert!(error.message().starts_with("invalid pattern /[bad/:"));
    }

    #[test]
    fn test_unmatched_close_brace() {
        let error = parse("}\n").unwrap_err();
        assert_eq!(error.line(), 1);
        assert_eq!(error.message(), "unmatched `}`");
    }

    #[test]
    fn test_unclosed_block_reports_opening_line() {
        let error = parse("page(\"/one\")\npage(\"/two\") {\n  skip_standard(\"x\")\n").unwrap_err();
        assert_eq!(error.line(), 2);
        assert!(error.message().contains("unclosed block"));
    }

    #[test]
    fn test_string_escapes() {
        let statements = parse("page(\"/say-\\\"hi\\\"\")\n").unwrap();
        match &statements[0] {
            Statement::Page(page) => assert_eq!(page.url, "/say-\"hi\""),
            other => panic!("expected page, got {other:?}"),
        }
    }

    #[test]
    fn test_pattern_escapes_slash_and_keeps_classes() {
        let statements = parse("for_pages_matching(/a\\/b\\d+/)\n").unwrap();
        match &statements[0] {
            Statement::ForPagesMatching(rule) => {
                assert_eq!(rule.pattern.as_str(), "a/b\\d+");
                assert!(rule.pattern.matches("xa/b12y"));
            }
            other => panic!("expected rule, got {other:?}"),
        }
    }

    #[test]
    fn test_trailing_comments_are_ignored() {
        let source = "\
page(\"/home\") { # homepage
  skip_standard(\"tab_index\") # noisy widget
} # done
";
        let statements = parse(source).unwrap();
        match &statements[0] {
            Statement::Page(page) => {
                assert_eq!(page.skips.len(), 1);
                assert_eq!(page.skips[0].pattern, Pattern::from("tab_index"));
            }
            other => panic!("expected page, got {other:?}"),
        }
    }

    #[test]
    fn test_hash_inside_string_is_not_a_comment() {
        let statements = parse("page(\"/page#section\")\n").unwrap();
        match &statements[0] {
            Statement::Page(page) => assert_eq!(page.url, "/page#section"),
            other => panic!("expected page, got {other:?}"),
        }
    }

    #[test]
    fn test_trailing_junk_after_declaration() {
        let error = parse("page(\"/a\") extra\n").unwrap_err();
        assert!(error.message().contains("unexpected characters"));
    }
}
