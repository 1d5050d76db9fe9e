//! Lightweight JS/TS scanner.
//!
//! Produces the candidate references the rule validates: string literals,
//! template-literal static segments, identifiers, and `process.env` member
//! accesses. Comments never produce candidates. This is a token-level scan,
//! not a full parse; the four detection cases only need local context.

use regex::Regex;
use std::iter::Peekable;
use std::str::CharIndices;
use std::sync::OnceLock;

use crate::diagnostic::Span;

/// Prefix that makes an identifier a candidate reference.
pub const VARIABLE_PREFIX: &str = "NEXT_PUBLIC_";

/// How a reference was found in the source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReferenceKind {
    /// A bare identifier starting with `NEXT_PUBLIC_`.
    Identifier,
    /// A matching substring of a string literal.
    StringLiteral,
    /// A matching substring of a template-literal static segment.
    TemplateSegment,
    /// The property of a `process.env.NEXT_PUBLIC_X` access.
    EnvMember,
    /// The string key of a `process.env["NEXT_PUBLIC_X"]` access.
    EnvComputed,
}

/// A `NEXT_PUBLIC_` variable reference found in a source file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reference {
    pub name: String,
    pub kind: ReferenceKind,
    pub span: Span,
}

/// Pattern a variable name must match inside string and template text.
pub fn variable_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"NEXT_PUBLIC_[A-Z0-9_]+").expect("valid regex"))
}

/// All `NEXT_PUBLIC_` references in `source`, in source-position order.
///
/// Each occurrence yields exactly one reference: the property identifier of
/// `process.env.X` is classified as [`ReferenceKind::EnvMember`] rather than
/// doubling as a bare identifier, and the key of `process.env["X"]` is
/// classified as [`ReferenceKind::EnvComputed`] rather than a plain string
/// literal.
pub fn scan_references(source: &str) -> Vec<Reference> {
    let tokens = Scanner::new(source).scan();
    classify(&tokens)
}

#[derive(Debug, PartialEq, Eq)]
enum TokenKind {
    Ident(String),
    Str(String),
    TemplateSegment(String),
    Dot,
    LBracket,
    RBracket,
    Other,
}

#[derive(Debug)]
struct Token {
    kind: TokenKind,
    span: Span,
}

struct Scanner<'a> {
    source: &'a str,
    chars: Peekable<CharIndices<'a>>,
    tokens: Vec<Token>,
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

impl<'a> Scanner<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            tokens: Vec::new(),
        }
    }

    fn scan(mut self) -> Vec<Token> {
        self.scan_code(false);
        self.tokens
    }

    /// Byte offset of the next unconsumed character.
    fn position(&mut self) -> usize {
        self.chars
            .peek()
            .map_or(self.source.len(), |(i, _)| *i)
    }

    fn push(&mut self, kind: TokenKind, start: usize, end: usize) {
        self.tokens.push(Token {
            kind,
            span: Span::new(start, end),
        });
    }

    /// Scan code until the input ends. When `in_interpolation` is set, stop
    /// at the `}` that closes the enclosing `${...}` (tracking nested braces
    /// so object literals inside interpolations don't end it early).
    fn scan_code(&mut self, in_interpolation: bool) {
        let mut brace_depth = 0usize;
        while let Some((i, c)) = self.chars.next() {
            match c {
                c if c.is_whitespace() => {}
                '/' => match self.chars.peek() {
                    Some((_, '/')) => self.skip_line_comment(),
                    Some((_, '*')) => self.skip_block_comment(),
                    _ => self.push(TokenKind::Other, i, i + 1),
                },
                '\'' | '"' => self.scan_string(i, c),
                '`' => self.scan_template(i),
                '{' if in_interpolation => {
                    brace_depth += 1;
                    self.push(TokenKind::Other, i, i + 1);
                }
                '}' if in_interpolation => {
                    if brace_depth == 0 {
                        return;
                    }
                    brace_depth -= 1;
                    self.push(TokenKind::Other, i, i + 1);
                }
                '.' => self.push(TokenKind::Dot, i, i + 1),
                '[' => self.push(TokenKind::LBracket, i, i + 1),
                ']' => self.push(TokenKind::RBracket, i, i + 1),
                c if is_ident_start(c) => self.scan_ident(i),
                _ => self.push(TokenKind::Other, i, i + c.len_utf8()),
            }
        }
    }

    fn skip_line_comment(&mut self) {
        for (_, c) in self.chars.by_ref() {
            if c == '\n' {
                break;
            }
        }
    }

    fn skip_block_comment(&mut self) {
        self.chars.next(); // the '*'
        while let Some((_, c)) = self.chars.next() {
            if c == '*' {
                if let Some((_, '/')) = self.chars.peek() {
                    self.chars.next();
                    break;
                }
            }
        }
    }

    fn scan_ident(&mut self, start: usize) {
        let mut end = self.position();
        while let Some((_, c)) = self.chars.peek() {
            if !is_ident_continue(*c) {
                break;
            }
            self.chars.next();
            end = self.position();
        }
        let name = self.source[start..end].to_string();
        self.push(TokenKind::Ident(name), start, end);
    }

    /// The token's text and span cover the literal's contents, quotes
    /// excluded, so substring match offsets line up with source offsets. An
    /// unterminated literal ends at the newline.
    fn scan_string(&mut self, open: usize, quote: char) {
        let start = open + 1;
        let mut end;
        loop {
            end = self.position();
            match self.chars.next() {
                None => break,
                Some((_, '\\')) => {
                    self.chars.next();
                }
                Some((_, c)) if c == quote => break,
                Some((_, '\n')) => break,
                Some(_) => {}
            }
        }
        let text = self.source[start..end].to_string();
        self.push(TokenKind::Str(text), start, end);
    }

    /// Template literals contribute their static segments. A `${` ends the
    /// current segment and hands control back to code scanning so that
    /// identifiers inside the interpolation are seen too.
    fn scan_template(&mut self, open: usize) {
        let mut seg_start = open + 1;
        loop {
            let here = self.position();
            match self.chars.next() {
                None => {
                    self.push_template_segment(seg_start, here.max(seg_start));
                    return;
                }
                Some((_, '\\')) => {
                    self.chars.next();
                }
                Some((i, '`')) => {
                    self.push_template_segment(seg_start, i);
                    return;
                }
                Some((i, '$')) => {
                    if let Some((_, '{')) = self.chars.peek() {
                        self.push_template_segment(seg_start, i);
                        self.chars.next(); // the '{'
                        self.scan_code(true);
                        seg_start = self.position();
                    }
                }
                Some(_) => {}
            }
        }
    }

    fn push_template_segment(&mut self, start: usize, end: usize) {
        if start < end {
            let text = self.source[start..end].to_string();
            self.push(TokenKind::TemplateSegment(text), start, end);
        }
    }
}

fn classify(tokens: &[Token]) -> Vec<Reference> {
    let pattern = variable_pattern();
    let mut references = Vec::new();

    for (idx, token) in tokens.iter().enumerate() {
        match &token.kind {
            TokenKind::Ident(name) if name.starts_with(VARIABLE_PREFIX) => {
                let kind = if is_env_member(tokens, idx) {
                    ReferenceKind::EnvMember
                } else {
                    ReferenceKind::Identifier
                };
                references.push(Reference {
                    name: name.clone(),
                    kind,
                    span: token.span,
                });
            }
            TokenKind::Str(text) => {
                let kind = if is_env_computed(tokens, idx) {
                    ReferenceKind::EnvComputed
                } else {
                    ReferenceKind::StringLiteral
                };
                push_text_matches(&mut references, pattern, text, token.span.start, kind);
            }
            TokenKind::TemplateSegment(text) => {
                push_text_matches(
                    &mut references,
                    pattern,
                    text,
                    token.span.start,
                    ReferenceKind::TemplateSegment,
                );
            }
            _ => {}
        }
    }

    references
}

fn push_text_matches(
    references: &mut Vec<Reference>,
    pattern: &Regex,
    text: &str,
    offset: usize,
    kind: ReferenceKind,
) {
    for found in pattern.find_iter(text) {
        references.push(Reference {
            name: found.as_str().to_string(),
            kind,
            span: Span::new(offset + found.start(), offset + found.end()),
        });
    }
}

fn ident_is(token: &Token, name: &str) -> bool {
    matches!(&token.kind, TokenKind::Ident(n) if n == name)
}

/// `process` `.` `env` `.` precede the identifier at `idx`.
fn is_env_member(tokens: &[Token], idx: usize) -> bool {
    idx >= 4
        && tokens[idx - 1].kind == TokenKind::Dot
        && ident_is(&tokens[idx - 2], "env")
        && tokens[idx - 3].kind == TokenKind::Dot
        && ident_is(&tokens[idx - 4], "process")
}

/// `process` `.` `env` `[` precede the string at `idx`, and `]` follows it.
fn is_env_computed(tokens: &[Token], idx: usize) -> bool {
    idx >= 4
        && tokens[idx - 1].kind == TokenKind::LBracket
        && ident_is(&tokens[idx - 2], "env")
        && tokens[idx - 3].kind == TokenKind::Dot
        && ident_is(&tokens[idx - 4], "process")
        && matches!(tokens.get(idx + 1), Some(t) if t.kind == TokenKind::RBracket)
}
