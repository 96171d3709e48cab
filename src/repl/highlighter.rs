use crate::engine::registry::builtins;
use lazy_static::lazy_static;
use owo_colors::OwoColorize;
use regex::Regex;
use rustyline::Context;
use rustyline::completion::Completer;
use rustyline::highlight::Highlighter;
use rustyline_derive::{Helper, Hinter, Validator};
use std::borrow::Cow::{self, Owned};

lazy_static! {
    // Tried in order at each position of the argument part of a line.
    static ref STRING_RE: Regex = Regex::new(r#"^"([^"\\]|\\.)*"?"#).unwrap();
    static ref BOOLEAN_RE: Regex = Regex::new(r"^(true|false)\b").unwrap();
    static ref NUMBER_RE: Regex = Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?").unwrap();
    static ref PARENS_RE: Regex = Regex::new(r"^[()]").unwrap();
    static ref OTHER_RE: Regex = Regex::new(r#"^[^\s()"]+"#).unwrap();
    static ref LEADING_ALIAS_RE: Regex = Regex::new(r"^(\s*)(\S+)").unwrap();
}

#[derive(Clone, Copy)]
enum Token {
    Str,
    Boolean,
    Number,
    Paren,
    Unknown,
}

fn paint(text: &str, token: Token) -> String {
    match token {
        Token::Str => text.green().to_string(),
        Token::Boolean => text.yellow().to_string(),
        Token::Number => text.magenta().to_string(),
        Token::Paren => text.blue().to_string(),
        Token::Unknown => text.red().to_string(),
    }
}

fn paint_alias(alias: &str) -> String {
    if builtins().get(alias).is_some() {
        alias.cyan().bold().to_string()
    } else {
        alias.red().underline().to_string()
    }
}

/// Colors an invocation line: the leading alias by whether it resolves, the
/// rest by literal kind.
pub fn highlight_line(line: &str) -> String {
    let mut out = String::with_capacity(line.len() * 2);
    let mut rest = line;

    if let Some(caps) = LEADING_ALIAS_RE.captures(line) {
        if let (Some(ws), Some(alias)) = (caps.get(1), caps.get(2)) {
            out.push_str(ws.as_str());
            out.push_str(&paint_alias(alias.as_str()));
            rest = &line[alias.end()..];
        }
    }

    let patterns: [(&Regex, Token); 5] = [
        (&*STRING_RE, Token::Str),
        (&*BOOLEAN_RE, Token::Boolean),
        (&*NUMBER_RE, Token::Number),
        (&*PARENS_RE, Token::Paren),
        (&*OTHER_RE, Token::Unknown),
    ];

    while let Some(c) = rest.chars().next() {
        if c.is_whitespace() {
            out.push(c);
            rest = &rest[c.len_utf8()..];
            continue;
        }
        let matched = patterns
            .iter()
            .find_map(|(re, token)| re.find(rest).map(|m| (m.end(), *token)));
        match matched {
            Some((end, token)) if end > 0 => {
                out.push_str(&paint(&rest[..end], token));
                rest = &rest[end..];
            }
            _ => {
                out.push(c);
                rest = &rest[c.len_utf8()..];
            }
        }
    }
    out
}

/// Line-editor helper: alias completion for the first word plus syntax colors.
#[derive(Helper, Hinter, Validator, Default)]
pub struct ReplHelper;

impl ReplHelper {
    pub fn new() -> Self {
        ReplHelper
    }
}

impl Completer for ReplHelper {
    type Candidate = String;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<String>)> {
        Ok(complete_alias(line, pos))
    }
}

/// Completes the alias under the cursor; only the first word is an alias.
pub(crate) fn complete_alias(line: &str, pos: usize) -> (usize, Vec<String>) {
    let before = &line[..pos];
    let start = before.len() - before.trim_start().len();
    let prefix = &before[start..];
    if prefix.chars().any(char::is_whitespace) {
        return (pos, Vec::new());
    }
    let candidates = builtins()
        .aliases()
        .into_iter()
        .filter(|alias| alias.starts_with(prefix))
        .map(str::to_string)
        .collect();
    (start, candidates)
}

impl Highlighter for ReplHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        Owned(highlight_line(line))
    }

    fn highlight_char(&self, line: &str, _pos: usize, _forced: bool) -> bool {
        !line.is_empty()
    }
}
