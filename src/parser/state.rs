use std::fmt;
use std::rc::Rc;

use crate::token::Token;

/// Zero-based (line, token) cursor into a line-partitioned token buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub index: usize,
}

/// A labelled parse failure with enough position data to render a caret
/// message without re-reading the original source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFailure {
    pub label: String,
    pub message: String,
    /// Snapshot of the failing line's tokens.
    pub line: Vec<Token>,
    pub position: Position,
}

impl ParseFailure {
    pub fn new(label: impl Into<String>, message: impl Into<String>, at: &InputState) -> Self {
        Self {
            label: label.into(),
            message: message.into(),
            line: at.current_line().to_vec(),
            position: at.position(),
        }
    }
}

impl fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.line.iter().map(Token::to_string).collect();
        let caret_offset: usize = rendered
            .iter()
            .take(self.position.index)
            .map(|tok| tok.len() + 1)
            .sum();
        writeln!(
            f,
            "line {}, token {}: error parsing {}",
            self.position.line, self.position.index, self.label
        )?;
        writeln!(f, "  {}", rendered.join(" "))?;
        write!(f, "  {}^ {}", " ".repeat(caret_offset), self.message)
    }
}

impl std::error::Error for ParseFailure {}

pub type ParseResult<T> = Result<(T, InputState), ParseFailure>;

/// Immutable parser input: a shared line-partitioned token buffer plus a
/// cursor. Cloning is cheap (the buffer is behind an `Rc`), so state is
/// threaded functionally and a failed alternative resumes from whatever
/// snapshot its caller kept.
#[derive(Debug, Clone)]
pub struct InputState {
    lines: Rc<Vec<Vec<Token>>>,
    position: Position,
}

impl InputState {
    /// Build input from lines that were already split by the caller.
    pub fn new(lines: Vec<Vec<Token>>) -> Self {
        Self {
            lines: Rc::new(lines),
            position: Position { line: 0, index: 0 },
        }
    }

    /// Build input from a flat token stream, splitting at `Newline`
    /// boundaries and stopping at the `End` marker. Terminators are
    /// consumed as separators; a trailing terminator does not open an
    /// extra empty line.
    pub fn from_tokens(tokens: Vec<Token>) -> Self {
        let mut lines = Vec::new();
        let mut current = Vec::new();
        for tok in tokens {
            match tok {
                Token::Newline => lines.push(std::mem::take(&mut current)),
                Token::End => break,
                other => current.push(other),
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
        Self::new(lines)
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// The same buffer with the cursor planted at the start of `line`.
    pub fn at_line(&self, line: usize) -> Self {
        Self {
            lines: Rc::clone(&self.lines),
            position: Position { line, index: 0 },
        }
    }

    /// Tokens of the line under the cursor; empty once past the last line.
    pub fn current_line(&self) -> &[Token] {
        self.lines
            .get(self.position.line)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Pull one token, yielding the advanced state alongside it.
    ///
    /// Within a line this steps the token index; at a line boundary it
    /// synthesizes a `Newline` and moves to the next line; past the last
    /// token of the last line it returns `None` with the state unchanged,
    /// idempotently. N lines thus yield exactly N-1 synthesized
    /// terminators.
    pub fn next_token(&self) -> (InputState, Option<Token>) {
        let Position { line, index } = self.position;
        if line >= self.lines.len() {
            return (self.clone(), None);
        }
        let tokens = &self.lines[line];
        if index < tokens.len() {
            let advanced = Self {
                lines: Rc::clone(&self.lines),
                position: Position {
                    line,
                    index: index + 1,
                },
            };
            (advanced, Some(tokens[index].clone()))
        } else if line + 1 < self.lines.len() {
            let advanced = Self {
                lines: Rc::clone(&self.lines),
                position: Position {
                    line: line + 1,
                    index: 0,
                },
            };
            (advanced, Some(Token::Newline))
        } else {
            (self.clone(), None)
        }
    }
}

pub trait Parser<T> {
    fn parse(&self, input: InputState) -> ParseResult<T>;
}

// Allow closures to be parsers
impl<T, F: Fn(InputState) -> ParseResult<T>> Parser<T> for F {
    fn parse(&self, input: InputState) -> ParseResult<T> {
        self(input)
    }
}
