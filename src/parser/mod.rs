//! Parser core: combinator algebra, input state and the instruction
//! grammar built on top of it.

pub mod combinators;
pub mod grammar;
pub mod state;

pub use combinators::*;
pub use grammar::*;
pub use state::*;

use crate::ast::Instruction;
use crate::token::Token;

/// Parse one pre-lexed source line into an instruction.
///
/// The whole line must be consumed; trailing tokens after a well-formed
/// instruction are an error.
pub fn parse_line(tokens: Vec<Token>) -> Result<Instruction, ParseFailure> {
    let line_parser = instruction() - fields::end_of_line();
    line_parser
        .parse(InputState::new(vec![tokens]))
        .map(|(parsed, _)| parsed)
}

/// Parse a whole token stream, one instruction per line.
///
/// Lines parse independently: one bad line yields its own failure and does
/// not abort the rest of the stream.
pub fn parse(tokens: Vec<Token>) -> Vec<Result<Instruction, ParseFailure>> {
    let input = InputState::from_tokens(tokens);
    let line_parser = instruction() - fields::end_of_line();
    (0..input.line_count())
        .map(|line| {
            line_parser
                .parse(input.at_line(line))
                .map(|(parsed, _)| parsed)
        })
        .collect()
}
