//! # armlet — parser front end for an ARM-flavoured RISC assembler
//!
//! armlet turns a pre-lexed stream of assembly tokens into a typed
//! instruction AST. It is a monadic parser-combinator engine: a parser is
//! an opaque function from an immutable input state to an outcome, and the
//! instruction grammar is composed entirely from a small combinator
//! algebra.
//!
//! ## Pipeline Flow
//!
//! ```text
//! Token Stream (from an external lexer)
//!     ↓
//! [InputState] → line-partitioned buffer + (line, token) cursor
//!     ↓
//! [Combinators] → sequencing, alternation, mapping, optionality,
//!                 forward-declared recursion
//!     ↓
//! [Grammar] → per-field parsers composed into instruction shapes
//!     ↓
//! Instruction AST, one node per source line (or a positioned failure)
//! ```
//!
//! ## Key Design Decisions
//!
//! - **Failures are values.** A parse failure carries a label, a message
//!   and a snapshot of the failing line, enough to render a caret-style
//!   error without re-reading source text. Only alternation inspects the
//!   success/failure tag; nothing throws.
//! - **Immutable state threading.** The cursor is value data; a failed
//!   alternative resumes from the snapshot its caller kept, so failing
//!   parsers never consume input.
//! - **Forward references.** The top-level instruction rule is declared
//!   through a write-once cell and fixed up after all shape parsers exist;
//!   running it earlier is a construction bug and panics.
//!
//! ## Module Structure
//!
//! - [`token`] - the token vocabulary produced by the external lexer
//! - [`ast`] - typed instruction nodes, one variant per shape
//! - [`parser`] - input state, combinator algebra and the grammar
//!
//! ## Getting Started
//!
//! ```
//! use armlet::parser::parse_line;
//! use armlet::token::{MoveOp, Register, Token};
//!
//! let line = vec![
//!     Token::Move(MoveOp::Mov),
//!     Token::Reg(Register::R0),
//!     Token::Comma,
//!     Token::Reg(Register::R1),
//! ];
//! let instruction = parse_line(line).expect("a well-formed move");
//! assert_eq!(instruction.to_string(), "MOV R0, R1");
//! ```

pub mod ast;
pub mod parser;
pub mod token;
