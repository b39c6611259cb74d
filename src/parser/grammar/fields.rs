//! Per-field token parsers for the instruction grammar.
//!
//! Each parser matches one token class, unwraps the matched token to its
//! payload and carries a descriptive label for diagnostics.

use crate::ast::Operand;
use crate::token::{BlockOp, Condition, DataOp, MemoryOp, MoveOp, Register, ShiftOp, TestOp, Token};

use crate::parser::combinators::{expect, satisfy, BoxedParser};
use crate::parser::state::{InputState, ParseFailure};

/// Any of the sixteen register tokens.
pub fn register() -> BoxedParser<Register> {
    satisfy(|tok| matches!(tok, Token::Reg(_)), "Register") >> |tok| match tok {
        Token::Reg(r) => r,
        _ => unreachable!(),
    }
}

/// Any of the eighteen condition-code tokens, duplicate spellings included.
pub fn condition() -> BoxedParser<Condition> {
    satisfy(|tok| matches!(tok, Token::Cond(_)), "Conditional Code") >> |tok| match tok {
        Token::Cond(c) => c,
        _ => unreachable!(),
    }
}

pub fn comma() -> BoxedParser<Token> {
    expect(Token::Comma)
}

/// The `S` update-flags suffix.
pub fn set_flags() -> BoxedParser<Token> {
    expect(Token::SetFlags)
}

/// An immediate integer literal.
pub fn literal() -> BoxedParser<i32> {
    satisfy(|tok| matches!(tok, Token::Literal(_)), "Literal") >> |tok| match tok {
        Token::Literal(n) => n,
        _ => unreachable!(),
    }
}

/// Class 1 opcodes: MOV, MVN.
pub fn move_op() -> BoxedParser<MoveOp> {
    satisfy(|tok| matches!(tok, Token::Move(_)), "Opcode Class 1") >> |tok| match tok {
        Token::Move(op) => op,
        _ => unreachable!(),
    }
}

/// Class 3 opcodes: ADD, ADC, SUB, SBC, RSB, RSC, AND, EOR, BIC, ORR.
pub fn data_op() -> BoxedParser<DataOp> {
    satisfy(|tok| matches!(tok, Token::Data(_)), "Opcode Class 3") >> |tok| match tok {
        Token::Data(op) => op,
        _ => unreachable!(),
    }
}

/// Class 4 opcodes: LSL, LSR, ASR, ROR.
pub fn shift_op() -> BoxedParser<ShiftOp> {
    satisfy(|tok| matches!(tok, Token::Shift(_)), "Opcode Class 4") >> |tok| match tok {
        Token::Shift(op) => op,
        _ => unreachable!(),
    }
}

/// Class 6 opcodes: CMP, CMN, TST, TEQ.
pub fn test_op() -> BoxedParser<TestOp> {
    satisfy(|tok| matches!(tok, Token::Test(_)), "Opcode Class 6") >> |tok| match tok {
        Token::Test(op) => op,
        _ => unreachable!(),
    }
}

/// Class 7 opcodes: LDR, STR.
pub fn memory_op() -> BoxedParser<MemoryOp> {
    satisfy(|tok| matches!(tok, Token::Memory(_)), "Opcode Class 7") >> |tok| match tok {
        Token::Memory(op) => op,
        _ => unreachable!(),
    }
}

/// Class 8 opcodes: LDM, STM.
pub fn block_op() -> BoxedParser<BlockOp> {
    satisfy(|tok| matches!(tok, Token::Block(_)), "Opcode Class 8") >> |tok| match tok {
        Token::Block(op) => op,
        _ => unreachable!(),
    }
}

/// A register followed by a comma; the comma is discarded.
pub fn register_comma() -> BoxedParser<Register> {
    (register() - comma()).label("Register followed by Comma")
}

/// A flexible operand: register or immediate literal.
pub fn operand() -> BoxedParser<Operand> {
    let reg = register() >> Operand::Register;
    let lit = literal() >> Operand::Literal;
    (reg | lit).label("Operand")
}

/// Matches the synthesized line terminator, or true end of input on the
/// last line. A well-formed line must be fully consumed.
pub fn end_of_line() -> BoxedParser<()> {
    BoxedParser::new(
        move |input: InputState| match input.next_token() {
            (rest, Some(Token::Newline)) => Ok(((), rest)),
            (rest, None) => Ok(((), rest)),
            (_, Some(tok)) => Err(ParseFailure::new(
                "End of Line",
                format!("unexpected {}", tok.describe()),
                &input,
            )),
        },
        "End of Line",
    )
}
