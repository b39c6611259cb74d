//! Instruction grammar for the armlet parser.
//!
//! Each opcode class has one shape parser built from the field parsers in
//! [`fields`]; the top-level [`instruction`] parser is assembled through a
//! forward reference fixed up to a `choice` over all nine shapes, so adding
//! a shape is one new rule plus one more arm in the choice.

pub mod fields;

use crate::ast::{
    Adr, BlockTransfer, Branch, Data, Instruction, Move, Rrx, Shift, Test, Transfer,
};
use crate::token::Token;

use super::combinators::{choice, expect, forward, many, optional, BoxedParser};

use fields::{
    block_op, comma, condition, data_op, literal, memory_op, move_op, operand, register,
    register_comma, set_flags, shift_op, test_op,
};

/// instruction_1 := move_op "S"? cond? reg "," reg
pub fn move_instruction() -> BoxedParser<Instruction> {
    let shape = move_op() + optional(set_flags()) + optional(condition()) + register_comma()
        + register();
    (shape
        >> |((((op, flags), cond), dest), src)| {
            Instruction::Move(Move {
                op,
                set_flags: flags.is_some(),
                cond,
                dest,
                src,
            })
        })
    .label("Instruction Type 1")
}

/// instruction_2 := "ADR" cond? reg "," literal
pub fn adr_instruction() -> BoxedParser<Instruction> {
    let shape = expect(Token::Adr) * optional(condition()) + register_comma() + literal();
    (shape
        >> |((cond, dest), target)| Instruction::Adr(Adr { cond, dest, target }))
    .label("Instruction Type 2")
}

/// instruction_3 := data_op "S"? cond? reg "," reg "," operand
pub fn data_instruction() -> BoxedParser<Instruction> {
    let shape = data_op() + optional(set_flags()) + optional(condition()) + register_comma()
        + register_comma()
        + operand();
    (shape
        >> |(((((op, flags), cond), dest), first), second)| {
            Instruction::Data(Data {
                op,
                set_flags: flags.is_some(),
                cond,
                dest,
                first,
                second,
            })
        })
    .label("Instruction Type 3")
}

/// instruction_4 := shift_op "S"? cond? reg "," reg "," operand
pub fn shift_instruction() -> BoxedParser<Instruction> {
    let shape = shift_op() + optional(set_flags()) + optional(condition()) + register_comma()
        + register_comma()
        + operand();
    (shape
        >> |(((((op, flags), cond), dest), src), amount)| {
            Instruction::Shift(Shift {
                op,
                set_flags: flags.is_some(),
                cond,
                dest,
                src,
                amount,
            })
        })
    .label("Instruction Type 4")
}

/// instruction_5 := "RRX" "S"? cond? reg "," reg
pub fn rrx_instruction() -> BoxedParser<Instruction> {
    let shape =
        expect(Token::Rrx) * optional(set_flags()) + optional(condition()) + register_comma()
            + register();
    (shape
        >> |(((flags, cond), dest), src)| {
            Instruction::Rrx(Rrx {
                set_flags: flags.is_some(),
                cond,
                dest,
                src,
            })
        })
    .label("Instruction Type 5")
}

/// instruction_6 := test_op cond? reg "," operand
pub fn test_instruction() -> BoxedParser<Instruction> {
    let shape = test_op() + optional(condition()) + register_comma() + operand();
    (shape
        >> |(((op, cond), first), second)| Instruction::Test(Test { op, cond, first, second }))
    .label("Instruction Type 6")
}

/// instruction_7 := memory_op cond? reg "," reg ("," literal)?
pub fn transfer_instruction() -> BoxedParser<Instruction> {
    let offset = optional(comma() * literal());
    let shape = memory_op() + optional(condition()) + register_comma() + register() + offset;
    (shape
        >> |((((op, cond), data), base), offset)| {
            Instruction::Transfer(Transfer {
                op,
                cond,
                data,
                base,
                offset,
            })
        })
    .label("Instruction Type 7")
}

/// instruction_8 := block_op cond? reg "," reg ("," reg)*
pub fn block_instruction() -> BoxedParser<Instruction> {
    let register_list = register() + many(comma() * register());
    let shape = block_op() + optional(condition()) + register_comma() + register_list;
    (shape
        >> |(((op, cond), base), (first, rest))| {
            let mut registers = vec![first];
            registers.extend(rest);
            Instruction::Block(BlockTransfer {
                op,
                cond,
                base,
                registers,
            })
        })
    .label("Instruction Type 8")
}

/// instruction_9 := "BL" cond? literal
pub fn branch_instruction() -> BoxedParser<Instruction> {
    let shape = expect(Token::Bl) * optional(condition()) + literal();
    (shape >> |(cond, target)| Instruction::Branch(Branch { cond, target }))
        .label("Instruction Type 9")
}

/// The top-level instruction parser: a forward reference fixed up to the
/// choice over all wired instruction shapes.
pub fn instruction() -> BoxedParser<Instruction> {
    let (instruction, instruction_ref) = forward("Instruction");
    instruction_ref.define(
        choice(vec![
            move_instruction(),
            adr_instruction(),
            data_instruction(),
            shift_instruction(),
            rrx_instruction(),
            test_instruction(),
            transfer_instruction(),
            block_instruction(),
            branch_instruction(),
        ])
        .label("Instruction"),
    );
    instruction
}
