//! Instruction AST produced by the grammar layer.
//!
//! One variant per instruction shape. Nodes are immutable values built only
//! by successful parses; they own their operands and keep no references
//! back into the token stream.

use std::fmt;

use crate::token::{
    BlockOp, Condition, DataOp, MemoryOp, MoveOp, Register, ShiftOp, TestOp,
};

/// A flexible operand: either a register or an immediate literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    Register(Register),
    Literal(i32),
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Register(r) => write!(f, "{r}"),
            Operand::Literal(n) => write!(f, "#{n}"),
        }
    }
}

/// `MOV|MVN{S}{cond} Rd, Rm`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    pub op: MoveOp,
    pub set_flags: bool,
    pub cond: Option<Condition>,
    pub dest: Register,
    pub src: Register,
}

/// `ADR{cond} Rd, literal`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adr {
    pub cond: Option<Condition>,
    pub dest: Register,
    pub target: i32,
}

/// `ADD|ADC|SUB|SBC|RSB|RSC|AND|EOR|BIC|ORR{S}{cond} Rd, Rn, <op>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Data {
    pub op: DataOp,
    pub set_flags: bool,
    pub cond: Option<Condition>,
    pub dest: Register,
    pub first: Register,
    pub second: Operand,
}

/// `LSL|LSR|ASR|ROR{S}{cond} Rd, Rn, <amount>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shift {
    pub op: ShiftOp,
    pub set_flags: bool,
    pub cond: Option<Condition>,
    pub dest: Register,
    pub src: Register,
    pub amount: Operand,
}

/// `RRX{S}{cond} Rd, Rm` — rotate right through carry, no shift amount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rrx {
    pub set_flags: bool,
    pub cond: Option<Condition>,
    pub dest: Register,
    pub src: Register,
}

/// `CMP|CMN|TST|TEQ{cond} Rn, <op>` — flags-only, no destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Test {
    pub op: TestOp,
    pub cond: Option<Condition>,
    pub first: Register,
    pub second: Operand,
}

/// `LDR|STR{cond} Rt, Rn [, offset]` — register base, optional literal
/// offset. The token domain has no bracket tokens, so the addressing form
/// is flat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transfer {
    pub op: MemoryOp,
    pub cond: Option<Condition>,
    pub data: Register,
    pub base: Register,
    pub offset: Option<i32>,
}

/// `LDM|STM{cond} Rn, Rlist` — base register, then one or more registers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockTransfer {
    pub op: BlockOp,
    pub cond: Option<Condition>,
    pub base: Register,
    pub registers: Vec<Register>,
}

/// `BL{cond} literal` — branch with link to a numeric target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    pub cond: Option<Condition>,
    pub target: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    Move(Move),
    Adr(Adr),
    Data(Data),
    Shift(Shift),
    Rrx(Rrx),
    Test(Test),
    Transfer(Transfer),
    Block(BlockTransfer),
    Branch(Branch),
}

fn write_suffixes(
    f: &mut fmt::Formatter<'_>,
    set_flags: bool,
    cond: &Option<Condition>,
) -> fmt::Result {
    if set_flags {
        f.write_str("S")?;
    }
    if let Some(c) = cond {
        write!(f, "{c}")?;
    }
    Ok(())
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Move(i) => {
                write!(f, "{}", i.op)?;
                write_suffixes(f, i.set_flags, &i.cond)?;
                write!(f, " {}, {}", i.dest, i.src)
            }
            Instruction::Adr(i) => {
                f.write_str("ADR")?;
                write_suffixes(f, false, &i.cond)?;
                write!(f, " {}, #{}", i.dest, i.target)
            }
            Instruction::Data(i) => {
                write!(f, "{}", i.op)?;
                write_suffixes(f, i.set_flags, &i.cond)?;
                write!(f, " {}, {}, {}", i.dest, i.first, i.second)
            }
            Instruction::Shift(i) => {
                write!(f, "{}", i.op)?;
                write_suffixes(f, i.set_flags, &i.cond)?;
                write!(f, " {}, {}, {}", i.dest, i.src, i.amount)
            }
            Instruction::Rrx(i) => {
                f.write_str("RRX")?;
                write_suffixes(f, i.set_flags, &i.cond)?;
                write!(f, " {}, {}", i.dest, i.src)
            }
            Instruction::Test(i) => {
                write!(f, "{}", i.op)?;
                write_suffixes(f, false, &i.cond)?;
                write!(f, " {}, {}", i.first, i.second)
            }
            Instruction::Transfer(i) => {
                write!(f, "{}", i.op)?;
                write_suffixes(f, false, &i.cond)?;
                write!(f, " {}, {}", i.data, i.base)?;
                if let Some(offset) = i.offset {
                    write!(f, ", #{offset}")?;
                }
                Ok(())
            }
            Instruction::Block(i) => {
                write!(f, "{}", i.op)?;
                write_suffixes(f, false, &i.cond)?;
                write!(f, " {}", i.base)?;
                for r in &i.registers {
                    write!(f, ", {r}")?;
                }
                Ok(())
            }
            Instruction::Branch(i) => {
                f.write_str("BL")?;
                write_suffixes(f, false, &i.cond)?;
                write!(f, " #{}", i.target)
            }
        }
    }
}
