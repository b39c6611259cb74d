//! Token domain for the armlet parser.
//!
//! Tokens arrive from an external lexer as a flat, ordered stream; this
//! module only defines the token vocabulary. Tokens are immutable values
//! compared structurally and carry no position information — positions
//! live in the parser's input state.

use std::fmt;

/// Condition code suffixes, kept in their surface spelling.
///
/// CS/HS and CC/LO are duplicate spellings of the same condition; both are
/// preserved as written, and [`Condition::code`] exposes the shared 4-bit
/// encoding for semantic comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    Eq,
    Ne,
    Cs,
    Hs,
    Cc,
    Lo,
    Mi,
    Pl,
    Vs,
    Vc,
    Hi,
    Ls,
    Ge,
    Lt,
    Gt,
    Le,
    Al,
    Nv,
}

impl Condition {
    /// The 4-bit condition field this suffix encodes to.
    pub fn code(&self) -> u8 {
        match self {
            Condition::Eq => 0b0000,
            Condition::Ne => 0b0001,
            Condition::Cs | Condition::Hs => 0b0010,
            Condition::Cc | Condition::Lo => 0b0011,
            Condition::Mi => 0b0100,
            Condition::Pl => 0b0101,
            Condition::Vs => 0b0110,
            Condition::Vc => 0b0111,
            Condition::Hi => 0b1000,
            Condition::Ls => 0b1001,
            Condition::Ge => 0b1010,
            Condition::Lt => 0b1011,
            Condition::Gt => 0b1100,
            Condition::Le => 0b1101,
            Condition::Al => 0b1110,
            Condition::Nv => 0b1111,
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Condition::Eq => "EQ",
            Condition::Ne => "NE",
            Condition::Cs => "CS",
            Condition::Hs => "HS",
            Condition::Cc => "CC",
            Condition::Lo => "LO",
            Condition::Mi => "MI",
            Condition::Pl => "PL",
            Condition::Vs => "VS",
            Condition::Vc => "VC",
            Condition::Hi => "HI",
            Condition::Ls => "LS",
            Condition::Ge => "GE",
            Condition::Lt => "LT",
            Condition::Gt => "GT",
            Condition::Le => "LE",
            Condition::Al => "AL",
            Condition::Nv => "NV",
        };
        f.write_str(s)
    }
}

/// General-purpose registers R0 through R15.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Register {
    R0,
    R1,
    R2,
    R3,
    R4,
    R5,
    R6,
    R7,
    R8,
    R9,
    R10,
    R11,
    R12,
    R13,
    R14,
    R15,
}

impl Register {
    pub fn number(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}", self.number())
    }
}

/// Class 1: two-operand moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOp {
    Mov,
    Mvn,
}

impl fmt::Display for MoveOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MoveOp::Mov => "MOV",
            MoveOp::Mvn => "MVN",
        })
    }
}

/// Class 3: three-operand data processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataOp {
    Add,
    Adc,
    Sub,
    Sbc,
    Rsb,
    Rsc,
    And,
    Eor,
    Bic,
    Orr,
}

impl fmt::Display for DataOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DataOp::Add => "ADD",
            DataOp::Adc => "ADC",
            DataOp::Sub => "SUB",
            DataOp::Sbc => "SBC",
            DataOp::Rsb => "RSB",
            DataOp::Rsc => "RSC",
            DataOp::And => "AND",
            DataOp::Eor => "EOR",
            DataOp::Bic => "BIC",
            DataOp::Orr => "ORR",
        })
    }
}

/// Class 4: shifts and rotates with an explicit amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftOp {
    Lsl,
    Lsr,
    Asr,
    Ror,
}

impl fmt::Display for ShiftOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ShiftOp::Lsl => "LSL",
            ShiftOp::Lsr => "LSR",
            ShiftOp::Asr => "ASR",
            ShiftOp::Ror => "ROR",
        })
    }
}

/// Class 6: compares and tests; these always update flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestOp {
    Cmp,
    Cmn,
    Tst,
    Teq,
}

impl fmt::Display for TestOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TestOp::Cmp => "CMP",
            TestOp::Cmn => "CMN",
            TestOp::Tst => "TST",
            TestOp::Teq => "TEQ",
        })
    }
}

/// Class 7: single-register loads and stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryOp {
    Ldr,
    Str,
}

impl fmt::Display for MemoryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MemoryOp::Ldr => "LDR",
            MemoryOp::Str => "STR",
        })
    }
}

/// Class 8: multi-register block transfers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockOp {
    Ldm,
    Stm,
}

impl fmt::Display for BlockOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BlockOp::Ldm => "LDM",
            BlockOp::Stm => "STM",
        })
    }
}

/// A lexical unit produced by the external lexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Cond(Condition),
    Reg(Register),
    Move(MoveOp),
    Adr,
    Data(DataOp),
    Shift(ShiftOp),
    Rrx,
    Test(TestOp),
    Memory(MemoryOp),
    Block(BlockOp),
    Bl,
    /// The `S` suffix requesting a flags update.
    SetFlags,
    Comma,
    Literal(i32),
    /// Line terminator; consumed as a separator, never kept inside a line.
    Newline,
    /// End-of-input marker emitted by the lexer.
    End,
    /// An unrecognized lexeme, carried through so the parser can report it.
    Err(String),
}

impl Token {
    /// Returns a human-readable description of the token
    pub fn describe(&self) -> String {
        match self {
            Token::Cond(c) => format!("condition '{c}'"),
            Token::Reg(r) => format!("register '{r}'"),
            Token::Literal(n) => format!("literal '#{n}'"),
            Token::SetFlags => "'S'".to_string(),
            Token::Comma => "','".to_string(),
            Token::Newline => "end of line".to_string(),
            Token::End => "end of input".to_string(),
            Token::Err(lexeme) => format!("unrecognized '{lexeme}'"),
            other => format!("'{other}'"),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Cond(c) => write!(f, "{c}"),
            Token::Reg(r) => write!(f, "{r}"),
            Token::Move(op) => write!(f, "{op}"),
            Token::Adr => f.write_str("ADR"),
            Token::Data(op) => write!(f, "{op}"),
            Token::Shift(op) => write!(f, "{op}"),
            Token::Rrx => f.write_str("RRX"),
            Token::Test(op) => write!(f, "{op}"),
            Token::Memory(op) => write!(f, "{op}"),
            Token::Block(op) => write!(f, "{op}"),
            Token::Bl => f.write_str("BL"),
            Token::SetFlags => f.write_str("S"),
            Token::Comma => f.write_str(","),
            Token::Literal(n) => write!(f, "#{n}"),
            Token::Newline => f.write_str("\\n"),
            Token::End => f.write_str("<end>"),
            Token::Err(lexeme) => write!(f, "{lexeme}"),
        }
    }
}
