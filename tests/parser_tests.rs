use armlet::ast::{Instruction, Operand};
use armlet::parser::fields::{register, register_comma};
use armlet::parser::{move_instruction, parse, parse_line, InputState, Parser, Position};
use armlet::token::{
    BlockOp, Condition, DataOp, MemoryOp, MoveOp, Register, ShiftOp, TestOp, Token,
};

fn line(tokens: Vec<Token>) -> InputState {
    InputState::new(vec![tokens])
}

#[test]
fn parses_a_plain_move() {
    let parsed = parse_line(vec![
        Token::Move(MoveOp::Mov),
        Token::Reg(Register::R0),
        Token::Comma,
        Token::Reg(Register::R1),
    ])
    .unwrap();

    match parsed {
        Instruction::Move(m) => {
            assert_eq!(m.op, MoveOp::Mov);
            assert!(!m.set_flags);
            assert!(m.cond.is_none());
            assert_eq!(m.dest, Register::R0);
            assert_eq!(m.src, Register::R1);
        }
        other => panic!("expected a move, got {other:?}"),
    }
}

#[test]
fn parses_a_move_with_flags_and_condition() {
    let parsed = parse_line(vec![
        Token::Move(MoveOp::Mov),
        Token::SetFlags,
        Token::Cond(Condition::Eq),
        Token::Reg(Register::R2),
        Token::Comma,
        Token::Reg(Register::R3),
    ])
    .unwrap();

    match parsed {
        Instruction::Move(m) => {
            assert!(m.set_flags);
            assert_eq!(m.cond, Some(Condition::Eq));
            assert_eq!(m.dest, Register::R2);
            assert_eq!(m.src, Register::R3);
        }
        other => panic!("expected a move, got {other:?}"),
    }
}

#[test]
fn comma_in_place_of_a_register_pinpoints_the_second_token() {
    let err = move_instruction()
        .parse(line(vec![
            Token::Move(MoveOp::Mov),
            Token::Comma,
            Token::Reg(Register::R1),
        ]))
        .unwrap_err();

    assert_eq!(err.label, "Instruction Type 1");
    assert_eq!(err.position, Position { line: 0, index: 1 });
}

#[test]
fn truncated_line_fails_with_no_more_input_after_the_comma() {
    let rule = register_comma() + register();
    let err = rule
        .parse(line(vec![Token::Reg(Register::R0), Token::Comma]))
        .unwrap_err();

    assert_eq!(err.message, "No more input");
    assert_eq!(err.position, Position { line: 0, index: 2 });
}

#[test]
fn empty_line_fails_with_an_end_of_input_diagnostic() {
    let err = parse_line(vec![]).unwrap_err();
    assert_eq!(err.message, "No more input");
    assert_eq!(err.position, Position { line: 0, index: 0 });
    assert_eq!(err.label, "Instruction");
}

#[test]
fn parses_adr() {
    let parsed = parse_line(vec![
        Token::Adr,
        Token::Reg(Register::R4),
        Token::Comma,
        Token::Literal(100),
    ])
    .unwrap();

    match parsed {
        Instruction::Adr(a) => {
            assert!(a.cond.is_none());
            assert_eq!(a.dest, Register::R4);
            assert_eq!(a.target, 100);
        }
        other => panic!("expected adr, got {other:?}"),
    }
}

#[test]
fn parses_data_processing_with_a_register_operand() {
    let parsed = parse_line(vec![
        Token::Data(DataOp::Add),
        Token::Reg(Register::R2),
        Token::Comma,
        Token::Reg(Register::R0),
        Token::Comma,
        Token::Reg(Register::R1),
    ])
    .unwrap();

    match parsed {
        Instruction::Data(d) => {
            assert_eq!(d.op, DataOp::Add);
            assert!(!d.set_flags);
            assert_eq!(d.dest, Register::R2);
            assert_eq!(d.first, Register::R0);
            assert_eq!(d.second, Operand::Register(Register::R1));
        }
        other => panic!("expected data processing, got {other:?}"),
    }
}

#[test]
fn parses_data_processing_with_flags_and_a_literal() {
    let parsed = parse_line(vec![
        Token::Data(DataOp::Sub),
        Token::SetFlags,
        Token::Reg(Register::R2),
        Token::Comma,
        Token::Reg(Register::R0),
        Token::Comma,
        Token::Literal(10),
    ])
    .unwrap();

    match parsed {
        Instruction::Data(d) => {
            assert_eq!(d.op, DataOp::Sub);
            assert!(d.set_flags);
            assert_eq!(d.second, Operand::Literal(10));
        }
        other => panic!("expected data processing, got {other:?}"),
    }
}

#[test]
fn parses_a_shift_with_a_literal_amount() {
    let parsed = parse_line(vec![
        Token::Shift(ShiftOp::Lsl),
        Token::SetFlags,
        Token::Reg(Register::R0),
        Token::Comma,
        Token::Reg(Register::R1),
        Token::Comma,
        Token::Literal(3),
    ])
    .unwrap();

    match parsed {
        Instruction::Shift(s) => {
            assert_eq!(s.op, ShiftOp::Lsl);
            assert!(s.set_flags);
            assert_eq!(s.dest, Register::R0);
            assert_eq!(s.src, Register::R1);
            assert_eq!(s.amount, Operand::Literal(3));
        }
        other => panic!("expected shift, got {other:?}"),
    }
}

#[test]
fn parses_rrx_with_a_condition() {
    let parsed = parse_line(vec![
        Token::Rrx,
        Token::Cond(Condition::Ne),
        Token::Reg(Register::R0),
        Token::Comma,
        Token::Reg(Register::R1),
    ])
    .unwrap();

    match parsed {
        Instruction::Rrx(r) => {
            assert!(!r.set_flags);
            assert_eq!(r.cond, Some(Condition::Ne));
            assert_eq!(r.dest, Register::R0);
            assert_eq!(r.src, Register::R1);
        }
        other => panic!("expected rrx, got {other:?}"),
    }
}

#[test]
fn parses_a_compare_against_a_literal() {
    let parsed = parse_line(vec![
        Token::Test(TestOp::Cmp),
        Token::Reg(Register::R2),
        Token::Comma,
        Token::Literal(0),
    ])
    .unwrap();

    match parsed {
        Instruction::Test(t) => {
            assert_eq!(t.op, TestOp::Cmp);
            assert_eq!(t.first, Register::R2);
            assert_eq!(t.second, Operand::Literal(0));
        }
        other => panic!("expected compare, got {other:?}"),
    }
}

#[test]
fn parses_a_load_with_an_offset() {
    let parsed = parse_line(vec![
        Token::Memory(MemoryOp::Ldr),
        Token::Reg(Register::R0),
        Token::Comma,
        Token::Reg(Register::R1),
        Token::Comma,
        Token::Literal(4),
    ])
    .unwrap();

    match parsed {
        Instruction::Transfer(t) => {
            assert_eq!(t.op, MemoryOp::Ldr);
            assert_eq!(t.data, Register::R0);
            assert_eq!(t.base, Register::R1);
            assert_eq!(t.offset, Some(4));
        }
        other => panic!("expected transfer, got {other:?}"),
    }
}

#[test]
fn parses_a_store_without_an_offset() {
    let parsed = parse_line(vec![
        Token::Memory(MemoryOp::Str),
        Token::Reg(Register::R5),
        Token::Comma,
        Token::Reg(Register::R13),
    ])
    .unwrap();

    match parsed {
        Instruction::Transfer(t) => {
            assert_eq!(t.op, MemoryOp::Str);
            assert_eq!(t.offset, None);
        }
        other => panic!("expected transfer, got {other:?}"),
    }
}

#[test]
fn parses_a_block_transfer_register_list() {
    let parsed = parse_line(vec![
        Token::Block(BlockOp::Stm),
        Token::Reg(Register::R13),
        Token::Comma,
        Token::Reg(Register::R0),
        Token::Comma,
        Token::Reg(Register::R1),
        Token::Comma,
        Token::Reg(Register::R2),
    ])
    .unwrap();

    match parsed {
        Instruction::Block(b) => {
            assert_eq!(b.op, BlockOp::Stm);
            assert_eq!(b.base, Register::R13);
            assert_eq!(
                b.registers,
                vec![Register::R0, Register::R1, Register::R2]
            );
        }
        other => panic!("expected block transfer, got {other:?}"),
    }
}

#[test]
fn parses_a_conditional_branch() {
    let parsed = parse_line(vec![
        Token::Bl,
        Token::Cond(Condition::Eq),
        Token::Literal(64),
    ])
    .unwrap();

    match parsed {
        Instruction::Branch(b) => {
            assert_eq!(b.cond, Some(Condition::Eq));
            assert_eq!(b.target, 64);
        }
        other => panic!("expected branch, got {other:?}"),
    }
}

#[test]
fn trailing_tokens_after_an_instruction_are_an_error() {
    let err = parse_line(vec![
        Token::Move(MoveOp::Mov),
        Token::Reg(Register::R0),
        Token::Comma,
        Token::Reg(Register::R1),
        Token::Comma,
        Token::Reg(Register::R2),
    ])
    .unwrap_err();

    assert_eq!(err.position, Position { line: 0, index: 4 });
}

#[test]
fn one_bad_line_does_not_abort_the_rest() {
    let outcomes = parse(vec![
        Token::Move(MoveOp::Mov),
        Token::Reg(Register::R0),
        Token::Comma,
        Token::Reg(Register::R1),
        Token::Newline,
        Token::Comma,
        Token::Newline,
        Token::Bl,
        Token::Literal(8),
    ]);

    assert_eq!(outcomes.len(), 3);
    assert!(outcomes[0].is_ok());
    assert!(outcomes[2].is_ok());

    let err = outcomes[1].as_ref().unwrap_err();
    assert_eq!(err.position.line, 1);
}

#[test]
fn unrecognized_lexemes_surface_in_the_diagnostic() {
    let err = parse_line(vec![Token::Err("qux".to_string())]).unwrap_err();
    assert!(err.message.contains("qux"), "message was: {}", err.message);
}

#[test]
fn duplicate_condition_spellings_share_an_encoding() {
    assert_eq!(Condition::Cs.code(), Condition::Hs.code());
    assert_eq!(Condition::Cc.code(), Condition::Lo.code());
    assert_ne!(Condition::Cs, Condition::Hs);

    let with_hs = parse_line(vec![
        Token::Move(MoveOp::Mov),
        Token::Cond(Condition::Hs),
        Token::Reg(Register::R0),
        Token::Comma,
        Token::Reg(Register::R1),
    ])
    .unwrap();
    let with_cs = parse_line(vec![
        Token::Move(MoveOp::Mov),
        Token::Cond(Condition::Cs),
        Token::Reg(Register::R0),
        Token::Comma,
        Token::Reg(Register::R1),
    ])
    .unwrap();

    match (with_hs, with_cs) {
        (Instruction::Move(hs), Instruction::Move(cs)) => {
            assert_ne!(hs.cond, cs.cond);
            assert_eq!(hs.cond.unwrap().code(), cs.cond.unwrap().code());
        }
        other => panic!("expected two moves, got {other:?}"),
    }
}

#[test]
fn failure_display_renders_a_caret_under_the_failing_token() {
    let err = move_instruction()
        .parse(line(vec![
            Token::Move(MoveOp::Mov),
            Token::Comma,
            Token::Reg(Register::R1),
        ]))
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "line 0, token 1: error parsing Instruction Type 1\n  MOV , R1\n      ^ unexpected ','"
    );
}

#[test]
fn instructions_render_back_to_assembly_text() {
    let parsed = parse_line(vec![
        Token::Move(MoveOp::Mov),
        Token::SetFlags,
        Token::Cond(Condition::Eq),
        Token::Reg(Register::R2),
        Token::Comma,
        Token::Reg(Register::R3),
    ])
    .unwrap();
    assert_eq!(parsed.to_string(), "MOVSEQ R2, R3");
}
