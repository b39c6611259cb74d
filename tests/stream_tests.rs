use armlet::parser::{InputState, Position};
use armlet::token::{MoveOp, Register, Token};

fn mov() -> Token {
    Token::Move(MoveOp::Mov)
}

fn reg(n: Register) -> Token {
    Token::Reg(n)
}

/// Drain the stream, returning every yielded token and the final state.
fn drain(state: InputState) -> (Vec<Token>, InputState) {
    let mut tokens = Vec::new();
    let mut state = state;
    loop {
        let (next, token) = state.next_token();
        match token {
            Some(tok) => {
                tokens.push(tok);
                state = next;
            }
            None => return (tokens, next),
        }
    }
}

#[test]
fn exhausted_stream_is_idempotent() {
    let input = InputState::new(vec![vec![mov(), reg(Register::R0)]]);
    let (_, end) = drain(input);

    let (after_one, first) = end.next_token();
    assert!(first.is_none());
    assert_eq!(after_one.position(), end.position());

    let (after_two, second) = after_one.next_token();
    assert!(second.is_none());
    assert_eq!(after_two.position(), end.position());
}

#[test]
fn three_lines_yield_two_terminators_in_order() {
    let input = InputState::new(vec![
        vec![mov(), reg(Register::R0)],
        vec![reg(Register::R1)],
        vec![reg(Register::R2)],
    ]);
    let (tokens, _) = drain(input);

    assert_eq!(
        tokens,
        vec![
            mov(),
            reg(Register::R0),
            Token::Newline,
            reg(Register::R1),
            Token::Newline,
            reg(Register::R2),
        ]
    );
}

#[test]
fn single_line_yields_no_terminator() {
    let input = InputState::new(vec![vec![mov(), reg(Register::R0)]]);
    let (tokens, _) = drain(input);
    assert_eq!(tokens, vec![mov(), reg(Register::R0)]);
}

#[test]
fn empty_input_yields_nothing() {
    let input = InputState::new(vec![]);
    let (state, token) = input.next_token();
    assert!(token.is_none());
    assert_eq!(state.position(), Position { line: 0, index: 0 });
}

#[test]
fn advancing_within_a_line_steps_the_token_index() {
    let input = InputState::new(vec![vec![mov(), reg(Register::R0)]]);
    let (after_first, first) = input.next_token();
    assert_eq!(first, Some(mov()));
    assert_eq!(after_first.position(), Position { line: 0, index: 1 });
}

#[test]
fn crossing_a_line_boundary_resets_the_token_index() {
    let input = InputState::new(vec![vec![mov()], vec![reg(Register::R1)]]);
    let (at_boundary, _) = input.next_token();
    let (next_line, terminator) = at_boundary.next_token();
    assert_eq!(terminator, Some(Token::Newline));
    assert_eq!(next_line.position(), Position { line: 1, index: 0 });
}

#[test]
fn from_tokens_splits_at_terminators() {
    let input = InputState::from_tokens(vec![
        mov(),
        reg(Register::R0),
        Token::Newline,
        reg(Register::R1),
    ]);
    assert_eq!(input.line_count(), 2);
    assert_eq!(input.current_line(), &[mov(), reg(Register::R0)]);
    assert_eq!(input.at_line(1).current_line(), &[reg(Register::R1)]);
}

#[test]
fn from_tokens_ignores_a_trailing_terminator() {
    let input = InputState::from_tokens(vec![mov(), reg(Register::R0), Token::Newline]);
    assert_eq!(input.line_count(), 1);
}

#[test]
fn from_tokens_keeps_interior_empty_lines() {
    let input = InputState::from_tokens(vec![
        mov(),
        Token::Newline,
        Token::Newline,
        reg(Register::R1),
    ]);
    assert_eq!(input.line_count(), 3);
    assert!(input.at_line(1).current_line().is_empty());
}

#[test]
fn from_tokens_stops_at_the_end_marker() {
    let input = InputState::from_tokens(vec![
        mov(),
        reg(Register::R0),
        Token::End,
        reg(Register::R1),
    ]);
    assert_eq!(input.line_count(), 1);
    assert_eq!(input.current_line(), &[mov(), reg(Register::R0)]);
}

#[test]
fn current_line_is_empty_past_the_last_line() {
    let input = InputState::new(vec![vec![mov()]]);
    assert!(input.at_line(3).current_line().is_empty());
}

#[test]
fn exhausting_a_single_line_leaves_the_cursor_after_its_last_token() {
    let input = InputState::new(vec![vec![mov(), reg(Register::R0)]]);
    let (_, end) = drain(input);
    assert_eq!(end.position(), Position { line: 0, index: 2 });
}
