#[macro_use]
extern crate log;

use armlet::parser::parse;
use armlet::token::{DataOp, MoveOp, Register, TestOp, Token};

/// A small pre-lexed program, as the external lexer would hand it over:
///
/// ```text
/// MOV R0, R1
/// ADDS R2, R0, #10
/// CMPEQ R2, #0
/// MOV , R1        <- malformed, reported but does not stop later lines
/// BL #64
/// ```
fn input_program() -> Vec<Token> {
    vec![
        Token::Move(MoveOp::Mov),
        Token::Reg(Register::R0),
        Token::Comma,
        Token::Reg(Register::R1),
        Token::Newline,
        Token::Data(DataOp::Add),
        Token::SetFlags,
        Token::Reg(Register::R2),
        Token::Comma,
        Token::Reg(Register::R0),
        Token::Comma,
        Token::Literal(10),
        Token::Newline,
        Token::Test(TestOp::Cmp),
        Token::Cond(armlet::token::Condition::Eq),
        Token::Reg(Register::R2),
        Token::Comma,
        Token::Literal(0),
        Token::Newline,
        Token::Move(MoveOp::Mov),
        Token::Comma,
        Token::Reg(Register::R1),
        Token::Newline,
        Token::Bl,
        Token::Literal(64),
        Token::End,
    ]
}

fn main() -> anyhow::Result<()> {
    initialize_logging();

    let mut failed = 0usize;
    for (line, outcome) in parse(input_program()).into_iter().enumerate() {
        match outcome {
            Ok(instruction) => info!("line {line}: {instruction}"),
            Err(failure) => {
                failed += 1;
                error!("{failure}");
            }
        }
    }

    if failed > 0 {
        warn!("{failed} line(s) failed to parse");
    }

    Ok(())
}

fn initialize_logging() {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}][{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record.level(),
                message
            ))
        })
        .level(log::LevelFilter::Info)
        .chain(std::io::stdout())
        .apply()
        .ok();
}
