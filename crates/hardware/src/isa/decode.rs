//! Instruction Decoder.
//!
//! This module decodes one line of assembly text into an [`Instruction`]. A line is split
//! on single spaces into a mnemonic and operand tokens. Each opcode owns its operand
//! parser:
//! 1. **`noop`:** Operand tokens are ignored.
//! 2. **`addx`:** Exactly one token, a base-10 signed integer.

use std::str::FromStr;

use crate::common::error::ParseError;
use crate::isa::instruction::{Instruction, Opcode};

/// Decodes a single non-blank program line.
///
/// # Arguments
///
/// * `text` - Line contents without the trailing newline.
/// * `line` - 1-based line number, used in errors.
///
/// # Errors
///
/// Returns a [`ParseError`] naming the offending token if the mnemonic is unknown or the
/// operands do not fit the opcode.
pub fn decode_line(text: &str, line: usize) -> Result<Instruction, ParseError> {
    let mut tokens = text.split(' ');
    let name = tokens.next().unwrap_or_default();
    let operands: Vec<&str> = tokens.collect();

    let opcode = Opcode::from_mnemonic(name).ok_or_else(|| ParseError::UnknownOpcode {
        line,
        name: name.to_string(),
    })?;

    match opcode {
        Opcode::Noop => Ok(Instruction::Noop),
        Opcode::Addx => parse_addx(&operands, line).map(Instruction::Addx),
    }
}

fn parse_addx(operands: &[&str], line: usize) -> Result<i64, ParseError> {
    let opcode = Opcode::Addx.mnemonic();
    match operands {
        [] => Err(ParseError::MissingOperand { line, opcode }),
        [value] => parse_immediate(value).ok_or_else(|| ParseError::InvalidOperand {
            line,
            opcode,
            operand: (*value).to_string(),
        }),
        _ => Err(ParseError::UnexpectedOperands {
            line,
            opcode,
            count: operands.len(),
        }),
    }
}

/// Parses a base-10 signed integer, allowing a leading `+` or `-`.
fn parse_immediate(token: &str) -> Option<i64> {
    token.parse::<i64>().ok()
}

impl FromStr for Instruction {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_line(s, 1)
    }
}
