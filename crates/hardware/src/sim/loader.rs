//! Program Loader.
//!
//! This module turns assembly text into a [`Program`]. It performs:
//! 1. **File loading:** Reads a UTF-8 source file from disk.
//! 2. **Line splitting:** One instruction per line; blank lines are skipped.
//! 3. **Eager decoding:** Every line is decoded up front, so a bad line fails the load
//!    before any cycle runs.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::common::error::{ParseError, SimError};
use crate::isa::decode::decode_line;
use crate::isa::instruction::{Instruction, Opcode};

/// An ordered, immutable list of decoded instructions.
///
/// Order is execution order; there is no branching or addressing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    instructions: Vec<Instruction>,
}

impl Program {
    /// Wraps an already-decoded instruction list.
    pub const fn new(instructions: Vec<Instruction>) -> Self {
        Self { instructions }
    }

    /// Decodes program text.
    ///
    /// # Errors
    ///
    /// Returns the first [`ParseError`] encountered; nothing is partially loaded.
    pub fn parse(source: &str) -> Result<Self, ParseError> {
        let instructions = source
            .lines()
            .enumerate()
            .filter(|(_, text)| !text.trim().is_empty())
            .map(|(idx, text)| decode_line(text, idx + 1))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { instructions })
    }

    /// Reads and decodes a program file.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Io`] if the file cannot be read and [`SimError::Parse`] if any
    /// line fails to decode.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| SimError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let program = Self::parse(&source)?;
        tracing::info!(
            path = %path.display(),
            instructions = program.len(),
            cycles = program.total_cycles(),
            "program loaded"
        );
        Ok(program)
    }

    /// Number of instructions.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Whether the program has no instructions.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Instruction at `idx`.
    pub fn get(&self, idx: usize) -> Option<Instruction> {
        self.instructions.get(idx).copied()
    }

    /// All instructions in execution order.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Cycles needed for one full pass through the program.
    pub fn total_cycles(&self) -> u64 {
        self.instructions.iter().map(|i| u64::from(i.cycles())).sum()
    }

    /// Number of instructions with the given opcode.
    pub fn count(&self, opcode: Opcode) -> usize {
        self.instructions
            .iter()
            .filter(|i| i.opcode() == opcode)
            .count()
    }
}

impl FromStr for Program {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
