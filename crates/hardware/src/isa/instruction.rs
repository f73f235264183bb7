//! Opcodes and decoded instructions.
//!
//! Provides the closed opcode table and the `Instruction` sum type produced by the
//! decoder. Instructions are immutable once decoded; execution progress lives in
//! [`InFlight`](crate::isa::exec::InFlight).

use std::fmt;

use serde::Serialize;

use crate::common::constants::{ADDX_CYCLES, ADDX_MNEMONIC, NOOP_CYCLES, NOOP_MNEMONIC};

/// Opcode table.
///
/// Matching against mnemonics is exact and case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Opcode {
    /// No operation.
    Noop,
    /// Add a signed immediate to `x`.
    Addx,
}

impl Opcode {
    /// All opcodes, in table order.
    pub const ALL: [Self; 2] = [Self::Noop, Self::Addx];

    /// Looks up an opcode by mnemonic.
    ///
    /// # Returns
    ///
    /// `None` if `name` is not an exact match for a known mnemonic.
    pub fn from_mnemonic(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.mnemonic() == name)
    }

    /// Assembly mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Noop => NOOP_MNEMONIC,
            Self::Addx => ADDX_MNEMONIC,
        }
    }

    /// Total cycles the instruction occupies the CPU.
    pub const fn cycles(self) -> u8 {
        match self {
            Self::Noop => NOOP_CYCLES,
            Self::Addx => ADDX_CYCLES,
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// A decoded instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "op", content = "arg", rename_all = "lowercase")]
pub enum Instruction {
    /// `noop`
    Noop,
    /// `addx <delta>`
    Addx(i64),
}

impl Instruction {
    /// Opcode of this instruction.
    pub const fn opcode(&self) -> Opcode {
        match self {
            Self::Noop => Opcode::Noop,
            Self::Addx(_) => Opcode::Addx,
        }
    }

    /// Instruction name, as written in source.
    pub const fn name(&self) -> &'static str {
        self.opcode().mnemonic()
    }

    /// Total cycle cost.
    pub const fn cycles(&self) -> u8 {
        self.opcode().cycles()
    }

    /// Decoded operands (empty for `noop`).
    pub fn args(&self) -> Vec<i64> {
        match self {
            Self::Noop => Vec::new(),
            Self::Addx(delta) => vec![*delta],
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Noop => f.write_str(NOOP_MNEMONIC),
            Self::Addx(delta) => write!(f, "{ADDX_MNEMONIC} {delta}"),
        }
    }
}
