//! Program and Simulation Error definitions.
//!
//! This module defines the error handling for the simulator. It provides:
//! 1. **Parse Errors:** Every way a program line can fail to decode, with its 1-based line.
//! 2. **Simulation Errors:** File, configuration and parse failures surfaced to the caller.
//!
//! Parsing is eager: any `ParseError` aborts loading before the first cycle runs.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to decode a single program line.
///
/// All variants are "unrecognized instruction" errors; the variant narrows down which
/// token was at fault.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The mnemonic is not one of the known opcodes (matching is case-sensitive).
    #[error("line {line}: unknown opcode `{name}`")]
    UnknownOpcode {
        /// 1-based source line.
        line: usize,
        /// The offending mnemonic.
        name: String,
    },

    /// The opcode requires an operand but none was given.
    #[error("line {line}: `{opcode}` expects an operand")]
    MissingOperand {
        /// 1-based source line.
        line: usize,
        /// Mnemonic of the instruction.
        opcode: &'static str,
    },

    /// The operand is not a base-10 integer that fits the register.
    #[error("line {line}: invalid operand `{operand}` for `{opcode}`")]
    InvalidOperand {
        /// 1-based source line.
        line: usize,
        /// Mnemonic of the instruction.
        opcode: &'static str,
        /// The offending operand token.
        operand: String,
    },

    /// More operand tokens than the opcode accepts.
    #[error("line {line}: `{opcode}` takes 1 operand, found {count}")]
    UnexpectedOperands {
        /// 1-based source line.
        line: usize,
        /// Mnemonic of the instruction.
        opcode: &'static str,
        /// Number of operand tokens found.
        count: usize,
    },
}

impl ParseError {
    /// Source line the error refers to (1-based).
    pub const fn line(&self) -> usize {
        match self {
            Self::UnknownOpcode { line, .. }
            | Self::MissingOperand { line, .. }
            | Self::InvalidOperand { line, .. }
            | Self::UnexpectedOperands { line, .. } => *line,
        }
    }
}

/// Top-level error returned by loading and configuration entry points.
#[derive(Debug, Error)]
pub enum SimError {
    /// The program or config file could not be read.
    #[error("could not read '{}': {source}", path.display())]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A program line failed to decode.
    #[error("unrecognized instruction: {0}")]
    Parse(#[from] ParseError),

    /// A JSON config file was malformed.
    #[error("invalid config '{}': {source}", path.display())]
    Config {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying deserialization error.
        #[source]
        source: serde_json::Error,
    },

    /// A configuration value is out of range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
