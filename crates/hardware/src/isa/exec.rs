//! In-flight instruction state.
//!
//! An [`InFlight`] pairs a decoded instruction with its remaining-cycle counter. The CPU
//! calls [`InFlight::cycle`] exactly once per simulated cycle while the instruction is
//! current; the instruction's effect is applied on its final cycle.

use crate::common::reg::Registers;
use crate::isa::instruction::Instruction;

/// An instruction being executed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InFlight {
    inst: Instruction,
    remaining: u8,
}

impl InFlight {
    /// Starts execution of `inst` with a full cycle budget.
    pub const fn new(inst: Instruction) -> Self {
        Self {
            inst,
            remaining: inst.cycles(),
        }
    }

    /// The instruction being executed.
    pub const fn instruction(&self) -> Instruction {
        self.inst
    }

    /// Cycles left before completion.
    pub const fn remaining(&self) -> u8 {
        self.remaining
    }

    /// Whether the instruction has already completed.
    pub const fn is_complete(&self) -> bool {
        self.remaining == 0
    }

    /// Consumes one cycle.
    ///
    /// On the final cycle the instruction's effect is applied to `regs`.
    ///
    /// # Returns
    ///
    /// `true` once the instruction has fully executed; the caller then moves on.
    pub fn cycle(&mut self, regs: &mut Registers) -> bool {
        if self.is_complete() {
            return true;
        }
        self.remaining -= 1;
        if self.remaining > 0 {
            return false;
        }
        match self.inst {
            Instruction::Noop => {}
            Instruction::Addx(delta) => regs.x = regs.x.wrapping_add(delta),
        }
        true
    }
}
