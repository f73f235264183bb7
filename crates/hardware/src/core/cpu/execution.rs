//! Main Execution Loop.
//!
//! This module implements the per-cycle step of the CPU. It performs the following:
//! 1. **Cycle Accounting:** Counts every cycle, including idle ones on an empty program.
//! 2. **Retirement:** Advances to the next instruction once the current one completes.
//! 3. **Wrap-around:** Reloads fresh instruction state when the program runs out, so the
//!    program behaves as an endless loop.
//! 4. **Observability:** Emits `trace` events per retired instruction when enabled.

use super::{Cpu, load};
use crate::isa::instruction::Instruction;

impl Cpu {
    /// Advances the CPU by one clock cycle.
    ///
    /// # Returns
    ///
    /// The instruction that retired on this cycle, if any.
    pub fn tick(&mut self) -> Option<Instruction> {
        self.stats.cycles += 1;

        let slot = self.loaded.get_mut(self.ip)?;
        if !slot.cycle(&mut self.regs) {
            return None;
        }

        let inst = slot.instruction();
        self.stats.record_retired(inst.opcode());
        if self.trace {
            tracing::trace!(
                cycle = self.stats.cycles,
                ip = self.ip,
                inst = %inst,
                x = self.regs.x,
                "retired"
            );
        }

        self.ip += 1;
        if self.ip >= self.loaded.len() {
            self.wrap();
        }
        Some(inst)
    }

    /// Starts the next pass: fresh instruction state, index 0 and, if configured, `x`
    /// back at its initial value.
    fn wrap(&mut self) {
        self.loaded = load(&self.program);
        self.ip = 0;
        self.passes += 1;
        self.stats.program_passes += 1;
        if self.reset_on_wrap {
            self.regs.reset(self.initial_x);
        }
        tracing::debug!(
            pass = self.passes,
            cycle = self.stats.cycles,
            x = self.regs.x,
            "program wrapped"
        );
    }
}
