//! Global System Constants.
//!
//! This module defines the fixed geometry and timing of the simulated machine. It includes:
//! 1. **Register Constants:** Power-on value of the `x` register.
//! 2. **Instruction Constants:** Mnemonics and cycle costs for the two opcodes.
//! 3. **Display Constants:** CRT dimensions and pixel glyphs.
//! 4. **Checksum Constants:** Cycles at which the signal strength is sampled.

/// Value of register `x` at power-on and after each program wrap-around.
pub const INITIAL_X: i64 = 1;

/// Mnemonic of the no-operation instruction.
pub const NOOP_MNEMONIC: &str = "noop";

/// Mnemonic of the add-to-`x` instruction.
pub const ADDX_MNEMONIC: &str = "addx";

/// Cycles consumed by `noop`.
pub const NOOP_CYCLES: u8 = 1;

/// Cycles consumed by `addx`.
pub const ADDX_CYCLES: u8 = 2;

/// Number of columns scanned by the beam per row.
pub const CRT_WIDTH: usize = 40;

/// Number of rows in one frame.
pub const CRT_HEIGHT: usize = 6;

/// Largest display accepted by configuration validation, in pixels.
pub const MAX_CRT_PIXELS: usize = 1 << 20;

/// Glyph for a pixel covered by the sprite.
pub const PIXEL_LIT: char = '#';

/// Glyph for a pixel outside the sprite.
pub const PIXEL_DARK: char = '.';

/// Distance from the sprite center that still lights a pixel (3-pixel-wide sprite).
pub const SPRITE_HALF_WIDTH: u64 = 1;

/// Cycles at which `x * cycle` is added to the checksum.
pub const CHECKPOINT_CYCLES: [u64; 6] = [20, 60, 100, 140, 180, 220];
