//! Scanning CRT display.
//!
//! Implements the beam that sweeps the screen in raster order, one pixel per cycle. On
//! each cycle the pixel under the beam is lit if the 3-pixel sprite centered on `x`
//! covers the beam's column. A completed row is emitted as the beam moves to the next
//! row. After the last row the beam either parks at the end of the row below the screen
//! (writes there are discarded) or, in continuous mode, returns to the top-left corner.
//! Either way the device reports idle once a frame is complete, so runs that stop on idle
//! always terminate.

use crate::common::Registers;
use crate::common::constants::SPRITE_HALF_WIDTH;
use crate::config::CrtConfig;
use crate::soc::traits::{Device, DeviceEvent};

/// Whether a sprite centered at `sprite_x` covers `column`.
///
/// True iff `column` is one of `sprite_x - 1`, `sprite_x`, `sprite_x + 1`.
pub const fn sprite_covers(sprite_x: i64, column: usize) -> bool {
    sprite_x.abs_diff(column as i64) <= SPRITE_HALF_WIDTH
}

/// CRT device state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crt {
    width: usize,
    height: usize,
    lit: char,
    dark: char,
    continuous: bool,
    beam_x: usize,
    beam_y: usize,
    frames: u64,
    screen: Vec<Vec<char>>,
}

impl Crt {
    /// Creates a blank (all dark) display with the beam at (0, 0).
    ///
    /// `config` is expected to have passed [`Config::validate`](crate::config::Config::validate);
    /// the screen buffer is allocated up front.
    pub fn new(config: &CrtConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
            lit: config.lit,
            dark: config.dark,
            continuous: config.continuous,
            beam_x: 0,
            beam_y: 0,
            frames: 0,
            screen: vec![vec![config.dark; config.width]; config.height],
        }
    }

    /// Current beam position as `(column, row)`.
    ///
    /// The row equals the display height once the frame is finished and the beam parks.
    pub const fn beam(&self) -> (usize, usize) {
        (self.beam_x, self.beam_y)
    }

    /// Display width in pixels.
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Display height in pixels.
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Draws the pixel under the beam, then advances the beam.
    ///
    /// # Returns
    ///
    /// The finished row's index and glyphs if this cycle completed a row.
    pub fn draw(&mut self, sprite_x: i64) -> Option<(usize, String)> {
        let glyph = if sprite_covers(sprite_x, self.beam_x) {
            self.lit
        } else {
            self.dark
        };
        if let Some(cell) = self
            .screen
            .get_mut(self.beam_y)
            .and_then(|row| row.get_mut(self.beam_x))
        {
            *cell = glyph;
        }
        self.advance()
    }

    fn advance(&mut self) -> Option<(usize, String)> {
        if self.beam_x + 1 < self.width {
            self.beam_x += 1;
            return None;
        }
        if self.beam_y >= self.height {
            return None;
        }

        let finished = self.beam_y;
        self.beam_x = 0;
        self.beam_y += 1;
        if self.beam_y == self.height {
            self.frames += 1;
            if self.continuous {
                self.beam_y = 0;
            }
        }
        self.row(finished).map(|row| (finished, row))
    }

    /// Row `idx` as a string, left to right.
    pub fn row(&self, idx: usize) -> Option<String> {
        self.screen.get(idx).map(|row| row.iter().collect())
    }

    /// All rows of the current frame.
    pub fn frame(&self) -> Vec<String> {
        self.screen.iter().map(|row| row.iter().collect()).collect()
    }

    /// Whether the beam has left the last row and parked.
    pub const fn is_parked(&self) -> bool {
        self.beam_y >= self.height
    }

    /// Number of frames completed since power-on.
    pub const fn frames(&self) -> u64 {
        self.frames
    }

    /// Whether the beam sits between two frames: parked, or back at (0, 0) in continuous
    /// mode after at least one full frame.
    pub const fn at_frame_boundary(&self) -> bool {
        self.is_parked() || (self.frames > 0 && self.beam_x == 0 && self.beam_y == 0)
    }
}

impl Device for Crt {
    fn name(&self) -> &str {
        "CRT"
    }

    fn tick(&mut self, _cycle: u64, regs: &Registers) -> Option<DeviceEvent> {
        self.draw(regs.x)
            .map(|(index, pixels)| DeviceEvent::Row { index, pixels })
    }

    fn reset(&mut self) {
        self.beam_x = 0;
        self.beam_y = 0;
        self.frames = 0;
        for row in &mut self.screen {
            row.fill(self.dark);
        }
    }

    fn is_idle(&self) -> bool {
        self.at_frame_boundary()
    }
}
