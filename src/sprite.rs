//! Sprite-sheet frame bookkeeping
//!
//! Pure sequencing over named frame lists: a delay counter gates frame
//! advancement, and frame values map to (col, row) cells within the
//! sheet. Frame values are 1-based, the way level editors export them.
//! No image decoding happens here (asset parsing is a non-goal); the
//! rendering layer owns the pixels.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// (col, row) cell index within a sprite sheet
pub type SheetCell = (u32, u32);

/// Named animation sequences over a sprite sheet with a fixed column
/// count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpriteSheet {
    columns: u32,
    /// Ticks to hold each frame
    delay: u32,
    sequences: Vec<(String, Vec<u32>)>,
    current: usize,
    frame_index: usize,
    delay_counter: u32,
    wrapped: bool,
}

impl SpriteSheet {
    /// The first sequence becomes current. Fails with [`Error::Shape`]
    /// when there are no sequences, a sequence is empty, the column count
    /// is zero, or a frame value is not 1-based.
    pub fn new(
        columns: u32,
        delay: u32,
        sequences: Vec<(String, Vec<u32>)>,
    ) -> Result<Self, Error> {
        if columns == 0 {
            return Err(Error::Shape("sprite sheet needs at least one column".into()));
        }
        if sequences.is_empty() {
            return Err(Error::Shape("sprite sheet needs at least one sequence".into()));
        }
        for (name, frames) in &sequences {
            if frames.is_empty() {
                return Err(Error::Shape(format!("sprite sequence '{name}' is empty")));
            }
            if frames.contains(&0) {
                return Err(Error::Shape(format!(
                    "sprite sequence '{name}' contains frame 0; frame values are 1-based"
                )));
            }
        }
        Ok(Self {
            columns,
            delay,
            sequences,
            current: 0,
            frame_index: 0,
            delay_counter: 0,
            wrapped: false,
        })
    }

    /// Name of the sequence currently playing
    pub fn current_sequence(&self) -> &str {
        &self.sequences[self.current].0
    }

    /// Switch sequences and restart from its first frame. Switching to
    /// the sequence already playing keeps its position.
    pub fn set_sequence(&mut self, name: &str) -> Result<(), Error> {
        let index = self
            .sequences
            .iter()
            .position(|(n, _)| n == name)
            .ok_or_else(|| Error::UnknownSequence(name.to_string()))?;
        if index != self.current {
            self.current = index;
            self.frame_index = 0;
            self.delay_counter = 0;
            self.wrapped = false;
        }
        Ok(())
    }

    /// Cell of the frame currently showing
    pub fn current_cell(&self) -> SheetCell {
        self.cell_of(self.sequences[self.current].1[self.frame_index])
    }

    /// Step the delay counter once (call once per tick) and return the
    /// cell to draw. The sequence loops; `just_wrapped` reports the loop.
    pub fn advance(&mut self) -> SheetCell {
        self.wrapped = false;
        self.delay_counter += 1;
        if self.delay_counter > self.delay {
            self.delay_counter = 0;
            self.frame_index += 1;
            if self.frame_index >= self.sequences[self.current].1.len() {
                self.frame_index = 0;
                self.wrapped = true;
            }
        }
        self.current_cell()
    }

    /// True when the last `advance` looped back to the first frame
    pub fn just_wrapped(&self) -> bool {
        self.wrapped
    }

    /// Map a 1-based frame value to its (col, row) cell in the sheet.
    /// Construction rejects frame value 0; passed here directly it clamps
    /// to the first cell instead of underflowing.
    pub fn cell_of(&self, frame_value: u32) -> SheetCell {
        let v = frame_value.saturating_sub(1);
        (v % self.columns, v / self.columns)
    }
}
