//! Placement of the nine button slots on the page

use crate::io::configuration::{BUTTON_COUNT, GRID_COLUMNS, GRID_ROWS, OFFSET_COLUMN};
use crate::io::error::{Result, computation_error};
use crate::layout::geometry::{LayoutGeometry, round_half_up};
use num_traits::ToPrimitive;

/// One button position on the sheet
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonSlot {
    /// Position in reading order of the original layout (0..9)
    pub index: usize,
    /// Column the slot belongs to
    pub column: usize,
    /// Row within its column
    pub row: usize,
    /// Left edge of the cut square
    pub x: f64,
    /// Top edge of the cut square
    pub y: f64,
}

impl ButtonSlot {
    /// Human readable name, numbered from one
    pub fn label(&self) -> String {
        format!("Button {}", self.index + 1)
    }

    /// Top-left corner of the cut square snapped to whole pixels
    ///
    /// # Errors
    ///
    /// Returns an error if the position does not fit in a pixel coordinate
    pub fn origin(&self) -> Result<(i64, i64)> {
        let x = round_half_up(self.x)
            .to_i64()
            .ok_or_else(|| computation_error("slot origin", &self.x))?;
        let y = round_half_up(self.y)
            .to_i64()
            .ok_or_else(|| computation_error("slot origin", &self.y))?;
        Ok((x, y))
    }
}

/// Slot indices stacked in a column, top to bottom
///
/// Columns are filled left, middle, right in turn, so column 0 holds
/// `[0, 3, 6]`.
pub fn column_indices(column: usize) -> [usize; GRID_ROWS] {
    let mut indices = [0; GRID_ROWS];
    for (row, index) in indices.iter_mut().enumerate() {
        *index = row * GRID_COLUMNS + column;
    }
    indices
}

/// Place all nine slots, shifting the middle column down by its offset
pub fn layout_slots(geometry: &LayoutGeometry) -> Vec<ButtonSlot> {
    let pitch = f64::from(geometry.pitch_px());

    let slots: Vec<ButtonSlot> = (0..BUTTON_COUNT)
        .map(|index| {
            let column = index % GRID_COLUMNS;
            let row = index / GRID_COLUMNS;
            let column_shift = if column == OFFSET_COLUMN {
                geometry.column_offset_px
            } else {
                0.0
            };

            ButtonSlot {
                index,
                column,
                row,
                x: geometry.center_offset_px + column as f64 * pitch,
                y: f64::from(geometry.margin_px) + row as f64 * pitch + column_shift,
            }
        })
        .collect();

    for slot in &slots {
        tracing::trace!(label = %slot.label(), x = slot.x, y = slot.y, "placed slot");
    }

    slots
}
