use log::{debug, warn};
use macroquad::math::Vec2;
use serde::{Deserialize, Serialize};

use super::color::Rgba;
use super::square::Square;

/// What a paint does once the list is at capacity
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OverflowPolicy {
    /// Overwrite slots in order starting from index 0, keeping the length at capacity
    #[default]
    Wrap,
    /// Drop the square at index 0 and append the new one at the end
    EvictOldest,
    /// Refuse the paint
    Reject,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PaintOutcome {
    Appended(usize),
    /// Slot overwritten under `Wrap`, with the square that was there
    Overwrote { index: usize, previous: Square },
    /// Oldest square dropped under `EvictOldest`; new square is at `index`
    Evicted { index: usize, evicted: Square },
    Rejected,
}

impl PaintOutcome {
    /// Index of the newly painted square, if any
    pub fn index(&self) -> Option<usize> {
        match *self {
            PaintOutcome::Appended(index)
            | PaintOutcome::Overwrote { index, .. }
            | PaintOutcome::Evicted { index, .. } => Some(index),
            PaintOutcome::Rejected => None,
        }
    }
}

/// Bounded, paint-ordered list of squares
///
/// Indices are stable between mutations and are used directly as
/// erase/recolor handles. Hit-testing scans forward, so overlapping
/// squares resolve to the earliest painted.
#[derive(Clone, Debug)]
pub struct SquareList {
    squares: Vec<Square>,
    capacity: usize,
    cell_size: f32,
    policy: OverflowPolicy,
    wrap_cursor: usize,
}

impl SquareList {
    pub fn new(capacity: usize, cell_size: f32, policy: OverflowPolicy) -> Self {
        let capacity = capacity.max(1);
        SquareList {
            squares: Vec::with_capacity(capacity.min(1024)),
            capacity,
            cell_size,
            policy,
            wrap_cursor: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.squares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.squares.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    pub fn policy(&self) -> OverflowPolicy {
        self.policy
    }

    pub fn get(&self, index: usize) -> Option<&Square> {
        self.squares.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Square> {
        self.squares.iter()
    }

    pub fn as_slice(&self) -> &[Square] {
        &self.squares
    }

    pub fn clear(&mut self) {
        self.squares.clear();
        self.wrap_cursor = 0;
    }

    /// Replace the whole list, keeping at most `capacity` squares
    pub fn replace_all(&mut self, mut squares: Vec<Square>) {
        if squares.len() > self.capacity {
            warn!(
                "Truncating {} squares to capacity {}",
                squares.len(),
                self.capacity
            );
            squares.truncate(self.capacity);
        }
        self.squares = squares;
        self.wrap_cursor = 0;
    }

    /// Index of the first square containing `point`
    pub fn hit_test(&self, point: Vec2) -> Option<usize> {
        self.squares.iter().position(|sq| sq.contains(point))
    }

    /// Paint the grid cell under `world` with `color`
    pub fn paint(&mut self, world: Vec2, color: Rgba) -> PaintOutcome {
        let square = Square::at_cell(world, self.cell_size, color);

        if !self.is_full() {
            // Refilling after an erase starts the next wrap from index 0 again
            self.wrap_cursor = 0;
            self.squares.push(square);
            return PaintOutcome::Appended(self.squares.len() - 1);
        }

        match self.policy {
            OverflowPolicy::Wrap => {
                let index = self.wrap_cursor % self.capacity;
                let previous = std::mem::replace(&mut self.squares[index], square);
                self.wrap_cursor = (index + 1) % self.capacity;
                debug!("Canvas full, overwrote square at index {}", index);
                PaintOutcome::Overwrote { index, previous }
            }
            OverflowPolicy::EvictOldest => {
                let evicted = self.squares.remove(0);
                self.squares.push(square);
                debug!("Canvas full, evicted oldest square");
                PaintOutcome::Evicted {
                    index: self.squares.len() - 1,
                    evicted,
                }
            }
            OverflowPolicy::Reject => {
                warn!("Canvas full ({} squares), paint rejected", self.capacity);
                PaintOutcome::Rejected
            }
        }
    }

    /// Remove the first square containing `world`, shifting later squares down
    pub fn erase(&mut self, world: Vec2) -> Option<Square> {
        let index = self.hit_test(world)?;
        Some(self.squares.remove(index))
    }

    /// Overwrite the color at `index`; returns the previous color
    pub fn recolor(&mut self, index: usize, color: Rgba) -> Option<Rgba> {
        let square = self.squares.get_mut(index)?;
        Some(std::mem::replace(&mut square.color, color))
    }
}
