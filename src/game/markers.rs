//! Bets placed on the grid and the order the snake consumes them in

use rand::Rng;
use std::collections::VecDeque;

use super::cell::Cell;
use super::error::GameError;
use super::grid::Grid;

/// Opaque visual identity of a bet, interpreted only by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkerTag(pub u32);

impl MarkerTag {
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self(rng.r#gen())
    }
}

/// A bet placed on a grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker {
    pub cell: Cell,
    pub tag: MarkerTag,
}

impl Marker {
    pub fn new(cell: Cell, tag: MarkerTag) -> Self {
        Self { cell, tag }
    }
}

/// FIFO of bets; insertion order is consumption order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkerQueue {
    markers: VecDeque<Marker>,
}

impl MarkerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a marker.
    ///
    /// In multi mode the marker is appended unless its cell is already taken.
    /// In single mode it replaces the whole queue. Returns whether the queue
    /// changed.
    pub fn place(&mut self, marker: Marker, multi_mode: bool) -> bool {
        if multi_mode {
            if self.contains_cell(marker.cell) {
                return false;
            }
            self.markers.push_back(marker);
        } else {
            self.markers.clear();
            self.markers.push_back(marker);
        }
        true
    }

    pub fn peek_first(&self) -> Option<&Marker> {
        self.markers.front()
    }

    pub fn pop_first(&mut self) -> Result<Marker, GameError> {
        self.markers.pop_front().ok_or(GameError::EmptyQueue)
    }

    /// Apply a mode switch; leaving multi mode keeps only the earliest bet
    pub fn set_mode(&mut self, multi_mode: bool) {
        if !multi_mode {
            self.markers.truncate(1);
        }
    }

    /// Drop every marker that falls outside `grid`; returns how many were dropped
    pub fn retain_within(&mut self, grid: &Grid) -> usize {
        let before = self.markers.len();
        self.markers.retain(|m| grid.contains(m.cell));
        before - self.markers.len()
    }

    pub fn contains_cell(&self, cell: Cell) -> bool {
        self.markers.iter().any(|m| m.cell == cell)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Marker> {
        self.markers.iter()
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}
