//! Terminal rendering of the game state

pub mod renderer;
pub mod style;

pub use renderer::{GridLayout, Renderer};
pub use style::{Glyph, MarkerStyle};
