//! Visual styles for bets and the snake
//!
//! Every style reads the same game state; they only differ in which glyph and
//! colour a cell gets. A bet's [`MarkerTag`] is the sole input for its look,
//! so a bet keeps its appearance for as long as it is queued.

use ratatui::style::{Color, Modifier, Style};

use crate::game::MarkerTag;

const FOOD_EMOJIS: &[&str] = &[
    "🍇", "🍈", "🍉", "🍊", "🍋", "🍌", "🍍", "🥭", "🍎", "🍏", "🍐", "🍑", "🍒", "🍓", "🫐",
    "🥝", "🍅", "🥥", "🥑", "🍆", "🥔", "🥕", "🌽", "🥒", "🥬", "🥦", "🧄", "🧅", "🥜", "🌰",
    "🍞", "🥐", "🥖", "🥨", "🥯", "🥞", "🧇", "🧀", "🍖", "🍗", "🥩", "🥓", "🍔", "🍟", "🍕",
    "🌭", "🥪", "🌮", "🌯", "🥙", "🧆", "🥚", "🍘", "🍠", "🍤", "🍥", "🥟", "🦀", "🦞", "🦐",
    "🦑", "🦪", "🍨", "🍩", "🍪", "🎂", "🍰", "🧁", "🥧",
];

const SHAPES: [&str; 4] = ["■ ", "● ", "▲ ", "★ "];

/// How bets and snake segments are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarkerStyle {
    /// Food emoji bets, alien head, eyes for the body
    Emoji,
    /// Coloured geometric shapes
    #[default]
    Shape,
    /// Flat coloured blocks
    Flat,
}

/// A two-column wide glyph with its style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub symbol: &'static str,
    pub style: Style,
}

impl Glyph {
    fn new(symbol: &'static str, style: Style) -> Self {
        Self { symbol, style }
    }
}

impl MarkerStyle {
    /// Glyph for a queued bet
    pub fn marker_glyph(&self, tag: MarkerTag) -> Glyph {
        match self {
            MarkerStyle::Emoji => {
                let idx = tag.0 as usize % FOOD_EMOJIS.len();
                Glyph::new(FOOD_EMOJIS[idx], Style::default())
            }
            MarkerStyle::Shape => {
                // Low bits pick the shape, the rest the colour
                let shape = SHAPES[(tag.0 & 0b11) as usize];
                Glyph::new(
                    shape,
                    Style::default()
                        .fg(tag_color(tag.0 >> 2))
                        .add_modifier(Modifier::BOLD),
                )
            }
            MarkerStyle::Flat => Glyph::new("  ", Style::default().bg(tag_color(tag.0))),
        }
    }

    /// Glyph for the snake segment at `index` (0 is the head)
    pub fn segment_glyph(&self, index: usize) -> Glyph {
        let even = index % 2 == 0;
        match self {
            MarkerStyle::Emoji if index == 0 => Glyph::new("👾", Style::default()),
            MarkerStyle::Emoji => Glyph::new("👀", Style::default()),
            MarkerStyle::Shape if index == 0 => Glyph::new(
                "◆ ",
                Style::default()
                    .fg(Color::Rgb(0x3f, 0x3f, 0x3f))
                    .add_modifier(Modifier::BOLD),
            ),
            MarkerStyle::Shape => {
                let color = if even {
                    Color::Rgb(0x3f, 0x3f, 0x3f)
                } else {
                    Color::Rgb(0x17, 0x1a, 0x14)
                };
                Glyph::new("▓▓", Style::default().fg(color))
            }
            MarkerStyle::Flat => {
                let color = if index == 0 {
                    Color::Rgb(0x11, 0x11, 0x11)
                } else if even {
                    Color::Rgb(0x3f, 0x3f, 0x3f)
                } else {
                    Color::Rgb(0x6a, 0x6a, 0x6a)
                };
                Glyph::new("  ", Style::default().bg(color))
            }
        }
    }

    /// Glyph for an empty cell
    pub fn empty_glyph(&self) -> Glyph {
        Glyph::new(". ", Style::default().fg(Color::DarkGray))
    }
}

/// Spread a tag into a 24-bit colour
fn tag_color(bits: u32) -> Color {
    let mixed = bits.wrapping_mul(0x9E37_79B9);
    Color::Rgb((mixed >> 24) as u8, (mixed >> 16) as u8, (mixed >> 8) as u8)
}
