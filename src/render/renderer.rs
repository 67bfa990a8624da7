use ratatui::{
    Frame,
    layout::{Alignment, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::style::{Glyph, MarkerStyle};
use crate::game::{Cell, Grid, SnakeGameState};
use crate::metrics::GameMetrics;

const HEADER_HEIGHT: u16 = 3;
const FOOTER_HEIGHT: u16 = 3;
/// Terminal columns per grid cell
const CELL_WIDTH: u16 = 2;

/// Where the board sits on screen, and how screen positions map to cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    header: Rect,
    board: Rect,
    footer: Rect,
}

impl GridLayout {
    pub fn for_area(area: Rect) -> Self {
        let header = Rect {
            height: HEADER_HEIGHT.min(area.height),
            ..area
        };
        let board_height = area.height.saturating_sub(HEADER_HEIGHT + FOOTER_HEIGHT);
        let board = Rect {
            y: area.y + header.height,
            height: board_height,
            ..area
        };
        let footer = Rect {
            y: board.y + board.height,
            height: area.height.saturating_sub(header.height + board.height),
            ..area
        };
        Self {
            header,
            board,
            footer,
        }
    }

    /// The largest grid that fits inside the board's border, never below 1x1
    pub fn grid(&self) -> Grid {
        let cols = self.board.width.saturating_sub(2) / CELL_WIDTH;
        let rows = self.board.height.saturating_sub(2);
        Grid::at_least_one(u32::from(cols), u32::from(rows))
    }

    /// Whether a screen position falls on the board rather than the header or footer
    pub fn on_board(&self, column: u16, row: u16) -> bool {
        self.board.contains(Position::new(column, row))
    }

    /// Cell under a screen position, clamped into `grid`
    pub fn cell_at(&self, column: u16, row: u16, grid: &Grid) -> Cell {
        let col = (i32::from(column) - i32::from(self.board.x) - 1).div_euclid(CELL_WIDTH as i32);
        let row = i32::from(row) - i32::from(self.board.y) - 1;
        grid.clamp(Cell::new(col, row))
    }

    /// The bordered block sized to `grid`, clipped to the board area
    fn board_for(&self, grid: &Grid) -> Rect {
        let width = (grid.cols() as u16).saturating_mul(CELL_WIDTH).saturating_add(2);
        let height = (grid.rows() as u16).saturating_add(2);
        Rect {
            width: width.min(self.board.width),
            height: height.min(self.board.height),
            ..self.board
        }
    }
}

pub struct Renderer {
    style: MarkerStyle,
}

impl Renderer {
    pub fn new(style: MarkerStyle) -> Self {
        Self { style }
    }

    pub fn render(&self, frame: &mut Frame, state: &SnakeGameState, metrics: &GameMetrics) {
        let layout = GridLayout::for_area(frame.area());

        let stats = self.render_stats(state, metrics);
        frame.render_widget(stats, layout.header);

        let grid = state.grid();
        let board = layout.board_for(&grid);
        frame.render_widget(self.render_grid(state), board);

        let controls = self.render_controls();
        frame.render_widget(controls, layout.footer);
    }

    fn cell_glyph(&self, state: &SnakeGameState, cell: Cell) -> Glyph {
        // Snake over bets; the head wins over overlapping segments
        if let Some(index) = state.snake().cells().iter().position(|&c| c == cell) {
            return self.style.segment_glyph(index);
        }
        if let Some(marker) = state.markers().iter().find(|m| m.cell == cell) {
            return self.style.marker_glyph(marker.tag);
        }
        self.style.empty_glyph()
    }

    fn render_grid(&self, state: &SnakeGameState) -> Paragraph<'_> {
        let grid = state.grid();
        let cursor = state.cursor();
        let mut lines = Vec::with_capacity(grid.rows() as usize);

        for row in 0..grid.rows() as i32 {
            let mut spans = Vec::with_capacity(grid.cols() as usize);

            for col in 0..grid.cols() as i32 {
                let cell = Cell::new(col, row);
                let glyph = self.cell_glyph(state, cell);
                let style = if cell == cursor {
                    glyph
                        .style
                        .bg(Color::White)
                        .add_modifier(Modifier::REVERSED)
                } else {
                    glyph.style
                };
                spans.push(Span::styled(glyph.symbol, style));
            }

            lines.push(Line::from(spans));
        }

        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::White))
                .title(" Bet Snake "),
        )
    }

    fn render_stats(&self, state: &SnakeGameState, metrics: &GameMetrics) -> Paragraph<'_> {
        let mode = if state.is_multi_mode() { "ON" } else { "OFF" };
        let text = vec![Line::from(vec![
            Span::styled("Eaten Bets: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                state.eaten().to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Queued: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                state.markers().len().to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Multiple Bet: ", Style::default().fg(Color::Yellow)),
            Span::styled(mode, Style::default().fg(Color::Cyan)),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("Click", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("Space", Style::default().fg(Color::Cyan)),
            Span::raw(" to bet | "),
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" move cursor | "),
            Span::styled("M", Style::default().fg(Color::Cyan)),
            Span::raw(" toggle mode | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(MarkerStyle::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::MarkerTag;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn test_layout_grid_size() {
        // 42 wide: 40 inner columns -> 20 cells; 20 tall: 14 board rows -> 12 cells
        let layout = GridLayout::for_area(Rect::new(0, 0, 42, 20));
        assert_eq!(layout.grid(), Grid::new(20, 12).unwrap());
    }

    #[test]
    fn test_layout_never_below_one_cell() {
        let layout = GridLayout::for_area(Rect::new(0, 0, 3, 4));
        assert_eq!(layout.grid(), Grid::new(1, 1).unwrap());
    }

    #[test]
    fn test_cell_at_maps_and_clamps() {
        let layout = GridLayout::for_area(Rect::new(0, 0, 42, 20));
        let grid = layout.grid();

        // Board starts at row 3; its border takes one row and one column
        assert_eq!(layout.cell_at(1, 4, &grid), Cell::new(0, 0));
        assert_eq!(layout.cell_at(2, 4, &grid), Cell::new(0, 0));
        assert_eq!(layout.cell_at(3, 5, &grid), Cell::new(1, 1));
        assert_eq!(layout.cell_at(0, 0, &grid), Cell::new(0, 0));
        assert_eq!(layout.cell_at(200, 200, &grid), Cell::new(19, 11));
    }

    #[test]
    fn test_on_board_excludes_header_and_footer() {
        let layout = GridLayout::for_area(Rect::new(0, 0, 42, 20));

        assert!(layout.on_board(1, 4));
        assert!(layout.on_board(41, 16));
        assert!(!layout.on_board(5, 1));
        assert!(!layout.on_board(5, 18));
    }

    #[test]
    fn test_render_draws_snake_and_bets() {
        let backend = TestBackend::new(42, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        let grid = GridLayout::for_area(Rect::new(0, 0, 42, 20)).grid();
        let mut state = SnakeGameState::new(grid, Cell::new(5, 5), true);
        state.place_bet(Cell::new(2, 1), MarkerTag(0));
        let renderer = Renderer::new(MarkerStyle::Shape);
        let metrics = GameMetrics::new();

        terminal
            .draw(|frame| renderer.render(frame, &state, &metrics))
            .unwrap();

        let buffer = terminal.backend().buffer();
        // Cell (c, r) starts at screen column 1 + 2c, row 4 + r
        assert_eq!(buffer[(11, 9)].symbol(), "◆");
        assert_eq!(buffer[(5, 5)].symbol(), "■");
        assert_eq!(buffer[(3, 4)].symbol(), ".");
    }
}
