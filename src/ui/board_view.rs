//! Board rendering for the Renju GUI

use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::rules::{is_forbidden_placement, line_stones};
use crate::{Board, Game, Pos, Stone};

use super::theme::*;

/// What the pointer is over this frame
pub struct BoardInput {
    pub clicked: Option<Pos>,
    /// Forbidden rule Black would break at the hovered cell
    pub hover_forbidden: Option<crate::ForbiddenMove>,
}

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
    /// Side length of the board being drawn
    size: usize,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 30.0,
            board_rect: Rect::NOTHING,
            size: crate::DEFAULT_BOARD_SIZE,
        }
    }
}

impl BoardView {
    /// Render the board and report clicks and hover state
    pub fn show(&mut self, ui: &mut egui::Ui, game: &Game, accepts_input: bool) -> BoardInput {
        let board = game.board();
        self.size = board.size();

        let available_size = ui.available_size();

        // Calculate board size to fit available space
        let board_px = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_px - 2.0 * BOARD_MARGIN) / (self.size as f32 - 1.0);

        let (response, painter) = ui.allocate_painter(Vec2::new(board_px, board_px), Sense::click());

        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);
        self.draw_grid(&painter);
        self.draw_star_points(&painter);
        self.draw_coordinates(&painter);
        self.draw_stones(&painter, board);

        if let Some(pos) = game.last_move() {
            self.draw_last_move_marker(&painter, pos);
        }

        if let Some(line) = game.win_line() {
            self.draw_winning_line(&painter, &line_stones(board, &line));
        }

        let mut input = BoardInput {
            clicked: None,
            hover_forbidden: None,
        };

        if !accepts_input || game.is_over() {
            return input;
        }

        let Some(hover) = response.hover_pos().and_then(|p| self.screen_to_board(p)) else {
            return input;
        };

        let turn = game.current_player();
        if board.is_empty(hover) {
            if turn == Stone::Black {
                let mut probe = board.clone();
                input.hover_forbidden = is_forbidden_placement(&mut probe, hover);
            }
            let is_valid = input.hover_forbidden.is_none();
            self.draw_hover_preview(&painter, hover, turn, is_valid);
        }

        // Illegal clicks still go through so the game can report why
        if response.clicked() {
            input.clicked = Some(hover);
        }

        input
    }

    /// Draw the grid lines
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let extent = BOARD_MARGIN + (self.size as f32 - 1.0) * self.cell_size;

        for i in 0..self.size {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;

            // Vertical line
            let start = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN);
            let end = self.board_rect.min + Vec2::new(offset, extent);
            painter.line_segment([start, end], stroke);

            // Horizontal line
            let start = self.board_rect.min + Vec2::new(BOARD_MARGIN, offset);
            let end = self.board_rect.min + Vec2::new(extent, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    /// Draw star points (hoshi)
    fn draw_star_points(&self, painter: &Painter) {
        for pos in star_points(self.size) {
            let center = self.board_to_screen(pos);
            painter.circle_filled(center, STAR_POINT_RADIUS, STAR_POINT);
        }
    }

    /// Draw coordinate labels: letters for columns, numbers for rows
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(12.0);

        for col in 0..self.size {
            let letter = (b'A' + col as u8) as char;
            let x = self.board_rect.min.x + BOARD_MARGIN + col as f32 * self.cell_size;

            let pos = Pos2::new(x, self.board_rect.min.y + 12.0);
            painter.text(pos, egui::Align2::CENTER_CENTER, letter, font.clone(), GRID_LINE);

            let pos = Pos2::new(x, self.board_rect.max.y - 12.0);
            painter.text(pos, egui::Align2::CENTER_CENTER, letter, font.clone(), GRID_LINE);
        }

        for row in 0..self.size {
            let num = row + 1;
            let y = self.board_rect.min.y + BOARD_MARGIN + row as f32 * self.cell_size;

            let pos = Pos2::new(self.board_rect.min.x + 12.0, y);
            painter.text(pos, egui::Align2::CENTER_CENTER, num.to_string(), font.clone(), GRID_LINE);

            let pos = Pos2::new(self.board_rect.max.x - 12.0, y);
            painter.text(pos, egui::Align2::CENTER_CENTER, num.to_string(), font.clone(), GRID_LINE);
        }
    }

    fn draw_stones(&self, painter: &Painter, board: &Board) {
        for pos in board.positions() {
            let stone = board.get(pos);
            if stone != Stone::Empty {
                self.draw_stone(painter, pos, stone);
            }
        }
    }

    /// Draw a single stone with visual polish
    fn draw_stone(&self, painter: &Painter, pos: Pos, stone: Stone) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;
        let shadow_offset = Vec2::new(2.0, 2.0);

        match stone {
            Stone::Black => {
                painter.circle_filled(
                    center + shadow_offset,
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 60),
                );
                painter.circle_filled(center, radius, BLACK_STONE);

                // Highlight
                let highlight_offset = Vec2::new(-radius * 0.3, -radius * 0.3);
                painter.circle_filled(center + highlight_offset, radius * 0.2, BLACK_STONE_HIGHLIGHT);
            }
            Stone::White => {
                painter.circle_filled(
                    center + shadow_offset,
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 40),
                );
                painter.circle_filled(center, radius, WHITE_STONE);
                painter.circle_stroke(center, radius * 0.85, Stroke::new(radius * 0.1, WHITE_STONE_SHADOW));
            }
            Stone::Empty => {}
        }
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        painter.circle_filled(center, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Draw winning line highlight
    fn draw_winning_line(&self, painter: &Painter, line: &[Pos]) {
        let stroke = Stroke::new(4.0, WIN_HIGHLIGHT);

        for pair in line.windows(2) {
            let start = self.board_to_screen(pair[0]);
            let end = self.board_to_screen(pair[1]);
            painter.line_segment([start, end], stroke);
        }

        for &pos in line {
            let center = self.board_to_screen(pos);
            let radius = self.cell_size * STONE_RADIUS_RATIO + 3.0;
            painter.circle_stroke(center, radius, stroke);
        }
    }

    /// Translucent stone, or a red cross where Black may not play
    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, turn: Stone, is_valid: bool) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;

        if is_valid {
            let color = match turn {
                Stone::Black => Color32::from_rgba_unmultiplied(20, 20, 20, 80),
                Stone::White => Color32::from_rgba_unmultiplied(240, 240, 240, 80),
                Stone::Empty => return,
            };
            painter.circle_filled(center, radius, color);
            return;
        }

        painter.circle_filled(center, radius, hover_forbidden());
        let d = radius * 0.5;
        let stroke = Stroke::new(2.5, FORBIDDEN_MARK);
        painter.line_segment([center + Vec2::new(-d, -d), center + Vec2::new(d, d)], stroke);
        painter.line_segment([center + Vec2::new(-d, d), center + Vec2::new(d, -d)], stroke);
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let x = ((relative.x - BOARD_MARGIN + self.cell_size * 0.5) / self.cell_size).floor() as i32;
        let y = ((relative.y - BOARD_MARGIN + self.cell_size * 0.5) / self.cell_size).floor() as i32;

        let size = self.size as i32;
        if (0..size).contains(&x) && (0..size).contains(&y) {
            Some(Pos::new(x as u8, y as u8))
        } else {
            None
        }
    }

    /// Convert board position to screen coordinates
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let x = self.board_rect.min.x + BOARD_MARGIN + pos.x as f32 * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + pos.y as f32 * self.cell_size;
        Pos2::new(x, y)
    }
}

/// Centre point plus the four corner points three lines in, on boards big
/// enough to have them
fn star_points(size: usize) -> Vec<Pos> {
    let c = (size / 2) as u8;
    if size < 9 {
        return vec![Pos::new(c, c)];
    }
    let near = 3u8;
    let far = (size - 4) as u8;
    vec![
        Pos::new(near, near),
        Pos::new(far, near),
        Pos::new(c, c),
        Pos::new(near, far),
        Pos::new(far, far),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_points_standard_board() {
        let points = star_points(15);
        assert!(points.contains(&Pos::new(7, 7)));
        assert!(points.contains(&Pos::new(3, 3)));
        assert!(points.contains(&Pos::new(11, 11)));
        assert_eq!(star_points(7), vec![Pos::new(3, 3)]);
    }

    #[test]
    fn test_screen_board_round_trip() {
        let view = BoardView {
            cell_size: 30.0,
            board_rect: Rect::from_min_size(Pos2::ZERO, Vec2::splat(500.0)),
            size: 15,
        };
        let pos = Pos::new(4, 9);
        assert_eq!(view.screen_to_board(view.board_to_screen(pos)), Some(pos));
        assert_eq!(view.screen_to_board(Pos2::new(-50.0, 10.0)), None);
    }
}
