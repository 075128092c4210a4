//! Board rendering for the Kalaha GUI
//!
//! Screen layout, 8 columns by 2 rows:
//! ```text
//!  [13] 12  11  10   9   8   7 [ 6]
//!  [  ]  0   1   2   3   4   5 [  ]
//! ```
//! Stores span both rows at the ends.

use egui::{Align2, Color32, CornerRadius, FontId, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::board::{P1_STORE, P2_STORE, TOTAL_PITS};
use crate::{Board, Player};

use super::theme::*;

/// What to highlight on top of the seed counts
#[derive(Debug, Default)]
pub struct BoardMarks<'a> {
    /// Cells already reached by the sowing animation
    pub path: &'a [usize],
    /// Cell that received the last seed
    pub last_pit: Option<usize>,
    /// Pits emptied by the last capture
    pub captured: Option<(usize, usize)>,
    /// Hinted pit
    pub suggested: Option<usize>,
}

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Width of one column
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 80.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked pit, if a legal one was clicked
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        to_move: Player,
        legal: &[usize],
        marks: &BoardMarks<'_>,
        interactive: bool,
    ) -> Option<usize> {
        let available = ui.available_size();

        // 8 columns by 2 rows plus margins, kept at a 4:1 aspect
        let width = (available.x - 20.0).min((available.y - 20.0) * 4.0);
        self.cell_size = (width - 2.0 * BOARD_MARGIN) / 8.0;
        let height = self.cell_size * 2.0 + 2.0 * BOARD_MARGIN;

        let (response, painter) = ui.allocate_painter(Vec2::new(width, height), Sense::click());
        self.board_rect = response.rect;

        // Draw board background
        painter.rect_filled(self.board_rect, CornerRadius::same(16), BOARD_BG);
        painter.rect_stroke(
            self.board_rect,
            CornerRadius::same(16),
            Stroke::new(3.0, BOARD_BORDER),
            egui::StrokeKind::Inside,
        );

        for idx in 0..TOTAL_PITS {
            self.draw_cell(&painter, idx, board[idx]);
        }

        self.draw_path(&painter, marks.path);

        if let Some((pit, opposite)) = marks.captured {
            for idx in [pit, opposite] {
                painter.circle_stroke(
                    self.cell_rect(idx).center(),
                    self.pit_radius() + 2.0,
                    Stroke::new(3.0, CAPTURE_RING),
                );
            }
        }

        if let Some(idx) = marks.last_pit {
            let rect = self.cell_rect(idx);
            painter.circle_filled(
                Pos2::new(rect.center().x, rect.max.y - 8.0),
                LAST_PIT_MARKER_RADIUS,
                LAST_PIT_MARKER,
            );
        }

        if let Some(pit) = marks.suggested {
            painter.circle_stroke(
                self.cell_rect(pit).center(),
                self.pit_radius() + 4.0,
                Stroke::new(3.0, SUGGESTION),
            );
        }

        self.draw_side_labels(&painter, to_move);

        // Handle hover preview and click
        let mut clicked_pit = None;

        if interactive {
            if let Some(pit) = response.hover_pos().and_then(|p| self.screen_to_pit(p)) {
                let is_legal = legal.contains(&pit);
                let hover_color = if is_legal {
                    hover_legal()
                } else {
                    hover_illegal()
                };
                painter.circle_filled(self.cell_rect(pit).center(), self.pit_radius(), hover_color);

                if response.clicked() && is_legal {
                    clicked_pit = Some(pit);
                }
            }
        }

        clicked_pit
    }

    fn pit_radius(&self) -> f32 {
        (self.cell_size - CELL_GAP) * 0.5
    }

    /// Draw one pit or store with its seeds and count
    fn draw_cell(&self, painter: &Painter, idx: usize, seeds: u8) {
        let rect = self.cell_rect(idx);
        let is_store = idx == P1_STORE || idx == P2_STORE;

        if is_store {
            let rounding = CornerRadius::same((rect.width() * 0.5).min(40.0) as u8);
            painter.rect_filled(rect, rounding, STORE_FILL);
            painter.rect_stroke(rect, rounding, Stroke::new(2.0, PIT_RIM), egui::StrokeKind::Inside);
        } else {
            painter.circle_filled(rect.center(), self.pit_radius(), PIT_FILL);
            painter.circle_stroke(rect.center(), self.pit_radius(), Stroke::new(2.0, PIT_RIM));
        }

        self.draw_seeds(painter, rect, seeds);

        let label_pos = if is_store {
            Pos2::new(rect.center().x, rect.min.y + 16.0)
        } else {
            rect.center()
        };
        painter.text(
            label_pos,
            Align2::CENTER_CENTER,
            seeds.to_string(),
            FontId::proportional(self.cell_size * 0.28),
            SEED_COUNT,
        );
    }

    /// Seeds on a ring (pits) or a column of rings (stores)
    fn draw_seeds(&self, painter: &Painter, rect: Rect, seeds: u8) {
        let drawn = seeds.min(MAX_DRAWN_SEEDS) as usize;
        if drawn == 0 {
            return;
        }

        let radius = self.cell_size * SEED_RADIUS_RATIO;
        let orbit = (rect.width().min(rect.height()) * 0.5 - radius * 2.0).max(radius);

        for i in 0..drawn {
            let angle = i as f32 / drawn as f32 * std::f32::consts::TAU;
            let center = rect.center() + Vec2::angled(angle) * orbit;
            painter.circle_filled(center + Vec2::splat(1.0), radius, SEED_SHADOW);
            painter.circle_filled(center, radius, SEED);
        }
    }

    /// Tint every cell on the sowing path, stronger the more seeds it got
    fn draw_path(&self, painter: &Painter, path: &[usize]) {
        let mut hits = [0u8; TOTAL_PITS];
        for &idx in path {
            hits[idx] = hits[idx].saturating_add(1);
        }

        for (idx, &count) in hits.iter().enumerate() {
            if count == 0 {
                continue;
            }
            let rect = self.cell_rect(idx);
            let width = 2.0 + count as f32;
            if idx == P1_STORE || idx == P2_STORE {
                painter.rect_filled(rect, CornerRadius::same(8), path_fill());
                painter.rect_stroke(
                    rect,
                    CornerRadius::same(8),
                    Stroke::new(width, PATH_HIGHLIGHT),
                    egui::StrokeKind::Outside,
                );
            } else {
                painter.circle_filled(rect.center(), self.pit_radius(), path_fill());
                painter.circle_stroke(rect.center(), self.pit_radius(), Stroke::new(width, PATH_HIGHLIGHT));
            }
        }
    }

    /// Player names next to their rows, the side to move emphasized
    fn draw_side_labels(&self, painter: &Painter, to_move: Player) {
        let font = FontId::proportional(12.0);
        for player in Player::ALL {
            let y = match player {
                Player::One => self.board_rect.max.y - BOARD_MARGIN * 0.5,
                Player::Two => self.board_rect.min.y + BOARD_MARGIN * 0.5,
            };
            let color = if player == to_move {
                player_color(player)
            } else {
                Color32::from_rgba_unmultiplied(255, 255, 255, 90)
            };
            let marker = if player == to_move { "▶ " } else { "" };
            painter.text(
                Pos2::new(self.board_rect.center().x, y),
                Align2::CENTER_CENTER,
                format!("{marker}{player}"),
                font.clone(),
                color,
            );
        }
    }

    /// Screen area of a cell
    pub fn cell_rect(&self, idx: usize) -> Rect {
        let origin = self.board_rect.min + Vec2::splat(BOARD_MARGIN);
        let size = self.cell_size;
        let inset = CELL_GAP * 0.5;

        let (col, row, rows) = match idx {
            P2_STORE => (0, 0, 2),
            P1_STORE => (7, 0, 2),
            0..=5 => (idx + 1, 1, 1),
            // Player 2's pits run right to left along the top row
            _ => (13 - idx, 0, 1),
        };

        let min = origin + Vec2::new(col as f32 * size, row as f32 * size);
        Rect::from_min_size(min, Vec2::new(size, size * rows as f32)).shrink(inset)
    }

    /// Convert screen coordinates to a pit index; stores are not clickable
    pub fn screen_to_pit(&self, screen_pos: Pos2) -> Option<usize> {
        (0..TOTAL_PITS)
            .filter(|&idx| idx != P1_STORE && idx != P2_STORE)
            .find(|&idx| {
                let rect = self.cell_rect(idx);
                rect.center().distance(screen_pos) <= self.pit_radius()
            })
    }
}
