//! Theme constants for the Kalaha GUI

use egui::Color32;

// Board colors - warm wood tones
pub const BOARD_BG: Color32 = Color32::from_rgb(160, 110, 60);
pub const BOARD_BORDER: Color32 = Color32::from_rgb(110, 70, 35);
pub const PIT_FILL: Color32 = Color32::from_rgb(120, 78, 40);
pub const STORE_FILL: Color32 = Color32::from_rgb(100, 64, 32);
pub const PIT_RIM: Color32 = Color32::from_rgb(85, 52, 25);

// Seeds
pub const SEED: Color32 = Color32::from_rgb(235, 225, 200);
pub const SEED_SHADOW: Color32 = Color32::from_rgb(150, 140, 120);
pub const SEED_COUNT: Color32 = Color32::from_rgb(250, 245, 230);

// Markers
pub const LAST_PIT_MARKER: Color32 = Color32::from_rgb(230, 60, 60);
pub const PATH_HIGHLIGHT: Color32 = Color32::from_rgb(255, 210, 90);
pub const CAPTURE_RING: Color32 = Color32::from_rgb(255, 80, 80);
pub const SUGGESTION: Color32 = Color32::from_rgb(90, 200, 255);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

// Functions for colors that can't be const
pub fn hover_legal() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 255, 255, 40)
}

pub fn hover_illegal() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 50, 50, 60)
}

pub fn path_fill() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 210, 90, 45)
}

// Players
pub const PLAYER_ONE: Color32 = Color32::from_rgb(90, 170, 255);
pub const PLAYER_TWO: Color32 = Color32::from_rgb(255, 140, 90);

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const BUTTON_BG: Color32 = Color32::from_rgb(50, 53, 58);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Timer colors
pub const TIMER_NORMAL: Color32 = Color32::from_rgb(80, 200, 120);
pub const TIMER_WARNING: Color32 = Color32::from_rgb(255, 180, 50);
pub const TIMER_CRITICAL: Color32 = Color32::from_rgb(255, 70, 70);

// Sizes
pub const BOARD_MARGIN: f32 = 24.0;
pub const CELL_GAP: f32 = 10.0;
pub const SEED_RADIUS_RATIO: f32 = 0.07;
pub const LAST_PIT_MARKER_RADIUS: f32 = 5.0;
/// Seeds drawn individually before only the count is shown
pub const MAX_DRAWN_SEEDS: u8 = 16;

/// Time each sown seed stays ahead of the next in the path animation
pub const SOW_STEP_SECS: f32 = 0.12;

pub fn player_color(player: crate::Player) -> Color32 {
    match player {
        crate::Player::One => PLAYER_ONE,
        crate::Player::Two => PLAYER_TWO,
    }
}
