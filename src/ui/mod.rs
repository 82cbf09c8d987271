mod button;

pub use button::{Button, ButtonAction};

use macroquad::prelude::{screen_height, screen_width};

use crate::application::SimConfig;

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 40.0;
pub const BUTTON_GAP: f32 = 10.0;
/// Cell edge in pixels at zoom 1.0
pub const CELL_SIZE: f32 = 24.0;
/// The control panel needs this much height regardless of viewport rows
pub const MIN_WINDOW_HEIGHT: f32 = 560.0;

/// Initial window size fitting the configured viewport plus the panel
pub fn window_size(config: &SimConfig) -> (i32, i32) {
    let width = config.viewport_cols as f32 * CELL_SIZE + PANEL_WIDTH;
    let height = (config.viewport_rows as f32 * CELL_SIZE).max(MIN_WINDOW_HEIGHT);
    (width as i32, height as i32)
}

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the width of the grid area
pub fn grid_area_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the height of the grid area
pub fn grid_area_height() -> f32 {
    screen_height()
}

/// Panel buttons stacked from the top
pub fn create_buttons() -> Vec<Button> {
    let px = panel_x();
    [
        ButtonAction::PlayPause,
        ButtonAction::Step,
        ButtonAction::Clear,
        ButtonAction::Randomize,
    ]
    .into_iter()
    .enumerate()
    .map(|(i, action)| {
        let y = 20.0 + i as f32 * (BUTTON_HEIGHT + BUTTON_GAP);
        Button::new(px, y, PANEL_WIDTH, BUTTON_HEIGHT, action)
    })
    .collect()
}
