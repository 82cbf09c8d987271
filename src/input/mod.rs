use macroquad::prelude::*;
use tracing::warn;

use crate::application::{Camera, Simulation};
use crate::domain::Coordinate;
use crate::ui::{Button, ButtonAction, CELL_SIZE, grid_area_height, grid_area_width};

/// Tick interval change per Up/Down press
const SPEED_STEP_MS: i64 = 100;

/// Handle zoom with mouse wheel
pub fn handle_zoom(camera: &mut Camera) {
    let wheel = mouse_wheel().1;
    if wheel > 0.0 {
        camera.zoom_in(1.1);
    } else if wheel < 0.0 {
        camera.zoom_out(1.1);
    }
}

/// Tracks a middle-button drag between frames
#[derive(Default)]
pub struct PanState {
    last: Option<(f32, f32)>,
}

impl PanState {
    /// Pan the camera while the middle mouse button is held
    pub fn update(&mut self, camera: &mut Camera, mouse_pos: (f32, f32)) {
        if !is_mouse_button_down(MouseButton::Middle) {
            self.last = None;
            return;
        }
        if let Some((lx, ly)) = self.last {
            camera.pan(mouse_pos.0 - lx, mouse_pos.1 - ly);
        }
        self.last = Some(mouse_pos);
    }
}

/// Toggle the cell under the cursor on left click
pub fn handle_cell_toggle(sim: &mut Simulation, camera: &Camera, mouse_pos: (f32, f32)) {
    if !is_mouse_button_pressed(MouseButton::Left) || mouse_pos.0 >= grid_area_width() {
        return;
    }

    match camera.screen_to_cell(mouse_pos.0, mouse_pos.1, CELL_SIZE) {
        Ok(cell) => {
            sim.toggle(cell);
        }
        Err(err) => warn!(%err, "ignoring click"),
    }
}

/// Fill the visible part of the plane with random cells
fn randomize_visible(sim: Simulation, camera: &Camera, density: f64) -> Simulation {
    match camera.visible_cells(grid_area_width(), grid_area_height(), CELL_SIZE) {
        Ok((min, max)) => {
            let span = |lo: i64, hi: i64| {
                hi.saturating_sub(lo)
                    .saturating_add(1)
                    .clamp(0, i64::from(u32::MAX)) as u32
            };
            let (cols, rows) = (span(min.x, max.x), span(min.y, max.y));
            sim.randomize(min, cols, rows, density, &mut ::rand::rng())
        }
        Err(err) => {
            warn!(%err, "cannot randomize viewport");
            sim
        }
    }
}

/// Apply a control panel action
pub fn apply_action(
    sim: Simulation,
    action: ButtonAction,
    camera: &Camera,
    density: f64,
) -> Simulation {
    match action {
        ButtonAction::PlayPause => sim.toggle_running(),
        ButtonAction::Step => sim.step(),
        ButtonAction::Clear => sim.clear(),
        ButtonAction::Randomize => randomize_visible(sim, camera, density),
    }
}

/// Process keyboard input functionally
pub fn process_keyboard_input(sim: Simulation, camera: &mut Camera, density: f64) -> Simulation {
    let bindings = [
        (KeyCode::Space, ButtonAction::PlayPause),
        (KeyCode::N, ButtonAction::Step),
        (KeyCode::C, ButtonAction::Clear),
        (KeyCode::R, ButtonAction::Randomize),
    ];

    let mut sim = bindings.iter().fold(sim, |s, &(key, action)| {
        if is_key_pressed(key) {
            apply_action(s, action, camera, density)
        } else {
            s
        }
    });

    // Up is faster: a shorter interval
    if is_key_pressed(KeyCode::Up) {
        sim = sim.adjust_speed(-SPEED_STEP_MS);
    }
    if is_key_pressed(KeyCode::Down) {
        sim = sim.adjust_speed(SPEED_STEP_MS);
    }

    if is_key_pressed(KeyCode::A) {
        let next = sim.algorithm().next();
        sim.set_algorithm(next);
    }

    // Home: recenter on the live population, or the origin when empty
    if is_key_pressed(KeyCode::H) {
        camera.reset();
        if let Some((lo, hi)) = sim.live().bounds() {
            let mid = Coordinate::new(lo.x / 2 + hi.x / 2, lo.y / 2 + hi.y / 2);
            camera.center_on(mid, grid_area_width(), grid_area_height(), CELL_SIZE);
        }
    }

    sim
}

/// Process button clicks functionally
pub fn process_button_clicks(
    sim: Simulation,
    buttons: &[Button],
    camera: &Camera,
    mouse_pos: (f32, f32),
    density: f64,
) -> Simulation {
    buttons.iter().fold(sim, |s, button| {
        if button.is_clicked(mouse_pos) {
            apply_action(s, button.action(), camera, density)
        } else {
            s
        }
    })
}
