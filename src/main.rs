use std::time::Duration;

use macroquad::prelude::*;
use sparse_life::{
    Camera, SimConfig, Simulation,
    input::{self, PanState},
    rendering, ui,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn window_conf(config: &SimConfig) -> Conf {
    let (window_width, window_height) = ui::window_size(config);
    Conf {
        window_title: "Conway's Game of Life - Sparse Plane".to_owned(),
        window_width,
        window_height,
        window_resizable: true,
        ..Default::default()
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sparse_life=info")),
        )
        .init();

    let config = match SimConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!(%err, "invalid configuration");
            std::process::exit(2);
        }
    };

    info!(
        tick_ms = config.tick_interval_ms,
        cols = config.viewport_cols,
        rows = config.viewport_rows,
        algorithm = config.algorithm.id(),
        "starting"
    );

    macroquad::Window::from_config(window_conf(&config), run(config));
}

/// Single control loop: every mutation of the simulation happens here, one
/// frame at a time, so advances never overlap.
async fn run(config: SimConfig) {
    let mut sim = Simulation::new(&config);
    let mut camera = Camera::new();
    let mut pan = PanState::default();
    let density = config.random_density;

    loop {
        let mouse_pos = mouse_position();
        let buttons = ui::create_buttons();

        sim = input::process_button_clicks(sim, &buttons, &camera, mouse_pos, density);
        input::handle_zoom(&mut camera);
        pan.update(&mut camera, mouse_pos);
        input::handle_cell_toggle(&mut sim, &camera, mouse_pos);
        sim = input::process_keyboard_input(sim, &mut camera, density);

        let frame = Duration::try_from_secs_f32(get_frame_time()).unwrap_or_default();
        sim = sim.tick(frame);

        clear_background(BLACK);
        rendering::draw_viewport(sim.live(), &camera);
        rendering::draw_controls(&sim, &camera, &buttons, mouse_pos);

        next_frame().await;
    }
}
