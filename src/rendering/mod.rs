use macroquad::prelude::*;
use tracing::warn;

use crate::application::{Camera, Simulation};
use crate::domain::{Coordinate, LiveSet};
use crate::ui::{Button, CELL_SIZE, PANEL_WIDTH, grid_area_height, grid_area_width, panel_x};

const ALIVE_COLOR: Color = Color::new(0.576, 0.773, 0.992, 1.0); // Light blue
const DEAD_COLOR: Color = Color::new(0.06, 0.06, 0.06, 1.0);
const GRID_LINE_COLOR: Color = Color::new(0.16, 0.16, 0.16, 1.0);

/// Format large numbers with K/M suffixes
fn format_number(n: usize) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 10_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        format!("{}", n)
    }
}

/// Draw the visible part of the plane.
/// Each visible cell is looked up in the live set; everything else is dead.
pub fn draw_viewport(live: &LiveSet, camera: &Camera) {
    let cell_size = CELL_SIZE * camera.zoom;
    let area_width = grid_area_width();
    let area_height = grid_area_height();

    let (min, max) = match camera.visible_cells(area_width, area_height, CELL_SIZE) {
        Ok(bounds) => bounds,
        Err(err) => {
            warn!(%err, "viewport is off the plane");
            return;
        }
    };

    draw_rectangle(0.0, 0.0, area_width, area_height, DEAD_COLOR);

    for y in min.y..=max.y {
        for x in min.x..=max.x {
            let c = Coordinate::new(x, y);
            if live.contains(c) {
                draw_cell(camera, c, cell_size, ALIVE_COLOR);
            }
        }
    }

    if cell_size >= 6.0 {
        draw_lines(camera, min, max, cell_size, area_width, area_height);
    }
}

fn draw_cell(camera: &Camera, c: Coordinate, cell_size: f32, color: Color) {
    let (sx, sy) = camera.cell_to_screen(c, CELL_SIZE);
    draw_rectangle(sx, sy, cell_size, cell_size, color);
}

fn draw_lines(
    camera: &Camera,
    min: Coordinate,
    max: Coordinate,
    cell_size: f32,
    width: f32,
    height: f32,
) {
    let (x0, y0) = camera.cell_to_screen(min, CELL_SIZE);
    let cols = max.x.saturating_sub(min.x).saturating_add(1);
    let rows = max.y.saturating_sub(min.y).saturating_add(1);

    for i in 0..=cols {
        let x = x0 + i as f32 * cell_size;
        draw_line(x, 0.0, x, height, 1.0, GRID_LINE_COLOR);
    }
    for j in 0..=rows {
        let y = y0 + j as f32 * cell_size;
        draw_line(0.0, y, width, y, 1.0, GRID_LINE_COLOR);
    }
}

/// Draw control panel background
fn draw_panel_background() {
    draw_rectangle(
        panel_x(),
        0.0,
        PANEL_WIDTH,
        screen_height(),
        Color::from_rgba(30, 30, 30, 255),
    );
}

/// Draw the control panel with buttons, counters and help
pub fn draw_controls(sim: &Simulation, camera: &Camera, buttons: &[Button], mouse_pos: (f32, f32)) {
    draw_panel_background();
    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    let px = panel_x();
    let label = Color::from_rgba(180, 180, 180, 255);
    let status_color = if sim.is_running() {
        Color::from_rgba(0, 255, 0, 255)
    } else {
        Color::from_rgba(255, 165, 0, 255)
    };

    let lines = [
        ("Generation:".to_owned(), 245.0, 16.0, WHITE),
        (sim.generation().to_string(), 265.0, 20.0, ALIVE_COLOR),
        ("Population:".to_owned(), 295.0, 16.0, WHITE),
        (format_number(sim.population()), 315.0, 20.0, ALIVE_COLOR),
        ("Status:".to_owned(), 345.0, 16.0, WHITE),
        (
            if sim.is_running() { "Running" } else { "Paused" }.to_owned(),
            363.0,
            16.0,
            status_color,
        ),
        (
            format!("Tick: {} ms", sim.tick_interval().as_millis()),
            390.0,
            14.0,
            label,
        ),
        (
            format!("{} | {:.2} ms", sim.algorithm().name(), sim.last_advance_ms()),
            408.0,
            14.0,
            label,
        ),
        (sim.algorithm().description().to_owned(), 424.0, 12.0, GRAY),
        (format!("Zoom: {:.1}x", camera.zoom), 442.0, 14.0, label),
        ("Controls:".to_owned(), 466.0, 14.0, WHITE),
        ("LMB: Toggle cell".to_owned(), 481.0, 12.0, GRAY),
        ("Space: Play  N: Step".to_owned(), 494.0, 12.0, GRAY),
        ("C: Clear  R: Random".to_owned(), 507.0, 12.0, GRAY),
        ("Up/Down: Speed  A: Engine".to_owned(), 520.0, 12.0, GRAY),
        ("Wheel: Zoom  Mid-drag: Pan".to_owned(), 533.0, 12.0, GRAY),
        ("H: Home".to_owned(), 546.0, 12.0, GRAY),
    ];

    lines.iter().for_each(|(text, y, size, color)| {
        draw_text(text, px + 8.0, *y, *size, *color);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(9_999), "9999");
        assert_eq!(format_number(12_345), "12.3K");
        assert_eq!(format_number(2_500_000), "2.5M");
    }
}
