mod camera;
mod config;
mod simulation;

pub use camera::{Camera, MAX_ZOOM, MIN_ZOOM};
pub use config::{SimConfig, DENSITY_RANGE, TICK_MS_RANGE, VIEWPORT_RANGE};
pub use simulation::Simulation;
