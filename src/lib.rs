// Domain layer - sparse plane and the generation engine
pub mod domain;

// Application layer - simulation control, camera, configuration
pub mod application;

pub mod error;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Algorithm, Cell, Coordinate, LiveSet, advance};
pub use application::{Camera, SimConfig, Simulation};
pub use error::{ConfigError, CoordinateError};
pub use ui::Button;
