use std::time::{Duration, Instant};

use rand::Rng;
use tracing::{debug, info};

use super::config::{SimConfig, TICK_MS_RANGE};
use crate::domain::{Algorithm, Coordinate, LiveSet};

/// Simulation owns the live cells, the generation counter and the play
/// timer. Every mutation goes through one of its operations, and the control
/// loop that owns it processes them one at a time.
pub struct Simulation {
    live: LiveSet,
    generation: u64,
    is_running: bool,
    algorithm: Algorithm,
    tick_interval: Duration,
    since_last_tick: Duration,
    last_advance: Duration,
}

impl Simulation {
    /// Empty, paused simulation
    pub fn new(config: &SimConfig) -> Self {
        Self {
            live: LiveSet::new(),
            generation: 0,
            is_running: false,
            algorithm: config.algorithm,
            tick_interval: config.tick_interval(),
            since_last_tick: Duration::ZERO,
            last_advance: Duration::ZERO,
        }
    }

    /// Pre-seed with live cells (builder pattern)
    pub fn with_cells(mut self, cells: impl IntoIterator<Item = Coordinate>) -> Self {
        self.live.extend(cells);
        self
    }

    pub fn live(&self) -> &LiveSet {
        &self.live
    }

    /// Advances since the last clear
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.live.len()
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    /// Wall time of the most recent advance, in milliseconds
    pub fn last_advance_ms(&self) -> f32 {
        self.last_advance.as_secs_f32() * 1000.0
    }

    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        info!(algorithm = algorithm.id(), "engine strategy changed");
        self.algorithm = algorithm;
    }

    /// Flip one cell. Returns whether it is alive afterwards.
    pub fn toggle(&mut self, cell: Coordinate) -> bool {
        let alive = self.live.toggle(cell);
        debug!(x = cell.x, y = cell.y, alive, "toggled cell");
        alive
    }

    /// Replace the live set with its successor and count the generation.
    fn advance(&mut self) {
        let start = Instant::now();
        self.live = self.algorithm.advance(&self.live);
        self.last_advance = start.elapsed();
        self.generation += 1;
        debug!(
            generation = self.generation,
            population = self.live.len(),
            elapsed_us = self.last_advance.as_micros() as u64,
            "advanced"
        );
    }

    /// Advance exactly one generation. Works while playing too; the timer
    /// restarts so the next automatic tick is a full interval away.
    pub fn step(mut self) -> Self {
        self.advance();
        self.since_last_tick = Duration::ZERO;
        self
    }

    pub fn set_running(mut self, running: bool) -> Self {
        if self.is_running != running {
            info!(generation = self.generation, "{}", if running { "playing" } else { "paused" });
        }
        self.is_running = running;
        self.since_last_tick = Duration::ZERO;
        self
    }

    /// Toggle play/pause state
    pub fn toggle_running(self) -> Self {
        let running = !self.is_running;
        self.set_running(running)
    }

    /// Empty the plane, reset the generation counter and stop playing
    pub fn clear(mut self) -> Self {
        info!(generation = self.generation, population = self.live.len(), "cleared");
        self.live.clear();
        self.generation = 0;
        self.set_running(false)
    }

    /// Fill a `cols` x `rows` rectangle at `origin` with random cells.
    /// Anything outside the rectangle, or past the `i64` range, is discarded.
    pub fn randomize<R: Rng + ?Sized>(
        mut self,
        origin: Coordinate,
        cols: u32,
        rows: u32,
        density: f64,
        rng: &mut R,
    ) -> Self {
        let p = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
        self.live = (0..i64::from(rows))
            .flat_map(|dy| {
                (0..i64::from(cols)).filter_map(move |dx| origin.checked_offset(dx, dy))
            })
            .filter(|_| rng.random_bool(p))
            .collect();
        self.generation = 0;
        info!(population = self.live.len(), "randomized");
        self.set_running(false)
    }

    /// Change the play interval by `delta_ms`, clamped to the accepted range
    pub fn adjust_speed(mut self, delta_ms: i64) -> Self {
        let current = self.tick_interval.as_millis() as i64;
        let next = (current + delta_ms)
            .clamp(*TICK_MS_RANGE.start() as i64, *TICK_MS_RANGE.end() as i64);
        self.tick_interval = Duration::from_millis(next as u64);
        self
    }

    /// Feed elapsed frame time to the play timer.
    ///
    /// At most one generation is advanced per call, always from the live set
    /// as it is now, including toggles made since the previous tick.
    pub fn tick(mut self, elapsed: Duration) -> Self {
        if !self.is_running {
            return self;
        }

        self.since_last_tick += elapsed;
        if self.since_last_tick >= self.tick_interval {
            self.advance();
            self.since_last_tick = Duration::ZERO;
        }

        self
    }
}
