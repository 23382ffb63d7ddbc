//! # lifesim
//!
//! Batch Conway's Game of Life simulator on a finite, bounded grid.
//!
//! ## Features
//!
//! - **Worklist-driven**: only live cells and their neighbors are evaluated,
//!   never the whole grid
//! - **Double-buffered**: each tick reads a stable committed generation and
//!   assembles the next in a pending buffer; commit is an O(1) swap
//! - **Bounded**: no wraparound; neighbor enumeration is clamped to the grid
//! - **Deterministic**: identical seeds always produce identical runs
//!
//! ## Quick Start
//!
//! ```rust
//! use lifesim::{Seed, World};
//! use std::io::Cursor;
//!
//! // 3x3 grid with a vertical blinker
//! let seed = Seed::from_reader(Cursor::new("3:3\n1,0\n1,1\n1,2\n")).unwrap();
//! let mut world = World::from_seed(&seed);
//!
//! world.run(2);
//!
//! // Period-2 oscillator: back to the seed pattern
//! assert_eq!(world.live_count(), 3);
//! assert_eq!(world.generation, 2);
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use lifesim::Config;
//!
//! let mut config = Config::default();
//! config.run.generations = 10;
//! config.output.live_marker = '*';
//! ```

pub mod config;
pub mod grid;
pub mod seed;
pub mod snapshot;
pub mod stats;
pub mod world;

// Re-export main types
pub use config::Config;
pub use grid::Coord;
pub use seed::Seed;
pub use world::World;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run a quick benchmark over a deterministic dense seed pattern
pub fn benchmark(width: usize, height: usize, generations: u64) -> BenchmarkResult {
    use std::time::Instant;

    let mut world = World::new(width, height);

    // Diagonal stripes: dense enough that activity persists for many
    // generations without any randomness
    for y in 0..height {
        for x in 0..width {
            if (x + 2 * y) % 5 == 0 {
                world.spawn(Coord::new(x, y));
            }
        }
    }
    world.commit();

    let initial_live = world.live_count();

    let start = Instant::now();
    world.run(generations);
    let elapsed = start.elapsed();

    BenchmarkResult {
        width,
        height,
        generations,
        initial_live,
        final_live: world.live_count(),
        elapsed_secs: elapsed.as_secs_f64(),
        generations_per_second: generations as f64 / elapsed.as_secs_f64(),
    }
}

/// Benchmark result
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub width: usize,
    pub height: usize,
    pub generations: u64,
    pub initial_live: usize,
    pub final_live: usize,
    pub elapsed_secs: f64,
    pub generations_per_second: f64,
}

impl std::fmt::Display for BenchmarkResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== Benchmark Results ===")?;
        writeln!(f, "Grid: {}x{}", self.width, self.height)?;
        writeln!(f, "Generations: {}", self.generations)?;
        writeln!(f, "Live cells: {} -> {}", self.initial_live, self.final_live)?;
        writeln!(f, "Time: {:.3}s", self.elapsed_secs)?;
        writeln!(f, "Speed: {:.1} generations/s", self.generations_per_second)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_quick_simulation() {
        let mut world = World::new(16, 16);
        world.spawn(Coord::new(7, 7));
        world.spawn(Coord::new(8, 7));
        world.spawn(Coord::new(7, 8));
        world.spawn(Coord::new(8, 8));
        world.commit();

        world.run(10);

        assert_eq!(world.generation, 10);
        assert_eq!(world.live_count(), 4);
    }

    #[test]
    fn test_benchmark() {
        let result = benchmark(32, 32, 10);

        assert_eq!(result.generations, 10);
        assert!(result.initial_live > 0);
        assert!(result.generations_per_second > 0.0);
    }
}
