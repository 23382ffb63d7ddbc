//! World simulation engine - generation advance over a double-buffered grid.

use crate::grid::{Coord, Grid};
use crate::seed::Seed;
use crate::snapshot::Snapshot;
use crate::stats::Stats;

/// The simulation world.
///
/// Two grid buffers coexist: `committed` holds the most recently finalized
/// generation and is read-only while a tick runs; `pending` is the write
/// target the next generation is assembled into. [`World::commit`] exchanges
/// the buffers (no copy) and clears the new pending side. Both buffers are
/// allocated once at construction and reused for every generation.
///
/// The engine is single-threaded and never yields mid-operation; one logical
/// generation is a [`World::tick`] followed by a [`World::commit`].
pub struct World {
    // Committed generation: read source during a tick
    committed: Grid,
    // Pending generation: write target during a tick
    pending: Grid,

    // Worklists: every cell alive in the respective buffer, duplicate-free
    alive: Vec<Coord>,
    pending_alive: Vec<Coord>,

    /// Committed generation index (0 = the seed)
    pub generation: u64,

    /// Statistics for the committed generation
    pub stats: Stats,

    // Transition counters for the tick in progress
    born_this_tick: usize,
    survived_this_tick: usize,
    died_this_tick: usize,
}

impl World {
    /// Create an empty world.
    ///
    /// Precondition: `width >= 3` and `height >= 3`. Callers are expected to
    /// validate dimensions before construction (the seed parser does);
    /// smaller grids down to 1x1 are safe but unsupported.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            committed: Grid::new(width, height),
            pending: Grid::new(width, height),
            alive: Vec::new(),
            pending_alive: Vec::new(),
            generation: 0,
            stats: Stats::new(),
            born_this_tick: 0,
            survived_this_tick: 0,
            died_this_tick: 0,
        }
    }

    /// Create a world from a parsed seed and commit it as generation 0.
    pub fn from_seed(seed: &Seed) -> Self {
        let mut world = Self::new(seed.width, seed.height);

        for &coord in &seed.cells {
            world.spawn(coord);
        }

        world.commit();
        world.stats.generation = 0;
        world.stats.live = world.alive.len();

        world
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.committed.width()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.committed.height()
    }

    /// Mark a cell alive in the pending generation.
    ///
    /// Returns `false` without side effects if the cell is already alive in
    /// pending, so duplicate seed coordinates cannot double-add to the
    /// worklist. `coord` must be in bounds.
    pub fn spawn(&mut self, coord: Coord) -> bool {
        debug_assert!(
            self.pending.contains(coord),
            "spawn out of bounds: {}",
            coord
        );

        if self.pending.get(coord).is_alive() {
            return false;
        }

        log::trace!("spawning cell at {}", coord);

        self.pending.get_mut(coord).set_alive();
        self.pending_alive.push(coord);

        true
    }

    /// Finalize the pending generation.
    ///
    /// Exchanges the committed and pending buffers (ownership swap, O(1) -
    /// grids are never copied), then clears the new pending grid and
    /// worklist for the next tick. Used both to turn seed spawns into
    /// generation 0 and to finalize each computed tick.
    pub fn commit(&mut self) {
        std::mem::swap(&mut self.committed, &mut self.pending);
        std::mem::swap(&mut self.alive, &mut self.pending_alive);

        self.pending.clear();
        self.pending_alive.clear();
    }

    /// Compute one generation's transition into the pending buffer.
    ///
    /// Traverses the committed worklist: only live cells and their neighbors
    /// can change state, so nothing else is visited. Every visited cell is
    /// evaluated at most once per tick (the pending evaluated flag makes
    /// re-evaluation a no-op), and neighbor counts are always taken from the
    /// committed grid, so evaluation order cannot perturb the result. The
    /// committed buffer is left untouched; call [`World::commit`] to make
    /// the new state current.
    pub fn tick(&mut self) {
        self.born_this_tick = 0;
        self.survived_this_tick = 0;

        let alive = std::mem::take(&mut self.alive);

        log::debug!("tick: {} live cells in committed generation", alive.len());

        for &coord in &alive {
            self.evaluate(coord);

            for neighbor in self.committed.neighbors(coord) {
                self.evaluate(neighbor);
            }
        }

        self.died_this_tick = alive.len() - self.survived_this_tick;
        self.alive = alive;
    }

    /// One full generation: tick, commit, update counters.
    pub fn step(&mut self) {
        self.tick();
        self.commit();
        self.generation += 1;

        self.stats.generation = self.generation;
        self.stats.live = self.alive.len();
        self.stats.born = self.born_this_tick;
        self.stats.survived = self.survived_this_tick;
        self.stats.died = self.died_this_tick;
    }

    /// Run the simulation for `generations` full steps.
    pub fn run(&mut self, generations: u64) {
        for _ in 0..generations {
            self.step();
        }
    }

    /// Read-only view of the committed generation.
    ///
    /// Never mutates engine state; may be taken any number of times between
    /// ticks.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot::new(&self.committed)
    }

    /// Number of live cells in the committed generation
    #[inline]
    pub fn live_count(&self) -> usize {
        self.alive.len()
    }

    /// Whether the committed generation has no live cells
    #[inline]
    pub fn is_extinct(&self) -> bool {
        self.alive.is_empty()
    }

    /// Decide one cell's transition, at most once per tick.
    ///
    /// A dead cell may be visited as the neighbor of several live cells;
    /// the evaluated flag on the pending cell turns repeat visits into
    /// no-ops. Live outcomes are spawned into pending via the same
    /// duplicate-guarded path as external seeding.
    fn evaluate(&mut self, coord: Coord) {
        if self.pending.get(coord).is_evaluated() {
            return;
        }

        let neighbors = self.committed.live_neighbors(coord);
        let was_alive = self.committed.get(coord).is_alive();

        self.pending.get_mut(coord).set_evaluated();

        // Standard rule: live survives on 2 or 3, dead is born on exactly 3
        let lives = if was_alive {
            neighbors == 2 || neighbors == 3
        } else {
            neighbors == 3
        };

        if lives {
            if was_alive {
                self.survived_this_tick += 1;
            } else {
                self.born_this_tick += 1;
            }
            self.spawn(coord);
        }
    }
}
