//! Read-only grid views, text rendering, and per-generation output files.

use crate::grid::{Coord, Grid};
use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Default marker character for a live cell
pub const DEFAULT_LIVE_MARKER: char = '1';

/// A read-only view of a committed generation.
///
/// Borrowed from the engine; taking a snapshot never mutates state.
#[derive(Clone, Copy)]
pub struct Snapshot<'a> {
    grid: &'a Grid,
}

impl<'a> Snapshot<'a> {
    pub(crate) fn new(grid: &'a Grid) -> Self {
        Self { grid }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Whether the cell at `coord` is alive in this generation
    #[inline]
    pub fn is_alive(&self, coord: Coord) -> bool {
        self.grid.get(coord).is_alive()
    }

    /// Collect every live coordinate, row-major
    pub fn live_cells(&self) -> Vec<Coord> {
        let mut cells = Vec::new();
        for y in 0..self.height() {
            for x in 0..self.width() {
                let coord = Coord::new(x, y);
                if self.is_alive(coord) {
                    cells.push(coord);
                }
            }
        }
        cells
    }

    /// Render the grid as text: one line per row (`y` ascending), one
    /// character per column (`x` ascending); live cells as `marker`, dead
    /// cells as a space.
    pub fn render_to<W: Write>(&self, writer: &mut W, marker: char) -> io::Result<()> {
        let mut row = String::with_capacity(self.width() + 1);

        for y in 0..self.height() {
            row.clear();
            for x in 0..self.width() {
                if self.is_alive(Coord::new(x, y)) {
                    row.push(marker);
                } else {
                    row.push(' ');
                }
            }
            row.push('\n');
            writer.write_all(row.as_bytes())?;
        }

        Ok(())
    }

    /// Render to a string with the default marker
    pub fn render(&self) -> String {
        let mut out = Vec::new();
        // Writing to a Vec cannot fail
        self.render_to(&mut out, DEFAULT_LIVE_MARKER)
            .expect("in-memory render");
        String::from_utf8(out).expect("render is valid UTF-8")
    }
}

impl fmt::Display for Snapshot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Writes generation snapshots to deterministically named files.
///
/// The seed state goes to `initial.txt`; generation N (N >= 1) goes to
/// `generation_<N>.txt`, all inside the managed output directory.
pub struct SnapshotWriter {
    dir: PathBuf,
    marker: char,
}

impl SnapshotWriter {
    /// Create a writer, creating the output directory if needed
    pub fn new<P: Into<PathBuf>>(dir: P, marker: char) -> Result<Self, SnapshotError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir, marker })
    }

    /// Write the committed seed state (generation 0)
    pub fn write_initial(&self, snapshot: &Snapshot<'_>) -> Result<PathBuf, SnapshotError> {
        self.write_named("initial.txt", snapshot)
    }

    /// Write a computed generation, `generation` starting at 1
    pub fn write_generation(
        &self,
        snapshot: &Snapshot<'_>,
        generation: u64,
    ) -> Result<PathBuf, SnapshotError> {
        self.write_named(&format!("generation_{}.txt", generation), snapshot)
    }

    fn write_named(&self, name: &str, snapshot: &Snapshot<'_>) -> Result<PathBuf, SnapshotError> {
        let path = self.dir.join(name);
        let file = File::create(&path)?;
        let mut writer = BufWriter::new(file);

        snapshot.render_to(&mut writer, self.marker)?;
        writer.flush()?;

        log::debug!("wrote snapshot: {}", path.display());

        Ok(path)
    }

    /// The managed output directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

/// Errors raised while writing snapshot files
#[derive(Debug)]
pub enum SnapshotError {
    Io(std::io::Error),
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for SnapshotError {}

impl From<std::io::Error> for SnapshotError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
