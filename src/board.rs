//! Packed Life board: two equally sized page-major buffers stepped in place.
//!
//! The board is cut into pages of 8 rows. Page `p` occupies bytes
//! `p * width .. (p + 1) * width` of each buffer, one byte per column, and
//! bit `b` of a byte is the cell at row `p * 8 + b`. This is the same layout
//! monochrome OLED controllers expect in horizontal addressing mode, so the
//! state buffer can be pushed to a display verbatim.
//!
//! Reading the whole board row by row:
//!
//! ```
//! # let board = pagelife::Board::new(16, 12).unwrap();
//! let state = board.state();
//! for y in 0..board.height() {
//!     let page = &state[(y / 8) * board.width()..][..board.width()];
//!     let mask = 1u8 << (y % 8);
//!     for x in 0..board.width() {
//!         let _alive = page[x] & mask != 0;
//!     }
//! }
//! ```

use crate::common::LifeError;
use crate::config::{self, PAGE_ROWS};
use crate::patterns::Pattern;
use crate::rule::Rule;
use crate::seed::SeedSource;
use crate::sink::Frame;
use crate::window::{column_window, is_alive, neighbor_count, ABOVE, CENTER, FULL};
use alloc::vec::Vec;
use core::fmt;
use core::ops::{Deref, DerefMut};

/// One packed buffer, either allocated by the board or lent by the caller.
enum Cells<'a> {
    Owned(Vec<u8>),
    Borrowed(&'a mut [u8]),
}

impl Deref for Cells<'_> {
    type Target = [u8];
    fn deref(&self) -> &[u8] {
        match self {
            Cells::Owned(v) => v.as_slice(),
            Cells::Borrowed(s) => &**s,
        }
    }
}

impl DerefMut for Cells<'_> {
    fn deref_mut(&mut self) -> &mut [u8] {
        match self {
            Cells::Owned(v) => v.as_mut_slice(),
            Cells::Borrowed(s) => &mut **s,
        }
    }
}

/// Checks dimensions and returns `(page_count, buffer_len)`.
///
/// `buffer_len` is the size of one buffer; the board needs twice that.
pub(crate) fn geometry(width: usize, height: usize) -> Result<(usize, usize), LifeError> {
    if width == 0 || height == 0 {
        return Err(LifeError::InvalidDimension { width, height });
    }
    let len = config::buffer_len(width, height)
        .filter(|len| len.checked_mul(2).is_some())
        .ok_or(LifeError::SizeOverflow { width, height })?;
    Ok((config::page_count(height), len))
}

fn alloc_cells(len: usize) -> Result<Vec<u8>, LifeError> {
    let mut cells = Vec::new();
    cells
        .try_reserve_exact(len)
        .map_err(|_| LifeError::OutOfMemory { bytes: len })?;
    cells.resize(len, 0);
    Ok(cells)
}

/// A fixed-size Life board.
///
/// Boards created with [`Board::new`] own their storage and are
/// `Board<'static>`; boards created with [`Board::with_storage`] borrow
/// the caller's slice for `'a`.
pub struct Board<'a> {
    width: usize,
    height: usize,
    page_count: usize,
    state: Cells<'a>,
    scratch: Cells<'a>,
}

impl Board<'static> {
    /// Creates a board with internally allocated, zeroed storage of
    /// `2 * width * ceil(height / 8)` bytes.
    pub fn new(width: usize, height: usize) -> Result<Self, LifeError> {
        let (page_count, len) = geometry(width, height)?;
        let state = alloc_cells(len)?;
        let scratch = alloc_cells(len)?;
        Ok(Board {
            width,
            height,
            page_count,
            state: Cells::Owned(state),
            scratch: Cells::Owned(scratch),
        })
    }
}

impl<'a> Board<'a> {
    /// Creates a board over caller-supplied storage.
    ///
    /// `storage` must hold at least [`Board::storage_len`] bytes: the first
    /// half becomes the state buffer, the second the scratch buffer, and
    /// any remainder is left untouched. Existing bytes in the first half are
    /// the initial generation.
    pub fn with_storage(width: usize, height: usize, storage: &'a mut [u8]) -> Result<Self, LifeError> {
        let (page_count, len) = geometry(width, height)?;
        let needed = 2 * len;
        if storage.len() < needed {
            return Err(LifeError::StorageTooSmall {
                needed,
                provided: storage.len(),
            });
        }
        let (state, rest) = storage.split_at_mut(len);
        let scratch = &mut rest[..len];
        Ok(Board {
            width,
            height,
            page_count,
            state: Cells::Borrowed(state),
            scratch: Cells::Borrowed(scratch),
        })
    }

    /// Total bytes of storage a `width x height` board needs.
    pub fn storage_len(width: usize, height: usize) -> Result<usize, LifeError> {
        geometry(width, height).map(|(_, len)| 2 * len)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of 8-row pages, `ceil(height / 8)`.
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// The current generation in packed layout, `width * page_count` bytes.
    pub fn state(&self) -> &[u8] {
        &self.state
    }

    /// Writable view of the current generation, for seeding patterns.
    pub fn state_mut(&mut self) -> &mut [u8] {
        &mut self.state
    }

    /// Packed view of the current generation for a [`PixelSink`](crate::PixelSink).
    pub fn frame(&self) -> Frame<'_> {
        Frame::new(self.width, self.height, &self.state)
    }

    /// Fills the state buffer from `source`.
    pub fn seed<S: SeedSource + ?Sized>(&mut self, source: &mut S) {
        source.fill(&mut self.state);
    }

    #[inline]
    fn locate(&self, x: usize, y: usize) -> Result<(usize, u8), LifeError> {
        if x >= self.width || y >= self.height {
            return Err(LifeError::OutOfBounds { x, y });
        }
        Ok(((y / PAGE_ROWS) * self.width + x, 1 << (y % PAGE_ROWS)))
    }

    /// Whether the cell at column `x`, row `y` is alive.
    pub fn get(&self, x: usize, y: usize) -> Result<bool, LifeError> {
        let (idx, mask) = self.locate(x, y)?;
        Ok(self.state[idx] & mask != 0)
    }

    /// Sets the cell at column `x`, row `y`.
    pub fn set(&mut self, x: usize, y: usize, alive: bool) -> Result<(), LifeError> {
        let (idx, mask) = self.locate(x, y)?;
        if alive {
            self.state[idx] |= mask;
        } else {
            self.state[idx] &= !mask;
        }
        Ok(())
    }

    /// Sets every cell of `pattern` with its origin at `(x, y)`.
    ///
    /// Nothing is written unless the whole pattern fits on the board.
    pub fn stamp(&mut self, pattern: &Pattern, x: usize, y: usize) -> Result<(), LifeError> {
        for &(dx, dy) in pattern.cells {
            self.locate(x.saturating_add(dx), y.saturating_add(dy))?;
        }
        for &(dx, dy) in pattern.cells {
            self.set(x + dx, y + dy, true)?;
        }
        Ok(())
    }

    /// Valid-row mask for `page`; the last page may be partial.
    #[inline]
    fn page_mask(&self, page: usize) -> u8 {
        let rows = PAGE_ROWS.min(self.height - page * PAGE_ROWS);
        if rows == PAGE_ROWS {
            0xFF
        } else {
            (1u8 << rows) - 1
        }
    }

    /// Number of live cells. Bits past `height` in the last page are ignored.
    pub fn population(&self) -> usize {
        self.state
            .chunks_exact(self.width)
            .enumerate()
            .map(|(page, bytes)| {
                let mask = self.page_mask(page);
                bytes.iter().map(|b| (b & mask).count_ones() as usize).sum::<usize>()
            })
            .sum()
    }

    /// Iterator over live cells as `(x, y)` in row-major order.
    pub fn live_cells(&self) -> LiveCells<'_, 'a> {
        LiveCells { board: self, idx: 0 }
    }

    /// Advances one generation under Conway's rule.
    pub fn step(&mut self) {
        self.step_with(&Rule::CONWAY);
    }

    /// Advances one generation under `rule`.
    ///
    /// The current generation is copied to scratch first; every window is
    /// read from scratch and every result written to state, so no cell sees
    /// a neighbour from the generation being built.
    pub fn step_with(&mut self, rule: &Rule) {
        let width = self.width;
        let height = self.height;
        let page_count = self.page_count;

        self.scratch.copy_from_slice(&self.state);
        let scratch: &[u8] = &self.scratch;
        let state: &mut [u8] = &mut self.state;

        for page in 0..page_count {
            let current = &scratch[page * width..][..width];
            let above = page.checked_sub(1).map(|p| &scratch[p * width..][..width]);
            let below = (page + 1 < page_count).then(|| &scratch[(page + 1) * width..][..width]);
            let next = &mut state[page * width..][..width];

            let first_row = page * PAGE_ROWS;
            let rows = PAGE_ROWS.min(height - first_row);
            for offset in 0..rows {
                // off-board rows below the last one read as dead
                let edge = if first_row + offset + 1 == height {
                    ABOVE | CENTER
                } else {
                    FULL
                };
                let window = |x: usize| {
                    let up = above.map_or(0, |p| p[x]);
                    let down = below.map_or(0, |p| p[x]);
                    column_window(up, current[x], down, offset) & edge
                };
                let mask = 1u8 << offset;

                let mut left = 0;
                let mut middle = window(0);
                for x in 0..width {
                    let right = if x + 1 < width { window(x + 1) } else { 0 };
                    let alive = rule.next(is_alive(middle), neighbor_count(left, middle, right));
                    if alive {
                        next[x] |= mask;
                    } else {
                        next[x] &= !mask;
                    }
                    left = middle;
                    middle = right;
                }
            }
        }
    }

    /// Advances `generations` steps under `rule`.
    pub fn advance(&mut self, generations: usize, rule: &Rule) {
        for _ in 0..generations {
            self.step_with(rule);
        }
    }

    /// Consumes the board. Owned storage is freed; borrowed storage is
    /// handed back to the caller when the borrow ends.
    pub fn destroy(self) {}
}

/// Iterator over the live cells of a board.
pub struct LiveCells<'b, 'a> {
    board: &'b Board<'a>,
    idx: usize,
}

impl Iterator for LiveCells<'_, '_> {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let total = self.board.width * self.board.height;
        while self.idx < total {
            let (x, y) = (self.idx % self.board.width, self.idx / self.board.width);
            self.idx += 1;
            if self.board.get(x, y).unwrap_or(false) {
                return Some((x, y));
            }
        }
        None
    }
}

impl fmt::Debug for Board<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board<{}x{}, {} pages, {}>:",
            self.width,
            self.height,
            self.page_count,
            match self.state {
                Cells::Owned(_) => "owned",
                Cells::Borrowed(_) => "borrowed",
            }
        )?;
        writeln!(f, "{}", self.frame())
    }
}

impl fmt::Display for Board<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.frame(), f)
    }
}
