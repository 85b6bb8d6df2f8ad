//! Handle-based access to a bounded set of boards.
//!
//! Each live board sits in a slot addressed by a [`BoardId`]. Destroying a
//! board frees its slot for reuse and bumps the slot's generation, so an id
//! held past destruction is reported as [`LifeError::InvalidHandle`]
//! instead of reaching the slot's next occupant.

use crate::board::{geometry, Board};
use crate::common::LifeError;
use crate::config::DEFAULT_MAX_BOARDS;
use alloc::vec::Vec;

/// Stable identifier of a board in a [`BoardTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardId {
    index: usize,
    generation: u32,
}

struct Slot<'a> {
    generation: u32,
    board: Option<Board<'a>>,
}

/// Arena of at most `max_boards` live boards.
pub struct BoardTable<'a> {
    slots: Vec<Slot<'a>>,
    max_boards: usize,
    live: usize,
}

impl<'a> BoardTable<'a> {
    /// A table holding up to [`DEFAULT_MAX_BOARDS`] boards.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MAX_BOARDS)
    }

    pub fn with_capacity(max_boards: usize) -> Self {
        BoardTable {
            slots: Vec::new(),
            max_boards,
            live: 0,
        }
    }

    /// Maximum number of live boards.
    pub fn capacity(&self) -> usize {
        self.max_boards
    }

    /// Number of live boards.
    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    fn reserve_slot(&self, width: usize, height: usize) -> Result<(), LifeError> {
        geometry(width, height)?;
        if self.live >= self.max_boards {
            return Err(LifeError::CapacityExceeded {
                max: self.max_boards,
            });
        }
        Ok(())
    }

    fn insert(&mut self, board: Board<'a>) -> BoardId {
        self.live += 1;
        if let Some(index) = self.slots.iter().position(|s| s.board.is_none()) {
            let slot = &mut self.slots[index];
            slot.board = Some(board);
            return BoardId {
                index,
                generation: slot.generation,
            };
        }
        self.slots.push(Slot {
            generation: 0,
            board: Some(board),
        });
        BoardId {
            index: self.slots.len() - 1,
            generation: 0,
        }
    }

    /// Creates a board with internally allocated storage.
    ///
    /// Dimensions are checked before capacity; nothing is allocated on error.
    pub fn create(&mut self, width: usize, height: usize) -> Result<BoardId, LifeError> {
        self.reserve_slot(width, height)?;
        let board = Board::new(width, height)?;
        Ok(self.insert(board))
    }

    /// Creates a board over caller-supplied storage; see [`Board::with_storage`].
    pub fn create_with_storage(
        &mut self,
        width: usize,
        height: usize,
        storage: &'a mut [u8],
    ) -> Result<BoardId, LifeError> {
        self.reserve_slot(width, height)?;
        let board = Board::with_storage(width, height, storage)?;
        Ok(self.insert(board))
    }

    pub fn board(&self, id: BoardId) -> Result<&Board<'a>, LifeError> {
        self.slots
            .get(id.index)
            .filter(|s| s.generation == id.generation)
            .and_then(|s| s.board.as_ref())
            .ok_or(LifeError::InvalidHandle)
    }

    pub fn board_mut(&mut self, id: BoardId) -> Result<&mut Board<'a>, LifeError> {
        self.slots
            .get_mut(id.index)
            .filter(|s| s.generation == id.generation)
            .and_then(|s| s.board.as_mut())
            .ok_or(LifeError::InvalidHandle)
    }

    /// Read/write view of the board's packed state buffer.
    pub fn get_state(&mut self, id: BoardId) -> Result<&mut [u8], LifeError> {
        self.board_mut(id).map(Board::state_mut)
    }

    /// Advances the board one generation.
    pub fn step(&mut self, id: BoardId) -> Result<(), LifeError> {
        self.board_mut(id).map(Board::step)
    }

    /// Destroys the board and frees its slot. Returns `false` if `id` was
    /// already destroyed or never valid.
    pub fn destroy(&mut self, id: BoardId) -> bool {
        let Some(slot) = self
            .slots
            .get_mut(id.index)
            .filter(|s| s.generation == id.generation)
        else {
            return false;
        };
        match slot.board.take() {
            Some(board) => {
                board.destroy();
                slot.generation = slot.generation.wrapping_add(1);
                self.live -= 1;
                true
            }
            None => false,
        }
    }
}

impl Default for BoardTable<'_> {
    fn default() -> Self {
        Self::new()
    }
}
