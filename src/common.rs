//! Common types for the board engine: errors reported by creation, handle
//! lookups and cell access.

/// Errors returned by board and table operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifeError {
    /// Width or height is zero.
    InvalidDimension { width: usize, height: usize },
    /// `2 * width * page_count` does not fit in `usize`.
    SizeOverflow { width: usize, height: usize },
    /// The board table already holds its maximum number of live boards.
    CapacityExceeded { max: usize },
    /// Internal storage could not be allocated.
    OutOfMemory { bytes: usize },
    /// Caller-supplied storage is shorter than the two buffers need.
    StorageTooSmall { needed: usize, provided: usize },
    /// Handle refers to a destroyed or never-created board.
    InvalidHandle,
    /// Cell coordinate lies outside `[0, width) x [0, height)`.
    OutOfBounds { x: usize, y: usize },
    /// Rule string is not in `B<digits>/S<digits>` form.
    InvalidRule,
}

impl core::fmt::Display for LifeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LifeError::InvalidDimension { width, height } => {
                write!(f, "InvalidDimension: {}x{} board must have positive sides", width, height)
            }
            LifeError::SizeOverflow { width, height } => {
                write!(f, "SizeOverflow: storage for a {}x{} board exceeds usize", width, height)
            }
            LifeError::CapacityExceeded { max } => {
                write!(f, "CapacityExceeded: at most {} live boards", max)
            }
            LifeError::OutOfMemory { bytes } => {
                write!(f, "OutOfMemory: failed to allocate {} bytes", bytes)
            }
            LifeError::StorageTooSmall { needed, provided } => write!(
                f,
                "StorageTooSmall: need {} bytes, got {}",
                needed, provided
            ),
            LifeError::InvalidHandle => write!(f, "InvalidHandle: board was destroyed or never created"),
            LifeError::OutOfBounds { x, y } => write!(f, "OutOfBounds: x={}, y={}", x, y),
            LifeError::InvalidRule => write!(f, "InvalidRule: expected notation like B3/S23"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LifeError {}
