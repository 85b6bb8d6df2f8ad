/// Rows packed into one page byte. Bit 0 is the page's top row.
pub const PAGE_ROWS: usize = 8;

/// Board size of the 128x64 OLED panel the engine was sized for.
pub const DEFAULT_WIDTH: usize = 128;
pub const DEFAULT_HEIGHT: usize = 64;

/// Live boards a default [`BoardTable`](crate::BoardTable) accepts.
pub const DEFAULT_MAX_BOARDS: usize = 1;

/// Number of pages needed to hold `height` rows.
pub const fn page_count(height: usize) -> usize {
    height.div_ceil(PAGE_ROWS)
}

/// Byte length of one packed buffer, or `None` on overflow.
pub const fn buffer_len(width: usize, height: usize) -> Option<usize> {
    width.checked_mul(page_count(height))
}
