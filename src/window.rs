//! Three-cell column windows read straight out of packed page bytes.
//!
//! A window holds the cells of one column at rows `y - 1`, `y` and `y + 1`
//! in bits 0, 1 and 2. Rows 0 and 7 of a page borrow their missing
//! neighbour from the adjacent page's byte in the same column; a page that
//! does not exist contributes zero.

/// Window bit for the row above the centre.
pub const ABOVE: u8 = 0b001;
/// Window bit for the centre row.
pub const CENTER: u8 = 0b010;
/// Window bit for the row below the centre.
pub const BELOW: u8 = 0b100;
/// All three window bits.
pub const FULL: u8 = ABOVE | CENTER | BELOW;

const TOP_BIT: u8 = 0x80;
const BOTTOM_BIT: u8 = 0x01;

/// Extracts the window centred on bit `offset` (0..8) of `byte`.
///
/// `above` and `below` are the same column's bytes in the neighbouring
/// pages, or 0 where the page does not exist.
#[inline]
pub fn column_window(above: u8, byte: u8, below: u8, offset: usize) -> u8 {
    debug_assert!(offset < 8);
    match offset {
        0 => ((byte << 1) & (CENTER | BELOW)) | ((above & TOP_BIT) >> 7),
        7 => ((byte >> 6) & (ABOVE | CENTER)) | ((below & BOTTOM_BIT) << 2),
        _ => (byte >> (offset - 1)) & FULL,
    }
}

/// Live neighbours around the centre of `middle`: every bit of the side
/// windows plus the top and bottom of the middle one.
#[inline]
pub fn neighbor_count(left: u8, middle: u8, right: u8) -> u32 {
    (left & FULL).count_ones() + (middle & (ABOVE | BELOW)).count_ones() + (right & FULL).count_ones()
}

/// Whether the centre cell of `middle` is alive.
#[inline]
pub fn is_alive(middle: u8) -> bool {
    middle & CENTER != 0
}
