//! Display side of the engine: a packed frame view and the sink trait that
//! carries it to a screen.

use crate::config::{self, PAGE_ROWS};
use core::fmt;

/// The packed state buffer of one generation, exactly as stored:
/// `width * page_count` bytes, page-major, one byte per column, bit 0 the
/// page's top row. Sinks must not reinterpret the bit order.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Frame<'a> {
    width: usize,
    height: usize,
    bytes: &'a [u8],
}

impl<'a> Frame<'a> {
    pub(crate) fn new(width: usize, height: usize, bytes: &'a [u8]) -> Self {
        Frame { width, height, bytes }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn page_count(&self) -> usize {
        config::page_count(self.height)
    }

    /// The raw packed bytes.
    pub fn bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Bytes of one page, one per column.
    pub fn page(&self, page: usize) -> &'a [u8] {
        &self.bytes[page * self.width..][..self.width]
    }

    /// Whether `(x, y)` is lit. Out-of-range cells are dark.
    pub fn is_lit(&self, x: usize, y: usize) -> bool {
        x < self.width
            && y < self.height
            && self.bytes[(y / PAGE_ROWS) * self.width + x] & (1 << (y % PAGE_ROWS)) != 0
    }
}

impl fmt::Debug for Frame<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Frame")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.bytes.len())
            .finish()
    }
}

impl fmt::Display for Frame<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                let cell = if self.is_lit(x, y) { '■' } else { '□' };
                write!(f, "{}", cell)?;
            }
            if y + 1 < self.height {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Something that can show a packed frame: an OLED over I2C, a terminal,
/// a recorder in tests.
pub trait PixelSink {
    type Error;

    /// Transfers `frame` verbatim to the display surface.
    fn push_frame(&mut self, frame: Frame<'_>) -> Result<(), Self::Error>;
}

impl<S: PixelSink + ?Sized> PixelSink for &mut S {
    type Error = S::Error;

    fn push_frame(&mut self, frame: Frame<'_>) -> Result<(), Self::Error> {
        (**self).push_frame(frame)
    }
}

#[cfg(feature = "std")]
pub use text::TextSink;

#[cfg(feature = "std")]
mod text {
    use super::{Frame, PixelSink};
    use std::io::{self, Write};

    /// Renders frames as `■`/`□` text, one frame per block, separated by a
    /// blank line.
    #[derive(Debug)]
    pub struct TextSink<W> {
        out: W,
        clear_screen: bool,
    }

    impl<W: Write> TextSink<W> {
        pub fn new(out: W) -> Self {
            TextSink {
                out,
                clear_screen: false,
            }
        }

        /// Emits an ANSI clear-and-home before every frame, for animation.
        pub fn clear_screen(mut self, enabled: bool) -> Self {
            self.clear_screen = enabled;
            self
        }

        pub fn into_inner(self) -> W {
            self.out
        }
    }

    impl<W: Write> PixelSink for TextSink<W> {
        type Error = io::Error;

        fn push_frame(&mut self, frame: Frame<'_>) -> io::Result<()> {
            if self.clear_screen {
                write!(self.out, "\x1b[2J\x1b[H")?;
            }
            writeln!(self.out, "{}", frame)?;
            writeln!(self.out)?;
            self.out.flush()
        }
    }
}
