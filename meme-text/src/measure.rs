//! Ink bounding boxes and the measurement seam used by layout.

/// Pixel bounds of rendered ink, relative to a line origin.
///
/// The origin is the left pen position at the top of the line box, so `y0`
/// is usually a few pixels below zero for capital letters. Width and height
/// are the ink extents, not advances.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BoundingBox {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl BoundingBox {
    /// Zero-area box returned for empty strings.
    pub const EMPTY: BoundingBox = BoundingBox {
        x0: 0,
        y0: 0,
        x1: 0,
        y1: 0,
    };

    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    pub fn width(&self) -> u32 {
        (self.x1 - self.x0).max(0) as u32
    }

    pub fn height(&self) -> u32 {
        (self.y1 - self.y0).max(0) as u32
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Smallest box covering both. An empty side is ignored.
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        BoundingBox {
            x0: self.x0.min(other.x0),
            y0: self.y0.min(other.y0),
            x1: self.x1.max(other.x1),
            y1: self.y1.max(other.y1),
        }
    }
}

/// Anything that can report the ink box of a string at a pixel size.
///
/// Implementations must be deterministic for a given `(font_size, text)`
/// pair and return [`BoundingBox::EMPTY`] for the empty string.
pub trait Measure {
    fn measure(&mut self, font_size: u32, text: &str) -> BoundingBox;
}

impl<M: Measure + ?Sized> Measure for &mut M {
    fn measure(&mut self, font_size: u32, text: &str) -> BoundingBox {
        (**self).measure(font_size, text)
    }
}
