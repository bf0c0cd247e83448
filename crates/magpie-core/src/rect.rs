//! Point and rectangle types for region selection.
//!
//! # Coordinate System
//!
//! All coordinates are absolute and signed, using the standard image
//! convention:
//! - X increases to the right
//! - Y increases downward
//! - A buffer's bounds need not start at (0, 0)
//!
//! ```text
//! (0,0) ────────► X
//!   │
//!   │   min ┌──────────┐
//!   │       │  Region  │
//!   │       └──────────┘ max (exclusive)
//!   ▼
//!   Y
//! ```
//!
//! # Usage
//!
//! ```rust
//! use magpie_core::{Point, Rect};
//!
//! let a = Rect::new(0, 0, 100, 100);
//! let b = Rect::new(50, 50, 150, 150);
//!
//! let overlap = a.intersect(&b).unwrap();
//! assert_eq!(overlap, Rect::new(50, 50, 100, 100));
//!
//! // Offsets may push a rectangle into negative space
//! let moved = a + Point::new(-200, 0);
//! assert!(moved.intersect(&b).is_none());
//! ```

use std::ops::{Add, Sub};

/// An integer point in absolute image coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    /// X coordinate
    pub x: i32,
    /// Y coordinate
    pub y: i32,
}

impl Point {
    /// The origin, (0, 0).
    pub const ZERO: Point = Point { x: 0, y: 0 };

    /// Creates a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Component-wise addition, `None` on overflow.
    #[inline]
    pub fn checked_add(self, rhs: Point) -> Option<Point> {
        Some(Point::new(self.x.checked_add(rhs.x)?, self.y.checked_add(rhs.y)?))
    }

    /// Component-wise subtraction, `None` on overflow.
    #[inline]
    pub fn checked_sub(self, rhs: Point) -> Option<Point> {
        Some(Point::new(self.x.checked_sub(rhs.x)?, self.y.checked_sub(rhs.y)?))
    }
}

/// Saturates at the `i32` bounds.
impl Add for Point {
    type Output = Point;

    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x.saturating_add(rhs.x), self.y.saturating_add(rhs.y))
    }
}

/// Saturates at the `i32` bounds.
impl Sub for Point {
    type Output = Point;

    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x.saturating_sub(rhs.x), self.y.saturating_sub(rhs.y))
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// A half-open rectangle `[min, max)` in absolute image coordinates.
///
/// # Invariants
///
/// - A rectangle where `min.x >= max.x` or `min.y >= max.y` is empty
/// - Empty rectangles report zero width, height and area
///
/// # Example
///
/// ```rust
/// use magpie_core::Rect;
///
/// let rect = Rect::new(10, 20, 110, 70);
/// assert_eq!(rect.width(), 100);
/// assert_eq!(rect.height(), 50);
/// assert_eq!(rect.area(), 5000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// Top-left corner (inclusive)
    pub min: Point,
    /// Bottom-right corner (exclusive)
    pub max: Point,
}

impl Rect {
    /// Creates a rectangle from two corners.
    ///
    /// Swapped coordinates are normalized so that `min <= max` on both axes.
    #[inline]
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        let (min_x, max_x) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        let (min_y, max_y) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };
        Self {
            min: Point::new(min_x, min_y),
            max: Point::new(max_x, max_y),
        }
    }

    /// Creates a rectangle at the origin with the given size.
    ///
    /// # Example
    ///
    /// ```rust
    /// use magpie_core::{Point, Rect};
    ///
    /// let rect = Rect::from_size(1920, 1080);
    /// assert_eq!(rect.min, Point::ZERO);
    /// assert_eq!(rect.max, Point::new(1920, 1080));
    /// ```
    #[inline]
    pub fn from_size(width: u32, height: u32) -> Self {
        let w = i32::try_from(width).unwrap_or(i32::MAX);
        let h = i32::try_from(height).unwrap_or(i32::MAX);
        Self::new(0, 0, w, h)
    }

    /// Width in pixels, 0 for an empty rectangle.
    #[inline]
    pub fn width(&self) -> usize {
        if self.max.x > self.min.x {
            (self.max.x as i64 - self.min.x as i64) as usize
        } else {
            0
        }
    }

    /// Height in pixels, 0 for an empty rectangle.
    #[inline]
    pub fn height(&self) -> usize {
        if self.max.y > self.min.y {
            (self.max.y as i64 - self.min.y as i64) as usize
        } else {
            0
        }
    }

    /// Area in pixels.
    #[inline]
    pub fn area(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }

    /// Returns `true` if the rectangle contains no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    /// Returns `true` if the point (x, y) is inside this rectangle.
    ///
    /// Inclusive on the min edges, exclusive on the max edges.
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.min.x && x < self.max.x && y >= self.min.y && y < self.max.y
    }

    /// Returns this rectangle translated by `delta`, saturating at the `i32`
    /// bounds.
    #[inline]
    pub fn translate(&self, delta: Point) -> Rect {
        Rect {
            min: self.min + delta,
            max: self.max + delta,
        }
    }

    /// Returns the intersection of two rectangles.
    ///
    /// Returns `None` if the rectangles don't overlap on either axis.
    ///
    /// # Example
    ///
    /// ```rust
    /// use magpie_core::Rect;
    ///
    /// let a = Rect::new(0, 0, 100, 100);
    /// let b = Rect::new(50, 50, 150, 150);
    /// assert_eq!(a.intersect(&b), Some(Rect::new(50, 50, 100, 100)));
    ///
    /// let c = Rect::new(100, 0, 200, 100);
    /// assert_eq!(a.intersect(&c), None);
    /// ```
    #[inline]
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let min = Point::new(self.min.x.max(other.min.x), self.min.y.max(other.min.y));
        let max = Point::new(self.max.x.min(other.max.x), self.max.y.min(other.max.y));

        if min.x < max.x && min.y < max.y {
            Some(Rect { min, max })
        } else {
            None
        }
    }
}

impl Add<Point> for Rect {
    type Output = Rect;

    #[inline]
    fn add(self, rhs: Point) -> Rect {
        self.translate(rhs)
    }
}

impl Sub<Point> for Rect {
    type Output = Rect;

    #[inline]
    fn sub(self, rhs: Point) -> Rect {
        Rect {
            min: self.min - rhs,
            max: self.max - rhs,
        }
    }
}

impl std::fmt::Display for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}
