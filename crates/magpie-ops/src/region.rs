//! Region mapping: intersecting three buffers and slicing them row by row.
//!
//! An operation reads a destination and a source buffer and writes an
//! output buffer. The caller names a region in destination coordinates and
//! the points in source and output space that line up with `region.min`.
//! [`RowAccessor`] clips that region against all three buffers, then hands
//! out one [`Row`] per scanline: three equally long byte runs covering the
//! same pixels in each buffer.
//!
//! ```text
//!   dst space                src space              out space
//!   region.min ──────┐       src_origin ──┐         out_origin ──┐
//!   │ ░░░░░░░░░░░░░ │       │ ░░░░░░░░░ │          │ ░░░░░░░░░ │
//!   └───────────────┘       └───────────┘          └───────────┘
//!          ░ = intersected region, same size in all three
//! ```
//!
//! Offsets may be negative or point past a buffer entirely. That only
//! shrinks the intersection; an empty intersection yields zero rows.
//!
//! # Example
//!
//! ```rust
//! use magpie_core::{AlphaMode, PixelBuffer, Point, Rect};
//! use magpie_ops::region::RowAccessor;
//!
//! let dst = PixelBuffer::new(Rect::from_size(8, 8), AlphaMode::Straight);
//! let src = PixelBuffer::new(Rect::from_size(4, 4), AlphaMode::Straight);
//! let mut out = PixelBuffer::new(Rect::from_size(8, 8), AlphaMode::Straight);
//!
//! // Source placed with its origin at (6, 6): only a 2x2 corner overlaps
//! let acc = RowAccessor::new(
//!     &dst,
//!     Rect::new(6, 6, 8, 8),
//!     &src,
//!     Point::ZERO,
//!     &mut out,
//!     Point::new(6, 6),
//! );
//! assert_eq!(acc.region(), Rect::new(6, 6, 8, 8));
//! assert_eq!(acc.rows(), 2);
//! assert_eq!(acc.row_len(), 8);
//! ```

use std::marker::PhantomData;

use magpie_core::{AlphaMode, BYTES_PER_PIXEL, PixelBuffer, Point, Rect};

use crate::{OpsError, OpsResult};

/// Intersects a destination region with the source and (optionally) output
/// buffers placed at their origins.
///
/// `src_origin` and the output origin are the points in their own buffer's
/// coordinates that correspond to `region.min`. Returns the clipped region
/// in destination coordinates, or `None` when nothing overlaps.
///
/// Collaborators use this to size a freshly allocated output to exactly the
/// pixels an operation will write.
pub fn intersect_region(
    dst_rect: Rect,
    region: Rect,
    src_rect: Rect,
    src_origin: Point,
    out: Option<(Rect, Point)>,
) -> Option<Rect> {
    let r = region.intersect(&dst_rect)?;
    let r = clip_placed(r, src_rect, src_origin, region.min)?;
    match out {
        Some((out_rect, out_origin)) => clip_placed(r, out_rect, out_origin, region.min),
        None => Some(r),
    }
}

/// Clips `r` against `rect` shifted so that `origin` lands on `anchor`.
///
/// Runs in `i64`, so no origin can overflow. The result lies inside `r`.
fn clip_placed(r: Rect, rect: Rect, origin: Point, anchor: Point) -> Option<Rect> {
    let dx = anchor.x as i64 - origin.x as i64;
    let dy = anchor.y as i64 - origin.y as i64;
    let x0 = (r.min.x as i64).max(rect.min.x as i64 + dx);
    let y0 = (r.min.y as i64).max(rect.min.y as i64 + dy);
    let x1 = (r.max.x as i64).min(rect.max.x as i64 + dx);
    let y1 = (r.max.y as i64).min(rect.max.y as i64 + dy);

    if x0 < x1 && y0 < y1 {
        // Bounded by `r` on every side
        Some(Rect::new(x0 as i32, y0 as i32, x1 as i32, y1 as i32))
    } else {
        None
    }
}

/// Maps `p` into the space of a buffer whose `origin` lines up with
/// `anchor`. Only used for corners of a clipped region, which land inside
/// that buffer, so the result fits in `i32`.
fn map_point(p: Point, origin: Point, anchor: Point) -> Point {
    Point::new(
        (p.x as i64 + origin.x as i64 - anchor.x as i64) as i32,
        (p.y as i64 + origin.y as i64 - anchor.y as i64) as i32,
    )
}

/// One buffer's view: base pointer plus the byte offset of the region's
/// top-left pixel.
#[derive(Debug, Clone, Copy)]
struct Plane {
    ptr: *mut u8,
    len: usize,
    start: usize,
    stride: usize,
}

impl Plane {
    /// Read-only view of `buf`. Writable planes swap in a pointer taken
    /// from `bytes_mut` once every other read of the buffer is done.
    fn new(buf: &PixelBuffer, at: Option<Point>) -> Self {
        let start = match at {
            Some(p) => {
                let rect = buf.rect();
                let dy = (p.y as i64 - rect.min.y as i64) as usize;
                let dx = (p.x as i64 - rect.min.x as i64) as usize;
                dy * buf.stride() + dx * BYTES_PER_PIXEL
            }
            None => 0,
        };
        Self {
            ptr: buf.bytes().as_ptr() as *mut u8,
            len: buf.bytes().len(),
            start,
            stride: buf.stride(),
        }
    }

    #[inline]
    fn row_start(&self, row: usize) -> usize {
        self.start + row * self.stride
    }
}

/// Per-row slicing over a destination, a source and an output buffer.
///
/// Built once per operation. Holding it keeps the buffers borrowed for
/// `'a`, so nothing else can touch them while rows are being processed.
pub struct RowAccessor<'a> {
    region: Rect,
    rows: usize,
    row_len: usize,
    dst: Plane,
    src: Plane,
    /// `None` when the output is the destination itself
    out: Option<Plane>,
    alpha: (AlphaMode, AlphaMode, AlphaMode),
    _bufs: PhantomData<(&'a PixelBuffer, &'a mut PixelBuffer)>,
}

// Safety: RowAccessor is Send/Sync because:
// - the source is only ever read
// - a given row index maps to byte ranges that no other row index touches,
//   since every stride is at least one row of pixels
// - `row` is crate-private and unsafe; the only caller, `for_each_row`,
//   holds the accessor mutably and hands out each index once
unsafe impl Send for RowAccessor<'_> {}
unsafe impl Sync for RowAccessor<'_> {}

impl<'a> RowAccessor<'a> {
    /// Maps a region onto a separate output buffer.
    ///
    /// `src_origin` and `out_origin` are the points in the source and output
    /// buffers that line up with `region.min`.
    pub fn new(
        dst: &'a PixelBuffer,
        region: Rect,
        src: &'a PixelBuffer,
        src_origin: Point,
        out: &'a mut PixelBuffer,
        out_origin: Point,
    ) -> Self {
        let clipped = intersect_region(
            dst.rect(),
            region,
            src.rect(),
            src_origin,
            Some((out.rect(), out_origin)),
        );
        let out_at = clipped.map(|r| map_point(r.min, out_origin, region.min));
        let mut out_plane = Plane::new(out, out_at);
        let out_alpha = out.alpha();
        out_plane.ptr = out.bytes_mut().as_mut_ptr();

        Self::build(clipped, dst, region, src, src_origin, Some(out_plane), out_alpha)
    }

    /// Maps a region whose output is written back into `dst`.
    pub fn in_place(
        dst: &'a mut PixelBuffer,
        region: Rect,
        src: &'a PixelBuffer,
        src_origin: Point,
    ) -> Self {
        let clipped = intersect_region(dst.rect(), region, src.rect(), src_origin, None);
        let mut acc = Self::build(clipped, dst, region, src, src_origin, None, dst.alpha());
        acc.dst.ptr = dst.bytes_mut().as_mut_ptr();
        acc
    }

    fn build(
        clipped: Option<Rect>,
        dst: &PixelBuffer,
        region: Rect,
        src: &PixelBuffer,
        src_origin: Point,
        out: Option<Plane>,
        out_alpha: AlphaMode,
    ) -> Self {
        let (r, dst_at, src_at) = match clipped {
            Some(r) => (r, Some(r.min), Some(map_point(r.min, src_origin, region.min))),
            None => (Rect::default(), None, None),
        };

        Self {
            region: r,
            rows: r.height(),
            row_len: r.width() * BYTES_PER_PIXEL,
            dst: Plane::new(dst, dst_at),
            src: Plane::new(src, src_at),
            out,
            alpha: (dst.alpha(), src.alpha(), out_alpha),
            _bufs: PhantomData,
        }
    }

    /// Intersected region in destination coordinates (empty if none).
    #[inline]
    pub fn region(&self) -> Rect {
        self.region
    }

    /// Number of rows to process.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Length in bytes of every row slice.
    #[inline]
    pub fn row_len(&self) -> usize {
        self.row_len
    }

    /// Returns `true` when the output is the destination buffer.
    #[inline]
    pub fn is_in_place(&self) -> bool {
        self.out.is_none()
    }

    /// Alpha representations of (destination, source, output).
    #[inline]
    pub fn alpha_modes(&self) -> (AlphaMode, AlphaMode, AlphaMode) {
        self.alpha
    }

    /// Fails with [`OpsError::UnsupportedLayout`] unless all three buffers
    /// use `alpha`.
    pub fn check_layout(&self, alpha: AlphaMode) -> OpsResult<()> {
        let (d, s, o) = self.alpha;
        if d == alpha && s == alpha && o == alpha {
            Ok(())
        } else {
            Err(OpsError::UnsupportedLayout(format!(
                "expected {alpha} buffers, got dst={d} src={s} out={o}"
            )))
        }
    }

    /// Returns the common alpha representation, if all three buffers agree.
    pub fn common_alpha(&self) -> OpsResult<AlphaMode> {
        let alpha = self.alpha.0;
        self.check_layout(alpha)?;
        Ok(alpha)
    }

    /// Slices row `row` (0-based within [`region`](Self::region)).
    ///
    /// # Safety
    ///
    /// `row` must be below [`rows`](Self::rows), and no other `Row` for the
    /// same index may be alive at the same time.
    #[inline]
    pub(crate) unsafe fn row(&self, row: usize) -> Row<'_> {
        debug_assert!(row < self.rows);
        let len = self.row_len;
        let d = self.dst.row_start(row);
        let s = self.src.row_start(row);
        debug_assert!(d + len <= self.dst.len && s + len <= self.src.len);

        // Safety: offsets stay inside each buffer for every row < rows, and
        // the caller guarantees exclusive use of this row index.
        unsafe {
            let src = std::slice::from_raw_parts(self.src.ptr.add(s), len);
            match &self.out {
                Some(out) => {
                    let o = out.row_start(row);
                    debug_assert!(o + len <= out.len);
                    Row::Split {
                        dst: std::slice::from_raw_parts(self.dst.ptr.add(d), len),
                        src,
                        out: std::slice::from_raw_parts_mut(out.ptr.add(o), len),
                    }
                }
                None => Row::InPlace {
                    dst: std::slice::from_raw_parts_mut(self.dst.ptr.add(d), len),
                    src,
                },
            }
        }
    }
}

impl std::fmt::Debug for RowAccessor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RowAccessor")
            .field("region", &self.region)
            .field("rows", &self.rows)
            .field("row_len", &self.row_len)
            .field("in_place", &self.is_in_place())
            .field("alpha", &self.alpha)
            .finish()
    }
}

/// The same horizontal run of pixels in all three buffers.
#[derive(Debug)]
pub enum Row<'a> {
    /// Output is a separate buffer.
    Split {
        /// Destination pixels
        dst: &'a [u8],
        /// Source pixels
        src: &'a [u8],
        /// Output pixels
        out: &'a mut [u8],
    },
    /// Output overwrites the destination.
    InPlace {
        /// Destination pixels, overwritten with the result
        dst: &'a mut [u8],
        /// Source pixels
        src: &'a [u8],
    },
}

#[inline(always)]
fn px(c: &[u8]) -> [u8; 4] {
    [c[0], c[1], c[2], c[3]]
}

impl Row<'_> {
    /// Length in bytes.
    pub fn len(&self) -> usize {
        match self {
            Row::Split { src, .. } | Row::InPlace { src, .. } => src.len(),
        }
    }

    /// Returns `true` if the row holds no pixels.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Destination pixels (before any write).
    pub fn dst(&self) -> &[u8] {
        match self {
            Row::Split { dst, .. } => dst,
            Row::InPlace { dst, .. } => dst,
        }
    }

    /// Source pixels.
    pub fn src(&self) -> &[u8] {
        match self {
            Row::Split { src, .. } | Row::InPlace { src, .. } => src,
        }
    }

    /// Writes `f(dst_pixel, src_pixel)` for every pixel of the row.
    #[inline]
    pub fn map_pixels<F>(self, mut f: F)
    where
        F: FnMut([u8; 4], [u8; 4]) -> [u8; 4],
    {
        match self {
            Row::Split { dst, src, out } => {
                let pixels = out
                    .chunks_exact_mut(BYTES_PER_PIXEL)
                    .zip(dst.chunks_exact(BYTES_PER_PIXEL))
                    .zip(src.chunks_exact(BYTES_PER_PIXEL));
                for ((o, d), s) in pixels {
                    o.copy_from_slice(&f(px(d), px(s)));
                }
            }
            Row::InPlace { dst, src } => {
                let pixels = dst
                    .chunks_exact_mut(BYTES_PER_PIXEL)
                    .zip(src.chunks_exact(BYTES_PER_PIXEL));
                for (d, s) in pixels {
                    let v = f(px(d), px(s));
                    d.copy_from_slice(&v);
                }
            }
        }
    }

    /// Copies the source run into the output.
    pub fn copy_from_src(self) {
        match self {
            Row::Split { src, out, .. } => out.copy_from_slice(src),
            Row::InPlace { dst, src } => dst.copy_from_slice(src),
        }
    }

    /// Copies the destination run into the output.
    pub fn copy_from_dst(self) {
        if let Row::Split { dst, out, .. } = self {
            out.copy_from_slice(dst);
        }
    }

    /// Sets every output pixel to `px`.
    pub fn fill(self, px: [u8; 4]) {
        let out = match self {
            Row::Split { out, .. } => out,
            Row::InPlace { dst, .. } => dst,
        };
        for o in out.chunks_exact_mut(BYTES_PER_PIXEL) {
            o.copy_from_slice(&px);
        }
    }
}
