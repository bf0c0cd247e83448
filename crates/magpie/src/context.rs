//! Draw calls: operator validation, representation choice and output
//! allocation around the row engine.

use std::borrow::Cow;

use magpie_core::{AlphaMode, PixelBuffer, Point, Rect};
use magpie_ops::{
    BlendMode, BlendOp, CompositeMode, Compositing, OpsError, Operator, RowAccessor, RowIterator,
    intersect_region,
};
use tracing::{debug, trace};

use crate::config::{Config, DefaultOutput};
use crate::error::Result;

/// Where a draw call writes its result.
#[derive(Debug)]
pub enum Output<'a> {
    /// Overwrite the destination.
    ToDst,
    /// Allocate a new image covering exactly the processed region, in the
    /// given representation (the destination's if `None`).
    ToNewImage(Option<AlphaMode>),
    /// Write into an existing image; the point lines up with `region.min`.
    ToImage(&'a mut PixelBuffer, Point),
}

/// Engine settings shared by a series of draw calls.
///
/// # Example
///
/// ```rust
/// use magpie::{Context, Output};
/// use magpie_core::{AlphaMode, PixelBuffer, Point, Rect};
/// use magpie_ops::BlendMode;
///
/// let ctx = Context::default().with_workers(2);
/// let mut dst = PixelBuffer::filled(Rect::from_size(4, 4), AlphaMode::Straight, [0, 128, 255, 255]);
/// let src = PixelBuffer::filled(Rect::from_size(4, 4), AlphaMode::Straight, [255, 128, 0, 255]);
///
/// ctx.draw(&mut dst, Rect::from_size(4, 4), &src, Point::ZERO, BlendMode::Multiply, Some(Output::ToDst))
///     .unwrap();
/// assert_eq!(dst.pixel(0, 0).unwrap(), [0, 64, 0, 255]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    iter: RowIterator,
    default_output: DefaultOutput,
    default_alpha: AlphaMode,
}

impl Default for Context {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl Context {
    /// Creates a context from a config.
    pub fn new(config: &Config) -> Self {
        magpie_core::fixed::init();
        Self {
            iter: RowIterator::new(config.workers),
            default_output: config.default_output,
            default_alpha: config.default_alpha,
        }
    }

    /// Sets the worker count (`<= 1` means serial).
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.iter = RowIterator::new(workers);
        self
    }

    /// Sets the output used when a draw call passes `None`.
    pub fn with_default_output(mut self, output: DefaultOutput) -> Self {
        self.default_output = output;
        self
    }

    /// Sets the representation for pixels entering from outside.
    pub fn with_default_alpha(mut self, alpha: AlphaMode) -> Self {
        self.default_alpha = alpha;
        self
    }

    /// Sets the row scheduler directly.
    pub fn with_iterator(mut self, iter: RowIterator) -> Self {
        self.iter = iter;
        self
    }

    /// Row scheduler.
    pub fn iterator(&self) -> RowIterator {
        self.iter
    }

    /// Output used when a draw call passes `None`.
    pub fn default_output(&self) -> DefaultOutput {
        self.default_output
    }

    /// Representation for pixels entering from outside.
    pub fn default_alpha(&self) -> AlphaMode {
        self.default_alpha
    }

    /// Applies `op` to `region` of `dst` with `src` placed so that
    /// `src_origin` lines up with `region.min`.
    ///
    /// Returns the new image for [`Output::ToNewImage`], `None` otherwise.
    /// An `output` of `None` uses the context's default.
    ///
    /// # Errors
    ///
    /// Rejects invalid operators before touching any buffer.
    pub fn draw(
        &self,
        dst: &mut PixelBuffer,
        region: Rect,
        src: &PixelBuffer,
        src_origin: Point,
        op: impl Into<Operator>,
        output: Option<Output<'_>>,
    ) -> Result<Option<PixelBuffer>> {
        let op = op.into();
        validate(&op)?;

        let output = output.unwrap_or(match self.default_output {
            DefaultOutput::ToDst => Output::ToDst,
            DefaultOutput::ToNewImage => Output::ToNewImage(None),
        });

        match output {
            Output::ToDst => {
                self.draw_to_dst(dst, region, src, src_origin, op)?;
                Ok(None)
            }
            Output::ToNewImage(alpha) => self
                .draw_to_new_image(dst, region, src, src_origin, op, alpha)
                .map(Some),
            Output::ToImage(out, out_origin) => {
                self.draw_to_image(dst, region, src, src_origin, op, out, out_origin)?;
                Ok(None)
            }
        }
    }

    /// Applies `op` and writes the result back into `dst`.
    pub fn draw_to_dst(
        &self,
        dst: &mut PixelBuffer,
        region: Rect,
        src: &PixelBuffer,
        src_origin: Point,
        op: impl Into<Operator>,
    ) -> Result<()> {
        let op = op.into();
        validate(&op)?;

        let alpha = dst.alpha();
        let src = normalized(src, alpha);
        let mut acc = RowAccessor::in_place(dst, region, &src, src_origin);
        debug!(%op, %alpha, region = %acc.region(), "draw to dst");
        op.apply(&self.iter, &mut acc)?;
        Ok(())
    }

    /// Applies `op` into a new image sized to the processed region.
    ///
    /// The image uses `alpha`, or the destination's representation when
    /// `None`. If nothing overlaps the image is empty.
    pub fn draw_to_new_image(
        &self,
        dst: &PixelBuffer,
        region: Rect,
        src: &PixelBuffer,
        src_origin: Point,
        op: impl Into<Operator>,
        alpha: Option<AlphaMode>,
    ) -> Result<PixelBuffer> {
        let op = op.into();
        validate(&op)?;

        let alpha = alpha.unwrap_or(dst.alpha());
        let bounds = intersect_region(dst.rect(), region, src.rect(), src_origin, None)
            .unwrap_or_default();
        let mut out = PixelBuffer::new(bounds, alpha);
        if bounds.is_empty() {
            debug!(%op, %region, "no overlap, returning empty image");
            return Ok(out);
        }

        let dst = normalized(dst, alpha);
        let src = normalized(src, alpha);
        let mut acc = RowAccessor::new(&dst, region, &src, src_origin, &mut out, region.min);
        debug!(%op, %alpha, region = %acc.region(), "draw to new image");
        op.apply(&self.iter, &mut acc)?;
        drop(acc);
        Ok(out)
    }

    /// Applies `op` into `out`, with `out_origin` lined up with
    /// `region.min`.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_to_image(
        &self,
        dst: &PixelBuffer,
        region: Rect,
        src: &PixelBuffer,
        src_origin: Point,
        op: impl Into<Operator>,
        out: &mut PixelBuffer,
        out_origin: Point,
    ) -> Result<()> {
        let op = op.into();
        validate(&op)?;

        let alpha = out.alpha();
        let dst = normalized(dst, alpha);
        let src = normalized(src, alpha);
        let mut acc = RowAccessor::new(&dst, region, &src, src_origin, out, out_origin);
        debug!(%op, %alpha, region = %acc.region(), "draw to image");
        op.apply(&self.iter, &mut acc)?;
        Ok(())
    }

    /// Blends `src` onto `dst` with `mode` and `compositing`.
    #[allow(clippy::too_many_arguments)]
    pub fn blend(
        &self,
        dst: &mut PixelBuffer,
        region: Rect,
        src: &PixelBuffer,
        src_origin: Point,
        mode: BlendMode,
        compositing: Compositing,
        output: Option<Output<'_>>,
    ) -> Result<Option<PixelBuffer>> {
        let op = BlendOp::new(mode).with_compositing(compositing);
        self.draw(dst, region, src, src_origin, op, output)
    }

    /// Composites `src` onto `dst` with a Porter-Duff operator.
    pub fn composite(
        &self,
        dst: &mut PixelBuffer,
        region: Rect,
        src: &PixelBuffer,
        src_origin: Point,
        mode: CompositeMode,
        output: Option<Output<'_>>,
    ) -> Result<Option<PixelBuffer>> {
        self.draw(dst, region, src, src_origin, mode, output)
    }
}

fn validate(op: &Operator) -> Result<()> {
    if op.is_valid() {
        Ok(())
    } else {
        Err(OpsError::InvalidOperator(format!("{op:?}")).into())
    }
}

/// Borrows `buf` if it already uses `alpha`, otherwise converts a copy.
fn normalized(buf: &PixelBuffer, alpha: AlphaMode) -> Cow<'_, PixelBuffer> {
    if buf.alpha() == alpha {
        Cow::Borrowed(buf)
    } else {
        trace!(from = %buf.alpha(), to = %alpha, rect = %buf.rect(), "normalizing copy");
        Cow::Owned(buf.to_alpha(alpha))
    }
}
