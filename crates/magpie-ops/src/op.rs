//! Operator model and dispatch.
//!
//! An [`Operator`] is either a Porter-Duff [`CompositeMode`] or a
//! [`BlendOp`] (a [`BlendMode`] plus its [`Compositing`] flag). Operators
//! are plain values; [`Operator::apply`] checks the buffer layout and then
//! hands the rows to the matching kernel family.
//!
//! # Example
//!
//! ```rust
//! use magpie_ops::{BlendMode, BlendOp, Compositing, CompositeMode, Operator};
//!
//! let op: Operator = "source-over".parse().unwrap();
//! assert_eq!(op, Operator::Composite(CompositeMode::SourceOver));
//!
//! let op = Operator::from(BlendOp::new(BlendMode::Screen).with_compositing(Compositing::BlendOnly));
//! assert!(op.is_valid());
//! assert_eq!(op.to_string(), "screen:blend-only");
//! ```

use std::str::FromStr;

use tracing::trace;

use crate::blend::{BlendMode, Compositing, apply_blend};
use crate::composite::{CompositeMode, apply_composite};
use crate::iter::RowIterator;
use crate::region::RowAccessor;
use crate::{OpsError, OpsResult};

/// Lowercases and strips `-`, `_` and spaces, so that `source-over`,
/// `source_over` and `SourceOver` all compare equal.
pub(crate) fn normalize_name(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Blend mode together with its compositing flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlendOp {
    /// Channel kernel.
    pub mode: BlendMode,
    /// How alpha governs the mix.
    pub compositing: Compositing,
}

impl BlendOp {
    /// Blend with full compositing ([`Compositing::All`]).
    pub fn new(mode: BlendMode) -> Self {
        Self {
            mode,
            compositing: Compositing::All,
        }
    }

    /// Replaces the compositing flag.
    pub fn with_compositing(mut self, compositing: Compositing) -> Self {
        self.compositing = compositing;
        self
    }
}

impl From<BlendMode> for BlendOp {
    fn from(mode: BlendMode) -> Self {
        Self::new(mode)
    }
}

impl std::fmt::Display for BlendOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.compositing == Compositing::All {
            write!(f, "{}", self.mode)
        } else {
            write!(f, "{}:{}", self.mode, self.compositing)
        }
    }
}

/// Any operation the engine can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Porter-Duff compositing.
    Composite(CompositeMode),
    /// Blend mode.
    Blend(BlendOp),
}

impl Operator {
    /// True if every id and flag inside the operator is one of the defined
    /// values.
    ///
    /// Typed operators are valid by construction; this re-derives each part
    /// from its raw value so that nothing outside the enumerations ever
    /// reaches the dispatch.
    pub fn is_valid(&self) -> bool {
        match *self {
            Self::Composite(mode) => CompositeMode::from_id(mode.id()) == Ok(mode),
            Self::Blend(op) => {
                BlendMode::from_id(op.mode.id()) == Ok(op.mode)
                    && Compositing::from_bits(op.compositing.bits()) == Ok(op.compositing)
            }
        }
    }

    /// Display name: the mode name, with `:<compositing>` appended for
    /// blends that don't use [`Compositing::All`].
    pub fn name(&self) -> String {
        self.to_string()
    }

    /// Runs the operator over every row of `acc`.
    ///
    /// # Errors
    ///
    /// - [`OpsError::InvalidOperator`] if [`is_valid`](Self::is_valid) fails
    /// - [`OpsError::UnsupportedLayout`] if the three buffers don't share
    ///   one alpha representation
    ///
    /// Both are checked before any byte is written.
    pub fn apply(&self, iter: &RowIterator, acc: &mut RowAccessor<'_>) -> OpsResult<()> {
        if !self.is_valid() {
            return Err(OpsError::InvalidOperator(format!("{self:?}")));
        }
        let alpha = acc.common_alpha()?;
        trace!(
            op = %self,
            %alpha,
            rows = acc.rows(),
            workers = iter.effective_workers(acc.rows()),
            "apply"
        );

        match *self {
            Self::Composite(mode) => apply_composite(mode, alpha, iter, acc),
            Self::Blend(op) => apply_blend(op.mode, op.compositing, alpha, iter, acc),
        }
    }
}

impl From<CompositeMode> for Operator {
    fn from(mode: CompositeMode) -> Self {
        Self::Composite(mode)
    }
}

impl From<BlendMode> for Operator {
    fn from(mode: BlendMode) -> Self {
        Self::Blend(BlendOp::new(mode))
    }
}

impl From<BlendOp> for Operator {
    fn from(op: BlendOp) -> Self {
        Self::Blend(op)
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Composite(mode) => mode.fmt(f),
            Self::Blend(op) => op.fmt(f),
        }
    }
}

impl FromStr for Operator {
    type Err = OpsError;

    /// Parses `<composite-mode>`, `<blend-mode>` or
    /// `<blend-mode>:<compositing>`.
    fn from_str(s: &str) -> OpsResult<Self> {
        if let Some((mode, flag)) = s.split_once(':') {
            let op = BlendOp::new(mode.parse()?).with_compositing(flag.parse()?);
            return Ok(Self::Blend(op));
        }
        if let Ok(mode) = s.parse::<CompositeMode>() {
            return Ok(Self::Composite(mode));
        }
        s.parse::<BlendMode>()
            .map(Self::from)
            .map_err(|_| OpsError::InvalidOperator(format!("unknown operator '{s}'")))
    }
}
