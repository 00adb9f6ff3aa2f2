//! Axis enumerations: the fixed, ordered set of named components a shape has.

use std::fmt;
use std::iter::FusedIterator;
use std::slice;

use crate::error::{AxisError, Result};

/// A finite, ordered set of named vector components.
///
/// Normally derived with `#[derive(Axis)]` on a fieldless enum, which lists
/// the variants in declaration order.
pub trait Axis: Copy + Eq + fmt::Debug + 'static {
    /// Every axis, in declaration order.
    const ALL: &'static [Self];

    /// Lowercase name of the axis (`Width` is `"width"`).
    fn name(self) -> &'static str;

    /// Position of the axis within [`Axis::ALL`].
    fn index(self) -> usize;

    fn count() -> usize {
        Self::ALL.len()
    }

    /// All axes in declared order.
    fn all() -> Axes<'static, Self> {
        Axes::new(Self::ALL)
    }

    /// Exactly the given axes, in the order given.
    fn only(axes: &[Self]) -> Axes<'_, Self> {
        Axes::new(axes)
    }

    fn from_name(name: &str) -> Result<Self> {
        Self::all().find(|axis| axis.name() == name).ok_or_else(|| {
            log::debug!("rejected axis name {name:?}");
            AxisError::UnknownAxis {
                name: name.to_owned(),
                expected: Self::all().map(Axis::name).collect::<Vec<_>>().join(", "),
            }
        })
    }
}

/// Restartable iterator over a sequence of axes. Clone it to walk again.
#[derive(Clone, Debug)]
pub struct Axes<'a, A> {
    inner: slice::Iter<'a, A>,
}

impl<'a, A> Axes<'a, A> {
    fn new(axes: &'a [A]) -> Self {
        Self { inner: axes.iter() }
    }
}

impl<A: Copy> Iterator for Axes<'_, A> {
    type Item = A;

    fn next(&mut self) -> Option<A> {
        self.inner.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<A: Copy> DoubleEndedIterator for Axes<'_, A> {
    fn next_back(&mut self) -> Option<A> {
        self.inner.next_back().copied()
    }
}

impl<A: Copy> ExactSizeIterator for Axes<'_, A> {}

impl<A: Copy> FusedIterator for Axes<'_, A> {}
