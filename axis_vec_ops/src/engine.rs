//! The generic vector engine.
//!
//! Every arithmetic operation is written once here, against the per-axis
//! read/write capability a shape provides. Nothing in this module knows how
//! many axes a shape has or what they are called.

use crate::axis::Axis;
use crate::error::{AxisError, Result};
use crate::report::Report;

/// A fixed-shape `f32` vector addressed by its [`Axis`] type.
///
/// Implementors supply storage access (`get`, `axis_mut`, `from_fn`); all
/// arithmetic comes from the provided methods. Usually derived with
/// `#[derive(AxisVector)]`.
pub trait AxisVector: Sized {
    type Axis: Axis;

    fn get(&self, axis: Self::Axis) -> f32;

    fn axis_mut(&mut self, axis: Self::Axis) -> &mut f32;

    /// Builds a vector by asking for the value of every axis.
    fn from_fn<F>(f: F) -> Self
    where
        F: FnMut(Self::Axis) -> f32;

    fn set(&mut self, axis: Self::Axis, value: f32) {
        *self.axis_mut(axis) = value;
    }

    fn splat(value: f32) -> Self {
        Self::from_fn(|_| value)
    }

    /// Builds a vector from one value per axis, in enumeration order.
    fn try_from_slice(values: &[f32]) -> Result<Self> {
        let expected = Self::Axis::count();
        if values.len() != expected {
            log::debug!("rejected {} values for a {expected}-axis vector", values.len());
            return Err(AxisError::LengthMismatch { expected, got: values.len() });
        }
        Ok(Self::from_fn(|axis| values[axis.index()]))
    }

    /// `(axis, value)` pairs in enumeration order.
    fn components(&self) -> impl Iterator<Item = (Self::Axis, f32)> + '_ {
        Self::Axis::all().map(move |axis| (axis, self.get(axis)))
    }

    /// Textual report such as `x: 2.5, y: 2.5, z: 3.5`.
    fn report(&self) -> Report<'_, Self> {
        Report::new(self)
    }

    /// Replaces every axis value with `f(axis, value)`.
    fn map_in_place<F>(&mut self, mut f: F)
    where
        F: FnMut(Self::Axis, f32) -> f32,
    {
        log::trace!("mapping {} axes of {}", Self::Axis::count(), std::any::type_name::<Self>());
        for axis in Self::Axis::all() {
            let slot = self.axis_mut(axis);
            *slot = f(axis, *slot);
        }
    }

    /// Like [`AxisVector::map_in_place`], restricted to the given axes.
    fn map_axes_in_place<F>(&mut self, axes: &[Self::Axis], mut f: F)
    where
        F: FnMut(Self::Axis, f32) -> f32,
    {
        for axis in Self::Axis::only(axes) {
            let slot = self.axis_mut(axis);
            *slot = f(axis, *slot);
        }
    }

    /// Replaces every axis value with `f(axis, value, other[axis])`.
    fn zip_in_place<F>(&mut self, other: &Self, mut f: F)
    where
        F: FnMut(Self::Axis, f32, f32) -> f32,
    {
        log::trace!("zipping {} axes of {}", Self::Axis::count(), std::any::type_name::<Self>());
        for axis in Self::Axis::all() {
            let rhs = other.get(axis);
            let slot = self.axis_mut(axis);
            *slot = f(axis, *slot, rhs);
        }
    }

    fn add_scalar(&mut self, scale: f32) {
        self.map_in_place(|_, value| value + scale);
    }

    fn sub_scalar(&mut self, scale: f32) {
        self.map_in_place(|_, value| value - scale);
    }

    fn multiply_scalar(&mut self, scale: f32) {
        self.map_in_place(|_, value| value * scale);
    }

    /// Division by zero follows IEEE 754: infinities for nonzero values,
    /// NaN for zeros.
    fn divide_scalar(&mut self, scale: f32) {
        self.map_in_place(|_, value| value / scale);
    }

    fn add_vector(&mut self, other: &Self) {
        self.zip_in_place(other, |_, lhs, rhs| lhs + rhs);
    }

    fn sub_vector(&mut self, other: &Self) {
        self.zip_in_place(other, |_, lhs, rhs| lhs - rhs);
    }

    fn multiply_vector(&mut self, other: &Self) {
        self.zip_in_place(other, |_, lhs, rhs| lhs * rhs);
    }

    fn divide_vector(&mut self, other: &Self) {
        self.zip_in_place(other, |_, lhs, rhs| lhs / rhs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Axis3, Axis4, Vector2, Vector3, Vector4};

    #[test]
    fn scalar_operations() {
        let mut v = Vector3::new(1.0, 2.0, 3.0);
        v.add_scalar(1.0);
        assert_eq!(v, Vector3::new(2.0, 3.0, 4.0));
        v.sub_scalar(0.5);
        assert_eq!(v, Vector3::new(1.5, 2.5, 3.5));
        v.multiply_scalar(2.0);
        assert_eq!(v, Vector3::new(3.0, 5.0, 7.0));
        v.divide_scalar(4.0);
        assert_eq!(v, Vector3::new(0.75, 1.25, 1.75));
    }

    #[test]
    fn vector_operations() {
        let mut v = Vector4::new(1.0, 2.0, 3.0, 4.0);
        let other = Vector4::new(4.0, 3.0, 2.0, 1.0);
        v.add_vector(&other);
        assert_eq!(v, Vector4::splat(5.0));
        v.sub_vector(&other);
        assert_eq!(v, Vector4::new(1.0, 2.0, 3.0, 4.0));
        v.multiply_vector(&other);
        assert_eq!(v, Vector4::new(4.0, 6.0, 6.0, 4.0));
        v.divide_vector(&Vector4::new(2.0, 3.0, 3.0, 4.0));
        assert_eq!(v, Vector4::new(2.0, 2.0, 2.0, 1.0));
    }

    #[test]
    fn divide_by_zero_follows_ieee() {
        let mut v = Vector3::new(2.0, -3.0, 0.0);
        v.divide_scalar(0.0);
        assert_eq!(v.x, f32::INFINITY);
        assert_eq!(v.y, f32::NEG_INFINITY);
        assert!(v.z.is_nan());

        let mut w = Vector2::new(1.0, 0.0);
        w.divide_vector(&Vector2::default());
        assert_eq!(w.x, f32::INFINITY);
        assert!(w.y.is_nan());
    }

    #[test]
    fn every_axis_visited_once() {
        let mut seen = Vec::new();
        let mut v = Vector4::default();
        v.map_in_place(|axis, value| {
            seen.push(axis);
            value
        });
        assert_eq!(seen, Axis4::ALL);
    }

    #[test]
    fn map_axes_touches_only_given_axes() {
        let mut v = Vector3::splat(1.0);
        v.map_axes_in_place(&[Axis3::Z, Axis3::X], |_, value| value * 10.0);
        assert_eq!(v, Vector3::new(10.0, 1.0, 10.0));
    }

    #[test]
    fn capability_accessors() {
        let mut v = Vector3::default();
        v.set(Axis3::Y, 4.0);
        *v.axis_mut(Axis3::Z) += 2.0;
        assert_eq!(v.get(Axis3::Y), 4.0);
        assert_eq!(
            v.components().collect::<Vec<_>>(),
            [(Axis3::X, 0.0), (Axis3::Y, 4.0), (Axis3::Z, 2.0)]
        );
    }

    #[test_log::test]
    fn try_from_slice_checks_length() {
        assert_eq!(Vector3::try_from_slice(&[1.0, 2.0, 3.0]), Ok(Vector3::new(1.0, 2.0, 3.0)));
        assert_eq!(
            Vector3::try_from_slice(&[1.0, 2.0]),
            Err(AxisError::LengthMismatch { expected: 3, got: 2 })
        );
    }
}
