//! Fixed-shape `f32` vectors that share one generic arithmetic engine.
//!
//! A shape is a struct with one field per axis of an [`Axis`] enumeration.
//! Deriving [`AxisVector`](derive@AxisVector) wires the fields to the axes;
//! every elementwise operation then comes from the [`AxisVector`] trait.
//!
//! ```
//! use axis_vec_ops::{Axis, AxisVector};
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq, Axis)]
//! enum ScreenAxis {
//!     Width,
//!     Height,
//! }
//!
//! #[derive(Clone, Copy, Debug, PartialEq, AxisVector)]
//! #[axis_vector(axis = ScreenAxis)]
//! struct Screen {
//!     width: f32,
//!     height: f32,
//! }
//!
//! let mut screen = Screen { width: 800.0, height: 600.0 };
//! screen.divide_scalar(2.0);
//! screen[ScreenAxis::Height] += 1.0;
//! assert_eq!(screen.report().to_string(), "width: 400, height: 301");
//! ```
//!
//! Vector operations only accept the same shape:
//!
//! ```compile_fail
//! use axis_vec_ops::{AxisVector, Vector2, Vector3};
//!
//! let mut a = Vector2::new(1.0, 2.0);
//! a.add_vector(&Vector3::new(1.0, 2.0, 3.0));
//! ```
//!
//! and a shape must give every axis a field:
//!
//! ```compile_fail
//! use axis_vec_ops::{Axis, AxisVector};
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq, Axis)]
//! enum Rgb {
//!     R,
//!     G,
//!     B,
//! }
//!
//! #[derive(AxisVector)]
//! #[axis_vector(axis = Rgb)]
//! struct Color {
//!     r: f32,
//!     g: f32,
//! }
//! ```

extern crate self as axis_vec_ops;

pub mod axis;
pub mod engine;
pub mod error;
pub mod report;
pub mod shapes;

pub use nalgebra;

pub use axis::{Axes, Axis};
pub use axis_vec_ops_derive::{Axis, AxisVector};
pub use engine::AxisVector;
pub use error::{AxisError, Result};
pub use report::Report;
pub use shapes::{Axis2, Axis3, Axis4, Vector2, Vector3, Vector4};
