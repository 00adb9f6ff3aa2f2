//! Stock 2, 3 and 4 component shapes.

use std::fmt;

use crate::{Axis, AxisVector};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Axis)]
pub enum Axis2 {
    X,
    Y,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Axis)]
pub enum Axis3 {
    X,
    Y,
    Z,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Axis)]
pub enum Axis4 {
    X,
    Y,
    Z,
    W,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, AxisVector)]
#[axis_vector(axis = Axis2)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, AxisVector)]
#[axis_vector(axis = Axis3)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, AxisVector)]
#[axis_vector(axis = Axis4)]
pub struct Vector4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vector2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Vector3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

impl Vector4 {
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }
}

macro_rules! display_as_report {
    ($($shape:ty),*) => {
        $(
            impl fmt::Display for $shape {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Display::fmt(&self.report(), f)
                }
            }
        )*
    };
}

display_as_report!(Vector2, Vector3, Vector4);
