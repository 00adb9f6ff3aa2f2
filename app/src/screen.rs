use axis_vec_ops::{Axis, AxisVector};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Axis)]
pub enum ScreenAxis {
    Width,
    Height,
}

#[derive(Debug, Copy, Clone, PartialEq, AxisVector)]
#[axis_vector(axis = ScreenAxis)]
pub struct ScreenSize {
    pub width: f32,
    pub height: f32,
}

impl ScreenSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn halved(&self) -> Self {
        let mut half = *self;
        half.divide_scalar(2.0);
        half
    }
}
