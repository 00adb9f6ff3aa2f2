//! New shapes get the whole engine from the derives alone.

use axis_vec_ops::nalgebra::SVector;
use axis_vec_ops::{Axis, AxisError, AxisVector};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Axis)]
enum ScreenAxis {
    Width,
    Height,
}

#[derive(Debug, Copy, Clone, PartialEq, AxisVector)]
#[axis_vector(axis = ScreenAxis)]
struct Screen {
    width: f32,
    height: f32,
}

impl Screen {
    fn halved(&self) -> Self {
        let mut half = *self;
        half.divide_scalar(2.0);
        half
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Axis)]
enum CameraAxis {
    FieldOfView,
    Near,
    Far,
}

#[derive(Debug, Copy, Clone, PartialEq, AxisVector)]
#[axis_vector(axis = CameraAxis)]
struct Camera {
    field_of_view: f32,
    near: f32,
    far: f32,
}

// Fields declared in the opposite order to the axes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Axis)]
enum SizeAxis {
    Width,
    Height,
}

#[derive(Debug, Copy, Clone, PartialEq, AxisVector)]
#[axis_vector(axis = SizeAxis)]
struct Size {
    height: f32,
    width: f32,
}

#[test]
fn conversions_follow_axis_order() {
    let from_array = Size::from([1.0, 2.0]);
    assert_eq!(from_array, Size { width: 1.0, height: 2.0 });
    assert_eq!(Size::try_from_slice(&[1.0, 2.0]), Ok(from_array));
    assert_eq!(from_array.report().to_string(), "width: 1, height: 2");

    let values: Vec<f32> = from_array.components().map(|(_, value)| value).collect();
    assert_eq!(<[f32; 2]>::from(from_array).to_vec(), values);

    let s: SVector<f32, 2> = from_array.into();
    assert_eq!((s[0], s[1]), (1.0, 2.0));
    assert_eq!(Size::from(s), from_array);
}

#[test]
fn screen_halves() {
    let screen = Screen { width: 800.0, height: 600.0 };
    assert_eq!(screen.halved(), Screen { width: 400.0, height: 300.0 });
}

#[test]
fn screen_vector_ops() {
    let mut screen = Screen::from([1920.0, 1080.0]);
    screen -= Screen::splat(20.0);
    screen[ScreenAxis::Width] /= 2.0;
    assert_eq!(screen.report().to_string(), "width: 950, height: 1060");
}

#[test]
fn multi_word_axis_names() {
    assert_eq!(CameraAxis::FieldOfView.to_string(), "field_of_view");
    assert_eq!("far".parse::<CameraAxis>(), Ok(CameraAxis::Far));

    let mut camera = Camera { field_of_view: 60.0, near: 0.1, far: 100.0 };
    camera.map_axes_in_place(&[CameraAxis::Far], |_, far| far * 10.0);
    assert_eq!(camera.far, 1000.0);
    assert_eq!(CameraAxis::count(), 3);
}

#[test]
fn runtime_construction_errors() {
    assert_eq!(
        Camera::try_from_slice(&[1.0]),
        Err(AxisError::LengthMismatch { expected: 3, got: 1 })
    );
    assert!("depth".parse::<CameraAxis>().is_err());
}
