mod screen;

use axis_vec_ops::{Axis3, AxisVector, Vector3};
use log::info;

use crate::screen::ScreenSize;

fn run_demo() -> Vector3 {
    let mut v = Vector3::new(5.0, 5.0, 5.0);
    v.add_scalar(5.0);
    info!("after add_scalar(5): {v}");
    v.divide_scalar(4.0);
    info!("after divide_scalar(4): {v}");
    v[Axis3::Z] += 1.0;
    v
}

fn main() {
    env_logger::init();

    let v = run_demo();
    println!("{}", v.report());

    let screen = ScreenSize::new(800.0, 600.0);
    println!("{}", screen.halved().report());
}
