use std::fmt;

use crate::axis::Axis;
use crate::engine::AxisVector;

/// Renders a vector as `name: value` pairs joined by `", "`.
///
/// A precision on the formatter applies to every value, so
/// `format!("{:.1}", v.report())` gives `x: 1.0, y: 2.0`.
pub struct Report<'a, V> {
    vector: &'a V,
}

impl<'a, V> Report<'a, V> {
    pub(crate) fn new(vector: &'a V) -> Self {
        Self { vector }
    }
}

impl<V: AxisVector> fmt::Display for Report<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (axis, value)) in self.vector.components().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            match f.precision() {
                Some(precision) => write!(f, "{}: {value:.precision$}", axis.name())?,
                None => write!(f, "{}: {value}", axis.name())?,
            }
        }
        Ok(())
    }
}
