use serde::{Deserialize, Serialize};

/// A coordinate in the complex plane, double precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub re: f64,
    pub im: f64,
}

impl Point {
    pub fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }
}

impl From<(f64, f64)> for Point {
    fn from((re, im): (f64, f64)) -> Self {
        Self { re, im }
    }
}
