use crate::point::Point;
use crate::viewport::Viewport;

/// Pixel→plane coordinate transform for a fixed viewport state.
///
/// The four coefficients are exactly what the accelerator kernel consumes:
/// `[re_step, im_step, re_min, im_min]`. Columns map to the real axis and
/// rows to the imaginary axis; the transform is monotonic in both.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneMapper {
    re_step: f64,
    im_step: f64,
    re_min: f64,
    im_min: f64,
}

impl PlaneMapper {
    pub fn new(viewport: &Viewport) -> Self {
        Self {
            re_step: viewport.re_size() / viewport.width() as f64,
            im_step: viewport.im_size() / viewport.height() as f64,
            re_min: viewport.re_domain().0,
            im_min: viewport.im_domain().0,
        }
    }

    /// Map a pixel coordinate to its plane point.
    ///
    /// `map(0, 0)` is the domain's lower corner exactly; `map(width, height)`
    /// tends to the upper corner.
    #[inline]
    pub fn map(&self, col: u32, row: u32) -> Point {
        Point::new(
            col as f64 * self.re_step + self.re_min,
            row as f64 * self.im_step + self.im_min,
        )
    }

    /// The coefficient vector uploaded to the compute device.
    pub fn coefficients(&self) -> [f64; 4] {
        [self.re_step, self.im_step, self.re_min, self.im_min]
    }

    #[inline]
    pub fn re_step(&self) -> f64 {
        self.re_step
    }

    #[inline]
    pub fn im_step(&self) -> f64 {
        self.im_step
    }
}
