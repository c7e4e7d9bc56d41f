use mandelgrid_core::Point;

/// Escape-time count for a single point of `z ← z² + c`, starting at z₀ = 0.
///
/// The complex square is decomposed into three squared terms so no explicit
/// cross multiply is needed: with `zsquare = (x + y)²`, the cross term `2xy`
/// is `zsquare − xsquare − ysquare`. Iterates while `x² + y² ≤ 4` and the
/// budget is not exhausted; a returned count equal to `budget` means "did not
/// escape within budget", not mathematical convergence.
///
/// This routine is the numerical reference: the vectorized and accelerator
/// kernels must reproduce it exactly, pixel for pixel.
#[inline]
pub fn escape_count(point: Point, budget: u16) -> u16 {
    let mut xsquare = 0.0_f64;
    let mut ysquare = 0.0_f64;
    let mut zsquare = 0.0_f64;
    let mut count = 0_u16;

    while xsquare + ysquare <= 4.0 && count < budget {
        let x = xsquare - ysquare + point.re;
        let y = zsquare - xsquare - ysquare + point.im;
        xsquare = x * x;
        ysquare = y * y;
        zsquare = (x + y) * (x + y);
        count += 1;
    }

    count
}
