//! Lock-step 4-lane batch kernel.
//!
//! Four points run the recurrence together in `f64x4` lanes. A lane whose
//! magnitude leaves the radius-2 disk has its mask bit cleared and stops
//! accumulating iterations, but the arithmetic keeps executing for it —
//! branching individual lanes out of the loop would break lock-step for no
//! benefit. The loop ends when every lane has escaped or the budget is
//! reached.

use crate::scalar::escape_count;
use mandelgrid_core::{PlaneMapper, Point};
use wide::{f64x4, CmpEq, CmpLe};

/// Lane width of the batch kernel.
pub const LANES: usize = 4;

/// Escape-time counts for four points at once.
///
/// Must agree with [`escape_count`] element-wise for every input — the row
/// driver and the test suite hold it to that.
#[inline]
pub fn escape_count_x4(points: [Point; LANES], budget: u16) -> [u16; LANES] {
    let c_re = f64x4::from([points[0].re, points[1].re, points[2].re, points[3].re]);
    let c_im = f64x4::from([points[0].im, points[1].im, points[2].im, points[3].im]);

    let four = f64x4::splat(4.0);
    let one = f64x4::ONE;

    let mut xsquare = f64x4::ZERO;
    let mut ysquare = f64x4::ZERO;
    let mut zsquare = f64x4::ZERO;
    let mut counts = f64x4::ZERO;
    // All-true mask; lanes drop out as they escape.
    let mut active = f64x4::ZERO.cmp_eq(f64x4::ZERO);

    for _ in 0..budget {
        active = active & (xsquare + ysquare).cmp_le(four);
        if !active.any() {
            break;
        }
        counts += active.blend(one, f64x4::ZERO);

        let x = xsquare - ysquare + c_re;
        let y = zsquare - xsquare - ysquare + c_im;
        xsquare = x * x;
        ysquare = y * y;
        zsquare = (x + y) * (x + y);
    }

    let counts = counts.to_array();
    [
        counts[0] as u16,
        counts[1] as u16,
        counts[2] as u16,
        counts[3] as u16,
    ]
}

/// Fill one row of counts: groups of four lanes, scalar remainder.
pub fn compute_row(mapper: &PlaneMapper, row: u32, budget: u16, out: &mut [u16]) {
    let width = out.len();
    let lanes = LANES;

    let mut col = 0_usize;
    while col + lanes <= width {
        let base = col as u32;
        let points = [
            mapper.map(base, row),
            mapper.map(base + 1, row),
            mapper.map(base + 2, row),
            mapper.map(base + 3, row),
        ];
        out[col..col + lanes].copy_from_slice(&escape_count_x4(points, budget));
        col += lanes;
    }

    while col < width {
        out[col] = escape_count(mapper.map(col as u32, row), budget);
        col += 1;
    }
}
