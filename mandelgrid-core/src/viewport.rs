use crate::error::DomainError;
use crate::mapper::PlaneMapper;
use crate::point::Point;
use serde::{Deserialize, Serialize};

/// The rectangular region of the complex plane currently mapped onto the
/// pixel grid.
///
/// Pixel dimensions are fixed for the viewport's lifetime; the axis domains
/// change under pan/zoom/box-select. The derived sizes are recomputed from
/// the bounds on every mutation and never drift independently.
///
/// Convention: columns run along the real axis, rows along the imaginary
/// axis. Every backend uses this mapping.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    width: u32,
    height: u32,
    re_domain: (f64, f64),
    im_domain: (f64, f64),
    re_size: f64,
    im_size: f64,
}

impl Viewport {
    /// Create a viewport over the given domain.
    ///
    /// Dimensions must be positive and both domains must have non-zero,
    /// finite size.
    pub fn new(
        width: u32,
        height: u32,
        re_domain: (f64, f64),
        im_domain: (f64, f64),
    ) -> Result<Self, DomainError> {
        if width == 0 || height == 0 {
            return Err(DomainError::EmptyGrid { width, height });
        }
        let (re_size, im_size) = validate_domains(re_domain, im_domain)?;

        Ok(Self {
            width,
            height,
            re_domain,
            im_domain,
            re_size,
            im_size,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn re_domain(&self) -> (f64, f64) {
        self.re_domain
    }

    pub fn im_domain(&self) -> (f64, f64) {
        self.im_domain
    }

    pub fn re_size(&self) -> f64 {
        self.re_size
    }

    pub fn im_size(&self) -> f64 {
        self.im_size
    }

    /// Midpoint of the current domain.
    pub fn center(&self) -> Point {
        Point::new(
            (self.re_domain.0 + self.re_domain.1) / 2.0,
            (self.im_domain.0 + self.im_domain.1) / 2.0,
        )
    }

    /// The pixel→plane transform for the current domain.
    pub fn mapper(&self) -> PlaneMapper {
        PlaneMapper::new(self)
    }

    /// Replace both axis bounds directly.
    ///
    /// All-or-nothing: a degenerate domain is rejected before any state
    /// changes.
    pub fn set_bounds(
        &mut self,
        re_domain: (f64, f64),
        im_domain: (f64, f64),
    ) -> Result<(), DomainError> {
        let (re_size, im_size) = validate_domains(re_domain, im_domain)?;

        self.re_domain = re_domain;
        self.im_domain = im_domain;
        self.re_size = re_size;
        self.im_size = im_size;
        Ok(())
    }

    /// Set a symmetric box `[center ± radius]` on each axis.
    pub fn around(&mut self, center: Point, x_radius: f64, y_radius: f64) -> Result<(), DomainError> {
        self.set_bounds(
            (center.re - x_radius, center.re + x_radius),
            (center.im - y_radius, center.im + y_radius),
        )
    }

    /// Scale both axis sizes by `zoom` about the domain midpoint.
    ///
    /// Values below 1 zoom in, above 1 zoom out.
    pub fn focus(&mut self, zoom: f64) -> Result<(), DomainError> {
        if !(zoom.is_finite() && zoom > 0.0) {
            return Err(DomainError::InvalidZoom(zoom));
        }
        let center = self.center();
        self.around(
            center,
            self.re_size * zoom / 2.0,
            self.im_size * zoom / 2.0,
        )
    }

    /// Box-select zoom: map two pixel corners through the current transform
    /// and make the resulting plane rectangle the new domain.
    ///
    /// Corner order does not matter; a selection that collapses to a line
    /// or point on either axis is rejected.
    pub fn focus_box(&mut self, a: (u32, u32), b: (u32, u32)) -> Result<(), DomainError> {
        if a.0 == b.0 || a.1 == b.1 {
            return Err(DomainError::DegenerateSelection);
        }
        let mapper = self.mapper();
        let pa = mapper.map(a.0, a.1);
        let pb = mapper.map(b.0, b.1);

        self.set_bounds(
            (pa.re.min(pb.re), pa.re.max(pb.re)),
            (pa.im.min(pb.im), pa.im.max(pb.im)),
        )
    }

    /// Pan by a fraction of the current domain size along each axis, so pan
    /// speed scales with the zoom level.
    pub fn offset(&mut self, dx: f64, dy: f64) {
        let re_shift = dx * self.re_size;
        let im_shift = dy * self.im_size;

        self.re_domain = (self.re_domain.0 + re_shift, self.re_domain.1 + re_shift);
        self.im_domain = (self.im_domain.0 + im_shift, self.im_domain.1 + im_shift);
        // Pure translation: sizes are unchanged by construction, but keep the
        // invariant explicit.
        self.re_size = (self.re_domain.1 - self.re_domain.0).abs();
        self.im_size = (self.im_domain.1 - self.im_domain.0).abs();
    }
}

fn validate_domains(
    re_domain: (f64, f64),
    im_domain: (f64, f64),
) -> Result<(f64, f64), DomainError> {
    let re_size = (re_domain.1 - re_domain.0).abs();
    let im_size = (im_domain.1 - im_domain.0).abs();

    if !(re_size.is_finite() && re_size > 0.0) {
        return Err(DomainError::DegenerateDomain {
            axis: "real",
            min: re_domain.0,
            max: re_domain.1,
        });
    }
    if !(im_size.is_finite() && im_size > 0.0) {
        return Err(DomainError::DegenerateDomain {
            axis: "imaginary",
            min: im_domain.0,
            max: im_domain.1,
        });
    }
    Ok((re_size, im_size))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classic() -> Viewport {
        Viewport::new(500, 400, (-2.0, 1.0), (-1.2, 1.2)).unwrap()
    }

    #[test]
    fn new_computes_sizes_from_bounds() {
        let vp = classic();
        assert_eq!(vp.re_size(), 3.0);
        assert_eq!(vp.im_size(), 2.4);
    }

    #[test]
    fn new_rejects_zero_dimensions() {
        assert_eq!(
            Viewport::new(0, 400, (-2.0, 1.0), (-1.2, 1.2)),
            Err(DomainError::EmptyGrid {
                width: 0,
                height: 400
            })
        );
        assert!(Viewport::new(500, 0, (-2.0, 1.0), (-1.2, 1.2)).is_err());
    }

    #[test]
    fn new_rejects_zero_size_domain() {
        let result = Viewport::new(500, 400, (1.0, 1.0), (-1.2, 1.2));
        assert!(matches!(
            result,
            Err(DomainError::DegenerateDomain { axis: "real", .. })
        ));

        let result = Viewport::new(500, 400, (-2.0, 1.0), (0.5, 0.5));
        assert!(matches!(
            result,
            Err(DomainError::DegenerateDomain {
                axis: "imaginary",
                ..
            })
        ));
    }

    #[test]
    fn set_bounds_replaces_domain_and_sizes() {
        let mut vp = classic();
        vp.set_bounds((-1.0, 0.0), (0.0, 0.5)).unwrap();

        assert_eq!(vp.re_domain(), (-1.0, 0.0));
        assert_eq!(vp.im_domain(), (0.0, 0.5));
        assert_eq!(vp.re_size(), 1.0);
        assert_eq!(vp.im_size(), 0.5);
    }

    #[test]
    fn set_bounds_rejection_leaves_viewport_untouched() {
        let mut vp = classic();
        let before = vp.clone();

        assert!(vp.set_bounds((2.0, 2.0), (0.0, 1.0)).is_err());
        assert_eq!(vp, before);
    }

    #[test]
    fn around_builds_symmetric_box() {
        let mut vp = classic();
        vp.around(Point::new(-0.5, 0.25), 0.1, 0.2).unwrap();

        assert_eq!(vp.re_domain(), (-0.6, -0.4));
        assert_eq!(vp.im_domain(), (0.05, 0.45));
    }

    #[test]
    fn focus_recenters_on_midpoint() {
        let mut vp = classic();
        let center_before = vp.center();
        vp.focus(0.85).unwrap();

        let center_after = vp.center();
        assert!((center_after.re - center_before.re).abs() < 1e-12);
        assert!((center_after.im - center_before.im).abs() < 1e-12);
        assert!((vp.re_size() - 3.0 * 0.85).abs() < 1e-12);
        assert!((vp.im_size() - 2.4 * 0.85).abs() < 1e-12);
    }

    #[test]
    fn focus_in_then_out_restores_sizes() {
        let mut vp = classic();
        vp.focus(0.85).unwrap();
        vp.focus(1.0 / 0.85).unwrap();

        assert!((vp.re_size() - 3.0).abs() < 1e-12);
        assert!((vp.im_size() - 2.4).abs() < 1e-12);
    }

    #[test]
    fn focus_rejects_non_positive_zoom() {
        let mut vp = classic();
        assert_eq!(vp.focus(0.0), Err(DomainError::InvalidZoom(0.0)));
        assert_eq!(vp.focus(-1.0), Err(DomainError::InvalidZoom(-1.0)));
        assert!(vp.focus(f64::NAN).is_err());
    }

    #[test]
    fn focus_box_sets_exact_plane_rectangle() {
        let mut vp = classic();
        let mapper = vp.mapper();
        let upper = mapper.map(100, 100);
        let lower = mapper.map(300, 250);

        vp.focus_box((100, 100), (300, 250)).unwrap();

        assert_eq!(vp.re_domain(), (upper.re, lower.re));
        assert_eq!(vp.im_domain(), (upper.im, lower.im));
    }

    #[test]
    fn focus_box_is_corner_order_insensitive() {
        let mut a = classic();
        let mut b = classic();

        a.focus_box((100, 100), (300, 250)).unwrap();
        b.focus_box((300, 250), (100, 100)).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn focus_box_rejects_degenerate_selection() {
        let mut vp = classic();
        assert_eq!(
            vp.focus_box((100, 100), (100, 250)),
            Err(DomainError::DegenerateSelection)
        );
        assert_eq!(
            vp.focus_box((100, 100), (300, 100)),
            Err(DomainError::DegenerateSelection)
        );
    }

    #[test]
    fn offset_translates_proportionally_to_size() {
        let mut vp = classic();
        vp.offset(0.2, -0.5);

        // re shifted by 0.2 * 3.0, im by -0.5 * 2.4
        assert!((vp.re_domain().0 - (-2.0 + 0.6)).abs() < 1e-12);
        assert!((vp.re_domain().1 - (1.0 + 0.6)).abs() < 1e-12);
        assert!((vp.im_domain().0 - (-1.2 - 1.2)).abs() < 1e-12);
        assert!((vp.im_domain().1 - (1.2 - 1.2)).abs() < 1e-12);
    }

    #[test]
    fn offset_preserves_sizes() {
        let mut vp = classic();
        vp.offset(0.35, 0.7);

        assert!((vp.re_size() - 3.0).abs() < 1e-12);
        assert!((vp.im_size() - 2.4).abs() < 1e-12);
    }

    #[test]
    fn serialization_roundtrip() {
        let vp = classic();
        let json = serde_json::to_string(&vp).unwrap();
        let restored: Viewport = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, vp);
    }
}
