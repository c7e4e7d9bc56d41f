//! Cross-backend equivalence: every execution strategy must produce
//! element-wise identical tables for the same viewport and budget.

use mandelgrid_compute::{ConvergenceBackend, ScalarBackend, VectorBackend, Viewport};

fn classic(width: u32, height: u32) -> Viewport {
    Viewport::new(width, height, (-2.0, 1.0), (-1.2, 1.2)).unwrap()
}

#[test]
fn scalar_and_vector_agree_on_the_classic_view() {
    let vp = classic(100, 80);

    let scalar = ScalarBackend.compute(&vp, 255);
    let vector = VectorBackend::new(4).unwrap().compute(&vp, 255);

    assert_eq!(scalar, vector);
}

#[test]
fn agreement_holds_across_interactive_mutations() {
    let mut vp = classic(64, 48);
    let mut vector = VectorBackend::new(3).unwrap();

    let mutations: [&dyn Fn(&mut Viewport); 4] = [
        &|vp| vp.focus(0.85).unwrap(),
        &|vp| vp.offset(0.2, -0.1),
        &|vp| vp.focus_box((10, 8), (50, 40)).unwrap(),
        &|vp| vp.set_bounds((-0.8, -0.7), (0.1, 0.2)).unwrap(),
    ];

    for (i, mutate) in mutations.iter().enumerate() {
        mutate(&mut vp);
        assert_eq!(
            ScalarBackend.compute(&vp, 255),
            vector.compute(&vp, 255),
            "backends diverged after mutation {i}"
        );
    }
}

#[test]
fn agreement_holds_for_widths_with_remainder_lanes() {
    // 61 columns: fifteen 4-lane groups plus one scalar remainder pixel.
    let vp = classic(61, 17);

    assert_eq!(
        ScalarBackend.compute(&vp, 255),
        VectorBackend::new(2).unwrap().compute(&vp, 255)
    );
}

#[test]
fn agreement_holds_for_tiny_budgets() {
    let vp = classic(32, 24);
    let mut vector = VectorBackend::new(2).unwrap();

    for budget in [0, 1, 2, 7] {
        assert_eq!(
            ScalarBackend.compute(&vp, budget),
            vector.compute(&vp, budget),
            "backends diverged at budget {budget}"
        );
    }
}

#[test]
fn recomputation_is_bit_identical() {
    let vp = classic(80, 60);
    let mut vector = VectorBackend::new(4).unwrap();

    let first = vector.compute(&vp, 255);
    let second = vector.compute(&vp, 255);
    assert_eq!(first, second);
}
