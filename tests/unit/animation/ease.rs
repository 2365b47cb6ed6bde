use super::*;

#[test]
fn endpoints_are_stable() {
    for ease in Ease::ALL {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in Ease::ALL {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b);
        assert!(b < c);
    }
}

#[test]
fn in_out_curves_are_symmetric_at_midpoint() {
    for ease in [Ease::InOutQuad, Ease::InOutCubic, Ease::InOutQuint] {
        assert!((ease.apply(0.5) - 0.5).abs() < 1e-12);
        let lo = ease.apply(0.2);
        let hi = ease.apply(0.8);
        assert!((lo + hi - 1.0).abs() < 1e-12);
    }
}

#[test]
fn gsap_aliases_deserialize() {
    let e: Ease = serde_json::from_str("\"power4.inOut\"").unwrap();
    assert_eq!(e, Ease::InOutQuint);
    let e: Ease = serde_json::from_str("\"power2.out\"").unwrap();
    assert_eq!(e, Ease::OutCubic);
    let e: Ease = serde_json::from_str("\"none\"").unwrap();
    assert_eq!(e, Ease::Linear);
    let e: Ease = serde_json::from_str("\"InOutCubic\"").unwrap();
    assert_eq!(e, Ease::InOutCubic);
}
