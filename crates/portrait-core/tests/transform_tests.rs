// Host-side tests for pointer and orientation mapping.

use portrait_core::{
    from_orientation, from_pointer, Bounds, CalibrationProfile, OrientationSample, PointerSample,
};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn tile() -> Bounds {
    Bounds::new(10.0, 20.0, 200.0, 100.0)
}

#[test]
fn pointer_at_center_gives_centered_full_glare() {
    let t = from_pointer(PointerSample::new(110.0, 70.0), tile()).unwrap();
    assert_eq!(t.glare_x, 50.0);
    assert_eq!(t.glare_y, 50.0);
    assert_eq!(t.glare_opacity, 1.0);
    assert_eq!(t.rotate_x, 0.0);
    assert_eq!(t.rotate_y, 0.0);
}

#[test]
fn pointer_at_top_left_tilts_toward_pointer() {
    let t = from_pointer(PointerSample::new(10.0, 20.0), tile()).unwrap();
    assert_eq!(t.glare_x, 0.0);
    assert_eq!(t.glare_y, 0.0);
    assert!(approx(t.rotate_x, -25.0));
    assert!(approx(t.rotate_y, 15.0));
}

#[test]
fn pointer_at_bottom_right_tilts_the_other_way() {
    let t = from_pointer(PointerSample::new(210.0, 120.0), tile()).unwrap();
    assert_eq!(t.glare_x, 100.0);
    assert_eq!(t.glare_y, 100.0);
    assert!(approx(t.rotate_x, 25.0));
    assert!(approx(t.rotate_y, -15.0));
}

#[test]
fn pointer_outside_the_tile_is_clamped() {
    let bounds = tile();
    let t = from_pointer(
        PointerSample::new(bounds.left + bounds.width + 50.0, bounds.top - 30.0),
        bounds,
    )
    .unwrap();
    assert_eq!(t.glare_x, 100.0);
    assert_eq!(t.glare_y, 0.0);
}

#[test]
fn pointer_percentages_are_rounded() {
    let bounds = Bounds::new(0.0, 0.0, 3.0, 3.0);
    let t = from_pointer(PointerSample::new(1.0, 2.0), bounds).unwrap();
    assert_eq!(t.glare_x, 33.0);
    assert_eq!(t.glare_y, 67.0);
}

#[test]
fn pointer_over_unsized_tile_is_ignored() {
    let sample = PointerSample::new(5.0, 5.0);
    assert!(from_pointer(sample, Bounds::new(0.0, 0.0, 0.0, 100.0)).is_none());
    assert!(from_pointer(sample, Bounds::new(0.0, 0.0, 100.0, 0.0)).is_none());
    assert!(from_pointer(sample, Bounds::new(0.0, 0.0, f64::NAN, 100.0)).is_none());
    assert!(from_pointer(sample, Bounds::new(0.0, 0.0, -10.0, 100.0)).is_none());
}

#[test]
fn wide_profile_level_device_is_neutral_position() {
    let t = from_orientation(
        OrientationSample::new(Some(0.0), Some(0.0)),
        &CalibrationProfile::WIDE,
    )
    .unwrap();
    assert_eq!(t.glare_x, 50.0);
    assert_eq!(t.glare_y, 50.0);
    assert_eq!(t.rotate_x, 0.0);
    assert_eq!(t.rotate_y, 0.0);
    assert_eq!(t.glare_opacity, 0.8);
}

#[test]
fn wide_profile_maps_tilt_to_rotation() {
    let t = from_orientation(
        OrientationSample::new(Some(90.0), Some(-45.0)),
        &CalibrationProfile::WIDE,
    )
    .unwrap();
    assert_eq!(t.glare_y, 75.0);
    assert_eq!(t.glare_x, 25.0);
    assert!(approx(t.rotate_x, 7.5));
    assert!(approx(t.rotate_y, 12.5));
}

#[test]
fn wide_profile_clamps_out_of_range_readings() {
    let t = from_orientation(
        OrientationSample::new(Some(400.0), Some(-200.0)),
        &CalibrationProfile::WIDE,
    )
    .unwrap();
    assert_eq!(t.glare_y, 100.0);
    assert_eq!(t.glare_x, 0.0);
}

#[test]
fn narrow_profile_clamps_before_normalizing() {
    let t = from_orientation(
        OrientationSample::new(Some(45.0), Some(0.0)),
        &CalibrationProfile::NARROW,
    )
    .unwrap();
    assert_eq!(t.glare_y, 100.0);
    assert_eq!(t.glare_x, 50.0);
}

#[test]
fn narrow_profile_never_rotates() {
    for (beta, gamma) in [(45.0, 30.0), (-90.0, -60.0), (10.0, -5.0), (0.0, 0.0)] {
        let t = from_orientation(
            OrientationSample::new(Some(beta), Some(gamma)),
            &CalibrationProfile::NARROW,
        )
        .unwrap();
        assert_eq!(t.rotate_x, 0.0);
        assert_eq!(t.rotate_y, 0.0);
        assert_eq!(t.glare_opacity, 0.8);
    }
}

#[test]
fn narrow_profile_maps_inside_its_range() {
    let t = from_orientation(
        OrientationSample::new(Some(-15.0), Some(10.0)),
        &CalibrationProfile::NARROW,
    )
    .unwrap();
    assert_eq!(t.glare_y, 25.0);
    assert_eq!(t.glare_x, 75.0);
}

#[test]
fn orientation_with_missing_angle_yields_nothing() {
    let profile = CalibrationProfile::WIDE;
    assert!(from_orientation(OrientationSample::new(None, Some(10.0)), &profile).is_none());
    assert!(from_orientation(OrientationSample::new(Some(10.0), None), &profile).is_none());
    assert!(from_orientation(OrientationSample::default(), &profile).is_none());
    assert!(from_orientation(OrientationSample::new(Some(f64::NAN), Some(1.0)), &profile).is_none());
}

#[test]
fn default_profile_is_narrow() {
    assert_eq!(CalibrationProfile::default(), CalibrationProfile::NARROW);
}
