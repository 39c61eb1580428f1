// Host-side tests for the per-tile state machines.

use portrait_core::{
    Bounds, CalibrationProfile, DebugReadout, OrientationSample, OrientationTile, Phase,
    PointerSample, PointerTile, TransformState,
};

fn bits(t: &TransformState) -> [u64; 5] {
    [
        t.rotate_x.to_bits(),
        t.rotate_y.to_bits(),
        t.glare_x.to_bits(),
        t.glare_y.to_bits(),
        t.glare_opacity.to_bits(),
    ]
}

#[test]
fn neutral_state_matches_resting_values() {
    let n = TransformState::NEUTRAL;
    assert_eq!(n.rotate_x, 0.0);
    assert_eq!(n.rotate_y, 0.0);
    assert_eq!(n.glare_x, 50.0);
    assert_eq!(n.glare_y, 50.0);
    assert_eq!(n.glare_opacity, 0.0);
    assert_eq!(TransformState::default(), n);
}

#[test]
fn pointer_tile_starts_idle_and_neutral() {
    let tile = PointerTile::new();
    assert_eq!(tile.phase(), Phase::Idle);
    assert!(tile.transform().is_neutral());
}

#[test]
fn pointer_move_activates_and_leave_restores_neutral() {
    let mut tile = PointerTile::new();
    let bounds = Bounds::new(0.0, 0.0, 100.0, 100.0);
    assert!(tile.pointer_move(PointerSample::new(12.0, 80.0), bounds));
    assert_eq!(tile.phase(), Phase::Active);
    assert_eq!(tile.transform().glare_x, 12.0);
    assert_eq!(tile.transform().glare_y, 80.0);

    tile.pointer_leave();
    assert_eq!(tile.phase(), Phase::Idle);
    assert_eq!(bits(&tile.transform()), bits(&TransformState::NEUTRAL));
}

#[test]
fn center_hover_differs_from_leave() {
    let mut tile = PointerTile::new();
    let bounds = Bounds::new(0.0, 0.0, 240.0, 320.0);
    tile.pointer_move(PointerSample::new(120.0, 160.0), bounds);
    let hovered = tile.transform();
    assert_eq!(hovered.glare_x, 50.0);
    assert_eq!(hovered.glare_y, 50.0);
    assert_eq!(hovered.glare_opacity, 1.0);

    tile.pointer_leave();
    assert_eq!(tile.transform().glare_opacity, 0.0);
}

#[test]
fn pointer_move_over_unsized_tile_keeps_state() {
    let mut tile = PointerTile::new();
    tile.pointer_move(PointerSample::new(30.0, 40.0), Bounds::new(0.0, 0.0, 100.0, 100.0));
    let before = tile.transform();

    assert!(!tile.pointer_move(PointerSample::new(5.0, 5.0), Bounds::default()));
    assert_eq!(bits(&tile.transform()), bits(&before));
    assert_eq!(tile.phase(), Phase::Active);
}

#[test]
fn orientation_tile_without_samples_stays_neutral() {
    let tile = OrientationTile::new(CalibrationProfile::NARROW);
    assert_eq!(tile.phase(), Phase::Idle);
    assert!(tile.transform().is_neutral());
    assert_eq!(tile.debug(), DebugReadout::default());
}

#[test]
fn orientation_tile_activates_on_first_full_sample() {
    let mut tile = OrientationTile::new(CalibrationProfile::WIDE);
    assert!(tile.orientation(OrientationSample::new(Some(0.0), Some(0.0))));
    assert_eq!(tile.phase(), Phase::Active);
    assert_eq!(tile.transform().glare_opacity, 0.8);
}

#[test]
fn missing_angle_leaves_transform_untouched() {
    let mut tile = OrientationTile::new(CalibrationProfile::WIDE);
    tile.orientation(OrientationSample::new(Some(33.0), Some(-12.0)));
    let before = tile.transform();

    assert!(!tile.orientation(OrientationSample::new(Some(80.0), None)));
    assert_eq!(bits(&tile.transform()), bits(&before));
    assert!(!tile.orientation(OrientationSample::new(None, Some(5.0))));
    assert_eq!(bits(&tile.transform()), bits(&before));
    assert_eq!(tile.phase(), Phase::Active);
}

#[test]
fn debug_readout_tracks_raw_angles_even_when_incomplete() {
    let mut tile = OrientationTile::new(CalibrationProfile::NARROW);
    tile.orientation(OrientationSample::new(Some(45.0), Some(-7.5)));
    assert_eq!(tile.debug(), DebugReadout { beta: 45.0, gamma: -7.5 });

    tile.orientation(OrientationSample::new(Some(12.0), None));
    assert_eq!(tile.debug(), DebugReadout { beta: 12.0, gamma: 0.0 });
    // readout is raw, the transform still reflects the clamped reading
    assert_eq!(tile.transform().glare_y, 100.0);
}

#[test]
fn transform_state_new_enforces_glare_invariants() {
    let t = TransformState::new(3.0, -4.0, 140.0, -20.0, 1.7);
    assert_eq!(t.glare_x, 100.0);
    assert_eq!(t.glare_y, 0.0);
    assert_eq!(t.glare_opacity, 1.0);
    assert_eq!(t.rotate_x, 3.0);
    assert_eq!(t.rotate_y, -4.0);
}

#[test]
fn masked_glare_opacity_is_left_unclamped() {
    assert_eq!(TransformState::NEUTRAL.masked_glare_opacity(), 0.0);

    let centred = TransformState::new(0.0, 0.0, 50.0, 50.0, 1.0);
    assert_eq!(centred.masked_glare_opacity(), 1.5);

    let edge = TransformState::new(0.0, 0.0, 0.0, 0.0, 0.5);
    assert_eq!(edge.masked_glare_opacity(), -0.25);
}
