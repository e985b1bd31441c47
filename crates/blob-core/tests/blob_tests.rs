// Host-side tests for the composed blob, driven by a manual clock and a
// recording surface.

use blob_core::{
    Blob, BlobConfig, BlobError, DVec2, EnergyState, FillStyle, ManualClock, PathCommand,
    RecordingSurface, ShapeState, MAX_SEGMENTS, SCALE_DURATION_MS, THETA_RAMP_DEST,
};
use std::f64::consts::{FRAC_PI_2, TAU};

fn config(segments: usize, seed: u64) -> BlobConfig {
    BlobConfig {
        segments,
        sector_angle: FRAC_PI_2,
        min_deviation: FRAC_PI_2,
        seed: Some(seed),
        ..BlobConfig::default()
    }
}

// 600 x 800 has a diagonal of exactly 1000
fn make_blob(segments: usize) -> (Blob<RecordingSurface, ManualClock>, ManualClock) {
    let clock = ManualClock::new(0.0);
    let blob = Blob::new(
        config(segments, 42),
        RecordingSurface::new(600.0, 800.0),
        clock.clone(),
    )
    .unwrap();
    (blob, clock)
}

#[test]
fn construction_derives_radii_from_diagonal() {
    let (blob, _) = make_blob(4);
    assert!((blob.diagonal() - 1000.0).abs() < 1e-9);
    assert!((blob.base_radius() - 400.0).abs() < 1e-9);
    assert!((blob.profile().bump_radius - 400.0 / 7.0).abs() < 1e-9);
    assert!((blob.theta_delta() - 0.008).abs() < 1e-12);
    assert_eq!(blob.shape_state(), ShapeState::Regular);
    assert_eq!(blob.energy_state(), EnergyState::Rest);
    assert_eq!(blob.anchors().len(), 4 + 3);
}

#[test]
fn invalid_configuration_is_rejected() {
    let surface = RecordingSurface::new(100.0, 100.0);
    let clock = ManualClock::new(0.0);

    let zero = BlobConfig {
        segments: 0,
        ..BlobConfig::default()
    };
    assert!(matches!(
        Blob::new(zero, surface.clone(), clock.clone()),
        Err(BlobError::InvalidConfiguration(_))
    ));

    let huge = BlobConfig {
        segments: usize::MAX,
        ..BlobConfig::default()
    };
    assert!(matches!(
        huge.validate(),
        Err(BlobError::InvalidConfiguration(_))
    ));
    assert!(matches!(
        Blob::new(huge, surface.clone(), clock.clone()),
        Err(BlobError::InvalidConfiguration(_))
    ));

    let just_over = BlobConfig {
        segments: MAX_SEGMENTS + 1,
        ..BlobConfig::default()
    };
    assert!(Blob::new(just_over, surface.clone(), clock.clone()).is_err());

    let at_cap = BlobConfig {
        segments: MAX_SEGMENTS,
        seed: Some(1),
        ..BlobConfig::default()
    };
    let blob = Blob::new(at_cap, surface.clone(), clock.clone()).unwrap();
    assert_eq!(blob.anchors().len(), MAX_SEGMENTS + 3);

    let nan = BlobConfig {
        sector_angle: f64::NAN,
        ..BlobConfig::default()
    };
    assert!(matches!(
        Blob::new(nan, surface.clone(), clock.clone()),
        Err(BlobError::InvalidConfiguration(_))
    ));

    let inf = BlobConfig {
        min_deviation: f64::INFINITY,
        ..BlobConfig::default()
    };
    assert!(Blob::new(inf, surface, clock).is_err());
}

#[test]
fn oversized_min_deviation_is_clamped_to_full_turn() {
    let cfg = BlobConfig {
        min_deviation: 10.0,
        seed: Some(1),
        ..BlobConfig::default()
    };
    assert_eq!(cfg.validate().unwrap(), TAU);
    let blob = Blob::new(cfg, RecordingSurface::new(100.0, 100.0), ManualClock::new(0.0)).unwrap();
    for t in &blob.profile().theta_off {
        assert!((*t - TAU).abs() < 1e-12);
    }
}

#[test]
fn expansion_scenario_reaches_full_fraction_after_duration() {
    let (mut blob, clock) = make_blob(4);
    assert!(blob.cue_expansion());
    clock.advance(SCALE_DURATION_MS);
    blob.animate();

    let extent = blob.radius_extent();
    assert_eq!(blob.shape().current_time_fraction(), 1.0);
    assert!((blob.radius_offset() - (extent.max_radius - extent.base_radius)).abs() < 1e-9);
    assert!(matches!(
        blob.shape_state(),
        ShapeState::Expanding | ShapeState::Expanded
    ));
}

#[test]
fn update_draws_one_filled_open_outline() {
    let (mut blob, _) = make_blob(4);
    blob.update().unwrap();

    let frame = blob.surface().last_frame();
    let n = blob.anchors().len();
    let anchors = blob.anchors().to_vec();
    let quads = frame
        .iter()
        .filter(|c| matches!(c, PathCommand::QuadraticCurveTo { .. }))
        .count();
    assert_eq!(quads, n - 2);

    assert_eq!(blob.surface().commands()[0], PathCommand::Clear);
    assert_eq!(frame[0], PathCommand::BeginPath);
    assert_eq!(frame[1], PathCommand::MoveTo(DVec2::ZERO));
    assert_eq!(frame[2], PathCommand::MoveTo(anchors[0]));
    assert_eq!(frame[frame.len() - 3], PathCommand::LineTo(anchors[n - 1]));
    assert_eq!(
        frame[frame.len() - 2],
        PathCommand::LineTo(DVec2::new(600.0, 0.0))
    );
    assert_eq!(frame[frame.len() - 1], PathCommand::Fill(FillStyle::default()));
}

#[test]
fn update_advances_phase_and_ramp() {
    let (mut blob, _) = make_blob(4);
    blob.update().unwrap();
    assert!((blob.theta() - 0.008).abs() < 1e-12);
    assert!((blob.theta_ramp() - THETA_RAMP_DEST / 25.0).abs() < 1e-12);
    blob.update().unwrap();
    assert!((blob.theta() - 0.016).abs() < 1e-12);
    assert!(blob.theta_ramp() < blob.theta_ramp_dest());
}

#[test]
fn same_seed_renders_the_same_ring() {
    let (mut a, _) = make_blob(6);
    let (mut b, _) = make_blob(6);
    for _ in 0..5 {
        a.update().unwrap();
        b.update().unwrap();
    }
    assert_eq!(a.anchors(), b.anchors());
    assert_eq!(a.surface().last_frame(), b.surface().last_frame());
}

#[test]
fn geometry_refreshes_only_while_ramping_or_animating() {
    let (mut blob, _) = make_blob(4);
    let fits_at_start = blob.surface().fit_count();
    for _ in 0..200 {
        blob.update().unwrap();
    }
    let settled = blob.surface().fit_count();
    assert!(settled > fits_at_start);

    // viewport changes are not picked up once the ramp has settled
    blob.surface_mut().set_viewport(1200.0, 1600.0);
    blob.update().unwrap();
    assert_eq!(blob.surface().fit_count(), settled);
    assert!((blob.base_radius() - 400.0).abs() < 1e-9);

    // until something forces a refresh
    blob.update_values();
    assert!((blob.base_radius() - 800.0).abs() < 1e-9);
}

#[test]
fn reactive_px_uses_diagonal_threshold() {
    let (mut blob, clock) = make_blob(4);
    assert!(!blob.reactive_px(0.9));
    assert_eq!(blob.energy_state(), EnergyState::Rest);
    assert!(!blob.reactive_px(0.9));
    assert_eq!(blob.energy_state(), EnergyState::Rest);

    assert!(blob.reactive_px(1.5));
    assert_eq!(blob.energy_state(), EnergyState::Increasing);
    clock.advance(375.0);
    blob.energize();
    assert!(blob.theta_delta() > 0.008);
}

#[test]
fn tick_runs_energy_shape_and_render() {
    let (mut blob, clock) = make_blob(4);
    blob.cue_expansion();
    blob.reactive_px(10.0);
    clock.advance(375.0);
    blob.tick().unwrap();
    assert!(blob.radius_offset() > 0.0);
    assert!(blob.theta_delta() > 0.008);
    assert!(!blob.surface().last_frame().is_empty());
}

// The bump radius is drawn once at construction, so a blob built large and
// then shrunk can push its offset past the new, smaller diagonal.
#[test]
fn shrunk_viewport_expands_fully_and_stops_rendering() {
    let (mut blob, clock) = make_blob(6);
    blob.surface_mut().set_viewport(30.0, 40.0);
    assert!(blob.cue_expansion());

    let mut ticks = 0;
    while blob.shape_state() != ShapeState::Expanded {
        assert!(ticks < 120, "expansion never settled");
        clock.advance(16.0);
        blob.tick().unwrap();
        ticks += 1;
    }
    assert!((blob.diagonal() - 50.0).abs() < 1e-9);
    assert!(blob.radius_offset() >= blob.diagonal());

    let before = blob.surface().commands().len();
    blob.update().unwrap();
    clock.advance(16.0);
    blob.tick().unwrap();
    assert_eq!(blob.surface().commands().len(), before);
    assert_eq!(blob.shape_state(), ShapeState::Expanded);

    // collapsing resumes drawing
    assert!(blob.cue_collapse());
    clock.advance(16.0);
    blob.tick().unwrap();
    assert_eq!(blob.shape_state(), ShapeState::Collapsing);
    assert!(blob.surface().commands().len() > before);
}
