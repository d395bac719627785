use floors_wasm::config::TiltConfig;
use floors_wasm::tilt::{DividerProbe, TiltEngine};
use floors_wasm::Rect;

const VH: f64 = 1000.0;

fn probe(line_top: f64, panel_top: f64) -> DividerProbe {
    DividerProbe {
        line: Some(Rect::new(line_top, 2.0)),
        panel: Some(Rect::new(panel_top, 100.0)),
        panel_height: Some(100.0),
    }
}

/// Ceiling far above, floor far below, one interior divider at `line_top`.
fn three(line_top: f64) -> Vec<DividerProbe> {
    vec![probe(-5000.0, -5050.0), probe(line_top, line_top - 50.0), probe(5000.0, 4950.0)]
}

#[test]
fn ends_are_pinned_for_any_count_and_scroll() {
    for n in 2..8 {
        for shift in [-3000.0, -250.0, 0.0, 420.0, 7000.0] {
            let mut engine = TiltEngine::new(TiltConfig::default());
            let probes: Vec<_> = (0..n)
                .map(|i| probe(i as f64 * 600.0 + shift, i as f64 * 600.0 + shift - 50.0))
                .collect();
            for _ in 0..3 {
                let tilts = engine.update(&probes, VH);
                assert_eq!(tilts[0].unwrap().angle, -70.0);
                assert_eq!(tilts[n - 1].unwrap().angle, 70.0);
                assert_eq!(tilts[0].unwrap().depth, 0.0);
            }
        }
    }
}

#[test]
fn inactive_divider_snaps_shut() {
    let mut engine = TiltEngine::new(TiltConfig::default());

    // Line center (101) at or above the previous line's bottom (202): passed upward.
    let probes = vec![probe(200.0, 150.0), probe(100.0, 50.0), probe(5000.0, 4950.0)];
    let tilt = engine.update(&probes, VH)[1].unwrap();
    assert_eq!(tilt.angle, -70.0);
    assert_eq!(engine.angle(1), Some(-70.0));

    // Line center below the next line's top: not reached yet.
    let probes = vec![probe(-5000.0, -5050.0), probe(900.0, 850.0), probe(800.0, 750.0)];
    let tilt = engine.update(&probes, VH)[1].unwrap();
    assert_eq!(tilt.angle, 70.0);
    assert_eq!(tilt.depth, 0.0);
}

#[test]
fn active_divider_eases_toward_magnet_target() {
    let cfg = TiltConfig::default();
    let mut engine = TiltEngine::new(cfg.clone());
    // Line center 601: t = 101 / 180, leaning toward the floor.
    let probes = three(600.0);
    let target = (101.0 / 180.0) * cfg.max_down;

    let mut prev = 0.0;
    for _ in 0..200 {
        let tilt = engine.update(&probes, VH)[1].unwrap();
        let expected = prev + (target - prev) * 0.12;
        assert!((tilt.angle - expected).abs() < 1e-9);
        assert!(tilt.angle <= target + 1e-12, "overshot: {}", tilt.angle);
        let remaining = target - tilt.angle;
        if prev != target {
            assert!((remaining - (target - prev) * 0.88).abs() < 1e-9);
        }
        assert!((tilt.depth - tilt.angle.abs() * 0.2).abs() < 1e-12);
        prev = tilt.angle;
    }
    assert!((prev - target).abs() < 1e-6);
}

#[test]
fn upward_swing_is_wider_and_clamped() {
    let mut engine = TiltEngine::new(TiltConfig::default());
    // Line center 101, far above the magnet: t clamps at -1.2 → target -132.
    let probes = three(100.0);
    let first = engine.update(&probes, VH)[1].unwrap();
    assert!((first.angle - (-132.0 * 0.12)).abs() < 1e-9);
    assert!((first.depth - first.angle.abs() * 0.4).abs() < 1e-12);

    let mut last = first.angle;
    for _ in 0..300 {
        last = engine.update(&probes, VH)[1].unwrap().angle;
        assert!(last >= -132.0);
    }
    assert!((last + 132.0).abs() < 1e-6);
}

#[test]
fn snap_then_reactivate_eases_from_snapped_angle() {
    let mut engine = TiltEngine::new(TiltConfig::default());
    let passed = vec![probe(200.0, 150.0), probe(100.0, 50.0), probe(5000.0, 4950.0)];
    engine.update(&passed, VH);
    assert_eq!(engine.angle(1), Some(-70.0));

    // Magnet dead center: target 0, first eased step starts from -70.
    let centered = three(499.0);
    let tilt = engine.update(&centered, VH)[1].unwrap();
    assert!((tilt.angle - (-70.0 + 70.0 * 0.12)).abs() < 1e-9);
}

#[test]
fn pivot_is_calibrated_once_until_resize() {
    let mut engine = TiltEngine::new(TiltConfig::default());
    // Panel 550..650, line center 601 → 601 - 550 - 8 = 43.
    let probes = vec![
        probe(-5000.0, -5050.0),
        DividerProbe {
            line: Some(Rect::new(600.0, 2.0)),
            panel: Some(Rect::new(550.0, 100.0)),
            panel_height: Some(100.0),
        },
        probe(5000.0, 4950.0),
    ];
    let first = engine.update(&probes, VH)[1].unwrap();
    assert_eq!(first.pivot, Some(43.0));
    assert_eq!(engine.pivot(1), Some(43.0));

    let second = engine.update(&probes, VH)[1].unwrap();
    assert_eq!(second.pivot, None);
    assert_eq!(engine.pivot(1), Some(43.0));

    engine.resize();
    assert_eq!(engine.pivot(1), None);
    let third = engine.update(&probes, VH)[1].unwrap();
    assert_eq!(third.pivot, Some(43.0));
}

#[test]
fn pivot_clamps_into_panel() {
    let mut engine = TiltEngine::new(TiltConfig::default());
    let probes = vec![
        probe(-5000.0, -5050.0),
        DividerProbe {
            line: Some(Rect::new(900.0, 2.0)),
            panel: Some(Rect::new(100.0, 100.0)),
            panel_height: Some(100.0),
        },
        probe(5000.0, 4950.0),
    ];
    assert_eq!(engine.update(&probes, VH)[1].unwrap().pivot, Some(100.0));

    let mut engine = TiltEngine::new(TiltConfig::default());
    let probes = vec![
        probe(-5000.0, -5050.0),
        DividerProbe {
            line: Some(Rect::new(0.0, 2.0)),
            panel: Some(Rect::new(400.0, 100.0)),
            panel_height: Some(100.0),
        },
        probe(5000.0, 4950.0),
    ];
    assert_eq!(engine.update(&probes, VH)[1].unwrap().pivot, Some(0.0));
}

#[test]
fn pivot_uses_layout_height_of_a_rotated_panel() {
    let mut engine = TiltEngine::new(TiltConfig::default());
    // A 100px panel rotated near 70° reports a ~34px box; the hinge is still
    // measured against the full height: 600 + 1 - 541 - 8 = 52.
    let probes = vec![
        probe(-5000.0, -5050.0),
        DividerProbe {
            line: Some(Rect::new(600.0, 2.0)),
            panel: Some(Rect::new(541.0, 34.0)),
            panel_height: Some(100.0),
        },
        probe(5000.0, 4950.0),
    ];
    assert_eq!(engine.update(&probes, VH)[1].unwrap().pivot, Some(52.0));
}

#[test]
fn pivot_falls_back_to_box_height_then_one() {
    let mut engine = TiltEngine::new(TiltConfig::default());
    let mut probes = three(600.0);
    probes[1] = DividerProbe {
        line: Some(Rect::new(600.0, 2.0)),
        panel: Some(Rect::new(550.0, 100.0)),
        panel_height: Some(0.0),
    };
    assert_eq!(engine.update(&probes, VH)[1].unwrap().pivot, Some(43.0));

    let mut engine = TiltEngine::new(TiltConfig::default());
    probes[1] = DividerProbe {
        line: Some(Rect::new(600.0, 2.0)),
        panel: Some(Rect::new(550.0, 0.0)),
        panel_height: None,
    };
    assert_eq!(engine.update(&probes, VH)[1].unwrap().pivot, Some(1.0));
}

#[test]
fn divider_missing_parts_is_skipped() {
    let mut engine = TiltEngine::new(TiltConfig::default());
    let mut probes = three(600.0);
    probes[1].panel = None;
    probes[0].line = None;
    let tilts = engine.update(&probes, VH);
    assert!(tilts[0].is_none());
    assert!(tilts[1].is_none());
    assert_eq!(tilts[2].unwrap().angle, 70.0);
    assert_eq!(engine.angle(1), None);
}

#[test]
fn missing_neighbour_line_opens_the_gap() {
    let mut engine = TiltEngine::new(TiltConfig::default());
    // Previous divider has no line: its bound becomes -inf, so a line far up
    // is still active rather than snapped.
    let probes = vec![
        DividerProbe { line: None, panel: Some(Rect::new(0.0, 10.0)), panel_height: Some(10.0) },
        probe(-800.0, -850.0),
        probe(5000.0, 4950.0),
    ];
    let tilt = engine.update(&probes, VH)[1].unwrap();
    assert!(tilt.angle < 0.0 && tilt.angle > -70.0);
}
