// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::error::{QuestError, Result};
use crate::geo::Cell;
use crate::geofence::{locate, Clock, Evaluation, FixedClock, MerkleGeofence};
use crate::merkle::{Hash256, MerkleBody};
use crate::quest::QuestArea;
use crate::types::{Coordinate, LeafIndex, QuestId};
use crate::config::GeofenceConfig;

fn engine() -> MerkleGeofence<FixedClock> {
    MerkleGeofence::with_clock(FixedClock(1_700_000_000))
}

/// Four adjacent 0.01° buckets along the equator, lon 0.00 .. 0.04.
fn strip_body() -> MerkleBody {
    let cells = (0..4)
        .map(|i| {
            let west = i as f64 * 0.01;
            Cell::Bounds {
                south: 0.0,
                west,
                north: 0.01,
                east: west + 0.01,
            }
        })
        .collect();
    MerkleBody::commit(QuestId(42), cells).unwrap()
}

#[test]
fn test_single_disk_scenario() {
    let body = MerkleBody::commit(
        QuestId(1),
        vec![Cell::Disk {
            center: Coordinate::new(40.0, -75.0),
            radius_m: 200.0,
        }],
    )
    .unwrap();

    let found = engine().evaluate(Coordinate::new(40.0, -75.0), &body).unwrap();
    let proof = found.into_proof().expect("player at the centre must get a proof");
    assert_eq!(proof.leaf_index, LeafIndex(0));
    assert_eq!(proof.quest_id, QuestId(1));
    assert!(proof.sibling_path.is_empty());
    assert!(proof.verify_against(&body.root_hash));

    let far = engine().evaluate(Coordinate::new(41.0, -75.0), &body).unwrap();
    assert_eq!(far, Evaluation::NotInRange);
}

#[test]
fn test_every_leaf_yields_valid_proof() {
    let body = strip_body();
    for i in 0..4 {
        let player = Coordinate::new(0.005, i as f64 * 0.01 + 0.005);
        let proof = engine().evaluate(player, &body).unwrap().into_proof().unwrap();
        assert_eq!(proof.leaf_index, LeafIndex(i));
        assert_eq!(proof.leaf_hash, body.leaves[i as usize].hash);
        assert_eq!(proof.fold_root(), body.root_hash);
        assert_eq!(proof.claimed_coordinate, player);
        assert_eq!(proof.timestamp, 1_700_000_000);
    }
}

#[test]
fn test_outside_every_cell_is_not_in_range() {
    let body = strip_body();
    let outside = [
        Coordinate::new(0.02, 0.005),
        Coordinate::new(-0.001, 0.02),
        Coordinate::new(0.005, 0.05),
        Coordinate::new(0.005, -0.001),
    ];
    for p in outside {
        assert_eq!(engine().evaluate(p, &body).unwrap(), Evaluation::NotInRange);
    }
}

#[test]
fn test_overlap_picks_lower_index() {
    let wide = Cell::Bounds {
        south: 0.0,
        west: 0.0,
        north: 1.0,
        east: 1.0,
    };
    let narrow = Cell::Disk {
        center: Coordinate::new(0.5, 0.5),
        radius_m: 1000.0,
    };
    let p = Coordinate::new(0.5, 0.5);

    let body = MerkleBody::commit(QuestId(9), vec![narrow.clone(), wide.clone()]).unwrap();
    assert_eq!(locate(p, &body), Some(LeafIndex(0)));

    let swapped = MerkleBody::commit(QuestId(9), vec![wide, narrow]).unwrap();
    let proof = engine().evaluate(p, &swapped).unwrap().into_proof().unwrap();
    assert_eq!(proof.leaf_index, LeafIndex(0));
}

#[test]
fn test_hint_corners_do_not_grant_proof() {
    // Hint polygon sits around the player, committed cell is elsewhere.
    let body = MerkleBody::commit(
        QuestId(5),
        vec![Cell::Disk {
            center: Coordinate::new(10.0, 10.0),
            radius_m: 100.0,
        }],
    )
    .unwrap();
    let corners = vec![
        Coordinate::new(-1.0, -1.0),
        Coordinate::new(-1.0, 1.0),
        Coordinate::new(1.0, 1.0),
        Coordinate::new(1.0, -1.0),
    ];
    let area = QuestArea::new(corners, body).unwrap();

    let at_centroid = area.centroid().unwrap();
    assert_eq!(
        engine().evaluate_area(at_centroid, &area).unwrap(),
        Evaluation::NotInRange
    );
}

#[test]
fn test_tampered_root_is_proof_construction_error() {
    let mut body = strip_body();
    body.root_hash = Hash256([0xee; 32]);

    let err = engine()
        .evaluate(Coordinate::new(0.005, 0.005), &body)
        .unwrap_err();
    match err {
        QuestError::ProofConstruction { expected, computed } => {
            assert_eq!(expected, Hash256([0xee; 32]));
            assert_eq!(computed, strip_body().root_hash);
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_tampered_internal_node_is_proof_construction_error() {
    let mut body = strip_body();
    // Sibling of leaves 0/1 at level 1
    body.layers[0][1] = Hash256([1u8; 32]);

    let err = engine()
        .evaluate(Coordinate::new(0.005, 0.005), &body)
        .unwrap_err();
    assert!(matches!(err, QuestError::ProofConstruction { .. }));

    // Leaves 2 and 3 do not use the tampered node on their path.
    let ok = engine().evaluate(Coordinate::new(0.005, 0.025), &body).unwrap();
    assert!(ok.is_found());
}

#[test]
fn test_tampered_cell_rejected_when_leaf_hashes_checked() {
    let mut body = strip_body();
    body.leaves[0].cell = Cell::Bounds {
        south: -90.0,
        west: -180.0,
        north: 90.0,
        east: 180.0,
    };
    let p = Coordinate::new(45.0, 45.0);

    assert!(matches!(
        engine().evaluate(p, &body),
        Err(QuestError::InvalidGeometry(_))
    ));

    let lax = engine().with_config(GeofenceConfig {
        verify_leaf_hashes: false,
    });
    // Without the leaf check the stored hash still folds to the root.
    assert!(lax.evaluate(p, &body).unwrap().is_found());
}

#[test]
fn test_declared_leaf_count_mismatch_is_invalid_geometry() {
    let mut body = strip_body();
    body.leaf_count = 3;
    assert!(matches!(
        engine().evaluate(Coordinate::new(0.005, 0.005), &body),
        Err(QuestError::InvalidGeometry(_))
    ));
}

#[test]
fn test_missing_layer_is_invalid_geometry() {
    let mut body = strip_body();
    body.layers.pop();
    assert!(matches!(
        engine().evaluate(Coordinate::new(0.005, 0.005), &body),
        Err(QuestError::InvalidGeometry(_))
    ));
}

#[test]
fn test_engine_is_shareable_across_threads() {
    let body = std::sync::Arc::new(strip_body());
    let engine = std::sync::Arc::new(engine());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let body = body.clone();
            let engine = engine.clone();
            std::thread::spawn(move || {
                let p = Coordinate::new(0.005, i as f64 * 0.01 + 0.005);
                engine.evaluate(p, &body).unwrap().into_proof().unwrap().leaf_index
            })
        })
        .collect();

    for (i, h) in handles.into_iter().enumerate() {
        assert_eq!(h.join().unwrap(), LeafIndex(i as u32));
    }
}

struct BrokenClock;

impl Clock for BrokenClock {
    fn now(&self) -> Result<u64> {
        Err(QuestError::Clock("system time before the Unix epoch".into()))
    }
}

#[test]
fn test_clock_failure_is_an_error_not_timestamp_zero() {
    let body = strip_body();
    let engine = MerkleGeofence::with_clock(BrokenClock);

    let err = engine.evaluate(Coordinate::new(0.005, 0.005), &body).unwrap_err();
    assert!(matches!(err, QuestError::Clock(_)));

    // The clock is only consulted once a cell matches.
    let outside = engine.evaluate(Coordinate::new(0.5, 0.5), &body).unwrap();
    assert_eq!(outside, Evaluation::NotInRange);
}
