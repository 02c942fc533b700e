use approx::assert_relative_eq;
use beetrack::synth::{insert_track, remove_track_at};
use beetrack::{AnnotatorConfig, Error, Orientation, Point, TrackCollection};

fn config(orientation: Orientation, temporal: u32, spatial: u32) -> AnnotatorConfig {
    AnnotatorConfig {
        orientation: vec![orientation],
        temporal_spread: temporal,
        spatial_spread: spatial,
    }
}

#[test]
fn insertion_cardinality() {
    let mut collection = TrackCollection::seeded();
    let cfg = config(Orientation::Vertical, 10, 10);

    let id = insert_track(&mut collection, [50.0, 100.0, 200.0], false, &cfg).unwrap();

    assert_eq!(id, 1);
    assert_eq!(collection.len(), 1 + 21);
    assert_eq!(collection.directions().len(), collection.len());
    assert_eq!(collection.track_count(), 2);
    assert!(collection
        .iter()
        .filter(|(p, _)| p.track_id == 1)
        .all(|(_, d)| d == 1));
    assert_eq!(
        collection.points().iter().filter(|p| p.track_id == 1).count(),
        21
    );
}

#[test]
fn shift_flips_direction_label_and_offset_sign() {
    let cfg = config(Orientation::Vertical, 5, 5);

    let mut with_shift = TrackCollection::seeded();
    insert_track(&mut with_shift, [50.0, 100.0, 200.0], true, &cfg).unwrap();
    let last = *with_shift.points().last().unwrap();
    assert!(with_shift.iter().filter(|(p, _)| p.track_id == 1).all(|(_, d)| d == 0));
    // label 0: offset keeps its sign, so dt = +5 lands above the origin
    assert_relative_eq!(last.y, 105.0, epsilon = 1e-4);

    let mut without_shift = TrackCollection::seeded();
    insert_track(&mut without_shift, [50.0, 100.0, 200.0], false, &cfg).unwrap();
    let last = *without_shift.points().last().unwrap();
    assert!(without_shift.iter().filter(|(p, _)| p.track_id == 1).all(|(_, d)| d == 1));
    assert_relative_eq!(last.y, 95.0, epsilon = 1e-4);
}

#[test]
fn scenario_vertical_insert_exact_values() {
    let mut collection = TrackCollection::seeded();
    let cfg = config(Orientation::Vertical, 5, 5);

    let id = insert_track(&mut collection, [10.0, 35.4, 50.2], false, &cfg).unwrap();
    assert_eq!(id, 1);

    let new_points: Vec<Point> = collection
        .points()
        .iter()
        .filter(|p| p.track_id == 1)
        .copied()
        .collect();
    assert_eq!(new_points.len(), 11);

    for (i, p) in new_points.iter().enumerate() {
        let dt = i as f32 - 5.0;
        assert_relative_eq!(p.time, 10.0 + dt, epsilon = 1e-4);
        assert_relative_eq!(p.y, 35.4 - 5.0 * dt / 5.0, epsilon = 1e-4);
        assert_relative_eq!(p.x, 50.2, epsilon = 1e-4);
    }
}

#[test]
fn horizontal_orientation_offsets_x() {
    let mut collection = TrackCollection::seeded();
    let cfg = config(Orientation::Horizontal, 3, 6);

    insert_track(&mut collection, [20.0, 7.0, 40.0], false, &cfg).unwrap();

    for (i, p) in collection
        .points()
        .iter()
        .filter(|p| p.track_id == 1)
        .enumerate()
    {
        let dt = i as f32 - 3.0;
        assert_relative_eq!(p.y, 7.0, epsilon = 1e-4);
        assert_relative_eq!(p.x, 40.0 - 6.0 * dt / 3.0, epsilon = 1e-4);
    }
}

#[test]
fn time_clamp_keeps_times_non_negative() {
    let mut collection = TrackCollection::seeded();
    let cfg = config(Orientation::Vertical, 5, 5);

    insert_track(&mut collection, [2.0, 50.0, 50.0], false, &cfg).unwrap();

    assert!(collection.points().iter().all(|p| p.time >= 0.0));
    // dt in -5..=-2 all clamp to zero
    assert_eq!(
        collection
            .points()
            .iter()
            .filter(|p| p.track_id == 1 && p.time == 0.0)
            .count(),
        4
    );
}

#[test]
fn zero_temporal_spread_yields_single_point() {
    let mut collection = TrackCollection::seeded();
    let cfg = config(Orientation::Vertical, 0, 10);

    let id = insert_track(&mut collection, [-3.0, 12.0, 34.0], false, &cfg).unwrap();

    let new_points: Vec<Point> = collection
        .points()
        .iter()
        .filter(|p| p.track_id == id)
        .copied()
        .collect();
    assert_eq!(new_points.len(), 1);
    assert_relative_eq!(new_points[0].time, 0.0);
    assert_relative_eq!(new_points[0].y, 12.0);
    assert_relative_eq!(new_points[0].x, 34.0);
}

#[test]
fn orientation_selection_must_be_single() {
    let mut collection = TrackCollection::seeded();

    let mut cfg = config(Orientation::Vertical, 5, 5);
    cfg.orientation.clear();
    let err = insert_track(&mut collection, [1.0, 2.0, 3.0], false, &cfg).unwrap_err();
    assert!(matches!(err, Error::InvalidConfiguration { selected: 0 }));

    cfg.orientation = vec![Orientation::Vertical, Orientation::Horizontal];
    let err = insert_track(&mut collection, [1.0, 2.0, 3.0], false, &cfg).unwrap_err();
    assert!(matches!(err, Error::InvalidConfiguration { selected: 2 }));

    // failed inserts leave the collection untouched
    assert_eq!(collection.len(), 1);
}

#[test]
fn id_monotonic_across_deletions() {
    let mut collection = TrackCollection::seeded();
    let cfg = config(Orientation::Vertical, 5, 5);

    assert_eq!(insert_track(&mut collection, [50.0, 0.0, 0.0], false, &cfg).unwrap(), 1);
    assert_eq!(insert_track(&mut collection, [50.0, 1000.0, 0.0], false, &cfg).unwrap(), 2);
    assert_eq!(insert_track(&mut collection, [50.0, 2000.0, 0.0], false, &cfg).unwrap(), 3);

    let removed = remove_track_at(&mut collection, [50.0, 1000.0, 0.0]).unwrap();
    assert_eq!(removed, 2);

    // the deleted id is not handed out again: next insert is max + 1
    assert_eq!(insert_track(&mut collection, [50.0, 3000.0, 0.0], false, &cfg).unwrap(), 4);
}

#[test]
fn removal_is_atomic_with_overlapping_tracks() {
    let mut points = Vec::new();
    let mut directions = Vec::new();
    for id in 1..=3u32 {
        for t in 0..5 {
            points.push(Point::new(id, t as f32, 10.0 + id as f32 * 0.5, 20.0));
            directions.push(1);
        }
    }
    let mut collection = TrackCollection::from_parts(points, directions).unwrap();

    // click lands exactly on track 2's midpoint
    let removed = remove_track_at(&mut collection, [2.0, 11.0, 20.0]).unwrap();

    assert_eq!(removed, 2);
    assert_eq!(collection.len(), 10);
    assert!(collection.points().iter().all(|p| p.track_id != 2));
    for id in [1u32, 3] {
        assert_eq!(
            collection.points().iter().filter(|p| p.track_id == id).count(),
            5
        );
    }
}

#[test]
fn removal_distance_includes_time() {
    let points = vec![
        Point::new(1, 0.0, 5.0, 5.0),
        Point::new(2, 100.0, 5.0, 5.0),
    ];
    let mut collection = TrackCollection::from_parts(points, vec![0, 1]).unwrap();

    // spatially identical tracks: the temporal component decides
    let removed = remove_track_at(&mut collection, [100.0, 5.0, 5.0]).unwrap();

    assert_eq!(removed, 2);
    assert_eq!(collection.points(), &[Point::new(1, 0.0, 5.0, 5.0)]);
    assert_eq!(collection.directions(), &[0]);
}

#[test]
fn remove_on_empty_collection_errors() {
    let mut collection = TrackCollection::new();
    let err = remove_track_at(&mut collection, [0.0, 0.0, 0.0]).unwrap_err();
    assert!(matches!(err, Error::EmptyCollection));
}
