//! Validates hexagonal tiling layout, enumeration order, and centroid placement

use hexmock::BoundingBox;
use hexmock::geometry::centroid::ring_centroid;
use hexmock::geometry::distance::haversine_km;
use hexmock::geometry::hexgrid::hex_grid;

fn continental_box() -> BoundingBox {
    BoundingBox::new(-125.0, 24.0, -66.5, 49.5).unwrap()
}

#[test]
fn test_continental_tiling_is_non_empty() {
    let rings = hex_grid(continental_box(), 75.0).unwrap();
    assert!(!rings.is_empty());
}

#[test]
fn test_rings_are_closed_hexagons() {
    let rings = hex_grid(continental_box(), 150.0).unwrap();

    for ring in &rings {
        assert_eq!(ring.len(), 7);
        assert_eq!(ring.first(), ring.last());
    }
}

#[test]
fn test_centroids_fall_inside_the_region() {
    let bbox = continental_box();
    let rings = hex_grid(bbox, 75.0).unwrap();

    // Edge cells may poke slightly past the box; centers should not
    let lon_margin = bbox.width() * 0.05;
    let lat_margin = bbox.height() * 0.05;

    for ring in &rings {
        let center = ring_centroid(ring).unwrap();
        assert!(
            ((bbox.west - lon_margin)..=(bbox.east + lon_margin)).contains(&center[0]),
            "centroid longitude {} outside the region",
            center[0]
        );
        assert!(
            ((bbox.south - lat_margin)..=(bbox.north + lat_margin)).contains(&center[1]),
            "centroid latitude {} outside the region",
            center[1]
        );
    }
}

#[test]
fn test_enumeration_is_column_major_south_to_north() {
    let rings = hex_grid(continental_box(), 150.0).unwrap();

    let first = ring_centroid(rings.first().unwrap()).unwrap();
    let second = ring_centroid(rings.get(1).unwrap()).unwrap();
    let last = ring_centroid(rings.last().unwrap()).unwrap();

    // Second cell sits due north of the first; the final cell sits east
    assert!((second[0] - first[0]).abs() < 1e-9);
    assert!(second[1] > first[1]);
    assert!(last[0] > first[0]);
}

#[test]
fn test_cell_width_tracks_requested_size() {
    let cell_side = 50.0;
    let bbox = BoundingBox::new(-100.0, 30.0, -90.0, 40.0).unwrap();
    let rings = hex_grid(bbox, cell_side).unwrap();

    // Vertices 0 and 3 share a latitude, so their separation measures the
    // cell's east-west diameter on the sphere
    let ring = rings.first().unwrap();
    let span = haversine_km(ring[3], ring[0]);

    let expected = 2.0 * cell_side;
    assert!(
        (span - expected).abs() / expected < 0.1,
        "east-west span {span} km deviates from {expected} km"
    );
}

#[test]
fn test_larger_cells_tile_coarser() {
    let fine = hex_grid(continental_box(), 75.0).unwrap();
    let coarse = hex_grid(continental_box(), 150.0).unwrap();

    assert!(fine.len() > coarse.len());
}

#[test]
fn test_oversized_cells_yield_empty_tiling() {
    let bbox = BoundingBox::new(-1.0, -1.0, 1.0, 1.0).unwrap();
    let rings = hex_grid(bbox, 10_000.0).unwrap();

    assert!(rings.is_empty());
}

#[test]
fn test_degenerate_boxes_are_rejected() {
    assert!(BoundingBox::new(-66.5, 24.0, -125.0, 49.5).is_err());
    assert!(BoundingBox::new(-125.0, 49.5, -66.5, 24.0).is_err());
    assert!(BoundingBox::new(-125.0, 24.0, -125.0, 49.5).is_err());
    assert!(BoundingBox::new(f64::NAN, 24.0, -66.5, 49.5).is_err());
}

#[test]
fn test_non_positive_cell_sides_are_rejected() {
    let bbox = continental_box();

    assert!(hex_grid(bbox, 0.0).is_err());
    assert!(hex_grid(bbox, -10.0).is_err());
    assert!(hex_grid(bbox, f64::NAN).is_err());
    assert!(hex_grid(bbox, f64::INFINITY).is_err());
}
