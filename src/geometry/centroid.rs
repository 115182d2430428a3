//! Ring centroids
//!
//! A cell's representative point is the arithmetic mean of its ring
//! vertices. For the regular hexagons produced by the tiler this lands
//! exactly on the cell center, and it is the anchor every synthesized
//! attribute is evaluated at.

/// Mean position of a ring's vertices as `[longitude, latitude]`
///
/// When the ring is closed (last position repeats the first) the closing
/// duplicate is excluded so it does not bias the mean. Returns `None` for
/// rings with no distinct vertices.
pub fn ring_centroid(ring: &[[f64; 2]]) -> Option<[f64; 2]> {
    let closed = ring.len() > 1 && is_same_position(ring.first(), ring.last());
    let span = if closed { ring.len() - 1 } else { ring.len() };

    let vertices = ring.get(..span)?;
    if vertices.is_empty() {
        return None;
    }

    let count = vertices.len() as f64;
    let sum = vertices
        .iter()
        .fold([0.0_f64, 0.0_f64], |acc, pos| [acc[0] + pos[0], acc[1] + pos[1]]);

    Some([sum[0] / count, sum[1] / count])
}

// A closing vertex is a verbatim copy of the first, so bit equality
// identifies it without tripping over float rounding.
fn is_same_position(a: Option<&[f64; 2]>, b: Option<&[f64; 2]>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => {
            a[0].to_bits() == b[0].to_bits() && a[1].to_bits() == b[1].to_bits()
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::ring_centroid;

    #[test]
    fn test_closed_square_centroid_excludes_closing_vertex() {
        let ring = vec![[0.0, 0.0], [2.0, 0.0], [2.0, 2.0], [0.0, 2.0], [0.0, 0.0]];
        assert_eq!(ring_centroid(&ring), Some([1.0, 1.0]));
    }

    #[test]
    fn test_open_ring_uses_every_vertex() {
        let ring = vec![[0.0, 0.0], [3.0, 0.0], [0.0, 3.0]];
        assert_eq!(ring_centroid(&ring), Some([1.0, 1.0]));
    }

    #[test]
    fn test_empty_ring_has_no_centroid() {
        assert_eq!(ring_centroid(&[]), None);
    }

    #[test]
    fn test_single_vertex_is_its_own_centroid() {
        assert_eq!(ring_centroid(&[[5.0, -3.0]]), Some([5.0, -3.0]));
    }
}
