use bevy_math::IRect;

// Check if two half-open 1D ranges overlap. Ranges that only touch do not overlap.
#[must_use]
pub const fn ranges_overlap_1d(a_min: i32, a_max: i32, b_min: i32, b_max: i32) -> bool {
    a_min < b_max && b_min < a_max
}

// Axis-aligned rectangle overlap. Empty rectangles never overlap anything.
#[must_use]
pub fn rects_overlap(a: &IRect, b: &IRect) -> bool {
    !a.is_empty()
        && !b.is_empty()
        && ranges_overlap_1d(a.min.x, a.max.x, b.min.x, b.max.x)
        && ranges_overlap_1d(a.min.y, a.max.y, b.min.y, b.max.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_math::IVec2;

    fn rect(x0: i32, y0: i32, x1: i32, y1: i32) -> IRect {
        IRect::from_corners(IVec2::new(x0, y0), IVec2::new(x1, y1))
    }

    #[test]
    fn shared_edge_is_not_an_overlap() {
        assert!(!rects_overlap(&rect(0, 0, 4, 4), &rect(4, 0, 8, 4)));
        assert!(!rects_overlap(&rect(0, 0, 4, 4), &rect(0, 4, 4, 8)));
    }

    #[test]
    fn one_pixel_of_overlap_counts() {
        assert!(rects_overlap(&rect(0, 0, 4, 4), &rect(3, 3, 8, 8)));
    }

    #[test]
    fn containment_counts() {
        assert!(rects_overlap(&rect(0, 0, 10, 10), &rect(2, 2, 3, 3)));
        assert!(rects_overlap(&rect(2, 2, 3, 3), &rect(0, 0, 10, 10)));
    }

    #[test]
    fn degenerate_rect_never_overlaps() {
        assert!(!rects_overlap(&rect(2, 2, 2, 6), &rect(0, 0, 10, 10)));
    }
}
