//! Geometry metrics over physical node positions.

/// Axis-aligned bounding box of a 2D point cloud.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoundingBox {
    pub min: [f64; 2],
    pub max: [f64; 2],
}

impl BoundingBox {
    /// Midpoint of the box.
    pub fn center(&self) -> [f64; 2] {
        [
            0.5 * (self.min[0] + self.max[0]),
            0.5 * (self.min[1] + self.max[1]),
        ]
    }

    /// `[width, height]` of the box.
    pub fn extent(&self) -> [f64; 2] {
        [self.max[0] - self.min[0], self.max[1] - self.min[1]]
    }
}

/// Bounding box of `points`, or `None` if there are none.
pub fn bounding_box<I>(points: I) -> Option<BoundingBox>
where
    I: IntoIterator<Item = [f64; 2]>,
{
    let mut iter = points.into_iter();
    let first = iter.next()?;
    let mut bbox = BoundingBox {
        min: first,
        max: first,
    };
    for [x, y] in iter {
        bbox.min[0] = bbox.min[0].min(x);
        bbox.min[1] = bbox.min[1].min(y);
        bbox.max[0] = bbox.max[0].max(x);
        bbox.max[1] = bbox.max[1].max(y);
    }
    Some(bbox)
}

/// Euclidean length of the segment `a`–`b`.
#[inline]
pub fn segment_length(a: [f64; 2], b: [f64; 2]) -> f64 {
    (b[0] - a[0]).hypot(b[1] - a[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bbox_of_empty_is_none() {
        assert!(bounding_box(std::iter::empty()).is_none());
    }

    #[test]
    fn bbox_center_and_extent() {
        let bbox = bounding_box([[1.0, -2.0], [5.0, 4.0], [3.0, 0.0]]).unwrap();
        assert_eq!(bbox.min, [1.0, -2.0]);
        assert_eq!(bbox.max, [5.0, 4.0]);
        assert_eq!(bbox.center(), [3.0, 1.0]);
        assert_eq!(bbox.extent(), [4.0, 6.0]);
    }

    #[test]
    fn segment_length_is_euclidean() {
        assert_eq!(segment_length([0.0, 0.0], [3.0, 4.0]), 5.0);
    }
}
