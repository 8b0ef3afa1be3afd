/// Per-corner radii for a rounded rectangle (pixels).
///
/// Corners follow CSS order: top-left, top-right, bottom-right, bottom-left.
/// Constructors normalize negative and non-finite values to zero, so a stored
/// radius is always `>= 0`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CornerRadii {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadii {
    #[inline]
    pub fn new(top_left: f32, top_right: f32, bottom_right: f32, bottom_left: f32) -> Self {
        Self {
            top_left: sanitize(top_left),
            top_right: sanitize(top_right),
            bottom_right: sanitize(bottom_right),
            bottom_left: sanitize(bottom_left),
        }
    }

    /// Uniform radius on all four corners.
    #[inline]
    pub fn all(r: f32) -> Self {
        Self::new(r, r, r, r)
    }

    /// True when every corner is sharp.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.as_array().iter().all(|&r| r <= 0.0)
    }

    /// Clamps every corner independently against the same `max`.
    ///
    /// Adjacent corners do not share a budget: two corners on a short side may
    /// both reach `max` and meet exactly at that side's midpoint.
    #[inline]
    pub fn clamped(self, max: f32) -> Self {
        let max = sanitize(max);
        Self {
            top_left: self.top_left.min(max),
            top_right: self.top_right.min(max),
            bottom_right: self.bottom_right.min(max),
            bottom_left: self.bottom_left.min(max),
        }
    }

    /// Radii in path order: `[top_left, top_right, bottom_right, bottom_left]`.
    #[inline]
    pub fn as_array(self) -> [f32; 4] {
        [self.top_left, self.top_right, self.bottom_right, self.bottom_left]
    }
}

#[inline]
fn sanitize(r: f32) -> f32 {
    if r.is_finite() && r > 0.0 { r } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_and_nan_become_zero() {
        let r = CornerRadii::new(-4.0, f32::NAN, f32::INFINITY, 3.0);
        assert_eq!(r.as_array(), [0.0, 0.0, 0.0, 3.0]);
    }

    #[test]
    fn is_zero_only_when_all_sharp() {
        assert!(CornerRadii::default().is_zero());
        assert!(CornerRadii::all(-1.0).is_zero());
        assert!(!CornerRadii::new(0.0, 0.0, 0.5, 0.0).is_zero());
    }

    #[test]
    fn clamped_is_per_corner() {
        let r = CornerRadii::new(60.0, 10.0, 50.0, 0.0).clamped(50.0);
        assert_eq!(r.as_array(), [50.0, 10.0, 50.0, 0.0]);
    }

    #[test]
    fn clamped_against_zero_max_flattens_everything() {
        assert!(CornerRadii::all(12.0).clamped(0.0).is_zero());
        assert!(CornerRadii::all(12.0).clamped(-3.0).is_zero());
    }
}
