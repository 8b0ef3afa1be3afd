use crate::coords::{Rect, Vec2};

/// Elliptical arc inscribed in `oval`.
///
/// Angles are in degrees: 0° points along +X, 90° along +Y (down), so a
/// positive sweep runs clockwise on screen.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Arc {
    pub oval: Rect,
    pub start_deg: f32,
    pub sweep_deg: f32,
}

/// Cubic Bézier piece `(from, ctrl1, ctrl2, to)`.
pub type Cubic = [Vec2; 4];

impl Arc {
    #[inline]
    pub const fn new(oval: Rect, start_deg: f32, sweep_deg: f32) -> Self {
        Self { oval, start_deg, sweep_deg }
    }

    #[inline]
    pub fn radii(self) -> Vec2 {
        Vec2::new(self.oval.size.x * 0.5, self.oval.size.y * 0.5)
    }

    /// Point on the ellipse at `deg`.
    pub fn point_at(self, deg: f32) -> Vec2 {
        let c = self.oval.center();
        let r = self.radii();
        let (sin, cos) = deg.to_radians().sin_cos();
        Vec2::new(snap(c.x + r.x * cos), snap(c.y + r.y * sin))
    }

    #[inline]
    pub fn start_point(self) -> Vec2 {
        self.point_at(self.start_deg)
    }

    #[inline]
    pub fn end_point(self) -> Vec2 {
        self.point_at(self.start_deg + self.sweep_deg)
    }

    /// True when the arc collapses to a single point.
    #[inline]
    pub fn is_degenerate(self) -> bool {
        let r = self.radii();
        r.x == 0.0 || r.y == 0.0 || self.sweep_deg == 0.0
    }

    /// Approximates the arc with cubic Béziers, one per ≤90° piece.
    ///
    /// Control points sit at `4/3 · tan(θ/4)` along the tangents. A degenerate
    /// arc yields no pieces.
    pub fn cubics(self) -> Vec<Cubic> {
        if self.is_degenerate() {
            return Vec::new();
        }

        let pieces = (self.sweep_deg.abs() / 90.0).ceil().max(1.0) as usize;
        let step = self.sweep_deg / pieces as f32;
        let c = self.oval.center();
        let r = self.radii();
        let k = 4.0 / 3.0 * (step.to_radians() / 4.0).tan();

        let tangent = |deg: f32| {
            let (sin, cos) = deg.to_radians().sin_cos();
            Vec2::new(-r.x * sin, r.y * cos)
        };
        let point = |deg: f32| {
            let (sin, cos) = deg.to_radians().sin_cos();
            Vec2::new(c.x + r.x * cos, c.y + r.y * sin)
        };

        (0..pieces)
            .map(|i| {
                let a0 = self.start_deg + step * i as f32;
                let a1 = a0 + step;
                let from = if i == 0 { self.start_point() } else { point(a0) };
                let to = if i + 1 == pieces { self.end_point() } else { point(a1) };
                [from, from + tangent(a0) * k, to - tangent(a1) * k, to]
            })
            .collect()
    }
}

/// Rounds away float noise from `sin`/`cos` at multiples of 90°.
#[inline]
fn snap(v: f32) -> f32 {
    let r = v.round();
    if (v - r).abs() < 1e-4 { r } else { v }
}
