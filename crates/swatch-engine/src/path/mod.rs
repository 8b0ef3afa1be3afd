//! Closed boundary paths made of straight edges and elliptical arcs.
//!
//! Backends that cannot consume arcs directly flatten them with
//! [`Arc::cubics`].

mod arc;

pub use arc::{Arc, Cubic};

use crate::coords::Vec2;

/// One drawing instruction of a [`Path`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PathSegment {
    MoveTo(Vec2),
    LineTo(Vec2),
    /// Arc starting at the current point (the preceding segment always ends on
    /// `arc.start_point()`).
    ArcTo(Arc),
    Close,
}

/// Ordered list of path segments.
///
/// Built with [`Path::arc_to`], which connects to the arc start the way a
/// canvas `arcTo` does: the first arc opens the contour with a move, every
/// later arc is joined to the current point with a straight line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    segments: Vec<PathSegment>,
    current: Option<Vec2>,
}

impl Path {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// End point of the last segment, `None` before the first move.
    #[inline]
    pub fn current_point(&self) -> Option<Vec2> {
        self.current
    }

    pub fn move_to(&mut self, p: Vec2) -> &mut Self {
        self.segments.push(PathSegment::MoveTo(p));
        self.current = Some(p);
        self
    }

    pub fn line_to(&mut self, p: Vec2) -> &mut Self {
        if self.current.is_none() {
            return self.move_to(p);
        }
        self.segments.push(PathSegment::LineTo(p));
        self.current = Some(p);
        self
    }

    /// Appends `arc`, moving or lining to its start point first.
    pub fn arc_to(&mut self, arc: Arc) -> &mut Self {
        let start = arc.start_point();
        match self.current {
            None => {
                self.move_to(start);
            }
            Some(p) if p != start => {
                self.line_to(start);
            }
            Some(_) => {}
        }
        self.segments.push(PathSegment::ArcTo(arc));
        self.current = Some(arc.end_point());
        self
    }

    /// Closes the current contour with a straight edge back to its start.
    pub fn close(&mut self) -> &mut Self {
        if self.current.is_some() && !self.is_closed() {
            self.segments.push(PathSegment::Close);
        }
        self
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        matches!(self.segments.last(), Some(PathSegment::Close))
    }

    pub fn arcs(&self) -> impl Iterator<Item = &Arc> {
        self.segments.iter().filter_map(|s| match s {
            PathSegment::ArcTo(arc) => Some(arc),
            _ => None,
        })
    }

    /// Start and end points of every segment, consecutive duplicates removed.
    ///
    /// For a path whose arcs all have zero radius this is exactly the polygon
    /// of corner points.
    pub fn anchor_points(&self) -> Vec<Vec2> {
        let mut out: Vec<Vec2> = Vec::with_capacity(self.segments.len() * 2);
        let mut push = |p: Vec2| {
            if out.last() != Some(&p) {
                out.push(p);
            }
        };

        for seg in &self.segments {
            match *seg {
                PathSegment::MoveTo(p) | PathSegment::LineTo(p) => push(p),
                PathSegment::ArcTo(arc) => {
                    push(arc.start_point());
                    push(arc.end_point());
                }
                PathSegment::Close => {}
            }
        }
        out
    }
}
