use crate::{
    animation::tween::Lerp,
    foundation::core::{Point, Rect, Vec2},
};

/// Open polyline used for edge routes.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Polyline(pub Vec<Point>);

impl Polyline {
    /// Build from points.
    pub fn new(points: impl Into<Vec<Point>>) -> Self {
        Self(points.into())
    }

    /// Vertices of the polyline.
    pub fn points(&self) -> &[Point] {
        &self.0
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Return `true` when there are no vertices.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First vertex.
    pub fn start(&self) -> Option<Point> {
        self.0.first().copied()
    }

    /// Last vertex.
    pub fn end(&self) -> Option<Point> {
        self.0.last().copied()
    }

    /// Total arc length.
    pub fn length(&self) -> f64 {
        self.0.windows(2).map(|w| w[0].distance(w[1])).sum()
    }

    /// Point `distance` along the polyline (clamped) and the unit tangent there.
    ///
    /// Degenerate polylines report a `+x` tangent.
    pub fn point_at_distance(&self, distance: f64) -> Option<(Point, Vec2)> {
        let first = self.start()?;
        let mut remaining = distance.max(0.0);
        let mut last_hit = None;
        for w in self.0.windows(2) {
            let seg = w[1] - w[0];
            let len = seg.hypot();
            if len <= f64::EPSILON {
                continue;
            }
            let tangent = seg / len;
            if remaining <= len {
                return Some((w[0] + tangent * remaining, tangent));
            }
            remaining -= len;
            last_hit = Some((w[1], tangent));
        }
        Some(last_hit.unwrap_or((first, Vec2::new(1.0, 0.0))))
    }

    /// Remove `start` units of length from the beginning and `end` units from the end.
    ///
    /// When the cuts overlap the result collapses to a zero-length segment.
    pub fn trimmed(&self, start: f64, end: f64) -> Polyline {
        let total = self.length();
        let start = start.max(0.0);
        let end = end.max(0.0);
        if self.0.len() < 2 {
            return self.clone();
        }
        if start + end >= total {
            let p = self
                .point_at_distance(start.min(total))
                .map(|(p, _)| p)
                .unwrap_or(self.0[0]);
            return Polyline(vec![p, p]);
        }

        let stop = total - end;
        let mut out = Vec::with_capacity(self.0.len());
        if let Some((p, _)) = self.point_at_distance(start) {
            out.push(p);
        }
        let mut travelled = 0.0;
        for w in self.0.windows(2) {
            travelled += w[0].distance(w[1]);
            if travelled > start && travelled < stop {
                out.push(w[1]);
            }
        }
        if let Some((p, _)) = self.point_at_distance(stop) {
            out.push(p);
        }
        Polyline(out)
    }

    /// Copy shifted by `offset`.
    pub fn translated(&self, offset: Vec2) -> Polyline {
        Polyline(self.0.iter().map(|p| *p + offset).collect())
    }

    /// Smallest rectangle containing every vertex.
    pub fn bounding_box(&self) -> Option<Rect> {
        let (first, rest) = self.0.split_first()?;
        Some(
            rest.iter()
                .fold(Rect::from_points(*first, *first), |r, p| r.union_pt(*p)),
        )
    }

    // Split the longest segment until there are `n` vertices; the path itself is unchanged.
    fn densified(&self, n: usize) -> Vec<Point> {
        let mut pts = self.0.clone();
        if pts.len() == 1 {
            pts.resize(n, pts[0]);
            return pts;
        }
        while pts.len() < n {
            let mut longest = 0;
            let mut longest_len = -1.0;
            for (i, w) in pts.windows(2).enumerate() {
                let len = w[0].distance(w[1]);
                if len > longest_len {
                    longest = i;
                    longest_len = len;
                }
            }
            let mid = pts[longest].midpoint(pts[longest + 1]);
            pts.insert(longest + 1, mid);
        }
        pts
    }
}

impl Lerp for Polyline {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        if a.is_empty() || b.is_empty() {
            return if t >= 1.0 { b.clone() } else { a.clone() };
        }
        let n = a.len().max(b.len());
        let from = a.densified(n);
        let to = b.densified(n);
        Polyline(
            from.iter()
                .zip(to.iter())
                .map(|(p, q)| p.lerp(*q, t))
                .collect(),
        )
    }
}

impl From<Vec<Point>> for Polyline {
    fn from(points: Vec<Point>) -> Self {
        Self(points)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/polyline.rs"]
mod tests;
