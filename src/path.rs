use std::f64::consts::TAU;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at `radius` from `self` along `angle` (radians, y pointing down).
    pub fn polar(self, radius: f64, angle: f64) -> Self {
        Self::new(self.x + angle.cos() * radius, self.y + angle.sin() * radius)
    }

    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Clockwise arc, angles in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    pub center: Point,
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

impl Arc {
    /// Swept angle in `0.0..=TAU`.
    pub fn sweep(&self) -> f64 {
        let sweep = self.end_angle - self.start_angle;
        if sweep >= TAU {
            TAU
        } else {
            sweep.rem_euclid(TAU)
        }
    }

    pub fn is_full_circle(&self) -> bool {
        self.sweep() >= TAU
    }

    pub fn start(&self) -> Point {
        self.center.polar(self.radius, self.start_angle)
    }

    pub fn end(&self) -> Point {
        self.center.polar(self.radius, self.start_angle + self.sweep())
    }

    /// Whether `angle` lies within the swept range.
    pub fn contains_angle(&self, angle: f64) -> bool {
        self.is_full_circle() || (angle - self.start_angle).rem_euclid(TAU) <= self.sweep()
    }

    fn flatten_into(&self, out: &mut Vec<Point>) {
        let sweep = self.sweep();
        let steps = ((self.radius.abs() * sweep) / 2.0).ceil().clamp(8.0, 256.0) as usize;
        for i in 0..=steps {
            let angle = self.start_angle + sweep * (i as f64 / steps as f64);
            out.push(self.center.polar(self.radius, angle));
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    Line { from: Point, to: Point },
    Arc(Arc),
}

/// A sequence of connected segments started by `move_to` or by an arc.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubPath {
    pub segments: Vec<Segment>,
}

/// Path under construction, with canvas-style current point semantics.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    pub subpaths: Vec<SubPath>,
    current: Option<Point>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.subpaths.iter().all(|sub| sub.segments.is_empty())
    }

    pub fn move_to(&mut self, point: Point) {
        self.subpaths.push(SubPath::default());
        self.current = Some(point);
    }

    /// Without a current point this only starts a subpath, like a 2D canvas.
    pub fn line_to(&mut self, point: Point) {
        match self.current {
            Some(from) => {
                self.push_segment(Segment::Line { from, to: point });
                self.current = Some(point);
            }
            None => self.move_to(point),
        }
    }

    /// Adds an arc, joining it to the current point with a straight line.
    pub fn arc(&mut self, arc: Arc) {
        let start = arc.start();
        match self.current {
            Some(from) if from.distance(start) > f64::EPSILON => {
                self.push_segment(Segment::Line { from, to: start });
            }
            Some(_) => {}
            None => self.move_to(start),
        }
        self.push_segment(Segment::Arc(arc));
        self.current = Some(arc.end());
    }

    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.subpaths.iter().flat_map(|sub| sub.segments.iter())
    }

    pub fn arcs(&self) -> impl Iterator<Item = &Arc> {
        self.segments().filter_map(|segment| match segment {
            Segment::Arc(arc) => Some(arc),
            Segment::Line { .. } => None,
        })
    }

    /// Each subpath as a closed polygon, for filling.
    pub fn flatten(&self) -> Vec<Vec<Point>> {
        self.subpaths
            .iter()
            .filter(|sub| !sub.segments.is_empty())
            .map(|sub| {
                let mut points = Vec::new();
                for segment in &sub.segments {
                    match segment {
                        Segment::Line { from, to } => {
                            if points.is_empty() {
                                points.push(*from);
                            }
                            points.push(*to);
                        }
                        Segment::Arc(arc) => arc.flatten_into(&mut points),
                    }
                }
                points
            })
            .collect()
    }

    fn push_segment(&mut self, segment: Segment) {
        if let Some(sub) = self.subpaths.last_mut() {
            sub.segments.push(segment);
        }
    }
}
