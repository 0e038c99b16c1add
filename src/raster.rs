use crate::color::Rgba;
use crate::path::{Arc, Path, Point, Segment};
use crate::surface::{LineCap, PaintState, Surface};

// ============================================================================
// PIXEL CANVAS
// ============================================================================

/// Vertical samples per pixel row when filling.
const FILL_SUBSAMPLES: usize = 4;

/// Software surface over an RGBA8 frame.
///
/// Each stroke or fill first accumulates coverage into a mask, then blends
/// the mask once, so overlapping segments of one path never double-blend.
#[derive(Debug, Clone)]
pub struct PixelCanvas {
    frame: Vec<u8>,
    width: usize,
    height: usize,
    backdrop: Rgba,
    coverage: Vec<f32>,
    state: PaintState,
}

impl PixelCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        let (width, height) = (width as usize, height as usize);
        Self {
            frame: vec![0; width * height * 4],
            width,
            height,
            backdrop: Rgba::TRANSPARENT,
            coverage: vec![0.0; width * height],
            state: PaintState::default(),
        }
    }

    /// Color `clear` resets every pixel to.
    pub fn with_backdrop(mut self, backdrop: Rgba) -> Self {
        self.backdrop = backdrop;
        self
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width as usize;
        self.height = height as usize;
        self.frame = vec![0; self.width * self.height * 4];
        self.coverage = vec![0.0; self.width * self.height];
    }

    pub fn frame(&self) -> &[u8] {
        &self.frame
    }

    /// RGBA of the pixel at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y * self.width + x) * 4;
        let mut out = [0; 4];
        out.copy_from_slice(&self.frame[idx..idx + 4]);
        Some(out)
    }

    /// Copies the canvas into a larger RGBA8 `dest` frame with its top-left at `(x, y)`.
    pub fn blit_into(&self, dest: &mut [u8], dest_width: usize, x: usize, y: usize) {
        let dest_height = dest.len() / (dest_width * 4).max(1);
        for row in 0..self.height {
            let dy = y + row;
            if dy >= dest_height || x >= dest_width {
                break;
            }
            let columns = self.width.min(dest_width - x);
            let src = row * self.width * 4;
            let dst = (dy * dest_width + x) * 4;
            dest[dst..dst + columns * 4].copy_from_slice(&self.frame[src..src + columns * 4]);
        }
    }

    fn stroke_path(&mut self, path: &Path) {
        let half_width = self.state.line_width / 2.0;
        let cap = self.state.line_cap;
        let mut bounds = Bounds::empty();

        for segment in path.segments() {
            match *segment {
                Segment::Line { from, to } => {
                    let area = FloatBounds::around(from, to, half_width + 1.0).clip(self.width, self.height);
                    area.for_each(|x, y| {
                        let sample = Point::new(x as f64 + 0.5, y as f64 + 0.5);
                        let cov = line_coverage(sample, from, to, half_width, cap);
                        self.raise_coverage(x, y, cov);
                    });
                    bounds = bounds.union(area);
                }
                Segment::Arc(arc) => {
                    let reach = arc.radius.abs() + half_width + 1.0;
                    let area = FloatBounds::around(arc.center, arc.center, reach).clip(self.width, self.height);
                    area.for_each(|x, y| {
                        let sample = Point::new(x as f64 + 0.5, y as f64 + 0.5);
                        let cov = arc_coverage(sample, &arc, half_width);
                        self.raise_coverage(x, y, cov);
                    });
                    bounds = bounds.union(area);
                }
            }
        }

        self.blend_coverage(bounds, self.state.stroke_color);
    }

    fn fill_path(&mut self, path: &Path) {
        let edges: Vec<Edge> = path
            .flatten()
            .iter()
            .flat_map(|polygon| polygon_edges(polygon))
            .collect();
        if edges.is_empty() {
            return;
        }

        let (mut min_y, mut max_y) = (f64::MAX, f64::MIN);
        for edge in &edges {
            min_y = min_y.min(edge.top.y);
            max_y = max_y.max(edge.bottom.y);
        }
        let row_start = min_y.floor().max(0.0) as usize;
        let row_end = (max_y.ceil().max(0.0) as usize).min(self.height);

        let mut crossings: Vec<(f64, i32)> = Vec::new();
        let mut bounds = Bounds::empty();
        let weight = 1.0 / FILL_SUBSAMPLES as f32;

        for y in row_start..row_end {
            for sub in 0..FILL_SUBSAMPLES {
                let sample_y = y as f64 + (sub as f64 + 0.5) / FILL_SUBSAMPLES as f64;
                crossings.clear();
                crossings.extend(edges.iter().filter_map(|edge| edge.crossing(sample_y)));
                crossings.sort_by(|a, b| a.0.total_cmp(&b.0));

                // nonzero winding
                let mut winding = 0;
                let mut span_start = 0.0;
                for &(x, direction) in &crossings {
                    if winding == 0 {
                        span_start = x;
                    }
                    winding += direction;
                    if winding == 0 {
                        self.add_span(y, span_start, x, weight);
                    }
                }
            }
            bounds = bounds.union(Bounds {
                min_x: 0,
                min_y: y,
                max_x: self.width,
                max_y: y + 1,
            });
        }

        self.blend_coverage(bounds, self.state.fill_color);
    }

    fn raise_coverage(&mut self, x: usize, y: usize, coverage: f32) {
        if coverage > 0.0 {
            let cell = &mut self.coverage[y * self.width + x];
            *cell = cell.max(coverage);
        }
    }

    /// Adds horizontal coverage of `[x0, x1)` on row `y`, splitting partial pixels.
    fn add_span(&mut self, y: usize, x0: f64, x1: f64, weight: f32) {
        let x0 = x0.clamp(0.0, self.width as f64);
        let x1 = x1.clamp(0.0, self.width as f64);
        if x1 <= x0 {
            return;
        }
        let row = &mut self.coverage[y * self.width..(y + 1) * self.width];
        let first = x0.floor() as usize;
        let last = x1.floor() as usize;
        if first == last {
            row[first] += ((x1 - x0) as f32) * weight;
            return;
        }
        row[first] += ((first as f64 + 1.0 - x0) as f32) * weight;
        for cell in &mut row[first + 1..last] {
            *cell += weight;
        }
        if last < row.len() {
            row[last] += ((x1 - last as f64) as f32) * weight;
        }
    }

    fn blend_coverage(&mut self, bounds: Bounds, color: Rgba) {
        bounds.for_each(|x, y| {
            let cell = y * self.width + x;
            let coverage = self.coverage[cell].min(1.0);
            self.coverage[cell] = 0.0;
            if coverage > 0.001 {
                set_pixel(&mut self.frame, self.width, x, y, color, coverage);
            }
        });
    }
}

impl Surface for PixelCanvas {
    fn width(&self) -> u32 {
        self.width as u32
    }

    fn height(&self) -> u32 {
        self.height as u32
    }

    fn clear(&mut self) {
        let (r, g, b) = self.backdrop.color.as_tuple();
        let a = (self.backdrop.alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
        for chunk in self.frame.chunks_exact_mut(4) {
            chunk.copy_from_slice(&[r, g, b, a]);
        }
    }

    fn begin_path(&mut self) {
        self.state.path = Path::new();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.state.path.move_to(Point::new(x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.state.path.line_to(Point::new(x, y));
    }

    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start_angle: f64, end_angle: f64) {
        self.state.arc(cx, cy, radius, start_angle, end_angle);
    }

    fn set_stroke_color(&mut self, color: Rgba) {
        self.state.stroke_color = color;
    }

    fn set_fill_color(&mut self, color: Rgba) {
        self.state.fill_color = color;
    }

    fn set_line_width(&mut self, width: f64) {
        self.state.line_width = width;
    }

    fn set_line_cap(&mut self, cap: LineCap) {
        self.state.line_cap = cap;
    }

    fn stroke(&mut self) {
        let path = std::mem::take(&mut self.state.path);
        self.stroke_path(&path);
        self.state.path = path;
    }

    fn fill(&mut self) {
        let path = std::mem::take(&mut self.state.path);
        self.fill_path(&path);
        self.state.path = path;
    }
}

// ============================================================================
// COVERAGE HELPERS
// ============================================================================

#[derive(Debug, Clone, Copy)]
struct Bounds {
    min_x: usize,
    min_y: usize,
    max_x: usize,
    max_y: usize,
}

impl Bounds {
    const fn empty() -> Self {
        Self {
            min_x: usize::MAX,
            min_y: usize::MAX,
            max_x: 0,
            max_y: 0,
        }
    }

    fn union(self, other: Bounds) -> Bounds {
        Bounds {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    fn for_each(&self, mut f: impl FnMut(usize, usize)) {
        for y in self.min_y..self.max_y {
            for x in self.min_x..self.max_x {
                f(x, y);
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct FloatBounds {
    min: Point,
    max: Point,
}

impl FloatBounds {
    fn around(a: Point, b: Point, pad: f64) -> Self {
        Self {
            min: Point::new(a.x.min(b.x) - pad, a.y.min(b.y) - pad),
            max: Point::new(a.x.max(b.x) + pad, a.y.max(b.y) + pad),
        }
    }

    fn clip(self, width: usize, height: usize) -> Bounds {
        let lo = |v: f64, limit: usize| (v.floor().max(0.0) as usize).min(limit);
        let hi = |v: f64, limit: usize| (v.ceil().max(0.0) as usize).min(limit);
        Bounds {
            min_x: lo(self.min.x, width),
            min_y: lo(self.min.y, height),
            max_x: hi(self.max.x, width),
            max_y: hi(self.max.y, height),
        }
    }
}

fn line_coverage(sample: Point, from: Point, to: Point, half_width: f64, cap: LineCap) -> f32 {
    let (dx, dy) = (to.x - from.x, to.y - from.y);
    let len = dx.hypot(dy);
    if len <= f64::EPSILON {
        return match cap {
            LineCap::Round => edge_alpha(half_width - sample.distance(from)),
            LineCap::Butt => 0.0,
        };
    }

    // position along the segment and distance across it
    let along = ((sample.x - from.x) * dx + (sample.y - from.y) * dy) / len;
    let across = ((sample.x - from.x) * dy - (sample.y - from.y) * dx).abs() / len;

    match cap {
        LineCap::Round => {
            let t = along.clamp(0.0, len) / len;
            let nearest = Point::new(from.x + t * dx, from.y + t * dy);
            edge_alpha(half_width - sample.distance(nearest))
        }
        LineCap::Butt => {
            edge_alpha(half_width - across) * edge_alpha(along.min(len - along))
        }
    }
}

fn arc_coverage(sample: Point, arc: &Arc, half_width: f64) -> f32 {
    let angle = (sample.y - arc.center.y).atan2(sample.x - arc.center.x);
    let distance = if arc.contains_angle(angle) {
        (sample.distance(arc.center) - arc.radius).abs()
    } else {
        sample.distance(arc.start()).min(sample.distance(arc.end()))
    };
    edge_alpha(half_width - distance)
}

/// One pixel of anti-aliasing around a signed distance from an edge.
fn edge_alpha(inside: f64) -> f32 {
    (inside + 0.5).clamp(0.0, 1.0) as f32
}

/// Non-horizontal polygon edge, oriented top to bottom.
#[derive(Debug, Clone, Copy)]
struct Edge {
    top: Point,
    bottom: Point,
    direction: i32,
}

impl Edge {
    fn crossing(&self, y: f64) -> Option<(f64, i32)> {
        if y < self.top.y || y >= self.bottom.y {
            return None;
        }
        let t = (y - self.top.y) / (self.bottom.y - self.top.y);
        Some((self.top.x + t * (self.bottom.x - self.top.x), self.direction))
    }
}

fn polygon_edges(polygon: &[Point]) -> Vec<Edge> {
    let closing = polygon.last().zip(polygon.first());
    polygon
        .windows(2)
        .map(|pair| (pair[0], pair[1]))
        .chain(closing.map(|(last, first)| (*last, *first)))
        .filter(|(a, b)| (a.y - b.y).abs() > f64::EPSILON)
        .map(|(a, b)| {
            if a.y < b.y {
                Edge { top: a, bottom: b, direction: 1 }
            } else {
                Edge { top: b, bottom: a, direction: -1 }
            }
        })
        .collect()
}

// ============================================================================
// DRAWING PRIMITIVES
// ============================================================================

/// Source-over blend of `color` at `coverage` onto one pixel.
fn set_pixel(frame: &mut [u8], width: usize, x: usize, y: usize, color: Rgba, coverage: f32) {
    if x >= width || y >= frame.len() / (width * 4) {
        return;
    }
    let idx = (y * width + x) * 4;
    let src_a = (color.alpha.clamp(0.0, 1.0) as f32) * coverage;
    let dst_a = frame[idx + 3] as f32 / 255.0;
    let out_a = src_a + dst_a * (1.0 - src_a);
    if out_a <= 0.0 {
        return;
    }

    let (r, g, b) = color.color.as_tuple();
    let blend = |src: u8, dst: u8| {
        ((src as f32 * src_a + dst as f32 * dst_a * (1.0 - src_a)) / out_a).round() as u8
    };
    let out = [
        blend(r, frame[idx]),
        blend(g, frame[idx + 1]),
        blend(b, frame[idx + 2]),
        (out_a * 255.0).round() as u8,
    ];
    frame[idx..idx + 4].copy_from_slice(&out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use std::f64::consts::TAU;

    fn white_canvas(size: u32) -> PixelCanvas {
        let mut canvas = PixelCanvas::new(size, size).with_backdrop(Color::WHITE.opaque());
        canvas.clear();
        canvas
    }

    #[test]
    fn clear_defaults_to_transparent() {
        let mut canvas = PixelCanvas::new(4, 4);
        canvas.clear();
        assert_eq!(canvas.pixel(2, 2), Some([0, 0, 0, 0]));
        assert_eq!(canvas.pixel(4, 0), None);
    }

    #[test]
    fn filled_disc_covers_center_not_corners() {
        let mut canvas = white_canvas(40);
        canvas.set_fill_color(Color::new(0xff, 0, 0).opaque());
        canvas.begin_path();
        canvas.arc(20.0, 20.0, 10.0, 0.0, TAU);
        canvas.fill();

        assert_eq!(canvas.pixel(20, 20), Some([0xff, 0, 0, 0xff]));
        assert_eq!(canvas.pixel(1, 1), Some([0xff, 0xff, 0xff, 0xff]));
        assert_eq!(canvas.pixel(20, 35), Some([0xff, 0xff, 0xff, 0xff]));
    }

    #[test]
    fn stroked_ring_leaves_the_inside_untouched() {
        let mut canvas = white_canvas(60);
        canvas.set_stroke_color(Color::BLACK.opaque());
        canvas.set_line_width(4.0);
        canvas.begin_path();
        canvas.arc(30.0, 30.0, 20.0, 0.0, TAU);
        canvas.stroke();

        assert_eq!(canvas.pixel(30, 30), Some([0xff, 0xff, 0xff, 0xff]));
        // (50, 30) sits on the ring
        assert_eq!(canvas.pixel(49, 29), Some([0, 0, 0, 0xff]));
    }

    #[test]
    fn round_caps_extend_past_the_endpoint() {
        let mut canvas = white_canvas(40);
        canvas.set_stroke_color(Color::BLACK.opaque());
        canvas.set_line_width(6.0);
        canvas.begin_path();
        canvas.move_to(10.0, 20.0);
        canvas.line_to(30.0, 20.0);

        canvas.set_line_cap(LineCap::Butt);
        canvas.stroke();
        assert_eq!(canvas.pixel(31, 19), Some([0xff, 0xff, 0xff, 0xff]));

        canvas.set_line_cap(LineCap::Round);
        canvas.stroke();
        assert_eq!(canvas.pixel(31, 19), Some([0, 0, 0, 0xff]));
    }

    #[test]
    fn translucent_fill_blends_with_backdrop() {
        let mut canvas = white_canvas(20);
        canvas.set_fill_color(Color::BLACK.with_alpha(0.5));
        canvas.begin_path();
        canvas.arc(10.0, 10.0, 8.0, 0.0, TAU);
        canvas.fill();

        let [r, g, b, a] = canvas.pixel(10, 10).unwrap();
        assert_eq!(a, 0xff);
        assert!((126..=129).contains(&r), "r = {r}");
        assert_eq!((r, g), (g, b));
    }

    #[test]
    fn overlapping_segments_blend_once() {
        let mut canvas = white_canvas(20);
        canvas.set_stroke_color(Color::BLACK.with_alpha(0.5));
        canvas.set_line_width(4.0);
        canvas.begin_path();
        canvas.move_to(2.0, 10.0);
        canvas.line_to(18.0, 10.0);
        canvas.move_to(10.0, 2.0);
        canvas.line_to(10.0, 18.0);
        canvas.stroke();

        let [r, ..] = canvas.pixel(10, 10).unwrap();
        assert!((126..=129).contains(&r), "r = {r}");
    }

    #[test]
    fn blit_places_canvas_at_offset() {
        let mut canvas = PixelCanvas::new(2, 2).with_backdrop(Color::new(1, 2, 3).opaque());
        canvas.clear();
        let mut dest = vec![0u8; 4 * 4 * 4];
        canvas.blit_into(&mut dest, 4, 1, 1);

        assert_eq!(&dest[0..4], &[0, 0, 0, 0]);
        let idx = (4 + 1) * 4;
        assert_eq!(&dest[idx..idx + 4], &[1, 2, 3, 0xff]);
        let idx = (2 * 4 + 2) * 4;
        assert_eq!(&dest[idx..idx + 4], &[1, 2, 3, 0xff]);
        let idx = (3 * 4 + 3) * 4;
        assert_eq!(&dest[idx..idx + 4], &[0, 0, 0, 0]);
    }
}
