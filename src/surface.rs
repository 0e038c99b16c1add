use crate::color::Rgba;
use crate::path::{Arc, Path, Point};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
}

/// Immediate-mode 2D drawing context a clock renders onto.
///
/// Mirrors a canvas context: one current path, and stroke/fill state that
/// persists until changed.
pub trait Surface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Wipes the whole surface.
    fn clear(&mut self);

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    /// Clockwise arc around `(cx, cy)`, angles in radians.
    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start_angle: f64, end_angle: f64);

    fn set_stroke_color(&mut self, color: Rgba);
    fn set_fill_color(&mut self, color: Rgba);
    fn set_line_width(&mut self, width: f64);
    fn set_line_cap(&mut self, cap: LineCap);

    fn stroke(&mut self);
    fn fill(&mut self);

    fn center(&self) -> Point {
        Point::new(f64::from(self.width()) / 2.0, f64::from(self.height()) / 2.0)
    }
}

/// Stroke and fill state shared by surface implementations.
#[derive(Debug, Clone, PartialEq)]
pub struct PaintState {
    pub stroke_color: Rgba,
    pub fill_color: Rgba,
    pub line_width: f64,
    pub line_cap: LineCap,
    pub path: Path,
}

impl Default for PaintState {
    fn default() -> Self {
        Self {
            stroke_color: crate::color::Color::BLACK.opaque(),
            fill_color: crate::color::Color::BLACK.opaque(),
            line_width: 1.0,
            line_cap: LineCap::Butt,
            path: Path::new(),
        }
    }
}

impl PaintState {
    pub fn arc(&mut self, cx: f64, cy: f64, radius: f64, start_angle: f64, end_angle: f64) {
        self.path.arc(Arc {
            center: Point::new(cx, cy),
            radius,
            start_angle,
            end_angle,
        });
    }
}

// ============================================================================
// RETAINED MODE RECORDING
// ============================================================================

/// A shape painted onto a [`Scene`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    Stroke {
        path: Path,
        color: Rgba,
        width: f64,
        cap: LineCap,
    },
    Fill {
        path: Path,
        color: Rgba,
    },
}

/// Surface that records every paint operation instead of rasterizing it.
#[derive(Debug, Clone)]
pub struct Scene {
    width: u32,
    height: u32,
    state: PaintState,
    commands: Vec<DrawCommand>,
}

impl Scene {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            state: PaintState::default(),
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn strokes(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|command| matches!(command, DrawCommand::Stroke { .. }))
    }

    pub fn fills(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|command| matches!(command, DrawCommand::Fill { .. }))
    }

    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl Surface for Scene {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
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
        self.commands.push(DrawCommand::Stroke {
            path: self.state.path.clone(),
            color: self.state.stroke_color,
            width: self.state.line_width,
            cap: self.state.line_cap,
        });
    }

    fn fill(&mut self) {
        self.commands.push(DrawCommand::Fill {
            path: self.state.path.clone(),
            color: self.state.fill_color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    #[test]
    fn state_persists_between_paths() {
        let mut scene = Scene::new(100, 100);
        scene.set_line_width(4.0);
        scene.set_stroke_color(Color::WHITE.opaque());
        scene.begin_path();
        scene.move_to(0.0, 0.0);
        scene.line_to(10.0, 0.0);
        scene.stroke();
        scene.begin_path();
        scene.move_to(0.0, 5.0);
        scene.line_to(10.0, 5.0);
        scene.stroke();

        let widths: Vec<f64> = scene
            .strokes()
            .map(|command| match command {
                DrawCommand::Stroke { width, .. } => *width,
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(widths, vec![4.0, 4.0]);
    }

    #[test]
    fn stroke_then_fill_reuses_the_path() {
        let mut scene = Scene::new(100, 100);
        scene.begin_path();
        scene.arc(50.0, 50.0, 10.0, 0.0, std::f64::consts::TAU);
        scene.stroke();
        scene.fill();

        match scene.commands() {
            [DrawCommand::Stroke { path: stroked, .. }, DrawCommand::Fill { path: filled, .. }] => {
                assert_eq!(stroked, filled)
            }
            other => panic!("unexpected commands {other:?}"),
        }
        assert_eq!(scene.center(), Point::new(50.0, 50.0));
    }
}
