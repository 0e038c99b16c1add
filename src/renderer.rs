use std::f64::consts::{PI, TAU};

use rand::Rng;

use crate::color::Color;
use crate::config::{ClockConfig, Hand};
use crate::geometry::DrawingParameters;
use crate::path::Point;
use crate::surface::{LineCap, Surface};
use crate::time::RenderTime;

// ============================================================================
// DIAL GEOMETRY
// ============================================================================

const DIAL_RADIUS: f64 = 120.0;
const DIAL_RING_RADIUS: f64 = DIAL_RADIUS + 3.0;
const DIAL_RING_WIDTH: f64 = 8.0;
const TRAIL_RADIUS: f64 = DIAL_RADIUS + 8.0;

const TICK_COUNT: u32 = 60;
const HOUR_TICK_LENGTH: f64 = 15.0;
const HOUR_TICK_WIDTH: f64 = 4.0;
const MINUTE_TICK_LENGTH: f64 = 5.0;
const MINUTE_TICK_WIDTH: f64 = 2.0;

/// Degrees the millisecond hand moves per millisecond.
const TRAIL_ANGLE_STEP: f64 = 360.0 / 1000.0;

const CENTER_DOT_OUTLINE: Color = Color::new(0x33, 0x33, 0x33);
const CENTER_DOT_OUTLINE_WIDTH: f64 = 2.0;

// Day/night indicator
const INDICATOR_BOTTOM_OFFSET: f64 = 30.0;
const INDICATOR_COLOR: Color = Color::YELLOW;
const INDICATOR_LINE_WIDTH: f64 = 2.0;
const MOON_RADIUS: f64 = 24.0;
const MOON_CUT_RADIUS: f64 = 23.0;
const MOON_CUT_OFFSET: (f64, f64) = (6.0, -4.0);
/// Page color behind the clocks, used to carve the crescent.
pub const PAGE_BACKGROUND: Color = Color::new(0xb8, 0xb8, 0xb8);
const SUN_RADIUS: f64 = 10.0;
const SUN_RAY_COUNT: u32 = 12;
const SUN_RAY_LENGTH: f64 = 15.0;

// ============================================================================
// HANDS
// ============================================================================

impl Hand {
    /// Length from the center in reference pixels.
    pub const fn length(self) -> f64 {
        match self {
            Hand::Millisecond => 100.0,
            Hand::Second => 90.0,
            Hand::Minute => 70.0,
            Hand::Hour => 50.0,
        }
    }

    /// Value, full-turn value and extra offset in degrees for this hand at `time`.
    pub fn reading(self, time: &RenderTime) -> HandReading {
        match self {
            Hand::Millisecond => HandReading::new(time.milliseconds as f64, 1000.0, 0.0),
            Hand::Second => HandReading::new(time.seconds as f64, 60.0, 0.0),
            Hand::Minute => HandReading::new(time.minutes as f64, 60.0, 0.0),
            // half a degree per minute so the hour hand sweeps between marks
            Hand::Hour => HandReading::new(time.hours12() as f64, 12.0, time.minutes as f64 / 2.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandReading {
    pub value: f64,
    pub max: f64,
    pub offset_degrees: f64,
}

impl HandReading {
    pub const fn new(value: f64, max: f64, offset_degrees: f64) -> Self {
        Self {
            value,
            max,
            offset_degrees,
        }
    }

    /// Angle in degrees with 0 pointing at 12 o'clock, i.e. -90 on the x axis.
    pub fn angle_degrees(&self) -> f64 {
        (self.value / self.max) * 360.0 - 90.0 + self.offset_degrees
    }
}

// ============================================================================
// TICK COLORING
// ============================================================================

/// Which color a dial tick takes for the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickHighlight {
    /// Current hour mark and current minute coincide; color is random.
    Coincidence,
    Hour,
    Minute,
    Plain,
}

/// Color policy for tick `index`, with `passed_hours` hour marks drawn before it.
pub fn tick_highlight(index: u32, passed_hours: u32, time: &RenderTime) -> TickHighlight {
    let is_hour_mark = index % 5 == 0;
    let is_current_hour = is_hour_mark && passed_hours == time.hours12();
    let is_current_minute = index == time.minutes;

    match (is_current_hour, is_current_minute) {
        (true, true) => TickHighlight::Coincidence,
        (true, false) => TickHighlight::Hour,
        (false, true) => TickHighlight::Minute,
        (false, false) => TickHighlight::Plain,
    }
}

/// Supplies the random tick color used when the hour and minute marks coincide.
pub trait TickColorSource {
    fn next_color(&mut self) -> Color;
}

impl<R: Rng> TickColorSource for R {
    fn next_color(&mut self) -> Color {
        Color::from_u32(self.random_range(0..0xff_ffff))
    }
}

// ============================================================================
// TRAIL
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailDot {
    pub angle_degrees: f64,
    pub opacity: f64,
    pub radius: f64,
}

/// Dots trailing the millisecond hand, brightest and largest first.
pub fn trail_dots(milliseconds: u32, trail_length: u32, trail_size: f64) -> impl Iterator<Item = TrailDot> {
    let base_angle = ((milliseconds as f64 / 1000.0) * 360.0 - 90.0) % 360.0;
    (0..trail_length).map(move |i| {
        let opacity = 1.0 - i as f64 / trail_length as f64;
        TrailDot {
            // each dot lags two milliseconds of travel behind the previous one
            angle_degrees: base_angle - i as f64 * TRAIL_ANGLE_STEP * 2.0,
            opacity,
            radius: trail_size * opacity,
        }
    })
}

// ============================================================================
// DAY / NIGHT
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayPeriod {
    /// Drawn as a sun
    Am,
    /// Drawn as a crescent moon
    Pm,
}

impl DayPeriod {
    pub const fn of(time: &RenderTime) -> Self {
        if time.is_pm() {
            DayPeriod::Pm
        } else {
            DayPeriod::Am
        }
    }
}

// ============================================================================
// RENDERER
// ============================================================================

/// Draws one clock face per call to [`ClockRenderer::render_frame`].
///
/// Nothing but the configuration, the resize-derived parameters and the
/// random tick-color source is kept between frames.
#[derive(Debug, Clone)]
pub struct ClockRenderer<C> {
    config: ClockConfig,
    params: DrawingParameters,
    colors: C,
}

impl<C: TickColorSource> ClockRenderer<C> {
    /// Renderer sized for the reference width until the first resize.
    pub fn new(config: ClockConfig, colors: C) -> Self {
        let params = DrawingParameters::for_width(&config, crate::geometry::REFERENCE_WIDTH);
        Self {
            config,
            params,
            colors,
        }
    }

    pub fn config(&self) -> &ClockConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut ClockConfig {
        &mut self.config
    }

    pub fn parameters(&self) -> &DrawingParameters {
        &self.params
    }

    pub fn colors_mut(&mut self) -> &mut C {
        &mut self.colors
    }

    /// Rescales hand widths and the center dot for a new surface width.
    pub fn update_drawing_parameters(&mut self, surface_width: f64) {
        self.params = DrawingParameters::for_width(&self.config, surface_width);
    }

    /// Paints a full frame. Passes run in a fixed order so later ones cover earlier ones.
    pub fn render_frame<S: Surface + ?Sized>(&mut self, surface: &mut S, time: &RenderTime) {
        surface.clear();
        self.draw_dial(surface, time);
        self.draw_dial_trail(surface, time.milliseconds);
        self.draw_hands(surface, time);
        self.draw_center_dot(surface);
        self.draw_am_pm_indicator(surface, time);
    }

    pub fn draw_dial<S: Surface + ?Sized>(&mut self, surface: &mut S, time: &RenderTime) {
        let center = surface.center();

        surface.begin_path();
        surface.arc(center.x, center.y, DIAL_RING_RADIUS, 0.0, TAU);
        surface.set_line_width(DIAL_RING_WIDTH);
        surface.set_stroke_color(self.config.dial_color.opaque());
        surface.stroke();
        surface.set_fill_color(self.config.dial_background.opaque());
        surface.fill();

        let mut passed_hours = 0;
        for i in 0..TICK_COUNT {
            let is_hour_mark = i % 5 == 0;
            let (length, width) = if is_hour_mark {
                (HOUR_TICK_LENGTH, HOUR_TICK_WIDTH)
            } else {
                (MINUTE_TICK_LENGTH, MINUTE_TICK_WIDTH)
            };

            let color = match tick_highlight(i, passed_hours, time) {
                TickHighlight::Coincidence => self.colors.next_color(),
                TickHighlight::Hour => self.config.hand_colors.hour,
                TickHighlight::Minute => self.config.hand_colors.minute,
                TickHighlight::Plain => self.config.dial_color,
            };
            if is_hour_mark {
                passed_hours += 1;
            }

            let angle = (f64::from(i * 6) - 90.0).to_radians();
            let start = center.polar(DIAL_RADIUS - length, angle);
            let end = center.polar(DIAL_RADIUS, angle);

            surface.begin_path();
            surface.set_line_width(width);
            surface.set_line_cap(LineCap::Round);
            surface.set_stroke_color(color.opaque());
            surface.move_to(start.x, start.y);
            surface.line_to(end.x, end.y);
            surface.stroke();
        }
    }

    pub fn draw_dial_trail<S: Surface + ?Sized>(&self, surface: &mut S, milliseconds: u32) {
        let center = surface.center();
        for dot in trail_dots(milliseconds, self.config.trail_length, self.config.trail_size) {
            let position = center.polar(TRAIL_RADIUS, dot.angle_degrees.to_radians());
            surface.begin_path();
            surface.arc(position.x, position.y, dot.radius, 0.0, TAU);
            surface.set_fill_color(self.config.trail_color.with_alpha(dot.opacity));
            surface.fill();
        }
    }

    pub fn draw_hands<S: Surface + ?Sized>(&self, surface: &mut S, time: &RenderTime) {
        for hand in Hand::DRAW_ORDER {
            self.draw_hand(
                surface,
                hand.length(),
                *self.params.hand_widths.get(hand),
                hand.reading(time),
                *self.config.hand_colors.get(hand),
            );
        }
    }

    pub fn draw_hand<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        length: f64,
        width: f64,
        reading: HandReading,
        color: Color,
    ) {
        let center = surface.center();
        let tip = center.polar(length, reading.angle_degrees().to_radians());

        surface.begin_path();
        surface.set_line_width(width);
        surface.set_line_cap(LineCap::Round);
        surface.move_to(center.x, center.y);
        surface.line_to(tip.x, tip.y);
        surface.set_stroke_color(color.opaque());
        surface.stroke();
    }

    pub fn draw_center_dot<S: Surface + ?Sized>(&self, surface: &mut S) {
        let center = surface.center();
        surface.begin_path();
        surface.arc(center.x, center.y, self.params.center_dot_size, 0.0, TAU);
        surface.set_fill_color(self.config.dial_color.opaque());
        surface.fill();
        surface.set_line_width(CENTER_DOT_OUTLINE_WIDTH);
        surface.set_stroke_color(CENTER_DOT_OUTLINE.opaque());
        surface.stroke();
    }

    pub fn draw_am_pm_indicator<S: Surface + ?Sized>(&self, surface: &mut S, time: &RenderTime) {
        let anchor = Point::new(
            f64::from(surface.width()) / 2.0,
            f64::from(surface.height()) - INDICATOR_BOTTOM_OFFSET,
        );

        surface.set_line_width(INDICATOR_LINE_WIDTH);
        surface.set_stroke_color(INDICATOR_COLOR.opaque());

        match DayPeriod::of(time) {
            DayPeriod::Pm => {
                surface.begin_path();
                surface.set_fill_color(INDICATOR_COLOR.opaque());
                surface.arc(anchor.x, anchor.y, MOON_RADIUS, 0.0, TAU);
                surface.fill();

                // a second disc in the page color leaves a crescent
                surface.begin_path();
                surface.set_fill_color(PAGE_BACKGROUND.opaque());
                surface.arc(
                    anchor.x + MOON_CUT_OFFSET.0,
                    anchor.y + MOON_CUT_OFFSET.1,
                    MOON_CUT_RADIUS,
                    0.0,
                    TAU,
                );
                surface.fill();
            }
            DayPeriod::Am => {
                surface.begin_path();
                surface.arc(anchor.x, anchor.y, SUN_RADIUS, 0.0, TAU);
                for i in 0..SUN_RAY_COUNT {
                    let angle = PI / 6.0 * f64::from(i);
                    let start = anchor.polar(SUN_RADIUS, angle);
                    let end = anchor.polar(SUN_RADIUS + SUN_RAY_LENGTH, angle);
                    surface.move_to(start.x, start.y);
                    surface.line_to(end.x, end.y);
                }
                surface.stroke();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::{Arc, Segment};
    use crate::surface::{DrawCommand, Scene};

    /// Counts how often a random color was requested.
    #[derive(Debug, Default)]
    struct CountingColors(u32);

    impl TickColorSource for CountingColors {
        fn next_color(&mut self) -> Color {
            self.0 += 1;
            Color::new(0x12, 0x34, 0x56)
        }
    }

    fn renderer() -> ClockRenderer<CountingColors> {
        ClockRenderer::new(ClockConfig::defaults(), CountingColors::default())
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn hour_hand_sweeps_between_marks() {
        let time = RenderTime::new(3, 30, 0, 0);
        let reading = Hand::Hour.reading(&time);
        assert_eq!(reading.offset_degrees, 15.0);

        let at_three = HandReading::new(3.0, 12.0, 0.0).angle_degrees();
        let at_four = HandReading::new(4.0, 12.0, 0.0).angle_degrees();
        let angle = reading.angle_degrees();
        assert!(at_three < angle && angle < at_four);
        assert!(close(angle, 15.0));
    }

    #[test]
    fn every_hand_points_up_at_noon() {
        let noon = RenderTime::new(12, 0, 0, 0);
        for hand in Hand::DRAW_ORDER {
            assert!(close(hand.reading(&noon).angle_degrees(), -90.0), "{hand:?}");
        }
    }

    #[test]
    fn tick_policy_marks_hour_and_minute() {
        let time = RenderTime::new(14, 37, 0, 0);
        // tick 10 is the third hour mark, two marks passed before it
        assert_eq!(tick_highlight(10, 2, &time), TickHighlight::Hour);
        assert_eq!(tick_highlight(37, 8, &time), TickHighlight::Minute);
        assert_eq!(tick_highlight(15, 3, &time), TickHighlight::Plain);
        assert_eq!(tick_highlight(11, 3, &time), TickHighlight::Plain);
    }

    #[test]
    fn coincidence_when_minute_lands_on_current_hour_mark() {
        let time = RenderTime::new(3, 15, 0, 0);
        assert_eq!(tick_highlight(15, 3, &time), TickHighlight::Coincidence);

        let mut renderer = renderer();
        let mut scene = Scene::new(400, 400);
        renderer.draw_dial(&mut scene, &time);
        assert_eq!(renderer.colors_mut().0, 1);

        let mut scene = Scene::new(400, 400);
        renderer.draw_dial(&mut scene, &RenderTime::new(3, 16, 0, 0));
        assert_eq!(renderer.colors_mut().0, 1);
    }

    #[test]
    fn dial_draws_ring_then_sixty_ticks() {
        let mut renderer = renderer();
        let mut scene = Scene::new(400, 400);
        renderer.draw_dial(&mut scene, &RenderTime::new(9, 41, 0, 0));

        let commands = scene.commands();
        assert!(matches!(commands[0], DrawCommand::Stroke { width, .. } if width == DIAL_RING_WIDTH));
        assert!(matches!(&commands[1], DrawCommand::Fill { color, .. } if color.color == Color::new(0xf0, 0xf0, 0xf0)));
        let ticks: Vec<_> = commands[2..].iter().collect();
        assert_eq!(ticks.len(), 60);

        let hour_color = ClockConfig::defaults().hand_colors.hour;
        let minute_color = ClockConfig::defaults().hand_colors.minute;
        match (ticks[45], ticks[41], ticks[5]) {
            (
                DrawCommand::Stroke { color: hour, width: hour_width, .. },
                DrawCommand::Stroke { color: minute, width: minute_width, .. },
                DrawCommand::Stroke { color: plain, .. },
            ) => {
                assert_eq!(hour.color, hour_color);
                assert_eq!(*hour_width, HOUR_TICK_WIDTH);
                assert_eq!(minute.color, minute_color);
                assert_eq!(*minute_width, MINUTE_TICK_WIDTH);
                assert_eq!(plain.color, ClockConfig::defaults().dial_color);
            }
            other => panic!("unexpected ticks {other:?}"),
        }
    }

    /// Endpoints, width and cap of a single-line stroke.
    fn stroked_line(command: &DrawCommand) -> (Point, Point, f64, LineCap) {
        match command {
            DrawCommand::Stroke { path, width, cap, .. } => match path.segments().collect::<Vec<_>>()[..] {
                [Segment::Line { from, to }] => (*from, *to, *width, *cap),
                ref other => panic!("expected one line, got {other:?}"),
            },
            other => panic!("expected a stroke, got {other:?}"),
        }
    }

    fn near(a: Point, b: Point) -> bool {
        a.distance(b) < 1e-9
    }

    #[test]
    fn dial_ring_and_ticks_sit_on_reference_radii() {
        let mut renderer = renderer();
        let mut scene = Scene::new(400, 400);
        renderer.draw_dial(&mut scene, &RenderTime::new(9, 41, 0, 0));
        let center = Point::new(200.0, 200.0);
        let commands = scene.commands();

        for command in &commands[..2] {
            let path = match command {
                DrawCommand::Stroke { path, .. } | DrawCommand::Fill { path, .. } => path,
                DrawCommand::Clear => panic!("dial does not clear"),
            };
            let ring = path.arcs().next().unwrap();
            assert_eq!(ring.center, center);
            assert_eq!(ring.radius, 123.0);
            assert!(ring.is_full_circle());
        }

        let (from, to, width, cap) = stroked_line(&commands[2]);
        assert!(near(from, Point::new(200.0, 95.0)), "{from:?}");
        assert!(near(to, Point::new(200.0, 80.0)), "{to:?}");
        assert_eq!(width, 4.0);
        assert_eq!(cap, LineCap::Round);

        for (i, command) in commands[2..].iter().enumerate() {
            let (from, to, _, cap) = stroked_line(command);
            let length = if i % 5 == 0 { 15.0 } else { 5.0 };
            assert!(close(to.distance(center), 120.0), "tick {i}");
            assert!(close(from.distance(center), 120.0 - length), "tick {i}");
            assert_eq!(cap, LineCap::Round, "tick {i}");
        }
    }

    #[test]
    fn trail_rides_just_outside_the_dial() {
        let renderer = renderer();
        let mut scene = Scene::new(400, 400);
        renderer.draw_dial_trail(&mut scene, 250);
        let center = Point::new(200.0, 200.0);

        let dots: Vec<Arc> = scene
            .fills()
            .map(|command| match command {
                DrawCommand::Fill { path, .. } => *path.arcs().next().unwrap(),
                _ => unreachable!(),
            })
            .collect();
        assert!(near(dots[0].center, Point::new(328.0, 200.0)), "{:?}", dots[0].center);
        assert_eq!(dots[0].radius, 3.0);
        assert!(dots.iter().all(|dot| close(dot.center.distance(center), 128.0)));
    }

    #[test]
    fn hands_run_from_center_with_round_caps() {
        let renderer = renderer();
        let mut scene = Scene::new(400, 400);
        renderer.draw_hands(&mut scene, &RenderTime::new(3, 0, 15, 0));
        let center = Point::new(200.0, 200.0);

        let strokes: Vec<_> = scene.strokes().collect();
        assert_eq!(strokes.len(), 4);
        for (command, hand) in strokes.into_iter().zip(Hand::DRAW_ORDER) {
            let (from, to, width, cap) = stroked_line(command);
            assert_eq!(from, center);
            assert!(close(to.distance(center), hand.length()), "{hand:?}");
            assert_eq!(width, *ClockConfig::defaults().hand_widths.get(hand));
            assert_eq!(cap, LineCap::Round, "{hand:?}");
        }
    }

    #[test]
    fn sun_rays_and_moon_cut_keep_their_offsets() {
        let renderer = renderer();
        let anchor = Point::new(200.0, 370.0);

        let mut sun = Scene::new(400, 400);
        renderer.draw_am_pm_indicator(&mut sun, &RenderTime::new(8, 0, 0, 0));
        let DrawCommand::Stroke { path, width, .. } = &sun.commands()[0] else {
            panic!("sun is stroked");
        };
        assert_eq!(*width, 2.0);
        let disc = path.arcs().next().unwrap();
        assert_eq!(disc.center, anchor);
        assert_eq!(disc.radius, 10.0);
        let rays: Vec<_> = path
            .segments()
            .filter_map(|segment| match segment {
                Segment::Line { from, to } => Some((*from, *to)),
                Segment::Arc(_) => None,
            })
            .collect();
        assert_eq!(rays.len(), 12);
        for (from, to) in rays {
            assert!(close(from.distance(anchor), 10.0));
            assert!(close(to.distance(anchor), 25.0));
        }

        let mut moon = Scene::new(400, 400);
        renderer.draw_am_pm_indicator(&mut moon, &RenderTime::new(20, 0, 0, 0));
        let DrawCommand::Fill { path, .. } = &moon.commands()[1] else {
            panic!("moon cut is filled");
        };
        assert_eq!(path.arcs().next().unwrap().center, Point::new(206.0, 366.0));
    }

    #[test]
    fn trail_fades_to_one_step_above_zero() {
        let dots: Vec<_> = trail_dots(250, 180, 3.0).collect();
        assert_eq!(dots.len(), 180);
        assert_eq!(dots[0].opacity, 1.0);
        assert_eq!(dots[0].radius, 3.0);
        assert!(close(dots[0].angle_degrees, 0.0));
        assert!(close(dots[1].angle_degrees, -0.72));
        assert!(close(dots[179].opacity, 1.0 / 180.0));
        assert!(dots[179].opacity > 0.0);
    }

    #[test]
    fn empty_trail_draws_nothing() {
        let mut config = ClockConfig::defaults();
        config.trail_length = 0;
        let renderer = ClockRenderer::new(config, CountingColors::default());
        let mut scene = Scene::new(400, 400);
        renderer.draw_dial_trail(&mut scene, 500);
        assert!(scene.commands().is_empty());
    }

    #[test]
    fn trail_uses_trail_color_with_fading_alpha() {
        let renderer = renderer();
        let mut scene = Scene::new(400, 400);
        renderer.draw_dial_trail(&mut scene, 0);

        let alphas: Vec<f64> = scene
            .fills()
            .map(|command| match command {
                DrawCommand::Fill { color, .. } => {
                    assert_eq!(color.color, ClockConfig::defaults().trail_color);
                    color.alpha
                }
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(alphas.len(), 180);
        assert!(alphas.windows(2).all(|pair| pair[0] > pair[1]));
    }

    #[test]
    fn eleven_is_sun_and_noon_is_moon() {
        assert_eq!(DayPeriod::of(&RenderTime::new(11, 59, 59, 999)), DayPeriod::Am);
        assert_eq!(DayPeriod::of(&RenderTime::new(12, 0, 0, 0)), DayPeriod::Pm);

        let renderer = renderer();

        let mut sun = Scene::new(400, 400);
        renderer.draw_am_pm_indicator(&mut sun, &RenderTime::new(11, 0, 0, 0));
        match sun.commands() {
            [DrawCommand::Stroke { path, color, .. }] => {
                assert_eq!(color.color, Color::YELLOW);
                assert_eq!(path.arcs().count(), 1);
                assert_eq!(path.segments().count(), 1 + SUN_RAY_COUNT as usize);
            }
            other => panic!("unexpected sun {other:?}"),
        }

        let mut moon = Scene::new(400, 400);
        renderer.draw_am_pm_indicator(&mut moon, &RenderTime::new(12, 0, 0, 0));
        match moon.commands() {
            [DrawCommand::Fill { path: disc, color: lit }, DrawCommand::Fill { path: cut, color: shade }] => {
                assert_eq!(lit.color, Color::YELLOW);
                assert_eq!(shade.color, PAGE_BACKGROUND);
                let disc = disc.arcs().next().unwrap();
                let cut = cut.arcs().next().unwrap();
                assert_eq!(disc.radius, MOON_RADIUS);
                assert_eq!(disc.center, Point::new(200.0, 370.0));
                assert_eq!(cut.radius, MOON_CUT_RADIUS);
                assert!(cut.center.x > disc.center.x && cut.center.y < disc.center.y);
            }
            other => panic!("unexpected moon {other:?}"),
        }
    }

    #[test]
    fn resize_rescales_hand_widths_and_dot() {
        let mut renderer = renderer();
        assert_eq!(renderer.parameters().scale_factor, 1.0);

        renderer.update_drawing_parameters(250.0);
        assert_eq!(renderer.parameters().hand_widths.hour, 4.0);
        assert_eq!(renderer.parameters().center_dot_size, 3.0);

        let mut scene = Scene::new(250, 250);
        renderer.draw_center_dot(&mut scene);
        match scene.commands() {
            [DrawCommand::Fill { path, .. }, DrawCommand::Stroke { color, width, .. }] => {
                assert_eq!(path.arcs().next().unwrap().radius, 3.0);
                assert_eq!(color.color, CENTER_DOT_OUTLINE);
                assert_eq!(*width, 2.0);
            }
            other => panic!("unexpected center dot {other:?}"),
        }
    }

    #[test]
    fn seeded_rng_repeats_its_colors() {
        use rand::{rngs::StdRng, SeedableRng};

        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        assert_eq!(a.next_color(), b.next_color());
    }
}
