use std::time::{Duration, Instant};

use bon::Builder;
use chrono::{Local, Utc};
use pixels::{Pixels, SurfaceTexture};
use tracing::{info, warn};
use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event, KeyEvent, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::keyboard::{Key, NamedKey};
use winit::window::WindowBuilder;

use crate::clock::ClockBoard;
use crate::color::Color;
use crate::renderer::{TickColorSource, PAGE_BACKGROUND};
use crate::tweak::{TweakKind, TweakValue, FIELDS};

// ============================================================================
// WINDOW CONFIGURATION
// ============================================================================

#[derive(Debug, Clone, Builder)]
pub struct WindowConfig {
    #[builder(default = "World Clocks".to_string())]
    pub title: String,
    /// Logical size of one clock tile.
    #[builder(default = 400)]
    pub tile_size: u32,
    #[builder(default = 3)]
    pub columns: u32,
    #[builder(default = 60.0)]
    pub max_framerate: f64,
    #[builder(default = PAGE_BACKGROUND)]
    pub background: Color,
}

/// Square tiles in a fixed number of columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TileGrid {
    columns: u32,
    rows: u32,
}

impl TileGrid {
    fn new(clock_count: usize, columns: u32) -> Self {
        let columns = columns.max(1).min(clock_count.max(1) as u32);
        let rows = (clock_count as u32).div_ceil(columns).max(1);
        Self { columns, rows }
    }

    /// Viewport one tile offers within a `width` x `height` frame.
    fn tile_size(&self, width: u32, height: u32) -> (u32, u32) {
        (width / self.columns, height / self.rows)
    }

    fn tile_origin(&self, index: usize, tile: (u32, u32)) -> (u32, u32) {
        let index = index as u32;
        ((index % self.columns) * tile.0, (index / self.columns) * tile.1)
    }
}

// ============================================================================
// DEBUG INSPECTOR
// ============================================================================

/// Keyboard bindings over the tweak table for clocks built with `debug`.
#[derive(Debug, Default)]
struct Inspector {
    clock: usize,
    field: usize,
}

impl Inspector {
    fn handle_key(&mut self, board: &mut ClockBoard, key: &Key) {
        let clock_count = board.len();
        if clock_count == 0 {
            return;
        }
        let field = &FIELDS[self.field];

        match key {
            Key::Named(NamedKey::Tab) => {
                self.field = (self.field + 1) % FIELDS.len();
                info!(field = FIELDS[self.field].name, "inspector field selected");
                return;
            }
            Key::Character(c) if c.as_str().eq_ignore_ascii_case("c") => {
                self.clock = (self.clock + 1) % clock_count;
                if let Some(clock) = board.iter().nth(self.clock) {
                    info!(clock = clock.id(), "inspector clock selected");
                }
                return;
            }
            _ => {}
        }

        let Some(clock) = board.iter_mut().nth(self.clock) else {
            return;
        };
        let value = match (key, field.kind, field.get(clock.config())) {
            (Key::Named(NamedKey::ArrowUp), TweakKind::Range { .. }, TweakValue::Number(n)) => TweakValue::Number(n + 1.0),
            (Key::Named(NamedKey::ArrowDown), TweakKind::Range { .. }, TweakValue::Number(n)) => TweakValue::Number(n - 1.0),
            (Key::Character(c), TweakKind::Color, _) if c.as_str().eq_ignore_ascii_case("r") => {
                TweakValue::Color(rand::rng().next_color())
            }
            _ => return,
        };

        if let Err(e) = clock.tweak(field.name, value) {
            warn!(error = %e, "inspector edit rejected");
        }
    }
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Opens a window showing every clock on `board` and runs until it is closed.
///
/// # Errors
/// Fails if the window or the pixel surface cannot be created.
pub fn run(mut board: ClockBoard, config: WindowConfig) -> Result<(), Box<dyn std::error::Error>> {
    let grid = TileGrid::new(board.len(), config.columns);
    let logical_width = f64::from(grid.columns * config.tile_size);
    let logical_height = f64::from(grid.rows * config.tile_size);

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title(&config.title)
        .with_inner_size(LogicalSize::new(logical_width, logical_height))
        .with_resizable(true)
        .build(&event_loop)?;

    let window = std::sync::Arc::new(window);
    let window_clone = window.clone();

    let size = window.inner_size();
    let mut fb_width = size.width;
    let mut fb_height = size.height;
    let surface_texture = SurfaceTexture::new(size.width, size.height, &window);
    let mut pixels = Pixels::new(size.width, size.height, surface_texture)?;
    info!(clocks = board.len(), width = fb_width, height = fb_height, "opened clock window");

    layout(&mut board, grid, fb_width, fb_height);

    let mut inspector = board.iter().any(|clock| clock.is_debug()).then(Inspector::default);
    let frame_duration = Duration::from_secs_f64(1.0 / config.max_framerate.max(1.0));
    let mut last_frame = Instant::now();
    let (r, g, b) = config.background.as_tuple();

    event_loop.run(move |event, window_target| {
        window_target.set_control_flow(ControlFlow::Poll);
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    window_target.exit();
                }
                WindowEvent::Resized(new_size) => {
                    fb_width = new_size.width;
                    fb_height = new_size.height;
                    if let Err(e) = pixels.resize_buffer(fb_width, fb_height) {
                        warn!(error = %e, "failed to resize pixel buffer");
                    }
                    if let Err(e) = pixels.resize_surface(fb_width, fb_height) {
                        warn!(error = %e, "failed to resize window surface");
                    }
                    layout(&mut board, grid, fb_width, fb_height);
                }
                WindowEvent::KeyboardInput {
                    event:
                        KeyEvent {
                            logical_key,
                            state: ElementState::Pressed,
                            ..
                        },
                    ..
                } => {
                    if let Some(inspector) = inspector.as_mut() {
                        inspector.handle_key(&mut board, &logical_key);
                    }
                }
                WindowEvent::RedrawRequested => {
                    let now = Utc::now();
                    let tile = grid.tile_size(fb_width, fb_height);

                    let frame = pixels.frame_mut();
                    for chunk in frame.chunks_exact_mut(4) {
                        chunk.copy_from_slice(&[r, g, b, 0xff]);
                    }
                    for (index, clock) in board.iter_mut().enumerate() {
                        clock.render(now, &Local);
                        let (x, y) = grid.tile_origin(index, tile);
                        let side = clock.geometry().width;
                        let x = x + tile.0.saturating_sub(side) / 2;
                        let y = y + tile.1.saturating_sub(side) / 2;
                        clock
                            .canvas()
                            .blit_into(frame, fb_width as usize, x as usize, y as usize);
                    }
                    if let Err(e) = pixels.render() {
                        warn!(error = %e, "failed to present frame");
                    }
                }
                _ => {}
            },
            Event::AboutToWait => {
                if last_frame.elapsed() >= frame_duration {
                    window_clone.request_redraw();
                    last_frame = Instant::now();
                }
            }
            _ => {}
        }
    })?;

    Ok(())
}

/// Gives every clock its tile as viewport.
fn layout(board: &mut ClockBoard, grid: TileGrid, width: u32, height: u32) {
    let (tile_width, tile_height) = grid.tile_size(width, height);
    let now = Utc::now();
    for clock in board.iter_mut() {
        clock.resize(tile_width, tile_height, now, &Local);
    }
}
