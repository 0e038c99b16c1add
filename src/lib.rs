//! Analog world clocks drawn onto a 2D surface.
//!
//! A [`Clock`] resolves its [`ClockConfig`] from defaults and overrides,
//! derives the wall time at its UTC offset and renders a full frame through
//! the [`Surface`] trait each tick. [`PixelCanvas`] rasterizes frames into an
//! RGBA8 buffer, [`Scene`] records them for inspection.

pub mod app;
pub mod cities;
pub mod clock;
pub mod color;
pub mod config;
pub mod error;
pub mod geometry;
pub mod logging;
pub mod path;
pub mod raster;
pub mod renderer;
pub mod surface;
pub mod time;
pub mod tweak;

pub use app::{run, WindowConfig};
pub use cities::{CityClock, ClockList};
pub use clock::{Clock, ClockBoard, ClockOptions};
pub use color::{Color, Rgba};
pub use config::{ClockConfig, Hand, HandSet, PartialClockConfig};
pub use error::{ClockError, ConfigError, TweakError};
pub use geometry::{DrawingParameters, SurfaceGeometry};
pub use raster::PixelCanvas;
pub use renderer::{ClockRenderer, TickColorSource, PAGE_BACKGROUND};
pub use surface::{DrawCommand, LineCap, Scene, Surface};
pub use time::{compute_local_time, RenderTime};
