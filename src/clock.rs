use chrono::{DateTime, TimeZone, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::color::Rgba;
use crate::config::{ClockConfig, PartialClockConfig};
use crate::error::{ClockError, TweakError};
use crate::geometry::SurfaceGeometry;
use crate::raster::PixelCanvas;
use crate::renderer::ClockRenderer;
use crate::time::{compute_local_time, RenderTime};
use crate::tweak::{self, TweakValue};

/// Per-clock settings passed explicitly at construction.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ClockOptions {
    /// Exposes the tweak table through [`Clock::tweak`].
    pub debug: bool,
    /// Seed for the random tick color; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// What `clear` resets the clock's canvas to.
    pub backdrop: Option<Rgba>,
}

/// One independent clock face with its own renderer and canvas.
#[derive(Debug)]
pub struct Clock {
    id: String,
    renderer: ClockRenderer<StdRng>,
    geometry: SurfaceGeometry,
    canvas: PixelCanvas,
    debug: bool,
}

impl Clock {
    /// Creates a clock against the built-in defaults.
    ///
    /// # Errors
    /// [`ClockError::EmptyId`] for an empty id, or a configuration error.
    pub fn new(
        id: impl Into<String>,
        timezone_offset_minutes: i32,
        overrides: &PartialClockConfig,
        options: ClockOptions,
    ) -> Result<Self, ClockError> {
        Self::with_defaults(id, timezone_offset_minutes, &ClockConfig::defaults(), overrides, options)
    }

    /// Creates a clock whose overrides are resolved against `defaults`.
    ///
    /// # Errors
    /// [`ClockError::EmptyId`] for an empty id, [`ClockError::Config`] when
    /// `defaults` is malformed.
    pub fn with_defaults(
        id: impl Into<String>,
        timezone_offset_minutes: i32,
        defaults: &ClockConfig,
        overrides: &PartialClockConfig,
        options: ClockOptions,
    ) -> Result<Self, ClockError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ClockError::EmptyId);
        }

        let config = ClockConfig::resolve(defaults, overrides)?.with_timezone_offset(timezone_offset_minutes);
        let rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let geometry = SurfaceGeometry::fit(crate::geometry::MAX_SURFACE_SIZE, crate::geometry::MAX_SURFACE_SIZE);
        let backdrop = options.backdrop.unwrap_or(Rgba::TRANSPARENT);
        let canvas = PixelCanvas::new(geometry.width, geometry.height).with_backdrop(backdrop);
        let mut renderer = ClockRenderer::new(config, rng);
        renderer.update_drawing_parameters(f64::from(geometry.width));

        info!(clock = %id, timezone_offset_minutes, debug = options.debug, %backdrop, "created clock");
        Ok(Self {
            id,
            renderer,
            geometry,
            canvas,
            debug: options.debug,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn config(&self) -> &ClockConfig {
        self.renderer.config()
    }

    pub fn geometry(&self) -> SurfaceGeometry {
        self.geometry
    }

    pub fn canvas(&self) -> &PixelCanvas {
        &self.canvas
    }

    pub fn renderer(&self) -> &ClockRenderer<StdRng> {
        &self.renderer
    }

    /// Applies a viewport change: refits the square surface, rescales the
    /// drawing parameters and renders once at `now`.
    pub fn resize<Tz: TimeZone>(
        &mut self,
        viewport_width: u32,
        viewport_height: u32,
        now: DateTime<Utc>,
        host_zone: &Tz,
    ) {
        let geometry = SurfaceGeometry::fit(viewport_width, viewport_height);
        if geometry != self.geometry {
            debug!(
                clock = %self.id,
                width = geometry.width,
                scale = geometry.scale_factor(),
                "resized clock surface"
            );
            self.geometry = geometry;
            self.canvas.resize(geometry.width, geometry.height);
        }
        self.renderer.update_drawing_parameters(f64::from(geometry.width));
        self.render(now, host_zone);
    }

    pub fn local_time<Tz: TimeZone>(&self, now: DateTime<Utc>, host_zone: &Tz) -> RenderTime {
        compute_local_time(now, self.config().timezone_offset_minutes, host_zone)
    }

    /// Draws one frame for `now` onto the clock's own canvas.
    pub fn render<Tz: TimeZone>(&mut self, now: DateTime<Utc>, host_zone: &Tz) {
        let time = self.local_time(now, host_zone);
        self.renderer.render_frame(&mut self.canvas, &time);
    }

    /// Edits one tweak field. Only available on clocks built with `debug`.
    ///
    /// # Errors
    /// [`TweakError::DebugDisabled`], or any error from the field lookup or setter.
    pub fn tweak(&mut self, field: &str, value: TweakValue) -> Result<(), TweakError> {
        if !self.debug {
            return Err(TweakError::DebugDisabled(self.id.clone()));
        }
        tweak::field(field)?.set(self.renderer.config_mut(), value)?;
        debug!(clock = %self.id, field, ?value, "tweaked clock field");
        Ok(())
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }
}

/// Clocks registered by id, kept in registration order.
#[derive(Debug, Default)]
pub struct ClockBoard {
    clocks: Vec<Clock>,
}

impl ClockBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new clock under `id`.
    ///
    /// # Errors
    /// [`ClockError::DuplicateId`] if `id` is taken, or any error from [`Clock::new`].
    pub fn create_clock(
        &mut self,
        id: impl Into<String>,
        timezone_offset_minutes: i32,
        overrides: &PartialClockConfig,
        options: ClockOptions,
    ) -> Result<&mut Clock, ClockError> {
        self.create_clock_with_defaults(id, timezone_offset_minutes, &ClockConfig::defaults(), overrides, options)
    }

    /// Like [`ClockBoard::create_clock`] with a custom defaults table.
    ///
    /// # Errors
    /// Same as [`ClockBoard::create_clock`].
    pub fn create_clock_with_defaults(
        &mut self,
        id: impl Into<String>,
        timezone_offset_minutes: i32,
        defaults: &ClockConfig,
        overrides: &PartialClockConfig,
        options: ClockOptions,
    ) -> Result<&mut Clock, ClockError> {
        let id = id.into();
        if self.get(&id).is_some() {
            return Err(ClockError::DuplicateId(id));
        }
        let clock = Clock::with_defaults(id, timezone_offset_minutes, defaults, overrides, options)?;
        self.clocks.push(clock);
        let index = self.clocks.len() - 1;
        Ok(&mut self.clocks[index])
    }

    pub fn get(&self, id: &str) -> Option<&Clock> {
        self.clocks.iter().find(|clock| clock.id == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Clock> {
        self.clocks.iter_mut().find(|clock| clock.id == id)
    }

    /// Tears a clock down; its canvas goes with it.
    pub fn remove(&mut self, id: &str) -> Option<Clock> {
        let index = self.clocks.iter().position(|clock| clock.id == id)?;
        debug!(clock = id, "removed clock");
        Some(self.clocks.remove(index))
    }

    pub fn len(&self) -> usize {
        self.clocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clocks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Clock> {
        self.clocks.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Clock> {
        self.clocks.iter_mut()
    }
}
