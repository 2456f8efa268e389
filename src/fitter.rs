use log::{debug, trace};
use winit::window;

use crate::{AspectRatio, Bars, Config, Orientation, ScreenSize, ViewportRect, ViewportSurface, ViewportUniform};

/// Keeps a surface's viewport within the configured aspect ratios as the
/// screen changes size. Call `poll` once per frame.
pub struct AspectFitter<S> {
    config: Config,
    surface: S,
    screen_size: ScreenSize,
    aspect: f32,
    bars: Bars,
    rect: ViewportRect,
    effective_size: ScreenSize,
}

impl<S: ViewportSurface> AspectFitter<S> {
    pub fn new(config: Config, surface: S) -> Self {
        Self {
            config: config.validated(),
            surface,
            screen_size: ScreenSize::default(),
            aspect: 1.,
            bars: Bars::Horizontal,
            rect: ViewportRect::FULL,
            effective_size: ScreenSize::default(),
        }
    }

    /// The last seen size starts at 0x0, so the first valid size always
    /// triggers a fit.
    pub fn initialize(&mut self, width: u32, height: u32) {
        self.poll(width, height);
    }

    pub fn set_configuration(&mut self, landscape_min: AspectRatio, landscape_max: AspectRatio, portrait_min: AspectRatio, portrait_max: AspectRatio) {
        self.config = Config::new(landscape_min, landscape_max, portrait_min, portrait_max);
    }

    // Takes effect on the next size change.
    pub fn set_config(&mut self, config: Config) {
        self.config = config.validated();
    }

    pub fn poll(&mut self, width: u32, height: u32) {
        self.poll_size(ScreenSize::new(width, height));
    }

    pub fn poll_size(&mut self, screen_size: ScreenSize) {
        if screen_size == self.screen_size { return; }
        self.screen_size = screen_size;

        if screen_size.is_empty() {
            trace!("ignoring empty screen size {}x{}", screen_size.width, screen_size.height);
            return;
        }

        self.fit();
    }

    pub fn poll_window(&mut self, window: &window::Window) {
        self.poll_size(window.inner_size().into());
    }

    fn fit(&mut self) {
        let screen_aspect = self.screen_size.aspect();
        let orientation = Orientation::from_aspect(screen_aspect);

        self.aspect = self.config.range(orientation).clamp(screen_aspect);
        self.bars = Bars::from_aspects(screen_aspect, self.aspect);
        self.rect = ViewportRect::fit(screen_aspect, self.aspect);
        self.effective_size = self.rect.scaled(self.screen_size);

        debug!(
            "screen {}x{} ({:?}): aspect {} -> {}, rect {:?}, effective {}x{}",
            self.screen_size.width, self.screen_size.height, orientation, screen_aspect, self.aspect,
            self.rect, self.effective_size.width, self.effective_size.height,
        );

        self.surface.set_viewport_rect(self.rect);
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Width over height of the active region, 1.0 until the first fit.
    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn effective_width(&self) -> f32 {
        self.effective_size.width as f32
    }

    pub fn effective_height(&self) -> f32 {
        self.effective_size.height as f32
    }

    pub fn effective_size(&self) -> ScreenSize {
        self.effective_size
    }

    pub fn viewport_rect(&self) -> ViewportRect {
        self.rect
    }

    pub fn bars(&self) -> Bars {
        self.bars
    }

    // Includes empty sizes that were ignored.
    pub fn screen_size(&self) -> ScreenSize {
        self.screen_size
    }

    pub fn uniform(&self) -> ViewportUniform {
        ViewportUniform::new(self.rect, self.effective_size, self.aspect)
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}
