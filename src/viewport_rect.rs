/// A rectangle in normalized screen coordinates, each component in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl ViewportRect {
    pub const FULL: Self = Self::new(0., 0., 1., 1.);

    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Centers the largest region of `camera_aspect` that fits a screen of
    /// `screen_aspect`. One axis is always covered in full.
    pub fn fit(screen_aspect: f32, camera_aspect: f32) -> Self {
        let bars = crate::Bars::from_aspects(screen_aspect, camera_aspect);
        let extent = bars.extent(screen_aspect, camera_aspect);
        let margin = (1. - extent) * 0.5;

        if bars.is_vertical() {
            Self::new(margin, 0., extent, 1.)
        } else {
            Self::new(0., margin, 1., extent)
        }
    }

    // Truncates rather than rounds. Sizes above 2^24 lose precision as f32,
    // so the result is capped to the screen as well.
    pub fn scaled(&self, screen_size: crate::ScreenSize) -> crate::ScreenSize {
        let width = ((self.width * screen_size.width as f32) as u32).min(screen_size.width);
        let height = ((self.height * screen_size.height as f32) as u32).min(screen_size.height);

        crate::ScreenSize::new(width, height)
    }

    pub fn to_array(&self) -> [f32; 4] {
        [self.x, self.y, self.width, self.height]
    }
}

impl Default for ViewportRect {
    fn default() -> Self {
        Self::FULL
    }
}
