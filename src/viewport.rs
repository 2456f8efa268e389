/// A viewport in pixels, with the unused space split evenly as margins.
#[derive(Clone, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub margin_x: f32,
    pub margin_y: f32,
}

impl Viewport {
    pub fn from_rect(rect: &crate::ViewportRect, screen_size: crate::ScreenSize) -> Self {
        let max_width = screen_size.width as f32;
        let max_height = screen_size.height as f32;

        let width = rect.width * max_width;
        let height = rect.height * max_height;
        let margin_x = rect.x * max_width;
        let margin_y = rect.y * max_height;

        Self { width, height, margin_x, margin_y }
    }

    pub fn is_empty(&self) -> bool {
        self.width < 1. || self.height < 1.
    }

    /// Whole-pixel (x, y, width, height) covering only pixels inside the
    /// viewport, clipped to the screen.
    pub fn scissor(&self, screen_size: crate::ScreenSize) -> (u32, u32, u32, u32) {
        let x = (self.margin_x.ceil() as u32).min(screen_size.width);
        let y = (self.margin_y.ceil() as u32).min(screen_size.height);

        let width = (self.width.floor() as u32).min(screen_size.width - x);
        let height = (self.height.floor() as u32).min(screen_size.height - y);

        (x, y, width, height)
    }
}
