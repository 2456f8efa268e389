use winit::dpi;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScreenSize {
    pub width: u32,
    pub height: u32,
}

impl ScreenSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    // Minimised windows report zero in one or both dimensions.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

impl From<dpi::PhysicalSize<u32>> for ScreenSize {
    fn from(size: dpi::PhysicalSize<u32>) -> Self {
        Self::new(size.width, size.height)
    }
}
