/// Holds the rectangle an `AspectFitter` last computed and applies it to
/// render passes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Camera {
    rect: crate::ViewportRect,
    updates: u32,
}

impl Camera {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rect(&self) -> crate::ViewportRect {
        self.rect
    }

    // Number of times the rect has been written.
    pub fn updates(&self) -> u32 {
        self.updates
    }

    pub fn viewport(&self, screen_size: crate::ScreenSize) -> crate::Viewport {
        crate::Viewport::from_rect(&self.rect, screen_size)
    }

    /// Restricts drawing in `render_pass` to the active region. The region is
    /// centered, so wgpu's top-left origin needs no flip.
    pub fn apply(&self, render_pass: &mut wgpu::RenderPass, screen_size: crate::ScreenSize) {
        let viewport = self.viewport(screen_size);
        if viewport.is_empty() { return; }

        render_pass.set_viewport(viewport.margin_x, viewport.margin_y, viewport.width, viewport.height, 0., 1.);

        let (x, y, width, height) = viewport.scissor(screen_size);
        render_pass.set_scissor_rect(x, y, width, height);
    }
}

impl crate::ViewportSurface for Camera {
    fn set_viewport_rect(&mut self, rect: crate::ViewportRect) {
        self.rect = rect;
        self.updates += 1;
    }
}
