/// Something that renders into a sub-rectangle of the screen, such as a camera.
pub trait ViewportSurface {
    fn set_viewport_rect(&mut self, rect: crate::ViewportRect);
}

impl<S: ViewportSurface + ?Sized> ViewportSurface for &mut S {
    fn set_viewport_rect(&mut self, rect: crate::ViewportRect) {
        (**self).set_viewport_rect(rect);
    }
}
