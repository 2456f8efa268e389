use std::mem;

/// The fitter's outputs laid out for a uniform buffer, so shaders can use
/// the effective resolution instead of the window size.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ViewportUniform {
    pub rect: [f32; 4],
    pub effective_size: [f32; 2],
    pub aspect: f32,
    pub _padding: f32,
}

impl ViewportUniform {
    pub const SIZE: wgpu::BufferAddress = mem::size_of::<Self>() as wgpu::BufferAddress;

    pub fn new(rect: crate::ViewportRect, effective_size: crate::ScreenSize, aspect: f32) -> Self {
        let effective_size = [effective_size.width as f32, effective_size.height as f32];

        Self { rect: rect.to_array(), effective_size, aspect, _padding: 0. }
    }

    pub fn bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    pub fn write(&self, queue: &wgpu::Queue, buffer: &wgpu::Buffer) {
        queue.write_buffer(buffer, 0, self.bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ScreenSize, ViewportRect};

    #[test]
    fn it_packs_into_32_bytes() {
        assert_eq!(ViewportUniform::SIZE, 32);

        let uniform = ViewportUniform::new(ViewportRect::FULL, ScreenSize::new(1920, 1080), 16. / 9.);
        assert_eq!(uniform.bytes().len(), 32);
    }

    #[test]
    fn it_lays_out_rect_then_size_then_aspect() {
        let rect = ViewportRect::new(0.125, 0., 0.75, 1.);
        let uniform = ViewportUniform::new(rect, ScreenSize::new(1920, 1080), 1.5);
        let floats: &[f32] = bytemuck::cast_slice(uniform.bytes());

        assert_eq!(floats, &[0.125, 0., 0.75, 1., 1920., 1080., 1.5, 0.]);
    }
}
