use std::{borrow, env, iter, time};
use futures::executor;
use winit::{dpi, event, event_loop, window};

use letterboxer::{AspectFitter, Camera, Config, ScreenSize, ViewportUniform};

const FRAME: time::Duration = time::Duration::from_millis(16);

struct Gpu {
    surface: wgpu::Surface,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl Gpu {
    fn new(window: &window::Window) -> Self {
        let instance = wgpu::Instance::new(wgpu::Backends::PRIMARY);
        let surface = unsafe { instance.create_surface(window) };
        let adapter = get_adapter(&instance, &surface);
        let (device, queue) = get_device(&adapter);

        let format = surface.get_preferred_format(&adapter).unwrap();
        let config = surface_config(format, window.inner_size());
        surface.configure(&device, &config);

        let uniform_buffer = create_uniform_buffer(&device);
        let layout = create_bind_group_layout(&device);
        let bind_group = create_bind_group(&device, &layout, &uniform_buffer);
        let pipeline = create_render_pipeline(&device, &layout, format);

        Self { surface, device, queue, config, pipeline, uniform_buffer, bind_group }
    }

    fn screen_size(&self) -> ScreenSize {
        ScreenSize::new(self.config.width, self.config.height)
    }

    fn resize(&mut self, new_size: dpi::PhysicalSize<u32>) {
        if ScreenSize::from(new_size).is_empty() { return; }

        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
    }

    // The clear covers the whole frame, bars included. Drawing is then
    // limited to the camera's viewport.
    fn render(&self, camera: &Camera) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame.texture.create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self.device.create_command_encoder(&wgpu::CommandEncoderDescriptor { label: None });

        let color_attachments = [wgpu::RenderPassColorAttachment {
            view: &view,
            resolve_target: None,
            ops: wgpu::Operations { load: wgpu::LoadOp::Clear(wgpu::Color::BLACK), store: true },
        }];

        let descriptor = wgpu::RenderPassDescriptor { label: None, color_attachments: &color_attachments, depth_stencil_attachment: None };
        let mut render_pass = encoder.begin_render_pass(&descriptor);

        camera.apply(&mut render_pass, self.screen_size());
        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &self.bind_group, &[]);
        render_pass.draw(0..3, 0..1);

        drop(render_pass);
        self.queue.submit(iter::once(encoder.finish()));
        frame.present();

        Ok(())
    }
}

fn get_adapter(instance: &wgpu::Instance, surface: &wgpu::Surface) -> wgpu::Adapter {
    let options = wgpu::RequestAdapterOptions {
        power_preference: wgpu::PowerPreference::default(),
        force_fallback_adapter: false,
        compatible_surface: Some(surface),
    };

    executor::block_on(instance.request_adapter(&options)).unwrap()
}

fn get_device(adapter: &wgpu::Adapter) -> (wgpu::Device, wgpu::Queue) {
    let descriptor = wgpu::DeviceDescriptor { label: None, features: wgpu::Features::empty(), limits: wgpu::Limits::default() };

    executor::block_on(adapter.request_device(&descriptor, None)).unwrap()
}

fn surface_config(format: wgpu::TextureFormat, size: dpi::PhysicalSize<u32>) -> wgpu::SurfaceConfiguration {
    wgpu::SurfaceConfiguration {
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        format,
        width: size.width.max(1),
        height: size.height.max(1),
        present_mode: wgpu::PresentMode::Fifo,
    }
}

fn create_uniform_buffer(device: &wgpu::Device) -> wgpu::Buffer {
    let descriptor = wgpu::BufferDescriptor {
        label: None,
        size: ViewportUniform::SIZE,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    };

    device.create_buffer(&descriptor)
}

fn create_bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    let entry = wgpu::BindGroupLayoutEntry {
        binding: 0,
        visibility: wgpu::ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Uniform,
            has_dynamic_offset: false,
            min_binding_size: wgpu::BufferSize::new(ViewportUniform::SIZE),
        },
        count: None,
    };

    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor { label: None, entries: &[entry] })
}

fn create_bind_group(device: &wgpu::Device, layout: &wgpu::BindGroupLayout, buffer: &wgpu::Buffer) -> wgpu::BindGroup {
    let entry = wgpu::BindGroupEntry { binding: 0, resource: buffer.as_entire_binding() };

    device.create_bind_group(&wgpu::BindGroupDescriptor { label: None, layout, entries: &[entry] })
}

fn create_render_pipeline(device: &wgpu::Device, bind_group_layout: &wgpu::BindGroupLayout, format: wgpu::TextureFormat) -> wgpu::RenderPipeline {
    let source = wgpu::ShaderSource::Wgsl(borrow::Cow::Borrowed(include_str!("letterbox.wgsl")));
    let module = device.create_shader_module(&wgpu::ShaderModuleDescriptor { label: None, source });

    let descriptor = wgpu::PipelineLayoutDescriptor { label: None, bind_group_layouts: &[bind_group_layout], push_constant_ranges: &[] };
    let layout = device.create_pipeline_layout(&descriptor);
    let targets = [wgpu::ColorTargetState::from(format)];

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: None,
        layout: Some(&layout),
        vertex: wgpu::VertexState { module: &module, entry_point: "vs_main", buffers: &[] },
        fragment: Some(wgpu::FragmentState { module: &module, entry_point: "fs_main", targets: &targets }),
        primitive: wgpu::PrimitiveState::default(),
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
    })
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Optionally pass a JSON file with the four aspect bounds.
    let config = match env::args().nth(1) {
        Some(path) => Config::load(&path).unwrap_or_else(|error| {
            log::error!("{}, using the default bounds", error);
            Config::default()
        }),
        None => Config::default(),
    };

    let event_loop = event_loop::EventLoop::new();
    let window = window::WindowBuilder::new().with_title("letterboxer").build(&event_loop).unwrap();

    let mut gpu = Gpu::new(&window);
    let mut fitter = AspectFitter::new(config, Camera::new());
    let mut seen_updates = 0;

    event_loop.run(move |event, _, control_flow| {
        *control_flow = event_loop::ControlFlow::WaitUntil(time::Instant::now() + FRAME);

        match event {
            event::Event::MainEventsCleared => {
                fitter.poll_window(&window);

                if fitter.surface().updates() != seen_updates {
                    seen_updates = fitter.surface().updates();
                    fitter.uniform().write(&gpu.queue, &gpu.uniform_buffer);

                    let screen_size = fitter.screen_size();
                    log::info!(
                        "{}x{} -> {}x{} at aspect {:.3} ({:?} bars)",
                        screen_size.width, screen_size.height,
                        fitter.effective_width(), fitter.effective_height(), fitter.aspect(), fitter.bars(),
                    );
                }

                if !fitter.screen_size().is_empty() {
                    window.request_redraw();
                }
            },
            event::Event::RedrawRequested(_) => {
                match gpu.render(fitter.surface()) {
                    Ok(()) => {},
                    Err(wgpu::SurfaceError::Lost) => gpu.resize(window.inner_size()),
                    Err(wgpu::SurfaceError::OutOfMemory) => *control_flow = event_loop::ControlFlow::Exit,
                    Err(error) => log::warn!("skipped frame: {:?}", error),
                }
            },
            event::Event::WindowEvent { event, .. } => match event {
                event::WindowEvent::Resized(size) => {
                    gpu.resize(size);
                },
                event::WindowEvent::ScaleFactorChanged { new_inner_size: size, .. } => {
                    gpu.resize(*size);
                },
                event::WindowEvent::CloseRequested => {
                    *control_flow = event_loop::ControlFlow::Exit;
                },
                _ => {},
            },
            _ => {},
        }
    });
}
