//! Presents the raster in a window through `wgpu`.

use log::{debug, info};
use winit::{dpi::PhysicalSize, window::Window};

use crate::{
    colour::Colour,
    error::Error,
    raster::Raster,
    screen,
    texture::{self, Texture},
    uniform::Uniform,
};

pub struct Display {
    surface: wgpu::Surface,
    device: wgpu::Device,
    queue: wgpu::Queue,
    surface_configuration: wgpu::SurfaceConfiguration,
    render_pipeline: wgpu::RenderPipeline,
    render_bind_group: wgpu::BindGroup,
    raster_texture: Texture<Colour>,
    screen_size: Uniform<screen::Size>,
}

impl Display {
    pub fn new(window: &Window, raster_size: screen::Size) -> Result<Self, Error> {
        let instance = wgpu::Instance::new(wgpu::Backends::all());

        let size = window.inner_size();
        let surface = unsafe { instance.create_surface(window) };

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: Default::default(),
            force_fallback_adapter: false,
            compatible_surface: Some(&surface),
        }))
        .ok_or(Error::NoAdapter)?;
        info!("using adapter {:?}", adapter.get_info());

        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("device"),
                features: wgpu::Features::empty(),
                limits: wgpu::Limits::default(),
            },
            None,
        ))?;

        // The raster holds final colour bytes, so avoid a surface that would gamma-encode them.
        let formats = surface.get_supported_formats(&adapter);
        let format = formats
            .iter()
            .copied()
            .find(|format| !format.describe().srgb)
            .or_else(|| formats.first().copied())
            .ok_or(Error::IncompatibleSurface)?;
        debug!("surface format {:?}", format);

        let surface_configuration = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width,
            height: size.height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: wgpu::CompositeAlphaMode::Auto,
        };
        surface.configure(&device, &surface_configuration);

        let render_shader_module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("render-shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shader.wgsl").into()),
        });

        let render_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("render-bind-group-layout"),
                entries: &[
                    wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Texture {
                            sample_type: wgpu::TextureSampleType::Float { filterable: false },
                            view_dimension: wgpu::TextureViewDimension::D2,
                            multisampled: false,
                        },
                        count: None,
                    },
                    wgpu::BindGroupLayoutEntry {
                        binding: 1,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::NonFiltering),
                        count: None,
                    },
                    wgpu::BindGroupLayoutEntry {
                        binding: 2,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: None,
                        },
                        count: None,
                    },
                ],
            });

        let render_pipeline_layout =
            device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("render-pipeline-layout"),
                bind_group_layouts: &[&render_bind_group_layout],
                push_constant_ranges: &[],
            });

        let render_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("render-pipeline"),
            layout: Some(&render_pipeline_layout),
            vertex: wgpu::VertexState {
                module: &render_shader_module,
                entry_point: "vertex_main",
                buffers: &[],
            },
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleStrip,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: Some(wgpu::Face::Back),
                unclipped_depth: false,
                polygon_mode: wgpu::PolygonMode::Fill,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &render_shader_module,
                entry_point: "fragment_main",
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_configuration.format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            multiview: None,
        });

        let raster_texture =
            texture::Builder::<Colour>::new(raster_size, wgpu::TextureFormat::Rgba8Unorm)
                .with_label("raster-texture")
                .with_usage(wgpu::TextureUsages::TEXTURE_BINDING)
                .create(&device);
        let raster_texture_view = raster_texture.create_view();

        let screen_size = Uniform::new(
            &device,
            "screen-size-buffer",
            screen::Size::new(size.width, size.height),
        );

        // Default sampler filtering is nearest, which keeps raster pixels sharp.
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor::default());

        let render_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("render-bind-group"),
            layout: &render_bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&raster_texture_view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&sampler),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: screen_size.binding_resource(),
                },
            ],
        });

        Ok(Self {
            surface,
            device,
            queue,
            surface_configuration,
            render_pipeline,
            render_bind_group,
            raster_texture,
            screen_size,
        })
    }

    /// Current surface size in physical pixels.
    pub fn surface_size(&self) -> screen::Size {
        screen::Size::new(
            self.surface_configuration.width,
            self.surface_configuration.height,
        )
    }

    pub fn resize(&mut self, size: PhysicalSize<u32>) {
        // Minimised windows report a zero size, which can't be configured.
        if size.width == 0 || size.height == 0 {
            return;
        }

        debug!("resizing to {:?}", size);

        self.surface_configuration.width = size.width;
        self.surface_configuration.height = size.height;
        self.reconfigure();

        self.screen_size
            .write(&self.queue, screen::Size::new(size.width, size.height));
    }

    pub fn reconfigure(&mut self) {
        self.surface
            .configure(&self.device, &self.surface_configuration);
    }

    /// Copy `raster` into the texture shown by [`Display::present`].
    pub fn upload(&self, raster: &Raster) {
        debug_assert_eq!(raster.size(), self.raster_texture.size());
        self.raster_texture.write(&self.queue, raster.colours());
    }

    pub fn present(&mut self) -> Result<(), wgpu::SurfaceError> {
        self.frame(true)
    }

    /// Present a black frame.
    pub fn clear(&mut self) -> Result<(), wgpu::SurfaceError> {
        self.frame(false)
    }

    fn frame(&mut self, draw_raster: bool) -> Result<(), wgpu::SurfaceError> {
        let surface_texture = self.surface.get_current_texture()?;

        let surface_texture_view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut command_encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor::default());

        command_encoder.push_debug_group("render-pass");
        {
            let mut render_pass = command_encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("render-pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &surface_texture_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: true,
                    },
                })],
                depth_stencil_attachment: None,
            });

            if draw_raster {
                render_pass.set_pipeline(&self.render_pipeline);
                render_pass.set_bind_group(0, &self.render_bind_group, &[]);
                render_pass.draw(0..4, 0..1);
            }
        }
        command_encoder.pop_debug_group();

        self.queue.submit([command_encoder.finish()]);
        surface_texture.present();
        Ok(())
    }
}
