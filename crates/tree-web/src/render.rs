//! WebGPU renderer: three instanced pipelines over one shared uniform buffer.
//!
//! - foliage: billboarded points, chaos/tree blend evaluated on the GPU from
//!   a single progress uniform
//! - sprites: fairy-light billboards with per-instance emissive intensity
//! - cards: posed quads with a full model matrix (photo faces, border planes
//!   and baubles); photo faces sample a texture array, everything else tints
//!
//! The photo texture array always exists (one neutral placeholder layer when
//! no images are loaded) so rendering never stalls on image decode.

use crate::constants::PHOTO_LAYER_SIZE;
use wgpu::util::DeviceExt;
use web_sys as web;

const FOLIAGE_WGSL: &str = include_str!("../shaders/foliage.wgsl");
const SPRITE_WGSL: &str = include_str!("../shaders/sprite.wgsl");
const CARD_WGSL: &str = include_str!("../shaders/card.wgsl");

const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth24Plus;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Uniforms {
    pub view_proj: [[f32; 4]; 4],
    pub cam_right: [f32; 4],
    pub cam_up: [f32; 4],
    /// x: eased progress, y: time, z: point scale
    pub params: [f32; 4],
    pub color: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SpriteInstance {
    pub pos: [f32; 3],
    pub scale: f32,
    pub color: [f32; 4],
    pub emissive: f32,
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CardInstance {
    pub model: [[f32; 4]; 4],
    pub tint: [f32; 4],
    /// Texture-array layer; negative renders the flat tint only.
    pub layer: f32,
    pub _pad: [f32; 3],
}

/// Everything the frame loop hands the renderer per frame.
pub struct SceneDraw {
    pub uniforms: Uniforms,
    pub sprites: Vec<SpriteInstance>,
    pub cards: Vec<CardInstance>,
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    width: u32,
    height: u32,
    depth_view: wgpu::TextureView,

    uniform_buffer: wgpu::Buffer,
    uniform_bind_group: wgpu::BindGroup,
    texture_bgl: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,
    photo_bind_group: wgpu::BindGroup,
    photo_texture: wgpu::Texture,
    photo_layers: u32,

    quad_vb: wgpu::Buffer,
    foliage_pipeline: wgpu::RenderPipeline,
    sprite_pipeline: wgpu::RenderPipeline,
    card_pipeline: wgpu::RenderPipeline,

    foliage_vb: Option<wgpu::Buffer>,
    foliage_count: u32,
    sprite_vb: wgpu::Buffer,
    sprite_capacity: usize,
    card_vb: wgpu::Buffer,
    card_capacity: usize,
}

fn create_depth_view(device: &wgpu::Device, width: u32, height: u32) -> wgpu::TextureView {
    let tex = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("depth"),
        size: wgpu::Extent3d {
            width: width.max(1),
            height: height.max(1),
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: DEPTH_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    tex.create_view(&wgpu::TextureViewDescriptor::default())
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width();
        let height = canvas.height();

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps.formats[0];
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        let depth_view = create_depth_view(&device, width, height);

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("uniforms"),
            size: std::mem::size_of::<Uniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let uniform_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("uniform_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let uniform_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("uniform_bg"),
            layout: &uniform_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let texture_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("texture_bgl"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2Array,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("photo_sampler"),
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });
        let (photo_texture, photo_bind_group) =
            Self::build_photo_array(&device, &queue, &texture_bgl, &sampler, 1);

        // Quad with uv, two CCW triangles facing +Z
        #[rustfmt::skip]
        let quad_vertices: [f32; 24] = [
            -0.5, -0.5, 0.0, 1.0,
             0.5, -0.5, 1.0, 1.0,
             0.5,  0.5, 1.0, 0.0,
            -0.5, -0.5, 0.0, 1.0,
             0.5,  0.5, 1.0, 0.0,
            -0.5,  0.5, 0.0, 0.0,
        ];
        let quad_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("quad_vb"),
            contents: bytemuck::cast_slice(&quad_vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let quad_pos_only = wgpu::VertexBufferLayout {
            array_stride: 16,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x2,
                offset: 0,
                shader_location: 0,
            }],
        };
        let quad_pos_uv = wgpu::VertexBufferLayout {
            array_stride: 16,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x2,
                    offset: 0,
                    shader_location: 0,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x2,
                    offset: 8,
                    shader_location: 1,
                },
            ],
        };
        let foliage_instances = wgpu::VertexBufferLayout {
            array_stride: 28,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &[
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 0,
                    shader_location: 1,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 12,
                    shader_location: 2,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32,
                    offset: 24,
                    shader_location: 3,
                },
            ],
        };
        let sprite_instances = wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<SpriteInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &[
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 0,
                    shader_location: 1,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32,
                    offset: 12,
                    shader_location: 2,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x4,
                    offset: 16,
                    shader_location: 3,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32,
                    offset: 32,
                    shader_location: 4,
                },
            ],
        };
        let card_instances = wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<CardInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &[
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x4,
                    offset: 0,
                    shader_location: 2,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x4,
                    offset: 16,
                    shader_location: 3,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x4,
                    offset: 32,
                    shader_location: 4,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x4,
                    offset: 48,
                    shader_location: 5,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x4,
                    offset: 64,
                    shader_location: 6,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32,
                    offset: 80,
                    shader_location: 7,
                },
            ],
        };

        let uniform_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("uniform_pl"),
            bind_group_layouts: &[&uniform_bgl],
            push_constant_ranges: &[],
        });
        let card_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("card_pl"),
            bind_group_layouts: &[&uniform_bgl, &texture_bgl],
            push_constant_ranges: &[],
        });

        let foliage_pipeline = build_pipeline(
            &device,
            "foliage",
            FOLIAGE_WGSL,
            &uniform_layout,
            &[quad_pos_only.clone(), foliage_instances],
            format,
            Some(wgpu::BlendState::ALPHA_BLENDING),
            false,
            None,
        );
        let sprite_pipeline = build_pipeline(
            &device,
            "sprite",
            SPRITE_WGSL,
            &uniform_layout,
            &[quad_pos_only, sprite_instances],
            format,
            Some(wgpu::BlendState::ALPHA_BLENDING),
            false,
            None,
        );
        let card_pipeline = build_pipeline(
            &device,
            "card",
            CARD_WGSL,
            &card_layout,
            &[quad_pos_uv, card_instances],
            format,
            None,
            true,
            Some(wgpu::Face::Back),
        );

        let sprite_capacity = 512;
        let sprite_vb = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("sprite_vb"),
            size: (std::mem::size_of::<SpriteInstance>() * sprite_capacity) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let card_capacity = 1024;
        let card_vb = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("card_vb"),
            size: (std::mem::size_of::<CardInstance>() * card_capacity) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        Ok(Self {
            surface,
            device,
            queue,
            config,
            width,
            height,
            depth_view,
            uniform_buffer,
            uniform_bind_group,
            texture_bgl,
            sampler,
            photo_bind_group,
            photo_texture,
            photo_layers: 1,
            quad_vb,
            foliage_pipeline,
            sprite_pipeline,
            card_pipeline,
            foliage_vb: None,
            foliage_count: 0,
            sprite_vb,
            sprite_capacity,
            card_vb,
            card_capacity,
        })
    }

    fn build_photo_array(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        texture_bgl: &wgpu::BindGroupLayout,
        sampler: &wgpu::Sampler,
        layers: u32,
    ) -> (wgpu::Texture, wgpu::BindGroup) {
        let layers = layers.max(1);
        let size = wgpu::Extent3d {
            width: PHOTO_LAYER_SIZE,
            height: PHOTO_LAYER_SIZE,
            depth_or_array_layers: layers,
        };
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("photo_array"),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });
        // neutral placeholder until each image decodes
        let gray =
            vec![180u8; (PHOTO_LAYER_SIZE * PHOTO_LAYER_SIZE * 4) as usize];
        for layer in 0..layers {
            write_layer(queue, &texture, layer, &gray);
        }
        let view = texture.create_view(&wgpu::TextureViewDescriptor {
            dimension: Some(wgpu::TextureViewDimension::D2Array),
            ..Default::default()
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("photo_bg"),
            layout: texture_bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
            ],
        });
        (texture, bind_group)
    }

    /// Rebuild the texture array for a new image count; all layers reset to
    /// the placeholder until their image decodes.
    pub fn recreate_photo_array(&mut self, layers: u32) {
        let (texture, bind_group) = Self::build_photo_array(
            &self.device,
            &self.queue,
            &self.texture_bgl,
            &self.sampler,
            layers,
        );
        self.photo_texture = texture;
        self.photo_bind_group = bind_group;
        self.photo_layers = layers.max(1);
    }

    /// Upload one decoded image (RGBA, layer-sized) into its array slice.
    pub fn write_photo_layer(&mut self, layer: u32, rgba: &[u8]) {
        if layer >= self.photo_layers {
            log::warn!("[render] dropping stale photo layer {layer}");
            return;
        }
        if rgba.len() != (PHOTO_LAYER_SIZE * PHOTO_LAYER_SIZE * 4) as usize {
            log::warn!("[render] bad photo byte length {}", rgba.len());
            return;
        }
        write_layer(&self.queue, &self.photo_texture, layer, rgba);
    }

    /// Upload the interleaved foliage records; called at startup and whenever
    /// the field is regenerated.
    pub fn set_foliage(&mut self, data: &[f32]) {
        self.foliage_count = (data.len() / 7) as u32;
        self.foliage_vb = Some(self.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("foliage_vb"),
                contents: bytemuck::cast_slice(data),
                usage: wgpu::BufferUsages::VERTEX,
            },
        ));
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.depth_view = create_depth_view(&self.device, width, height);
        }
    }

    fn ensure_instance_capacity(&mut self, sprites: usize, cards: usize) {
        if sprites > self.sprite_capacity {
            self.sprite_capacity = sprites.next_power_of_two();
            self.sprite_vb = self.device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("sprite_vb"),
                size: (std::mem::size_of::<SpriteInstance>() * self.sprite_capacity) as u64,
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            });
        }
        if cards > self.card_capacity {
            self.card_capacity = cards.next_power_of_two();
            self.card_vb = self.device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("card_vb"),
                size: (std::mem::size_of::<CardInstance>() * self.card_capacity) as u64,
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            });
        }
    }

    pub fn render(&mut self, draw: &SceneDraw) -> Result<(), wgpu::SurfaceError> {
        self.ensure_instance_capacity(draw.sprites.len(), draw.cards.len());
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        self.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&draw.uniforms));
        if !draw.sprites.is_empty() {
            self.queue
                .write_buffer(&self.sprite_vb, 0, bytemuck::cast_slice(&draw.sprites));
        }
        if !draw.cards.is_empty() {
            self.queue
                .write_buffer(&self.card_vb, 0, bytemuck::cast_slice(&draw.cards));
        }

        let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("rpass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color {
                        r: 0.012,
                        g: 0.02,
                        b: 0.05,
                        a: 1.0,
                    }),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: &self.depth_view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        // opaque cards first, then the blended billboards
        if !draw.cards.is_empty() {
            rpass.set_pipeline(&self.card_pipeline);
            rpass.set_bind_group(0, &self.uniform_bind_group, &[]);
            rpass.set_bind_group(1, &self.photo_bind_group, &[]);
            rpass.set_vertex_buffer(0, self.quad_vb.slice(..));
            rpass.set_vertex_buffer(1, self.card_vb.slice(..));
            rpass.draw(0..6, 0..(draw.cards.len() as u32));
        }
        if let Some(foliage_vb) = &self.foliage_vb {
            if self.foliage_count > 0 {
                rpass.set_pipeline(&self.foliage_pipeline);
                rpass.set_bind_group(0, &self.uniform_bind_group, &[]);
                rpass.set_vertex_buffer(0, self.quad_vb.slice(..));
                rpass.set_vertex_buffer(1, foliage_vb.slice(..));
                rpass.draw(0..6, 0..self.foliage_count);
            }
        }
        if !draw.sprites.is_empty() {
            rpass.set_pipeline(&self.sprite_pipeline);
            rpass.set_bind_group(0, &self.uniform_bind_group, &[]);
            rpass.set_vertex_buffer(0, self.quad_vb.slice(..));
            rpass.set_vertex_buffer(1, self.sprite_vb.slice(..));
            rpass.draw(0..6, 0..(draw.sprites.len() as u32));
        }
        drop(rpass);
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

fn write_layer(queue: &wgpu::Queue, texture: &wgpu::Texture, layer: u32, rgba: &[u8]) {
    queue.write_texture(
        wgpu::TexelCopyTextureInfo {
            texture,
            mip_level: 0,
            origin: wgpu::Origin3d {
                x: 0,
                y: 0,
                z: layer,
            },
            aspect: wgpu::TextureAspect::All,
        },
        rgba,
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(PHOTO_LAYER_SIZE * 4),
            rows_per_image: Some(PHOTO_LAYER_SIZE),
        },
        wgpu::Extent3d {
            width: PHOTO_LAYER_SIZE,
            height: PHOTO_LAYER_SIZE,
            depth_or_array_layers: 1,
        },
    );
}

#[allow(clippy::too_many_arguments)]
fn build_pipeline(
    device: &wgpu::Device,
    label: &str,
    shader_src: &str,
    layout: &wgpu::PipelineLayout,
    buffers: &[wgpu::VertexBufferLayout],
    format: wgpu::TextureFormat,
    blend: Option<wgpu::BlendState>,
    depth_write: bool,
    cull: Option<wgpu::Face>,
) -> wgpu::RenderPipeline {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(label),
        source: wgpu::ShaderSource::Wgsl(shader_src.into()),
    });
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(label),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers,
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState {
            cull_mode: cull,
            ..Default::default()
        },
        depth_stencil: Some(wgpu::DepthStencilState {
            format: DEPTH_FORMAT,
            depth_write_enabled: depth_write,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend,
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    })
}
