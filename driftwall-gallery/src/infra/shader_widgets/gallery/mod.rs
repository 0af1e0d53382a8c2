//! GPU-rendered gallery strip
//!
//! One full-surface quad draws the whole gallery:
//! - Sample point displaced by the cover-fitted displacement map
//! - Displaced point hit-tested against each slot mask
//! - Slot image sampled from a texture array through the inverse cover and
//!   hover transforms
//!
//! Misses are transparent so the container background shows through.

pub mod render_pipeline;
pub mod state;
pub mod textures;

use iced::{
    Event, Rectangle,
    advanced::graphics::Viewport,
    mouse, wgpu,
    widget::shader::{Pipeline as ShaderPipeline, Primitive, Program},
    window,
};
use std::sync::Arc;

use driftwall_core::constants::scroll::WHEEL_DELTA_PER_LINE;
use driftwall_core::{Gallery, Size};

use crate::messages::Message;

pub use render_pipeline::{GalleryGlobals, MAX_SLOTS, SlotUniform};
pub use state::{GalleryProgramState, Scene};
pub use textures::{GalleryTextures, LAYER_SIZE};

/// Convert a wheel event to a browser-style wheel delta.
///
/// Line notches count 120 each; pixel deltas pass through. Positive when
/// scrolling up.
pub fn wheel_delta(delta: mouse::ScrollDelta) -> f32 {
    match delta {
        mouse::ScrollDelta::Lines { y, .. } => y * WHEEL_DELTA_PER_LINE,
        mouse::ScrollDelta::Pixels { y, .. } => y,
    }
}

/// The shader program for rendering the gallery
#[derive(Debug, Clone, Copy)]
pub struct GalleryProgram<'a> {
    frame: Option<(&'a Gallery, &'a Arc<GalleryTextures>)>,
}

impl<'a> GalleryProgram<'a> {
    /// `None` renders nothing and only measures the viewport.
    pub fn new(frame: Option<(&'a Gallery, &'a Arc<GalleryTextures>)>) -> Self {
        Self { frame }
    }

    fn hovered_slot(
        gallery: &Gallery,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<usize> {
        cursor
            .position_in(bounds)
            .and_then(|local| gallery.slot_at(local.x, local.y))
    }
}

impl Program<Message> for GalleryProgram<'_> {
    type State = GalleryProgramState;
    type Primitive = GalleryPrimitive;

    fn draw(
        &self,
        _state: &Self::State,
        _cursor: mouse::Cursor,
        _bounds: Rectangle,
    ) -> Self::Primitive {
        GalleryPrimitive {
            scene: self
                .frame
                .map(|(gallery, textures)| Scene::capture(gallery, textures)),
        }
    }

    fn update(
        &self,
        state: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<iced::widget::Action<Message>> {
        if !state.measured && bounds.width > 0.0 && bounds.height > 0.0 {
            state.measured = true;
            let size = Size::new(bounds.width, bounds.height);
            return Some(iced::widget::Action::publish(
                Message::ViewportMeasured(size),
            ));
        }

        let (gallery, _) = self.frame?;

        match event {
            Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
                if !cursor.is_over(bounds) {
                    return None;
                }
                Some(iced::widget::Action::publish(Message::Wheel(
                    wheel_delta(*delta),
                )))
            }
            // Slots move under a still cursor, so re-test every frame too
            Event::Mouse(mouse::Event::CursorMoved { .. })
            | Event::Mouse(mouse::Event::CursorLeft)
            | Event::Window(window::Event::RedrawRequested(_)) => {
                let hovered = Self::hovered_slot(gallery, bounds, cursor);
                if hovered == state.hovered {
                    return None;
                }
                state.hovered = hovered;
                Some(iced::widget::Action::publish(Message::HoverChanged(
                    hovered,
                )))
            }
            _ => None,
        }
    }
}

/// The primitive that renders one gallery frame
#[derive(Debug, Clone)]
pub struct GalleryPrimitive {
    pub scene: Option<Scene>,
}

/// Textures and bind group for one uploaded texture set
#[derive(Debug)]
struct Uploaded {
    id: u64,
    bind_group: wgpu::BindGroup,
    _layers: wgpu::Texture,
    _map: wgpu::Texture,
}

/// The renderer for gallery primitives
#[derive(Debug)]
pub struct GalleryRenderer {
    render_pipeline: wgpu::RenderPipeline,
    bind_group_layout: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,
    globals_buffer: wgpu::Buffer,
    uploaded: Option<Uploaded>,
}

impl ShaderPipeline for GalleryRenderer {
    fn new(
        device: &wgpu::Device,
        _queue: &wgpu::Queue,
        format: wgpu::TextureFormat,
    ) -> Self {
        let shader =
            device.create_shader_module(wgpu::ShaderModuleDescriptor {
                label: Some("Gallery Shader"),
                source: wgpu::ShaderSource::Wgsl(
                    include_str!("../../shaders/gallery.wgsl").into(),
                ),
            });

        let texture_entry = |binding: u32,
                             view_dimension: wgpu::TextureViewDimension| {
            wgpu::BindGroupLayoutEntry {
                binding,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    sample_type: wgpu::TextureSampleType::Float {
                        filterable: true,
                    },
                    view_dimension,
                    multisampled: false,
                },
                count: None,
            }
        };

        let bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Gallery Bind Group Layout"),
                entries: &[
                    wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: None,
                        },
                        count: None,
                    },
                    wgpu::BindGroupLayoutEntry {
                        binding: 1,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Sampler(
                            wgpu::SamplerBindingType::Filtering,
                        ),
                        count: None,
                    },
                    texture_entry(2, wgpu::TextureViewDimension::D2Array),
                    texture_entry(3, wgpu::TextureViewDimension::D2),
                ],
            });

        let pipeline_layout =
            device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Gallery Pipeline Layout"),
                bind_group_layouts: &[&bind_group_layout],
                push_constant_ranges: &[],
            });

        let render_pipeline =
            device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some("Gallery Pipeline"),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    buffers: &[],
                    compilation_options: Default::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    targets: &[Some(wgpu::ColorTargetState {
                        format,
                        blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: Default::default(),
                }),
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::TriangleStrip,
                    strip_index_format: None,
                    front_face: wgpu::FrontFace::Ccw,
                    cull_mode: None,
                    unclipped_depth: false,
                    polygon_mode: wgpu::PolygonMode::Fill,
                    conservative: false,
                },
                depth_stencil: None,
                multisample: wgpu::MultisampleState {
                    count: 1,
                    mask: !0,
                    alpha_to_coverage_enabled: false,
                },
                multiview: None,
                cache: None,
            });

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("Gallery Sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        let globals_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Gallery Globals Buffer"),
            size: std::mem::size_of::<GalleryGlobals>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        GalleryRenderer {
            render_pipeline,
            bind_group_layout,
            sampler,
            globals_buffer,
            uploaded: None,
        }
    }
}

impl GalleryRenderer {
    /// Upload `textures` unless they are already resident.
    fn upload(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        textures: &GalleryTextures,
    ) {
        if self
            .uploaded
            .as_ref()
            .is_some_and(|uploaded| uploaded.id == textures.id())
        {
            return;
        }
        if textures.layer_count() == 0 {
            log::warn!("Gallery texture set {} has no layers", textures.id());
            return;
        }

        let layer_size = textures.layer_size();
        let layers = Self::create_texture(
            device,
            queue,
            "Gallery Layers",
            wgpu::TextureFormat::Rgba8UnormSrgb,
            (layer_size, layer_size),
            textures.layer_count(),
            textures.layers(),
        );

        // Displacement values are data, not colour
        let map = Self::create_texture(
            device,
            queue,
            "Gallery Displacement Map",
            wgpu::TextureFormat::Rgba8Unorm,
            textures.map_size(),
            1,
            textures.map(),
        );

        let layers_view = layers.create_view(&wgpu::TextureViewDescriptor {
            label: Some("Gallery Layers View"),
            dimension: Some(wgpu::TextureViewDimension::D2Array),
            ..Default::default()
        });
        let map_view = map.create_view(&wgpu::TextureViewDescriptor {
            label: Some("Gallery Displacement Map View"),
            dimension: Some(wgpu::TextureViewDimension::D2),
            ..Default::default()
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Gallery Bind Group"),
            layout: &self.bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: self.globals_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&self.sampler),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::TextureView(&layers_view),
                },
                wgpu::BindGroupEntry {
                    binding: 3,
                    resource: wgpu::BindingResource::TextureView(&map_view),
                },
            ],
        });

        log::debug!(
            "Uploaded gallery texture set {} ({} layers of {}px)",
            textures.id(),
            textures.layer_count(),
            layer_size
        );

        self.uploaded = Some(Uploaded {
            id: textures.id(),
            bind_group,
            _layers: layers,
            _map: map,
        });
    }

    fn create_texture(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        label: &str,
        format: wgpu::TextureFormat,
        (width, height): (u32, u32),
        layers: u32,
        data: &[u8],
    ) -> wgpu::Texture {
        let size = wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: layers,
        };

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format,
            usage: wgpu::TextureUsages::TEXTURE_BINDING
                | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            data,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * width),
                rows_per_image: Some(height),
            },
            size,
        );

        texture
    }
}

impl Primitive for GalleryPrimitive {
    type Pipeline = GalleryRenderer;

    fn prepare(
        &self,
        renderer: &mut Self::Pipeline,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        bounds: &Rectangle,
        viewport: &Viewport,
    ) {
        let Some(scene) = self.scene.as_ref() else {
            return;
        };

        renderer.upload(device, queue, &scene.textures);

        let globals = scene.globals(viewport, bounds);
        queue.write_buffer(
            &renderer.globals_buffer,
            0,
            bytemuck::cast_slice(&[globals]),
        );
    }

    fn draw(
        &self,
        renderer: &Self::Pipeline,
        render_pass: &mut wgpu::RenderPass<'_>,
    ) -> bool {
        if self.scene.is_none() {
            return false;
        }
        let Some(uploaded) = renderer.uploaded.as_ref() else {
            return false;
        };

        render_pass.set_pipeline(&renderer.render_pipeline);
        render_pass.set_bind_group(0, &uploaded.bind_group, &[]);
        render_pass.draw(0..4, 0..1);
        true
    }
}
