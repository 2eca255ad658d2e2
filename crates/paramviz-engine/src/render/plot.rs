use std::collections::HashMap;
use std::ops::Range;

use bytemuck::{Pod, Zeroable};
use glam::Mat4;
use paramviz_geom::Topology;
use paramviz_geom::vertex::{COLOR_OFFSET, FLOATS_PER_VERTEX, POSITION_OFFSET};
use wgpu::util::DeviceExt;

use crate::device::DEPTH_FORMAT;
use crate::render::{RenderCtx, RenderTarget};

const F32_SIZE: u64 = std::mem::size_of::<f32>() as u64;

/// Uniform block of the plot shader. Matrices are column-major.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct Matrices {
    pub projection: [[f32; 4]; 4],
    pub view: [[f32; 4]; 4],
    pub model: [[f32; 4]; 4],
}

impl Matrices {
    pub fn new(projection: Mat4, view: Mat4, model: Mat4) -> Self {
        Self {
            projection: projection.to_cols_array_2d(),
            view: view.to_cols_array_2d(),
            model: model.to_cols_array_2d(),
        }
    }
}

/// One draw call: a vertex range of the uploaded buffer and how to assemble it.
#[derive(Debug, Clone)]
pub struct DrawRequest {
    pub topology: Topology,
    pub vertices: Range<u32>,
    pub matrices: Matrices,
}

/// Attribute layout of the flattened vertex buffer.
///
/// Stride 6 floats; location 0 = position at float 0, location 1 = color at
/// float 3.
pub fn vertex_layout() -> wgpu::VertexBufferLayout<'static> {
    const ATTRS: [wgpu::VertexAttribute; 2] = [
        wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x3,
            offset: POSITION_OFFSET as u64 * F32_SIZE,
            shader_location: 0,
        },
        wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x3,
            offset: COLOR_OFFSET as u64 * F32_SIZE,
            shader_location: 1,
        },
    ];

    wgpu::VertexBufferLayout {
        array_stride: FLOATS_PER_VERTEX as u64 * F32_SIZE,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &ATTRS,
    }
}

fn primitive_topology(topology: Topology) -> wgpu::PrimitiveTopology {
    match topology {
        Topology::PointList => wgpu::PrimitiveTopology::PointList,
        Topology::LineStrip => wgpu::PrimitiveTopology::LineStrip,
        Topology::TriangleList => wgpu::PrimitiveTopology::TriangleList,
    }
}

/// Draws ranges of a single uploaded vertex buffer.
///
/// Pipelines are built lazily, one per topology, and rebuilt if the surface
/// format changes.
#[derive(Default)]
pub struct PlotRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipelines: HashMap<Topology, wgpu::RenderPipeline>,
    shader: Option<wgpu::ShaderModule>,
    pipeline_layout: Option<wgpu::PipelineLayout>,

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    matrices_ubo: Option<wgpu::Buffer>,

    vertex_buffer: Option<wgpu::Buffer>,
    vertex_count: u32,
}

impl PlotRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of vertices in the uploaded buffer.
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    /// Uploads a flattened vertex buffer, replacing any previous one.
    pub fn upload(&mut self, ctx: &RenderCtx<'_>, floats: &[f32]) {
        debug_assert_eq!(floats.len() % FLOATS_PER_VERTEX, 0);

        self.vertex_count = (floats.len() / FLOATS_PER_VERTEX) as u32;
        self.vertex_buffer = (!floats.is_empty()).then(|| {
            ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("paramviz plot vbo"),
                contents: bytemuck::cast_slice(floats),
                usage: wgpu::BufferUsages::VERTEX,
            })
        });

        log::debug!("uploaded {} vertices ({} floats)", self.vertex_count, floats.len());
    }

    /// Records one draw of `request` into `target`.
    ///
    /// Ranges past the uploaded buffer are clipped; an empty range draws nothing.
    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, request: &DrawRequest) {
        let end = request.vertices.end.min(self.vertex_count);
        let start = request.vertices.start.min(end);
        if start == end {
            return;
        }

        self.ensure_layout(ctx);
        self.ensure_bindings(ctx);
        self.ensure_pipeline(ctx, request.topology);

        if let Some(ubo) = self.matrices_ubo.as_ref() {
            ctx.queue.write_buffer(ubo, 0, bytemuck::bytes_of(&request.matrices));
        }

        let Some(pipeline) = self.pipelines.get(&request.topology) else { return };
        let Some(bind_group) = self.bind_group.as_ref() else { return };
        let Some(vbo) = self.vertex_buffer.as_ref() else { return };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("paramviz plot pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: target.depth_view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.set_vertex_buffer(0, vbo.slice(..));
        rpass.draw(start..end, 0..1);
    }

    fn ensure_layout(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_layout.is_some() {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("paramviz plot shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/plot.wgsl").into()),
        });

        let bind_group_layout = ctx
            .device
            .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("paramviz plot bgl"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: wgpu::BufferSize::new(
                            std::mem::size_of::<Matrices>() as u64,
                        ),
                    },
                    count: None,
                }],
            });

        let pipeline_layout = ctx
            .device
            .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("paramviz plot pipeline layout"),
                bind_group_layouts: &[&bind_group_layout],
                immediate_size: 0,
            });

        self.shader = Some(shader);
        self.bind_group_layout = Some(bind_group_layout);
        self.pipeline_layout = Some(pipeline_layout);
    }

    fn ensure_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.bind_group.is_some() {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else { return };

        let ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("paramviz plot matrices ubo"),
            size: std::mem::size_of::<Matrices>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("paramviz plot bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: ubo.as_entire_binding(),
            }],
        });

        self.matrices_ubo = Some(ubo);
        self.bind_group = Some(bind_group);
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>, topology: Topology) {
        if self.pipeline_format != Some(ctx.surface_format) {
            self.pipelines.clear();
            self.pipeline_format = Some(ctx.surface_format);
        }
        if self.pipelines.contains_key(&topology) {
            return;
        }

        let (Some(shader), Some(layout)) = (self.shader.as_ref(), self.pipeline_layout.as_ref())
        else {
            return;
        };

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(&format!("paramviz plot pipeline ({topology:?})")),
            layout: Some(layout),

            vertex: wgpu::VertexState {
                module: shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[vertex_layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: primitive_topology(topology),
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                // The grid emits both windings.
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        log::debug!("built plot pipeline for {topology:?}");
        self.pipelines.insert(topology, pipeline);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_matches_flattened_buffer() {
        let layout = vertex_layout();
        assert_eq!(layout.array_stride, 24);
        assert_eq!(layout.attributes[0].offset, 0);
        assert_eq!(layout.attributes[0].shader_location, 0);
        assert_eq!(layout.attributes[1].offset, 12);
        assert_eq!(layout.attributes[1].shader_location, 1);
    }

    #[test]
    fn matrices_are_column_major() {
        let t = Mat4::from_translation(glam::Vec3::new(1.0, 2.0, 3.0));
        let m = Matrices::new(Mat4::IDENTITY, Mat4::IDENTITY, t);
        assert_eq!(m.model[3], [1.0, 2.0, 3.0, 1.0]);
        assert_eq!(std::mem::size_of::<Matrices>(), 192);
    }

    #[test]
    fn topology_mapping() {
        assert_eq!(primitive_topology(Topology::LineStrip), wgpu::PrimitiveTopology::LineStrip);
        assert_eq!(
            primitive_topology(Topology::TriangleList),
            wgpu::PrimitiveTopology::TriangleList
        );
    }
}
