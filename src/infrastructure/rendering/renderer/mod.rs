//! wgpu renderer drawing the scene onto a canvas.
//!
//! Runs on WebGPU when the browser exposes `navigator.gpu` and on WebGL2
//! otherwise. GPU buffers are rebuilt only when the scene upload key changes;
//! the camera uniform is rewritten every frame.

use crate::domain::{
    errors::AppError,
    logging::{LogComponent, get_logger},
    scene::{Scene, draw_geometry},
};
use crate::infrastructure::rendering::gpu_structures::{
    CameraUniforms, GpuGeometry, NodeUniforms, ShapeVertex,
};
use gloo::utils::document;
use std::collections::VecDeque;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::HtmlCanvasElement;
use wgpu::util::DeviceExt;

mod initialization;
mod performance;
mod render_loop;

pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth24Plus;

/// GPU resources of one scene node
struct GpuNode {
    vertex_buffer: wgpu::Buffer,
    index_buffer: Option<wgpu::Buffer>,
    draw_count: u32,
    topology: wgpu::PrimitiveTopology,
    node_bind_group: wgpu::BindGroup,
    // Keeps the uniform alive for as long as the bind group references it
    _node_buffer: wgpu::Buffer,
}

pub struct SceneRenderer {
    width: u32,
    height: u32,
    strip_parity: bool,

    // WGPU state
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    depth_view: wgpu::TextureView,

    // One pipeline per topology; both share the shader and layouts
    list_pipeline: wgpu::RenderPipeline,
    strip_pipeline: wgpu::RenderPipeline,
    camera_buffer: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,
    node_bind_group_layout: wgpu::BindGroupLayout,

    // 🗄️ Uploaded scene
    nodes: Vec<GpuNode>,
    uploaded_key: Option<(u64, u64)>,

    // ⏱️ Performance metrics
    last_frame_time: f64,
    fps_log: VecDeque<f64>,
}

impl SceneRenderer {
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}
