//! Main renderer managing wgpu state and draw submission.

use crate::{
    camera::{Camera, CameraUniform},
    draw::{DrawCommand, DrawMode, MeshHandle, MeshUploader},
    error::RenderError,
    mesh::Mesh,
    pipeline::{create_camera_bind_group_layout, create_flat_pipeline},
    vertex::InstanceData,
};
use procgen::FanMesh;
use std::sync::Arc;
use wgpu::util::DeviceExt;
use winit::window::Window;

/// Instance slots allocated up front; the buffer grows when a frame needs more.
const INITIAL_INSTANCES: u32 = 256;

/// Main renderer state.
pub struct Renderer {
    pub surface: wgpu::Surface<'static>,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    pub size: winit::dpi::PhysicalSize<u32>,
    pub window: Arc<Window>,

    flat_pipeline: wgpu::RenderPipeline,

    camera: Camera,
    camera_bind_group: wgpu::BindGroup,

    // Instance buffer: one slot per draw command
    instance_buffer: wgpu::Buffer,
    max_instances: u32,

    /// Meshes indexed by `MeshHandle`.
    meshes: Vec<Mesh>,
    clear_color: wgpu::Color,
}

impl Renderer {
    /// Create a new renderer for the given window, drawing a fixed `camera` view.
    pub async fn new(
        window: Arc<Window>,
        camera: Camera,
        vsync: bool,
        clear_color: [f32; 3],
    ) -> Result<Self, RenderError> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance.create_surface(window.clone())?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or(RenderError::NoAdapter)?;

        let info = adapter.get_info();
        log::info!("Using GPU: {} ({:?})", info.name, info.backend);

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("Main Device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: Default::default(),
                },
                None,
            )
            .await?;

        // Shader or pipeline validation failures are logged; drawing carries on.
        device.on_uncaptured_error(Box::new(|error| {
            log::error!("wgpu error: {}", error);
        }));

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(surface_caps.formats[0]);
        log::info!("Surface format: {:?}", surface_format);

        let present_mode = if vsync {
            wgpu::PresentMode::AutoVsync
        } else {
            wgpu::PresentMode::AutoNoVsync
        };

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let mut camera_uniform = CameraUniform::new();
        camera_uniform.update(&camera);
        let camera_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Camera Buffer"),
            contents: bytemuck::cast_slice(&[camera_uniform]),
            usage: wgpu::BufferUsages::UNIFORM,
        });

        let camera_bind_group_layout = create_camera_bind_group_layout(&device);
        let camera_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &camera_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_buffer.as_entire_binding(),
            }],
        });

        let flat_pipeline = create_flat_pipeline(&device, config.format, &camera_bind_group_layout);

        let max_instances = INITIAL_INSTANCES;
        let instance_buffer = create_instance_buffer(&device, max_instances);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            size,
            window,
            flat_pipeline,
            camera,
            camera_bind_group,
            instance_buffer,
            max_instances,
            meshes: Vec::new(),
            clear_color: wgpu::Color {
                r: clear_color[0] as f64,
                g: clear_color[1] as f64,
                b: clear_color[2] as f64,
                a: 1.0,
            },
        })
    }

    /// Handle window resize. The camera keeps its world size; only the surface changes.
    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.size = new_size;
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Draw one frame: clear, then execute `commands` in order, then present.
    ///
    /// Lost or outdated surfaces are reconfigured and the frame is skipped; a timed-out
    /// acquire just skips the frame.
    pub fn render(&mut self, commands: &[DrawCommand]) -> Result<(), RenderError> {
        for cmd in commands {
            match self.meshes.get(cmd.mesh.0 as usize) {
                Some(mesh) if mesh.contains(&cmd.fan) => {}
                _ => return Err(RenderError::UnknownMesh(cmd.mesh)),
            }
        }

        let output = match self.surface.get_current_texture() {
            Ok(output) => output,
            Err(e) => match surface_recovery(&e) {
                SurfaceRecovery::Reconfigure => {
                    log::warn!("Surface lost or outdated, reconfiguring");
                    self.surface.configure(&self.device, &self.config);
                    return Ok(());
                }
                SurfaceRecovery::Skip => {
                    log::debug!("Surface acquire timed out, skipping frame");
                    return Ok(());
                }
                SurfaceRecovery::Fail => return Err(e.into()),
            },
        };
        let view = output.texture.create_view(&wgpu::TextureViewDescriptor::default());

        self.ensure_instance_capacity(commands.len() as u32);
        let instances: Vec<InstanceData> = commands.iter().map(DrawCommand::instance).collect();
        if !instances.is_empty() {
            self.queue
                .write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(&instances));
        }

        let mut encoder = self.device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Flat Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            render_pass.set_pipeline(&self.flat_pipeline);
            render_pass.set_bind_group(0, &self.camera_bind_group, &[]);
            render_pass.set_vertex_buffer(1, self.instance_buffer.slice(..));

            for (i, cmd) in commands.iter().enumerate() {
                let mesh = &self.meshes[cmd.mesh.0 as usize];
                let slot = i as u32;
                match cmd.mode {
                    DrawMode::TriangleFan => {
                        render_pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
                        render_pass.set_index_buffer(
                            mesh.index_buffer.slice(..),
                            wgpu::IndexFormat::Uint32,
                        );
                        render_pass.draw_indexed(
                            0..cmd.fan.index_count(),
                            cmd.fan.first_vertex as i32,
                            slot..slot + 1,
                        );
                    }
                }
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();
        Ok(())
    }

    fn ensure_instance_capacity(&mut self, needed: u32) {
        if needed <= self.max_instances {
            return;
        }
        let capacity = needed.next_power_of_two();
        log::debug!("Growing instance buffer {} -> {}", self.max_instances, capacity);
        self.instance_buffer = create_instance_buffer(&self.device, capacity);
        self.max_instances = capacity;
    }

    /// Destroy every mesh buffer. Returns how many meshes were released.
    pub fn release_meshes(&mut self) -> usize {
        let count = self.meshes.len();
        for mesh in self.meshes.drain(..) {
            mesh.destroy();
        }
        count
    }

    /// Get window dimensions.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.config.width, self.config.height)
    }
}

impl MeshUploader for Renderer {
    fn upload_fan_mesh(&mut self, mesh: &FanMesh) -> MeshHandle {
        let handle = MeshHandle(self.meshes.len() as u32);
        self.meshes.push(Mesh::from_fan_mesh(&self.device, mesh));
        handle
    }
}

fn create_instance_buffer(device: &wgpu::Device, capacity: u32) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("Instance Buffer"),
        size: (std::mem::size_of::<InstanceData>() as u64) * capacity as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

/// What a failed frame acquire means for the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SurfaceRecovery {
    Reconfigure,
    Skip,
    Fail,
}

fn surface_recovery(error: &wgpu::SurfaceError) -> SurfaceRecovery {
    match error {
        wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => SurfaceRecovery::Reconfigure,
        wgpu::SurfaceError::Timeout => SurfaceRecovery::Skip,
        _ => SurfaceRecovery::Fail,
    }
}
