//! Plan Editor - Building Footprint Sketching Tool
//!
//! Orthographic viewport over a ground grid. The mouse cursor snaps to
//! grid cells; dragging with the left button stretches out a building
//! footprint that is placed on release.
//!
//! Run with: `cargo run --bin plan_editor`
//!
//! Controls:
//! - Left mouse drag: Stretch out a building, release to place
//! - Right mouse: Finish the drag early
//! - ESC: Exit

use std::sync::Arc;

use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, KeyEvent, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowAttributes, WindowId};

use glam::Vec4;

use groundplan_engine::game::config::EditorConfig;
use groundplan_engine::game::state::EditorState;
use groundplan_engine::input;
use groundplan_engine::render::{
    BloomPass, FrameTargets, GpuContext, Mesh, ScenePass, ScenePassKind,
};

const CONFIG_PATH: &str = "plan_editor.json";

// ============================================================================
// GPU RESOURCES
// ============================================================================

/// GPU state for the editor window: device/surface plus the scene and
/// bloom renderers and their offscreen targets.
struct EditorGpu {
    context: GpuContext,
    scene_pass: ScenePass,
    bloom: BloomPass,
    targets: FrameTargets,
}

impl EditorGpu {
    fn new(window: Arc<Window>) -> Self {
        let context = GpuContext::new(window);
        let format = context.surface_config.format;
        let scene_pass = ScenePass::new(&context.device, format);
        let bloom = BloomPass::new(&context.device, format);
        let targets = FrameTargets::new(
            &context.device,
            context.surface_config.width,
            context.surface_config.height,
            format,
        );

        Self {
            context,
            scene_pass,
            bloom,
            targets,
        }
    }

    fn resize(&mut self, new_size: PhysicalSize<u32>) {
        self.context.resize(new_size);
        self.targets
            .resize(&self.context.device, new_size.width, new_size.height);
    }
}

fn to_wgpu_color(color: Vec4) -> wgpu::Color {
    wgpu::Color {
        r: color.x as f64,
        g: color.y as f64,
        b: color.z as f64,
        a: color.w as f64,
    }
}

// ============================================================================
// APPLICATION
// ============================================================================

struct PlanEditorApp {
    window: Option<Arc<Window>>,
    gpu: Option<EditorGpu>,
    state: EditorState,
}

impl PlanEditorApp {
    fn new(config: EditorConfig) -> Self {
        Self {
            window: None,
            gpu: None,
            state: EditorState::new(config),
        }
    }

    fn window_size(&self) -> (u32, u32) {
        self.gpu
            .as_ref()
            .map(|g| {
                (
                    g.context.surface_config.width,
                    g.context.surface_config.height,
                )
            })
            .unwrap_or((1280, 800))
    }

    /// One frame: advance editor state, then encode the two scene
    /// submissions and the bloom chain in a single command buffer.
    fn render(&mut self) {
        self.state.update();

        let Some(gpu) = self.gpu.as_mut() else {
            return;
        };

        let output = match gpu.context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let size = PhysicalSize::new(
                    gpu.context.surface_config.width,
                    gpu.context.surface_config.height,
                );
                gpu.context.resize(size);
                return;
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                eprintln!("Out of GPU memory!");
                return;
            }
            Err(e) => {
                eprintln!("Surface error: {:?}", e);
                return;
            }
        };
        let frame_view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let config = &self.state.config;
        let (width, height) = gpu.targets.size();

        gpu.scene_pass.update(
            &gpu.context.queue,
            self.state.camera.view_proj(),
            config.light_direction,
            config.ambient,
        );
        gpu.bloom
            .update(&gpu.context.queue, width, height, &config.bloom);

        let foreground = self.state.scene.foreground_mesh(config);
        let mut base = Mesh::new();
        base.merge(self.state.scene.background_mesh());
        base.merge(&foreground);

        let mut encoder =
            gpu.context
                .device
                .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                    label: Some("Frame Encoder"),
                });

        // Pass 1: foreground only on black, feeding the bloom chain
        gpu.scene_pass.render(
            &gpu.context.device,
            &mut encoder,
            &gpu.targets.bloom_source,
            &gpu.targets.depth,
            wgpu::Color::BLACK,
            ScenePassKind::Bloom,
            &foreground,
            &[],
        );
        gpu.bloom.blur(
            &gpu.context.device,
            &mut encoder,
            &gpu.targets.bloom_source,
            &gpu.targets.blur_a,
            &gpu.targets.blur_b,
        );

        // Pass 2: full lit scene with grid lines on the paper clear
        gpu.scene_pass.render(
            &gpu.context.device,
            &mut encoder,
            &gpu.targets.base_color,
            &gpu.targets.depth,
            to_wgpu_color(config.clear_color),
            ScenePassKind::Base,
            &base,
            self.state.scene.grid_lines(),
        );

        // Composite base + blurred bloom into the swapchain
        gpu.bloom.composite(
            &gpu.context.device,
            &mut encoder,
            &gpu.targets.base_color,
            &gpu.targets.blur_b,
            &frame_view,
        );

        gpu.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();
    }
}

// ============================================================================
// APPLICATION HANDLER
// ============================================================================

impl ApplicationHandler for PlanEditorApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let attrs = WindowAttributes::default()
                .with_title("Groundplan - Plan Editor")
                .with_inner_size(PhysicalSize::new(1280, 800));
            let window = Arc::new(
                event_loop
                    .create_window(attrs)
                    .expect("Failed to create window"),
            );

            let size = window.inner_size();
            self.gpu = Some(EditorGpu::new(Arc::clone(&window)));
            self.state.resize(size.width, size.height);
            self.window = Some(window);

            println!("[PlanEditor] GPU initialized successfully");
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => event_loop.exit(),

            WindowEvent::CursorMoved { position, .. } => {
                let (width, height) = self.window_size();
                self.state
                    .mouse
                    .set_position(position.x, position.y, width, height);
            }

            WindowEvent::CursorLeft { .. } => {
                self.state.mouse.leave_window();
            }

            WindowEvent::MouseInput { button, state, .. } => {
                let mapped = match button {
                    MouseButton::Left => input::MouseButton::Primary,
                    MouseButton::Right => input::MouseButton::Secondary,
                    MouseButton::Middle => input::MouseButton::Middle,
                    _ => return,
                };
                self.state
                    .mouse
                    .set_button(mapped, state == ElementState::Pressed);
            }

            WindowEvent::Resized(new_size) => {
                if let Some(gpu) = self.gpu.as_mut() {
                    gpu.resize(new_size);
                }
                self.state.resize(new_size.width, new_size.height);
            }

            WindowEvent::RedrawRequested => {
                self.render();
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, _: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() {
    println!("===========================================");
    println!("   Groundplan - Plan Editor");
    println!("===========================================");
    println!();
    println!("Controls:");
    println!("  Left mouse drag: Stretch out a building, release to place");
    println!("  Right mouse: Finish the drag early");
    println!("  ESC: Exit");
    println!();

    let config = EditorConfig::load_or_default(CONFIG_PATH);

    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);
    let mut app = PlanEditorApp::new(config);
    event_loop.run_app(&mut app).expect("Event loop error");
}
