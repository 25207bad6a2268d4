//! Window creation and the event loop.

use std::sync::Arc;

use anyhow::Result;
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowAttributes},
};

use crate::gfx::vertex::Vertex;
use crate::gfx::{Camera, RenderContext};

const WINDOW_SIZE: u32 = 512;

/// Application state: the static scene geometry plus the GPU context once
/// the window exists. Two states only: running until a quit key or close
/// request, then terminated.
pub struct ViewerApp {
    title: String,
    vertices: Vec<Vertex>,
    camera: Camera,
    window: Option<Arc<Window>>,
    render: Option<RenderContext>,
}

impl ViewerApp {
    pub fn new(title: String, vertices: Vec<Vertex>, camera: Camera) -> Self {
        Self {
            title,
            vertices,
            camera,
            window: None,
            render: None,
        }
    }

    /// Runs the event loop until the user quits.
    pub fn run(mut self) -> Result<()> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);
        event_loop.run_app(&mut self)?;
        Ok(())
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attributes = WindowAttributes::default()
            .with_title(&self.title)
            .with_inner_size(winit::dpi::LogicalSize::new(WINDOW_SIZE, WINDOW_SIZE));

        if let Ok(window) = event_loop.create_window(attributes) {
            let window = Arc::new(window);
            self.window = Some(window.clone());

            let (width, height) = window.inner_size().into();
            let render = pollster::block_on(RenderContext::new(
                window,
                width,
                height,
                &self.vertices,
                &self.camera,
            ));
            self.render = Some(render);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        let Some(render) = self.render.as_mut() else {
            return;
        };

        match event {
            WindowEvent::KeyboardInput {
                event:
                    winit::event::KeyEvent {
                        physical_key: PhysicalKey::Code(key_code),
                        ..
                    },
                ..
            } => {
                // 'q', 'Q', or Escape quits; everything else is a no-op.
                if matches!(key_code, KeyCode::KeyQ | KeyCode::Escape) {
                    event_loop.exit();
                }
            }
            WindowEvent::Resized(PhysicalSize { width, height }) => {
                render.resize(width, height);
            }
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::RedrawRequested => {
                render.render_frame();
            }
            _ => (),
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }
}
