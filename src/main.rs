use std::time::Instant;

use log::{debug, error, info, warn};
use winit::{
    dpi::{PhysicalPosition, PhysicalSize},
    event::{ElementState, Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

use crate::{config::Config, display::Display, error::Error, explorer::Explorer};

mod colour;
mod config;
mod display;
mod error;
mod escape;
mod explorer;
mod pixel;
mod raster;
mod screen;
mod texture;
mod uniform;
mod viewport;

fn main() {
    env_logger::init();

    if let Err(error) = run(Config::default()) {
        error!("{}", error);
        std::process::exit(1);
    }
}

fn run(config: Config) -> Result<(), Error> {
    let mut explorer = Explorer::new(config)?;
    let raster_size = explorer.raster().size();
    let poll_interval = explorer.config().poll_interval;

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(&explorer.config().title)
        .with_inner_size(PhysicalSize::new(raster_size.width, raster_size.height))
        .with_resizable(false)
        .build(&event_loop)?;

    let mut display = Display::new(&window, raster_size)?;
    display.upload(explorer.raster());

    info!(
        "rendering {}x{} pixels of {:?}",
        raster_size.width,
        raster_size.height,
        explorer.viewport().bounds()
    );

    let mut cursor: Option<PhysicalPosition<f64>> = None;

    event_loop.run(move |event, _, control_flow| {
        if !matches!(*control_flow, ControlFlow::ExitWithCode(_)) {
            control_flow.set_wait_until(Instant::now() + poll_interval);
        }

        match event {
            Event::WindowEvent { window_id, event } if window_id == window.id() => match event {
                WindowEvent::CloseRequested => {
                    control_flow.set_exit();
                }
                WindowEvent::Resized(size) => {
                    display.resize(size);
                    window.request_redraw();
                }
                WindowEvent::CursorMoved { position, .. } => {
                    cursor = Some(position);
                }
                WindowEvent::CursorLeft { .. } => {
                    cursor = None;
                }
                WindowEvent::MouseInput {
                    state: ElementState::Pressed,
                    button,
                    ..
                } => {
                    let Some(position) = cursor else {
                        debug!("ignoring {:?} press with no cursor position", button);
                        return;
                    };

                    let surface_size = display.surface_size();
                    let (x, y) = surface_size.scale_point(position.x, position.y, raster_size);
                    explorer.click(x, y);
                    display.upload(explorer.raster());
                    window.request_redraw();
                }
                _ => {}
            },
            Event::RedrawRequested(window_id) if window_id == window.id() => {
                match display.present() {
                    Ok(()) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        display.reconfigure();
                        window.request_redraw();
                    }
                    Err(wgpu::SurfaceError::Timeout) => {
                        warn!("timed out waiting for the next frame");
                    }
                    Err(error @ wgpu::SurfaceError::OutOfMemory) => {
                        error!("{}", Error::from(error));
                        control_flow.set_exit_with_code(1);
                    }
                }
            }
            Event::LoopDestroyed => {
                if let Err(error) = display.clear() {
                    warn!("failed to clear the window on exit: {}", error);
                }
                info!(
                    "exiting after {} zooms",
                    explorer.viewport().zoom_count()
                );
            }
            _ => {}
        }
    })
}
