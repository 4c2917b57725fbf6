use anyhow::Result;
use glam::Vec2;
use log::{debug, info};
use winit::{
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

mod core;
mod engine;
mod game;

use engine::renderer::{Camera, Viewpoint};
use game::pilot::ControllerConfig;
use game::session::Session;

/// Pixels per world unit
const CAMERA_ZOOM: f32 = 32.0;

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    info!("Starting Rusted Pilot...");

    let mut session = Session::new(ControllerConfig::from_env());

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Rusted Pilot")
        .with_inner_size(winit::dpi::LogicalSize::new(1280, 720))
        .with_resizable(true)
        .build(&event_loop)?;

    info!("Window created successfully");

    let size = window.inner_size();
    let mut camera = Camera::new(Vec2::ZERO, size.width as f32, size.height as f32);
    camera.set_zoom(CAMERA_ZOOM);

    // Main event loop
    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    info!("Close requested, shutting down...");
                    elwt.exit();
                }
                WindowEvent::Resized(physical_size) => {
                    camera.resize(physical_size.width as f32, physical_size.height as f32);
                }
                WindowEvent::KeyboardInput { event, .. } => {
                    session.input_mut().process_keyboard_event(&event);
                }
                WindowEvent::MouseInput { state, button, .. } => {
                    session.input_mut().process_mouse_button(button, state);
                }
                WindowEvent::CursorMoved { position, .. } => {
                    session.input_mut().process_cursor_moved(position.x, position.y);
                }
                WindowEvent::RedrawRequested => {
                    let frame = session.begin_frame();
                    let report = session.run_frame(frame, Some(&camera as &dyn Viewpoint));

                    let pilot = session.pilot();
                    if report.fire_pressed {
                        debug!(
                            "Pilot {} fired at {}",
                            pilot.entity_id(),
                            pilot.transform().position
                        );
                    }
                    if report.dash_pressed {
                        debug!(
                            "Pilot {} dashed at {}",
                            pilot.entity_id(),
                            pilot.transform().position
                        );
                    }
                }
                _ => {}
            },
            Event::AboutToWait => {
                // Request redraw on next frame
                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
