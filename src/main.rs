//! Aim Trainer entry point
//!
//! Opens the window, turns winit events into simulation input and runs the
//! 60 Hz loop.

use std::sync::Arc;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use aim_trainer::AppError;
use aim_trainer::consts::*;
use aim_trainer::renderer::{RenderState, scene};
use aim_trainer::sim::{GamePhase, GameState, InputEvent, TickInput, tick};

/// Game instance holding all state
struct Game {
    state: GameState,
    window: Option<Arc<Window>>,
    render_state: Option<RenderState>,
    /// Events queued since the last tick, in arrival order
    pending: Vec<InputEvent>,
    /// Last cursor position in logical pixels
    cursor: (f32, f32),
    clock_start: Instant,
    frame_interval: Duration,
    next_frame: Instant,
    /// Startup failure to report once the event loop returns
    error: Option<AppError>,
}

impl Game {
    fn new(seed: u64) -> Self {
        let now = Instant::now();
        Self {
            state: GameState::new(seed),
            window: None,
            render_state: None,
            pending: Vec::new(),
            cursor: (0.0, 0.0),
            clock_start: now,
            frame_interval: Duration::from_secs_f64(1.0 / FRAME_RATE as f64),
            next_frame: now,
            error: None,
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<(), AppError> {
        let attributes = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
            .with_resizable(false);
        let window = Arc::new(event_loop.create_window(attributes)?);

        let logical_size = (self.state.settings.width, self.state.settings.height);
        let render_state = pollster::block_on(RenderState::new(window.clone(), logical_size))?;

        self.window = Some(window);
        self.render_state = Some(render_state);
        self.clock_start = Instant::now();
        self.next_frame = self.clock_start;
        Ok(())
    }

    /// Feed queued events to one tick; true once the game has exited
    fn step(&mut self) -> bool {
        let now = self.clock_start.elapsed().as_secs_f64();
        let input = TickInput::new(std::mem::take(&mut self.pending));

        let phase_before = self.state.phase;
        tick(&mut self.state, &input, now);
        if self.state.phase != phase_before {
            log::info!("Phase {:?} -> {:?}", phase_before, self.state.phase);
        }

        self.state.phase == GamePhase::Exited
    }

    /// Run one tick and draw the result
    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        if self.step() {
            event_loop.exit();
            return;
        }

        let vertices = scene::build(&self.state);
        if let Some(ref mut render_state) = self.render_state {
            match render_state.render(&vertices) {
                Ok(_) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    render_state.reconfigure();
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of memory!");
                    event_loop.exit();
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            }
        }
    }
}

impl ApplicationHandler for Game {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.init(event_loop) {
            log::error!("Startup failed: {}", e);
            self.error = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                // Handled now: a hidden window may never see another redraw
                self.pending.push(InputEvent::Close);
                if self.step() {
                    event_loop.exit();
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                let scale = self.window.as_ref().map_or(1.0, |w| w.scale_factor());
                let logical = position.to_logical::<f32>(scale);
                self.cursor = (logical.x, logical.y);
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                ..
            } => {
                let (x, y) = self.cursor;
                self.pending.push(InputEvent::MouseDown { x, y });
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed && !event.repeat {
                    // Keys without text (arrows, F-keys) still dismiss the end screen
                    let key = event
                        .text
                        .as_ref()
                        .and_then(|t| t.chars().next())
                        .unwrap_or('\0');
                    self.pending.push(InputEvent::KeyDown(key));
                }
            }
            WindowEvent::Resized(size) => {
                if let Some(ref mut render_state) = self.render_state {
                    render_state.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => {
                self.frame(event_loop);
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        if now >= self.next_frame {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
            self.next_frame += self.frame_interval;
            // Don't try to catch up after a stall
            if self.next_frame < now {
                self.next_frame = now + self.frame_interval;
            }
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_frame));
    }
}

fn main() -> Result<(), AppError> {
    env_logger::init();
    log::info!("Aim Trainer starting...");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();
    log::info!("Game initialized with seed: {}", seed);

    let event_loop = EventLoop::new()?;
    let mut game = Game::new(seed);
    event_loop.run_app(&mut game)?;

    if let Some(e) = game.error.take() {
        return Err(e);
    }

    log::info!("Aim Trainer exited");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_close_exits_without_a_frame() {
        let mut game = Game::new(1);
        game.pending.push(InputEvent::KeyDown('e'));
        game.pending.push(InputEvent::MouseDown { x: 10.0, y: 10.0 });
        game.pending.push(InputEvent::Close);

        assert!(game.step());
        assert_eq!(game.state.phase, GamePhase::Exited);
        assert!(game.pending.is_empty());
        // Events queued ahead of the close were still applied in order
        assert_eq!(game.state.stats.clicks, 1);
    }

    #[test]
    fn test_step_keeps_running_without_close() {
        let mut game = Game::new(1);
        game.pending.push(InputEvent::KeyDown('m'));
        assert!(!game.step());
        assert_eq!(game.state.phase, GamePhase::Playing);
    }
}
