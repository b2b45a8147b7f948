//! Error types for the native shell
//!
//! The simulation itself has no failure modes; everything here happens
//! while bringing up the window and GPU.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to create event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("Failed to create window: {0}")]
    WindowCreation(#[from] winit::error::OsError),
    #[error("Failed to create surface: {0}")]
    SurfaceCreation(String),
    #[error("Failed to get adapter: {0}")]
    AdapterNotFound(String),
    #[error("Failed to create device: {0}")]
    DeviceCreation(String),
    #[error("Surface reports no supported formats")]
    NoSurfaceFormat,
}
