//! Setup-fatal error taxonomy.
//!
//! Only resource acquisition can fail terminally; everything inside the
//! simulation loop is local and self-healing (a missed detection resets the
//! raw gesture, an empty raster is a no-op).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SetupError {
    /// Camera/video acquisition failed (e.g. permission denied).
    #[error("camera unavailable: {0}")]
    Camera(String),

    /// Hand-landmark detector could not be acquired.
    #[error("hand detector unavailable: {0}")]
    Detector(String),
}

pub type Result<T> = std::result::Result<T, SetupError>;
