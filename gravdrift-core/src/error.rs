use thiserror::Error;

/// Errors raised when building a world or a run from caller input.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimError {
    #[error("canvas must have finite, positive dimensions (got {width} x {height})")]
    InvalidCanvas { width: f32, height: f32 },

    #[error("frame duration must be finite and positive (got {0} ms)")]
    InvalidFrameDuration(f64),

    #[error("pointer event scheduled at frame {frame} but the run ends after {max_frames} frames")]
    ScriptOutOfRange { frame: u64, max_frames: u64 },
}
