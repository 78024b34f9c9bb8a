//! Software rasterization of accepted placements

/// Off-screen RGBA canvas implementing the renderer contract
pub mod canvas;

pub use canvas::CanvasRenderer;
