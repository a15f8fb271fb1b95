use crate::viewport::Bounds;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("raster must be at least 2x2 pixels, got {width}x{height}")]
    RasterTooSmall { width: u32, height: u32 },
    #[error("iteration budget must be at least 1")]
    ZeroIterationBudget,
    #[error("zoom factor must be finite and greater than 1, got {0}")]
    InvalidZoomFactor(f64),
    #[error("colour palette is empty")]
    EmptyPalette,
    #[error("initial bounds are degenerate: {0:?}")]
    DegenerateBounds(Bounds),

    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("no graphics adapter is compatible with the window surface")]
    NoAdapter,
    #[error("window surface supports no texture formats on this adapter")]
    IncompatibleSurface,
    #[error("failed to request graphics device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),
    #[error("failed to acquire surface texture: {0}")]
    Surface(#[from] wgpu::SurfaceError),
}
