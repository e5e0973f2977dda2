//! The hardware-facing side of the plotter link.
//!
//! Motion planning, acceleration curves, and the wire protocol all live in
//! the device driver behind [`PlotterPort`]; this crate only ever speaks in
//! high-level intents with paper coordinates in centimeters.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PortError {
    #[error("plotter I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("no plotter attached")]
    NotAttached,
    #[error("plotter reported: {0}")]
    Device(String),
}

/// AxiDraw model table, matching the numeric identifiers the driver expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Model {
    V3 = 1,
    V3A3 = 2,
    V3Xlx = 3,
    MiniKit = 4,
    SeA1 = 5,
    SeA2 = 6,
}

impl Model {
    pub fn id(self) -> u8 {
        self as u8
    }
}

/// Working units for coordinates sent over the port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Units {
    Inches = 0,
    Centimeters = 1,
    Millimeters = 2,
}

/// Driver options applied once, before connecting.
#[derive(Debug, Clone, Copy)]
pub struct PlotterOptions {
    pub model: Model,
    pub units: Units,
    /// Acceleration rate, percent of the driver maximum.
    pub accel: u8,
    pub const_speed: bool,
    /// Pen-down travel speed, percent of the driver maximum.
    pub speed_pendown: u8,
}

impl Default for PlotterOptions {
    fn default() -> Self {
        PlotterOptions {
            model: Model::V3A3,
            units: Units::Centimeters,
            accel: 75,
            const_speed: true,
            speed_pendown: 75,
        }
    }
}

/// Capability interface to a plotter device driver.
///
/// All calls are synchronous and may block on hardware I/O for the duration
/// of the physical motion. Coordinates are centimeters from the paper
/// origin, matching [`Units::Centimeters`] in the applied options.
pub trait PlotterPort {
    /// Stages driver options. Called once, before [`connect`](Self::connect).
    fn apply_options(&mut self, options: &PlotterOptions) -> Result<(), PortError>;

    /// Attempts to open the device. `Ok(false)` means no device was found.
    fn connect(&mut self) -> Result<bool, PortError>;

    /// Releases the device.
    fn disconnect(&mut self) -> Result<(), PortError>;

    fn pen_up(&mut self) -> Result<(), PortError>;

    fn pen_down(&mut self) -> Result<(), PortError>;

    /// Pen-up travel to the given paper position.
    fn move_to(&mut self, x_cm: f64, y_cm: f64) -> Result<(), PortError>;

    /// Pen-down travel to the given paper position.
    fn line_to(&mut self, x_cm: f64, y_cm: f64) -> Result<(), PortError>;
}

/// Stand-in port used when no hardware driver is wired in.
///
/// `connect` reports that no device was found, so the canvas runs in
/// offline mode and every motion call stays gated off in the adapter.
#[derive(Debug, Default)]
pub struct DetachedPort;

impl PlotterPort for DetachedPort {
    fn apply_options(&mut self, _options: &PlotterOptions) -> Result<(), PortError> {
        Ok(())
    }

    fn connect(&mut self) -> Result<bool, PortError> {
        Ok(false)
    }

    fn disconnect(&mut self) -> Result<(), PortError> {
        Ok(())
    }

    fn pen_up(&mut self) -> Result<(), PortError> {
        Err(PortError::NotAttached)
    }

    fn pen_down(&mut self) -> Result<(), PortError> {
        Err(PortError::NotAttached)
    }

    fn move_to(&mut self, _x_cm: f64, _y_cm: f64) -> Result<(), PortError> {
        Err(PortError::NotAttached)
    }

    fn line_to(&mut self, _x_cm: f64, _y_cm: f64) -> Result<(), PortError> {
        Err(PortError::NotAttached)
    }
}
