//! Connection-gated adapter around a [`PlotterPort`].

pub use self::port::{DetachedPort, Model, PlotterOptions, PlotterPort, PortError, Units};

use crate::utils::geometry::PaperPoint;
use tracing::{info, warn};

pub(crate) mod port;

/// Forwards drawing intents to the plotter while connected and silently
/// drops them while offline.
///
/// Offline is the normal degraded state, not an error: the canvas keeps
/// working visually whether or not a plotter is attached. A port fault
/// mid-session downgrades the adapter back to offline instead of taking
/// the window down with it.
pub struct Plotter {
    port: Box<dyn PlotterPort>,
    connected: bool,
}

impl Plotter {
    pub fn new(port: Box<dyn PlotterPort>) -> Self {
        Plotter {
            port,
            connected: false,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Applies driver options and attempts a connection.
    ///
    /// Never fatal: on `Ok(false)` or a port error the session continues in
    /// offline mode with a one-line diagnostic.
    pub fn connect(&mut self, options: &PlotterOptions) -> bool {
        let attempt = self
            .port
            .apply_options(options)
            .and_then(|()| self.port.connect());

        match attempt {
            Ok(true) => {
                info!("plotter connected, model {}", options.model.id());
                self.connected = true;
            }
            Ok(false) => info!("no plotter found, drawing offline"),
            Err(err) => warn!("plotter connect failed, drawing offline: {err}"),
        }

        self.connected
    }

    /// Returns the pen to the paper origin and releases the device.
    ///
    /// Idempotent; a no-op when already offline. Failures are logged and
    /// shutdown proceeds regardless.
    pub fn disconnect(&mut self) {
        if !self.connected {
            return;
        }

        let parked = self
            .port
            .move_to(0.0, 0.0)
            .and_then(|()| self.port.disconnect());

        if let Err(err) = parked {
            warn!("plotter disconnect failed: {err}");
        }

        self.connected = false;
    }

    /// Pen-up travel to `target`. Dropped while offline.
    pub fn move_to(&mut self, target: PaperPoint) {
        if !self.connected {
            return;
        }

        if let Err(err) = self.port.move_to(target.x_cm, target.y_cm) {
            self.downgrade(err);
        }
    }

    /// Pen-down travel to `target`. Dropped while offline.
    pub fn line_to(&mut self, target: PaperPoint) {
        if !self.connected {
            return;
        }

        if let Err(err) = self.port.line_to(target.x_cm, target.y_cm) {
            self.downgrade(err);
        }
    }

    /// Unified travel: a line when the pen is down, a move otherwise.
    pub fn go_to(&mut self, target: PaperPoint, pen_down: bool) {
        if pen_down {
            self.line_to(target);
        } else {
            self.move_to(target);
        }
    }

    /// Raises or lowers the physical pen. Dropped while offline, the same
    /// gating policy as every motion call.
    pub fn set_pen(&mut self, down: bool) {
        if !self.connected {
            return;
        }

        let result = if down {
            self.port.pen_down()
        } else {
            self.port.pen_up()
        };

        if let Err(err) = result {
            self.downgrade(err);
        }
    }

    fn downgrade(&mut self, err: PortError) {
        warn!("plotter fault, continuing offline: {err}");
        self.connected = false;
    }
}
