//! Visibility port: how much of a counter's region is on screen.

use std::future::Future;

use tokio::sync::mpsc;

/// Stream of intersection ratios (`0.0..=1.0`) for one observed region.
///
/// Dropping the source stops the observation.
pub trait VisibilitySource {
    /// Wait for the next ratio. `None` once the observed region is gone.
    fn next_ratio(&mut self) -> impl Future<Output = Option<f64>> + Send;
}

impl VisibilitySource for mpsc::Receiver<f64> {
    fn next_ratio(&mut self) -> impl Future<Output = Option<f64>> + Send {
        self.recv()
    }
}

impl VisibilitySource for mpsc::UnboundedReceiver<f64> {
    fn next_ratio(&mut self) -> impl Future<Output = Option<f64>> + Send {
        self.recv()
    }
}
