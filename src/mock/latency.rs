//! Artificial response delay for the in-memory backend.

use std::time::Duration;

/// Delay applied before every in-memory store call.
///
/// Models the network suspension point of a remote backend so that callers
/// exercise their loading and de-duplication paths during development.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulatedLatency(Duration);

impl SimulatedLatency {
    /// No delay.
    #[must_use]
    pub const fn none() -> Self {
        Self(Duration::ZERO)
    }

    /// Delay of the given number of milliseconds.
    #[must_use]
    pub const fn from_millis(millis: u64) -> Self {
        Self(Duration::from_millis(millis))
    }

    /// Returns the configured delay.
    #[must_use]
    pub const fn duration(self) -> Duration {
        self.0
    }

    /// Sleeps for the configured delay.
    pub async fn wait(self) {
        if !self.0.is_zero() {
            tokio::time::sleep(self.0).await;
        }
    }
}
