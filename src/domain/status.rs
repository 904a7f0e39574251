//! Service status snapshot returned by the liveness endpoint.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use utoipa::ToSchema;

/// Service identifier reported by the status endpoint.
pub const SERVICE_NAME: &str = "devsecops-platform";

/// Status reported while the process is serving requests.
pub const STATUS_RUNNING: &str = "running";

/// Source of the current wall-clock time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Clock backed by the system UTC time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Liveness snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ServiceStatus {
    /// Always `running`.
    pub status: String,
    /// Service identifier.
    pub service: String,
    /// Current UTC time, RFC 3339 with microseconds.
    pub time: String,
}

impl ServiceStatus {
    /// Build a snapshot stamped with the clock's current time.
    pub fn capture(clock: &dyn Clock) -> Self {
        Self {
            status: STATUS_RUNNING.to_string(),
            service: SERVICE_NAME.to_string(),
            time: clock.now().to_rfc3339_opts(SecondsFormat::Micros, true),
        }
    }
}
