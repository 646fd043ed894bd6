use std::time::Duration;

use types::EntityKind;

use crate::config::{LatencyConfig, MAX_LATENCY_SCALE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    List,
    Get,
    /// Entity-specific lookups: search, by employee, by date range.
    Query,
    Create,
    Update,
    Delete,
    /// Leave approval or rejection.
    Decide,
}

/// Artificial delay in front of every service call, mimicking a round trip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Latency {
    enabled: bool,
    scale: f64,
}

impl Latency {
    /// No delay at all; what tests use.
    pub fn none() -> Self {
        Self {
            enabled: false,
            scale: 0.0,
        }
    }

    pub fn from_config(config: &LatencyConfig) -> Self {
        Self {
            enabled: config.enabled,
            scale: config.scale.max(0.0).min(MAX_LATENCY_SCALE),
        }
    }

    pub fn delay(&self, kind: EntityKind, op: Op) -> Duration {
        if !self.enabled || self.scale <= 0.0 {
            return Duration::ZERO;
        }
        Duration::from_millis(base_millis(kind, op)).mul_f64(self.scale)
    }

    pub async fn pause(&self, kind: EntityKind, op: Op) {
        let delay = self.delay(kind, op);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

impl Default for Latency {
    fn default() -> Self {
        Self::from_config(&LatencyConfig::default())
    }
}

fn base_millis(kind: EntityKind, op: Op) -> u64 {
    match kind {
        // Reference data answers a little faster.
        EntityKind::Department | EntityKind::Role => match op {
            Op::List => 200,
            Op::Get => 150,
            Op::Query => 200,
            Op::Create | Op::Update | Op::Decide => 300,
            Op::Delete => 250,
        },
        EntityKind::Employee | EntityKind::Attendance | EntityKind::LeaveRequest => match op {
            Op::List => 300,
            Op::Get => 200,
            Op::Query => 250,
            Op::Create | Op::Update => 400,
            Op::Delete | Op::Decide => 300,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_delays() {
        let latency = Latency::default();
        assert_eq!(
            latency.delay(EntityKind::Employee, Op::List),
            Duration::from_millis(300)
        );
        assert_eq!(
            latency.delay(EntityKind::Role, Op::Get),
            Duration::from_millis(150)
        );
        assert_eq!(
            latency.delay(EntityKind::LeaveRequest, Op::Decide),
            Duration::from_millis(300)
        );
    }

    #[test]
    fn scale_multiplies() {
        let latency = Latency::from_config(&LatencyConfig {
            enabled: true,
            scale: 0.5,
        });
        assert_eq!(
            latency.delay(EntityKind::Attendance, Op::Create),
            Duration::from_millis(200)
        );
    }

    #[test]
    fn scale_is_capped() {
        let latency = Latency::from_config(&LatencyConfig {
            enabled: true,
            scale: 1e30,
        });
        assert_eq!(
            latency.delay(EntityKind::Employee, Op::Create),
            Duration::from_millis(400).mul_f64(MAX_LATENCY_SCALE)
        );
    }

    #[test]
    fn disabled_is_zero() {
        assert!(Latency::none().delay(EntityKind::Employee, Op::Update).is_zero());
    }
}
