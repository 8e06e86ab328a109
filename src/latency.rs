// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Simulated network latency.
//!
//! The engines answer from memory, but the pipeline they stand in for talks
//! to a remote index. A [`LatencyModel`] decides how long each call waits
//! before resolving. Use [`Immediate`] when only the results matter; tests
//! that want the real delays run on tokio's paused clock.

use crate::config::LatencyConfig;
use std::fmt;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Search,
    Suggest,
}

pub trait LatencyModel: Send + Sync + fmt::Debug {
    /// How long `op` waits before resolving.
    fn delay(&self, op: Operation) -> Duration;
}

/// Resolve every call without waiting.
#[derive(Debug, Clone, Copy, Default)]
pub struct Immediate;

impl LatencyModel for Immediate {
    fn delay(&self, _op: Operation) -> Duration {
        Duration::ZERO
    }
}

impl LatencyModel for LatencyConfig {
    fn delay(&self, op: Operation) -> Duration {
        match op {
            Operation::Search => self.search_delay(),
            Operation::Suggest => self.suggest_delay(),
        }
    }
}

/// Wait out the model's delay for `op`. Zero delays skip the timer entirely.
pub(crate) async fn simulate(model: &dyn LatencyModel, op: Operation) {
    let delay = model.delay(op);
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}
