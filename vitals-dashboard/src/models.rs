use crate::utils::format_timestamp;
use std::collections::VecDeque;
use vitals_simulator::VitalsReading;

/// Number of readings the charts keep on screen
pub const HISTORY_CAPACITY: usize = 20;

/// Observable snapshot of the feed
///
/// `latest` stays [`None`] until the first reading arrives and
/// `connected` mirrors the live transport state
#[derive(Debug, Clone, Default)]
pub struct FeedState {
    pub latest: Option<VitalsReading>,
    pub connected: bool,
}

/// Fixed-capacity, oldest-evicted window of recent heart rate samples
/// with parallel wall-clock labels for the chart axis
#[derive(Debug)]
pub struct RollingHistory {
    capacity: usize,
    samples: VecDeque<u8>,
    labels: VecDeque<String>,
}

impl RollingHistory {
    pub fn new() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            samples: VecDeque::with_capacity(capacity),
            labels: VecDeque::with_capacity(capacity),
        }
    }

    /// Append one reading, evicting the oldest entry once full
    pub fn push(&mut self, reading: &VitalsReading) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
            self.labels.pop_front();
        }

        self.samples.push_back(reading.heart_rate);
        self.labels.push_back(format_timestamp(reading.timestamp));
    }

    /// Retained heart rate samples, oldest first
    pub fn samples(&self) -> impl Iterator<Item = u8> + '_ {
        self.samples.iter().copied()
    }

    /// Retained time labels, parallel to [`RollingHistory::samples`]
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl Default for RollingHistory {
    fn default() -> Self {
        Self::new()
    }
}
