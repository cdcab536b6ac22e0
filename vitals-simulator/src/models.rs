use serde::{Deserialize, Serialize};

/// Scheme of one synthetic vitals sample
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VitalsReading {
    /// Heart rate in `beats per minute (bpm)`
    pub heart_rate: u8,

    /// Blood oxygen saturation in `percents (%)`
    pub sp_o2: u8,

    /// Body temperature in `Celcius (C)` with one fractional digit
    pub temperature: f64,

    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
}
