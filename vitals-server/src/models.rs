use chrono::Utc;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Sequence behind emergency event identifiers
///
/// A wall-clock id alone can repeat within one millisecond, the
/// counter keeps identifiers fresh and strictly increasing
static EMERGENCY_SEQ: AtomicU64 = AtomicU64::new(1);

/// Scheme of the response to a triggered emergency
#[derive(Serialize, Debug)]
pub struct EmergencyEvent {
    pub id: String,

    #[serde(rename = "type")]
    pub kind: String,

    pub vitals: EmergencyVitals,

    /// Milliseconds since the Unix epoch
    pub timestamp: i64,

    pub response: String,
}

/// Vitals snapshot attached to an emergency event
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyVitals {
    pub heart_rate: u8,
    pub sp_o2: u8,
    pub temperature: f64,
}

impl EmergencyEvent {
    /// Synthesize the canned fall-detection event with a fresh identifier
    ///
    /// Everything except `id` and `timestamp` is fixed: the endpoint
    /// demonstrates the alert flow, it does not observe real sensors
    pub fn synthesize() -> Self {
        let sequence = EMERGENCY_SEQ.fetch_add(1, Ordering::Relaxed);

        EmergencyEvent {
            id: format!("emergency-{sequence}"),
            kind: "fall_detection".to_string(),
            vitals: EmergencyVitals {
                heart_rate: 145,
                sp_o2: 88,
                temperature: 37.2,
            },
            timestamp: Utc::now().timestamp_millis(),
            response: "Multi-channel alert sent".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synthesized_events_have_increasing_identifiers() {
        let first = EmergencyEvent::synthesize();
        let second = EmergencyEvent::synthesize();

        let number = |event: &EmergencyEvent| {
            event
                .id
                .trim_start_matches("emergency-")
                .parse::<u64>()
                .expect("numeric suffix")
        };

        assert!(number(&second) > number(&first));
        assert!(second.timestamp >= first.timestamp);
    }

    #[test]
    fn synthesized_events_carry_the_fixed_alert_vitals() {
        let event = EmergencyEvent::synthesize();

        assert_eq!(event.kind, "fall_detection");
        assert_eq!(event.vitals.heart_rate, 145);
        assert_eq!(event.vitals.sp_o2, 88);
        assert_eq!(event.vitals.temperature, 37.2);
        assert_eq!(event.response, "Multi-channel alert sent");
    }
}
