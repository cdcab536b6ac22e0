use crate::{models::VitalsReading, utils::*};
use std::sync::Arc;

/// Inclusive heart rate bounds in `bpm`
const HEART_RATE_BPM: (u64, u64) = (62, 82);

/// Inclusive blood oxygen bounds in `%`
const SP_O2_PERCENT: (u64, u64) = (94, 98);

/// Inclusive temperature bounds in tenths of a degree
///
/// Generating in integer tenths and dividing by `10` afterwards keeps
/// the serialized value at exactly one fractional digit
const TEMPERATURE_DECI_C: (u64, u64) = (365, 371);

/// Shared handle to a reading source
///
/// The stream server takes the generator through this alias so tests
/// can substitute a deterministic sequence for the random one
pub type VitalsSource = Arc<dyn Fn() -> VitalsReading + Send + Sync>;

/// Produce one synthetic vitals sample stamped with the current time
///
/// Every field is drawn uniformly and independently of all previous
/// calls. The stream simulates sensor noise, not physiology, so no
/// smoothing is applied between consecutive readings
pub fn generate_vitals() -> VitalsReading {
    VitalsReading {
        heart_rate: random_u64(HEART_RATE_BPM.0, HEART_RATE_BPM.1) as u8,
        sp_o2: random_u64(SP_O2_PERCENT.0, SP_O2_PERCENT.1) as u8,
        temperature: random_u64(TEMPERATURE_DECI_C.0, TEMPERATURE_DECI_C.1) as f64 / 10.0,
        timestamp: now_millis(),
    }
}

/// The random generator behind a [`VitalsSource`] handle
pub fn live_source() -> VitalsSource {
    Arc::new(generate_vitals)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readings_stay_within_documented_ranges() {
        for _ in 0..1000 {
            let reading = generate_vitals();

            assert!((62..=82).contains(&reading.heart_rate));
            assert!((94..=98).contains(&reading.sp_o2));
            assert!(reading.temperature >= 36.5 && reading.temperature <= 37.1);
            assert!(reading.timestamp > 0);
        }
    }

    #[test]
    fn timestamps_never_decrease() {
        let mut previous = 0;

        for _ in 0..100 {
            let reading = generate_vitals();
            assert!(reading.timestamp >= previous);
            previous = reading.timestamp;
        }
    }

    #[test]
    fn serialized_shape_matches_the_wire_contract() {
        let reading = generate_vitals();
        let json = serde_json::to_value(&reading).unwrap();

        assert!(json.get("heartRate").is_some());
        assert!(json.get("spO2").is_some());
        assert!(json.get("temperature").is_some());
        assert!(json.get("timestamp").is_some());
    }

    #[test]
    fn temperature_serializes_with_one_fractional_digit() {
        for _ in 0..200 {
            let reading = generate_vitals();
            let text = serde_json::to_string(&reading).unwrap();

            // Pull the rendered temperature out of the JSON text since the
            // fractional-digit guarantee is about the encoding, not the value
            let rendered = text
                .split("\"temperature\":")
                .nth(1)
                .and_then(|rest| rest.split(',').next())
                .unwrap();

            let fraction = rendered.split('.').nth(1).unwrap();
            assert_eq!(fraction.len(), 1, "unexpected encoding: {rendered}");
        }
    }
}
