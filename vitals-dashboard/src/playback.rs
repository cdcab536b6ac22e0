use log::info;
use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::Duration,
};
use tokio::{sync::mpsc, time};

/// Delay between two scripted steps
const STEP_DELAY: Duration = Duration::from_millis(1000);

/// Cool-down after the last step before the trigger re-arms
const COOLDOWN: Duration = Duration::from_millis(7000);

/// One step of the scripted emergency walkthrough
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptedStep {
    /// Offset from the trigger in milliseconds, shown next to the message
    pub offset_ms: u64,
    pub message: &'static str,
}

/// The fixed response sequence played back by the demo
///
/// This is scripted animation for the UI: it never reads the live
/// vitals feed and the feed never reacts to it
static EMERGENCY_SCRIPT: [ScriptedStep; 6] = [
    ScriptedStep {
        offset_ms: 0,
        message: "Fall detected (IMU: 35 degree tilt)",
    },
    ScriptedStep {
        offset_ms: 1000,
        message: "Abnormal vitals: HR 145 bpm, SpO2 88%",
    },
    ScriptedStep {
        offset_ms: 2000,
        message: "MQTT message relayed, cloud function triggered",
    },
    ScriptedStep {
        offset_ms: 3000,
        message: "Emergency contacts retrieved from Firestore",
    },
    ScriptedStep {
        offset_ms: 4000,
        message: "SMS and FCM notifications sent",
    },
    ScriptedStep {
        offset_ms: 5000,
        message: "Caregiver alerted successfully",
    },
];

/// Playback control for the emergency walkthrough
///
/// While a run or its cool-down is active the trigger is disarmed, so
/// the demo cannot overlap two sequences
pub struct EmergencySimulation {
    running: Arc<AtomicBool>,
    step_delay: Duration,
    cooldown: Duration,
}

impl EmergencySimulation {
    pub fn new() -> Self {
        Self::with_timing(STEP_DELAY, COOLDOWN)
    }

    /// Playback with custom pacing, used by tests to run the script fast
    pub fn with_timing(step_delay: Duration, cooldown: Duration) -> Self {
        Self {
            running: Arc::new(AtomicBool::new(false)),
            step_delay,
            cooldown,
        }
    }

    /// Whether a run or its cool-down is still in progress
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Start one playback run
    ///
    /// The first step is delivered immediately and the rest one step
    /// delay apart. Returns [`None`] while the previous run has not
    /// re-armed yet
    pub fn trigger(&self) -> Option<mpsc::UnboundedReceiver<&'static ScriptedStep>> {
        if self.running.swap(true, Ordering::SeqCst) {
            return None;
        }

        info!("emergency walkthrough started");

        let (step_tx, step_rx) = mpsc::unbounded_channel();
        let running = Arc::clone(&self.running);
        let (step_delay, cooldown) = (self.step_delay, self.cooldown);

        tokio::spawn(async move {
            for step in EMERGENCY_SCRIPT.iter() {
                if step.offset_ms > 0 {
                    time::sleep(step_delay).await;
                }

                // The UI may stop listening mid-run, the cool-down still applies
                let _ = step_tx.send(step);
            }

            // Close the step channel right away: the script is over even
            // though the trigger stays disarmed through the cool-down
            drop(step_tx);

            time::sleep(cooldown).await;
            running.store(false, Ordering::SeqCst);

            info!("emergency walkthrough re-armed");
        });

        Some(step_rx)
    }
}

impl Default for EmergencySimulation {
    fn default() -> Self {
        Self::new()
    }
}
