//! Wall-clock access for the `date` command and RNG seeding.

#[cfg(not(target_arch = "wasm32"))]
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of the current time.
pub trait Clock {
    /// Current unix timestamp in milliseconds.
    fn now_ms(&self) -> u64;

    /// Human-readable local date and time.
    fn now_text(&self) -> String;
}

/// Host clock: `js_sys::Date` in the browser, the system clock elsewhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        #[cfg(target_arch = "wasm32")]
        {
            js_sys::Date::now().max(0.0) as u64
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_millis() as u64
        }
    }

    fn now_text(&self) -> String {
        #[cfg(target_arch = "wasm32")]
        {
            String::from(js_sys::Date::new_0().to_string())
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            chrono::Local::now()
                .format("%a %b %d %Y %H:%M:%S GMT%z")
                .to_string()
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Clock pinned to one instant.
    pub(crate) struct FixedClock;

    impl Clock for FixedClock {
        fn now_ms(&self) -> u64 {
            1_700_000_000_000
        }

        fn now_text(&self) -> String {
            "Tue Nov 14 2023 22:13:20 GMT+0000".to_string()
        }
    }

    #[test]
    fn system_clock_reports_a_plausible_time() {
        let clock = SystemClock;
        assert!(clock.now_ms() > 1_600_000_000_000);
        assert!(clock.now_text().contains("GMT"));
    }
}
