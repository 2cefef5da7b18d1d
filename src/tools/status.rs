//! Status Tool
//!
//! Runtime status of the diet service and usage instructions for assistants.

use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;
use crate::session::Session;

/// Usage instructions for AI assistants
pub const USAGE_INSTRUCTIONS: &str = r#"
# Personal Diet Tracker Instructions

## Profile
1. Call `setup_profile` with age, gender ("male"/"female"), weight_kg, height_cm
   and activity_level (1-5). Fields may be sent in several calls.
2. `calculate_calories` needs every field; `calculate_bmi` needs weight and height.

| Level | Description | Multiplier |
|-------|-------------|------------|
| 1 | Sedentary (little/no exercise) | 1.2 |
| 2 | Light (light exercise 1-3 days/week) | 1.375 |
| 3 | Moderate (moderate exercise 3-5 days/week) | 1.55 |
| 4 | Active (hard exercise 6-7 days/week) | 1.725 |
| 5 | Very Active (very hard exercise/physical job) | 1.9 |

## Logging food
- All nutrition is stored per 100 g. Log portions in grams with `log_food`.
- Names are case-insensitive. Call `list_foods` to see what is available.
- Unknown foods can be added with `add_food` (calories, protein, carbs, fat
  required; micronutrients optional).

## Reviewing the day
- `view_intake` lists today's entries with calories.
- `nutrition_summary` totals all 15 tracked nutrients plus approximate daily values.
- `clear_intake` resets the day.
"#;

/// Status information
#[derive(Debug, Serialize)]
pub struct DietStatus {
    pub build: BuildInfo,
    pub ledger_date: String,
    pub ledger_entries: usize,
    pub reference_foods: usize,
    pub profile_complete: bool,
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Tracks service start time for uptime reporting
pub struct StatusTracker {
    start_time: Instant,
}

impl StatusTracker {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
        }
    }

    /// Get the current status
    pub fn get_status(&self, session: &Session) -> DietStatus {
        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        DietStatus {
            build: BuildInfo::current(),
            ledger_date: session.ledger.date().to_string(),
            ledger_entries: session.ledger.len(),
            reference_foods: session.reference.len(),
            profile_complete: session.profile.is_complete(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}

impl Default for StatusTracker {
    fn default() -> Self {
        Self::new()
    }
}
