use anyhow::Result;
use advent_core::CalendarDate;

pub mod checks;

#[derive(Debug, Clone, Copy)]
pub struct ScenarioCtx {
    /// Date used by scenarios that follow the clock.
    pub today: CalendarDate,
    pub verbose: bool,
}

/// A named check over the state model. `run` returns how many assertions held.
#[derive(Clone, Copy)]
pub struct Scenario {
    pub key: &'static str,
    pub description: &'static str,
    run: fn(&ScenarioCtx) -> Result<usize>,
}

impl Scenario {
    const fn new(
        key: &'static str,
        description: &'static str,
        run: fn(&ScenarioCtx) -> Result<usize>,
    ) -> Self {
        Self {
            key,
            description,
            run,
        }
    }

    /// # Errors
    ///
    /// Returns the first failed expectation.
    pub fn run(&self, ctx: &ScenarioCtx) -> Result<usize> {
        (self.run)(ctx)
    }
}

const SCENARIOS: &[Scenario] = &[
    Scenario::new(
        "smoke",
        "Open every door unlocked on the test date and check progress",
        checks::smoke,
    ),
    Scenario::new(
        "gate",
        "Lock rule over every month, day and door",
        checks::gate,
    ),
    Scenario::new(
        "persistence",
        "Opened doors survive a reload from the same store",
        checks::persistence,
    ),
    Scenario::new(
        "reset",
        "Reset empties memory and the stored record",
        checks::reset,
    ),
    Scenario::new(
        "replay",
        "Re-activating an opened door reveals again without duplicating",
        checks::replay,
    ),
    Scenario::new(
        "season",
        "Visit December 1 through 24, reloading each day",
        checks::season,
    ),
    Scenario::new(
        "malformed",
        "Garbage stored records load as an empty calendar",
        checks::malformed,
    ),
];

#[must_use]
pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    SCENARIOS.iter().map(|s| (s.key, s.description)).collect()
}

#[must_use]
pub fn get_scenario(key: &str) -> Option<Scenario> {
    SCENARIOS.iter().find(|s| s.key == key).copied()
}

#[must_use]
pub fn all_keys() -> Vec<String> {
    SCENARIOS.iter().map(|s| s.key.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(day: u8, month: u8) -> ScenarioCtx {
        ScenarioCtx {
            today: CalendarDate::new(day, month).unwrap(),
            verbose: false,
        }
    }

    #[test]
    fn every_scenario_passes_in_and_out_of_season() {
        for today in [ctx(19, 12), ctx(1, 12), ctx(31, 12), ctx(15, 6)] {
            for scenario in SCENARIOS {
                let checks = scenario
                    .run(&today)
                    .unwrap_or_else(|e| panic!("{} failed on {}: {e:#}", scenario.key, today.today));
                assert!(checks > 0, "{} ran no checks", scenario.key);
            }
        }
    }

    #[test]
    fn lookup_by_key() {
        assert!(get_scenario("season").is_some());
        assert!(get_scenario("nope").is_none());
        assert_eq!(list_scenarios().len(), all_keys().len());
    }
}
