//! Environment overrides for property-test runs.
//!
//! Every proptest suite in the workspace reads its case count and fork mode
//! through [`ProptestRunProfile::load`], so CI can deepen or shorten all
//! suites at once. Malformed overrides are logged and ignored.

use std::env;

/// Overrides the number of cases each property runs. Must be a positive
/// integer.
pub const CASES_ENV_KEY: &str = "ARBOR_PBT_CASES";
/// Overrides whether proptest forks a subprocess per case. Accepts
/// `true`/`false`, `1`/`0`, `yes`/`no` and `on`/`off`, in any case.
pub const FORK_ENV_KEY: &str = "ARBOR_PBT_FORK";

/// Case count and fork mode for one property suite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Reads the overrides, falling back to the suite's own defaults.
    ///
    /// # Examples
    /// ```
    /// use arbor_test_support::profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(32, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self {
            cases: read_override(CASES_ENV_KEY, parse_cases).unwrap_or(default_cases),
            fork: read_override(FORK_ENV_KEY, parse_switch).unwrap_or(default_fork),
        }
    }

    /// Returns the number of cases to run per property.
    #[must_use]
    #[rustfmt::skip]
    pub const fn cases(&self) -> u32 { self.cases }

    /// Returns whether cases run in forked subprocesses.
    #[must_use]
    #[rustfmt::skip]
    pub const fn fork(&self) -> bool { self.fork }
}

/// Returns the parsed override for `key`, or `None` when it is unset or
/// malformed.
fn read_override<T>(key: &'static str, parse: fn(&str) -> Result<T, &'static str>) -> Option<T> {
    let raw = env::var(key).ok()?;
    parse(raw.trim())
        .inspect_err(|reason| {
            tracing::warn!(
                env = key,
                raw = %raw,
                reason,
                "ignoring malformed property-test override",
            );
        })
        .ok()
}

fn parse_cases(raw: &str) -> Result<u32, &'static str> {
    match raw.parse::<u32>() {
        Ok(0) => Err("case count must be positive"),
        Ok(cases) => Ok(cases),
        Err(_) => Err("case count must be an unsigned integer"),
    }
}

fn parse_switch(raw: &str) -> Result<bool, &'static str> {
    const ON: [&str; 4] = ["1", "true", "yes", "on"];
    const OFF: [&str; 4] = ["0", "false", "no", "off"];

    if ON.iter().any(|word| raw.eq_ignore_ascii_case(word)) {
        Ok(true)
    } else if OFF.iter().any(|word| raw.eq_ignore_ascii_case(word)) {
        Ok(false)
    } else {
        Err("expected true/false, 1/0, yes/no or on/off")
    }
}
