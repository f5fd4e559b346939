use std::fmt;

use tracing::{debug, info, trace};

use crate::config::SearchConfig;
use crate::error::Error;
use crate::limit::Limit;
use crate::password::Password;
use crate::validator::check_digits;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub checked: u32,
    pub possibilities: u32,
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Matches: {}/{}", self.possibilities, self.checked)
    }
}

/// Tests every password in the configured range, the lower bound first.
pub fn run(config: &SearchConfig) -> Result<Tally, Error> {
    config.validate()?;

    let mut password = Password::from_value(config.lower)?;
    let limit = Limit::after(config.upper)?;
    let mut tally = Tally::default();

    debug!(start = %password, limit = %limit.password(), "searching passwords");

    loop {
        tally.checked += 1;
        if check_digits(&password) {
            trace!(%password, "match");
            tally.possibilities += 1;
        }

        if !password.advance(&limit)? {
            break;
        }
    }

    info!(
        checked = tally.checked,
        possibilities = tally.possibilities,
        "search finished"
    );

    Ok(tally)
}
