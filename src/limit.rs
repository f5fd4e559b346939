use crate::error::Error;
use crate::password::{Password, WIDTH};

/// Exclusive upper bound of a search, one past the last password to test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limit(Password);

impl Limit {
    pub fn after(upper: u32) -> Result<Self, Error> {
        let value = upper.checked_add(1).ok_or(Error::TooWide { value: upper })?;
        Ok(Limit(Password::from_value(value)?))
    }

    pub fn password(&self) -> &Password {
        &self.0
    }

    /// True only when every digit is at or above the limit's digit in the same position.
    ///
    /// This is deliberately not a numeric `>=`: "900000" has not reached "123456".
    pub fn reached(&self, password: &Password) -> bool {
        let mut all_over = true;
        for i in 0..WIDTH {
            all_over = all_over && password.digits()[i] >= self.0.digits()[i];
        }
        all_over
    }
}
