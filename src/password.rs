use std::fmt;

use crate::error::Error;
use crate::limit::Limit;

pub const WIDTH: usize = 6;

const MAX_VALUE: u32 = 999_999;

/// Six ASCII digits, most significant first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Password {
    digits: [u8; WIDTH],
}

impl Password {
    /// Zero-padded rendering of `value`.
    pub fn from_value(value: u32) -> Result<Self, Error> {
        if value > MAX_VALUE {
            return Err(Error::TooWide { value });
        }

        let mut digits = [b'0'; WIDTH];
        let mut rest = value;
        for i in (0..WIDTH).rev() {
            digits[i] = b'0' + (rest % 10) as u8;
            rest /= 10;
        }

        Ok(Password { digits })
    }

    pub fn digits(&self) -> &[u8; WIDTH] {
        &self.digits
    }

    /// Odometer increment: bump the last digit, carrying '9' -> '0' leftwards.
    ///
    /// Returns `Ok(false)` once the new password has reached `limit`.
    pub fn advance(&mut self, limit: &Limit) -> Result<bool, Error> {
        for i in (0..WIDTH).rev() {
            self.digits[i] += 1;

            if self.digits[i] <= b'9' {
                return Ok(!limit.reached(self));
            }

            self.digits[i] = b'0';
        }

        Err(Error::CarryOverflow {
            candidate: self.to_string(),
        })
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &d in &self.digits {
            write!(f, "{}", d as char)?;
        }
        Ok(())
    }
}
