use crate::password::Password;

/// Checks the digit rules on a password: digits never decrease, and at least one
/// group of equal digits is exactly two long. Does not check the range.
pub fn check_digits(password: &Password) -> bool {
    let mut seen_double = false;
    // repeats beyond the first digit of the current group, so a double is 1
    let mut group_counter = 0;
    let mut prev = b'0' - 1;

    for &curr in password.digits() {
        if curr < prev {
            return false;
        }

        if curr == prev {
            group_counter += 1;
        } else {
            if group_counter == 1 {
                seen_double = true;
            }
            group_counter = 0;
        }

        prev = curr;
    }

    // the last group never saw a closing digit
    seen_double || group_counter == 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(112233 => true; "all doubles")]
    #[test_case(122345 => true; "one double")]
    #[test_case(111122 => true; "double after a long group")]
    #[test_case(112222 => true; "double before a long group")]
    #[test_case(123444 => false; "triple only")]
    #[test_case(111123 => false; "leading triple")]
    #[test_case(111111 => false; "single group")]
    #[test_case(123789 => false; "no repeats")]
    #[test_case(223450 => false; "decreasing tail")]
    #[test_case(110000 => false; "decreasing after double")]
    #[test_case(0 => false; "all zeros")]
    #[test_case(12 => false; "zero group of four")]
    #[test_case(1234 => true; "padded zeros form a double")]
    fn digit_rules(value: u32) -> bool {
        check_digits(&Password::from_value(value).unwrap())
    }
}
