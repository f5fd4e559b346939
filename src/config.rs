use crate::error::Error;
use crate::limit::Limit;

pub const INPUT_MIN: u32 = 357253;
pub const INPUT_MAX: u32 = 892942;

/// Inclusive range of passwords to search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub lower: u32,
    pub upper: u32,
}

impl SearchConfig {
    pub fn new(lower: u32, upper: u32) -> Self {
        SearchConfig { lower, upper }
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.lower > self.upper {
            return Err(Error::InvertedRange {
                lower: self.lower,
                upper: self.upper,
            });
        }

        Limit::after(self.upper)?;
        Ok(())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig::new(INPUT_MIN, INPUT_MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_range_is_valid() {
        let config = SearchConfig::default();
        assert_eq!(config, SearchConfig::new(357253, 892942));
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn single_value_range_is_valid() {
        assert_eq!(SearchConfig::new(111111, 111111).validate(), Ok(()));
    }

    #[test]
    fn inverted_range() {
        assert_eq!(
            SearchConfig::new(2, 1).validate(),
            Err(Error::InvertedRange { lower: 2, upper: 1 })
        );
    }

    #[test]
    fn limit_must_fit() {
        assert_eq!(SearchConfig::new(0, 999998).validate(), Ok(()));
        assert_eq!(
            SearchConfig::new(0, 999999).validate(),
            Err(Error::TooWide { value: 1_000_000 })
        );
    }
}
