//! Counts six digit passwords in a range whose digits never decrease and that contain
//! a group of exactly two equal digits.

pub mod config;
pub mod driver;
pub mod error;
pub mod limit;
pub mod password;
pub mod validator;

pub use config::SearchConfig;
pub use driver::{run, Tally};
pub use error::Error;
pub use limit::Limit;
pub use password::{Password, WIDTH};
pub use validator::check_digits;
