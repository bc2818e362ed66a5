use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub enum Error {
    /// The month is not in `-1..=12`, so it can't be normalized by carrying
    /// over a single year.
    InvalidMonth(i32),
    /// Some day of the requested grid can't be represented.
    OutOfRange { year: i32, month: i32 },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMonth(month) => {
                write!(f, "invalid month {month}: expected a value in -1..=12")
            }
            Self::OutOfRange { year, month } => {
                write!(f, "month {month} of year {year} is out of the supported range")
            }
        }
    }
}

impl std::error::Error for Error {}
