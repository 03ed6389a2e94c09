use std::fmt;
use thiserror::Error;

/// Returned when calendar arithmetic would leave the range of dates
/// representable by [`time::Date`]
#[derive(Copy, Clone, Debug, Eq, Error, PartialEq)]
#[error("reached the end of time")]
pub struct OutOfTimeError;

/// The text inputs of the picker, named in parse errors
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Field {
    Year,
    Hour,
    Minute,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Year => write!(f, "year"),
            Field::Hour => write!(f, "hour"),
            Field::Minute => write!(f, "minute"),
        }
    }
}

/// Reasons a picker operation was rejected.
///
/// A rejected operation never changes the picker's state.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum PickerError {
    #[error("cannot parse {field} from {text:?}")]
    Parse { field: Field, text: String },

    #[error("{field} {value} is out of range")]
    OutOfRange { field: Field, value: u8 },

    #[error("unknown month name {0:?}")]
    UnknownMonth(String),

    #[error("no day {day} in the month at offset {offset}")]
    UnknownDay { day: u8, offset: i8 },

    #[error(transparent)]
    OutOfTime(#[from] OutOfTimeError),

    #[error("time of day cannot be edited in a date-only picker")]
    DateOnly,

    #[error("picker session is already {0}")]
    Closed(&'static str),
}

impl PickerError {
    /// Returns `true` if the error was caused by malformed or out-of-range
    /// user input, as opposed to an operation the picker's state does not
    /// allow
    pub fn is_validation_failure(&self) -> bool {
        matches!(
            self,
            PickerError::Parse { .. }
                | PickerError::OutOfRange { .. }
                | PickerError::UnknownMonth(_)
                | PickerError::UnknownDay { .. }
        )
    }
}
