use serde::{Deserialize, Serialize};
use std::fmt;

use crate::BookingResult;

/// Two-valued status string handed to request-level callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Outcome {
    Success,
    Failure,
}

impl<T> From<&BookingResult<T>> for Outcome {
    fn from(result: &BookingResult<T>) -> Self {
        match result {
            Ok(_) => Outcome::Success,
            Err(_) => Outcome::Failure,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success => f.write_str("SUCCESS"),
            Outcome::Failure => f.write_str("FAILURE"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BookingError;

    #[test]
    fn test_outcome_from_result() {
        let ok: BookingResult<()> = Ok(());
        let err: BookingResult<()> = Err(BookingError::flight_not_found(9));

        assert_eq!(Outcome::from(&ok), Outcome::Success);
        assert_eq!(Outcome::from(&err).to_string(), "FAILURE");
        assert_eq!(serde_json::to_string(&Outcome::Success).unwrap(), "\"SUCCESS\"");
    }
}
