//! Validated lock lifetimes.

use std::time::Duration;

use serde_json::Value;

use crate::error::ValidationError;

/// Upper bound on a single lock's lifetime, in seconds.
pub const MAX_LOCK_SECONDS: u64 = 3600;

/// How long a lock stays live after acquisition.
///
/// Always strictly positive and at most [`MAX_LOCK_SECONDS`]. Fractional
/// seconds are allowed since the wire type is a JSON number.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct LockDuration(f64);

impl LockDuration {
    pub fn from_secs_f64(secs: f64) -> Result<Self, ValidationError> {
        if !secs.is_finite() || secs <= 0.0 {
            return Err(ValidationError::InvalidDuration);
        }
        if secs > MAX_LOCK_SECONDS as f64 {
            return Err(ValidationError::DurationTooLong {
                max: MAX_LOCK_SECONDS,
            });
        }
        Ok(LockDuration(secs))
    }

    /// Reads a duration out of an optional JSON field. Strings holding
    /// numbers are rejected, only JSON numbers count.
    pub fn from_json(value: Option<&Value>) -> Result<Self, ValidationError> {
        match value.and_then(Value::as_f64) {
            Some(secs) => Self::from_secs_f64(secs),
            None => Err(ValidationError::InvalidDuration),
        }
    }

    pub fn as_secs_f64(&self) -> f64 {
        self.0
    }

    pub fn as_duration(&self) -> Duration {
        Duration::from_secs_f64(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn rejects_non_positive() {
        assert_eq!(
            LockDuration::from_secs_f64(0.0),
            Err(ValidationError::InvalidDuration)
        );
        assert_eq!(
            LockDuration::from_secs_f64(-5.0),
            Err(ValidationError::InvalidDuration)
        );
        assert_eq!(
            LockDuration::from_secs_f64(f64::NAN),
            Err(ValidationError::InvalidDuration)
        );
    }

    #[test]
    fn ceiling_is_inclusive() {
        assert!(LockDuration::from_secs_f64(3600.0).is_ok());
        assert_eq!(
            LockDuration::from_secs_f64(3600.5),
            Err(ValidationError::DurationTooLong { max: 3600 })
        );
    }

    #[test]
    fn from_json_only_accepts_numbers() {
        assert_eq!(
            LockDuration::from_json(Some(&json!("5"))),
            Err(ValidationError::InvalidDuration)
        );
        assert_eq!(
            LockDuration::from_json(None),
            Err(ValidationError::InvalidDuration)
        );
        let d = LockDuration::from_json(Some(&json!(1.5))).unwrap();
        assert_eq!(d.as_duration(), Duration::from_millis(1500));
    }

    #[test]
    fn too_long_message_names_the_limit() {
        let err = LockDuration::from_secs_f64(7200.0).unwrap_err();
        assert_eq!(err.to_string(), "duration cannot exceed 3600 seconds (1 hour)");
    }

    proptest! {
        #[test]
        fn accepts_everything_in_range(secs in 0.001f64..=3600.0) {
            let d = LockDuration::from_secs_f64(secs).unwrap();
            prop_assert!(d.as_duration() > Duration::ZERO);
            prop_assert!(d.as_duration() <= Duration::from_secs(MAX_LOCK_SECONDS));
        }

        #[test]
        fn rejects_everything_above_range(secs in 3600.001f64..1.0e9) {
            prop_assert!(LockDuration::from_secs_f64(secs).is_err());
        }
    }
}
