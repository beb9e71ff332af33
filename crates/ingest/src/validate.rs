use clima_config::LimitsConfig;
use clima_core::Sample;
use std::fmt;

/// Outcome of running one raw reading through validation.
///
/// Producers inspect the tag: `Accepted` carries the sample to append,
/// `Rejected` carries the reason for the log line.  Nothing here panics,
/// whatever the payload looks like.
#[derive(Debug, Clone, PartialEq)]
pub enum Ingest {
    Accepted(Sample),
    Rejected(RejectReason),
}

/// Why a reading was discarded.
#[derive(Debug, Clone, PartialEq)]
pub enum RejectReason {
    /// The payload did not start with two numeric comma-separated fields.
    Malformed,
    /// Parsed fine but outside the configured sensor bounds.
    OutOfRange { temperature: f64, humidity: f64 },
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::Malformed => write!(f, "malformed payload"),
            RejectReason::OutOfRange {
                temperature,
                humidity,
            } => write!(f, "reading out of range (t={temperature}, h={humidity})"),
        }
    }
}

/// Validate a raw feed payload of the form `"<temp>,<humidity>,..."`.
///
/// Only the first two comma-separated fields matter; extra fields are
/// ignored.  The timestamp is assigned at validation time — the feed has no
/// authoritative sample clock, so local capture time is the instant of
/// record.
pub fn ingest_message(raw: &str, limits: &LimitsConfig) -> Ingest {
    let mut fields = raw.split(',');
    let (Some(t), Some(h)) = (fields.next(), fields.next()) else {
        return Ingest::Rejected(RejectReason::Malformed);
    };

    match (t.trim().parse::<f64>(), h.trim().parse::<f64>()) {
        (Ok(temperature), Ok(humidity)) => ingest_reading(temperature, humidity, limits),
        _ => Ingest::Rejected(RejectReason::Malformed),
    }
}

/// Validate an already-numeric reading.  The simulator goes through here
/// too, so every producer shares one bounds check.
///
/// Out-of-range values are rejected, never clamped — they are treated as
/// sensor or transport noise, not data to correct.  NaN fails both
/// comparisons and is rejected the same way.
pub fn ingest_reading(temperature: f64, humidity: f64, limits: &LimitsConfig) -> Ingest {
    let temp_ok = limits.temp_min < temperature && temperature < limits.temp_max;
    let humidity_ok = limits.humidity_min <= humidity && humidity <= limits.humidity_max;

    if temp_ok && humidity_ok {
        Ingest::Accepted(Sample::new(temperature, humidity))
    } else {
        Ingest::Rejected(RejectReason::OutOfRange {
            temperature,
            humidity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limits() -> LimitsConfig {
        LimitsConfig::default()
    }

    #[test]
    fn well_formed_payload_is_accepted() {
        let Ingest::Accepted(sample) = ingest_message("25.0,55.0", &limits()) else {
            panic!("expected acceptance");
        };
        assert_eq!(sample.temperature, 25.0);
        assert_eq!(sample.humidity, 55.0);
    }

    #[test]
    fn extra_fields_are_ignored() {
        let Ingest::Accepted(sample) = ingest_message("25.0,55.0,999,garbage", &limits()) else {
            panic!("expected acceptance");
        };
        assert_eq!(sample.temperature, 25.0);
        assert_eq!(sample.humidity, 55.0);
    }

    #[test]
    fn whitespace_around_fields_is_tolerated() {
        assert!(matches!(
            ingest_message(" 25.0 , 55.0 ", &limits()),
            Ingest::Accepted(_)
        ));
    }

    #[test]
    fn non_numeric_payload_is_malformed() {
        assert_eq!(
            ingest_message("abc,55.0", &limits()),
            Ingest::Rejected(RejectReason::Malformed)
        );
    }

    #[test]
    fn single_field_payload_is_malformed() {
        assert_eq!(
            ingest_message("25.0", &limits()),
            Ingest::Rejected(RejectReason::Malformed)
        );
    }

    #[test]
    fn out_of_range_temperature_is_rejected() {
        assert!(matches!(
            ingest_message("100.0,55.0", &limits()),
            Ingest::Rejected(RejectReason::OutOfRange { .. })
        ));
    }

    #[test]
    fn temperature_bounds_are_exclusive() {
        assert!(matches!(
            ingest_reading(-10.0, 50.0, &limits()),
            Ingest::Rejected(RejectReason::OutOfRange { .. })
        ));
        assert!(matches!(
            ingest_reading(60.0, 50.0, &limits()),
            Ingest::Rejected(RejectReason::OutOfRange { .. })
        ));
    }

    #[test]
    fn humidity_bounds_are_inclusive() {
        assert!(matches!(
            ingest_reading(25.0, 0.0, &limits()),
            Ingest::Accepted(_)
        ));
        assert!(matches!(
            ingest_reading(25.0, 100.0, &limits()),
            Ingest::Accepted(_)
        ));
        assert!(matches!(
            ingest_reading(25.0, 100.1, &limits()),
            Ingest::Rejected(RejectReason::OutOfRange { .. })
        ));
    }

    #[test]
    fn nan_reading_is_rejected() {
        assert!(matches!(
            ingest_reading(f64::NAN, 50.0, &limits()),
            Ingest::Rejected(_)
        ));
        assert!(matches!(
            ingest_message("nan,50.0", &limits()),
            Ingest::Rejected(_)
        ));
    }
}
