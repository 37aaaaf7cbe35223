use thiserror::Error;

#[derive(Error, Debug)]
pub enum PasswatchError {
    #[error("Invalid observer latitude: {0}° (expected a value in [-90, 90])")]
    InvalidLatitude(f64),

    #[error("Invalid observer longitude: {0}° (expected a value in [-180, 180])")]
    InvalidLongitude(f64),

    #[error("Invalid observer height: {0} km (expected a finite value)")]
    InvalidObserverHeight(f64),

    #[error("Invalid scan step: {0} s (expected a finite, strictly positive value)")]
    InvalidScanStep(f64),

    #[error("Invalid scan window: {0} s (expected a finite, non-negative value)")]
    InvalidScanWindow(f64),

    #[error("Unable to parse scan configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

impl PartialEq for PasswatchError {
    fn eq(&self, other: &Self) -> bool {
        use PasswatchError::*;
        match (self, other) {
            (InvalidLatitude(a), InvalidLatitude(b)) => a == b,
            (InvalidLongitude(a), InvalidLongitude(b)) => a == b,
            (InvalidObserverHeight(a), InvalidObserverHeight(b)) => a == b,
            (InvalidScanStep(a), InvalidScanStep(b)) => a == b,
            (InvalidScanWindow(a), InvalidScanWindow(b)) => a == b,

            // serde errors are not comparable: same variant is enough
            (ConfigParse(_), ConfigParse(_)) => true,

            _ => false,
        }
    }
}
