use vigil_core::DriftVerdict;

/// What an evaluation actually did.
///
/// Only `Evaluated` is a measurement. The other two carry a zero-score,
/// non-drifting verdict with a single advisory explaining why.
#[derive(Debug, Clone, PartialEq)]
pub enum DriftOutcome {
    /// No baseline existed; one was captured from the supplied records.
    Bootstrapped(DriftVerdict),
    /// No baseline existed and there were no records to capture one from.
    Uncalibrated(DriftVerdict),
    /// Current records were compared against the stored baseline.
    Evaluated(DriftVerdict),
}

impl DriftOutcome {
    pub fn verdict(&self) -> &DriftVerdict {
        match self {
            Self::Bootstrapped(v) | Self::Uncalibrated(v) | Self::Evaluated(v) => v,
        }
    }

    pub fn into_verdict(self) -> DriftVerdict {
        match self {
            Self::Bootstrapped(v) | Self::Uncalibrated(v) | Self::Evaluated(v) => v,
        }
    }

    pub fn is_measurement(&self) -> bool {
        matches!(self, Self::Evaluated(_))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Bootstrapped(_) => "bootstrapped",
            Self::Uncalibrated(_) => "uncalibrated",
            Self::Evaluated(_) => "evaluated",
        }
    }
}
