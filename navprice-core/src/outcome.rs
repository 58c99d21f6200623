use std::time::Duration;

use navprice_types::{ErrorKind, FetchError};
use rust_decimal::Decimal;

use crate::instrument::InstrumentDescriptor;

/// Result of attempting to price one worklist entry.
///
/// Exactly one outcome is produced per fetch. Latency is always recorded, on
/// both variants, rounded to whole milliseconds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The provider returned a usable price.
    Success {
        /// Fund that was priced.
        descriptor: InstrumentDescriptor,
        /// Net asset value per share.
        price: Decimal,
        /// Wall time from request start to parsed price.
        latency: Duration,
    },
    /// The fetch failed; `error.kind()` gives the classified reason.
    Failure {
        /// Fund that could not be priced.
        descriptor: InstrumentDescriptor,
        /// Wall time until the failure was detected.
        latency: Duration,
        /// What went wrong.
        error: FetchError,
    },
}

impl FetchOutcome {
    /// Build a success, rounding `latency` to milliseconds.
    #[must_use]
    pub fn success(descriptor: InstrumentDescriptor, price: Decimal, latency: Duration) -> Self {
        Self::Success {
            descriptor,
            price,
            latency: round_latency(latency),
        }
    }

    /// Build a failure, rounding `latency` to milliseconds.
    #[must_use]
    pub fn failure(descriptor: InstrumentDescriptor, error: FetchError, latency: Duration) -> Self {
        Self::Failure {
            descriptor,
            latency: round_latency(latency),
            error,
        }
    }

    /// Build an outcome from a fetch result.
    #[must_use]
    pub fn from_result(
        descriptor: InstrumentDescriptor,
        result: Result<Decimal, FetchError>,
        latency: Duration,
    ) -> Self {
        match result {
            Ok(price) => Self::success(descriptor, price, latency),
            Err(error) => Self::failure(descriptor, error, latency),
        }
    }

    /// The fund this outcome belongs to.
    #[must_use]
    pub const fn descriptor(&self) -> &InstrumentDescriptor {
        match self {
            Self::Success { descriptor, .. } | Self::Failure { descriptor, .. } => descriptor,
        }
    }

    /// Elapsed time for the fetch.
    #[must_use]
    pub const fn latency(&self) -> Duration {
        match self {
            Self::Success { latency, .. } | Self::Failure { latency, .. } => *latency,
        }
    }

    /// True for the `Success` variant.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// The price, if the fetch succeeded.
    #[must_use]
    pub const fn price(&self) -> Option<Decimal> {
        match self {
            Self::Success { price, .. } => Some(*price),
            Self::Failure { .. } => None,
        }
    }

    /// The error, if the fetch failed.
    #[must_use]
    pub const fn error(&self) -> Option<&FetchError> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { error, .. } => Some(error),
        }
    }

    /// The classified failure reason, if the fetch failed.
    #[must_use]
    pub fn reason(&self) -> Option<ErrorKind> {
        self.error().map(FetchError::kind)
    }
}

/// Round a duration to the nearest millisecond, halves away from zero.
#[must_use]
pub fn round_latency(d: Duration) -> Duration {
    let ms = (d.as_nanos() + 500_000) / 1_000_000;
    Duration::from_millis(u64::try_from(ms).unwrap_or(u64::MAX))
}

/// Render a latency the way it is shown in reports: `412ms`, `1.5s`, `1m2.25s`.
#[must_use]
pub fn format_latency(d: Duration) -> String {
    let ms = u64::try_from(round_latency(d).as_millis()).unwrap_or(u64::MAX);
    if ms == 0 {
        return "0s".to_string();
    }
    if ms < 1_000 {
        return format!("{ms}ms");
    }
    let mins = ms / 60_000;
    let secs = seconds_with_fraction(ms % 60_000);
    if mins > 0 {
        format!("{mins}m{secs}s")
    } else {
        format!("{secs}s")
    }
}

fn seconds_with_fraction(ms: u64) -> String {
    let whole = ms / 1_000;
    let frac = ms % 1_000;
    if frac == 0 {
        return whole.to_string();
    }
    let frac = format!("{frac:03}");
    format!("{whole}.{}", frac.trim_end_matches('0'))
}
