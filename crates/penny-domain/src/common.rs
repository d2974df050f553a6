//! Shared traits implemented by records that feed the forecasting core.

use chrono::NaiveDateTime;

/// Supplies a common contract for retrieving numeric amounts.
pub trait Amounted {
    fn amount(&self) -> f64;
}

/// Exposes the wall-clock moment a record happened at.
pub trait Timestamped {
    fn occurred_at(&self) -> NaiveDateTime;
}

impl<T: Amounted + ?Sized> Amounted for &T {
    fn amount(&self) -> f64 {
        (**self).amount()
    }
}

impl<T: Timestamped + ?Sized> Timestamped for &T {
    fn occurred_at(&self) -> NaiveDateTime {
        (**self).occurred_at()
    }
}
