//! Current-time providers
//!
//! Relative phrasing depends on "now". The formatter never reads the wall clock
//! directly; it asks a [`Clock`], which is queried afresh on every call.

use chrono::{DateTime, Local, TimeDelta, TimeZone};

/// Source of the current instant and of the zone calendar fields are read in
pub trait Clock {
    /// Time zone of this clock
    type Zone: TimeZone;

    /// The current instant
    fn now(&self) -> DateTime<Self::Zone>;

    /// The zone used for calendar fields
    fn zone(&self) -> Self::Zone;
}

/// The host's wall clock in the local time zone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    type Zone = Local;

    fn now(&self) -> DateTime<Local> {
        Local::now()
    }

    fn zone(&self) -> Local {
        Local
    }
}

/// A clock pinned to a fixed instant
#[derive(Debug, Clone)]
pub struct FixedClock<Tz: TimeZone> {
    now: DateTime<Tz>,
}

impl<Tz: TimeZone> FixedClock<Tz> {
    pub fn new(now: DateTime<Tz>) -> Self {
        Self { now }
    }

    /// Move the pinned instant by `delta`
    ///
    /// Leaves the clock unchanged if the result would be out of range.
    pub fn advance(&mut self, delta: TimeDelta) {
        if let Some(next) = self.now.clone().checked_add_signed(delta) {
            self.now = next;
        }
    }
}

impl<Tz: TimeZone> Clock for FixedClock<Tz> {
    type Zone = Tz;

    fn now(&self) -> DateTime<Tz> {
        self.now.clone()
    }

    fn zone(&self) -> Tz {
        self.now.timezone()
    }
}

impl<C: Clock> Clock for &C {
    type Zone = C::Zone;

    fn now(&self) -> DateTime<Self::Zone> {
        (**self).now()
    }

    fn zone(&self) -> Self::Zone {
        (**self).zone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn test_fixed_clock_advance() {
        let zone = FixedOffset::east_opt(3600).unwrap();
        let start = zone.with_ymd_and_hms(2024, 3, 4, 10, 0, 0).unwrap();
        let mut clock = FixedClock::new(start);
        assert_eq!(clock.now(), start);

        clock.advance(TimeDelta::minutes(90));
        assert_eq!(clock.now(), zone.with_ymd_and_hms(2024, 3, 4, 11, 30, 0).unwrap());
        assert_eq!(clock.zone(), zone);
    }

    #[test]
    fn test_system_clock_is_fresh() {
        let clock = SystemClock;
        let first = clock.now();
        let second = clock.now();
        assert!(second >= first);
    }
}
