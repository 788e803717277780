use chrono::{Local, NaiveDate, NaiveTime, Timelike};

/// Injectable time source.
///
/// Services never read the system clock directly; they take a `Clock` so
/// week computation and default date/time fill-in are testable.
pub trait Clock {
    /// Current calendar date
    fn today(&self) -> NaiveDate;

    /// Current time of day, truncated to the minute
    fn time_of_day(&self) -> NaiveTime;
}

/// Clock backed by the local system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    fn time_of_day(&self) -> NaiveTime {
        let now = Local::now().time();
        now.with_second(0)
            .and_then(|t| t.with_nanosecond(0))
            .unwrap_or(now)
    }
}

/// Clock pinned to a fixed instant, for tests
#[cfg(any(test, feature = "mock"))]
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    pub date: NaiveDate,
    pub time: NaiveTime,
}

#[cfg(any(test, feature = "mock"))]
impl FixedClock {
    /// Pin the clock to the given date at 08:00
    pub fn on(date: NaiveDate) -> Self {
        Self {
            date,
            time: NaiveTime::from_hms_opt(8, 0, 0).expect("valid fixed time"),
        }
    }
}

#[cfg(any(test, feature = "mock"))]
impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.date
    }

    fn time_of_day(&self) -> NaiveTime {
        self.time
    }
}
