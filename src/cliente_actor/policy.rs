use chrono::{Local, NaiveDate};

/// Age rule applied when a client is registered.
///
/// Injected into the Cliente actor as its `Context`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgePolicy {
    pub min_age: u32,
    /// Fixed "today". `None` means the local calendar date at each request.
    pub reference_date: Option<NaiveDate>,
}

impl AgePolicy {
    pub const DEFAULT_MIN_AGE: u32 = 18;

    pub fn new(min_age: u32) -> Self {
        Self {
            min_age,
            reference_date: None,
        }
    }

    pub fn with_reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = Some(date);
        self
    }

    pub fn today(&self) -> NaiveDate {
        self.reference_date
            .unwrap_or_else(|| Local::now().date_naive())
    }
}

impl Default for AgePolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MIN_AGE)
    }
}
