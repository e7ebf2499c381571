//! Simulated loading of dashboard sections.
//!
//! Three independent flags gate the dashboard: the profile, the benefits and
//! the points group (which also releases expenses, transactions, utilization,
//! investments and savings). Each flag flips after a fixed delay measured from
//! the moment the dashboard was mounted.

use std::time::Duration;

/// A loading flag of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Profile,
    Benefits,
    Points,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Profile, Section::Benefits, Section::Points];

    fn index(self) -> usize {
        match self {
            Section::Profile => 0,
            Section::Benefits => 1,
            Section::Points => 2,
        }
    }
}

/// Delay before each section is released.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadSchedule {
    pub profile: Duration,
    pub benefits: Duration,
    pub points: Duration,
}

impl Default for LoadSchedule {
    fn default() -> Self {
        Self {
            profile: Duration::from_millis(1500),
            benefits: Duration::from_millis(2000),
            points: Duration::from_millis(2500),
        }
    }
}

impl LoadSchedule {
    /// Every section is released on the first tick.
    pub fn instant() -> Self {
        Self {
            profile: Duration::ZERO,
            benefits: Duration::ZERO,
            points: Duration::ZERO,
        }
    }

    pub fn delay(&self, section: Section) -> Duration {
        match section {
            Section::Profile => self.profile,
            Section::Benefits => self.benefits,
            Section::Points => self.points,
        }
    }
}

/// The three loading flags plus their release schedule.
#[derive(Debug, Clone)]
pub struct LoadingGate {
    schedule: LoadSchedule,
    loading: [bool; 3],
    cancelled: bool,
}

impl LoadingGate {
    /// Creates a gate with every section still loading.
    pub fn new(schedule: LoadSchedule) -> Self {
        Self {
            schedule,
            loading: [true; 3],
            cancelled: false,
        }
    }

    pub fn is_loading(&self, section: Section) -> bool {
        self.loading[section.index()]
    }

    pub fn all_loaded(&self) -> bool {
        self.loading.iter().all(|loading| !loading)
    }

    /// Releases every section whose delay has elapsed.
    ///
    /// Returns the newly released sections ordered by their delay.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<Section> {
        if self.cancelled {
            return Vec::new();
        }

        let mut released: Vec<Section> = Section::ALL
            .into_iter()
            .filter(|&section| self.is_loading(section) && elapsed >= self.schedule.delay(section))
            .collect();
        released.sort_by_key(|&section| self.schedule.delay(section));

        for section in &released {
            self.loading[section.index()] = false;
        }
        released
    }

    /// Time left until the next pending section is released.
    pub fn next_deadline(&self, elapsed: Duration) -> Option<Duration> {
        if self.cancelled {
            return None;
        }
        Section::ALL
            .into_iter()
            .filter(|&section| self.is_loading(section))
            .map(|section| self.schedule.delay(section).saturating_sub(elapsed))
            .min()
    }

    /// Drops every pending release; sections that already loaded stay loaded.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }
}
