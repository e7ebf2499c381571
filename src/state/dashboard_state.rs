//! Dashboard loading state.
//!
//! Sections start out empty and receive their data when the loading gate
//! releases them. Until then the panels show skeletons.

use std::time::{Duration, Instant};

use garage::dashboard::{Benefit, UserProfile};
use garage::{DashboardData, FinanceData, LoadSchedule, LoadingGate, Section};

/// State of the simulated data load.
///
/// Responsibilities:
/// - Tracking the time since the dashboard was mounted
/// - Releasing section data as the gate opens
/// - Cancelling pending releases on unmount
#[derive(Debug)]
pub struct DashboardState {
    gate: LoadingGate,
    mounted_at: Instant,
    /// Data set the sections are released from
    source: DashboardData,
    profile: Option<UserProfile>,
    benefits: Option<Vec<Benefit>>,
    finance: Option<FinanceData>,
}

impl DashboardState {
    /// Mounts the dashboard now, with every section loading.
    pub fn new(source: DashboardData, schedule: LoadSchedule) -> Self {
        Self {
            gate: LoadingGate::new(schedule),
            mounted_at: Instant::now(),
            source,
            profile: None,
            benefits: None,
            finance: None,
        }
    }

    // ===== Loading Queries =====

    pub fn elapsed(&self) -> Duration {
        self.mounted_at.elapsed()
    }

    pub fn is_loading(&self, section: Section) -> bool {
        self.gate.is_loading(section)
    }

    pub fn all_loaded(&self) -> bool {
        self.gate.all_loaded()
    }

    /// Time until the next section is released, measured at `elapsed`.
    pub fn next_deadline(&self, elapsed: Duration) -> Option<Duration> {
        self.gate.next_deadline(elapsed)
    }

    // ===== Section Data =====

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    pub fn benefits(&self) -> Option<&[Benefit]> {
        self.benefits.as_deref()
    }

    pub fn finance(&self) -> Option<&FinanceData> {
        self.finance.as_ref()
    }

    // ===== Loading Mutations =====

    /// Releases every section due at `elapsed` and returns them.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<Section> {
        let released = self.gate.advance(elapsed);
        for section in &released {
            match section {
                Section::Profile => self.profile = Some(self.source.profile.clone()),
                Section::Benefits => self.benefits = Some(self.source.benefits.clone()),
                Section::Points => self.finance = Some(self.source.finance.clone()),
            }
        }
        released
    }

    /// Drops pending releases; already loaded sections stay visible.
    pub fn unmount(&mut self) {
        self.gate.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_receive_data_when_released() {
        let mut state = DashboardState::new(DashboardData::sample(), LoadSchedule::default());
        assert!(state.profile().is_none());

        state.advance(Duration::from_millis(1500));
        assert_eq!(state.profile().map(|p| p.level), Some(5));
        assert!(state.benefits().is_none());
        assert!(state.is_loading(Section::Points));

        state.advance(Duration::from_millis(2500));
        assert_eq!(state.benefits().map(|b| b.len()), Some(6));
        assert!(state.finance().is_some());
        assert!(state.all_loaded());
    }

    #[test]
    fn test_unmount_cancels_pending_sections() {
        let mut state = DashboardState::new(DashboardData::sample(), LoadSchedule::default());
        state.unmount();
        assert!(state.advance(Duration::from_secs(10)).is_empty());
        assert!(state.finance().is_none());
    }
}
