//! Duty status — the four lines of a driver's daily log sheet.

use std::fmt;

/// One of the four duty statuses a log-sheet hour can be charged to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DutyStatus {
    /// Off duty — free time, not counted against any clock.
    OffDuty,
    /// Sleeper berth — overnight rest periods.
    SleeperBerth,
    /// Driving — behind the wheel, vehicle in motion.
    Driving,
    /// On duty, not driving — loading, fueling, breaks, inspections.
    OnDuty,
}

impl DutyStatus {
    /// The short code used on printed log sheets.
    pub fn code(self) -> &'static str {
        match self {
            DutyStatus::OffDuty      => "OFF",
            DutyStatus::SleeperBerth => "SB",
            DutyStatus::Driving      => "D",
            DutyStatus::OnDuty       => "ON",
        }
    }

    /// `true` for the statuses that count toward the rolling duty cycle.
    #[inline]
    pub fn counts_toward_cycle(self) -> bool {
        matches!(self, DutyStatus::Driving | DutyStatus::OnDuty)
    }
}

impl fmt::Display for DutyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DutyStatus::OffDuty      => "Off Duty",
            DutyStatus::SleeperBerth => "Sleeper Berth",
            DutyStatus::Driving      => "Driving",
            DutyStatus::OnDuty       => "On Duty (not driving)",
        };
        f.write_str(name)
    }
}
