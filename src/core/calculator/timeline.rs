use super::rules;
use super::snapshot::{SessionTiming, compute_snapshot};
use crate::models::compliance::{ComplianceSnapshot, Severity, TimelineEvent, TimelineEventKind};
use chrono::{DateTime, Local, TimeDelta};
use std::iter::FusedIterator;

/// Candidate markers in emission order.
///
/// Their offsets from session start (0, 4h, 6h, 9h, 10h) are strictly
/// increasing, so emitting in this order is also chronological order.
const STAGES: [TimelineEventKind; 5] = [
    TimelineEventKind::SessionStart,
    TimelineEventKind::BreakTaken,
    TimelineEventKind::RequiredBreak30,
    TimelineEventKind::RequiredBreak45,
    TimelineEventKind::LegalMaximum,
];

/// The timeline of one session, derived on demand.
///
/// Holds only the inputs; every call to [`TimelineEvents::iter`] walks the
/// markers again from the start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineEvents {
    timing: SessionTiming,
    snapshot: ComplianceSnapshot,
}

/// Derive the timeline of `timing` from an already computed snapshot.
pub fn build_timeline_events(
    timing: &SessionTiming,
    snapshot: &ComplianceSnapshot,
) -> TimelineEvents {
    TimelineEvents {
        timing: *timing,
        snapshot: *snapshot,
    }
}

/// Snapshot and timeline in one go, for callers that only have `now`.
pub fn timeline_at(timing: &SessionTiming, now: DateTime<Local>) -> TimelineEvents {
    let snapshot = compute_snapshot(timing, now);
    build_timeline_events(timing, &snapshot)
}

impl TimelineEvents {
    pub fn iter(&self) -> TimelineIter {
        TimelineIter {
            source: *self,
            next_stage: 0,
        }
    }

    pub fn snapshot(&self) -> &ComplianceSnapshot {
        &self.snapshot
    }

    pub fn timing(&self) -> &SessionTiming {
        &self.timing
    }

    /// Highest severity on the timeline.
    pub fn worst_severity(&self) -> Severity {
        self.iter()
            .map(|e| e.severity)
            .max()
            .unwrap_or(Severity::Info)
    }

    /// `None` when the marker would lie past the representable range.
    fn at_offset(&self, minutes: i64) -> Option<DateTime<Local>> {
        self.timing
            .start_time()
            .checked_add_signed(TimeDelta::minutes(minutes))
    }

    fn event_for(&self, kind: TimelineEventKind) -> Option<TimelineEvent> {
        let s = &self.snapshot;

        match kind {
            TimelineEventKind::SessionStart => Some(TimelineEvent {
                event_time: self.timing.start_time(),
                kind,
                is_satisfied: true,
                severity: Severity::Info,
            }),

            TimelineEventKind::BreakTaken => {
                if s.effective_break_minutes <= 0 {
                    return None;
                }
                Some(TimelineEvent {
                    event_time: self.at_offset(rules::BREAK_MARKER_OFFSET_MINUTES)?,
                    kind,
                    is_satisfied: true,
                    severity: Severity::Info,
                })
            }

            TimelineEventKind::RequiredBreak30 => {
                let satisfied = s.effective_break_minutes >= rules::SHORT_BREAK_MINUTES;
                let due = s.worked_minutes >= rules::SHORT_BREAK_THRESHOLD_MINUTES;
                Some(TimelineEvent {
                    event_time: self.at_offset(rules::SHORT_BREAK_THRESHOLD_MINUTES)?,
                    kind,
                    is_satisfied: satisfied,
                    severity: if due && !satisfied {
                        Severity::Warning
                    } else {
                        Severity::Info
                    },
                })
            }

            TimelineEventKind::RequiredBreak45 => {
                if s.worked_minutes < rules::LONG_BREAK_THRESHOLD_MINUTES {
                    return None;
                }
                let satisfied = s.effective_break_minutes >= rules::LONG_BREAK_MINUTES;
                Some(TimelineEvent {
                    event_time: self.at_offset(rules::LONG_BREAK_THRESHOLD_MINUTES)?,
                    kind,
                    is_satisfied: satisfied,
                    severity: if satisfied {
                        Severity::Info
                    } else {
                        Severity::Error
                    },
                })
            }

            TimelineEventKind::LegalMaximum => {
                let reached = s.worked_minutes >= rules::LEGAL_MAXIMUM_MINUTES;
                Some(TimelineEvent {
                    event_time: self.at_offset(rules::LEGAL_MAXIMUM_MINUTES)?,
                    kind,
                    is_satisfied: !reached,
                    severity: if reached {
                        Severity::Error
                    } else {
                        Severity::Warning
                    },
                })
            }
        }
    }
}

impl IntoIterator for &TimelineEvents {
    type Item = TimelineEvent;
    type IntoIter = TimelineIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Lazy walk over the markers of a [`TimelineEvents`].
#[derive(Debug, Clone)]
pub struct TimelineIter {
    source: TimelineEvents,
    next_stage: usize,
}

impl Iterator for TimelineIter {
    type Item = TimelineEvent;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(kind) = STAGES.get(self.next_stage) {
            self.next_stage += 1;
            if let Some(ev) = self.source.event_for(*kind) {
                return Some(ev);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = STAGES.len().saturating_sub(self.next_stage);
        (0, Some(remaining))
    }
}

impl FusedIterator for TimelineIter {}
