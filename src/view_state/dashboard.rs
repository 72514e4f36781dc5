//! Dashboard aggregation.

use chrono::NaiveDate;

use crate::models::{format_short_date, format_time, Appointment};
use crate::store::{RecordStore, StoreCounts};

/// Most upcoming appointments listed on the dashboard.
pub const UPCOMING_LIMIT: usize = 5;

/// Message shown when nothing is scheduled from today on.
pub const NO_UPCOMING_MESSAGE: &str = "No upcoming appointments";

/// One line of the upcoming list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingAppointment {
    pub id: u32,
    pub patient: String,
    pub doctor: String,
    /// e.g. "Oct 30, 2025"
    pub date_label: String,
    /// e.g. "10:00"
    pub time_label: String,
    pub reason: String,
}

impl From<&Appointment> for UpcomingAppointment {
    fn from(appointment: &Appointment) -> Self {
        Self {
            id: appointment.id,
            patient: appointment.patient.clone(),
            doctor: appointment.doctor.clone(),
            date_label: format_short_date(appointment.date),
            time_label: format_time(appointment.time),
            reason: appointment.reason.clone(),
        }
    }
}

/// Everything the dashboard shows, derived from the store on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSummary {
    pub totals: StoreCounts,
    /// Number of appointments dated today or later.
    pub upcoming_count: usize,
    /// The first [`UPCOMING_LIMIT`] of those, soonest first.
    pub upcoming: Vec<UpcomingAppointment>,
}

impl DashboardSummary {
    /// Summarize `store` as seen on `today`.
    ///
    /// An appointment is upcoming when its date is on or after `today`; its
    /// time only matters for ordering. Appointments sharing a date and time
    /// keep their store order.
    pub fn compute(store: &RecordStore, today: NaiveDate) -> Self {
        let mut upcoming: Vec<&Appointment> = store
            .appointments
            .iter()
            .filter(|appointment| appointment.date >= today)
            .collect();
        upcoming.sort_by_key(|appointment| appointment.starts_at());

        Self {
            totals: store.counts(),
            upcoming_count: upcoming.len(),
            upcoming: upcoming
                .into_iter()
                .take(UPCOMING_LIMIT)
                .map(UpcomingAppointment::from)
                .collect(),
        }
    }

    pub fn has_upcoming(&self) -> bool {
        !self.upcoming.is_empty()
    }

    pub fn empty_message(&self) -> &'static str {
        NO_UPCOMING_MESSAGE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AppointmentDraft, AppointmentPatch};
    use chrono::NaiveTime;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn schedule(store: &mut RecordStore, day: NaiveDate, hour: u32, reason: &str) -> u32 {
        store
            .appointments
            .add(AppointmentDraft {
                patient: "Jane Smith".into(),
                doctor: "Dr. Robert Green".into(),
                date: day,
                time: NaiveTime::from_hms_opt(hour, 0, 0).unwrap(),
                reason: reason.into(),
            })
            .id
    }

    #[test]
    fn test_seed_before_first_appointment() {
        let summary = DashboardSummary::compute(&RecordStore::seeded(), date(2025, 10, 1));

        assert_eq!(summary.totals.patients, 2);
        assert_eq!(summary.totals.doctors, 2);
        assert_eq!(summary.totals.appointments, 2);
        assert_eq!(summary.upcoming_count, 2);

        let reasons: Vec<&str> = summary.upcoming.iter().map(|u| u.reason.as_str()).collect();
        assert_eq!(reasons, vec!["Heart Checkup", "Knee Pain"]);
        assert_eq!(summary.upcoming[0].date_label, "Oct 30, 2025");
        assert_eq!(summary.upcoming[1].time_label, "11:30");
    }

    #[test]
    fn test_today_counts_regardless_of_time() {
        let summary = DashboardSummary::compute(&RecordStore::seeded(), date(2025, 10, 31));
        assert_eq!(summary.upcoming_count, 1);
        assert_eq!(summary.upcoming[0].reason, "Knee Pain");
    }

    #[test]
    fn test_after_everything_shows_empty_message() {
        let summary = DashboardSummary::compute(&RecordStore::seeded(), date(2026, 1, 1));
        assert_eq!(summary.upcoming_count, 0);
        assert!(!summary.has_upcoming());
        assert_eq!(summary.empty_message(), "No upcoming appointments");
        assert_eq!(summary.totals.appointments, 2);
    }

    #[test]
    fn test_list_is_capped_but_count_is_not() {
        let mut store = RecordStore::new();
        for day in (1..=7).rev() {
            schedule(&mut store, date(2025, 12, day), 9, &format!("visit {}", day));
        }

        let summary = DashboardSummary::compute(&store, date(2025, 12, 1));
        assert_eq!(summary.upcoming_count, 7);
        assert_eq!(summary.upcoming.len(), UPCOMING_LIMIT);
        assert_eq!(summary.upcoming[0].reason, "visit 1");
        assert_eq!(summary.upcoming[4].reason, "visit 5");
    }

    #[test]
    fn test_same_day_sorted_by_time() {
        let mut store = RecordStore::new();
        schedule(&mut store, date(2025, 12, 1), 15, "late");
        schedule(&mut store, date(2025, 12, 1), 8, "early");

        let summary = DashboardSummary::compute(&store, date(2025, 12, 1));
        assert_eq!(summary.upcoming[0].reason, "early");
        assert_eq!(summary.upcoming[1].reason, "late");
    }

    #[test]
    fn test_moving_appointment_into_past_drops_it() {
        let mut store = RecordStore::seeded();
        let today = date(2025, 10, 1);
        store.appointments.update(
            2,
            AppointmentPatch {
                date: Some(date(2025, 9, 1)),
                ..Default::default()
            },
        );

        let summary = DashboardSummary::compute(&store, today);
        assert_eq!(summary.upcoming_count, 1);
        assert!(summary.upcoming.iter().all(|u| u.id != 2));
    }
}
