//! Sample records loaded at startup.

use chrono::{NaiveDate, NaiveTime};

use super::{Collection, RecordStore};
use crate::models::{Appointment, Doctor, Gender, Patient};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default()
}

/// Build a store containing two patients, two doctors and two appointments.
///
/// The first appointment names "John Doe", who is not among the seeded
/// patients; appointments only ever hold name copies.
pub fn seed_store() -> RecordStore {
    let patients = vec![
        Patient {
            id: 1,
            name: "abdul".to_string(),
            age: 34,
            gender: Gender::Male,
            contact: "1234567890".to_string(),
            history: "Diabetes".to_string(),
        },
        Patient {
            id: 2,
            name: "Jane Smith".to_string(),
            age: 28,
            gender: Gender::Female,
            contact: "2345678901".to_string(),
            history: "Asthma".to_string(),
        },
    ];

    let doctors = vec![
        Doctor {
            id: 1,
            name: "Dr. Alice Brown".to_string(),
            specialty: "Cardiology".to_string(),
            contact: "3456789012".to_string(),
        },
        Doctor {
            id: 2,
            name: "Dr. Robert Green".to_string(),
            specialty: "Orthopedics".to_string(),
            contact: "4567890123".to_string(),
        },
    ];

    let appointments = vec![
        Appointment {
            id: 1,
            patient: "John Doe".to_string(),
            doctor: "Dr. Alice Brown".to_string(),
            date: date(2025, 10, 30),
            time: time(10, 0),
            reason: "Heart Checkup".to_string(),
        },
        Appointment {
            id: 2,
            patient: "Jane Smith".to_string(),
            doctor: "Dr. Robert Green".to_string(),
            date: date(2025, 10, 31),
            time: time(11, 30),
            reason: "Knee Pain".to_string(),
        },
    ];

    RecordStore {
        patients: Collection::from_records(patients),
        doctors: Collection::from_records(doctors),
        appointments: Collection::from_records(appointments),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_sizes_and_counters() {
        let store = seed_store();
        let counts = store.counts();
        assert_eq!(
            (counts.patients, counts.doctors, counts.appointments),
            (2, 2, 2)
        );
        assert_eq!(store.patients.next_id(), 3);
        assert_eq!(store.doctors.next_id(), 3);
        assert_eq!(store.appointments.next_id(), 3);
    }

    #[test]
    fn test_seed_appointment_values() {
        let store = seed_store();
        let second = store.appointments.find(2).unwrap();
        assert_eq!(second.date.to_string(), "2025-10-31");
        assert_eq!(second.time.to_string(), "11:30:00");
        assert_eq!(second.reason, "Knee Pain");
    }
}
