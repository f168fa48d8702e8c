use chrono::{Duration, NaiveDate, Timelike, Utc};
use reqwest::Method;
use tracing::{debug, warn};
use uuid::Uuid;

use shared_config::AppConfig;
use shared_database::supabase::SupabaseClient;
use shared_models::Department;

use crate::error::SchedulingError;
use crate::models::{
    Appointment, AppointmentStatus, BookableDoctor, DayAvailability, DepartmentMatch,
    DepartmentRecord, Doctor, DoctorDashboard, SetAvailabilityRequest, SlotCalendarEntry,
    SlotStatus, SlotType,
};

/// Hour after which the morning slot can no longer be booked for today.
pub const MORNING_CLOSES_AT: u32 = 14;
/// Hour after which the evening slot can no longer be booked for today.
pub const EVENING_CLOSES_AT: u32 = 19;

/// Number of days covered by the doctor dashboard, today included.
pub const DASHBOARD_DAYS: i64 = 7;

pub struct AvailabilityService {
    supabase: SupabaseClient,
}

impl AvailabilityService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            supabase: SupabaseClient::new(config),
        }
    }

    /// Same-day department matching: every doctor in the department whose slot
    /// calendar entry for today still has at least one slot inside its time
    /// window. The booking ledger is NOT consulted here - a fully booked
    /// doctor can still appear; see the dashboard for booked state.
    pub async fn doctors_bookable_now(
        &self,
        department_name: &str,
        as_of_hour: Option<u32>,
    ) -> Result<DepartmentMatch, SchedulingError> {
        if let Some(hour) = as_of_hour {
            if hour > 23 {
                return Err(SchedulingError::InvalidInput(format!(
                    "hour must be between 0 and 23, got {}",
                    hour
                )));
            }
        }
        // Caller-supplied client-local hour wins; the server clock is only a
        // fallback, so a client in another timezone is judged by its own day.
        let hour = as_of_hour.unwrap_or_else(|| Utc::now().hour());

        let department = Department::from_name(department_name).ok_or_else(|| {
            SchedulingError::NotFound(format!("Unknown department: {}", department_name))
        })?;

        debug!(
            "Matching bookable doctors in {} as of hour {}",
            department, hour
        );

        let dept_path = format!(
            "/rest/v1/departments?name=eq.{}",
            department.as_str().replace(' ', "%20")
        );
        let departments: Vec<DepartmentRecord> = self
            .supabase
            .request(Method::GET, &dept_path, None)
            .await
            .map_err(|e| SchedulingError::Storage(e.to_string()))?;

        let department_record = departments.into_iter().next().ok_or_else(|| {
            SchedulingError::NotFound(format!("Unknown department: {}", department_name))
        })?;

        let doctors_path = format!(
            "/rest/v1/doctors?department_id=eq.{}&order=full_name.asc",
            department_record.id
        );
        let doctors: Vec<Doctor> = self
            .supabase
            .request(Method::GET, &doctors_path, None)
            .await
            .map_err(|e| SchedulingError::Storage(e.to_string()))?;

        if doctors.is_empty() {
            warn!("Department {} has no doctors", department);
            return Ok(DepartmentMatch {
                about: match_summary(department),
                doctors: vec![],
            });
        }

        let today = Utc::now().date_naive();
        let ids: Vec<String> = doctors.iter().map(|d| d.id.to_string()).collect();
        let calendar_path = format!(
            "/rest/v1/slot_calendar?date=eq.{}&doctor_id=in.({})",
            today,
            ids.join(",")
        );
        let entries: Vec<SlotCalendarEntry> = self
            .supabase
            .request(Method::GET, &calendar_path, None)
            .await
            .map_err(|e| SchedulingError::Storage(e.to_string()))?;

        let bookable: Vec<BookableDoctor> = doctors
            .iter()
            .filter_map(|doctor| {
                let entry = entries.iter().find(|e| e.doctor_id == doctor.id)?;
                to_bookable(doctor, entry, hour)
            })
            .collect();

        debug!("{} doctors bookable in {}", bookable.len(), department);

        Ok(DepartmentMatch {
            about: match_summary(department),
            doctors: bookable,
        })
    }

    /// Rolling 7-day dashboard for a doctor: upcoming scheduled appointments
    /// plus a per-day availability/booked grid. Recomputed on every call so it
    /// always reflects the latest calendar and ledger state.
    pub async fn weekly_dashboard(
        &self,
        doctor_id: &str,
    ) -> Result<DoctorDashboard, SchedulingError> {
        let doctor_id = Uuid::parse_str(doctor_id)
            .map_err(|_| SchedulingError::InvalidInput("doctor id must be a UUID".to_string()))?;

        debug!("Building weekly dashboard for doctor {}", doctor_id);

        let doctor_path = format!("/rest/v1/doctors?id=eq.{}", doctor_id);
        let doctors: Vec<Doctor> = self
            .supabase
            .request(Method::GET, &doctor_path, None)
            .await
            .map_err(|e| SchedulingError::Storage(e.to_string()))?;

        if doctors.is_empty() {
            return Err(SchedulingError::NotFound(format!(
                "Doctor not found: {}",
                doctor_id
            )));
        }

        let today = Utc::now().date_naive();
        let window_end = today + Duration::days(DASHBOARD_DAYS - 1);

        let appointments_path = format!(
            "/rest/v1/appointments?doctor_id=eq.{}&status=eq.scheduled&date=gte.{}&order=date.asc",
            doctor_id, today
        );
        let appointments: Vec<Appointment> = self
            .supabase
            .request(Method::GET, &appointments_path, None)
            .await
            .map_err(|e| SchedulingError::Storage(e.to_string()))?;

        let calendar_path = format!(
            "/rest/v1/slot_calendar?doctor_id=eq.{}&date=gte.{}&date=lte.{}",
            doctor_id, today, window_end
        );
        let entries: Vec<SlotCalendarEntry> = self
            .supabase
            .request(Method::GET, &calendar_path, None)
            .await
            .map_err(|e| SchedulingError::Storage(e.to_string()))?;

        let availability = build_week(today, &entries, &appointments);

        Ok(DoctorDashboard {
            appointments,
            availability,
        })
    }

    /// Idempotent upsert of a doctor's slot declaration for one date.
    /// Last write wins for the (doctor, date) key; both slot flags are
    /// replaced together.
    pub async fn set_availability(
        &self,
        doctor_id: &str,
        request: SetAvailabilityRequest,
    ) -> Result<SlotCalendarEntry, SchedulingError> {
        let doctor_id = Uuid::parse_str(doctor_id)
            .map_err(|_| SchedulingError::InvalidInput("doctor id must be a UUID".to_string()))?;

        debug!(
            "Setting availability for doctor {} on {}: morning={}, evening={}",
            doctor_id, request.date, request.morning, request.evening
        );

        let entry_data = serde_json::json!({
            "doctor_id": doctor_id,
            "date": request.date,
            "morning_available": request.morning,
            "evening_available": request.evening,
            "updated_at": Utc::now().to_rfc3339(),
        });

        let result: Vec<SlotCalendarEntry> = self
            .supabase
            .upsert("slot_calendar", "doctor_id,date", entry_data)
            .await
            .map_err(|e| SchedulingError::Storage(e.to_string()))?;

        result
            .into_iter()
            .next()
            .ok_or_else(|| SchedulingError::Storage("upsert returned no row".to_string()))
    }
}

fn match_summary(department: Department) -> String {
    format!(
        "Doctors in {} with at least one open slot today",
        department
    )
}

/// Fixed time-window policy: a slot is presentable only while its booking
/// window for today is still open.
pub fn slot_window_open(slot: SlotType, hour: u32) -> bool {
    match slot {
        SlotType::Morning => hour < MORNING_CLOSES_AT,
        SlotType::Evening => hour < EVENING_CLOSES_AT,
    }
}

/// A doctor is returned iff at least one declared slot is still presentable;
/// otherwise they are omitted entirely rather than listed with both flags off.
fn to_bookable(doctor: &Doctor, entry: &SlotCalendarEntry, hour: u32) -> Option<BookableDoctor> {
    let morning = entry.morning_available && slot_window_open(SlotType::Morning, hour);
    let evening = entry.evening_available && slot_window_open(SlotType::Evening, hour);

    if !morning && !evening {
        return None;
    }

    Some(BookableDoctor {
        id: doctor.id,
        name: doctor.full_name.clone(),
        experience_years: doctor.experience_years,
        morning_bookable: morning,
        evening_bookable: evening,
    })
}

/// Derives the 7-day grid: one entry per date starting today, ascending.
/// A date with no slot calendar entry means "not yet configured", never an
/// error. A slot is booked iff at least one scheduled appointment targets it;
/// several bookings in the same slot collapse to a single flag.
pub fn build_week(
    today: NaiveDate,
    entries: &[SlotCalendarEntry],
    appointments: &[Appointment],
) -> Vec<DayAvailability> {
    (0..DASHBOARD_DAYS)
        .map(|offset| {
            let date = today + Duration::days(offset);
            let entry = entries.iter().find(|e| e.date == date);

            let morning_available = entry.map(|e| e.morning_available).unwrap_or(false);
            let evening_available = entry.map(|e| e.evening_available).unwrap_or(false);

            DayAvailability {
                date,
                morning: SlotStatus {
                    available: morning_available,
                    booked: slot_booked(appointments, date, SlotType::Morning),
                },
                evening: SlotStatus {
                    available: evening_available,
                    booked: slot_booked(appointments, date, SlotType::Evening),
                },
            }
        })
        .collect()
}

fn slot_booked(appointments: &[Appointment], date: NaiveDate, slot: SlotType) -> bool {
    appointments.iter().any(|apt| {
        apt.date == date && apt.slot_type == slot && apt.status == AppointmentStatus::Scheduled
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doctor(name: &str) -> Doctor {
        Doctor {
            id: Uuid::new_v4(),
            full_name: name.to_string(),
            email: format!("{}@clinic.example", name.to_lowercase().replace(' ', ".")),
            department_id: Uuid::new_v4(),
            experience_years: Some(8),
        }
    }

    fn entry(doctor_id: Uuid, date: NaiveDate, morning: bool, evening: bool) -> SlotCalendarEntry {
        SlotCalendarEntry {
            doctor_id,
            date,
            morning_available: morning,
            evening_available: evening,
        }
    }

    fn appointment(
        doctor_id: Uuid,
        date: NaiveDate,
        slot: SlotType,
        status: AppointmentStatus,
    ) -> Appointment {
        Appointment {
            id: Uuid::new_v4(),
            doctor_id,
            patient_id: Uuid::new_v4(),
            date,
            slot_type: slot,
            status,
        }
    }

    fn day(year: i32, month: u32, dom: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, dom).unwrap()
    }

    #[test]
    fn test_evening_window_closes_at_19() {
        for hour in 19..24 {
            assert!(!slot_window_open(SlotType::Evening, hour));
        }
        assert!(slot_window_open(SlotType::Evening, 18));
    }

    #[test]
    fn test_afternoon_hours_keep_only_the_evening_slot() {
        let doc = doctor("Dr. Reid");
        let today = day(2024, 6, 10);
        let e = entry(doc.id, today, true, true);

        for hour in 14..19 {
            let bookable = to_bookable(&doc, &e, hour).unwrap();
            assert!(!bookable.morning_bookable, "hour {}", hour);
            assert!(bookable.evening_bookable, "hour {}", hour);
        }
    }

    #[test]
    fn test_morning_hours_keep_both_slots() {
        let doc = doctor("Dr. Reid");
        let e = entry(doc.id, day(2024, 6, 10), true, true);

        let bookable = to_bookable(&doc, &e, 10).unwrap();
        assert!(bookable.morning_bookable);
        assert!(bookable.evening_bookable);
    }

    #[test]
    fn test_doctor_with_no_declared_slots_is_omitted() {
        let doc = doctor("Dr. Reid");
        let e = entry(doc.id, day(2024, 6, 10), false, false);

        assert!(to_bookable(&doc, &e, 8).is_none());
    }

    #[test]
    fn test_doctor_with_expired_windows_is_omitted() {
        let doc = doctor("Dr. Reid");
        let e = entry(doc.id, day(2024, 6, 10), true, true);

        assert!(to_bookable(&doc, &e, 19).is_none());
        assert!(to_bookable(&doc, &e, 23).is_none());
    }

    #[test]
    fn test_week_grid_has_seven_ascending_days_without_entries() {
        let today = day(2024, 6, 10);
        let week = build_week(today, &[], &[]);

        assert_eq!(week.len(), 7);
        for (offset, entry) in week.iter().enumerate() {
            assert_eq!(entry.date, today + Duration::days(offset as i64));
            assert_eq!(
                entry.morning,
                SlotStatus {
                    available: false,
                    booked: false
                }
            );
            assert_eq!(
                entry.evening,
                SlotStatus {
                    available: false,
                    booked: false
                }
            );
        }
    }

    #[test]
    fn test_scheduled_appointment_marks_slot_booked() {
        let doctor_id = Uuid::new_v4();
        let today = day(2024, 6, 10);
        let target = today + Duration::days(2);

        let entries = vec![entry(doctor_id, target, true, false)];
        let appointments = vec![appointment(
            doctor_id,
            target,
            SlotType::Morning,
            AppointmentStatus::Scheduled,
        )];

        let week = build_week(today, &entries, &appointments);
        let grid_day = &week[2];

        assert!(grid_day.morning.available);
        assert!(grid_day.morning.booked);
        assert!(!grid_day.evening.booked);
    }

    #[test]
    fn test_cancelled_appointment_does_not_mark_slot_booked() {
        let doctor_id = Uuid::new_v4();
        let today = day(2024, 6, 10);

        let appointments = vec![appointment(
            doctor_id,
            today,
            SlotType::Morning,
            AppointmentStatus::Cancelled,
        )];

        let week = build_week(today, &[], &appointments);
        assert!(!week[0].morning.booked);
    }

    #[test]
    fn test_multiple_bookings_collapse_to_one_flag() {
        let doctor_id = Uuid::new_v4();
        let today = day(2024, 6, 10);

        let appointments = vec![
            appointment(
                doctor_id,
                today,
                SlotType::Evening,
                AppointmentStatus::Scheduled,
            ),
            appointment(
                doctor_id,
                today,
                SlotType::Evening,
                AppointmentStatus::Scheduled,
            ),
        ];

        let week = build_week(today, &[], &appointments);
        assert!(week[0].evening.booked);
    }

    #[test]
    fn test_booking_outside_the_window_is_ignored() {
        let doctor_id = Uuid::new_v4();
        let today = day(2024, 6, 10);
        let past = today - Duration::days(1);

        let appointments = vec![appointment(
            doctor_id,
            past,
            SlotType::Morning,
            AppointmentStatus::Scheduled,
        )];

        let week = build_week(today, &[], &appointments);
        assert!(week.iter().all(|d| !d.morning.booked));
    }
}
