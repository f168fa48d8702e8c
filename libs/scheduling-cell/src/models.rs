use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The two bookable time windows of a clinic day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotType {
    Morning,
    Evening,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentRecord {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Doctor {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub department_id: Uuid,
    pub experience_years: Option<i32>,
}

/// A doctor's declaration of which slots they offer on a date. One row per
/// (doctor, date); the latest write wins, no history is retained.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotCalendarEntry {
    pub doctor_id: Uuid,
    pub date: NaiveDate,
    pub morning_available: bool,
    pub evening_available: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Scheduled,
    Completed,
    Cancelled,
    #[serde(other)]
    Other,
}

/// A confirmed patient-doctor-date-slot assignment. Only `scheduled` entries
/// count as bookings; lifecycle transitions happen in the booking collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    pub doctor_id: Uuid,
    pub patient_id: Uuid,
    pub date: NaiveDate,
    pub slot_type: SlotType,
    pub status: AppointmentStatus,
}

/// A doctor reachable today, with the slots still inside their time window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookableDoctor {
    pub id: Uuid,
    pub name: String,
    pub experience_years: Option<i32>,
    pub morning_bookable: bool,
    pub evening_bookable: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentMatch {
    pub about: String,
    pub doctors: Vec<BookableDoctor>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotStatus {
    pub available: bool,
    pub booked: bool,
}

/// One day of the derived dashboard grid. Never stored; recomputed per request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayAvailability {
    pub date: NaiveDate,
    pub morning: SlotStatus,
    pub evening: SlotStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoctorDashboard {
    pub appointments: Vec<Appointment>,
    pub availability: Vec<DayAvailability>,
}

/// Both booleans are required together; a partial update would silently keep
/// stale state under last-write-wins.
#[derive(Debug, Clone, Deserialize)]
pub struct SetAvailabilityRequest {
    pub date: NaiveDate,
    pub morning: bool,
    pub evening: bool,
}
