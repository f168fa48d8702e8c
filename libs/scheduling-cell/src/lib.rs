pub mod error;
pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use error::SchedulingError;
pub use models::{
    Appointment, AppointmentStatus, BookableDoctor, DayAvailability, DepartmentMatch, Doctor,
    DoctorDashboard, SetAvailabilityRequest, SlotCalendarEntry, SlotStatus, SlotType,
};
pub use router::scheduling_routes;
pub use services::availability::AvailabilityService;
