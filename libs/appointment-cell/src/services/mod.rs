pub mod appointment;
pub mod scheduler;

pub use appointment::AppointmentService;
pub use scheduler::AppointmentSchedulerService;
