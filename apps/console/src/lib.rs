pub mod clinic;
pub mod shell;

pub use clinic::Clinic;
pub use shell::Shell;
