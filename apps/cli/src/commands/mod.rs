pub mod audit;
pub mod check;
pub mod systems;

use std::process::ExitCode;

/// How a successful run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Every name passed, or nothing was checked.
    Clean,
    /// At least one name was rejected or misclassified.
    Rejected,
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        match status {
            Status::Clean => Self::SUCCESS,
            Status::Rejected => Self::from(1),
        }
    }
}
