pub mod controller;
pub mod report;

pub use controller::Controller;
pub use report::{Contribution, RunReport, StatusChange};
