pub mod client_controller;
pub mod controller_context;
pub mod health_controller;
pub mod policy_controller;

use chrono::{Local, NaiveDate};

/// Calendar date on the server's clock, read once per request for the
/// date-bound rules.
pub fn server_today() -> NaiveDate {
    Local::now().date_naive()
}
