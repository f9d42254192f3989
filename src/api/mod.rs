//! HTTP API module for the Payslip Engine.
//!
//! This module exposes the payroll pipeline over REST: payslip computation,
//! salary slip download, salary slip email and bank advice export.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::{ADVICE_TOTAL_HEADER, create_router};
pub use request::{BankAdviceRequest, EmailRequest, SlipQuery};
pub use response::{ApiError, ApiErrorResponse, EmailResponse};
pub use state::AppState;
