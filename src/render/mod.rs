//! Document rendering for the Payslip Engine.
//!
//! This module turns computed payslips into salary slip documents (PDF or
//! plain text) and bank advice batches into CSV files. Rendering is pure:
//! documents are returned in memory and identical inputs always produce
//! byte-identical output.

mod advice;
mod money;
mod pdf;
mod slip;

pub use advice::{ADVICE_HEADER, advice_filename, render_advice};
pub use money::{format_money, format_plain};
pub use pdf::{LINES_PER_PAGE, encode_pdf};
pub use slip::{SLIP_WIDTH, SlipFormat, SlipRenderer, slip_filename};
