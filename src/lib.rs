//! # Expense Ledger
//!
//! Records expense entries (category + amount), lists them, and computes
//! a total, a daily average and the top expenses on demand.
//!
//! ## Design Principles
//!
//! - **Exact arithmetic**: Amounts use `rust_decimal` at full precision and are
//!   rounded to 2 decimal places only for display
//! - **Owned state**: The ledger lives inside a [`LedgerController`] for the
//!   length of a session; nothing is global and nothing is persisted
//! - **Explicit refresh**: Every command pushes its updates through a
//!   [`LedgerView`], so derivations are testable without a display
//! - **Fixed averaging period**: The daily average is always `total / 30`
//!
//! ## Example
//!
//! ```
//! use expense_ledger::{ExpenseForm, LedgerController, RecordingView};
//!
//! let mut controller = LedgerController::new(RecordingView::new());
//! let mut form = ExpenseForm::new("Rent", "1200");
//! assert!(controller.submit(&mut form).unwrap());
//! assert!(controller.calculate().unwrap());
//!
//! let results = controller.view().results.as_ref().unwrap();
//! assert_eq!(results.daily_average.display_currency(), "$40.00");
//! ```

pub mod amount;
pub mod controller;
pub mod error;
pub mod expense;
pub mod ledger;
pub mod script;
pub mod summary;
pub mod view;

pub use amount::Amount;
pub use controller::{LedgerController, EMPTY_LEDGER_WARNING};
pub use error::{LedgerError, Result};
pub use expense::{Expense, ExpenseForm};
pub use ledger::{Ledger, DAYS_PER_PERIOD, TOP_EXPENSES_LIMIT};
pub use script::{run_script, Command};
pub use summary::Summary;
pub use view::{LedgerView, RecordingView, TextView};
