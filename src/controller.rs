//! Ledger controller: the Add / Delete / Calculate commands.
//!
//! The controller owns the ledger for the lifetime of a session and pushes a
//! fresh render to its view after every command that changes what is shown.

use crate::error::Result;
use crate::expense::{Expense, ExpenseForm};
use crate::ledger::Ledger;
use crate::summary::Summary;
use crate::view::LedgerView;
use log::debug;

/// Warning issued when results are requested for an empty ledger.
pub const EMPTY_LEDGER_WARNING: &str = "Please add some expenses first!";

/// Mediates every mutation of the ledger and every refresh of its view.
///
/// # Results visibility
///
/// - Hidden at start.
/// - Shown by a successful [`calculate`](Self::calculate).
/// - Hidden again when a delete empties the ledger.
/// - Left unchanged by adds.
pub struct LedgerController<V: LedgerView> {
    ledger: Ledger,
    view: V,
    results_visible: bool,
}

impl<V: LedgerView> LedgerController<V> {
    /// Creates a controller with an empty ledger.
    pub fn new(view: V) -> Self {
        Self::with_ledger(Ledger::new(), view)
    }

    /// Creates a controller around an existing ledger.
    pub fn with_ledger(ledger: Ledger, view: V) -> Self {
        LedgerController {
            ledger,
            view,
            results_visible: false,
        }
    }

    /// Adds the expense described by `form`.
    ///
    /// Returns `Ok(false)` and leaves both the ledger and the form untouched when
    /// the input is invalid. On success the list is re-rendered and the form is
    /// cleared.
    pub fn submit(&mut self, form: &mut ExpenseForm) -> Result<bool> {
        let expense = match form.parse() {
            Some(expense) => expense,
            None => {
                debug!(
                    "Rejected expense (category {:?}, amount {:?})",
                    form.category, form.amount
                );
                return Ok(false);
            }
        };

        self.add(expense)?;
        form.clear();
        Ok(true)
    }

    /// Appends an already validated expense and re-renders the list.
    pub fn add(&mut self, expense: Expense) -> Result<()> {
        debug!("Added {} for {}", expense.amount, expense.category);
        self.ledger.push(expense);
        self.view.render_list(self.ledger.as_slice())
    }

    /// Removes the expense at `index` and refreshes the views.
    ///
    /// Visible results are recomputed, then hidden if the ledger is now empty.
    /// An out-of-range index changes nothing.
    pub fn delete(&mut self, index: usize) -> Result<Expense> {
        let removed = self.ledger.remove(index)?;
        debug!(
            "Deleted {} for {} at index {}",
            removed.amount, removed.category, index
        );

        self.view.render_list(self.ledger.as_slice())?;

        if self.results_visible {
            self.refresh_results()?;
            if self.ledger.is_empty() {
                self.results_visible = false;
                self.view.set_results_visible(false)?;
            }
        }

        Ok(removed)
    }

    /// Computes and shows the results.
    ///
    /// Returns `Ok(false)` after warning the user when the ledger is empty.
    pub fn calculate(&mut self) -> Result<bool> {
        if self.ledger.is_empty() {
            debug!("Calculate requested on an empty ledger");
            self.view.warn(EMPTY_LEDGER_WARNING)?;
            return Ok(false);
        }

        self.refresh_results()?;
        self.results_visible = true;
        self.view.set_results_visible(true)?;
        Ok(true)
    }

    fn refresh_results(&mut self) -> Result<()> {
        let summary = Summary::of(&self.ledger);
        self.view.render_results(&summary)
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn results_visible(&self) -> bool {
        self.results_visible
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Ends the session, handing back the view.
    pub fn into_view(self) -> V {
        self.view
    }
}
