//! The ordered collection of expenses and the figures derived from it.
//!
//! Every derivation is recomputed from the current records on each call;
//! nothing is cached between mutations.

use crate::amount::Amount;
use crate::error::{LedgerError, Result};
use crate::expense::Expense;
use std::io::Write;

/// Fixed number of days the total is spread over for the daily average.
pub const DAYS_PER_PERIOD: u32 = 30;

/// Number of entries shown in the top expenses list.
pub const TOP_EXPENSES_LIMIT: usize = 3;

/// An in-memory, insertion-ordered list of expenses.
///
/// Records are identified only by their current position. Validation happens
/// before a record is pushed; the ledger itself never re-checks its contents.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    expenses: Vec<Expense>,
}

impl Ledger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Ledger {
            expenses: Vec::new(),
        }
    }

    /// Appends an expense to the end of the ledger.
    pub fn push(&mut self, expense: Expense) {
        self.expenses.push(expense);
    }

    /// Removes and returns the expense at `index`.
    ///
    /// Later records shift left by one.
    pub fn remove(&mut self, index: usize) -> Result<Expense> {
        if index >= self.expenses.len() {
            return Err(LedgerError::IndexOutOfRange {
                index,
                len: self.expenses.len(),
            });
        }
        Ok(self.expenses.remove(index))
    }

    pub fn get(&self, index: usize) -> Option<&Expense> {
        self.expenses.get(index)
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Expense> {
        self.expenses.iter()
    }

    pub fn as_slice(&self) -> &[Expense] {
        &self.expenses
    }

    /// Sum of every amount; zero for an empty ledger.
    ///
    /// Saturates at the largest representable amount rather than overflowing.
    pub fn total(&self) -> Amount {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    /// Total spread over [`DAYS_PER_PERIOD`] days, regardless of when the
    /// expenses were recorded.
    pub fn daily_average(&self) -> Amount {
        self.total().per_day(DAYS_PER_PERIOD)
    }

    /// Up to `limit` expenses ordered by amount, largest first.
    ///
    /// The sort is stable, so equal amounts keep their insertion order.
    pub fn top_expenses(&self, limit: usize) -> Vec<Expense> {
        let mut sorted: Vec<&Expense> = self.expenses.iter().collect();
        sorted.sort_by(|a, b| b.amount.cmp(&a.amount));
        sorted.into_iter().take(limit).cloned().collect()
    }

    /// Writes the ledger as CSV with a `category,amount` header.
    ///
    /// Amounts are formatted with exactly 2 decimal places.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        if self.expenses.is_empty() {
            csv_writer.write_record(["category", "amount"])?;
        }
        for expense in &self.expenses {
            csv_writer.serialize(expense)?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a Expense;
    type IntoIter = std::slice::Iter<'a, Expense>;

    fn into_iter(self) -> Self::IntoIter {
        self.expenses.iter()
    }
}

impl FromIterator<Expense> for Ledger {
    fn from_iter<I: IntoIterator<Item = Expense>>(iter: I) -> Self {
        Ledger {
            expenses: iter.into_iter().collect(),
        }
    }
}
