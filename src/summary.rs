//! Results view model: total, daily average and top expenses.

use crate::amount::Amount;
use crate::expense::Expense;
use crate::ledger::{Ledger, TOP_EXPENSES_LIMIT};
use serde::Serialize;

/// Placeholder shown in each top-expense slot when the ledger is empty.
pub const PLACEHOLDER: &str = "-";

/// A snapshot of the aggregate statistics for a ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: Amount,
    pub daily_average: Amount,
    pub top_expenses: Vec<Expense>,
}

impl Summary {
    /// Computes the statistics for the current contents of `ledger`.
    pub fn of(ledger: &Ledger) -> Self {
        Summary {
            total: ledger.total(),
            daily_average: ledger.daily_average(),
            top_expenses: ledger.top_expenses(TOP_EXPENSES_LIMIT),
        }
    }

    /// Display lines for the top expenses, e.g. `Rent: $1200.00`.
    ///
    /// An empty ledger yields one placeholder per slot.
    pub fn top_expense_lines(&self) -> Vec<String> {
        if self.top_expenses.is_empty() {
            return vec![PLACEHOLDER.to_string(); TOP_EXPENSES_LIMIT];
        }

        self.top_expenses
            .iter()
            .map(|e| format!("{}: {}", e.category, e.amount.display_currency()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger(entries: &[(&str, &str)]) -> Ledger {
        entries
            .iter()
            .filter_map(|(c, a)| Expense::new(c, Amount::parse_positive(a)?))
            .collect()
    }

    #[test]
    fn test_summary_of_sample_ledger() {
        let summary = Summary::of(&ledger(&[
            ("Groceries", "50.00"),
            ("Rent", "1200.00"),
            ("Coffee", "4.50"),
        ]));

        assert_eq!(summary.total.display_currency(), "$1254.50");
        assert_eq!(summary.daily_average.display_currency(), "$41.82");
        assert_eq!(
            summary.top_expense_lines(),
            ["Rent: $1200.00", "Groceries: $50.00", "Coffee: $4.50"]
        );
    }

    #[test]
    fn test_empty_summary_pads_placeholders() {
        let summary = Summary::of(&Ledger::new());

        assert!(summary.total.is_zero());
        assert_eq!(summary.top_expense_lines(), ["-", "-", "-"]);
    }

    #[test]
    fn test_short_ledger_lists_only_existing_records() {
        let summary = Summary::of(&ledger(&[("Taxi", "18"), ("Lunch", "9.99")]));
        assert_eq!(summary.top_expense_lines(), ["Taxi: $18.00", "Lunch: $9.99"]);
    }
}
