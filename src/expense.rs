//! Expense records and the input form that produces them.

use crate::amount::Amount;
use serde::Serialize;

/// One category + amount entry in the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Expense {
    /// Free-form label, trimmed but otherwise kept as entered.
    pub category: String,

    /// Strictly positive amount at full precision.
    pub amount: Amount,
}

impl Expense {
    /// Validates a category and amount, returning `None` when either is unusable.
    ///
    /// The category must be non-empty after trimming and the amount must be
    /// greater than zero.
    pub fn new(category: &str, amount: Amount) -> Option<Self> {
        let category = category.trim();
        if category.is_empty() || !amount.is_positive() {
            return None;
        }

        Some(Expense {
            category: category.to_string(),
            amount,
        })
    }
}

/// Raw contents of the category and amount input fields.
///
/// Nothing is validated until [`ExpenseForm::parse`] is called.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseForm {
    /// Category text as typed.
    pub category: String,

    /// Amount text as typed.
    pub amount: String,
}

impl ExpenseForm {
    /// Creates a form pre-filled with the given field values.
    pub fn new(category: impl Into<String>, amount: impl Into<String>) -> Self {
        ExpenseForm {
            category: category.into(),
            amount: amount.into(),
        }
    }

    /// Parses the fields into an expense.
    ///
    /// Returns `None` if the category is blank or the amount is not a positive number.
    pub fn parse(&self) -> Option<Expense> {
        let amount = Amount::parse_positive(&self.amount)?;
        Expense::new(&self.category, amount)
    }

    /// Empties both fields.
    pub fn clear(&mut self) {
        self.category.clear();
        self.amount.clear();
    }

    /// Returns `true` if both fields are empty.
    pub fn is_empty(&self) -> bool {
        self.category.is_empty() && self.amount.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_form() {
        let form = ExpenseForm::new("Groceries", "50.00");

        let expense = form.parse().unwrap();
        assert_eq!(expense.category, "Groceries");
        assert_eq!(expense.amount.to_string(), "50.00");
    }

    #[test]
    fn test_parse_trims_category_but_keeps_case() {
        let form = ExpenseForm::new("  eating Out  ", " 12.5 ");

        let expense = form.parse().unwrap();
        assert_eq!(expense.category, "eating Out");
        assert_eq!(expense.amount.to_string(), "12.50");
    }

    #[test]
    fn test_parse_rejects_blank_category() {
        assert!(ExpenseForm::new("", "10").parse().is_none());
        assert!(ExpenseForm::new("   ", "10").parse().is_none());
    }

    #[test]
    fn test_parse_rejects_bad_amounts() {
        assert!(ExpenseForm::new("X", "-5").parse().is_none());
        assert!(ExpenseForm::new("X", "0").parse().is_none());
        assert!(ExpenseForm::new("X", "ten").parse().is_none());
        assert!(ExpenseForm::new("X", "").parse().is_none());
    }

    #[test]
    fn test_parse_does_not_touch_fields() {
        let form = ExpenseForm::new("X", "-5");
        assert!(form.parse().is_none());
        assert_eq!(form, ExpenseForm::new("X", "-5"));
    }

    #[test]
    fn test_clear_empties_fields() {
        let mut form = ExpenseForm::new("Rent", "1200");
        assert!(!form.is_empty());

        form.clear();
        assert!(form.is_empty());
    }

    #[test]
    fn test_expense_new_rejects_zero_amount() {
        assert!(Expense::new("Coffee", Amount::ZERO).is_none());
    }
}
