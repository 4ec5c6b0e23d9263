//! Presentation seam between the controller and whatever displays the ledger.
//!
//! The controller pushes every update through [`LedgerView`]; it never reads
//! anything back, so derivations stay testable without a rendering surface.

use crate::error::Result;
use crate::expense::Expense;
use crate::summary::Summary;
use std::io::Write;

/// Output surfaces the controller writes to.
pub trait LedgerView {
    /// Redraws the expense list, one row per record in ledger order.
    fn render_list(&mut self, expenses: &[Expense]) -> Result<()>;

    /// Redraws the total, daily average and top expenses.
    fn render_results(&mut self, summary: &Summary) -> Result<()>;

    /// Shows or hides the results container.
    fn set_results_visible(&mut self, visible: bool) -> Result<()>;

    /// Shows a blocking, user-facing warning.
    fn warn(&mut self, message: &str) -> Result<()>;
}

impl<V: LedgerView + ?Sized> LedgerView for &mut V {
    fn render_list(&mut self, expenses: &[Expense]) -> Result<()> {
        (**self).render_list(expenses)
    }

    fn render_results(&mut self, summary: &Summary) -> Result<()> {
        (**self).render_results(summary)
    }

    fn set_results_visible(&mut self, visible: bool) -> Result<()> {
        (**self).set_results_visible(visible)
    }

    fn warn(&mut self, message: &str) -> Result<()> {
        (**self).warn(message)
    }
}

/// Plain-text renderer writing each update to a writer.
///
/// ```text
/// Expenses:
///   [0] Groceries  $50.00
/// ```
pub struct TextView<W: Write> {
    writer: W,
    results_visible: bool,
}

impl<W: Write> TextView<W> {
    pub fn new(writer: W) -> Self {
        TextView {
            writer,
            results_visible: false,
        }
    }

    /// Consumes the view and returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> LedgerView for TextView<W> {
    fn render_list(&mut self, expenses: &[Expense]) -> Result<()> {
        writeln!(self.writer, "Expenses:")?;
        if expenses.is_empty() {
            writeln!(self.writer, "  (none)")?;
        }
        for (index, expense) in expenses.iter().enumerate() {
            writeln!(
                self.writer,
                "  [{}] {}  {}",
                index,
                expense.category,
                expense.amount.display_currency()
            )?;
        }
        self.writer.flush()?;
        Ok(())
    }

    fn render_results(&mut self, summary: &Summary) -> Result<()> {
        writeln!(self.writer, "Results:")?;
        writeln!(
            self.writer,
            "  Total Expenses: {}",
            summary.total.display_currency()
        )?;
        writeln!(
            self.writer,
            "  Average Daily Expense: {}",
            summary.daily_average.display_currency()
        )?;
        writeln!(self.writer, "  Top Expenses:")?;
        for line in summary.top_expense_lines() {
            writeln!(self.writer, "    {}", line)?;
        }
        self.writer.flush()?;
        Ok(())
    }

    fn set_results_visible(&mut self, visible: bool) -> Result<()> {
        if self.results_visible && !visible {
            writeln!(self.writer, "Results hidden")?;
            self.writer.flush()?;
        }
        self.results_visible = visible;
        Ok(())
    }

    fn warn(&mut self, message: &str) -> Result<()> {
        writeln!(self.writer, "Warning: {}", message)?;
        self.writer.flush()?;
        Ok(())
    }
}

/// View that keeps the last rendered state in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingView {
    /// Rows from the most recent list render.
    pub list: Vec<Expense>,

    /// Most recent results render, if any.
    pub results: Option<Summary>,

    /// Whether the results container is currently shown.
    pub results_visible: bool,

    /// Every warning issued, oldest first.
    pub warnings: Vec<String>,

    /// Number of list renders received.
    pub list_renders: usize,

    /// Number of results renders received.
    pub results_renders: usize,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LedgerView for RecordingView {
    fn render_list(&mut self, expenses: &[Expense]) -> Result<()> {
        self.list = expenses.to_vec();
        self.list_renders += 1;
        Ok(())
    }

    fn render_results(&mut self, summary: &Summary) -> Result<()> {
        self.results = Some(summary.clone());
        self.results_renders += 1;
        Ok(())
    }

    fn set_results_visible(&mut self, visible: bool) -> Result<()> {
        self.results_visible = visible;
        Ok(())
    }

    fn warn(&mut self, message: &str) -> Result<()> {
        self.warnings.push(message.to_string());
        Ok(())
    }
}
