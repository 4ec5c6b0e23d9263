//! Command scripts that drive a [`LedgerController`] from CSV rows.
//!
//! Each row is one command:
//!
//! ```text
//! add,Groceries,50.00
//! add,Rent,1200
//! delete,0
//! calculate
//! ```
//!
//! Rows are streamed one at a time, so a script can be typed interactively.
//! Blank rows and rows whose first field starts with `#` are skipped.

use crate::controller::LedgerController;
use crate::error::{LedgerError, Result};
use crate::expense::ExpenseForm;
use crate::view::LedgerView;
use csv::{ReaderBuilder, StringRecord, Trim};
use log::{debug, info, warn};
use std::io::Read;

/// A single parsed script command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Submit the category and amount fields.
    Add(ExpenseForm),

    /// Remove the expense at a 0-based index.
    Delete(usize),

    /// Compute and show the results.
    Calculate,
}

impl Command {
    /// Parses one CSV record.
    ///
    /// Returns `Ok(None)` for blank and comment rows.
    pub fn parse(record: &StringRecord, row: usize) -> Result<Option<Command>> {
        let name = match record.get(0) {
            Some(name) if !name.is_empty() => name,
            _ => return Ok(None),
        };
        if name.starts_with('#') {
            return Ok(None);
        }

        let invalid = |message: String| LedgerError::InvalidCommand { row, message };

        let command = match name.to_lowercase().as_str() {
            "add" => {
                if record.len() != 3 {
                    return Err(invalid(format!(
                        "add expects a category and an amount, got {} field(s)",
                        record.len() - 1
                    )));
                }
                Command::Add(ExpenseForm::new(&record[1], &record[2]))
            }
            "delete" => {
                if record.len() != 2 {
                    return Err(invalid("delete expects a single index".to_string()));
                }
                let index = record[1]
                    .parse::<usize>()
                    .map_err(|e| invalid(format!("bad index {:?}: {}", &record[1], e)))?;
                Command::Delete(index)
            }
            "calculate" => Command::Calculate,
            other => return Err(invalid(format!("unknown command {:?}", other))),
        };

        Ok(Some(command))
    }
}

/// Runs every command in `reader` against `controller`.
///
/// Malformed rows, rejected deletes and unknown commands are logged at warn
/// level and skipped. View and I/O failures stop processing.
pub fn run_script<R: Read, V: LedgerView>(
    controller: &mut LedgerController<V>,
    reader: R,
) -> Result<()> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .trim(Trim::All)
        .flexible(true)
        .comment(Some(b'#'))
        .from_reader(reader);

    let mut applied = 0usize;
    for (row_idx, result) in csv_reader.records().enumerate() {
        let row_num = row_idx + 1;

        let record = match result {
            Ok(record) => record,
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => {
                warn!("Row {}: CSV parse error: {}", row_num, e);
                continue;
            }
        };

        let command = match Command::parse(&record, row_num) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                warn!("{}", e);
                continue;
            }
        };

        match apply(controller, command, row_num) {
            Ok(()) => applied += 1,
            Err(e @ LedgerError::IndexOutOfRange { .. }) => {
                warn!("Row {}: {}", row_num, e);
            }
            Err(e) => return Err(e),
        }
    }

    info!(
        "Script finished: {} command(s) applied, {} expense(s) in ledger",
        applied,
        controller.ledger().len()
    );
    Ok(())
}

fn apply<V: LedgerView>(
    controller: &mut LedgerController<V>,
    command: Command,
    row: usize,
) -> Result<()> {
    match command {
        Command::Add(mut form) => {
            if !controller.submit(&mut form)? {
                debug!("Row {}: Expense rejected", row);
            }
        }
        Command::Delete(index) => {
            controller.delete(index)?;
        }
        Command::Calculate => {
            if !controller.calculate()? {
                debug!("Row {}: Nothing to calculate", row);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::RecordingView;
    use std::io::Cursor;

    fn run(script: &str) -> LedgerController<RecordingView> {
        let mut controller = LedgerController::new(RecordingView::new());
        run_script(&mut controller, Cursor::new(script)).unwrap();
        controller
    }

    fn record(fields: &[&str]) -> StringRecord {
        StringRecord::from(fields.to_vec())
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            Command::parse(&record(&["add", "Rent", "1200"]), 1).unwrap(),
            Some(Command::Add(ExpenseForm::new("Rent", "1200")))
        );
        assert_eq!(
            Command::parse(&record(&["DELETE", "2"]), 1).unwrap(),
            Some(Command::Delete(2))
        );
        assert_eq!(
            Command::parse(&record(&["Calculate"]), 1).unwrap(),
            Some(Command::Calculate)
        );
        assert_eq!(Command::parse(&record(&[""]), 1).unwrap(), None);
    }

    #[test]
    fn test_parse_rejects_malformed_rows() {
        assert!(matches!(
            Command::parse(&record(&["add", "Rent"]), 4),
            Err(LedgerError::InvalidCommand { row: 4, .. })
        ));
        assert!(matches!(
            Command::parse(&record(&["delete", "first"]), 2),
            Err(LedgerError::InvalidCommand { row: 2, .. })
        ));
        assert!(matches!(
            Command::parse(&record(&["delete", "-1"]), 2),
            Err(LedgerError::InvalidCommand { .. })
        ));
        assert!(matches!(
            Command::parse(&record(&["refund", "3"]), 1),
            Err(LedgerError::InvalidCommand { .. })
        ));
    }

    #[test]
    fn test_sample_session() {
        let c = run("add,Groceries,50.00\nadd,Rent,1200.00\nadd,Coffee,4.50\ncalculate\n");

        assert_eq!(c.ledger().len(), 3);
        assert!(c.results_visible());
        let results = c.view().results.as_ref().unwrap();
        assert_eq!(results.total.to_string(), "1254.50");
        assert_eq!(results.daily_average.to_string(), "41.82");
    }

    #[test]
    fn test_invalid_rows_are_skipped() {
        let c = run(
            "add,Groceries,50\nadd,X,-5\nadd,,10\nbogus\ndelete,9\nadd,Only two\ndelete,x\nadd,Rent,1200\n",
        );

        let categories: Vec<_> = c.ledger().iter().map(|e| e.category.as_str()).collect();
        assert_eq!(categories, ["Groceries", "Rent"]);
    }

    #[test]
    fn test_comments_and_blank_lines() {
        let c = run("# monthly\n\nadd, Rent , 1200\n\n# done\ncalculate\n");
        assert_eq!(c.ledger().len(), 1);
        assert_eq!(c.ledger().get(0).unwrap().category, "Rent");
        assert!(c.results_visible());
    }

    #[test]
    fn test_delete_to_empty_hides_results() {
        let c = run("add,Rent,1200\ncalculate\ndelete,0\n");
        assert!(c.ledger().is_empty());
        assert!(!c.results_visible());
    }

    #[test]
    fn test_calculate_on_empty_script_warns() {
        let c = run("calculate\n");
        assert_eq!(c.view().warnings.len(), 1);
        assert!(!c.results_visible());
    }
}
