use thiserror::Error;

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum SheetError {
    #[error("row index {index} is out of range (sheet has {rows} rows)")]
    RowOutOfRange { index: usize, rows: usize },
}
