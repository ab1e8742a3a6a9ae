//! Error types shared by the agents and the layout parser.

use thiserror::Error;

/// Errors an agent can report from its decision hook.
///
/// Running out of budget is not an error; it is the normal way a deep search ends.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AgentError {
    /// The caller asked for a decision in a state that offers no legal action.
    #[error("invalid state: {reason}")]
    InvalidState { reason: String },
}

impl AgentError {
    pub(crate) fn no_legal_actions() -> Self {
        AgentError::InvalidState {
            reason: "no legal actions available from the current state".to_string(),
        }
    }
}

/// Errors produced while parsing a maze layout from text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("invalid number of rows: expected at most {max}, found {found}")]
    TooManyRows { max: usize, found: usize },
    #[error("row {row} is too long: expected at most {max} characters, found {found}")]
    RowTooLong { row: usize, max: usize, found: usize },
    #[error("unrecognized character '{ch}' in row {row} col {col}")]
    UnrecognizedTile { ch: char, row: usize, col: usize },
    #[error("layout has no agent start position ('P')")]
    MissingAgent,
    #[error("layout has more than one agent start position, second at ({row}, {col})")]
    DuplicateAgent { row: usize, col: usize },
}
