//! Command workflows, decoupled from clap so they can be driven from tests

pub mod undo;

pub use undo::{UndoArgs, UndoCommand, UndoMode, UndoOutcome};
