//! Instruction builders, one module per program

pub mod gateway;
pub mod governance;
pub mod ledger;
