//! Ledger instructions

pub mod authority;
pub mod balances;
pub mod setup;
pub mod supply;

pub use authority::*;
pub use balances::*;
pub use setup::*;
pub use supply::*;
