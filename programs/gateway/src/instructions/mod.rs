//! Gateway instructions

pub mod admin;
pub mod bridge;
pub mod ownership;
pub mod setup;

pub use admin::*;
pub use bridge::*;
pub use ownership::*;
pub use setup::*;
