pub mod forward;
pub mod ownership;
pub mod setup;

pub use forward::*;
pub use ownership::*;
pub use setup::*;
