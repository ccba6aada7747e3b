
pub use harness::{DeployParams, LocalBridge};
