pub mod agents;
pub mod pricing;
pub mod registry;
pub mod rides;
pub mod scenario;
#[cfg(feature = "test-helpers")]
pub mod test_helpers;
