//! Infrastructure configuration modules.

pub mod keeper;
pub mod logging;
pub mod network;
pub mod settings;
pub mod wallet;
