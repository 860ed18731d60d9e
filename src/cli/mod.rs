pub mod args;
pub mod delimiter;
pub mod exit;
pub mod logging;
