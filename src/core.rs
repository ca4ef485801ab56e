pub mod balance;
pub mod battery;
pub mod calibration;
pub mod config;
pub mod dark_streak;
pub mod energy;
pub mod profile;
pub mod report;
pub mod runtime;
pub mod scenario;
pub mod simulator;
pub mod summary;
pub mod threshold;
