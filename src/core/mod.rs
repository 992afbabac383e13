pub mod backup;
pub mod clear;
pub mod clock;
pub mod export;
pub mod punch;
