//! linux2intune: a terminal launcher for Intune and Defender onboarding,
//! package updates and system information on Debian-family Linux hosts.

pub mod command;
pub mod config;
pub mod model;
pub mod storage;
pub mod tui;
