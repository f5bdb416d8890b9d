//! Use cases (application services)

pub mod degrade;
