pub mod catalog;
pub mod coefficients;
pub mod compare;
pub mod config;
pub mod dates;
pub mod error;
pub mod migration;
pub mod pricing;
// cmd and reports are binary modules (declared in main.rs).
