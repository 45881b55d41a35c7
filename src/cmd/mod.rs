pub mod calculate;
pub mod catalog;
pub mod compare;
pub mod migrate;
pub mod validate;
