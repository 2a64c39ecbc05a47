pub mod account;
pub mod allocate;
pub mod table;
pub mod validate;
