// Declare service modules
pub mod catalog;
pub mod orders;
