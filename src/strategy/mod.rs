pub mod filter;
pub mod panic;
pub mod plugin;
pub mod runner;
