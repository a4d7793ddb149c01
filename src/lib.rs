pub mod client;
pub mod cmd;
pub mod ptb;
pub mod store;
pub mod transactions;
pub mod types;
pub mod utils;
