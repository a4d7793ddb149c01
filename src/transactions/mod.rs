pub mod factory;
pub mod warehouse;
