pub mod id_store;
