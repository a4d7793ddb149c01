pub mod client_ext;
