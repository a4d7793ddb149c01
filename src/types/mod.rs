pub mod cooler;
