pub mod object_ext;
