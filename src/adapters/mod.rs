pub mod lobster_io;
pub mod source_tree;
