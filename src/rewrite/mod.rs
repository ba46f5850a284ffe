pub mod atomic_write;
pub mod find_files;
pub mod options;
pub mod replace_literal;
pub mod rewrite_file;
pub mod rewrite_tree;
