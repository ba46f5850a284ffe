pub mod command;
pub mod init_tracing;
