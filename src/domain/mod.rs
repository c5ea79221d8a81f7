pub mod commands;
pub mod device;
pub mod invoker;
