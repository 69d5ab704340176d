pub mod bytes;
pub mod cn;
pub mod config_cmd;

pub use bytes::execute_bytes;
pub use cn::execute_cn;
pub use config_cmd::execute_config;
