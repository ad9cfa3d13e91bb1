mod generate;
mod init;
mod list;

pub use generate::{GenerateConfig, generate_code};
pub use init::init_config;
pub use list::{list_operations, list_schemas};
