use serde::{Deserialize, Serialize};

use self::data::DataConfig;
use self::server::ServerConfig;

pub mod data;
pub mod server;

#[derive(Serialize, Deserialize)]
pub struct Config {
    pub data: DataConfig,
    pub server: ServerConfig,
}

impl Config {
    pub fn new() -> Self {
        Config {
            data: DataConfig::new(),
            server: ServerConfig::new(),
        }
    }
}
