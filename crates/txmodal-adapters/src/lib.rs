pub mod config;
pub mod explorer;
pub mod watch_asset;

pub use config::{ConfigError, ModalConfig};
pub use explorer::ExplorerAdapter;
pub use watch_asset::WatchAssetAdapter;
