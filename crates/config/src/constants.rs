pub const TOP_LEVEL_DOMAIN: &str = "com";
pub const AUTHOR: &str = "querywise";
pub const APP_NAME: &str = "querywise-site";

pub const SERVER_CONFIG_FILE_NAME: &str = "server.toml";
pub const UNIX_SOCKET_FILE_NAME: &str = "content-search.sock";
