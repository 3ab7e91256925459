mod myconfig;

pub use self::myconfig::{Config, DEFAULT_API_BASE_URL, default_session_path};
