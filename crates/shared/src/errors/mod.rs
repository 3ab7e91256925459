mod client;
mod error;
mod session;

pub use self::client::ClientError;
pub use self::error::{ErrorBody, ErrorResponse};
pub use self::session::SessionStoreError;
