mod api;
mod envelope;

pub use self::api::ApiResponse;
pub use self::envelope::Envelope;
