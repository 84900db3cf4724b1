pub mod gate;
pub mod response;

pub use gate::require_session;
pub use response::{ApiResponse, ApiResult};
