pub mod api_response;
pub mod validated_json;

pub use api_response::{ApiResponse, EmptyData};
pub use validated_json::ValidatedJson;
