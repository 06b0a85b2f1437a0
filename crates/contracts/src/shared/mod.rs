pub mod api_error;
pub mod assets;
pub mod date_utils;
pub mod envelope;
pub mod history;
pub mod list_query;
pub mod normalize;
pub mod serde_utils;
pub mod tone;
