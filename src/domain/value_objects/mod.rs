pub mod enums;
pub mod payex_callback;
pub mod payex_responses;
pub mod response_status;
