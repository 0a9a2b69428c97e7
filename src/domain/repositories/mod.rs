pub mod payex_gateway;
pub mod payex_responses;
