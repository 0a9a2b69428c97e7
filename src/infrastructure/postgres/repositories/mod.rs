pub mod payex_responses;
