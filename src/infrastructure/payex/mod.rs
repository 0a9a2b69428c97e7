pub mod payex_client;
