pub mod payex_callback;
