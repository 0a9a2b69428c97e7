pub mod agreements;
pub mod payex_callback;
pub mod response_store;

#[cfg(test)]
pub(crate) mod test_support;
