pub mod client_identifier;
pub mod default_routers;
pub mod http_serve;
pub mod routers;
