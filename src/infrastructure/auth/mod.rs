//! Remote authentication service client.

mod http_auth_gateway;

pub use http_auth_gateway::HttpAuthGateway;
