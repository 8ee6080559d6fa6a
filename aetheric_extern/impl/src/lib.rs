pub mod contact_api;
pub mod http;
