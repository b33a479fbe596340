mod error;
mod http;
mod resolver;

pub use error::UpstreamError;
pub use http::{HttpGet, HttpResponse, ReqwestHttp};
pub use resolver::{UpstreamResolver, API_BASE};

pub type Result<T> = std::result::Result<T, UpstreamError>;
