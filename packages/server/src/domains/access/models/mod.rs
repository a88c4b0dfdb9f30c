pub mod access_request;
pub mod grant;

pub use access_request::*;
pub use grant::*;
