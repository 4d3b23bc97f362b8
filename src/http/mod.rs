//! HTTP client construction and the request worker pool.
mod sender;
mod target;


pub(crate) use sender::{build_client, setup_request_workers};
pub(crate) use target::{Variant, endpoint_url};
