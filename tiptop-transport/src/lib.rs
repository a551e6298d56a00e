//! HTTP transport for `tiptop-core`
//!
//! Implements [`tiptop_core::ContactTransport`] on top of `reqwest`, posting
//! the captured form fields as a JSON object and honouring the protocol's
//! abort signal.
//!
//! Endpoints may be absolute, or relative to a base URL given with
//! [`HttpTransport::with_base_url`]; the default `/api/kontakt` endpoint
//! needs one.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use tiptop_core::{Config, Interactions};
//! use tiptop_transport::HttpTransport;
//!
//! let base = url::Url::parse("https://tiptop.example")?;
//! let transport = HttpTransport::new().with_base_url(base);
//! let interactions = Interactions::attach(&page, &Config::default(), Arc::new(transport));
//! ```

mod http_client;
mod transport;

pub use http_client::HttpUtils;
pub use transport::HttpTransport;
