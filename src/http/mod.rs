//! HTTP communication with the Kudu site-management API
//!
//! Every operation builds one URL, attaches the site's basic-auth
//! credentials, issues a single request, and hands the raw response
//! back to the caller (webjob upload issues two: a clearing DELETE
//! followed by the PUT).
//!
//! # Communication pattern
//!
//! ```text
//! Caller → KuduClient → PUT/GET/DELETE/POST → site API
//!    ↑          ↓
//! ApiResponse ← collect status/headers/body ← response
//!                       ↓
//!              auth-failure sniff (HTML 200 masking a 401)
//! ```
//!
//! The remote API is non-conformant about rejected credentials: it
//! answers with a 200-status HTML error page. The sniff in
//! [`client::ApiResponse::auth_failure`] compensates by inspecting the
//! content type and body instead of the status.

pub mod client;
pub mod vfs;
pub mod webjobs;

pub use client::{ApiResponse, KuduClient};
