//! Reusable test utilities:
//! - Mock Kudu site server
//! - Test credentials and canned responses

// Allow unused code in test fixtures - they are utilities shared across test files
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod mock_site;

// Re-export commonly used items
pub use mock_site::{MockSiteServer, TEST_AUTH_HEADER, TEST_PASSWORD, TEST_USERNAME, UNAUTHORIZED_HTML};
