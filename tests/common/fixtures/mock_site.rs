//! Mock Kudu site server for testing
//!
//! Stands in for a site's management endpoint so client operations can
//! be exercised without a deployed site.

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use kudu_client::{Credentials, KuduClient};

pub const TEST_USERNAME: &str = "deploy";
pub const TEST_PASSWORD: &str = "s3cret";
/// Basic-auth header value for TEST_USERNAME:TEST_PASSWORD
pub const TEST_AUTH_HEADER: &str = "Basic ZGVwbG95OnMzY3JldA==";

/// The HTML error page the site serves with status 200 when the
/// credentials are rejected.
pub const UNAUTHORIZED_HTML: &str = "<html><head><title>401 - Unauthorized: Access is denied due to invalid credentials.</title></head>\
<body><h2>401 - Unauthorized: Access is denied due to invalid credentials.</h2>\
<p>You do not have permission to view this directory or page using the credentials that you supplied.</p></body></html>";

/// Capture client logs when RUST_LOG is set; repeat calls are no-ops
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

/// Mock site server that simulates Kudu API responses
pub struct MockSiteServer {
    pub server: MockServer,
    pub base_url: String,
}

impl MockSiteServer {
    /// Create a new mock site server
    pub async fn start() -> Self {
        init_tracing();
        let server = MockServer::start().await;
        let base_url = server.uri();
        Self { server, base_url }
    }

    /// Client configured with the test credentials against this server
    pub fn client(&self) -> KuduClient {
        KuduClient::with_credentials(
            self.base_url.clone(),
            Credentials {
                username: TEST_USERNAME.to_string(),
                password: TEST_PASSWORD.to_string(),
            },
        )
    }

    /// Mock a successful JSON response at an exact path
    pub async fn mock_success(&self, verb: &str, exact_path: &str) {
        Mock::given(method(verb))
            .and(path(exact_path))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": "ok"})))
            .mount(&self.server)
            .await;
    }

    /// Mock the rejected-credentials HTML page at an exact path
    pub async fn mock_unauthorized(&self, verb: &str, exact_path: &str) {
        Mock::given(method(verb))
            .and(path(exact_path))
            .respond_with(ResponseTemplate::new(200).set_body_raw(UNAUTHORIZED_HTML, "text/html"))
            .mount(&self.server)
            .await;
    }
}
