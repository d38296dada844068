//! Restmail async client implementation.

use crate::{Message, Result};
use reqwest::header::{ACCEPT, HeaderValue};
use std::time::Duration;
use tracing::debug;

/// Async client for the restmail.net disposable email service.
///
/// Use [`Client::new`] for the public service or [`Client::builder`] for
/// custom settings like a different endpoint, a request timeout, or a proxy.
#[derive(Debug)]
pub struct Client {
    http: reqwest::Client,
    endpoint: String,
}

impl Client {
    /// Create a builder for configuring the client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a new restmail client bound to `https://restmail.net`.
    ///
    /// # Examples
    /// ```no_run
    /// # use restmail_client::Client;
    /// let client = Client::new()?;
    /// # Ok::<(), restmail_client::Error>(())
    /// ```
    pub fn new() -> Result<Self> {
        ClientBuilder::new().build()
    }

    /// Get the endpoint this client talks to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Get all messages delivered to a mailbox.
    ///
    /// Issues a GET against `/mail/<account>` and decodes the JSON array in
    /// the response, preserving the server's delivery order (oldest first).
    /// An account that never received mail yields an empty vec, not an
    /// error. The HTTP status code is deliberately not inspected: whatever
    /// body comes back is decoded, so a non-JSON error page surfaces as
    /// [`Error::Decode`](crate::Error::Decode).
    ///
    /// # Arguments
    /// * `account` - The mailbox name (part before `@restmail.net`)
    ///
    /// # Examples
    /// ```no_run
    /// # use restmail_client::Client;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), restmail_client::Error> {
    /// let client = Client::new()?;
    /// let messages = client.get_messages("my-test-account").await?;
    /// for msg in messages {
    ///     println!("{}", msg.subject);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_messages(&self, account: &str) -> Result<Vec<Message>> {
        let url = self.mail_url(account);
        debug!("GET {url}");

        let body = self
            .http
            .get(&url)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .send()
            .await?
            .text()
            .await?;

        let messages = serde_json::from_str(&body)?;
        Ok(messages)
    }

    /// Delete all messages in a mailbox.
    ///
    /// Issues a DELETE against `/mail/<account>` and discards the response.
    /// The call succeeds whenever the round trip completes; the HTTP status
    /// code is not inspected, so a server-side rejection is not surfaced.
    ///
    /// # Arguments
    /// * `account` - The mailbox name to clear
    ///
    /// # Examples
    /// ```no_run
    /// # use restmail_client::Client;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), restmail_client::Error> {
    /// let client = Client::new()?;
    /// client.delete_account("my-test-account").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn delete_account(&self, account: &str) -> Result<()> {
        let url = self.mail_url(account);
        debug!("DELETE {url}");

        // Dropping the response releases the connection; the body is not read.
        self.http.delete(&url).send().await?;
        Ok(())
    }

    /// Mailbox URL for an account. The name is not validated or escaped.
    fn mail_url(&self, account: &str) -> String {
        format!("{}/mail/{}", self.endpoint, account)
    }
}

const ENDPOINT: &str = "https://restmail.net";

/// Builder for configuring a restmail client.
///
/// Start with [`Client::builder`] to override defaults.
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    endpoint: String,
    timeout: Option<Duration>,
    proxy: Option<String>,
}

impl ClientBuilder {
    /// Create a new builder with default settings.
    ///
    /// Defaults:
    /// - Public restmail.net endpoint
    /// - No request timeout
    /// - No proxy
    pub fn new() -> Self {
        Self {
            endpoint: ENDPOINT.to_string(),
            timeout: None,
            proxy: None,
        }
    }

    /// Override the service endpoint.
    ///
    /// Useful for pointing tests at a local mock server or a self-hosted
    /// restmail instance. A trailing slash is stripped.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        let endpoint = endpoint.into();
        self.endpoint = endpoint.trim_end_matches('/').to_string();
        self
    }

    /// Set a timeout applied to each request (default: none).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set a proxy URL (e.g., "http://127.0.0.1:8080").
    ///
    /// This uses reqwest's proxy support for all requests.
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Build the client.
    ///
    /// No network request is made; restmail mailboxes exist implicitly and
    /// need no session bootstrap.
    ///
    /// # Examples
    /// ```no_run
    /// # use restmail_client::Client;
    /// let client = Client::builder()
    ///     .timeout(std::time::Duration::from_secs(10))
    ///     .build()?;
    /// # Ok::<(), restmail_client::Error>(())
    /// ```
    pub fn build(self) -> Result<Client> {
        let mut builder = reqwest::Client::builder();

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        if let Some(proxy_url) = &self.proxy {
            builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
        }

        let http = builder.build()?;

        Ok(Client {
            http,
            endpoint: self.endpoint,
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use httpmock::prelude::*;
    use serde_json::json;

    fn test_client(server: &MockServer) -> Client {
        Client::builder()
            .endpoint(server.base_url())
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn get_messages_decodes_in_delivery_order() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/mail/alice")
                    .header("accept", "application/json");
                then.status(200).json_body(json!([
                    {
                        "text": "And this is body one.\n",
                        "subject": "This is message one",
                        "headers": {
                            "x-hello": "Hello, one!",
                            "received": ["by mx1", "by mx2"]
                        }
                    },
                    {
                        "text": "And this is body two.\n",
                        "subject": "This is message two",
                        "headers": { "x-hello": "Hello, two!" }
                    }
                ]));
            })
            .await;

        let client = test_client(&server);
        let messages = client.get_messages("alice").await.unwrap();
        mock.assert_async().await;

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].subject, "This is message one");
        assert_eq!(messages[0].text, "And this is body one.\n");
        assert_eq!(messages[0].headers["x-hello"], json!("Hello, one!"));
        // Repeated headers come back as arrays; the value shape is preserved.
        assert_eq!(messages[0].headers["received"], json!(["by mx1", "by mx2"]));
        assert_eq!(messages[1].subject, "This is message two");
        assert_eq!(messages[1].headers["x-hello"], json!("Hello, two!"));
    }

    #[tokio::test]
    async fn get_messages_returns_empty_for_untouched_mailbox() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/mail/nobody-ever-wrote-here");
                then.status(200).json_body(json!([]));
            })
            .await;

        let client = test_client(&server);
        let messages = client.get_messages("nobody-ever-wrote-here").await.unwrap();
        assert!(messages.is_empty());
    }

    #[tokio::test]
    async fn get_messages_decodes_body_regardless_of_status() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/mail/alice");
                then.status(404).json_body(json!([]));
            })
            .await;

        let client = test_client(&server);
        let messages = client.get_messages("alice").await.unwrap();
        assert!(messages.is_empty());
    }

    #[tokio::test]
    async fn get_messages_fails_on_non_json_body() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/mail/alice");
                then.status(200).body("<html>service unavailable</html>");
            })
            .await;

        let client = test_client(&server);
        let err = client.get_messages("alice").await.unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[tokio::test]
    async fn delete_account_succeeds_despite_server_error_status() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(DELETE).path("/mail/alice");
                then.status(500);
            })
            .await;

        let client = test_client(&server);
        client.delete_account("alice").await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_a_transport_error() {
        // Port 1 is unassigned on loopback; connections are refused.
        let client = Client::builder()
            .endpoint("http://127.0.0.1:1")
            .build()
            .unwrap();

        let err = client.get_messages("alice").await.unwrap_err();
        assert!(matches!(err, Error::Transport(_)));

        let err = client.delete_account("alice").await.unwrap_err();
        assert!(matches!(err, Error::Transport(_)));
    }

    #[test]
    fn builder_strips_trailing_slash() {
        let client = Client::builder()
            .endpoint("http://localhost:8080/")
            .build()
            .unwrap();
        assert_eq!(client.endpoint(), "http://localhost:8080");
    }
}
