use super::{BackendError, BackendResult};
use crate::contact::{ContactForm, ContactSubmission};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

/// Receipt for a delivered contact form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub reference: Option<String>,
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait ContactSubmitter: Send + Sync {
    async fn submit(&self, submission: &ContactSubmission) -> BackendResult<Ack>;
}

/// Validates the form, then hands it to `submitter`.
pub async fn submit_contact_form(
    submitter: &dyn ContactSubmitter,
    form: &ContactForm,
) -> BackendResult<Ack> {
    let submission = form.validate()?;
    submitter.submit(&submission).await
}

#[derive(Clone, Copy, Debug, Default)]
pub struct UnwiredSubmitter;

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl ContactSubmitter for UnwiredSubmitter {
    async fn submit(&self, _submission: &ContactSubmission) -> BackendResult<Ack> {
        Err(BackendError::Unwired("contact form"))
    }
}

/// Posts submissions as JSON to a configured endpoint.
pub struct HttpSubmitter {
    endpoint: String,
    api_key: Option<String>,
    client: Client,
}

impl HttpSubmitter {
    pub fn new(endpoint: String, api_key: Option<String>) -> Self {
        Self::with_client(endpoint, api_key, Client::new())
    }

    pub fn with_client(endpoint: String, api_key: Option<String>, client: Client) -> Self {
        Self {
            endpoint,
            api_key,
            client,
        }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl ContactSubmitter for HttpSubmitter {
    async fn submit(&self, submission: &ContactSubmission) -> BackendResult<Ack> {
        let mut request = self.client.post(&self.endpoint).json(submission);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(BackendError::Endpoint {
                status: status.as_u16(),
                body,
            });
        }

        // An empty 2xx body still means the form was accepted.
        if body.trim().is_empty() {
            return Ok(Ack::default());
        }
        Ok(serde_json::from_str::<Ack>(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LicenseType;
    use httpmock::MockServer;
    use httpmock::prelude::*;
    use serde_json::json;

    fn filled_form() -> ContactForm {
        ContactForm {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            company: "Analytical Engines".to_string(),
            license_type: Some(LicenseType::Enterprise),
            message: "We have 40 unused seats.".to_string(),
        }
    }

    fn local_client() -> Client {
        Client::builder().no_proxy().build().unwrap()
    }

    #[tokio::test]
    async fn unwired_submitter_reports_missing_backend() {
        let result = submit_contact_form(&UnwiredSubmitter, &filled_form()).await;
        assert!(matches!(result, Err(BackendError::Unwired("contact form"))));
    }

    #[tokio::test]
    async fn invalid_form_never_reaches_submitter() {
        let mut form = filled_form();
        form.license_type = None;
        let result = submit_contact_form(&UnwiredSubmitter, &form).await;
        assert!(matches!(result, Err(BackendError::Invalid(_))));
    }

    #[tokio::test]
    async fn http_submitter_posts_json_with_bearer_key() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/contact")
                .header("authorization", "Bearer secret")
                .json_body(json!({
                    "name": "Ada Lovelace",
                    "email": "ada@example.com",
                    "company": "Analytical Engines",
                    "licenseType": "enterprise",
                    "message": "We have 40 unused seats.",
                }));
            then.status(200).json_body(json!({ "reference": "SS-1042" }));
        });

        let submitter = HttpSubmitter::with_client(
            server.url("/contact"),
            Some("secret".to_string()),
            local_client(),
        );
        let ack = submit_contact_form(&submitter, &filled_form()).await.unwrap();

        mock.assert();
        assert_eq!(ack.reference.as_deref(), Some("SS-1042"));
    }

    #[tokio::test]
    async fn http_submitter_accepts_empty_success_body() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(POST).path("/contact");
            then.status(204);
        });

        let submitter = HttpSubmitter::with_client(server.url("/contact"), None, local_client());
        let ack = submit_contact_form(&submitter, &filled_form()).await.unwrap();

        mock.assert();
        assert_eq!(ack, Ack::default());
    }

    #[tokio::test]
    async fn http_submitter_rejects_malformed_ack() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(POST).path("/contact");
            then.status(200).body(r#"{"reference": 42"#);
        });

        let submitter = HttpSubmitter::with_client(server.url("/contact"), None, local_client());
        let result = submit_contact_form(&submitter, &filled_form()).await;

        mock.assert();
        assert!(matches!(result, Err(BackendError::Decode(_))));
    }

    #[tokio::test]
    async fn http_submitter_surfaces_endpoint_errors() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(POST).path("/contact");
            then.status(503).body("down");
        });

        let submitter = HttpSubmitter::with_client(server.url("/contact"), None, local_client());
        let err = submit_contact_form(&submitter, &filled_form())
            .await
            .unwrap_err();

        mock.assert();
        match err {
            BackendError::Endpoint { status, body } => {
                assert_eq!(status, 503);
                assert_eq!(body, "down");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
