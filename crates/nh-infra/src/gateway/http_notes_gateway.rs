//! reqwest-backed implementation of [`NotesGatewayPort`].

use std::time::Duration;

use nh_core::ports::NotesGatewayPort;
use nh_core::{
    AppConfig, DeleteNoteResponse, GatewayError, ListNotesParams, NewNote, Note, NoteId,
    NotesPage,
};
use reqwest::{Client, Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::error_mapping::{decode_error, server_error, transport_error};

pub struct HttpNotesGateway {
    client: Client,
    base_url: Url,
    token: Option<String>,
}

impl HttpNotesGateway {
    pub fn new(
        base_url: impl Into<String>,
        token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayError::Network(format!("failed to build HTTP client: {}", e)))?;

        let raw = base_url.into();
        let base_url = Url::parse(raw.trim_end_matches('/'))
            .map_err(|e| GatewayError::Network(format!("invalid base URL '{}': {}", raw, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(GatewayError::Network(format!(
                "base URL '{}' cannot hold note paths",
                raw
            )));
        }

        Ok(Self {
            client,
            base_url,
            token,
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, GatewayError> {
        Self::new(
            config.api_base_url.clone(),
            config.token.clone(),
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let builder = self.client.request(method, url);
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// `<base>/<id>` with the id as a single percent-encoded path segment.
    fn note_url(&self, id: &NoteId) -> Result<Url, GatewayError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                GatewayError::Network(format!("base URL '{}' cannot hold note paths", self.base_url))
            })?
            .pop_if_empty()
            .push(id.as_str());
        Ok(url)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        builder: RequestBuilder,
    ) -> Result<T, GatewayError> {
        let response = builder.send().await.map_err(|e| {
            warn!(operation, error = %e, "notes request did not complete");
            transport_error(e)
        })?;

        decode(operation, response).await
    }
}

async fn decode<T: DeserializeOwned>(
    operation: &'static str,
    response: Response,
) -> Result<T, GatewayError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let err = server_error(status.as_u16(), status.canonical_reason(), &body);
        warn!(operation, status = status.as_u16(), error = %err, "notes request rejected");
        return Err(err);
    }

    let bytes = response.bytes().await.map_err(transport_error)?;
    serde_json::from_slice(&bytes).map_err(|e| {
        warn!(operation, error = %e, "notes response did not decode");
        decode_error(e)
    })
}

#[async_trait::async_trait]
impl NotesGatewayPort for HttpNotesGateway {
    async fn list(&self, params: &ListNotesParams) -> Result<NotesPage, GatewayError> {
        debug!(
            page = params.page,
            per_page = params.per_page,
            search = params.search.as_deref().unwrap_or(""),
            "fetching notes"
        );
        let builder = self.request(Method::GET, self.base_url.clone()).query(params);
        self.send("list", builder).await
    }

    async fn create(&self, note: &NewNote) -> Result<Note, GatewayError> {
        debug!(tag = %note.tag, "creating note");
        let builder = self.request(Method::POST, self.base_url.clone()).json(note);
        self.send("create", builder).await
    }

    async fn delete(&self, id: &NoteId) -> Result<DeleteNoteResponse, GatewayError> {
        debug!(note_id = %id, "deleting note");
        let builder = self.request(Method::DELETE, self.note_url(id)?);
        self.send("delete", builder).await
    }
}
