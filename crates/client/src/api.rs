//! REST client for the reservation HTTP endpoints.
//!
//! Wraps the reservation API (listing, creation, retrieval, partial update)
//! using [`reqwest`]. Responses are decoded from the tolerant wire shape and
//! returned already normalized.

use serde::Serialize;

use crate::normalize::{normalize, Reservation};
use crate::payload::{CreateReservationInput, UpdateReservationInput};
use crate::wire::{Paginated, WireReservation};

/// HTTP client for a reservation API server.
pub struct ReservationsApi {
    client: reqwest::Client,
    base_url: String,
}

/// Optional filters and paging for reservation listing.
#[derive(Debug, Default, Clone, Serialize)]
pub struct ListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<i64>,
}

/// Errors from the reservation REST client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, TLS, decode).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server returned a non-2xx status code.
    #[error("Reservation API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

impl ReservationsApi {
    /// Create a new client for a reservation API server.
    ///
    /// * `base_url` - Base HTTP URL, e.g. `http://localhost:3000`.
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`]
    /// (useful for connection pooling across services).
    pub fn with_client(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    /// List reservations matching the query, normalized.
    ///
    /// Sends `GET /api/v1/reservations` and preserves the server's
    /// pagination counters.
    pub async fn list(&self, query: &ListQuery) -> Result<Paginated<Reservation>, ClientError> {
        let response = self
            .client
            .get(format!("{}/api/v1/reservations", self.base_url))
            .query(query)
            .send()
            .await?;

        let page: Paginated<WireReservation> = Self::parse_response(response).await?;
        Ok(Paginated {
            data: page.data.into_iter().map(normalize).collect(),
            current_page: page.current_page,
            last_page: page.last_page,
            per_page: page.per_page,
            total: page.total,
        })
    }

    /// Create a reservation, returning the created record normalized.
    ///
    /// Sends `POST /api/v1/reservations`.
    pub async fn create(
        &self,
        input: &CreateReservationInput,
    ) -> Result<Reservation, ClientError> {
        let response = self
            .client
            .post(format!("{}/api/v1/reservations", self.base_url))
            .json(input)
            .send()
            .await?;

        let wire: WireReservation = Self::parse_response(response).await?;
        Ok(normalize(wire))
    }

    /// Fetch a single reservation by ID, normalized.
    ///
    /// Sends `GET /api/v1/reservations/{id}`.
    pub async fn get(&self, id: i64) -> Result<Reservation, ClientError> {
        let response = self
            .client
            .get(format!("{}/api/v1/reservations/{id}", self.base_url))
            .send()
            .await?;

        let wire: WireReservation = Self::parse_response(response).await?;
        Ok(normalize(wire))
    }

    /// Partially update a reservation, returning the updated record
    /// normalized. Unset input fields are omitted from the payload.
    ///
    /// Sends `PATCH /api/v1/reservations/{id}`.
    pub async fn update(
        &self,
        id: i64,
        input: &UpdateReservationInput,
    ) -> Result<Reservation, ClientError> {
        let response = self
            .client
            .patch(format!("{}/api/v1/reservations/{id}", self.base_url))
            .json(input)
            .send()
            .await?;

        let wire: WireReservation = Self::parse_response(response).await?;
        Ok(normalize(wire))
    }

    // ---- private helpers ----

    /// Ensure a success status, then decode the JSON body. A non-2xx
    /// response is surfaced as [`ClientError::Api`] with the body text.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::debug!(status = status.as_u16(), "Reservation API request failed");
            return Err(ClientError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.json::<T>().await?)
    }
}
