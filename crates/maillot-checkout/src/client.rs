//! # Checkout Client
//!
//! The HTTP client for the payment-session endpoint.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use maillot_core::cart::{Cart, CartLine};
use maillot_core::currency::Currency;

use crate::error::{CheckoutError, CheckoutResult};

/// Default endpoint for local development.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:4242/create-checkout-session";

// =============================================================================
// Wire Types
// =============================================================================

/// Request body: the full cart snapshot plus the display currency.
#[derive(Debug, Serialize)]
struct SessionRequest<'a> {
    cart: &'a [CartLine],
    currency: Currency,
}

/// The two reply shapes the endpoint produces.
///
/// Success and rejection are distinguished by body shape, not status
/// code, so both are tried in order.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SessionReply {
    Session { id: String, url: String },
    Rejection { error: String },
}

/// A created payment session.
///
/// The `url` is the hosted payment page; navigating there is the last
/// thing the storefront does with this cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutSession {
    /// Provider-assigned session id.
    pub id: String,
    /// Hosted payment-page URL to redirect the shopper to.
    pub url: String,
}

// =============================================================================
// Checkout Client
// =============================================================================

/// Client for creating payment sessions.
///
/// Holds a connection-pooling [`reqwest::Client`], so construct once and
/// reuse across checkouts.
#[derive(Debug, Clone)]
pub struct CheckoutClient {
    http: reqwest::Client,
    endpoint: String,
}

impl CheckoutClient {
    /// Creates a client against an explicit endpoint URL.
    pub fn new(endpoint: impl Into<String>) -> Self {
        CheckoutClient {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Creates a client from the environment.
    ///
    /// Reads `MAILLOT_CHECKOUT_URL`, falling back to the local
    /// development endpoint.
    pub fn from_env() -> Self {
        let endpoint =
            std::env::var("MAILLOT_CHECKOUT_URL").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        Self::new(endpoint)
    }

    /// Returns the endpoint this client posts to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Creates a payment session for the given cart.
    ///
    /// ## Behavior
    /// - An empty cart is rejected locally; no request is made
    /// - The cart is sent exactly as stored (frozen unit prices, in
    ///   canonical cents); the endpoint computes its own totals
    /// - No retry: the shopper clicks Checkout again on failure
    ///
    /// ## Errors
    /// - [`CheckoutError::EmptyCart`] when there is nothing to buy
    /// - [`CheckoutError::Rejected`] when the endpoint answers with an
    ///   error body (message forwarded verbatim)
    /// - [`CheckoutError::Http`] on transport failure
    /// - [`CheckoutError::MalformedResponse`] when the body matches
    ///   neither known shape
    pub async fn create_session(
        &self,
        cart: &Cart,
        currency: Currency,
    ) -> CheckoutResult<CheckoutSession> {
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        debug!(
            lines = cart.line_count(),
            quantity = cart.total_quantity(),
            %currency,
            "creating payment session"
        );

        let body = SessionRequest {
            cart: &cart.lines,
            currency,
        };
        let reply: SessionReply = self
            .http
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await?
            .json()
            .await
            .map_err(|e| {
                if e.is_decode() {
                    CheckoutError::MalformedResponse
                } else {
                    CheckoutError::Http(e)
                }
            })?;

        match reply {
            SessionReply::Session { id, url } => {
                debug!(session_id = %id, "payment session created");
                Ok(CheckoutSession { id, url })
            }
            SessionReply::Rejection { error } => {
                warn!(message = %error, "payment session rejected");
                Err(CheckoutError::Rejected { message: error })
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use maillot_core::types::{Product, ProductCategory};

    fn sample_cart() -> Cart {
        let product = Product {
            id: "550e8400-e29b-41d4-a716-446655440000".to_string(),
            name: "Maple Heritage Jersey".to_string(),
            price_cents: 12000,
            category: ProductCategory::Cultural,
            origin: "Canada".to_string(),
            description: "Test".to_string(),
            image: "/maple.jpg".to_string(),
            images: vec![],
            materials: "Polyester".to_string(),
        };
        let mut cart = Cart::new();
        cart.add_line(&product, "M");
        cart
    }

    #[test]
    fn test_request_body_shape() {
        let cart = sample_cart();
        let body = SessionRequest {
            cart: &cart.lines,
            currency: Currency::Cad,
        };
        let json = serde_json::to_string(&body).unwrap();

        assert!(json.contains("\"currency\":\"CAD\""));
        assert!(json.contains("\"productId\":\"550e8400-e29b-41d4-a716-446655440000\""));
        assert!(json.contains("\"unitPriceCents\":12000"));
        assert!(json.contains("\"quantity\":1"));
    }

    #[test]
    fn test_reply_parses_session_shape() {
        let reply: SessionReply =
            serde_json::from_str(r#"{"id":"cs_123","url":"https://pay.example/cs_123"}"#).unwrap();
        assert!(matches!(
            reply,
            SessionReply::Session { id, url }
                if id == "cs_123" && url == "https://pay.example/cs_123"
        ));
    }

    #[test]
    fn test_reply_parses_error_shape() {
        let reply: SessionReply =
            serde_json::from_str(r#"{"error":"provider unavailable"}"#).unwrap();
        assert!(matches!(
            reply,
            SessionReply::Rejection { error } if error == "provider unavailable"
        ));
    }

    #[test]
    fn test_reply_rejects_unknown_shape() {
        let reply: Result<SessionReply, _> = serde_json::from_str(r#"{"status":"ok"}"#);
        assert!(reply.is_err());
    }

    #[tokio::test]
    async fn test_empty_cart_is_rejected_without_a_request() {
        // Endpoint is unroutable on purpose: EmptyCart must win before
        // any connection attempt.
        let client = CheckoutClient::new("http://0.0.0.0:1/create-checkout-session");
        let err = client
            .create_session(&Cart::new(), Currency::Cad)
            .await
            .unwrap_err();
        assert!(matches!(err, CheckoutError::EmptyCart));
    }

    #[test]
    fn test_from_env_falls_back_to_default() {
        std::env::remove_var("MAILLOT_CHECKOUT_URL");
        let client = CheckoutClient::from_env();
        assert_eq!(client.endpoint(), DEFAULT_ENDPOINT);
    }
}
