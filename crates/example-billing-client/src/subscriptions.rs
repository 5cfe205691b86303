//! Subscription lifecycle operations.

use reqwest::Method;
use serde::{Deserialize, Serialize};

use example_billing_core::{CreditCard, Customer, Subscription};

use crate::client::{CallContext, Client};
use crate::error::Result;
use crate::response::ApiResponse;

/// Attributes for creating a subscription.
///
/// The product is named either by `product_handle` or by `product_id`; the
/// customer either by `customer_id` or inline through `customer_attributes`.
/// Absent fields stay off the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SubscriptionPayload {
    /// Handle of the product to subscribe to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_handle: Option<String>,
    /// Id of the product to subscribe to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<i64>,
    /// Id of an existing customer to attach.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<i64>,
    /// Attributes for a customer created together with the subscription.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_attributes: Option<Customer>,
    /// Payment details collected up front.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_card_attributes: Option<CreditCard>,
    /// Coupon applied at signup.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon_code: Option<String>,
}

/// Outbound nesting under a `subscription` key.
#[derive(Debug, Serialize)]
struct SubscriptionPayloadWrapper<'a> {
    subscription: &'a SubscriptionPayload,
}

/// The wire nests each subscription under a `subscription` key.
#[derive(Debug, Deserialize)]
struct SubscriptionWrapper {
    subscription: Subscription,
}

/// Subscription lifecycle: signup, lookup, cancellation.
///
/// Obtained from [`Client::subscriptions`].
#[derive(Debug, Clone, Copy)]
pub struct SubscriptionsService<'a> {
    pub(crate) client: &'a Client,
}

impl SubscriptionsService<'_> {
    /// Creates a subscription and returns it as the service recorded it.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the service rejects it,
    /// including validation failures such as a missing product.
    pub async fn create(
        &self,
        cx: &CallContext,
        payload: &SubscriptionPayload,
    ) -> Result<(ApiResponse, Option<Subscription>)> {
        let body = SubscriptionPayloadWrapper {
            subscription: payload,
        };
        let request = self
            .client
            .request(Method::POST, "subscriptions", Some(&body))?;
        let (envelope, wrapper) = self
            .client
            .execute::<SubscriptionWrapper>(cx, request)
            .await?;
        Ok((envelope, wrapper.map(|wrapper| wrapper.subscription)))
    }

    /// Fetches one subscription by id. An empty success body yields `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the service rejects it.
    pub async fn get(
        &self,
        cx: &CallContext,
        id: i64,
    ) -> Result<(ApiResponse, Option<Subscription>)> {
        let request = self
            .client
            .request(Method::GET, &format!("subscriptions/{id}"), None::<&()>)?;
        let (envelope, wrapper) = self
            .client
            .execute::<SubscriptionWrapper>(cx, request)
            .await?;
        Ok((envelope, wrapper.map(|wrapper| wrapper.subscription)))
    }

    /// Cancels a subscription and returns its final, canceled state.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the service rejects it.
    pub async fn destroy(
        &self,
        cx: &CallContext,
        id: i64,
    ) -> Result<(ApiResponse, Option<Subscription>)> {
        let request = self
            .client
            .request(Method::DELETE, &format!("subscriptions/{id}"), None::<&()>)?;
        let (envelope, wrapper) = self
            .client
            .execute::<SubscriptionWrapper>(cx, request)
            .await?;
        Ok((envelope, wrapper.map(|wrapper| wrapper.subscription)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_omits_absent_fields() {
        let payload = SubscriptionPayload {
            product_handle: Some("standard".to_string()),
            ..SubscriptionPayload::default()
        };
        let body = SubscriptionPayloadWrapper {
            subscription: &payload,
        };

        let encoded = serde_json::to_value(&body).unwrap();
        assert_eq!(
            encoded,
            serde_json::json!({"subscription": {"product_handle": "standard"}})
        );
    }

    #[test]
    fn payload_nests_customer_attributes() {
        let payload = SubscriptionPayload {
            product_handle: Some("standard".to_string()),
            customer_attributes: Some(Customer {
                first_name: Some("Bob".to_string()),
                last_name: Some("Test".to_string()),
                email: Some("foo@example.com".to_string()),
                ..Customer::default()
            }),
            ..SubscriptionPayload::default()
        };
        let body = SubscriptionPayloadWrapper {
            subscription: &payload,
        };

        let encoded = serde_json::to_value(&body).unwrap();
        assert_eq!(
            encoded,
            serde_json::json!({
                "subscription": {
                    "product_handle": "standard",
                    "customer_attributes": {
                        "first_name": "Bob",
                        "last_name": "Test",
                        "email": "foo@example.com",
                    },
                }
            })
        );
    }
}
