//! Subscription records.

use serde::{Deserialize, Serialize};

use crate::customer::{CreditCard, Customer};
use crate::product::Product;
use crate::timestamp::Timestamp;

/// A customer's subscription to a product.
///
/// Value-embeds its [`Customer`], [`Product`], and [`CreditCard`] exactly as
/// the service nests them; there is no cross-entity ownership beyond that.
/// Optional-field semantics match the other entities.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    /// Service-assigned identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Lifecycle state, e.g. `trialing`, `active`, `canceled`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// When the trial began.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trial_started_at: Option<Timestamp>,
    /// The subscribed customer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,
    /// The subscribed product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<Product>,
    /// The payment profile charged for this subscription.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_card: Option<CreditCard>,
    /// When the trial ended.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trial_ended_at: Option<Timestamp>,
    /// When the subscription became active.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activated_at: Option<Timestamp>,
    /// When the subscription was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    /// When the subscription last changed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
    /// When the subscription expires.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<Timestamp>,
    /// The expiry before the most recent extension.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_expires_at: Option<Timestamp>,
    /// Outstanding balance in cents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance_in_cents: Option<i64>,
    /// When the current billing period ends.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_period_ends_at: Option<Timestamp>,
    /// When the next assessment runs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_assessment_at: Option<Timestamp>,
    /// When the subscription was canceled, if it was.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canceled_at: Option<Timestamp>,
    /// Reason recorded at cancellation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancellation_message: Option<String>,
    /// Product the subscription migrates to at period end.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_product_id: Option<i64>,
    /// Whether cancellation is deferred to period end.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_at_end_of_period: Option<bool>,
    /// How payment is collected, e.g. `automatic` or `invoice`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_collection_method: Option<String>,
    /// Calendar-billing snap day, if calendar billing is on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snap_day: Option<String>,
    /// How the cancellation was performed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancellation_method: Option<String>,
    /// When the current billing period started.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_period_started_at: Option<Timestamp>,
    /// State before the most recent transition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_state: Option<String>,
    /// Payment that covered signup.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signup_payment_id: Option<i64>,
    /// Revenue recognized at signup; a string-encoded decimal on the wire.
    #[serde(
        default,
        with = "money_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub signup_revenue: Option<f32>,
    /// When a delayed cancellation takes effect.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delayed_cancel_at: Option<Timestamp>,
    /// Coupon applied to the subscription.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon_code: Option<String>,
    /// Lifetime revenue in cents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_revenue_in_cents: Option<i64>,
    /// Price of the subscribed product in cents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_price_in_cents: Option<i64>,
    /// Catalog version of the subscribed product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_version_number: Option<i64>,
    /// Payment method kind, e.g. `credit_card`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_type: Option<String>,
    /// Referral code attached at signup.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referral_code: Option<String>,
    /// Times the coupon has been used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon_use_count: Option<i64>,
    /// Times the coupon may be used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon_uses_allowed: Option<i64>,
    /// Current recurring amount in cents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_billing_amount_in_cents: Option<i64>,
}

/// The service sends `signup_revenue` as a quoted decimal (`"0.00"`); this
/// codec keeps the field numeric on our side.
mod money_string {
    use std::fmt;

    use serde::de::{self, Visitor};
    use serde::{Deserializer, Serializer};

    pub(super) fn serialize<S: Serializer>(
        value: &Option<f32>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(amount) => serializer.collect_str(&format_args!("{amount:.2}")),
            None => serializer.serialize_none(),
        }
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<f32>, D::Error> {
        struct MoneyVisitor;

        impl<'de> Visitor<'de> for MoneyVisitor {
            type Value = Option<f32>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a decimal amount as a string, or null")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
                value.parse::<f32>().map(Some).map_err(de::Error::custom)
            }

            fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(None)
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(None)
            }

            fn visit_some<D2: Deserializer<'de>>(
                self,
                deserializer: D2,
            ) -> Result<Self::Value, D2::Error> {
                deserializer.deserialize_str(self)
            }
        }

        deserializer.deserialize_option(MoneyVisitor)
    }
}
