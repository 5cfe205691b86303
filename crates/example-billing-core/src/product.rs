//! Product catalog records.

use serde::{Deserialize, Serialize};

use crate::timestamp::Timestamp;

/// A purchasable plan.
///
/// Optional-field semantics match [`Customer`](crate::Customer): absent or
/// `null` wire fields are `None`, and `None` is omitted when encoding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Service-assigned identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// URL-safe handle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Accounting system code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accounting_code: Option<String>,
    /// Whether signup asks for a card without requiring one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_credit_card: Option<bool>,
    /// Subscription lifetime before forced expiry, in `expiration_interval_unit`s.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_interval: Option<i64>,
    /// Unit for `expiration_interval`, e.g. `month` or `never`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_interval_unit: Option<String>,
    /// When the product was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    /// When the product last changed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
    /// Recurring price in cents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_in_cents: Option<i64>,
    /// Billing period length in `interval_unit`s.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<i64>,
    /// Unit for `interval`, e.g. `month`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval_unit: Option<String>,
    /// One-off charge at signup, in cents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_charge_in_cents: Option<i64>,
    /// Price during trial, in cents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trial_price_in_cents: Option<i64>,
    /// Trial length in `trial_interval_unit`s.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trial_interval: Option<i64>,
    /// Unit for `trial_interval`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trial_interval_unit: Option<String>,
    /// When the product was archived, if it was.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived_at: Option<Timestamp>,
    /// Whether signup requires a card.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_credit_card: Option<bool>,
    /// Extra query parameters appended to the return URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_params: Option<String>,
    /// Whether the product is taxable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxable: Option<bool>,
    /// Where the hosted update page redirects afterwards.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_return_url: Option<String>,
    /// Whether the initial charge applies after the trial instead of at signup.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_charge_after_trial: Option<bool>,
    /// Catalog version of this product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_number: Option<i64>,
    /// Extra query parameters appended to the update return URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_return_params: Option<String>,
    /// The family this product belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_family: Option<ProductFamily>,
    /// Hosted signup pages for this product.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub public_signup_pages: Vec<PublicSignupPage>,
}

/// A grouping of related products.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductFamily {
    /// Service-assigned identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// URL-safe handle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Accounting system code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accounting_code: Option<String>,
}

/// A hosted signup page for a product.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PublicSignupPage {
    /// Service-assigned identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Where the page redirects after signup.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_url: Option<String>,
    /// Extra query parameters appended to the return URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_params: Option<String>,
    /// The page's own URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}
