//! Customer and payment-profile records.

use serde::{Deserialize, Serialize};

use crate::timestamp::Timestamp;

/// A billing customer.
///
/// Every field is optional: a field the service omits (or sends as `null`)
/// decodes to `None`, and a `None` field is left off outbound payloads
/// entirely, so absence round-trips distinguishably from an empty value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// Service-assigned identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Given name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Family name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Company or organization name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    /// Primary contact email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// When the customer record was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    /// When the customer record last changed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
    /// Caller-supplied reference key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Street address, first line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Street address, second line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_2: Option<String>,
    /// City.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// State or province.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Postal code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    /// Country code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Contact phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// When a billing-portal invite was last sent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portal_invite_last_sent_at: Option<Timestamp>,
    /// When a billing-portal invite was last accepted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portal_invite_last_accepted_at: Option<Timestamp>,
    /// Whether the customer's email is verified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
    /// When the customer's portal account was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portal_customer_created_at: Option<Timestamp>,
    /// Comma-separated carbon-copy addresses for billing email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cc_emails: Option<String>,
    /// Whether the customer is exempt from tax.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_exempt: Option<bool>,
}

/// A stored payment profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreditCard {
    /// Service-assigned identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Cardholder given name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Cardholder family name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Card number with all but the tail masked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub masked_card_number: Option<String>,
    /// Card network, e.g. `visa`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_type: Option<String>,
    /// Expiration month (1–12).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_month: Option<i64>,
    /// Four-digit expiration year.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_year: Option<i64>,
    /// Owning customer's identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<i64>,
    /// Payment vault currently holding the card.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_vault: Option<String>,
    /// Vault token for the card.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vault_token: Option<String>,
    /// Billing street address, first line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<String>,
    /// Billing city.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_city: Option<String>,
    /// Billing state or province.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_state: Option<String>,
    /// Billing postal code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_zip: Option<String>,
    /// Billing country code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_country: Option<String>,
    /// Vault token for the owning customer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_vault_token: Option<String>,
    /// Billing street address, second line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address_2: Option<String>,
    /// Payment method kind, e.g. `credit_card`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_fields_stay_absent_through_a_round_trip() {
        let customer: Customer =
            serde_json::from_str(r#"{"id":14399371,"verified":false,"address_2":""}"#).unwrap();

        assert_eq!(customer.id, Some(14_399_371));
        assert_eq!(customer.verified, Some(false));
        // An empty string on the wire is a present value, not absence.
        assert_eq!(customer.address_2.as_deref(), Some(""));
        assert_eq!(customer.email, None);

        let encoded = serde_json::to_value(&customer).unwrap();
        assert_eq!(
            encoded,
            serde_json::json!({"id": 14399371, "verified": false, "address_2": ""})
        );
    }

    #[test]
    fn null_fields_decode_to_none() {
        let customer: Customer =
            serde_json::from_str(r#"{"portal_customer_created_at":null,"cc_emails":null}"#)
                .unwrap();
        assert_eq!(customer.portal_customer_created_at, None);
        assert_eq!(customer.cc_emails, None);
    }

    #[test]
    fn default_serializes_to_an_empty_object() {
        let blank = serde_json::to_value(CreditCard::default()).unwrap();
        assert_eq!(blank, serde_json::json!({}));
    }
}
