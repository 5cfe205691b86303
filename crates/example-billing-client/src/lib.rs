//! Example Billing API client.
//!
//! This crate provides a typed async client for the Example Billing
//! subscription-management API: products, customers, and subscriptions over
//! authenticated JSON HTTP, one attempt per call, with optional per-call
//! deadlines.
//!
//! # Example
//!
//! ```no_run
//! use example_billing_client::{CallContext, Client, SubscriptionPayload};
//!
//! # async fn example() -> Result<(), example_billing_client::Error> {
//! let client = Client::new("acme", "your-api-key")?;
//! let cx = CallContext::new();
//!
//! // Browse the catalog.
//! let (_, products) = client.products().list(&cx).await?;
//! println!("{} products on offer", products.len());
//!
//! // Sign a customer up.
//! let payload = SubscriptionPayload {
//!     product_handle: Some("standard".to_string()),
//!     customer_id: Some(14399371),
//!     ..SubscriptionPayload::default()
//! };
//! let (_, subscription) = client.subscriptions().create(&cx, &payload).await?;
//!
//! if let Some(subscription) = subscription {
//!     println!("subscribed: {:?}", subscription.id);
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod client;
mod customers;
mod error;
mod products;
mod response;
mod subscriptions;

pub use client::{CallContext, Client, ClientOptions};
pub use customers::CustomersService;
pub use error::{ApiError, Error, Result};
pub use products::ProductsService;
pub use response::ApiResponse;
pub use subscriptions::{SubscriptionPayload, SubscriptionsService};

// Re-exported so callers need only this crate in scope.
pub use example_billing_core::{
    CreditCard, Customer, ParseTimestampError, Product, ProductFamily, PublicSignupPage,
    Subscription, Timestamp,
};
