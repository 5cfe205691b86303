//! Domain types for the Example Billing API.
//!
//! This crate holds the wire-shaped records shared by everything that talks
//! to the service:
//!
//! - **Catalog**: [`Product`], [`ProductFamily`], [`PublicSignupPage`]
//! - **Customers**: [`Customer`], [`CreditCard`]
//! - **Subscriptions**: [`Subscription`]
//! - **Timestamps**: [`Timestamp`] and its strict parser
//!
//! # Optional fields
//!
//! The service omits fields freely and sends `null` for cleared ones, so
//! every entity field is an `Option` (collections default to empty). Absence
//! survives a decode→encode round trip: a field that never appeared on the
//! wire is never written back out.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod customer;
pub mod product;
pub mod subscription;
pub mod timestamp;

pub use customer::{CreditCard, Customer};
pub use product::{Product, ProductFamily, PublicSignupPage};
pub use subscription::Subscription;
pub use timestamp::{ParseTimestampError, Timestamp};
