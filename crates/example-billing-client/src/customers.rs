//! Customer operations.

use reqwest::Method;
use serde::Deserialize;

use example_billing_core::Customer;

use crate::client::{CallContext, Client};
use crate::error::Result;
use crate::response::ApiResponse;

/// The wire nests each customer under a `customer` key.
#[derive(Debug, Deserialize)]
struct CustomerWrapper {
    customer: Customer,
}

/// Read access to the tenant's customers.
///
/// Obtained from [`Client::customers`].
#[derive(Debug, Clone, Copy)]
pub struct CustomersService<'a> {
    pub(crate) client: &'a Client,
}

impl CustomersService<'_> {
    /// Lists the tenant's customers.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the service rejects it.
    pub async fn list(&self, cx: &CallContext) -> Result<(ApiResponse, Vec<Customer>)> {
        let request = self.client.request(Method::GET, "customers", None::<&()>)?;
        let (envelope, wrappers) = self
            .client
            .execute::<Vec<CustomerWrapper>>(cx, request)
            .await?;
        let customers = wrappers
            .unwrap_or_default()
            .into_iter()
            .map(|wrapper| wrapper.customer)
            .collect();
        Ok((envelope, customers))
    }

    /// Fetches one customer by id. An empty success body yields `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the service rejects it.
    pub async fn get(&self, cx: &CallContext, id: i64) -> Result<(ApiResponse, Option<Customer>)> {
        let request = self
            .client
            .request(Method::GET, &format!("customers/{id}"), None::<&()>)?;
        let (envelope, wrapper) = self.client.execute::<CustomerWrapper>(cx, request).await?;
        Ok((envelope, wrapper.map(|wrapper| wrapper.customer)))
    }
}
