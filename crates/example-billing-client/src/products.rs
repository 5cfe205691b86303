//! Product catalog operations.

use reqwest::Method;
use serde::Deserialize;

use example_billing_core::Product;

use crate::client::{CallContext, Client};
use crate::error::Result;
use crate::response::ApiResponse;

/// The wire nests each product under a `product` key.
#[derive(Debug, Deserialize)]
struct ProductWrapper {
    product: Product,
}

/// Read access to the product catalog.
///
/// Obtained from [`Client::products`].
#[derive(Debug, Clone, Copy)]
pub struct ProductsService<'a> {
    pub(crate) client: &'a Client,
}

impl ProductsService<'_> {
    /// Lists the products in the catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the service rejects it.
    pub async fn list(&self, cx: &CallContext) -> Result<(ApiResponse, Vec<Product>)> {
        let request = self.client.request(Method::GET, "products", None::<&()>)?;
        let (envelope, wrappers) = self
            .client
            .execute::<Vec<ProductWrapper>>(cx, request)
            .await?;
        let products = wrappers
            .unwrap_or_default()
            .into_iter()
            .map(|wrapper| wrapper.product)
            .collect();
        Ok((envelope, products))
    }

    /// Fetches one product by id. An empty success body yields `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the service rejects it.
    pub async fn get(&self, cx: &CallContext, id: i64) -> Result<(ApiResponse, Option<Product>)> {
        let request = self
            .client
            .request(Method::GET, &format!("products/{id}"), None::<&()>)?;
        let (envelope, wrapper) = self.client.execute::<ProductWrapper>(cx, request).await?;
        Ok((envelope, wrapper.map(|wrapper| wrapper.product)))
    }
}
