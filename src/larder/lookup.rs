//! Product lookup for scanned barcodes.
//!
//! The network client lives outside the library; it implements
//! [`ProductLookup`]. What the library owns is the reading of an
//! OpenFoodFacts-style product response into a [`LookupOutcome`].

use crate::error::{LarderError, Result};
use serde::Deserialize;

/// Name used when a product is known but carries no name.
pub const UNKNOWN_PRODUCT: &str = "Unknown Product";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Found(String),
    NotFound,
}

/// Resolves a scanned code to a product name.
///
/// Transport or parse failures are `Err(LarderError::Lookup)`; an unknown
/// code is `Ok(LookupOutcome::NotFound)`.
pub trait ProductLookup {
    fn lookup(&self, code: &str) -> Result<LookupOutcome>;
}

#[derive(Deserialize)]
struct ProductResponse {
    status: i64,
    #[serde(default)]
    product: Option<Product>,
}

#[derive(Deserialize)]
struct Product {
    #[serde(default)]
    product_name: Option<String>,
}

/// Reads a product response body (`{"status": 1, "product": {"product_name": ..}}`).
pub fn parse_product_response(body: &str) -> Result<LookupOutcome> {
    let response: ProductResponse = serde_json::from_str(body)
        .map_err(|e| LarderError::Lookup(format!("malformed product response: {}", e)))?;

    if response.status != 1 {
        return Ok(LookupOutcome::NotFound);
    }

    let name = response
        .product
        .and_then(|p| p.product_name)
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| UNKNOWN_PRODUCT.to_string());
    Ok(LookupOutcome::Found(name))
}
