//! The `GetShopInfo` operation.

use serde::{Deserialize, Serialize};

use crate::clients::graphql::GraphqlRequest;

/// Query document for [`PlanetClient::get_shop_info`](crate::clients::graphql::PlanetClient::get_shop_info).
pub const GET_SHOP_INFO_QUERY: &str = "query GetShopInfo($shopifyDomain: String!) {
  shop(shopifyDomain: $shopifyDomain) {
    allShipmentsCarbonNeutral
  }
}";

/// Variables for the `GetShopInfo` query.
///
/// `shopify_domain` is passed through unvalidated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopInfoVariables {
    /// The shop's `*.myshopify.com` domain.
    pub shopify_domain: String,
}

impl ShopInfoVariables {
    /// Creates variables for the given shop domain.
    #[must_use]
    pub fn new(shopify_domain: impl Into<String>) -> Self {
        Self {
            shopify_domain: shopify_domain.into(),
        }
    }

    /// Builds the GraphQL request for these variables.
    #[must_use]
    pub fn to_request(&self) -> GraphqlRequest {
        GraphqlRequest::new(GET_SHOP_INFO_QUERY)
            .variable("shopifyDomain", self.shopify_domain.as_str())
    }
}

/// Result of the `GetShopInfo` query.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopInfo {
    /// The requested shop; `None` when the service does not know the domain.
    pub shop: Option<Shop>,
}

/// Planet attributes of a shop.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shop {
    /// Whether every shipment for the shop is carbon-neutral.
    pub all_shipments_carbon_neutral: bool,
}
