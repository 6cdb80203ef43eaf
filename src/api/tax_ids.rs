//! Customer tax IDs

use super::{path_segment, Requestor};
use crate::error::Result;
use crate::pagination::ListPager;
use crate::params::RequestOptions;
use crate::resources::{TaxId, TaxIdListParams, TaxIdParams};

/// `/v1/customers/{customer}/tax_ids`
#[derive(Debug, Clone)]
pub struct TaxIdsApi {
    requestor: Requestor,
}

impl TaxIdsApi {
    pub(crate) fn new(requestor: Requestor) -> Self {
        Self { requestor }
    }

    #[must_use]
    pub fn with_options(mut self, options: RequestOptions) -> Self {
        self.requestor.set_options(options);
        self
    }

    pub async fn create(&self, customer: &str, params: &TaxIdParams) -> Result<TaxId> {
        self.requestor.post(&collection_path(customer)?, params).await
    }

    pub async fn retrieve(&self, customer: &str, id: &str, params: &TaxIdParams) -> Result<TaxId> {
        self.requestor.get(&item_path(customer, id)?, params).await
    }

    pub async fn delete(&self, customer: &str, id: &str) -> Result<TaxId> {
        self.requestor
            .delete(&item_path(customer, id)?, &TaxIdParams::default())
            .await
    }

    pub fn list(
        &self,
        customer: &str,
        params: TaxIdListParams,
    ) -> Result<ListPager<TaxId, TaxIdListParams>> {
        Ok(self.requestor.list(collection_path(customer)?, params))
    }
}

fn collection_path(customer: &str) -> Result<String> {
    Ok(format!(
        "/v1/customers/{}/tax_ids",
        path_segment("customer", customer)?
    ))
}

fn item_path(customer: &str, id: &str) -> Result<String> {
    Ok(format!(
        "{}/{}",
        collection_path(customer)?,
        path_segment("tax_id", id)?
    ))
}
