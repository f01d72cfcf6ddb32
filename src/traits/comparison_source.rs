use async_trait::async_trait;
use crate::errors::ReviewResult;
use crate::structs::comparison_dataset::ComparisonDataset;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ComparisonSource: Send + Sync {
    async fn fetch_comparison(&self) -> ReviewResult<ComparisonDataset>;
}
