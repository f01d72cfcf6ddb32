use serde::{Deserialize, Serialize};
use crate::structs::comparison_item::ComparisonItem;

/// A reviewable row together with its position in the dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewTarget {
    pub index: usize,
    pub item: ComparisonItem,
}
