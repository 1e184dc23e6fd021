//! Most-taken ranking with RANK semantics

use std::cmp::Ordering;

/// Highest rank reported
pub const MOST_TAKEN_MAX_RANK: i64 = 10;

/// Number of transactions recorded against one product
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductTakeCount {
    pub product_id: i64,
    pub product_name: String,
    pub item_type: String,
    pub total_transactions: i64,
}

/// A ranked row of the most-taken report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MostTakenItem {
    pub product_id: i64,
    pub product_name: String,
    pub item_type: String,
    pub total_transactions: i64,
    pub ranking: i64,
}

/// Rank products by transaction count, highest first
///
/// Equal counts share a rank and the next distinct count skips the tied
/// slots (5, 5, 3 ranks as 1, 1, 3). Rows within a rank are ordered by
/// product name. Every row ranked up to [`MOST_TAKEN_MAX_RANK`] is kept, so a
/// tie group straddling rank 10 is returned whole.
pub fn rank_most_taken(mut counts: Vec<ProductTakeCount>) -> Vec<MostTakenItem> {
    counts.sort_by(|a, b| {
        b.total_transactions
            .cmp(&a.total_transactions)
            .then_with(|| a.product_name.cmp(&b.product_name))
            .then_with(|| a.product_id.cmp(&b.product_id))
    });

    let mut ranked = Vec::new();
    let mut previous: Option<(i64, i64)> = None;

    for (position, count) in counts.into_iter().enumerate() {
        let ranking = match previous {
            Some((total, rank)) if total.cmp(&count.total_transactions) == Ordering::Equal => rank,
            _ => position as i64 + 1,
        };

        if ranking > MOST_TAKEN_MAX_RANK {
            break;
        }

        previous = Some((count.total_transactions, ranking));
        ranked.push(MostTakenItem {
            product_id: count.product_id,
            product_name: count.product_name,
            item_type: count.item_type,
            total_transactions: count.total_transactions,
            ranking,
        });
    }

    ranked
}
