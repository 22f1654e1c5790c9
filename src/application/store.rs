//! Today's sales, rebuilt wholesale from a message set.
//!
//! The store is never patched in place: each refresh builds a new one from
//! scratch, so edited or deleted messages cannot leave stale totals behind.

use rust_decimal::Decimal;

use crate::domain::{sum_capped, Leaderboard, Message, Sale};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaleStore {
    sales: Vec<Sale>,
}

impl SaleStore {
    /// Parse every message and keep the ones that are sales.
    pub fn from_messages<'a>(messages: impl IntoIterator<Item = &'a Message>) -> Self {
        let sales = messages
            .into_iter()
            .filter_map(|m| m.parse_sale().into_sale())
            .collect();
        Self { sales }
    }

    #[must_use]
    pub fn sales(&self) -> &[Sale] {
        &self.sales
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sales.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sales.is_empty()
    }

    /// Sum of every sale posted by `author`, capped at [`Decimal::MAX`].
    #[must_use]
    pub fn total_for(&self, author: &str) -> Decimal {
        sum_capped(
            self.sales
                .iter()
                .filter(|s| s.author() == author)
                .map(Sale::amount),
        )
    }

    #[must_use]
    pub fn leaderboard(&self) -> Leaderboard {
        Leaderboard::from_sales(&self.sales)
    }
}
