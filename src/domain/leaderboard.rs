//! Per-author aggregation of sales and leaderboard rendering.

use std::collections::HashMap;
use std::fmt;

use rust_decimal::Decimal;

use super::money::{add_capped, format_usd};
use super::sale::Sale;

/// Reply used when nobody has posted a sale.
pub const NO_SALES_MESSAGE: &str = "No sales submitted today.";

const HEADER: &str = "Today's Sales Leaderboard:";
const MEDALS: [&str; 3] = ["🥇", "🥈", "🥉"];

/// One author's summed sales.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardRow {
    pub author: String,
    pub total: Decimal,
}

/// Authors ranked by total sales, highest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Leaderboard {
    rows: Vec<LeaderboardRow>,
}

impl Leaderboard {
    /// Group sales by author, sum, and rank descending.
    ///
    /// Equal totals keep the order in which each author first appeared.
    #[must_use]
    pub fn from_sales(sales: &[Sale]) -> Self {
        let mut rows: Vec<LeaderboardRow> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for sale in sales {
            match index.get(sale.author()) {
                Some(&i) => rows[i].total = add_capped(rows[i].total, sale.amount()),
                None => {
                    index.insert(sale.author(), rows.len());
                    rows.push(LeaderboardRow {
                        author: sale.author().to_string(),
                        total: sale.amount(),
                    });
                }
            }
        }

        // sort_by is stable, which gives the first-appearance tie break.
        rows.sort_by(|a, b| b.total.cmp(&a.total));
        Self { rows }
    }

    #[must_use]
    pub fn rows(&self) -> &[LeaderboardRow] {
        &self.rows
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render the report posted to the group.
    #[must_use]
    pub fn render(&self) -> String {
        if self.rows.is_empty() {
            return NO_SALES_MESSAGE.to_string();
        }

        let mut lines = Vec::with_capacity(self.rows.len() + 1);
        lines.push(HEADER.to_string());
        for (i, row) in self.rows.iter().enumerate() {
            let rank = i + 1;
            let medal = MEDALS.get(i).map_or(String::new(), |m| format!("{m} "));
            lines.push(format!(
                "{medal}{rank}. {}: {}",
                row.author,
                format_usd(row.total)
            ));
        }
        lines.join("\n").trim_end().to_string()
    }
}

impl fmt::Display for Leaderboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
