//! Sale extraction from free-form chat text.
//!
//! Only messages that *begin* with a dollar amount count as a sale, so a
//! number mentioned mid-sentence never inflates anyone's total.

use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::message::Message;

/// A monetary amount attributed to the author of one message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sale {
    amount: Decimal,
    author: String,
}

impl Sale {
    /// Create a sale, rejecting negative amounts.
    pub fn try_new(amount: Decimal, author: impl Into<String>) -> Result<Self, DomainError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(DomainError::NegativeAmount { amount });
        }
        Ok(Self {
            amount,
            author: author.into(),
        })
    }

    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }
}

/// Outcome of looking for a sale in a message.
///
/// `NoMatch` is the common case for ordinary chatter, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaleParse {
    Parsed(Sale),
    NoMatch,
}

impl SaleParse {
    #[must_use]
    pub const fn is_match(&self) -> bool {
        matches!(self, Self::Parsed(_))
    }

    #[must_use]
    pub fn into_sale(self) -> Option<Sale> {
        match self {
            Self::Parsed(sale) => Some(sale),
            Self::NoMatch => None,
        }
    }
}

fn amount_prefix_regex() -> &'static Regex {
    static AMOUNT_PREFIX: OnceLock<Regex> = OnceLock::new();
    AMOUNT_PREFIX.get_or_init(|| {
        Regex::new(r"^\$?([0-9,]+(?:\.[0-9]{2})?)").expect("amount prefix regex should compile")
    })
}

/// Parse a leading dollar amount out of `text`.
///
/// Accepts an optional `$`, digits with optional thousands separators, and an
/// optional two-digit fraction, anchored at the start of the trimmed text.
#[must_use]
pub fn parse_sale(text: &str, author: &str) -> SaleParse {
    let Some(captures) = amount_prefix_regex().captures(text.trim()) else {
        return SaleParse::NoMatch;
    };
    let digits: String = captures[1].chars().filter(|c| *c != ',').collect();

    // Separator-only captures and values beyond Decimal range fall out here.
    let Ok(amount) = Decimal::from_str(&digits) else {
        return SaleParse::NoMatch;
    };

    match Sale::try_new(amount, author) {
        Ok(sale) => SaleParse::Parsed(sale),
        Err(_) => SaleParse::NoMatch,
    }
}

impl Message {
    /// Parse this message's text as a sale attributed to its author.
    #[must_use]
    pub fn parse_sale(&self) -> SaleParse {
        parse_sale(self.text(), self.author())
    }
}
