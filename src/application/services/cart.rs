//! # Quote Cart
//!
//! The ordered list of outstanding quotes in one renter session.

use crate::domain::entities::Quote;

/// Quotes awaiting confirmation, in the order they were created.
///
/// Only the broker adds to a cart and only the confirmation coordinator
/// empties it.
#[derive(Debug, Clone, Default)]
pub struct QuoteCart {
    quotes: Vec<Quote>,
}

impl QuoteCart {
    /// Creates an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the quotes in insertion order.
    #[inline]
    #[must_use]
    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    /// Returns the number of quotes.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    /// Returns true if the cart holds no quotes.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    pub(crate) fn push(&mut self, quote: Quote) {
        self.quotes.push(quote);
    }

    /// Removes and returns every quote, leaving the cart empty.
    pub(crate) fn take(&mut self) -> Vec<Quote> {
        std::mem::take(&mut self.quotes)
    }
}
