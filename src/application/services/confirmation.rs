//! # Confirmation Coordinator
//!
//! Turns a renter's cart of quotes into reservations.
//!
//! Quotes are committed one by one in cart order against the company that
//! issued them. The first failure stops the run. Confirmation is **not**
//! atomic: reservations committed before the failure stay in force and are
//! reported inside [`ConfirmationFailure`]; nothing is rolled back.

use crate::application::error::{
    ApplicationError, ApplicationResult, CommitFailure, ConfirmationFailure,
};
use crate::application::services::cart::QuoteCart;
use crate::application::services::company_registry::CompanyRegistry;
use crate::domain::entities::{Quote, Reservation};
use std::sync::Arc;
use tracing::{info, warn};

/// Commits carts of quotes.
#[derive(Debug, Clone)]
pub struct ConfirmationCoordinator {
    registry: Arc<dyn CompanyRegistry>,
}

impl ConfirmationCoordinator {
    /// Creates a coordinator resolving companies through the registry.
    #[must_use]
    pub fn new(registry: Arc<dyn CompanyRegistry>) -> Self {
        Self { registry }
    }

    /// Commits every quote in the cart, in insertion order.
    ///
    /// The cart is emptied before the first commit, so it is empty on return
    /// whether or not confirmation succeeded.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::ConfirmationFailed` for the first quote
    /// that cannot be committed. Quotes after it are never committed.
    #[tracing::instrument(skip_all, fields(quotes = cart.len()))]
    pub async fn confirm_all(&self, cart: &mut QuoteCart) -> ApplicationResult<Vec<Reservation>> {
        let quotes = cart.take();
        let mut committed = Vec::with_capacity(quotes.len());

        for (index, quote) in quotes.into_iter().enumerate() {
            match self.commit_one(&quote).await {
                Ok(reservation) => {
                    info!(
                        reservation_id = %reservation.id(),
                        company = %reservation.company(),
                        car_id = %reservation.car_id(),
                        "reservation confirmed"
                    );
                    committed.push(reservation);
                }
                Err(reason) => {
                    warn!(
                        index,
                        company = %quote.company(),
                        committed = committed.len(),
                        error = %reason,
                        "confirmation failed, earlier reservations are kept"
                    );
                    return Err(ApplicationError::confirmation_failed(ConfirmationFailure {
                        index,
                        company: quote.company().clone(),
                        quote,
                        reason,
                        committed,
                    }));
                }
            }
        }

        Ok(committed)
    }

    async fn commit_one(&self, quote: &Quote) -> Result<Reservation, CommitFailure> {
        let inventory = self
            .registry
            .find(quote.company())
            .await?
            .ok_or(CommitFailure::UnknownCompany)?;
        Ok(inventory.commit(quote).await?)
    }
}
