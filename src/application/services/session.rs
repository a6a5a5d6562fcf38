//! # Reservation Session
//!
//! One renter's booking conversation: who is renting and which quotes are
//! waiting in the cart.
//!
//! A session is owned by its caller and mutated through `&mut self`; many
//! sessions share one broker and coordinator. Dropping a session before
//! confirming has no effect on any company.
//!
//! # Examples
//!
//! ```ignore
//! let mut session = ReservationSession::new(broker, coordinator);
//! session.set_renter(RenterName::new("ann")?)?;
//! session.create_quote(&renter, &constraints).await?;
//! let reservations = session.confirm_quotes().await?;
//! ```

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::services::cart::QuoteCart;
use crate::application::services::confirmation::ConfirmationCoordinator;
use crate::application::services::quote_broker::QuoteBroker;
use crate::domain::entities::{CarType, Quote, Reservation, ReservationConstraints};
use crate::domain::value_objects::{CompanyName, DateRange, RenterName};
use std::collections::BTreeSet;
use std::sync::Arc;

/// Stateful booking session for one renter.
#[derive(Debug)]
pub struct ReservationSession {
    renter: Option<RenterName>,
    cart: QuoteCart,
    broker: Arc<QuoteBroker>,
    coordinator: Arc<ConfirmationCoordinator>,
}

impl ReservationSession {
    /// Starts a session with no renter and an empty cart.
    #[must_use]
    pub fn new(broker: Arc<QuoteBroker>, coordinator: Arc<ConfirmationCoordinator>) -> Self {
        Self {
            renter: None,
            cart: QuoteCart::new(),
            broker,
            coordinator,
        }
    }

    /// Sets the renter. Can only be done once per session.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::RenterAlreadySet` on a second call.
    pub fn set_renter(&mut self, renter: RenterName) -> ApplicationResult<()> {
        if let Some(current) = &self.renter {
            return Err(ApplicationError::renter_already_set(current));
        }
        self.renter = Some(renter);
        Ok(())
    }

    /// Returns the renter, if set.
    #[inline]
    #[must_use]
    pub fn renter(&self) -> Option<&RenterName> {
        self.renter.as_ref()
    }

    /// Returns the names of every registered company.
    ///
    /// # Errors
    ///
    /// Returns an error if the registry cannot be read.
    pub async fn all_company_names(&self) -> ApplicationResult<BTreeSet<CompanyName>> {
        self.broker.company_names().await
    }

    /// Returns the car types available at any company for the period.
    ///
    /// # Errors
    ///
    /// Returns an error if the registry cannot be read.
    pub async fn available_car_types(&self, period: &DateRange) -> ApplicationResult<Vec<CarType>> {
        self.broker.available_car_types(period).await
    }

    /// Returns the cheapest car type available in a region for the period.
    ///
    /// # Errors
    ///
    /// Returns an error if the registry cannot be read.
    pub async fn cheapest_car_type(
        &self,
        period: &DateRange,
        region: &str,
    ) -> ApplicationResult<Option<CarType>> {
        self.broker.cheapest_car_type(period, region).await
    }

    /// Creates a quote and adds it to this session's cart.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::NoQuoteAvailable` if no company can serve
    /// the constraints.
    pub async fn create_quote(
        &mut self,
        renter: &RenterName,
        constraints: &ReservationConstraints,
    ) -> ApplicationResult<Quote> {
        self.broker
            .create_quote(&mut self.cart, renter, constraints)
            .await
    }

    /// Returns the quotes waiting in the cart, oldest first.
    #[must_use]
    pub fn current_quotes(&self) -> &[Quote] {
        self.cart.quotes()
    }

    /// Confirms every quote in the cart.
    ///
    /// The cart is empty afterwards, whether or not confirmation succeeded.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::ConfirmationFailed` if a commit fails;
    /// reservations made before it are kept.
    pub async fn confirm_quotes(&mut self) -> ApplicationResult<Vec<Reservation>> {
        self.coordinator.confirm_all(&mut self.cart).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::application::services::company_registry::{
        CompanyRegistry, RepositoryCompanyRegistry,
    };

    fn session() -> ReservationSession {
        let registry: Arc<dyn CompanyRegistry> = Arc::new(RepositoryCompanyRegistry::in_memory());
        ReservationSession::new(
            Arc::new(QuoteBroker::with_defaults(registry.clone())),
            Arc::new(ConfirmationCoordinator::new(registry)),
        )
    }

    #[test]
    fn renter_can_only_be_set_once() {
        let mut s = session();
        assert!(s.renter().is_none());

        s.set_renter(RenterName::new("lee").unwrap()).unwrap();
        let err = s.set_renter(RenterName::new("max").unwrap()).unwrap_err();

        assert!(matches!(err, ApplicationError::RenterAlreadySet(_)));
        assert_eq!(s.renter().unwrap().as_str(), "lee");
    }

    #[test]
    fn new_session_has_empty_cart() {
        let s = session();
        assert!(s.current_quotes().is_empty());
    }

    #[test]
    fn confirming_empty_cart_returns_nothing() {
        let mut s = session();
        let reservations = tokio_test::block_on(s.confirm_quotes()).unwrap();
        assert!(reservations.is_empty());
        let names = tokio_test::block_on(s.all_company_names()).unwrap();
        assert!(names.is_empty());
    }
}
