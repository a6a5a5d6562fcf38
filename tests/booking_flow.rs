//! End-to-end booking flow through the public API.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use async_trait::async_trait;
use chrono::NaiveDate;
use rental_broker::application::error::{ApplicationError, CommitFailure};
use rental_broker::application::services::{
    CompanyRegistry, ConfirmationCoordinator, QuoteBroker, RepositoryCompanyRegistry,
    ReservationSession,
};
use rental_broker::domain::entities::{
    CarType, Quote, Reservation, ReservationConstraints,
};
use rental_broker::domain::value_objects::{CarId, CompanyName, DateRange, RenterName};
use rental_broker::infrastructure::fleet::FleetLoader;
use rental_broker::infrastructure::inventory::{
    InMemoryInventory, Inventory, InventoryError, InventoryResult,
};
use std::collections::BTreeSet;
use std::sync::Arc;

/// Quotes normally but refuses every commit with a timeout.
#[derive(Debug)]
struct CommitTimesOut {
    inner: InMemoryInventory,
}

#[async_trait]
impl Inventory for CommitTimesOut {
    fn company(&self) -> &CompanyName {
        self.inner.company()
    }

    async fn available_car_types(&self, period: &DateRange) -> InventoryResult<Vec<CarType>> {
        self.inner.available_car_types(period).await
    }

    async fn quote(
        &self,
        constraints: &ReservationConstraints,
        renter: &RenterName,
    ) -> InventoryResult<Quote> {
        self.inner.quote(constraints, renter).await
    }

    async fn commit(&self, _quote: &Quote) -> InventoryResult<Reservation> {
        Err(InventoryError::timeout_with_duration("commit not acknowledged", 250))
    }

    async fn regions(&self) -> InventoryResult<Option<BTreeSet<String>>> {
        self.inner.regions().await
    }

    async fn all_types(&self) -> InventoryResult<Vec<CarType>> {
        self.inner.all_types().await
    }

    async fn reservations(&self) -> InventoryResult<Vec<Reservation>> {
        self.inner.reservations().await
    }

    async fn reservations_by(&self, renter: &RenterName) -> InventoryResult<Vec<Reservation>> {
        self.inner.reservations_by(renter).await
    }

    async fn car_ids(&self, car_type: &str) -> InventoryResult<Vec<CarId>> {
        self.inner.car_ids(car_type).await
    }

    async fn reservations_for_car(&self, car_id: CarId) -> InventoryResult<Vec<Reservation>> {
        self.inner.reservations_for_car(car_id).await
    }
}

/// Availability queries always fail.
#[derive(Debug)]
struct Unreachable {
    name: CompanyName,
}

#[async_trait]
impl Inventory for Unreachable {
    fn company(&self) -> &CompanyName {
        &self.name
    }

    async fn available_car_types(&self, _period: &DateRange) -> InventoryResult<Vec<CarType>> {
        Err(InventoryError::timeout("no answer"))
    }

    async fn quote(
        &self,
        _constraints: &ReservationConstraints,
        _renter: &RenterName,
    ) -> InventoryResult<Quote> {
        Err(InventoryError::timeout("no answer"))
    }

    async fn commit(&self, _quote: &Quote) -> InventoryResult<Reservation> {
        Err(InventoryError::timeout("no answer"))
    }

    async fn regions(&self) -> InventoryResult<Option<BTreeSet<String>>> {
        Ok(None)
    }

    async fn all_types(&self) -> InventoryResult<Vec<CarType>> {
        Ok(Vec::new())
    }

    async fn reservations(&self) -> InventoryResult<Vec<Reservation>> {
        Ok(Vec::new())
    }

    async fn reservations_by(&self, _renter: &RenterName) -> InventoryResult<Vec<Reservation>> {
        Ok(Vec::new())
    }

    async fn car_ids(&self, car_type: &str) -> InventoryResult<Vec<CarId>> {
        Err(InventoryError::unknown_car_type(self.name.clone(), car_type))
    }

    async fn reservations_for_car(&self, car_id: CarId) -> InventoryResult<Vec<Reservation>> {
        Err(InventoryError::unknown_car(self.name.clone(), car_id))
    }
}

fn fleet(data: &str) -> InMemoryInventory {
    FleetLoader::parse(data).unwrap().into_inventory().unwrap()
}

fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, month, day).unwrap()
}

fn period(from: u32, to: u32) -> DateRange {
    DateRange::new(date(1, from), date(1, to)).unwrap()
}

fn renter(name: &str) -> RenterName {
    RenterName::new(name).unwrap()
}

fn constraints(car_type: &str, from: u32, to: u32) -> ReservationConstraints {
    ReservationConstraints::new(period(from, to), car_type, None).unwrap()
}

struct Agency {
    registry: Arc<dyn CompanyRegistry>,
    broker: Arc<QuoteBroker>,
    coordinator: Arc<ConfirmationCoordinator>,
}

impl Agency {
    async fn with(companies: Vec<Arc<dyn Inventory>>) -> Self {
        let registry: Arc<dyn CompanyRegistry> = Arc::new(RepositoryCompanyRegistry::in_memory());
        for company in companies {
            registry.register(company).await.unwrap();
        }
        Self {
            broker: Arc::new(QuoteBroker::with_defaults(registry.clone())),
            coordinator: Arc::new(ConfirmationCoordinator::new(registry.clone())),
            registry,
        }
    }

    fn session(&self) -> ReservationSession {
        ReservationSession::new(self.broker.clone(), self.coordinator.clone())
    }

    async fn reservations_at(&self, company: &str) -> usize {
        let inventory = self
            .registry
            .resolve(&CompanyName::new(company).unwrap())
            .await
            .unwrap();
        inventory.reservations().await.unwrap().len()
    }
}

#[tokio::test]
async fn matching_quote_grows_cart_by_one() {
    let agency = Agency::with(vec![Arc::new(fleet("-Avis\nSedan,5,400,50,false,1\n"))]).await;
    let mut session = agency.session();

    let quote = session
        .create_quote(&renter("ann"), &constraints("Sedan", 1, 5))
        .await
        .unwrap();

    assert_eq!(session.current_quotes().len(), 1);
    assert_eq!(session.current_quotes()[0].id(), quote.id());
    assert_eq!(agency.reservations_at("Avis").await, 0);
}

#[tokio::test]
async fn non_matching_quote_leaves_cart_unchanged() {
    let agency = Agency::with(vec![Arc::new(fleet("-Avis\nSedan,5,400,50,false,1\n"))]).await;
    let mut session = agency.session();
    session
        .create_quote(&renter("ann"), &constraints("Sedan", 1, 5))
        .await
        .unwrap();

    let err = session
        .create_quote(&renter("ann"), &constraints("Limo", 1, 5))
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::NoQuoteAvailable { .. }));
    assert_eq!(session.current_quotes().len(), 1);
}

#[tokio::test]
async fn current_quotes_keep_call_order() {
    let agency = Agency::with(vec![Arc::new(fleet(
        "-Avis\nSedan,5,400,50,false,3\nVan,8,900,90,false,1\n",
    ))])
    .await;
    let mut session = agency.session();

    let mut ids = Vec::new();
    for (car_type, from, to) in [("Van", 2, 4), ("Sedan", 1, 3), ("Sedan", 5, 9)] {
        let quote = session
            .create_quote(&renter("bo"), &constraints(car_type, from, to))
            .await
            .unwrap();
        ids.push(quote.id());
    }

    let cart: Vec<_> = session.current_quotes().iter().map(Quote::id).collect();
    assert_eq!(cart, ids);
}

#[tokio::test]
async fn confirming_empty_cart_has_no_side_effects() {
    let agency = Agency::with(vec![Arc::new(fleet("-Avis\nSedan,5,400,50,false,1\n"))]).await;
    let mut session = agency.session();

    assert!(session.confirm_quotes().await.unwrap().is_empty());
    assert_eq!(agency.reservations_at("Avis").await, 0);
}

#[tokio::test]
async fn committable_cart_yields_reservations_in_cart_order() {
    let agency = Agency::with(vec![
        Arc::new(fleet("-Avis\nSedan,5,400,50,false,1\n")),
        Arc::new(fleet("-Hertz\nVan,8,900,90,false,1\n")),
    ])
    .await;
    let mut session = agency.session();
    session.set_renter(renter("cy")).unwrap();

    session
        .create_quote(&renter("cy"), &constraints("Van", 1, 3))
        .await
        .unwrap();
    session
        .create_quote(&renter("cy"), &constraints("Sedan", 1, 3))
        .await
        .unwrap();

    let reservations = session.confirm_quotes().await.unwrap();
    let companies: Vec<&str> = reservations.iter().map(|r| r.company().as_str()).collect();
    assert_eq!(companies, vec!["Hertz", "Avis"]);
    assert!(session.current_quotes().is_empty());
    assert_eq!(agency.reservations_at("Avis").await, 1);
    assert_eq!(agency.reservations_at("Hertz").await, 1);
}

#[tokio::test]
async fn failed_commit_keeps_earlier_reservations_and_skips_later_ones() {
    let budget = CommitTimesOut {
        inner: fleet("-Budget\nLimo,6,500,200,false,1\n"),
    };
    let agency = Agency::with(vec![
        Arc::new(fleet("-Avis\nSedan,5,400,50,false,2\n")),
        Arc::new(budget),
    ])
    .await;
    let mut session = agency.session();

    session
        .create_quote(&renter("di"), &constraints("Sedan", 1, 3))
        .await
        .unwrap();
    session
        .create_quote(&renter("di"), &constraints("Limo", 1, 3))
        .await
        .unwrap();
    session
        .create_quote(&renter("di"), &constraints("Sedan", 1, 3))
        .await
        .unwrap();

    let err = session.confirm_quotes().await.unwrap_err();
    let failure = err.confirmation_failure().unwrap();

    assert_eq!(failure.index, 1);
    assert_eq!(failure.company.as_str(), "Budget");
    assert_eq!(failure.committed.len(), 1);
    assert!(matches!(
        failure.reason,
        CommitFailure::Inventory(InventoryError::Timeout { .. })
    ));
    assert!(!err.is_retryable());

    assert!(session.current_quotes().is_empty());
    assert_eq!(agency.reservations_at("Avis").await, 1);
    assert_eq!(agency.reservations_at("Budget").await, 0);
}

#[tokio::test]
async fn cheapest_type_honours_region_and_unrestricted_companies() {
    let agency = Agency::with(vec![
        Arc::new(fleet("-A,north\nX,4,300,20,false,1\n")),
        Arc::new(fleet("-B\nY,4,300,15,false,1\n")),
    ])
    .await;
    let session = agency.session();

    let cheapest = session
        .cheapest_car_type(&period(1, 5), "north")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(cheapest.name(), "Y");
}

#[tokio::test]
async fn cheapest_type_is_picked_from_the_reported_union() {
    let agency = Agency::with(vec![
        Arc::new(fleet("-A\nSedan,5,400,40,false,1\n")),
        Arc::new(fleet("-B\nSedan,5,400,30,false,1\nMini,4,200,35,false,1\n")),
    ])
    .await;
    let session = agency.session();

    let union = session.available_car_types(&period(1, 5)).await.unwrap();
    let cheapest = session
        .cheapest_car_type(&period(1, 5), "anywhere")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(cheapest.name(), "Mini");
    assert!(union.iter().any(|t| t.name() == cheapest.name()
        && t.price_per_day() == cheapest.price_per_day()));
}

#[tokio::test]
async fn availability_is_the_union_over_companies() {
    let agency = Agency::with(vec![
        Arc::new(fleet("-A\nsedan,5,400,50,false,1\n")),
        Arc::new(fleet("-B\nvan,8,900,90,false,1\n")),
    ])
    .await;
    let mut session = agency.session();

    session
        .create_quote(&renter("ed"), &constraints("van", 1, 5))
        .await
        .unwrap();
    session.confirm_quotes().await.unwrap();

    let types = session.available_car_types(&period(1, 5)).await.unwrap();
    let names: Vec<&str> = types.iter().map(CarType::name).collect();
    assert_eq!(names, vec!["sedan"]);
}

#[tokio::test]
async fn unreachable_company_is_skipped_for_availability() {
    let agency = Agency::with(vec![
        Arc::new(fleet("-Avis\nSedan,5,400,50,false,1\n")),
        Arc::new(Unreachable {
            name: CompanyName::new("Zoom").unwrap(),
        }),
    ])
    .await;
    let session = agency.session();

    let types = session.available_car_types(&period(1, 5)).await.unwrap();
    assert_eq!(types.len(), 1);

    let names = session.all_company_names().await.unwrap();
    assert_eq!(names.len(), 2);
}

#[tokio::test]
async fn second_set_renter_fails() {
    let agency = Agency::with(vec![]).await;
    let mut session = agency.session();

    session.set_renter(renter("fay")).unwrap();
    let err = session.set_renter(renter("gus")).unwrap_err();
    assert!(err.is_usage_error());
}

#[tokio::test]
async fn concurrent_sessions_never_double_book() {
    let agency = Agency::with(vec![Arc::new(fleet("-Avis\nSedan,5,400,50,false,1\n"))]).await;
    let mut first = agency.session();
    let mut second = agency.session();

    first
        .create_quote(&renter("hal"), &constraints("Sedan", 1, 5))
        .await
        .unwrap();
    second
        .create_quote(&renter("ivy"), &constraints("Sedan", 3, 7))
        .await
        .unwrap();

    let (a, b) = tokio::join!(first.confirm_quotes(), second.confirm_quotes());
    assert_eq!(a.is_ok() as usize + b.is_ok() as usize, 1);
    assert_eq!(agency.reservations_at("Avis").await, 1);
}
