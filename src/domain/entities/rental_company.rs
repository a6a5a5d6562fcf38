//! # Rental Company Aggregate
//!
//! A company's fleet: its car types, its cars, the regions it serves and
//! the reservations made against it.
//!
//! This module provides the [`RentalCompany`] aggregate, which answers
//! availability questions, prices quotes and turns quotes into reservations.
//! It is plain synchronous state; callers that share it across tasks wrap it
//! in a lock (see `InMemoryInventory`).
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use rental_broker::domain::entities::{Car, CarType, RentalCompany};
//! use rental_broker::domain::value_objects::{CarId, CompanyName, DateRange, Price};
//!
//! let compact = CarType::new("Compact", 4, 300.0, Price::new(40.0).unwrap(), false).unwrap();
//! let company = RentalCompany::new(
//!     CompanyName::new("Hertz").unwrap(),
//!     None,
//!     vec![compact],
//!     vec![Car::new(CarId::new(1), "Compact")],
//! )
//! .unwrap();
//!
//! let period = DateRange::new(
//!     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
//!     NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
//! )
//! .unwrap();
//! assert_eq!(company.available_car_types(&period).len(), 1);
//! ```

use crate::domain::entities::car::Car;
use crate::domain::entities::car_type::CarType;
use crate::domain::entities::constraints::ReservationConstraints;
use crate::domain::entities::quote::Quote;
use crate::domain::entities::reservation::Reservation;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::{ArithmeticError, CarId, CompanyName, DateRange, RenterName};
use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;

/// Reason a company cannot quote or commit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RentalRejection {
    /// The company does not operate in the requested region.
    #[error("{company} does not operate in region {region}")]
    RegionNotServed {
        /// Company name.
        company: CompanyName,
        /// Requested region.
        region: String,
    },

    /// The company has no car type with this name.
    #[error("{company} has no car type {car_type}")]
    UnknownCarType {
        /// Company name.
        company: CompanyName,
        /// Requested car type.
        car_type: String,
    },

    /// Every car of the type is reserved during the period.
    #[error("{company} has no {car_type} available for {period}")]
    NoCarAvailable {
        /// Company name.
        company: CompanyName,
        /// Requested car type.
        car_type: String,
        /// Requested period.
        period: DateRange,
    },

    /// The quote was issued by another company.
    #[error("quote from {quoted_by} cannot be committed at {company}")]
    WrongCompany {
        /// Company asked to commit.
        company: CompanyName,
        /// Company named in the quote.
        quoted_by: CompanyName,
    },

    /// The price could not be computed.
    #[error("pricing failed: {0}")]
    Pricing(#[from] ArithmeticError),
}

/// A rental company and its fleet.
///
/// # Invariants
///
/// - Car ids are unique within the company
/// - Every car's type is one of the company's car types
#[derive(Debug, Clone)]
pub struct RentalCompany {
    name: CompanyName,
    regions: Option<BTreeSet<String>>,
    car_types: BTreeMap<String, CarType>,
    cars: BTreeMap<CarId, Car>,
}

impl RentalCompany {
    /// Creates a company from its fleet.
    ///
    /// `regions` of `None` means the company serves every region.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCarType` if a car references an unknown
    /// type, and `DomainError::InvalidIdentifier` on a duplicate car id.
    pub fn new(
        name: CompanyName,
        regions: Option<BTreeSet<String>>,
        car_types: Vec<CarType>,
        cars: Vec<Car>,
    ) -> DomainResult<Self> {
        let car_types: BTreeMap<String, CarType> = car_types
            .into_iter()
            .map(|t| (t.name().to_string(), t))
            .collect();

        let mut fleet = BTreeMap::new();
        for car in cars {
            if !car_types.contains_key(car.car_type()) {
                return Err(DomainError::invalid_car_type(format!(
                    "car {} of {name} has unknown type {}",
                    car.id(),
                    car.car_type()
                )));
            }
            let id = car.id();
            if fleet.insert(id, car).is_some() {
                return Err(DomainError::invalid_identifier(format!(
                    "duplicate car id {id} in {name}"
                )));
            }
        }

        Ok(Self {
            name,
            regions,
            car_types,
            cars: fleet,
        })
    }

    /// Returns the company name.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &CompanyName {
        &self.name
    }

    /// Returns the regions served, or `None` if unrestricted.
    #[inline]
    #[must_use]
    pub fn regions(&self) -> Option<&BTreeSet<String>> {
        self.regions.as_ref()
    }

    /// Returns true if the company serves the region.
    ///
    /// No requested region, or no region restriction, always matches.
    #[must_use]
    pub fn operates_in(&self, region: Option<&str>) -> bool {
        match (region, &self.regions) {
            (None, _) | (_, None) => true,
            (Some(region), Some(served)) => served.contains(region),
        }
    }

    /// Returns all car types, ordered by name.
    pub fn car_types(&self) -> impl Iterator<Item = &CarType> {
        self.car_types.values()
    }

    /// Looks up a car type by name.
    #[must_use]
    pub fn car_type(&self, name: &str) -> Option<&CarType> {
        self.car_types.get(name)
    }

    /// Returns all cars, ordered by id.
    pub fn cars(&self) -> impl Iterator<Item = &Car> {
        self.cars.values()
    }

    /// Returns the cars of a type, ordered by id.
    pub fn cars_of_type<'a>(&'a self, car_type: &'a str) -> impl Iterator<Item = &'a Car> + 'a {
        self.cars.values().filter(move |c| c.car_type() == car_type)
    }

    /// Looks up a car by id.
    #[must_use]
    pub fn car(&self, id: CarId) -> Option<&Car> {
        self.cars.get(&id)
    }

    /// Returns the car types with at least one car free for the period,
    /// ordered by name.
    #[must_use]
    pub fn available_car_types(&self, period: &DateRange) -> Vec<CarType> {
        self.car_types
            .values()
            .filter(|t| {
                self.cars_of_type(t.name())
                    .any(|c| c.is_available(period))
            })
            .cloned()
            .collect()
    }

    /// Prices a quote for the constraints.
    ///
    /// # Errors
    ///
    /// Returns a [`RentalRejection`] if the region is not served, the type is
    /// unknown, no car is free, or the price overflows.
    pub fn create_quote(
        &self,
        constraints: &ReservationConstraints,
        renter: &RenterName,
    ) -> Result<Quote, RentalRejection> {
        if !self.operates_in(constraints.region()) {
            return Err(RentalRejection::RegionNotServed {
                company: self.name.clone(),
                region: constraints.region().unwrap_or_default().to_string(),
            });
        }

        let car_type = self.known_type(constraints.car_type())?;
        let period = constraints.period();
        self.first_available_car(car_type.name(), &period)?;

        let price = car_type.price_per_day().for_days(period.days())?;
        Ok(Quote::new(
            renter.clone(),
            period,
            self.name.clone(),
            car_type.name(),
            price,
        ))
    }

    /// Commits a quote: assigns the lowest-id free car of the quoted type and
    /// records the reservation.
    ///
    /// # Errors
    ///
    /// Returns a [`RentalRejection`] if the quote belongs to another company,
    /// the type is unknown, or no car of the type is free any more.
    pub fn confirm_quote(&mut self, quote: &Quote) -> Result<Reservation, RentalRejection> {
        if quote.company() != &self.name {
            return Err(RentalRejection::WrongCompany {
                company: self.name.clone(),
                quoted_by: quote.company().clone(),
            });
        }
        self.known_type(quote.car_type())?;

        let car_id = self.first_available_car(quote.car_type(), &quote.period())?;
        let reservation = Reservation::new(quote.clone(), car_id);
        if let Some(car) = self.cars.get_mut(&car_id) {
            car.add_reservation(reservation.clone());
        }
        Ok(reservation)
    }

    /// Returns every reservation, ordered by car id then booking order.
    #[must_use]
    pub fn reservations(&self) -> Vec<Reservation> {
        self.cars
            .values()
            .flat_map(|c| c.reservations().iter().cloned())
            .collect()
    }

    /// Returns the reservations made by one renter.
    #[must_use]
    pub fn reservations_by(&self, renter: &RenterName) -> Vec<Reservation> {
        self.cars
            .values()
            .flat_map(|c| c.reservations().iter())
            .filter(|r| r.renter() == renter)
            .cloned()
            .collect()
    }

    fn known_type(&self, name: &str) -> Result<&CarType, RentalRejection> {
        self.car_types
            .get(name)
            .ok_or_else(|| RentalRejection::UnknownCarType {
                company: self.name.clone(),
                car_type: name.to_string(),
            })
    }

    fn first_available_car(
        &self,
        car_type: &str,
        period: &DateRange,
    ) -> Result<CarId, RentalRejection> {
        self.cars_of_type(car_type)
            .find(|c| c.is_available(period))
            .map(Car::id)
            .ok_or_else(|| RentalRejection::NoCarAvailable {
                company: self.name.clone(),
                car_type: car_type.to_string(),
                period: *period,
            })
    }
}
