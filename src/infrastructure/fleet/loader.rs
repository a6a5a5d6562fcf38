//! # Fleet Loader
//!
//! Reads a rental company's fleet from its line-oriented data file.
//!
//! ```text
//! # comment
//! -Hertz,north:east
//! Compact,4,300,40.0,false,2
//! Van,8,900,85.5,true,1
//! ```
//!
//! The `-` line names the company and the regions it serves (`:`-separated,
//! empty for "everywhere"). Every other line is a car type followed by the
//! number of cars of that type. Car ids are handed out from 1 in file order.

use crate::domain::entities::{Car, CarType, RentalCompany};
use crate::domain::value_objects::{CarId, CompanyName, Price};
use crate::infrastructure::fleet::error::{FleetError, FleetResult};
use crate::infrastructure::inventory::InMemoryInventory;
use rust_decimal::Decimal;
use std::collections::BTreeSet;
use std::path::Path;
use std::str::FromStr;

const TYPE_FIELDS: usize = 6;

/// Upper bound on the number of cars a single fleet file may declare.
pub const MAX_CARS: usize = 100_000;

/// Parsed content of a fleet file.
#[derive(Debug, Clone)]
pub struct FleetData {
    /// Company name.
    pub name: CompanyName,
    /// Regions served; `None` means unrestricted.
    pub regions: Option<BTreeSet<String>>,
    /// Car types in file order.
    pub car_types: Vec<CarType>,
    /// Cars with their assigned ids.
    pub cars: Vec<Car>,
}

impl FleetData {
    /// Builds the company aggregate.
    ///
    /// # Errors
    ///
    /// Returns `FleetError::Inconsistent` if the cars do not fit the types.
    pub fn into_company(self) -> FleetResult<RentalCompany> {
        Ok(RentalCompany::new(
            self.name,
            self.regions,
            self.car_types,
            self.cars,
        )?)
    }

    /// Builds an in-memory inventory for the company.
    ///
    /// # Errors
    ///
    /// Returns `FleetError::Inconsistent` if the cars do not fit the types.
    pub fn into_inventory(self) -> FleetResult<InMemoryInventory> {
        Ok(InMemoryInventory::new(self.into_company()?))
    }
}

/// Parser for fleet data files.
#[derive(Debug, Clone, Copy, Default)]
pub struct FleetLoader;

impl FleetLoader {
    /// Reads and parses a fleet file.
    ///
    /// # Errors
    ///
    /// Returns `FleetError::Io` if the file cannot be read, otherwise any
    /// error from [`parse`](Self::parse).
    pub fn load(path: impl AsRef<Path>) -> FleetResult<FleetData> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| FleetError::io(path, e))?;
        Self::parse(&content)
    }

    /// Parses fleet data from text.
    ///
    /// # Errors
    ///
    /// Returns `FleetError::Parse` with the 1-based line number of the first
    /// malformed line (including the line that pushes the fleet past
    /// [`MAX_CARS`]), or `FleetError::MissingHeader` if no company header
    /// was found.
    pub fn parse(content: &str) -> FleetResult<FleetData> {
        let mut header: Option<(CompanyName, Option<BTreeSet<String>>)> = None;
        let mut car_types: Vec<CarType> = Vec::new();
        let mut cars: Vec<Car> = Vec::new();
        let mut next_id: u32 = 1;

        for (index, raw) in content.lines().enumerate() {
            let line_no = index + 1;
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some(rest) = line.strip_prefix('-') {
                if header.is_some() {
                    return Err(FleetError::parse(line_no, "duplicate company header"));
                }
                header = Some(parse_header(line_no, rest)?);
                continue;
            }

            let (car_type, count) = parse_type_line(line_no, line)?;
            if car_types.iter().any(|t| t.name() == car_type.name()) {
                return Err(FleetError::parse(
                    line_no,
                    format!("duplicate car type {}", car_type.name()),
                ));
            }
            let fleet_size = usize::try_from(count)
                .ok()
                .and_then(|count| cars.len().checked_add(count))
                .filter(|total| *total <= MAX_CARS);
            if fleet_size.is_none() {
                return Err(FleetError::parse(
                    line_no,
                    format!("too many cars: a fleet holds at most {MAX_CARS}"),
                ));
            }
            for _ in 0..count {
                cars.push(Car::new(CarId::new(next_id), car_type.name()));
                next_id = next_id
                    .checked_add(1)
                    .ok_or_else(|| FleetError::parse(line_no, "too many cars"))?;
            }
            car_types.push(car_type);
        }

        let (name, regions) = header.ok_or(FleetError::MissingHeader)?;
        Ok(FleetData {
            name,
            regions,
            car_types,
            cars,
        })
    }
}

fn parse_header(line_no: usize, rest: &str) -> FleetResult<(CompanyName, Option<BTreeSet<String>>)> {
    let mut fields = rest.splitn(2, ',');
    let name = fields.next().unwrap_or_default();
    let name = CompanyName::new(name).map_err(|e| FleetError::parse(line_no, e.to_string()))?;

    let regions: BTreeSet<String> = fields
        .next()
        .unwrap_or_default()
        .split(':')
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .map(str::to_string)
        .collect();

    let regions = if regions.is_empty() {
        None
    } else {
        Some(regions)
    };
    Ok((name, regions))
}

fn parse_type_line(line_no: usize, line: &str) -> FleetResult<(CarType, u32)> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    let [name, seats, trunk, price, smoking, count] = fields.as_slice() else {
        return Err(FleetError::parse(
            line_no,
            format!("expected {TYPE_FIELDS} fields, found {}", fields.len()),
        ));
    };

    let seats: u32 = parse_field(line_no, "seats", seats)?;
    let trunk: f32 = parse_field(line_no, "trunk space", trunk)?;
    let price: Decimal = parse_field(line_no, "price per day", price)?;
    let smoking = parse_bool(line_no, smoking)?;
    let count: u32 = parse_field(line_no, "car count", count)?;

    let price = Price::from_decimal(price).map_err(|e| FleetError::parse(line_no, e.to_string()))?;
    let car_type = CarType::new(*name, seats, trunk, price, smoking)
        .map_err(|e| FleetError::parse(line_no, e.to_string()))?;
    Ok((car_type, count))
}

fn parse_field<T: FromStr>(line_no: usize, field: &str, value: &str) -> FleetResult<T> {
    value
        .parse()
        .map_err(|_| FleetError::parse(line_no, format!("invalid {field}: {value:?}")))
}

fn parse_bool(line_no: usize, value: &str) -> FleetResult<bool> {
    if value.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if value.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(FleetError::parse(
            line_no,
            format!("invalid smoking flag: {value:?}"),
        ))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    const HERTZ: &str = "\
# Hertz fleet
-Hertz,north:east

Compact,4,300,40.0,false,2
Van,8,900,85.5,true,1
";

    mod parsing {
        use super::*;

        #[test]
        fn parses_header_types_and_cars() {
            let data = FleetLoader::parse(HERTZ).unwrap();
            assert_eq!(data.name.as_str(), "Hertz");
            let regions = data.regions.unwrap();
            assert!(regions.contains("north"));
            assert!(regions.contains("east"));
            assert_eq!(data.car_types.len(), 2);
            assert_eq!(data.car_types[1].price_per_day(), Price::new(85.5).unwrap());
            assert!(data.car_types[1].smoking_allowed());

            let ids: Vec<u32> = data.cars.iter().map(|c| c.id().get()).collect();
            assert_eq!(ids, vec![1, 2, 3]);
            assert_eq!(data.cars[2].car_type(), "Van");
        }

        #[test]
        fn empty_region_field_is_unrestricted() {
            let data = FleetLoader::parse("-Avis,\nMini,2,100,20,false,1\n").unwrap();
            assert!(data.regions.is_none());

            let data = FleetLoader::parse("-Avis\nMini,2,100,20,false,1\n").unwrap();
            assert!(data.regions.is_none());
        }

        #[test]
        fn zero_count_keeps_type_without_cars() {
            let data = FleetLoader::parse("-Avis\nMini,2,100,20,false,0\n").unwrap();
            assert_eq!(data.car_types.len(), 1);
            assert!(data.cars.is_empty());
        }
    }

    mod errors {
        use super::*;

        #[test]
        fn missing_header() {
            let err = FleetLoader::parse("Mini,2,100,20,false,1\n").unwrap_err();
            assert!(matches!(err, FleetError::MissingHeader));
        }

        #[test]
        fn bad_number_reports_line() {
            let err = FleetLoader::parse("# c\n-Avis\nMini,two,100,20,false,1\n").unwrap_err();
            assert!(matches!(err, FleetError::Parse { line: 3, .. }));
            assert!(err.to_string().contains("seats"));
        }

        #[test]
        fn wrong_field_count() {
            let err = FleetLoader::parse("-Avis\nMini,2,100\n").unwrap_err();
            assert!(matches!(err, FleetError::Parse { line: 2, .. }));
            assert!(err.is_malformed());
        }

        #[test]
        fn duplicate_type_and_header() {
            let err =
                FleetLoader::parse("-Avis\nMini,2,100,20,false,1\nMini,2,100,20,false,1\n")
                    .unwrap_err();
            assert!(matches!(err, FleetError::Parse { line: 3, .. }));

            let err = FleetLoader::parse("-Avis\n-Hertz\n").unwrap_err();
            assert!(matches!(err, FleetError::Parse { line: 2, .. }));
        }

        #[test]
        fn oversized_fleet_is_rejected() {
            let err = FleetLoader::parse("-Avis\nMini,2,100,20,false,4000000000\n").unwrap_err();
            assert!(matches!(err, FleetError::Parse { line: 2, .. }));
            assert!(err.to_string().contains("too many cars"));

            let half = MAX_CARS / 2 + 1;
            let content = format!("-Avis\nMini,2,100,20,false,{half}\nVan,8,900,90,false,{half}\n");
            let err = FleetLoader::parse(&content).unwrap_err();
            assert!(matches!(err, FleetError::Parse { line: 3, .. }));
        }

        #[test]
        fn fleet_at_the_cap_loads() {
            let content = format!("-Avis\nMini,2,100,20,false,{MAX_CARS}\n");
            let fleet = FleetLoader::parse(&content).unwrap();
            assert_eq!(fleet.cars.len(), MAX_CARS);
        }

        #[test]
        fn missing_file_is_io_error() {
            let err = FleetLoader::load("/definitely/not/here.csv").unwrap_err();
            assert!(matches!(err, FleetError::Io { .. }));
            assert!(!err.is_malformed());
        }
    }

    #[test]
    fn builds_inventory() {
        let company = FleetLoader::parse(HERTZ).unwrap().into_company().unwrap();
        assert_eq!(company.cars().count(), 3);
        assert!(company.operates_in(Some("east")));
    }
}
