//! Vehicle record model and the ordered lookup report.
//!
//! `Field` is declared in the order keys must appear in the response.
//! `VehicleRecord` only holds fields that were actually found on the page;
//! `LookupReport` projects it onto that order and appends the constant
//! attribution keys.

use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Attribution string appended to every lookup response.
pub const COPYRIGHT: &str = "@mynk_mynk_mynk this source maker";

/// Tag string appended to every lookup response.
pub const TAG: &str = "api by mynk";

/// Response header identifying the service on successful lookups.
pub const SERVICE_HEADER: (&str, &str) = ("x-api-by", "mynk");

/// One labeled value on the RC search page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    OwnerName,
    FatherName,
    OwnerSerialNo,
    ModelName,
    MakerModel,
    VehicleClass,
    FuelType,
    FuelNorms,
    RegistrationDate,
    InsuranceCompany,
    InsuranceNo,
    InsuranceExpiry,
    InsuranceUpto,
    FitnessUpto,
    TaxUpto,
    PucNo,
    PucUpto,
    FinancierName,
    RegisteredRto,
    Address,
    CityName,
    Phone,
}

impl Field {
    /// Desired key order of the response.
    pub const ALL: [Field; 22] = [
        Field::OwnerName,
        Field::FatherName,
        Field::OwnerSerialNo,
        Field::ModelName,
        Field::MakerModel,
        Field::VehicleClass,
        Field::FuelType,
        Field::FuelNorms,
        Field::RegistrationDate,
        Field::InsuranceCompany,
        Field::InsuranceNo,
        Field::InsuranceExpiry,
        Field::InsuranceUpto,
        Field::FitnessUpto,
        Field::TaxUpto,
        Field::PucNo,
        Field::PucUpto,
        Field::FinancierName,
        Field::RegisteredRto,
        Field::Address,
        Field::CityName,
        Field::Phone,
    ];

    /// Label text on the page. Also used verbatim as the JSON key.
    pub fn label(self) -> &'static str {
        match self {
            Field::OwnerName => "Owner Name",
            Field::FatherName => "Father's Name",
            Field::OwnerSerialNo => "Owner Serial No",
            Field::ModelName => "Model Name",
            Field::MakerModel => "Maker Model",
            Field::VehicleClass => "Vehicle Class",
            Field::FuelType => "Fuel Type",
            Field::FuelNorms => "Fuel Norms",
            Field::RegistrationDate => "Registration Date",
            Field::InsuranceCompany => "Insurance Company",
            Field::InsuranceNo => "Insurance No",
            Field::InsuranceExpiry => "Insurance Expiry",
            Field::InsuranceUpto => "Insurance Upto",
            Field::FitnessUpto => "Fitness Upto",
            Field::TaxUpto => "Tax Upto",
            Field::PucNo => "PUC No",
            Field::PucUpto => "PUC Upto",
            Field::FinancierName => "Financier Name",
            Field::RegisteredRto => "Registered RTO",
            Field::Address => "Address",
            Field::CityName => "City Name",
            Field::Phone => "Phone",
        }
    }

    pub fn from_label(label: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|f| f.label() == label)
    }
}

/// Values found for one RC number. Absent fields are not stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VehicleRecord {
    values: HashMap<Field, String>,
}

impl VehicleRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a found value. An empty string is a valid, present value.
    pub fn insert(&mut self, field: Field, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Present entries in desired key order.
    pub fn ordered(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        Field::ALL
            .into_iter()
            .filter_map(|f| self.get(f).map(|v| (f.label(), v)))
    }
}

impl FromIterator<(Field, String)> for VehicleRecord {
    fn from_iter<I: IntoIterator<Item = (Field, String)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// Body of a successful lookup.
///
/// Serializes as a single JSON object: record entries in desired order,
/// then `copyright`, then `tag`. The order is part of the API, so this is
/// serialized by hand instead of going through a sorted map.
#[derive(Debug, Clone)]
pub struct LookupReport {
    record: VehicleRecord,
}

impl LookupReport {
    pub fn new(record: VehicleRecord) -> Self {
        Self { record }
    }

    /// Keys in emission order.
    pub fn keys(&self) -> Vec<&'static str> {
        self.record
            .ordered()
            .map(|(k, _)| k)
            .chain(["copyright", "tag"])
            .collect()
    }
}

impl Serialize for LookupReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.record.len() + 2))?;
        for (key, value) in self.record.ordered() {
            map.serialize_entry(key, value)?;
        }
        map.serialize_entry("copyright", COPYRIGHT)?;
        map.serialize_entry("tag", TAG)?;
        map.end()
    }
}
