//! Built-in emission factor catalog.
//!
//! Entry order is significant: the matcher keeps the first of equally scored
//! entries, so e.g. the US grid factor wins generic "electricity" lookups.

use crate::factor::{Category, EmissionFactor};

/// (id, activity, category, factor, unit, source, region, year)
#[rustfmt::skip]
type Row = (&'static str, &'static str, &'static str, f64, &'static str, &'static str, &'static str, u16);

#[rustfmt::skip]
const CATALOG: &[Row] = &[
    // Energy: electricity
    ("electricity_grid_us", "electricity", "Energy", 0.4, "kWh", "EPA eGRID 2022", "US", 2022),
    ("electricity_grid_eu", "electricity", "Energy", 0.3, "kWh", "EEA 2022", "EU", 2022),
    ("electricity_renewable", "renewable electricity", "Energy", 0.05, "kWh", "IPCC 2014", "Global", 2014),
    // Energy: fuels
    ("natural_gas", "natural gas", "Energy", 2.0, "m³", "IPCC 2006", "Global", 2006),
    ("heating_oil", "heating oil", "Energy", 2.7, "liter", "IPCC 2006", "Global", 2006),
    ("coal", "coal", "Energy", 2.4, "kg", "IPCC 2006", "Global", 2006),
    ("propane", "propane", "Energy", 1.5, "kg", "IPCC 2006", "Global", 2006),
    // Transport: road and rail
    ("petrol_car", "petrol car", "Transport", 0.18, "km", "DEFRA 2023", "UK", 2023),
    ("diesel_car", "diesel car", "Transport", 0.17, "km", "DEFRA 2023", "UK", 2023),
    ("electric_car", "electric car", "Transport", 0.05, "km", "DEFRA 2023", "UK", 2023),
    ("hybrid_car", "hybrid car", "Transport", 0.12, "km", "DEFRA 2023", "UK", 2023),
    ("motorcycle", "motorcycle", "Transport", 0.11, "km", "DEFRA 2023", "UK", 2023),
    ("bus", "bus", "Transport", 0.08, "km", "DEFRA 2023", "UK", 2023),
    ("train_electric", "electric train", "Transport", 0.04, "km", "DEFRA 2023", "UK", 2023),
    ("train_diesel", "diesel train", "Transport", 0.06, "km", "DEFRA 2023", "UK", 2023),
    // Transport: aviation
    ("flight_domestic", "domestic flight", "Transport", 0.25, "km", "DEFRA 2023", "Global", 2023),
    ("flight_short_haul", "short haul flight", "Transport", 0.15, "km", "DEFRA 2023", "Global", 2023),
    ("flight_long_haul", "long haul flight", "Transport", 0.12, "km", "DEFRA 2023", "Global", 2023),
    // Transport: shipping
    ("ferry", "ferry", "Transport", 0.11, "km", "DEFRA 2023", "Global", 2023),
    ("cargo_ship", "cargo ship", "Transport", 0.01, "tonne-km", "IMO 2020", "Global", 2020),
    // Waste
    ("landfill_waste", "landfill waste", "Waste", 0.5, "kg", "IPCC 2006", "Global", 2006),
    ("recycled_waste", "recycled waste", "Waste", 0.1, "kg", "IPCC 2006", "Global", 2006),
    ("composted_waste", "composted waste", "Waste", 0.05, "kg", "IPCC 2006", "Global", 2006),
    ("incinerated_waste", "incinerated waste", "Waste", 0.3, "kg", "IPCC 2006", "Global", 2006),
    // Industrial processes
    ("cement_production", "cement production", "Industrial", 0.9, "kg", "IPCC 2006", "Global", 2006),
    ("steel_production", "steel production", "Industrial", 2.3, "kg", "IPCC 2006", "Global", 2006),
    ("aluminum_production", "aluminum production", "Industrial", 11.5, "kg", "IPCC 2006", "Global", 2006),
    // Agriculture
    ("beef_production", "beef production", "Agriculture", 60.0, "kg", "FAO 2019", "Global", 2019),
    ("dairy_production", "dairy production", "Agriculture", 3.2, "liter", "FAO 2019", "Global", 2019),
    ("rice_production", "rice production", "Agriculture", 2.5, "kg", "FAO 2019", "Global", 2019),
];

/// The built-in catalog, in stable registry order.
pub fn default_factors() -> Vec<EmissionFactor> {
    CATALOG
        .iter()
        .map(
            |&(id, activity, category, factor, unit, source, region, year)| EmissionFactor {
                id: id.to_string(),
                activity: activity.to_string(),
                category: Category::from(category),
                factor,
                unit: unit.to_string(),
                source: source.to_string(),
                region: region.to_string(),
                year,
            },
        )
        .collect()
}
