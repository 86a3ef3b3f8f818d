use serde::{Deserialize, Serialize};

use gastro_core::numeric::{CONVERSION_PLACES, ensure_finite, ensure_representable, round_to};
use gastro_core::{DomainError, DomainResult};

/// Fixed mapping from unit symbol to its factor relative to one base unit.
#[derive(Debug)]
pub struct ConversionTable {
    base_unit: &'static str,
    factors: &'static [(&'static str, f64)],
}

impl ConversionTable {
    /// The canonical unit every factor is expressed in.
    pub fn base_unit(&self) -> &'static str {
        self.base_unit
    }

    /// Factor of `unit` relative to the base unit, if the table knows it.
    ///
    /// Symbols are matched exactly (`"kg"`, not `"KG"`).
    pub fn factor(&self, unit: &str) -> Option<f64> {
        self.factors
            .iter()
            .find_map(|(symbol, factor)| (*symbol == unit).then_some(*factor))
    }

    /// Unit symbols in table order.
    pub fn units(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.factors.iter().map(|(symbol, _)| *symbol)
    }

    pub fn contains(&self, unit: &str) -> bool {
        self.factor(unit).is_some()
    }
}

/// Weight factors, in grams.
pub static WEIGHT_TABLE: ConversionTable = ConversionTable {
    base_unit: "g",
    factors: &[
        ("mg", 0.001),
        ("g", 1.0),
        ("kg", 1000.0),
        ("lb", 453.592),
        ("oz", 28.3495),
    ],
};

/// Volume factors, in milliliters.
pub static VOLUME_TABLE: ConversionTable = ConversionTable {
    base_unit: "ml",
    factors: &[
        ("ml", 1.0),
        ("cl", 10.0),
        ("dl", 100.0),
        ("l", 1000.0),
        ("cup", 240.0),
        ("tbsp", 15.0),
        ("tsp", 5.0),
    ],
};

/// Measurement domain selecting which table a conversion uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitDomain {
    Weight,
    Volume,
}

impl UnitDomain {
    pub fn table(self) -> &'static ConversionTable {
        match self {
            UnitDomain::Weight => &WEIGHT_TABLE,
            UnitDomain::Volume => &VOLUME_TABLE,
        }
    }

    /// Units assumed when a request leaves `de`/`para` out.
    pub fn default_units(self) -> (&'static str, &'static str) {
        match self {
            UnitDomain::Weight => ("g", "kg"),
            UnitDomain::Volume => ("ml", "l"),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            UnitDomain::Weight => "weight",
            UnitDomain::Volume => "volume",
        }
    }

    fn factor(self, unit: &str) -> DomainResult<f64> {
        self.table().factor(unit).ok_or_else(|| {
            DomainError::unsupported_unit(format!("'{unit}' is not a {} unit", self.as_str()))
        })
    }
}

impl core::fmt::Display for UnitDomain {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Convert `value` from `from_unit` to `to_unit` within `domain`.
///
/// The value is scaled to the domain's base unit and then to the target unit;
/// the result is rounded to four decimal places. Units from the other domain
/// are reported as unsupported, there is no implicit weight/volume bridge.
pub fn convert(value: f64, from_unit: &str, to_unit: &str, domain: UnitDomain) -> DomainResult<f64> {
    let from = domain.factor(from_unit)?;
    let to = domain.factor(to_unit)?;
    let value = ensure_finite("valor", value)?;

    let converted = ensure_representable("valor_convertido", value * from / to)?;
    Ok(round_to(converted, CONVERSION_PLACES))
}
