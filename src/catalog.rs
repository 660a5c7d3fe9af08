// Medicine catalog. Seeded once from the embedded JSON list and never
// changed afterwards.

use crate::error::ShopError;
use crate::models::Medicine;
use rust_decimal::Decimal;

const BUILTIN_CATALOG: &str = include_str!("catalog.json");

/// Read-only list of medicines, kept in seed order.
#[derive(Debug, Clone)]
pub struct Catalog {
    medicines: Vec<Medicine>,
}

impl Catalog {
    /// The five medicines PharmaGo ships with.
    pub fn builtin() -> Result<Self, ShopError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Parse a JSON array of `{ "name", "price" }` objects. Negative
    /// prices and repeated names are rejected.
    pub fn from_json(json: &str) -> Result<Self, ShopError> {
        let medicines: Vec<Medicine> =
            serde_json::from_str(json).map_err(|e| ShopError::InvalidCatalog(e.to_string()))?;

        for (i, medicine) in medicines.iter().enumerate() {
            if medicine.price < Decimal::ZERO {
                return Err(ShopError::InvalidCatalog(format!(
                    "{} has a negative price",
                    medicine.name
                )));
            }
            if medicines[..i].iter().any(|m| m.name == medicine.name) {
                return Err(ShopError::InvalidCatalog(format!(
                    "{} is listed twice",
                    medicine.name
                )));
            }
        }

        Ok(Self { medicines })
    }

    /// Exact, case-sensitive lookup by name.
    pub fn find(&self, name: &str) -> Result<&Medicine, ShopError> {
        self.medicines
            .iter()
            .find(|m| m.name == name)
            .ok_or_else(|| ShopError::MedicineNotFound(name.to_string()))
    }

    pub fn medicines(&self) -> &[Medicine] {
        &self.medicines
    }
}
