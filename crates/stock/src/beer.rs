use serde::{Deserialize, Serialize};

use beerstock_core::{BeerId, DomainError, DomainResult};

/// Closed set of beer categories.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BeerType {
    Lager,
    Malzbier,
    Witbier,
    Weiss,
    Ale,
    Ipa,
    Stout,
}

impl BeerType {
    pub fn as_str(self) -> &'static str {
        match self {
            BeerType::Lager => "LAGER",
            BeerType::Malzbier => "MALZBIER",
            BeerType::Witbier => "WITBIER",
            BeerType::Weiss => "WEISS",
            BeerType::Ale => "ALE",
            BeerType::Ipa => "IPA",
            BeerType::Stout => "STOUT",
        }
    }
}

impl core::fmt::Display for BeerType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Persisted stock record.
///
/// `id` is `None` until the record store assigns one on first save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Beer {
    id: Option<BeerId>,
    name: String,
    brand: String,
    beer_type: BeerType,
    max: u32,
    quantity: u32,
}

impl Beer {
    /// Map a data object onto a record (field-for-field).
    pub fn from_dto(dto: BeerDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            brand: dto.brand,
            beer_type: dto.beer_type,
            max: dto.max,
            quantity: dto.quantity,
        }
    }

    /// Same record with `id` replaced; used by stores when assigning identifiers.
    pub fn with_id(mut self, id: BeerId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn id(&self) -> Option<BeerId> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn beer_type(&self) -> BeerType {
        self.beer_type
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub(crate) fn clear_id(&mut self) {
        self.id = None;
    }

    pub(crate) fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }
}

/// Service-facing representation of a [`Beer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeerDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<BeerId>,
    pub name: String,
    pub brand: String,
    pub max: u32,
    pub quantity: u32,
    #[serde(rename = "type")]
    pub beer_type: BeerType,
}

impl BeerDto {
    /// Boundary validation; a data object that fails here never reaches the service.
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if self.brand.trim().is_empty() {
            return Err(DomainError::validation("brand cannot be empty"));
        }
        if self.max == 0 {
            return Err(DomainError::validation("max must be positive"));
        }
        if self.quantity == 0 {
            return Err(DomainError::validation("quantity must be positive"));
        }
        if self.quantity > self.max {
            return Err(DomainError::validation(format!(
                "quantity {} exceeds max {}",
                self.quantity, self.max
            )));
        }
        Ok(())
    }
}

impl From<Beer> for BeerDto {
    fn from(beer: Beer) -> Self {
        Self {
            id: beer.id,
            name: beer.name,
            brand: beer.brand,
            max: beer.max,
            quantity: beer.quantity,
            beer_type: beer.beer_type,
        }
    }
}

/// Request body for increment/decrement.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityDto {
    pub quantity: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brahma() -> BeerDto {
        BeerDto {
            id: Some(BeerId::new(1)),
            name: "Brahma".to_string(),
            brand: "Ambev".to_string(),
            max: 50,
            quantity: 10,
            beer_type: BeerType::Lager,
        }
    }

    #[test]
    fn mapping_preserves_every_field() {
        let dto = brahma();
        let beer = Beer::from_dto(dto.clone());

        assert_eq!(beer.id(), Some(BeerId::new(1)));
        assert_eq!(beer.name(), "Brahma");
        assert_eq!(beer.brand(), "Ambev");
        assert_eq!(beer.beer_type(), BeerType::Lager);
        assert_eq!(beer.max(), 50);
        assert_eq!(beer.quantity(), 10);
        assert_eq!(BeerDto::from(beer), dto);
    }

    #[test]
    fn valid_dto_passes() {
        assert_eq!(brahma().validate(), Ok(()));
    }

    #[test]
    fn blank_name_or_brand_is_rejected() {
        let mut dto = brahma();
        dto.name = "   ".to_string();
        assert!(matches!(dto.validate(), Err(DomainError::Validation(_))));

        let mut dto = brahma();
        dto.brand = String::new();
        assert!(matches!(dto.validate(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn zero_max_or_quantity_is_rejected() {
        let mut dto = brahma();
        dto.max = 0;
        assert!(dto.validate().is_err());

        let mut dto = brahma();
        dto.quantity = 0;
        assert!(dto.validate().is_err());
    }

    #[test]
    fn quantity_above_max_is_rejected() {
        let mut dto = brahma();
        dto.quantity = 51;
        assert!(matches!(dto.validate(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn json_shape_uses_type_tag() {
        let json = serde_json::to_value(brahma()).unwrap();
        assert_eq!(json["type"], "LAGER");
        assert_eq!(json["name"], "Brahma");
        assert_eq!(json["id"], 1);

        let parsed: BeerDto = serde_json::from_value(serde_json::json!({
            "name": "Colorado Indica",
            "brand": "Colorado",
            "max": 20,
            "quantity": 5,
            "type": "IPA"
        }))
        .unwrap();
        assert_eq!(parsed.id, None);
        assert_eq!(parsed.beer_type, BeerType::Ipa);
    }

    #[test]
    fn missing_brand_fails_deserialization() {
        let parsed = serde_json::from_value::<BeerDto>(serde_json::json!({
            "name": "Brahma",
            "max": 50,
            "quantity": 10,
            "type": "LAGER"
        }));
        assert!(parsed.is_err());
    }

    #[test]
    fn unknown_type_tag_fails_deserialization() {
        let parsed = serde_json::from_value::<BeerDto>(serde_json::json!({
            "name": "Brahma",
            "brand": "Ambev",
            "max": 50,
            "quantity": 10,
            "type": "PILSNER"
        }));
        assert!(parsed.is_err());
    }
}
