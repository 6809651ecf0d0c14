use std::collections::HashMap;

use cropwise_core::{DomainError, DomainResult};

/// Base price used for crops missing from the table (INR per quintal).
pub const DEFAULT_FALLBACK_PRICE: f64 = 3000.0;

/// Reference base prices for Indian crops, INR per quintal.
const REFERENCE_PRICES: [(&str, f64); 22] = [
    ("rice", 2500.0),
    ("maize", 1800.0),
    ("chickpea", 5000.0),
    ("kidneybeans", 4500.0),
    ("pigeonpeas", 5500.0),
    ("mothbeans", 4200.0),
    ("mungbean", 6500.0),
    ("blackgram", 6200.0),
    ("lentil", 5800.0),
    ("pomegranate", 8500.0),
    ("banana", 1200.0),
    ("mango", 3000.0),
    ("grapes", 15000.0),
    ("watermelon", 800.0),
    ("muskmelon", 2000.0),
    ("apple", 12000.0),
    ("orange", 2200.0),
    ("papaya", 1500.0),
    ("coconut", 6000.0),
    ("cotton", 5500.0),
    ("jute", 3500.0),
    ("coffee", 45000.0),
];

/// Static crop -> base price table.
///
/// Keys are stored lower-case and lookups are case-insensitive. Unknown crops
/// resolve to the fallback price instead of failing.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceBasis {
    prices: HashMap<String, f64>,
    fallback: f64,
}

impl Default for PriceBasis {
    fn default() -> Self {
        Self::reference()
    }
}

impl PriceBasis {
    /// The built-in 22-crop table with the default fallback.
    pub fn reference() -> Self {
        Self {
            prices: REFERENCE_PRICES
                .iter()
                .map(|(crop, price)| (crop.to_string(), *price))
                .collect(),
            fallback: DEFAULT_FALLBACK_PRICE,
        }
    }

    /// Build a table from explicit entries. Every price must be finite and positive.
    pub fn from_prices<I, S>(entries: I, fallback: f64) -> DomainResult<Self>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        ensure_positive("fallback", fallback)?;

        let mut prices = HashMap::new();
        for (crop, price) in entries {
            let crop = crop.as_ref().trim().to_lowercase();
            if crop.is_empty() {
                return Err(DomainError::validation("crop name must not be empty"));
            }
            ensure_positive(&crop, price)?;
            prices.insert(crop, price);
        }

        Ok(Self { prices, fallback })
    }

    /// Replace the fallback price.
    pub fn with_fallback(mut self, fallback: f64) -> DomainResult<Self> {
        ensure_positive("fallback", fallback)?;
        self.fallback = fallback;
        Ok(self)
    }

    pub fn base_price(&self, crop: &str) -> f64 {
        self.prices
            .get(&crop.to_lowercase())
            .copied()
            .unwrap_or(self.fallback)
    }

    pub fn contains(&self, crop: &str) -> bool {
        self.prices.contains_key(&crop.to_lowercase())
    }

    pub fn fallback(&self) -> f64 {
        self.fallback
    }

    /// Known crops, sorted.
    pub fn crops(&self) -> Vec<&str> {
        let mut crops: Vec<&str> = self.prices.keys().map(String::as_str).collect();
        crops.sort_unstable();
        crops
    }
}

fn ensure_positive(what: &str, price: f64) -> DomainResult<()> {
    if price.is_finite() && price > 0.0 {
        Ok(())
    } else {
        Err(DomainError::invariant(format!(
            "base price for {what} must be finite and positive (got {price})"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_ignores_case() {
        let basis = PriceBasis::reference();
        assert_eq!(basis.base_price("rice"), 2500.0);
        assert_eq!(basis.base_price("Rice"), 2500.0);
        assert_eq!(basis.base_price("COFFEE"), 45000.0);
    }

    #[test]
    fn unknown_crop_uses_fallback() {
        let basis = PriceBasis::reference();
        assert!(!basis.contains("dragonfruit"));
        assert_eq!(basis.base_price("dragonfruit"), DEFAULT_FALLBACK_PRICE);
        assert_eq!(basis.base_price(""), DEFAULT_FALLBACK_PRICE);
    }

    #[test]
    fn reference_table_covers_all_crops() {
        let basis = PriceBasis::reference();
        assert_eq!(basis.crops().len(), 22);
        assert_eq!(basis.crops()[0], "apple");
    }

    #[test]
    fn custom_table_normalizes_keys() {
        let basis = PriceBasis::from_prices([("Saffron", 250_000.0)], 1000.0).unwrap();
        assert_eq!(basis.base_price("saffron"), 250_000.0);
        assert_eq!(basis.base_price("rice"), 1000.0);
    }

    #[test]
    fn non_positive_prices_are_rejected() {
        let err = PriceBasis::from_prices([("rice", 0.0)], 1000.0).unwrap_err();
        assert!(matches!(err, DomainError::InvariantViolation(_)));

        assert!(PriceBasis::from_prices([("rice", 10.0)], f64::NAN).is_err());
        assert!(PriceBasis::reference().with_fallback(-1.0).is_err());
    }

    #[test]
    fn empty_crop_name_is_rejected() {
        let err = PriceBasis::from_prices([("  ", 10.0)], 1000.0).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}
