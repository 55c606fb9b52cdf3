//! Menu items and the fixed catalog they are sold from.
//!
//! The catalog is built once at startup and shared read-only (`Arc<Catalog>`) between the
//! HTTP layer and the order actor, which resolves requested item IDs against it.
use serde::{Deserialize, Serialize, Serializer};
use std::fmt::Display;

/// Type-safe identifier for menu items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuItemId(pub u32);

impl From<u32> for MenuItemId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for MenuItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "item_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    #[serde(serialize_with = "serialize_amount")]
    pub price: f64,
    pub category: String,
}

impl MenuItem {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        price: f64,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: MenuItemId(id),
            name: name.into(),
            price,
            category: category.into(),
        }
    }
}

/// Writes whole amounts as JSON integers (`10`, not `10.0`) and keeps fractions as floats.
pub(crate) fn serialize_amount<S>(amount: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    // Beyond 2^53 an f64 no longer maps one-to-one onto integers.
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0;
    if amount.fract() == 0.0 && amount.abs() < MAX_EXACT {
        serializer.serialize_i64(*amount as i64)
    } else {
        serializer.serialize_f64(*amount)
    }
}

/// The immutable list of sellable items.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    items: Vec<MenuItem>,
}

impl Catalog {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    /// The menu the service ships with.
    pub fn standard() -> Self {
        Self::new(vec![
            MenuItem::new(1, "Pizza", 10.0, "Main"),
            MenuItem::new(2, "Burger", 5.0, "Main"),
            MenuItem::new(3, "Pasta", 7.0, "Main"),
            MenuItem::new(4, "Salad", 4.0, "Side"),
            MenuItem::new(5, "Coke", 2.0, "Drink"),
        ])
    }

    /// Every item, unfiltered, in catalog order.
    pub fn list(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn get(&self, id: MenuItemId) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Resolves each requested ID on its own, keeping request order and duplicates.
    ///
    /// On failure returns the IDs that matched nothing, in request order.
    pub fn resolve(&self, ids: &[MenuItemId]) -> Result<Vec<MenuItem>, Vec<MenuItemId>> {
        let mut resolved = Vec::with_capacity(ids.len());
        let mut unknown = Vec::new();
        for id in ids {
            match self.get(*id) {
                Some(item) => resolved.push(item.clone()),
                None => unknown.push(*id),
            }
        }
        if unknown.is_empty() {
            Ok(resolved)
        } else {
            Err(unknown)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[u32]) -> Vec<MenuItemId> {
        raw.iter().copied().map(MenuItemId).collect()
    }

    #[test]
    fn standard_menu_lists_five_items_in_order() {
        let catalog = Catalog::standard();
        let names: Vec<&str> = catalog.list().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Pizza", "Burger", "Pasta", "Salad", "Coke"]);
    }

    #[test]
    fn resolve_keeps_request_order_and_duplicates() {
        let catalog = Catalog::standard();
        let items = catalog.resolve(&ids(&[5, 1, 5])).unwrap();
        let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Coke", "Pizza", "Coke"]);
    }

    #[test]
    fn resolve_reports_every_unknown_id() {
        let catalog = Catalog::standard();
        let unknown = catalog.resolve(&ids(&[99, 2, 0])).unwrap_err();
        assert_eq!(unknown, ids(&[99, 0]));
    }

    #[test]
    fn menu_item_serializes_with_plain_id() {
        let json = serde_json::to_string(&MenuItem::new(4, "Salad", 4.0, "Side")).unwrap();
        assert_eq!(json, r#"{"id":4,"name":"Salad","price":4,"category":"Side"}"#);
    }

    #[test]
    fn fractional_prices_stay_fractional() {
        let json = serde_json::to_string(&MenuItem::new(7, "Tea", 1.5, "Drink")).unwrap();
        assert_eq!(json, r#"{"id":7,"name":"Tea","price":1.5,"category":"Drink"}"#);

        let back: MenuItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back.price, 1.5);
    }
}
