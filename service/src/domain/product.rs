//! [`Product`] definitions.

use std::collections::BTreeMap;

use common::{define_kind, define_text, Money, Percent};
use derive_more::{Display, From, FromStr, Into};
use serde::{de, Deserialize, Deserializer, Serialize};

/// Product offered by the store.
///
/// Every optional part of a [`Product`] may be absent or `null` in a catalog
/// source: such [`Specs`] or [`Feature`]s deserialize as empty ones. Free text
/// is trimmed, and optional text that is still invalid afterwards is dropped
/// rather than failing the whole catalog.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// ID of this [`Product`].
    pub id: Id,

    /// [`Name`] of this [`Product`].
    #[serde(deserialize_with = "text")]
    pub name: Name,

    /// [`Category`] of this [`Product`].
    pub category: Category,

    /// [`Subcategory`] of this [`Product`] within its [`Category`], if any.
    #[serde(default, deserialize_with = "optional_text")]
    pub subcategory: Option<Subcategory>,

    /// [`Brand`] of this [`Product`].
    #[serde(deserialize_with = "text")]
    pub brand: Brand,

    /// Base price of this [`Product`].
    pub price: Money,

    /// Discounted price of this [`Product`], if any.
    #[serde(default)]
    pub sale_price: Option<Money>,

    /// [`Specs`] of this [`Product`].
    #[serde(default, deserialize_with = "specs")]
    pub specs: Specs,

    /// Marketing [`Badge`] of this [`Product`], if any.
    #[serde(default, deserialize_with = "optional_text")]
    pub badge: Option<Badge>,

    /// [`Feature`]s declared for this [`Product`] by the catalog source.
    #[serde(default, deserialize_with = "features")]
    pub features: Vec<Feature>,

    /// Indicator whether this [`Product`] is in stock.
    #[serde(default = "in_stock_default", deserialize_with = "in_stock")]
    pub in_stock: bool,

    /// Number of items of this [`Product`] in stock, if known.
    #[serde(default)]
    pub stock_count: Option<u32>,
}

/// Default value of [`Product::in_stock`].
const fn in_stock_default() -> bool {
    true
}

/// Deserializes a required free-text value, trimming it first.
fn text<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<String, Error = &'static str>,
{
    let s = String::deserialize(deserializer)?;
    T::try_from(s.trim().to_owned()).map_err(de::Error::custom)
}

/// Deserializes an optional free-text value, trimming it first.
///
/// `null` and values invalid after trimming become [`None`].
fn optional_text<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<String>,
{
    Ok(Option::<String>::deserialize(deserializer)?
        .and_then(|s| T::try_from(s.trim().to_owned()).ok()))
}

/// Deserializes [`Product::features`], treating `null` as no [`Feature`]s and
/// dropping entries that are `null` or invalid after trimming.
fn features<'de, D>(deserializer: D) -> Result<Vec<Feature>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Option<String>>>::deserialize(deserializer)?
        .unwrap_or_default()
        .into_iter()
        .flatten()
        .filter_map(|f| Feature::new(f.trim()))
        .collect())
}

/// Deserializes [`Product::specs`], treating `null` as no [`Specs`] and
/// dropping `null` values.
fn specs<'de, D>(deserializer: D) -> Result<Specs, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(
        Option::<BTreeMap<String, Option<String>>>::deserialize(deserializer)?
            .unwrap_or_default()
            .into_iter()
            .filter_map(|(k, v)| Some((k, v?)))
            .collect(),
    )
}

/// Deserializes [`Product::in_stock`], treating `null` as its default.
fn in_stock<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?
        .unwrap_or_else(in_stock_default))
}

impl Product {
    /// Returns the price this [`Product`] is actually sold for.
    ///
    /// This is the [`Product::sale_price`] if it's present and lower than the
    /// [`Product::price`], or the [`Product::price`] otherwise.
    #[must_use]
    pub fn effective_price(&self) -> Money {
        match self.sale_price {
            Some(sale) if sale < self.price => sale,
            Some(_) | None => self.price,
        }
    }

    /// Indicates whether this [`Product`] is sold at a discount.
    #[must_use]
    pub fn is_on_sale(&self) -> bool {
        self.effective_price() < self.price
    }

    /// Returns the [`Percent`] saved on this [`Product`], if it's on sale.
    #[must_use]
    pub fn discount(&self) -> Option<Percent> {
        let saved = self.price.checked_sub(self.effective_price())?;
        if saved == Money::ZERO {
            return None;
        }
        Percent::of(saved, self.price)
    }

    /// Indicates whether this [`Product`] can be bought right now.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.in_stock && self.stock_count != Some(0)
    }
}

/// Splits the provided [`Product`]s into available and unavailable ones.
///
/// The relative order of [`Product`]s is preserved in both parts.
pub fn partition_by_availability<'p, I>(
    products: I,
) -> (Vec<&'p Product>, Vec<&'p Product>)
where
    I: IntoIterator<Item = &'p Product>,
{
    products.into_iter().partition(|p| p.is_available())
}

/// ID of a [`Product`].
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[serde(transparent)]
pub struct Id(u32);

define_kind! {
    #[doc = "Category of a [`Product`]."]
    enum Category {
        #[doc = "Laptop computers."]
        Laptops = 1,

        #[doc = "Mobile phones."]
        Phones = 2,

        #[doc = "Tablet computers."]
        Tablets = 3,

        #[doc = "Televisions."]
        Tvs = 4,

        #[doc = "Desktop computers."]
        Desktops = 5,

        #[doc = "Printers and scanners."]
        Printers = 6,

        #[doc = "Headphones, speakers and other audio equipment."]
        Audio = 7,

        #[doc = "Peripherals and other accessories."]
        Accessories = 8,
    }
}

impl Category {
    /// Indicates whether this [`Category`] contains phones.
    #[must_use]
    pub const fn is_phone_like(self) -> bool {
        matches!(self, Self::Phones)
    }
}

define_text! {
    #[doc = "Name of a [`Product`]."]
    struct Name;
}

define_text! {
    #[doc = "Classification of a [`Product`] within its [`Category`]."]
    struct Subcategory;
}

define_text! {
    #[doc = "Manufacturer of a [`Product`]."]
    struct Brand;
}

define_text! {
    #[doc = "Marketing label of a [`Product`], like `Best Seller`."]
    struct Badge;
}

define_text! {
    #[doc = "Human-readable feature of a [`Product`], like `4K Display`."]
    struct Feature;
}

/// Open mapping of specification names to their values, like
/// `display: 4K OLED Touch`.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Specs(BTreeMap<String, String>);

impl Specs {
    /// Name of the display specification.
    pub const DISPLAY: &'static str = "display";

    /// Name of the connectivity specification.
    pub const CONNECTIVITY: &'static str = "connectivity";

    /// Returns value of the specification with the provided `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Returns the display specification, if any.
    #[must_use]
    pub fn display(&self) -> Option<&str> {
        self.get(Self::DISPLAY)
    }

    /// Returns the connectivity specification, if any.
    #[must_use]
    pub fn connectivity(&self) -> Option<&str> {
        self.get(Self::CONNECTIVITY)
    }
}

impl<K, V> FromIterator<(K, V)> for Specs
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

#[cfg(test)]
pub(crate) mod spec {
    use std::str::FromStr as _;

    use common::{Money, Percent};

    use super::{
        partition_by_availability, Brand, Category, Id, Name, Product, Specs,
    };

    /// Creates a minimal [`Product`] for tests.
    pub(crate) fn product(
        id: u32,
        category: Category,
        brand: &str,
        price: u64,
    ) -> Product {
        Product {
            id: Id::from(id),
            name: Name::new(format!("{brand} {category} #{id}")).unwrap(),
            category,
            subcategory: None,
            brand: Brand::new(brand).unwrap(),
            price: Money::from_minor(price),
            sale_price: None,
            specs: Specs::default(),
            badge: None,
            features: vec![],
            in_stock: true,
            stock_count: None,
        }
    }

    #[test]
    fn effective_price() {
        let mut p = product(1, Category::Laptops, "Dell", 189_900);
        assert_eq!(p.effective_price(), Money::from_minor(189_900));
        assert!(!p.is_on_sale());
        assert!(p.discount().is_none());

        p.sale_price = Some(Money::from_minor(169_900));
        assert_eq!(p.effective_price(), Money::from_minor(169_900));
        assert!(p.is_on_sale());
        assert_eq!(p.discount(), Some(Percent::from_str("11").unwrap()));

        p.sale_price = Some(Money::from_minor(199_900));
        assert_eq!(p.effective_price(), Money::from_minor(189_900));
        assert!(!p.is_on_sale());

        p.sale_price = Some(Money::from_minor(189_900));
        assert_eq!(p.effective_price(), Money::from_minor(189_900));
        assert!(p.discount().is_none());
    }

    #[test]
    fn availability() {
        let mut p = product(1, Category::Phones, "Apple", 99_900);
        assert!(p.is_available());

        p.stock_count = Some(0);
        assert!(!p.is_available());

        p.stock_count = Some(3);
        p.in_stock = false;
        assert!(!p.is_available());
    }

    #[test]
    fn partitions_preserving_order() {
        let mut products = vec![
            product(1, Category::Phones, "Apple", 1),
            product(2, Category::Phones, "Apple", 1),
            product(3, Category::Phones, "Apple", 1),
            product(4, Category::Phones, "Apple", 1),
        ];
        products[0].in_stock = false;
        products[2].stock_count = Some(0);

        let (available, unavailable) = partition_by_availability(&products);

        assert_eq!(
            available.iter().map(|p| p.id).collect::<Vec<_>>(),
            [Id::from(2), Id::from(4)],
        );
        assert_eq!(
            unavailable.iter().map(|p| p.id).collect::<Vec<_>>(),
            [Id::from(1), Id::from(3)],
        );
    }

    #[test]
    fn category_parses_lowercase() {
        assert_eq!(Category::from_str("tvs").unwrap(), Category::Tvs);
        assert_eq!(Category::from_str("Phones").unwrap(), Category::Phones);
        assert_eq!(Category::Laptops.to_string(), "laptops");
        assert!(Category::from_str("fridges").is_err());
        assert_eq!(Category::all().count(), 8);
    }

    #[test]
    fn deserializes_with_absent_optional_fields() {
        let p: Product = serde_json::from_str(
            r#"{
                "id": 7,
                "name": "Pixel 9",
                "category": "phones",
                "brand": "Google",
                "price": 79900
            }"#,
        )
        .unwrap();

        assert_eq!(p.id, Id::from(7));
        assert!(p.subcategory.is_none());
        assert!(p.sale_price.is_none());
        assert!(p.specs.display().is_none());
        assert!(p.features.is_empty());
        assert!(p.badge.is_none());
        assert!(p.in_stock);
    }

    #[test]
    fn deserializes_full_product() {
        let p: Product = serde_json::from_str(
            r#"{
                "id": 1,
                "name": "XPS 15",
                "category": "laptops",
                "subcategory": "business",
                "brand": "Dell",
                "price": 189900,
                "salePrice": 169900,
                "specs": {"display": "4K OLED Touch"},
                "badge": "Best Seller",
                "features": ["Backlit Keyboard"],
                "inStock": true,
                "stockCount": 12
            }"#,
        )
        .unwrap();

        assert_eq!(p.effective_price(), Money::from_minor(169_900));
        assert_eq!(p.specs.display(), Some("4K OLED Touch"));
        assert_eq!(p.subcategory.unwrap().as_str(), "business");
        assert_eq!(p.stock_count, Some(12));
    }
}
