//! Derived [`Product`] feature tags.
//!
//! Catalog sources are hand-authored and rarely tag their [`Product`]s
//! consistently, so the combined feature set of a [`Product`] is expanded with
//! tags derived from its price, [`Category`], [`Name`] and [`Specs`].

use common::Money;

#[cfg(doc)]
use super::product::{Category, Name, Specs};
use super::{product::Feature, Product};

/// Price above which a phone is tagged as [`FLAGSHIP`].
pub const FLAGSHIP_PRICE: Money = Money::from_minor(80_000);

/// Price above which a [`Product`] is tagged as [`PREMIUM`].
pub const PREMIUM_PRICE: Money = Money::from_minor(150_000);

/// Price below which a [`Product`] is tagged as [`BUDGET_FRIENDLY`].
pub const BUDGET_PRICE: Money = Money::from_minor(50_000);

/// Tag of expensive phones.
pub const FLAGSHIP: &str = "Flagship";

/// Tag of very expensive [`Product`]s.
pub const PREMIUM: &str = "Premium";

/// Tag of cheap [`Product`]s.
pub const BUDGET_FRIENDLY: &str = "Budget Friendly";

/// Tag of gaming [`Product`]s.
pub const GAMING: &str = "Gaming";

/// Tag of business [`Product`]s.
pub const BUSINESS: &str = "Business";

/// Substrings of the display specification and the tags they produce.
const DISPLAY_TAGS: &[(&str, &str)] = &[
    ("4K", "4K Display"),
    ("OLED", "OLED"),
    ("Touch", "Touch Screen"),
];

/// Substrings of the connectivity specification and the tags they produce.
const CONNECTIVITY_TAGS: &[(&str, &str)] = &[
    ("WiFi 6", "WiFi 6"),
    ("5G", "5G"),
    ("Bluetooth", "Bluetooth"),
    ("USB-C", "USB-C"),
    ("Thunderbolt", "Thunderbolt"),
];

/// Combined feature set of a [`Product`].
///
/// Contains each tag at most once, in the order it was first produced.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Tags(Vec<String>);

impl Tags {
    /// Computes the combined feature set of the provided [`Product`].
    ///
    /// The result is a union of:
    /// - the declared [`Product::badge`] and [`Product::features`], verbatim;
    /// - [`FLAGSHIP`] for phones priced above [`FLAGSHIP_PRICE`];
    /// - [`PREMIUM`] for anything priced above [`PREMIUM_PRICE`];
    /// - [`BUDGET_FRIENDLY`] for anything priced below [`BUDGET_PRICE`];
    /// - display tags, like `4K Display` for a display containing `4K`;
    /// - [`GAMING`] if the [`Name`] mentions `gaming`;
    /// - [`BUSINESS`] if the [`Name`] mentions `business` or the subcategory
    ///   is `business`;
    /// - connectivity tags, like `Bluetooth` for a connectivity containing
    ///   `Bluetooth`.
    ///
    /// All prices are [`Product::effective_price()`]s.
    #[must_use]
    pub fn derive(product: &Product) -> Self {
        let mut tags = Self::default();

        if let Some(badge) = &product.badge {
            tags.push(badge.as_str());
        }
        for feature in &product.features {
            tags.push(feature.as_str());
        }

        let price = product.effective_price();
        if product.category.is_phone_like() && price > FLAGSHIP_PRICE {
            tags.push(FLAGSHIP);
        }
        if price > PREMIUM_PRICE {
            tags.push(PREMIUM);
        }
        if price < BUDGET_PRICE {
            tags.push(BUDGET_FRIENDLY);
        }

        if let Some(display) = product.specs.display() {
            for (needle, tag) in DISPLAY_TAGS {
                if display.contains(needle) {
                    tags.push(tag);
                }
            }
        }

        let name = product.name.as_str().to_lowercase();
        if name.contains("gaming") {
            tags.push(GAMING);
        }
        let is_business_subcategory = product
            .subcategory
            .as_ref()
            .is_some_and(|s| s.as_str() == "business");
        if name.contains("business") || is_business_subcategory {
            tags.push(BUSINESS);
        }

        if let Some(connectivity) = product.specs.connectivity() {
            for (needle, tag) in CONNECTIVITY_TAGS {
                if connectivity.contains(needle) {
                    tags.push(tag);
                }
            }
        }

        tags
    }

    /// Indicates whether any tag contains the provided [`Feature`] label,
    /// ignoring case.
    ///
    /// Matching is by substring, so `AI` matches a `Detailed` tag as well.
    #[must_use]
    pub fn matches(&self, label: &Feature) -> bool {
        let label = label.as_str().to_lowercase();
        self.0.iter().any(|tag| tag.to_lowercase().contains(&label))
    }

    /// Indicates whether these [`Tags`] contain exactly the provided `tag`.
    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().any(|t| t == tag)
    }

    /// Returns an iterator over these [`Tags`].
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Returns number of these [`Tags`].
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Indicates whether there are no [`Tags`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Adds the provided `tag`, unless it's present already.
    fn push(&mut self, tag: &str) {
        if !self.contains(tag) {
            self.0.push(tag.to_owned());
        }
    }
}
