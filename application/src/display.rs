//! Presentation metadata of catalog values.
//!
//! Lookups here only decorate the output and never affect which products are
//! listed. Unknown free-text keys resolve to [`Style::FALLBACK`] or
//! [`Rgb::FALLBACK`].

use colored::{ColoredString, Colorize as _};
use service::domain::product::{Brand, Category};

/// RGB color.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// [`Rgb`] of values missing from the lookup tables.
    pub const FALLBACK: Self = Self(0x6b, 0x72, 0x80);

    /// Paints the provided `text` with this [`Rgb`] color.
    #[must_use]
    pub fn paint(self, text: &str) -> ColoredString {
        let Self(r, g, b) = self;
        text.truecolor(r, g, b)
    }
}

/// Presentation style of a catalog value.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Style {
    /// Icon shown next to the value.
    pub icon: &'static str,

    /// [`Rgb`] color the value is painted with.
    pub color: Rgb,
}

impl Style {
    /// [`Style`] of values missing from the lookup tables.
    pub const FALLBACK: Self = Self {
        icon: "•",
        color: Rgb::FALLBACK,
    };

    /// Paints the provided `text` with the color of this [`Style`].
    #[must_use]
    pub fn paint(&self, text: &str) -> ColoredString {
        self.color.paint(text)
    }
}

/// Brand names (lowercase) and their [`Rgb`] colors.
const BRANDS: &[(&str, Rgb)] = &[
    ("apple", Rgb(0x55, 0x55, 0x55)),
    ("samsung", Rgb(0x14, 0x28, 0xa0)),
    ("dell", Rgb(0x00, 0x76, 0xce)),
    ("hp", Rgb(0x00, 0x96, 0xd6)),
    ("lenovo", Rgb(0xe2, 0x23, 0x1a)),
    ("asus", Rgb(0x00, 0x53, 0x9b)),
    ("sony", Rgb(0x1f, 0x1f, 0x1f)),
    ("lg", Rgb(0xa5, 0x00, 0x34)),
    ("google", Rgb(0x42, 0x85, 0xf4)),
    ("canon", Rgb(0xcc, 0x00, 0x00)),
    ("logitech", Rgb(0x00, 0xb8, 0xfc)),
];

/// Feature tags (lowercase) and their [`Style`]s.
const FEATURES: &[(&str, Style)] = &[
    ("4k display", style("🖼", Rgb(0x7c, 0x3a, 0xed))),
    ("oled", style("✨", Rgb(0x7c, 0x3a, 0xed))),
    ("touch screen", style("👆", Rgb(0x0e, 0xa5, 0xe9))),
    ("gaming", style("🎮", Rgb(0xdc, 0x26, 0x26))),
    ("business", style("💼", Rgb(0x47, 0x55, 0x69))),
    ("5g", style("📶", Rgb(0x16, 0xa3, 0x4a))),
    ("wifi 6", style("📡", Rgb(0x16, 0xa3, 0x4a))),
    ("bluetooth", style("🔵", Rgb(0x25, 0x63, 0xeb))),
    ("usb-c", style("🔌", Rgb(0x47, 0x55, 0x69))),
    ("thunderbolt", style("⚡", Rgb(0xea, 0xb3, 0x08))),
    ("flagship", style("🏆", Rgb(0xea, 0xb3, 0x08))),
    ("premium", style("⭐", Rgb(0xea, 0xb3, 0x08))),
    ("budget friendly", style("💰", Rgb(0x16, 0xa3, 0x4a))),
];

/// Shortcut for creating a [`Style`] in constant tables.
const fn style(icon: &'static str, color: Rgb) -> Style {
    Style { icon, color }
}

/// Returns [`Style`] of the provided [`Category`].
#[must_use]
pub fn category(category: Category) -> Style {
    let (icon, color) = match category {
        Category::Laptops => ("💻", Rgb(0x25, 0x63, 0xeb)),
        Category::Phones => ("📱", Rgb(0x16, 0xa3, 0x4a)),
        Category::Tablets => ("📲", Rgb(0x0e, 0xa5, 0xe9)),
        Category::Tvs => ("📺", Rgb(0x7c, 0x3a, 0xed)),
        Category::Desktops => ("🖥", Rgb(0x47, 0x55, 0x69)),
        Category::Printers => ("🖨", Rgb(0x78, 0x71, 0x6c)),
        Category::Audio => ("🎧", Rgb(0xdb, 0x27, 0x77)),
        Category::Accessories => ("🔌", Rgb(0xea, 0x58, 0x0c)),
    };
    Style { icon, color }
}

/// Returns [`Rgb`] color of the provided [`Brand`], falling back to
/// [`Rgb::FALLBACK`] for unknown ones.
#[must_use]
pub fn brand(brand: &Brand) -> Rgb {
    lookup(BRANDS, brand.as_str()).unwrap_or(Rgb::FALLBACK)
}

/// Returns [`Style`] of the provided feature tag, falling back to
/// [`Style::FALLBACK`] for unknown ones.
#[must_use]
pub fn feature(tag: &str) -> Style {
    lookup(FEATURES, tag).unwrap_or(Style::FALLBACK)
}

/// Looks up the `key` in the provided `table`, ignoring case.
fn lookup<T: Copy>(table: &[(&str, T)], key: &str) -> Option<T> {
    table
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(key))
        .map(|(_, v)| *v)
}
