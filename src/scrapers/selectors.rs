//! CSS selectors for the listing page markup.

use once_cell::sync::Lazy;
use scraper::Selector;

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("Invalid listing selector")
}

pub static PRODUCT: Lazy<Selector> = Lazy::new(|| selector(".product"));

pub static TITLE: Lazy<Selector> = Lazy::new(|| selector(".product-name"));

pub static CAPACITY: Lazy<Selector> = Lazy::new(|| selector(".product-capacity"));

pub static PRICE: Lazy<Selector> = Lazy::new(|| selector(".my-8.block.text-center.text-lg"));

pub static IMAGE: Lazy<Selector> = Lazy::new(|| selector("img"));

pub static COLOUR_SWATCH: Lazy<Selector> = Lazy::new(|| selector("[data-colour]"));

pub const COLOUR_ATTR: &str = "data-colour";

/// First match is the availability line, second the shipping line.
pub static INFO_LINE: Lazy<Selector> = Lazy::new(|| selector(".my-4.text-sm.block.text-center"));

pub static PAGE_LINK: Lazy<Selector> = Lazy::new(|| selector("#pages a"));
