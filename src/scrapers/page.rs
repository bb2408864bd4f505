use chrono::NaiveDate;
use scraper::{ElementRef, Html, Selector};
use url::Url;

use super::selectors;
use crate::models::{DataWarning, ProductRecord, RawProduct};
use crate::parsers::clean_text;

/// Records found on one listing page, duplicates included, plus the
/// data-quality warnings raised while building them.
#[derive(Debug, Clone, Default)]
pub struct PageExtraction {
    pub records: Vec<ProductRecord>,
    pub warnings: Vec<DataWarning>,
}

/// Turns listing page HTML into one [`ProductRecord`] per colour variant.
#[derive(Debug, Clone)]
pub struct PageExtractor {
    base_url: Option<Url>,
    today: NaiveDate,
}

impl PageExtractor {
    /// `base_url` resolves relative image paths; `today` anchors relative shipping dates.
    pub fn new(base_url: Option<Url>, today: NaiveDate) -> Self {
        Self { base_url, today }
    }

    pub fn extract(&self, html: &str) -> PageExtraction {
        let document = Html::parse_document(html);
        let mut extraction = PageExtraction::default();

        for container in document.select(&selectors::PRODUCT) {
            let template = self.read_container(container);

            for colour in colours(container) {
                let raw = RawProduct {
                    colour,
                    ..template.clone()
                };
                let (record, warnings) = ProductRecord::from_raw(&raw, self.today);
                extraction.records.push(record);
                extraction.warnings.extend(warnings);
            }
        }

        extraction
    }

    /// Everything but the colour, which is filled in per swatch.
    fn read_container(&self, container: ElementRef<'_>) -> RawProduct {
        let mut info_lines = container
            .select(&selectors::INFO_LINE)
            .map(|line| clean_text(&line.text().collect::<String>()));

        RawProduct {
            title: first_text(container, &selectors::TITLE),
            price: first_text(container, &selectors::PRICE),
            image_url: self.image_url(container),
            capacity: first_text(container, &selectors::CAPACITY),
            colour: String::new(),
            availability: info_lines.next().unwrap_or_default(),
            shipping: info_lines.next().unwrap_or_default(),
        }
    }

    fn image_url(&self, container: ElementRef<'_>) -> String {
        let Some(src) = container
            .select(&selectors::IMAGE)
            .next()
            .and_then(|img| img.value().attr("src"))
            .map(str::trim)
            .filter(|src| !src.is_empty())
        else {
            return String::new();
        };

        match &self.base_url {
            Some(base) => base
                .join(src)
                .map(|url| url.to_string())
                .unwrap_or_else(|_| src.to_string()),
            None => src.to_string(),
        }
    }
}

fn first_text(container: ElementRef<'_>, selector: &Selector) -> String {
    container
        .select(selector)
        .next()
        .map(|element| clean_text(&element.text().collect::<String>()))
        .unwrap_or_default()
}

/// Colour identifiers of every swatch, in document order, repeats kept.
fn colours(container: ElementRef<'_>) -> Vec<String> {
    container
        .select(&selectors::COLOUR_SWATCH)
        .filter_map(|swatch| swatch.value().attr(selectors::COLOUR_ATTR))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> PageExtractor {
        PageExtractor::new(
            Some(Url::parse("https://shop.example.com/developer-challenge/smartphones/").unwrap()),
            NaiveDate::from_ymd_opt(2024, 3, 20).unwrap(),
        )
    }

    fn product(title: &str, capacity: &str, colours: &[&str], shipping: Option<&str>) -> String {
        let swatches: String = colours
            .iter()
            .map(|c| format!(r#"<span data-colour="{c}" class="border rounded-full"></span>"#))
            .collect();
        let shipping = shipping
            .map(|s| format!(r#"<div class="my-4 text-sm block text-center">{s}</div>"#))
            .unwrap_or_default();

        format!(
            r#"<div class="product px-4 py-4">
                <div class="bg-white p-4 rounded-md">
                    <img src="../images/{title}.png" alt="{title}">
                    <h3 class="my-4"><span class="product-name">{title}</span> <span class="product-capacity">{capacity}</span></h3>
                    <div class="my-4"><div class="flex flex-wrap -mx-2">{swatches}</div></div>
                    <div class="my-8 block text-center text-lg">£399.99</div>
                    <div class="my-4 text-sm block text-center">Availability: In Stock</div>
                    {shipping}
                </div>
            </div>"#
        )
    }

    fn page(products: &[String]) -> String {
        format!(
            "<html><body><div id=\"products\">{}</div></body></html>",
            products.concat()
        )
    }

    #[test]
    fn fans_out_one_record_per_colour() {
        let shipping = Some("Delivery by 25 March 2024");
        let html = page(&[product("iPhone 11", "64GB", &["Red", "Blue"], shipping)]);
        let extraction = extractor().extract(&html);

        let colours: Vec<&str> = extraction.records.iter().map(ProductRecord::colour).collect();
        assert_eq!(colours, vec!["red", "blue"]);

        let first = &extraction.records[0];
        assert_eq!(first.title(), "iPhone 11");
        assert_eq!(first.capacity_mb(), 64_000);
        assert_eq!(first.price(), 399.99);
        assert_eq!(first.availability_text(), "In Stock");
        assert!(first.is_available());
        assert_eq!(first.shipping_text(), "Delivery by 25 March 2024");
        assert_eq!(first.shipping_date(), NaiveDate::from_ymd_opt(2024, 3, 25));
        assert!(extraction.warnings.is_empty());
    }

    #[test]
    fn entities_are_decoded_exactly_once() {
        let html = page(&[product("Black &amp;amp; White", "64GB", &["black"], None)]);
        assert_eq!(extractor().extract(&html).records[0].title(), "Black &amp; White");
    }

    #[test]
    fn resolves_relative_image_urls() {
        let html = page(&[product("Pixel", "128GB", &["black"], None)]);
        let extraction = extractor().extract(&html);
        assert_eq!(
            extraction.records[0].image_url(),
            "https://shop.example.com/developer-challenge/images/Pixel.png"
        );
    }

    #[test]
    fn keeps_raw_image_path_without_base_url() {
        let extractor = PageExtractor::new(None, NaiveDate::from_ymd_opt(2024, 3, 20).unwrap());
        let extraction = extractor.extract(&page(&[product("Pixel", "128GB", &["black"], None)]));
        assert_eq!(extraction.records[0].image_url(), "../images/Pixel.png");
    }

    #[test]
    fn container_without_swatches_yields_nothing() {
        let html = page(&[
            product("Ghost Phone", "64GB", &[], Some("Tomorrow")),
            product("Nokia", "256MB", &["green"], None),
        ]);
        let extraction = extractor().extract(&html);

        assert_eq!(extraction.records.len(), 1);
        assert_eq!(extraction.records[0].title(), "Nokia");
        assert_eq!(extraction.records[0].capacity_mb(), 256);
    }

    #[test]
    fn missing_shipping_line_is_empty_not_an_error() {
        let html = page(&[product("Nokia", "256MB", &["green"], None)]);
        let record = &extractor().extract(&html).records[0];

        assert_eq!(record.shipping_text(), "");
        assert_eq!(record.shipping_date(), None);
    }

    #[test]
    fn missing_image_is_empty_string() {
        let html = page(&[product("Nokia", "256MB", &["green"], None)
            .replace(r#"<img src="../images/Nokia.png" alt="Nokia">"#, "")]);
        assert_eq!(extractor().extract(&html).records[0].image_url(), "");
    }

    #[test]
    fn repeated_colours_are_not_deduplicated_here() {
        let html = page(&[
            product("iPhone 11", "64GB", &["red", "red"], None),
            product("iPhone 11", "64GB", &["RED"], None),
        ]);
        assert_eq!(extractor().extract(&html).records.len(), 3);
    }

    #[test]
    fn preserves_document_order_across_containers() {
        let html = page(&[
            product("Zeta", "64GB", &["white", "black"], None),
            product("Alpha", "64GB", &["gold"], None),
        ]);
        let titles_and_colours: Vec<(String, String)> = extractor()
            .extract(&html)
            .records
            .iter()
            .map(|r| (r.title().to_string(), r.colour().to_string()))
            .collect();

        assert_eq!(
            titles_and_colours,
            vec![
                ("Zeta".to_string(), "white".to_string()),
                ("Zeta".to_string(), "black".to_string()),
                ("Alpha".to_string(), "gold".to_string()),
            ]
        );
    }

    #[test]
    fn reports_warnings_per_variant() {
        let html = page(&[product("", "big", &["red", "blue"], Some("whenever"))]);
        let extraction = extractor().extract(&html);

        assert_eq!(extraction.records.len(), 2);
        // empty title, unrecognized capacity and unparseable date, once per colour
        assert_eq!(extraction.warnings.len(), 6);
    }

    #[test]
    fn page_without_products_is_empty() {
        let extraction = extractor().extract("<html><body><p>Nothing here</p></body></html>");
        assert!(extraction.records.is_empty());
        assert!(extraction.warnings.is_empty());
    }
}
