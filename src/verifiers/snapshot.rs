use log::debug;
use scraper::{ElementRef, Html, Selector};
use serde_json::json;

use crate::models::{SnapshotConstraints, Verdict};

// Fixed attribute-based selectors marking the facts of interest.
const PRICE_SELECTOR: &str = "[data-price]";
const CITY_SELECTOR: &str = "[data-city]";
const BEDROOMS_SELECTOR: &str = "[data-bedrooms]";

/// Verify a static HTML snapshot of a listing page against the given
/// constraints.
///
/// Synchronous and infallible from the caller's point of view: parse
/// trouble, missing structure, and constraint violations all come back
/// as failure verdicts. The three constraint predicates are evaluated
/// independently, so a multi-field failure reports every violated field
/// together.
pub fn verify(html: &str, constraints: &SnapshotConstraints) -> Verdict {
    let document = Html::parse_document(html);

    // html5ever recovers from malformed markup, so in practice bad
    // input degrades to the missing-element path below; this guard
    // covers selector compilation.
    let (price_sel, city_sel, bedrooms_sel) = match compile_selectors() {
        Ok(selectors) => selectors,
        Err(message) => {
            return Verdict::fail("Failed to parse HTML", json!({ "error": message }));
        }
    };

    let price_el = document.select(&price_sel).next();
    let city_el = document.select(&city_sel).next();
    let bedrooms_el = document.select(&bedrooms_sel).next();

    let (price_el, city_el, bedrooms_el) = match (price_el, city_el, bedrooms_el) {
        (Some(p), Some(c), Some(b)) => (p, c, b),
        _ => {
            debug!(
                "Snapshot missing elements: price={} city={} bedrooms={}",
                price_el.is_none(),
                city_el.is_none(),
                bedrooms_el.is_none()
            );
            // Partial data is not checked against constraints.
            return Verdict::fail(
                "Required element missing in DOM",
                json!({
                    "missing": {
                        "price": price_el.is_none(),
                        "city": city_el.is_none(),
                        "bedrooms": bedrooms_el.is_none(),
                    },
                }),
            );
        }
    };

    let price = attr_number(&price_el, "data-price");
    let city = element_text(&city_el);
    let bedrooms = attr_number(&bedrooms_el, "data-bedrooms");

    let mut violations: Vec<&str> = Vec::new();
    // A non-numeric price cannot exceed the bound, so it is not a
    // price violation; a non-numeric bedroom count can never equal the
    // expected one.
    if price.map_or(false, |p| p > constraints.max_price) {
        violations.push("price");
    }
    if city.to_lowercase() != constraints.city.to_lowercase() {
        violations.push("city");
    }
    // Exact numeric equality: a fractional count like 2.5 is a
    // violation against an expected 2, not a rounding match.
    if bedrooms != Some(constraints.bedrooms as f64) {
        violations.push("bedrooms");
    }

    if !violations.is_empty() {
        debug!("Snapshot constraint violations: {:?}", violations);
        return Verdict::fail(
            format!("Constraint violations: {}", violations.join(", ")),
            json!({
                "price": price,
                "city": city,
                "bedrooms": bedrooms,
                "violations": violations,
            }),
        );
    }

    Verdict::pass(
        format!(
            "All constraints satisfied: price {} <= {}, city '{}', bedrooms {}",
            display_number(price),
            constraints.max_price,
            city,
            display_number(bedrooms),
        ),
        json!({
            "price": price,
            "city": city,
            "bedrooms": bedrooms,
            "selectors": {
                "price": PRICE_SELECTOR,
                "city": CITY_SELECTOR,
                "bedrooms": BEDROOMS_SELECTOR,
            },
        }),
    )
}

fn compile_selectors() -> Result<(Selector, Selector, Selector), String> {
    let price = Selector::parse(PRICE_SELECTOR).map_err(|e| e.to_string())?;
    let city = Selector::parse(CITY_SELECTOR).map_err(|e| e.to_string())?;
    let bedrooms = Selector::parse(BEDROOMS_SELECTOR).map_err(|e| e.to_string())?;
    Ok((price, city, bedrooms))
}

/// Numeric value of an attribute, `None` when absent or non-numeric
fn attr_number(element: &ElementRef, attr: &str) -> Option<f64> {
    element
        .value()
        .attr(attr)
        .and_then(|raw| raw.trim().parse::<f64>().ok())
}

fn element_text(element: &ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

fn display_number(value: Option<f64>) -> String {
    value.map_or_else(|| "null".to_string(), |n| n.to_string())
}
