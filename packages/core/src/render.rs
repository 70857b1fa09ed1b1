//! Human-readable text rendering of showcase products and the endpoint
//! catalog.
//!
//! Output is stable plain text for terminals and logs. It is not a wire
//! format.

use crate::catalog::Endpoint;
use crate::showcase::ShowcaseProduct;

/// Render one showcase product as a detail card.
///
/// ```text
/// ROYAL SATIN
/// ───────────
/// Satin · ₦45,000
///
/// "Royal Satin provides a luxurious, silky finish that is tough and washable.
///  Ideal for high-traffic areas ..."
///
/// Features:
///   ✓ Silky Sheen
///   ✓ Washable & Scrubbable
///
/// Inquire: https://wa.me/2348099577832?text=...
/// ```
pub fn render_product(product: &ShowcaseProduct) -> String {
    let title = product.name.to_uppercase();
    let rule = "─".repeat(title.chars().count());

    let mut out = format!("{}\n{}\n", title, rule);
    out.push_str(&format!("{} · {}\n", product.category, product.price));
    out.push('\n');
    out.push_str(&wrap_content(product.description, 80));
    out.push('\n');

    if !product.features.is_empty() {
        out.push('\n');
        out.push_str("Features:\n");
        for f in product.features {
            out.push_str(&format!("  ✓ {}\n", f));
        }
    }

    out.push('\n');
    out.push_str(&format!("Inquire: {}\n", product.inquiry_link()));
    out
}

/// One line per showcase product: slug, name, category and price.
pub fn render_showcase(products: &[ShowcaseProduct]) -> String {
    let header = format!(
        "Showcase  {} product{}",
        products.len(),
        if products.len() == 1 { "" } else { "s" }
    );
    let rule = "─".repeat(header.chars().count());
    let mut out = format!("{}\n{}\n", header, rule);
    for p in products {
        out.push_str(&format!(
            "  {:<18} {:<18} {:<8} {}\n",
            p.slug, p.name, p.category, p.price
        ));
    }
    out
}

/// The endpoint table, one row per entry.
///
/// ```text
/// cart.update                      PUT     /cart/items/{id}            json
/// ```
pub fn render_catalog(entries: &[Endpoint]) -> String {
    let mut out = String::new();
    for e in entries {
        out.push_str(&format!(
            "{:<34} {:<7} {:<36} {}\n",
            e.key(),
            e.method,
            e.path,
            e.body
        ));
    }
    out
}

// --- helpers -----------------------------------------------------------------

fn wrap_content(content: &str, width: usize) -> String {
    if content.chars().count() <= width {
        return format!("\"{}\"", content);
    }
    let mut result = String::from("\"");
    let mut line_len = 1usize;
    for word in content.split_whitespace() {
        let word_len = word.chars().count();
        if line_len + word_len + 1 > width {
            result.push('\n');
            result.push(' ');
            line_len = 1;
        } else if line_len > 1 {
            result.push(' ');
            line_len += 1;
        }
        result.push_str(word);
        line_len += word_len;
    }
    result.push('"');
    result
}

// --- tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CART_UPDATE, CATALOG};
    use crate::showcase::{find, PRODUCTS};

    #[test]
    fn product_card_contains_key_fields() {
        let rendered = render_product(find("textured-cote").unwrap());
        assert!(rendered.starts_with("TEXTURED COTE\n"));
        assert!(rendered.contains("Texcote · ₦38,000"));
        assert!(rendered.contains("  ✓ Weather Resistant"));
        assert!(rendered.contains("Inquire: https://wa.me/"));
    }

    #[test]
    fn long_description_wraps() {
        let rendered = render_product(find("super-emulsion").unwrap());
        let quoted: Vec<&str> = rendered
            .lines()
            .skip_while(|l| !l.starts_with('"'))
            .take_while(|l| !l.is_empty())
            .collect();
        assert!(quoted.len() > 1);
        assert!(quoted.iter().all(|l| l.chars().count() <= 80));
    }

    #[test]
    fn showcase_lists_every_product() {
        let rendered = render_showcase(PRODUCTS);
        assert!(rendered.contains("6 products"));
        for p in PRODUCTS {
            assert!(rendered.contains(p.slug));
        }
    }

    #[test]
    fn catalog_row_shape() {
        let rendered = render_catalog(&[CART_UPDATE]);
        assert!(rendered.starts_with("cart.update"));
        assert!(rendered.contains("PUT"));
        assert!(rendered.trim_end().ends_with("json"));
        assert_eq!(render_catalog(CATALOG).lines().count(), CATALOG.len());
    }
}
