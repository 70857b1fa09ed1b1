//! The fixed showcase catalog behind the product-detail page.
//!
//! Six paints are shown on the marketing site independently of the backend
//! product list. Prices are display strings in Naira; the "order" button on a
//! detail page opens a WhatsApp inquiry rather than a checkout.

use serde::Serialize;
use urlencoding::encode;

/// WhatsApp number inquiries are addressed to.
pub const INQUIRY_NUMBER: &str = "2348099577832";

/// One showcase paint.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ShowcaseProduct {
    /// URL key, as passed in `detail.html?id=<slug>`.
    pub slug: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub price: &'static str,
    pub description: &'static str,
    /// Site-relative image path.
    pub image: &'static str,
    pub features: &'static [&'static str],
}

impl ShowcaseProduct {
    /// The prefilled inquiry message for this product.
    pub fn inquiry_message(&self) -> String {
        format!(
            "Hello, I am interested in your painting services and would like to know more about {}.",
            self.name
        )
    }

    /// `https://wa.me/<number>?text=<message>`
    pub fn inquiry_link(&self) -> String {
        format!(
            "https://wa.me/{}?text={}",
            INQUIRY_NUMBER,
            encode(&self.inquiry_message())
        )
    }
}

pub static PRODUCTS: &[ShowcaseProduct] = &[
    ShowcaseProduct {
        slug: "super-emulsion",
        name: "Super Emulsion",
        category: "Emulsion",
        price: "₦25,000",
        description: "Our Super Emulsion is a premium water-based paint that offers a smooth matte finish. It is durable, easy to apply, and perfect for interior walls and ceilings. Available in a wide range of colors.",
        image: "assets/images/service_roller.png",
        features: &["Smooth Matte Finish", "High Coverage", "Quick Drying", "Low Odor"],
    },
    ShowcaseProduct {
        slug: "royal-satin",
        name: "Royal Satin",
        category: "Satin",
        price: "₦45,000",
        description: "Royal Satin provides a luxurious, silky finish that is tough and washable. Ideal for high-traffic areas like hallways, kitchens, and bathrooms where durability is key.",
        image: "assets/images/service_brush.png",
        features: &["Silky Sheen", "Washable & Scrubbable", "Stain Resistant", "Long Lasting"],
    },
    ShowcaseProduct {
        slug: "textured-cote",
        name: "Textured Cote",
        category: "Texcote",
        price: "₦38,000",
        description: "Designed for exterior protection, Textured Cote offers a rough, decorative finish that hides imperfections and withstands harsh weather conditions.",
        image: "assets/images/service_spray.png",
        features: &["Weather Resistant", "Hides Imperfections", "Fungi & Algae Resistant", "Durable"],
    },
    ShowcaseProduct {
        slug: "high-gloss",
        name: "High Gloss",
        category: "Gloss",
        price: "₦30,000",
        description: "High Gloss enamel paint gives a brilliant shiny finish. Perfect for wood, metal, and trims. It provides a hard, protective shell.",
        image: "assets/images/about_us.png",
        features: &["High Shine", "Protective Layer", "For Wood & Metal", "Easy to Clean"],
    },
    ShowcaseProduct {
        slug: "standard-emulsion",
        name: "Standard Emulsion",
        category: "Emulsion",
        price: "₦15,000",
        description: "An economical choice for quality painting on a budget. Provides good coverage and a neat matte finish for standard applications.",
        image: "assets/images/hero_bg.png",
        features: &["Economical", "Good Coverage", "Matte Finish", "Interior Use"],
    },
    ShowcaseProduct {
        slug: "silk-sheen",
        name: "Silk Sheen",
        category: "Satin",
        price: "₦42,000",
        description: "Silk Sheen offers a beautiful mid-sheen finish that reflects light subtly, making rooms feel larger and brighter.",
        image: "assets/images/project_1.png",
        features: &["Subtle Sheen", "Light Reflecting", "Elegant Look", "Wipeable"],
    },
];

/// Look a showcase product up by slug.
pub fn find(slug: &str) -> Option<&'static ShowcaseProduct> {
    PRODUCTS.iter().find(|p| p.slug == slug)
}

/// Showcase products in one category, in catalog order.
pub fn by_category(category: &str) -> Vec<&'static ShowcaseProduct> {
    PRODUCTS
        .iter()
        .filter(|p| p.category.eq_ignore_ascii_case(category))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_known_slug() {
        let p = find("royal-satin").unwrap();
        assert_eq!(p.name, "Royal Satin");
        assert_eq!(p.features.len(), 4);
    }

    #[test]
    fn unknown_slug_is_none() {
        assert!(find("glitter-bomb").is_none());
        assert!(find("").is_none());
    }

    #[test]
    fn inquiry_link_is_encoded() {
        let link = find("high-gloss").unwrap().inquiry_link();
        assert!(link.starts_with("https://wa.me/2348099577832?text=Hello%2C%20I%20am"));
        assert!(link.ends_with("about%20High%20Gloss."));
        assert!(!link.contains(' '));
    }

    #[test]
    fn category_filter_ignores_case() {
        let satins: Vec<&str> = by_category("satin").iter().map(|p| p.slug).collect();
        assert_eq!(satins, ["royal-satin", "silk-sheen"]);
    }
}
