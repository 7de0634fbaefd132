//! Static marketing content for the homepage.

use serde::{Deserialize, Serialize};

/// Hero banner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroContent {
    pub title: String,
    pub shop_label: String,
    pub shop_url: String,
    pub repair_label: String,
    pub repair_url: String,
    pub image: String,
    pub image_alt: String,
}

impl Default for HeroContent {
    fn default() -> Self {
        Self {
            title: "REPAIR IS OUR SPECIALTY".to_string(),
            shop_label: "Shop".to_string(),
            shop_url: "/products/Accessories".to_string(),
            repair_label: "Repair".to_string(),
            repair_url: "/repair".to_string(),
            image: "/images/phone.png".to_string(),
            image_alt: "Phone Banner".to_string(),
        }
    }
}

/// One slide of the promotions banner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Promotion {
    pub title: String,
    pub subtitle: String,
    pub button_text: String,
    pub link: String,
}

impl Promotion {
    pub fn new(title: &str, subtitle: &str, button_text: &str, link: &str) -> Self {
        Self {
            title: title.to_string(),
            subtitle: subtitle.to_string(),
            button_text: button_text.to_string(),
            link: link.to_string(),
        }
    }
}

fn default_promotions() -> Vec<Promotion> {
    vec![
        Promotion::new("SUMMER SALE", "Up to 30% off select accessories", "Shop Now", "/sale"),
        Promotion::new("FREE SCREEN PROTECTOR", "With any phone purchase", "View Phones", "/phones"),
        Promotion::new("TRADE-IN OFFER", "Get up to $500 for your old device", "Learn More", "/trade-in"),
    ]
}

/// A brand or category tile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkCard {
    pub name: String,
    pub link: String,
    pub image: String,
}

impl LinkCard {
    pub fn new(name: &str, link: &str, image: &str) -> Self {
        Self {
            name: name.to_string(),
            link: link.to_string(),
            image: image.to_string(),
        }
    }
}

fn default_brands() -> Vec<LinkCard> {
    vec![
        LinkCard::new("Apple", "/phones/Apple", "/images/15promax.jpg"),
        LinkCard::new("Samsung", "/phones/Samsung", "/images/samsungultra.jpg"),
        LinkCard::new("Android", "/phones/Android", "/images/Pixel8.png"),
    ]
}

fn default_categories() -> Vec<LinkCard> {
    vec![
        LinkCard::new("Accessories", "/products/Accessories", "/images/Pixel8.png"),
        LinkCard::new("Tablets", "/phones/Tablet", "/images/Pixel8.png"),
    ]
}

/// A bundle offer. Prices are in dollars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bundle {
    pub id: u32,
    pub name: String,
    pub items: Vec<String>,
    pub original_price: f64,
    pub bundle_price: f64,
    pub image: String,
}

/// Bundle offers section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BundlesContent {
    pub section_title: String,
    pub view_all_link: String,
    pub bundles: Vec<Bundle>,
}

impl Default for BundlesContent {
    fn default() -> Self {
        let items = |list: &[&str]| -> Vec<String> { list.iter().map(|s| s.to_string()).collect() };
        Self {
            section_title: "Save with Bundles".to_string(),
            view_all_link: "/bundles".to_string(),
            bundles: vec![
                Bundle {
                    id: 1,
                    name: "iPhone Essentials Bundle".to_string(),
                    items: items(&["iPhone 15", "MagSafe Charger", "Silicone Case", "Screen Protector"]),
                    original_price: 1156.0,
                    bundle_price: 999.0,
                    image: "/images/15promax.jpg".to_string(),
                },
                Bundle {
                    id: 2,
                    name: "Samsung Ultimate Pack".to_string(),
                    items: items(&["Samsung S24", "Wireless Charger", "Galaxy Buds", "Clear Case"]),
                    original_price: 1356.0,
                    bundle_price: 1199.0,
                    image: "/images/samsungultra.jpg".to_string(),
                },
            ],
        }
    }
}

/// A customer review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub name: String,
    /// Whole stars, 0-5.
    pub rating: u8,
    pub comment: String,
    pub date: String,
}

impl Testimonial {
    pub fn new(name: &str, rating: u8, comment: &str, date: &str) -> Self {
        Self {
            name: name.to_string(),
            rating,
            comment: comment.to_string(),
            date: date.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestimonialsContent {
    pub section_title: String,
    pub testimonials: Vec<Testimonial>,
}

impl Default for TestimonialsContent {
    fn default() -> Self {
        Self {
            section_title: "What Our Customers Say".to_string(),
            testimonials: vec![
                Testimonial::new(
                    "John D.",
                    5,
                    "Excellent service and quality products. My phone was repaired in under an hour!",
                    "2 weeks ago",
                ),
                Testimonial::new(
                    "Sarah M.",
                    5,
                    "The accessories I bought were exactly as described and arrived quickly. Will shop again!",
                    "1 month ago",
                ),
                Testimonial::new(
                    "Michael T.",
                    4,
                    "Great selection of phones and very knowledgeable staff. Highly recommend.",
                    "3 weeks ago",
                ),
            ],
        }
    }
}

/// Newsletter signup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsletterContent {
    pub title: String,
    pub text: String,
    pub placeholder: String,
    pub button_text: String,
    pub action: String,
}

impl Default for NewsletterContent {
    fn default() -> Self {
        Self {
            title: "Get 10% Off Your First Order".to_string(),
            text: "Subscribe to our newsletter for exclusive deals and updates".to_string(),
            placeholder: "Your email address".to_string(),
            button_text: "Subscribe".to_string(),
            action: "/api/newsletter".to_string(),
        }
    }
}

/// Title and "View All" target of a product carousel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarouselHeading {
    pub title: String,
    pub view_all_link: String,
}

impl CarouselHeading {
    pub fn new(title: &str, view_all_link: &str) -> Self {
        Self {
            title: title.to_string(),
            view_all_link: view_all_link.to_string(),
        }
    }
}

/// Everything on the homepage that does not come from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomepageContent {
    pub page_title: String,
    pub description: String,
    pub hero: HeroContent,
    pub promotions: Vec<Promotion>,
    pub flash_deals: CarouselHeading,
    pub new_arrivals: CarouselHeading,
    pub best_sellers: CarouselHeading,
    pub brands: Vec<LinkCard>,
    pub categories: Vec<LinkCard>,
    pub bundles: BundlesContent,
    pub testimonials: TestimonialsContent,
    pub newsletter: NewsletterContent,
}

impl Default for HomepageContent {
    fn default() -> Self {
        Self {
            page_title: "Mobile Repair & Accessories - Your Trusted Tech Partner".to_string(),
            description: "Professional phone repair services and premium mobile accessories. \
                We specialize in iPhone, Samsung, and other device repairs."
                .to_string(),
            hero: HeroContent::default(),
            promotions: default_promotions(),
            flash_deals: CarouselHeading::new("Flash Deals", "/sale"),
            new_arrivals: CarouselHeading::new("Just Arrived", "/new-arrivals"),
            best_sellers: CarouselHeading::new("Customer Favorites", "/best-sellers"),
            brands: default_brands(),
            categories: default_categories(),
            bundles: BundlesContent::default(),
            testimonials: TestimonialsContent::default(),
            newsletter: NewsletterContent::default(),
        }
    }
}
