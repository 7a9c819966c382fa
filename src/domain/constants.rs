use crate::cli::KitType;
use crate::domain::models::{Card, KitConfig};

pub const STORE_NAME: &str = "The Card Connoisseur";

/// Name of the durable slot holding the catalogue snapshot.
pub const CATALOGUE_SLOT: &str = "bespoke_cards";

pub const DEFAULT_MAIL_RECIPIENT: &str = "curations@cardconnoisseur.com";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 5000;

/// Title used in the manifest for ledger ids the catalogue no longer knows.
pub const UNKNOWN_CARD_TITLE: &str = "Unknown Card";
/// Same fallback, as rendered in the summary record.
pub const UNKNOWN_DESIGN_TITLE: &str = "Unknown Design";

const SEED: [(&str, &str, &str); 10] = [
    ("1", "Birthday Sparkle", "Celebration"),
    ("2", "Minimalist Thank You", "Gratitude"),
    ("3", "Abstract Celebration", "General"),
    ("4", "Midnight Botanical", "Flora"),
    ("5", "Golden Hour Notes", "Personal"),
    ("6", "Classic Sympathy", "Support"),
    ("7", "Whimsical Welcome", "Newborn"),
    ("8", "Modern Monogram", "Professional"),
    ("9", "Serene Landscape", "Scenic"),
    ("10", "Velvet Anniversary", "Love"),
];

pub fn seed_cards() -> Vec<Card> {
    SEED.iter()
        .map(|(id, title, category)| Card {
            id: id.to_string(),
            title: title.to_string(),
            category: category.to_string(),
            image_url: format!("https://picsum.photos/seed/card{}/600/800", id),
        })
        .collect()
}

pub fn kit_config(kit: KitType) -> KitConfig {
    match kit {
        KitType::Standard => KitConfig {
            kit,
            label: "Standard Pack",
            size: 60,
            price: "$120",
            description:
                "Perfect for the casual correspondent. A curated set for all major life moments.",
        },
        KitType::Jumbo => KitConfig {
            kit,
            label: "Jumbo Pack",
            size: 125,
            price: "$225",
            description:
                "For the ultimate connoisseur. Never be without the perfect card again.",
        },
    }
}

pub fn all_kits() -> Vec<KitConfig> {
    [KitType::Standard, KitType::Jumbo]
        .into_iter()
        .map(kit_config)
        .collect()
}
