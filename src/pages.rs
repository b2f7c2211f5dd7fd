//! Static product catalogs
//!
//! The three category pages (baby / skin / personal care) are fixed product
//! lists with hardcoded text blocks. Loaded into the binary, served as HTML
//! or JSON.

use serde::Serialize;

/// Product page category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    BabyCare,
    SkinCare,
    PersonalCare,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::BabyCare,
        Category::SkinCare,
        Category::PersonalCare,
    ];

    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "baby-care" => Some(Self::BabyCare),
            "skin-care" => Some(Self::SkinCare),
            "personal-care" => Some(Self::PersonalCare),
            _ => None,
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Self::BabyCare => "baby-care",
            Self::SkinCare => "skin-care",
            Self::PersonalCare => "personal-care",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::BabyCare => "Gentle Baby Care",
            Self::SkinCare => "Radiant Skin Care",
            Self::PersonalCare => "Everyday Personal Care",
        }
    }

    pub fn tagline(&self) -> &'static str {
        match self {
            Self::BabyCare => "Safe and soothing products for your little one's delicate skin.",
            Self::SkinCare => "Serums, creams, and cleansers for a healthy skin barrier.",
            Self::PersonalCare => "Daily hygiene essentials for the whole family.",
        }
    }

    pub fn products(&self) -> &'static [Product] {
        match self {
            Self::BabyCare => BABY_CARE,
            Self::SkinCare => SKIN_CARE,
            Self::PersonalCare => PERSONAL_CARE,
        }
    }
}

/// A product card on a category page
#[derive(Debug, Clone, Serialize)]
pub struct Product {
    pub name: &'static str,
    pub why_use: &'static str,
    pub dosage: &'static str,
    pub limitations: &'static str,
}

const BABY_CARE: &[Product] = &[
    Product {
        name: "Baby Shampoo",
        why_use: "Tear-free formula designed to clean delicate hair without irritating the eyes or scalp.",
        dosage: "Apply a small amount to wet hair, gently massage, and rinse thoroughly with warm water.",
        limitations: "For external use only. If redness occurs, discontinue use immediately.",
    },
    Product {
        name: "Diaper Cream",
        why_use: "Creates a moisture-repellent barrier to protect sensitive skin from wetness and acidity.",
        dosage: "Apply a thick layer to the diaper area during every change, especially at bedtime.",
        limitations: "Do not apply to deep or punctured wounds. Keep out of reach of children.",
    },
    Product {
        name: "Baby Wipes",
        why_use: "Alcohol-free and fragrance-free cleaning for the most sensitive newborn skin.",
        dosage: "Use as needed during diaper changes or for cleaning hands and face.",
        limitations: "Do not flush in the toilet. Ensure the pack is sealed tightly to prevent drying out.",
    },
    Product {
        name: "Baby Lotion",
        why_use: "Provides 24-hour hydration to prevent dryness and maintain the skin's natural softness.",
        dosage: "Smooth over the baby's entire body after a bath or whenever skin feels dry.",
        limitations: "Avoid contact with the baby's eyes. Store in a cool, dry place.",
    },
    Product {
        name: "Baby Oil",
        why_use: "Perfect for baby massage; helps lock in moisture and soothe dry patches or cradle cap.",
        dosage: "Warm a few drops in your hands and gently massage into the baby's skin.",
        limitations: "Can make surfaces slippery. Avoid applying to the face to prevent accidental ingestion.",
    },
    Product {
        name: "Baby Powder",
        why_use: "Absorbs excess moisture to keep skin folds dry and prevent friction-based rashes.",
        dosage: "Shake onto your hand (away from the face) and apply to the skin.",
        limitations: "Avoid inhalation; keep away from the baby's nose and mouth. Use sparingly.",
    },
];

const SKIN_CARE: &[Product] = &[
    Product {
        name: "Vitamin C Serum",
        why_use: "Neutralizes free radicals, brightens dark spots, and boosts collagen production.",
        dosage: "Apply 3-5 drops in the morning after cleansing but before moisturizing.",
        limitations: "Can cause tingling; not ideal for extremely sensitive skin. Degrades if exposed to sunlight.",
    },
    Product {
        name: "Hyaluronic Acid",
        why_use: "Acts as a humectant to pull moisture into the skin, reducing fine lines.",
        dosage: "Apply to damp skin twice daily (morning and night).",
        limitations: "In dry climates, it can pull moisture out of skin if not sealed with moisturizer.",
    },
    Product {
        name: "Night Repair Cream",
        why_use: "Supports the skin's natural circadian rhythm of repair and DNA recovery.",
        dosage: "Apply a pea-sized amount as the final step of your nighttime routine.",
        limitations: "Contains heavier oils; may cause breakouts for very oily or acne-prone skin.",
    },
    Product {
        name: "Gentle Cleanser",
        why_use: "Removes dirt and pollutants without stripping the acid mantle (skin barrier).",
        dosage: "Use 1 pump on wet face; massage for 60 seconds and rinse.",
        limitations: "May not effectively remove heavy waterproof makeup or water-resistant sunscreens.",
    },
    Product {
        name: "Exfoliating Scrub",
        why_use: "Physically removes dead skin cells to prevent clogged pores and dullness.",
        dosage: "Use only 1-2 times per week on clean, wet skin.",
        limitations: "Avoid using on active acne or broken skin. Over-exfoliation can lead to redness.",
    },
    Product {
        name: "Toning Mist",
        why_use: "Instantly restores skin pH and prepares skin to better absorb serums.",
        dosage: "Spray 2-3 pumps over face after cleansing or throughout the day.",
        limitations: "Does not replace a moisturizer. Avoid mists with high alcohol content.",
    },
];

const PERSONAL_CARE: &[Product] = &[
    Product {
        name: "Antiseptic Liquid",
        why_use: "Effective protection against germs and bacteria in wounds or surfaces.",
        dosage: "Dilute 1 capful in 250ml of water for wound cleaning.",
        limitations: "External use only; do not swallow. Avoid contact with eyes.",
    },
    Product {
        name: "Hand Sanitizer",
        why_use: "Kills 99.9% of germs instantly without water.",
        dosage: "Apply a coin-sized drop to palms and rub until dry.",
        limitations: "Flammable; keep away from fire. Can cause dryness with over-use.",
    },
    Product {
        name: "Moisturizing Lotion",
        why_use: "Restores skin barrier and provides 24-hour hydration.",
        dosage: "Apply liberally to the body after showering.",
        limitations: "For external use only. Discontinue if rash or irritation occurs.",
    },
    Product {
        name: "Electric Toothbrush",
        why_use: "Sonic technology removes 10x more plaque than manual brushing.",
        dosage: "Brush twice daily for 2 minutes each session.",
        limitations: "Brush heads must be replaced every 3 months. Avoid excessive pressure.",
    },
    Product {
        name: "Organic Face Wash",
        why_use: "Deep cleans pores using tea tree oil without harsh chemicals.",
        dosage: "Use 1-2 pumps on wet face every morning and evening.",
        limitations: "May cause initial dryness as skin adjusts to natural oils.",
    },
    Product {
        name: "Sunscreen SPF 50",
        why_use: "Broad spectrum protection against UVA/UVB rays to prevent aging.",
        dosage: "Apply a nickel-sized amount to face 15 minutes before sun exposure.",
        limitations: "Must be reapplied every 2 hours if outdoors or after swimming.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_slug(category.slug()), Some(category));
        }
        assert_eq!(Category::from_slug("toys"), None);
    }

    #[test]
    fn every_category_has_six_products() {
        for category in Category::ALL {
            assert_eq!(category.products().len(), 6);
        }
    }
}
