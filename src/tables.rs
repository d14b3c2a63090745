//! Static vocabularies used to classify words of a product title.
//!
//! Word lists are kept as plain arrays and indexed into hash sets/maps on
//! first use. All entries are lower-case single words.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// Marketing adjectives dropped from the main query.
const STOP_WORD_LIST: &[&str] = &[
    "new", "best", "hot", "premium", "professional", "advanced", "super", "ultra", "mega", "pro",
    "deluxe", "luxury", "high", "quality", "top", "leading", "famous", "popular", "trending",
    "amazing", "incredible", "fantastic", "excellent", "perfect", "great", "good", "nice",
    "beautiful", "stylish", "modern", "classic", "traditional", "vintage", "antique", "unique",
    "special", "exclusive", "limited", "edition", "version",
];

/// Words naming a general product class, audience or setting.
const CATEGORY_LIST: &[&str] = &[
    // devices
    "camera", "phone", "laptop", "headphones", "speaker", "tablet", "watch",
    // apparel
    "shoes", "bag", "dress", "shirt", "pants", "jacket", "coat", "sweater", "jeans", "skirt",
    "blouse", "t-shirt", "hoodie", "sneakers", "boots", "sandals", "heels", "flats", "loafers",
    "slippers", "backpack", "purse", "wallet", "belt", "scarf", "hat", "gloves", "socks",
    "underwear", "bra", "pajamas", "robe", "bathrobe",
    // home
    "towel", "bedding", "pillow", "blanket", "curtain", "rug", "lamp", "chair", "table", "desk",
    "bed", "sofa", "couch",
    // computing
    "tv", "monitor", "keyboard", "mouse", "printer", "scanner", "router", "modem", "cable",
    "charger", "battery", "power", "adapter", "usb", "hdmi", "bluetooth", "wifi", "wireless",
    "smart", "digital", "electronic",
    // rooms and activities
    "gaming", "sports", "fitness", "kitchen", "bathroom", "bedroom", "living", "dining", "office",
    "garden", "outdoor", "indoor",
    // audience
    "baby", "kids", "children", "men", "women", "unisex", "pet", "dog", "cat", "bird", "fish",
    // vehicles
    "car", "bike", "motorcycle", "truck", "van", "suv", "sedan", "hatchback", "convertible",
    "electric", "hybrid", "gas", "diesel", "manual", "automatic",
];

/// Words naming a descriptive attribute: capability, material or finish.
const FEATURE_LIST: &[&str] = &[
    // imaging and connectivity
    "panoramic", "360", "night", "vision", "security", "surveillance", "motion", "detection",
    "recording", "playback", "streaming", "live", "remote", "access", "mobile", "app", "cloud",
    "storage", "sd", "card", "memory", "battery", "powered", "solar", "wired", "wireless",
    "bluetooth", "wifi", "cellular", "4g", "5g", "lte", "gps", "touch", "screen", "display",
    "oled", "lcd", "led", "retina", "hd", "4k", "8k", "ultra", "high", "definition",
    "resolution", "pixel", "megapixel", "zoom", "optical", "digital", "autofocus", "manual",
    "focus", "aperture", "shutter", "speed", "iso", "exposure", "white", "balance", "flash",
    "stabilization",
    // durability and ergonomics
    "waterproof", "water", "resistant", "dust", "proof", "shock", "impact", "rugged", "durable",
    "lightweight", "compact", "portable", "foldable", "collapsible", "adjustable", "ergonomic",
    "comfortable", "breathable", "moisture", "wicking", "quick", "dry", "stain", "wrinkle",
    "free", "iron", "machine", "washable", "hand", "wash", "clean", "only", "steam", "low",
    "heat", "bleach", "fragrance", "hypoallergenic",
    // materials
    "organic", "natural", "synthetic", "cotton", "polyester", "nylon", "spandex", "elastane",
    "wool", "silk", "leather", "suede", "canvas", "denim", "linen", "cashmere", "angora",
    "mohair", "alpaca", "merino", "pima", "egyptian", "bamboo", "hemp", "jute", "sisal", "cork",
    "wood", "metal", "plastic", "glass", "ceramic", "stone", "marble", "granite", "quartz",
    "crystal", "diamond", "gold", "silver", "platinum", "titanium", "stainless", "steel",
    "aluminum", "copper", "brass", "bronze", "chrome", "nickel", "zinc",
    // processes and finishes
    "cast", "wrought", "forged", "milled", "machined", "welded", "soldered", "brazed", "riveted",
    "screwed", "bolted", "glued", "adhered", "bonded", "sewn", "stitched", "embroidered",
    "printed", "painted", "coated", "plated", "anodized", "powder", "galvanized", "rhodium",
    "palladium", "nitride", "like", "carbon", "polymer", "epoxy", "urethane", "acrylic", "vinyl",
    "rubber", "silicone", "teflon", "non", "stick", "anti", "reflective", "glare", "scratch",
    "fingerprint", "bacterial", "microbial", "fungal", "viral", "odor", "static", "uv",
    "radiation", "magnetic", "corrosive", "rust", "oxidation", "aging",
];

/// Surface word to canonical product type.
const TYPE_MAPPING_LIST: &[(&str, &str)] = &[
    ("camera", "camera"),
    ("smartphone", "phone"),
    ("mobile", "phone"),
    ("cell", "phone"),
    ("laptop", "laptop"),
    ("computer", "laptop"),
    ("notebook", "laptop"),
    ("headphones", "headphones"),
    ("earbuds", "headphones"),
    ("earphones", "headphones"),
    ("speaker", "speaker"),
    ("tablet", "tablet"),
    ("ipad", "tablet"),
    ("watch", "watch"),
    ("smartwatch", "watch"),
    ("activity", "watch"),
    ("shoes", "shoes"),
    ("sneakers", "shoes"),
    ("boots", "shoes"),
    ("sandals", "shoes"),
    ("heels", "shoes"),
    ("flats", "shoes"),
    ("loafers", "shoes"),
    ("slippers", "shoes"),
    ("bag", "bag"),
    ("backpack", "bag"),
    ("purse", "bag"),
    ("handbag", "bag"),
    ("tote", "bag"),
    ("wallet", "wallet"),
    ("belt", "belt"),
    ("scarf", "scarf"),
    ("hat", "hat"),
    ("cap", "hat"),
    ("beanie", "hat"),
    ("gloves", "gloves"),
    ("socks", "socks"),
    ("underwear", "underwear"),
    ("bra", "bra"),
    ("pajamas", "pajamas"),
    ("robe", "robe"),
    ("bathrobe", "robe"),
    ("towel", "towel"),
    ("bedding", "bedding"),
    ("pillow", "pillow"),
    ("blanket", "blanket"),
    ("curtain", "curtain"),
    ("rug", "rug"),
    ("carpet", "rug"),
    ("lamp", "lamp"),
    ("light", "lamp"),
    ("chair", "chair"),
    ("table", "table"),
    ("desk", "desk"),
    ("bed", "bed"),
    ("sofa", "sofa"),
    ("couch", "sofa"),
    ("tv", "tv"),
    ("television", "tv"),
    ("monitor", "monitor"),
    ("keyboard", "keyboard"),
    ("mouse", "mouse"),
    ("printer", "printer"),
    ("scanner", "scanner"),
    ("router", "router"),
    ("modem", "modem"),
    ("cable", "cable"),
    ("charger", "charger"),
    ("battery", "battery"),
    ("power", "power"),
    ("adapter", "adapter"),
    ("usb", "usb"),
    ("hdmi", "hdmi"),
    ("bluetooth", "bluetooth"),
    ("wifi", "wifi"),
    ("wireless", "wireless"),
    ("smart", "smart"),
    ("digital", "digital"),
    ("electronic", "electronic"),
    ("gaming", "gaming"),
    ("sports", "sports"),
    ("fitness", "fitness"),
    ("kitchen", "kitchen"),
    ("bathroom", "bathroom"),
    ("bedroom", "bedroom"),
    ("living", "living"),
    ("dining", "dining"),
    ("office", "office"),
    ("garden", "garden"),
    ("outdoor", "outdoor"),
    ("indoor", "indoor"),
    ("baby", "baby"),
    ("kids", "kids"),
    ("children", "kids"),
    ("men", "men"),
    ("women", "women"),
    ("unisex", "unisex"),
    ("pet", "pet"),
    ("dog", "pet"),
    ("cat", "pet"),
    ("bird", "pet"),
    ("fish", "pet"),
    ("car", "car"),
    ("bike", "bike"),
    ("motorcycle", "bike"),
    ("truck", "truck"),
    ("van", "van"),
    ("suv", "suv"),
    ("sedan", "sedan"),
    ("hatchback", "hatchback"),
    ("convertible", "convertible"),
    ("electric", "electric"),
    ("hybrid", "hybrid"),
    ("gas", "gas"),
    ("diesel", "diesel"),
    ("manual", "manual"),
    ("automatic", "automatic"),
];

/// Marketing adjectives, indexed for lookup.
pub static STOP_WORDS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOP_WORD_LIST.iter().copied().collect());

/// Category words, indexed for lookup.
pub static CATEGORIES: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| CATEGORY_LIST.iter().copied().collect());

/// Feature words, indexed for lookup.
pub static FEATURES: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| FEATURE_LIST.iter().copied().collect());

/// Surface word to canonical product type, indexed for lookup.
pub static TYPE_MAP: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| TYPE_MAPPING_LIST.iter().copied().collect());

/// True if `word` is a marketing adjective.
#[inline]
#[must_use]
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}

/// True if `word` names a product category.
#[inline]
#[must_use]
pub fn is_category(word: &str) -> bool {
    CATEGORIES.contains(word)
}

/// True if `word` names a product feature.
#[inline]
#[must_use]
pub fn is_feature(word: &str) -> bool {
    FEATURES.contains(word)
}

/// Canonical product type for `word`, if it has one.
#[inline]
#[must_use]
pub fn canonical_type(word: &str) -> Option<&'static str> {
    TYPE_MAP.get(word).copied()
}
