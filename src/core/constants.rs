//! Field names and fixed values shared by the classifier, the enrichers and
//! the side aggregation.

/// Input fields read by the processor
pub mod fields {
    pub const VALUE: &str = "value";
    pub const TYPE: &str = "type";
    pub const TAGS: &str = "tags";
    pub const PRIORITY: &str = "priority";
    pub const CATEGORY: &str = "category";
    pub const DESCRIPTION: &str = "description";
    pub const METADATA: &str = "metadata";
    pub const NESTED: &str = "nested";
    pub const USERNAME: &str = "username";
    pub const EMAIL: &str = "email";
    pub const NAME: &str = "name";
    pub const PRICE: &str = "price";
    pub const QUANTITY: &str = "quantity";
    pub const DISCOUNT: &str = "discount";
}

/// Fields added to enriched copies of records
pub mod derived {
    pub const TAG_COUNT: &str = "tag_count";
    pub const HAS_PRIORITY: &str = "has_priority";
    pub const CATEGORIES: &str = "categories";
    pub const LONG_WORD_COUNT: &str = "long_word_count";
    pub const HAS_PRIORITY_KEYWORDS: &str = "has_priority_keywords";
    pub const FACTORIAL: &str = "factorial";
    pub const HAS_NESTED: &str = "has_nested";
    pub const PROCESSED: &str = "processed";
}

/// Record kinds recognised by the side aggregation
pub mod kinds {
    pub const USER: &str = "user";
    pub const PRODUCT: &str = "product";
}

/// Names of the derived collections in an aggregation result
pub mod collections {
    pub const USERS: &str = "users";
    pub const PRODUCTS: &str = "products";
    pub const COUNT_SUFFIX: &str = "_count";
}

/// Keywords that flag a high-tier description as priority-related
pub const PRIORITY_KEYWORDS: &[&str] = &["critical", "important", "urgent", "high", "medium", "low"];

/// Minimum length of a word counted as "long" in descriptions
pub const LONG_WORD_MIN_LEN: usize = 6;

/// Text longer than this is medium tier when it is not numeric
pub const TEXT_MEDIUM_LEN: usize = 10;

/// Text longer than this is high tier when it is not numeric
pub const TEXT_HIGH_LEN: usize = 20;

pub const DEFAULT_THRESHOLD: u32 = 10;

pub const DEFAULT_PRODUCT_NAME: &str = "Unknown";
