//! Configurable classification of whole strings and byte buffers

use ctype_core::CharValue;
use tracing::{debug, trace};

use crate::Category;

/// Configuration for how values map to categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ClassifyConfig {
    /// Report line feed as [`Category::Endline`] instead of [`Category::Space`]
    pub split_endline: bool,
    /// Report letters as [`Category::Alpha`] instead of lower/upper
    pub fold_case: bool,
}

impl ClassifyConfig {
    /// Set whether line feed gets its own category
    pub fn with_split_endline(mut self, split_endline: bool) -> Self {
        self.split_endline = split_endline;
        self
    }

    /// Set whether letters are folded into a single category
    pub fn with_fold_case(mut self, fold_case: bool) -> Self {
        self.fold_case = fold_case;
        self
    }

    /// Load a config from JSON; missing fields keep their defaults
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Default for ClassifyConfig {
    fn default() -> Self {
        Self {
            split_endline: true,
            fold_case: false,
        }
    }
}

/// Per-category counts produced by [`Classifier::histogram`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CategoryCounts {
    counts: [usize; Category::COUNT],
}

impl CategoryCounts {
    /// Count for one category
    pub fn get(&self, category: Category) -> usize {
        self.counts[category.to_u8() as usize]
    }

    /// Sum over all categories
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Categories with a non-zero count, in discriminant order
    pub fn iter(&self) -> impl Iterator<Item = (Category, usize)> + '_ {
        Category::ALL
            .into_iter()
            .map(|category| (category, self.get(category)))
            .filter(|&(_, count)| count > 0)
    }

    fn record(&mut self, category: Category) {
        self.counts[category.to_u8() as usize] += 1;
    }
}

/// Maps character values to categories according to a [`ClassifyConfig`]
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    config: ClassifyConfig,
}

impl Classifier {
    /// Create a classifier with the given configuration
    pub fn new(config: ClassifyConfig) -> Self {
        Self { config }
    }

    /// Get the classifier configuration
    pub fn config(&self) -> &ClassifyConfig {
        &self.config
    }

    /// Category of a single value
    pub fn classify<C: CharValue>(&self, ch: C) -> Category {
        match Category::of(ch) {
            Category::Endline if !self.config.split_endline => Category::Space,
            Category::Lower | Category::Upper if self.config.fold_case => Category::Alpha,
            category => category,
        }
    }

    /// Category of every `char` in `text`
    pub fn classify_str(&self, text: &str) -> Vec<Category> {
        let categories: Vec<Category> = text.chars().map(|ch| self.classify(ch)).collect();
        trace!(chars = categories.len(), "classified string");
        categories
    }

    /// Category of every byte in `bytes`
    ///
    /// Bytes of multi-byte UTF-8 sequences each report [`Category::NonAscii`].
    pub fn classify_bytes(&self, bytes: &[u8]) -> Vec<Category> {
        let categories: Vec<Category> = bytes.iter().map(|&b| self.classify(b)).collect();
        trace!(bytes = categories.len(), "classified bytes");
        categories
    }

    /// Count the categories of every `char` in `text`
    pub fn histogram(&self, text: &str) -> CategoryCounts {
        let mut counts = CategoryCounts::default();
        for ch in text.chars() {
            counts.record(self.classify(ch));
        }
        debug!(
            total = counts.total(),
            non_ascii = counts.get(Category::NonAscii),
            "built category histogram"
        );
        counts
    }
}
