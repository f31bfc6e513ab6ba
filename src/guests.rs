//! Guests

use std::{
    fmt,
    ops::{Index, IndexMut},
};

use serde::{Deserialize, Serialize};

/// One of the four fixed guest classifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GuestCategory {
    /// Adult guest
    #[serde(alias = "Adult")]
    Adult,

    /// Child guest
    #[serde(alias = "Child")]
    Child,

    /// Senior guest
    #[serde(alias = "Senior")]
    Senior,

    /// Infant guest
    #[serde(alias = "Infant")]
    Infant,
}

impl GuestCategory {
    /// Every category, in presentation order.
    pub const ALL: [GuestCategory; 4] = [
        GuestCategory::Adult,
        GuestCategory::Child,
        GuestCategory::Senior,
        GuestCategory::Infant,
    ];

    /// Lowercase name of the category.
    pub fn as_str(self) -> &'static str {
        match self {
            GuestCategory::Adult => "adult",
            GuestCategory::Child => "child",
            GuestCategory::Senior => "senior",
            GuestCategory::Infant => "infant",
        }
    }
}

impl fmt::Display for GuestCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value for each guest category.
///
/// Every category is always present, so lookups are total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, bound(deserialize = "T: Deserialize<'de> + Default"))]
pub struct PerCategory<T> {
    /// Adult value
    pub adult: T,

    /// Child value
    pub child: T,

    /// Senior value
    pub senior: T,

    /// Infant value
    pub infant: T,
}

impl<T> PerCategory<T> {
    /// Builds a record by calling `f` once per category.
    pub fn from_fn(mut f: impl FnMut(GuestCategory) -> T) -> Self {
        Self {
            adult: f(GuestCategory::Adult),
            child: f(GuestCategory::Child),
            senior: f(GuestCategory::Senior),
            infant: f(GuestCategory::Infant),
        }
    }

    /// Returns the value for a category.
    pub fn get(&self, category: GuestCategory) -> &T {
        match category {
            GuestCategory::Adult => &self.adult,
            GuestCategory::Child => &self.child,
            GuestCategory::Senior => &self.senior,
            GuestCategory::Infant => &self.infant,
        }
    }

    /// Returns the value for a category, mutably.
    pub fn get_mut(&mut self, category: GuestCategory) -> &mut T {
        match category {
            GuestCategory::Adult => &mut self.adult,
            GuestCategory::Child => &mut self.child,
            GuestCategory::Senior => &mut self.senior,
            GuestCategory::Infant => &mut self.infant,
        }
    }

    /// Iterate over `(category, value)` pairs in presentation order.
    pub fn iter(&self) -> impl Iterator<Item = (GuestCategory, &T)> {
        GuestCategory::ALL
            .into_iter()
            .map(move |category| (category, self.get(category)))
    }
}

impl<T> Index<GuestCategory> for PerCategory<T> {
    type Output = T;

    fn index(&self, category: GuestCategory) -> &Self::Output {
        self.get(category)
    }
}

impl<T> IndexMut<GuestCategory> for PerCategory<T> {
    fn index_mut(&mut self, category: GuestCategory) -> &mut Self::Output {
        self.get_mut(category)
    }
}

/// Party composition: requested guest count per category.
pub type GuestRequest = PerCategory<u32>;

impl GuestRequest {
    /// Creates a request from explicit counts.
    pub fn new(adult: u32, child: u32, senior: u32, infant: u32) -> Self {
        Self {
            adult,
            child,
            senior,
            infant,
        }
    }

    /// Total number of guests across all categories.
    pub fn total(&self) -> u32 {
        self.iter()
            .fold(0u32, |acc, (_, count)| acc.saturating_add(*count))
    }

    /// Check if no guests are requested at all.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Returns a copy with one category's count replaced.
    #[must_use]
    pub fn with(mut self, category: GuestCategory, count: u32) -> Self {
        *self.get_mut(category) = count;
        self
    }
}
