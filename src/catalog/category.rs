//! @acp:module "Food Categories"
//! @acp:summary "Fixed food category set with portion sizes and display colors"
//! @acp:domain nutrition
//! @acp:layer model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Portion used when a record's category has no mapping.
pub const FALLBACK_PORTION_GRAMS: f64 = 100.0;

/// Color used when a record's category has no mapping.
pub const FALLBACK_COLOR: &str = "#F4F4F4";

/// Label shown for records whose category is missing or unrecognized.
pub const UNKNOWN_CATEGORY_LABEL: &str = "未知類別";

/// The allowed food categories of the composition dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Fruit,
    Meat,
    Dairy,
    Vegetable,
    Seafood,
    Egg,
    Grain,
    Mushroom,
    Bean,
}

impl Category {
    /// Get all categories in dataset order
    pub fn all() -> &'static [Category] {
        &[
            Category::Fruit,
            Category::Meat,
            Category::Dairy,
            Category::Vegetable,
            Category::Seafood,
            Category::Egg,
            Category::Grain,
            Category::Mushroom,
            Category::Bean,
        ]
    }

    /// Label as it appears in the dataset's category column
    pub fn label(&self) -> &'static str {
        match self {
            Category::Fruit => "水果類",
            Category::Meat => "肉類",
            Category::Dairy => "乳品類",
            Category::Vegetable => "蔬菜類",
            Category::Seafood => "魚貝類",
            Category::Egg => "蛋類",
            Category::Grain => "穀物類",
            Category::Mushroom => "菇類",
            Category::Bean => "豆類",
        }
    }

    /// Short ASCII key used in config files and on the command line
    pub fn key(&self) -> &'static str {
        match self {
            Category::Fruit => "fruit",
            Category::Meat => "meat",
            Category::Dairy => "dairy",
            Category::Vegetable => "vegetable",
            Category::Seafood => "seafood",
            Category::Egg => "egg",
            Category::Grain => "grain",
            Category::Mushroom => "mushroom",
            Category::Bean => "bean",
        }
    }

    /// Assumed single-serving weight in grams
    pub fn portion_grams(&self) -> f64 {
        match self {
            Category::Meat => 150.0,
            Category::Dairy => 200.0,
            Category::Seafood => 120.0,
            Category::Egg => 50.0,
            Category::Fruit
            | Category::Vegetable
            | Category::Grain
            | Category::Mushroom
            | Category::Bean => 100.0,
        }
    }

    /// Background color as a `#RRGGBB` hex string
    pub fn color(&self) -> &'static str {
        match self {
            Category::Fruit => "#FFF3CD",
            Category::Meat => "#FFC9C9",
            Category::Dairy => "#CDE4F7",
            Category::Vegetable => "#D4EDDA",
            Category::Seafood => "#D1E7DD",
            Category::Egg => "#FEEBC8",
            Category::Grain => "#FFF5E5",
            Category::Mushroom => "#F1E5FF",
            Category::Bean => "#E5FCFF",
        }
    }

    /// Match a dataset category cell; only the exact label counts
    pub fn from_label(label: &str) -> Option<Category> {
        Category::all().iter().copied().find(|c| c.label() == label)
    }

    /// Parse a category from its label or ASCII key, as written in config
    pub fn from_name(name: &str) -> Option<Category> {
        let name = name.trim();
        Category::all()
            .iter()
            .copied()
            .find(|c| c.label() == name || c.key().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Color for an optional category, falling back for unknown ones
pub fn color_for(category: Option<Category>) -> &'static str {
    category.map(|c| c.color()).unwrap_or(FALLBACK_COLOR)
}
