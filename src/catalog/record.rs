//! @acp:module "Food Records"
//! @acp:summary "One dataset row plus name normalization and numeric parsing"
//! @acp:domain nutrition
//! @acp:layer model

use regex::Regex;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::LazyLock;

use super::category::Category;

/// Default dataset column holding the food category
pub const DEFAULT_CATEGORY_COLUMN: &str = "食品分類";

/// Default dataset column holding the sample name
pub const DEFAULT_NAME_COLUMN: &str = "樣品名稱";

/// Name used when a record has no sample name
pub const UNKNOWN_NAME: &str = "Unknown";

/// "Average value" marker and parenthetical qualifiers (ASCII or full-width)
static NAME_NOISE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"平均值|[(（][^)）]*[)）]").unwrap());

/// Leading decimal number, the way a lenient float parser reads it
static LEADING_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?").unwrap()
});

/// Column names identifying a record's name and category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Columns {
    pub category: String,
    pub name: String,
}

impl Default for Columns {
    fn default() -> Self {
        Self {
            category: DEFAULT_CATEGORY_COLUMN.to_string(),
            name: DEFAULT_NAME_COLUMN.to_string(),
        }
    }
}

/// One row of the composition dataset
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoodRecord {
    /// Raw sample name, if the cell was present and non-empty
    name: Option<String>,
    /// Raw category label, if present
    category_label: Option<String>,
    #[serde(skip)]
    category: Option<Category>,
    /// Every column of the row, keyed by header
    fields: HashMap<String, String>,
}

impl FoodRecord {
    /// Build a record from a header-to-value mapping
    pub fn from_fields(fields: HashMap<String, String>, columns: &Columns) -> Self {
        let name = non_empty(fields.get(&columns.name));
        let category_label = non_empty(fields.get(&columns.category));
        let category = category_label.as_deref().and_then(Category::from_label);

        Self {
            name,
            category_label,
            category,
            fields,
        }
    }

    /// Start a record with a name and category label
    pub fn new(name: impl Into<String>, category_label: impl Into<String>) -> Self {
        let mut fields = HashMap::new();
        fields.insert(DEFAULT_NAME_COLUMN.to_string(), name.into());
        fields.insert(DEFAULT_CATEGORY_COLUMN.to_string(), category_label.into());
        Self::from_fields(fields, &Columns::default())
    }

    /// Add or replace a column value
    pub fn with_value(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(column.into(), value.into());
        self
    }

    pub fn sample_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn category_label(&self) -> Option<&str> {
        self.category_label.as_deref()
    }

    /// Category, if the label is one of the allowed set
    pub fn category(&self) -> Option<Category> {
        self.category
    }

    /// Raw cell for a column
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    /// Parsed numeric value of a column, `None` when missing or non-numeric
    pub fn value(&self, column: &str) -> Option<f64> {
        self.get(column).and_then(parse_nutrient_value)
    }

    /// Identity key: the sample name with noise tokens stripped
    pub fn normalized_name(&self) -> String {
        normalize_name(self.name.as_deref().unwrap_or(UNKNOWN_NAME))
    }
}

fn non_empty(value: Option<&String>) -> Option<String> {
    value
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Strip the "average value" marker and parenthetical qualifiers from a name
pub fn normalize_name(name: &str) -> String {
    if name.trim().is_empty() {
        return UNKNOWN_NAME.to_string();
    }
    NAME_NOISE.replace_all(name, "").trim().to_string()
}

/// Parse a nutrient cell leniently: leading number wins, junk is `None`
pub fn parse_nutrient_value(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    let parsed = match raw.parse::<f64>() {
        Ok(v) => Some(v),
        Err(_) => LEADING_NUMBER
            .find(raw)
            .and_then(|m| m.as_str().parse::<f64>().ok()),
    };
    parsed.filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("鮮乳(全脂)"), "鮮乳");
        assert_eq!(normalize_name("香蕉平均值"), "香蕉");
        assert_eq!(normalize_name("豆腐（傳統）"), "豆腐");
        assert_eq!(normalize_name("豬肉(里肌)(生)平均值 "), "豬肉");
        assert_eq!(normalize_name("  蘋果 "), "蘋果");
        assert_eq!(normalize_name(""), UNKNOWN_NAME);
    }

    #[test]
    fn test_parse_nutrient_value() {
        assert_eq!(parse_nutrient_value("150"), Some(150.0));
        assert_eq!(parse_nutrient_value(" 12.5 "), Some(12.5));
        assert_eq!(parse_nutrient_value("12.5abc"), Some(12.5));
        assert_eq!(parse_nutrient_value(".5"), Some(0.5));
        assert_eq!(parse_nutrient_value(""), None);
        assert_eq!(parse_nutrient_value("-"), None);
        assert_eq!(parse_nutrient_value("無資料"), None);
        assert_eq!(parse_nutrient_value("NaN"), None);
        assert_eq!(parse_nutrient_value("inf"), None);
    }

    #[test]
    fn test_record_accessors() {
        let record = FoodRecord::new("鮮乳(全脂)", "乳品類").with_value("鉀(mg)", "150");
        assert_eq!(record.sample_name(), Some("鮮乳(全脂)"));
        assert_eq!(record.category(), Some(Category::Dairy));
        assert_eq!(record.value("鉀(mg)"), Some(150.0));
        assert_eq!(record.value("鈉(mg)"), None);
        assert_eq!(record.normalized_name(), "鮮乳");
    }

    #[test]
    fn test_record_missing_name_and_category() {
        let mut fields = HashMap::new();
        fields.insert(DEFAULT_NAME_COLUMN.to_string(), "   ".to_string());
        let record = FoodRecord::from_fields(fields, &Columns::default());
        assert_eq!(record.sample_name(), None);
        assert_eq!(record.category(), None);
        assert_eq!(record.normalized_name(), UNKNOWN_NAME);
    }

    #[test]
    fn test_record_category_needs_exact_label() {
        assert_eq!(FoodRecord::new("香蕉", "fruit").category(), None);
        assert_eq!(FoodRecord::new("香蕉", "水果類").category(), Some(Category::Fruit));
    }
}
