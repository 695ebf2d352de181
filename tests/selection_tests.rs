//! Selection engine and session integration tests
//!
//! Exercises the public API end to end: dataset on disk, config overrides,
//! partitioning, toggling, and totals.

use std::io::Write;

use nutrient::commands::{apply_toggles, filtered_view, DataOptions};
use nutrient::{
    compute_total, dataset, filter_to_allowed_categories, partition_by_threshold,
    toggle_selection, Config, FoodRecord, Level, NutrientError, NutrientKind, NutrientProfile,
    PortionTable, SelectionSet, Session,
};
use tempfile::TempDir;

const FOODS_CSV: &str = "食品分類,樣品名稱,鉀(mg),鈉(mg),果糖(g)
乳品類,鮮乳(全脂),150,38,0
水果類,香蕉平均值,290,1,4.5
水果類,蘋果(富士),110,2,6.2
蔬菜類,菠菜,510,47,
豆類,黃豆,1600,10,0
肉類,豬肉(里肌),370,55,
肉類,豬肉(五花),300,60,
零食類,洋芋片,1200,500,0
穀物類,白飯,,,
";

fn write_dataset(temp: &TempDir) -> std::path::PathBuf {
    let path = temp.path().join("foods.csv");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(FOODS_CSV.as_bytes()).unwrap();
    path
}

async fn open(temp: &TempDir, config: &Config, kind: NutrientKind) -> Session {
    let catalog = config.catalog().unwrap();
    let records = dataset::load(write_dataset(temp), &catalog).await.unwrap();
    Session::new(records, catalog, kind)
}

// =============================================================================
// Engine properties
// =============================================================================

mod engine_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn records() -> Vec<FoodRecord> {
        let catalog = Config::default().catalog().unwrap();
        dataset::from_reader(FOODS_CSV.as_bytes(), &catalog).unwrap()
    }

    #[test]
    fn test_filter_is_ordered_subset() {
        let all = records();
        let kept = filter_to_allowed_categories(&all);

        assert_eq!(kept.len(), all.len() - 1);
        let mut remaining = all.iter();
        for record in &kept {
            assert!(record.category().is_some());
            assert!(remaining.any(|r| r == record));
        }
    }

    #[test]
    fn test_partition_for_every_nutrient() {
        let records = filter_to_allowed_categories(&records());
        for &kind in NutrientKind::all() {
            let profile = NutrientProfile::builtin(kind);
            let (low, high) = partition_by_threshold(&records, &profile);
            assert_eq!(low.len() + high.len(), records.len());
            assert!(low
                .iter()
                .all(|r| r.value(&profile.column).unwrap_or(0.0) <= profile.content_threshold));
            assert!(high
                .iter()
                .all(|r| r.value(&profile.column).unwrap_or(0.0) > profile.content_threshold));
        }
    }

    #[test]
    fn test_fructose_threshold_is_five_grams() {
        let records = filter_to_allowed_categories(&records());
        let profile = NutrientProfile::builtin(NutrientKind::Fructose);
        let (_, high) = partition_by_threshold(&records, &profile);
        let high: Vec<_> = high.iter().filter_map(|r| r.sample_name()).collect();
        assert_eq!(high, vec!["蘋果(富士)"]);
    }

    #[test]
    fn test_double_toggle_restores_selection() {
        let records = records();
        let profile = NutrientProfile::builtin(NutrientKind::Potassium);
        let mut selection = SelectionSet::new();
        toggle_selection(&mut selection, &records[0]);
        toggle_selection(&mut selection, &records[3]);
        let mut before = selection.names();
        before.sort();

        for record in &records {
            let mut copy = selection.clone();
            toggle_selection(&mut copy, record);
            toggle_selection(&mut copy, record);
            let mut after = copy.names();
            after.sort();
            assert_eq!(after, before);
        }

        let total = compute_total(&selection, &profile, &PortionTable::new());
        assert_eq!(total.total, 150.0 * 2.0 + 510.0);
    }
}

// =============================================================================
// Session over a dataset on disk
// =============================================================================

mod session_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_whole_milk_alone_stays_under_limit() {
        let temp = TempDir::new().unwrap();
        let mut session = open(&temp, &Config::default(), NutrientKind::Potassium).await;

        session.toggle("鮮乳(全脂)").unwrap();
        let total = session.total();
        assert_eq!(total.total, 300.0);
        assert!(!total.exceeds);
    }

    #[tokio::test]
    async fn test_duplicate_names_collapse_to_highest() {
        let temp = TempDir::new().unwrap();
        let session = open(&temp, &Config::default(), NutrientKind::Potassium).await;

        let pork = session.search("豬肉");
        assert_eq!(pork.len(), 1);
        assert_eq!(pork[0].content, 370.0);
        assert_eq!(pork[0].record.sample_name(), Some("豬肉(里肌)"));
    }

    #[tokio::test]
    async fn test_total_exceeds_and_switch_resets() {
        let temp = TempDir::new().unwrap();
        let mut session = open(&temp, &Config::default(), NutrientKind::Potassium).await;

        apply_toggles(&mut session, &["菠菜".to_string(), "黃豆".to_string()]).unwrap();
        let total = session.total();
        assert_eq!(total.total, 2110.0);
        assert!(total.exceeds);

        session.select_nutrient(NutrientKind::Fructose);
        assert!(session.selected_names().is_empty());
        assert_eq!(session.total().total, 0.0);
        assert!(!session.total().exceeds);
    }

    #[tokio::test]
    async fn test_config_overrides_flow_through() {
        let temp = TempDir::new().unwrap();
        let config: Config = serde_json::from_str(
            r#"{
                "nutrients": { "potassium": { "daily_limit": 500, "content_threshold": 300 } },
                "portions": { "乳品類": 100 }
            }"#,
        )
        .unwrap();
        let mut session = open(&temp, &config, NutrientKind::Potassium).await;

        let view = filtered_view(&session, Some(Level::High));
        assert!(view.low.is_empty());
        let high: Vec<_> = view
            .high
            .iter()
            .flat_map(|g| g.entries.iter().map(|e| e.name.as_str()))
            .collect();
        assert_eq!(high, vec!["菠菜", "黃豆", "豬肉"]);

        session.toggle("鮮乳").unwrap();
        assert_eq!(session.total().total, 150.0);
        session.toggle("香蕉").unwrap();
        assert!(!session.total().exceeds);
        session.toggle("蘋果").unwrap();
        assert_eq!(session.total().total, 550.0);
        assert!(session.total().exceeds);
    }

    #[tokio::test]
    async fn test_unknown_food_is_an_error() {
        let temp = TempDir::new().unwrap();
        let mut session = open(&temp, &Config::default(), NutrientKind::Sodium).await;

        let err = apply_toggles(&mut session, &["洋芋片".to_string()]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<NutrientError>(),
            Some(NutrientError::UnknownFood(_))
        ));
    }

    #[tokio::test]
    async fn test_load_session_reports_missing_dataset() {
        let temp = TempDir::new().unwrap();
        let options = DataOptions {
            data: Some(temp.path().join("missing.csv")),
            nutrient: None,
        };
        let result = nutrient::commands::load_session(&options, &Config::default()).await;
        assert!(result.is_err());
    }
}
