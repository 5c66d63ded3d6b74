#[cfg(test)]
mod tests {
    use growth_screen::{GrowthScreenError, ReferenceTable, Sex};

    fn table_json(male_months: &[u32], female_months: &[u32]) -> String {
        let row = |m: &u32| {
            serde_json::json!({
                "age_months": m,
                "median_cm": 80.0,
                "sd_cm": 3.0,
            })
        };
        serde_json::json!({
            "male": male_months.iter().map(row).collect::<Vec<_>>(),
            "female": female_months.iter().map(row).collect::<Vec<_>>(),
        })
        .to_string()
    }

    #[test]
    fn test_embedded_table_is_complete() {
        let table = ReferenceTable::embedded().unwrap();
        // one cell per sex per month, 0-60
        assert_eq!(table.len(), 2 * 61);
        assert!(!table.is_empty());
        assert!(table.source().is_some());

        for sex in [Sex::Male, Sex::Female] {
            for month in 0..=60 {
                let point = table.lookup(sex, month).unwrap();
                assert!(point.median_cm > 0.0);
                assert!(point.sd_cm > 0.0);
            }
        }
    }

    #[test]
    fn test_embedded_medians_increase_with_age() {
        let table = ReferenceTable::embedded().unwrap();
        for sex in [Sex::Male, Sex::Female] {
            for month in 1..=60 {
                let previous = table.lookup(sex, month - 1).unwrap();
                let current = table.lookup(sex, month).unwrap();
                assert!(
                    current.median_cm >= previous.median_cm,
                    "{sex} median fell between months {} and {month}",
                    month - 1
                );
            }
        }
    }

    #[test]
    fn test_lookup_miss_is_reference_data_missing() {
        let table = ReferenceTable::embedded().unwrap();
        let err = table.lookup(Sex::Male, 61).unwrap_err();
        assert!(matches!(
            err,
            GrowthScreenError::ReferenceDataMissing {
                sex: Sex::Male,
                age_months: 61,
            }
        ));
    }

    #[test]
    fn test_incomplete_table_rejected_at_load() {
        let all: Vec<u32> = (0..=60).collect();
        let missing_40: Vec<u32> = (0..=60).filter(|&m| m != 40).collect();

        let err = ReferenceTable::from_json_str(&table_json(&missing_40, &all)).unwrap_err();
        assert!(matches!(err, GrowthScreenError::ReferenceTable(_)));

        let err = ReferenceTable::from_json_str(&table_json(&all, &[])).unwrap_err();
        assert!(matches!(err, GrowthScreenError::ReferenceTable(_)));
    }

    #[test]
    fn test_duplicate_month_rejected_at_load() {
        let all: Vec<u32> = (0..=60).collect();
        let mut duplicated = all.clone();
        duplicated.push(12);

        let err = ReferenceTable::from_json_str(&table_json(&duplicated, &all)).unwrap_err();
        assert!(matches!(err, GrowthScreenError::ReferenceTable(_)));
    }

    #[test]
    fn test_out_of_range_month_rejected_at_load() {
        let mut months: Vec<u32> = (0..=60).collect();
        months.push(61);
        let all: Vec<u32> = (0..=60).collect();

        let err = ReferenceTable::from_json_str(&table_json(&months, &all)).unwrap_err();
        assert!(matches!(err, GrowthScreenError::ReferenceTable(_)));
    }

    #[test]
    fn test_non_positive_sd_rejected_at_load() {
        let mut rows: Vec<serde_json::Value> = (0u32..=60)
            .map(|m| {
                serde_json::json!({
                    "age_months": m,
                    "median_cm": 80.0,
                    "sd_cm": 3.0,
                })
            })
            .collect();
        rows[10]["sd_cm"] = serde_json::json!(0.0);
        let doc = serde_json::json!({ "male": rows.clone(), "female": rows });
        let err = ReferenceTable::from_json_str(&doc.to_string()).unwrap_err();
        assert!(matches!(err, GrowthScreenError::ReferenceTable(_)));
    }

    #[test]
    fn test_malformed_json_is_a_json_error() {
        let err = ReferenceTable::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, GrowthScreenError::Json(_)));
    }
}
