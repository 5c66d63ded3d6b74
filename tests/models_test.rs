#[cfg(test)]
mod tests {
    use growth_screen::{ChildMeasurement, Classification, RawMeasurement, Sex};

    #[test]
    fn test_sex_parsing_accepts_source_codes() {
        for code in ["M", "m", "male", "Male", "1"] {
            assert_eq!(code.parse::<Sex>().unwrap(), Sex::Male);
        }
        for code in ["F", "f", "female", " FEMALE ", "2"] {
            assert_eq!(code.parse::<Sex>().unwrap(), Sex::Female);
        }
    }

    #[test]
    fn test_sex_parsing_rejects_unknown_codes() {
        for code in ["", "x", "3", "unknown", "men"] {
            let err = code.parse::<Sex>().unwrap_err();
            assert!(err.is_invalid_input(), "code {code:?} must be rejected");
        }
    }

    #[test]
    fn test_classification_severity_order() {
        assert!(Classification::SeverelyStunted < Classification::Stunted);
        assert!(Classification::Stunted < Classification::Normal);
        assert!(Classification::SeverelyStunted.is_stunted());
        assert!(Classification::Stunted.is_stunted());
        assert!(!Classification::Normal.is_stunted());
    }

    #[test]
    fn test_classification_labels() {
        assert_eq!(Classification::Normal.who_label(), "Not stunted (WHO)");
        assert_eq!(Classification::Stunted.who_label(), "Stunted (WHO)");
        assert_eq!(
            Classification::SeverelyStunted.who_label(),
            "Severely stunted (WHO)"
        );
    }

    #[test]
    fn test_raw_measurement_parses_trimmed_fields() {
        let record = RawMeasurement::new(" M ", " 24 ", " 85.5 ");
        let measurement = record.parse().unwrap();
        assert_eq!(measurement.sex(), Sex::Male);
        assert_eq!(measurement.age_months(), 24);
        assert_eq!(measurement.height_cm(), 85.5);
    }

    #[test]
    fn test_raw_measurement_rejects_each_invalid_field() {
        // every case from the rejection list must come back as InvalidInput
        let cases = [
            RawMeasurement::new("M", "-1", "85.0"),
            RawMeasurement::new("M", "61", "85.0"),
            RawMeasurement::new("M", "24", "0"),
            RawMeasurement::new("M", "24", "-5"),
            RawMeasurement::new("child", "24", "85.0"),
            RawMeasurement::new("M", "two", "85.0"),
            RawMeasurement::new("M", "24", "tall"),
            RawMeasurement::new("M", "24.5", "85.0"),
        ];
        for record in cases {
            let err = record.parse().unwrap_err();
            assert!(err.is_invalid_input(), "record {record:?} must be rejected");
        }
    }

    #[test]
    fn test_raw_measurement_id_roundtrip() {
        let record = RawMeasurement::new("F", "12", "74.0").with_id("row-17");
        assert_eq!(record.id.as_deref(), Some("row-17"));

        let json = serde_json::to_string(&record).unwrap();
        let back: RawMeasurement = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_raw_measurement_deserializes_without_id() {
        let json = r#"{"sex": "F", "age_months": "30", "height_cm": "88.0"}"#;
        let record: RawMeasurement = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, None);
        assert!(record.parse().is_ok());
    }

    #[test]
    fn test_measurement_accessors() {
        let measurement = ChildMeasurement::new(Sex::Female, 0, 49.1).unwrap();
        assert_eq!(measurement.sex(), Sex::Female);
        assert_eq!(measurement.age_months(), 0);
        assert_eq!(measurement.height_cm(), 49.1);
    }
}
