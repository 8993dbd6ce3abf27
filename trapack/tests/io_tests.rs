#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;

    use trapack::classification::Classification;
    use trapack::entities::{PackingResult, Placement};
    use trapack::geometry::primitives::Point;
    use trapack::io::ext_repr::ExtInstance;
    use trapack::io::export::export;
    use trapack::io::import::{Importer, import};

    const INSTANCE: &str = r#"{
        "name": "trapezoid_100_60",
        "trapezoid": { "bottom_base": 100.0, "top_base": 60.0, "height": 40.0 },
        "detail": { "width": 10.0, "height": 10.0 }
    }"#;

    fn init_logger() {
        let _ = env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .is_test(true)
            .try_init();
    }

    #[test]
    fn import_uses_default_margin() {
        init_logger();
        let ext_instance: ExtInstance = serde_json::from_str(INSTANCE).unwrap();
        let importer = Importer::new(5.0, 3.0);
        let (sheet, rect) = import(&importer, &ext_instance).unwrap();

        assert_eq!(sheet.vertical_margin, 3.0);
        assert_eq!(sheet.region.y_min, -3.0);
        assert_eq!(sheet.outer.n_vertices(), 4);
        assert_eq!(rect.width, 10.0);
        assert_eq!(rect.height, 10.0);
    }

    #[test]
    fn import_rejects_invalid_trapezoid() {
        init_logger();
        let mut ext_instance: ExtInstance = serde_json::from_str(INSTANCE).unwrap();
        ext_instance.trapezoid.top_base = 98.0;
        let importer = Importer::new(5.0, 1.0);

        let err = import(&importer, &ext_instance).unwrap_err();
        assert!(format!("{err:#}").contains("invalid dimensions"));
    }

    #[test]
    fn import_rejects_invalid_detail() {
        init_logger();
        let mut ext_instance: ExtInstance = serde_json::from_str(INSTANCE).unwrap();
        ext_instance.detail.width = 0.0;
        let importer = Importer::new(5.0, 1.0);

        assert!(import(&importer, &ext_instance).is_err());
    }

    #[test]
    fn export_summarizes_result() {
        init_logger();
        let ext_instance: ExtInstance = serde_json::from_str(INSTANCE).unwrap();
        let (sheet, rect) = import(&Importer::new(5.0, 1.0), &ext_instance).unwrap();

        let result = PackingResult {
            placements: vec![
                Placement {
                    position: Point(0.0, 5.0),
                    classification: Classification::Full,
                },
                Placement {
                    position: Point(10.0, 4.8),
                    classification: Classification::Tolerant,
                },
            ],
            iterations_used: 12,
            exhausted: false,
        };

        let solution = export(&sheet, &rect, &result, 7);
        assert_eq!(solution.sheet.len(), 4);
        assert_eq!(solution.placements.len(), 2);
        assert_eq!(solution.n_full, 1);
        assert_eq!(solution.n_tolerant, 1);
        assert_eq!(solution.iterations_used, 12);
        assert!(!solution.exhausted);
        assert_eq!(solution.run_time_ms, 7);
        assert!(approx_eq!(f64, solution.placements[1].x_min, 5.0));
        assert!(approx_eq!(f64, solution.placements[1].y_min, -0.2, epsilon = 1e-12));
        assert!(approx_eq!(f64, solution.usage, 200.0 / 3200.0));

        let json = serde_json::to_value(&solution).unwrap();
        assert_eq!(json["placements"][1]["classification"], "tolerant");
    }
}
