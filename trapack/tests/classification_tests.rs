#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;
    use test_case::test_case;

    use trapack::classification::{Classification, ToleranceConfig, classify, overhang};
    use trapack::entities::{PackingResult, Placement, RectSpec, Sheet};
    use trapack::geometry::primitives::{Point, SPolygon};
    use trapack::geometry::{GeometryError, TrapezoidSpec, compute_trapezoid};
    use trapack::util::assertions;

    const TOLERANCE: f64 = 0.5;
    const EPS: f64 = 1e-6;

    fn trapezoid() -> SPolygon {
        let spec = TrapezoidSpec {
            bottom_base: 100.0,
            top_base: 60.0,
            height: 40.0,
            vertical_margin: 1.0,
        };
        compute_trapezoid(&spec, 5.0).unwrap()
    }

    fn tolerance() -> ToleranceConfig {
        ToleranceConfig::new(TOLERANCE).unwrap()
    }

    /// 10x10 square whose bottom side lies `d` below the bottom base of the trapezoid
    fn below_bottom_base(d: f64) -> [Point; 4] {
        [
            Point(-5.0, -d),
            Point(5.0, -d),
            Point(5.0, 10.0 - d),
            Point(-5.0, 10.0 - d),
        ]
    }

    #[test]
    fn fully_inside() {
        let corners = [
            Point(-5.0, 5.0),
            Point(5.0, 5.0),
            Point(5.0, 15.0),
            Point(-5.0, 15.0),
        ];
        assert_eq!(
            classify(&corners, &trapezoid(), &tolerance()),
            Classification::Full
        );
    }

    #[test]
    fn resting_on_the_boundary_is_full() {
        assert_eq!(
            classify(&below_bottom_base(0.0), &trapezoid(), &tolerance()),
            Classification::Full
        );
    }

    #[test_case(TOLERANCE - EPS, Classification::Tolerant; "just within tolerance")]
    #[test_case(TOLERANCE, Classification::Tolerant; "exactly at tolerance")]
    #[test_case(TOLERANCE + EPS, Classification::Invalid; "just beyond tolerance")]
    #[test_case(0.1, Classification::Tolerant; "slight overhang")]
    #[test_case(3.0, Classification::Invalid; "far outside")]
    fn overhanging_bottom_base(d: f64, expected: Classification) {
        assert_eq!(
            classify(&below_bottom_base(d), &trapezoid(), &tolerance()),
            expected
        );
    }

    #[test]
    fn overhanging_slanted_side() {
        // right side runs from (50, 0) to (30, 40), outward normal (2, 1) / sqrt(5)
        let polygon = trapezoid();
        let (n_x, n_y) = (2.0 / 5.0_f64.sqrt(), 1.0 / 5.0_f64.sqrt());
        let on_side = Point(40.0, 20.0);

        let corners_at = |d: f64| {
            let c = Point(on_side.0 + n_x * d, on_side.1 + n_y * d);
            [
                Point(c.0 - 10.0, c.1 - 5.0),
                Point(c.0, c.1 - 5.0),
                c,
                Point(c.0 - 10.0, c.1),
            ]
        };

        let d = overhang(&corners_at(0.3), &polygon).unwrap();
        assert!(approx_eq!(f64, d, 0.3, epsilon = 1e-9));
        assert_eq!(
            classify(&corners_at(0.3), &polygon, &tolerance()),
            Classification::Tolerant
        );
        assert_eq!(
            classify(&corners_at(0.7), &polygon, &tolerance()),
            Classification::Invalid
        );
    }

    #[test]
    fn zero_tolerance_only_allows_full() {
        let tolerance = ToleranceConfig::new(0.0).unwrap();
        assert_eq!(
            classify(&below_bottom_base(EPS), &trapezoid(), &tolerance),
            Classification::Invalid
        );
        assert_eq!(
            classify(&below_bottom_base(0.0), &trapezoid(), &tolerance),
            Classification::Full
        );
    }

    #[test_case(-0.1; "negative")]
    #[test_case(f64::NAN; "nan")]
    #[test_case(f64::INFINITY; "infinite")]
    fn invalid_tolerance(tolerance_cm: f64) {
        assert!(matches!(
            ToleranceConfig::new(tolerance_cm),
            Err(GeometryError::InvalidDimensions(_))
        ));
    }

    #[test_case(0.0, 10.0; "zero width")]
    #[test_case(10.0, -1.0; "negative height")]
    fn invalid_detail(width: f64, height: f64) {
        assert!(matches!(
            RectSpec::new(width, height),
            Err(GeometryError::InvalidDimensions(_))
        ));
    }

    #[test]
    fn assertions_detect_overlap_and_misclassification() {
        let spec = TrapezoidSpec {
            bottom_base: 100.0,
            top_base: 60.0,
            height: 40.0,
            vertical_margin: 1.0,
        };
        let sheet = Sheet::new(&spec, 5.0).unwrap();
        let rect = RectSpec::new(10.0, 10.0).unwrap();

        let full = |x: f64, y: f64| Placement {
            position: Point(x, y),
            classification: Classification::Full,
        };

        let disjoint = vec![full(0.0, 5.0), full(10.0, 5.0), full(0.0, 15.0)];
        assert!(assertions::placements_are_disjoint(&disjoint, &rect));

        let overlapping = vec![full(0.0, 5.0), full(9.0, 5.0)];
        assert!(!assertions::placements_are_disjoint(&overlapping, &rect));

        // neighbors whose shared edge was rounded a few ulps into each other
        let rounded = vec![full(0.1 + 0.2, 5.0), full(10.3, 5.0), full(0.3, 15.000000000000002)];
        assert!(assertions::placements_are_disjoint(&rounded, &rect));

        let stacked = vec![full(0.0, 5.0), full(30.0, 5.0), full(0.0, 5.0)];
        assert!(!assertions::placements_are_disjoint(&stacked, &rect));

        let tol = tolerance();
        let correct = PackingResult {
            placements: disjoint,
            iterations_used: 3,
            exhausted: false,
        };
        assert!(assertions::placements_are_classified_correctly(
            &correct, &sheet, &rect, &tol
        ));

        // the footprint of this one sticks out of the bottom base by 0.2
        let mislabeled = PackingResult {
            placements: vec![full(0.0, 4.8)],
            iterations_used: 1,
            exhausted: false,
        };
        assert!(!assertions::placements_are_classified_correctly(
            &mislabeled,
            &sheet,
            &rect,
            &tol
        ));
    }

    #[test]
    fn sheet_region_is_inflated_vertically() {
        let spec = TrapezoidSpec {
            bottom_base: 100.0,
            top_base: 60.0,
            height: 40.0,
            vertical_margin: 2.5,
        };
        let sheet = Sheet::new(&spec, 5.0).unwrap();
        assert_eq!(sheet.region.x_min, -50.0);
        assert_eq!(sheet.region.x_max, 50.0);
        assert_eq!(sheet.region.y_min, -2.5);
        assert_eq!(sheet.region.y_max, 42.5);
        assert!(approx_eq!(f64, sheet.area(), 3200.0));
    }
}
