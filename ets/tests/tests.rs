#[cfg(test)]
mod tests {
    use std::path::Path;

    use rand::prelude::SmallRng;
    use rand::{Rng, SeedableRng};
    use test_case::test_case;

    use ets::config::{ETSConfig, PlacementMode};
    use ets::io;
    use ets::io::output::ETSOutput;
    use ets::opt::packing::{ETSOptimizer, place_in_order};
    use ets::opt::translation_search::find_translation;
    use ets::opt::{RunOutcome, SearchPolicy, SearchStats};
    use figfit::PlacerError;
    use figfit::collision_detection::OverlapDetector;
    use figfit::collision_detection::raster::CanvasSize;
    use figfit::entities::{DEFAULT_MAX_FIGURE_VERTICES, Instance, PackingResult, PlacementResult};
    use figfit::geometry::Translation;
    use figfit::geometry::geo_traits::CollidesWith;
    use figfit::geometry::primitives::{Polygon, Rect};
    use figfit::io::export;
    use figfit::io::ext_repr::{ExtContour, ExtImage, ExtInstance, ExtVerdict};

    const CANVAS: CanvasSize = CanvasSize {
        width: 400,
        height: 300,
    };

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn rect(x_min: i32, y_min: i32, x_max: i32, y_max: i32) -> Polygon {
        Polygon::from(Rect::new(x_min, y_min, x_max, y_max))
    }

    /// Square figure of 100x100 at the origin
    fn square_figure() -> Polygon {
        rect(0, 0, 100, 100)
    }

    fn instance(figure: Polygon, objects: Vec<Polygon>) -> Instance {
        Instance::new("test", figure, objects, CANVAS, DEFAULT_MAX_FIGURE_VERTICES).unwrap()
    }

    fn search_alone(figure: &Polygon, object: &Polygon, stats: &mut SearchStats) -> PlacementResult {
        let detector = OverlapDetector::new(figure, std::iter::empty(), CANVAS);
        find_translation(&detector, object, 0, &SearchPolicy::default(), stats)
    }

    fn all_inside(figure: &Polygon, shape: &Polygon) -> bool {
        shape.points().iter().all(|p| figure.collides_with(p))
    }

    #[test]
    fn small_square_fits() {
        init_logging();
        let figure = square_figure();
        let object = rect(0, 0, 20, 20);
        let mut stats = SearchStats::default();

        let po = search_alone(&figure, &object, &mut stats)
            .placed()
            .expect("object should fit");

        //the first offset touches the figure's left edge, the second one is inside
        assert_eq!(po.translation, Translation(1, 0));
        assert_eq!(stats.n_offsets_evaluated(), 2);
        for p in po.shape.points() {
            assert!((0..=100).contains(&p.x()) && (0..=100).contains(&p.y()));
        }
        assert!(all_inside(&figure, &po.shape));
        //the searched object is left untouched
        assert_eq!(object, rect(0, 0, 20, 20));
    }

    #[test]
    fn translation_is_relative_to_source_position() {
        let figure = square_figure();
        let object = rect(250, 150, 270, 170);
        let mut stats = SearchStats::default();

        let po = search_alone(&figure, &object, &mut stats).placed().unwrap();
        assert_eq!(po.translation, Translation(-249, -150));
        assert_eq!(po.shape, rect(1, 0, 21, 20));
    }

    #[test_case(rect(200, 0, 350, 80); "too wide")]
    #[test_case(rect(200, 0, 280, 101); "too tall")]
    fn oversized_object_skips_search(object: Polygon) {
        let figure = square_figure();
        let mut stats = SearchStats::default();

        let result = search_alone(&figure, &object, &mut stats);
        assert_eq!(result, PlacementResult::Infeasible);
        assert_eq!(stats.n_guard_rejections, 1);
        assert_eq!(stats.n_offsets_evaluated(), 0);
        assert_eq!(stats.detector.n_point_queries, 0);
    }

    #[test]
    fn two_large_objects_do_not_fit() {
        init_logging();
        let instance = instance(
            square_figure(),
            vec![rect(120, 10, 180, 70), rect(200, 10, 260, 70)],
        );
        let mut optimizer = ETSOptimizer::new(instance, SearchPolicy::default());

        assert_eq!(optimizer.solve(), PackingResult::NotAllPlaced);
        assert_eq!(optimizer.stats.n_permutations_tried, 2);
        //every ordering places its first object and fails on the second
        assert_eq!(optimizer.stats.n_searches, 4);
    }

    #[test_case(vec![rect(120, 10, 160, 50), rect(200, 10, 230, 60)]; "40x40 first")]
    #[test_case(vec![rect(200, 10, 230, 60), rect(120, 10, 160, 50)]; "30x50 first")]
    fn two_small_objects_fit(objects: Vec<Polygon>) {
        let instance = instance(square_figure(), objects);
        let mut optimizer = ETSOptimizer::new(instance, SearchPolicy::default());

        let result = optimizer.solve();
        assert!(result.all_placed());
        assert_eq!(optimizer.stats.n_permutations_tried, 1);

        let placements = result.placements();
        assert_eq!(placements.len(), 2);
        for po in placements {
            assert!(all_inside(optimizer.instance.figure(), &po.shape));
        }
        let (a, b) = (&placements[0].shape, &placements[1].shape);
        assert!(!b.points().iter().any(|p| a.collides_with(p)));
        assert!(!a.points().iter().any(|p| b.collides_with(p)));
    }

    #[test_case(vec![rect(120, 10, 160, 50), rect(200, 10, 230, 60)]; "fitting pair")]
    #[test_case(vec![rect(120, 10, 180, 70), rect(200, 10, 260, 70)]; "oversized pair")]
    #[test_case(vec![rect(120, 10, 190, 40), rect(200, 10, 270, 40), rect(280, 10, 350, 40)]; "three strips")]
    fn verdict_is_independent_of_input_order(objects: Vec<Polygon>) {
        let forward = instance(square_figure(), objects.clone());
        let backward = instance(square_figure(), objects.into_iter().rev().collect());

        let verdict_fwd = ETSOptimizer::new(forward, SearchPolicy::default())
            .solve()
            .all_placed();
        let verdict_bwd = ETSOptimizer::new(backward, SearchPolicy::default())
            .solve()
            .all_placed();
        assert_eq!(verdict_fwd, verdict_bwd);
    }

    #[test]
    fn failed_ordering_leaves_nothing_behind() {
        let instance = instance(
            square_figure(),
            vec![rect(120, 10, 180, 70), rect(200, 10, 260, 70)],
        );
        let mut stats = SearchStats::default();
        assert!(place_in_order(&instance, &[0, 1], &SearchPolicy::default(), &mut stats).is_none());

        //a fresh attempt with a single object is unaffected by the failed one
        let placed = place_in_order(&instance, &[1], &SearchPolicy::default(), &mut stats).unwrap();
        assert_eq!(placed.len(), 1);
        assert_eq!(placed[0].shape, rect(1, 0, 61, 60));
        assert_eq!(instance.object(1), &rect(200, 10, 260, 70));
    }

    #[test_case(0; "seed 0")]
    #[test_case(1; "seed 1")]
    #[test_case(2; "seed 2")]
    fn object_strictly_smaller_than_rectangle_is_found(seed: u64) {
        let mut rng = SmallRng::seed_from_u64(seed);
        for _ in 0..10 {
            let (fx, fy) = (rng.random_range(0..50), rng.random_range(0..50));
            let (fw, fh) = (rng.random_range(3..60), rng.random_range(2..60));
            let figure = rect(fx, fy, fx + fw, fy + fh);

            let (ow, oh) = (rng.random_range(1..fw - 1), rng.random_range(1..fh));
            let (ox, oy) = (rng.random_range(150..250), rng.random_range(100..200));
            let object = rect(ox, oy, ox + ow, oy + oh);

            let mut stats = SearchStats::default();
            let po = search_alone(&figure, &object, &mut stats)
                .placed()
                .unwrap_or_else(|| panic!("{ow}x{oh} should fit in {fw}x{fh}"));
            assert!(all_inside(&figure, &po.shape));
        }
    }

    #[test]
    fn object_fits_in_hexagon() {
        let figure = Polygon::try_from(vec![
            (10, 60),
            (40, 110),
            (100, 110),
            (130, 60),
            (100, 10),
            (40, 10),
        ])
        .unwrap();
        let object = Polygon::try_from(vec![(200, 200), (200, 230), (225, 215)]).unwrap();
        let mut stats = SearchStats::default();

        let po = search_alone(&figure, &object, &mut stats).placed().unwrap();
        assert!(all_inside(&figure, &po.shape));
    }

    #[test_case(Some(1), false; "first offset only")]
    #[test_case(Some(2), true; "two offsets")]
    #[test_case(None, true; "unbounded")]
    fn offset_limit(max_offsets: Option<usize>, expect_feasible: bool) {
        let figure = square_figure();
        let detector = OverlapDetector::new(&figure, std::iter::empty(), CANVAS);
        let policy = SearchPolicy {
            max_offsets_per_object: max_offsets,
            max_permutations: None,
        };
        let mut stats = SearchStats::default();

        let result = find_translation(&detector, &rect(0, 0, 20, 20), 0, &policy, &mut stats);
        assert_eq!(result.is_feasible(), expect_feasible);
        assert!(stats.n_offsets_evaluated() <= max_offsets.unwrap_or(usize::MAX));
    }

    #[test]
    fn permutation_limit() {
        let instance = instance(
            square_figure(),
            vec![rect(120, 10, 180, 70), rect(200, 10, 260, 70)],
        );
        let policy = SearchPolicy {
            max_offsets_per_object: None,
            max_permutations: Some(1),
        };
        let mut optimizer = ETSOptimizer::new(instance, policy);

        assert_eq!(optimizer.solve(), PackingResult::NotAllPlaced);
        assert_eq!(optimizer.stats.n_permutations_tried, 1);
    }

    #[test]
    fn individual_mode_reports_each_object() {
        let instance = instance(
            square_figure(),
            vec![
                rect(120, 10, 180, 70),
                rect(200, 0, 350, 80),
                rect(200, 100, 260, 160),
            ],
        );
        let mut optimizer = ETSOptimizer::new(instance, SearchPolicy::default());

        let results = optimizer.solve_individually();
        let feasible = results.iter().map(|r| r.is_feasible()).collect::<Vec<_>>();
        assert_eq!(feasible, vec![true, false, true]);
        //both 60x60 objects are checked against the empty figure and land at the same spot
        assert_eq!(
            results[0].clone().placed().unwrap().shape,
            results[2].clone().placed().unwrap().shape
        );

        let solution = export::export_individual(
            &optimizer.instance,
            &results,
            std::time::Instant::now(),
        );
        assert_eq!(solution.verdict, ExtVerdict::NotPlaced);
        assert_eq!(solution.infeasible, vec![1]);
        assert_eq!(solution.placements.len(), 2);
    }

    fn ext_instance(contours: Vec<Vec<(i32, i32)>>) -> ExtInstance {
        ExtInstance {
            name: "ext".to_string(),
            image: ExtImage {
                width: 300,
                height: 200,
            },
            contours: contours.into_iter().map(ExtContour).collect(),
        }
    }

    #[test]
    fn seven_vertex_figure_has_no_verdict() {
        let ext = ext_instance(vec![
            vec![(0, 50), (20, 90), (60, 100), (100, 80), (110, 40), (80, 5), (30, 10)],
            vec![(150, 10), (150, 30), (170, 30), (170, 10)],
        ]);
        let err = ets::opt::run(&ext, &ETSConfig::default()).unwrap_err();
        assert!(matches!(err, PlacerError::InvalidFigureShape { n_vertices: 7, .. }));
    }

    #[test]
    fn figure_alone_has_no_verdict() {
        let ext = ext_instance(vec![vec![(0, 0), (0, 100), (100, 100), (100, 0)]]);
        let err = ets::opt::run(&ext, &ETSConfig::default()).unwrap_err();
        assert!(matches!(err, PlacerError::NoObjectsDetected));
    }

    #[test]
    fn far_off_image_contours_have_no_verdict() {
        let ext = ext_instance(vec![
            vec![
                (-2_000_000_000, 0),
                (-2_000_000_000, 100),
                (-1_999_999_900, 100),
                (-1_999_999_900, 0),
            ],
            vec![
                (2_000_000_000, 0),
                (2_000_000_000, 20),
                (2_000_000_020, 20),
                (2_000_000_020, 0),
            ],
        ]);
        let err = ets::opt::run(&ext, &ETSConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            PlacerError::ContourOutOfImage {
                contour_index: 0,
                ..
            }
        ));
    }

    #[test_case("../assets/square_one_object.json", true; "square one object")]
    #[test_case("../assets/two_large_objects.json", false; "two large objects")]
    #[test_case("../assets/mixed_objects.json", true; "mixed objects")]
    #[test_case("../assets/hexagon_one_object.json", true; "hexagon one object")]
    fn test_instance(instance_path: &str, expect_placed: bool) {
        init_logging();
        let ext_instance = io::read_instance(Path::new(instance_path)).unwrap();
        let config = ETSConfig::default();

        let run = ets::opt::run(&ext_instance, &config).unwrap();
        assert_eq!(run.outcome.all_placed(), expect_placed);

        let RunOutcome::Joint(result) = &run.outcome else {
            panic!("default mode packs jointly");
        };
        let solution = export::export_packing(&run.instance, result, std::time::Instant::now());
        let expected_verdict = match expect_placed {
            true => ExtVerdict::Placed,
            false => ExtVerdict::NotPlaced,
        };
        assert_eq!(solution.verdict, expected_verdict);
        assert_eq!(solution.objects.len(), run.instance.n_objects());

        let output = ETSOutput {
            instance: ext_instance,
            solution,
            stats: run.stats,
            config,
        };
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["name"], run.instance.name());
        assert!(json["solution"]["verdict"].is_string());
    }

    #[test]
    fn individual_mode_from_config() {
        let ext_instance = io::read_instance(Path::new("../assets/two_large_objects.json")).unwrap();
        let config = ETSConfig {
            mode: PlacementMode::Individual,
            ..ETSConfig::default()
        };
        let run = ets::opt::run(&ext_instance, &config).unwrap();
        //each 60x60 object fits on its own
        assert!(run.outcome.all_placed());
        assert_eq!(run.outcome.placements().len(), 2);
    }

    #[test]
    fn invalid_asset_has_no_verdict() {
        let ext_instance = io::read_instance(Path::new("../assets/heptagon_figure.json")).unwrap();
        let err = ets::opt::run(&ext_instance, &ETSConfig::default()).unwrap_err();
        assert!(matches!(err, PlacerError::InvalidFigureShape { .. }));
    }

    #[test]
    fn missing_and_unreadable_inputs() {
        let missing = io::read_instance(Path::new("../assets/does_not_exist.json")).unwrap_err();
        assert!(matches!(missing, PlacerError::InputNotFound(_)));

        let unreadable = io::read_instance(Path::new("Cargo.toml")).unwrap_err();
        assert!(matches!(unreadable, PlacerError::UnreadableInput { .. }));
    }

    #[test]
    fn instance_folder_is_listed_in_order() {
        let paths = io::collect_instance_paths(Path::new("../assets")).unwrap();
        let names = paths
            .iter()
            .filter_map(|p| p.file_stem()?.to_str())
            .collect::<Vec<_>>();
        assert_eq!(
            names,
            vec![
                "heptagon_figure",
                "hexagon_one_object",
                "mixed_objects",
                "square_one_object",
                "two_large_objects"
            ]
        );

        let single = io::collect_instance_paths(Path::new("../assets/mixed_objects.json")).unwrap();
        assert_eq!(single.len(), 1);
    }

    #[test]
    fn config_defaults_from_partial_json() {
        let config: ETSConfig =
            serde_json::from_str(r#"{ "mode": "individual", "search_policy": { "max_permutations": 3 } }"#)
                .unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(config.mode, PlacementMode::Individual);
        assert_eq!(config.max_figure_vertices, DEFAULT_MAX_FIGURE_VERTICES);
        assert_eq!(config.search_policy.max_permutations, Some(3));
        assert_eq!(config.search_policy.max_offsets_per_object, None);
    }
}
