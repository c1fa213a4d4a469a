use nnindex::point::{distance, random_points};
use nnindex::{AlgorithmLinear, BoundingBox, NearestNeighborIndex, Strategy, build_index, find_nearest_linear};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn test_matches_linear_random() {
    let bounds = BoundingBox::new([-1000.0, -1000.0], [1000.0, 1000.0]);
    let index_points = random_points(10_000, &bounds, 11);
    let query_points = random_points(1000, &bounds, 12);

    let index = build_index(index_points.clone());
    for q in &query_points {
        let expected = find_nearest_linear(q, &index_points).unwrap();
        let actual = index.find_nearest(q).unwrap();
        assert_eq!(
            distance(q, &actual),
            distance(q, &expected),
            "query {:?}: got {:?}, expected {:?}",
            q, actual, expected
        );
    }
}

#[test]
fn test_matches_linear_many_sizes() {
    let mut rng = StdRng::seed_from_u64(5);
    for n in 0..64 {
        let points: Vec<[f64; 2]> = (0..n)
            .map(|_| [rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0)])
            .collect();
        let index = build_index(points.clone());
        assert_eq!(index.len(), n);

        for _ in 0..20 {
            let q = [rng.gen_range(-12.0..12.0), rng.gen_range(-12.0..12.0)];
            match (index.find_nearest(&q), find_nearest_linear(&q, &points)) {
                (None, None) => assert_eq!(n, 0),
                (Some(a), Some(b)) => assert_eq!(distance(&q, &a), distance(&q, &b)),
                (a, b) => panic!("n = {}: tree {:?}, linear {:?}", n, a, b),
            }
        }
    }
}

#[test]
fn test_integer_grid_with_ties() {
    // Integer lattice points make many queries equidistant to several points
    let mut points = Vec::new();
    for x in -5..=5 {
        for y in -5..=5 {
            points.push([x as f64, y as f64]);
        }
    }
    let index = build_index(points.clone());

    for qx in -12..=12 {
        for qy in -12..=12 {
            let q = [qx as f64 * 0.5, qy as f64 * 0.5];
            let actual = index.find_nearest(&q).unwrap();
            let expected = find_nearest_linear(&q, &points).unwrap();
            assert!(points.contains(&actual));
            assert_eq!(distance(&q, &actual), distance(&q, &expected));
        }
    }
}

#[test]
fn test_duplicate_tolerance() {
    let bounds = BoundingBox::new([0.0, 0.0], [50.0, 50.0]);
    let base = random_points(300, &bounds, 21);
    let mut points = base.clone();
    points.extend_from_slice(&base);
    points.extend_from_slice(&base[..100]);

    let index = build_index(points.clone());
    assert_eq!(index.len(), 700);
    assert_eq!(index.algorithm().len(), 700);

    for q in random_points(200, &bounds, 22) {
        let actual = index.find_nearest(&q).unwrap();
        let expected = find_nearest_linear(&q, &points).unwrap();
        assert_eq!(distance(&q, &actual), distance(&q, &expected));
    }
    for p in &base {
        assert_eq!(index.find_nearest(p), Some(*p));
    }
}

#[test]
fn test_same_coordinate_on_axis() {
    // All points share x, so every x split has only ties
    let points: Vec<[f64; 2]> = (0..100).map(|i| [3.0, (i % 17) as f64]).collect();
    let index = build_index(points.clone());
    for q in [[3.0, 4.2], [0.0, 16.9], [10.0, -3.0], [3.0, 8.5]] {
        let actual = index.find_nearest(&q).unwrap();
        let expected = find_nearest_linear(&q, &points).unwrap();
        assert_eq!(distance(&q, &actual), distance(&q, &expected));
    }
}

#[test]
fn test_deterministic_queries() {
    let bounds = BoundingBox::new([-1.0, -1.0], [1.0, 1.0]);
    let index = build_index(random_points(2000, &bounds, 31));
    for q in random_points(100, &bounds, 32) {
        let first = index.find_nearest_index(&q);
        for _ in 0..5 {
            assert_eq!(index.find_nearest_index(&q), first);
        }
    }
}

#[test]
fn test_batch_matches_single() {
    let bounds = BoundingBox::new([0.0, 0.0], [100.0, 100.0]);
    let index = build_index(random_points(5000, &bounds, 41));
    let queries = random_points(1000, &bounds, 42);

    let batch = index.find_nearest_batch(&queries);
    assert_eq!(batch.len(), queries.len());
    for (q, result) in queries.iter().zip(&batch) {
        assert_eq!(*result, index.find_nearest(q));
    }
}

#[test]
fn test_strategies_agree() {
    let bounds = BoundingBox::new([-50.0, -50.0], [50.0, 50.0]);
    let points = random_points(3000, &bounds, 51);
    let tree = NearestNeighborIndex::with_strategy(points.clone(), Strategy::KdTree);
    let linear = NearestNeighborIndex::with_strategy(points.clone(), Strategy::Linear);
    let plain = NearestNeighborIndex::new(points, AlgorithmLinear);

    for q in random_points(300, &bounds, 52) {
        let (_, d_tree) = tree.find_nearest_with_distance(&q).unwrap();
        let (_, d_linear) = linear.find_nearest_with_distance(&q).unwrap();
        let (_, d_plain) = plain.find_nearest_with_distance(&q).unwrap();
        assert_eq!(d_tree, d_linear);
        assert_eq!(d_linear, d_plain);
    }
}

#[test]
fn test_queries_far_outside() {
    let bounds = BoundingBox::new([0.0, 0.0], [1.0, 1.0]);
    let points = random_points(500, &bounds, 61);
    let index = build_index(points.clone());
    for q in [[1e6, 1e6], [-1e6, 0.5], [0.5, -1e9], [1e12, -1e12]] {
        let actual = index.find_nearest(&q).unwrap();
        let expected = find_nearest_linear(&q, &points).unwrap();
        assert_eq!(distance(&q, &actual), distance(&q, &expected));
    }
}
