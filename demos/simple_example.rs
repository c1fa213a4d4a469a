//! Finds the nearest indexed point for a few query points.
//!
//! Usage: `cargo run --example simple_example [points.txt] [x y]...`
//!
//! Without a file the points below are indexed. Set `NNINDEX_STRATEGY=linear`
//! to use the brute-force search and `RUST_LOG=debug` to see what the index does.

use nnindex::{NearestNeighborIndex, Strategy};
use nnindex::point::read_points;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let strategy: Strategy = match std::env::var("NNINDEX_STRATEGY") {
        Ok(name) => name.parse()?,
        Err(_) => Strategy::default(),
    };

    let mut args = std::env::args().skip(1);
    let points = match args.next() {
        Some(path) => read_points::<2, _>(&path)?,
        None => vec![[1.0, 1.0], [2.0, 3.0], [4.0, 2.0], [5.0, 6.0], [6.0, 1.0]],
    };

    // Remaining arguments are query coordinates, two at a time
    let coords = args.map(|a| a.parse::<f64>()).collect::<Result<Vec<f64>, _>>()?;
    let queries = if coords.is_empty() {
        vec![[3.0, 4.0], [0.0, 0.0], [6.0, 5.0]]
    } else {
        nnindex::point::points_from_flat::<2>(&coords)?
    };

    let index = NearestNeighborIndex::with_strategy(points, strategy);
    println!("Indexed {} points with the {} strategy", index.len(), index.strategy());

    for query in &queries {
        match index.find_nearest_with_distance(query) {
            Some((nearest, dist)) => println!(
                "The nearest point to ({}, {}) is ({}, {}) at distance {:.4}",
                query[0], query[1], nearest[0], nearest[1], dist
            ),
            None => println!("There are no points near ({}, {})", query[0], query[1]),
        }
    }

    Ok(())
}
