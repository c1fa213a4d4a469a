use nnindex::point::random_points;
use nnindex::{BoundingBox, build_index};
use plotters::prelude::*;

const NUM_POINTS: usize = 40;
const NUM_QUERIES: usize = 400;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filename = "nearest_neighbors.svg";
    let root = SVGBackend::new(filename, (1024, 1024)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .build_cartesian_2d(0.0..100.0, 0.0..100.0)?;

    let bounds = BoundingBox::new([0.0, 0.0], [100.0, 100.0]);
    let index = build_index(random_points(NUM_POINTS, &bounds, 1));
    let queries = random_points(NUM_QUERIES, &bounds, 2);
    let nearest = index.find_nearest_batch(&queries);

    // Draw bounding box
    chart.draw_series(std::iter::once(PathElement::new(
        vec![(0.0, 0.0), (100.0, 0.0), (100.0, 100.0), (0.0, 100.0), (0.0, 0.0)],
        BLACK.stroke_width(2),
    )))?;

    // Connect every query to its nearest indexed point
    for (q, n) in queries.iter().zip(&nearest) {
        if let Some(n) = n {
            chart.draw_series(std::iter::once(PathElement::new(
                vec![(q[0], q[1]), (n[0], n[1])],
                BLUE.mix(0.3),
            )))?;
        }
    }
    chart.draw_series(queries.iter().map(|q| Circle::new((q[0], q[1]), 2, BLUE.filled())))?;

    // Draw indexed points
    chart.draw_series(index.points().iter().map(|p| Circle::new((p[0], p[1]), 5, RED.filled())))?;

    root.present()?;
    println!("Output saved to {}", filename);
    Ok(())
}
