use crate::algorithm::{Algorithm, Strategy};
use crate::bounds::BoundingBox;
use crate::index::NearestNeighborIndex;
use crate::point::{points_from_flat, random_points};
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen_rayon::init_thread_pool;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn init_threads(n: usize) -> js_sys::Promise {
    init_thread_pool(n)
}

#[wasm_bindgen(typescript_custom_section)]
const TS_STRATEGIES: &'static str = r#"
export type Strategy = "kdtree" | "linear";
"#;

/// A 2D nearest-neighbor index for use from JavaScript.
#[wasm_bindgen]
pub struct NearestIndex2D {
    inner: NearestNeighborIndex<2, Algorithm<2>>,
}

#[wasm_bindgen]
impl NearestIndex2D {
    /// Indexes flat coordinates `[x0, y0, x1, y1, ...]`.
    ///
    /// `strategy` is `"kdtree"` (default) or `"linear"`.
    #[wasm_bindgen(constructor)]
    pub fn new(points: &[f64], strategy: Option<String>) -> Result<NearestIndex2D, JsValue> {
        let strategy = parse_strategy(strategy)?;
        let points = points_from_flat::<2>(points).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(NearestIndex2D {
            inner: NearestNeighborIndex::with_strategy(points, strategy),
        })
    }

    /// Indexes `count` uniformly distributed points in the given box.
    #[wasm_bindgen(js_name = random)]
    pub fn random(
        count: usize,
        min_x: f64,
        min_y: f64,
        max_x: f64,
        max_y: f64,
        strategy: Option<String>,
    ) -> Result<NearestIndex2D, JsValue> {
        let strategy = parse_strategy(strategy)?;
        let bounds = BoundingBox::new([min_x, min_y], [max_x, max_y]);
        let points = random_points(count, &bounds, get_seed());
        Ok(NearestIndex2D {
            inner: NearestNeighborIndex::with_strategy(points, strategy),
        })
    }

    /// Returns `[x, y]` of the closest point, or `undefined` if the index is empty.
    #[wasm_bindgen(js_name = findNearest)]
    pub fn find_nearest(&self, x: f64, y: f64) -> Option<Box<[f64]>> {
        self.inner.find_nearest(&[x, y]).map(|p| Box::new(p) as Box<[f64]>)
    }

    /// Returns the position of the closest point in the input, or `undefined`.
    #[wasm_bindgen(js_name = findNearestIndex)]
    pub fn find_nearest_index(&self, x: f64, y: f64) -> Option<usize> {
        self.inner.find_nearest_index(&[x, y])
    }

    /// Answers flat queries `[x0, y0, x1, y1, ...]` with flat results; both
    /// coordinates are `NaN` where there is no result.
    #[wasm_bindgen(js_name = findNearestBatch)]
    pub fn find_nearest_batch(&self, queries: &[f64]) -> Result<Vec<f64>, JsValue> {
        let queries = points_from_flat::<2>(queries).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(self
            .inner
            .find_nearest_batch(&queries)
            .into_iter()
            .flat_map(|p| p.unwrap_or([f64::NAN; 2]))
            .collect())
    }

    #[wasm_bindgen(getter)]
    pub fn count(&self) -> usize {
        self.inner.len()
    }

    #[wasm_bindgen(getter)]
    pub fn strategy(&self) -> String {
        self.inner.strategy().to_string()
    }

    /// Flat coordinates of the indexed points.
    #[wasm_bindgen(getter)]
    pub fn points(&self) -> Vec<f64> {
        self.inner.points().iter().flatten().copied().collect()
    }
}

fn parse_strategy(strategy: Option<String>) -> Result<Strategy, JsValue> {
    match strategy {
        Some(s) => s.parse().map_err(|e: crate::error::IndexError| JsValue::from_str(&e.to_string())),
        None => Ok(Strategy::default()),
    }
}

fn get_seed() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        (js_sys::Math::random() * 4294967296.0) as u64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        123456789
    }
}
