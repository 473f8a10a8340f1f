use ndarray::{Array1, Array2, Axis, stack};
use rand::{SeedableRng, rngs::StdRng};
use rand_distr::{Distribution, Normal};
use vasco::pairwise::statistic_matrix;
use vasco::plot::heatmap;
use vasco::{MineParameters, Problem, Score, StatisticKind, Vasco};

/// Toy engine: every grid scores the squared Pearson correlation.
///
/// Only here to drive the pipeline; plug a real characteristic-matrix
/// estimator in its place.
fn pearson_engine(problem: &Problem, _: &MineParameters) -> Option<Score> {
    let n = problem.n() as f64;
    if n < 2.0 {
        return None;
    }
    let (x, y) = (problem.x(), problem.y());
    let (mx, my) = (x.sum() / n, y.sum() / n);
    let cov: f64 = x.iter().zip(y.iter()).map(|(a, b)| (a - mx) * (b - my)).sum();
    let vx: f64 = x.iter().map(|a| (a - mx).powi(2)).sum();
    let vy: f64 = y.iter().map(|b| (b - my).powi(2)).sum();
    if vx == 0.0 || vy == 0.0 {
        return None;
    }
    let r2 = cov * cov / (vx * vy);
    Score::from_vecs(vec![vec![r2; 3], vec![r2; 2]]).ok()
}

fn generate_table(size: usize, seed: u64) -> (Array2<f64>, Vec<&'static str>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let normal = Normal::new(0.0, 1.0).unwrap();
    let x: Array1<f64> = (0..size).map(|_| normal.sample(&mut rng)).collect();
    let noise: Array1<f64> = (0..size).map(|_| 0.2 * normal.sample(&mut rng)).collect();
    let linear = &x * 2.0 + &noise;
    let quadratic = x.mapv(|v| v * v) + &noise;
    let independent: Array1<f64> = (0..size).map(|_| normal.sample(&mut rng)).collect();
    let table = stack(
        Axis(1),
        &[x.view(), linear.view(), quadratic.view(), independent.view()],
    )
    .expect("columns share a length");
    (table, vec!["x", "linear", "quadratic", "independent"])
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let (table, labels) = generate_table(500, 21354);
    let params = MineParameters::default();

    let vasco = Vasco::load(pearson_engine);
    let problem = vasco.build_problem(Some(table.column(0)), Some(table.column(1)))?;
    let stats = vasco.compute_statistics(&problem)?;
    println!("x vs linear: {}", serde_json::to_string_pretty(&stats)?);

    let matrix = statistic_matrix(table.view(), &labels, StatisticKind::Mic, &params, vasco.engine())?;
    print!("{}", matrix.to_csv());

    heatmap(&matrix, "MIC", "mic_heatmap.png")?;
    println!("\nHeatmap saved under mic_heatmap.png");
    Ok(())
}
