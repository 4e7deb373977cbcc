// tests/unit_sampler.rs
//! Statistical properties of the random-surfer estimate.

use linkrank_core::graph::rank::{pagerank, sampler};
use linkrank_core::{LinkGraph, RankEngine, RankParams};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn corpus0() -> LinkGraph {
    LinkGraph::from_links([
        ("1.html", vec!["2.html"]),
        ("2.html", vec!["1.html", "3.html"]),
        ("3.html", vec!["2.html", "4.html"]),
        ("4.html", vec!["2.html"]),
    ])
    .unwrap()
}

#[allow(clippy::cast_precision_loss)]
fn mean_deviation(graph: &LinkGraph, samples: usize, trials: u64) -> f64 {
    let exact = pagerank::estimate(graph, &RankParams::new().with_threshold(1e-12)).unwrap();
    let total: f64 = (0..trials)
        .map(|seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            let est = sampler::estimate_with_rng(graph, 0.85, samples, &mut rng).unwrap();
            est.max_deviation(&exact)
        })
        .sum();
    total / trials as f64
}

#[test]
fn test_sum_is_exact() {
    let ranks = sampler::estimate(&corpus0(), &RankParams::new().with_seed(11)).unwrap();
    assert!((ranks.total() - 1.0).abs() < 1e-12);
    assert!(ranks.iter().all(|(_, r)| r >= 0.0));
}

#[test]
fn test_more_samples_less_error() {
    let g = corpus0();
    let coarse = mean_deviation(&g, 100, 5);
    let fine = mean_deviation(&g, 100_000, 5);
    assert!(fine < coarse, "fine {fine} vs coarse {coarse}");
    assert!(fine < 0.02, "fine {fine}");
}

#[test]
fn test_two_cycle_is_even() {
    let g = LinkGraph::from_links([("A", vec!["B"]), ("B", vec!["A"])]).unwrap();
    for d in [0.2, 0.85] {
        let params = RankParams::new().with_damping(d).with_seed(5);
        let ranks = sampler::estimate(&g, &params).unwrap();
        assert!((ranks.get("A").unwrap() - 0.5).abs() < 0.05);
    }
}

#[test]
fn test_engine_estimates_agree() {
    let params = RankParams::new().with_samples(50_000).with_seed(2024);
    let result = RankEngine::run(&corpus0(), &params).unwrap();
    assert!(result.max_deviation() < 0.03, "{}", result.max_deviation());
}

#[test]
fn test_engine_validates_first() {
    let params = RankParams::new().with_samples(0);
    assert!(RankEngine::run(&corpus0(), &params).is_err());
}
