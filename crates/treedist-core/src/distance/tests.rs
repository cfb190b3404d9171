use super::*;

fn edges(raw: &[[i64; 2]]) -> Vec<Vec<i64>> {
    raw.iter().map(|e| e.to_vec()).collect()
}

fn complete(n: usize) -> Vec<Vec<i64>> {
    let mut out = Vec::new();
    for i in 0..n as i64 {
        for j in (i + 1)..n as i64 {
            out.push(vec![i, j]);
        }
    }
    out
}

/// Deterministic pseudo-random tree: node i attaches to an earlier node
fn scrambled_tree(n: usize, seed: u64) -> Vec<Vec<i64>> {
    let mut state = seed;
    (1..n)
        .map(|i| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            let parent = (state >> 33) as usize % i;
            if state & 1 == 0 {
                vec![i as i64, parent as i64]
            } else {
                vec![parent as i64, i as i64]
            }
        })
        .collect()
}

#[test]
fn test_single_node() {
    assert_eq!(sum_distances(1, &[]), vec![0]);
}

#[test]
fn test_two_nodes() {
    assert_eq!(sum_distances(2, &edges(&[[1, 0]])), vec![1, 1]);
}

#[test]
fn test_sample_tree() {
    let input = edges(&[[0, 1], [0, 2], [2, 3], [2, 4], [2, 5]]);
    assert_eq!(sum_distances(6, &input), vec![8, 12, 6, 10, 10, 10]);
}

#[test]
fn test_zero_nodes() {
    assert!(sum_distances(0, &[]).is_empty());
}

#[test]
fn test_complete_graph_every_sum_is_n_minus_one() {
    for n in 1..7 {
        let sums = sum_distances(n, &complete(n));
        assert_eq!(sums, vec![(n - 1) as u64; n], "n = {n}");
    }
}

#[test]
fn test_bfs_and_dfs_agree_on_trees() {
    for (n, seed) in [(2, 1), (5, 7), (9, 42), (16, 2024), (23, 99)] {
        let input = scrambled_tree(n, seed);
        let bfs = compute(n, &input, &DistanceOptions::default()).unwrap();
        let dfs = compute(
            n,
            &input,
            &DistanceOptions {
                strategy: Strategy::Dfs,
                strict: true,
            },
        )
        .unwrap();
        assert_eq!(bfs.sums, dfs.sums, "n = {n}, seed = {seed}");
        assert_eq!(dfs.unreachable_pairs, 0);
    }
}

#[test]
fn test_permissive_skips_malformed_edges() {
    let input = vec![vec![0, 1], vec![1], vec![1, 2, 3], vec![1, 2]];
    let report = compute(3, &input, &DistanceOptions::default()).unwrap();
    assert_eq!(report.sums, vec![3, 2, 3]);
    assert_eq!(report.skipped_edges.len(), 2);
}

#[test]
fn test_sum_distances_tolerates_every_bad_edge_kind() {
    let input = vec![vec![0, 1], vec![], vec![1, 2, 3], vec![1, -2], vec![1, 9], vec![1, 2]];
    assert_eq!(sum_distances(3, &input), vec![3, 2, 3]);
}

#[test]
fn test_permissive_disconnected_undercounts() {
    let input = edges(&[[0, 1], [2, 3]]);
    let report = compute(4, &input, &DistanceOptions::default()).unwrap();
    assert_eq!(report.sums, vec![1, 1, 1, 1]);
    assert_eq!(report.unreachable_pairs, 8);
}

#[test]
fn test_permissive_disconnected_dfs_matches_bfs() {
    let input = edges(&[[0, 1], [2, 3], [3, 4]]);
    let dfs = compute(
        5,
        &input,
        &DistanceOptions {
            strategy: Strategy::Dfs,
            strict: false,
        },
    )
    .unwrap();
    assert_eq!(dfs.sums, sum_distances(5, &input));
}

#[test]
fn test_strict_rejects_disconnected() {
    let input = edges(&[[0, 1], [2, 3]]);
    for strategy in [Strategy::Bfs, Strategy::Dfs] {
        let err = compute(4, &input, &DistanceOptions { strategy, strict: true }).unwrap_err();
        assert!(matches!(
            err,
            TreedistError::Disconnected {
                root: 0,
                unreachable: 2
            }
        ));
    }
}

#[test]
fn test_strict_rejects_malformed_edge() {
    let input = vec![vec![0, 1], vec![2]];
    let err = compute(
        3,
        &input,
        &DistanceOptions {
            strategy: Strategy::Bfs,
            strict: true,
        },
    )
    .unwrap_err();
    assert!(matches!(err, TreedistError::MalformedEdge { index: 1, arity: 1 }));
}

#[test]
fn test_out_of_range_is_skipped_when_permissive() {
    let input = edges(&[[0, 1], [1, 7]]);
    let report = compute(2, &input, &DistanceOptions::default()).unwrap();
    assert_eq!(report.sums, vec![1, 1]);
    assert_eq!(report.skipped_edges[0].index, 1);
}

#[test]
fn test_cyclic_input_terminates() {
    let input = edges(&[[0, 1], [1, 2], [2, 0], [2, 3]]);
    let bfs = compute(4, &input, &DistanceOptions::default()).unwrap();
    let dfs = compute(
        4,
        &input,
        &DistanceOptions {
            strategy: Strategy::Dfs,
            strict: false,
        },
    )
    .unwrap();
    assert_eq!(bfs.sums.len(), 4);
    assert_eq!(dfs.sums.len(), 4);
}

#[test]
fn test_options_from_config() {
    let config = DistanceConfig {
        strict_mode: true,
        strategy: Strategy::Dfs,
        ..Default::default()
    };
    let opts = DistanceOptions::from(&config);
    assert!(opts.strict);
    assert_eq!(opts.strategy, Strategy::Dfs);
}

#[test]
fn test_report_serializes() {
    let report = compute(2, &[vec![0, 1], vec![5]], &DistanceOptions::default()).unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["strategy"], "bfs");
    assert_eq!(json["sums"], serde_json::json!([1, 1]));
    assert_eq!(json["skipped_edges"][0]["index"], 1);
    assert_eq!(json["skipped_edges"][0]["reason"], "arity");
    assert_eq!(json["skipped_edges"][0]["arity"], 1);
}
