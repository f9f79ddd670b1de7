//! End-to-end planning scenarios.

use u_shard::jobs::{job_count, JobCountConfig};
use u_shard::matrix::{assemble, plan_projects, StaticWeights};
use u_shard::packing::{Batch, BatchConfig, BatchPlanner, Item};

fn items(prefix: &str, weights: &[u64]) -> Vec<Item> {
    weights
        .iter()
        .enumerate()
        .map(|(i, &w)| Item::new(format!("{prefix}{i}"), w))
        .collect()
}

fn weights(batches: &[Batch]) -> Vec<u64> {
    batches.iter().map(|b| b.weight).collect()
}

#[test]
fn even_packing_splits_into_two_equal_batches() {
    let config = BatchConfig::default()
        .with_max_weight_per_batch(50)
        .with_heavy_threshold(0)
        .with_jobs(1, 10);
    let plan = BatchPlanner::plan(items("f", &[30, 25, 20, 15]), &config).unwrap();

    assert_eq!(weights(&plan.batches), vec![45, 45]);
    assert_eq!(plan.batches[0].items, vec!["f0", "f3"]);
    assert_eq!(plan.batches[1].items, vec!["f1", "f2"]);
}

#[test]
fn heavy_item_is_isolated() {
    let config = BatchConfig::default()
        .with_max_weight_per_batch(25)
        .with_heavy_threshold(25);
    let input = vec![
        Item::new("heavy", 30),
        Item::new("f1", 10),
        Item::new("f2", 10),
    ];
    let plan = BatchPlanner::plan(input, &config).unwrap();

    assert_eq!(plan.len(), 2);
    assert_eq!(plan.batches[0].items, vec!["heavy"]);
    assert_eq!(plan.batches[0].weight, 30);
    assert_eq!(plan.batches[1].items, vec!["f1", "f2"]);
    assert_eq!(plan.batches[1].weight, 20);
}

#[test]
fn short_plan_is_padded_with_empty_batches() {
    let config = BatchConfig::default()
        .with_max_weight_per_batch(50)
        .with_jobs(3, 10);
    let plan = BatchPlanner::plan(items("f", &[10]), &config).unwrap();

    assert_eq!(plan.len(), 3);
    assert_eq!(plan.batches[0].items, vec!["f0"]);
    assert_eq!(weights(&plan.batches), vec![10, 0, 0]);
    assert!(plan.batches[1].is_empty());
    assert!(plan.batches[2].is_empty());
}

#[test]
fn excess_batches_are_merged_down() {
    let config = BatchConfig::default()
        .with_max_weight_per_batch(10)
        .with_jobs(1, 5);
    let plan = BatchPlanner::plan(items("f", &[10; 20]), &config).unwrap();

    assert_eq!(plan.len(), 5);
    assert_eq!(weights(&plan.batches), vec![40; 5]);
    assert_eq!(plan.batches[0].items, vec!["f0", "f19", "f9", "f10"]);
    assert_eq!(plan.batches[1].items, vec!["f1", "f18", "f8", "f11"]);
    assert_eq!(plan.batches[4].items, vec!["f4", "f15", "f5", "f14"]);
}

#[test]
fn unweighted_job_count_rounds_up() {
    let config = JobCountConfig::default()
        .with_items_per_job(50)
        .with_jobs(1, 10);
    assert_eq!(job_count(101, &config).unwrap(), 3);
}

#[test]
fn matrix_numbers_batches_from_one_per_project() {
    let provider = StaticWeights::new()
        .with_project("api", vec![("a".into(), Some(40)), ("b".into(), Some(40))])
        .with_project("web", vec![("x".into(), Some(1))]);
    let config = BatchConfig::default().with_max_weight_per_batch(50);

    let matrix = assemble(plan_projects(&["api", "web"], &provider, &config).unwrap());

    let rows: Vec<(&str, usize)> = matrix
        .iter()
        .map(|e| (e.project.as_str(), e.batch))
        .collect();
    assert_eq!(rows, vec![("api", 1), ("api", 2), ("web", 1)]);
    assert_eq!(matrix.include[2].items, Some(vec!["x".to_string()]));
}
