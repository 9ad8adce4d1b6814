//! Tests for path navigation, descendant search and shared payloads

use std::collections::HashSet;

use generational_arena::Index;
use rstest::{fixture, rstest};

use gss::domain::{DomainError, Entry, GraphArena, GraphBuilder, NodeId};
use gss::util::testing::init_test_setup;

#[fixture]
fn scenario() -> GraphArena<String> {
    init_test_setup();
    GraphBuilder::new()
        .build(vec![
            Entry::root("1", "1".to_string()),
            Entry::child("2", "2".to_string(), "1"),
            Entry::child("4", "4".to_string(), "1"),
            Entry::child("2", "2".to_string(), "4"),
            Entry::child("5", "5".to_string(), "2"),
            Entry::child("3", "3".to_string(), "2"),
        ])
        .unwrap()
}

/// Builds `layers` layers of `width` nodes where every node is a child of
/// every node in the layer above. The number of root-to-leaf paths is
/// `width ^ layers`, the number of nodes `1 + width * layers`.
fn lattice(layers: usize, width: usize) -> GraphArena<usize> {
    let mut entries = vec![Entry::root("top", 0)];
    let mut previous = vec!["top".to_string()];
    for layer in 0..layers {
        let current: Vec<String> = (0..width).map(|i| format!("n{}_{}", layer, i)).collect();
        for key in &current {
            for parent in &previous {
                entries.push(Entry::child(key.clone(), layer + 1, parent.clone()));
            }
        }
        previous = current;
    }
    GraphBuilder::new().build(entries).unwrap()
}

fn root(graph: &GraphArena<String>) -> NodeId {
    graph.roots()[0]
}

fn stale_id() -> NodeId {
    Index::from_raw_parts(4096, 7)
}

// ============================================================
// get_descendant
// ============================================================

#[rstest]
fn given_scenario_when_getting_2_3_then_returns_node_3(scenario: GraphArena<String>) {
    let found = scenario.get_descendant(root(&scenario), "2/3");

    assert_eq!(found, scenario.lookup("3"));
}

#[rstest]
#[case::direct_child("4", "4")]
#[case::through_shared("4/2", "2")]
#[case::deep("4/2/5", "5")]
#[case::shared_first("2/5", "5")]
fn given_existing_chain_when_getting_then_matches_manual_child_lookup(
    scenario: GraphArena<String>,
    #[case] path: &str,
    #[case] expected_key: &str,
) {
    let mut manual = root(&scenario);
    for segment in path.split('/') {
        manual = scenario.child_by_key(manual, segment).unwrap();
    }

    let found = scenario.get_descendant(root(&scenario), path);

    assert_eq!(found, Some(manual));
    assert_eq!(scenario.key(manual), Some(expected_key));
}

#[rstest]
#[case::unknown_key("9")]
#[case::grandchild_is_not_child("3")]
#[case::dead_end("2/3/5")]
#[case::wrong_branch("4/5")]
#[case::empty_path("")]
#[case::trailing_separator("2/")]
#[case::start_key_not_a_child("1/2")]
fn given_missing_chain_when_getting_then_returns_none(
    scenario: GraphArena<String>,
    #[case] path: &str,
) {
    assert_eq!(scenario.get_descendant(root(&scenario), path), None);
}

#[rstest]
fn given_stale_start_when_getting_then_returns_none(scenario: GraphArena<String>) {
    assert_eq!(scenario.get_descendant(stale_id(), "2"), None);
}

#[rstest]
fn given_inner_start_when_getting_then_path_is_relative(scenario: GraphArena<String>) {
    let four = scenario.lookup("4").unwrap();

    assert_eq!(scenario.get_descendant(four, "2/3"), scenario.lookup("3"));
}

// ============================================================
// find_descendant
// ============================================================

#[rstest]
fn given_scenario_when_finding_5_then_returns_node_5(scenario: GraphArena<String>) {
    assert_eq!(scenario.find_descendant(root(&scenario), "5"), scenario.lookup("5"));
}

#[rstest]
fn given_key_not_below_start_when_finding_then_returns_none(scenario: GraphArena<String>) {
    let two = scenario.lookup("2").unwrap();

    assert_eq!(scenario.find_descendant(two, "4"), None);
    assert_eq!(scenario.find_descendant(root(&scenario), "missing"), None);
}

#[rstest]
fn given_start_key_when_finding_then_start_is_not_a_candidate(scenario: GraphArena<String>) {
    assert_eq!(scenario.find_descendant(root(&scenario), "1"), None);
}

#[rstest]
fn given_stale_start_when_finding_then_returns_none(scenario: GraphArena<String>) {
    assert_eq!(scenario.find_descendant(stale_id(), "5"), None);
}

#[rstest]
fn given_diamond_when_walking_then_each_node_is_visited_once(scenario: GraphArena<String>) {
    let mut walk = scenario.walk(root(&scenario));
    let mut seen = Vec::new();
    for (idx, _) in walk.by_ref() {
        seen.push(idx);
    }

    let distinct: HashSet<_> = seen.iter().copied().collect();
    assert_eq!(seen.len(), distinct.len());
    assert_eq!(seen.len(), 5);
    assert_eq!(walk.visited_count(), 5);
}

#[rstest]
fn given_scenario_when_walking_then_order_is_preorder_left_to_right(scenario: GraphArena<String>) {
    let order: Vec<&str> = scenario
        .walk(root(&scenario))
        .map(|(_, node)| node.key())
        .collect();

    assert_eq!(order, vec!["1", "2", "5", "3", "4"]);
}

#[rstest]
fn given_lattice_with_exponential_paths_when_searching_then_cost_is_linear_in_nodes() {
    init_test_setup();
    let graph = lattice(12, 3);
    let top = graph.roots()[0];

    let visited = graph.walk(top).count();
    assert_eq!(visited, 1 + 3 * 12);
    assert_eq!(graph.descendants(top).count(), 3 * 12);

    assert_eq!(graph.find_descendant(top, "n11_2"), graph.lookup("n11_2"));
    assert_eq!(graph.find_descendant(top, "absent"), None);
}

// ============================================================
// contents
// ============================================================

#[rstest]
fn given_contents_set_via_one_path_when_reading_via_another_then_change_is_visible(
    mut scenario: GraphArena<String>,
) {
    let start = root(&scenario);
    let three = scenario.get_descendant(start, "2/3").unwrap();

    let previous = scenario.set_contents(three, "three".to_string()).unwrap();

    assert_eq!(previous, "3");
    let via_four = scenario.get_descendant(start, "4/2/3").unwrap();
    assert_eq!(scenario.contents(via_four).map(String::as_str), Some("three"));
}

#[rstest]
fn given_contents_mut_when_editing_then_every_parent_sees_edit(mut scenario: GraphArena<String>) {
    let two = scenario.lookup("2").unwrap();

    scenario.contents_mut(two).unwrap().push_str("-merged");

    for &parent in scenario.parents(two) {
        let child = scenario.child_by_key(parent, "2").unwrap();
        assert_eq!(scenario.contents(child).map(String::as_str), Some("2-merged"));
    }
}

#[rstest]
fn given_stale_node_when_setting_contents_then_errors(mut scenario: GraphArena<String>) {
    let result = scenario.set_contents(stale_id(), "x".to_string());

    assert_eq!(result, Err(DomainError::UnknownNode(stale_id())));
}

// ============================================================
// diagnostics
// ============================================================

#[rstest]
fn given_scenario_when_measuring_then_depth_follows_longest_chain(scenario: GraphArena<String>) {
    assert_eq!(scenario.depth(root(&scenario)), 4);
    assert_eq!(scenario.depth(scenario.lookup("2").unwrap()), 2);
}

#[rstest]
fn given_scenario_when_collecting_leaves_then_shared_leaves_appear_once(scenario: GraphArena<String>) {
    let leaves: Vec<&str> = scenario
        .leaf_nodes(root(&scenario))
        .into_iter()
        .filter_map(|idx| scenario.key(idx))
        .collect();

    assert_eq!(leaves, vec!["5", "3"]);
}

#[rstest]
fn given_scenario_when_listing_branches_then_every_path_is_navigable(scenario: GraphArena<String>) {
    let start = root(&scenario);
    let branches = scenario.branches(start);

    assert_eq!(branches.len(), 4);
    for branch in &branches {
        assert_eq!(branch[0], start);
        let path: Vec<&str> = branch[1..]
            .iter()
            .filter_map(|&idx| scenario.key(idx))
            .collect();
        assert_eq!(
            scenario.get_descendant(start, &path.join("/")),
            branch.last().copied()
        );
    }
}

fn chain(length: usize) -> GraphArena<usize> {
    let mut entries = vec![Entry::root("n0", 0)];
    for i in 1..length {
        entries.push(Entry::child(format!("n{}", i), i, format!("n{}", i - 1)));
    }
    GraphBuilder::new().build(entries).unwrap()
}

#[rstest]
fn given_very_long_chain_when_measuring_then_depth_is_chain_length() {
    // Arrange
    init_test_setup();
    const LENGTH: usize = 200_000;
    let graph = chain(LENGTH);
    let top = graph.roots()[0];

    // Act
    let depth = graph.depth(top);

    // Assert
    assert_eq!(depth, LENGTH);
    assert_eq!(graph.leaf_nodes(top), vec![graph.lookup("n199999").unwrap()]);
    assert_eq!(graph.branches(top).len(), 1);
}
