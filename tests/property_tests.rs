//! Property tests for board invariants.

use proptest::prelude::*;

use graph_game::core::{Action, GameConfig, NodeId};
use graph_game::game::GraphGame;
use graph_game::graph::BASE_TOPOLOGY;

fn seeded(seed: u64) -> GraphGame {
    GraphGame::from_config(GameConfig::default().with_seed(seed)).unwrap()
}

proptest! {
    /// Randomization only ever raises weight-1 edges, and never adds or removes edges.
    #[test]
    fn prop_randomization_keeps_edges(seed in any::<u64>()) {
        let game = seeded(seed);
        for from in NodeId::all(11) {
            for to in NodeId::all(11) {
                let base = BASE_TOPOLOGY[from.index()][to.index()];
                let now = game.graph().weight(from, to);
                prop_assert_eq!(base == 0, now == 0);
                prop_assert!(now <= 3);
            }
        }
    }

    /// Skill output: target plus two distinct non-start, non-target nodes,
    /// each column left holding only 0 or 3 with its zero pattern intact.
    #[test]
    fn prop_skill_upgrades_three_columns(seed in any::<u64>(), target in 1u8..11) {
        let mut game = seeded(seed);
        let before = game.graph().clone();

        let affected = game.apply_skill(NodeId(target)).unwrap();

        prop_assert_eq!(affected.len(), 3);
        prop_assert_eq!(affected[0], NodeId(target));
        for extra in &affected[1..] {
            prop_assert_ne!(*extra, NodeId(target));
            prop_assert!(!extra.is_start());
        }
        prop_assert_ne!(affected[1], affected[2]);

        for col in NodeId::all(11) {
            for (b, a) in before.column(col).zip(game.graph().column(col)) {
                if affected.contains(&col) {
                    prop_assert_eq!(a, if b == 0 { 0 } else { 3 });
                } else {
                    prop_assert_eq!(a, b);
                }
            }
        }
    }

    /// Blocking twice is the same as blocking once.
    #[test]
    fn prop_one_way_idempotent(
        seed in any::<u64>(),
        node in prop::sample::select(vec![4u8, 5, 6, 7]),
    ) {
        let mut once = seeded(seed);
        let mut twice = seeded(seed);

        once.on_traverse(NodeId(node));
        twice.on_traverse(NodeId(node));
        twice.on_traverse(NodeId(node));

        prop_assert_eq!(once.graph(), twice.graph());
    }

    /// Without skill, each accepted step adds exactly the pre-move edge weight and one step.
    #[test]
    fn prop_walk_accounting(
        seed in any::<u64>(),
        choices in prop::collection::vec(any::<prop::sample::Index>(), 1..30),
    ) {
        let mut game = seeded(seed);
        let end_nodes = game.end_nodes();

        for choice in choices {
            if game.is_done() {
                break;
            }
            let here = game.current_node();
            let next = game.get_next_nodes(here).unwrap();
            prop_assert!(!next.is_empty());
            let pick = next[choice.index(next.len())];

            let points = game.points();
            let steps = game.steps();
            let weight = game.graph().weight(here, pick.node);
            prop_assert_eq!(weight, pick.points);

            let obs = game.step(&Action::new(pick.node)).unwrap();

            prop_assert_eq!(obs.points, points + u32::from(weight));
            prop_assert_eq!(game.steps(), steps + 1);
            prop_assert_eq!(obs.cur_node, pick.node);
            prop_assert_eq!(obs.done, end_nodes.contains(&pick.node));
            prop_assert_eq!(game.end_nodes(), end_nodes.clone());
        }
    }

    /// Rejected moves change nothing when no skill is requested.
    #[test]
    fn prop_invalid_move_is_inert(seed in any::<u64>(), target in 0u8..16) {
        let mut game = seeded(seed);
        let next = game.get_next_nodes(NodeId(0)).unwrap();
        let valid = next.iter().any(|n| n.node == NodeId(target));
        prop_assume!(!valid);

        let graph = game.graph().clone();
        let status = game.status().clone();

        prop_assert!(game.step(&Action::new(NodeId(target))).is_err());
        prop_assert_eq!(game.graph(), &graph);
        prop_assert_eq!(game.status(), &status);
    }
}
