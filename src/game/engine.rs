//! The graph game engine.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::env::Environment;
use super::one_way::OneWayPairs;
use super::status::GameStatus;
use crate::core::{Action, GameConfig, GameError, GameRng, NodeId, Observation, Result};
use crate::graph::{
    NextNodes, WeightMatrix, MAX_WEIGHT, ONE_WAY_PAIRS, SKILL_EXTRA_NODES, THREE_POINT_CANDIDATES,
    TWO_POINT_CANDIDATES,
};

/// Nodes the randomizer promoted at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusNodes {
    /// Incoming weight-1 edges became 2.
    pub two_point: NodeId,
    /// Incoming weight-1 edges became 3.
    pub three_point: NodeId,
}

/// A single-player traversal game.
///
/// The player starts at node 0 and walks directed edges, collecting each
/// edge's weight, until reaching a node with no outgoing edges.
///
/// ## Example
///
/// ```
/// use graph_game::core::{Action, GameConfig, NodeId};
/// use graph_game::game::GraphGame;
///
/// let mut game = GraphGame::from_config(GameConfig::default().with_seed(42)).unwrap();
/// let obs = game.step(&Action::new(NodeId(2))).unwrap();
///
/// assert_eq!(obs.cur_node, NodeId(2));
/// assert!(!obs.done);
/// ```
pub struct GraphGame {
    config: GameConfig,
    graph: WeightMatrix,
    rng: GameRng,
    one_way: OneWayPairs,
    /// Frozen after randomization; later mutations never empty a row.
    end_nodes: FxHashSet<NodeId>,
    bonus: BonusNodes,
    status: GameStatus,
}

impl GraphGame {
    /// Create a game on a board of `graph_size` nodes with a fresh seed.
    ///
    /// Only the built-in 11-node board is supported.
    pub fn new(graph_size: usize) -> Result<Self> {
        Self::from_config(GameConfig::default().with_graph_size(graph_size))
    }

    /// Create a game from a configuration.
    pub fn from_config(config: GameConfig) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }

    /// Create a game drawing all randomness from `rng`.
    ///
    /// `config.seed` is ignored.
    pub fn with_rng(config: GameConfig, mut rng: GameRng) -> Result<Self> {
        config.validate()?;

        let mut graph = WeightMatrix::base();
        let bonus = randomize(&mut graph, &mut rng);
        let one_way = OneWayPairs::new(&ONE_WAY_PAIRS);
        let end_nodes = graph.sinks().into_iter().collect();
        let status = GameStatus::new(config.skill_charges);

        Ok(Self {
            config,
            graph,
            rng,
            one_way,
            end_nodes,
            bonus,
            status,
        })
    }

    // === Transition ===

    /// Apply one action and report the new state.
    ///
    /// A skill request fires before `next_node` is validated, so it can
    /// change the weight this very move earns. A fired skill stays spent
    /// even if the move itself is rejected.
    pub fn step(&mut self, action: &Action) -> Result<Observation> {
        if self.status.done {
            return Err(GameError::GameAlreadyFinished {
                node: self.status.current_node,
                points: self.status.points,
            });
        }

        if let Some(target) = action.skill_target() {
            if self.status.has_skill() {
                self.check_node(target)?;
                self.status.consume_skill();
                self.apply_skill(target)?;
            }
        }

        let from = self.status.current_node;
        let to = action.next_node;
        let weight = if self.graph.contains(to) { self.graph.weight(from, to) } else { 0 };
        if weight == 0 {
            return Err(GameError::InvalidTransition { from, to });
        }

        self.status.advance(to, weight);
        log::trace!("{} -> {} (+{}, total {})", from, to, weight, self.status.points);

        if self.one_way.contains(to) {
            self.on_traverse(to);
        }

        self.status.done = self.end_nodes.contains(&to);
        if self.status.done {
            log::info!(
                "game finished at {} with {} points in {} steps",
                to,
                self.status.points,
                self.status.steps
            );
        }

        Ok(self.status.observation())
    }

    // === Effects ===

    /// Upgrade every existing edge into `target` and two random other nodes to 3 points.
    ///
    /// The extra nodes are drawn without replacement from nodes `1..N`
    /// excluding `target`. Absent edges stay absent. Charge bookkeeping is
    /// left to the caller; `step` does it.
    ///
    /// Returns the affected nodes, target first.
    pub fn apply_skill(&mut self, target: NodeId) -> Result<Vec<NodeId>> {
        self.check_node(target)?;

        let candidates: Vec<NodeId> = NodeId::all(self.graph.size())
            .filter(|&n| !n.is_start() && n != target)
            .collect();

        let mut affected = Vec::with_capacity(1 + SKILL_EXTRA_NODES);
        affected.push(target);
        affected.extend(self.rng.sample_distinct(&candidates, SKILL_EXTRA_NODES));

        for &node in &affected {
            self.graph.upgrade_column(node, MAX_WEIGHT);
        }
        log::debug!("skill on {} upgraded {:?}", target, affected);

        Ok(affected)
    }

    /// Close the edge from `node` back to its one-way partner.
    ///
    /// Returns the partner, or `None` if `node` is in no pair. Calling it
    /// again for the same node changes nothing.
    pub fn on_traverse(&mut self, node: NodeId) -> Option<NodeId> {
        let partner = self.one_way.partner(node)?;
        if self.graph.weight(node, partner) != 0 {
            self.graph.set_weight(node, partner, 0);
            log::debug!("one-way: blocked {} -> {}", node, partner);
        }
        Some(partner)
    }

    // === Queries ===

    /// Outgoing edges of `node` in ascending node order.
    pub fn get_next_nodes(&self, node: NodeId) -> Result<NextNodes> {
        self.check_node(node)?;
        Ok(self.graph.next_nodes(node))
    }

    /// Every action accepted from the current node.
    ///
    /// Each move appears once without skill and, while a charge remains,
    /// once per possible skill target (nodes `1..N`).
    #[must_use]
    pub fn legal_actions(&self) -> Vec<Action> {
        if self.status.done {
            return Vec::new();
        }

        let next = self.graph.next_nodes(self.status.current_node);
        let mut actions: Vec<Action> = next.iter().map(|n| Action::new(n.node)).collect();

        if self.status.has_skill() {
            for n in &next {
                for target in NodeId::all(self.graph.size()).filter(|t| !t.is_start()) {
                    actions.push(Action::with_skill(n.node, target));
                }
            }
        }

        actions
    }

    /// Read-only view of the weight matrix.
    #[must_use]
    pub fn graph(&self) -> &WeightMatrix {
        &self.graph
    }

    /// Nodes that end the game, ascending.
    #[must_use]
    pub fn end_nodes(&self) -> Vec<NodeId> {
        let mut nodes: Vec<_> = self.end_nodes.iter().copied().collect();
        nodes.sort();
        nodes
    }

    /// Whether reaching `node` ends the game.
    #[must_use]
    pub fn is_end_node(&self, node: NodeId) -> bool {
        self.end_nodes.contains(&node)
    }

    /// The one-way pairs of this board.
    #[must_use]
    pub fn one_way_pairs(&self) -> &OneWayPairs {
        &self.one_way
    }

    /// Which nodes the randomizer promoted.
    #[must_use]
    pub fn bonus_nodes(&self) -> BonusNodes {
        self.bonus
    }

    /// Full session status.
    #[must_use]
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    #[must_use]
    pub fn current_node(&self) -> NodeId {
        self.status.current_node
    }

    #[must_use]
    pub fn points(&self) -> u32 {
        self.status.points
    }

    #[must_use]
    pub fn steps(&self) -> u32 {
        self.status.steps
    }

    #[must_use]
    pub fn skill_left(&self) -> u32 {
        self.status.skill_left
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.status.done
    }

    /// Configuration this game was built from.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Seed that reproduces this game's board and skill draws.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    fn check_node(&self, node: NodeId) -> Result<()> {
        if self.graph.contains(node) {
            Ok(())
        } else {
            Err(GameError::InvalidNode {
                node,
                graph_size: self.graph.size(),
            })
        }
    }
}

impl Environment for GraphGame {
    fn observation(&self) -> Observation {
        self.status.observation()
    }

    fn legal_actions(&self) -> Vec<Action> {
        GraphGame::legal_actions(self)
    }

    fn step(&mut self, action: &Action) -> Result<Observation> {
        GraphGame::step(self, action)
    }

    fn seed(&self) -> u64 {
        self.rng.seed()
    }
}

/// Promote one 2-point and one 3-point node.
///
/// Only edges weighing exactly 1 are touched.
fn randomize(graph: &mut WeightMatrix, rng: &mut GameRng) -> BonusNodes {
    let two_point = TWO_POINT_CANDIDATES[rng.gen_range_usize(0..TWO_POINT_CANDIDATES.len())];
    let three_point = THREE_POINT_CANDIDATES[rng.gen_range_usize(0..THREE_POINT_CANDIDATES.len())];

    graph.promote_column(two_point, 1, 2);
    graph.promote_column(three_point, 1, 3);
    log::debug!("randomized board: 2-point {}, 3-point {}", two_point, three_point);

    BonusNodes {
        two_point,
        three_point,
    }
}
