//! Property tests for the search strategies and the FreeCell layout.

use proptest::prelude::*;

use cardsolve::freecell::{deal, GameState};
use cardsolve::search::{SearchDomain, SearchOutcome, Solver, ZeroHeuristic};

/// Random DAG over nodes 0..n with edges only from lower to higher
/// indices; node n-1 is the goal. Acyclic, so every strategy terminates
/// and a reference shortest path is easy to compute.
#[derive(Clone, Debug)]
struct Dag {
    n: usize,
    edges: Vec<Vec<usize>>,
}

impl SearchDomain for Dag {
    type State = usize;
    type Action = (usize, usize);

    fn actions(&self, state: &usize) -> Vec<(usize, usize)> {
        self.edges[*state].iter().map(|&to| (*state, to)).collect()
    }

    fn apply(&self, _state: &usize, action: &(usize, usize)) -> usize {
        action.1
    }

    fn is_goal(&self, state: &usize) -> bool {
        *state == self.n - 1
    }
}

fn dag_strategy() -> impl Strategy<Value = Dag> {
    (2usize..10).prop_flat_map(|n| {
        let pair_count = n * (n - 1) / 2;
        proptest::collection::vec(proptest::bool::weighted(0.4), pair_count).prop_map(
            move |bits| {
                let mut edges = vec![Vec::new(); n];
                let mut k = 0;
                for i in 0..n {
                    for j in (i + 1)..n {
                        if bits[k] {
                            edges[i].push(j);
                        }
                        k += 1;
                    }
                }
                Dag { n, edges }
            },
        )
    })
}

/// Reference shortest path length by relaxation in topological order.
fn reference_shortest(dag: &Dag) -> Option<usize> {
    let mut dist: Vec<Option<usize>> = vec![None; dag.n];
    dist[0] = Some(0);

    for i in 0..dag.n {
        let Some(d) = dist[i] else { continue };
        for &j in &dag.edges[i] {
            if dist[j].map_or(true, |old| d + 1 < old) {
                dist[j] = Some(d + 1);
            }
        }
    }

    dist[dag.n - 1]
}

/// Replay an action sequence, checking legality at every step.
fn replay(dag: &Dag, actions: &[(usize, usize)]) -> usize {
    let mut state = 0;
    for action in actions {
        assert!(dag.actions(&state).contains(action));
        state = dag.apply(&state, action);
    }
    state
}

proptest! {
    #[test]
    fn prop_bfs_matches_reference_shortest_path(dag in dag_strategy()) {
        let mut bfs = Solver::breadth_first(dag.clone());

        match (bfs.solve(&0), reference_shortest(&dag)) {
            (SearchOutcome::Solution(actions), Some(shortest)) => {
                prop_assert_eq!(actions.len(), shortest);
            }
            (SearchOutcome::Exhausted, None) => {}
            (outcome, reference) => {
                return Err(TestCaseError::fail(format!(
                    "bfs {outcome:?} disagrees with reference {reference:?}"
                )));
            }
        }
    }

    #[test]
    fn prop_solutions_replay_validly(dag in dag_strategy()) {
        let mut bfs = Solver::breadth_first(dag.clone());
        if let Some(actions) = bfs.solve(&0).into_actions() {
            let end = replay(&dag, &actions);
            prop_assert!(dag.is_goal(&end));
        }

        let mut dfs = Solver::depth_first(dag.clone(), 16);
        if let Some(actions) = dfs.solve(&0).into_actions() {
            let end = replay(&dag, &actions);
            prop_assert!(dag.is_goal(&end));
            prop_assert!(actions.len() <= 16);
        }
    }

    #[test]
    fn prop_astar_zero_heuristic_matches_bfs(dag in dag_strategy()) {
        let mut bfs = Solver::breadth_first(dag.clone());
        let mut astar = Solver::a_star(dag, ZeroHeuristic);

        let bfs_len = bfs.solve(&0).into_actions().map(|a| a.len());
        let astar_len = astar.solve(&0).into_actions().map(|a| a.len());
        prop_assert_eq!(bfs_len, astar_len);
    }

    #[test]
    fn prop_expansions_never_exceed_reachable_states(dag in dag_strategy()) {
        let n = dag.n as u64;
        let mut bfs = Solver::breadth_first(dag);
        bfs.solve(&0);
        prop_assert!(bfs.stats().expanded <= n);
    }

    #[test]
    fn prop_dealt_boards_round_trip_serde(seed in any::<u64>()) {
        let board = deal(seed);
        let json = serde_json::to_string(&board).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(board, back);
    }
}
