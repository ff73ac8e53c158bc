use log::{debug, info, trace, warn};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use rayon::prelude::*;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Debug;
use std::time::Instant;

use crate::cs::graph::config::MinCutConfig;
use crate::cs::graph::supervertex::Supervertex;
use crate::error::{GraphError, Result};

/// Trials between progress messages
const PROGRESS_INTERVAL: usize = 50;

/// Undirected multigraph of supervertices, contracted by Karger's algorithm.
///
/// The graph itself is never mutated by [`Graph::find_min_cut`]: every trial
/// works on its own deep copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph<V> {
    vertices: Vec<Supervertex<V>>,
}

/// Best cut found over a run of trials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinCut<V> {
    /// Number of edges crossing the cut
    pub cut_size: usize,
    pub partition_a: BTreeSet<V>,
    pub partition_b: BTreeSet<V>,
    /// Trials that were started, aborted ones included
    pub trials_run: usize,
    /// Trials abandoned on an isolated supervertex
    pub trials_aborted: usize,
    /// Best cut size so far after each completed trial
    pub convergence: Vec<usize>,
}

impl<V> MinCut<V> {
    pub fn partitions(&self) -> (&BTreeSet<V>, &BTreeSet<V>) {
        (&self.partition_a, &self.partition_b)
    }
}

/// Candidate cut emitted by one trial once two supervertices remain.
#[derive(Debug)]
struct Trial<V> {
    cut_size: usize,
    partition_a: BTreeSet<V>,
    partition_b: BTreeSet<V>,
}

/// Keeps the smallest cut seen, first found wins on ties.
struct BestCut<V> {
    best: Option<Trial<V>>,
    trials_run: usize,
    trials_aborted: usize,
    convergence: Vec<usize>,
}

impl<V: Debug> BestCut<V> {
    fn new() -> Self {
        Self {
            best: None,
            trials_run: 0,
            trials_aborted: 0,
            convergence: Vec::new(),
        }
    }

    fn record(&mut self, outcome: Result<Trial<V>>) -> Result<()> {
        self.trials_run += 1;
        match outcome {
            Ok(trial) => {
                let improved = match &self.best {
                    Some(best) => trial.cut_size < best.cut_size,
                    None => true,
                };
                if improved {
                    self.best = Some(trial);
                }
                if let Some(best) = &self.best {
                    self.convergence.push(best.cut_size);
                }
            }
            Err(GraphError::NoEdgeAvailable { position }) => {
                self.trials_aborted += 1;
                debug!(
                    "Trial {} aborted: supervertex {} has no edges",
                    self.trials_run, position
                );
            }
            Err(e) => return Err(e),
        }

        if self.trials_run % PROGRESS_INTERVAL == 0 {
            debug!(
                "...trial {}, best cut so far {:?}",
                self.trials_run,
                self.best.as_ref().map(|b| b.cut_size)
            );
        }
        Ok(())
    }

    fn finish(self) -> Result<MinCut<V>> {
        match self.best {
            Some(best) => Ok(MinCut {
                cut_size: best.cut_size,
                partition_a: best.partition_a,
                partition_b: best.partition_b,
                trials_run: self.trials_run,
                trials_aborted: self.trials_aborted,
                convergence: self.convergence,
            }),
            None => Err(GraphError::Disconnected {
                trials: self.trials_run,
            }),
        }
    }
}

impl<V> Graph<V>
where
    V: Ord + Copy + Debug + Send + Sync,
{
    /// Builds one singleton supervertex per `(vertex, neighbors)` entry.
    ///
    /// Neighbors may repeat to express parallel edges. Self-loop entries are
    /// dropped since they can never cross a cut.
    ///
    /// # Errors
    /// * `MalformedInput` if the list is empty, a vertex id appears twice, a
    ///   neighbor is never listed as a vertex, or a vertex has no edges in a
    ///   graph of more than one vertex
    pub fn build(adjacency: &[(V, Vec<V>)]) -> Result<Self> {
        if adjacency.is_empty() {
            return Err(GraphError::malformed("empty adjacency list"));
        }

        let mut ids = BTreeSet::new();
        for (id, _) in adjacency {
            if !ids.insert(*id) {
                return Err(GraphError::malformed(format!(
                    "vertex {:?} is listed more than once",
                    id
                )));
            }
        }

        let mut vertices = Vec::with_capacity(adjacency.len());
        let mut self_loops = 0;
        for (id, neighbors) in adjacency {
            if let Some(missing) = neighbors.iter().find(|n| !ids.contains(*n)) {
                return Err(GraphError::malformed(format!(
                    "vertex {:?} references undefined vertex {:?}",
                    id, missing
                )));
            }

            let mut vertex = Supervertex::new(*id, neighbors.clone());
            self_loops += vertex.strip_self_loops();
            if vertex.degree() == 0 && adjacency.len() > 1 {
                return Err(GraphError::malformed(format!(
                    "vertex {:?} has no edges",
                    id
                )));
            }
            vertices.push(vertex);
        }

        if self_loops > 0 {
            warn!("Dropped {} self-loop entries from the input", self_loops);
        }
        Ok(Self { vertices })
    }

    /// Builds from rows of the form `[vertex, neighbor, neighbor, ...]`.
    pub fn from_rows(rows: &[Vec<V>]) -> Result<Self> {
        let adjacency = rows
            .iter()
            .map(|row| match row.split_first() {
                Some((id, neighbors)) => Ok((*id, neighbors.to_vec())),
                None => Err(GraphError::malformed("empty adjacency row")),
            })
            .collect::<Result<Vec<_>>>()?;
        Self::build(&adjacency)
    }

    /// Builds from undirected `(u, v)` edges, recording each on both endpoints.
    pub fn from_edges(edges: &[(V, V)]) -> Result<Self> {
        let mut adjacency: BTreeMap<V, Vec<V>> = BTreeMap::new();
        for &(u, v) in edges {
            adjacency.entry(u).or_default().push(v);
            adjacency.entry(v).or_default().push(u);
        }
        Self::build(&adjacency.into_iter().collect::<Vec<_>>())
    }

    /// Number of live supervertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges, counting parallel edges once per copy.
    pub fn edge_count(&self) -> usize {
        self.vertices.iter().map(Supervertex::degree).sum::<usize>() / 2
    }

    pub fn vertices(&self) -> &[Supervertex<V>] {
        &self.vertices
    }

    /// Default trial count `ceil(n^2 ln n)`, which bounds the chance of
    /// missing the minimum cut by `1/n`.
    pub fn default_trials(&self) -> usize {
        default_trial_count(self.vertices.len())
    }

    /// Draws a random edge and returns the positions of its two supervertices.
    ///
    /// A live supervertex is chosen uniformly, then one entry of its edge
    /// multiset, so the draw follows edge multiplicity.
    ///
    /// # Errors
    /// * `NoEdgeAvailable` if the chosen supervertex has no edges
    /// * `MalformedInput` if fewer than two supervertices remain
    pub fn pick_random_edge<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<(usize, usize)> {
        if self.vertices.len() < 2 {
            return Err(GraphError::malformed(
                "at least two supervertices are required to pick an edge",
            ));
        }

        let a = rng.gen_range(0..self.vertices.len());
        let edges = self.vertices[a].edges();
        if edges.is_empty() {
            return Err(GraphError::NoEdgeAvailable { position: a });
        }
        let endpoint = edges[rng.gen_range(0..edges.len())];
        let b = self
            .vertices
            .iter()
            .position(|v| v.contains(&endpoint))
            .ok_or_else(|| {
                GraphError::invalid_contraction(format!(
                    "edge endpoint {:?} belongs to no supervertex",
                    endpoint
                ))
            })?;
        Ok((a, b))
    }

    /// Contracts the supervertex at `b` into the one at `a` and removes `b`.
    ///
    /// Positions after `b` shift down by one.
    ///
    /// # Errors
    /// * `InvalidContraction` if `a == b` or the two are not adjacent
    ///
    /// # Panics
    /// If either position is out of range.
    pub fn contract(&mut self, a: usize, b: usize) -> Result<()> {
        if a == b {
            return Err(GraphError::invalid_contraction(format!(
                "supervertex {} cannot be contracted with itself",
                a
            )));
        }

        let (keep, absorbed) = pair_mut(&mut self.vertices, a, b);
        keep.contract(absorbed)?;
        trace!("Contracted supervertex {} into {}", b, a);
        self.vertices.remove(b);
        Ok(())
    }

    /// Runs Karger's algorithm with a generator seeded from entropy.
    ///
    /// `trials` defaults to [`Graph::default_trials`].
    pub fn find_min_cut(&self, trials: Option<usize>) -> Result<MinCut<V>> {
        self.find_min_cut_with(&MinCutConfig {
            trials,
            ..MinCutConfig::default()
        })
    }

    /// Runs Karger's algorithm as configured.
    ///
    /// # Errors
    /// * `MalformedInput` if the graph has fewer than two vertices or the
    ///   resolved trial count is zero
    /// * `Disconnected` if every trial hit an isolated supervertex
    /// * `InvalidContraction` on an internal invariant violation
    pub fn find_min_cut_with(&self, config: &MinCutConfig) -> Result<MinCut<V>> {
        let trials = self.check_trials(config.trial_count(self.default_trials()))?;
        let deadline = config.deadline.map(|d| Instant::now() + d);
        info!(
            "Finding min cut of {} vertices with {} trials{}",
            self.vertices.len(),
            trials,
            if config.parallel { " in parallel" } else { "" }
        );

        if config.parallel {
            let seed = config.seed.unwrap_or_else(|| rand::thread_rng().gen());
            self.run_parallel(trials, seed, deadline)
        } else {
            let mut rng = match config.seed {
                Some(s) => ChaCha20Rng::seed_from_u64(s),
                None => ChaCha20Rng::from_entropy(),
            };
            self.run_sequential(trials, &mut rng, deadline)
        }
    }

    /// Runs trials sequentially, drawing from `rng` in call order.
    pub fn find_min_cut_with_rng<R: Rng + ?Sized>(
        &self,
        trials: Option<usize>,
        rng: &mut R,
    ) -> Result<MinCut<V>> {
        let trials = self.check_trials(trials.unwrap_or_else(|| self.default_trials()))?;
        self.run_sequential(trials, rng, None)
    }

    fn check_trials(&self, trials: usize) -> Result<usize> {
        if self.vertices.len() < 2 {
            return Err(GraphError::malformed(
                "at least two vertices are required to cut a graph",
            ));
        }
        if trials == 0 {
            return Err(GraphError::malformed("trial count must be positive"));
        }
        Ok(trials)
    }

    fn run_sequential<R: Rng + ?Sized>(
        &self,
        trials: usize,
        rng: &mut R,
        deadline: Option<Instant>,
    ) -> Result<MinCut<V>> {
        let mut best = BestCut::new();
        for i in 0..trials {
            if i > 0 && deadline.is_some_and(|d| Instant::now() >= d) {
                debug!("Deadline reached after {} of {} trials", i, trials);
                break;
            }
            best.record(self.run_trial(rng))?;
        }
        best.finish()
    }

    /// Trial `i` draws from its own ChaCha stream, so the outcome does not
    /// depend on how rayon schedules the work.
    fn run_parallel(
        &self,
        trials: usize,
        seed: u64,
        deadline: Option<Instant>,
    ) -> Result<MinCut<V>> {
        let outcomes: Vec<Option<Result<Trial<V>>>> = (0..trials)
            .into_par_iter()
            .map(|i| {
                if i > 0 && deadline.is_some_and(|d| Instant::now() >= d) {
                    return None;
                }
                let mut rng = ChaCha20Rng::seed_from_u64(seed);
                rng.set_stream(i as u64);
                Some(self.run_trial(&mut rng))
            })
            .collect();

        let mut best = BestCut::new();
        for outcome in outcomes.into_iter().flatten() {
            best.record(outcome)?;
        }
        if best.trials_run < trials {
            debug!(
                "Deadline reached after {} of {} trials",
                best.trials_run, trials
            );
        }
        best.finish()
    }

    /// Contracts a private copy of the graph down to two supervertices.
    fn run_trial<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Trial<V>> {
        let mut graph = self.clone();
        while graph.vertices.len() > 2 {
            let (a, b) = graph.pick_random_edge(rng)?;
            graph.contract(a, b)?;
        }

        let mut remaining = graph.vertices.into_iter();
        match (remaining.next(), remaining.next()) {
            (Some(a), Some(b)) => Ok(Trial {
                cut_size: a.degree().min(b.degree()),
                partition_a: a.into_members(),
                partition_b: b.into_members(),
            }),
            _ => Err(GraphError::malformed(
                "a trial needs at least two vertices",
            )),
        }
    }
}

fn default_trial_count(n: usize) -> usize {
    if n < 2 {
        return 0;
    }
    let n = n as f64;
    (n * n * n.ln()).ceil() as usize
}

/// Mutable access to `items[a]` alongside shared access to `items[b]`.
fn pair_mut<T>(items: &mut [T], a: usize, b: usize) -> (&mut T, &T) {
    if a < b {
        let (left, right) = items.split_at_mut(b);
        (&mut left[a], &right[0])
    } else {
        let (left, right) = items.split_at_mut(a);
        (&mut right[0], &left[b])
    }
}

/// Estimates the minimum cut of an undirected edge list with `trials` trials.
///
/// # Arguments
/// - `edges`: Slice of edges as (u, v) pairs. Repeated pairs are parallel edges.
/// - `trials`: Number of independent trials to run (the more, the higher the chance to find the minimum cut).
///
/// # Returns
/// The estimated minimum cut value.
pub fn karger_min_cut<V>(edges: &[(V, V)], trials: usize) -> Result<usize>
where
    V: Ord + Copy + Debug + Send + Sync,
{
    Graph::from_edges(edges)?
        .find_min_cut(Some(trials))
        .map(|cut| cut.cut_size)
}
