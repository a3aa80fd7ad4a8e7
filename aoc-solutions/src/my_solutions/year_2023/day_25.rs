//! Day 25: Snowverload
//!
//! Find the three wires whose removal splits the machine in two. Every wire
//! has capacity 1, so a sink on the far side of the cut has a max flow of
//! exactly 3 from a fixed source; the vertices still reachable in the
//! residual graph after that flow form the source's group.

use crate::utils::{line_error, solve_failed};
use anyhow::{anyhow, bail};
use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};
use std::collections::{HashMap, HashSet, VecDeque};

const CUT_SIZE: usize = 3;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2023, day = 25, tags = ["2023", "graph"])]
pub struct Solver;

/// Undirected graph with dense vertex ids; each wire appears once.
#[derive(Debug, Default)]
pub struct Wiring {
    /// `(neighbour, edge id)` per vertex
    adjacency: Vec<Vec<(usize, usize)>>,
    /// Endpoints per edge id; flow is signed in the `.0 -> .1` direction
    edges: Vec<(usize, usize)>,
}

/// Outcome of pushing at most `limit + 1` unit paths from source to sink.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    /// Flow stopped at `paths`; `reachable` vertices remain on the source side.
    Cut { paths: usize, reachable: usize },
    /// More than `limit` edge-disjoint paths exist.
    Exceeds,
}

impl Wiring {
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn add_edge(&mut self, a: usize, b: usize) {
        let id = self.edges.len();
        self.edges.push((a, b));
        self.adjacency[a].push((b, id));
        self.adjacency[b].push((a, id));
    }

    fn max_flow(&self, source: usize, sink: usize, limit: usize) -> Flow {
        let mut flow = vec![0i8; self.edges.len()];
        let mut paths = 0;

        loop {
            let mut parent: Vec<Option<(usize, usize)>> = vec![None; self.vertex_count()];
            let mut visited = vec![false; self.vertex_count()];
            let mut queue = VecDeque::from([source]);
            visited[source] = true;

            while let Some(vertex) = queue.pop_front() {
                if vertex == sink {
                    break;
                }
                for &(next, edge) in &self.adjacency[vertex] {
                    if visited[next] || self.residual(&flow, edge, vertex) == 0 {
                        continue;
                    }
                    visited[next] = true;
                    parent[next] = Some((vertex, edge));
                    queue.push_back(next);
                }
            }

            if !visited[sink] {
                let reachable = visited.iter().filter(|&&v| v).count();
                return Flow::Cut { paths, reachable };
            }
            if paths == limit {
                return Flow::Exceeds;
            }

            let mut vertex = sink;
            while let Some((previous, edge)) = parent[vertex] {
                if self.edges[edge].0 == previous {
                    flow[edge] += 1;
                } else {
                    flow[edge] -= 1;
                }
                vertex = previous;
            }
            paths += 1;
        }
    }

    /// Remaining capacity of `edge` when leaving `from`.
    fn residual(&self, flow: &[i8], edge: usize, from: usize) -> i8 {
        let forward = if self.edges[edge].0 == from {
            flow[edge]
        } else {
            -flow[edge]
        };
        1 - forward
    }

    /// Product of the two group sizes left after cutting `CUT_SIZE` wires.
    fn split_product(&self) -> anyhow::Result<usize> {
        let vertices = self.vertex_count();
        if vertices < 2 {
            bail!("need at least two components, found {vertices}");
        }

        let source = 0;
        for sink in 1..vertices {
            match self.max_flow(source, sink, CUT_SIZE) {
                Flow::Cut { paths, reachable } if paths == CUT_SIZE => {
                    return Ok(reachable * (vertices - reachable));
                }
                Flow::Cut { paths, .. } => {
                    bail!("machine already splits after cutting {paths} wires");
                }
                Flow::Exceeds => {}
            }
        }

        Err(anyhow!("no set of {CUT_SIZE} wires splits the machine"))
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Wiring;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let mut ids: HashMap<&str, usize> = HashMap::new();
        let mut wires: HashSet<(usize, usize)> = HashSet::new();
        let mut wiring = Wiring::default();

        let mut vertex = |name, wiring: &mut Wiring| {
            *ids.entry(name).or_insert_with(|| {
                wiring.adjacency.push(Vec::new());
                wiring.adjacency.len() - 1
            })
        };

        for (idx, line) in input.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let (name, others) = line
                .split_once(':')
                .ok_or_else(|| line_error(idx, anyhow!("expected \"name: other ...\"")))?;
            let name = name.trim();
            if name.is_empty() || name.contains(char::is_whitespace) {
                return Err(line_error(idx, anyhow!("invalid component name {name:?}")));
            }

            let from = vertex(name, &mut wiring);
            for other in others.split_whitespace() {
                let to = vertex(other, &mut wiring);
                // `a: b` and `b: a` name the same wire
                if from != to && wires.insert((from.min(to), from.max(to))) {
                    wiring.add_edge(from, to);
                }
            }
        }

        Ok(wiring)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .split_product()
            .map(|product| product.to_string())
            .map_err(solve_failed)
    }
}
