use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use grid_search_visualizer::{
    build_grid, AstarSolver, BfsSolver, CellState, DijkstraSolver, Grid, GridSolver,
    NoopObserver, DEFAULT_DIMENSION,
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::hint::black_box;

/// Editor-sized grid with random obstacles and opposite-corner endpoints.
fn random_grid(seed: u64) -> Grid {
    let n = DEFAULT_DIMENSION;
    let mut rng = StdRng::seed_from_u64(seed);
    let mut grid = build_grid(n);
    for row in 0..n {
        for col in 0..n {
            if rng.gen_bool(0.25) {
                grid.set_cell_state(row, col, CellState::Obstacle).unwrap();
            }
        }
    }
    grid.set_cell_state(0, 0, CellState::Start).unwrap();
    grid.set_cell_state(n - 1, n - 1, CellState::End).unwrap();
    grid.recompute_adjacency();
    grid
}

fn bench_solver<S: GridSolver>(c: &mut Criterion, solver_name: &str, solver: S) {
    let grids = (0..8).map(random_grid).collect::<Vec<_>>();
    c.bench_function(format!("{solver_name}, {DEFAULT_DIMENSION}x{DEFAULT_DIMENSION}").as_str(), |b| {
        b.iter_batched(
            || grids.clone(),
            |mut grids| {
                for grid in grids.iter_mut() {
                    let (start, end) = (grid.start(), grid.end());
                    let _ = black_box(solver.get_path_single_goal(
                        grid,
                        start,
                        end,
                        &mut NoopObserver,
                    ));
                }
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_astar(c: &mut Criterion) {
    bench_solver(c, "Astar", AstarSolver::new());
}

fn bench_dijkstra(c: &mut Criterion) {
    bench_solver(c, "Dijkstra", DijkstraSolver);
}

fn bench_bfs(c: &mut Criterion) {
    bench_solver(c, "BFS", BfsSolver);
}

criterion_group!(benches, bench_astar, bench_dijkstra, bench_bfs);
criterion_main!(benches);
