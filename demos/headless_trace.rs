use grid_search_visualizer::{build_grid, run_search, Algorithm, CellState, Grid, SearchResult};

// In this example a path is searched on a 7x7 grid with shape
//  _______
// |S      |
// |  ###  |
// |    #  |
// |### #  |
// |    #  |
// |  ###  |
// |      E|
//  _______
// where
// - # marks an obstacle
// - S marks the start
// - E marks the end
//
// Every step is printed the way a renderer would redraw it. The algorithm is taken from the
// first argument ("astar", "dijkstra" or "bfs") and defaults to A*.

const LAYOUT: [&str; 7] = [
    "S......",
    "..###..",
    "....#..",
    "###.#..",
    "....#..",
    "..###..",
    "......E",
];

fn main() {
    let algorithm = match std::env::args().nth(1) {
        Some(name) => match name.parse::<Algorithm>() {
            Ok(algorithm) => algorithm,
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(2);
            }
        },
        None => Algorithm::BestFirst,
    };

    let mut grid = build_grid(LAYOUT.len());
    for (row, line) in LAYOUT.iter().enumerate() {
        for (col, symbol) in line.chars().enumerate() {
            let state = match symbol {
                '#' => CellState::Obstacle,
                'S' => CellState::Start,
                'E' => CellState::End,
                _ => continue,
            };
            grid.set_cell_state(row, col, state)
                .expect("layout fits the grid");
        }
    }
    grid.recompute_adjacency();

    println!("{}", algorithm.title());
    let mut step = 0;
    let mut redraw = |g: &Grid| {
        step += 1;
        println!("Step {step}:\n{g}");
        true
    };
    let (start, end) = (grid.start(), grid.end());
    match run_search(algorithm, &mut grid, start, end, &mut redraw) {
        Ok(SearchResult::Found(path)) => {
            println!("Path of length {}:", path.len() - 1);
            for p in path {
                println!("{:?}", p);
            }
        }
        Ok(SearchResult::NotFound) => println!("No path"),
        Ok(SearchResult::Interrupted) => println!("Interrupted"),
        Err(e) => eprintln!("{e}"),
    }
}
