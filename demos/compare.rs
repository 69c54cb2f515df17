use grid_route::{RouteGrid, SearchOutcome};
use grid_util::grid::Grid;
use grid_util::point::Point;

// Compares the two engines on an 8x8 board with a C-shaped wall next to the
// goal. Both routes and their lengths are printed side by side.
fn main() {
    let mut grid: RouteGrid = RouteGrid::new(8, 8, false);
    for y in 1..6 {
        grid.set(5, y, true);
    }
    for x in 2..6 {
        grid.set(x, 5, true);
    }
    grid.generate_components();
    println!("{}", grid);
    let start = Point::new(0, 0);
    let goal = Point::new(3, 3);
    let report = |name: &str, outcome: SearchOutcome| match outcome {
        SearchOutcome::Found(path) => {
            println!("{}: {} moves", name, path.len() - 1);
            println!(
                "  {}",
                path.iter()
                    .map(|p| format!("({},{})", p.x, p.y))
                    .collect::<Vec<_>>()
                    .join(" -> ")
            );
        }
        SearchOutcome::NotFound => println!("{}: no route", name),
    };
    report("A*", grid.find_path_astar(start, goal).unwrap());
    report(
        "Backtracking",
        grid.find_path_backtracking(start, goal).unwrap(),
    );
}
