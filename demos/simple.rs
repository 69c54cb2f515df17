use grid_route::RouteGrid;
use grid_util::grid::Grid;
use grid_util::point::Point;

// In this demo both engines route across the original 4x4 board
//  ____
// |   G|
// | #  |
// |  # |
// |S  #|
//  ----
// where
// - # marks an obstacle
// - S marks the start
// - G marks the goal
fn main() {
    let mut grid: RouteGrid = RouteGrid::new(4, 4, false);
    grid.set(1, 1, true);
    grid.set(2, 2, true);
    grid.set(3, 3, true);
    grid.generate_components();
    println!("{}", grid);
    let start = Point::new(0, 3);
    let goal = Point::new(3, 0);
    let astar_path = grid.find_path_astar(start, goal).unwrap();
    println!("A* path:");
    for p in astar_path.path().unwrap() {
        println!("{:?}", p);
    }
    let backtracking_path = grid.find_path_backtracking(start, goal).unwrap();
    println!("Backtracking path:");
    for p in backtracking_path.path().unwrap() {
        println!("{:?}", p);
    }
}
