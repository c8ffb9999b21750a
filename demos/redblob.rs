//! Runs every search on the demo fixtures and prints the results.
//!
//! Run: cargo run --bin redblob

use gridwalk_core::Point;
use gridwalk_demos::{Overlay, draw_grid, forest_map, letter_graph, walled_grid};
use gridwalk_paths::{
    astar_search, breadth_first_search, breadth_first_search_to, breadth_first_traversal,
    dijkstra_search, manhattan,
};

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let order = breadth_first_traversal(&letter_graph(), &"B")?;
    println!("Visiting order from B: {}", order.join(" "));

    let grid = walled_grid();
    let start = Point::ZERO;
    println!("\n{}", draw_grid(&grid, &Overlay::default()));

    let parents = breadth_first_search(&grid, &start)?;
    let overlay = Overlay {
        point_to: Some(&parents),
        start: Some(start),
        ..Overlay::default()
    };
    println!("{}", draw_grid(&grid, &overlay));

    let goal = Point::new(24, 0);
    let parents = breadth_first_search_to(&grid, &start, &goal)?;
    let overlay = Overlay {
        point_to: Some(&parents),
        start: Some(start),
        goal: Some(goal),
        ..Overlay::default()
    };
    println!("{}", draw_grid(&grid, &overlay));

    let map = forest_map()?;
    let start = Point::new(1, 4);
    let goal = Point::new(8, 5);
    for (name, found) in [
        ("Dijkstra", dijkstra_search(&map, &start, &goal)?),
        ("A*", astar_search(&map, &start, &goal, manhattan)?),
    ] {
        let path = found.path_to(&start, &goal)?;
        println!(
            "{name}: cost {:?}, {} nodes expanded",
            found.cost_to(&goal),
            found.expanded
        );
        let base = Overlay {
            width: 3,
            start: Some(start),
            goal: Some(goal),
            ..Overlay::default()
        };
        let arrows = Overlay {
            point_to: Some(&found.came_from),
            ..base
        };
        let costs = Overlay {
            number: Some(&found.cost_so_far),
            ..base
        };
        let route = Overlay {
            path: Some(path.as_slice()),
            ..base
        };
        for overlay in [arrows, costs, route] {
            println!("{}", draw_grid(map.grid(), &overlay));
        }
    }
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
