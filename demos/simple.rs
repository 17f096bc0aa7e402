use robo_pathfinding::{Algorithm, Cell, Session, SessionConfig};

// In this example the robot starts in the top left corner of a 6x6 grid and the flag sits in
// the bottom right. A wall with a single gap crosses the middle:
// S.....
// ......
// ####.#
// ......
// ......
// .....G
fn main() {
    let mut session = Session::new(SessionConfig {
        size: 6,
        ..SessionConfig::default()
    });
    for col in [0, 1, 2, 3, 5] {
        session.set_wall(Cell::new(2, col), true);
    }
    session.place_endpoint(Cell::new(0, 0)).unwrap();
    session.place_endpoint(Cell::new(5, 5)).unwrap();
    println!("{}", session.grid());
    for algorithm in Algorithm::ALL {
        session.set_algorithm(algorithm);
        let exploration = session.explore().unwrap();
        match exploration.path {
            Some(path) => println!(
                "{}: {} steps, {} cells visited",
                algorithm,
                path.len() - 1,
                exploration.visited.len()
            ),
            None => println!("{}: no path", algorithm),
        }
    }
}
