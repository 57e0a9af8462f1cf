//! Tests for the grid module.

use std::collections::{HashMap, HashSet};

use proptest::prelude::*;

use super::*;

fn size(width: usize, height: usize) -> GridSize {
    GridSize::new(width, height).unwrap()
}

#[test]
fn test_invalid_dimensions() {
    assert_eq!(
        GridSize::new(0, 3),
        Err(GridError::InvalidDimensions {
            width: 0,
            height: 3
        })
    );
    assert!(GridSize::new(4, 0).is_err());
    assert!(GridSize::new(usize::MAX, 1).is_err());
}

#[test]
fn test_index_mapping_is_row_major() {
    let grid = size(4, 3);
    assert_eq!(grid.index_of(Tile::new(0, 0)).unwrap(), 0);
    assert_eq!(grid.index_of(Tile::new(3, 0)).unwrap(), 3);
    assert_eq!(grid.index_of(Tile::new(0, 1)).unwrap(), 4);
    assert_eq!(grid.index_of(Tile::new(2, 2)).unwrap(), 10);
    assert_eq!(grid.tile_at(7).unwrap(), Tile::new(3, 1));
    assert_eq!(grid.tiles().count(), 12);
    assert_eq!(grid.tiles().nth(5), Some(Tile::new(1, 1)));
}

#[test]
fn test_out_of_range_conversions_are_errors() {
    let grid = size(4, 3);
    assert_eq!(
        grid.tile_at(12),
        Err(GridError::IndexOutOfBounds { index: 12, len: 12 })
    );
    assert_eq!(
        grid.index_of(Tile::new(4, 0)),
        Err(GridError::TileOutOfBounds {
            tile: Tile::new(4, 0),
            width: 4,
            height: 3
        })
    );
    assert!(grid.index_of(Tile::new(-1, 0)).is_err());
    assert!(grid.index_of(Tile::new(0, 3)).is_err());
}

#[test]
fn test_moves_return_new_tiles() {
    let tile = Tile::new(2, 5);
    assert_eq!(tile.move_x(-3), Tile::new(-1, 5));
    assert_eq!(tile.move_y(2), Tile::new(2, 7));
    assert_eq!(tile.translate(1, -1), Tile::new(3, 4));
    assert_eq!(tile, Tile::new(2, 5));
}

#[test]
fn test_position_classification() {
    let grid = size(3, 3);
    let expected = [
        Position::TopLeft,
        Position::Top,
        Position::TopRight,
        Position::Left,
        Position::Center,
        Position::Right,
        Position::BottomLeft,
        Position::Bottom,
        Position::BottomRight,
    ];
    for (tile, position) in grid.tiles().zip(expected) {
        assert_eq!(grid.position(tile).unwrap(), position, "tile {tile}");
    }
    assert!(grid.position(Tile::new(3, 3)).is_err());
    assert_eq!(Position::Center.neighbor_count(Connectivity::WithDiagonals), 8);
    assert_eq!(Position::Bottom.neighbor_count(Connectivity::Orthogonal), 3);
}

#[test]
fn test_single_row_positions() {
    let grid = size(3, 1);
    assert_eq!(grid.position(Tile::new(0, 0)).unwrap(), Position::TopLeft);
    assert_eq!(grid.position(Tile::new(1, 0)).unwrap(), Position::Top);
    assert_eq!(grid.position(Tile::new(2, 0)).unwrap(), Position::TopRight);
}

#[test]
fn test_neighbor_counts() {
    let grid = size(5, 4);
    let counts = |tile: Tile| {
        (
            grid.neighbors(tile, Connectivity::Orthogonal).unwrap().len(),
            grid.neighbors(tile, Connectivity::WithDiagonals).unwrap().len(),
        )
    };
    assert_eq!(counts(Tile::new(2, 2)), (4, 8));
    assert_eq!(counts(Tile::new(0, 0)), (2, 3));
    assert_eq!(counts(Tile::new(4, 3)), (2, 3));
    assert_eq!(counts(Tile::new(2, 0)), (3, 5));
    assert_eq!(counts(Tile::new(0, 2)), (3, 5));
}

#[test]
fn test_neighbor_order_is_fixed() {
    let grid = size(3, 3);
    assert_eq!(
        grid.neighbors(Tile::new(1, 1), Connectivity::Orthogonal).unwrap(),
        vec![
            Tile::new(2, 1),
            Tile::new(0, 1),
            Tile::new(1, 0),
            Tile::new(1, 2)
        ]
    );
}

#[test]
fn test_neighbors_outside_grid_rejected() {
    let grid = size(3, 3);
    assert!(matches!(
        grid.neighbors(Tile::new(3, 1), Connectivity::Orthogonal),
        Err(GridError::TileOutOfBounds { .. })
    ));
    assert!(matches!(
        grid.neighbor_indices(9, Connectivity::WithDiagonals),
        Err(GridError::IndexOutOfBounds { index: 9, len: 9 })
    ));
}

#[test]
fn test_neighbor_indices() {
    let grid = size(3, 2);
    let mut indices = grid.neighbor_indices(0, Connectivity::WithDiagonals).unwrap();
    indices.sort_unstable();
    assert_eq!(indices, vec![1, 3, 4]);
}

#[test]
fn test_bfs_line_of_three() {
    let grid = SquareGrid::new(size(3, 1), Connectivity::Orthogonal);
    let visited = reachable(&grid, Tile::new(0, 0)).unwrap();

    assert_eq!(visited.start(), &Tile::new(0, 0));
    assert_eq!(visited.len(), 3);
    assert_eq!(visited.predecessor(&Tile::new(0, 0)), None);
    assert_eq!(visited.predecessor(&Tile::new(1, 0)), Some(&Tile::new(0, 0)));
    assert_eq!(visited.predecessor(&Tile::new(2, 0)), Some(&Tile::new(1, 0)));

    let backwards = reachable(&grid, Tile::new(2, 0)).unwrap();
    assert_eq!(
        backwards.path_to(&Tile::new(0, 0)).unwrap(),
        vec![Tile::new(2, 0), Tile::new(1, 0), Tile::new(0, 0)]
    );
}

#[test]
fn test_bfs_rejecting_predicate_keeps_only_start() {
    let grid = SquareGrid::new(size(4, 4), Connectivity::WithDiagonals);
    let visited = breadth_first_search(&grid, Tile::new(1, 1), None, |_| false).unwrap();
    assert_eq!(visited.len(), 1);
    assert!(visited.contains(&Tile::new(1, 1)));
}

#[test]
fn test_bfs_goal_equal_to_start() {
    let grid = SquareGrid::new(size(4, 4), Connectivity::Orthogonal);
    let start = Tile::new(2, 3);
    let visited = breadth_first_search(&grid, start, Some(&start), |_| true).unwrap();
    assert_eq!(visited.into_inner(), HashMap::from([(start, None)]));
}

#[test]
fn test_bfs_stops_at_goal() {
    let grid = SquareGrid::new(size(10, 1), Connectivity::Orthogonal);
    let goal = Tile::new(3, 0);
    let visited = breadth_first_search(&grid, Tile::new(0, 0), Some(&goal), |_| true).unwrap();

    // The goal is dequeued before its neighbour (4, 0) could be discovered
    assert!(visited.contains(&goal));
    assert!(!visited.contains(&Tile::new(4, 0)));
    assert_eq!(visited.path_to(&goal).unwrap().len(), 4);
}

#[test]
fn test_bfs_shortest_paths() {
    let grid = SquareGrid::new(size(5, 5), Connectivity::Orthogonal);
    let start = Tile::new(0, 0);
    let visited = reachable(&grid, start).unwrap();
    for tile in size(5, 5).tiles() {
        let path = visited.path_to(&tile).unwrap();
        let manhattan = (tile.x + tile.y) as usize;
        assert_eq!(path.len(), manhattan + 1, "path to {tile}");
    }
}

#[test]
fn test_bfs_two_regions_do_not_leak() {
    // 0 0 9 0
    // 0 9 9 0
    // 9 9 0 0
    let values = [0, 0, 9, 0, 0, 9, 9, 0, 9, 9, 0, 0];
    let dims = size(4, 3);
    let grid = SquareGrid::new(dims, Connectivity::Orthogonal);
    let below_nine = |tile: &Tile| dims.index_of(*tile).map(|i| values[i] < 9);

    let left = try_breadth_first_search(&grid, Tile::new(0, 0), None, below_nine).unwrap();
    let left: HashSet<Tile> = left.nodes().copied().collect();
    assert_eq!(
        left,
        HashSet::from([Tile::new(0, 0), Tile::new(1, 0), Tile::new(0, 1)])
    );

    let right = try_breadth_first_search(&grid, Tile::new(3, 0), None, below_nine).unwrap();
    assert_eq!(right.len(), 4);
    assert!(!right.contains(&Tile::new(0, 0)));
}

#[test]
fn test_bfs_predicate_error_aborts() {
    #[derive(Debug, PartialEq)]
    enum Probe {
        Grid(GridError),
        Refused(Tile),
    }

    impl From<GridError> for Probe {
        fn from(error: GridError) -> Self {
            Probe::Grid(error)
        }
    }

    let grid = SquareGrid::new(size(3, 3), Connectivity::Orthogonal);
    let result = try_breadth_first_search(&grid, Tile::new(0, 0), None, |tile| {
        if *tile == Tile::new(1, 1) {
            Err(Probe::Refused(*tile))
        } else {
            Ok(true)
        }
    });
    assert_eq!(result.unwrap_err(), Probe::Refused(Tile::new(1, 1)));
}

#[test]
fn test_bfs_start_outside_grid() {
    let grid = SquareGrid::new(size(2, 2), Connectivity::Orthogonal);
    assert!(matches!(
        reachable(&grid, Tile::new(5, 5)),
        Err(GridError::TileOutOfBounds { .. })
    ));
}

#[test]
fn test_simple_graph() {
    let graph: SimpleGraph<&str> = [
        ("a", vec!["b", "c"]),
        ("b", vec!["d"]),
        ("c", vec!["d"]),
        ("d", vec![]),
    ]
    .into_iter()
    .collect();

    assert_eq!(graph.neighbors(&"z").unwrap(), Vec::<&str>::new());

    let visited = reachable(&graph, "a").unwrap();
    assert_eq!(visited.len(), 4);
    assert_eq!(visited.predecessor(&"d"), Some(&"b"));
    assert_eq!(visited.path_to(&"d").unwrap(), vec!["a", "b", "d"]);
    assert_eq!(visited.path_to(&"z"), None);

    // Directed: "a" is not reachable from "d"
    assert_eq!(reachable(&graph, "d").unwrap().len(), 1);
}

#[test]
fn test_weighted_graphs() {
    let mut graph = SimpleGraph::default().with_cost(1, 2, 7);
    graph.add_edge(1, 2);
    graph.add_edge(2, 3);
    assert_eq!(graph.cost(&1, &2), 7);
    assert_eq!(graph.cost(&2, &3), 1);

    let grid = SquareGrid::new(size(2, 2), Connectivity::Orthogonal);
    assert_eq!(grid.cost(&Tile::new(0, 0), &Tile::new(1, 0)), 1);
}

fn grid_and_tile() -> impl Strategy<Value = (GridSize, Tile)> {
    (1usize..20, 1usize..20).prop_flat_map(|(width, height)| {
        (0..width as i32, 0..height as i32)
            .prop_map(move |(x, y)| (size(width, height), Tile::new(x, y)))
    })
}

fn connectivity() -> impl Strategy<Value = Connectivity> {
    prop_oneof![
        Just(Connectivity::Orthogonal),
        Just(Connectivity::WithDiagonals)
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_index_roundtrip((grid, tile) in grid_and_tile()) {
        let index = grid.index_of(tile).unwrap();
        prop_assert!(index < grid.len());
        prop_assert_eq!(grid.tile_at(index).unwrap(), tile);
    }

    #[test]
    fn prop_neighbors_in_bounds((grid, tile) in grid_and_tile(), connectivity in connectivity()) {
        for neighbor in grid.neighbors(tile, connectivity).unwrap() {
            prop_assert!(grid.contains(neighbor), "{} escaped the grid", neighbor);
            prop_assert_ne!(neighbor, tile);
        }
    }

    #[test]
    fn prop_neighbor_count_matches_position(
        (grid, tile) in (2usize..20, 2usize..20).prop_flat_map(|(w, h)| {
            (0..w as i32, 0..h as i32).prop_map(move |(x, y)| (size(w, h), Tile::new(x, y)))
        }),
        connectivity in connectivity()
    ) {
        let position = grid.position(tile).unwrap();
        let count = grid.neighbors(tile, connectivity).unwrap().len();
        prop_assert_eq!(count, position.neighbor_count(connectivity));
    }

    #[test]
    fn prop_neighbors_idempotent((grid, tile) in grid_and_tile(), connectivity in connectivity()) {
        let first = grid.neighbors(tile, connectivity).unwrap();
        let second = grid.neighbors(tile, connectivity).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_full_search_covers_grid((grid, tile) in grid_and_tile(), connectivity in connectivity()) {
        let square = SquareGrid::new(grid, connectivity);
        prop_assert_eq!(square.connectivity(), connectivity);
        let visited = reachable(&square, tile).unwrap();
        prop_assert_eq!(visited.start(), &tile);
        prop_assert_eq!(visited.len(), square.size().len());
        for node in square.size().tiles() {
            let path = visited.path_to(&node).unwrap();
            prop_assert_eq!(path.first(), Some(&tile));
            prop_assert_eq!(path.last(), Some(&node));
        }
    }
}
