//! Random wall layouts.

use pathviz_search::{NodeGrid, Pos};
use rand::Rng;

/// Turn each non-endpoint cell into a wall with probability `density`
/// and clear it otherwise. Returns the number of walls placed.
pub fn scatter_walls(grid: &mut NodeGrid, density: f64, rng: &mut impl Rng) -> usize {
    let density = density.clamp(0.0, 1.0);
    let (start, finish) = (grid.start(), grid.finish());
    let cells: Vec<Pos> = grid
        .nodes()
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != start && i != finish)
        .map(|(_, n)| n.pos())
        .collect();

    let mut placed = 0;
    for p in cells {
        let wall = rng.random_bool(density);
        if grid.set_wall(p, wall).is_ok() && wall {
            placed += 1;
        }
    }
    log::debug!("scattered {placed} walls at density {density:.2}");
    placed
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn endpoints_stay_open() {
        let mut grid = NodeGrid::new(6, 10).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let placed = scatter_walls(&mut grid, 1.0, &mut rng);
        assert_eq!(placed, grid.len() - 2);
        assert!(!grid.node_at(grid.start()).is_wall());
        assert!(!grid.node_at(grid.finish()).is_wall());
    }

    #[test]
    fn zero_density_clears() {
        let mut grid = NodeGrid::parse("S##\n###\n##F").unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(scatter_walls(&mut grid, 0.0, &mut rng), 0);
        assert_eq!(grid.walls().count(), 0);
    }

    #[test]
    fn same_seed_same_layout() {
        let layout = |seed| {
            let mut grid = NodeGrid::new(8, 8).unwrap();
            scatter_walls(&mut grid, 0.4, &mut StdRng::seed_from_u64(seed));
            grid.walls().collect::<Vec<_>>()
        };
        assert_eq!(layout(42), layout(42));
    }
}
