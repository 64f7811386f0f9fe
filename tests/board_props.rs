use std::collections::HashSet;

use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use sea_battle::{
    populate_fleet, BattleField, Cell, Coordinate, ShipGenerator, ShotResult, FLEET_SIZE,
    GRID_SIZE, SHIP_SIZE,
};

fn random_field(seed: u64) -> BattleField {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut field = BattleField::new();
    populate_fleet(&mut field, &mut rng).unwrap();
    field
}

fn coordinate() -> impl Strategy<Value = Coordinate> {
    (0..GRID_SIZE, 0..GRID_SIZE).prop_map(|(x, y)| Coordinate::new(x, y))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn placed_ships_are_in_bounds_and_disjoint(seed in any::<u64>()) {
        let field = random_field(seed);
        prop_assert_eq!(field.ships().len(), FLEET_SIZE);
        let mut seen = HashSet::new();
        for ship in field.ships() {
            prop_assert_eq!(ship.len(), SHIP_SIZE);
            for c in ship.cells() {
                prop_assert!(c.in_bounds());
                prop_assert!(seen.insert(*c), "cell {} used twice", c);
                prop_assert_eq!(field.cell(*c), Some(Cell::Ship));
            }
        }
        let ship_cells = field.projection(true).iter().flatten().filter(|c| **c == Cell::Ship).count();
        prop_assert_eq!(ship_cells, FLEET_SIZE * SHIP_SIZE);
    }

    #[test]
    fn rejected_candidates_really_are_illegal(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let field = random_field(seed.wrapping_add(1));
        let generator = ShipGenerator::new();
        for _ in 0..20 {
            let ship = generator.generate(&mut rng, SHIP_SIZE).unwrap();
            let legal = ship.cells().iter().all(|c| c.in_bounds() && field.ship_at(*c).is_none());
            prop_assert_eq!(field.can_place(ship.cells()), legal);
        }
    }

    #[test]
    fn shots_resolve_by_occupancy_and_are_stable(seed in any::<u64>(), target in coordinate()) {
        let mut field = random_field(seed);
        let occupied = field.ship_at(target).is_some();
        let first = field.resolve_shot(target).unwrap();
        prop_assert_eq!(first.is_hit(), occupied);
        let expected = if occupied { Cell::Hit } else { Cell::Miss };
        prop_assert_eq!(field.cell(target), Some(expected));

        let after_first = field.clone();
        let second = field.resolve_shot(target).unwrap();
        prop_assert_eq!(second, first);
        prop_assert_eq!(field, after_first);
    }

    #[test]
    fn fleet_is_gone_exactly_after_last_ship_cell(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut field = random_field(seed);
        let mut targets: Vec<Coordinate> = field.ships().iter().flat_map(|s| s.cells().to_vec()).collect();
        // shuffle so ships sink in a random order
        for i in (1..targets.len()).rev() {
            targets.swap(i, rng.random_range(0..=i));
        }
        let last = targets.len() - 1;
        for (i, target) in targets.into_iter().enumerate() {
            prop_assert!(field.has_ships_remaining());
            prop_assert_eq!(field.resolve_shot(target).unwrap(), ShotResult::Hit);
            let sunk = field.ship_at(target).unwrap().is_sunk();
            let own_cells_hit = field.ship_at(target).unwrap().cells().iter().all(|c| field.cell(*c) == Some(Cell::Hit));
            prop_assert_eq!(sunk, own_cells_hit);
            prop_assert_eq!(field.has_ships_remaining(), i != last);
        }
        prop_assert_eq!(field.ships_remaining(), 0);
    }
}
