use sea_battle::{BitBoard, Mode, ShipKind, ShotOutcome, Strategist, BOARD_SIZE};
use rand::rngs::SmallRng;
use rand::SeedableRng;

type BB = BitBoard<u128, { BOARD_SIZE as usize }>;

fn shots(cells: &[(usize, usize)]) -> BB {
    BB::from_cells(cells.iter().copied()).unwrap()
}

#[test]
fn test_horizontal_chain_probes_left_then_right() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut ai = Strategist::new();
    ai.record((3, 3), ShotOutcome::Hit);
    ai.record((3, 4), ShotOutcome::Hit);
    assert_eq!(ai.mode(), Mode::Hunt);

    let mut fired = vec![(3, 3), (3, 4)];
    assert_eq!(ai.next_target(&shots(&fired), &mut rng), Some((3, 2)));

    fired.push((3, 2));
    ai.record((3, 2), ShotOutcome::Miss);
    assert_eq!(ai.next_target(&shots(&fired), &mut rng), Some((3, 5)));
}

#[test]
fn test_horizontal_chain_at_left_edge() {
    let mut rng = SmallRng::seed_from_u64(2);
    let mut ai = Strategist::new();
    ai.record((0, 0), ShotOutcome::Hit);
    ai.record((0, 1), ShotOutcome::Hit);
    assert_eq!(ai.next_target(&shots(&[(0, 0), (0, 1)]), &mut rng), Some((0, 2)));
}

#[test]
fn test_vertical_chain_probes_up_then_down() {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut ai = Strategist::new();
    ai.record((3, 3), ShotOutcome::Hit);
    ai.record((4, 3), ShotOutcome::Hit);

    let mut fired = vec![(3, 3), (4, 3)];
    assert_eq!(ai.next_target(&shots(&fired), &mut rng), Some((2, 3)));
    fired.push((2, 3));
    ai.record((2, 3), ShotOutcome::Miss);
    assert_eq!(ai.next_target(&shots(&fired), &mut rng), Some((5, 3)));
}

#[test]
fn test_single_hit_probes_cardinals_in_order() {
    let mut rng = SmallRng::seed_from_u64(4);
    let mut ai = Strategist::new();
    ai.record((5, 5), ShotOutcome::Hit);

    let mut fired = vec![(5, 5)];
    for expected in [(4, 5), (6, 5), (5, 4), (5, 6)] {
        let target = ai.next_target(&shots(&fired), &mut rng);
        assert_eq!(target, Some(expected));
        fired.push(expected);
        ai.record(expected, ShotOutcome::Miss);
    }
    assert_eq!(ai.hunt().map(|h| h.cursor), Some(4));
}

#[test]
fn test_cardinal_probe_skips_blocked_directions() {
    let mut rng = SmallRng::seed_from_u64(5);
    let mut ai = Strategist::new();
    ai.record((0, 0), ShotOutcome::Hit);
    // up is off the grid
    assert_eq!(ai.next_target(&shots(&[(0, 0)]), &mut rng), Some((1, 0)));
    assert_eq!(ai.hunt().map(|h| h.cursor), Some(1));
}

#[test]
fn test_exhausted_hunt_falls_back_to_search() {
    let mut rng = SmallRng::seed_from_u64(6);
    let mut ai = Strategist::new();
    ai.record((0, 0), ShotOutcome::Hit);

    let fired = [(0, 0), (1, 0), (0, 1)];
    let target = ai.next_target(&shots(&fired), &mut rng).unwrap();
    assert!(!fired.contains(&target));
    assert_eq!(ai.mode(), Mode::Search);
    assert!(ai.hunt().is_none());
}

#[test]
fn test_blocked_line_falls_back_to_search() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut ai = Strategist::new();
    ai.record((4, 4), ShotOutcome::Hit);
    ai.record((4, 5), ShotOutcome::Hit);

    let fired = [(4, 3), (4, 4), (4, 5), (4, 6)];
    let target = ai.next_target(&shots(&fired), &mut rng).unwrap();
    assert!(!fired.contains(&target));
    assert_eq!(ai.mode(), Mode::Search);
}

#[test]
fn test_hits_extend_chain_and_sink_clears() {
    let mut ai = Strategist::new();
    ai.record((2, 2), ShotOutcome::Hit);
    ai.record((2, 3), ShotOutcome::Hit);
    ai.record((2, 1), ShotOutcome::Miss);
    let hunt = ai.hunt().unwrap();
    assert_eq!(hunt.chain, vec![(2, 2), (2, 3)]);
    assert_eq!(hunt.last_hit, (2, 2));
    assert_eq!(hunt.cursor, 1);

    ai.record((2, 4), ShotOutcome::Sunk(ShipKind::Cruiser));
    assert_eq!(ai.mode(), Mode::Search);
}

#[test]
fn test_sunk_from_search_stays_in_search() {
    let mut ai = Strategist::new();
    ai.record((7, 7), ShotOutcome::Sunk(ShipKind::Submarine));
    assert_eq!(ai.mode(), Mode::Search);
    ai.record((1, 1), ShotOutcome::Miss);
    assert_eq!(ai.mode(), Mode::Search);
}

#[test]
fn test_search_only_picks_open_cells() {
    let mut rng = SmallRng::seed_from_u64(8);
    let mut ai = Strategist::new();
    let all_but_one = !shots(&[(6, 2)]);
    assert_eq!(ai.next_target(&all_but_one, &mut rng), Some((6, 2)));

    let full = !BB::new();
    assert_eq!(ai.next_target(&full, &mut rng), None);
}

#[test]
fn test_search_is_deterministic_under_seed() {
    let picks = |seed| {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut ai = Strategist::new();
        let mut fired = Vec::new();
        for _ in 0..20 {
            let t = ai.next_target(&shots(&fired), &mut rng).unwrap();
            assert!(!fired.contains(&t));
            fired.push(t);
        }
        fired
    };
    assert_eq!(picks(11), picks(11));
}
