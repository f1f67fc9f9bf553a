#![cfg(feature = "serde")]

use battle_core::{
    Action, BattleConfig, BattleEngine, BattleEnv, CatalogId, Combatant, CombatantId,
    CreatureType, MatchState, PcgRng, Player, PlayerId, Roster, compute_state_root,
};

fn seeded_match(seed: u64) -> MatchState {
    let seat = |player: u32, id: u32, creature_type: CreatureType| {
        let roster: Roster = [Combatant::new(
            CombatantId(id),
            CatalogId(id),
            format!("c{id}"),
            creature_type,
            6000,
        )]
        .into_iter()
        .collect();
        Player::new(PlayerId(player), format!("p{player}"), roster)
    };
    MatchState::new(
        seed,
        vec![seat(1, 1, CreatureType::Vaccine), seat(2, 2, CreatureType::Virus)],
    )
    .unwrap()
}

fn play(seed: u64) -> MatchState {
    let rules = BattleConfig::default();
    let rng = PcgRng;
    let mut state = seeded_match(seed);
    let mut engine = BattleEngine::new(&mut state);
    let env = BattleEnv::new(&rules, &rng);

    engine
        .execute(env, &Action::attack(CombatantId(1), CombatantId(2)))
        .unwrap();
    engine.execute(env, &Action::pass_turn()).unwrap();
    engine
        .execute(env, &Action::attack(CombatantId(2), CombatantId(1)))
        .unwrap();
    state
}

#[test]
fn replaying_the_same_actions_yields_the_same_root() {
    let first = compute_state_root(&play(11)).unwrap();
    let second = compute_state_root(&play(11)).unwrap();

    assert_eq!(first, second);
    assert_eq!(hex::encode(first).len(), 64);
}

#[test]
fn root_commits_to_the_seed() {
    assert_ne!(
        compute_state_root(&seeded_match(1)).unwrap(),
        compute_state_root(&seeded_match(2)).unwrap()
    );
}

#[test]
fn match_state_survives_bincode() {
    let state = play(3);
    let bytes = bincode::serialize(&state).unwrap();
    let decoded: MatchState = bincode::deserialize(&bytes).unwrap();
    assert_eq!(decoded, state);
}
