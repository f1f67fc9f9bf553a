use battle_core::{
    Action, ActionError, ActionResult, AttackError, Bag, BagSource, BattleConfig, BattleEngine,
    BattleEnv, CatalogId, CatalogSnapshot, Combatant, CombatantId, CreatureDefinition,
    CreatureType, DefendAction, EvolutionGate, EvolveAction, EvolveError, ExecuteError,
    ItemDefinition, ItemEffect, ItemId, ItemKind, LootAction, LootError, MatchState, MatchStatus,
    OracleError, Player, PlayerId, ProvokeAction, ProvokeError, Readiness, RestAction, ReviveAction,
    ReviveError, RngOracle, Roster, Round, TransitionPhase, UseItemAction,
    state::{CombatantFields, TurnFields},
};

/// Oracle that returns the same roll for every d100.
struct FixedRoll(u32);

impl RngOracle for FixedRoll {
    fn next_u32(&self, _seed: u64) -> u32 {
        self.0 - 1
    }
}

const NEVER: FixedRoll = FixedRoll(100);

fn creature(id: u32, creature_type: CreatureType, base_power: u32, level: u8) -> Combatant {
    Combatant::new(
        CombatantId(id),
        CatalogId(id),
        format!("c{id}"),
        creature_type,
        base_power,
    )
    .with_level(level)
}

fn player(id: u32, combatants: Vec<Combatant>) -> Player {
    Player::new(PlayerId(id), format!("p{id}"), combatants.into_iter().collect::<Roster>())
}

/// P1: #1 Vaccine 6000 lv2, #2 Data 3000 lv1, #5 Virus 2000 lv0.
/// P2: #3 Virus 6000 lv2, #4 Data 3000 lv1.
fn standard_match() -> MatchState {
    MatchState::new(
        42,
        vec![
            player(
                1,
                vec![
                    creature(1, CreatureType::Vaccine, 6000, 2),
                    creature(2, CreatureType::Data, 3000, 1),
                    creature(5, CreatureType::Virus, 2000, 0),
                ],
            ),
            player(
                2,
                vec![
                    creature(3, CreatureType::Virus, 6000, 2),
                    creature(4, CreatureType::Data, 3000, 1),
                ],
            ),
        ],
    )
    .unwrap()
}

fn run(
    state: &mut MatchState,
    rng: &dyn RngOracle,
    action: Action,
) -> Result<battle_core::ExecutionOutcome, ExecuteError> {
    run_with(&BattleConfig::default(), state, rng, action)
}

fn run_with(
    rules: &BattleConfig,
    state: &mut MatchState,
    rng: &dyn RngOracle,
    action: Action,
) -> Result<battle_core::ExecutionOutcome, ExecuteError> {
    let env = BattleEnv::new(rules, rng);
    BattleEngine::new(state).execute(env, &action)
}

fn pass(state: &mut MatchState) {
    run(state, &NEVER, Action::pass_turn()).unwrap();
}

#[test]
fn redirected_attack_hits_defender_and_spends_attacker() {
    let mut state = standard_match();
    pass(&mut state);

    run(
        &mut state,
        &NEVER,
        Action::Defend(DefendAction::new(CombatantId(4), CombatantId(3))),
    )
    .unwrap();
    pass(&mut state);
    assert_eq!(state.round(), Round(2));

    let outcome = run(&mut state, &NEVER, Action::attack(CombatantId(1), CombatantId(3))).unwrap();

    let ActionResult::Attack(attack) = &outcome.result else {
        panic!("expected attack result, got {:?}", outcome.result);
    };
    assert!(attack.was_redirected());
    assert_eq!(attack.target, CombatantId(4));
    // Vaccine 2000 * 0.65 = 1300 into Data; Data 1000 * 1.35 = 1350 -> 1400 back
    assert_eq!(attack.exchange.damage_to_defender(), 1300);
    assert_eq!(attack.exchange.damage_to_attacker(), 1400);

    let attacker = state.combatant(CombatantId(1)).unwrap();
    assert_eq!(attacker.readiness, Readiness::Acted);
    assert_eq!(attacker.current_hp, 4600);

    let protector = state.combatant(CombatantId(4)).unwrap();
    assert_eq!(protector.current_hp, 1700);
    assert_eq!(protector.defending, None);

    let nominal = state.combatant(CombatantId(3)).unwrap();
    assert_eq!(nominal.current_hp, 6000);
    assert!(outcome.delta.fields_of(CombatantId(3)).is_empty());
    assert!(
        outcome
            .delta
            .fields_of(CombatantId(4))
            .contains(CombatantFields::HP | CombatantFields::DEFENDING)
    );

    let second = run(&mut state, &NEVER, Action::attack(CombatantId(2), CombatantId(3))).unwrap();
    let ActionResult::Attack(attack) = &second.result else {
        panic!("expected attack result");
    };
    assert!(!attack.was_redirected());
    assert_eq!(attack.target, CombatantId(3));
}

#[test]
fn provoked_combatant_must_attack_provoker() {
    let mut state = standard_match();
    pass(&mut state);

    run(
        &mut state,
        &NEVER,
        Action::Provoke(ProvokeAction::new(CombatantId(3), CombatantId(1))),
    )
    .unwrap();
    assert_eq!(
        state.combatant(CombatantId(1)).unwrap().provoked_by,
        Some(CombatantId(3))
    );
    pass(&mut state);

    let before = state.clone();
    let error = run(&mut state, &NEVER, Action::attack(CombatantId(1), CombatantId(4)))
        .unwrap_err();
    match error {
        ExecuteError::Attack(phase_error) => {
            assert_eq!(phase_error.phase, TransitionPhase::PreValidate);
            assert_eq!(
                phase_error.error,
                AttackError::Provoked {
                    required: CombatantId(3)
                }
            );
        }
        other => panic!("unexpected error {other:?}"),
    }
    assert_eq!(state, before);

    run(&mut state, &NEVER, Action::attack(CombatantId(1), CombatantId(3))).unwrap();
    assert_eq!(state.combatant(CombatantId(1)).unwrap().provoked_by, None);
}

#[test]
fn provoke_respects_cooldown() {
    let mut state = standard_match();
    pass(&mut state);
    run(
        &mut state,
        &NEVER,
        Action::Provoke(ProvokeAction::new(CombatantId(3), CombatantId(1))),
    )
    .unwrap();
    pass(&mut state);
    pass(&mut state);

    let error = run(
        &mut state,
        &NEVER,
        Action::Provoke(ProvokeAction::new(CombatantId(3), CombatantId(2))),
    )
    .unwrap_err();
    assert!(matches!(
        error,
        ExecuteError::Provoke(ref e) if e.error == ProvokeError::OnCooldown { rounds_remaining: 2 }
    ));
}

#[test]
fn dead_provoker_releases_constraint() {
    let mut state = standard_match();
    state.combatant_mut(CombatantId(1)).unwrap().provoked_by = Some(CombatantId(3));
    state.combatant_mut(CombatantId(3)).unwrap().current_hp = 0;

    let outcome = run(&mut state, &NEVER, Action::attack(CombatantId(1), CombatantId(4)));
    assert!(outcome.is_ok());
}

#[test]
fn actions_outside_turn_or_after_acting_are_rejected() {
    let mut state = standard_match();

    let error = run(&mut state, &NEVER, Action::attack(CombatantId(3), CombatantId(1)))
        .unwrap_err();
    assert!(matches!(
        error,
        ExecuteError::Attack(ref e)
            if e.error == AttackError::Action(ActionError::NotCurrentPlayer {
                actor: CombatantId(3),
                current: PlayerId(1),
            })
    ));

    run(&mut state, &NEVER, Action::Rest(RestAction { actor: CombatantId(1) })).unwrap();
    let error = run(&mut state, &NEVER, Action::attack(CombatantId(1), CombatantId(3)))
        .unwrap_err();
    assert!(matches!(
        error,
        ExecuteError::Attack(ref e)
            if e.error == AttackError::Action(ActionError::AlreadyActed(CombatantId(1)))
    ));

    let error = run(&mut state, &NEVER, Action::attack(CombatantId(2), CombatantId(5)))
        .unwrap_err();
    assert!(matches!(
        error,
        ExecuteError::Attack(ref e) if e.error == AttackError::FriendlyTarget(CombatantId(5))
    ));
}

#[test]
fn failed_apply_rolls_back_state() {
    let mut state = standard_match();
    let mut bag = Bag::empty();
    for id in 0..BattleConfig::MAX_BAG_SLOTS as u32 {
        bag.add(ItemKind::Catalog(ItemId(id)), 1).unwrap();
    }
    state.combatant_mut(CombatantId(1)).unwrap().bag = bag;
    let before = state.clone();

    let error = run(
        &mut state,
        &FixedRoll(7),
        Action::Loot(LootAction { actor: CombatantId(1) }),
    )
    .unwrap_err();

    match error {
        ExecuteError::Loot(phase_error) => {
            assert_eq!(phase_error.phase, TransitionPhase::Apply);
            assert_eq!(phase_error.error, LootError::BagFull(CombatantId(1)));
        }
        other => panic!("unexpected error {other:?}"),
    }
    assert_eq!(state, before);
}

#[test]
fn looted_boost_feeds_a_later_exchange() {
    let mut state = standard_match();

    let outcome = run(
        &mut state,
        &FixedRoll(7),
        Action::Loot(LootAction { actor: CombatantId(5) }),
    )
    .unwrap();
    assert_eq!(outcome.result, ActionResult::Loot { roll: 7, reward: 700 });

    let bag = &state.combatant(CombatantId(5)).unwrap().bag;
    assert_eq!(bag.slot(0).unwrap().item, ItemKind::PowerBoost(700));
    assert_eq!(state.combatant(CombatantId(5)).unwrap().current_hp, 2000);

    pass(&mut state);
    pass(&mut state);

    run(
        &mut state,
        &NEVER,
        Action::UseItem(UseItemAction::new(
            CombatantId(5),
            BagSource::Own,
            0,
            CombatantId(1),
        )),
    )
    .unwrap();
    assert_eq!(state.combatant(CombatantId(1)).unwrap().pending_boost, 700);
    assert!(state.combatant(CombatantId(5)).unwrap().bag.is_empty());

    let outcome = run(&mut state, &NEVER, Action::attack(CombatantId(1), CombatantId(3))).unwrap();
    let ActionResult::Attack(attack) = outcome.result else {
        panic!("expected attack result");
    };
    // 2000 * 1.35 = 2700, +700 boost
    assert_eq!(attack.exchange.attacker.effective_power, 3400);
    assert_eq!(state.combatant(CombatantId(1)).unwrap().pending_boost, 0);
}

#[test]
fn items_heal_and_boost_teammates() {
    let rules = BattleConfig::default();
    let catalog = CatalogSnapshot::new(
        [],
        [ItemDefinition {
            id: ItemId(1),
            name: "Potion".into(),
            effect: ItemEffect::Heal(2000),
        }],
    );

    let mut state = standard_match();
    let mut shared = Bag::empty();
    shared.add(ItemKind::Catalog(ItemId(1)), 1).unwrap();
    shared.add(ItemKind::PowerBoost(500), 1).unwrap();
    state.shared_bag = shared;
    state.combatant_mut(CombatantId(2)).unwrap().current_hp = 500;

    let env = BattleEnv::new(&rules, &NEVER).with_catalog(&catalog);
    let mut engine = BattleEngine::new(&mut state);

    let outcome = engine
        .execute(
            env,
            &Action::UseItem(UseItemAction::new(
                CombatantId(1),
                BagSource::Shared,
                0,
                CombatantId(2),
            )),
        )
        .unwrap();
    let ActionResult::UseItem(item) = outcome.result else {
        panic!("expected item result");
    };
    assert_eq!(item.healed, 2000);
    assert!(outcome.delta.turn.contains(TurnFields::SHARED_BAG));

    engine
        .execute(
            env,
            &Action::UseItem(UseItemAction::new(
                CombatantId(2),
                BagSource::Shared,
                0,
                CombatantId(5),
            )),
        )
        .unwrap();

    let outcome = engine
        .execute(env, &Action::attack(CombatantId(5), CombatantId(4)))
        .unwrap();
    let ActionResult::Attack(attack) = outcome.result else {
        panic!("expected attack result");
    };
    // Virus 2000 -> 700 power, favored over Data: 945 -> 900, +500 boost
    assert_eq!(attack.exchange.attacker.effective_power, 1400);

    let state = engine.state();
    assert_eq!(state.combatant(CombatantId(2)).unwrap().current_hp, 2500);
    assert_eq!(state.combatant(CombatantId(5)).unwrap().pending_boost, 0);
    assert!(state.shared_bag.is_empty());
}

#[test]
fn catalog_items_need_a_catalog() {
    let mut state = standard_match();
    state
        .shared_bag
        .add(ItemKind::Catalog(ItemId(1)), 1)
        .unwrap();

    let error = run(
        &mut state,
        &NEVER,
        Action::UseItem(UseItemAction::new(
            CombatantId(1),
            BagSource::Shared,
            0,
            CombatantId(1),
        )),
    )
    .unwrap_err();
    assert!(matches!(
        error,
        ExecuteError::UseItem(ref e)
            if e.error == battle_core::ItemError::Oracle(OracleError::CatalogNotAvailable)
    ));
}

#[test]
fn revival_is_attempted_once_per_round() {
    let mut state = standard_match();
    state.combatant_mut(CombatantId(2)).unwrap().current_hp = 0;

    let outcome = run(
        &mut state,
        &NEVER,
        Action::Revive(ReviveAction::new(CombatantId(1), CombatantId(2), 0)),
    )
    .unwrap();
    let ActionResult::Revive(revival) = outcome.result else {
        panic!("expected revival result");
    };
    assert!(!revival.revived);
    assert_eq!(revival.chance, 15);
    assert_eq!(state.combatant(CombatantId(1)).unwrap().readiness, Readiness::Acted);

    let error = run(
        &mut state,
        &FixedRoll(1),
        Action::Revive(ReviveAction::new(CombatantId(5), CombatantId(2), 100)),
    )
    .unwrap_err();
    assert!(matches!(
        error,
        ExecuteError::Revive(ref e) if e.error == ReviveError::AlreadyAttempted { round: Round(1) }
    ));

    pass(&mut state);
    pass(&mut state);

    let outcome = run(
        &mut state,
        &FixedRoll(15),
        Action::Revive(ReviveAction::new(CombatantId(5), CombatantId(2), 0)),
    )
    .unwrap();
    let ActionResult::Revive(revival) = outcome.result else {
        panic!("expected revival result");
    };
    assert!(revival.revived);

    let revived = state.combatant(CombatantId(2)).unwrap();
    assert_eq!(revived.current_hp, 3000);
    assert_eq!(revived.readiness, Readiness::Acted);
}

#[test]
fn revive_rejects_living_targets_and_bad_modifiers() {
    let mut state = standard_match();

    let error = run(
        &mut state,
        &NEVER,
        Action::Revive(ReviveAction::new(CombatantId(1), CombatantId(2), 0)),
    )
    .unwrap_err();
    assert!(matches!(
        error,
        ExecuteError::Revive(ref e) if e.error == ReviveError::TargetAlive(CombatantId(2))
    ));

    let error = run(
        &mut state,
        &NEVER,
        Action::Revive(ReviveAction::new(CombatantId(1), CombatantId(2), 101)),
    )
    .unwrap_err();
    assert!(matches!(
        error,
        ExecuteError::Revive(ref e)
            if e.error == ReviveError::ModifierOutOfRange { modifier: 101, max: 100 }
    ));
}

#[test]
fn damage_taken_can_unlock_evolution() {
    let mut state = standard_match();

    let outcome = run(&mut state, &FixedRoll(1), Action::attack(CombatantId(1), CombatantId(3)))
        .unwrap();

    let ActionResult::Attack(attack) = outcome.result else {
        panic!("expected attack result");
    };
    assert!(attack.attacker_unlocked);
    assert!(attack.target_unlocked);
    assert_eq!(
        state.combatant(CombatantId(3)).unwrap().evolution,
        EvolutionGate::Unlocked
    );
    assert!(
        outcome
            .delta
            .fields_of(CombatantId(1))
            .contains(CombatantFields::EVOLUTION)
    );
}

#[test]
fn evolve_is_free_and_follows_catalog_edges() {
    let rules = BattleConfig::default();
    let definition = |id: u32, level: u8, base_power: u32, evolves_to: Vec<CatalogId>| {
        CreatureDefinition {
            id: CatalogId(id),
            name: format!("form-{id}"),
            level,
            creature_type: CreatureType::Vaccine,
            attribute: None,
            base_power,
            evolves_to,
        }
    };
    let catalog = CatalogSnapshot::new(
        [
            definition(10, 0, 2000, vec![CatalogId(11)]),
            definition(11, 1, 4000, vec![CatalogId(12)]),
            definition(12, 2, 7000, vec![]),
        ],
        [],
    );

    let rookie = catalog_combatant(&catalog, 1, 10);
    let mut state = MatchState::new(
        1,
        vec![
            player(1, vec![rookie]),
            player(2, vec![creature(3, CreatureType::Virus, 6000, 2)]),
        ],
    )
    .unwrap();

    let env = BattleEnv::new(&rules, &NEVER).with_catalog(&catalog);
    let mut engine = BattleEngine::new(&mut state);

    let error = engine
        .execute(env, &Action::Evolve(EvolveAction::new(CombatantId(1), CatalogId(11))))
        .unwrap_err();
    assert!(matches!(
        error,
        ExecuteError::Evolve(ref e) if e.error == EvolveError::Locked(CombatantId(1))
    ));

    drop(engine);
    state.combatant_mut(CombatantId(1)).unwrap().evolution = EvolutionGate::Unlocked;
    let mut engine = BattleEngine::new(&mut state);

    let error = engine
        .execute(env, &Action::Evolve(EvolveAction::new(CombatantId(1), CatalogId(12))))
        .unwrap_err();
    assert!(matches!(
        error,
        ExecuteError::Evolve(ref e)
            if e.error == EvolveError::InvalidForm { from: CatalogId(10), into: CatalogId(12) }
    ));

    let outcome = engine
        .execute(env, &Action::Evolve(EvolveAction::new(CombatantId(1), CatalogId(11))))
        .unwrap();
    assert_eq!(
        outcome.result,
        ActionResult::Evolve {
            from: CatalogId(10),
            into: CatalogId(11)
        }
    );
    assert!(
        outcome
            .delta
            .fields_of(CombatantId(1))
            .contains(CombatantFields::IDENTITY)
    );

    let evolved = engine.state().combatant(CombatantId(1)).unwrap();
    assert_eq!(evolved.origin, CatalogId(10));
    assert_eq!(evolved.base_power, 4000);
    assert_eq!(evolved.current_hp, 4000);
    assert_eq!(evolved.evolution, EvolutionGate::Locked);
    assert!(evolved.is_ready());
}

fn catalog_combatant(catalog: &CatalogSnapshot, id: u32, form: u32) -> Combatant {
    use battle_core::CatalogOracle;
    Combatant::from_definition(CombatantId(id), catalog.creature(CatalogId(form)).unwrap())
}

#[test]
fn last_attack_ends_the_match() {
    let mut state = MatchState::new(
        5,
        vec![
            player(1, vec![creature(1, CreatureType::Vaccine, 6000, 0)]),
            player(2, vec![creature(3, CreatureType::Virus, 6000, 0).with_hp(100)]),
        ],
    )
    .unwrap();

    let outcome = run(&mut state, &NEVER, Action::attack(CombatantId(1), CombatantId(3))).unwrap();

    assert!(matches!(outcome.ended, Some(MatchStatus::Finished(_))));
    let winner = outcome.winner().expect("match should be won");
    assert_eq!(winner.player, PlayerId(1));
    assert_eq!(winner.survivors.len(), 1);
    assert!(state.status.is_finished());
    assert!(outcome.delta.turn.contains(TurnFields::STATUS));

    let error = run(&mut state, &NEVER, Action::pass_turn()).unwrap_err();
    assert_eq!(error, ExecuteError::Rejected(ActionError::MatchFinished));
}

#[test]
fn mutual_knockout_ends_in_a_draw() {
    // 2700 to the defender and 1300 back: both last combatants fall together.
    let mut state = MatchState::new(
        5,
        vec![
            player(1, vec![creature(1, CreatureType::Vaccine, 6000, 0).with_hp(100)]),
            player(2, vec![creature(3, CreatureType::Virus, 6000, 0).with_hp(100)]),
        ],
    )
    .unwrap();

    let outcome = run(&mut state, &NEVER, Action::attack(CombatantId(1), CombatantId(3)))
        .unwrap();

    let ActionResult::Attack(attack) = &outcome.result else {
        panic!("expected attack result");
    };
    assert_eq!(attack.exchange.damage_to_defender(), 2700);
    assert_eq!(attack.exchange.damage_to_attacker(), 1300);
    assert_eq!(outcome.ended, Some(MatchStatus::Draw));
    assert_eq!(outcome.winner(), None);
    assert_eq!(state.status, MatchStatus::Draw);
    assert_eq!(state.turn.nonce, 1);
    assert!(state.living_players().next().is_none());

    let error = run(&mut state, &NEVER, Action::pass_turn()).unwrap_err();
    assert_eq!(error, ExecuteError::Rejected(ActionError::MatchFinished));
}

#[test]
fn malformed_rules_are_refused_untouched() {
    let mut state = standard_match();
    let before = state.clone();

    let mut rules = BattleConfig::default();
    rules.combat.rounding_unit = 0;
    let error = run_with(&rules, &mut state, &NEVER, Action::attack(CombatantId(1), CombatantId(3)))
        .unwrap_err();
    assert_eq!(error, ExecuteError::MalformedRules);
    assert_eq!(state, before);

    let mut rules = BattleConfig::default();
    rules.combat.power_divisor = 0;
    let error = run_with(&rules, &mut state, &NEVER, Action::pass_turn()).unwrap_err();
    assert_eq!(error, ExecuteError::MalformedRules);
    assert_eq!(state, before);
}

#[test]
fn nonce_advances_only_on_success() {
    let mut state = standard_match();
    assert_eq!(state.turn.nonce, 0);

    pass(&mut state);
    assert_eq!(state.turn.nonce, 1);

    let _ = run(&mut state, &NEVER, Action::attack(CombatantId(1), CombatantId(3)));
    assert_eq!(state.turn.nonce, 1);
}
