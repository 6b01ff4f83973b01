use engine::combat::attack::classify;
use engine::sim::{attack_mean, hit_rate};
use engine::{
    attack_roll, bolt_damage, resolve_attack, sneak_damage, AttackOutcome, CombatStats,
    DamageKind, Dice,
};

const STATS: CombatStats = CombatStats::CROSSBOW_ROGUE;

#[test]
fn every_face_classifies_as_expected() {
    for face in 1..=20 {
        let expected = match face {
            1..=8 => AttackOutcome::Miss,
            9..=18 => AttackOutcome::Hit,
            _ => AttackOutcome::Critical,
        };
        assert_eq!(classify(face, &STATS), expected, "face {}", face);
    }
}

#[test]
fn natural_crit_ignores_the_total() {
    let hopeless = CombatStats {
        attack_bonus: -50,
        ..STATS
    };
    assert_eq!(classify(19, &hopeless), AttackOutcome::Critical);
    assert_eq!(classify(20, &hopeless), AttackOutcome::Critical);
    assert_eq!(classify(18, &hopeless), AttackOutcome::Miss);
}

#[test]
fn attack_roll_uses_one_d20() {
    assert_eq!(attack_roll(&mut Dice::from_scripted(vec![19]), &STATS), AttackOutcome::Critical);
    assert_eq!(attack_roll(&mut Dice::from_scripted(vec![9]), &STATS), AttackOutcome::Hit);
    assert_eq!(attack_roll(&mut Dice::from_scripted(vec![8]), &STATS), AttackOutcome::Miss);
}

#[test]
fn landed_covers_hit_and_crit() {
    assert!(!AttackOutcome::Miss.landed());
    assert!(AttackOutcome::Hit.landed());
    assert!(AttackOutcome::Critical.landed());
}

#[test]
fn miss_rolls_no_damage() {
    // A damage roll would exhaust the script and panic.
    let mut dice = Dice::from_scripted(vec![3]);
    assert_eq!(resolve_attack(&mut dice, &STATS, bolt_damage), 0);
}

#[test]
fn hit_deals_damage_once() {
    let mut dice = Dice::from_scripted(vec![12, 4]);
    assert_eq!(resolve_attack(&mut dice, &STATS, bolt_damage), 5);
}

#[test]
fn crit_multiplies_one_damage_result() {
    let mut dice = Dice::from_scripted(vec![20, 4]);
    assert_eq!(resolve_attack(&mut dice, &STATS, bolt_damage), 10);

    let mut dice = Dice::from_scripted(vec![19, 8, 6, 6]);
    assert_eq!(resolve_attack(&mut dice, &STATS, sneak_damage), 42);
}

#[test]
fn sampled_hit_probability_is_sixty_percent() {
    let ph = hit_rate(&mut Dice::from_seed(7), &STATS, 1_000_000);
    assert!((ph - 0.6).abs() < 0.005, "hit rate {}", ph);
}

#[test]
fn sampled_sneak_attack_is_seventy_percent_of_a_sneak_hit() {
    let d_lh = attack_mean(&mut Dice::from_seed(8), &STATS, DamageKind::Sneak, 1_000_000);
    let ratio = d_lh / 12.5;
    assert!((ratio - 0.7).abs() < 0.02, "ratio {}", ratio);
}
