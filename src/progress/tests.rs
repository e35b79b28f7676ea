use super::*;

#[test]
fn xp_thresholds_follow_the_curve() {
    assert_eq!(xp_for_level(1), 0);
    assert_eq!(xp_for_level(2), 500);
    assert_eq!(xp_for_level(3), 1414);
    assert_eq!(xp_for_level(4), 2598);
    assert_eq!(xp_for_level(5), 4000);
    assert_eq!(xp_for_level(6), 5590);
    assert_eq!(xp_for_level(7), 7348);
    assert_eq!(xp_for_level(8), 9260);
    assert_eq!(xp_for_level(9), 11313);
    assert_eq!(xp_for_level(10), 13500);
}

#[test]
fn level_boundaries_are_inclusive_at_the_threshold() {
    assert_eq!(level_from_xp(0), 1);
    assert_eq!(level_from_xp(499), 1);
    assert_eq!(level_from_xp(500), 2);
    assert_eq!(level_from_xp(1413), 2);
    assert_eq!(level_from_xp(1414), 3);
    assert_eq!(level_from_xp(2597), 3);
    assert_eq!(level_from_xp(2598), 4);
}

#[test]
fn more_xp_never_lowers_the_level() {
    let mut last = 0;
    for xp in (0..20_000).step_by(137) {
        let level = level_from_xp(xp);
        assert!(level >= last, "level dropped at xp {}", xp);
        last = level;
    }
}

#[test]
fn xp_progress_clamps_percentage_for_a_stale_level() {
    // 1707 XP is past the level 3 threshold; a caller still holding level 2
    // gets a full but never overflowing bar.
    let progress = xp_progress(1707, 2);
    assert_eq!(progress.current, 1207);
    assert_eq!(progress.needed, 914);
    assert_eq!(progress.percentage, 100);
}

#[test]
fn xp_progress_midway_through_a_level() {
    let progress = xp_progress(700, 2);
    assert_eq!(progress.current, 200);
    assert_eq!(progress.needed, 914);
    assert_eq!(progress.percentage, 21);
}

#[test]
fn rank_titles_cap_at_the_last_entry() {
    assert_eq!(rank_title(1), "Apprentice");
    assert_eq!(rank_title(2), "Scribe");
    assert_eq!(rank_title(10), "Stellar Sovereign");
    assert_eq!(rank_title(42), "Stellar Sovereign");
}

#[test]
fn award_xp_reports_level_ups() {
    let record = ProgressRecord::new();
    let (next, outcome) = award_xp(&record, 600);

    assert_eq!(next.xp, 600);
    assert_eq!(next.level, 2);
    assert!(outcome.leveled_up);
    assert_eq!(outcome.new_level, 2);

    let (next, outcome) = award_xp(&next, 100);
    assert_eq!(next.level, 2);
    assert!(!outcome.leveled_up);
}

#[test]
fn transitions_never_mutate_their_input() {
    let record = ProgressRecord::new();
    let snapshot = record.clone();

    let _ = record_attempt(&record, "hello-soroban");
    let _ = award_xp(&record, 300);
    let _ = complete_mission(&record, "hello-soroban", 100);

    assert_eq!(record, snapshot);
}

#[test]
fn completing_a_mission_awards_xp_and_marks_it_done() {
    let record = record_attempt(&ProgressRecord::new(), "hello-soroban");
    let (next, outcome) = complete_mission(&record, "hello-soroban", 100);

    assert!(!outcome.already_completed);
    assert_eq!(outcome.xp_awarded, 100);
    assert!(next.has_completed("hello-soroban"));
    assert_eq!(next.xp, 100);
}

#[test]
fn repeated_completion_is_a_no_op() {
    let record = record_attempt(&ProgressRecord::new(), "hello-soroban");
    let (once, _) = complete_mission(&record, "hello-soroban", 100);
    let (twice, outcome) = complete_mission(&once, "hello-soroban", 100);

    assert!(outcome.already_completed);
    assert_eq!(outcome.xp_awarded, 0);
    assert!(outcome.new_badges.is_empty());
    assert_eq!(twice, once);
}

#[test]
fn first_completion_earns_the_first_contract_badge() {
    let record = record_attempt(&ProgressRecord::new(), "hello-soroban");
    let (next, outcome) = complete_mission(&record, "hello-soroban", 100);

    assert!(outcome.new_badges.contains(&"first_contract"));
    assert!(next.has_badge("first_contract"));
}

#[test]
fn first_try_completion_earns_speed_demon() {
    let record = record_attempt(&ProgressRecord::new(), "hello-soroban");
    let (_, outcome) = complete_mission(&record, "hello-soroban", 100);

    assert!(outcome.first_try);
    assert!(outcome.new_badges.contains(&"speed_demon"));
}

#[test]
fn multi_attempt_completion_is_not_first_try() {
    let mut record = ProgressRecord::new();
    for _ in 0..3 {
        record = record_attempt(&record, "hello-soroban");
    }
    let (next, outcome) = complete_mission(&record, "hello-soroban", 100);

    assert!(!outcome.first_try);
    assert!(!next.has_badge("speed_demon"));
}

#[test]
fn badge_thresholds_accumulate_across_missions() {
    let mut record = ProgressRecord::new();
    let missions = ["m1", "m2", "m3", "m4", "m5", "m6", "m7"];

    for (i, id) in missions.iter().enumerate() {
        record = record_attempt(&record, id);
        let (next, outcome) = complete_mission(&record, id, 300);
        record = next;

        match i + 1 {
            1 => assert!(outcome.new_badges.contains(&"first_contract")),
            3 => assert!(outcome.new_badges.contains(&"triple_threat")),
            5 => assert!(outcome.new_badges.contains(&"five_star")),
            7 => assert!(outcome.new_badges.contains(&"completionist")),
            _ => {}
        }
    }

    assert!(record.has_badge("xp_1000"));
    assert_eq!(record.xp, 2100);
}

#[test]
fn badges_are_never_awarded_twice() {
    let record = record_attempt(&ProgressRecord::new(), "m1");
    let (record, _) = complete_mission(&record, "m1", 100);

    let (next, outcome) = evaluate_badges(&record);
    assert!(outcome.new_badges.is_empty());
    assert_eq!(next.badges, record.badges);
}

#[test]
fn badge_table_ids_are_unique_and_resolvable() {
    for badge in &BADGES {
        assert_eq!(badge_by_id(badge.id).map(|b| b.name), Some(badge.name));
    }
    let mut ids: Vec<_> = BADGES.iter().map(|b| b.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), BADGES.len());
}

#[test]
fn normalized_rederives_level_and_dedupes() {
    let mut record = ProgressRecord {
        xp: 1500,
        level: 1,
        ..ProgressRecord::default()
    };
    record.completed_missions = vec!["a".into(), "b".into(), "a".into()];
    record.badges = vec!["first_contract".into(), "first_contract".into()];

    let normalized = record.normalized();
    assert_eq!(normalized.level, 3);
    assert_eq!(normalized.completed_missions, vec!["a", "b"]);
    assert_eq!(normalized.badges, vec!["first_contract"]);
}

#[test]
fn completing_the_current_mission_clears_it() {
    let mut record = record_attempt(&ProgressRecord::new(), "hello-soroban");
    record.current_mission = Some("hello-soroban".to_string());

    let (next, _) = complete_mission(&record, "hello-soroban", 100);
    assert_eq!(next.current_mission, None);
}
