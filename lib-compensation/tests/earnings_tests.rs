//! Integration tests for end-to-end earnings over generated and hand-built trees.

use lib_compensation::{
    create_random_downline, CompensationError, CompensationPlan, DifferentialBonus, DownlineShape,
    SponsorTree,
};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}

#[test]
fn test_new_root_end_to_end() {
    let mut tree = SponsorTree::new();
    let root = tree.enroll_with_volume(None, 1, 150.0, 90.0).unwrap();
    let ibo = tree.participant(root).unwrap();

    let breakdown = ibo.calculate_earnings_breakdown().unwrap();
    assert_eq!(breakdown.group_pv, 150.0);
    assert_eq!(breakdown.bonus_percentage, 0.03);
    assert_close(breakdown.personal_bonus, 15.12);
    assert_eq!(breakdown.differential_bonus, 0.0);
    assert_close(breakdown.csi_bonus, 21.168);
    assert_close(breakdown.retail_profit, 30.24);
    assert_close(breakdown.total_earnings, 66.528);
}

#[test]
fn test_generated_downline_root_earnings() {
    let mut tree = SponsorTree::new();
    let root = tree.enroll(None, 12).unwrap();
    let shape = DownlineShape::default();
    let created = create_random_downline(&mut tree, root, &shape).unwrap();
    assert_eq!(created.len(), shape.frontline_count + shape.downline_count);

    let ibo = tree.participant(root).unwrap();
    // 51 participants at 150 PV each
    assert_eq!(ibo.calculate_group_pv().unwrap(), 7_650.0);
    assert_eq!(ibo.calculate_bonus_percentage().unwrap(), 0.25);

    // Differential is the sum over the frontline legs only
    let by_leg: f64 = ibo
        .differential_bonus_list()
        .iter()
        .map(|differential| differential.calculate_amount().unwrap())
        .sum();
    assert_close(ibo.calculate_differential_bonus().unwrap(), by_leg);

    let total = ibo.calculate_total_earnings().unwrap();
    assert_close(
        total,
        ibo.calculate_personal_bonus().unwrap()
            + by_leg
            + ibo.calculate_csi_bonus().unwrap()
            + ibo.calculate_retail_profit(),
    );
}

#[test]
fn test_unqualified_downline_does_not_block_upline() {
    let mut tree = SponsorTree::new();
    let root = tree.enroll(None, 1).unwrap();
    let unqualified = tree.enroll_with_volume(Some(root), 1, 500.0, 10.0).unwrap();

    // Volume and tiers still count the unqualified leg
    let root_view = tree.participant(root).unwrap();
    assert_eq!(root_view.calculate_group_pv().unwrap(), 650.0);
    assert!(root_view.calculate_total_earnings().is_ok());

    let leg = tree.participant(unqualified).unwrap();
    assert!(leg.calculate_group_bv().is_ok());
    let err = leg.calculate_total_earnings().unwrap_err();
    assert!(err.is_qualification());
    assert!(err.to_string().contains("does not qualify for the bonus"));
}

#[test]
fn test_differential_constructor_matches_list() {
    let mut tree = SponsorTree::new();
    let root = tree.enroll_with_volume(None, 1, 900.0, 540.0).unwrap();
    let leg = tree.enroll_with_volume(Some(root), 1, 120.0, 72.0).unwrap();

    let upline = tree.participant(root).unwrap();
    let downline = tree.participant(leg).unwrap();
    let explicit = DifferentialBonus::new(upline, downline).unwrap();
    let listed = upline.differential_bonus_list();

    assert_eq!(
        explicit.calculate_amount().unwrap(),
        listed[0].calculate_amount().unwrap()
    );
    // 1020 PV = 12% against 120 PV = 3%
    assert_close(explicit.calculate_amount().unwrap(), 0.09 * 120.0 * 3.36);
}

#[test]
fn test_structural_violation_propagates_to_earnings() {
    let plan = CompensationPlan {
        max_depth: 2,
        ..CompensationPlan::default()
    };
    let mut tree = SponsorTree::with_plan(plan).unwrap();
    let root = tree.enroll(None, 1).unwrap();
    let a = tree.enroll(Some(root), 1).unwrap();
    let b = tree.enroll(Some(a), 1).unwrap();
    let _c = tree.enroll(Some(b), 1).unwrap();

    let ibo = tree.participant(root).unwrap();
    assert!(matches!(
        ibo.calculate_total_earnings(),
        Err(CompensationError::StructuralViolation { .. })
    ));
    assert!(tree.participant(a).unwrap().calculate_total_earnings().is_ok());
}

#[test]
fn test_unknown_participant() {
    let mut small = SponsorTree::new();
    small.enroll(None, 1).unwrap();

    let mut large = SponsorTree::new();
    let root = large.enroll(None, 1).unwrap();
    let child = large.enroll(Some(root), 1).unwrap();

    assert!(matches!(
        small.participant(child),
        Err(CompensationError::UnknownParticipant(id)) if id == child
    ));
}

#[test]
fn test_queries_do_not_mutate() {
    let mut tree = SponsorTree::new();
    let root = tree.enroll(None, 4).unwrap();
    create_random_downline(
        &mut tree,
        root,
        &DownlineShape {
            month: 4,
            frontline_count: 5,
            downline_count: 15,
        },
    )
    .unwrap();

    let ibo = tree.participant(root).unwrap();
    let first = ibo.calculate_earnings_breakdown().unwrap();
    let second = ibo.calculate_earnings_breakdown().unwrap();
    assert_eq!(first, second);
}
