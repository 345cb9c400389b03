//! Golden Vector Tests for the compensation engine
//!
//! Hand-computed earnings for fixed trees. If any of these fail, a payout
//! formula, constant or tier boundary changed.
//!
//! # Updating Golden Vectors
//!
//! 1. Update the calculation code
//! 2. Recompute the expected values by hand and update them here
//! 3. Document the plan change in the commit message

#[cfg(test)]
mod tests {
    use crate::{CompensationError, ParticipantId, SponsorTree};

    const EPSILON: f64 = 1e-9;

    fn assert_golden(actual: f64, expected: f64, name: &str) {
        assert!(
            (actual - expected).abs() < EPSILON,
            "Golden vector mismatch: {}: expected {}, got {}",
            name,
            expected,
            actual
        );
    }

    // =========================================================================
    // GOLDEN VECTOR: New participant, no downline
    // =========================================================================

    /// Group PV 150 sits in the 3% tier.
    ///
    /// - personal_bonus: 0.03 * 150 * 3.36 = 15.12
    /// - differential: 0 (no frontline)
    /// - csi: min((0.10 - 0.03) * 90 * 3.36, 75) = 21.168
    /// - retail: 0.10 * 90 * 3.36 = 30.24
    /// - total: 66.528
    #[test]
    fn golden_single_new_participant() {
        let mut tree = SponsorTree::new();
        let root = tree.enroll(None, 1).unwrap();
        let ibo = tree.participant(root).unwrap();

        assert_eq!(ibo.calculate_group_pv().unwrap(), 150.0);
        assert_eq!(ibo.calculate_bonus_percentage().unwrap(), 0.03);
        assert_golden(ibo.calculate_personal_bonus().unwrap(), 15.12, "personal");
        assert_golden(ibo.calculate_differential_bonus().unwrap(), 0.0, "differential");
        assert_golden(ibo.calculate_csi_bonus().unwrap(), 21.168, "csi");
        assert_golden(ibo.calculate_retail_profit(), 30.24, "retail");
        assert_golden(ibo.calculate_total_earnings().unwrap(), 66.528, "total");
    }

    // =========================================================================
    // GOLDEN VECTOR: Twenty new frontline participants
    // =========================================================================

    /// Root group PV = 21 * 150 = 3150 (18%), each leg 150 (3%).
    ///
    /// - personal_bonus: 0.18 * 150 * 3.36 = 90.72
    /// - differential: 20 * (0.18 - 0.03) * 150 * 3.36 = 1512.00
    /// - csi: 0 (tier above 10%)
    /// - retail: 30.24
    /// - total: 1632.96
    #[test]
    fn golden_wide_frontline() {
        let mut tree = SponsorTree::new();
        let root = tree.enroll(None, 12).unwrap();
        for _ in 0..20 {
            tree.enroll(Some(root), 12).unwrap();
        }
        let ibo = tree.participant(root).unwrap();

        assert_eq!(ibo.calculate_group_pv().unwrap(), 3_150.0);
        assert_eq!(ibo.calculate_bonus_percentage().unwrap(), 0.18);
        assert_golden(ibo.calculate_personal_bonus().unwrap(), 90.72, "personal");
        assert_golden(ibo.calculate_differential_bonus().unwrap(), 1_512.0, "differential");
        assert_golden(ibo.calculate_csi_bonus().unwrap(), 0.0, "csi");
        assert_golden(ibo.calculate_total_earnings().unwrap(), 1_632.96, "total");
    }

    // =========================================================================
    // GOLDEN VECTOR: Three-level tree with mixed volumes
    // =========================================================================

    /// ```text
    /// root (200 / 120)          group 1900 -> 15%
    /// ├─ a (400 / 240)          group  700 ->  9%
    /// │  └─ a1 (300 / 200)      group  300 ->  6%
    /// └─ b (1000 / 600)         group 1000 -> 12%
    /// ```
    fn mixed_tree() -> (SponsorTree, [ParticipantId; 4]) {
        let mut tree = SponsorTree::new();
        let root = tree.enroll_with_volume(None, 1, 200.0, 120.0).unwrap();
        let a = tree.enroll_with_volume(Some(root), 1, 400.0, 240.0).unwrap();
        let b = tree.enroll_with_volume(Some(root), 1, 1_000.0, 600.0).unwrap();
        let a1 = tree.enroll_with_volume(Some(a), 1, 300.0, 200.0).unwrap();
        (tree, [root, a, b, a1])
    }

    /// - differential: (0.15 - 0.09) * 700 * 3.36 + (0.15 - 0.12) * 1000 * 3.36
    ///   = 141.12 + 100.80 = 241.92
    /// - personal: 0.15 * 200 * 3.36 = 100.80
    /// - retail: 0.10 * 120 * 3.36 = 40.32
    /// - total: 383.04
    #[test]
    fn golden_mixed_tree_root() {
        let (tree, [root, ..]) = mixed_tree();
        let ibo = tree.participant(root).unwrap();

        assert_eq!(ibo.calculate_group_pv().unwrap(), 1_900.0);
        assert_eq!(ibo.calculate_bonus_percentage().unwrap(), 0.15);
        assert_golden(ibo.calculate_differential_bonus().unwrap(), 241.92, "differential");
        assert_golden(ibo.calculate_personal_bonus().unwrap(), 100.8, "personal");
        assert_golden(ibo.calculate_csi_bonus().unwrap(), 0.0, "csi");
        assert_golden(ibo.calculate_retail_profit(), 40.32, "retail");
        assert_golden(ibo.calculate_total_earnings().unwrap(), 383.04, "total");
    }

    /// - personal: 0.09 * 400 * 3.36 = 120.96
    /// - differential: (0.09 - 0.06) * 300 * 3.36 = 30.24
    /// - csi: (0.10 - 0.09) * 240 * 3.36 = 8.064
    /// - retail: 0.10 * 240 * 3.36 = 80.64
    /// - total: 239.904
    #[test]
    fn golden_mixed_tree_middle_leg() {
        let (tree, [_, a, ..]) = mixed_tree();
        let ibo = tree.participant(a).unwrap();

        assert_golden(ibo.calculate_personal_bonus().unwrap(), 120.96, "personal");
        assert_golden(ibo.calculate_differential_bonus().unwrap(), 30.24, "differential");
        assert_golden(ibo.calculate_csi_bonus().unwrap(), 8.064, "csi");
        assert_golden(ibo.calculate_retail_profit(), 80.64, "retail");
        assert_golden(ibo.calculate_total_earnings().unwrap(), 239.904, "total");
    }

    /// - personal: 0.12 * 1000 * 3.36 = 403.20
    /// - retail: 0.10 * 600 * 3.36 = 201.60
    /// - total: 604.80
    #[test]
    fn golden_mixed_tree_leaf() {
        let (tree, [_, _, b, _]) = mixed_tree();
        let ibo = tree.participant(b).unwrap();

        assert_golden(ibo.calculate_total_earnings().unwrap(), 604.8, "total");
    }

    // =========================================================================
    // GOLDEN VECTOR: Unqualified participant
    // =========================================================================

    /// 59% VCS on 150 personal PV fails; 60% passes.
    #[test]
    fn golden_qualification_threshold() {
        let mut tree = SponsorTree::new();
        let short = tree.enroll_with_volume(None, 1, 150.0, 0.59 * 150.0).unwrap();
        let exact = tree.enroll_with_volume(None, 1, 150.0, 0.60 * 150.0).unwrap();

        let result = tree.participant(short).unwrap().calculate_personal_bonus();
        assert!(matches!(result, Err(CompensationError::Qualification { .. })));

        let bonus = tree.participant(exact).unwrap().calculate_personal_bonus().unwrap();
        assert_golden(bonus, 15.12, "personal at threshold");
    }
}
