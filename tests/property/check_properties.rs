use gradcheck::{Catalog, EnrollmentRecord, EnrollmentStatus, RequirementChecker};
use proptest::prelude::*;

fn builtin() -> Catalog {
    Catalog::builtin().unwrap()
}

fn course_ids() -> Vec<String> {
    let mut ids: Vec<String> = builtin().courses().map(|c| c.id.clone()).collect();
    ids.push("UNKNOWN1".to_string());
    ids
}

fn arb_status() -> impl Strategy<Value = EnrollmentStatus> {
    prop_oneof![
        Just(EnrollmentStatus::Completed),
        Just(EnrollmentStatus::Planned),
        Just(EnrollmentStatus::InProgress),
    ]
}

fn arb_record() -> impl Strategy<Value = EnrollmentRecord> {
    (prop::sample::select(course_ids()), arb_status(), prop::option::of(1u32..6)).prop_map(
        |(course_id, status, year)| EnrollmentRecord {
            course_id,
            status,
            year,
        },
    )
}

fn arb_records() -> impl Strategy<Value = Vec<EnrollmentRecord>> {
    prop::collection::vec(arb_record(), 0..40)
}

proptest! {
    #[test]
    fn total_all_is_completed_plus_planned(records in arb_records(), native in any::<bool>()) {
        let checker = RequirementChecker::new(builtin(), native);
        let summary = checker.summarize(&records);
        prop_assert_eq!(summary.total.all, summary.total.completed + summary.total.planned);
    }

    #[test]
    fn check_is_idempotent(records in arb_records(), native in any::<bool>()) {
        let checker = RequirementChecker::new(builtin(), native);
        prop_assert_eq!(checker.check(&records), checker.check(&records));
    }

    #[test]
    fn shortfall_arithmetic(records in arb_records(), native in any::<bool>()) {
        let checker = RequirementChecker::new(builtin(), native);
        let result = checker.check(&records);
        for check in &result.category_checks {
            prop_assert_eq!(
                check.missing_credits,
                check.min_credits.saturating_sub(check.current_credits)
            );
            prop_assert_eq!(check.is_completed, check.missing_credits == 0);
        }
    }

    #[test]
    fn track_a_invisible_to_non_native(records in arb_records()) {
        let checker = RequirementChecker::new(builtin(), false);
        let track_a: Vec<String> = checker
            .catalog()
            .entries()
            .iter()
            .filter(|e| e.placement.track.is_excluded(false))
            .map(|e| e.course.id.clone())
            .collect();

        let without: Vec<EnrollmentRecord> = records
            .iter()
            .filter(|r| !track_a.contains(&r.course_id))
            .cloned()
            .collect();

        // 加上A方向课程与否，汇总结果完全相同
        prop_assert_eq!(checker.summarize(&records), checker.summarize(&without));

        let result = checker.check(&records);
        prop_assert!(result.missing_required.iter().all(|c| !track_a.contains(&c.id)));
    }

    #[test]
    fn completing_required_course_is_monotone(records in arb_records(), native in any::<bool>(), pick in any::<prop::sample::Index>()) {
        let checker = RequirementChecker::new(builtin(), native);
        let required: Vec<String> = checker
            .catalog()
            .entries()
            .iter()
            .filter(|e| e.course.required && !e.placement.track.is_excluded(native))
            .map(|e| e.course.id.clone())
            .collect();
        let id = pick.get(&required[..]).clone();

        let before = checker.check(&records).missing_required;
        let mut extended = records.clone();
        extended.push(EnrollmentRecord::new(id.clone(), EnrollmentStatus::Completed));
        let after = checker.check(&extended).missing_required;

        if before.iter().any(|c| c.id == id) {
            prop_assert_eq!(after.len() + 1, before.len());
        } else {
            prop_assert_eq!(after.len(), before.len());
        }
    }

    #[test]
    fn can_graduate_matches_failures(records in arb_records(), native in any::<bool>()) {
        let checker = RequirementChecker::new(builtin(), native);
        let result = checker.check(&records);
        let any_failure = !result.total_credits.is_completed
            || result.category_checks.iter().any(|c| !c.is_completed)
            || !result.missing_required.is_empty()
            || !result.warnings.is_empty();
        prop_assert_eq!(result.can_graduate, !any_failure);
    }
}
