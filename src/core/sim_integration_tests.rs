use crate::core::catalog::Catalog;
use crate::core::checker::RequirementChecker;
use crate::core::models::{BasicCategory, EnrollmentRecord, EnrollmentStatus};
use crate::core::planner::PlanValidator;
use crate::core::test_support::{completed, graduating_native, in_progress, planned, sample_catalog};
use crate::storage::database::EnrollmentStore;
use tempfile::tempdir;

fn builtin_checker(native: bool) -> RequirementChecker {
    RequirementChecker::new(Catalog::builtin().unwrap(), native)
}

#[test]
fn sim_empty_enrollments_cannot_graduate() {
    let checker = builtin_checker(true);
    let result = checker.check(&[]);

    assert!(!result.can_graduate);
    assert_eq!(result.total_credits.current, 0);
    assert_eq!(result.total_credits.required, 124);

    for kind in BasicCategory::ALL {
        let name = &checker
            .catalog()
            .requirements()
            .basic_category(kind)
            .unwrap()
            .name;
        assert!(
            result
                .warnings
                .iter()
                .any(|w| w.starts_with(name.as_str()) && w.ends_with("尚未修读任何课程")),
            "missing presence warning for {name}"
        );
    }
}

#[test]
fn sim_full_completion_graduates() {
    let checker = RequirementChecker::new(sample_catalog(), true);
    let result = checker.check(&graduating_native());

    assert!(result.can_graduate);
    assert!(result.missing_required.is_empty());
    assert!(result.total_credits.is_completed);
}

#[test]
fn sim_builtin_catalog_is_satisfiable_for_both_tracks() {
    for native in [true, false] {
        let checker = builtin_checker(native);
        // 修完所有适用课程
        let records: Vec<EnrollmentRecord> = checker
            .catalog()
            .entries()
            .iter()
            .filter(|e| !e.placement.track.is_excluded(native))
            .map(|e| EnrollmentRecord::new(e.course.id.clone(), EnrollmentStatus::Completed))
            .collect();

        let result = checker.check(&records);
        assert!(result.can_graduate, "native={native}: {:?}", result.warnings);
    }
}

#[test]
fn sim_in_progress_required_still_missing() {
    let checker = RequirementChecker::new(sample_catalog(), true);
    let result = checker.check(&[in_progress("MAJ101")]);

    assert!(result.missing_required.iter().any(|c| c.id == "MAJ101"));
    assert!(!result.can_graduate);
}

#[test]
fn sim_year_overload_reported() {
    let checker = builtin_checker(true);
    let ids = [
        "ELE201", "ELE202", "ELE203", "ELE204", "ELE301", "ELE302", "ELE303", "ELE304", "ELE305",
        "ELE306", "ELE307", "HUM101",
    ];
    let records: Vec<EnrollmentRecord> = ids.iter().map(|id| planned(id).in_year(2)).collect();

    let plan = PlanValidator::new(&checker).validate_plan(&records);

    assert!(!plan.is_valid);
    assert_eq!(plan.issues.len(), 1);
    assert!(plan.issues[0].contains("第2学年"));
    assert!(plan.issues[0].contains("超出 2 学分"));
}

#[test]
fn sim_exclusivity_for_non_native() {
    let checker = RequirementChecker::new(sample_catalog(), false);
    let summary = checker.summarize(&[completed("ENG101"), planned("ENG102")]);

    assert_eq!(summary.total.all, 0);
    assert!(summary.categories.values().all(|c| c.completed == 0 && c.planned == 0));

    let result = checker.check(&[]);
    assert!(!result.missing_required.iter().any(|c| c.id == "ENG101"));
}

#[test]
fn sim_store_to_check_roundtrip() {
    let dir = tempdir().unwrap();
    let store = EnrollmentStore::open(&dir.path().join("enrollments.db")).unwrap();

    for record in graduating_native() {
        store.add_enrollment(&record).unwrap();
    }
    // 改为正在修读后必修课程重新缺失
    store
        .update_status("MAJ101", EnrollmentStatus::InProgress)
        .unwrap();

    let records = store.list_enrollments().unwrap();
    let checker = RequirementChecker::new(sample_catalog(), true);
    let result = checker.check(&records);

    assert!(!result.can_graduate);
    let ids: Vec<_> = result.missing_required.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["MAJ101"]);
}
