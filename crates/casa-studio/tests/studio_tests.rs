//! End-to-end flow: wizard draft -> submission -> project lifecycle,
//! with catalog search running against the same studio.

use std::sync::Arc;

use casa_catalog::{CatalogStats, FilterCriteria};
use casa_domain::{Category, ProjectStatus, StyleId, Supplier};
use casa_studio::{DesignStudio, ProjectCriteria, StudioError};
use casa_test_utils::{draft_at_confirm, draft_with_basics, sample_catalog};
use casa_wizard::{Field, FieldValue, WizardError};

fn studio() -> DesignStudio {
    // RUST_LOG=debug surfaces the engines' trace output when a test fails.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
    DesignStudio::new(Arc::new(sample_catalog()))
}

#[test]
fn full_project_lifecycle() {
    let studio = studio();

    let mut draft = draft_with_basics();
    draft.toggle_style(StyleId::from("modern")).unwrap();
    draft.toggle_style(StyleId::from("nordic")).unwrap();
    draft.set_field(Field::Likes, FieldValue::Tags(vec!["bright".into(), "wood".into()]));
    while !draft.current_step().is_terminal() {
        draft.advance().unwrap();
    }

    let project = studio.submit_draft(&draft).unwrap();
    assert_eq!(project.status, ProjectStatus::Pending);
    assert_eq!(project.styles.len(), 2);

    studio.start_processing(project.id).unwrap();
    studio.update_progress(project.id, 65.0).unwrap();
    studio.complete(project.id).unwrap();

    let finished = studio.project(project.id).unwrap();
    assert_eq!(finished.status, ProjectStatus::Completed);
    assert!((finished.progress - 100.0).abs() < f32::EPSILON);
}

#[test]
fn failed_processing_can_be_retried() {
    let studio = studio();
    let project = studio.submit_draft(&draft_at_confirm()).unwrap();

    studio.start_processing(project.id).unwrap();
    studio.fail(project.id).unwrap();
    assert_eq!(
        studio.project(project.id).unwrap().status,
        ProjectStatus::Failed
    );

    studio.start_processing(project.id).unwrap();
    studio.complete(project.id).unwrap();
}

#[test]
fn validation_failures_surface_and_create_nothing() {
    let studio = studio();

    let mut draft = studio.new_draft();
    let err = draft.advance().unwrap_err();
    assert!(matches!(err, WizardError::Validation { ref missing, .. } if missing.len() == 2));

    let err = studio.submit_draft(&draft).unwrap_err();
    assert_eq!(err, StudioError::Wizard(WizardError::NotAtTerminalStep));
    assert!(!err.is_validation());
    assert_eq!(studio.project_stats().total, 0);
}

#[test]
fn project_list_filtering_matches_dashboard() {
    let studio = studio();
    for name in ["Sunlit Garden 3-801", "Riverside 5-1202", "Park Lane 8-303"] {
        let mut draft = studio.new_draft();
        draft.set_field(Field::Name, name);
        draft.set_field(Field::SourcePath, "s3://floorplans/demo/");
        while !draft.current_step().is_terminal() {
            draft.advance().unwrap();
        }
        studio.submit_draft(&draft).unwrap();
    }

    let all = studio.projects(&ProjectCriteria::new());
    assert_eq!(all.len(), 3);

    studio.start_processing(all[1].id).unwrap();

    let processing = studio.projects(&ProjectCriteria::new().with_status(ProjectStatus::Processing));
    assert_eq!(processing.len(), 1);
    assert_eq!(processing[0].name, "Riverside 5-1202");

    let stats = studio.project_stats();
    assert_eq!(stats.total, 3);
    assert_eq!(stats.pending, 2);
    assert_eq!(stats.processing, 1);
}

#[test]
fn material_search_and_stats_agree() {
    let studio = studio();

    let criteria = FilterCriteria::new()
        .with_category(Category::Floor)
        .with_price_range(100.0, 500.0);
    let (matched, stats) = studio.search_with_stats(&criteria);
    assert_eq!(matched.len(), 1);
    assert_eq!(stats, CatalogStats::of(&matched));

    let by_supplier = studio.search_materials(
        &FilterCriteria::new().with_supplier(Supplier::Showroom),
    );
    assert_eq!(by_supplier.len(), 2);
}

#[test]
fn alternatives_come_from_the_injected_catalog() {
    let studio = studio();
    let oak = studio
        .search_materials(&FilterCriteria::new().with_query("oak"))
        .pop()
        .unwrap();
    // The demo catalog has no other flooring near that price point.
    assert!(studio.alternatives(oak.id).unwrap().is_empty());
}

#[test]
fn budget_plan_covers_all_tiers() {
    let studio = studio();
    let plans = studio.budget_plan(400_000.0, 89.0).unwrap();
    assert_eq!(plans.len(), 3);
    assert!(plans.iter().all(|p| !p.allocations.is_empty()));
    assert!(studio.budget_plan(400_000.0, 0.0).is_none());
}
