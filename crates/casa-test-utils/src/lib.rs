//! Testing utilities for the Casa workspace
//!
//! Shared fixtures: a seeded material catalog, a small project list, and
//! wizard drafts at useful points in the flow.

#![allow(missing_docs)]

use casa_catalog::InMemoryCatalog;
use casa_domain::{
    BudgetRange, Category, Material, PriceUnit, Project, ProjectStatus, Supplier,
};
use casa_wizard::{Field, WizardDraft};

/// The six-material demo catalog the shell's material library renders
pub fn sample_materials() -> Vec<Material> {
    vec![
        Material::new("Engineered oak flooring", "Sylvan", Category::Floor, 189.0)
            .with_popularity(4.8, 5000)
            .with_styles(["modern", "nordic"])
            .with_colors(["natural oak", "grey"]),
        Material::new("Full-body marble tile", "Petra", Category::Tile, 128.0)
            .with_supplier(Supplier::FlagshipStore)
            .with_popularity(4.9, 8000)
            .with_styles(["modern", "luxury"])
            .with_colors(["white", "grey"]),
        Material::new("Low-odour interior wall paint", "Lumen", Category::Paint, 45.0)
            .with_popularity(4.7, 12000)
            .with_styles(["modern", "nordic", "japanese"])
            .with_colors(["white", "cream", "pale grey"]),
        Material::new("Smart toilet", "Aqualine", Category::Bathroom, 3999.0)
            .with_unit(PriceUnit::PerPiece)
            .with_supplier(Supplier::Showroom)
            .with_popularity(4.6, 2000)
            .with_styles(["modern", "luxury"])
            .with_colors(["white"]),
        Material::new("LED ceiling light set", "Opal", Category::Lighting, 2599.0)
            .with_unit(PriceUnit::PerSet)
            .with_supplier(Supplier::FlagshipStore)
            .with_popularity(4.8, 6000)
            .with_styles(["modern", "nordic"])
            .with_colors(["white", "warm white"]),
        Material::new("Fitted kitchen cabinets", "Haven", Category::Cabinet, 8999.0)
            .with_unit(PriceUnit::PerMetre)
            .with_supplier(Supplier::Showroom)
            .with_popularity(4.7, 1500)
            .with_styles(["modern", "luxury"])
            .with_colors(["white", "wood"]),
    ]
}

/// Catalog seeded with [`sample_materials`]
pub fn sample_catalog() -> InMemoryCatalog {
    InMemoryCatalog::with_materials(sample_materials())
}

/// Three projects, one per in-flight status
pub fn sample_projects() -> Vec<Project> {
    let mut completed = Project::new("Sunlit Garden 3-801")
        .with_description("89m² three-bed, modern minimal")
        .with_image_count(500)
        .with_styles(["modern", "nordic"])
        .with_budget(BudgetRange::new(300.0, 500.0));
    completed
        .transition_to(ProjectStatus::Processing)
        .expect("pending -> processing");
    completed
        .transition_to(ProjectStatus::Completed)
        .expect("processing -> completed");

    let mut processing = Project::new("Riverside 5-1202")
        .with_description("126m² four-bed, light luxury")
        .with_image_count(320)
        .with_styles(["luxury"])
        .with_budget(BudgetRange::new(500.0, 800.0));
    processing
        .transition_to(ProjectStatus::Processing)
        .expect("pending -> processing");

    let pending = Project::new("Park Lane 8-303")
        .with_description("78m² two-bed, japandi")
        .with_image_count(150)
        .with_styles(["japanese"])
        .with_budget(BudgetRange::new(200.0, 300.0));

    vec![completed, processing, pending]
}

/// Draft with the gated basics filled in, still on the first step
pub fn draft_with_basics() -> WizardDraft {
    let mut draft = WizardDraft::new();
    draft.set_field(Field::Name, "Sunlit Garden 3-801");
    draft.set_field(Field::Description, "89m² three-bed");
    draft.set_field(Field::SourcePath, "s3://floorplans/sunlit-garden/");
    draft.set_field(Field::ImageCount, 500u32);
    draft
}

/// Draft walked forward to the terminal step, ready to submit
pub fn draft_at_confirm() -> WizardDraft {
    let mut draft = draft_with_basics();
    while !draft.current_step().is_terminal() {
        draft.advance().expect("basics are filled in");
    }
    draft
}
