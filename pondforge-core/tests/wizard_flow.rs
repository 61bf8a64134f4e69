use pondforge_core::{
    aeration::AerationStatus,
    wizard::{FieldOrigin, WizardBuilder, WizardSession, WizardStep},
};
use pondforge_schemas::{
    command::CostEdit,
    file_formats::{FarmScenario, RawInput},
    units::Currency,
};

const FARM: &str = r#"
schema_version: "1.0"
farm_name: Test Farm
pond:
  length_m: "100"
  width_m: 50
stocking:
  pl_density: 25
growth:
  initial_weight_g: 0
  days: 100
  adg_g_per_day: 0.25
feed:
  fcr: 1.2
  feed_price_per_kg: 1.2
aeration:
  installed_kw: 4
water_exchange:
  pond_volume: "10,000"
  tan_ppm: 2
  nitrate_ppm: 20
alkalinity:
  pond_volume: 10
  volume_unit: cubic_meters
  current_mg_l: 40
  buffer: CaCO3
economics:
  pl_unit_price: 4
  aeration_power_kw: 6.25
  energy_unit_price: 150
  monthly_labor_cost: 300
  worker_count: 2
  other_costs: 500
  selling_price: 6
"#;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}

fn scenario() -> FarmScenario {
    serde_yaml::from_str(FARM).unwrap()
}

fn session(scenario: FarmScenario) -> WizardSession {
    WizardBuilder::new().with_scenario(scenario).build().unwrap()
}

#[test]
fn full_flow_matches_hand_calculation() {
    let mut wizard = session(scenario());
    let report = wizard.run().unwrap().clone();

    let growth = &report.growth;
    assert_close(growth.pond.unwrap().area_m2, 5000.0);
    assert_close(growth.stocking.unwrap().total_pl, 125_000.0);
    assert_close(growth.projection.unwrap().final_weight_g, 25.0);
    assert_close(growth.context.projected_harvest_kg().unwrap(), 2500.0);
    assert_eq!(growth.growth_curve.last().unwrap().day, 100.0);

    let feed = report.feed.plan.unwrap();
    assert_close(feed.total_feed_kg, 3000.0);
    assert_close(feed.daily_feed_kg.unwrap(), 30.0);
    assert_close(report.feed.cost.unwrap().bags_needed, 120.0);

    let aeration = report.aeration.assessment.unwrap();
    let requirement = aeration.requirement.unwrap();
    assert_close(requirement.biomass_kg, 2500.0);
    assert_close(requirement.required_kw, 6.25);
    match aeration.status {
        AerationStatus::Inadequate(deficit) => {
            assert_close(deficit.deficit_kw, 2.25);
            assert_eq!(deficit.paddlewheels_needed, 3);
        }
        other => panic!("expected a deficit, got {other:?}"),
    }

    let exchange = report.water.exchange.unwrap();
    assert_eq!(exchange.recommended_pct, 75.0);
    assert_close(exchange.exchange_volume_l, 7500.0);
    assert_close(report.water.alkalinity.as_ref().unwrap().grams_needed, 800.0);

    let economics = report.economics.unwrap();
    let summary = economics.summary;
    assert_close(summary.breakdown.postlarvae, 500.0);
    assert_close(summary.breakdown.feed, 3600.0);
    assert_close(summary.breakdown.energy, 1500.0);
    assert_close(summary.breakdown.labor, 2000.0);
    assert_close(summary.breakdown.total, 8100.0);
    assert_close(summary.cost_per_kg.unwrap(), 3.24);
    assert_close(summary.profit.unwrap().profit, 6900.0);
    assert!(summary.alerts.is_empty());
    assert!(report.notices.is_empty());
}

#[test]
fn steps_follow_the_wizard_order() {
    let mut wizard = session(scenario());
    let mut visited = Vec::new();
    while let Some(step) = wizard.advance() {
        visited.push(step);
    }
    assert_eq!(visited, WizardStep::ALL.to_vec());
    assert!(wizard.is_complete());
    assert_eq!(wizard.advance(), None);
}

#[test]
fn upstream_values_seed_the_cost_sheet() {
    let mut wizard = session(scenario());
    wizard.run().unwrap();
    let sheet = wizard.report().economics.as_ref().unwrap().sheet;

    assert_eq!(sheet.pl_count.origin, FieldOrigin::Seeded);
    assert_close(sheet.pl_count.value, 125_000.0);
    assert_eq!(sheet.feed_amount_kg.origin, FieldOrigin::Seeded);
    assert_close(sheet.feed_amount_kg.value, 3000.0);
    assert_close(sheet.culture_days.value, 100.0);
    assert_eq!(sheet.pl_unit_price.origin, FieldOrigin::UserEdited);
}

#[test]
fn user_edits_survive_upstream_recompute() {
    let mut wizard = session(scenario());
    wizard.run().unwrap();
    wizard.apply_edit(CostEdit::SetPlCount { count: 90_000.0 });

    wizard.update_inputs(|scenario| {
        scenario.stocking.pl_density = Some(RawInput::from(30.0));
    });

    let sheet = wizard.report().economics.as_ref().unwrap().sheet;
    assert_eq!(sheet.pl_count.origin, FieldOrigin::UserEdited);
    assert_close(sheet.pl_count.value, 90_000.0);
    // still seeded, so it follows the larger stocking
    assert_close(sheet.feed_amount_kg.value, 3600.0);
    assert_close(wizard.growth_context().total_pl.unwrap(), 150_000.0);
}

#[test]
fn edits_from_the_scenario_file_are_applied() {
    let mut farm = scenario();
    farm.cost_edits = vec![
        CostEdit::SetFeedAmount { kg: 2000.0 },
        CostEdit::SetCurrency {
            currency: Currency::Pkr,
        },
    ];
    let mut wizard = WizardBuilder::new()
        .with_scenario(farm)
        .with_cost_edit(CostEdit::SetOtherCosts { amount: 0.0 })
        .build()
        .unwrap();
    let report = wizard.run().unwrap();
    let economics = report.economics.as_ref().unwrap();

    assert_close(economics.sheet.feed_amount_kg.value, 2000.0);
    assert_close(economics.summary.breakdown.feed, 2400.0);
    assert_close(economics.summary.breakdown.other, 0.0);
    assert_eq!(economics.summary.currency, Currency::Pkr);
}

#[test]
fn empty_scenario_withholds_every_result() {
    let mut wizard = session(FarmScenario::default());
    let report = wizard.run().unwrap();

    assert!(report.growth.pond.is_none());
    assert!(report.growth.projection.is_none());
    assert!(report.feed.plan.is_none());
    assert!(report.aeration.assessment.is_none());
    assert!(report.water.exchange.is_none());

    let summary = &report.economics.as_ref().unwrap().summary;
    assert_eq!(summary.cost_per_kg, None);
    assert_eq!(summary.profit, None);
    assert_eq!(summary.breakdown.total, 0.0);
}

#[test]
fn unparsable_text_counts_as_not_provided() {
    let mut farm = scenario();
    farm.pond.width_m = Some(RawInput::from("fifty"));
    let mut wizard = session(farm);
    let report = wizard.run().unwrap();

    assert!(report.growth.pond.is_none());
    assert!(report.growth.context.projected_harvest_kg().is_none());
    assert_eq!(report.economics.as_ref().unwrap().summary.cost_per_kg, None);
}

#[test]
fn out_of_range_tan_suppresses_the_exchange_plan() {
    let mut farm = scenario();
    farm.water_exchange.tan_ppm = Some(RawInput::from(12.0));
    let mut wizard = session(farm);
    let report = wizard.run().unwrap();

    assert!(report.water.exchange.is_none());
    assert_eq!(report.notices.len(), 1);
    assert!(report.notices[0].contains("outside the accepted range"));
}

#[test]
fn unknown_genetic_line_is_not_computable() {
    let mut farm = scenario();
    farm.growth.pl_stage = Some("PL10".to_string());
    farm.growth.genetic_line = Some("Mystery Line".to_string());
    let mut wizard = session(farm);
    let report = wizard.run().unwrap();

    assert!(report.growth.projection.is_none());
    assert!(report.notices[0].contains("Mystery Line"));
}

#[test]
fn lookup_projection_feeds_downstream_steps() {
    let mut farm = scenario();
    farm.growth.pl_stage = Some("PL10".to_string());
    farm.growth.genetic_line = Some("Fast-Growth Selective Line".to_string());
    let mut wizard = session(farm);
    let report = wizard.run().unwrap();

    assert_close(report.growth.projection.unwrap().final_weight_g, 26.0045);
    let avg_weight = report.aeration.assessment.unwrap().input.avg_weight_g;
    assert_close(avg_weight, 26.0045);
}

#[test]
fn recompute_is_idempotent() {
    let mut wizard = session(scenario());
    wizard.run().unwrap();
    wizard.apply_edit(CostEdit::SetSellingPrice { price_per_kg: 7.5 });
    let first = wizard.report().clone();
    wizard.recompute();
    wizard.recompute();
    assert_eq!(&first, wizard.report());
}

#[test]
fn csv_report_is_written_on_completion() {
    let path = std::env::temp_dir().join(format!("pondforge_flow_{}.csv", std::process::id()));
    let path_str = path.to_string_lossy().to_string();

    let mut wizard = WizardBuilder::new()
        .with_scenario(scenario())
        .with_report_logging_to_file(&path_str)
        .build()
        .unwrap();
    wizard.run().unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.starts_with("section,metric,value,unit"));
    assert!(contents.contains("economics,total_cost,8100.0,USD"));
    std::fs::remove_file(&path).ok();
}

#[test]
fn invalid_cost_edits_are_rejected_with_notices() {
    let yaml = format!(
        "{FARM}cost_edits:\n  - type: set_pl_count\n    count: -50000\n  - type: set_pl_unit_price\n    price: 4\n  - type: set_monthly_labor_cost\n    amount: .nan\n"
    );
    let farm: FarmScenario = serde_yaml::from_str(&yaml).unwrap();
    let mut wizard = session(farm);
    let report = wizard.run().unwrap().clone();

    let economics = report.economics.as_ref().unwrap();
    assert_eq!(economics.sheet.pl_count.origin, FieldOrigin::Seeded);
    assert_close(economics.sheet.pl_count.value, 125_000.0);
    assert_close(economics.sheet.monthly_labor_cost.value, 300.0);
    assert_close(economics.summary.breakdown.postlarvae, 500.0);
    assert_close(economics.summary.breakdown.labor, 2000.0);
    assert_close(economics.summary.breakdown.total, 8100.0);

    assert_eq!(report.notices.len(), 2);
    assert!(report.notices.iter().all(|n| n.starts_with("Economics: ")));
    assert!(report.notices[0].contains("pl_count"));
    assert!(report.notices[1].contains("monthly_labor_cost"));

    // replaying the sheet must not pile up duplicate notices
    wizard.apply_edit(CostEdit::SetOtherCosts {
        amount: f64::INFINITY,
    });
    assert_eq!(wizard.report().notices.len(), 3);
    assert_close(
        wizard.report().economics.as_ref().unwrap().summary.breakdown.other,
        500.0,
    );
    wizard.recompute();
    assert_eq!(wizard.report().notices.len(), 3);
}

#[test]
fn humidity_outside_bounds_suppresses_the_evaporation_estimate() {
    let mut farm = scenario();
    farm.evaporation.pond_area_m2 = Some(RawInput::from(1000.0));
    farm.evaporation.humidity_pct = Some(RawInput::from(150.0));
    let mut wizard = session(farm);
    let report = wizard.run().unwrap();

    assert!(report.aeration.evaporation.is_none());
    assert_eq!(report.notices.len(), 1);
    assert!(report.notices[0].starts_with("Aeration & Environment: "));
    assert!(report.notices[0].contains("humidity"));
}

#[test]
fn running_twice_keeps_a_single_csv_report() {
    let path = std::env::temp_dir().join(format!("pondforge_twice_{}.csv", std::process::id()));
    let path_str = path.to_string_lossy().to_string();

    let mut wizard = WizardBuilder::new()
        .with_scenario(scenario())
        .with_report_logging_to_file(&path_str)
        .build()
        .unwrap();
    wizard.run().unwrap();
    wizard.run().unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(contents.matches("growth,pond_area,").count(), 1);
    assert_eq!(contents.matches("section,metric,value,unit").count(), 1);
    std::fs::remove_file(&path).ok();
}
