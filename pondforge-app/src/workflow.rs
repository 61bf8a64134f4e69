use anyhow::{Context, Result};
use pondforge_core::{
    aeration::AerationStatus,
    economics::CostAlert,
    format::{
        format_fixed, format_measurement, format_number, format_optional, mass_from_grams,
        volume_from_liters, NOT_AVAILABLE,
    },
    report::FarmReport,
    water::format_dose,
    wizard::WizardBuilder,
};
use pondforge_schemas::file_formats::FarmScenario;
use std::{fs, path::Path};

/// Runs the full Growth → Feed → Aeration → Water → Economics flow and
/// writes `report.csv` into the run directory.
pub fn run_wizard(scenario: FarmScenario, output_dir: &Path) -> Result<FarmReport> {
    println!("\n--- [Workflow] Running farm wizard ---");

    let csv_path = output_dir.join("report.csv");
    let csv_path = csv_path.to_string_lossy();
    let mut session = WizardBuilder::new()
        .with_scenario(scenario)
        .with_report_logging_to_file(&csv_path)
        .build()
        .context("Failed to set up the farm wizard")?;

    let report = session.run()?.clone();
    Ok(report)
}

pub fn export_json(report: &FarmReport, output_dir: &Path) -> Result<()> {
    let path = output_dir.join("report.json");
    fs::write(&path, report.to_json_pretty()?)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

fn line(label: &str, value: impl AsRef<str>) {
    println!("  - {:<24} {}", label, value.as_ref());
}

fn with_unit(value: Option<f64>, decimals: usize, unit: &str) -> String {
    match value {
        Some(value) => format!("{} {}", format_fixed(value, decimals), unit),
        None => NOT_AVAILABLE.to_string(),
    }
}

pub fn print_summary_report(report: &FarmReport) {
    println!("\n\n--- [Farm Summary Report] ---");
    println!("========================================");
    println!("Farm: {}", report.farm_name.as_deref().unwrap_or("Unnamed farm"));

    let growth = &report.growth;
    println!("\nGrowth & Stocking:");
    line("Pond Area:", with_unit(growth.pond.map(|p| p.area_m2), 0, "m²"));
    line("Total PL:", format_optional(growth.stocking.map(|s| s.total_pl), 0));
    line(
        "Final Weight:",
        with_unit(growth.projection.map(|p| p.final_weight_g), 2, "g"),
    );
    line(
        "Survival Rate:",
        with_unit(growth.survival.and_then(|s| s.survival_rate_pct), 1, "%"),
    );
    line(
        "Projected Harvest:",
        match growth.context.projected_harvest_kg() {
            Some(kg) => format_measurement(&mass_from_grams(kg * 1000.0), 2),
            None => NOT_AVAILABLE.to_string(),
        },
    );

    let feed = &report.feed;
    println!("\nFeed Management:");
    line(
        "Total Feed:",
        match feed.plan {
            Some(plan) => format!("{} kg (FCR {})", format_number(plan.total_feed_kg), plan.fcr),
            None => NOT_AVAILABLE.to_string(),
        },
    );
    line(
        "Daily Feed:",
        with_unit(feed.plan.and_then(|p| p.daily_feed_kg), 2, "kg/day"),
    );
    if let Some(cost) = feed.cost {
        line(
            "Feed Bags (25 kg):",
            format!(
                "{} at {} per bag",
                format_fixed(cost.bags_needed, 0),
                format_fixed(cost.cost_per_bag, 2)
            ),
        );
    }

    let aeration = &report.aeration;
    println!("\nAeration & Environment:");
    match aeration.assessment {
        Some(assessment) => {
            match assessment.requirement {
                Some(req) => line(
                    "Required Aeration:",
                    format!(
                        "{} kW ({} HP) for {} kg biomass",
                        format_fixed(req.required_kw, 2),
                        format_fixed(req.required_hp, 2),
                        format_number(req.biomass_kg)
                    ),
                ),
                None => line("Required Aeration:", NOT_AVAILABLE),
            }
            let status = match assessment.status {
                AerationStatus::NotEvaluated => "Installed power not entered".to_string(),
                AerationStatus::Adequate => "Adequate".to_string(),
                AerationStatus::Inadequate(deficit) => format!(
                    "Insufficient: {} kW short, add {} paddlewheel(s) of 1.5 HP",
                    format_fixed(deficit.deficit_kw, 2),
                    deficit.paddlewheels_needed
                ),
            };
            line("Aerator Status:", status);
            if assessment.high_stocking_density {
                line("Warning:", "High stocking density (> 60 PL/m²)");
            }
        }
        None => line("Required Aeration:", NOT_AVAILABLE),
    }
    match aeration.evaporation {
        Some(evaporation) => {
            line(
                "Evaporation Rate:",
                format!("{} mm/day", format_fixed(evaporation.rate_mm_day, 2)),
            );
            line(
                "Daily Water Loss:",
                format_measurement(&volume_from_liters(evaporation.daily_loss_l), 2),
            );
            line(
                "Monthly Water Loss:",
                format_measurement(&volume_from_liters(evaporation.monthly_loss_l), 2),
            );
            if evaporation.is_high_evaporation {
                line("Warning:", "High evaporation (> 8 mm/day)");
            }
        }
        None => line("Evaporation Rate:", NOT_AVAILABLE),
    }
    if let Some(salinity) = aeration.salinity {
        line(
            "Freshwater to Add:",
            format!(
                "{} m³ to bring {} ppt down to {} ppt",
                format_fixed(salinity.freshwater_m3, 2),
                format_number(salinity.current_ppt),
                format_number(salinity.target_ppt)
            ),
        );
    }

    let water = &report.water;
    println!("\nWater Quality:");
    match water.exchange {
        Some(exchange) => {
            line(
                "Recommended Exchange:",
                format!(
                    "{}% ({})",
                    format_fixed(exchange.recommended_pct, 0),
                    format_measurement(&volume_from_liters(exchange.exchange_volume_l), 1)
                ),
            );
            line("TAN:", exchange.tan_status.action());
            line("Nitrate:", exchange.nitrate_status.action());
        }
        None => line("Recommended Exchange:", NOT_AVAILABLE),
    }
    match &water.alkalinity {
        Some(dose) => {
            line(
                "Alkalinity Dose:",
                format!("{} of {}", format_dose(dose.grams_needed), dose.buffer.label()),
            );
            let status = dose.current_status;
            if !status.label().is_empty() {
                line("Alkalinity Status:", format!("{} ({})", status.label(), status.message()));
            }
            for advisory in &dose.advisories {
                line("Advisory:", advisory.message());
            }
        }
        None => line("Alkalinity Dose:", NOT_AVAILABLE),
    }
    if let Some(carbon) = water.carbon_dose {
        line(
            "Carbon Source Dose:",
            format!(
                "{} of {}",
                format_measurement(&mass_from_grams(carbon.source_g), 2),
                carbon.source.profile().name
            ),
        );
    }

    if let Some(economics) = &report.economics {
        let summary = &economics.summary;
        let symbol = summary.currency.symbol();
        let money = |value: f64| format!("{}{}", symbol, format_fixed(value, 2));

        println!("\nProduction Cost ({}):", summary.currency.code());
        for (label, value) in summary.breakdown.components() {
            line(&format!("{}:", label), money(value));
        }
        println!("  --------------------------------------");
        line("Total Cost:", money(summary.breakdown.total));
        line(
            "Cost per kg:",
            summary.cost_per_kg.map_or(NOT_AVAILABLE.to_string(), money),
        );
        if let Some(profit) = summary.profit {
            line("Gross Revenue:", money(profit.gross_revenue));
            line("Profit:", money(profit.profit));
        }
        for alert in &summary.alerts {
            let text = match alert {
                CostAlert::FeedDominant { share_pct } => format!(
                    "Feed is {}% of total cost; evaluate FCR or feed efficiency",
                    format_fixed(*share_pct, 1)
                ),
                CostAlert::HighCostPerKg {
                    cost_per_kg,
                    reference,
                } => format!(
                    "Cost per kg {} exceeds {}; review stocking rate or energy input",
                    money(*cost_per_kg),
                    money(*reference)
                ),
            };
            line("Alert:", text);
        }
    }

    if !report.notices.is_empty() {
        println!("\nValidation Notices:");
        for notice in &report.notices {
            println!("  - {}", notice);
        }
    }

    println!("========================================");
}
