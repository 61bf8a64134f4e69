//! Chart output for a finished wizard run.

use anyhow::Result;
use pondforge_core::{
    economics::ProductionCostSummary, growth::GrowthPoint, report::FarmReport,
};
use plotters::prelude::*;
use std::path::Path;
use tracing::{info, warn};

/// Writes every chart the report has data for into `output_dir`.
pub fn generate_all_plots(output_dir: &Path, report: &FarmReport) -> Result<()> {
    info!("[Plotting] Generating charts from the farm report...");

    if report.growth.growth_curve.is_empty() {
        warn!("[Plotting] No growth projection; skipping growth curve.");
    } else {
        plot_growth_curve(output_dir, &report.growth.growth_curve)?;
    }

    match &report.economics {
        Some(economics) if economics.summary.breakdown.total > 0.0 => {
            plot_cost_breakdown(output_dir, &economics.summary)?;
        }
        _ => warn!("[Plotting] No production cost entered; skipping cost breakdown."),
    }

    info!("[Plotting] Charts saved to '{}'.", output_dir.display());
    Ok(())
}

/// Line chart of projected individual weight over the culture period.
fn plot_growth_curve(output_dir: &Path, curve: &[GrowthPoint]) -> Result<()> {
    let path = output_dir.join("1_growth_curve.png");
    let root = BitMapBackend::new(&path, (1024, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_day = curve.last().map_or(1.0, |p| p.day).max(1.0);
    let max_weight = curve.iter().map(|p| p.weight_g).fold(0.0, f64::max).max(1.0);

    let mut chart = ChartBuilder::on(&root)
        .caption("Projected Shrimp Growth", ("sans-serif", 50).into_font())
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(50)
        .build_cartesian_2d(0f64..max_day, 0f64..max_weight * 1.1)?;

    chart
        .configure_mesh()
        .x_desc("Day of culture")
        .y_desc("Average weight (g)")
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            curve.iter().map(|p| (p.day, p.weight_g)),
            BLUE.stroke_width(2),
        ))?
        .label("Weight")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE.filled()));

    chart.draw_series(
        curve
            .iter()
            .map(|p| Circle::new((p.day, p.weight_g), 4, BLUE.filled())),
    )?;

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;
    root.present()?;
    Ok(())
}

/// Bar chart of the five production cost components.
fn plot_cost_breakdown(output_dir: &Path, summary: &ProductionCostSummary) -> Result<()> {
    let path = output_dir.join("2_cost_breakdown.png");
    let root = BitMapBackend::new(&path, (1024, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let components = summary.breakdown.components();
    let labels: Vec<&str> = components.iter().map(|(label, _)| *label).collect();
    let max_cost = components
        .iter()
        .map(|(_, value)| *value)
        .fold(0.0, f64::max)
        .max(1.0);

    let mut chart = ChartBuilder::on(&root)
        .caption("Production Cost Breakdown", ("sans-serif", 50).into_font())
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d((0usize..components.len()).into_segmented(), 0f64..max_cost * 1.1)?;

    let label_for = |value: &SegmentValue<usize>| match value {
        SegmentValue::CenterOf(i) => labels.get(*i).map_or(String::new(), |l| l.to_string()),
        _ => String::new(),
    };
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Component")
        .y_desc(format!("Cost ({})", summary.currency.code()))
        .x_label_formatter(&label_for)
        .draw()?;

    chart.draw_series(
        Histogram::vertical(&chart)
            .style(RGBColor(70, 130, 180).filled())
            .margin(20)
            .data(components.iter().enumerate().map(|(i, (_, value))| (i, *value))),
    )?;

    root.present()?;
    Ok(())
}
