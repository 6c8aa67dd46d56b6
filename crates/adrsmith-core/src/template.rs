// ABOUTME: Renders the deterministic Markdown ADR from collected inputs (mock mode).
// ABOUTME: Section order is fixed; the trade-off matrix grows one column per selected dimension.

use std::fmt::Write;

use chrono::NaiveDate;

use crate::adr_id::AdrId;
use crate::format::{context_block, nfr_block};
use crate::input::AdrInputs;

/// The three illustrative option rows in the trade-off matrix, paired with
/// their fixed scores. Scores are illustrative, not computed from input.
const MATRIX_ROWS: &[(&str, &str)] = &[
    ("App First (Strangler + Modular Monolith)", "4/5"),
    ("DB First (Managed PostgreSQL + Contracts)", "4/5"),
    ("Infra First (Kubernetes + GitOps)", "3/5"),
];

/// Render the complete ADR document from the collected inputs.
///
/// Deterministic: the output depends only on the arguments. Section order is
/// title, status/date, Context, Options, Trade-off Matrix, Decision, diagram,
/// Rollout & Rollback, Fitness Functions, Review. An empty dimension
/// selection renders a matrix with zero data columns rather than failing.
pub fn render_template(inputs: &AdrInputs, adr_id: &AdrId, today: NaiveDate) -> String {
    let mut out = String::new();

    writeln!(
        out,
        "# ADR-{}: Digital Transformation Decision (App · DB · Infra)",
        adr_id
    )
    .unwrap();
    writeln!(out).unwrap();
    writeln!(out, "**Status:** Proposed  ").unwrap();
    writeln!(out, "**Date:** {}  ", today.format("%Y-%m-%d")).unwrap();
    writeln!(out).unwrap();

    writeln!(out, "## Context").unwrap();
    writeln!(out, "{}", nfr_block(inputs)).unwrap();
    writeln!(out).unwrap();
    writeln!(out, "{}", context_block(inputs)).unwrap();
    writeln!(out).unwrap();

    writeln!(out, "## Options").unwrap();
    writeln!(
        out,
        "1. **Modernize Application First (Strangler + Modular Monolith)**"
    )
    .unwrap();
    writeln!(
        out,
        "   - ✅ Pros: Reduces coupling risk; incremental value delivery; lower blast radius"
    )
    .unwrap();
    writeln!(
        out,
        "   - ❌ Cons: Longer runway to full benefits; interim complexity"
    )
    .unwrap();
    writeln!(out, "   - ⚠️ Risks: Incomplete strangling; shared DB hotspots").unwrap();
    writeln!(out).unwrap();
    writeln!(
        out,
        "2. **Database First (Replatform to Managed PostgreSQL + Data Contracts)**"
    )
    .unwrap();
    writeln!(
        out,
        "   - ✅ Pros: Cuts license cost; improves availability & backup/restore; platform stability"
    )
    .unwrap();
    writeln!(
        out,
        "   - ❌ Cons: App changes required; PL/SQL migration complexity"
    )
    .unwrap();
    writeln!(
        out,
        "   - ⚠️ Risks: Data integrity during cutover; performance regressions"
    )
    .unwrap();
    writeln!(out).unwrap();
    writeln!(out, "3. **Infra First (Containerize on Kubernetes + GitOps)**").unwrap();
    writeln!(
        out,
        "   - ✅ Pros: Standardized ops; scalability; path to cloud-native"
    )
    .unwrap();
    writeln!(
        out,
        "   - ❌ Cons: Doesn't fix app/db design issues; cluster ops skill gap"
    )
    .unwrap();
    writeln!(
        out,
        "   - ⚠️ Risks: Misconfigured clusters; cost overruns without autoscaling"
    )
    .unwrap();
    writeln!(out).unwrap();

    writeln!(out, "## Trade-off Matrix").unwrap();
    write_matrix(&mut out, inputs);
    writeln!(out).unwrap();
    writeln!(out, "*(Scores: 1 = poor, 5 = excellent; illustrative only)*").unwrap();
    writeln!(out).unwrap();

    writeln!(out, "## Decision").unwrap();
    writeln!(
        out,
        "Start with **Database First** if licensing/cost pressure is immediate **or** RTO/RPO is the top priority.  "
    )
    .unwrap();
    writeln!(
        out,
        "Start with **Application First** if coupling/velocity is the primary bottleneck.  "
    )
    .unwrap();
    writeln!(
        out,
        "Infra-first suits orgs with strong platform teams and low app churn."
    )
    .unwrap();
    writeln!(out).unwrap();

    writeln!(out, "## Architecture (Mermaid)").unwrap();
    writeln!(out, "```mermaid").unwrap();
    writeln!(out, "flowchart TD").unwrap();
    writeln!(out, "    subgraph Legacy").unwrap();
    writeln!(out, "      A[Monolith App] --> B[(RDBMS)]").unwrap();
    writeln!(out, "      A --> C[Batch Jobs]").unwrap();
    writeln!(out, "    end").unwrap();
    writeln!(out).unwrap();
    writeln!(out, "    subgraph Target").unwrap();
    writeln!(out, "      D[Modular Services]").unwrap();
    writeln!(out, "      E[(Managed Postgres)]").unwrap();
    writeln!(out, "      F[Kubernetes Platform]").unwrap();
    writeln!(out, "      D --> E").unwrap();
    writeln!(out, "      D -->|Async Events| G[(Kafka)]").unwrap();
    writeln!(out, "    end").unwrap();
    writeln!(out).unwrap();
    writeln!(out, "    A -->|Strangler| D").unwrap();
    writeln!(out, "    B -->|Data Migration| E").unwrap();
    writeln!(out, "    C --> F").unwrap();
    writeln!(out, "```").unwrap();
    writeln!(out).unwrap();

    writeln!(out, "## Rollout & Rollback").unwrap();
    writeln!(
        out,
        "- **Rollout:** Identify seams → modularize → dual-write → phased cutover → decommission legacy components."
    )
    .unwrap();
    writeln!(
        out,
        "- **Rollback:** Traffic switchback; restore from latest snapshot; replay messages; freeze toggles."
    )
    .unwrap();
    writeln!(out).unwrap();

    writeln!(out, "## Fitness Functions").unwrap();
    writeln!(out, "- P95 latency < {}", inputs.latency_target).unwrap();
    writeln!(out, "- Monthly infra cost < {}", inputs.cost_cap).unwrap();
    writeln!(out, "- Error budget burn rate within SLOs").unwrap();
    writeln!(out, "- Backup restore drill passes; RTO/RPO targets met").unwrap();
    writeln!(out).unwrap();

    writeln!(out, "## Review").unwrap();
    writeln!(
        out,
        "- Review date: {}",
        inputs.review_date.format("%Y-%m-%d")
    )
    .unwrap();

    out
}

/// Write the pipe-delimited trade-off table: one data column per selected
/// dimension, in selection order, plus the fixed option rows.
fn write_matrix(out: &mut String, inputs: &AdrInputs) {
    let mut header = String::from("| Option                                      |");
    for dim in &inputs.tradeoff_dimensions {
        write!(header, " {} |", dim).unwrap();
    }
    writeln!(out, "{}", header).unwrap();

    let mut divider = String::from("|---------------------------------------------|");
    for _ in &inputs.tradeoff_dimensions {
        divider.push_str("---------|");
    }
    writeln!(out, "{}", divider).unwrap();

    for (option, score) in MATRIX_ROWS {
        let mut row = format!("| {:43} |", option);
        for _ in &inputs.tradeoff_dimensions {
            write!(row, " {}     |", score).unwrap();
        }
        writeln!(out, "{}", row).unwrap();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{
        ApplicationContext, DatabaseContext, InfrastructureContext, TradeoffDimension,
    };
    use chrono::NaiveDate;

    fn make_inputs(dims: Vec<TradeoffDimension>) -> AdrInputs {
        AdrInputs {
            availability: "99.9%".to_string(),
            latency_target: "P95 <= 250 ms".to_string(),
            cost_cap: "$9k/month".to_string(),
            review_date: NaiveDate::from_ymd_opt(2027, 8, 7).unwrap(),
            application_context: ApplicationContext::LegacyMonolith,
            database_context: DatabaseContext::OracleSqlServerOnPrem,
            infrastructure_context: InfrastructureContext::OnPremDataCenter,
            tradeoff_dimensions: dims,
        }
    }

    fn render(dims: Vec<TradeoffDimension>) -> String {
        let inputs = make_inputs(dims);
        let adr_id = AdrId::new("20260807-120000").unwrap();
        let today = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
        render_template(&inputs, &adr_id, today)
    }

    /// Split a matrix line into its data cells, dropping the leading Option
    /// cell and the empty fragments around the outer pipes.
    fn data_cells(line: &str) -> Vec<String> {
        let cells: Vec<String> = line
            .split('|')
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .collect();
        cells[1..].to_vec()
    }

    #[test]
    fn sections_appear_in_fixed_order() {
        let md = render(vec![TradeoffDimension::Cost]);

        let sections = [
            "# ADR-20260807-120000: Digital Transformation Decision (App · DB · Infra)",
            "**Status:** Proposed",
            "**Date:** 2026-08-07",
            "## Context",
            "## Options",
            "## Trade-off Matrix",
            "## Decision",
            "```mermaid",
            "## Rollout & Rollback",
            "## Fitness Functions",
            "## Review",
        ];

        let mut last = 0;
        for section in &sections {
            let pos = md.find(section).unwrap_or_else(|| {
                panic!("missing section {:?} in rendered output", section)
            });
            assert!(pos >= last, "section {:?} out of order", section);
            last = pos;
        }
    }

    #[test]
    fn matrix_columns_follow_selection_order() {
        let md = render(vec![
            TradeoffDimension::Operability,
            TradeoffDimension::Cost,
            TradeoffDimension::Security,
        ]);

        let header = md
            .lines()
            .find(|l| l.starts_with("| Option"))
            .expect("matrix header row");
        assert_eq!(data_cells(header), vec!["Operability", "Cost", "Security"]);
    }

    #[test]
    fn empty_dimension_selection_renders_degenerate_matrix() {
        let md = render(vec![]);

        let header = md
            .lines()
            .find(|l| l.starts_with("| Option"))
            .expect("matrix header row");
        assert!(data_cells(header).is_empty(), "no data columns expected");

        // Divider and option rows still render as a valid table skeleton.
        assert!(md.contains("|---------------------------------------------|"));
        assert!(md.contains("App First (Strangler + Modular Monolith)"));
        assert!(md.contains("DB First (Managed PostgreSQL + Contracts)"));
        assert!(md.contains("Infra First (Kubernetes + GitOps)"));
    }

    #[test]
    fn matrix_scores_are_fixed_per_option() {
        let md = render(vec![TradeoffDimension::Cost, TradeoffDimension::Speed]);

        let infra_row = md
            .lines()
            .find(|l| l.contains("Infra First (Kubernetes + GitOps)"))
            .expect("infra row");
        assert_eq!(data_cells(infra_row), vec!["3/5", "3/5"]);

        let app_row = md
            .lines()
            .find(|l| l.contains("App First (Strangler + Modular Monolith)"))
            .expect("app row");
        assert_eq!(data_cells(app_row), vec!["4/5", "4/5"]);
    }

    #[test]
    fn fitness_functions_interpolate_latency_and_cost() {
        let md = render(vec![TradeoffDimension::Cost, TradeoffDimension::Reliability]);

        let fitness_pos = md.find("## Fitness Functions").unwrap();
        let review_pos = md.find("## Review").unwrap();
        let fitness = &md[fitness_pos..review_pos];

        assert!(fitness.contains("P95 <= 250 ms"));
        assert!(fitness.contains("$9k/month"));
    }

    #[test]
    fn review_section_interpolates_the_collected_date() {
        let md = render(vec![]);
        assert!(md.contains("- Review date: 2027-08-07"));
    }

    #[test]
    fn render_is_deterministic() {
        let a = render(vec![TradeoffDimension::Cost]);
        let b = render(vec![TradeoffDimension::Cost]);
        assert_eq!(a, b, "template render must be deterministic");
    }
}
