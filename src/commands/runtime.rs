use crate::cli::{Cli, Commands};
use crate::domain::answers::{Answers, ModelId};
use crate::domain::models::{ModelListItem, RecommendationReport, ValidateReport};
use crate::services::catalog::Catalog;
use crate::services::engine::recommend;
use crate::services::output::{print_out, print_report};
use crate::services::session::{AdvisorState, Session, SessionEvent};
use std::io::{BufRead, Write};

pub fn handle_runtime_commands(cli: &Cli, catalog: &Catalog) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Recommend {
            company_size,
            team_size,
            ops_structure,
            complexity,
        } => {
            let answers = Answers {
                company_size: *company_size,
                design_team_size: *team_size,
                existing_ops_structure: *ops_structure,
                organization_complexity: *complexity,
            };
            let report = build_report(catalog, &answers)?;
            tracing::debug!(model = %report.model, "recommendation computed");
            print_report(cli.json, report, |r| {
                println!("model: {}", r.model);
                println!("name: {}", r.name);
                println!("structure: {}", r.structure_summary);
                println!("best for: {}", r.best_for);
                match &r.benchmark {
                    Some(b) => println!(
                        "benchmark: {}% of survey, typical design team {}",
                        b.percentage_of_survey, b.typical_design_team_range
                    ),
                    None => println!("benchmark: no data for this size bracket"),
                }
            })?;
        }
        Commands::Models => {
            let items: Vec<ModelListItem> = catalog
                .models()
                .map(|m| ModelListItem {
                    id: m.id,
                    name: m.name.clone(),
                    best_for: m.best_for.clone(),
                })
                .collect();
            print_out(cli.json, &items, |m| {
                format!("{}\t{}\t{}", m.id, m.name, m.best_for)
            })?;
        }
        Commands::Show { model } => {
            let record = catalog.model(*model)?;
            print_report(cli.json, record, |r| {
                println!("model: {}", r.id);
                println!("name: {}", r.name);
                println!("structure: {}", r.structure_summary);
                println!("best for: {}", r.best_for);
                println!("pros:");
                for pro in &r.pros {
                    println!("  - {pro}");
                }
                println!("cons:");
                for con in &r.cons {
                    println!("  - {con}");
                }
            })?;
        }
        Commands::Chart { model } => {
            let chart = catalog.org_chart(*model)?;
            print_report(cli.json, chart, |c| {
                println!("{}", c.display_name);
                for node in &c.nodes {
                    println!(
                        "{}\t{}\t(level {}, {})",
                        node.id,
                        node.title,
                        node.hierarchy_level,
                        node.category.as_str()
                    );
                    for r in &node.responsibilities {
                        println!("\t- {r}");
                    }
                }
                println!("reporting lines:");
                for e in &c.edges {
                    println!("  {} -> {}", e.from, e.to);
                }
            })?;
        }
        Commands::Benchmark { company_size } => {
            let entry = catalog.benchmark(*company_size);
            print_report(cli.json, entry, |e| match e {
                Some(b) => println!(
                    "{}: {}% of survey, typical design team {}",
                    b.company_size, b.percentage_of_survey, b.typical_design_team_range
                ),
                None => println!("no benchmark data for {company_size}"),
            })?;
        }
        Commands::Validate => {
            catalog.validate()?;
            let report = ValidateReport {
                models: catalog.model_count(),
                charts: catalog.chart_count(),
                status: "valid".to_string(),
            };
            print_report(cli.json, report, |r| {
                println!("catalog valid ({} models, {} charts)", r.models, r.charts)
            })?;
        }
        Commands::Interactive => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            run_interactive(catalog, &mut stdin.lock(), &mut stdout.lock())?;
        }
    }
    Ok(())
}

fn build_report(catalog: &Catalog, answers: &Answers) -> anyhow::Result<RecommendationReport> {
    let model = recommend(answers);
    let record = catalog.model(model)?;
    Ok(RecommendationReport {
        model,
        name: record.name.clone(),
        structure_summary: record.structure_summary.clone(),
        best_for: record.best_for.clone(),
        answers: *answers,
        benchmark: catalog.benchmark(answers.company_size).cloned(),
    })
}

/// Drives the session state machine over a line-based dialog. Reader and
/// writer are injected so tests can pipe a scripted transcript through.
/// Each view is printed once on entry; bad input only re-prompts.
pub fn run_interactive(
    catalog: &Catalog,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let mut session = Session::new();
    writeln!(out, "DesignOps operations model advisor")?;

    loop {
        match session.state() {
            AdvisorState::CollectingAnswers => {
                session.draft.company_size =
                    Some(ask(input, out, "company size", "startup/growth/scale/enterprise")?);
                session.draft.design_team_size = Some(ask(
                    input,
                    out,
                    "design team size",
                    "1/2-4/5-9/10-24/25-49/50-99/100-199/200+",
                )?);
                session.draft.existing_ops_structure = Some(ask(
                    input,
                    out,
                    "existing ops structure",
                    "none/single-function/design-led/multiple-functions/centralized",
                )?);
                session.draft.organization_complexity = Some(ask(
                    input,
                    out,
                    "organization complexity",
                    "single-product/product-suite/multiple-business-units/complex-ecosystem",
                )?);
                session.apply(SessionEvent::Submit)?;
            }
            AdvisorState::ShowingRecommendation => {
                let model = session
                    .recommendation()
                    .ok_or_else(|| anyhow::anyhow!("recommendation missing after submit"))?;
                print_summary(catalog, model, out)?;
                loop {
                    match prompt_choice(input, out, "next [detail/restart/quit]")?.as_str() {
                        "detail" => {
                            session.apply(SessionEvent::ViewDetail)?;
                            break;
                        }
                        "restart" => {
                            session.apply(SessionEvent::StartOver)?;
                            break;
                        }
                        "quit" | "" => return Ok(()),
                        other => writeln!(out, "unknown choice: {other}")?,
                    }
                }
            }
            AdvisorState::ShowingDetail => {
                let model = session
                    .recommendation()
                    .ok_or_else(|| anyhow::anyhow!("recommendation missing in detail view"))?;
                print_detail(catalog, model, out)?;
                loop {
                    match prompt_choice(input, out, "next [back/restart/quit]")?.as_str() {
                        "back" => {
                            session.apply(SessionEvent::GoBack)?;
                            break;
                        }
                        "restart" => {
                            session.apply(SessionEvent::StartOver)?;
                            break;
                        }
                        "quit" | "" => return Ok(()),
                        other => writeln!(out, "unknown choice: {other}")?,
                    }
                }
            }
        }
    }
}

/// Prompts until the answer parses into the field's closed enum. EOF ends
/// the dialog with an error since the questionnaire is incomplete.
fn ask<T>(input: &mut impl BufRead, out: &mut impl Write, field: &str, options: &str) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    loop {
        writeln!(out, "{field} ({options}):")?;
        out.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            anyhow::bail!("input ended before the questionnaire was complete");
        }
        match line.trim().parse::<T>() {
            Ok(v) => return Ok(v),
            Err(e) => writeln!(out, "{e}")?,
        }
    }
}

fn prompt_choice(
    input: &mut impl BufRead,
    out: &mut impl Write,
    prompt: &str,
) -> anyhow::Result<String> {
    writeln!(out, "{prompt}:")?;
    out.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn print_summary(catalog: &Catalog, model: ModelId, out: &mut impl Write) -> anyhow::Result<()> {
    let record = catalog.model(model)?;
    writeln!(out, "recommended model: {} ({})", record.name, record.id)?;
    writeln!(out, "structure: {}", record.structure_summary)?;
    writeln!(out, "best for: {}", record.best_for)?;
    Ok(())
}

fn print_detail(catalog: &Catalog, model: ModelId, out: &mut impl Write) -> anyhow::Result<()> {
    let record = catalog.model(model)?;
    let chart = catalog.org_chart(model)?;
    writeln!(out, "pros:")?;
    for pro in &record.pros {
        writeln!(out, "  - {pro}")?;
    }
    writeln!(out, "cons:")?;
    for con in &record.cons {
        writeln!(out, "  - {con}")?;
    }
    writeln!(out, "org chart: {}", chart.display_name)?;
    for node in &chart.nodes {
        writeln!(
            out,
            "  {}\t{}\t(level {}, {})",
            node.id,
            node.title,
            node.hierarchy_level,
            node.category.as_str()
        )?;
    }
    for e in &chart.edges {
        writeln!(out, "  {} -> {}", e.from, e.to)?;
    }
    Ok(())
}
