//! Command handlers and console rendering.

use std::io::{self, BufRead, Write};
use std::path::Path;

use gundrill_core::calculations::{
    compute_standard_time_with, FormattedBreakdown, JobParameters, TimeBreakdown,
};
use gundrill_core::errors::{CalcError, CalcResult};
use gundrill_core::file_io::{append_to_history, load_or_create_history, load_settings};
use gundrill_core::materials::{
    default_grinding_interval, entries_for_group, fmj_port_plan, grades_in_group, recommended_cutting,
    CuttingRecommendation, DrillTableEntry, FmjPortPlan, MaterialGroup, KNOWN_GRADES,
};
use gundrill_core::resolver::{parse_inches, resolve, RawJobInput};
use gundrill_core::settings::{EngineSettings, ResolvePolicy};
use serde::Serialize;

use crate::cli::{CalcArgs, GlobalOpts, HistoryArgs, InteractiveArgs, LookupArgs, OutputArgs, RunArgs};

const RULE: &str = "═══════════════════════════════════════";

/// Settings from `--settings`, with `--strict` forcing the strict resolver
pub fn effective_settings(global: &GlobalOpts, strict: bool) -> CalcResult<EngineSettings> {
    let mut settings = match &global.settings {
        Some(path) => load_settings(path)?,
        None => EngineSettings::default(),
    };
    if strict {
        settings.resolve_policy = ResolvePolicy::Strict;
    }
    Ok(settings)
}

pub fn calc(args: &CalcArgs, global: &GlobalOpts) -> CalcResult<()> {
    run_job(&args.job.to_raw(), &args.run, global)
}

pub fn interactive(args: &InteractiveArgs, global: &GlobalOpts) -> CalcResult<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    let raw = prompt_job(&mut input, &mut output);
    println!();
    run_job(&raw, &args.run, global)
}

fn run_job(raw: &RawJobInput, run: &RunArgs, global: &GlobalOpts) -> CalcResult<()> {
    let settings = effective_settings(global, run.strict)?;
    let params = resolve(raw, settings.resolve_policy)?;
    let breakdown = compute_standard_time_with(&params, &settings)?;

    if run.json {
        let report = CalcReport {
            formatted: breakdown.formatted(),
            breakdown: &breakdown,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_breakdown(raw, &params, &breakdown));
    }

    if run.save {
        let user = std::env::var("USER")
            .or_else(|_| std::env::var("USERNAME"))
            .unwrap_or_else(|_| "unknown".to_string());
        let id = append_to_history(
            &global.history_file,
            &user,
            &raw.job_id,
            &raw.part_name,
            params,
            breakdown,
        )?;
        if !run.json {
            println!("Saved to {} ({})", global.history_file.display(), id);
        }
    }
    Ok(())
}

/// JSON form of a calculation: raw minutes plus the two-decimal strings
#[derive(Debug, Serialize)]
pub struct CalcReport<'a> {
    pub breakdown: &'a TimeBreakdown,
    pub formatted: FormattedBreakdown,
}

/// Read a line after printing `prompt`. Returns an empty string on EOF or error.
fn prompt_text<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> String {
    let _ = write!(output, "{}", prompt);
    if output.flush().is_err() {
        return String::new();
    }

    let mut line = String::new();
    if input.read_line(&mut line).is_err() {
        return String::new();
    }
    line.trim().to_string()
}

fn prompt_yes_no<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> bool {
    matches!(
        prompt_text(input, output, prompt).to_ascii_lowercase().as_str(),
        "y" | "yes"
    )
}

/// Collect job fields from a prompt session. Blank answers stay blank so the
/// resolver applies its defaults.
pub fn prompt_job<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> RawJobInput {
    let codes: Vec<&str> = KNOWN_GRADES.iter().map(|g| g.code).collect();
    let _ = writeln!(output, "Gun-Drill Standard Time Calculator");
    let _ = writeln!(output, "==================================");
    let _ = writeln!(output, "Press Enter to accept the default shown in brackets.");
    let _ = writeln!(output);

    RawJobInput {
        job_id: prompt_text(input, output, "Job ID: "),
        part_name: prompt_text(input, output, "Part name: "),
        material_grade: prompt_text(input, output, &format!("Material grade ({}): ", codes.join(", "))),
        drill_size: prompt_text(input, output, "Drill size (in) [0.299]: "),
        length_to_drill: prompt_text(input, output, "Length to drill (in) [5.0]: "),
        rpm: prompt_text(input, output, "RPM [table]: "),
        feed_rate: prompt_text(input, output, "Feed rate (in/min) [table or 0.8]: "),
        number_of_features: prompt_text(input, output, "Number of features [1]: "),
        grinding_interval_override: prompt_text(input, output, "Grinding interval override (in) [material]: "),
        include_fmj_port: prompt_yes_no(input, output, "Include FMJ port? (y/N): "),
        custom_setup_time: prompt_text(input, output, "Custom setup time (min) [none]: "),
        custom_grinding_time: prompt_text(input, output, "Custom grinding time (min) [none]: "),
    }
}

fn or_dash(s: &str) -> &str {
    if s.trim().is_empty() {
        "-"
    } else {
        s.trim()
    }
}

/// Boxed console report of one calculation
pub fn render_breakdown(raw: &RawJobInput, params: &JobParameters, b: &TimeBreakdown) -> String {
    let f = b.formatted();
    let group = b
        .material_group
        .map_or_else(|| "ungrouped".to_string(), |g| g.to_string());
    let mut out = String::new();

    out.push_str(&format!("{}\n  GUN-DRILL STANDARD TIME\n{}\n\n", RULE, RULE));
    out.push_str(&format!("Job:       {}  Part: {}\n", or_dash(&raw.job_id), or_dash(&raw.part_name)));
    out.push_str(&format!("Material:  {} ({})\n", or_dash(&params.material_grade), group));
    out.push_str(&format!("Drill:     {:.3}\"   Length: {:.3}\"\n", params.drill_size_in, params.length_to_drill_in));
    match params.rpm {
        Some(rpm) => out.push_str(&format!("Feed:      {:.2} in/min at {:.0} rpm\n", params.feed_rate_ipm, rpm)),
        None => out.push_str(&format!("Feed:      {:.2} in/min\n", params.feed_rate_ipm)),
    }
    out.push_str(&format!(
        "Features:  {}   Grind every {:.2}\"   Operations: {} x {} = {}\n\n",
        b.number_of_features,
        b.grinding_interval_in,
        b.operations_per_feature,
        b.number_of_features,
        b.total_operations
    ));

    out.push_str(&format!("{:<12}{:>12}{:>12}\n", "", "per", "total"));
    out.push_str(&format!("{:<12}{:>12}{:>12}\n", "Cutting", f.cutting_time_per_feature, f.total_cutting_time));
    out.push_str(&format!("{:<12}{:>12}{:>12}\n", "Setup", f.setup_time_per_operation, f.total_setup_time));
    out.push_str(&format!("{:<12}{:>12}{:>12}\n", "Grinding", f.grinding_time_per_operation, f.total_grinding_time));
    out.push_str(&format!("{:<12}{:>12}{:>12}\n", "Inspection", f.inspection_time_per_operation, f.total_inspection_time));
    if let Some(fmj) = &f.fmj_port_time {
        out.push_str(&format!("{:<12}{:>12}{:>12}\n", "FMJ port", "", fmj));
    }

    out.push_str(&format!("\n{}\n", RULE));
    out.push_str(&format!(
        "  TOTAL: {} min ({:.2} hr)\n",
        f.total_standard_time,
        b.total_standard_hours().value()
    ));
    out.push_str(&format!("{}\n", RULE));
    out
}

/// Everything the drill table and FMJ plans say about one grade
#[derive(Debug, Serialize)]
pub struct LookupReport {
    pub material_grade: String,
    pub material_group: Option<MaterialGroup>,
    pub grinding_interval_in: f64,
    pub drill_size_in: Option<f64>,
    pub recommended_cutting: Option<CuttingRecommendation>,
    /// Full table for the group, listed when no drill size is given
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub table_entries: Vec<DrillTableEntry>,
    pub fmj_port: Option<&'static FmjPortPlan>,
}

pub fn build_lookup(material: &str, drill_size: Option<&str>) -> CalcResult<LookupReport> {
    let group = MaterialGroup::from_grade(material);
    let drill_size_in = match drill_size {
        Some(raw) => Some(parse_inches(raw).ok_or_else(|| {
            CalcError::invalid_parameter("drill_size", raw.trim(), "Must be a number greater than zero")
        })?),
        None => None,
    };
    let recommended_cutting = match (group, drill_size_in) {
        (Some(g), Some(size)) => recommended_cutting(g, size),
        _ => None,
    };
    let table_entries = match (group, drill_size_in) {
        (Some(g), None) => entries_for_group(g),
        _ => Vec::new(),
    };

    Ok(LookupReport {
        material_grade: material.trim().to_string(),
        material_group: group,
        grinding_interval_in: default_grinding_interval(group),
        drill_size_in,
        recommended_cutting,
        table_entries,
        fmj_port: group.map(fmj_port_plan),
    })
}

pub fn render_lookup(report: &LookupReport) -> String {
    let mut out = String::new();
    match report.material_group {
        Some(g) => out.push_str(&format!("{} -> {}\n", report.material_grade, g)),
        None => out.push_str(&format!(
            "{} -> not a known grade (standard defaults apply)\n",
            report.material_grade
        )),
    }
    out.push_str(&format!("Grinding interval: {:.2}\"\n", report.grinding_interval_in));

    if let Some(size) = report.drill_size_in {
        match report.recommended_cutting {
            Some(c) => out.push_str(&format!("At {:.3}\": {:.0} rpm, {:.2} in/min\n", size, c.rpm, c.feed_rate_ipm)),
            None => out.push_str(&format!("At {:.3}\": no table entry\n", size)),
        }
    }
    if !report.table_entries.is_empty() {
        out.push_str("Drill table:\n");
        for e in &report.table_entries {
            out.push_str(&format!(
                "  {:.3}\"  {:>5.0} rpm  {:.2} in/min  ref {:.2}\" in {:.2} min\n",
                e.drill_size_in,
                e.recommendation.rpm,
                e.recommendation.feed_rate_ipm,
                e.reference_length_in,
                e.reference_time_min
            ));
        }
    }

    match report.fmj_port {
        Some(plan) => {
            out.push_str(&format!("FMJ port: {:.2} min\n", plan.total_time_min));
            for op in plan.operations() {
                out.push_str(&format!(
                    "  {:<12} {:.3}\" at {:.0} rpm, {:.2} in/min -> {:.2} min\n",
                    op.name, op.length_in, op.rpm, op.feed_rate_ipm, op.time_min
                ));
            }
        }
        None => out.push_str("FMJ port: no surcharge\n"),
    }
    out
}

pub fn lookup(args: &LookupArgs) -> CalcResult<()> {
    let report = build_lookup(&args.material, args.drill_size.as_deref())?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_lookup(&report));
    }
    Ok(())
}

pub fn materials(args: &OutputArgs) -> CalcResult<()> {
    if args.json {
        println!("{}", serde_json::to_string_pretty(&KNOWN_GRADES)?);
        return Ok(());
    }
    for group in MaterialGroup::ALL {
        println!("{} (grind every {:.0}\")", group, default_grinding_interval(Some(group)));
        for grade in grades_in_group(group) {
            println!("  {}", grade.code);
        }
    }
    Ok(())
}

pub fn history(args: &HistoryArgs, history_file: &Path) -> CalcResult<()> {
    let history = load_or_create_history(history_file)?;
    let entries: Vec<_> = match &args.job_id {
        Some(job) => history.for_job(job).take(args.limit).collect(),
        None => history.latest(args.limit).collect(),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }
    if entries.is_empty() {
        println!("No calculations in {}", history_file.display());
        return Ok(());
    }
    for entry in entries {
        println!(
            "{}  {:<10} {:<16} {:<8} {:>9.2} min",
            entry.timestamp.format("%Y-%m-%d %H:%M"),
            or_dash(&entry.job_id),
            or_dash(&entry.part_name),
            or_dash(&entry.parameters.material_grade),
            entry.breakdown.total_standard_time
        );
    }
    Ok(())
}

/// Print an error in text and JSON form
pub fn report_error(e: &CalcError) {
    eprintln!("Error [{}]: {}", e.error_code(), e);
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}
