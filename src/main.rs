use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use u_cpusched::config::SimulationConfig;
use u_cpusched::models::{GanttEntry, Policy, PolicyKind, SimulationResult};
use u_cpusched::scheduler::{
    compare_policies, CpuScheduler, PolicyComparison, SimulationMetrics, Stepping,
};
use u_cpusched::workload::RandomWorkload;

/// Simulate CPU scheduling policies over a process set.
#[derive(Parser, Debug)]
#[command(name = "cpusched", about = "Simulate CPU scheduling policies")]
struct Args {
    /// Scenario file (.toml or .json)
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Policy: fcfs, sjf, srtf, rr, priority, priority_preemptive
    #[arg(long)]
    policy: Option<PolicyKind>,

    /// Round-robin time quantum
    #[arg(long)]
    quantum: Option<u64>,

    /// Append this many randomly generated processes
    #[arg(long)]
    random: Option<usize>,

    /// Seed for --random
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Use the unit-step engine for preemptive policies
    #[arg(long)]
    stepwise: bool,

    /// Run all six policies and print a comparison
    #[arg(long)]
    compare: bool,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

// Quantum used for the round-robin row of --compare when none is configured.
const DEFAULT_COMPARE_QUANTUM: u64 = 2;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => SimulationConfig::from_path(path)
            .with_context(|| format!("failed to load scenario {}", path.display()))?,
        None => SimulationConfig::default(),
    };
    if let Some(policy) = args.policy {
        config.policy = policy;
    }
    if args.quantum.is_some() {
        config.quantum = args.quantum;
    }
    if args.stepwise {
        config.stepping = Stepping::Stepwise;
    }

    let mut processes = config.resolve_processes();
    if let Some(count) = args.random {
        processes.extend(RandomWorkload::new(count).with_seed(args.seed).generate());
    }
    info!(processes = processes.len(), "scenario loaded");

    if args.compare {
        let quantum = config.quantum.unwrap_or(DEFAULT_COMPARE_QUANTUM);
        let rows = compare_policies(&processes, &Policy::all(quantum), config.stepping)
            .context("comparison failed")?;

        if args.json {
            println!("{}", serde_json::to_string_pretty(&rows)?);
        } else {
            print_comparison(&rows);
        }
        return Ok(());
    }

    let policy = config.policy().context("invalid policy configuration")?;
    let result = CpuScheduler::new(policy)
        .with_stepping(config.stepping)
        .simulate(&processes)
        .context("simulation failed")?;
    let metrics = SimulationMetrics::calculate(&result)?;

    if args.json {
        let report = serde_json::json!({ "result": result, "metrics": metrics });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_result(&result, &metrics);
    }

    Ok(())
}

fn print_result(result: &SimulationResult, metrics: &SimulationMetrics) {
    println!("Policy: {}", result.policy);
    println!();
    println!("Gantt:");
    for entry in &result.timeline {
        let span = entry.span();
        let label = match entry {
            GanttEntry::Busy { process_id, .. } => process_id.as_str(),
            GanttEntry::Idle { .. } => "IDLE",
        };
        println!("  [{:>4}, {:>4})  {label}", span.start, span.end);
    }

    println!();
    println!(
        "{:<8} {:>7} {:>5} {:>6} {:>10} {:>7} {:>8}",
        "ID", "Arrival", "Burst", "Finish", "Turnaround", "Waiting", "Response"
    );
    for p in &result.processes {
        println!(
            "{:<8} {:>7} {:>5} {:>6} {:>10} {:>7} {:>8}",
            p.id,
            p.arrival_time,
            p.burst_time,
            p.finish_time,
            p.turnaround_time,
            p.waiting_time,
            p.response_time
        );
    }

    println!();
    println!("{metrics}");
}

fn print_comparison(rows: &[PolicyComparison]) {
    println!(
        "{:<20} {:>10} {:>8} {:>8} {:>10} {:>6}",
        "Policy", "Turnaround", "Waiting", "Response", "Throughput", "Util%"
    );
    for row in rows {
        let m = &row.metrics;
        println!(
            "{:<20} {:>10.2} {:>8.2} {:>8.2} {:>10.4} {:>6.2}",
            row.policy.to_string(),
            m.avg_turnaround,
            m.avg_waiting,
            m.avg_response,
            m.throughput,
            m.cpu_utilization * 100.0
        );
    }
}
