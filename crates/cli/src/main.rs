use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use squaresplit::prelude::*;
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;
mod squares_io;

use provenance::Payload;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Equal-area split of square unions: run, generate, report")]
struct Cmd {
    /// Optional VK ticket UUID; propagated to outputs and logs
    #[arg(long)]
    vk: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute the split line of a square set (.csv with x,y,side columns, or .json)
    Split {
        #[arg(long)]
        input: String,
        /// Write the result as JSON (plus a provenance sidecar)
        #[arg(long)]
        out: Option<String>,
        /// Union areas at or below this are treated as zero
        #[arg(long)]
        eps_area: Option<f64>,
    },
    /// Write a reproducible random square set on a coarse grid
    Gen {
        #[arg(long, default_value_t = 1000)]
        count: usize,
        #[arg(long, default_value_t = 100)]
        levels: usize,
        #[arg(long, default_value_t = 8)]
        max_side: usize,
        #[arg(long, default_value_t = 1.0)]
        spacing: f64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long)]
        out: String,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Split {
            input,
            out,
            eps_area,
        } => split(input, out, eps_area, cmd.vk),
        Action::Gen {
            count,
            levels,
            max_side,
            spacing,
            seed,
            index,
            out,
        } => {
            let cfg = SquaresCfg {
                count,
                levels,
                spacing,
                max_side_steps: max_side,
            };
            generate(cfg, ReplayToken { seed, index }, out, cmd.vk)
        }
        Action::Report => report(cmd.vk),
    }
}

/// Split result as printed and written by `split`.
#[derive(Clone, Debug, PartialEq, Serialize)]
struct SplitSummary {
    squares: usize,
    y: f64,
    union_area: f64,
    area_below: f64,
    area_above: f64,
}

fn summarize(squares: &[Square], cfg: SplitCfg) -> Result<SplitSummary> {
    let y = find_horizontal_line_with(squares, cfg)?;
    let total = union_area(squares)?;
    let below = area_below(squares, y)?;
    Ok(SplitSummary {
        squares: squares.len(),
        y,
        union_area: total,
        area_below: below,
        area_above: total - below,
    })
}

fn split(
    input: String,
    out: Option<String>,
    eps_area: Option<f64>,
    vk: Option<String>,
) -> Result<()> {
    tracing::info!(input, out = ?out, vk = ?vk, "split");
    let squares = squares_io::read_squares(Path::new(&input))?;
    let mut cfg = SplitCfg::default();
    if let Some(eps) = eps_area {
        cfg.eps_area = eps;
    }
    let summary = summarize(&squares, cfg).with_context(|| format!("splitting {input}"))?;
    tracing::info!(
        squares = summary.squares,
        y = summary.y,
        union_area = summary.union_area,
        "split_done"
    );
    println!("{}", serde_json::to_string_pretty(&summary)?);

    if let Some(out) = out {
        let out_path = Path::new(&out);
        squares_io::ensure_parent(out_path)?;
        std::fs::write(out_path, serde_json::to_vec_pretty(&summary)?)
            .with_context(|| format!("writing {out}"))?;
        let payload = Payload::new(serde_json::json!({
            "cmd": "split",
            "input": input,
            "eps_area": cfg.eps_area
        }))
        .with_vk(vk);
        provenance::write_sidecar(out_path, payload)?;
    }
    Ok(())
}

fn generate(cfg: SquaresCfg, tok: ReplayToken, out: String, vk: Option<String>) -> Result<()> {
    tracing::info!(
        count = cfg.count,
        levels = cfg.levels,
        seed = tok.seed,
        index = tok.index,
        out,
        "gen"
    );
    let squares = draw_squares(cfg, tok);
    let out_path = Path::new(&out);
    squares_io::write_squares(out_path, &squares)?;
    let payload = Payload::new(serde_json::json!({
        "cmd": "gen",
        "count": cfg.count,
        "levels": cfg.levels,
        "max_side_steps": cfg.max_side_steps,
        "spacing": cfg.spacing,
        "seed": tok.seed,
        "index": tok.index
    }))
    .with_vk(vk);
    provenance::write_sidecar(out_path, payload)?;
    Ok(())
}

fn report(vk: Option<String>) -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "lib_version": squaresplit::VERSION,
        "vk": vk,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
