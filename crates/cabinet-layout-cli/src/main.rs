mod logger;

use anyhow::Result;
use cabinet_layout::{Plan, PlanOptions, PlanStatistics, ToleranceVerdict};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cabl", about = "Cabinet layout and cut-list CLI", version)]
struct Cli {
    /// Log more (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fit modules along a wall, stack rows and print the cut list
    Plan {
        /// Wall length in mm
        #[arg(short, long, allow_negative_numbers = true)]
        wall: i64,

        /// Module widths in mm (e.g. "200,300,400")
        #[arg(long, value_parser = parse_size_list)]
        widths: Option<cabinet_layout::SizeSet>,

        /// Total cabinet height in mm (plinth and top included)
        #[arg(long)]
        height: Option<i64>,

        /// Plinth height in mm
        #[arg(long, default_value = "0")]
        plinth: i64,

        /// Top trim height in mm
        #[arg(long, default_value = "0")]
        top: i64,

        /// Row heights in mm, each at most 320 (e.g. "160,320")
        #[arg(long, value_parser = parse_size_list)]
        heights: Option<cabinet_layout::SizeSet>,

        /// Cabinet depth in mm
        #[arg(long, default_value = "400")]
        depth: u32,

        /// Carcass material thickness in mm
        #[arg(long, default_value = "19")]
        thickness: u32,

        /// Back panel thickness in mm (0 for no back)
        #[arg(long, default_value = "0")]
        back_thickness: u32,

        /// Leave back panels out of the cut list
        #[arg(long)]
        no_back: bool,

        /// Assembly mode
        #[arg(long, default_value = "independent", value_enum)]
        assembly: AssemblyArg,

        /// Extra stock on independent-mode panels in mm
        #[arg(long, default_value = "0")]
        allowance: u32,

        /// Target horizontal tolerance in mm
        #[arg(long)]
        tolerance: Option<u32>,

        /// Start from a preset size range
        #[arg(long, value_enum)]
        preset: Option<PresetArg>,

        /// Save the options as JSON before solving
        #[arg(long)]
        save_config: Option<PathBuf>,

        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },

    /// Solve a plan from a JSON options file
    Run {
        /// Options file
        #[arg(short, long)]
        config: PathBuf,

        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum AssemblyArg {
    Independent,
    Shared,
}

#[derive(Clone, Copy, ValueEnum)]
enum PresetArg {
    Standard,
    #[value(name = "range300")]
    Range300,
    SolidWood,
}

impl From<AssemblyArg> for cabinet_layout::AssemblyMode {
    fn from(arg: AssemblyArg) -> Self {
        match arg {
            AssemblyArg::Independent => Self::Independent,
            AssemblyArg::Shared => Self::Shared,
        }
    }
}

fn parse_size_list(text: &str) -> std::result::Result<cabinet_layout::SizeSet, String> {
    cabinet_layout::parse_sizes(text).map_err(|e| e.to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::StderrLogger::from_verbosity(cli.verbose).init()?;

    let (options, json) = match cli.command {
        Commands::Plan {
            wall,
            widths,
            height,
            plinth,
            top,
            heights,
            depth,
            thickness,
            back_thickness,
            no_back,
            assembly,
            allowance,
            tolerance,
            preset,
            save_config,
            json,
        } => {
            let base = match preset {
                Some(PresetArg::Standard) => PlanOptions::standard_preset(wall),
                Some(PresetArg::Range300) => PlanOptions::range_300_preset(wall),
                Some(PresetArg::SolidWood) => PlanOptions::solid_wood_preset(wall),
                None => PlanOptions::default(),
            };
            let options = PlanOptions {
                wall_length_mm: wall,
                module_widths: widths.unwrap_or(base.module_widths),
                total_height_mm: height,
                plinth_mm: plinth,
                top_mm: top,
                vertical_heights: heights.unwrap_or(base.vertical_heights),
                depth_mm: depth,
                material_thickness_mm: thickness,
                back_thickness_mm: back_thickness,
                include_back: !no_back,
                assembly_mode: assembly.into(),
                corner_allowance_mm: allowance,
                target_tolerance_mm: tolerance.or(base.target_tolerance_mm),
            };

            if let Some(path) = save_config {
                options.save(&path).await?;
                log::info!("Saved options → {}", path.display());
            }
            (options, json)
        }

        Commands::Run { config, json } => (PlanOptions::load(&config).await?, json),
    };

    let plan = cabinet_layout::plan(&options).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    let stats = cabinet_layout::calculate_statistics(&plan, &options);
    print_statistics(&stats);
    print_plan(&plan);

    Ok(())
}

fn print_statistics(stats: &PlanStatistics) {
    println!("Layout Statistics:");
    println!("  Wall: {} mm", stats.wall_length_mm);
    println!(
        "  Modules: {} mm (gap {} mm)",
        stats.total_length_mm, stats.gap_mm
    );
    match stats.tolerance {
        ToleranceVerdict::Within { tolerance_mm } => {
            println!("  Tolerance: OK (≤ {} mm)", tolerance_mm)
        }
        ToleranceVerdict::Exceeds { tolerance_mm } => {
            println!("  Tolerance: exceeds {} mm", tolerance_mm)
        }
    }
    println!("  Module count: {}", stats.module_count);
    for (width, count) in stats.modules_per_width.iter().filter(|(_, c)| **c > 0) {
        println!("    {} mm × {} = {} mm", width, count, u64::from(*width) * *count as u64);
    }
    println!(
        "  Body: {} mm (target {} mm) in {} rows",
        stats.body_real_mm, stats.body_target_mm, stats.row_count
    );
    println!(
        "  Panels: {} ({} distinct)",
        stats.panel_count, stats.panel_rows
    );
}

fn print_plan(plan: &Plan) {
    let modules: Vec<String> = plan
        .horizontal
        .layout
        .widths()
        .map(|w| w.to_string())
        .collect();
    let rows: Vec<String> = plan
        .vertical
        .row_heights
        .iter()
        .map(|h| h.to_string())
        .collect();
    println!();
    println!("Modules: [{}]", modules.join(", "));
    println!("Rows:    [{}]", rows.join(", "));
    if plan.vertical.is_fallback {
        println!(
            "         (body height {} mm fits no row, single row used)",
            plan.vertical.target_height_mm
        );
    }

    if plan.cut_list.is_empty() {
        println!();
        println!("No panels to cut.");
        return;
    }

    println!();
    println!(
        "{:<24} {:>8} {:>8} {:>6} {:>5}",
        "Part", "L (mm)", "W (mm)", "T (mm)", "Qty"
    );
    for panel in plan.cut_list.iter() {
        println!(
            "{:<24} {:>8} {:>8} {:>6} {:>5}",
            panel.part.label(),
            panel.length,
            panel.width,
            panel.thickness,
            panel.quantity
        );
    }
}
