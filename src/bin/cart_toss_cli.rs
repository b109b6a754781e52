use cart_toss::{
    sample_path, solve_motion, AnimationConfig, AnimationReport, CatalogLayout, MotionParameters,
    OutputFormat, PathFlag, SolveSummary,
};
use clap::{Args, Parser, Subcommand};
use nalgebra::Vector2;
use std::error::Error;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cart-toss")]
#[command(version)]
#[command(about = "Solve and simulate add-to-cart projectile animations", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve launch speed and angle for a single throw
    Solve {
        #[command(flatten)]
        throw: ThrowArgs,

        /// Output format (table, json, csv)
        #[arg(short = 'o', long, default_value = "table")]
        output: OutputFormat,
    },

    /// Simulate a throw frame by frame
    Animate {
        #[command(flatten)]
        throw: ThrowArgs,

        /// Frame interval (milliseconds)
        #[arg(long, default_value = "16.667")]
        frame_ms: f64,

        /// Output format (table, json, csv)
        #[arg(short = 'o', long, default_value = "table")]
        output: OutputFormat,
    },

    /// List the catalog's control boxes and the cart box
    Catalog {
        /// Output format (table, json, csv)
        #[arg(short = 'o', long, default_value = "table")]
        output: OutputFormat,
    },

    /// Display program information
    Info,
}

#[derive(Args)]
struct ThrowArgs {
    /// Launch x (pixels)
    #[arg(long, allow_hyphen_values = true)]
    from_x: Option<f64>,

    /// Launch y (pixels)
    #[arg(long, allow_hyphen_values = true)]
    from_y: Option<f64>,

    /// Landing x (pixels)
    #[arg(long, allow_hyphen_values = true)]
    to_x: Option<f64>,

    /// Landing y (pixels)
    #[arg(long, allow_hyphen_values = true)]
    to_y: Option<f64>,

    /// Throw from the "add" control of this catalog card instead
    #[arg(long, conflicts_with_all = ["from_x", "from_y", "to_x", "to_y"])]
    card: Option<usize>,

    /// Vertical scroll offset (pixels)
    #[arg(long, default_value = "0.0")]
    scroll_y: f64,

    /// Gravity (overrides the config file)
    #[arg(short = 'g', long)]
    gravity: Option<f64>,

    /// JSON file with animation settings
    #[arg(long)]
    config: Option<PathBuf>,
}

impl ThrowArgs {
    fn config(&self) -> Result<AnimationConfig, Box<dyn Error>> {
        let mut config = match &self.config {
            Some(path) => AnimationConfig::from_path(path)?,
            None => AnimationConfig::default(),
        };
        if let Some(gravity) = self.gravity {
            config.gravity = gravity;
        }
        config.validate()?;
        Ok(config)
    }

    fn endpoints(&self) -> Result<(Vector2<f64>, Vector2<f64>, f64), Box<dyn Error>> {
        if let Some(card) = self.card {
            let geometry = CatalogLayout::default().click_geometry(card, self.scroll_y)?;
            let (origin, target) = geometry.endpoints()?;
            return Ok((origin, target, geometry.scroll_y));
        }
        match (self.from_x, self.from_y, self.to_x, self.to_y) {
            (Some(fx), Some(fy), Some(tx), Some(ty)) => {
                Ok((Vector2::new(fx, fy), Vector2::new(tx, ty), self.scroll_y))
            }
            _ => Err(
                "either --card or all of --from-x, --from-y, --to-x, --to-y are required".into(),
            ),
        }
    }

    fn solve(&self) -> Result<(MotionParameters, AnimationConfig), Box<dyn Error>> {
        let config = self.config()?;
        let (origin, target, scroll_y) = self.endpoints()?;
        let params = solve_motion(origin, target, scroll_y, &config)?;
        Ok((params, config))
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    match cli.command {
        Commands::Solve { throw, output } => {
            let (params, _) = throw.solve()?;
            display_solve(&SolveSummary::from(&params), output)?;
        }

        Commands::Animate { throw, frame_ms, output } => {
            let (params, config) = throw.solve()?;
            let samples = sample_path(&params, &config, frame_ms)?;
            if !samples.last().map_or(false, |s| s.flags.contains(&PathFlag::Arrival)) {
                eprintln!("Warning: run stopped at the frame cap before arriving");
            }
            display_animation(&AnimationReport::new(&params, frame_ms, &samples), output)?;
        }

        Commands::Catalog { output } => {
            display_catalog(&CatalogLayout::default(), output)?;
        }

        Commands::Info => {
            println!("╔════════════════════════════════════════╗");
            println!("║      CART TOSS v{:<8}               ║", env!("CARGO_PKG_VERSION"));
            println!("╠════════════════════════════════════════╣");
            println!("║ Projectile-arc add-to-cart animation.  ║");
            println!("╠════════════════════════════════════════╣");
            println!("║ Features:                              ║");
            println!("║ • Minimum-speed launch angle solver    ║");
            println!("║ • Vertical fallback for zero span      ║");
            println!("║ • Frame-driven marker animation        ║");
            println!("║ • Table, JSON and CSV output           ║");
            println!("╚════════════════════════════════════════╝");
        }
    }

    Ok(())
}

fn display_solve(summary: &SolveSummary, format: OutputFormat) -> Result<(), Box<dyn Error>> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(summary)?);
        }

        OutputFormat::Csv => {
            println!("metric,value");
            println!("origin_x,{:.2}", summary.origin_x);
            println!("origin_y,{:.2}", summary.origin_y);
            println!("target_x,{:.2}", summary.target_x);
            println!("target_y,{:.2}", summary.target_y);
            println!("gravity,{:.2}", summary.gravity);
            println!("initial_speed,{}", summary.initial_speed);
            println!("horizontal_span,{:.2}", summary.horizontal_span);
            println!("vertical_span,{:.2}", summary.vertical_span);
            println!("direction,{}", summary.direction);
            println!("launch_angle_deg,{:.4}", summary.launch_angle_deg);
            println!("attempts,{}", summary.attempts);
            if let Some(d) = summary.discriminant {
                println!("discriminant,{:.6}", d);
            }
        }

        OutputFormat::Table => {
            println!("╔════════════════════════════════════════╗");
            println!("║         LAUNCH SOLUTION                ║");
            println!("╠════════════════════════════════════════╣");
            println!("║ Origin:      ({:>8.1}, {:>8.1})       ║", summary.origin_x, summary.origin_y);
            println!("║ Target:      ({:>8.1}, {:>8.1})       ║", summary.target_x, summary.target_y);
            println!("║ Span:              {:>8.2} px         ║", summary.horizontal_span);
            println!("║ Rise:              {:>8.2} px         ║", summary.vertical_span);
            println!("║ Direction:         {:>9}          ║", summary.direction.to_string());
            println!("║ Speed:             {:>8}            ║", summary.initial_speed);
            println!("║ Launch Angle:      {:>8.3} deg        ║", summary.launch_angle_deg);
            println!("║ Attempts:          {:>8}            ║", summary.attempts);
            match summary.discriminant {
                Some(d) => println!("║ Discriminant:      {:>8.4}            ║", d),
                None => println!("║ Path:              vertical            ║"),
            }
            println!("╚════════════════════════════════════════╝");
        }
    }

    Ok(())
}

fn display_animation(report: &AnimationReport, format: OutputFormat) -> Result<(), Box<dyn Error>> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(report)?);
        }

        OutputFormat::Csv => {
            println!("frame,elapsed_ms,x,y,flags");
            for f in &report.frames {
                println!("{},{:.3},{:.2},{:.2},{}", f.frame, f.elapsed_ms, f.x, f.y, f.flags.join("|"));
            }
        }

        OutputFormat::Table => {
            display_solve(&report.motion, OutputFormat::Table)?;
            println!("\nFrames ({} at {:.3} ms, {:.1} ms total):", report.frames.len(), report.frame_interval_ms, report.duration_ms);
            println!("┌──────────┬────────────┬──────────┬──────────┬──────────┐");
            println!("│  Frame   │  Time (ms) │  X (px)  │  Y (px)  │  Event   │");
            println!("├──────────┼────────────┼──────────┼──────────┼──────────┤");
            for f in &report.frames {
                println!("│ {:>8} │ {:>10.2} │ {:>8.1} │ {:>8.1} │ {:>8} │",
                    f.frame, f.elapsed_ms, f.x, f.y, f.flags.join(","));
            }
            println!("└──────────┴────────────┴──────────┴──────────┴──────────┘");
        }
    }

    Ok(())
}

fn display_catalog(layout: &CatalogLayout, format: OutputFormat) -> Result<(), Box<dyn Error>> {
    let controls = layout.control_boxes();
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(layout)?);
        }

        OutputFormat::Csv => {
            println!("card,left,top,width,height");
            for (index, b) in controls.iter().enumerate() {
                println!("{},{:.1},{:.1},{:.1},{:.1}", index, b.left, b.top, b.width, b.height);
            }
            let cart = layout.cart;
            println!("cart,{:.1},{:.1},{:.1},{:.1}", cart.left, cart.top, cart.width, cart.height);
        }

        OutputFormat::Table => {
            println!("┌──────────┬──────────┬──────────┬──────────┬──────────┐");
            println!("│   Card   │   Left   │   Top    │  Width   │  Height  │");
            println!("├──────────┼──────────┼──────────┼──────────┼──────────┤");
            for (index, b) in controls.iter().enumerate() {
                println!("│ {:>8} │ {:>8.1} │ {:>8.1} │ {:>8.1} │ {:>8.1} │",
                    index, b.left, b.top, b.width, b.height);
            }
            let cart = layout.cart;
            println!("│ {:>8} │ {:>8.1} │ {:>8.1} │ {:>8.1} │ {:>8.1} │",
                "cart", cart.left, cart.top, cart.width, cart.height);
            println!("└──────────┴──────────┴──────────┴──────────┴──────────┘");
        }
    }

    Ok(())
}
