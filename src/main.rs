use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, anyhow};
use chrono::Local;
use clap::{ArgAction, Parser};
use log::debug;

use trajectory_rk4::config::{ScenarioConfig, load_scenario};
use trajectory_rk4::input::LaunchForm;
use trajectory_rk4::logging;
use trajectory_rk4::plot::{PlotOptions, default_output_path, render_report};
use trajectory_rk4::simulation::{SimulationReport, simulate_form};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Integrate a projectile trajectory with fixed-step RK4 and plot it"
)]
struct Cli {
    /// Initial speed (m/s)
    #[arg(long, allow_hyphen_values = true)]
    speed: Option<String>,
    /// Launch angle (degrees above horizontal)
    #[arg(long, allow_hyphen_values = true)]
    angle: Option<String>,
    /// Gravitational acceleration (m/s^2), 9.81 if omitted
    #[arg(long, allow_hyphen_values = true)]
    gravity: Option<String>,
    /// Integration step (s), 0.01 if omitted
    #[arg(long, allow_hyphen_values = true)]
    dt: Option<String>,
    /// Use the quadratic drag model
    #[arg(long)]
    drag: bool,
    /// Drag coefficient Cd [default: 0.47]
    #[arg(long, allow_hyphen_values = true)]
    cd: Option<String>,
    /// Fluid density (kg/m^3) [default: 1.225]
    #[arg(long, allow_hyphen_values = true)]
    rho: Option<String>,
    /// Cross-sectional area (m^2) [default: 0.1]
    #[arg(long, allow_hyphen_values = true)]
    area: Option<String>,
    /// Projectile mass (kg) [default: 1.0]
    #[arg(long, allow_hyphen_values = true)]
    mass: Option<String>,
    /// TOML scenario file; command-line values override it
    #[arg(long)]
    config: Option<PathBuf>,
    /// Plot file (.png or .svg)
    #[arg(long)]
    output: Option<PathBuf>,
    /// Skip rendering the plot
    #[arg(long)]
    no_plot: bool,
    /// Number of leading samples to print
    #[arg(long, default_value_t = 5)]
    preview: usize,
    #[arg(long)]
    width: Option<u32>,
    #[arg(long)]
    height: Option<u32>,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn override_field(field: &mut Option<String>, value: &Option<String>) {
    if value.is_some() {
        field.clone_from(value);
    }
}

fn read_field(prompt: &str, input: &mut impl BufRead) -> anyhow::Result<String> {
    print!("{prompt}");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut line = String::new();
    let bytes = input
        .read_line(&mut line)
        .context("could not read input")?;
    if bytes == 0 {
        return Err(anyhow!("input ended unexpectedly (EOF)"));
    }
    Ok(line.trim().to_string())
}

fn build_form(cli: &Cli, scenario: Option<&ScenarioConfig>) -> anyhow::Result<LaunchForm> {
    let mut form = scenario.map(ScenarioConfig::to_form).unwrap_or_default();

    override_field(&mut form.speed, &cli.speed);
    override_field(&mut form.angle, &cli.angle);
    override_field(&mut form.gravity, &cli.gravity);
    override_field(&mut form.dt, &cli.dt);
    override_field(&mut form.drag_coefficient, &cli.cd);
    override_field(&mut form.fluid_density, &cli.rho);
    override_field(&mut form.area, &cli.area);
    override_field(&mut form.mass, &cli.mass);

    if !form.has_launch_fields() {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        form.speed = Some(read_field("Initial speed (m/s): ", &mut input)?);
        form.angle = Some(read_field("Angle (degrees): ", &mut input)?);
    }

    let drag_flags = [&cli.cd, &cli.rho, &cli.area, &cli.mass];
    if cli.drag || form.use_drag || drag_flags.iter().any(|flag| flag.is_some()) {
        form = form.with_drag_defaults();
    }
    Ok(form)
}

fn print_report(report: &SimulationReport, preview: usize) {
    let flight = report.flight;
    let series = &report.series;

    println!("\nModel: {}", report.model().label());
    println!("Time of flight (analytic): {:.4} s", flight.time_of_flight_s);
    println!("Max height (analytic): {:.4} m", flight.max_height_m);
    println!("Range (analytic): {:.4} m", flight.range_m);
    println!("Samples: {} (dt = {} s)", series.len(), report.horizon.dt_s());
    println!("Peak height (simulated): {:.4} m", series.peak_height());
    match report.landing() {
        Some((t, x)) => println!("Landing (simulated): t = {t:.4} s, x = {x:.4} m"),
        None => println!("Landing (simulated): not reached within the horizon"),
    }

    let shown = preview.min(series.len());
    if shown > 0 {
        println!("First {shown} samples:");
        for i in 0..shown {
            println!(
                "  t = {:.4} s  x = {:.4} m  y = {:.4} m",
                series.time()[i],
                series.x()[i],
                series.y()[i]
            );
        }
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose).context("failed to install logger")?;

    let scenario = cli
        .config
        .as_ref()
        .map(|path| load_scenario(path).with_context(|| format!("loading {}", path.display())))
        .transpose()?;

    let form = build_form(&cli, scenario.as_ref())?;
    debug!("launch form: {form:?}");
    let report = simulate_form(&form)?;
    print_report(&report, cli.preview);

    if cli.no_plot {
        return Ok(());
    }

    let plot_config = scenario.map(|s| s.plot).unwrap_or_default();
    let output = cli
        .output
        .or(plot_config.output)
        .unwrap_or_else(|| default_output_path(Local::now()));
    let options = PlotOptions {
        width: cli.width.unwrap_or(plot_config.width),
        height: cli.height.unwrap_or(plot_config.height),
        ..PlotOptions::default()
    };
    render_report(&report, &output, &options)
        .with_context(|| format!("rendering {}", output.display()))?;
    println!("Plot written to {}", output.display());

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
