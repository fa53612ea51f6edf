use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use vfs_shell::commands::list_scripts_cmd::render_script_catalog;
use vfs_shell::repl::{print_result, run_interactive};
use vfs_shell::script::with_txt_extension;
use vfs_shell::{CommandResult, Shell, ShellOptions, VfsSource};

#[derive(Parser)]
#[command(name = "vfs-shell")]
#[command(about = "A shell over an in-memory virtual file system")]
#[command(version)]
struct Cli {
    /// Host directory imported as the initial virtual tree
    #[arg(long = "vfs-path")]
    vfs_path: Option<PathBuf>,

    /// Script run before interactive mode (.txt appended if missing)
    #[arg(long = "startup-script")]
    startup_script: Option<PathBuf>,

    /// Run one script non-interactively and exit
    #[arg(long = "run-script")]
    run_script: Option<PathBuf>,

    /// Print the *.txt scripts in the scripts directory and exit
    #[arg(long = "list-scripts")]
    list_scripts: bool,

    /// TOML file with shell options
    #[arg(long = "config")]
    config: Option<PathBuf>,

    /// With --run-script, print the script report as JSON
    #[arg(long = "json", requires = "run_script")]
    json: bool,
}

fn build_options(cli: &Cli) -> anyhow::Result<ShellOptions> {
    let mut options = match &cli.config {
        Some(path) => ShellOptions::load(path)?,
        None => ShellOptions::default(),
    };
    if cli.vfs_path.is_some() {
        options.vfs_path = cli.vfs_path.clone();
    }
    if cli.startup_script.is_some() {
        options.startup_script = cli.startup_script.clone();
    }
    options.startup_script = options
        .startup_script
        .map(|p| PathBuf::from(with_txt_extension(&p.to_string_lossy())));
    Ok(options)
}

fn print_launch_parameters(options: &ShellOptions) {
    let show = |p: &Option<PathBuf>| {
        p.as_ref().map(|p| p.display().to_string()).unwrap_or_else(|| "None".to_string())
    };
    println!("=== Launch parameters ===");
    println!("vfs_path: {}", show(&options.vfs_path));
    println!("startup_script: {}", show(&options.startup_script));
    println!("=========================");
    println!();
}

async fn run(cli: Cli) -> anyhow::Result<i32> {
    let options = build_options(&cli)?;

    if cli.list_scripts {
        print!("{}", render_script_catalog(&options.scripts_dir)?);
        return Ok(0);
    }

    if !cli.json {
        print_launch_parameters(&options);
    }

    let mut shell = Shell::new(options).await;
    if let VfsSource::Fallback { requested, reason } = shell.source() {
        eprintln!(
            "warning: cannot use {} as vfs ({}); using the built-in default tree",
            requested.display(),
            reason
        );
    }

    if let Some(script) = &cli.run_script {
        return match shell.run_script(script) {
            Ok(report) => {
                if cli.json {
                    println!("{}", serde_json::to_string(&report)?);
                } else {
                    print!("{}", report.transcript);
                }
                Ok(if report.is_success() { 0 } else { 1 })
            }
            Err(e) => {
                eprintln!("{}", e);
                Ok(1)
            }
        };
    }

    if let Some(startup) = shell.options().startup_script.clone() {
        println!("Running startup script: {}", startup.display());
        let ok = match shell.run_script(&startup) {
            Ok(report) => {
                print!("{}", report.transcript);
                report.is_success()
            }
            Err(e) => {
                print_result(&CommandResult::from(e));
                false
            }
        };
        if !ok {
            eprintln!("startup script failed, not entering interactive mode");
            return Ok(1);
        }
    }

    run_interactive(&mut shell).await.context("reading interactive input")?;
    Ok(shell.exit_code())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let code = run(cli).await?;
    std::process::exit(code);
}
