use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use scriptstacker::config::{
	CONFIG_FILE_NAME, EffectiveConfig, generate_init_template, load_effective_config,
};
use scriptstacker::logging::init_logging;
use scriptstacker::middleware::ScriptStacker;

#[derive(Parser)]
#[command(name = "scriptstacker")]
#[command(
	author,
	version,
	about = "Inject script and stylesheet tags for files on disk into HTML slot markers"
)]
#[command(arg_required_else_help = true)]
struct Cli {
	#[command(subcommand)]
	command: Option<Commands>,

	/// Use this config file instead of searching for .scriptstacker.toml
	#[arg(long, global = true, value_name = "PATH")]
	config: Option<PathBuf>,

	/// Log discovery and substitution details to stderr
	#[arg(short, long, global = true)]
	verbose: bool,

	/// Create a template .scriptstacker.toml in the current directory
	#[arg(long)]
	init: bool,

	/// Overwrite existing .scriptstacker.toml when using --init
	#[arg(long, requires = "init")]
	force: bool,
}

#[derive(Subcommand)]
enum Commands {
	/// Replace slot markers in an HTML file and print the result
	Render {
		/// HTML file to render, or - for stdin
		file: PathBuf,

		/// Write the result here instead of stdout
		#[arg(short, long, value_name = "PATH")]
		output: Option<PathBuf>,
	},
	/// List serve prefixes that must be exposed verbatim from disk
	StaticPaths,
	/// Configuration management commands
	Config {
		#[command(subcommand)]
		action: ConfigAction,
	},
}

#[derive(Subcommand)]
enum ConfigAction {
	/// Display effective stackers and path declarations
	Show,
	/// Check the configuration for errors without rendering anything
	Validate,
}

fn main() -> ExitCode {
	match run() {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn run() -> Result<ExitCode> {
	let cli = Cli::parse();
	init_logging(cli.verbose);

	// Handle --init
	if cli.init {
		return handle_init(cli.force);
	}

	let config_path = cli.config.as_deref();

	match cli.command {
		Some(Commands::Render { file, output }) => {
			handle_render(config_path, &file, output.as_deref())
		}
		Some(Commands::StaticPaths) => handle_static_paths(config_path),
		Some(Commands::Config { action }) => match action {
			ConfigAction::Show => handle_config_show(config_path),
			ConfigAction::Validate => handle_config_validate(config_path),
		},
		// No command specified - this shouldn't happen due to arg_required_else_help
		None => Ok(ExitCode::SUCCESS),
	}
}

fn load_config(explicit: Option<&Path>) -> Result<EffectiveConfig> {
	let cwd = std::env::current_dir().context("Failed to get current directory")?;
	load_effective_config(&cwd, explicit).context("Failed to load configuration")
}

fn build_stacker(explicit: Option<&Path>) -> Result<ScriptStacker> {
	let config = load_config(explicit)?;
	ScriptStacker::from_config(&config).context("Invalid stacker configuration")
}

fn handle_init(force: bool) -> Result<ExitCode> {
	let config_path = PathBuf::from(CONFIG_FILE_NAME);

	if config_path.exists() && !force {
		anyhow::bail!("{CONFIG_FILE_NAME} already exists. Use --force to overwrite.");
	}

	std::fs::write(&config_path, generate_init_template())
		.with_context(|| format!("Failed to write {}", config_path.display()))?;

	println!("Created {CONFIG_FILE_NAME}");
	Ok(ExitCode::SUCCESS)
}

fn handle_render(config: Option<&Path>, file: &Path, output: Option<&Path>) -> Result<ExitCode> {
	let stacker = build_stacker(config)?;

	let html = if file == Path::new("-") {
		let mut buf = String::new();
		std::io::stdin()
			.read_to_string(&mut buf)
			.context("Failed to read stdin")?;
		buf
	} else {
		std::fs::read_to_string(file)
			.with_context(|| format!("Failed to read {}", file.display()))?
	};

	let rendered = stacker.render(&html);

	match output {
		Some(path) => std::fs::write(path, rendered)
			.with_context(|| format!("Failed to write {}", path.display()))?,
		None => {
			let mut stdout = std::io::stdout().lock();
			stdout
				.write_all(rendered.as_bytes())
				.context("Failed to write stdout")?;
		}
	}

	Ok(ExitCode::SUCCESS)
}

fn handle_static_paths(config: Option<&Path>) -> Result<ExitCode> {
	let stacker = build_stacker(config)?;
	for path in stacker.static_paths() {
		println!("{path}");
	}
	Ok(ExitCode::SUCCESS)
}

fn handle_config_show(config: Option<&Path>) -> Result<ExitCode> {
	let effective = load_config(config)?;

	match effective.source {
		Some(ref path) => println!("# Source: {}", path.display()),
		None => println!("# Source: built-in defaults"),
	}
	println!();

	println!("Stackers (in substitution order):\n");
	for (kind, stacker) in effective.stackers.iter() {
		println!("  {kind}:");
		println!("    template: {}", stacker.template);
		println!("    glob: {}", stacker.glob);
		println!("    slot: {}", stacker.slot);
		println!();
	}

	if effective.spec.is_empty() {
		println!("No paths declared.");
		return Ok(ExitCode::SUCCESS);
	}

	println!("Paths:\n");
	for (kind, paths) in effective.spec.iter() {
		println!("  {kind}:");
		for path in paths {
			let marker = if path.paths_identical() { " (static)" } else { "" };
			println!(
				"    {} -> {}{}",
				path.source_path(),
				path.serve_path(),
				marker
			);
		}
		println!();
	}

	Ok(ExitCode::SUCCESS)
}

fn handle_config_validate(config: Option<&Path>) -> Result<ExitCode> {
	let cwd = std::env::current_dir().context("Failed to get current directory")?;

	let result = load_effective_config(&cwd, config)
		.and_then(|effective| ScriptStacker::from_config(&effective).map(|_| effective));

	match result {
		Ok(effective) => {
			match effective.source {
				Some(ref path) => {
					let declared: usize = effective.spec.iter().map(|(_, p)| p.len()).sum();
					println!(
						"Configuration is valid: {} ({} stackers, {} paths)",
						path.display(),
						effective.stackers.len(),
						declared
					);
				}
				None => println!("No configuration files found. Using defaults."),
			}
			Ok(ExitCode::SUCCESS)
		}
		Err(e) => {
			eprintln!("Configuration error: {e}");
			Ok(ExitCode::FAILURE)
		}
	}
}
