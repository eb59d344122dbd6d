use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Style, Styles};
use parttab::{
    BuildEnv, FACTORY_BINARY_OPTION, PARTITIONS_BOARD_CONFIG, add_factory_to_extra_images,
    upload_requested,
};

const HEADER: Style = AnsiColor::Green.on_default().effects(Effects::BOLD);
const USAGE: Style = AnsiColor::Green.on_default().effects(Effects::BOLD);
const LITERAL: Style = AnsiColor::Cyan.on_default().effects(Effects::BOLD);
const PLACEHOLDER: Style = AnsiColor::Cyan.on_default();
const ERROR: Style = AnsiColor::Red.on_default().effects(Effects::BOLD);
const VALID: Style = AnsiColor::Cyan.on_default().effects(Effects::BOLD);
const INVALID: Style = AnsiColor::Yellow.on_default().effects(Effects::BOLD);

/// Cargo's color style
/// [source](https://github.com/crate-ci/clap-cargo/blob/master/src/style.rs)
const CARGO_STYLING: Styles = Styles::styled()
    .header(HEADER)
    .usage(USAGE)
    .literal(LITERAL)
    .placeholder(PLACEHOLDER)
    .error(ERROR)
    .valid(VALID)
    .invalid(INVALID);

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[clap(styles = CARGO_STYLING)]
struct Cli {
    /// Project root directory
    #[arg(long, default_value_t = String::from("."))]
    project_dir: String,

    /// Active build environment name, used in diagnostics
    #[arg(long, default_value_t = String::from("default"))]
    environment: String,

    /// Factory binary path, relative to the project root
    #[arg(long)]
    factory_binary: Option<String>,

    /// Partition table CSV path, relative to the project root
    #[arg(long)]
    partitions: Option<String>,

    /// Build targets passed through by the host build tool
    #[arg()]
    targets: Vec<String>,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if !upload_requested(&cli.targets) {
        log::debug!("No upload target requested, nothing to do");
        return;
    }

    let mut env = BuildEnv::new(&cli.project_dir, &cli.environment);
    if let Some(factory_binary) = &cli.factory_binary {
        env = env.with_option(FACTORY_BINARY_OPTION, factory_binary);
    }
    if let Some(partitions) = &cli.partitions {
        env = env.with_board_config(PARTITIONS_BOARD_CONFIG, partitions);
    }

    if let Err(err) = add_factory_to_extra_images(&mut env) {
        log::error!("{}", err);
        std::process::exit(1);
    }

    for image in env.flash_extra_images() {
        println!("{} {}", image.offset, image.path);
    }
}
