use clap::Parser;
use fbgen::msg::{self, Msg};
use fbgen::{Config, Generator, Rules, Workspace};
use tracing_subscriber::EnvFilter;

const HELP_TEMPLATE: &str = "\
{before-help}{bin} {version}
  {about}

{usage-heading}
{tab}{usage}

{all-args}{after-help}";

#[derive(Debug, clap::Parser)]
#[clap(version, about, help_template = HELP_TEMPLATE)]
struct Args {
    /// Block program (YAML)
    #[clap(default_value = "main.yaml")]
    input: String,

    /// Output file
    #[clap(short, long, default_value = "main.c")]
    output: String,

    /// Generator config (YAML)
    #[clap(short, long)]
    config: Option<String>,

    /// Dump the name table
    #[clap(short, long)]
    dump: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    if let Err(err) = run(&args) {
        Msg::diag(&err);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), fbgen::Error> {
    println!("Firebird Code Generator");

    println!("1. Load");
    let config = match &args.config {
        Some(path) => {
            println!("  < {}", path);
            Config::load(path)?
        }
        None => Config::default(),
    };
    println!("  < {}", args.input);
    let workspace = Workspace::load(&args.input)?;
    if workspace.blocks.is_empty() {
        Msg::Warn(format!("`{}` has no blocks", args.input)).print();
    }

    println!("2. Generate");
    let generator = Generator::new(config, Rules::core());
    let generated = generator.generate(&workspace)?;

    println!("  > {}", args.output);
    std::fs::write(&args.output, &generated.code)
        .map_err(|e| fbgen::Error::FileWrite(args.output.clone(), e))?;

    if args.dump {
        msg::dump(&generated.bindings);
    }
    Ok(())
}
