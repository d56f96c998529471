use clap::Parser;
use mosc::config::Config;
use std::fs;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(
    name = "mosc",
    about = "MOS Converter — normalize modern-dialect ObjectScript to verbose statement syntax"
)]
struct Cli {
    /// Input file(s) or directory
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Output file (default: stdout; single input only)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Report files that would change and exit non-zero, without writing
    #[arg(long)]
    check: bool,

    /// Assignment keyword (default: from config or SET)
    #[arg(long)]
    assignment_keyword: Option<String>,

    /// Invocation keyword (default: from config or DO)
    #[arg(long)]
    invocation_keyword: Option<String>,

    /// Config file path
    #[arg(long)]
    config: Option<PathBuf>,
}

fn die(msg: &str) -> ! {
    eprintln!("error: {}", msg);
    process::exit(1);
}

fn load_config(path: &PathBuf) -> Config {
    let text = fs::read_to_string(path).unwrap_or_else(|e| die(&format!("cannot read config: {}", e)));
    serde_json::from_str(&text).unwrap_or_else(|e| die(&format!("invalid config JSON: {}", e)))
}

fn main() {
    let cli = Cli::parse();

    // Load config
    let mut config = if let Some(ref config_path) = cli.config {
        load_config(config_path)
    } else {
        let defaults = ["mosc.config.json", "config/mosc.config.json"];
        let mut loaded = None;
        for p in &defaults {
            let path = PathBuf::from(p);
            if path.is_file() {
                loaded = Some(load_config(&path));
                break;
            }
        }
        loaded.unwrap_or_default()
    };

    // CLI overrides
    if let Some(kw) = cli.assignment_keyword {
        config.assignment_keyword = kw;
    }
    if let Some(kw) = cli.invocation_keyword {
        config.invocation_keyword = kw;
    }

    // Collect input files
    let files = mosc::list_files(&cli.inputs).unwrap_or_else(|e| die(&format!("{}", e)));
    if files.is_empty() {
        die("no input files found");
    }
    if cli.output.is_some() && files.len() > 1 {
        die("--output requires a single input file");
    }

    if cli.check {
        let mut changed = 0;
        for fp in &files {
            let content =
                fs::read_to_string(fp).unwrap_or_else(|e| die(&format!("cannot read {}: {}", fp.display(), e)));
            if mosc::normalize(&content, &config) != content {
                eprintln!("would rewrite {}", fp.display());
                changed += 1;
            }
        }
        if changed > 0 {
            eprintln!("{} of {} file(s) need normalization", changed, files.len());
            process::exit(1);
        }
        return;
    }

    for fp in &files {
        let content =
            fs::read_to_string(fp).unwrap_or_else(|e| die(&format!("cannot read {}: {}", fp.display(), e)));
        let result = mosc::normalize(&content, &config);

        if let Some(ref output_path) = cli.output {
            fs::write(output_path, &result)
                .unwrap_or_else(|e| die(&format!("cannot write {}: {}", output_path.display(), e)));
            eprintln!("normalized {} -> {}", fp.display(), output_path.display());
        } else {
            print!("{}", result);
        }
    }
}
