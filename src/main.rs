use cidr_aggregate::config::Args;
use cidr_aggregate::logging::init_logging;
use cidr_aggregate::run;
use clap::Parser;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufReader};

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let args = Args::parse();
    init_logging(&args.log_config)?;
    log::info!("#Start main() {:?}", args);

    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut out = stdout.lock();
    let mut err = stderr.lock();

    let report = match args.input_path() {
        Some(path) => {
            let file = File::open(path)
                .map_err(|e| format!("error opening file {}: {e}", path.display()))?;
            run(BufReader::new(file), &mut out, &mut err, args.format)?
        }
        None => run(io::stdin().lock(), &mut out, &mut err, args.format)?,
    };

    log::debug!("report={}", serde_json::to_string(&report)?);
    Ok(())
}
