use anyhow::Result;
use mist::args;

fn main() -> Result<()> {
    // Parse first: help and usage errors must not be mixed with log output
    let args = args::parse_or_exit(std::env::args_os().skip(1));

    let _guard = mist::logging::init()?;
    mist::logging::install_panic_hook();

    tracing::info!("MIST started (exec mode: {})", args.exec_mode);
    args.log_summary();

    // Hand-off to the pipeline stage
    println!("{}", args.to_json()?);

    Ok(())
}
