use std::io::{self, Write};
use std::process::ExitCode;
use std::time::Instant;

use pwd_crack::{Args, Config, CrackError, FileWordlist, Mode, Target, UsageError, crack, usage};

fn main() -> ExitCode {
    let program = std::env::args_os()
        .next()
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_else(|| "pwd-crack".to_string());

    let args = match Args::parse_from_os(std::env::args_os()) {
        Ok(args) => args,
        Err(e @ UsageError::WrongArgumentCount(_)) => {
            eprintln!("{}", usage(&program));
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let config = Config::from_env();
    init_logging(&config);

    match run(args, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            #[cfg(feature = "tracing")]
            tracing::error!("Search aborted: {}", e);
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(feature = "tracing")]
fn init_logging(config: &Config) {
    let level = config
        .log_level
        .parse::<tracing::Level>()
        .unwrap_or(tracing::Level::INFO);

    // stdout carries the report, logs go to stderr
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

#[cfg(not(feature = "tracing"))]
fn init_logging(_config: &Config) {}

fn run(args: Args, config: &Config) -> Result<(), CrackError> {
    let target = Target::new(args.target);
    let mut out = io::stdout().lock();

    #[cfg(feature = "tracing")]
    tracing::info!(
        "Auditing against {:?} ({:?} mode, max length {})",
        config.wordlist_path,
        config.mode,
        args.max_len
    );

    match config.mode {
        #[cfg(feature = "async")]
        Mode::Distributed => run_distributed(target, args.max_len, config, &mut out),
        #[cfg(not(feature = "async"))]
        Mode::Distributed => {
            #[cfg(feature = "tracing")]
            tracing::warn!("Built without the async feature, running sequentially");
            run_sequential(target, args.max_len, config, &mut out)
        }
        Mode::Sequential => run_sequential(target, args.max_len, config, &mut out),
    }
}

fn run_sequential<W: Write>(
    target: Target,
    max_len: usize,
    config: &Config,
    out: &mut W,
) -> Result<(), CrackError> {
    let started = Instant::now();
    let wordlist = FileWordlist::new(&config.wordlist_path);

    crack(&wordlist, &target, max_len, out)?;

    writeln!(
        out,
        "Password lookup completed in {} seconds.",
        started.elapsed().as_secs_f64()
    )?;
    Ok(())
}

#[cfg(feature = "async")]
fn run_distributed<W: Write>(
    target: Target,
    max_len: usize,
    config: &Config,
    out: &mut W,
) -> Result<(), CrackError> {
    use pwd_crack::{WordlistSource, run_pool};
    use std::sync::Arc;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(CrackError::Runtime)?;

    let wordlist: Arc<dyn WordlistSource> = Arc::new(FileWordlist::new(&config.wordlist_path));
    let outcome = runtime.block_on(run_pool(
        wordlist,
        Arc::new(target),
        max_len,
        config.workers,
        &mut *out,
    ))?;

    outcome.write_report(out)
}
