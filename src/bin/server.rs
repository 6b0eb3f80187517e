use std::{
    fs::{self, OpenOptions},
    net::{IpAddr, SocketAddr},
    path::{Path, PathBuf},
    process::exit,
    sync::Arc,
    time::Instant,
};

use axum::{
    Router,
    extract::{MatchedPath, Request},
    middleware,
};
use axum_server::Handle;
use clap::Parser;
use time::{OffsetDateTime, macros::format_description};
use tower_http::trace::TraceLayer;

#[cfg(debug_assertions)]
use tower_livereload::LiveReloadLayer;

use tracing_subscriber::{Layer, filter, layer::SubscriberExt, util::SubscriberInitExt};

use budget_dashboard::{
    AppState, Database, build_router, expand_home_dir, graceful_shutdown, logging_middleware,
};

/// The web server for budget_dashboard.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to the application SQLite database.
    #[arg(long, env, default_value = "~/.budget_dashboard/finance.db")]
    db_path: PathBuf,

    /// The address to serve the app from.
    #[arg(long, env, default_value = "127.0.0.1")]
    host: IpAddr,

    /// The port to serve the app from.
    #[arg(short, long, env, default_value_t = 5000)]
    port: u16,

    /// Log debug messages to stdout.
    #[arg(long, env)]
    debug: bool,

    /// The directory to write log files to.
    #[arg(long, env, default_value = "logs")]
    log_dir: PathBuf,
}

#[tokio::main]
async fn main() {
    let start_time = Instant::now();
    let args = Args::parse();

    setup_logging(&args.log_dir, args.debug);

    let db_path = expand_home_dir(&args.db_path);
    let database = match Database::open(&db_path) {
        Ok(database) => database,
        Err(error) => {
            tracing::error!("Could not open database at {}: {error}", db_path.display());
            exit(1);
        }
    };

    let handle = Handle::new();
    tokio::spawn(graceful_shutdown(handle.clone()));

    let router = build_router(AppState::new(database)).layer(middleware::from_fn(logging_middleware));
    let router = add_tracing_layer(router);

    #[cfg(debug_assertions)]
    let router = router.layer(LiveReloadLayer::new());

    let addr = SocketAddr::from((args.host, args.port));

    tracing::info!(
        "HTTP server listening on http://{addr} (started in {:.2?})",
        start_time.elapsed()
    );
    if let Err(error) = axum_server::bind(addr)
        .handle(handle)
        .serve(router.into_make_service())
        .await
    {
        tracing::error!("Server error: {error}");
        exit(1);
    }
}

fn setup_logging(log_dir: &Path, debug: bool) {
    let stdout_level = if debug {
        filter::LevelFilter::DEBUG
    } else {
        filter::LevelFilter::INFO
    };
    let stdout_log = tracing_subscriber::fmt::layer()
        .pretty()
        .with_filter(stdout_level);

    let file_log = match open_log_file(log_dir) {
        Ok(log_file) => Some(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Arc::new(log_file))
                .with_filter(filter::LevelFilter::DEBUG),
        ),
        Err(error) => {
            eprintln!(
                "Could not create log file in {}, logging to stdout only: {error}",
                log_dir.display()
            );
            None
        }
    };

    tracing_subscriber::registry()
        .with(stdout_log)
        .with(file_log)
        .init();
}

fn open_log_file(log_dir: &Path) -> std::io::Result<fs::File> {
    fs::create_dir_all(log_dir)?;

    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    let timestamp = now
        .format(format_description!(
            "[year]-[month]-[day]_[hour]-[minute]-[second]"
        ))
        .unwrap_or_else(|_| now.unix_timestamp().to_string());

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join(format!("log_{timestamp}.log")))
}

fn add_tracing_layer(router: Router) -> Router {
    let tracing_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request| {
            let method = req.method();
            let uri = req.uri();

            let matched_path = req
                .extensions()
                .get::<MatchedPath>()
                .map(|matched_path| matched_path.as_str());

            tracing::debug_span!("request", %method, %uri, matched_path)
        })
        // Errors are logged by the handlers, so skip the default 5xx logging.
        .on_failure(());

    router.layer(tracing_layer)
}
