use std::{
    convert::Infallible,
    io,
    process::ExitCode,
    sync::OnceLock,
};

use application::{render, Args, Config, Service};
use service::{infra::Memory, query, Query as _};
use tracing as log;
use tracing_subscriber::{
    filter::filter_fn,
    layer::{Layer as _, SubscriberExt as _},
    util::SubscriberInitExt as _,
};

const STDERR_LEVELS: &[log::Level] = &[log::Level::WARN, log::Level::ERROR];

static LOG_LEVEL: OnceLock<log::Level> = OnceLock::new();

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_writer(io::stdout)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || (!STDERR_LEVELS.contains(meta.level()))
                            && LOG_LEVEL
                                .get()
                                .copied()
                                .unwrap_or(log::Level::INFO)
                                >= *meta.level()
                })),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_writer(io::stderr)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || (STDERR_LEVELS.contains(meta.level()))
                            && LOG_LEVEL
                                .get()
                                .copied()
                                .unwrap_or(log::Level::INFO)
                                >= *meta.level()
                })),
        )
        .init();

    match start() {
        Ok(()) => ExitCode::SUCCESS,
        Err(()) => ExitCode::FAILURE,
    }
}

fn start() -> Result<(), ()> {
    let args = Args::parse().map_err(|e| {
        if e.use_stderr() {
            log::error!("failed to parse command line arguments: {e}");
        } else {
            // `--help` and `--version` are reported as errors too.
            _ = e.print();
        }
    })?;

    let Config {
        catalog,
        filter,
        log,
    } = Config::new(&args.config).map_err(|e| {
        log::error!("failed to load `Config`: {e}");
    })?;

    LOG_LEVEL
        .set(log.level.into())
        .unwrap_or_else(|_| unreachable!("first initialization"));

    let path = args.catalog.as_deref().unwrap_or(&catalog.path);
    let memory = Memory::load(path).map_err(|e| {
        log::error!("failed to load catalog from `{path}`: {e}");
    })?;

    let service = Service::new(filter.into(), memory);

    if args.choices {
        let brands = service
            .execute(query::choices::Brands::by(()))
            .unwrap_or_else(|e: Infallible| match e {});
        let subcategories = service
            .execute(query::choices::Subcategories::by(()))
            .unwrap_or_else(|e: Infallible| match e {});
        println!("{}", render::choices(&brands, &subcategories));
        return Ok(());
    }

    let mut state = service.filter_state();
    args.apply(&mut state);
    log::debug!(
        active = state.active_filters_count(),
        query = ?state.query(),
        "applied filters",
    );

    let found = service
        .execute(query::products::List::by(state.query().clone()))
        .unwrap_or_else(|e: Infallible| match e {});

    let listing = render::listing(&state, &found, |p| {
        if !args.tags {
            return None;
        }
        service
            .execute(query::product::TagsById::by(p.id))
            .unwrap_or_else(|e: Infallible| match e {})
    });
    println!("{listing}");

    Ok(())
}
