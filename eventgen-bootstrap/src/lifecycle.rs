use std::path::PathBuf;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::fs;
use tracing::{info, warn};

use eventgen_application::{run_generation, CancelFlag, RunSummary};

use crate::context::GeneratorContext;

#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub count: u32,
    pub output_dir: Option<String>,
    pub start_date: Option<String>,
    pub seed: Option<u64>,
    pub config: Option<PathBuf>,
}

pub async fn run(options: RunOptions) -> Result<RunSummary> {
    let context = GeneratorContext::new(&options).await?;

    let cancel = CancelFlag::default();
    tokio::spawn(cancel_on_shutdown(cancel.clone()));

    run_with_cancel(context, cancel).await
}

/// Generation itself is blocking, so it runs off the async workers while
/// the caller keeps the ability to flip `cancel`.
pub async fn run_with_cancel(context: GeneratorContext, cancel: CancelFlag) -> Result<RunSummary> {
    let GeneratorContext {
        state,
        request,
        seed,
    } = context;

    fs::create_dir_all(&request.output_dir)
        .await
        .with_context(|| format!("creating output directory {}", request.output_dir.display()))?;
    info!("using seed {}", seed);

    let summary = tokio::task::spawn_blocking(move || {
        let mut rng = StdRng::seed_from_u64(seed);
        run_generation(&state, &mut rng, &request, &cancel)
    })
    .await
    .context("generation task failed")??;

    Ok(summary)
}

async fn cancel_on_shutdown(cancel: CancelFlag) {
    shutdown_signal().await;
    warn!("shutdown requested, finishing the current week");
    cancel.cancel();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!("ctrl-c handler unavailable: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                warn!("sigterm handler unavailable: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
