use std::time::Duration;

use skyglow_common::SkyglowError;
use skyglow_config::ReloadManager;
use skyglow_theme::SkyRefresher;

use crate::app::{load_palette, App};
use crate::render;

/// Follow the sky until Ctrl-C, reloading the palette when the config changes.
pub(super) fn run(app: &App, interval: Option<u32>, script: bool) -> Result<(), SkyglowError> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(watch(app, interval, script))
}

async fn watch(app: &App, interval: Option<u32>, script: bool) -> Result<(), SkyglowError> {
    let period = interval
        .map(|secs| Duration::from_secs(u64::from(secs)))
        .unwrap_or_else(|| app.config.sky.refresh_interval());

    let mut sky_rx = app.theme.sky_colors().subscribe();
    let refresher = SkyRefresher::with_interval(app.theme.clone(), period);
    refresher.start();
    if !refresher.is_running() {
        return Err(SkyglowError::Other("could not schedule sky updates".into()));
    }

    let mut config_rx = match app.config_path.clone() {
        Some(path) => Some(ReloadManager::start(path).await.1),
        None => None,
    };

    tracing::info!(?period, "watching sky");
    sky_rx.borrow_and_update();
    print_update(app, script);

    loop {
        tokio::select! {
            changed = sky_rx.changed() => {
                if changed.is_err() {
                    break;
                }
                print_update(app, script);
            }
            Some(config) = next_config(&mut config_rx) => {
                let palette = load_palette(&config, app.config_path.as_deref());
                app.theme.set_palette(palette);
                if interval.is_none() {
                    refresher.set_interval(config.sky.refresh_interval());
                }
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("interrupted");
                break;
            }
        }
    }

    refresher.stop();
    Ok(())
}

/// Next reloaded config; pending forever when not watching or once closed.
async fn next_config(
    rx: &mut Option<tokio::sync::watch::Receiver<skyglow_config::SkyglowConfig>>,
) -> Option<skyglow_config::SkyglowConfig> {
    let Some(receiver) = rx.as_mut() else {
        return std::future::pending().await;
    };
    if receiver.changed().await.is_err() {
        *rx = None;
        return std::future::pending().await;
    }
    let config = receiver.borrow_and_update().clone();
    Some(config)
}

fn print_update(app: &App, script: bool) {
    let time = skyglow_theme::clock::format_hm(&app.theme.now());
    println!("{}", render::update_line(&time, &app.theme.sky_colors().get()));
    let js = app.document.take_script();
    if script {
        println!("{js}");
    }
}
