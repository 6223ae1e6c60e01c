#![allow(dead_code, clippy::similar_names)]
#![warn(clippy::shadow_reuse, clippy::shadow_same, clippy::builtin_type_shadow)]
mod budgets;
mod globe;
mod http_handler;
mod keychain;
mod logger;
mod panels;
mod preloader;

use crate::budgets::BudgetBoard;
use crate::globe::{DatasetEpoch, GlobeScene, fetch_country_growth};
use crate::keychain::Keychain;
use crate::panels::{AstronautPanel, TimelinePanel};
use crate::preloader::ReadySignal;
use std::env;
use tokio::task::JoinHandle;

#[tokio::main(flavor = "multi_thread", worker_threads = 4)]
async fn main() {
    let base_url_var = env::var("ST_BASE_URL");
    let base_url = base_url_var.as_ref().map_or("http://localhost:33000", |v| v.as_str());
    info!("loading space timeline data from {base_url}");

    let keychain = Keychain::new(base_url);
    let preloader = keychain.preloader();
    preloader.arm_splash_floor();
    let loaders = spawn_loaders(&keychain);

    if preloader.reveal().await {
        info!("all readiness signals complete, revealing main content");
    }
    futures::future::join_all(loaders).await;

    summarize(&keychain).await;
}

/// Spawns the four data loader tasks. Each one fills its content holder and
/// completes its readiness signal; a failed load completes fail-open with the
/// offline fallback left in place.
fn spawn_loaders(keychain: &Keychain) -> Vec<JoinHandle<()>> {
    let mut loaders = Vec::new();

    let kc_timeline = keychain.clone();
    loaders.push(tokio::spawn(async move {
        let kc = kc_timeline;
        let barrier = kc.preloader().barrier();
        match TimelinePanel::load(&kc.client()).await {
            Ok(panel) => {
                info!("timeline rendered with {} entries", panel.entries().len());
                *kc.timeline().write().await = panel;
                barrier.complete(ReadySignal::Timeline);
            }
            Err(e) => barrier.complete_failed(ReadySignal::Timeline, &e),
        }
    }));

    let kc_astronauts = keychain.clone();
    loaders.push(tokio::spawn(async move {
        let kc = kc_astronauts;
        let barrier = kc.preloader().barrier();
        match AstronautPanel::load(&kc.client()).await {
            Ok(panel) => {
                info!("astronaut records rendered with {} entries", panel.entries().len());
                *kc.astronauts().write().await = panel;
                barrier.complete(ReadySignal::Astronauts);
            }
            Err(e) => barrier.complete_failed(ReadySignal::Astronauts, &e),
        }
    }));

    let kc_globe = keychain.clone();
    loaders.push(tokio::spawn(async move {
        let kc = kc_globe;
        let barrier = kc.preloader().barrier();
        match GlobeScene::initialize(&kc.client()).await {
            Ok(scene) => {
                info!("globe scene ready: {} ({})", scene.count_label(), scene.field().orbit_census());
                *kc.globe().write().await = scene;
                barrier.complete(ReadySignal::GlobeScene);
            }
            Err(e) => barrier.complete_failed(ReadySignal::GlobeScene, &e),
        }
    }));

    let kc_budgets = keychain.clone();
    loaders.push(tokio::spawn(async move {
        let kc = kc_budgets;
        let barrier = kc.preloader().barrier();
        match BudgetBoard::load(&kc.client()).await {
            Ok(board) => {
                info!("budget board ready with {} entries", board.entries().len());
                *kc.budgets().write().await = board;
                barrier.complete(ReadySignal::BudgetBoard);
            }
            Err(e) => barrier.complete_failed(ReadySignal::BudgetBoard, &e),
        }
    }));

    loaders
}

/// Logs the revealed content the way the page presents it: globe legend and
/// count, the budget board, a sample country overlay and an epoch toggle.
async fn summarize(keychain: &Keychain) {
    let first_code = {
        let globe_lock = keychain.globe();
        let globe = globe_lock.read().await;
        log!("globe: {}", globe.count_label());
        for entry in globe.field().legend() {
            log!("  {} [{}]: {} satellites", entry.name(), entry.code(), entry.count());
        }
        globe.field().legend().first().map(|e| e.code().to_string())
    };

    for line in keychain.budgets().read().await.lines() {
        log!("budget: {line}");
    }

    if let Some(code) = first_code {
        match fetch_country_growth(&keychain.client(), &code).await {
            Ok(Some(growth)) => log!("overlay: {}", growth.summary()),
            Ok(None) => event!("no overlay data for {code}"),
            Err(e) => warn!("country overlay for {code} unavailable: {e}"),
        }

        match GlobeScene::switch_epoch(&keychain.globe(), &keychain.client(), DatasetEpoch::Eighties)
            .await
        {
            Ok(true) => {
                let globe_lock = keychain.globe();
                let globe = globe_lock.read().await;
                log!("toggled to {}: {}", globe.epoch(), globe.count_label());
            }
            Ok(false) => event!("epoch switch superseded"),
            Err(e) => warn!("epoch switch failed: {e}"),
        }
    }
}
