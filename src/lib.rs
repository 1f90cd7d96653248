use pack_client::{ClientConfig, Controller};
use std::path::PathBuf;
use tauri::Manager;

mod commands;
mod selection;
mod surface;
mod types;

/// Shared by all commands
pub struct ForgeState {
    pub controller: Controller,
}

fn init_logging() {
    let env = env_logger::Env::default().default_filter_or("info");
    // try_init: a logger may already be installed
    let _ = env_logger::Builder::from_env(env).try_init();
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    init_logging();

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .plugin(tauri_plugin_dialog::init())
        .setup(|app| {
            // Archives land in the user's Downloads folder, like a browser download
            let download_dir: PathBuf = match app.path().download_dir() {
                Ok(dir) => dir,
                Err(e) => {
                    log::warn!("No download dir ({}), using app data dir", e);
                    app.path().app_data_dir()?
                }
            };

            let config = ClientConfig::new(download_dir).with_env_overrides();
            log::info!(
                "CreativeForge: endpoint {}, downloads in {}",
                config.endpoint,
                config.download_dir.display()
            );

            let controller = Controller::new(config)?;
            app.manage(ForgeState { controller });

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::pick_image,
            commands::clear_image,
            commands::generate_pack,
            commands::save_archive,
            commands::reveal_download,
            commands::backend_status
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
