use crate::selection;
use crate::surface::TauriSurface;
use crate::ForgeState;
use pack_client::{FormFields, ImageSlot, SubmitOutcome};
use std::path::PathBuf;
use tauri::{AppHandle, State};
use tauri_plugin_dialog::DialogExt;
use tauri_plugin_opener::OpenerExt;

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp"];

/// Open a file picker for one image input and refresh previews.
/// Returns the chosen path, or `None` if the picker was dismissed.
#[tauri::command]
pub async fn pick_image(
    app: AppHandle,
    state: State<'_, ForgeState>,
    slot: ImageSlot,
) -> Result<Option<String>, String> {
    let picked = app
        .dialog()
        .file()
        .set_title(format!("Select {} image", slot))
        .add_filter("Images", IMAGE_EXTENSIONS)
        .blocking_pick_file();

    let Some(picked) = picked else {
        return Ok(None);
    };
    let path = picked
        .as_path()
        .map(PathBuf::from)
        .ok_or_else(|| format!("Unsupported file location: {:?}", picked))?;

    log::info!("selection: {} -> {}", slot, path.display());
    let current = selection::set_image(slot, Some(path.clone())).await;
    state
        .controller
        .refresh_previews(&TauriSurface::new(app), &current)
        .await;

    Ok(Some(path.to_string_lossy().to_string()))
}

#[tauri::command]
pub async fn clear_image(
    app: AppHandle,
    state: State<'_, ForgeState>,
    slot: ImageSlot,
) -> Result<(), String> {
    let current = selection::set_image(slot, None).await;
    state
        .controller
        .refresh_previews(&TauriSurface::new(app), &current)
        .await;
    Ok(())
}

/// Submit button handler
#[tauri::command]
pub async fn generate_pack(
    app: AppHandle,
    state: State<'_, ForgeState>,
    fields: FormFields,
) -> Result<SubmitOutcome, String> {
    let current = selection::snapshot().await;
    let outcome = state
        .controller
        .submit(&TauriSurface::new(app), &current, &fields)
        .await;
    Ok(outcome)
}

/// Download link click; fails once the link has been released
#[tauri::command]
pub async fn save_archive(state: State<'_, ForgeState>, href: String) -> Result<String, String> {
    state
        .controller
        .save_again(&href)
        .await
        .map(|path| path.to_string_lossy().to_string())
        .map_err(|e| format!("Failed to save archive: {}", e))
}

/// Show a downloaded archive in the system file manager
#[tauri::command]
pub async fn reveal_download(app: AppHandle, path: String) -> Result<(), String> {
    app.opener()
        .reveal_item_in_dir(&path)
        .map_err(|e| format!("Failed to reveal {}: {}", path, e))
}

#[tauri::command]
pub async fn backend_status(state: State<'_, ForgeState>) -> Result<String, String> {
    state
        .controller
        .client()
        .health()
        .await
        .map_err(|e| format!("Backend unavailable: {}", e))
}
