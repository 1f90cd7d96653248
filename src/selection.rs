use pack_client::{ImageSelection, ImageSlot};
use std::path::PathBuf;
use tokio::sync::Mutex;

// Current contents of the two file inputs
lazy_static::lazy_static! {
    static ref SELECTION: Mutex<ImageSelection> = Mutex::new(ImageSelection::default());
}

/// Replace one input's file and return the resulting selection
pub(crate) async fn set_image(slot: ImageSlot, path: Option<PathBuf>) -> ImageSelection {
    let mut selection = SELECTION.lock().await;
    selection.set(slot, path);
    selection.clone()
}

pub(crate) async fn snapshot() -> ImageSelection {
    SELECTION.lock().await.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn set_image_updates_snapshot() {
        set_image(ImageSlot::Logo, Some(PathBuf::from("/tmp/logo.png"))).await;
        let after_product = set_image(ImageSlot::Product, Some(PathBuf::from("/tmp/p.jpg"))).await;
        assert!(after_product.complete().is_some());
        assert_eq!(snapshot().await, after_product);

        let cleared = set_image(ImageSlot::Logo, None).await;
        assert!(cleared.complete().is_none());
        assert_eq!(cleared.product, Some(PathBuf::from("/tmp/p.jpg")));
    }
}
