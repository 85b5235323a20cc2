// SPDX-License-Identifier: MPL-2.0
//! Decodes a confirmed selection into full images for the host application.
//!
//! Delivery resolves only once every requested decode has completed: the
//! futures are joined, not raced against a timer, so a large selection or a
//! slow disk can never under-deliver. Failed decodes are dropped; successes
//! keep selection order.

use crate::error::{Error, Result};
use crate::library::asset::PhotoAsset;
use iced::widget::image;
use image_rs::GenericImageView;
use std::path::Path;

/// A confirmed photo decoded at full size.
#[derive(Debug, Clone)]
pub struct PickedImage {
    pub asset: PhotoAsset,
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

/// Decodes every asset concurrently and returns the successes in selection
/// order once all decodes have finished.
pub async fn load_selected(assets: Vec<PhotoAsset>) -> Vec<PickedImage> {
    let decodes = assets.into_iter().map(|asset| async move {
        let path = asset.path().to_path_buf();
        let result = tokio::task::spawn_blocking(move || decode_full(&path))
            .await
            .unwrap_or_else(|e| Err(Error::Image(format!("Decode task failed: {e}"))));

        match result {
            Ok((handle, width, height)) => Some(PickedImage {
                asset,
                handle,
                width,
                height,
            }),
            Err(err) => {
                eprintln!("Failed to decode {}: {err}", asset.path().display());
                None
            }
        }
    });

    futures_util::future::join_all(decodes)
        .await
        .into_iter()
        .flatten()
        .collect()
}

fn decode_full(path: &Path) -> Result<(image::Handle, u32, u32)> {
    let decoded = image_rs::open(path).map_err(|e| Error::Image(e.to_string()))?;
    let (width, height) = decoded.dimensions();
    let pixels = decoded.to_rgba8().into_vec();
    Ok((image::Handle::from_rgba(width, height, pixels), width, height))
}
