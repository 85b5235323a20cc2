// SPDX-License-Identifier: MPL-2.0
//! Photo library services: listing, thumbnails, and confirmed-image delivery.
//!
//! The library is a directory of image files. [`scanner`] produces the ordered
//! listing the picker grid renders, [`thumbnail`] loads bounded previews off
//! the UI thread through an LRU cache, and [`delivery`] decodes a confirmed
//! selection into full images for the host application.

pub mod asset;
pub mod delivery;
pub mod scanner;
pub mod thumbnail;

pub use asset::PhotoAsset;
pub use delivery::PickedImage;
pub use thumbnail::{Thumbnail, ThumbnailCache};
