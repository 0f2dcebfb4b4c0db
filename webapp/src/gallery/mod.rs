use std::collections::HashMap;

use dioxus::prelude::*;
use tracing::{debug, error};

use crate::{
    common::{GALLERY_OWNER, style},
    viewer::{ViewerOverlay, ViewerState},
};
use api::image::*;

pub mod card;

pub mod grid;
use grid::{GalleryEvent, GalleryState, Listing, ThumbnailGrid};

pub mod upload;
use upload::UploadButton;

#[component]
pub fn Gallery() -> Element {
    let mut gallery_signal = use_signal(GalleryState::default);
    let viewer_signal = use_signal(ViewerState::default);

    // info saved from the viewer, so captions pick up edits without a refetch
    let edits_signal = use_signal(HashMap::<ImageUuid, ImageInfo>::new);

    // set to re-run the listing after a failure
    let mut reload_signal = use_signal(|| ());

    let _listing = use_resource(move || async move {
        reload_signal();

        let event = match list_images().await {
            Ok(images) => {
                debug!({ count = images.len() }, "listed images");
                GalleryEvent::Listed(images)
            }
            Err(err) => {
                error!("failed to list images: {err}");
                GalleryEvent::ListFailed(err.to_string())
            }
        };

        gallery_signal.with_mut(|gallery| gallery.apply(event));
    });

    let listing = gallery_signal.read().listing().clone();
    let images: Vec<ImageUuid> = gallery_signal
        .read()
        .images()
        .map(|image| image.uuid.clone())
        .collect();

    rsx! {
        style { "{style::GALLERY}" }
        ViewerOverlay { viewer_signal, edits_signal }

        div { class: "gallery-header",
            span {
                "photographed by "
                b { "{GALLERY_OWNER}" }
            }
            UploadButton {
                onuploaded: move |summary: ImageSummary| {
                    gallery_signal.with_mut(|gallery| gallery.apply(GalleryEvent::Uploaded(summary)));
                },
            }
        }

        match listing {
            Listing::Loading => rsx! {
                div { class: "gallery-status",
                    span { "Loading images..." }
                }
            },
            Listing::Failed(err) => rsx! {
                div { class: "gallery-status",
                    span { "Could not load the gallery: {err}" }
                    button {
                        class: "btn",
                        onclick: move |_| {
                            gallery_signal.with_mut(|gallery| gallery.apply(GalleryEvent::Reload));
                            reload_signal.set(());
                        },
                        "Retry"
                    }
                }
            },
            Listing::Loaded(_) => rsx! {},
        }

        ThumbnailGrid { viewer_signal, edits_signal, images }
    }
}
