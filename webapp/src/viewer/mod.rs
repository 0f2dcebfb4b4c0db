use std::collections::HashMap;

use dioxus::prelude::*;
use tracing::debug;

use crate::common::style;
use api::{full_link, image::*};

mod info;
use info::InfoPanel;

pub mod state;
pub use state::ViewerState;
use state::{MetadataFetch, ViewerEvent};

pub fn dispatch(mut viewer_signal: Signal<ViewerState>, event: ViewerEvent) -> Option<MetadataFetch> {
    viewer_signal.with_mut(|viewer| viewer.apply(event))
}

// open the overlay on an image and fetch its info and exif side by side
//
// the two requests are independent, and failures leave the defaults in place
pub fn open_viewer(viewer_signal: Signal<ViewerState>, uuid: ImageUuid) {
    let Some(MetadataFetch { uuid, token }) = dispatch(viewer_signal, ViewerEvent::Open(uuid)) else {
        return;
    };

    debug!({ uuid = %uuid, token = token }, "opening viewer");

    let info_uuid = uuid.clone();
    spawn(async move {
        match get_image_info(&info_uuid).await {
            Ok(info) => {
                dispatch(viewer_signal, ViewerEvent::InfoLoaded(token, info));
            }
            Err(err) => debug!("no info for {info_uuid}: {err}"),
        }
    });

    spawn(async move {
        match get_image_exif(&uuid).await {
            Ok(exif) => {
                dispatch(viewer_signal, ViewerEvent::ExifLoaded(token, exif));
            }
            Err(err) => debug!("no exif for {uuid}: {err}"),
        }
    });
}

#[derive(Clone, PartialEq, Props)]
pub struct ViewerOverlayProps {
    viewer_signal: Signal<ViewerState>,
    edits_signal: Signal<HashMap<ImageUuid, ImageInfo>>,
}

// ViewerOverlay
//
// a click anywhere closes the overlay, apart from the info button and
// the edit form inside the info panel
#[component]
pub fn ViewerOverlay(props: ViewerOverlayProps) -> Element {
    let viewer_signal = props.viewer_signal;
    let edits_signal = props.edits_signal;

    let viewer = viewer_signal.read().clone();

    let uuid = match viewer.selected() {
        Some(uuid) => uuid.to_owned(),
        None => return rsx! {},
    };

    rsx! {
        div {
            style { "{style::VIEWER}" }
            div {
                class: "viewer",
                onclick: move |_| {
                    dispatch(viewer_signal, ViewerEvent::Close);
                },
                img { class: "viewer-image", src: full_link(&uuid) }
                if viewer.shows_info() {
                    InfoPanel {
                        viewer_signal,
                        edits_signal,
                        uuid: uuid.clone(),
                        token: viewer.token(),
                        info: viewer.info().clone(),
                        exif: viewer.exif().clone(),
                    }
                }
                button {
                    class: "btn viewer-info-toggle",
                    title: "Show image info",
                    onclick: move |event| {
                        event.stop_propagation();
                        dispatch(viewer_signal, ViewerEvent::ToggleInfo);
                    },
                    "i"
                }
            }
        }
    }
}
