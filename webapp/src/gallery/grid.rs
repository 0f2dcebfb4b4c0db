use std::collections::HashMap;

use dioxus::prelude::*;

use crate::{
    common::style,
    gallery::card::ThumbnailCard,
    viewer::{ViewerState, open_viewer},
};
use api::image::*;

#[derive(Clone, Debug, Default, PartialEq)]
pub enum Listing {
    #[default]
    Loading,
    Loaded(Vec<ImageSummary>),
    Failed(String),
}

#[derive(Clone, Debug)]
pub enum GalleryEvent {
    // a retry of a failed listing
    Reload,
    Listed(Vec<ImageSummary>),
    ListFailed(String),
    // the server accepted an upload
    Uploaded(ImageSummary),
}

// GalleryState
//
// the grid is whatever the list endpoint returned, followed by anything
// uploaded during this session that the listing does not already have.
// nothing is ever removed or reordered once shown
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GalleryState {
    listing: Listing,
    uploaded: Vec<ImageSummary>,
}

impl GalleryState {
    pub fn apply(&mut self, event: GalleryEvent) {
        match event {
            GalleryEvent::Reload => {
                if matches!(self.listing, Listing::Failed(_)) {
                    self.listing = Listing::Loading;
                }
            }
            GalleryEvent::Listed(images) => self.listing = Listing::Loaded(images),
            GalleryEvent::ListFailed(err) => {
                if !matches!(self.listing, Listing::Loaded(_)) {
                    self.listing = Listing::Failed(err);
                }
            }
            GalleryEvent::Uploaded(summary) => {
                if !self.contains(&summary.uuid) {
                    self.uploaded.push(summary);
                }
            }
        }
    }

    pub fn listing(&self) -> &Listing {
        &self.listing
    }

    pub fn images(&self) -> impl Iterator<Item = &ImageSummary> {
        let listed: &[ImageSummary] = match &self.listing {
            Listing::Loaded(images) => images.as_slice(),
            _ => &[],
        };

        listed.iter().chain(
            self.uploaded
                .iter()
                .filter(move |upload| !listed.iter().any(|image| image.uuid == upload.uuid)),
        )
    }

    pub fn len(&self) -> usize {
        self.images().count()
    }

    fn contains(&self, uuid: &str) -> bool {
        self.images().any(|image| image.uuid == uuid)
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct ThumbnailGridProps {
    viewer_signal: Signal<ViewerState>,
    edits_signal: Signal<HashMap<ImageUuid, ImageInfo>>,
    images: Vec<ImageUuid>,
}

#[component]
pub fn ThumbnailGrid(props: ThumbnailGridProps) -> Element {
    let viewer_signal = props.viewer_signal;
    let edits_signal = props.edits_signal;

    rsx! {
        div {
            style { "{style::THUMBNAIL}" }
            div { class: "gallery",
                for uuid in props.images.iter() {
                    ThumbnailCard {
                        key: "{uuid}",
                        uuid: uuid.clone(),
                        edits_signal,
                        onselect: move |uuid: ImageUuid| open_viewer(viewer_signal, uuid),
                    }
                }
            }
        }
    }
}
