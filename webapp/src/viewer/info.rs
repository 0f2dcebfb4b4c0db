use std::collections::HashMap;

use dioxus::prelude::*;
use tracing::error;

use crate::{
    common::exif::{camera_line, taken_at},
    viewer::{
        ViewerState, dispatch,
        state::{RequestToken, ViewerEvent},
    },
};
use api::image::*;

#[derive(Clone, PartialEq, Props)]
pub struct InfoPanelProps {
    viewer_signal: Signal<ViewerState>,
    edits_signal: Signal<HashMap<ImageUuid, ImageInfo>>,
    uuid: ImageUuid,
    token: RequestToken,
    info: ImageInfo,
    exif: ImageExif,
}

#[component]
pub fn InfoPanel(props: InfoPanelProps) -> Element {
    let viewer_signal = props.viewer_signal;
    let edits_signal = props.edits_signal;
    let uuid = props.uuid;
    let token = props.token;
    let info = props.info;
    let exif = props.exif;

    let mut editing_signal = use_signal(|| false);
    let status_signal = use_signal(|| String::from(""));

    rsx! {
        div { class: "viewer-info",
            h2 { "{info.display_title()}" }
            p { "{info.display_description()}" }
            div {
                b { "{camera_line(&exif)}" }
            }
            div { "{taken_at(&exif)}" }

            if editing_signal() {
                form {
                    class: "viewer-info-edit",
                    onclick: move |event| event.stop_propagation(),
                    onsubmit: move |event| {
                        let uuid = uuid.clone();
                        async move {
                            let mut status_signal = status_signal;
                            let mut edits_signal = edits_signal;
                            let title = event
                                .values()
                                .get("title")
                                .map(|v| v.as_value())
                                .unwrap_or_default();
                            let description = event
                                .values()
                                .get("description")
                                .map(|v| v.as_value())
                                .unwrap_or_default();

                            let result = match update_image_info(&uuid, &title, &description).await {
                                Ok(info) => {
                                    edits_signal.with_mut(|edits| edits.insert(uuid.clone(), info.clone()));
                                    dispatch(viewer_signal, ViewerEvent::InfoLoaded(token, info));
                                    String::from("Info updated")
                                }
                                Err(err) => {
                                    error!("failed to update info for {uuid}: {err}");
                                    format!("Error updating info: {}", err.to_string())
                                }
                            };
                            status_signal.set(result)
                        }
                    },

                    label { "Title" }
                    input {
                        name: "title",
                        r#type: "text",
                        value: "{info.title.clone().unwrap_or_default()}",
                    }

                    label { "Description" }
                    textarea {
                        name: "description",
                        rows: "4",
                        value: "{info.display_description()}",
                    }

                    input { r#type: "submit", class: "btn", value: "Save" }
                    span { "{status_signal()}" }
                }
            } else {
                button {
                    class: "btn",
                    onclick: move |event| {
                        event.stop_propagation();
                        editing_signal.set(true);
                    },
                    "Edit"
                }
            }
        }
    }
}
