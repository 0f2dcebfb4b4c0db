use std::collections::HashMap;

use dioxus::prelude::*;
use tracing::debug;

use api::{image::*, thumbnail_link};

// an edit saved from the viewer wins over what the card fetched on mount.
// with neither, the caption stays blank; an image with no info record at
// all still fetches as empty info and reads "-"
fn caption_for(edited: Option<&ImageInfo>, fetched: Option<&ImageInfo>) -> String {
    match edited.or(fetched) {
        Some(info) => info.display_title().to_owned(),
        None => String::new(),
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct ThumbnailCardProps {
    uuid: ImageUuid,
    edits_signal: Signal<HashMap<ImageUuid, ImageInfo>>,
    onselect: EventHandler<ImageUuid>,
}

#[component]
pub fn ThumbnailCard(props: ThumbnailCardProps) -> Element {
    let uuid = props.uuid;
    let edits_signal = props.edits_signal;
    let onselect = props.onselect;

    let info_future = use_resource({
        let uuid = uuid.clone();
        move || {
            let uuid = uuid.clone();
            async move {
                match get_image_info(&uuid).await {
                    Ok(info) => Some(info),
                    Err(err) => {
                        debug!("no caption for {uuid}: {err}");
                        None
                    }
                }
            }
        }
    });

    let edited = edits_signal.read().get(&uuid).cloned();
    let caption = match &*info_future.read() {
        Some(fetched) => caption_for(edited.as_ref(), fetched.as_ref()),
        None => caption_for(edited.as_ref(), None),
    };

    let selected_uuid = uuid.clone();

    rsx! {
        div { class: "thumb-slot",
            div {
                class: "thumb",
                onclick: move |_| onselect.call(selected_uuid.clone()),
                img {
                    class: "thumb-image",
                    src: thumbnail_link(&uuid),
                    alt: "{caption}",
                    loading: "lazy",
                }
                div { class: "thumb-caption",
                    b { "{caption}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titled(title: &str) -> ImageInfo {
        ImageInfo {
            title: Some(title.to_owned()),
            description: None,
        }
    }

    #[test]
    fn untitled_image_is_captioned_with_a_dash() {
        let info = ImageInfo {
            title: None,
            description: Some(String::from("low tide")),
        };

        assert_eq!(caption_for(None, Some(&info)), "-");
    }

    #[test]
    fn image_without_info_record_is_captioned_with_a_dash() {
        let info = missing_info(404).unwrap();

        assert_eq!(caption_for(None, Some(&info)), "-");
    }

    #[test]
    fn titled_image_uses_its_title() {
        assert_eq!(caption_for(None, Some(&titled("Low tide"))), "Low tide");
    }

    #[test]
    fn saved_edit_replaces_fetched_title() {
        assert_eq!(
            caption_for(Some(&titled("High tide")), Some(&titled("Low tide"))),
            "High tide"
        );
        assert_eq!(caption_for(Some(&titled("High tide")), None), "High tide");
    }

    #[test]
    fn unreachable_info_leaves_caption_blank() {
        assert_eq!(caption_for(None, None), "");
    }
}
