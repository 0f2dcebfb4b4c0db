use dioxus::prelude::*;
use gloo_timers::callback::Timeout;
use tracing::{error, info};

use crate::common::{
    STATUS_TIMEOUT_MS, UPLOAD_INPUT_ID,
    dom::{alert, click, take_selected_file},
};
use api::{error::UploadError, image::*};

// what a finished upload turns into: a new grid entry, or an alert
#[derive(Clone, Debug, PartialEq)]
enum UploadOutcome {
    Added(ImageSummary),
    Alert(String),
}

fn upload_outcome(result: Result<ImageSummary, UploadError>) -> UploadOutcome {
    match result {
        Ok(summary) => UploadOutcome::Added(summary),
        Err(err) => {
            if let UploadError::Rejected { status, detail } = &err {
                error!({ status = status, detail = %detail }, "server rejected upload");
            }
            UploadOutcome::Alert(err.to_string())
        }
    }
}

// the status line next to the button
//
// each message gets a generation, so a timer set for an older message
// cannot wipe out a newer one
#[derive(Clone, Debug, Default, PartialEq)]
struct UploadStatus {
    message: String,
    generation: u64,
}

impl UploadStatus {
    fn show(&mut self, message: String) -> u64 {
        self.generation += 1;
        self.message = message;
        self.generation
    }

    fn expire(&mut self, generation: u64) {
        if self.generation == generation {
            self.message.clear();
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct UploadButtonProps {
    onuploaded: EventHandler<ImageSummary>,
}

// UploadButton
//
// the visible button forwards its click to a hidden file input, and picking
// a file there starts the upload.  every failure ends in an alert, and the
// grid only hears about uploads the server accepted
#[component]
pub fn UploadButton(props: UploadButtonProps) -> Element {
    let onuploaded = props.onuploaded;

    let status_signal = use_signal(UploadStatus::default);
    let status_message = status_signal.read().message.clone();

    rsx! {
        div { class: "upload",
            input {
                id: UPLOAD_INPUT_ID,
                r#type: "file",
                accept: accepted_file_types(),
                display: "none",
                onchange: move |_| async move {
                    let mut status_signal = status_signal;

                    let file = match take_selected_file(UPLOAD_INPUT_ID) {
                        Ok(Some(file)) => file,
                        Ok(None) => return,
                        Err(err) => {
                            error!("failed to read the selected file: {err}");
                            return;
                        }
                    };
                    let name = file.name();

                    status_signal.with_mut(|status| status.show(format!("Uploading {name}...")));

                    match upload_outcome(upload_image(&file).await) {
                        UploadOutcome::Added(summary) => {
                            info!({ uuid = %summary.uuid }, "uploaded {name}");
                            onuploaded.call(summary);

                            let generation = status_signal
                                .with_mut(|status| status.show(String::from("Uploaded")));
                            let task = Timeout::new(
                                STATUS_TIMEOUT_MS,
                                move || {
                                    status_signal.with_mut(|status| status.expire(generation));
                                },
                            );
                            task.forget();
                        }
                        UploadOutcome::Alert(message) => {
                            error!("upload of {name} failed: {message}");
                            status_signal.with_mut(|status| status.show(String::from("")));
                            alert(&message);
                        }
                    }
                },
            }
            span { class: "upload-status", "{status_message}" }
            button {
                class: "btn",
                title: "Upload an image",
                onclick: move |_| {
                    if let Err(err) = click(UPLOAD_INPUT_ID) {
                        error!("failed to open the file picker: {err}");
                    }
                },
                "Upload"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::grid::{GalleryEvent, GalleryState};

    fn apply_outcome(state: &mut GalleryState, outcome: &UploadOutcome) {
        if let UploadOutcome::Added(summary) = outcome {
            state.apply(GalleryEvent::Uploaded(summary.clone()));
        }
    }

    fn listed(uuids: &[&str]) -> GalleryState {
        let mut state = GalleryState::default();
        state.apply(GalleryEvent::Listed(
            uuids
                .iter()
                .map(|uuid| ImageSummary {
                    uuid: uuid.to_string(),
                })
                .collect(),
        ));
        state
    }

    #[test]
    fn duplicate_upload_alerts_and_leaves_grid_alone() {
        let mut state = listed(&["a", "b"]);

        let outcome = upload_outcome(Err(UploadError::Duplicate));
        apply_outcome(&mut state, &outcome);

        assert_eq!(outcome, UploadOutcome::Alert(String::from("Image already exists")));
        assert_eq!(state.len(), 2);
    }

    #[test]
    fn rejected_upload_alerts_with_status() {
        let mut state = listed(&["a"]);

        let outcome = upload_outcome(Err(UploadError::Rejected {
            status: 415,
            detail: String::from("{\"detail\": {\"error\": \"File has no extension\"}}"),
        }));
        apply_outcome(&mut state, &outcome);

        assert_eq!(
            outcome,
            UploadOutcome::Alert(String::from("Upload failed with status 415"))
        );
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn accepted_upload_adds_one_entry() {
        let mut state = listed(&["a"]);

        let outcome = upload_outcome(Ok(ImageSummary {
            uuid: String::from("c3"),
        }));
        apply_outcome(&mut state, &outcome);

        assert_eq!(state.len(), 2);
        assert_eq!(state.images().last().map(|image| image.uuid.as_str()), Some("c3"));
    }

    #[test]
    fn stale_timer_keeps_newer_message() {
        let mut status = UploadStatus::default();

        let first = status.show(String::from("Uploaded"));
        status.show(String::from("Uploading b.jpg..."));
        status.expire(first);

        assert_eq!(status.message, "Uploading b.jpg...");
    }

    #[test]
    fn current_timer_clears_message() {
        let mut status = UploadStatus::default();

        let generation = status.show(String::from("Uploaded"));
        status.expire(generation);

        assert_eq!(status.message, "");
    }
}
