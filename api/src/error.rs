use thiserror::Error;

// the display text doubles as the message shown to the user
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Image already exists")]
    Duplicate,

    #[error("Upload failed with status {status}")]
    Rejected { status: u16, detail: String },

    #[error("{0} is not a supported image (jpg, jpeg, png, gif)")]
    Unsupported(String),

    #[error("Upload failed: {0}")]
    Request(#[from] gloo_net::Error),

    #[error("Upload failed: could not build form data: {0}")]
    Form(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_message() {
        assert_eq!(UploadError::Duplicate.to_string(), "Image already exists");
    }

    #[test]
    fn rejected_message_carries_status() {
        let err = UploadError::Rejected {
            status: 500,
            detail: String::from("Internal Server Error"),
        };

        assert_eq!(err.to_string(), "Upload failed with status 500");
    }

    #[test]
    fn unsupported_message_names_file() {
        let err = UploadError::Unsupported(String::from("notes.txt"));

        assert_eq!(
            err.to_string(),
            "notes.txt is not a supported image (jpg, jpeg, png, gif)"
        );
    }
}
