use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

use crate::{API_ROOT, SUPPORTED_EXTENSIONS, error::UploadError, image_resource, resource_link};

// structs and types

pub type ImageUuid = String;

// the list and upload endpoints return whole database rows, but the
// gallery only ever needs the uuid
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageSummary {
    pub uuid: ImageUuid,
}

// user-supplied description of an image
//
// the server stores these separately from the image itself, so either
// field (or the whole record) may be missing
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageInfo {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl ImageInfo {
    pub fn display_title(&self) -> &str {
        match self.title.as_deref() {
            Some(title) if !title.is_empty() => title,
            _ => "-",
        }
    }

    pub fn display_description(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

// camera fields extracted by the server at upload time
//
// the names on the wire are the EXIF tag names, and any of them may be null
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageExif {
    #[serde(rename = "Make")]
    pub make: Option<String>,
    #[serde(rename = "Model")]
    pub model: Option<String>,
    #[serde(rename = "LensModel")]
    pub lens_model: Option<String>,
    #[serde(rename = "ExposureTime")]
    pub exposure_time: Option<f64>,
    #[serde(rename = "FNumber")]
    pub f_number: Option<f64>,
    #[serde(rename = "ISOSpeedRatings")]
    pub iso_speed_ratings: Option<i64>,
    #[serde(rename = "FocalLengthIn35mmFilm")]
    pub focal_length_35mm: Option<i64>,
    #[serde(rename = "ExposureBiasValue")]
    pub exposure_bias_value: Option<f64>,
    #[serde(rename = "Software")]
    pub software: Option<String>,
    // unix seconds
    #[serde(rename = "DateTimeOriginal")]
    pub date_time_original: Option<i64>,
}

// endpoints

pub async fn list_images() -> anyhow::Result<Vec<ImageSummary>> {
    let resp = Request::get(API_ROOT).send().await?;

    if resp.ok() {
        Ok(resp.json().await?)
    } else {
        Err(anyhow::Error::msg(resp.text().await?))
    }
}

// the server only has an info record once something was saved for the
// image, so a 404 here just means "no title or description yet"
pub fn missing_info(status: u16) -> Option<ImageInfo> {
    match status {
        404 => Some(ImageInfo::default()),
        _ => None,
    }
}

pub async fn get_image_info(uuid: &str) -> anyhow::Result<ImageInfo> {
    let resp = Request::get(&resource_link(uuid, "info")).send().await?;

    if let Some(info) = missing_info(resp.status()) {
        return Ok(info);
    }

    if resp.ok() {
        Ok(resp.json().await?)
    } else {
        Err(anyhow::Error::msg(resp.text().await?))
    }
}

image_resource!(GetImageExif, "exif", ImageExif);

// replace both title and description; the server takes them as query
// parameters rather than a body
pub async fn update_image_info(
    uuid: &str,
    title: &str,
    description: &str,
) -> anyhow::Result<ImageInfo> {
    let resp = Request::put(&resource_link(uuid, "info"))
        .query([("title", title), ("description", description)])
        .send()
        .await?;

    if resp.ok() {
        Ok(resp.json().await?)
    } else {
        Err(anyhow::Error::msg(resp.text().await?))
    }
}

pub fn is_supported_file(name: &str) -> bool {
    match name.rsplit_once('.') {
        Some((_, ext)) => SUPPORTED_EXTENSIONS
            .iter()
            .any(|supported| supported.eq_ignore_ascii_case(ext)),
        None => false,
    }
}

// value for the accept attribute of the file picker
pub fn accepted_file_types() -> String {
    SUPPORTED_EXTENSIONS
        .iter()
        .map(|ext| format!(".{ext}"))
        .collect::<Vec<_>>()
        .join(",")
}

// upload a new image as multipart form data under the "file" field
//
// files that the server would reject for their extension are refused
// before any request is made
pub async fn upload_image(file: &web_sys::File) -> Result<ImageSummary, UploadError> {
    let name = file.name();

    if !is_supported_file(&name) {
        return Err(UploadError::Unsupported(name));
    }

    let form = web_sys::FormData::new().map_err(|err| UploadError::Form(format!("{err:?}")))?;
    form.append_with_blob_and_filename("file", file, &name)
        .map_err(|err| UploadError::Form(format!("{err:?}")))?;

    let resp = Request::post(API_ROOT).body(form)?.send().await?;

    match classify_upload(resp.status()) {
        Ok(()) => Ok(resp.json().await?),
        Err(UploadError::Rejected { status, .. }) => Err(UploadError::Rejected {
            status,
            detail: resp.text().await.unwrap_or_default(),
        }),
        Err(err) => Err(err),
    }
}

// 409 means the server already holds an identical file; the detail of any
// other rejection is filled in from the response body by the caller
pub fn classify_upload(status: u16) -> Result<(), UploadError> {
    match status {
        409 => Err(UploadError::Duplicate),
        200..=299 => Ok(()),
        status => Err(UploadError::Rejected {
            status,
            detail: String::new(),
        }),
    }
}
