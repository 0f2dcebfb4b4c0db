pub mod dom;
pub mod exif;
pub mod style;

use chrono::{Local, TimeZone};

// shown in the page header
pub const GALLERY_OWNER: &str = "Merlyn";

// id of the hidden file input behind the upload button
pub const UPLOAD_INPUT_ID: &str = "imageUploadInput";

// how long transient status messages stay up, in milliseconds
pub const STATUS_TIMEOUT_MS: u32 = 3000;

pub fn local_time(secs: i64) -> String {
    let convert = move || {
        let dt = Local
            .timestamp_opt(secs, 0)
            .single()
            .ok_or_else(|| anyhow::Error::msg("ambiguous or out of range timestamp"))?;

        Result::<String, anyhow::Error>::Ok(dt.format("%Y-%m-%d %H:%M:%S").to_string())
    };
    match convert() {
        Ok(v) => v,
        Err(_) => String::from("error parsing timestamp"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_time_formats_date_and_time() {
        let formatted = local_time(1_700_000_000);

        // the exact value depends on the local timezone
        assert_eq!(formatted.len(), "2023-11-14 22:13:20".len());
        assert!(formatted.starts_with("2023-11-1"));
    }

    #[test]
    fn local_time_rejects_out_of_range() {
        assert_eq!(local_time(i64::MAX), "error parsing timestamp");
    }
}
