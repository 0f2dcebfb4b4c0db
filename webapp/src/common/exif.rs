use std::fmt::Display;

use crate::common::local_time;
use api::image::ImageExif;

// placeholder for any field the camera did not record
pub const MISSING: &str = "??";

pub fn or_missing<T: Display>(value: Option<&T>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => String::from(MISSING),
    }
}

// sub-second exposures read as a fraction, exactly as a camera would show them
pub fn exposure_time(seconds: Option<f64>) -> String {
    match seconds {
        Some(t) if t > 0.0 && t < 1.0 && (1.0 / t).is_finite() => {
            format!("1/{}s", (1.0 / t).round())
        }
        Some(t) if t >= 1.0 && t.is_finite() => format!("{t}s"),
        _ => String::from(MISSING),
    }
}

pub fn exposure_bias(ev: Option<f64>) -> Option<String> {
    match ev {
        Some(ev) if ev != 0.0 => Some(format!("{ev:+} EV")),
        _ => None,
    }
}

// e.g. "FUJIFILM X-T4 + XF35mmF1.4 R | 1/250s f/5.6 ISO160 35mm"
pub fn camera_line(exif: &ImageExif) -> String {
    let mut line = format!(
        "{} {} + {} | {} f/{} ISO{} {}mm",
        or_missing(exif.make.as_ref()),
        or_missing(exif.model.as_ref()),
        or_missing(exif.lens_model.as_ref()),
        exposure_time(exif.exposure_time),
        or_missing(exif.f_number.as_ref()),
        or_missing(exif.iso_speed_ratings.as_ref()),
        or_missing(exif.focal_length_35mm.as_ref()),
    );

    if let Some(bias) = exposure_bias(exif.exposure_bias_value) {
        line.push(' ');
        line.push_str(&bias);
    }

    line
}

pub fn taken_at(exif: &ImageExif) -> String {
    match exif.date_time_original {
        Some(secs) => local_time(secs),
        None => String::from(MISSING),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fast_exposures_read_as_fractions() {
        assert_eq!(exposure_time(Some(0.004)), "1/250s");
        assert_eq!(exposure_time(Some(0.5)), "1/2s");
        assert_eq!(exposure_time(Some(1.0 / 60.0)), "1/60s");
    }

    #[test]
    fn long_exposures_read_literally() {
        assert_eq!(exposure_time(Some(2.0)), "2s");
        assert_eq!(exposure_time(Some(1.0)), "1s");
        assert_eq!(exposure_time(Some(2.5)), "2.5s");
    }

    #[test]
    fn unknown_exposure_is_missing() {
        assert_eq!(exposure_time(None), MISSING);
        assert_eq!(exposure_time(Some(0.0)), MISSING);
        assert_eq!(exposure_time(Some(-0.5)), MISSING);
        assert_eq!(exposure_time(Some(f64::NAN)), MISSING);
    }

    #[test]
    fn vanishingly_short_exposure_is_missing() {
        assert_eq!(exposure_time(Some(1e-310)), MISSING);
        assert_eq!(exposure_time(Some(f64::INFINITY)), MISSING);
    }

    #[test]
    fn full_camera_line() {
        let exif = ImageExif {
            make: Some(String::from("FUJIFILM")),
            model: Some(String::from("X-T4")),
            lens_model: Some(String::from("XF35mmF1.4 R")),
            exposure_time: Some(0.004),
            f_number: Some(5.6),
            iso_speed_ratings: Some(160),
            focal_length_35mm: Some(53),
            ..Default::default()
        };

        assert_eq!(
            camera_line(&exif),
            "FUJIFILM X-T4 + XF35mmF1.4 R | 1/250s f/5.6 ISO160 53mm"
        );
    }

    #[test]
    fn empty_camera_line_uses_placeholders() {
        assert_eq!(
            camera_line(&ImageExif::default()),
            "?? ?? + ?? | ?? f/?? ISO?? ??mm"
        );
    }

    #[test]
    fn nonzero_bias_is_appended() {
        let exif = ImageExif {
            exposure_bias_value: Some(-0.7),
            ..Default::default()
        };

        assert!(camera_line(&exif).ends_with("??mm -0.7 EV"));
        assert_eq!(exposure_bias(Some(0.3)), Some(String::from("+0.3 EV")));
        assert_eq!(exposure_bias(Some(0.0)), None);
    }

    #[test]
    fn missing_timestamp() {
        assert_eq!(taken_at(&ImageExif::default()), MISSING);
    }
}
