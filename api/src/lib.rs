pub mod error;
pub mod image;

// every endpoint hangs off of this path on the serving host
pub const API_ROOT: &str = "/api/image";

// extensions accepted by the upload endpoint, which answers 415 for anything else
pub const SUPPORTED_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "gif"];

pub fn full_link(uuid: &str) -> String {
    format!("{API_ROOT}/{uuid}")
}

pub fn thumbnail_link(uuid: &str) -> String {
    format!("{API_ROOT}/{uuid}?thumbnail=true")
}

pub fn resource_link(uuid: &str, resource: &str) -> String {
    format!("{API_ROOT}/{uuid}/{resource}")
}

// per-image json resources, i.e. GET /api/image/{uuid}/{resource}
//
// anything other than a 2xx is turned into an error carrying the response body
#[macro_export]
macro_rules! image_resource {
    ($name:ident, $resource:literal, $resp:ty) => {
        paste::paste! {
            pub async fn [<$name:snake>](uuid: &str) -> anyhow::Result<$resp> {
                let resp = gloo_net::http::Request::get(&$crate::resource_link(uuid, $resource))
                    .send()
                    .await?;

                if resp.ok() {
                    Ok(resp.json().await?)
                } else {
                    Err(anyhow::Error::msg(resp.text().await?))
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn links_follow_api_layout() {
        let uuid = "2b1f4c9e-7f43-4c59-9a8e-0a3b5d2c1e77";

        assert_eq!(full_link(uuid), format!("/api/image/{uuid}"));
        assert_eq!(
            thumbnail_link(uuid),
            format!("/api/image/{uuid}?thumbnail=true")
        );
        assert_eq!(resource_link(uuid, "exif"), format!("/api/image/{uuid}/exif"));
    }
}
