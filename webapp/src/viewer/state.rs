use api::image::{ImageExif, ImageInfo, ImageUuid};

// stamped on every metadata fetch so that responses for an image the
// viewer has since moved away from can be recognized and dropped
pub type RequestToken = u64;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Closed,
    ShowingImage,
    ShowingImageWithInfo,
}

// the info and exif requests to issue after opening an image
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MetadataFetch {
    pub uuid: ImageUuid,
    pub token: RequestToken,
}

#[derive(Clone, Debug)]
pub enum ViewerEvent {
    Open(ImageUuid),
    ToggleInfo,
    Close,
    InfoLoaded(RequestToken, ImageInfo),
    ExifLoaded(RequestToken, ImageExif),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewerState {
    visibility: Visibility,
    selected: Option<ImageUuid>,
    info: ImageInfo,
    exif: ImageExif,
    token: RequestToken,
}

impl ViewerState {
    pub fn apply(&mut self, event: ViewerEvent) -> Option<MetadataFetch> {
        match event {
            ViewerEvent::Open(uuid) => {
                self.token = self.token.wrapping_add(1);
                self.visibility = Visibility::ShowingImage;
                self.selected = Some(uuid.clone());
                self.info = ImageInfo::default();
                self.exif = ImageExif::default();

                return Some(MetadataFetch {
                    uuid,
                    token: self.token,
                });
            }
            ViewerEvent::ToggleInfo => {
                self.visibility = match self.visibility {
                    Visibility::Closed => Visibility::Closed,
                    Visibility::ShowingImage => Visibility::ShowingImageWithInfo,
                    Visibility::ShowingImageWithInfo => Visibility::ShowingImage,
                };
            }
            ViewerEvent::Close => {
                // the token survives so anything still in flight stays stale
                *self = ViewerState {
                    token: self.token.wrapping_add(1),
                    ..ViewerState::default()
                };
            }
            ViewerEvent::InfoLoaded(token, info) => {
                if self.is_current(token) {
                    self.info = info;
                }
            }
            ViewerEvent::ExifLoaded(token, exif) => {
                if self.is_current(token) {
                    self.exif = exif;
                }
            }
        }

        None
    }

    fn is_current(&self, token: RequestToken) -> bool {
        token == self.token && self.selected.is_some()
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn shows_info(&self) -> bool {
        self.visibility == Visibility::ShowingImageWithInfo
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn info(&self) -> &ImageInfo {
        &self.info
    }

    pub fn exif(&self) -> &ImageExif {
        &self.exif
    }

    pub fn token(&self) -> RequestToken {
        self.token
    }
}
