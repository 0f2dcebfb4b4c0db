use constcat::concat;

pub const BASE: &str = r#"
* {
    margin: 0;
    padding: 0;
    box-sizing: border-box;
}

body {
    font-family: system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    color: #f1f1f1;
    background-color: #111111;
    line-height: 1.5;
}

a {
    color: #8ab4f8;
    text-decoration: none;
}

.btn {
    padding: 6px 12px;
    border: none;
    border-radius: 4px;
    background-color: #2196F3;
    color: white;
    font-size: 15px;
    cursor: pointer;
}

.btn:hover {
    background-color: #1976D2;
}

.not-found {
    padding: 32px;
}
"#;

pub const GALLERY: &str = r#"
.gallery-header {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 14px 16px;
    font-size: 17px;
}

.upload {
    display: flex;
    align-items: center;
    gap: 8px;
}

.upload-status {
    font-size: 14px;
    color: #bbbbbb;
}

.gallery-status {
    display: flex;
    align-items: center;
    justify-content: center;
    gap: 12px;
    padding: 16px;
}

.gallery {
    display: flex;
    flex-wrap: wrap;
    align-items: center;
    justify-content: center;
}
"#;

pub const THUMBNAIL: &str = r#"
.thumb-slot {
    display: inline-block;
    height: 10vw;
    min-height: 100px;
    padding: 0.5vw;
}

.thumb {
    position: relative;
    height: 100%;
    cursor: pointer;
    overflow: hidden;
}

.thumb-image {
    height: 100%;
    display: block;
}

.thumb-caption {
    position: absolute;
    inset: 0;
    display: flex;
    align-items: flex-end;
    padding: 6px;
    opacity: 0;
    background: linear-gradient(transparent 60%, rgba(0, 0, 0, 0.7));
    transition: opacity 0.2s;
}

.thumb:hover .thumb-caption {
    opacity: 1;
}
"#;

pub const VIEWER: &str = r#"
.viewer {
    position: fixed;
    top: 0;
    left: 0;
    width: 100vw;
    height: 100vh;
    z-index: 100;
    display: flex;
    align-items: center;
    justify-content: center;
    background-color: rgba(0, 0, 0, 0.92);
}

.viewer-image {
    max-width: 100%;
    max-height: 100%;
}

.viewer-info-toggle {
    position: absolute;
    top: 0;
    right: 0;
    z-index: 1000;
}

.viewer-info {
    position: absolute;
    left: 0;
    bottom: 0;
    width: 100%;
    padding: 16px;
    background-color: rgba(0, 0, 0, 0.6);
}

.viewer-info h2 {
    font-size: 20px;
}

.viewer-info-edit {
    display: grid;
    grid-template-columns: auto 1fr;
    gap: 8px;
    max-width: 600px;
    margin-top: 12px;
}

.viewer-info-edit input[type=text], .viewer-info-edit textarea {
    padding: 6px;
    font-size: 15px;
}
"#;

pub const STYLES: &str = concat!(BASE, GALLERY, THUMBNAIL, VIEWER);
