use constcat::concat;

pub const BASE: &str = r#"
* {
    margin: 0;
    padding: 0;
    box-sizing: border-box;
}

body {
    font-family: system-ui, sans-serif;
    background-color: #1e1e1e;
    color: #eee;
}

.media-list {
    padding: 10px;
}
"#;

pub const MEDIA_GRID: &str = r#"
.media-grid {
    display: grid;
    gap: 5px;
    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
}

.media-tile {
    height: 300px;
    border: 5px solid #ffffff;
    display: flex;
    flex-direction: column;
    cursor: pointer;
}

.media-tile img,
.media-tile video {
    width: 100%;
    height: 100%;
    object-fit: contain;
}
"#;

pub const MODAL: &str = r#"
.modal {
    position: fixed;
    z-index: 1;
    left: 0;
    top: 0;
    width: 100%;
    height: 100%;
    align-items: center;
    justify-content: center;
    background-color: rgba(0,0,0,0.8);
}

.modal-content {
    background-color: #fefefe;
    margin: 5% auto;
    padding: 20px;
    border: 1px solid #888;
    width: fit-content;
}

.close {
    color: #aaa;
    float: right;
    font-size: 28px;
    font-weight: bold;
}

.close:hover,
.close:focus {
    color: black;
    text-decoration: none;
    cursor: pointer;
}

.modal-header {
    padding: 2px 16px;
}

.modal-body {
    padding: 10px 0px 10px 0px;
    height: fit-content;
    width: fit-content;
}

.modal-media {
    max-width: 80vw;
    max-height: 80vh;
    object-fit: contain;
}

video.modal-media:fullscreen {
    object-fit: contain;
}
"#;

pub const GALLERY_STYLES: &str = concat!(BASE, MEDIA_GRID, MODAL);
