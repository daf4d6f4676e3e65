// SPDX-License-Identifier: MPL-2.0
use iced_lightbox::application::gallery::Driver;
use iced_lightbox::application::port::preload::NoPreload;
use iced_lightbox::application::port::{FullscreenError, FullscreenPort};
use iced_lightbox::error::{Error, PortfolioError};
use iced_lightbox::lightbox::{Controller, Event, FullscreenRequest};
use iced_lightbox::portfolio::Portfolio;
use image_rs::{Rgba, RgbaImage};
use std::fs;
use tempfile::tempdir;

struct NoFullscreen;

impl FullscreenPort for NoFullscreen {
    fn request(&mut self, _request: FullscreenRequest) -> Result<(), FullscreenError> {
        Err(FullscreenError::Unavailable)
    }
}

#[test]
fn scanned_project_drives_a_gallery() {
    let dir = tempdir().expect("failed to create temp dir");
    let project = dir.path().join("penthouse");
    fs::create_dir_all(&project).expect("failed to create project dir");
    for (name, color) in [("01-living.png", 10u8), ("02-bath.png", 20), ("03-terrace.png", 30)] {
        RgbaImage::from_pixel(2, 2, Rgba([color, color, color, 255]))
            .save(project.join(name))
            .expect("failed to write png");
    }

    let portfolio = Portfolio::scan(dir.path()).expect("scan should succeed");
    assert_eq!(portfolio.len(), 1);
    let images = portfolio.projects()[0].images.clone();

    let mut gallery = Driver::new(Controller::default(), NoFullscreen, NoPreload);
    gallery.reset(images);
    gallery.dispatch(Event::Previous);

    let current = gallery.snapshot().image.cloned().expect("an image is shown");
    assert!(current.ends_with("03-terrace.png"));

    let decoded = iced_lightbox::media::load_image(&current).expect("png should decode");
    assert_eq!((decoded.width, decoded.height), (2, 2));

    // Denied fullscreen leaves the mirror alone.
    gallery.dispatch(Event::ToggleFullscreen);
    assert!(!gallery.snapshot().is_fullscreen);
}

#[test]
fn nested_directories_below_projects_are_not_scanned() {
    let dir = tempdir().expect("failed to create temp dir");
    let nested = dir.path().join("office").join("archive");
    fs::create_dir_all(&nested).expect("failed to create nested dir");
    fs::write(nested.join("old.jpg"), b"").expect("failed to create file");

    match Portfolio::scan(dir.path()) {
        Err(Error::Portfolio(PortfolioError::NoImages(_))) => {}
        other => panic!("expected NoImages, got {other:?}"),
    }
}

#[test]
fn file_as_root_is_rejected() {
    let dir = tempdir().expect("failed to create temp dir");
    let file = dir.path().join("cover.jpg");
    fs::write(&file, b"").expect("failed to create file");

    match Portfolio::scan(&file) {
        Err(Error::Portfolio(PortfolioError::NotADirectory(_))) => {}
        other => panic!("expected NotADirectory, got {other:?}"),
    }
}
