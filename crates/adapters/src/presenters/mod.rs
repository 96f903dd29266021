mod html;

use mesmur_application::{DiscoveryResult, GallerySection};
use mesmur_domain::{Carousel, CarouselView};

pub use html::{escape_html, render_carousel, render_page};

pub fn present_section_row(section: &GallerySection) -> String {
    format!(
        "{}\t{}\t{}",
        section.key,
        section.images.len(),
        section.title
    )
}

pub fn present_discovery(result: &DiscoveryResult) -> Vec<String> {
    let mut rows = Vec::with_capacity(result.total_images() + result.sections.len() + 1);
    rows.push(format!(
        "background\t{}",
        result
            .primary_background
            .as_ref()
            .map(|image| image.as_str())
            .unwrap_or("-")
    ));
    for section in &result.sections {
        rows.push(present_section_row(section));
        for image in &section.images {
            rows.push(format!("\t{image}"));
        }
    }
    rows
}

pub fn present_carousel_status(carousel: &Carousel) -> String {
    let view = carousel.view();
    match view {
        CarouselView::Empty { .. } => format!("{}: empty", carousel.title()),
        _ => format!(
            "{}: slide {}/{} ({:?}, {})",
            carousel.title(),
            carousel.current_index() + 1,
            carousel.len(),
            carousel.viewport_mode(),
            carousel
                .current_image()
                .map(|image| image.as_str())
                .unwrap_or("-")
        ),
    }
}

#[cfg(test)]
mod tests {
    use mesmur_domain::{ImageList, ImageRef};

    use super::*;

    #[test]
    fn discovery_rows_list_sections_and_images() {
        let result = DiscoveryResult {
            primary_background: None,
            sections: vec![GallerySection {
                key: "worlds".to_string(),
                title: "Worlds".to_string(),
                images: vec![ImageRef::from("/LevelImages/a.png")],
            }],
        };
        assert_eq!(
            present_discovery(&result),
            vec![
                "background\t-".to_string(),
                "worlds\t1\tWorlds".to_string(),
                "\t/LevelImages/a.png".to_string(),
            ]
        );
    }

    #[test]
    fn carousel_status_is_one_based() {
        let images: ImageList = vec![ImageRef::from("/a.png"), ImageRef::from("/b.png")].into();
        let mut carousel = Carousel::new(images, "Worlds").with_viewport_width(1024.0);
        carousel.advance();
        assert_eq!(
            present_carousel_status(&carousel),
            "Worlds: slide 2/2 (Wide, /b.png)"
        );
        assert_eq!(
            present_carousel_status(&Carousel::new(ImageList::empty(), "Heroes")),
            "Heroes: empty"
        );
    }
}
