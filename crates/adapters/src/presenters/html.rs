use std::fmt::Write;

use mesmur_application::{GalleryBlock, SitePage};
use mesmur_domain::{CarouselView, SlideAction, SlideView, SlotPosition};

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn position_class(position: SlotPosition) -> &'static str {
    match position {
        SlotPosition::Left => "slide--left",
        SlotPosition::Center => "slide--center",
        SlotPosition::Right => "slide--right",
    }
}

fn action_name(action: SlideAction) -> &'static str {
    match action {
        SlideAction::Retreat => "retreat",
        SlideAction::Advance => "advance",
    }
}

fn render_image(out: &mut String, slide: &SlideView) {
    let _ = write!(
        out,
        r#"<img src="{}" alt="{}" loading="lazy">"#,
        escape_html(slide.image.as_str()),
        escape_html(&slide.alt)
    );
}

fn render_slide_button(out: &mut String, slide: &SlideView) {
    let _ = write!(
        out,
        r#"<button type="button" class="slide {}" aria-label="{}" data-index="{}""#,
        position_class(slide.position),
        escape_html(&slide.label),
        slide.index
    );
    match slide.action {
        Some(action) => {
            let _ = write!(out, r#" data-action="{}">"#, action_name(action));
        }
        None => out.push_str(r#" aria-current="true" disabled>"#),
    }
    render_image(out, slide);
    out.push_str("</button>");
}

/// Renders one carousel as an HTML fragment. The container is focusable so
/// arrow keys can be scoped to it.
pub fn render_carousel(view: &CarouselView, title: &str) -> String {
    let mut out = String::new();
    let title = escape_html(title);
    match view {
        CarouselView::Empty { message } => {
            let _ = write!(
                out,
                r#"<div class="carousel carousel--empty" role="region" aria-label="{title}"><p>{}</p></div>"#,
                escape_html(message)
            );
        }
        CarouselView::Single { slide } => {
            let _ = write!(
                out,
                r#"<div class="carousel carousel--single" role="region" aria-label="{title}" tabindex="0"><figure class="slide slide--center" aria-label="{}">"#,
                escape_html(&slide.label)
            );
            render_image(&mut out, slide);
            out.push_str("</figure></div>");
        }
        CarouselView::Gallery {
            mode,
            layout,
            slides,
            indicators,
            hint,
        } => {
            let mode = if mode.is_narrow() { "narrow" } else { "wide" };
            let _ = write!(
                out,
                r#"<div class="carousel carousel--{mode}" role="region" aria-roledescription="carousel" aria-label="{title}" tabindex="0" data-layout="{layout}">"#
            );
            out.push_str(r#"<div class="carousel__track">"#);
            for slide in slides {
                render_slide_button(&mut out, slide);
            }
            out.push_str("</div>");
            out.push_str(
                r#"<button type="button" class="carousel__prev" aria-label="Previous slide" data-action="retreat">&#8249;</button>"#,
            );
            out.push_str(
                r#"<button type="button" class="carousel__next" aria-label="Next slide" data-action="advance">&#8250;</button>"#,
            );
            out.push_str(r#"<div class="carousel__pagination">"#);
            for indicator in indicators {
                let (class, current) = if indicator.active {
                    ("dot dot--active", r#" aria-current="true""#)
                } else {
                    ("dot", "")
                };
                let _ = write!(
                    out,
                    r#"<button type="button" class="{class}" aria-label="{}" data-index="{}"{current}></button>"#,
                    escape_html(&indicator.label),
                    indicator.index
                );
            }
            out.push_str("</div>");
            if let Some(hint) = hint {
                let _ = write!(out, r#"<span class="carousel__hint">{}</span>"#, escape_html(hint));
            }
            out.push_str("</div>");
        }
    }
    out
}

fn render_gallery_section(out: &mut String, gallery: &GalleryBlock) {
    let _ = write!(
        out,
        r#"<section id="{}" class="section"><div class="copy"><p class="small-meta">{}</p><h2 class="section-title">{}</h2><p class="body-text">{}</p></div>"#,
        escape_html(&gallery.key),
        escape_html(&gallery.eyebrow),
        escape_html(&gallery.heading),
        escape_html(&gallery.body)
    );
    out.push_str(&render_carousel(
        &gallery.carousel.view(),
        gallery.carousel.title(),
    ));
    out.push_str("</section>\n");
}

pub fn render_page(page: &SitePage) -> String {
    let mut out = String::new();
    let brand = escape_html(page.brand);
    let _ = writeln!(
        out,
        r#"<!DOCTYPE html><html lang="en"><head><meta charset="utf-8"><meta name="viewport" content="width=device-width, initial-scale=1"><title>{brand}</title></head><body>"#
    );

    let _ = write!(out, r#"<nav class="site-nav"><div class="brand">{brand}</div>"#);
    for item in page.nav {
        let _ = write!(
            out,
            r##"<a href="#{}" class="nav-link" aria-label="Jump to {}">{}</a>"##,
            item.id,
            escape_html(item.label),
            escape_html(item.label)
        );
    }
    out.push_str(r#"<button type="button" class="nav-link" aria-label="Try the demo" data-action="open-dialog">Try the demo</button></nav>"#);
    out.push('\n');

    out.push_str(r#"<header id="home" class="section hero">"#);
    match &page.hero.background {
        Some(background) => {
            let _ = write!(
                out,
                r#"<img class="hero__background" src="{}" alt="Hero background">"#,
                escape_html(background.as_str())
            );
        }
        None => out.push_str(r#"<div class="hero__background hero__background--gradient"></div>"#),
    }
    let _ = writeln!(
        out,
        r#"<h1 class="hero-title">{}</h1><p class="body-text">{}</p></header>"#,
        escape_html(page.hero.headline),
        escape_html(page.hero.tagline)
    );

    out.push_str("<main>\n");
    for gallery in &page.galleries {
        render_gallery_section(&mut out, gallery);
    }

    out.push_str(r#"<section id="gameplay" class="section"><p class="small-meta">Gameplay</p><h2 class="section-title">How It Plays</h2><div class="features">"#);
    for feature in page.features {
        let _ = write!(
            out,
            r#"<div class="feature"><h3>{}</h3><p>{}</p></div>"#,
            escape_html(feature.title),
            escape_html(feature.body)
        );
    }
    out.push_str("</div></section>\n</main>\n");

    let hidden = if page.dialog.is_open() { "" } else { " hidden" };
    let _ = writeln!(
        out,
        r#"<div class="dialog" role="dialog" aria-modal="true"{hidden}><button type="button" aria-label="Close modal" data-action="close-dialog">&#10005;</button><p>{}</p></div>"#,
        escape_html(page.dialog.message())
    );
    out.push_str("</body></html>\n");
    out
}

#[cfg(test)]
mod tests {
    use mesmur_application::{DiscoveryResult, GallerySection};
    use mesmur_domain::{default_targets, Carousel, ImageList, ImageRef};

    use super::*;

    fn carousel(len: usize, width: f32) -> Carousel {
        let images: ImageList = (0..len)
            .map(|index| ImageRef::new(format!("/HeroImages/{index}.png")))
            .collect();
        Carousel::new(images, "Heroes and Items").with_viewport_width(width)
    }

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn empty_carousel_renders_placeholder_without_controls() {
        let html = render_carousel(&carousel(0, 1024.0).view(), "Worlds");
        assert!(html.contains("Drop images into the right folders to see the gallery."));
        assert!(!html.contains("carousel__pagination"));
        assert!(!html.contains("<button"));
    }

    #[test]
    fn single_slide_has_no_buttons() {
        let html = render_carousel(&carousel(1, 400.0).view(), "Heroes and Items");
        assert!(html.contains(r#"src="/HeroImages/0.png""#));
        assert!(html.contains(r#"aria-label="Heroes and Items slide 1""#));
        assert!(!html.contains("<button"));
    }

    #[test]
    fn gallery_renders_one_indicator_per_slide() {
        let mut carousel = carousel(4, 1280.0);
        carousel.jump_to(2);
        let html = render_carousel(&carousel.view(), carousel.title());

        assert_eq!(html.matches(r#"class="dot"#).count(), 4);
        assert_eq!(html.matches(r#"class="dot dot--active""#).count(), 1);
        assert!(html.contains(r#"aria-label="Go to slide 3" data-index="2" aria-current="true""#));
        assert!(html.contains(r#"class="slide slide--left" aria-label="Heroes and Items slide 2""#));
        assert!(html.contains(r#"data-action="retreat""#));
        assert!(html.contains("Click sides to navigate"));
        assert!(html.contains(r#"data-layout="peek""#));
    }

    #[test]
    fn narrow_gallery_shows_only_current_slide() {
        let html = render_carousel(&carousel(3, 400.0).view(), "Heroes and Items");
        assert_eq!(html.matches("<img").count(), 1);
        assert!(html.contains("carousel--narrow"));
        assert!(!html.contains("carousel__hint"));
    }

    #[test]
    fn page_contains_sections_features_and_hidden_dialog() {
        let discovery = DiscoveryResult {
            primary_background: Some(ImageRef::from("/mainimage.png")),
            sections: vec![GallerySection {
                key: "heroes".to_string(),
                title: "Heroes and Items".to_string(),
                images: vec![ImageRef::from("/HeroImages/a.png"), ImageRef::from("/HeroImages/b.png")],
            }],
        };
        let mut page = SitePage::compose(discovery, &default_targets(), 1024.0);
        let html = render_page(&page);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<section id="heroes""#));
        assert!(html.contains(r#"<section id="worlds""#));
        assert!(html.contains(r#"src="/mainimage.png""#));
        assert!(html.contains("Tactical Battlemaps"));
        assert!(html.contains("Risk &amp; Reward"));
        assert!(html.contains(r#"aria-modal="true" hidden>"#));

        page.dialog.open();
        assert!(render_page(&page).contains(r#"aria-modal="true"><button"#));
    }
}
