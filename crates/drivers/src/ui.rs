use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::time::Duration;

use font8x8::UnicodeFonts;
use mesmur_adapters::present_carousel_status;
use mesmur_application::{
    ApplicationError, ComingSoonDialog, ComposePageCommand, HostEnvironment, HostEvent,
    ListenerId, ListenerKind, MountedCarousel, SiteService,
};
use mesmur_domain::{
    CarouselView, ImageRef, NavKey, SlideAction, SlotPosition, ViewportMode, SWIPE_THRESHOLD,
};
use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};
use tracing::{debug, info, warn};

const MIN_WINDOW_WIDTH: usize = 320;
const MAX_WINDOW_WIDTH: usize = 7680;
const WINDOW_HEIGHT: usize = 760;
const CANVAS_MARGIN: usize = 24;
const HEADER_TOP: usize = 16;
const HEADER_HEIGHT: usize = 44;
const WORKAREA_TOP: usize = 76;
const PANEL_GAP: usize = 18;
const STAGE_INSET: usize = 12;
const PAGINATION_HEIGHT: usize = 30;
const CONTROL_SIZE: usize = 28;
const DOT_WIDTH: usize = 18;
const DOT_HEIGHT: usize = 8;
const DOT_GAP: usize = 8;
const SIDE_GAP: usize = 16;
const MAX_CANVAS_EDGE: u32 = 640;

const BACKGROUND_TOP: u32 = 0x0C1025;
const BACKGROUND_BOTTOM: u32 = 0x0B1430;
const PANEL_FILL: u32 = 0x151B36;
const PANEL_BORDER: u32 = 0x2C3358;
const STAGE_FILL: u32 = 0x101010;
const AURORA: u32 = 0x7FE0D0;
const DOT_IDLE: u32 = 0x3A3F55;
const TEXT: u32 = 0xE8EAF6;
const MUTED_TEXT: u32 = 0x9AA0C0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Rect {
    left: usize,
    top: usize,
    width: usize,
    height: usize,
}

impl Rect {
    fn right(&self) -> usize {
        self.left + self.width
    }

    fn bottom(&self) -> usize {
        self.top + self.height
    }

    fn contains(&self, x: usize, y: usize) -> bool {
        x >= self.left && x < self.right() && y >= self.top && y < self.bottom()
    }

    fn inset(&self, amount: usize) -> Rect {
        Rect {
            left: self.left + amount,
            top: self.top + amount,
            width: self.width.saturating_sub(amount * 2),
            height: self.height.saturating_sub(amount * 2),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HitTarget {
    Slide {
        index: usize,
        action: Option<SlideAction>,
    },
    Indicator(usize),
    Control(SlideAction),
}

#[derive(Debug, Clone, Copy)]
struct Press {
    panel: usize,
    start_x: f32,
}

/// Listener bookkeeping for the preview window. Keyboard delivery is scoped by
/// the carousels themselves, so the host only has to track registrations.
struct WindowHost {
    width: Cell<f32>,
    next_id: Cell<u64>,
    listeners: RefCell<BTreeMap<ListenerId, (String, ListenerKind)>>,
}

impl WindowHost {
    fn new(width: f32) -> Self {
        Self {
            width: Cell::new(width),
            next_id: Cell::new(1),
            listeners: RefCell::new(BTreeMap::new()),
        }
    }

    fn set_width(&self, width: f32) {
        self.width.set(width);
    }

    fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl HostEnvironment for WindowHost {
    fn viewport_width(&self) -> f32 {
        self.width.get()
    }

    fn attach(&self, owner: &str, kind: ListenerKind) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        debug!(owner, ?kind, id = id.0, "listener attached");
        self.listeners
            .borrow_mut()
            .insert(id, (owner.to_string(), kind));
        id
    }

    fn detach(&self, id: ListenerId) {
        if let Some((owner, kind)) = self.listeners.borrow_mut().remove(&id) {
            debug!(owner, ?kind, id = id.0, "listener detached");
        }
    }
}

#[derive(Debug, Clone)]
struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
}

struct CanvasCache {
    root: PathBuf,
    entries: HashMap<ImageRef, Option<Canvas>>,
}

impl CanvasCache {
    fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            entries: HashMap::new(),
        }
    }

    /// Failed loads are remembered so a broken file is reported once.
    fn get(&mut self, image: &ImageRef) -> Option<&Canvas> {
        if !self.entries.contains_key(image) {
            let loaded = match load_canvas(&resolve_public_path(&self.root, image)) {
                Ok(canvas) => Some(canvas),
                Err(error) => {
                    warn!(image = %image, %error, "image could not be displayed");
                    None
                }
            };
            self.entries.insert(image.clone(), loaded);
        }
        self.entries.get(image).and_then(Option::as_ref)
    }
}

pub fn launch_window(service: &SiteService, root: &Path, initial_width: f32) -> Result<(), String> {
    let page = service
        .compose_page(ComposePageCommand {
            root: root.to_path_buf(),
            viewport_width: initial_width,
        })
        .map_err(|error| format!("failed to compose page: {error}"))?;

    let mut width = (initial_width.round() as usize).clamp(MIN_WINDOW_WIDTH, MAX_WINDOW_WIDTH);
    let mut height = WINDOW_HEIGHT;
    let mut window = Window::new(
        page.brand,
        width,
        height,
        WindowOptions {
            resize: true,
            ..WindowOptions::default()
        },
    )
    .map_err(|error| format!("failed to start UI window: {error}"))?;
    window.limit_update_rate(Some(Duration::from_micros(16_000)));

    let host = WindowHost::new(width as f32);
    let mut dialog: ComingSoonDialog = page.dialog;
    let mut galleries: Vec<MountedCarousel<'_>> = page
        .galleries
        .iter()
        .map(|gallery| MountedCarousel::mount(&host, gallery.carousel.clone()))
        .collect();
    let mut focused = 0;
    if let Some(first) = galleries.first_mut() {
        first.dispatch(HostEvent::Focus);
    }

    let mut cache = CanvasCache::new(root);
    let mut buffer = vec![BACKGROUND_TOP; width * height];
    let mut press: Option<Press> = None;
    let mut was_mouse_down = false;
    info!(
        galleries = galleries.len(),
        listeners = host.listener_count(),
        "preview window opened"
    );

    while window.is_open() {
        let (new_width, new_height) = window.get_size();
        let (new_width, new_height) = (new_width.max(1), new_height.max(1));
        if new_width != width || new_height != height {
            width = new_width;
            height = new_height;
            buffer = vec![BACKGROUND_TOP; width * height];
            host.set_width(width as f32);
            for gallery in &mut galleries {
                gallery.dispatch(HostEvent::Resize {
                    width: width as f32,
                });
            }
        }

        if window.is_key_pressed(Key::Escape, KeyRepeat::No) && !dialog.handle_escape() {
            break;
        }
        if window.is_key_pressed(Key::D, KeyRepeat::No) {
            if dialog.is_open() {
                dialog.close();
            } else {
                dialog.open();
            }
        }

        let mouse_down = window.get_mouse_down(MouseButton::Left);
        if !dialog.is_open() && window.is_active() {
            if window.is_key_pressed(Key::Tab, KeyRepeat::No) && !galleries.is_empty() {
                let next = (focused + 1) % galleries.len();
                move_focus(&mut galleries, &mut focused, next);
            }
            for (key, nav) in [(Key::Left, NavKey::Left), (Key::Right, NavKey::Right)] {
                if window.is_key_pressed(key, KeyRepeat::Yes) {
                    for gallery in &mut galleries {
                        gallery.dispatch(HostEvent::KeyDown(nav));
                    }
                }
            }

            let panels = panel_rects(width, height, galleries.len());
            if let Some((mouse_x, mouse_y)) = window.get_mouse_pos(MouseMode::Clamp) {
                let x = mouse_x.max(0.0) as usize;
                let y = mouse_y.max(0.0) as usize;
                if mouse_down && !was_mouse_down {
                    if let Some(panel) = panels.iter().position(|rect| rect.contains(x, y)) {
                        galleries[panel].dispatch(HostEvent::PointerStart { x: mouse_x });
                        press = Some(Press {
                            panel,
                            start_x: mouse_x,
                        });
                    }
                } else if !mouse_down && was_mouse_down {
                    if let Some(released) = press.take() {
                        handle_release(&mut galleries, &mut focused, &panels, released, mouse_x, (x, y));
                    }
                }
            }
        }
        was_mouse_down = mouse_down;

        draw_background(&mut buffer, width, height);
        draw_header(&mut buffer, width, page.brand);
        let panels = panel_rects(width, height, galleries.len());
        for (index, (gallery, panel)) in galleries.iter().zip(panels.iter()).enumerate() {
            draw_gallery(
                &mut buffer,
                width,
                gallery.carousel().title(),
                &gallery.view(),
                *panel,
                index == focused,
                &mut cache,
            );
        }
        if dialog.is_open() {
            draw_dialog(&mut buffer, width, height, &dialog);
        }

        window.set_title(&build_window_title(page.brand, &galleries, focused));
        window
            .update_with_buffer(&buffer, width, height)
            .map_err(|error| format!("failed to update UI window: {error}"))?;
    }

    drop(galleries);
    info!(listeners = host.listener_count(), "preview window closed");
    Ok(())
}

fn move_focus(galleries: &mut [MountedCarousel<'_>], focused: &mut usize, next: usize) {
    if *focused == next || next >= galleries.len() {
        return;
    }
    if let Some(current) = galleries.get_mut(*focused) {
        current.dispatch(HostEvent::Blur);
    }
    galleries[next].dispatch(HostEvent::Focus);
    *focused = next;
}

/// A release either finishes a swipe or, if the pointer barely moved, acts as a click.
/// Either way the pressed gallery takes focus.
fn handle_release(
    galleries: &mut [MountedCarousel<'_>],
    focused: &mut usize,
    panels: &[Rect],
    press: Press,
    end_x: f32,
    (x, y): (usize, usize),
) {
    if press.panel >= galleries.len() {
        return;
    }
    move_focus(galleries, focused, press.panel);
    if galleries[press.panel].dispatch(HostEvent::PointerEnd { x: end_x }) {
        return;
    }
    if (end_x - press.start_x).abs() > SWIPE_THRESHOLD {
        return;
    }
    let Some(panel) = panels.get(press.panel) else {
        return;
    };

    let gallery = &mut galleries[press.panel];
    let boxes = hit_boxes(&gallery.view(), *panel);
    let event = match hit_test(&boxes, x, y) {
        Some(HitTarget::Slide {
            action: Some(action),
            ..
        })
        | Some(HitTarget::Control(action)) => HostEvent::ActivateSlide(action),
        Some(HitTarget::Indicator(index)) => HostEvent::SelectIndicator(index),
        Some(HitTarget::Slide { action: None, .. }) | None => return,
    };
    gallery.dispatch(event);
}

fn panel_rects(width: usize, height: usize, count: usize) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    let available = height
        .saturating_sub(CANVAS_MARGIN)
        .saturating_sub(WORKAREA_TOP);
    let panel_height = available.saturating_sub(PANEL_GAP * (count - 1)) / count;
    let panel_width = width.saturating_sub(CANVAS_MARGIN * 2);
    (0..count)
        .map(|index| Rect {
            left: CANVAS_MARGIN,
            top: WORKAREA_TOP + index * (panel_height + PANEL_GAP),
            width: panel_width,
            height: panel_height,
        })
        .collect()
}

fn stage_rect(panel: Rect) -> Rect {
    let inner = panel.inset(STAGE_INSET);
    Rect {
        height: inner.height.saturating_sub(PAGINATION_HEIGHT),
        ..inner
    }
}

fn slide_rect(view: &CarouselView, position: SlotPosition, stage: Rect) -> Rect {
    let peek = matches!(
        view,
        CarouselView::Gallery {
            mode: ViewportMode::Wide,
            ..
        }
    );
    if !peek {
        return stage;
    }

    let center_width = stage.width * 2 / 5;
    let side_width = stage.width / 4;
    let center_left = stage.left + (stage.width - center_width) / 2;
    let side_height = stage.height * 4 / 5;
    let side_top = stage.top + (stage.height - side_height) / 2;
    match position {
        SlotPosition::Center => Rect {
            left: center_left,
            top: stage.top,
            width: center_width,
            height: stage.height,
        },
        SlotPosition::Left => Rect {
            left: center_left.saturating_sub(SIDE_GAP + side_width),
            top: side_top,
            width: side_width,
            height: side_height,
        },
        SlotPosition::Right => Rect {
            left: center_left + center_width + SIDE_GAP,
            top: side_top,
            width: side_width,
            height: side_height,
        },
    }
}

/// Interactive regions of one gallery panel, topmost first.
fn hit_boxes(view: &CarouselView, panel: Rect) -> Vec<(Rect, HitTarget)> {
    let stage = stage_rect(panel);
    let mut boxes = Vec::new();

    if let CarouselView::Gallery { indicators, .. } = view {
        let control_top = (stage.top + stage.height / 2).saturating_sub(CONTROL_SIZE / 2);
        boxes.push((
            Rect {
                left: stage.left + 4,
                top: control_top,
                width: CONTROL_SIZE,
                height: CONTROL_SIZE,
            },
            HitTarget::Control(SlideAction::Retreat),
        ));
        boxes.push((
            Rect {
                left: stage.right().saturating_sub(CONTROL_SIZE + 4),
                top: control_top,
                width: CONTROL_SIZE,
                height: CONTROL_SIZE,
            },
            HitTarget::Control(SlideAction::Advance),
        ));

        let count = indicators.len();
        let row_width = count * DOT_WIDTH + count.saturating_sub(1) * DOT_GAP;
        let row_left = panel.left + panel.width.saturating_sub(row_width) / 2;
        let dot_top = stage.bottom() + (PAGINATION_HEIGHT - DOT_HEIGHT) / 2;
        for indicator in indicators {
            boxes.push((
                Rect {
                    left: row_left + indicator.index * (DOT_WIDTH + DOT_GAP),
                    top: dot_top,
                    width: DOT_WIDTH,
                    height: DOT_HEIGHT,
                },
                HitTarget::Indicator(indicator.index),
            ));
        }
    }

    for slide in view.slides() {
        boxes.push((
            slide_rect(view, slide.position, stage),
            HitTarget::Slide {
                index: slide.index,
                action: slide.action,
            },
        ));
    }
    boxes
}

fn hit_test(boxes: &[(Rect, HitTarget)], x: usize, y: usize) -> Option<HitTarget> {
    boxes
        .iter()
        .find(|(rect, _)| rect.contains(x, y))
        .map(|(_, target)| *target)
}

fn resolve_public_path(root: &Path, image: &ImageRef) -> PathBuf {
    image
        .as_str()
        .split('/')
        .filter(|segment| !segment.is_empty())
        .fold(root.to_path_buf(), |path, segment| path.join(segment))
}

fn load_canvas(path: &Path) -> Result<Canvas, ApplicationError> {
    let decoded = image::ImageReader::open(path)
        .map_err(|error| ApplicationError::Io(format!("{}: {error}", path.display())))?
        .with_guessed_format()
        .map_err(|error| ApplicationError::Io(format!("{}: {error}", path.display())))?
        .decode()
        .map_err(|error| ApplicationError::Decode(format!("{}: {error}", path.display())))?;

    let decoded = if decoded.width() > MAX_CANVAS_EDGE || decoded.height() > MAX_CANVAS_EDGE {
        decoded.thumbnail(MAX_CANVAS_EDGE, MAX_CANVAS_EDGE)
    } else {
        decoded
    };
    let source = decoded.to_rgb8();
    let width = source.width() as usize;
    let height = source.height() as usize;
    if width == 0 || height == 0 {
        return Err(ApplicationError::Decode(format!(
            "{}: image has no pixels",
            path.display()
        )));
    }
    let pixels = source
        .pixels()
        .map(|pixel| {
            let [r, g, b] = pixel.0;
            ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
        })
        .collect();
    Ok(Canvas {
        width,
        height,
        pixels,
    })
}

fn draw_gallery(
    buffer: &mut [u32],
    width: usize,
    title: &str,
    view: &CarouselView,
    panel: Rect,
    focused: bool,
    cache: &mut CanvasCache,
) {
    fill_rect(buffer, width, panel, PANEL_FILL);
    draw_rect(
        buffer,
        width,
        panel,
        if focused { AURORA } else { PANEL_BORDER },
    );
    let stage = stage_rect(panel);
    let caption_y = stage.bottom() + (PAGINATION_HEIGHT - 8) / 2;
    draw_text(buffer, width, stage.left, caption_y, &title.to_uppercase(), MUTED_TEXT);

    if let CarouselView::Empty { message } = view {
        fill_rect(buffer, width, stage, STAGE_FILL);
        let text_width = message.len() * 8;
        let x = stage.left + stage.width.saturating_sub(text_width) / 2;
        draw_text(buffer, width, x, stage.top + stage.height / 2, message, MUTED_TEXT);
        return;
    }

    for slide in view.slides() {
        let rect = slide_rect(view, slide.position, stage);
        fill_rect(buffer, width, rect, STAGE_FILL);
        if let Some(canvas) = cache.get(&slide.image) {
            draw_canvas_fit(buffer, width, canvas, rect);
        }
        if slide.position != SlotPosition::Center {
            darken_rect(buffer, width, rect, 60);
        }
        draw_rect(buffer, width, rect, PANEL_BORDER);
    }

    for (rect, target) in hit_boxes(view, panel) {
        match target {
            HitTarget::Control(action) => {
                fill_rect(buffer, width, rect, PANEL_FILL);
                draw_rect(buffer, width, rect, TEXT);
                let glyph = if action == SlideAction::Retreat { "<" } else { ">" };
                draw_text(buffer, width, rect.left + 10, rect.top + 10, glyph, TEXT);
            }
            HitTarget::Indicator(index) => {
                let active = view
                    .indicators()
                    .get(index)
                    .is_some_and(|indicator| indicator.active);
                fill_rect(buffer, width, rect, if active { AURORA } else { DOT_IDLE });
            }
            HitTarget::Slide { .. } => {}
        }
    }

    if let CarouselView::Gallery {
        hint: Some(hint), ..
    } = view
    {
        let x = stage.right().saturating_sub(hint.len() * 8);
        draw_text(buffer, width, x, caption_y, hint, MUTED_TEXT);
    }
}

fn draw_canvas_fit(buffer: &mut [u32], width: usize, canvas: &Canvas, rect: Rect) {
    if rect.width < 2 || rect.height < 2 {
        return;
    }
    let scale = (rect.width as f32 / canvas.width as f32).min(rect.height as f32 / canvas.height as f32);
    let draw_width = ((canvas.width as f32 * scale).round() as usize).clamp(1, rect.width);
    let draw_height = ((canvas.height as f32 * scale).round() as usize).clamp(1, rect.height);
    let start_x = rect.left + (rect.width - draw_width) / 2;
    let start_y = rect.top + (rect.height - draw_height) / 2;

    for y in 0..draw_height {
        let src_y = y * canvas.height / draw_height;
        for x in 0..draw_width {
            let src_x = x * canvas.width / draw_width;
            set_pixel(
                buffer,
                width,
                start_x + x,
                start_y + y,
                canvas.pixels[src_y * canvas.width + src_x],
            );
        }
    }
}

fn draw_dialog(buffer: &mut [u32], width: usize, height: usize, dialog: &ComingSoonDialog) {
    darken_rect(
        buffer,
        width,
        Rect {
            left: 0,
            top: 0,
            width,
            height,
        },
        120,
    );
    let box_width = 320.min(width.saturating_sub(CANVAS_MARGIN * 2));
    let box_height = 96;
    let dialog_rect = Rect {
        left: width.saturating_sub(box_width) / 2,
        top: height.saturating_sub(box_height) / 2,
        width: box_width,
        height: box_height,
    };
    fill_rect(buffer, width, dialog_rect, PANEL_FILL);
    draw_rect(buffer, width, dialog_rect, AURORA);
    let message = dialog.message().to_uppercase();
    let x = dialog_rect.left + box_width.saturating_sub(message.len() * 8) / 2;
    draw_text(buffer, width, x, dialog_rect.top + 36, &message, TEXT);
    let close = "ESC TO CLOSE";
    let x = dialog_rect.left + box_width.saturating_sub(close.len() * 8) / 2;
    draw_text(buffer, width, x, dialog_rect.top + 60, close, MUTED_TEXT);
}

fn draw_background(buffer: &mut [u32], width: usize, height: usize) {
    for y in 0..height {
        let color = lerp_color(BACKGROUND_TOP, BACKGROUND_BOTTOM, y as f32 / height.max(1) as f32);
        let row = y * width;
        buffer[row..row + width].fill(color);
    }
}

fn draw_header(buffer: &mut [u32], width: usize, brand: &str) {
    let band = Rect {
        left: CANVAS_MARGIN,
        top: HEADER_TOP,
        width: width.saturating_sub(CANVAS_MARGIN * 2),
        height: HEADER_HEIGHT,
    };
    fill_rect(buffer, width, band, PANEL_FILL);
    draw_rect(buffer, width, band, PANEL_BORDER);
    draw_text(
        buffer,
        width,
        band.left + 14,
        band.top + 18,
        &brand.to_uppercase(),
        TEXT,
    );
    let help = "TAB GALLERY  D DEMO  ESC QUIT";
    let x = band.right().saturating_sub(help.len() * 8 + 14);
    draw_text(buffer, width, x, band.top + 18, help, MUTED_TEXT);
}

fn build_window_title(brand: &str, galleries: &[MountedCarousel<'_>], focused: usize) -> String {
    let status = galleries
        .get(focused)
        .map(|gallery| present_carousel_status(gallery.carousel()))
        .unwrap_or_else(|| "no galleries".to_string());
    format!("{brand} | {status} | left/right navigate | tab switch gallery | esc quit")
}

fn fill_rect(buffer: &mut [u32], width: usize, rect: Rect, color: u32) {
    for y in rect.top..rect.bottom() {
        for x in rect.left..rect.right() {
            set_pixel(buffer, width, x, y, color);
        }
    }
}

fn draw_rect(buffer: &mut [u32], width: usize, rect: Rect, color: u32) {
    if rect.width == 0 || rect.height == 0 {
        return;
    }
    let right = rect.right() - 1;
    let bottom = rect.bottom() - 1;
    for x in rect.left..=right {
        set_pixel(buffer, width, x, rect.top, color);
        set_pixel(buffer, width, x, bottom, color);
    }
    for y in rect.top..=bottom {
        set_pixel(buffer, width, rect.left, y, color);
        set_pixel(buffer, width, right, y, color);
    }
}

fn darken_rect(buffer: &mut [u32], width: usize, rect: Rect, amount: u8) {
    let height = buffer.len() / width.max(1);
    for y in rect.top..rect.bottom().min(height) {
        for x in rect.left..rect.right().min(width) {
            let index = y * width + x;
            buffer[index] = darken_color(buffer[index], amount);
        }
    }
}

fn lerp_color(start: u32, end: u32, t: f32) -> u32 {
    let clamped = t.clamp(0.0, 1.0);
    let channel = |shift: u32| {
        let from = ((start >> shift) & 0xFF) as f32;
        let to = ((end >> shift) & 0xFF) as f32;
        ((from + (to - from) * clamped).round() as u32) << shift
    };
    channel(16) | channel(8) | channel(0)
}

fn darken_color(color: u32, amount: u8) -> u32 {
    let r = ((color >> 16) & 0xFF).saturating_sub(amount as u32);
    let g = ((color >> 8) & 0xFF).saturating_sub(amount as u32);
    let b = (color & 0xFF).saturating_sub(amount as u32);
    (r << 16) | (g << 8) | b
}

fn set_pixel(buffer: &mut [u32], width: usize, x: usize, y: usize, color: u32) {
    let height = buffer.len() / width.max(1);
    if x < width && y < height {
        buffer[y * width + x] = color;
    }
}

fn draw_text(buffer: &mut [u32], width: usize, x: usize, y: usize, text: &str, color: u32) {
    let mut cursor_x = x;
    for ch in text.chars() {
        draw_char(buffer, width, cursor_x, y, ch, color);
        cursor_x = cursor_x.saturating_add(8);
    }
}

fn draw_char(buffer: &mut [u32], width: usize, x: usize, y: usize, ch: char, color: u32) {
    let glyph = font8x8::BASIC_FONTS.get(ch).unwrap_or([0; 8]);
    for (row, bits) in glyph.iter().enumerate() {
        for col in 0..8 {
            if (bits >> col) & 1 == 1 {
                set_pixel(buffer, width, x + col, y + row, color);
            }
        }
    }
}
