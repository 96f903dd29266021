pub mod fs;
pub mod presenters;

pub use fs::{to_public_url, WalkdirImageProvider};
pub use presenters::{
    escape_html, present_carousel_status, present_discovery, present_section_row,
    render_carousel, render_page,
};
