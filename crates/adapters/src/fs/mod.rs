mod discovery;

pub use discovery::{to_public_url, WalkdirImageProvider};
