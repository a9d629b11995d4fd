use rust_embed::RustEmbed;
use std::borrow::Cow;

/// Status bar indicator images are embedded into the binary.
#[derive(RustEmbed)]
#[folder = "assets/icons"]
#[include = "*.png"]
pub struct IconAssets;

/// Provides the PNG bytes for an asset name such as `processor-icon`.
/// Returns `None` for unknown names.
pub fn asset_bytes(name: &str) -> Option<Cow<'static, [u8]>> {
    IconAssets::get(&normalize(name)).map(|file| file.data)
}

fn normalize(raw: &str) -> String {
    let name = raw.trim();
    if name.ends_with(".png") {
        name.to_string()
    } else {
        format!("{name}.png")
    }
}
