//! Browser platform glue

use js_sys::Promise;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, HtmlImageElement};

use super::sprite_url;
use crate::assets::{AssetError, AssetTable, Sprite, SpriteKey};
use crate::hud::{OverlaySink, ScoreboardSink};
use crate::sim::OverlayImage;

/// Directory the sprite images are served from
pub const ASSET_BASE: &str = "assets";

fn js_reason(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// Create an image element and a promise settled by its load/error event
fn begin_load(key: SpriteKey, base: &str) -> Result<(HtmlImageElement, Promise), AssetError> {
    let image = HtmlImageElement::new().map_err(|e| AssetError::Load {
        key,
        reason: js_reason(&e),
    })?;
    let promise = Promise::new(&mut |resolve, reject| {
        image.set_onload(Some(&resolve));
        image.set_onerror(Some(&reject));
    });
    image.set_src(&sprite_url(base, key));
    Ok((image, promise))
}

/// Load every sprite. All requests are in flight before the first await.
pub async fn load_assets(base: &str) -> Result<AssetTable<HtmlImageElement>, AssetError> {
    let mut pending = Vec::with_capacity(SpriteKey::ALL.len());
    for key in SpriteKey::ALL {
        pending.push((key, begin_load(key, base)?));
    }

    let mut table = AssetTable::new();
    for (key, (image, promise)) in pending {
        JsFuture::from(promise).await.map_err(|e| AssetError::Load {
            key,
            reason: js_reason(&e),
        })?;
        image.set_onload(None);
        image.set_onerror(None);
        let (w, h) = (image.natural_width() as f32, image.natural_height() as f32);
        log::debug!("Loaded sprite {} ({}x{})", key, w, h);
        table.insert(key, Sprite::new(w, h, image));
    }

    table.require_all()?;
    log::info!("Loaded {} sprites", table.len());
    Ok(table)
}

/// Text of an inline `<script type="application/json" id="...">` block
pub fn read_json_block(document: &Document, id: &str) -> Option<String> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.text_content())
        .filter(|text| !text.trim().is_empty())
}

/// Scoreboard text element
pub struct DomScoreboard {
    element: Element,
}

impl DomScoreboard {
    pub fn from_document(document: &Document, id: &str) -> Option<Self> {
        document
            .get_element_by_id(id)
            .map(|element| Self { element })
    }
}

impl ScoreboardSink for DomScoreboard {
    fn set_text(&mut self, text: &str) {
        self.element.set_text_content(Some(text));
    }
}

/// Modal overlay panel: `#overlay` containing `#overlay-message` and `#overlay-image`
pub struct DomOverlay {
    root: Element,
    message: Element,
    image: Element,
}

impl DomOverlay {
    pub fn from_document(document: &Document) -> Option<Self> {
        Some(Self {
            root: document.get_element_by_id("overlay")?,
            message: document.get_element_by_id("overlay-message")?,
            image: document.get_element_by_id("overlay-image")?,
        })
    }
}

impl OverlaySink for DomOverlay {
    fn show(&mut self, message: &str, image: OverlayImage) {
        self.message.set_text_content(Some(message));
        let src = format!("{}/{}.png", ASSET_BASE, image.as_str());
        let _ = self.image.set_attribute("src", &src);
        let _ = self.root.class_list().remove_1("hidden");
    }

    fn hide(&mut self) {
        let _ = self.root.class_list().add_1("hidden");
    }
}
