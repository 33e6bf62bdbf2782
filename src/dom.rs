use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn html_element_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

/// Rendered size of `el`, or `None` while it is detached or collapsed.
pub fn element_size(el: &web::Element) -> Option<Vec2> {
    if !el.is_connected() {
        return None;
    }
    let rect = el.get_bounding_client_rect();
    let size = Vec2::new(rect.width() as f32, rect.height() as f32);
    (size.x > 0.0 && size.y > 0.0).then_some(size)
}

/// Offset of the element's top edge from the top of the document.
pub fn document_top(el: &web::Element) -> Option<f32> {
    let window = web::window()?;
    let scroll_y = window.scroll_y().ok()?;
    Some((el.get_bounding_client_rect().top() + scroll_y) as f32)
}

pub fn viewport_height() -> Option<f32> {
    let h = web::window()?.inner_height().ok()?.as_f64()?;
    (h > 0.0).then_some(h as f32)
}

#[inline]
pub fn set_style(el: &web::HtmlElement, name: &str, value: &str) {
    _ = el.style().set_property(name, value);
}

pub fn all_html_elements(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|n| n.dyn_into::<web::HtmlElement>().ok())
        .collect()
}
