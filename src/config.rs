// Runtime configuration read from `data-*` attributes on `<body>`.
//
// Every key is optional; anything missing or malformed keeps the compiled
// default and is logged.

use atelier_core::{ScrollConfig, Spacing, BASE_SPACING, TITLE_TEXT};
use web_sys as web;

#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub scroll: ScrollConfig,
    pub title: String,
    pub spacing: Spacing,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            scroll: ScrollConfig::default(),
            title: TITLE_TEXT.to_owned(),
            spacing: Spacing::title(),
        }
    }
}

pub fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "" | "true" | "1" | "on" | "yes" => Some(true),
        "false" | "0" | "off" | "no" => Some(false),
        _ => None,
    }
}

/// Parse `"index:spacing"` pairs separated by commas, e.g. `"2:0, 7:64"`.
/// Negative gaps are rejected.
pub fn parse_spacing_overrides(raw: &str) -> Option<Vec<(usize, f32)>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|pair| {
            let (i, v) = pair.split_once(':')?;
            let v: f32 = v.trim().parse().ok()?;
            (v.is_finite() && v >= 0.0).then_some(())?;
            Some((i.trim().parse().ok()?, v))
        })
        .collect()
}

impl SiteConfig {
    /// Build from `(dataset key, value)` pairs. Keys use the camelCase form
    /// the DOM exposes (`data-base-spacing` -> `baseSpacing`).
    pub fn from_attrs<'a>(attrs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut cfg = Self::default();
        let mut custom_title = false;
        let mut base = None;
        let mut overrides = None;
        for (key, value) in attrs {
            match key {
                "smoothing" => match value.trim().parse::<f32>() {
                    Ok(v) if v > 0.0 && v <= 1.0 => cfg.scroll.smoothing_factor = v,
                    _ => log::warn!("[config] ignoring data-smoothing={value:?}"),
                },
                "wheelNormalize" => match parse_flag(value) {
                    Some(b) => cfg.scroll.wheel_normalization = b,
                    None => log::warn!("[config] ignoring data-wheel-normalize={value:?}"),
                },
                "touchSync" => match parse_flag(value) {
                    Some(b) => cfg.scroll.touch_sync = b,
                    None => log::warn!("[config] ignoring data-touch-sync={value:?}"),
                },
                "title" if !value.is_empty() => {
                    cfg.title = value.to_owned();
                    custom_title = true;
                }
                "baseSpacing" => match value.trim().parse::<f32>() {
                    Ok(v) if v.is_finite() && v >= 0.0 => base = Some(v),
                    _ => log::warn!("[config] ignoring data-base-spacing={value:?}"),
                },
                "spacingOverrides" => match parse_spacing_overrides(value) {
                    Some(pairs) => overrides = Some(pairs),
                    None => log::warn!("[config] ignoring data-spacing-overrides={value:?}"),
                },
                _ => {}
            }
        }
        // The shipped override table only makes sense for the shipped title.
        if custom_title || base.is_some() || overrides.is_some() {
            let mut spacing = if custom_title {
                Spacing::uniform(base.unwrap_or(BASE_SPACING))
            } else {
                let mut s = Spacing::title();
                s.base = base.unwrap_or(BASE_SPACING);
                s
            };
            if let Some(pairs) = overrides {
                spacing = Spacing::uniform(spacing.base).with_overrides(pairs);
            }
            cfg.spacing = spacing;
        }
        cfg
    }

    pub fn from_body(body: &web::HtmlElement) -> Self {
        const KEYS: [&str; 6] = [
            "smoothing",
            "wheelNormalize",
            "touchSync",
            "title",
            "baseSpacing",
            "spacingOverrides",
        ];
        let dataset = body.dataset();
        let found: Vec<(&str, String)> = KEYS
            .iter()
            .filter_map(|k| dataset.get(k).map(|v| (*k, v)))
            .collect();
        Self::from_attrs(found.iter().map(|(k, v)| (*k, v.as_str())))
    }
}
