// Page lifecycle decisions: back/forward cache transitions and route keys.
// Kept free of web-sys so host tests can include it.

/// A `pagehide`/`pageshow` event with its `persisted` flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageTransition {
    Hide { persisted: bool },
    Show { persisted: bool },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecycleAction {
    Keep,
    Unmount,
    Mount,
}

/// A page entering the back/forward cache keeps its loops; they are frozen
/// with the page and resume on restore. Only a real unload tears down.
/// A restored page that lost its mount (e.g. `unmount()` was called from
/// script) is mounted again.
pub fn lifecycle_action(transition: PageTransition, mounted: bool) -> LifecycleAction {
    match transition {
        PageTransition::Hide { persisted: false } if mounted => LifecycleAction::Unmount,
        PageTransition::Show { persisted: true } if !mounted => LifecycleAction::Mount,
        _ => LifecycleAction::Keep,
    }
}

/// Path part of a route or URL: origin, query and fragment are dropped, so
/// `popstate` (which reads `location.pathname`) and router callbacks agree.
pub fn route_key(raw: &str) -> &str {
    let raw = raw.trim();
    let path = match raw.find("://") {
        Some(scheme_end) => {
            let rest = &raw[scheme_end + 3..];
            match rest.find(|c: char| matches!(c, '/' | '?' | '#')) {
                Some(i) => &rest[i..],
                None => "",
            }
        }
        None => raw,
    };
    let path = match path.find(|c: char| matches!(c, '?' | '#')) {
        Some(i) => &path[..i],
        None => path,
    };
    if path.is_empty() {
        "/"
    } else {
        path
    }
}
