//! Global keyboard routing. Exactly one surface may respond to a keypress:
//! the lightbox when open, otherwise the feature detail modal, otherwise the
//! hero carousel. One dispatcher consults this instead of each component
//! installing its own listener.

/// Topmost overlay currently shown, in capture priority order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Overlay {
    None,
    FeatureModal,
    Lightbox,
}

/// What the single keydown listener should do for a given key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    HeroPrev,
    HeroNext,
    FeaturePrev,
    FeatureNext,
    CloseFeatureModal,
    LightboxPrev,
    LightboxNext,
    CloseLightbox,
}

pub fn dispatch_key(overlay: Overlay, key: &str) -> Option<KeyAction> {
    match overlay {
        Overlay::Lightbox => match key {
            "ArrowLeft" => Some(KeyAction::LightboxPrev),
            "ArrowRight" => Some(KeyAction::LightboxNext),
            "Escape" => Some(KeyAction::CloseLightbox),
            _ => None,
        },
        Overlay::FeatureModal => match key {
            "ArrowLeft" => Some(KeyAction::FeaturePrev),
            "ArrowRight" => Some(KeyAction::FeatureNext),
            "Escape" => Some(KeyAction::CloseFeatureModal),
            _ => None,
        },
        Overlay::None => match key {
            "ArrowLeft" => Some(KeyAction::HeroPrev),
            "ArrowRight" => Some(KeyAction::HeroNext),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_drive_the_hero_when_nothing_is_open() {
        assert_eq!(dispatch_key(Overlay::None, "ArrowLeft"), Some(KeyAction::HeroPrev));
        assert_eq!(dispatch_key(Overlay::None, "ArrowRight"), Some(KeyAction::HeroNext));
        assert_eq!(dispatch_key(Overlay::None, "Escape"), None);
    }

    #[test]
    fn feature_modal_takes_over_from_the_hero() {
        assert_eq!(
            dispatch_key(Overlay::FeatureModal, "ArrowRight"),
            Some(KeyAction::FeatureNext)
        );
        assert_eq!(
            dispatch_key(Overlay::FeatureModal, "Escape"),
            Some(KeyAction::CloseFeatureModal)
        );
    }

    #[test]
    fn lightbox_captures_input_exclusively() {
        assert_eq!(
            dispatch_key(Overlay::Lightbox, "ArrowLeft"),
            Some(KeyAction::LightboxPrev)
        );
        assert_eq!(
            dispatch_key(Overlay::Lightbox, "Escape"),
            Some(KeyAction::CloseLightbox)
        );
    }

    #[test]
    fn unrelated_keys_are_ignored_everywhere() {
        for overlay in [Overlay::None, Overlay::FeatureModal, Overlay::Lightbox] {
            assert_eq!(dispatch_key(overlay, "Enter"), None);
            assert_eq!(dispatch_key(overlay, "a"), None);
        }
    }
}
