use happy_core::Anchor;

pub const CONTAINER: &str = "position: relative; height: 100vh; width: 100vw;";

pub const MAP: &str = "height: 100%; width: 100%;";

pub const CALLOUT_CONTAINER: &str = "\
    display: flex; align-items: center; \
    background-color: rgba(255, 255, 255, 0.8); \
    border: none; border-radius: 16px; \
    height: 46px; width: 160px; padding: 0 16px; \
    cursor: pointer;";

pub const CALLOUT_TEXT: &str = "\
    color: #0089A5; font-size: 14px; \
    font-family: 'Nunito', sans-serif; font-weight: 700;";

pub const FOOTER: &str = "\
    position: absolute; left: 24px; right: 24px; bottom: 32px; z-index: 1000; \
    display: flex; flex-direction: row; align-items: center; justify-content: space-between; \
    height: 56px; padding-left: 24px; \
    background-color: #FFF; border-radius: 20px; \
    box-shadow: 0 2px 6px rgba(0, 0, 0, 0.2);";

pub const FOOTER_TEXT: &str = "\
    color: #8FA7B3; \
    font-family: 'Nunito', sans-serif; font-weight: 700;";

pub const CREATE_BUTTON: &str = "\
    display: flex; align-items: center; justify-content: center; \
    height: 56px; width: 56px; \
    background-color: #15C3D6; border: none; border-radius: 20px; \
    color: #FFF; font-size: 20px; cursor: pointer;";

pub const ERROR_BANNER: &str = "\
    position: absolute; left: 24px; right: 24px; top: 32px; z-index: 1000; \
    margin: 0; padding: 12px 24px; \
    background-color: #FFE4E6; border-radius: 20px; \
    color: #B91C1C; font-family: 'Nunito', sans-serif;";

pub const PAGE: &str = "padding: 24px; font-family: 'Nunito', sans-serif;";

pub const PAGE_TITLE: &str = "color: #0089A5;";

/// Shift the callout by the anchor given in multiples of its own size,
/// where (0.5, 1.0) is the default position above the marker.
pub fn callout_offset(anchor: Anchor) -> String {
    let x = (anchor.x - 0.5) * 100.0;
    let y = (anchor.y - 1.0) * 100.0;
    format!("transform: translate({x:.0}%, {y:.0}%);")
}
