pub const DESKTOP_BREAKPOINT: i32 = 768;
pub const SHADOW_SCROLL_THRESHOLD: f64 = 50.0;

const NAVBAR_SHADOW: &str = "box-shadow: 0 4px 20px rgba(0,0,0,0.1);";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavbarMode {
    Desktop,
    Mobile,
}

/// Placement of the navigation bars and floating call-to-action buttons for a
/// given window width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    pub navbar: NavbarMode,
    pub cta_bottom: u32,
    pub cta_right: u32,
}

impl Layout {
    pub fn for_width(width: i32) -> Self {
        if width >= DESKTOP_BREAKPOINT {
            Self {
                navbar: NavbarMode::Desktop,
                cta_bottom: 30,
                cta_right: 30,
            }
        } else {
            Self {
                navbar: NavbarMode::Mobile,
                cta_bottom: 100,
                cta_right: 15,
            }
        }
    }

    pub fn navbar_style(&self) -> &'static str {
        match self.navbar {
            NavbarMode::Desktop => "display: block;",
            NavbarMode::Mobile => "display: none;",
        }
    }

    pub fn mobile_nav_style(&self) -> &'static str {
        match self.navbar {
            NavbarMode::Desktop => "display: none;",
            NavbarMode::Mobile => "display: flex;",
        }
    }

    pub fn cta_style(&self) -> String {
        format!("bottom: {}px; right: {}px;", self.cta_bottom, self.cta_right)
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::for_width(DESKTOP_BREAKPOINT)
    }
}

pub fn navbar_shadow(scroll_y: f64) -> Option<&'static str> {
    (scroll_y > SHADOW_SCROLL_THRESHOLD).then_some(NAVBAR_SHADOW)
}

pub fn window_width() -> i32 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|width| width.as_f64())
        .map(|width| width as i32)
        .unwrap_or_default()
}

pub fn scroll_offset() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_switches_to_desktop() {
        let desktop = Layout::for_width(768);
        assert_eq!(desktop.navbar, NavbarMode::Desktop);
        assert_eq!(desktop.cta_style(), "bottom: 30px; right: 30px;");
        assert_eq!(desktop.navbar_style(), "display: block;");
        assert_eq!(desktop.mobile_nav_style(), "display: none;");

        let mobile = Layout::for_width(767);
        assert_eq!(mobile.navbar, NavbarMode::Mobile);
        assert_eq!(mobile.cta_style(), "bottom: 100px; right: 15px;");
        assert_eq!(mobile.navbar_style(), "display: none;");
        assert_eq!(mobile.mobile_nav_style(), "display: flex;");
    }

    #[test]
    fn shadow_only_past_threshold() {
        assert_eq!(navbar_shadow(0.0), None);
        assert_eq!(navbar_shadow(50.0), None);
        assert!(navbar_shadow(50.5).is_some());
        assert!(navbar_shadow(1200.0).is_some());
    }
}
