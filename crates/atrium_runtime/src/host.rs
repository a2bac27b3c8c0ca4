//! Presentation seam between picking and whatever draws the scene

use atrium_picking::{NodeId, PickListener};

/// Hover scale of a highlighted computer
pub const HOVER_SCALE: f32 = 1.1;
/// Screen emissive intensity while hovered
pub const SCREEN_GLOW_HOVER: f32 = 0.8;
/// Screen emissive intensity at rest
pub const SCREEN_GLOW_IDLE: f32 = 0.2;

/// Sound hooks fired by interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioCue {
    Hover,
    Click,
}

/// Visual and audio side effects of picking
///
/// Hosts ignore node ids they do not know.
pub trait SceneHost {
    /// Toggle the emissive highlight on a node
    fn set_highlight(&mut self, node: NodeId, on: bool);

    /// Set a node's uniform scale
    fn set_scale(&mut self, node: NodeId, scale: f32);

    /// Set emissive intensity of a node's screen
    fn set_screen_glow(&mut self, node: NodeId, intensity: f32);

    /// Optional audio hook
    fn play_cue(&mut self, _cue: AudioCue) {}
}

/// Receives "open section" requests
pub trait SectionOpener {
    fn open_section(&mut self, section: &str);
}

impl<F: FnMut(&str)> SectionOpener for F {
    fn open_section(&mut self, section: &str) {
        self(section)
    }
}

/// Opener that only logs
#[derive(Debug, Default, Clone, Copy)]
pub struct LogOpener;

impl SectionOpener for LogOpener {
    fn open_section(&mut self, section: &str) {
        log::info!("Open section '{}'", section);
    }
}

/// Turns pick events into host calls
pub struct HoverPresenter<'a, H: SceneHost + ?Sized> {
    host: &'a mut H,
}

impl<'a, H: SceneHost + ?Sized> HoverPresenter<'a, H> {
    pub fn new(host: &'a mut H) -> Self {
        Self { host }
    }
}

impl<H: SceneHost + ?Sized> PickListener for HoverPresenter<'_, H> {
    fn on_enter(&mut self, node: NodeId) {
        self.host.set_highlight(node, true);
        self.host.set_scale(node, HOVER_SCALE);
        self.host.set_screen_glow(node, SCREEN_GLOW_HOVER);
        self.host.play_cue(AudioCue::Hover);
    }

    fn on_leave(&mut self, node: NodeId) {
        self.host.set_highlight(node, false);
        self.host.set_scale(node, 1.0);
        self.host.set_screen_glow(node, SCREEN_GLOW_IDLE);
    }

    fn on_activate(&mut self, _node: NodeId, _section: &str) {
        self.host.play_cue(AudioCue::Click);
    }
}
