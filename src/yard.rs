//! Yard controller: routes option changes, toggle clicks and key presses to
//! full scene renders or sprite-only repaints on a [`Stage`].

use anyhow::Result;

use crate::adjust::{PositionAdjust, SpriteAdjuster};
use crate::config::YardConfig;
use crate::selector::ModeSelector;
use crate::style::{self, Style};

/// Side effects of a render. The browser implementation lives in `dom`.
pub trait Stage {
    /// Set the page's mode indicator to exactly this style.
    fn set_mode(&mut self, style: Style);
    /// Paint the complete scene (background + sprite) for a style.
    fn draw_scene(&mut self, style: Style, sprite: &PositionAdjust);
    /// Repaint only the sprite layer over the last painted scene.
    fn redraw_sprite(&mut self, sprite: &PositionAdjust);
    /// Mark the option bound to `style` as selected.
    fn check_option(&mut self, style: Style);
}

pub struct Yard<S: Stage> {
    stage: S,
    selector: ModeSelector,
    adjuster: SpriteAdjuster,
    utc_offset_hours: u32,
    current: Option<Style>,
}

impl<S: Stage> Yard<S> {
    pub fn new(stage: S, selector: ModeSelector, config: &YardConfig) -> Result<Self> {
        Ok(Self {
            stage,
            selector,
            adjuster: SpriteAdjuster::with_default_table()?,
            utc_offset_hours: config.utc_offset_hours,
            current: None,
        })
    }

    pub fn stage(&self) -> &S {
        &self.stage
    }

    pub fn selector(&self) -> &ModeSelector {
        &self.selector
    }

    pub fn sprite(&self) -> &PositionAdjust {
        self.adjuster.state()
    }

    pub fn current_style(&self) -> Option<Style> {
        self.current
    }

    pub fn render(&mut self, style: Style) {
        log::info!("rendering {style} yard");
        self.stage.set_mode(style);
        self.stage.draw_scene(style, self.adjuster.state());
        self.stage.check_option(style);
        self.current = Some(style);
    }

    /// Change handler of the radio input for `style`.
    pub fn on_option_change(&mut self, style: Style) {
        self.render(style);
    }

    /// Click handler of the header toggle.
    pub fn on_toggle_activate(&mut self) {
        let style = self.selector.advance();
        self.render(style);
    }

    /// Pick the style for the given UTC hour and render it once.
    pub fn initial_render(&mut self, utc_hour: u32) -> Style {
        let hour = style::local_hour(utc_hour, self.utc_offset_hours);
        let style = style::style_for_hour(hour);
        log::info!("local hour {hour}, starting with {style}");
        self.render(style);
        style
    }

    /// Keydown handler: sprite adjustment first, then the style hotkeys. Both
    /// are checked for every event.
    pub fn handle_key(&mut self, key: &str, shift: bool) {
        if self.adjuster.apply_key(key, shift) {
            self.stage.redraw_sprite(self.adjuster.state());
        }
        if let Some(style) = Style::from_hotkey(key) {
            self.render(style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Mode(Style),
        Scene(Style),
        Sprite(PositionAdjust),
        Check(Style),
    }

    /// Records every stage call and tracks which option is checked.
    #[derive(Default)]
    struct RecordingStage {
        pub calls: Vec<Call>,
        pub mode: Option<Style>,
        pub checked: Vec<Style>,
    }

    impl Stage for RecordingStage {
        fn set_mode(&mut self, style: Style) {
            self.mode = Some(style);
            self.calls.push(Call::Mode(style));
        }
        fn draw_scene(&mut self, style: Style, _sprite: &PositionAdjust) {
            self.calls.push(Call::Scene(style));
        }
        fn redraw_sprite(&mut self, sprite: &PositionAdjust) {
            self.calls.push(Call::Sprite(*sprite));
        }
        fn check_option(&mut self, style: Style) {
            self.checked.retain(|s| *s == style);
            if self.checked.is_empty() {
                self.checked.push(style);
            }
            self.calls.push(Call::Check(style));
        }
    }

    fn yard() -> Yard<RecordingStage> {
        let config = YardConfig::default();
        let selector = ModeSelector::new(&Style::ALL, config.option_group).unwrap();
        Yard::new(RecordingStage::default(), selector, &config).unwrap()
    }

    fn scenes(y: &Yard<RecordingStage>) -> Vec<Style> {
        y.stage()
            .calls
            .iter()
            .filter_map(|c| match c {
                Call::Scene(s) => Some(*s),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn option_change_renders_exactly_that_style() {
        for s in Style::ALL {
            let mut y = yard();
            y.on_option_change(Style::Night);
            y.on_option_change(s);
            assert_eq!(y.stage().mode, Some(s));
            assert_eq!(y.stage().checked, vec![s]);
            assert_eq!(
                y.stage().calls[3..],
                [Call::Mode(s), Call::Scene(s), Call::Check(s)]
            );
        }
    }

    #[test]
    fn toggle_cycles_in_order() {
        let mut y = yard();
        for _ in 0..4 {
            y.on_toggle_activate();
        }
        assert_eq!(
            scenes(&y),
            [Style::Daytime, Style::Evening, Style::Night, Style::Daytime]
        );
    }

    #[test]
    fn arrow_key_redraws_sprite_only() {
        let mut y = yard();
        y.handle_key("ArrowRight", false);
        assert_eq!(y.sprite().x, 1.0);
        y.handle_key("ArrowRight", true);
        assert_eq!(y.sprite().x, 11.0);
        assert!(scenes(&y).is_empty());
        assert_eq!(y.stage().calls.len(), 2);
        assert!(matches!(y.stage().calls[1], Call::Sprite(p) if p.x == 11.0));
    }

    #[test]
    fn hotkey_renders_full_scene_without_touching_sprite() {
        let mut y = yard();
        y.handle_key("+", true);
        let before = *y.sprite();
        y.handle_key("d", false);
        assert_eq!(*y.sprite(), before);
        assert_eq!(scenes(&y), [Style::Daytime]);
        assert_eq!(y.current_style(), Some(Style::Daytime));
    }

    #[test]
    fn unknown_key_is_ignored() {
        let mut y = yard();
        y.handle_key("q", false);
        y.handle_key("Q", true);
        assert!(y.stage().calls.is_empty());
        assert_eq!(*y.sprite(), PositionAdjust::default());
    }

    #[test]
    fn initial_render_uses_offset_hour() {
        let mut y = yard();
        assert_eq!(y.initial_render(3), Style::Evening);
        assert_eq!(scenes(&y), [Style::Evening]);

        let mut y = yard();
        assert_eq!(y.initial_render(18), Style::Daytime);

        let mut y = yard();
        assert_eq!(y.initial_render(8), Style::Night);
    }
}
