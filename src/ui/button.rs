//! src/ui/button.rs
//!
//! Menu button text with hover/press/select colour animation.
//!
//! Pointer and selection events only set a *target* colour and scale; `tick`
//! eases the displayed values toward them. `tick` also watches the
//! interactable flag so that disabling or re-enabling a button restyles it
//! without waiting for the next pointer event.

use ratatui::style::{Color, Modifier, Style};

/// Linear RGB colour with components in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Interpolate toward `to`; `t` is clamped to `[0, 1]`.
    pub fn lerp(self, to: Rgb, t: f32) -> Rgb {
        if t >= 1.0 {
            return to;
        }
        let t = t.max(0.0);
        Rgb {
            r: self.r + (to.r - self.r) * t,
            g: self.g + (to.g - self.g) * t,
            b: self.b + (to.b - self.b) * t,
        }
    }

    fn channel(v: f32) -> u8 {
        (v.clamp(0.0, 1.0) * 255.0).round() as u8
    }
}

impl From<Rgb> for Color {
    fn from(c: Rgb) -> Self {
        Color::Rgb(Rgb::channel(c.r), Rgb::channel(c.g), Rgb::channel(c.b))
    }
}

/// Colours and easing parameters shared by a set of buttons.
#[derive(Clone, Debug, PartialEq)]
pub struct ButtonStyle {
    pub normal: Rgb,
    pub hover: Rgb,
    pub pressed: Rgb,
    pub selected: Rgb,
    pub disabled: Rgb,

    /// Colour easing rate per second.
    pub color_speed: f32,
    /// Ease colours; when false they snap to the target.
    pub smooth: bool,
    /// After release go back to `normal` instead of `hover`.
    pub return_to_normal_on_release: bool,

    pub scale_on_hover: bool,
    pub hover_scale: f32,
    /// Scale easing rate per second.
    pub scale_speed: f32,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        Self {
            normal: Rgb::new(0.8, 0.8, 0.8),
            hover: Rgb::new(0.35, 0.6, 1.0),
            pressed: Rgb::new(0.9, 0.2, 0.2),
            selected: Rgb::new(0.2, 0.8, 0.2),
            disabled: Rgb::new(0.5, 0.5, 0.5),
            color_speed: 8.0,
            smooth: true,
            return_to_normal_on_release: false,
            scale_on_hover: true,
            hover_scale: 1.1,
            scale_speed: 10.0,
        }
    }
}

const PRESSED_SCALE: f32 = 0.95;

#[derive(Clone, Debug)]
pub struct AnimatedButton {
    pub label: String,
    style: ButtonStyle,

    color: Rgb,
    target_color: Rgb,
    scale: f32,
    target_scale: f32,

    interactable: bool,
    was_interactable: bool,
    dimmed: bool,
}

impl AnimatedButton {
    pub fn new(label: &str, style: ButtonStyle) -> Self {
        let color = style.normal;
        Self {
            label: label.to_string(),
            style,
            color,
            target_color: color,
            scale: 1.0,
            target_scale: 1.0,
            interactable: true,
            was_interactable: true,
            dimmed: false,
        }
    }

    pub fn style(&self) -> &ButtonStyle {
        &self.style
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn target_color(&self) -> Rgb {
        self.target_color
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn is_interactable(&self) -> bool {
        self.interactable
    }

    pub fn is_dimmed(&self) -> bool {
        self.dimmed
    }

    fn hover_scale(&self) -> f32 {
        self.style.hover_scale
    }

    fn set_target_scale(&mut self, scale: f32) {
        if self.style.scale_on_hover {
            self.target_scale = scale;
        }
    }

    /// Non-interactable buttons fall back to the disabled look on exit/deselect.
    fn settle(&mut self) {
        if self.interactable {
            self.target_color = self.style.normal;
        } else {
            self.target_color = self.style.disabled;
            self.dimmed = true;
        }
        self.set_target_scale(1.0);
    }

    pub fn pointer_enter(&mut self) {
        if !self.interactable {
            return;
        }
        self.target_color = self.style.hover;
        self.set_target_scale(self.hover_scale());
        self.dimmed = false;
    }

    pub fn pointer_exit(&mut self) {
        self.settle();
    }

    pub fn pointer_down(&mut self) {
        if !self.interactable {
            return;
        }
        self.target_color = self.style.pressed;
        self.set_target_scale(PRESSED_SCALE);
    }

    pub fn pointer_up(&mut self) {
        if !self.interactable {
            return;
        }
        self.target_color = if self.style.return_to_normal_on_release {
            self.style.normal
        } else {
            self.style.hover
        };
        self.set_target_scale(self.hover_scale());
    }

    pub fn select(&mut self) {
        if !self.interactable {
            return;
        }
        self.target_color = self.style.selected;
        self.set_target_scale(self.hover_scale());
    }

    pub fn deselect(&mut self) {
        self.settle();
    }

    /// Takes effect on the next `tick`.
    pub fn set_interactable(&mut self, interactable: bool) {
        self.interactable = interactable;
    }

    pub fn set_text_color(&mut self, color: Rgb, immediate: bool) {
        self.target_color = color;
        if immediate {
            self.color = color;
        }
    }

    pub fn reset_to_normal(&mut self, immediate: bool) {
        self.target_color = self.style.normal;
        if immediate {
            self.color = self.style.normal;
        }
        self.set_target_scale(1.0);
    }

    /// Swap the three primary colours. A button resting on the old normal
    /// colour moves to the new one.
    pub fn change_colors(&mut self, normal: Rgb, hover: Rgb, pressed: Rgb) {
        let was_normal = self.target_color == self.style.normal;
        self.style.normal = normal;
        self.style.hover = hover;
        self.style.pressed = pressed;
        if was_normal {
            self.target_color = normal;
        }
    }

    pub fn set_smooth(&mut self, smooth: bool) {
        self.style.smooth = smooth;
    }

    pub fn set_scale_on_hover(&mut self, enabled: bool) {
        if !enabled {
            self.target_scale = 1.0;
            self.scale = 1.0;
        }
        self.style.scale_on_hover = enabled;
    }

    /// Advance the animation by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        self.color = if self.style.smooth {
            self.color
                .lerp(self.target_color, dt * self.style.color_speed)
        } else {
            self.target_color
        };

        if self.style.scale_on_hover {
            let t = dt * self.style.scale_speed;
            if t >= 1.0 {
                self.scale = self.target_scale;
            } else {
                self.scale += (self.target_scale - self.scale) * t.max(0.0);
            }
        }

        if self.interactable == self.was_interactable {
            return;
        }
        self.was_interactable = self.interactable;
        if self.interactable {
            self.target_color = self.style.normal;
            self.dimmed = false;
        } else {
            self.target_color = self.style.disabled;
            self.dimmed = true;
        }
    }

    /// Horizontal padding cells derived from the current scale.
    pub fn padding(&self) -> usize {
        ((self.scale - 1.0).max(0.0) * 10.0).round() as usize
    }

    pub fn text_style(&self) -> Style {
        let mut style = Style::default().fg(self.color.into());
        if self.scale > 1.02 {
            style = style.add_modifier(Modifier::BOLD);
        }
        if self.dimmed {
            style = style.add_modifier(Modifier::DIM);
        }
        style
    }

    /// Label framed with brackets, widened while scaled up.
    pub fn render_label(&self) -> String {
        let pad = " ".repeat(self.padding());
        format!("[{pad}{}{pad}]", self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn button() -> AnimatedButton {
        AnimatedButton::new("Start", ButtonStyle::default())
    }

    fn settle(b: &mut AnimatedButton) {
        for _ in 0..10 {
            b.tick(1.0);
        }
    }

    #[test]
    fn lerp_clamps() {
        let a = Rgb::new(0.0, 0.0, 0.0);
        let b = Rgb::new(1.0, 0.5, 0.0);
        assert_eq!(a.lerp(b, 2.0), b);
        assert_eq!(a.lerp(b, -1.0), a);
        assert_eq!(a.lerp(b, 0.5), Rgb::new(0.5, 0.25, 0.0));
    }

    #[test]
    fn hover_eases_toward_target() {
        let mut b = button();
        let style = b.style().clone();
        b.pointer_enter();
        assert_eq!(b.target_color(), style.hover);

        b.tick(0.05);
        assert_ne!(b.color(), style.normal);
        assert_ne!(b.color(), style.hover);

        settle(&mut b);
        assert_eq!(b.color(), style.hover);
        assert!((b.scale() - style.hover_scale).abs() < 1e-4);
        assert_eq!(b.padding(), 1);
        assert_eq!(b.render_label(), "[ Start ]");
        assert!(b.text_style().add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn snap_when_not_smooth() {
        let mut b = button();
        b.set_smooth(false);
        b.pointer_down();
        b.tick(0.001);
        assert_eq!(b.color(), b.style().pressed);
    }

    #[test]
    fn release_returns_to_hover_or_normal() {
        let mut b = button();
        b.pointer_down();
        b.pointer_up();
        assert_eq!(b.target_color(), b.style().hover);

        let mut style = ButtonStyle::default();
        style.return_to_normal_on_release = true;
        let mut b = AnimatedButton::new("Exit", style);
        b.pointer_down();
        b.pointer_up();
        assert_eq!(b.target_color(), b.style().normal);
    }

    #[test]
    fn disabled_ignores_pointer_and_dims() {
        let mut b = button();
        b.set_interactable(false);
        b.tick(0.0);
        assert_eq!(b.target_color(), b.style().disabled);
        assert!(b.is_dimmed());

        b.pointer_enter();
        b.pointer_down();
        b.select();
        assert_eq!(b.target_color(), b.style().disabled);
        assert!(b.text_style().add_modifier.contains(Modifier::DIM));
    }

    #[test]
    fn re_enabling_restores_normal_without_pointer() {
        let mut b = button();
        b.set_interactable(false);
        b.tick(0.1);
        b.set_interactable(true);
        b.tick(0.1);
        assert_eq!(b.target_color(), b.style().normal);
        assert!(!b.is_dimmed());
    }

    #[test]
    fn select_and_deselect() {
        let mut b = button();
        b.select();
        assert_eq!(b.target_color(), b.style().selected);
        b.deselect();
        assert_eq!(b.target_color(), b.style().normal);
    }

    #[test]
    fn change_colors_follows_only_resting_buttons() {
        let red = Rgb::new(1.0, 0.0, 0.0);
        let mut resting = button();
        resting.change_colors(red, red, red);
        assert_eq!(resting.target_color(), red);

        let mut hovered = button();
        hovered.select();
        hovered.change_colors(red, red, red);
        assert_eq!(hovered.target_color(), hovered.style().selected);
    }

    #[test]
    fn scale_disabled_keeps_unit_scale() {
        let mut b = button();
        b.set_scale_on_hover(false);
        b.pointer_enter();
        settle(&mut b);
        assert_eq!(b.scale(), 1.0);
        assert_eq!(b.render_label(), "[Start]");
    }

    #[test]
    fn immediate_color_updates() {
        let mut b = button();
        let blue = Rgb::new(0.0, 0.0, 1.0);
        b.set_text_color(blue, true);
        assert_eq!(b.color(), blue);
        b.reset_to_normal(true);
        assert_eq!(b.color(), b.style().normal);
    }

    #[test]
    fn color_converts_to_terminal_rgb() {
        assert_eq!(Color::from(Rgb::new(1.0, 0.5, 0.0)), Color::Rgb(255, 128, 0));
    }
}
