//! iced runtime for the counter widget
//!
//! [`CounterApp`] owns a [`CounterWidget`] and translates between iced
//! messages and counter commands. After every message the widget is
//! reconciled and any requested effects become deferred tasks.

use std::time::Instant;

use counter_core::{
    parse_attribute, AttributeUpdate, Command, CounterResult, CounterWidget, Effect,
    LazyCelebration, Localizer, Reconciliation,
};
use iced::widget::{button, column, container, row, stack, text};
use iced::{font, window, Center, Element, Fill, Font, Subscription, Task, Theme};
use tracing::{debug, info, warn};

use crate::config::{CounterConfig, WindowSection};
use crate::confetti::Confetti;
use crate::error::{GuiError, GuiResult};
use crate::theme::{names, Color, DesignTokens};

/// Messages handled by the counter
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// The `+` button was pressed
    Increment,
    /// The `-` button was pressed
    Decrement,
    /// The host wrote an attribute; `None` removes it
    AttributeChanged { name: String, value: Option<String> },
    /// Deferred step 1 of a celebration: make sure the confetti exists
    MountCelebration,
    /// Deferred step 2 of a celebration: retrigger the animation
    FlushCelebration,
    /// Animation frame
    Tick(Instant),
}

/// Everything needed to boot a counter.
#[derive(Debug, Clone, Default)]
pub struct CounterSettings {
    /// Initial host attribute writes, applied as one batch
    pub attributes: Vec<(String, Option<String>)>,
    /// Locale tag for the title
    pub locale: Option<String>,
    pub tokens: DesignTokens,
    /// Text shown under the buttons
    pub slot: Option<String>,
    pub window: WindowSection,
}

impl CounterSettings {
    /// Build settings from a configuration file's contents
    pub fn from_config(config: &CounterConfig) -> GuiResult<Self> {
        Ok(Self {
            attributes: config
                .attribute_writes()
                .into_iter()
                .map(|(name, value)| (name.to_string(), value))
                .collect(),
            locale: config.theme.locale.clone(),
            tokens: config.tokens()?,
            slot: config.counter.slot.clone(),
            window: config.window.clone(),
        })
    }

    /// Append a host attribute write; later writes win
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: Option<String>) -> Self {
        self.attributes.push((name.into(), value));
        self
    }

    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }
}

/// The iced application state
pub struct CounterApp {
    widget: CounterWidget,
    /// Explicit title attribute; empty means localized
    title: String,
    localizer: Localizer,
    tokens: DesignTokens,
    slot: Option<String>,
    celebration: LazyCelebration<Confetti>,
}

impl CounterApp {
    /// Construct the counter, apply the initial attributes and run the
    /// first reconciliation
    pub fn new(settings: CounterSettings) -> (Self, Task<Message>) {
        let localizer = settings
            .locale
            .as_deref()
            .map(Localizer::for_locale)
            .unwrap_or_default();

        let mut app = Self {
            widget: CounterWidget::new(),
            title: String::new(),
            localizer,
            tokens: settings.tokens,
            slot: settings.slot,
            celebration: LazyCelebration::new(),
        };

        let commands = app.collect_commands(
            settings
                .attributes
                .iter()
                .map(|(name, value)| (name.as_str(), value.as_deref())),
        );
        let outcome = app.widget.apply(commands);
        info!(state = %app.widget.state(), "counter mounted");

        let task = app.run_effects(&outcome);
        (app, task)
    }

    #[must_use]
    pub fn widget(&self) -> &CounterWidget {
        &self.widget
    }

    #[must_use]
    pub fn celebration(&self) -> &LazyCelebration<Confetti> {
        &self.celebration
    }

    /// Title as displayed
    #[must_use]
    pub fn display_title(&self) -> &str {
        self.localizer.display_title(&self.title)
    }

    /// Apply one host attribute write and reconcile
    pub fn set_attribute(&mut self, name: &str, value: Option<&str>) -> CounterResult<Reconciliation> {
        let commands = match parse_attribute(name, value)? {
            AttributeUpdate::Command(command) => vec![command],
            AttributeUpdate::Title(title) => {
                self.title = title;
                Vec::new()
            }
        };
        Ok(self.widget.apply(commands))
    }

    /// Parse a batch of attribute writes, keeping titles and dropping
    /// writes the widget cannot interpret
    fn collect_commands<'a>(
        &mut self,
        writes: impl IntoIterator<Item = (&'a str, Option<&'a str>)>,
    ) -> Vec<Command> {
        let mut commands = Vec::new();
        for (name, value) in writes {
            match parse_attribute(name, value) {
                Ok(AttributeUpdate::Command(command)) => commands.push(command),
                Ok(AttributeUpdate::Title(title)) => self.title = title,
                Err(e) => warn!(error = %e, "ignoring attribute"),
            }
        }
        commands
    }

    /// Update the application state based on a message
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Increment => {
                let outcome = self.widget.increment();
                self.run_effects(&outcome)
            }
            Message::Decrement => {
                let outcome = self.widget.decrement();
                self.run_effects(&outcome)
            }
            Message::AttributeChanged { name, value } => {
                match self.set_attribute(&name, value.as_deref()) {
                    Ok(outcome) => self.run_effects(&outcome),
                    Err(e) => {
                        warn!(error = %e, "ignoring attribute");
                        Task::none()
                    }
                }
            }
            Message::MountCelebration => {
                let palette = self.confetti_palette();
                self.celebration.mount_with(|| Confetti::new(palette));
                Task::done(Message::FlushCelebration)
            }
            Message::FlushCelebration => {
                if self.celebration.flush() {
                    debug!(played = self.celebration.played(), "confetti popped");
                }
                Task::none()
            }
            Message::Tick(now) => {
                if let Some(confetti) = self.celebration.target_mut() {
                    confetti.tick(now);
                }
                Task::none()
            }
        }
    }

    /// Turn reconciliation effects into deferred tasks
    fn run_effects(&mut self, outcome: &Reconciliation) -> Task<Message> {
        let tasks = outcome.effects.iter().filter_map(|effect| match effect {
            Effect::Celebrate => self
                .celebration
                .request()
                .then(|| Task::done(Message::MountCelebration)),
        });
        Task::batch(tasks.collect::<Vec<_>>())
    }

    fn confetti_palette(&self) -> Vec<Color> {
        [
            names::SKY_BLUE,
            names::GLOBAL_NEON,
            names::WONDER_PURPLE,
            names::ORIGINAL_87_PINK,
        ]
        .iter()
        .filter_map(|name| self.tokens.color(name))
        .collect()
    }

    /// Render the counter
    pub fn view(&self) -> Element<'_, Message> {
        let appearance = self.widget.appearance();
        let host_color = self.tokens.host_text_color(appearance.emphasis);
        let number_color = self.tokens.tone_color(appearance.tone).unwrap_or(host_color);
        let label_size = self.tokens.label_font_size();

        let mut content = column![
            text(self.display_title()).size(label_size * 0.8).color(host_color.to_iced()),
            text(appearance.label).size(label_size * 2.0).color(number_color.to_iced()),
            row![
                self.step_button("-", (!appearance.decrement_disabled).then_some(Message::Decrement)),
                self.step_button("+", (!appearance.increment_disabled).then_some(Message::Increment)),
            ]
            .spacing(self.tokens.size_or(names::SPACING_2, 8.0)),
        ]
        .spacing(self.tokens.size_or(names::SPACING_2, 8.0))
        .align_x(Center);

        if let Some(slot) = &self.slot {
            content = content.push(text(slot.as_str()).color(host_color.to_iced()));
        }

        let accent = self.tokens.color_or_default(names::ACCENT);
        let wrapper = container(content)
            .padding(self.tokens.size_or(names::SPACING_4, 16.0))
            .style(move |_theme: &Theme| container::Style {
                background: Some(accent.to_iced().into()),
                ..Default::default()
            });

        let base = container(wrapper)
            .padding(self.tokens.size_or(names::SPACING_2, 8.0))
            .center(Fill);

        match self.celebration.target() {
            Some(confetti) if confetti.is_animating() => {
                stack![base, iced::widget::canvas(confetti).width(Fill).height(Fill)].into()
            }
            _ => base.into(),
        }
    }

    /// A `-`/`+` button; `None` renders it disabled
    fn step_button<'a>(&self, label: &'a str, on_press: Option<Message>) -> Element<'a, Message> {
        let hover_bg = self.tokens.color_or_default(names::WONDER_PURPLE);
        let hover_fg = self.tokens.color_or_default(names::SLATE_MAX_LIGHT);
        let idle_bg = self.tokens.color_or_default(names::SLATE_MAX_LIGHT);
        let idle_fg = self.tokens.color_or_default(names::PRIMARY);
        let bold = Font {
            weight: font::Weight::Bold,
            ..Font::DEFAULT
        };

        button(text(label).font(bold).align_x(Center))
            .padding([10, 20])
            .on_press_maybe(on_press)
            .style(move |_theme: &Theme, status| {
                let (bg, fg) = match status {
                    button::Status::Hovered | button::Status::Pressed => (hover_bg, hover_fg),
                    button::Status::Disabled => (idle_bg.faded(0.5), idle_fg.faded(0.5)),
                    _ => (idle_bg, idle_fg),
                };
                button::Style {
                    background: Some(bg.to_iced().into()),
                    text_color: fg.to_iced(),
                    ..Default::default()
                }
            })
            .into()
    }

    /// Frame ticks while confetti is falling
    pub fn subscription(&self) -> Subscription<Message> {
        match self.celebration.target() {
            Some(confetti) if confetti.is_animating() => window::frames().map(Message::Tick),
            _ => Subscription::none(),
        }
    }

    pub fn theme(&self) -> Theme {
        self.tokens.base.to_iced_theme()
    }
}

/// Run the counter in a window.
///
/// This starts the iced event loop and blocks until the window is closed.
pub fn run(settings: CounterSettings) -> GuiResult<()> {
    let title = settings.window.title.clone();
    let (width, height) = settings.window.size;

    iced::application(move || CounterApp::new(settings.clone()), CounterApp::update, CounterApp::view)
        .title(move |_: &CounterApp| title.clone())
        .theme(CounterApp::theme)
        .subscription(CounterApp::subscription)
        .window_size((width as f32, height as f32))
        .run()
        .map_err(|e| GuiError::Iced(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_with(attributes: &[(&str, &str)]) -> CounterApp {
        let settings = attributes.iter().fold(CounterSettings::default(), |s, (name, value)| {
            s.with_attribute(*name, Some((*value).to_string()))
        });
        CounterApp::new(settings).0
    }

    #[test]
    fn test_boot_defaults() {
        let app = app_with(&[]);
        assert_eq!(app.widget().value(), 0);
        assert_eq!(app.widget().min(), -100);
        assert_eq!(app.widget().max(), 100);
        assert_eq!(app.display_title(), "Title");
        assert!(!app.celebration().is_mounted());
    }

    #[test]
    fn test_boot_attributes_are_one_batch() {
        let app = app_with(&[("min", "50"), ("max", "10")]);
        assert_eq!(app.widget().min(), 10);
        assert_eq!(app.widget().max(), 50);
        assert_eq!(app.widget().value(), 10);
    }

    #[test]
    fn test_boot_ignores_bad_attributes() {
        let app = app_with(&[("count", "seven"), ("step", "2"), ("count", "4")]);
        assert_eq!(app.widget().value(), 4);
    }

    #[test]
    fn test_buttons_update_state() {
        let mut app = app_with(&[]);
        let _ = app.update(Message::Increment);
        let _ = app.update(Message::Increment);
        let _ = app.update(Message::Decrement);
        assert_eq!(app.widget().value(), 1);
    }

    #[test]
    fn test_attribute_message() {
        let mut app = app_with(&[]);
        let _ = app.update(Message::AttributeChanged {
            name: "max".to_string(),
            value: Some("-5".to_string()),
        });
        assert_eq!(app.widget().max(), -5);
        assert_eq!(app.widget().value(), -5);

        let _ = app.update(Message::AttributeChanged {
            name: "max".to_string(),
            value: Some("oops".to_string()),
        });
        assert_eq!(app.widget().max(), -5);
    }

    #[test]
    fn test_title_attribute_and_locale() {
        let settings = CounterSettings::default().with_locale("es");
        let (mut app, _) = CounterApp::new(settings);
        assert_eq!(app.display_title(), "Título");

        app.set_attribute("title", Some("Clicks")).unwrap();
        assert_eq!(app.display_title(), "Clicks");

        app.set_attribute("title", None).unwrap();
        assert_eq!(app.display_title(), "Título");
    }

    #[test]
    fn test_reaching_threshold_requests_celebration() {
        let mut app = app_with(&[("count", "20")]);
        assert!(!app.celebration().is_pending());

        let _ = app.update(Message::Increment);
        assert!(app.celebration().is_pending());
        assert!(!app.celebration().is_mounted());

        let _ = app.update(Message::MountCelebration);
        assert!(app.celebration().is_mounted());

        let _ = app.update(Message::FlushCelebration);
        assert_eq!(app.celebration().played(), 1);
        assert!(app.celebration().target().unwrap().is_animating());
    }

    #[test]
    fn test_booting_at_threshold_requests_celebration() {
        let app = app_with(&[("count", "21")]);
        assert!(app.celebration().is_pending());
    }

    #[test]
    fn test_flush_without_mount_skips() {
        let mut app = app_with(&[("count", "20")]);
        let _ = app.update(Message::Increment);
        let _ = app.update(Message::FlushCelebration);
        assert_eq!(app.celebration().played(), 0);
        assert!(!app.celebration().is_pending());
    }

    #[test]
    fn test_settings_from_config() {
        let mut config = CounterConfig::default();
        config.counter.count = Some(18);
        config.counter.slot = Some("tap away".to_string());
        config.theme.locale = Some("fr".to_string());

        let (app, _) = CounterApp::new(CounterSettings::from_config(&config).unwrap());
        assert_eq!(app.widget().value(), 18);
        assert_eq!(app.display_title(), "Titre");
        assert_eq!(app.slot.as_deref(), Some("tap away"));
    }
}
