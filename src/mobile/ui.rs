//! Screen Chrome: Header & Bottom Navigation
//!
//! ┌─────────────────────────────┐
//! │ [←]  Transactions History [≡]│  ← Header
//! ├─────────────────────────────┤
//! │                              │
//! │         card stack           │  ← Content area (maximized)
//! │                              │
//! ├─────────────────────────────┤
//! │  Wallet   Scan  Transactions │  ← Bottom navigation
//! └─────────────────────────────┘

/// Header strip height
pub const HEADER_HEIGHT: f32 = 44.0;
/// Bottom navigation height
pub const NAV_HEIGHT: f32 = 56.0;

const ACCENT: egui::Color32 = egui::Color32::from_rgb(0, 128, 128);

/// Bottom navigation tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Wallet,
    Scan,
    Transactions,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Wallet, Tab::Scan, Tab::Transactions];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Wallet => "Wallet",
            Tab::Scan => "Scan",
            Tab::Transactions => "Transactions",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Tab::Wallet => "\u{1F45B}",
            Tab::Scan => "\u{2317}",
            Tab::Transactions => "\u{1F4C4}",
        }
    }
}

/// Actions the chrome can trigger
#[derive(Debug, Clone, PartialEq)]
pub enum ChromeAction {
    Back,
    Filter,
    SelectTab(Tab),
    None,
}

/// Header and tab bar state
pub struct MobileChrome {
    pub title: String,
    pub selected_tab: Tab,
    pub screen_width: f32,
    pub screen_height: f32,
}

impl MobileChrome {
    pub fn new(title: impl Into<String>, screen_width: f32, screen_height: f32) -> Self {
        Self {
            title: title.into(),
            selected_tab: Tab::Transactions,
            screen_width,
            screen_height,
        }
    }

    pub fn set_screen_size(&mut self, width: f32, height: f32) {
        self.screen_width = width;
        self.screen_height = height;
    }

    /// Apply an action to local state. Tab selection is the only state the
    /// chrome keeps; back and filter are left to the host.
    pub fn apply(&mut self, action: &ChromeAction) {
        if let ChromeAction::SelectTab(tab) = action {
            self.selected_tab = *tab;
        }
    }

    /// Render the header: [back] title [filter]
    pub fn render_header(&self, ui: &mut egui::Ui) -> ChromeAction {
        let mut action = ChromeAction::None;

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 8.0;

            if ui
                .add(
                    egui::Button::new(egui::RichText::new("\u{2190}").size(20.0))
                        .frame(false)
                        .min_size(egui::vec2(36.0, 36.0)),
                )
                .clicked()
            {
                action = ChromeAction::Back;
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .add(
                        egui::Button::new(egui::RichText::new("\u{2261}").size(20.0))
                            .frame(false)
                            .min_size(egui::vec2(36.0, 36.0)),
                    )
                    .clicked()
                {
                    action = ChromeAction::Filter;
                }

                ui.centered_and_justified(|ui| {
                    ui.label(
                        egui::RichText::new(&self.title)
                            .size(20.0)
                            .strong()
                            .color(egui::Color32::BLACK),
                    );
                });
            });
        });

        action
    }

    /// Render the bottom tab bar
    pub fn render_bottom_nav(&self, ui: &mut egui::Ui) -> ChromeAction {
        let mut action = ChromeAction::None;
        let tab_width = ui.available_width() / Tab::ALL.len() as f32;

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 0.0;

            for tab in Tab::ALL {
                let color = if tab == self.selected_tab {
                    ACCENT
                } else {
                    egui::Color32::GRAY
                };
                let text = egui::RichText::new(format!("{}\n{}", tab.icon(), tab.label()))
                    .size(12.0)
                    .color(color);
                if ui
                    .add(
                        egui::Button::new(text)
                            .frame(false)
                            .min_size(egui::vec2(tab_width, NAV_HEIGHT - 8.0)),
                    )
                    .clicked()
                {
                    action = ChromeAction::SelectTab(tab);
                }
            }
        });

        action
    }
}

/// Content area dimensions (for the card stack)
pub struct ContentArea {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl MobileChrome {
    /// Area left between header and tab bar
    pub fn content_area(&self) -> ContentArea {
        ContentArea {
            x: 0.0,
            y: HEADER_HEIGHT,
            width: self.screen_width,
            height: (self.screen_height - HEADER_HEIGHT - NAV_HEIGHT).max(0.0),
        }
    }
}
