use clap::{Parser, ValueEnum};
use eframe::egui;

use swipe_cards::render::Screen;

mod app;

use app::{CardsApp, Overrides};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ScreenArg {
    /// Payment receipt and split cards, last card always stays
    Payments,
    /// Like/nope profile deck that can run empty
    Profiles,
}

impl From<ScreenArg> for Screen {
    fn from(arg: ScreenArg) -> Self {
        match arg {
            ScreenArg::Payments => Screen::Payments,
            ScreenArg::Profiles => Screen::Profiles,
        }
    }
}

/// Swipeable card stacks
#[derive(Debug, Parser)]
#[command(name = "swipe-cards", version, about)]
struct Args {
    /// Screen to mount at start
    #[arg(long, value_enum, default_value_t = ScreenArg::Payments)]
    screen: ScreenArg,

    /// Horizontal release distance needed to commit a swipe
    #[arg(long)]
    threshold: Option<f32>,

    /// Rotation is drag distance divided by this, in degrees
    #[arg(long)]
    rotation_divisor: Option<f32>,

    /// Exit animation length in milliseconds
    #[arg(long)]
    exit_ms: Option<u64>,

    /// Keep the last card from being swiped away (true/false)
    #[arg(long)]
    last_card_guard: Option<bool>,
}

impl Args {
    fn overrides(&self) -> Overrides {
        Overrides {
            threshold: self.threshold,
            rotation_divisor: self.rotation_divisor,
            exit_ms: self.exit_ms,
            last_card_guard: self.last_card_guard,
        }
    }
}

fn main() -> eframe::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let app = match CardsApp::new(args.screen.into(), args.overrides()) {
        Ok(app) => app,
        Err(e) => {
            log::error!("invalid swipe settings: {}", e);
            eprintln!("swipe-cards: {}", e);
            std::process::exit(2);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([400.0, 780.0])
            .with_min_inner_size([360.0, 640.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Swipe Cards",
        options,
        Box::new(move |_cc| Ok(Box::new(app))),
    )
}
