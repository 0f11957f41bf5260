//! Banger Wheel native demo
//!
//! Usage: `banger-wheel [config.json] [seed]`
//!
//! Spins the wheel once through the same fixed-timestep loop a UI host would
//! run, then prints the outcome and the banger it unlocked.

use rand_pcg::Pcg32;

use banger_wheel::consts::SIM_DT;
use banger_wheel::wheel::{SpinController, SpinObserver, SpinOutcome, WheelFace};
use banger_wheel::{BangerCatalog, Progress, WheelConfig, progress};

/// Prints what the presentation layer would react to
#[derive(Default)]
struct ConsoleObserver {
    outcome: Option<SpinOutcome>,
}

impl SpinObserver for ConsoleObserver {
    fn on_spin_start(&mut self, _target_panel: usize) {
        println!("Spinning...");
    }

    fn on_haptic(&mut self) {
        log::debug!("*bzzt*");
    }

    fn on_spin_complete(&mut self, outcome: SpinOutcome) {
        self.outcome = Some(outcome);
    }

    fn on_spin_aborted(&mut self) {
        println!("Spin interrupted");
    }
}

/// PCG stream for the quote pick, kept apart from the spin stream of the same seed
const QUOTE_STREAM: u64 = 0xb4;

/// Quote RNG for a run; independent of the controller's draws
fn quote_rng(seed: u64) -> Pcg32 {
    Pcg32::new(seed, QUOTE_STREAM)
}

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();
    log::info!("Banger Wheel (native) starting...");

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> banger_wheel::Result<()> {
    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => WheelConfig::load_or_default(path),
        None => WheelConfig::default(),
    };
    let seed = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or_else(rand::random);
    log::info!("Wheel initialized with seed: {}", seed);

    let face = WheelFace::new(&config);
    for shape in &face.panels {
        log::debug!(
            "panel {}{}: {}",
            shape.panel.index,
            if shape.panel.is_rare { " (rare)" } else { "" },
            shape.path
        );
    }

    let catalog = BangerCatalog::builtin()?;
    let mut controller = SpinController::seeded(&config, seed)?;
    let mut observer = ConsoleObserver::default();

    controller.start_spin();
    controller.dispatch(&mut observer);

    // Frame loop: the controller only ever sees fixed steps
    let mut frames = 0u32;
    while controller.is_busy() {
        controller.tick(SIM_DT);
        frames += 1;
    }
    controller.dispatch(&mut observer);

    let Some(outcome) = observer.outcome else {
        println!("No outcome");
        return Ok(());
    };

    let mut rng = quote_rng(seed);
    let banger = catalog.for_outcome(outcome, &mut rng);

    let today = progress::day_number_from_unix_ms(
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as f64)
            .unwrap_or(0.0),
    );
    let mut progress = Progress::new();
    let streak = progress.increment_streak(today);
    progress.increment_total_viewed();

    println!(
        "Landed on panel {} after {} frames ({:.1}°){}",
        outcome.panel,
        frames,
        controller.rotation(),
        if outcome.rare { " ⭐ RARE" } else { "" }
    );
    println!("[{}] {}", banger.category.as_str(), banger.text);
    println!("Streak: {} day(s)", streak);
    Ok(())
}
