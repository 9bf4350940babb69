//! Sky Dash entry point
//!
//! The library is platform-agnostic; on native builds this binary runs a
//! headless demo session with a naive hover policy so the simulation can be
//! watched from a terminal.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use sky_dash::BestScore;
    use sky_dash::consts::{ACTOR_START_Y, SIM_DT, TICKS_PER_SECOND};
    use sky_dash::sim::{SessionEvent, SessionPhase, SessionState, TickInput, tick};

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    let mut best = BestScore::load();
    let mut state = SessionState::new(seed, best.value());
    log::info!("starting demo session (seed {seed})");

    // Three minutes of simulated play
    let total_ticks = 3 * 60 * TICKS_PER_SECOND;
    let mut runs = 0u32;
    for _ in 0..total_ticks {
        let flap = state.phase == SessionPhase::Playing
            && state.actor.vel_y > 0.0
            && state.actor.pos.y > ACTOR_START_Y;
        let input = TickInput {
            flap,
            ..Default::default()
        };

        for event in tick(&mut state, &input, SIM_DT) {
            match event {
                SessionEvent::ObstaclePassed(score) => log::info!("score: {score}"),
                SessionEvent::DifficultyRaised(tier) => {
                    log::info!("difficulty: {}", tier.as_str())
                }
                SessionEvent::NewBestScore(score) => {
                    best.record(score);
                }
                SessionEvent::GameOver { score } => {
                    runs += 1;
                    log::info!("run {runs} over at score {score}");
                }
                _ => {}
            }
        }
    }

    log::info!("demo finished after {runs} runs, best score {}", best.value());
}

#[cfg(target_arch = "wasm32")]
fn main() {}
