//! Fixed timestep session tick
//!
//! The only entry point that mutates [`SessionState`]. Host-side input and
//! timer callbacks collapse into one [`TickInput`] per tick; state changes
//! flow back out as [`SessionEvent`]s.

use super::collision::{actor_hits_pair, out_of_bounds};
use super::state::{SessionEvent, SessionPhase, SessionState};
use crate::consts::*;

/// Input flags for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Trigger the upward impulse (tap or space key)
    pub flap: bool,
    /// Request a manual pause
    pub pause: bool,
    /// Request a resume from manual pause
    pub resume: bool,
}

/// Advance the session by one fixed timestep
pub fn tick(state: &mut SessionState, input: &TickInput, dt: f32) -> Vec<SessionEvent> {
    let mut events = Vec::new();

    match state.phase {
        SessionPhase::Countdown => run_countdown(state, &mut events),
        SessionPhase::Playing => {
            if input.pause {
                state.phase = SessionPhase::Paused;
            } else {
                run_playing(state, input, dt, &mut events);
            }
        }
        SessionPhase::Paused => {
            // Resume re-runs the countdown gate rather than jumping straight
            // back into play; score and positions stay frozen meanwhile.
            if input.resume {
                state.countdown_ticks = COUNTDOWN_SECONDS * TICKS_PER_SECOND;
                state.phase = SessionPhase::Countdown;
                events.push(SessionEvent::CountdownTick(state.countdown_seconds()));
            }
        }
        SessionPhase::GameOver => run_game_over(state, &mut events),
    }

    events
}

fn run_countdown(state: &mut SessionState, events: &mut Vec<SessionEvent>) {
    let before = state.countdown_seconds();
    state.countdown_ticks = state.countdown_ticks.saturating_sub(1);

    if state.countdown_ticks == 0 {
        state.phase = SessionPhase::Playing;
        events.push(SessionEvent::CountdownFinished);
    } else if state.countdown_seconds() < before {
        events.push(SessionEvent::CountdownTick(state.countdown_seconds()));
    }
}

fn run_playing(
    state: &mut SessionState,
    input: &TickInput,
    dt: f32,
    events: &mut Vec<SessionEvent>,
) {
    // The action gate: flap input is only honored here, never in any other
    // phase, and it overwrites whatever vertical velocity the actor had.
    if input.flap {
        state.actor.flap();
        events.push(SessionEvent::Flapped);
    }

    state.time_ticks += 1;
    state.scroll_offset += BACKGROUND_SCROLL_SPEED * dt;

    // Actor vertical motion
    state.actor.vel_y += GRAVITY * dt;
    state.actor.pos.y += state.actor.vel_y * dt;

    // Scroll obstacles, recycle the ones that left the playfield, and score
    // the recycled pairs
    state.pool.advance(SCROLL_SPEED * dt);
    let tier = state.progress.tier();
    let recycled = state.pool.recycle(tier, &mut state.rng);
    if recycled > 0 {
        let raised = state.progress.record_pass(recycled);
        events.push(SessionEvent::ObstaclePassed(state.progress.score()));
        if let Some(tier) = raised {
            events.push(SessionEvent::DifficultyRaised(tier));
        }
        if state.progress.note_best() {
            events.push(SessionEvent::NewBestScore(state.progress.best()));
        }
    }

    // Bounds and collision run in the same tick as recycling: scoring and
    // game over are not mutually exclusive.
    let bounds = state.actor.bounds();
    let collided = state.pool.pairs().iter().any(|p| actor_hits_pair(&bounds, p));
    if collided || out_of_bounds(&bounds) {
        enter_game_over(state, events);
    }
}

fn enter_game_over(state: &mut SessionState, events: &mut Vec<SessionEvent>) {
    state.phase = SessionPhase::GameOver;
    state.restart_ticks = (RESTART_DELAY_SECONDS * TICKS_PER_SECOND as f32) as u32;
    // A run can end exactly on a new best, so check once more here
    if state.progress.note_best() {
        events.push(SessionEvent::NewBestScore(state.progress.best()));
    }
    events.push(SessionEvent::GameOver {
        score: state.progress.score(),
    });
}

fn run_game_over(state: &mut SessionState, events: &mut Vec<SessionEvent>) {
    state.restart_ticks = state.restart_ticks.saturating_sub(1);
    if state.restart_ticks == 0 {
        state.restart();
        events.push(SessionEvent::Restarted);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::SessionState;

    fn ticks_for(secs: f32) -> u32 {
        (secs * TICKS_PER_SECOND as f32) as u32
    }

    fn run(state: &mut SessionState, input: &TickInput, n: u32) -> Vec<SessionEvent> {
        let mut all = Vec::new();
        for _ in 0..n {
            all.extend(tick(state, input, SIM_DT));
        }
        all
    }

    /// Drive the session through the initial countdown into Playing
    fn playing_state() -> SessionState {
        let mut state = SessionState::new(12345, 0);
        run(
            &mut state,
            &TickInput::default(),
            COUNTDOWN_SECONDS * TICKS_PER_SECOND,
        );
        assert_eq!(state.phase, SessionPhase::Playing);
        state
    }

    /// Naive hover policy that keeps the actor around its spawn height
    fn hover_input(state: &SessionState) -> TickInput {
        TickInput {
            flap: state.actor.pos.y > ACTOR_START_Y && state.actor.vel_y > 0.0,
            ..Default::default()
        }
    }

    /// Widen every gap to the full playfield so nothing can collide
    fn open_all_gaps(state: &mut SessionState) {
        for pair in state.pool.pairs_mut() {
            pair.upper_y = EDGE_MARGIN as f32;
            pair.lower_y = PLAYFIELD_HEIGHT - EDGE_MARGIN as f32;
        }
    }

    #[test]
    fn test_countdown_gates_play() {
        let mut state = SessionState::new(1, 0);
        assert_eq!(state.phase, SessionPhase::Countdown);
        assert_eq!(state.countdown_seconds(), COUNTDOWN_SECONDS);

        let events = run(
            &mut state,
            &TickInput::default(),
            COUNTDOWN_SECONDS * TICKS_PER_SECOND,
        );
        assert_eq!(state.phase, SessionPhase::Playing);
        assert!(events.contains(&SessionEvent::CountdownTick(2)));
        assert!(events.contains(&SessionEvent::CountdownTick(1)));
        assert!(events.contains(&SessionEvent::CountdownFinished));
        // Nothing moved while the gate was closed
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_flap_ignored_outside_playing() {
        let mut state = SessionState::new(1, 0);
        let input = TickInput {
            flap: true,
            ..Default::default()
        };
        let events = tick(&mut state, &input, SIM_DT);
        assert_eq!(state.actor.vel_y, 0.0);
        assert!(!events.contains(&SessionEvent::Flapped));
    }

    #[test]
    fn test_flap_overwrites_vertical_velocity() {
        let mut state = playing_state();
        state.actor.vel_y = 250.0; // falling fast
        let input = TickInput {
            flap: true,
            ..Default::default()
        };
        let events = tick(&mut state, &input, SIM_DT);
        assert!(events.contains(&SessionEvent::Flapped));
        // Impulse replaced the old velocity before this tick's gravity step
        let expected = -FLAP_IMPULSE + GRAVITY * SIM_DT;
        assert!((state.actor.vel_y - expected).abs() < 1e-3);
    }

    #[test]
    fn test_first_recycled_pair_scores_one() {
        let mut state = playing_state();
        let mut passed = None;
        for _ in 0..2_000 {
            open_all_gaps(&mut state);
            let input = hover_input(&state);
            let events = tick(&mut state, &input, SIM_DT);
            if let Some(SessionEvent::ObstaclePassed(score)) = events
                .iter()
                .find(|e| matches!(e, SessionEvent::ObstaclePassed(_)))
            {
                passed = Some(*score);
                break;
            }
        }
        assert_eq!(passed, Some(1));
        assert_eq!(state.progress.score(), 1);
        assert_eq!(state.phase, SessionPhase::Playing);
    }

    #[test]
    fn test_out_of_bounds_triggers_game_over_then_restart() {
        let mut state = playing_state();

        // Without flapping, gravity carries the actor out of the playfield
        let mut events = Vec::new();
        for _ in 0..ticks_for(2.0) {
            events.extend(tick(&mut state, &TickInput::default(), SIM_DT));
            if state.phase == SessionPhase::GameOver {
                break;
            }
        }
        assert_eq!(state.phase, SessionPhase::GameOver);
        assert!(
            events
                .iter()
                .any(|e| matches!(e, SessionEvent::GameOver { .. }))
        );

        // Pause input is ignored while the restart is pending
        let input = TickInput {
            pause: true,
            ..Default::default()
        };
        tick(&mut state, &input, SIM_DT);
        assert_eq!(state.phase, SessionPhase::GameOver);

        // The restart fires after the fixed delay and resets the session
        let events = run(
            &mut state,
            &TickInput::default(),
            ticks_for(RESTART_DELAY_SECONDS),
        );
        assert!(events.contains(&SessionEvent::Restarted));
        assert_eq!(state.phase, SessionPhase::Countdown);
        assert_eq!(state.progress.score(), 0);
    }

    #[test]
    fn test_best_score_survives_restart() {
        let mut state = playing_state();
        state.progress.record_pass(7);

        let events = run(&mut state, &TickInput::default(), ticks_for(2.0));
        assert!(events.contains(&SessionEvent::NewBestScore(7)));

        run(
            &mut state,
            &TickInput::default(),
            ticks_for(RESTART_DELAY_SECONDS),
        );
        assert_eq!(state.progress.score(), 0);
        assert_eq!(state.progress.best(), 7);
    }

    #[test]
    fn test_pause_freezes_and_resume_reenters_countdown() {
        let mut state = playing_state();
        for _ in 0..30 {
            let input = hover_input(&state);
            tick(&mut state, &input, SIM_DT);
        }
        assert_eq!(state.phase, SessionPhase::Playing);
        let score = state.progress.score();
        let actor_y = state.actor.pos.y;
        let xs: Vec<f32> = state.pool.pairs().iter().map(|p| p.x).collect();

        tick(
            &mut state,
            &TickInput {
                pause: true,
                ..Default::default()
            },
            SIM_DT,
        );
        assert_eq!(state.phase, SessionPhase::Paused);

        // Nothing moves while paused
        run(&mut state, &TickInput::default(), 120);
        assert_eq!(state.actor.pos.y, actor_y);
        let frozen: Vec<f32> = state.pool.pairs().iter().map(|p| p.x).collect();
        assert_eq!(xs, frozen);

        // Resume goes through the countdown gate, not straight to playing
        let events = tick(
            &mut state,
            &TickInput {
                resume: true,
                ..Default::default()
            },
            SIM_DT,
        );
        assert_eq!(state.phase, SessionPhase::Countdown);
        assert!(events.contains(&SessionEvent::CountdownTick(COUNTDOWN_SECONDS)));
        assert_eq!(state.progress.score(), score);
        assert_eq!(state.actor.pos.y, actor_y);
    }

    #[test]
    fn test_collision_with_obstacle_ends_run() {
        let mut state = playing_state();
        // Drop a pair whose gap excludes the actor right on top of it
        {
            let pair = &mut state.pool.pairs_mut()[0];
            pair.x = ACTOR_START_X;
            pair.upper_y = EDGE_MARGIN as f32;
            pair.lower_y = ACTOR_START_Y - 50.0;
        }
        let events = tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.phase, SessionPhase::GameOver);
        assert!(
            events
                .iter()
                .any(|e| matches!(e, SessionEvent::GameOver { .. }))
        );
    }

    #[test]
    fn test_recycle_and_collision_in_same_tick_both_apply() {
        let mut state = playing_state();
        {
            let pairs = state.pool.pairs_mut();
            // This pair's right edge crosses the boundary on the next tick
            pairs[0].x = -57.0;
            // And this one collides with the actor on that same tick
            pairs[1].x = ACTOR_START_X;
            pairs[1].upper_y = EDGE_MARGIN as f32;
            pairs[1].lower_y = ACTOR_START_Y - 50.0;
        }

        let events = tick(&mut state, &TickInput::default(), SIM_DT);
        assert!(events.contains(&SessionEvent::ObstaclePassed(1)));
        assert!(
            events
                .iter()
                .any(|e| matches!(e, SessionEvent::GameOver { score: 1 }))
        );
        assert_eq!(state.phase, SessionPhase::GameOver);
        assert_eq!(state.progress.score(), 1);
    }

    #[test]
    fn test_determinism() {
        // Two sessions with the same seed and inputs stay identical, even
        // across a game over and restart
        let mut a = SessionState::new(777, 0);
        let mut b = SessionState::new(777, 0);
        for i in 0..600u32 {
            let input = TickInput {
                flap: i % 37 == 0,
                ..Default::default()
            };
            let ea = tick(&mut a, &input, SIM_DT);
            let eb = tick(&mut b, &input, SIM_DT);
            assert_eq!(ea, eb);
        }
        assert_eq!(a.phase, b.phase);
        assert_eq!(a.actor.pos, b.actor.pos);
        assert_eq!(a.pool.pairs(), b.pool.pairs());
        assert_eq!(a.progress.score(), b.progress.score());
    }
}
