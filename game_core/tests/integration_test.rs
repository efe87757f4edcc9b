use game_core::*;
use glam::Vec2;

const FRAME: f32 = 1.0 / 64.0;

/// Start a session and put it into play
fn playing(config: Config) -> Session {
    let mut session = Session::new(config, 42);
    match session.config.start_gate {
        StartGate::AnyKey => session.on_key_down(Key::Other),
        StartGate::Countdown(secs) => {
            let frames = (secs / FRAME).ceil() as usize;
            for _ in 0..frames {
                session.on_frame(FRAME);
            }
        }
    }
    assert_eq!(session.phase(), SessionPhase::Playing);
    session
}

/// Replace every ball in play with `balls`
fn set_balls(session: &mut Session, balls: &[Ball]) {
    let existing: Vec<hecs::Entity> = session
        .world
        .query::<&Ball>()
        .iter()
        .map(|(e, _b)| e)
        .collect();
    for entity in existing {
        session.world.despawn(entity).unwrap();
    }
    for ball in balls {
        create_ball(&mut session.world, *ball);
    }
}

fn set_paddle_y(session: &mut Session, side: PaddleSide, y: f32) {
    for (_e, paddle) in session.world.query_mut::<&mut Paddle>() {
        if paddle.side == side {
            paddle.y = y;
        }
    }
}

fn ball(x: f32, y: f32, vx: f32, vy: f32) -> Ball {
    Ball::new(Vec2::new(x, y), Vec2::new(vx, vy), Params::BALL_SIZE)
}

#[test]
fn test_right_exit_scores_and_respawns_at_center() {
    let mut session = playing(Config::new());
    set_paddle_y(&mut session, PaddleSide::Right, 100.0);
    set_balls(&mut session, &[ball(790.0, 300.0, 3.0, 0.0)]);

    session.on_frame(FRAME);

    assert_eq!(session.score.value, 1);
    assert!(session.events.player_scored);
    assert!(session.events.ball_respawned);
    let balls = session.balls();
    assert_eq!(balls.len(), 1);
    assert_eq!(balls[0].pos, Vec2::new(400.0, 300.0));
    assert_eq!(balls[0].vel.abs(), Vec2::new(3.0, 3.0));
}

#[test]
fn test_paddle_hit_speeds_ball_up_by_increment() {
    let mut session = playing(Config::new());
    set_balls(&mut session, &[ball(772.0, 300.0, 3.0, 3.0)]);

    session.on_frame(FRAME);

    assert!(session.events.ball_hit_paddle);
    let hit = session.balls()[0];
    assert!((hit.vel.x - -3.1).abs() < 1e-5);
    assert!((hit.vel.y - 3.1).abs() < 1e-5);
}

#[test]
fn test_speed_grows_monotonically_over_a_rally() {
    let mut config = Config::new();
    config.enabled_events.clear();
    let mut session = playing(config);
    set_balls(&mut session, &[ball(400.0, 300.0, 3.0, 0.0)]);

    let mut last_speed = 3.0;
    let mut hits = 0;
    for _ in 0..2000 {
        // Keep the player paddle level with the ball so the rally never ends
        let y = session.balls()[0].pos.y;
        set_paddle_y(&mut session, PaddleSide::Right, y);
        session.on_frame(FRAME);
        if session.events.ball_hit_paddle {
            let speed = session.balls()[0].vel.x.abs();
            assert!(speed > last_speed);
            last_speed = speed;
            hits += 1;
        }
        assert!(!session.events.player_scored && !session.events.player_missed);
    }
    assert!(hits >= 4, "expected a rally, got {hits} hits");
}

#[test]
fn test_left_exit_countdown_variant_goes_negative() {
    let mut session = playing(Config::countdown_variant());
    set_balls(&mut session, &[ball(8.0, 500.0, -3.0, 0.0)]);

    session.on_frame(FRAME);

    assert_eq!(session.score.value, -1);
    assert!(session.events.player_missed);
    assert!(session.scene().has_text("Lol you're such a noob"));
}

#[test]
fn test_left_exit_key_start_variant_floors_at_zero() {
    let mut session = playing(Config::key_start_variant());
    set_balls(&mut session, &[ball(8.0, 500.0, -3.0, 0.0)]);

    session.on_frame(FRAME);

    assert_eq!(session.score.value, 0);
    assert!(session.messages.miss.is_some());
}

#[test]
fn test_miss_message_clears_exactly_after_two_seconds() {
    let mut session = playing(Config::new());
    set_balls(&mut session, &[ball(8.0, 500.0, -3.0, 0.0)]);

    session.on_frame(FRAME);
    let set_at = session.messages.miss.as_ref().expect("taunt").set_at;

    let frames_in_two_seconds = (2.0 / FRAME) as usize;
    for _ in 0..frames_in_two_seconds - 1 {
        session.on_frame(FRAME);
        assert!(session.messages.miss.is_some(), "cleared early at {}", session.time.now - set_at);
    }
    session.on_frame(FRAME);
    assert!(session.messages.miss.is_none());
}

#[test]
fn test_at_least_one_ball_every_frame() {
    let mut config = Config::new();
    config.event_interval = 1.0;
    let mut session = playing(config);

    for frame in 0..20_000 {
        match frame % 300 {
            0 => session.on_key_down(Key::Up),
            100 => session.on_key_up(Key::Up),
            150 => session.on_key_down(Key::Down),
            250 => session.on_key_up(Key::Down),
            _ => {}
        }
        session.on_frame(FRAME);
        assert!(session.ball_count() >= 1, "no ball after frame {frame}");
        if session.phase() != SessionPhase::Playing {
            break;
        }
    }
}

#[test]
fn test_events_fire_on_cadence_without_repeats() {
    let mut config = Config::key_start_variant();
    config.win_score = i32::MAX;
    let mut session = playing(config);
    let mut fired = Vec::new();

    // Five minutes of play
    for _ in 0..(300.0 / FRAME) as usize {
        session.on_frame(FRAME);
        if let Some(event) = session.events.unfair_event {
            fired.push((session.time.now, event));
        }
    }

    assert_eq!(fired.len(), 15, "one event every 20 seconds");
    for pair in fired.windows(2) {
        assert_ne!(pair[0].1, pair[1].1, "event repeated back to back");
        assert!((pair[1].0 - pair[0].0 - 20.0).abs() < 0.05);
    }
}

#[test]
fn test_event_sets_message_and_undo_restores_paddle() {
    let mut config = Config::new();
    config.enabled_events = vec![UnfairEvent::FreezePaddle];
    let mut session = playing(config);

    session.trigger_random_event();
    assert_eq!(session.events.unfair_event, Some(UnfairEvent::FreezePaddle));
    assert!(session.scene().has_text("Paddle frozen!"));

    let start = session.paddle(PaddleSide::Right).unwrap().y;
    session.on_key_down(Key::Up);
    session.on_frame(FRAME);
    assert_eq!(session.paddle(PaddleSide::Right).unwrap().y, start, "frozen");

    for _ in 0..(5.0 / FRAME) as usize {
        session.score.value = 0;
        session.on_frame(FRAME);
    }
    let paddle = session.paddle(PaddleSide::Right).unwrap();
    assert_eq!(paddle.speed, Params::PADDLE_SPEED);
    assert!(!session.scene().has_text("Paddle frozen!"));

    session.on_frame(FRAME);
    assert!(session.paddle(PaddleSide::Right).unwrap().y > paddle.y, "moving again");
}

#[test]
fn test_repeated_shorten_extends_instead_of_stacking() {
    let mut config = Config::countdown_variant();
    config.enabled_events = vec![UnfairEvent::ShortenPaddle, UnfairEvent::SpeedUpBall];
    let mut session = playing(config);

    session.trigger_random_event();
    session.trigger_random_event();
    session.trigger_random_event();
    assert_eq!(session.last_event(), Some(session.events.unfair_event.unwrap()));

    let height = session.paddle(PaddleSide::Right).unwrap().height;
    let pending = session.timers.is_pending(DeferredEffect::RestorePaddleHeight);
    assert_eq!(pending, height == 50.0);
    assert!(session.timers.len() <= 1);
}

#[test]
fn test_win_shows_banner_and_closes_after_delay() {
    let mut session = playing(Config::key_start_variant());
    session.score.value = 9;
    set_paddle_y(&mut session, PaddleSide::Right, 100.0);
    set_balls(&mut session, &[ball(790.0, 300.0, 3.0, 0.0)]);

    session.on_frame(FRAME);

    assert_eq!(session.phase(), SessionPhase::Won);
    assert_eq!(session.events.phase_changed, Some(SessionPhase::Won));
    assert!(session.scene().has_text("You win!"));

    let frozen = session.balls();
    for _ in 0..(4.9 / FRAME) as usize {
        session.on_frame(FRAME);
    }
    assert_eq!(session.phase(), SessionPhase::Won);
    assert_eq!(session.balls()[0].pos, frozen[0].pos, "play stops after a win");

    let mut closed = false;
    for _ in 0..(0.2 / FRAME) as usize {
        session.on_frame(FRAME);
        closed |= session.events.session_closed;
    }
    assert!(closed);
    assert!(session.is_closed());
}

#[test]
fn test_countdown_variant_plays_on_past_win() {
    let mut session = playing(Config::countdown_variant());
    session.score.value = 9;
    set_paddle_y(&mut session, PaddleSide::Right, 100.0);
    set_balls(&mut session, &[ball(790.0, 300.0, 3.0, 0.0)]);

    session.on_frame(FRAME);
    assert_eq!(session.score.value, 10);
    assert_eq!(session.phase(), SessionPhase::Playing);
    assert_eq!(session.events.phase_changed, None);
    assert!(session.scene().has_text("You win!"));

    let respawned = session.balls()[0].pos;
    for _ in 0..64 {
        session.on_frame(FRAME);
    }
    assert_ne!(session.balls()[0].pos, respawned, "play continues after a win");

    // Banner follows the score rather than latching
    session.score.value = 9;
    assert!(!session.scene().has_text("You win!"));
    session.score.value = 12;
    assert!(session.scene().has_text("You win!"));

    for _ in 0..(30.0 / FRAME) as usize {
        session.on_frame(FRAME);
    }
    assert_eq!(session.phase(), SessionPhase::Playing);
    assert!(!session.is_closed());
}

#[test]
fn test_undo_after_win_is_harmless() {
    let mut config = Config::key_start_variant();
    config.enabled_events = vec![UnfairEvent::ShortenPaddle];
    config.auto_close_delay = None;
    let mut session = playing(config);
    session.trigger_random_event();
    assert_eq!(session.paddle(PaddleSide::Right).unwrap().height, 50.0);

    session.score.value = 9;
    set_paddle_y(&mut session, PaddleSide::Right, 100.0);
    set_balls(&mut session, &[ball(790.0, 300.0, 3.0, 0.0)]);
    session.on_frame(FRAME);
    assert_eq!(session.phase(), SessionPhase::Won);

    for _ in 0..(11.0 / FRAME) as usize {
        session.on_frame(FRAME);
    }
    assert_eq!(session.paddle(PaddleSide::Right).unwrap().height, 100.0);
    assert!(session.timers.is_empty());
}

#[test]
fn test_effect_scheduled_mid_frame_lasts_full_duration() {
    let mut config = Config::key_start_variant();
    config.enabled_events = vec![UnfairEvent::ShortenPaddle];
    config.event_interval = 1.0;
    config.win_score = i32::MAX;
    let mut session = playing(config);

    let mut shortened_at = None;
    let mut restored_at = None;
    for _ in 0..(20.0 / FRAME) as usize {
        session.on_frame(FRAME);
        if session.events.unfair_event == Some(UnfairEvent::ShortenPaddle) {
            shortened_at = Some(session.time.now);
        }
        let height = session.paddle(PaddleSide::Right).unwrap().height;
        if shortened_at.is_some() && restored_at.is_none() && height == 100.0 {
            restored_at = Some(session.time.now);
        }
    }

    let held = restored_at.expect("restored") - shortened_at.expect("shortened");
    assert!((held - 10.0).abs() < 1e-4, "held for {held}s");
}

#[test]
fn test_auto_close_waits_full_delay() {
    let mut session = playing(Config::key_start_variant());
    session.score.value = 9;
    set_paddle_y(&mut session, PaddleSide::Right, 100.0);
    set_balls(&mut session, &[ball(790.0, 300.0, 3.0, 0.0)]);
    session.on_frame(FRAME);
    let won_at = session.time.now;

    while !session.is_closed() {
        session.on_frame(FRAME);
    }
    assert!((session.time.now - won_at - 5.0).abs() < 1e-4);
}

#[test]
fn test_countdown_holds_play_for_five_seconds() {
    let mut session = Session::new(Config::countdown_variant(), 7);
    let start = session.balls()[0].pos;

    for _ in 0..(4.9 / FRAME) as usize {
        session.on_frame(FRAME);
    }
    assert_eq!(session.phase(), SessionPhase::Countdown);
    assert_eq!(session.balls()[0].pos, start);

    session.on_key_down(Key::Other);
    assert_eq!(session.phase(), SessionPhase::Countdown, "keys do not skip the countdown");

    for _ in 0..(0.2 / FRAME) as usize {
        session.on_frame(FRAME);
    }
    assert_eq!(session.phase(), SessionPhase::Playing);
    session.on_frame(FRAME);
    assert_ne!(session.balls()[0].pos, start);
}

#[test]
fn test_same_seed_same_game() {
    let mut a = playing(Config::new());
    let mut b = playing(Config::new());
    for _ in 0..3000 {
        a.on_frame(FRAME);
        b.on_frame(FRAME);
    }
    assert_eq!(a.score, b.score);
    let pos = |s: &Session| s.balls().iter().map(|b| b.pos).collect::<Vec<_>>();
    assert_eq!(pos(&a), pos(&b));
}
