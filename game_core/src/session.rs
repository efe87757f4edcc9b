//! Game Session
//!
//! Owns every piece of mutable game state and exposes the three callbacks a
//! host drives: [`Session::on_frame`], [`Session::scene`] and the key
//! handlers. All timing is advanced from `on_frame`, so deferred effects can
//! never fire outside a frame.

use glam::Vec2;
use hecs::World;

use crate::systems::{apply_key_down, apply_key_up, apply_unfair_event, restore_paddle};
use crate::{
    create_ball, create_paddle, step, Ball, Color, Config, DeferredEffect, EventDirector, Events,
    GameRng, Key, Messages, Paddle, PaddleSide, Params, Scene, Score, SessionAction, SessionFsm,
    SessionPhase, StartGate, Time, Timers, TransitionResult,
};

pub struct Session {
    pub world: World,
    pub time: Time,
    pub config: Config,
    pub score: Score,
    pub events: Events,
    pub messages: Messages,
    pub timers: Timers,
    pub rng: GameRng,
    director: EventDirector,
    fsm: SessionFsm,
    countdown_elapsed: f32,
}

impl Session {
    pub fn new(config: Config, seed: u64) -> Self {
        let mut world = World::new();
        let mut rng = GameRng::new(seed);

        create_paddle(&mut world, &config, PaddleSide::Left);
        create_paddle(&mut world, &config, PaddleSide::Right);

        let ball = Ball::launch(
            config.ball_spawn(),
            config.ball_speed_initial,
            config.ball_size,
            &mut rng,
        );
        create_ball(&mut world, ball);

        let fsm = SessionFsm::new(config.start_gate);
        Self {
            world,
            time: Time::new(0.0, 0.0),
            config,
            score: Score::new(),
            events: Events::new(),
            messages: Messages::new(),
            timers: Timers::new(),
            rng,
            director: EventDirector::new(),
            fsm,
            countdown_elapsed: 0.0,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.fsm.phase()
    }

    pub fn is_closed(&self) -> bool {
        self.phase() == SessionPhase::Closed
    }

    pub fn last_event(&self) -> Option<crate::UnfairEvent> {
        self.director.last()
    }

    /// Advance the session by `dt` seconds
    pub fn on_frame(&mut self, dt: f32) {
        self.events.clear();
        if self.is_closed() {
            return;
        }

        let dt = dt.clamp(0.0, Params::MAX_DT);
        self.time.dt = dt;
        self.time.now += dt;

        // Timers first: an effect scheduled below starts counting next frame
        for effect in self.timers.tick(dt) {
            self.fire(effect);
        }

        match self.phase() {
            SessionPhase::Countdown => self.tick_countdown(dt),
            SessionPhase::Playing => self.tick_playing(dt),
            SessionPhase::WaitingForKey | SessionPhase::Won | SessionPhase::Closed => {}
        }

        self.messages.expire(self.time.now, self.config.message_duration);
    }

    fn tick_countdown(&mut self, dt: f32) {
        let StartGate::Countdown(total) = self.config.start_gate else {
            return;
        };
        self.countdown_elapsed += dt;
        if self.countdown_elapsed >= total {
            self.apply(SessionAction::CountdownDone);
        }
    }

    fn tick_playing(&mut self, dt: f32) {
        step(
            &mut self.world,
            &self.time,
            &self.config,
            &mut self.score,
            &mut self.messages,
            &mut self.events,
            &mut self.rng,
        );

        if self.director.tick(dt, self.config.event_interval) {
            self.trigger_random_event();
        }

        if self.config.freeze_on_win && self.score.has_won(self.config.win_score) {
            self.apply(SessionAction::ReachedWinScore);
            if let Some(delay) = self.config.auto_close_delay {
                self.timers.schedule(DeferredEffect::CloseSession, delay);
            }
        }
    }

    /// Pick and apply one unfair event, never the same as last time
    pub fn trigger_random_event(&mut self) {
        let Some(event) = self
            .director
            .choose(&self.config.enabled_events, &mut self.rng)
        else {
            return;
        };
        apply_unfair_event(
            &mut self.world,
            event,
            &self.config,
            &mut self.rng,
            &mut self.timers,
        );
        self.messages.show_event(event.message(), self.time.now);
        self.events.unfair_event = Some(event);
    }

    fn fire(&mut self, effect: DeferredEffect) {
        match effect {
            DeferredEffect::CloseSession => self.close(),
            _ => restore_paddle(&mut self.world, effect, &self.config),
        }
    }

    fn apply(&mut self, action: SessionAction) -> TransitionResult {
        let result = self.fsm.transition(action);
        if result.success {
            self.events.phase_changed = Some(result.to);
            if result.to == SessionPhase::Closed {
                self.events.session_closed = true;
            }
        }
        result
    }

    /// Close the session, as when the window is closed
    pub fn close(&mut self) {
        self.apply(SessionAction::Close);
    }

    pub fn on_key_down(&mut self, key: Key) {
        if self.fsm.can_transition(SessionAction::KeyPressed) {
            self.apply(SessionAction::KeyPressed);
        }
        apply_key_down(&mut self.world, key);
    }

    pub fn on_key_up(&mut self, key: Key) {
        apply_key_up(&mut self.world, key);
    }

    pub fn balls(&self) -> Vec<Ball> {
        self.world.query::<&Ball>().iter().map(|(_e, b)| *b).collect()
    }

    pub fn ball_count(&self) -> usize {
        self.world.query::<&Ball>().iter().count()
    }

    pub fn paddle(&self, side: PaddleSide) -> Option<Paddle> {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| *p)
    }

    /// Seconds shown by the pre-game countdown
    pub fn countdown_display(&self) -> Option<u32> {
        match (self.phase(), self.config.start_gate) {
            (SessionPhase::Countdown, StartGate::Countdown(total)) => {
                Some((total - self.countdown_elapsed.floor()).max(0.0) as u32)
            }
            _ => None,
        }
    }

    /// Everything the host should draw this frame
    pub fn scene(&self) -> Scene {
        let mut scene = Scene::new();
        let config = &self.config;
        let center = config.ball_spawn();

        for ball in self.balls() {
            scene.circle(ball.pos, ball.half_size(), Color::WHITE);
        }

        for (_e, paddle) in self.world.query::<&Paddle>().iter() {
            let alpha = if paddle.visible { 1.0 } else { 0.0 };
            scene.rect(
                Vec2::new(config.paddle_x(paddle.side), paddle.y),
                Vec2::new(config.paddle_width, paddle.height),
                Color::WHITE.with_alpha(alpha),
            );
        }

        scene.text(
            format!("Score: {}", self.score.value),
            Vec2::new(center.x, config.field_height - 50.0),
            24.0,
            Color::WHITE,
        );

        if let Some(miss) = &self.messages.miss {
            scene.text(miss.text.clone(), center, 24.0, Color::RED);
        }
        if let Some(event) = &self.messages.event {
            scene.text(
                event.text.clone(),
                center - Vec2::new(0.0, 50.0),
                24.0,
                Color::ORANGE,
            );
        }

        if let Some(secs) = self.countdown_display() {
            scene.text(
                format!("Starting in: {secs}"),
                center + Vec2::new(0.0, 50.0),
                24.0,
                Color::GREEN,
            );
        } else if self.phase() == SessionPhase::WaitingForKey {
            scene.text(
                "Press any key to start",
                center + Vec2::new(0.0, 50.0),
                24.0,
                Color::GREEN,
            );
        }
        if self.fsm.is_pre_game() {
            scene.text(
                format!("Get a score of {} to win!", config.win_score),
                center + Vec2::new(0.0, 80.0),
                24.0,
                Color::YELLOW,
            );
        }

        // Without a freeze the banner tracks the score and can disappear again
        let won = matches!(self.phase(), SessionPhase::Won | SessionPhase::Closed)
            || (self.fsm.is_playing() && self.score.has_won(config.win_score));
        if won {
            scene.text(
                "You win!",
                center + Vec2::new(0.0, 100.0),
                36.0,
                Color::YELLOW,
            );
        }

        scene
    }
}
