use glam::Vec2;

use crate::{PaddleSide, Params, UnfairEvent};

/// How a session leaves its pre-game phase
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StartGate {
    /// Play begins automatically after this many seconds
    Countdown(f32),
    /// Play begins on the first key press
    AnyKey,
}

const NOOB: &str = "Lol you're such a noob";

const TAUNTS: &[&str] = &[
    NOOB,
    "Did you even try?",
    "My grandma plays better",
    "Skill issue",
    "Were you looking at the ball?",
];

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub field_width: f32,
    pub field_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_inset: f32,
    pub paddle_speed: f32,
    pub ai_step: f32,
    pub ball_size: f32,
    pub ball_speed_initial: f32,
    pub ball_speed_increment: f32,
    pub win_score: i32,
    pub message_duration: f32,
    pub start_gate: StartGate,
    pub event_interval: f32,
    pub clamp_score: bool,
    pub auto_close_delay: Option<f32>,
    /// Stop play once the win score is reached
    pub freeze_on_win: bool,
    pub enabled_events: Vec<UnfairEvent>,
    pub miss_messages: Vec<&'static str>,
    pub shorten_duration: f32,
    pub hide_duration: f32,
    pub freeze_duration: f32,
    pub speed_up_factor: f32,
    pub extra_balls: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self::key_start_variant()
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    fn base() -> Self {
        Self {
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_inset: Params::PADDLE_INSET,
            paddle_speed: Params::PADDLE_SPEED,
            ai_step: Params::AI_STEP,
            ball_size: Params::BALL_SIZE,
            ball_speed_initial: Params::BALL_SPEED_INITIAL,
            ball_speed_increment: Params::BALL_SPEED_INCREMENT,
            win_score: Params::WIN_SCORE,
            message_duration: Params::MESSAGE_DURATION,
            start_gate: StartGate::AnyKey,
            event_interval: Params::EVENT_INTERVAL_KEY_START,
            clamp_score: true,
            auto_close_delay: Some(Params::AUTO_CLOSE_DELAY),
            freeze_on_win: true,
            enabled_events: UnfairEvent::ALL.to_vec(),
            miss_messages: TAUNTS.to_vec(),
            shorten_duration: Params::SHORTEN_DURATION,
            hide_duration: Params::HIDE_DURATION,
            freeze_duration: Params::FREEZE_DURATION,
            speed_up_factor: Params::SPEED_UP_FACTOR,
            extra_balls: Params::EXTRA_BALLS,
        }
    }

    /// Variant A: 5 second countdown, events every 15s, score may go negative,
    /// play carries on past the win score and the window stays open.
    /// Only the shorten, multiball and speed-up events exist here.
    pub fn countdown_variant() -> Self {
        Self {
            start_gate: StartGate::Countdown(Params::COUNTDOWN),
            event_interval: Params::EVENT_INTERVAL_COUNTDOWN,
            clamp_score: false,
            auto_close_delay: None,
            freeze_on_win: false,
            enabled_events: vec![
                UnfairEvent::ShortenPaddle,
                UnfairEvent::MultiplyBall,
                UnfairEvent::SpeedUpBall,
            ],
            miss_messages: vec![NOOB],
            ..Self::base()
        }
    }

    /// Variant B: any key starts play, events every 20s, score floors at 0,
    /// session closes 5s after a win
    pub fn key_start_variant() -> Self {
        Self::base()
    }

    /// Get X center for a paddle
    pub fn paddle_x(&self, side: PaddleSide) -> f32 {
        let offset = self.paddle_width / 2.0 + self.paddle_inset;
        match side {
            PaddleSide::Left => offset,
            PaddleSide::Right => self.field_width - offset,
        }
    }

    /// Clamp paddle center Y so a paddle of `height` stays on screen
    pub fn clamp_paddle_y(&self, y: f32, height: f32) -> f32 {
        let half_height = height / 2.0;
        y.clamp(half_height, self.field_height - half_height)
    }

    /// Center of the field, where balls spawn and paddles start
    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(self.field_width / 2.0, self.field_height / 2.0)
    }
}
