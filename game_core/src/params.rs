/// Game tuning parameters for Unfair Pong
///
/// Distances are in screen units (pixels of an 800x600 field), velocities in
/// units per frame, durations in seconds.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_INSET: f32 = 10.0; // gap between paddle and side wall
    pub const PADDLE_SPEED: f32 = 5.0; // player step per frame while a key is held
    pub const AI_STEP: f32 = 5.0; // AI tracking step per frame

    // Ball
    pub const BALL_SIZE: f32 = 20.0;
    pub const BALL_SPEED_INITIAL: f32 = 3.0; // per axis
    pub const BALL_SPEED_INCREMENT: f32 = 0.1; // per axis, per paddle hit

    // Score
    pub const WIN_SCORE: i32 = 10;

    // Timing
    pub const MESSAGE_DURATION: f32 = 2.0;
    pub const COUNTDOWN: f32 = 5.0;
    pub const EVENT_INTERVAL_COUNTDOWN: f32 = 15.0;
    pub const EVENT_INTERVAL_KEY_START: f32 = 20.0;
    pub const AUTO_CLOSE_DELAY: f32 = 5.0;
    pub const MAX_DT: f32 = 0.1; // Clamp to prevent large timer jumps

    // Unfair events
    pub const SHORTEN_DURATION: f32 = 10.0;
    pub const HIDE_DURATION: f32 = 10.0;
    pub const FREEZE_DURATION: f32 = 5.0;
    pub const SPEED_UP_FACTOR: f32 = 1.5;
    pub const EXTRA_BALLS: usize = 2;
}
