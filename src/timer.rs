// src/timer.rs
use std::time::Duration;

const ONE_SECOND: Duration = Duration::from_secs(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerState {
    Idle,
    Running,
    Expired,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Urgency {
    Normal,
    Warning,
    Danger,
}

/// Señal de fin de tiempo. Solo se entrega una vez por arranque.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerExpired;

/// Cuenta atrás por pregunta, en segundos enteros.
///
/// No tiene hilo propio: quien la posee le pasa el tiempo transcurrido con
/// [`CountdownTimer::advance`] (en la app, el delta entre frames).
#[derive(Clone, Debug)]
pub struct CountdownTimer {
    duration: u32,
    time_left: u32,
    state: TimerState,
    carry: Duration,
}

impl CountdownTimer {
    pub fn new(duration: u32) -> Self {
        Self {
            duration,
            time_left: duration,
            state: TimerState::Idle,
            carry: Duration::ZERO,
        }
    }

    /// Temporizador nuevo ya en marcha.
    pub fn started(duration: u32) -> Self {
        let mut timer = Self::new(duration);
        timer.start(duration);
        timer
    }

    pub fn start(&mut self, duration: u32) {
        self.duration = duration;
        self.time_left = duration;
        self.state = TimerState::Running;
        self.carry = Duration::ZERO;
    }

    pub fn pause(&mut self) {
        if self.state == TimerState::Running {
            self.state = TimerState::Idle;
        }
        self.carry = Duration::ZERO;
    }

    /// Un segundo transcurrido.
    pub fn tick(&mut self) -> Option<TimerExpired> {
        if self.state != TimerState::Running {
            return None;
        }
        self.time_left = self.time_left.saturating_sub(1);
        if self.time_left == 0 {
            self.state = TimerState::Expired;
            self.carry = Duration::ZERO;
            return Some(TimerExpired);
        }
        None
    }

    /// Acumula tiempo real y ejecuta tantos ticks completos como quepan.
    pub fn advance(&mut self, elapsed: Duration) -> Option<TimerExpired> {
        if self.state != TimerState::Running {
            return None;
        }
        self.carry += elapsed;
        while self.carry >= ONE_SECOND {
            self.carry -= ONE_SECOND;
            if let Some(expired) = self.tick() {
                return Some(expired);
            }
        }
        None
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    /// `M:SS`
    pub fn formatted(&self) -> String {
        format_time(self.time_left)
    }

    pub fn percentage(&self) -> f32 {
        if self.duration == 0 {
            return 0.0;
        }
        self.time_left as f32 / self.duration as f32 * 100.0
    }

    pub fn urgency(&self) -> Urgency {
        urgency_for(self.time_left)
    }
}

pub fn format_time(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

pub fn urgency_for(time_left: u32) -> Urgency {
    match time_left {
        0..=5 => Urgency::Danger,
        6..=10 => Urgency::Warning,
        _ => Urgency::Normal,
    }
}
