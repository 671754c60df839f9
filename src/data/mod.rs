pub mod modulation;
pub mod ticks;
pub mod time_range;
pub mod trace_look;
pub mod waveform;
