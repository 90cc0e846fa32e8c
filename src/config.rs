//! Compile-time configuration for JoyBuzz
//! RP2040 joystick + button alarm with a buzzer output

use embassy_time::Duration;

use crate::signal::SignalPolicy;

// ===================================================================
// GPIO Pin Assignments - Raspberry Pi Pico
// ===================================================================

pub const ADC_VERTICAL_PIN: u8 = 26; // ADC0 - joystick VRY
pub const ADC_HORIZONTAL_PIN: u8 = 27; // ADC1 - joystick VRX
pub const BUTTON_PIN: u8 = 22; // Joystick switch (SW), pull-up, low = pressed
pub const BUZZER_PIN: u8 = 21; // Buzzer, starts low

// ===================================================================
// Task Timing
// ===================================================================

pub const AXIS_SAMPLE_PERIOD_MS: u64 = 100; // Joystick read every 100 ms
pub const BUTTON_POLL_PERIOD_MS: u64 = 50; // Button poll every 50 ms
pub const BUZZER_ON_MS: u64 = 100; // Buzzer held on
pub const BUZZER_OFF_MS: u64 = 50; // Silence before the next pulse

pub const AXIS_SAMPLE_PERIOD: Duration = Duration::from_millis(AXIS_SAMPLE_PERIOD_MS);
pub const BUTTON_POLL_PERIOD: Duration = Duration::from_millis(BUTTON_POLL_PERIOD_MS);
pub const BUZZER_ON: Duration = Duration::from_millis(BUZZER_ON_MS);
pub const BUZZER_OFF: Duration = Duration::from_millis(BUZZER_OFF_MS);

// ===================================================================
// ADC Alarm Thresholds
// ===================================================================

pub const ADC_VOLTAGE_REF: f32 = 3.3;
pub const ADC_ALARM_VOLTAGE: f32 = 3.0;
pub const ADC_RANGE: u16 = 4096; // 12-bit converter
pub const ADC_MAX_SAMPLE: u16 = ADC_RANGE - 1;

/// Upper alarm bound, (3.0 / 3.3) * 4096 truncated: 3723
pub const ADC_ALARM_HIGH: u16 = ((ADC_ALARM_VOLTAGE / ADC_VOLTAGE_REF) * ADC_RANGE as f32) as u16;

/// Lower alarm bound, the complement of the upper one: 373
pub const ADC_ALARM_LOW: u16 = ADC_RANGE - ADC_ALARM_HIGH;

// ===================================================================
// Synchronization Sizing
// ===================================================================

pub const QUEUE_CAPACITY: usize = 10; // Messages buffered between producers and dispatcher
pub const BUZZER_SIGNAL_MAX: u32 = 2; // Counting signal ceiling
pub const BUZZER_SIGNAL_POLICY: SignalPolicy = SignalPolicy::DropExcess;

/// Longest console line the dispatcher formats
pub const LINE_CAPACITY: usize = 48;

// ===================================================================
// Task Stack Budgets (words)
// ===================================================================

pub const JOYSTICK_STACK_WORDS: u32 = 256;
pub const BUTTON_STACK_WORDS: u32 = 256;
pub const PROCESS_STACK_WORDS: u32 = 512;
pub const BUZZER_STACK_WORDS: u32 = 256;
